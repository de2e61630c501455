#![allow(dead_code)]
use hickory_proto::op::{Message, MessageType, OpCode, ResponseCode};
use hickory_proto::rr::rdata::NS;
use hickory_proto::rr::{Name, RData, Record, RecordType};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream, UdpSocket};
use tokio::sync::oneshot;

/// How the mock answers an AXFR query on one protocol.
#[derive(Clone)]
pub enum XfrBehavior {
    /// One response message per inner vec. Over UDP everything is flattened
    /// into a single datagram.
    Serve(Vec<Vec<Record>>),
    Rcode(ResponseCode),
    Garbage,
    Silent,
    /// UDP only: empty answer with the TC bit set.
    Truncated,
    /// Sends the messages, then closes the connection.
    CloseAfter(Vec<Vec<Record>>),
    /// TCP only: sends `opening`, then one message holding `filler` every
    /// `interval`, never closing the zone.
    Drip {
        opening: Vec<Record>,
        filler: Record,
        interval: Duration,
    },
}

/// AXFR server listening on UDP and TCP on the same loopback port.
pub struct MockXfrServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockXfrServer {
    pub async fn start(udp: XfrBehavior, tcp: XfrBehavior) -> Self {
        let (listener, socket) = bind_pair().await;
        let addr = listener.local_addr().unwrap();
        let udp = Arc::new(udp);
        let tcp = Arc::new(tcp);

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 4096];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            if let Some(reply) = Self::udp_reply(&buf[..len], &udp) {
                                let _ = socket.send_to(&reply, peer).await;
                            }
                        }
                    }
                    accepted = listener.accept() => {
                        if let Ok((stream, _)) = accepted {
                            tokio::spawn(Self::serve_tcp(stream, Arc::clone(&tcp)));
                        }
                    }
                }
            }
        });

        Self {
            addr,
            shutdown_tx: Some(shutdown_tx),
        }
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    fn udp_reply(query: &[u8], behavior: &XfrBehavior) -> Option<Vec<u8>> {
        let query = Message::from_vec(query).ok()?;
        match behavior {
            XfrBehavior::Serve(messages) | XfrBehavior::CloseAfter(messages) => {
                let mut response = response_to(&query);
                response.add_answers(messages.iter().flatten().cloned());
                response.to_vec().ok()
            }
            XfrBehavior::Rcode(rcode) => {
                let mut response = response_to(&query);
                response.set_response_code(*rcode);
                response.to_vec().ok()
            }
            XfrBehavior::Garbage => Some(vec![0xde, 0xad, 0xbe, 0xef]),
            XfrBehavior::Silent | XfrBehavior::Drip { .. } => None,
            XfrBehavior::Truncated => {
                let mut response = response_to(&query);
                response.set_truncated(true);
                response.to_vec().ok()
            }
        }
    }

    async fn serve_tcp(mut stream: TcpStream, behavior: Arc<XfrBehavior>) {
        let Some(query) = read_frame(&mut stream).await else {
            return;
        };
        let Ok(query) = Message::from_vec(&query) else {
            return;
        };

        match behavior.as_ref() {
            XfrBehavior::Serve(messages) => {
                for answers in messages {
                    let mut response = response_to(&query);
                    response.add_answers(answers.iter().cloned());
                    if write_frame(&mut stream, &response.to_vec().unwrap()).await.is_err() {
                        return;
                    }
                }
                // Keep the connection open until the client hangs up.
                let mut sink = [0u8; 1];
                let _ = stream.read(&mut sink).await;
            }
            XfrBehavior::CloseAfter(messages) => {
                for answers in messages {
                    let mut response = response_to(&query);
                    response.add_answers(answers.iter().cloned());
                    let _ = write_frame(&mut stream, &response.to_vec().unwrap()).await;
                }
            }
            XfrBehavior::Rcode(rcode) => {
                let mut response = response_to(&query);
                response.set_response_code(*rcode);
                let _ = write_frame(&mut stream, &response.to_vec().unwrap()).await;
            }
            XfrBehavior::Garbage => {
                let _ = write_frame(&mut stream, &[0xde, 0xad, 0xbe, 0xef]).await;
            }
            XfrBehavior::Drip {
                opening,
                filler,
                interval,
            } => {
                let mut response = response_to(&query);
                response.add_answers(opening.iter().cloned());
                if write_frame(&mut stream, &response.to_vec().unwrap()).await.is_err() {
                    return;
                }
                loop {
                    tokio::time::sleep(*interval).await;
                    let mut response = response_to(&query);
                    response.add_answer(filler.clone());
                    if write_frame(&mut stream, &response.to_vec().unwrap()).await.is_err() {
                        return;
                    }
                }
            }
            XfrBehavior::Silent | XfrBehavior::Truncated => {
                let mut sink = [0u8; 1];
                let _ = stream.read(&mut sink).await;
            }
        }
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockXfrServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

/// What the mock recursive resolver returns for an NS question.
#[derive(Clone)]
pub enum NsAnswer {
    Servers(Vec<String>),
    NxDomain,
    Silent,
}

/// UDP-only recursive resolver stand-in answering NS questions.
pub struct MockNsServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockNsServer {
    /// Keys are absolute names; unknown names get NXDOMAIN.
    pub async fn start(answers: HashMap<String, NsAnswer>) -> Self {
        let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let addr = socket.local_addr().unwrap();

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 4096];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            if let Some(reply) = Self::reply(&buf[..len], &answers) {
                                let _ = socket.send_to(&reply, peer).await;
                            }
                        }
                    }
                }
            }
        });

        Self {
            addr,
            shutdown_tx: Some(shutdown_tx),
        }
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    fn reply(query: &[u8], answers: &HashMap<String, NsAnswer>) -> Option<Vec<u8>> {
        let query = Message::from_vec(query).ok()?;
        let question = query.queries().first()?.clone();
        let qname = question.name().to_ascii().to_ascii_lowercase();

        let mut response = response_to(&query);
        response.set_recursion_available(true);

        match answers.get(&qname) {
            Some(NsAnswer::Servers(servers)) if question.query_type() == RecordType::NS => {
                response.add_answers(servers.iter().map(|server| {
                    Record::from_rdata(
                        question.name().clone(),
                        3600,
                        RData::NS(NS(Name::from_ascii(server).unwrap())),
                    )
                }));
            }
            Some(NsAnswer::Servers(_)) => {}
            Some(NsAnswer::Silent) => return None,
            Some(NsAnswer::NxDomain) | None => {
                response.set_response_code(ResponseCode::NXDomain);
            }
        }

        response.to_vec().ok()
    }
}

impl Drop for MockNsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

fn response_to(query: &Message) -> Message {
    let mut response = Message::new();
    response
        .set_id(query.id())
        .set_message_type(MessageType::Response)
        .set_op_code(OpCode::Query)
        .set_authoritative(true)
        .add_queries(query.queries().to_vec());
    response
}

async fn bind_pair() -> (TcpListener, UdpSocket) {
    for _ in 0..16 {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        if let Ok(socket) = UdpSocket::bind(addr).await {
            return (listener, socket);
        }
    }
    panic!("could not bind UDP and TCP on the same port");
}

async fn read_frame(stream: &mut TcpStream) -> Option<Vec<u8>> {
    let mut len_buf = [0u8; 2];
    stream.read_exact(&mut len_buf).await.ok()?;
    let mut message = vec![0u8; u16::from_be_bytes(len_buf) as usize];
    stream.read_exact(&mut message).await.ok()?;
    Some(message)
}

async fn write_frame(stream: &mut TcpStream, bytes: &[u8]) -> std::io::Result<()> {
    stream.write_all(&(bytes.len() as u16).to_be_bytes()).await?;
    stream.write_all(bytes).await?;
    stream.flush().await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_xfr_server_answers_udp() {
        let server = MockXfrServer::start(
            XfrBehavior::Rcode(ResponseCode::Refused),
            XfrBehavior::Silent,
        )
        .await;

        let client = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let mut query = Message::new();
        query.set_id(0x1234);
        client
            .send_to(&query.to_vec().unwrap(), server.addr())
            .await
            .unwrap();

        let mut buf = vec![0u8; 512];
        let (len, _) = client.recv_from(&mut buf).await.unwrap();
        let response = Message::from_vec(&buf[..len]).unwrap();

        assert_eq!(response.id(), 0x1234, "Transaction ID should match");
        assert_eq!(response.message_type(), MessageType::Response);
        assert_eq!(response.response_code(), ResponseCode::Refused);

        server.shutdown();
    }
}
