use super::{MessageBuilder, ZoneCollector};
use crate::dns::transport::{resolve_server_addr, TcpTransport, UdpTransport};
use async_trait::async_trait;
use ferrous_axfr_application::ports::ZoneTransferClient;
use ferrous_axfr_domain::config::TransferConfig;
use ferrous_axfr_domain::{
    TransferAttempt, TransferError, TransferOutcome, TransferProtocol, ZoneSnapshot,
};
use hickory_proto::op::Message;
use std::net::SocketAddr;
use std::time::Duration;
use tracing::debug;

/// Performs AXFR attempts against arbitrary servers with `hickory-proto`
/// message handling and plain tokio sockets.
///
/// Each network operation is bounded by `timeout`; the attempt as a whole
/// is bounded by `max_duration`.
pub struct HickoryZoneTransferClient {
    port: u16,
    timeout: Duration,
    max_duration: Duration,
}

impl HickoryZoneTransferClient {
    pub fn new(config: &TransferConfig) -> Self {
        Self {
            port: config.port,
            timeout: config.timeout(),
            max_duration: config.max_duration(),
        }
    }

    async fn try_transfer(&self, attempt: &TransferAttempt) -> Result<ZoneSnapshot, TransferError> {
        let zone = MessageBuilder::zone_name(&attempt.domain)?;
        let server_addr = resolve_server_addr(&attempt.server, self.port, self.timeout).await?;
        let (id, query) = MessageBuilder::build_axfr(&zone)?;

        let mut collector = ZoneCollector::new(zone, id);
        match attempt.protocol {
            TransferProtocol::Udp => {
                self.transfer_over_udp(server_addr, &query, &mut collector)
                    .await?
            }
            TransferProtocol::Tcp => {
                self.transfer_over_tcp(server_addr, &query, &mut collector)
                    .await?
            }
        }

        collector.finish()
    }

    async fn transfer_over_udp(
        &self,
        server_addr: SocketAddr,
        query: &[u8],
        collector: &mut ZoneCollector,
    ) -> Result<(), TransferError> {
        let bytes = UdpTransport::new(server_addr)
            .exchange(query, self.timeout)
            .await?;
        let message = parse_message(&bytes)?;

        if message.truncated() {
            debug!(server = %server_addr, "UDP AXFR response truncated, retrying over TCP");
            return self.transfer_over_tcp(server_addr, query, collector).await;
        }

        collector.push_message(&message)
    }

    async fn transfer_over_tcp(
        &self,
        server_addr: SocketAddr,
        query: &[u8],
        collector: &mut ZoneCollector,
    ) -> Result<(), TransferError> {
        let mut stream = TcpTransport::new(server_addr).connect(self.timeout).await?;
        stream.send(query).await?;

        while !collector.is_complete() {
            match stream.next_message().await? {
                Some(bytes) => collector.push_message(&parse_message(&bytes)?)?,
                None => {
                    return Err(TransferError::ConnectionClosed {
                        server: server_addr.to_string(),
                    })
                }
            }
        }

        Ok(())
    }
}

fn parse_message(bytes: &[u8]) -> Result<Message, TransferError> {
    Message::from_vec(bytes).map_err(|e| TransferError::MalformedResponse(e.to_string()))
}

#[async_trait]
impl ZoneTransferClient for HickoryZoneTransferClient {
    async fn transfer(&self, attempt: &TransferAttempt) -> TransferOutcome {
        let result = match tokio::time::timeout(self.max_duration, self.try_transfer(attempt)).await
        {
            Ok(result) => result,
            Err(_) => Err(TransferError::DeadlineExceeded {
                server: attempt.server.to_string(),
                limit_ms: self.max_duration.as_millis() as u64,
            }),
        };

        match &result {
            Ok(zone) => debug!(
                domain = %attempt.domain,
                server = %attempt.server,
                protocol = %attempt.protocol,
                records = zone.record_count(),
                "Zone transfer succeeded"
            ),
            Err(e) => debug!(
                domain = %attempt.domain,
                server = %attempt.server,
                protocol = %attempt.protocol,
                error = %e,
                "Zone transfer failed"
            ),
        }

        result.into()
    }
}
