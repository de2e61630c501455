use super::{bounded, map_io_error};
use ferrous_axfr_domain::TransferError;
use std::io;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::debug;

/// TCP transport for AXFR (RFC 5936 §4.2, RFC 1035 §4.2.2)
///
/// One connection carries one query and the whole stream of response
/// messages, each framed by a two-byte length prefix.
pub struct TcpTransport {
    server_addr: SocketAddr,
}

impl TcpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }

    pub async fn connect(&self, timeout: Duration) -> Result<TcpXfrStream, TransferError> {
        let stream = bounded(self.server_addr, timeout, TcpStream::connect(self.server_addr)).await?;

        stream
            .set_nodelay(true)
            .map_err(|e| map_io_error(self.server_addr, e))?;

        debug!(server = %self.server_addr, "TCP connection established");

        Ok(TcpXfrStream {
            stream,
            server_addr: self.server_addr,
            timeout,
        })
    }
}

/// An open transfer connection. Every read and write is bounded by the
/// timeout the connection was opened with.
pub struct TcpXfrStream {
    stream: TcpStream,
    server_addr: SocketAddr,
    timeout: Duration,
}

impl TcpXfrStream {
    pub async fn send(&mut self, message_bytes: &[u8]) -> Result<(), TransferError> {
        bounded(
            self.server_addr,
            self.timeout,
            send_with_length_prefix(&mut self.stream, message_bytes),
        )
        .await?;

        debug!(
            server = %self.server_addr,
            message_len = message_bytes.len(),
            "TCP AXFR query sent"
        );
        Ok(())
    }

    /// Next framed message, or `None` when the server closed the connection
    /// cleanly between messages.
    pub async fn next_message(&mut self) -> Result<Option<Vec<u8>>, TransferError> {
        let message = bounded(
            self.server_addr,
            self.timeout,
            read_with_length_prefix(&mut self.stream),
        )
        .await?;

        if let Some(bytes) = &message {
            debug!(
                server = %self.server_addr,
                response_len = bytes.len(),
                "TCP AXFR message received"
            );
        }
        Ok(message)
    }
}

pub(crate) async fn send_with_length_prefix<S>(
    stream: &mut S,
    message_bytes: &[u8],
) -> io::Result<()>
where
    S: AsyncWriteExt + Unpin,
{
    let length = u16::try_from(message_bytes.len()).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("message of {} bytes does not fit a TCP frame", message_bytes.len()),
        )
    })?;

    stream.write_all(&length.to_be_bytes()).await?;
    stream.write_all(message_bytes).await?;
    stream.flush().await
}

pub(crate) async fn read_with_length_prefix<S>(stream: &mut S) -> io::Result<Option<Vec<u8>>>
where
    S: AsyncReadExt + Unpin,
{
    let mut len_buf = [0u8; 2];
    if stream.read(&mut len_buf[..1]).await? == 0 {
        return Ok(None);
    }
    stream.read_exact(&mut len_buf[1..]).await?;

    let message_len = u16::from_be_bytes(len_buf) as usize;
    let mut message = vec![0u8; message_len];
    stream.read_exact(&mut message).await?;

    Ok(Some(message))
}
