//! UDP transport for AXFR (RFC 5936 §4.2)
//!
//! A transfer over UDP only works when the whole zone fits one datagram.
//! Responses with the TC bit set are handed back to the caller, which
//! retries over TCP.

use super::{bounded, map_io_error};
use ferrous_axfr_domain::TransferError;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::debug;

/// Largest datagram a UDP socket can deliver.
const MAX_UDP_MESSAGE_SIZE: usize = 65535;

pub struct UdpTransport {
    server_addr: SocketAddr,
}

impl UdpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }

    /// Sends one datagram and waits for one reply.
    ///
    /// The socket is connected to the server, so replies from any other
    /// source are dropped by the kernel and ICMP port-unreachable surfaces
    /// as a refused connection.
    pub async fn exchange(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<Vec<u8>, TransferError> {
        let bind_addr = if self.server_addr.is_ipv4() {
            SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0))
        } else {
            SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0))
        };

        let socket = UdpSocket::bind(bind_addr)
            .await
            .map_err(|e| map_io_error(self.server_addr, e))?;
        socket
            .connect(self.server_addr)
            .await
            .map_err(|e| map_io_error(self.server_addr, e))?;

        let bytes_sent = bounded(self.server_addr, timeout, socket.send(message_bytes)).await?;

        debug!(server = %self.server_addr, bytes_sent, "UDP AXFR query sent");

        let mut recv_buf = vec![0u8; MAX_UDP_MESSAGE_SIZE];
        let bytes_received = bounded(self.server_addr, timeout, socket.recv(&mut recv_buf)).await?;
        recv_buf.truncate(bytes_received);

        debug!(server = %self.server_addr, bytes_received, "UDP AXFR response received");

        Ok(recv_buf)
    }
}
