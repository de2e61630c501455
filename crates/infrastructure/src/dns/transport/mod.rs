pub mod tcp;
pub mod udp;

use ferrous_axfr_domain::TransferError;
use std::future::Future;
use std::io::{self, ErrorKind};
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use tracing::debug;

pub use tcp::{TcpTransport, TcpXfrStream};
pub use udp::UdpTransport;

/// Maps a socket error onto the transfer failure it represents.
pub(crate) fn map_io_error(server: SocketAddr, error: io::Error) -> TransferError {
    match error.kind() {
        ErrorKind::ConnectionRefused => TransferError::ConnectionRefused {
            server: server.to_string(),
        },
        ErrorKind::UnexpectedEof
        | ErrorKind::ConnectionReset
        | ErrorKind::ConnectionAborted
        | ErrorKind::BrokenPipe => TransferError::ConnectionClosed {
            server: server.to_string(),
        },
        _ => TransferError::Network {
            server: server.to_string(),
            reason: error.to_string(),
        },
    }
}

/// Runs one socket operation under `timeout`.
pub(crate) async fn bounded<T, F>(
    server: SocketAddr,
    timeout: Duration,
    operation: F,
) -> Result<T, TransferError>
where
    F: Future<Output = io::Result<T>>,
{
    tokio::time::timeout(timeout, operation)
        .await
        .map_err(|_| TransferError::Timeout {
            server: server.to_string(),
            timeout_ms: timeout.as_millis() as u64,
        })?
        .map_err(|e| map_io_error(server, e))
}

/// Turns a server designation into a socket address.
///
/// IP literals are used as-is; host names go through the system resolver,
/// bounded by `timeout`. An IPv4 address is preferred when the name has both
/// families.
pub async fn resolve_server_addr(
    server: &str,
    port: u16,
    timeout: Duration,
) -> Result<SocketAddr, TransferError> {
    let host = server.trim_end_matches('.');
    let literal = host.trim_start_matches('[').trim_end_matches(']');

    if let Ok(ip) = literal.parse::<IpAddr>() {
        return Ok(SocketAddr::new(ip, port));
    }

    if host.is_empty() {
        return Err(TransferError::AddressResolution {
            server: server.to_string(),
            reason: "empty host name".to_string(),
        });
    }

    let lookup = tokio::time::timeout(timeout, tokio::net::lookup_host((host, port)));
    let addrs: Vec<SocketAddr> = lookup
        .await
        .map_err(|_| TransferError::Timeout {
            server: server.to_string(),
            timeout_ms: timeout.as_millis() as u64,
        })?
        .map_err(|e| TransferError::AddressResolution {
            server: server.to_string(),
            reason: e.to_string(),
        })?
        .collect();

    let addr = addrs
        .iter()
        .find(|addr| addr.is_ipv4())
        .or_else(|| addrs.first())
        .copied()
        .ok_or_else(|| TransferError::AddressResolution {
            server: server.to_string(),
            reason: "no addresses found".to_string(),
        })?;

    debug!(server = %server, addr = %addr, "Server address resolved");
    Ok(addr)
}
