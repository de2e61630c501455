use crate::domain_name::DomainName;
use crate::errors::TransferError;
use crate::zone::ZoneSnapshot;
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransferProtocol {
    Udp,
    Tcp,
}

impl TransferProtocol {
    /// Order in which every target is tried.
    pub const ATTEMPT_ORDER: [TransferProtocol; 2] = [TransferProtocol::Udp, TransferProtocol::Tcp];

    pub fn as_str(&self) -> &'static str {
        match self {
            TransferProtocol::Udp => "UDP",
            TransferProtocol::Tcp => "TCP",
        }
    }
}

impl fmt::Display for TransferProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One AXFR request for `domain` sent to `server` over `protocol`.
///
/// `server` is used verbatim as the address: either an IP literal or a host
/// name, which is the domain itself for the base attempts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferAttempt {
    pub server: Arc<str>,
    pub domain: DomainName,
    pub protocol: TransferProtocol,
}

impl TransferAttempt {
    pub fn new(
        server: impl Into<Arc<str>>,
        domain: DomainName,
        protocol: TransferProtocol,
    ) -> Self {
        Self {
            server: server.into(),
            domain,
            protocol,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferOutcome {
    Success(ZoneSnapshot),
    Failure(TransferError),
}

impl TransferOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, TransferOutcome::Success(_))
    }

    pub fn snapshot(&self) -> Option<&ZoneSnapshot> {
        match self {
            TransferOutcome::Success(snapshot) => Some(snapshot),
            TransferOutcome::Failure(_) => None,
        }
    }
}

impl From<Result<ZoneSnapshot, TransferError>> for TransferOutcome {
    fn from(result: Result<ZoneSnapshot, TransferError>) -> Self {
        match result {
            Ok(snapshot) => TransferOutcome::Success(snapshot),
            Err(error) => TransferOutcome::Failure(error),
        }
    }
}
