use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("No NS records found for {0}")]
    NoNameServers(String),

    #[error("NS lookup failed: {0}")]
    NameServerLookup(String),

    #[error("The file {0} was not found")]
    InputFileNotFound(String),

    #[error("Unable to read {path}: {reason}")]
    InputFileUnreadable { path: String, reason: String },
}

/// Why a single AXFR attempt did not produce a zone.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransferError {
    #[error("invalid zone name {0}")]
    InvalidZoneName(String),

    #[error("unable to resolve server address {server}: {reason}")]
    AddressResolution { server: String, reason: String },

    #[error("timed out after {timeout_ms}ms waiting for {server}")]
    Timeout { server: String, timeout_ms: u64 },

    #[error("connection refused by {server}")]
    ConnectionRefused { server: String },

    #[error("connection to {server} closed before the transfer completed")]
    ConnectionClosed { server: String },

    #[error("network error talking to {server}: {reason}")]
    Network { server: String, reason: String },

    #[error("server answered {rcode}")]
    Rejected { rcode: String },

    #[error("response contained no records")]
    EmptyResponse,

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("first record is not the SOA of {zone}")]
    MissingSoa { zone: String },

    #[error("zone {zone} has no NS records at its apex")]
    MissingApexNs { zone: String },

    #[error("zone transfer ended before the closing SOA")]
    Incomplete,

    #[error("transfer from {server} did not finish within {limit_ms}ms")]
    DeadlineExceeded { server: String, limit_ms: u64 },
}
