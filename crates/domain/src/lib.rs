//! Ferrous AXFR Domain Layer
pub mod config;
pub mod domain_name;
pub mod errors;
pub mod name_server;
pub mod scan_report;
pub mod transfer;
pub mod zone;

pub use config::{CliOverrides, Config, ConfigError};
pub use domain_name::DomainName;
pub use errors::{DomainError, TransferError};
pub use name_server::NameServer;
pub use scan_report::{DomainReport, ScanEvent, ScanSummary};
pub use transfer::{TransferAttempt, TransferOutcome, TransferProtocol};
pub use zone::{ZoneNode, ZoneRecord, ZoneSnapshot};
