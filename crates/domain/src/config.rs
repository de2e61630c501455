mod errors;
mod logging;
mod resolver;
mod root;
mod scan;
mod transfer;

pub use errors::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use resolver::NsLookupConfig;
pub use root::{CliOverrides, Config};
pub use scan::ScanConfig;
pub use transfer::TransferConfig;
