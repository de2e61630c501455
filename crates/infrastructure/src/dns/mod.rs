pub mod name_servers;
pub mod transport;
pub mod xfr;

pub use name_servers::HickoryNameServerResolver;
pub use xfr::HickoryZoneTransferClient;
