mod domain_list_reader;
mod name_server_resolver;
mod scan_reporter;
mod zone_transfer_client;

pub use domain_list_reader::DomainListReader;
pub use name_server_resolver::NameServerResolver;
pub use scan_reporter::ScanReporter;
pub use zone_transfer_client::ZoneTransferClient;
