pub mod load_domains;
pub mod process_domain;
pub mod scan_domains;

pub use load_domains::LoadDomainsUseCase;
pub use process_domain::ProcessDomainUseCase;
pub use scan_domains::ScanDomainsUseCase;
