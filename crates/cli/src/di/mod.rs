use crate::output::ConsoleReporter;
use ferrous_axfr_application::use_cases::{
    LoadDomainsUseCase, ProcessDomainUseCase, ScanDomainsUseCase,
};
use ferrous_axfr_domain::Config;
use ferrous_axfr_infrastructure::dns::{HickoryNameServerResolver, HickoryZoneTransferClient};
use ferrous_axfr_infrastructure::input::FileDomainListReader;
use std::sync::Arc;

pub struct Services {
    pub load_domains: Arc<LoadDomainsUseCase>,
    pub scan_domains: Arc<ScanDomainsUseCase>,
}

impl Services {
    pub fn new(config: &Config) -> Self {
        let reader = Arc::new(FileDomainListReader::new());
        let resolver = Arc::new(HickoryNameServerResolver::from_config(&config.resolver));
        let client = Arc::new(HickoryZoneTransferClient::new(&config.transfer));
        let reporter = Arc::new(ConsoleReporter::new());

        let process_domain = Arc::new(ProcessDomainUseCase::new(resolver, client));

        Self {
            load_domains: Arc::new(LoadDomainsUseCase::new(reader)),
            scan_domains: Arc::new(ScanDomainsUseCase::new(
                process_domain,
                reporter,
                config.scan.concurrency,
            )),
        }
    }
}
