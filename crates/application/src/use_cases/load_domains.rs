use crate::ports::DomainListReader;
use ferrous_axfr_domain::{DomainError, DomainName};
use std::sync::Arc;
use tracing::debug;

/// Reads the candidate list and keeps the lines that are valid domain names.
///
/// Lines are trimmed before validation; blank and invalid lines are dropped
/// without being reported.
pub struct LoadDomainsUseCase {
    reader: Arc<dyn DomainListReader>,
}

impl LoadDomainsUseCase {
    pub fn new(reader: Arc<dyn DomainListReader>) -> Self {
        Self { reader }
    }

    pub async fn execute(&self, source: &str) -> Result<Vec<DomainName>, DomainError> {
        let lines = self.reader.read_lines(source).await?;
        let total = lines.len();

        let domains: Vec<DomainName> = lines
            .iter()
            .filter_map(|line| DomainName::parse(line.trim()).ok())
            .collect();

        debug!(
            source,
            total,
            accepted = domains.len(),
            dropped = total - domains.len(),
            "Domain list loaded"
        );

        Ok(domains)
    }
}
