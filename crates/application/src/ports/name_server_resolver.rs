use async_trait::async_trait;
use ferrous_axfr_domain::{DomainError, DomainName, NameServer};

#[async_trait]
pub trait NameServerResolver: Send + Sync {
    /// NS targets for `domain`, in resolver order.
    ///
    /// NXDOMAIN and empty answers are reported as `DomainError::NoNameServers`;
    /// every other failure as `DomainError::NameServerLookup`.
    async fn resolve_ns(&self, domain: &DomainName) -> Result<Vec<NameServer>, DomainError>;
}
