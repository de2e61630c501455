use async_trait::async_trait;
use ferrous_axfr_domain::DomainError;

#[async_trait]
pub trait DomainListReader: Send + Sync {
    /// Raw lines of the candidate list, untrimmed and unvalidated.
    async fn read_lines(&self, source: &str) -> Result<Vec<String>, DomainError>;
}
