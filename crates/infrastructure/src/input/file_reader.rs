use async_trait::async_trait;
use ferrous_axfr_application::ports::DomainListReader;
use ferrous_axfr_domain::DomainError;
use std::io::ErrorKind;
use tracing::debug;

/// Reads the domain list from a local text file.
///
/// Invalid UTF-8 is replaced rather than rejected; such lines simply fail
/// domain validation later.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileDomainListReader;

impl FileDomainListReader {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DomainListReader for FileDomainListReader {
    async fn read_lines(&self, source: &str) -> Result<Vec<String>, DomainError> {
        let bytes = tokio::fs::read(source).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => DomainError::InputFileNotFound(source.to_string()),
            _ => DomainError::InputFileUnreadable {
                path: source.to_string(),
                reason: e.to_string(),
            },
        })?;

        let lines: Vec<String> = String::from_utf8_lossy(&bytes)
            .lines()
            .map(str::to_string)
            .collect();

        debug!(path = %source, lines = lines.len(), "Domain list read");
        Ok(lines)
    }
}
