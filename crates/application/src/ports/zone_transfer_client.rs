use async_trait::async_trait;
use ferrous_axfr_domain::{TransferAttempt, TransferOutcome};

#[async_trait]
pub trait ZoneTransferClient: Send + Sync {
    /// Performs one AXFR attempt. Every failure is folded into
    /// `TransferOutcome::Failure`.
    async fn transfer(&self, attempt: &TransferAttempt) -> TransferOutcome;
}
