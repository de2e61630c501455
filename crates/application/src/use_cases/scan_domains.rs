use super::ProcessDomainUseCase;
use crate::ports::ScanReporter;
use ferrous_axfr_domain::{DomainName, ScanSummary};
use futures::stream::{self, StreamExt};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Runs [`ProcessDomainUseCase`] over a whole domain list.
///
/// With a concurrency of 1 each domain's events are streamed to the reporter
/// as they happen. Otherwise up to `concurrency` domains are in flight and
/// reports are handed over in input order, one complete domain at a time.
pub struct ScanDomainsUseCase {
    process_domain: Arc<ProcessDomainUseCase>,
    reporter: Arc<dyn ScanReporter>,
    concurrency: usize,
}

impl ScanDomainsUseCase {
    pub fn new(
        process_domain: Arc<ProcessDomainUseCase>,
        reporter: Arc<dyn ScanReporter>,
        concurrency: usize,
    ) -> Self {
        Self {
            process_domain,
            reporter,
            concurrency: concurrency.max(1),
        }
    }

    pub async fn execute(
        &self,
        domains: Vec<DomainName>,
        shutdown: CancellationToken,
    ) -> ScanSummary {
        info!(
            domains = domains.len(),
            concurrency = self.concurrency,
            "Starting zone transfer scan"
        );

        let mut summary = if self.concurrency == 1 {
            self.run_sequential(domains, &shutdown).await
        } else {
            self.run_buffered(domains, &shutdown).await
        };
        summary.cancelled |= shutdown.is_cancelled();

        info!(
            domains = summary.domains,
            attempts = summary.attempts,
            successful_transfers = summary.successful_transfers,
            cancelled = summary.cancelled,
            "Zone transfer scan finished"
        );

        summary
    }

    async fn run_sequential(
        &self,
        domains: Vec<DomainName>,
        shutdown: &CancellationToken,
    ) -> ScanSummary {
        let mut summary = ScanSummary::default();
        for domain in domains {
            if shutdown.is_cancelled() {
                break;
            }
            self.reporter.domain_started(&domain);
            let report = self
                .process_domain
                .execute_streaming(&domain, shutdown, self.reporter.as_ref())
                .await;
            summary.record(&report);
            self.reporter.domain_finished(&report, true);
        }
        summary
    }

    async fn run_buffered(
        &self,
        domains: Vec<DomainName>,
        shutdown: &CancellationToken,
    ) -> ScanSummary {
        let process_domain = Arc::clone(&self.process_domain);
        let token = shutdown.clone();

        let mut reports = stream::iter(domains)
            .take_while(move |_| futures::future::ready(!token.is_cancelled()))
            .map(|domain| {
                let process_domain = Arc::clone(&process_domain);
                let shutdown = shutdown.clone();
                async move { process_domain.execute(&domain, &shutdown).await }
            })
            .buffered(self.concurrency);

        let mut summary = ScanSummary::default();
        while let Some(report) = reports.next().await {
            summary.record(&report);
            self.reporter.domain_finished(&report, false);
        }
        summary
    }
}
