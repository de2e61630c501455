use crate::ports::{NameServerResolver, ScanReporter, ZoneTransferClient};
use ferrous_axfr_domain::{
    DomainError, DomainName, DomainReport, ScanEvent, TransferAttempt, TransferProtocol,
};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Drives every transfer attempt for a single domain.
///
/// The domain itself is tried first as a server (UDP, then TCP), then each
/// server from its NS RRset in resolver order. Attempts are independent: a
/// failure never skips the ones after it.
pub struct ProcessDomainUseCase {
    resolver: Arc<dyn NameServerResolver>,
    client: Arc<dyn ZoneTransferClient>,
}

impl ProcessDomainUseCase {
    pub fn new(
        resolver: Arc<dyn NameServerResolver>,
        client: Arc<dyn ZoneTransferClient>,
    ) -> Self {
        Self { resolver, client }
    }

    pub async fn execute(&self, domain: &DomainName, shutdown: &CancellationToken) -> DomainReport {
        self.run(ReportBuilder::new(domain, None), shutdown).await
    }

    /// Like [`execute`](Self::execute), but hands each event to `reporter`
    /// as soon as it is recorded.
    pub async fn execute_streaming(
        &self,
        domain: &DomainName,
        shutdown: &CancellationToken,
        reporter: &dyn ScanReporter,
    ) -> DomainReport {
        self.run(ReportBuilder::new(domain, Some(reporter)), shutdown)
            .await
    }

    async fn run(&self, mut report: ReportBuilder<'_>, shutdown: &CancellationToken) -> DomainReport {
        let domain = report.domain().clone();

        if !self
            .attempt_server(&mut report, domain.as_str(), shutdown)
            .await
        {
            return report.finish();
        }

        let lookup = tokio::select! {
            biased;
            _ = shutdown.cancelled() => {
                report.push(ScanEvent::Cancelled);
                return report.finish();
            }
            lookup = self.resolver.resolve_ns(&domain) => lookup,
        };

        match lookup {
            Ok(servers) => {
                debug!(domain = %domain, servers = servers.len(), "Name servers discovered");
                for server in servers {
                    if !self
                        .attempt_server(&mut report, server.as_str(), shutdown)
                        .await
                    {
                        return report.finish();
                    }
                }
            }
            Err(DomainError::NoNameServers(_)) => {
                info!(domain = %domain, "No NS records found");
                report.push(ScanEvent::NoNameServers);
            }
            Err(e) => {
                warn!(domain = %domain, error = %e, "NS lookup failed");
                let reason = match e {
                    DomainError::NameServerLookup(reason) => reason,
                    other => other.to_string(),
                };
                report.push(ScanEvent::NameServerLookupFailed { reason });
            }
        }

        report.finish()
    }

    /// Returns `false` once the run has been cancelled.
    async fn attempt_server(
        &self,
        report: &mut ReportBuilder<'_>,
        server: &str,
        shutdown: &CancellationToken,
    ) -> bool {
        for protocol in TransferProtocol::ATTEMPT_ORDER {
            if shutdown.is_cancelled() {
                report.push(ScanEvent::Cancelled);
                return false;
            }

            let attempt = TransferAttempt::new(server, report.domain().clone(), protocol);

            let outcome = tokio::select! {
                biased;
                _ = shutdown.cancelled() => {
                    report.push(ScanEvent::Cancelled);
                    return false;
                }
                outcome = self.client.transfer(&attempt) => outcome,
            };

            debug!(
                domain = %attempt.domain,
                server = %attempt.server,
                protocol = %attempt.protocol,
                success = outcome.is_success(),
                "Transfer attempt finished"
            );

            report.push(ScanEvent::TransferAttempted { attempt, outcome });
        }

        true
    }
}

/// Accumulates a [`DomainReport`], forwarding each event to an optional
/// live reporter first.
struct ReportBuilder<'a> {
    report: DomainReport,
    observer: Option<&'a dyn ScanReporter>,
}

impl<'a> ReportBuilder<'a> {
    fn new(domain: &DomainName, observer: Option<&'a dyn ScanReporter>) -> Self {
        Self {
            report: DomainReport::new(domain.clone()),
            observer,
        }
    }

    fn domain(&self) -> &DomainName {
        &self.report.domain
    }

    fn push(&mut self, event: ScanEvent) {
        if let Some(observer) = self.observer {
            observer.event_recorded(&self.report.domain, &event);
        }
        self.report.push(event);
    }

    fn finish(self) -> DomainReport {
        self.report
    }
}
