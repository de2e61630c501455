use ferrous_axfr_domain::{DomainName, DomainReport, ScanEvent};

/// Receives scan output.
///
/// When domains run one at a time the reporter sees each domain live:
/// `domain_started`, then every event as it is recorded, then
/// `domain_finished` with `streamed` set. Concurrent scans only deliver
/// `domain_finished`, with `streamed` unset and the full report attached.
pub trait ScanReporter: Send + Sync {
    fn domain_started(&self, domain: &DomainName);

    fn event_recorded(&self, domain: &DomainName, event: &ScanEvent);

    /// Output for one unstreamed report must not interleave with another's.
    fn domain_finished(&self, report: &DomainReport, streamed: bool);
}
