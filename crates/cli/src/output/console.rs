use ferrous_axfr_application::ports::ScanReporter;
use ferrous_axfr_domain::{DomainName, DomainReport, ScanEvent, TransferOutcome};
use std::fmt::Write as _;
use std::io::Write;
use tracing::warn;

/// Prints scan output to stdout.
///
/// Streamed domains are printed line by line as events arrive. Buffered
/// reports go out in a single write so they never interleave.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn new() -> Self {
        Self
    }

    fn emit(&self, domain: &DomainName, rendered: &str) {
        let mut stdout = std::io::stdout().lock();
        if let Err(e) = stdout
            .write_all(rendered.as_bytes())
            .and_then(|_| stdout.flush())
        {
            warn!(domain = %domain, error = %e, "Failed to write report");
        }
    }
}

impl ScanReporter for ConsoleReporter {
    fn domain_started(&self, domain: &DomainName) {
        self.emit(domain, &render_header(domain));
    }

    fn event_recorded(&self, domain: &DomainName, event: &ScanEvent) {
        self.emit(domain, &render_event(domain, event));
    }

    fn domain_finished(&self, report: &DomainReport, streamed: bool) {
        if !streamed {
            self.emit(&report.domain, &render_report(report));
        }
    }
}

pub fn render_header(domain: &DomainName) -> String {
    format!("Processing domain: {}\n", domain)
}

pub fn render_event(domain: &DomainName, event: &ScanEvent) -> String {
    let mut out = String::new();
    match event {
        ScanEvent::TransferAttempted { attempt, outcome } => match outcome {
            TransferOutcome::Success(zone) => {
                let _ = writeln!(
                    out,
                    "AXFR successful for {} with server {} using {}",
                    domain, attempt.server, attempt.protocol
                );
                for line in zone.to_text() {
                    let _ = writeln!(out, "{}", line);
                }
            }
            TransferOutcome::Failure(error) => {
                let _ = writeln!(
                    out,
                    "AXFR failed for {} with server {} using {}: {}",
                    domain, attempt.server, attempt.protocol, error
                );
            }
        },
        ScanEvent::NoNameServers => {
            let _ = writeln!(
                out,
                "No NS records found for {}. AXFR attempts were made on the base domain.",
                domain
            );
        }
        ScanEvent::NameServerLookupFailed { reason } => {
            let _ = writeln!(out, "NS lookup failed for {}: {}", domain, reason);
        }
        ScanEvent::Cancelled => {
            let _ = writeln!(out, "Scan interrupted while processing {}", domain);
        }
    }
    out
}

pub fn render_report(report: &DomainReport) -> String {
    let mut out = render_header(&report.domain);
    for event in &report.events {
        out.push_str(&render_event(&report.domain, event));
    }
    out
}
