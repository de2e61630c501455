use crate::domain_name::DomainName;
use crate::transfer::{TransferAttempt, TransferOutcome};

/// Something observable that happened while processing one domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanEvent {
    TransferAttempted {
        attempt: TransferAttempt,
        outcome: TransferOutcome,
    },
    NoNameServers,
    NameServerLookupFailed {
        reason: String,
    },
    Cancelled,
}

/// Everything that happened for one domain, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainReport {
    pub domain: DomainName,
    pub events: Vec<ScanEvent>,
}

impl DomainReport {
    pub fn new(domain: DomainName) -> Self {
        Self {
            domain,
            events: Vec::new(),
        }
    }

    pub fn push(&mut self, event: ScanEvent) {
        self.events.push(event);
    }

    pub fn attempts(&self) -> impl Iterator<Item = (&TransferAttempt, &TransferOutcome)> {
        self.events.iter().filter_map(|event| match event {
            ScanEvent::TransferAttempted { attempt, outcome } => Some((attempt, outcome)),
            _ => None,
        })
    }

    pub fn attempt_count(&self) -> usize {
        self.attempts().count()
    }

    pub fn successful_transfers(&self) -> usize {
        self.attempts()
            .filter(|(_, outcome)| outcome.is_success())
            .count()
    }

    pub fn was_cancelled(&self) -> bool {
        self.events
            .iter()
            .any(|event| matches!(event, ScanEvent::Cancelled))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanSummary {
    pub domains: usize,
    pub attempts: usize,
    pub successful_transfers: usize,
    pub cancelled: bool,
}

impl ScanSummary {
    pub fn record(&mut self, report: &DomainReport) {
        self.domains += 1;
        self.attempts += report.attempt_count();
        self.successful_transfers += report.successful_transfers();
        self.cancelled |= report.was_cancelled();
    }
}
