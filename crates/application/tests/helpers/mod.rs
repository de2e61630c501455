#![allow(dead_code)]

mod builders;

pub use builders::{domain, single_record_zone};
pub use mock_ports::{
    MockDomainListReader, MockNameServerResolver, MockZoneTransferClient, RecordingReporter,
};
