use ferrous_axfr_domain::{DomainName, ZoneRecord, ZoneSnapshot};

pub fn domain(name: &str) -> DomainName {
    DomainName::parse(name).unwrap()
}

pub fn single_record_zone(origin: &str, owner: &str, address: &str) -> ZoneSnapshot {
    ZoneSnapshot::from_records(
        format!("{}.", origin.trim_end_matches('.')),
        vec![ZoneRecord::new(
            format!("{}.{}.", owner, origin.trim_end_matches('.')),
            3600,
            "IN",
            "A",
            address,
        )],
    )
}
