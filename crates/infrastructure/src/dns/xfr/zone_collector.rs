use ferrous_axfr_domain::{TransferError, ZoneRecord, ZoneSnapshot};
use hickory_proto::op::{Message, MessageType, ResponseCode};
use hickory_proto::rr::{Name, RData, Record};

/// Assembles a zone from the response messages of one AXFR.
///
/// The first record must be the SOA of the requested zone; the transfer is
/// complete once the SOA appears again with the same serial. Records are
/// kept in wire order, and that closing SOA is not kept. A finished zone
/// must carry an NS RRset at its apex.
pub struct ZoneCollector {
    origin: Name,
    expected_id: u16,
    serial: Option<u32>,
    records: Vec<Record>,
    complete: bool,
}

impl ZoneCollector {
    pub fn new(origin: Name, expected_id: u16) -> Self {
        Self {
            origin,
            expected_id,
            serial: None,
            records: Vec::new(),
            complete: false,
        }
    }

    pub fn push_message(&mut self, message: &Message) -> Result<(), TransferError> {
        if self.complete {
            return Ok(());
        }

        if message.id() != self.expected_id {
            return Err(TransferError::MalformedResponse(format!(
                "response id {} does not match query id {}",
                message.id(),
                self.expected_id
            )));
        }

        if message.message_type() != MessageType::Response {
            return Err(TransferError::MalformedResponse(
                "message is not a response".to_string(),
            ));
        }

        let rcode = message.response_code();
        if rcode != ResponseCode::NoError {
            return Err(TransferError::Rejected {
                rcode: rcode_name(rcode),
            });
        }

        let answers = message.answers();
        if self.serial.is_none() && answers.is_empty() {
            return Err(TransferError::EmptyResponse);
        }

        for record in answers {
            match self.serial {
                None => {
                    self.serial = Some(self.opening_serial(record)?);
                    self.records.push(record.clone());
                }
                Some(serial) if self.is_closing_soa(record, serial) => {
                    self.complete = true;
                    break;
                }
                Some(_) => self.records.push(record.clone()),
            }
        }

        Ok(())
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn finish(self) -> Result<ZoneSnapshot, TransferError> {
        if !self.complete {
            return Err(TransferError::Incomplete);
        }

        let origin = self.origin.to_string();
        let zone =
            ZoneSnapshot::from_records(origin.as_str(), self.records.iter().map(to_zone_record));

        let has_apex_ns = zone.node(&origin).is_some_and(|apex| {
            apex.records()
                .iter()
                .any(|r| r.record_type.eq_ignore_ascii_case("NS"))
        });
        if !has_apex_ns {
            return Err(TransferError::MissingApexNs { zone: origin });
        }

        Ok(zone)
    }

    fn opening_serial(&self, record: &Record) -> Result<u32, TransferError> {
        match record.data() {
            RData::SOA(soa) if record.name() == &self.origin => Ok(soa.serial()),
            _ => Err(TransferError::MissingSoa {
                zone: self.origin.to_string(),
            }),
        }
    }

    fn is_closing_soa(&self, record: &Record, serial: u32) -> bool {
        matches!(record.data(), RData::SOA(soa) if soa.serial() == serial)
            && record.name() == &self.origin
    }
}

fn to_zone_record(record: &Record) -> ZoneRecord {
    ZoneRecord::new(
        record.name().to_string(),
        record.ttl(),
        record.dns_class().to_string(),
        record.record_type().to_string(),
        record.data().to_string(),
    )
}

pub fn rcode_name(rcode: ResponseCode) -> String {
    let name = match rcode {
        ResponseCode::NoError => "NOERROR",
        ResponseCode::FormErr => "FORMERR",
        ResponseCode::ServFail => "SERVFAIL",
        ResponseCode::NXDomain => "NXDOMAIN",
        ResponseCode::NotImp => "NOTIMP",
        ResponseCode::Refused => "REFUSED",
        ResponseCode::YXDomain => "YXDOMAIN",
        ResponseCode::YXRRSet => "YXRRSET",
        ResponseCode::NXRRSet => "NXRRSET",
        ResponseCode::NotAuth => "NOTAUTH",
        ResponseCode::NotZone => "NOTZONE",
        other => return format!("RCODE{}", u16::from(other)),
    };
    name.to_string()
}
