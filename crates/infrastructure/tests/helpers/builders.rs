#![allow(dead_code)]
use hickory_proto::rr::rdata::{A, MX, NS, SOA, TXT};
use hickory_proto::rr::{Name, RData, Record};
use std::net::Ipv4Addr;

pub fn name(s: &str) -> Name {
    Name::from_ascii(s).unwrap()
}

/// Builds the record stream of an AXFR: opening SOA, body, closing SOA.
pub struct ZoneBuilder {
    origin: Name,
    serial: u32,
    body: Vec<Record>,
}

impl ZoneBuilder {
    pub fn new(origin: &str) -> Self {
        Self {
            origin: name(origin),
            serial: 2024010101,
            body: Vec::new(),
        }
    }

    pub fn serial(mut self, serial: u32) -> Self {
        self.serial = serial;
        self
    }

    pub fn a(mut self, owner: &str, addr: [u8; 4]) -> Self {
        self.body.push(Record::from_rdata(
            self.absolute(owner),
            300,
            RData::A(A(Ipv4Addr::from(addr))),
        ));
        self
    }

    pub fn ns(mut self, target: &str) -> Self {
        self.body.push(Record::from_rdata(
            self.origin.clone(),
            3600,
            RData::NS(NS(name(target))),
        ));
        self
    }

    pub fn mx(mut self, preference: u16, exchange: &str) -> Self {
        self.body.push(Record::from_rdata(
            self.origin.clone(),
            3600,
            RData::MX(MX::new(preference, name(exchange))),
        ));
        self
    }

    pub fn txt(mut self, owner: &str, text: &str) -> Self {
        self.body.push(Record::from_rdata(
            self.absolute(owner),
            300,
            RData::TXT(TXT::new(vec![text.to_string()])),
        ));
        self
    }

    pub fn soa(&self) -> Record {
        let mname = name("ns1.").append_domain(&self.origin).unwrap();
        let rname = name("hostmaster.").append_domain(&self.origin).unwrap();
        Record::from_rdata(
            self.origin.clone(),
            3600,
            RData::SOA(SOA::new(mname, rname, self.serial, 7200, 3600, 1_209_600, 300)),
        )
    }

    /// The full stream, SOA first and last.
    pub fn records(&self) -> Vec<Record> {
        let mut records = vec![self.soa()];
        records.extend(self.body.iter().cloned());
        records.push(self.soa());
        records
    }

    /// The stream without its closing SOA.
    pub fn unterminated(&self) -> Vec<Record> {
        let mut records = vec![self.soa()];
        records.extend(self.body.iter().cloned());
        records
    }

    fn absolute(&self, owner: &str) -> Name {
        if owner == "@" {
            self.origin.clone()
        } else {
            name(&format!("{}.", owner)).append_domain(&self.origin).unwrap()
        }
    }
}

/// Small zone in the spirit of the public zonetransfer.me test zone.
pub fn example_zone() -> ZoneBuilder {
    ZoneBuilder::new("example.test.")
        .ns("ns1.example.test.")
        .ns("ns2.example.test.")
        .mx(10, "mail.example.test.")
        .a("www", [192, 0, 2, 10])
        .a("mail", [192, 0, 2, 25])
        .txt("@", "v=spf1 -all")
}
