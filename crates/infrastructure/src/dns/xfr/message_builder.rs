//! AXFR query construction using `hickory-proto`.

use ferrous_axfr_domain::{DomainName, TransferError};
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name, RecordType};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};

pub struct MessageBuilder;

impl MessageBuilder {
    /// Absolute zone name for `domain`.
    pub fn zone_name(domain: &DomainName) -> Result<Name, TransferError> {
        Name::from_ascii(domain.to_fqdn())
            .map_err(|e| TransferError::InvalidZoneName(format!("{}: {}", domain, e)))
    }

    /// Builds an AXFR query for `zone` and returns its random ID with the
    /// wire bytes. Recursion is not requested.
    pub fn build_axfr(zone: &Name) -> Result<(u16, Vec<u8>), TransferError> {
        let mut query = Query::query(zone.clone(), RecordType::AXFR);
        query.set_query_class(DNSClass::IN);

        let id = fastrand::u16(..);

        let mut message = Message::new();
        message
            .set_id(id)
            .set_message_type(MessageType::Query)
            .set_op_code(OpCode::Query)
            .set_recursion_desired(false)
            .add_query(query);

        let bytes = Self::serialize_message(&message)?;
        Ok((id, bytes))
    }

    fn serialize_message(message: &Message) -> Result<Vec<u8>, TransferError> {
        let mut buf = Vec::with_capacity(64);
        let mut encoder = BinEncoder::new(&mut buf);

        message.emit(&mut encoder).map_err(|e| {
            TransferError::MalformedResponse(format!("failed to serialize AXFR query: {}", e))
        })?;

        Ok(buf)
    }
}
