use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name, RecordType as WireRecordType};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use hushdns_domain::{Question, RecordType, ResolveError};
use std::str::FromStr;

/// Builds DNS query messages and RFC 8484 GET resources.
pub struct MessageBuilder;

impl MessageBuilder {
    /// Build the request resource `{endpoint}?dns={base64url(wire)}`.
    pub fn build_resource(endpoint: &str, question: &Question) -> Result<String, ResolveError> {
        let wire = Self::build_query(question)?;
        Ok(format!("{}?dns={}", endpoint, URL_SAFE_NO_PAD.encode(wire)))
    }

    /// Serialize a standard recursive query to wire format bytes.
    ///
    /// Transaction id is drawn from [1, 65534]; recursion-desired is set;
    /// the message carries exactly one IN-class question.
    pub fn build_query(question: &Question) -> Result<Vec<u8>, ResolveError> {
        let name = Name::from_str(&question.hostname).map_err(|e| {
            ResolveError::InvalidHostname(format!("'{}': {}", question.hostname, e))
        })?;

        let mut query = Query::new();
        query.set_name(name);
        query.set_query_type(to_wire_type(question.record_type));
        query.set_query_class(DNSClass::IN);

        let mut message = Message::new(
            fastrand::u16(1..=65534),
            MessageType::Query,
            OpCode::Query,
        );
        message.metadata.recursion_desired = true;
        message.add_query(query);

        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);
        message.emit(&mut encoder).map_err(|e| {
            ResolveError::InvalidHostname(format!(
                "'{}' did not serialize: {}",
                question.hostname, e
            ))
        })?;

        Ok(buf)
    }
}

/// Map a domain record type onto its wire-format counterpart.
pub fn to_wire_type(record_type: RecordType) -> WireRecordType {
    match record_type {
        RecordType::A => WireRecordType::A,
        RecordType::AAAA => WireRecordType::AAAA,
        RecordType::TXT => WireRecordType::TXT,
    }
}
