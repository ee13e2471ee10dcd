#![allow(dead_code)]

use hickory_proto::op::{Message, MessageType, OpCode};
use hickory_proto::rr::rdata::{A, AAAA, CNAME, TXT};
use hickory_proto::rr::{Name, RData, Record};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

/// Serialize a response message carrying the given answer records.
pub fn response_with_answers(answers: Vec<Record>) -> Vec<u8> {
    let mut message = Message::new(0x1234, MessageType::Response, OpCode::Query);
    message.metadata.recursion_desired = true;
    message.metadata.recursion_available = true;
    for answer in answers {
        message.add_answer(answer);
    }

    let mut buf = Vec::with_capacity(512);
    let mut encoder = BinEncoder::new(&mut buf);
    message.emit(&mut encoder).expect("response should encode");
    buf
}

fn owner(hostname: &str) -> Name {
    Name::from_str(hostname).expect("test hostname should parse")
}

/// Response with one A record per (address, ttl) pair.
pub fn a_response(hostname: &str, records: &[(&str, u32)]) -> Vec<u8> {
    let answers = records
        .iter()
        .map(|(address, ttl)| {
            let ip: Ipv4Addr = address.parse().expect("test address should parse");
            Record::from_rdata(owner(hostname), *ttl, RData::A(A(ip)))
        })
        .collect();
    response_with_answers(answers)
}

/// Response with one AAAA record per (address, ttl) pair.
pub fn aaaa_response(hostname: &str, records: &[(&str, u32)]) -> Vec<u8> {
    let answers = records
        .iter()
        .map(|(address, ttl)| {
            let ip: Ipv6Addr = address.parse().expect("test address should parse");
            Record::from_rdata(owner(hostname), *ttl, RData::AAAA(AAAA(ip)))
        })
        .collect();
    response_with_answers(answers)
}

/// Response with one TXT record per (text, ttl) pair.
pub fn txt_response(hostname: &str, records: &[(&str, u32)]) -> Vec<u8> {
    let answers = records
        .iter()
        .map(|(text, ttl)| {
            Record::from_rdata(
                owner(hostname),
                *ttl,
                RData::TXT(TXT::new(vec![text.to_string()])),
            )
        })
        .collect();
    response_with_answers(answers)
}

/// Response with a CNAME followed by an A record, the shape a recursive
/// upstream returns for aliased hosts.
pub fn cname_then_a_response(hostname: &str, canonical: &str, address: &str, ttl: u32) -> Vec<u8> {
    let ip: Ipv4Addr = address.parse().expect("test address should parse");
    response_with_answers(vec![
        Record::from_rdata(
            owner(hostname),
            ttl,
            RData::CNAME(CNAME(owner(canonical))),
        ),
        Record::from_rdata(owner(canonical), ttl, RData::A(A(ip))),
    ])
}

/// NOERROR response with an empty answer section.
pub fn empty_response() -> Vec<u8> {
    response_with_answers(vec![])
}
