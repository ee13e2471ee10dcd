use crate::errors::ResolveError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Record types this resolver can query.
///
/// DoH carries any record type on the wire; this client speaks the three
/// its callers consume. Anything else is rejected before a query is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordType {
    A,
    AAAA,
    TXT,
}

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::AAAA => "AAAA",
            RecordType::TXT => "TXT",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "A" => Ok(RecordType::A),
            "AAAA" => Ok(RecordType::AAAA),
            "TXT" => Ok(RecordType::TXT),
            _ => Err(ResolveError::UnsupportedRecordType(s.to_string())),
        }
    }
}

/// Single answer from a DoH response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    /// Record data in presentation form (address text, canonical name,
    /// or TXT character strings).
    pub data: String,
    /// Time to live in seconds.
    pub ttl: u32,
}

/// Decoded answer section of one upstream response.
#[derive(Debug, Clone, Default)]
pub struct AnswerSet {
    pub answers: Vec<Answer>,
}

impl AnswerSet {
    /// Data strings in answer order.
    pub fn data(&self) -> Vec<String> {
        self.answers.iter().map(|a| a.data.clone()).collect()
    }

    /// Minimum TTL across the set; the cached set must not outlive its
    /// shortest-lived record. Zero when the set is empty.
    pub fn min_ttl(&self) -> u32 {
        self.answers.iter().map(|a| a.ttl).min().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}
