use super::dns_record::RecordType;

/// DNS question (hostname + record type), constructed once per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub hostname: String,
    pub record_type: RecordType,
}

impl Question {
    pub fn new(hostname: impl Into<String>, record_type: RecordType) -> Self {
        Self {
            hostname: hostname.into(),
            record_type,
        }
    }
}
