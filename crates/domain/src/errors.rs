use crate::dns_record::RecordType;
use thiserror::Error;

/// Resolution error taxonomy.
///
/// Only `UnsupportedRecordType`, `Cancelled` and `ResolutionFailed` can
/// escape a `resolve` call. The remaining variants describe a single
/// endpoint attempt; the failover loop logs and absorbs them.
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("record type {0} is not supported")]
    UnsupportedRecordType(String),

    #[error("response carried no answers")]
    NoAnswers,

    #[error("query cancelled")]
    Cancelled,

    #[error("could not resolve {hostname} record {record_type}")]
    ResolutionFailed {
        hostname: String,
        record_type: RecordType,
    },

    #[error("invalid hostname: {0}")]
    InvalidHostname(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("invalid DNS response: {0}")]
    InvalidResponse(String),
}
