use async_trait::async_trait;
use hushdns_domain::{RecordType, ResolveError};

/// Port for host name resolution.
///
/// Implemented by the infrastructure DoH resolver; consumed by use cases
/// that should not care how answers are obtained.
#[async_trait]
pub trait HostResolver: Send + Sync {
    /// Resolve `hostname` to the data strings of the given record type,
    /// in answer order.
    async fn resolve(
        &self,
        hostname: &str,
        record_type: RecordType,
    ) -> Result<Vec<String>, ResolveError>;
}
