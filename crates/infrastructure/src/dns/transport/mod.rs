pub mod https;

pub use https::HttpsTransport;

use async_trait::async_trait;
use bytes::Bytes;
use hushdns_domain::ResolveError;
use tokio_util::sync::CancellationToken;

/// Expected content type for DNS-over-HTTPS exchanges (RFC 8484 §4.2.1)
pub const DNS_MESSAGE_CONTENT_TYPE: &str = "application/dns-message";

/// One abortable HTTP exchange per resolution attempt.
#[async_trait]
pub trait DohTransport: Send + Sync {
    /// Fetch `resource` (an RFC 8484 GET URL) and return the raw response
    /// body. The exchange races against `cancel` and loses with
    /// `ResolveError::Cancelled`.
    async fn fetch(
        &self,
        resource: &str,
        cancel: &CancellationToken,
    ) -> Result<Bytes, ResolveError>;
}
