use super::{DohTransport, DNS_MESSAGE_CONTENT_TYPE};
use async_trait::async_trait;
use bytes::Bytes;
use hushdns_domain::ResolveError;
use std::sync::LazyLock;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Shared HTTP/2 client with connection pooling.
///
/// No total request timeout: cancellation is the caller's timeout policy.
static SHARED_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::Client::builder()
        .use_rustls_tls()
        .pool_max_idle_per_host(4)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
});

/// DNS-over-HTTPS transport (RFC 8484 GET form)
#[derive(Default)]
pub struct HttpsTransport;

impl HttpsTransport {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DohTransport for HttpsTransport {
    async fn fetch(
        &self,
        resource: &str,
        cancel: &CancellationToken,
    ) -> Result<Bytes, ResolveError> {
        debug!(resource_len = resource.len(), "sending DoH query");

        let exchange = async {
            let response = SHARED_CLIENT
                .get(resource)
                .header("Accept", DNS_MESSAGE_CONTENT_TYPE)
                .send()
                .await
                .map_err(|e| ResolveError::Transport(format!("request failed: {}", e)))?;

            let status = response.status();
            if !status.is_success() {
                return Err(ResolveError::Transport(format!(
                    "server returned HTTP {}: {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("Unknown")
                )));
            }

            response.bytes().await.map_err(|e| {
                ResolveError::Transport(format!("failed to read response body: {}", e))
            })
        };

        tokio::select! {
            _ = cancel.cancelled() => Err(ResolveError::Cancelled),
            result = exchange => {
                if let Ok(ref body) = result {
                    debug!(response_len = body.len(), "DoH response received");
                }
                result
            }
        }
    }
}
