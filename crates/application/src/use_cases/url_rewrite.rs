use crate::ports::HostResolver;
use hushdns_domain::{RecordType, ResolveError};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::debug;
use url::{Host, Url};

/// Rewrites a URL so the request connects to a resolved literal IP instead
/// of the original host name.
///
/// Fail-open: when rewriting is disabled, the URL has no host, the host is
/// already an IP literal, or resolution fails for any reason, the input URL
/// is returned unchanged.
pub struct UrlRewriter {
    resolver: Arc<dyn HostResolver>,
    enabled: AtomicBool,
}

impl UrlRewriter {
    pub fn new(resolver: Arc<dyn HostResolver>) -> Self {
        Self {
            resolver,
            enabled: AtomicBool::new(true),
        }
    }

    /// When disabled, no cache lookup and no network call occurs.
    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    /// Substitute the host of `target` with a resolved IPv4 literal.
    pub async fn resolve_url(&self, target: &str) -> String {
        self.rewrite(target, RecordType::A)
            .await
            .unwrap_or_else(|| target.to_string())
    }

    /// Substitute the host of `target` with a resolved IPv6 literal
    /// (bracketed in the output).
    pub async fn resolve_url6(&self, target: &str) -> String {
        self.rewrite(target, RecordType::AAAA)
            .await
            .unwrap_or_else(|| target.to_string())
    }

    /// A-path convenience that skips URL handling altogether.
    pub async fn resolve_host(&self, hostname: &str) -> Result<Vec<String>, ResolveError> {
        self.resolver.resolve(hostname, RecordType::A).await
    }

    async fn rewrite(&self, target: &str, record_type: RecordType) -> Option<String> {
        if !self.is_enabled() {
            return None;
        }

        let mut url = Url::parse(target).ok()?;
        let host = match url.host() {
            Some(Host::Domain(domain)) => domain.to_string(),
            // Literal IPs pass through untouched, without consulting the
            // resolver.
            Some(Host::Ipv4(_)) | Some(Host::Ipv6(_)) | None => return None,
        };

        let answers = match self.resolver.resolve(&host, record_type).await {
            Ok(answers) => answers,
            Err(error) => {
                debug!(%host, %error, "resolution failed, keeping original URL");
                return None;
            }
        };

        let ip = last_ip_literal(&answers, record_type)?;
        url.set_ip_host(ip).ok()?;
        Some(url.to_string())
    }
}

/// Last entry in `answers` that is an address literal of the requested
/// family, scanning backwards.
fn last_ip_literal(answers: &[String], record_type: RecordType) -> Option<IpAddr> {
    answers.iter().rev().find_map(|data| match record_type {
        RecordType::A => data.parse::<Ipv4Addr>().ok().map(IpAddr::V4),
        RecordType::AAAA => data.parse::<Ipv6Addr>().ok().map(IpAddr::V6),
        RecordType::TXT => None,
    })
}
