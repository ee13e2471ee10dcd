use crate::dns::cache::DnsCache;
use crate::dns::cancel::CancelRegistry;
use crate::dns::message::{MessageBuilder, ResponseParser};
use crate::dns::server_pool::ServerPool;
use crate::dns::transport::{DohTransport, HttpsTransport};
use async_trait::async_trait;
use hushdns_application::ports::HostResolver;
use hushdns_domain::{AnswerSet, Question, RecordType, ResolveError, ResolverConfig};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// DNS-over-HTTPS resolver.
///
/// Each lookup checks the cache, then walks a freshly shuffled snapshot of
/// the endpoint list, issuing one abortable exchange per endpoint until one
/// yields answers. Endpoint list, cache and cancellation registry are scoped
/// to this instance; independently constructed resolvers share nothing.
pub struct DohResolver {
    servers: ServerPool,
    cache: DnsCache,
    transport: Arc<dyn DohTransport>,
    cancellations: CancelRegistry,
}

impl DohResolver {
    pub fn new(config: ResolverConfig) -> Self {
        Self::with_transport(config, Arc::new(HttpsTransport::new()))
    }

    /// Construct with a custom transport.
    pub fn with_transport(config: ResolverConfig, transport: Arc<dyn DohTransport>) -> Self {
        Self {
            servers: ServerPool::new(config.servers),
            cache: DnsCache::new(config.max_cache_entries),
            transport,
            cancellations: CancelRegistry::new(),
        }
    }

    /// Replace the endpoint list wholesale.
    pub fn set_servers(&self, servers: Vec<String>) {
        self.servers.set_servers(servers);
    }

    /// Endpoints in configured order.
    pub fn get_servers(&self) -> Vec<String> {
        self.servers.get_servers()
    }

    /// Resolve `hostname` for the record type named by `rr_type`.
    ///
    /// Unknown mnemonics are rejected with `UnsupportedRecordType` before
    /// any cache lookup or network activity.
    pub async fn resolve(&self, hostname: &str, rr_type: &str) -> Result<Vec<String>, ResolveError> {
        match rr_type.parse::<RecordType>()? {
            RecordType::A => self.resolve4(hostname).await,
            RecordType::AAAA => self.resolve6(hostname).await,
            RecordType::TXT => self.resolve_txt(hostname).await,
        }
    }

    /// Resolve `hostname` into IPv4 addresses.
    pub async fn resolve4(&self, hostname: &str) -> Result<Vec<String>, ResolveError> {
        self.lookup(hostname, RecordType::A).await
    }

    /// Resolve `hostname` into IPv6 addresses.
    pub async fn resolve6(&self, hostname: &str) -> Result<Vec<String>, ResolveError> {
        self.lookup(hostname, RecordType::AAAA).await
    }

    /// Resolve `hostname` into TXT values (quote characters stripped).
    pub async fn resolve_txt(&self, hostname: &str) -> Result<Vec<String>, ResolveError> {
        self.lookup(hostname, RecordType::TXT).await
    }

    /// Signal every in-flight attempt on this resolver; returns without
    /// waiting for them to finish. Affected lookups surface `Cancelled`.
    pub fn cancel_all(&self) {
        self.cancellations.cancel_all();
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// The resolution algorithm: cache fast path, then shuffled failover.
    pub async fn lookup(
        &self,
        hostname: &str,
        record_type: RecordType,
    ) -> Result<Vec<String>, ResolveError> {
        if let Some(cached) = self.cache.get(hostname, record_type) {
            debug!(hostname, record_type = %record_type, "cache hit");
            return Ok(cached.as_ref().clone());
        }

        let question = Question::new(hostname, record_type);
        let mut cancelled = false;

        for server in self.servers.shuffled() {
            // The guard deregisters the token on every exit path of this
            // iteration: success, ordinary failure, or abort.
            let attempt = self.cancellations.register();

            match self.attempt(&server, &question, attempt.token()).await {
                Ok(answers) => {
                    let data = Arc::new(answers.data());
                    self.cache
                        .insert(hostname, record_type, Arc::clone(&data), answers.min_ttl());
                    return Ok(data.as_ref().clone());
                }
                Err(error) => {
                    if attempt.token().is_cancelled() {
                        cancelled = true;
                    }
                    warn!(
                        server = %server,
                        hostname,
                        record_type = %record_type,
                        %error,
                        "endpoint failed, trying next"
                    );
                }
            }
        }

        if cancelled {
            return Err(ResolveError::Cancelled);
        }
        Err(ResolveError::ResolutionFailed {
            hostname: hostname.to_string(),
            record_type,
        })
    }

    /// One endpoint attempt: build the GET resource, fetch, decode.
    async fn attempt(
        &self,
        server: &str,
        question: &Question,
        cancel: &CancellationToken,
    ) -> Result<AnswerSet, ResolveError> {
        let resource = MessageBuilder::build_resource(server, question)?;
        let body = self.transport.fetch(&resource, cancel).await?;
        ResponseParser::parse(&body)
    }
}

#[async_trait]
impl HostResolver for DohResolver {
    async fn resolve(
        &self,
        hostname: &str,
        record_type: RecordType,
    ) -> Result<Vec<String>, ResolveError> {
        self.lookup(hostname, record_type).await
    }
}
