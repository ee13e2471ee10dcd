#![allow(dead_code)]

use async_trait::async_trait;
use bytes::Bytes;
use hushdns_domain::ResolveError;
use hushdns_infrastructure::dns::transport::DohTransport;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use tokio_util::sync::CancellationToken;

/// Scripted outcome for one endpoint.
#[derive(Clone)]
pub enum MockOutcome {
    /// Serve this wire-format body.
    Body(Vec<u8>),
    /// Fail with a transport error.
    Error(String),
    /// Park until the attempt's token is cancelled.
    Hang,
}

/// Scripted DoH transport keyed by endpoint URL prefix, with a request
/// counter so tests can assert on network activity.
pub struct MockTransport {
    outcomes: Mutex<HashMap<String, MockOutcome>>,
    requests: AtomicUsize,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            outcomes: Mutex::new(HashMap::new()),
            requests: AtomicUsize::new(0),
        }
    }

    pub fn script(&self, endpoint: &str, outcome: MockOutcome) {
        self.outcomes
            .lock()
            .unwrap()
            .insert(endpoint.to_string(), outcome);
    }

    /// Number of fetches issued so far.
    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DohTransport for MockTransport {
    async fn fetch(
        &self,
        resource: &str,
        cancel: &CancellationToken,
    ) -> Result<Bytes, ResolveError> {
        self.requests.fetch_add(1, Ordering::SeqCst);

        let outcome = {
            let outcomes = self.outcomes.lock().unwrap();
            outcomes
                .iter()
                .find(|(endpoint, _)| resource.starts_with(endpoint.as_str()))
                .map(|(_, outcome)| outcome.clone())
        };

        match outcome {
            Some(MockOutcome::Body(body)) => Ok(Bytes::from(body)),
            Some(MockOutcome::Error(reason)) => Err(ResolveError::Transport(reason)),
            Some(MockOutcome::Hang) => {
                cancel.cancelled().await;
                Err(ResolveError::Cancelled)
            }
            None => Err(ResolveError::Transport(format!(
                "no scripted outcome for {}",
                resource
            ))),
        }
    }
}
