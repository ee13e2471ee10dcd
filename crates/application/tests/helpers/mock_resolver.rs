#![allow(dead_code)]

use async_trait::async_trait;
use hushdns_application::ports::HostResolver;
use hushdns_domain::{RecordType, ResolveError};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Mock resolver with scripted answers, a failure switch and a call counter.
pub struct MockHostResolver {
    responses: Mutex<HashMap<(String, RecordType), Vec<String>>>,
    should_fail: Mutex<bool>,
    calls: AtomicUsize,
}

impl MockHostResolver {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(HashMap::new()),
            should_fail: Mutex::new(false),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn set_response(&self, hostname: &str, record_type: RecordType, data: &[&str]) {
        self.responses.lock().unwrap().insert(
            (hostname.to_string(), record_type),
            data.iter().map(|s| s.to_string()).collect(),
        );
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.lock().unwrap() = should_fail;
    }

    /// Number of resolve calls received so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HostResolver for MockHostResolver {
    async fn resolve(
        &self,
        hostname: &str,
        record_type: RecordType,
    ) -> Result<Vec<String>, ResolveError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if *self.should_fail.lock().unwrap() {
            return Err(ResolveError::ResolutionFailed {
                hostname: hostname.to_string(),
                record_type,
            });
        }

        self.responses
            .lock()
            .unwrap()
            .get(&(hostname.to_string(), record_type))
            .cloned()
            .ok_or_else(|| ResolveError::ResolutionFailed {
                hostname: hostname.to_string(),
                record_type,
            })
    }
}
