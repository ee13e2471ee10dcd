use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio_util::sync::CancellationToken;

/// Registry of cancellation tokens for in-flight attempts.
///
/// One token is registered per outbound attempt; the guard removes it when
/// dropped, so every exit path of an attempt deregisters. The registry is
/// scoped to one resolver instance.
#[derive(Default)]
pub struct CancelRegistry {
    tokens: DashMap<u64, CancellationToken>,
    next_id: AtomicU64,
}

impl CancelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create and track a fresh token for one attempt.
    pub fn register(&self) -> AttemptGuard<'_> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let token = CancellationToken::new();
        self.tokens.insert(id, token.clone());
        AttemptGuard {
            registry: self,
            id,
            token,
        }
    }

    /// Signal every currently tracked token. Does not wait for the
    /// corresponding attempts to finish.
    pub fn cancel_all(&self) {
        for entry in self.tokens.iter() {
            entry.value().cancel();
        }
    }

    /// Number of attempts currently in flight.
    pub fn active(&self) -> usize {
        self.tokens.len()
    }
}

/// Keeps one attempt's token registered for as long as it lives.
pub struct AttemptGuard<'a> {
    registry: &'a CancelRegistry,
    id: u64,
    token: CancellationToken,
}

impl AttemptGuard<'_> {
    pub fn token(&self) -> &CancellationToken {
        &self.token
    }
}

impl Drop for AttemptGuard<'_> {
    fn drop(&mut self) {
        self.registry.tokens.remove(&self.id);
    }
}
