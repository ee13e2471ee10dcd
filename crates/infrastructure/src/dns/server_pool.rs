use std::sync::RwLock;

/// Ordered list of DoH endpoint URLs.
///
/// The list is replaced wholesale, never merged. `shuffled` computes a fresh
/// permutation on every call; ordering is never sticky across lookups.
pub struct ServerPool {
    servers: RwLock<Vec<String>>,
}

impl ServerPool {
    pub fn new(servers: Vec<String>) -> Self {
        Self {
            servers: RwLock::new(servers),
        }
    }

    /// Replace the endpoint list wholesale.
    pub fn set_servers(&self, servers: Vec<String>) {
        *self.servers.write().unwrap() = servers;
    }

    /// Endpoints in configured order.
    pub fn get_servers(&self) -> Vec<String> {
        self.servers.read().unwrap().clone()
    }

    /// A uniformly random permutation of the current endpoints.
    pub fn shuffled(&self) -> Vec<String> {
        let mut servers = self.servers.read().unwrap().clone();
        fastrand::shuffle(&mut servers);
        servers
    }
}
