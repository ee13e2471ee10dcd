use serde::{Deserialize, Serialize};

/// DoH resolver configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// Ordered DoH endpoint URLs. Each lookup tries them in a freshly
    /// shuffled order until one answers.
    #[serde(default = "default_servers")]
    pub servers: Vec<String>,

    /// Maximum number of cached answer sets. Zero disables caching.
    #[serde(default = "default_max_cache_entries")]
    pub max_cache_entries: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            servers: default_servers(),
            max_cache_entries: default_max_cache_entries(),
        }
    }
}

fn default_servers() -> Vec<String> {
    vec![
        "https://cloudflare-dns.com/dns-query".to_string(),
        "https://dns.google/dns-query".to_string(),
    ]
}

fn default_max_cache_entries() -> usize {
    100
}
