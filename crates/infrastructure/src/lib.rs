//! Hush DNS infrastructure layer: DoH transport, caching, resolution.
pub mod dns;

pub use dns::cache::DnsCache;
pub use dns::resolver::DohResolver;
pub use dns::server_pool::ServerPool;
pub use dns::transport::{DohTransport, HttpsTransport};
