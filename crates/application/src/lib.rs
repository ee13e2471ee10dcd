//! Hush DNS application layer: ports and use cases.
pub mod ports;
pub mod use_cases;

pub use ports::HostResolver;
pub use use_cases::UrlRewriter;
