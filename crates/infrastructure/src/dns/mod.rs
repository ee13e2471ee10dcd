pub mod cache;
pub mod cancel;
pub mod message;
pub mod resolver;
pub mod server_pool;
pub mod transport;
