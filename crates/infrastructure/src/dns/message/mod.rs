//! Outbound query construction and response decoding.
//!
//! Wire format is RFC 1035 via `hickory-proto`; the GET resource encoding
//! is RFC 8484 (`?dns=` + unpadded base64url).

pub mod builder;
pub mod parser;

pub use builder::MessageBuilder;
pub use parser::ResponseParser;
