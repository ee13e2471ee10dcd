pub mod url_rewrite;

pub use url_rewrite::UrlRewriter;
