pub mod string_utils;
pub mod url_builder;

// Re-export commonly used functions
pub use url_builder::{hashscan_token_url, hashscan_transaction_url, mirror_token_url};
