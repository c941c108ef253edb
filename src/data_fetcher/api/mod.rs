pub mod urls;
pub mod http_client;
mod fetch_utils;
mod fetchers;

// Re-export URL utilities
pub use urls::*;
// Re-export HTTP client utilities
pub use http_client::*;
// Re-export the team page and lookup fetchers
pub use fetchers::*;
