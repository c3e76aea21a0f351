// Game-data API module.
// Provides the HTTP client, endpoint builders and response types.

pub mod client;
pub mod endpoints;
pub mod types;

pub use client::DataClient;
pub use types::*;
