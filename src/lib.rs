// riftdex: League of Legends game data behind a shared TTL response cache.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod services;

pub use cache::MemoCache;
pub use config::Config;
pub use error::{Result, RiftdexError};
pub use services::GameData;
