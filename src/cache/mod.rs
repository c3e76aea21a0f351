// Cache module for in-memory response memoization.
// Shared by every game-data service to avoid refetching the same JSON.

pub mod clock;
pub mod entry;
pub mod memo;

pub use clock::{Clock, ManualClock, SystemClock};
pub use entry::CacheEntry;
pub use memo::{DEFAULT_TTL, MemoCache};
