// Game-data services.
// Each resource module adds cached fetch methods to `GameData` plus its filter and sort helpers.

pub mod aram;
pub mod challenges;
pub mod champions;
pub mod emotes;
pub mod items;
pub mod profile_icons;
pub mod runes;
pub mod skins;
pub mod summoner_spells;
pub mod version;
pub mod wards;

use std::sync::Arc;

use crate::api::DataClient;
use crate::cache::MemoCache;
use crate::config::Config;
use crate::error::Result;

pub use aram::{AramModifiers, parse_aram_stats};
pub use challenges::{
    ChallengeFilter, ChallengeProgress, ChallengeTier, challenge_tier, champion_checklist,
    filter_challenges,
};
pub use champions::LATEST_CHAMPIONS;
pub use emotes::{EmoteFilter, filter_emotes};
pub use items::{ItemFilter, ItemSort, ItemTier, filter_items, item_tier, sort_items};
pub use profile_icons::{IconSort, ProfileIconFilter, filter_profile_icons, sort_profile_icons};
pub use runes::{RuneFilter, filter_runes};
pub use skins::{SkinFilter, SkinSort, filter_skins, sort_skins};
pub use summoner_spells::{SpellFilter, SpellSort, filter_summoner_spells, sort_summoner_spells};
pub use wards::{WardFilter, WardSort, filter_ward_skins, sort_ward_skins};

/// Handle to every game-data resource.
///
/// Cloning is cheap; clones share the same cache, so a value fetched through
/// one handle is a hit for all of them.
#[derive(Clone)]
pub struct GameData {
    cache: Arc<MemoCache>,
    client: DataClient,
    config: Arc<Config>,
}

impl GameData {
    /// Create a handle with its own empty cache.
    pub fn new(config: Config) -> Result<Self> {
        Self::with_cache(config, Arc::new(MemoCache::new()))
    }

    /// Create a handle around an existing cache.
    pub fn with_cache(config: Config, cache: Arc<MemoCache>) -> Result<Self> {
        let client = DataClient::new(&config)?;
        Ok(Self {
            cache,
            client,
            config: Arc::new(config),
        })
    }

    pub fn cache(&self) -> &Arc<MemoCache> {
        &self.cache
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

/// Case-insensitive substring match against any of `fields`.
/// An absent or empty query matches everything.
pub(crate) fn matches_search(query: Option<&str>, fields: &[&str]) -> bool {
    let query = match query.map(str::trim) {
        Some(q) if !q.is_empty() => q.to_lowercase(),
        _ => return true,
    };
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(&query))
}

/// Round to the nearest integer with ties going up, so -2.5 becomes -2.
pub(crate) fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Case-insensitive ordering for display names.
pub(crate) fn cmp_names(a: &str, b: &str) -> std::cmp::Ordering {
    a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b))
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_search() {
        assert!(matches_search(None, &["Ahri"]));
        assert!(matches_search(Some("  "), &["Ahri"]));
        assert!(matches_search(Some("AHR"), &["Ahri"]));
        assert!(matches_search(Some("fox"), &["Ahri", "the Nine-Tailed Fox"]));
        assert!(!matches_search(Some("lux"), &["Ahri", ""]));
    }

    #[test]
    fn test_cmp_names() {
        let mut names = vec!["zed", "Ahri", "ahri", "Bard"];
        names.sort_by(|a, b| cmp_names(a, b));
        assert_eq!(names, vec!["Ahri", "ahri", "Bard", "zed"]);
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-2.6), -3.0);
        assert_eq!(round_half_up(0.4), 0.0);
    }

    #[test]
    fn test_clones_share_cache() {
        let data = GameData::new(Config::default()).unwrap();
        let clone = data.clone();
        assert!(Arc::ptr_eq(data.cache(), clone.cache()));
    }
}
