// Summoner emotes from Community Dragon.

use std::sync::Arc;

use crate::api::Emote;
use crate::api::endpoints;
use crate::error::{Result, RiftdexError};

use super::{GameData, matches_search};

impl GameData {
    pub async fn all_emotes(&self) -> Result<Arc<Vec<Emote>>> {
        self.cache
            .get("emotes-all", || async {
                let url = endpoints::cdragon_data_url(&self.config, "summoner-emotes.json");
                let emotes: Vec<Emote> = self.client.get_json(&url).await?;
                Ok::<_, RiftdexError>(Arc::new(emotes))
            })
            .await
    }
}

#[derive(Debug, Clone, Default)]
pub struct EmoteFilter {
    /// Matches name or description.
    pub search: Option<String>,
    /// Keep emotes tagged with this champion.
    pub champion_id: Option<i64>,
}

/// Emotes without a name or icon are placeholders and always dropped.
pub fn filter_emotes<'a>(emotes: &'a [Emote], filter: &EmoteFilter) -> Vec<&'a Emote> {
    emotes
        .iter()
        .filter(|e| !e.name.is_empty() && !e.inventory_icon.is_empty())
        .filter(|e| {
            matches_search(
                filter.search.as_deref(),
                &[e.name.as_str(), e.description.as_str()],
            )
        })
        .filter(|e| {
            filter
                .champion_id
                .is_none_or(|id| e.tagged_champions_ids.contains(&id))
        })
        .collect()
}
