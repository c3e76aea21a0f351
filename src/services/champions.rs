// Champion list and per-champion details.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::api::endpoints;
use crate::api::{CdragonChampion, Champion, ChampionDetails, DataFile};
use crate::error::{Result, RiftdexError};

use super::GameData;

/// Most recent releases, newest first. Id ordering is not release ordering,
/// so this list is curated by hand.
pub const LATEST_CHAMPIONS: &[&str] = &[
    "Zaahen", "Yunara", "Mel", "Ambessa", "Aurora", "Smolder", "Hwei", "Briar", "Naafiri", "Milio",
];

impl GameData {
    /// All champion summaries, ordered by id.
    pub async fn all_champions(&self) -> Result<Arc<Vec<Champion>>> {
        self.cache
            .get("champions-list", || async {
                let version = self.latest_version().await;
                let url = endpoints::ddragon_data_url(&self.config, &version, "champion.json");
                let file: DataFile<BTreeMap<String, Champion>> = self.client.get_json(&url).await?;
                Ok::<_, RiftdexError>(Arc::new(file.data.into_values().collect()))
            })
            .await
    }

    /// Up to `count` of the newest champions that exist in the current roster.
    pub async fn latest_champions(&self, count: usize) -> Result<Vec<Champion>> {
        let all = self.all_champions().await?;
        let latest = LATEST_CHAMPIONS
            .iter()
            .filter_map(|wanted| {
                all.iter()
                    .find(|c| c.id == *wanted || c.name == *wanted)
                    .cloned()
            })
            .take(count)
            .collect();
        Ok(latest)
    }

    /// Full record for one champion, e.g. `"Ahri"`.
    pub async fn champion_details(&self, champion_id: &str) -> Result<Arc<ChampionDetails>> {
        let key = format!("champion-{}", champion_id);
        self.cache
            .get(&key, || async {
                let version = self.latest_version().await;
                let url = endpoints::champion_details_url(&self.config, &version, champion_id);
                let mut file: DataFile<BTreeMap<String, ChampionDetails>> =
                    self.client.get_json(&url).await?;
                file.data
                    .remove(champion_id)
                    .map(Arc::new)
                    .ok_or_else(|| RiftdexError::NotFound(format!("champion {}", champion_id)))
            })
            .await
    }

    /// Community Dragon record for one champion by numeric id, e.g. `103`.
    /// Carries ability icon paths and the full skin line.
    pub async fn champion_data(&self, champion_id: u64) -> Result<Arc<CdragonChampion>> {
        let key = format!("cdragon-champion-{}", champion_id);
        self.cache
            .get(&key, || async {
                let url = endpoints::cdragon_champion_url(&self.config, champion_id);
                let champion: CdragonChampion = self.client.get_json(&url).await?;
                Ok::<_, RiftdexError>(Arc::new(champion))
            })
            .await
    }
}
