// Summoner spells from Data Dragon.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::api::endpoints;
use crate::api::{DataFile, SummonerSpell};
use crate::error::{Result, RiftdexError};

use super::{GameData, cmp_names, matches_search};

impl GameData {
    /// All summoner spells keyed by spell id (e.g. `SummonerFlash`).
    pub async fn all_summoner_spells(&self) -> Result<Arc<BTreeMap<String, SummonerSpell>>> {
        self.cache
            .get("summoner-spells-all", || async {
                let version = self.latest_version().await;
                let url = endpoints::ddragon_data_url(&self.config, &version, "summoner.json");
                let file: DataFile<BTreeMap<String, SummonerSpell>> =
                    self.client.get_json(&url).await?;
                Ok::<_, RiftdexError>(Arc::new(file.data))
            })
            .await
    }
}

#[derive(Debug, Clone, Default)]
pub struct SpellFilter {
    /// Matches name or description.
    pub search: Option<String>,
    /// Keep spells available in this game mode, e.g. `ARAM`.
    pub mode: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpellSort {
    #[default]
    Name,
    /// Shortest first-rank cooldown first.
    Cooldown,
    /// Lowest unlock level first.
    Level,
}

pub fn filter_summoner_spells<'a>(
    spells: impl IntoIterator<Item = (&'a String, &'a SummonerSpell)>,
    filter: &SpellFilter,
) -> Vec<&'a SummonerSpell> {
    spells
        .into_iter()
        .map(|(_, spell)| spell)
        .filter(|s| {
            matches_search(
                filter.search.as_deref(),
                &[s.name.as_str(), s.description.as_str()],
            )
        })
        .filter(|s| filter.mode.as_ref().is_none_or(|mode| s.modes.contains(mode)))
        .collect()
}

pub fn sort_summoner_spells(spells: &mut [&SummonerSpell], by: SpellSort) {
    match by {
        SpellSort::Name => spells.sort_by(|a, b| cmp_names(&a.name, &b.name)),
        SpellSort::Cooldown => spells.sort_by(|a, b| {
            let cd_a = a.cooldown.first().copied().unwrap_or(0.0);
            let cd_b = b.cooldown.first().copied().unwrap_or(0.0);
            cd_a.total_cmp(&cd_b)
        }),
        SpellSort::Level => spells.sort_by_key(|s| s.summoner_level),
    }
}
