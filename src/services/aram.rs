// ARAM balance modifiers from the Meraki Analytics champion file.
// Keys follow Data Dragon champion ids so they can be joined with the roster.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;

use crate::api::endpoints;
use crate::api::{MerakiChampion, MerakiStat};
use crate::error::{Result, RiftdexError};

use super::{GameData, round_half_up};

/// ARAM adjustments for one champion. Percent fields are deltas from normal
/// play, e.g. `5.0` means +5% damage dealt. Missing adjustments read as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct AramModifiers {
    pub ability_haste: f64,
    pub attack_speed: f64,
    pub damage_dealt: f64,
    pub damage_taken: f64,
    pub energy_regen: f64,
    pub healing: f64,
    pub shielding: f64,
    pub tenacity: f64,
}

impl GameData {
    /// ARAM modifiers keyed by Data Dragon champion id.
    pub async fn aram_stats(&self) -> Result<Arc<BTreeMap<String, AramModifiers>>> {
        self.cache
            .get("aram-stats", || async {
                let url = endpoints::meraki_champions_url(&self.config);
                let champions: BTreeMap<String, MerakiChampion> = self.client.get_json(&url).await?;
                Ok::<_, RiftdexError>(Arc::new(parse_aram_stats(champions)))
            })
            .await
    }
}

/// Convert Meraki champion records into ARAM modifiers.
///
/// Meraki spells Fiddlesticks differently from Data Dragon; the key is
/// rewritten so lookups by Data Dragon id succeed.
pub fn parse_aram_stats(
    champions: BTreeMap<String, MerakiChampion>,
) -> BTreeMap<String, AramModifiers> {
    champions
        .into_iter()
        .map(|(name, champion)| {
            let key = if name == "Fiddlesticks" {
                "FiddleSticks".to_string()
            } else {
                name
            };
            let stats = champion.stats;
            let modifiers = AramModifiers {
                ability_haste: stats.aram_ability_haste.map_or(0.0, |s| s.flat),
                attack_speed: percent_delta(stats.aram_attack_speed),
                damage_dealt: percent_delta(stats.aram_damage_dealt),
                damage_taken: percent_delta(stats.aram_damage_taken),
                energy_regen: percent_delta(stats.aram_energy_regen),
                healing: percent_delta(stats.aram_healing),
                shielding: percent_delta(stats.aram_shielding),
                tenacity: percent_delta(stats.aram_tenacity),
            };
            (key, modifiers)
        })
        .collect()
}

/// Multiplier to percent delta with one decimal: 1.05 -> 5.0, 0.9 -> -10.0.
fn percent_delta(stat: Option<MerakiStat>) -> f64 {
    stat.map_or(0.0, |s| round_half_up((s.flat * 100.0 - 100.0) * 10.0) / 10.0)
}
