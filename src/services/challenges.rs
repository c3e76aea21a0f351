// Challenges from Community Dragon, plus completion tiers.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::api::{Challenge, Champion};
use crate::api::endpoints;
use crate::error::{Result, RiftdexError};

use super::{GameData, matches_search, round_half_up};

impl GameData {
    /// All challenges. The source file is an object keyed by challenge id.
    pub async fn all_challenges(&self) -> Result<Arc<Vec<Challenge>>> {
        self.cache
            .get("challenges-all", || async {
                let url = endpoints::cdragon_data_url(&self.config, "challenges.json");
                let by_id: BTreeMap<String, Challenge> = self.client.get_json(&url).await?;
                Ok::<_, RiftdexError>(Arc::new(by_id.into_values().collect()))
            })
            .await
    }
}

#[derive(Debug, Clone, Default)]
pub struct ChallengeFilter {
    /// Matches name, description or short description.
    pub search: Option<String>,
}

/// Unnamed challenges are dropped.
pub fn filter_challenges<'a>(
    challenges: &'a [Challenge],
    filter: &ChallengeFilter,
) -> Vec<&'a Challenge> {
    challenges
        .iter()
        .filter(|c| !c.name.is_empty())
        .filter(|c| {
            matches_search(
                filter.search.as_deref(),
                &[
                    c.name.as_str(),
                    c.description.as_str(),
                    c.short_description.as_str(),
                ],
            )
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ChallengeTier {
    Unranked,
    Iron,
    Bronze,
    Silver,
    Gold,
    Platinum,
    Diamond,
    Master,
    Grandmaster,
    Challenger,
}

impl ChallengeTier {
    pub fn label(&self) -> &'static str {
        match self {
            ChallengeTier::Unranked => "UNRANKED",
            ChallengeTier::Iron => "IRON",
            ChallengeTier::Bronze => "BRONZE",
            ChallengeTier::Silver => "SILVER",
            ChallengeTier::Gold => "GOLD",
            ChallengeTier::Platinum => "PLATINUM",
            ChallengeTier::Diamond => "DIAMOND",
            ChallengeTier::Master => "MASTER",
            ChallengeTier::Grandmaster => "GRANDMASTER",
            ChallengeTier::Challenger => "CHALLENGER",
        }
    }

    /// Display colour as a hex string.
    pub fn color(&self) -> &'static str {
        match self {
            ChallengeTier::Unranked => "#4A4A4A",
            ChallengeTier::Iron => "#6C6C6C",
            ChallengeTier::Bronze => "#8B4513",
            ChallengeTier::Silver => "#C0C0C0",
            ChallengeTier::Gold => "#FFD700",
            ChallengeTier::Platinum => "#2ECC71",
            ChallengeTier::Diamond => "#3498DB",
            ChallengeTier::Master => "#9B59B6",
            ChallengeTier::Grandmaster => "#E74C3C",
            ChallengeTier::Challenger => "#F39C12",
        }
    }
}

/// Tier earned by completing `completed` out of `total` champions.
/// Completion tiers top out at Master.
pub fn challenge_tier(completed: usize, total: usize) -> ChallengeTier {
    if total == 0 || completed == 0 {
        return ChallengeTier::Unranked;
    }

    let percent = completed as f64 / total as f64 * 100.0;
    match percent {
        p if p < 10.0 => ChallengeTier::Iron,
        p if p < 25.0 => ChallengeTier::Bronze,
        p if p < 40.0 => ChallengeTier::Silver,
        p if p < 60.0 => ChallengeTier::Gold,
        p if p < 75.0 => ChallengeTier::Platinum,
        p if p < 90.0 => ChallengeTier::Diamond,
        _ => ChallengeTier::Master,
    }
}

/// Completion of a champion-collection challenge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChallengeProgress {
    pub current: usize,
    pub total: usize,
    /// Whole percent, rounded half up. Zero when `total` is zero.
    pub percentage: u32,
}

impl ChallengeProgress {
    pub fn new(current: usize, total: usize) -> Self {
        let percentage = if total == 0 {
            0
        } else {
            round_half_up(current as f64 / total as f64 * 100.0) as u32
        };
        Self {
            current,
            total,
            percentage,
        }
    }

    /// Progress from the numeric champion keys a player has completed,
    /// measured against the whole roster.
    pub fn from_completed(completed_ids: &[u64], roster: &[Champion]) -> Self {
        Self::new(completed_ids.len(), roster.len())
    }

    pub fn tier(&self) -> ChallengeTier {
        challenge_tier(self.current, self.total)
    }
}

/// Pair every roster champion with whether its numeric key is in `completed_ids`.
pub fn champion_checklist<'a>(
    roster: &'a [Champion],
    completed_ids: &[u64],
) -> Vec<(&'a Champion, bool)> {
    roster
        .iter()
        .map(|c| {
            let done = c
                .key
                .parse::<u64>()
                .is_ok_and(|key| completed_ids.contains(&key));
            (c, done)
        })
        .collect()
}
