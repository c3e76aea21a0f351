// Runes (perks) from Community Dragon.

use std::ops::Range;
use std::sync::Arc;

use crate::api::Rune;
use crate::api::endpoints;
use crate::error::{Result, RiftdexError};

use super::{GameData, matches_search};

/// Keystone perks sit in this id range.
pub const KEYSTONE_IDS: Range<i64> = 8000..8500;

impl GameData {
    pub async fn all_runes(&self) -> Result<Arc<Vec<Rune>>> {
        self.cache
            .get("runes-all", || async {
                let url = endpoints::cdragon_data_url(&self.config, "perks.json");
                let runes: Vec<Rune> = self.client.get_json(&url).await?;
                Ok::<_, RiftdexError>(Arc::new(runes))
            })
            .await
    }
}

#[derive(Debug, Clone, Default)]
pub struct RuneFilter {
    /// Matches name or short description.
    pub search: Option<String>,
    pub keystones_only: bool,
}

pub fn filter_runes<'a>(runes: &'a [Rune], filter: &RuneFilter) -> Vec<&'a Rune> {
    runes
        .iter()
        .filter(|r| {
            matches_search(
                filter.search.as_deref(),
                &[r.name.as_str(), r.short_desc.as_str()],
            )
        })
        .filter(|r| !filter.keystones_only || KEYSTONE_IDS.contains(&r.id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::game_data;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn rune(id: i64, name: &str, short_desc: &str) -> Rune {
        Rune {
            id,
            name: name.to_string(),
            short_desc: short_desc.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_filter_runes() {
        let runes = vec![
            rune(8010, "Conqueror", "Gain stacking adaptive force"),
            rune(8112, "Electrocute", "Burst damage"),
            rune(9111, "Triumph", "Takedowns restore health"),
            rune(8299, "Last Stand", "Deal more damage at low health"),
        ];

        let keystones = filter_runes(&runes, &RuneFilter {
            keystones_only: true,
            ..Default::default()
        });
        assert_eq!(keystones.len(), 3);

        let health = filter_runes(&runes, &RuneFilter {
            search: Some("health".into()),
            keystones_only: true,
        });
        assert_eq!(health.len(), 1);
        assert_eq!(health[0].name, "Last Stand");
    }

    #[tokio::test]
    async fn test_all_runes_fetched_from_cdragon() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/latest/plugins/rcp-be-lol-game-data/global/default/v1/perks.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 8010, "name": "Conqueror", "iconPath": "/lol-game-data/assets/v1/perk-images/conqueror.png"}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let data = game_data(&server);
        let runes = data.all_runes().await.unwrap();
        assert_eq!(runes[0].icon_path, "/lol-game-data/assets/v1/perk-images/conqueror.png");
        data.all_runes().await.unwrap();
    }
}
