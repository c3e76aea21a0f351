// Summoner profile icons from Data Dragon.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::api::endpoints;
use crate::api::{DataFile, ProfileIcon};
use crate::error::{Result, RiftdexError};

use super::GameData;

impl GameData {
    /// All profile icons keyed by icon id.
    pub async fn all_profile_icons(&self) -> Result<Arc<BTreeMap<String, ProfileIcon>>> {
        self.cache
            .get("profileicons-all", || async {
                let version = self.latest_version().await;
                let url = endpoints::ddragon_data_url(&self.config, &version, "profileicon.json");
                let file: DataFile<BTreeMap<String, ProfileIcon>> =
                    self.client.get_json(&url).await?;
                Ok::<_, RiftdexError>(Arc::new(file.data))
            })
            .await
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProfileIconFilter {
    /// Substring of the icon id.
    pub search: Option<String>,
    pub id_min: Option<u64>,
    pub id_max: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconSort {
    #[default]
    IdAsc,
    IdDesc,
}

pub fn filter_profile_icons<'a>(
    icons: impl IntoIterator<Item = (&'a String, &'a ProfileIcon)>,
    filter: &ProfileIconFilter,
) -> Vec<&'a ProfileIcon> {
    let query = filter.search.as_deref().map(str::trim).unwrap_or_default();
    icons
        .into_iter()
        .filter(|(id, _)| id.contains(query))
        .map(|(_, icon)| icon)
        .filter(|icon| filter.id_min.is_none_or(|min| icon.id >= min))
        .filter(|icon| filter.id_max.is_none_or(|max| icon.id <= max))
        .collect()
}

/// Map keys are strings, so sort numerically on the parsed id.
pub fn sort_profile_icons(icons: &mut [&ProfileIcon], by: IconSort) {
    match by {
        IconSort::IdAsc => icons.sort_by_key(|icon| icon.id),
        IconSort::IdDesc => icons.sort_by_key(|icon| std::cmp::Reverse(icon.id)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::game_data;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn icons() -> BTreeMap<String, ProfileIcon> {
        [7u64, 29, 588, 5012]
            .into_iter()
            .map(|id| {
                (
                    id.to_string(),
                    ProfileIcon {
                        id,
                        image: Default::default(),
                    },
                )
            })
            .collect()
    }

    #[test]
    fn test_filter_and_sort_icons() {
        let icons = icons();

        let mut ranged = filter_profile_icons(&icons, &ProfileIconFilter {
            id_min: Some(10),
            id_max: Some(600),
            ..Default::default()
        });
        sort_profile_icons(&mut ranged, IconSort::IdDesc);
        let ids: Vec<u64> = ranged.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![588, 29]);

        let mut searched = filter_profile_icons(&icons, &ProfileIconFilter {
            search: Some("5".into()),
            ..Default::default()
        });
        sort_profile_icons(&mut searched, IconSort::IdAsc);
        let ids: Vec<u64> = searched.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![588, 5012]);
    }

    #[tokio::test]
    async fn test_all_profile_icons() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/versions.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!(["26.1.1"])))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/cdn/26.1.1/data/en_US/profileicon.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {"29": {"id": 29, "image": {"full": "29.png"}}}
            })))
            .mount(&server)
            .await;

        let data = game_data(&server);
        let icons = data.all_profile_icons().await.unwrap();
        assert_eq!(icons["29"].image.full, "29.png");
    }
}
