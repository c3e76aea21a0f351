// Ward skins from Community Dragon.

use std::sync::Arc;

use crate::api::WardSkin;
use crate::api::endpoints;
use crate::error::{Result, RiftdexError};

use super::{GameData, cmp_names, matches_search};

impl GameData {
    pub async fn all_ward_skins(&self) -> Result<Arc<Vec<WardSkin>>> {
        self.cache
            .get("wardskins-all", || async {
                let url = endpoints::cdragon_data_url(&self.config, "ward-skins.json");
                let wards: Vec<WardSkin> = self.client.get_json(&url).await?;
                Ok::<_, RiftdexError>(Arc::new(wards))
            })
            .await
    }
}

#[derive(Debug, Clone, Default)]
pub struct WardFilter {
    /// Matches name or description.
    pub search: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WardSort {
    #[default]
    Name,
    /// Highest id (newest) first.
    Id,
}

/// Ward skins without a name or image are placeholders and always dropped.
pub fn filter_ward_skins<'a>(wards: &'a [WardSkin], filter: &WardFilter) -> Vec<&'a WardSkin> {
    wards
        .iter()
        .filter(|w| !w.name.is_empty() && !w.ward_image_path.is_empty())
        .filter(|w| {
            matches_search(
                filter.search.as_deref(),
                &[w.name.as_str(), w.description.as_str()],
            )
        })
        .collect()
}

pub fn sort_ward_skins(wards: &mut [&WardSkin], by: WardSort) {
    match by {
        WardSort::Name => wards.sort_by(|a, b| cmp_names(&a.name, &b.name)),
        WardSort::Id => wards.sort_by(|a, b| b.id.cmp(&a.id)),
    }
}
