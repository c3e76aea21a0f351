// Items: cached fetch plus filter, sort and tier helpers.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::api::endpoints;
use crate::api::{DataFile, Item};
use crate::error::{Result, RiftdexError};

use super::{GameData, cmp_names, matches_search};

impl GameData {
    /// All items keyed by item id.
    pub async fn all_items(&self) -> Result<Arc<BTreeMap<String, Item>>> {
        self.cache
            .get("items-all", || async {
                let version = self.latest_version().await;
                let url = endpoints::ddragon_data_url(&self.config, &version, "item.json");
                let file: DataFile<BTreeMap<String, Item>> = self.client.get_json(&url).await?;
                Ok::<_, RiftdexError>(Arc::new(file.data))
            })
            .await
    }
}

#[derive(Debug, Clone, Default)]
pub struct ItemFilter {
    /// Matches name or plaintext.
    pub search: Option<String>,
    /// Keep items carrying any of these tags.
    pub tags: Vec<String>,
    pub price_min: Option<u32>,
    pub price_max: Option<u32>,
    pub purchasable_only: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItemSort {
    Name,
    /// Most expensive first.
    Price,
    /// Source order.
    #[default]
    Popular,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemTier {
    Mythic,
    Legendary,
    Epic,
    Boots,
    Basic,
    Component,
}

impl ItemTier {
    pub fn label(&self) -> &'static str {
        match self {
            ItemTier::Mythic => "Mythic",
            ItemTier::Legendary => "Legendary",
            ItemTier::Epic => "Epic",
            ItemTier::Boots => "Boots",
            ItemTier::Basic => "Basic",
            ItemTier::Component => "Component",
        }
    }
}

pub fn filter_items<'a>(
    items: impl IntoIterator<Item = (&'a String, &'a Item)>,
    filter: &ItemFilter,
) -> Vec<(&'a str, &'a Item)> {
    items
        .into_iter()
        .filter(|(_, item)| {
            matches_search(
                filter.search.as_deref(),
                &[item.name.as_str(), item.plaintext.as_str()],
            )
        })
        .filter(|(_, item)| {
            filter.tags.is_empty() || filter.tags.iter().any(|t| item.tags.contains(t))
        })
        .filter(|(_, item)| filter.price_min.is_none_or(|min| item.gold.total >= min))
        .filter(|(_, item)| filter.price_max.is_none_or(|max| item.gold.total <= max))
        .filter(|(_, item)| !filter.purchasable_only || item.gold.purchasable)
        .map(|(id, item)| (id.as_str(), item))
        .collect()
}

pub fn sort_items(items: &mut [(&str, &Item)], by: ItemSort) {
    match by {
        ItemSort::Name => items.sort_by(|a, b| cmp_names(&a.1.name, &b.1.name)),
        ItemSort::Price => items.sort_by(|a, b| b.1.gold.total.cmp(&a.1.gold.total)),
        ItemSort::Popular => {}
    }
}

pub fn item_tier(item: &Item) -> ItemTier {
    if item.name.to_lowercase().contains("mythic") || item.description.contains("Mythic Passive") {
        return ItemTier::Mythic;
    }

    match item.gold.total {
        3000.. => ItemTier::Legendary,
        1000.. => ItemTier::Epic,
        _ if item.tags.iter().any(|t| t == "Boots") => ItemTier::Boots,
        0..500 => ItemTier::Basic,
        _ => ItemTier::Component,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Gold;
    use crate::services::test_support::game_data;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn item(name: &str, total: u32, tags: &[&str]) -> Item {
        Item {
            name: name.to_string(),
            description: String::new(),
            plaintext: String::new(),
            gold: Gold {
                base: total,
                total,
                sell: total * 7 / 10,
                purchasable: true,
            },
            tags: tags.iter().map(|t| t.to_string()).collect(),
            maps: BTreeMap::new(),
            stats: BTreeMap::new(),
            depth: None,
            into: Vec::new(),
            from: Vec::new(),
            image: Default::default(),
        }
    }

    fn catalog() -> BTreeMap<String, Item> {
        let mut items = BTreeMap::new();
        items.insert("1001".to_string(), item("Boots", 300, &["Boots"]));
        items.insert("1036".to_string(), item("Long Sword", 350, &["Damage"]));
        items.insert("3031".to_string(), item("Infinity Edge", 3450, &["Damage", "CriticalStrike"]));
        items.insert("3006".to_string(), item("Berserker's Greaves", 1100, &["Boots", "AttackSpeed"]));
        let mut hidden = item("Hidden Ward", 0, &[]);
        hidden.gold.purchasable = false;
        items.insert("3340".to_string(), hidden);
        items
    }

    #[test]
    fn test_filter_by_search_and_tags() {
        let items = catalog();

        let by_name = filter_items(&items, &ItemFilter {
            search: Some("sword".to_string()),
            ..Default::default()
        });
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].0, "1036");

        let by_tag = filter_items(&items, &ItemFilter {
            tags: vec!["CriticalStrike".to_string(), "AttackSpeed".to_string()],
            ..Default::default()
        });
        let ids: Vec<&str> = by_tag.iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, vec!["3006", "3031"]);
    }

    #[test]
    fn test_filter_by_price_and_purchasable() {
        let items = catalog();

        let mid = filter_items(&items, &ItemFilter {
            price_min: Some(300),
            price_max: Some(1100),
            ..Default::default()
        });
        assert_eq!(mid.len(), 3);

        let purchasable = filter_items(&items, &ItemFilter {
            purchasable_only: true,
            ..Default::default()
        });
        assert_eq!(purchasable.len(), 4);
    }

    #[test]
    fn test_sort_items() {
        let items = catalog();
        let mut entries = filter_items(&items, &ItemFilter::default());

        sort_items(&mut entries, ItemSort::Price);
        assert_eq!(entries[0].1.name, "Infinity Edge");

        sort_items(&mut entries, ItemSort::Name);
        let names: Vec<&str> = entries.iter().map(|(_, i)| i.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Berserker's Greaves", "Boots", "Hidden Ward", "Infinity Edge", "Long Sword"]
        );

        let before = entries.clone();
        sort_items(&mut entries, ItemSort::Popular);
        assert_eq!(entries, before);
    }

    #[test]
    fn test_item_tiers() {
        assert_eq!(item_tier(&item("Infinity Edge", 3450, &[])), ItemTier::Legendary);
        assert_eq!(item_tier(&item("Berserker's Greaves", 1100, &["Boots"])), ItemTier::Epic);
        assert_eq!(item_tier(&item("Boots", 300, &["Boots"])), ItemTier::Boots);
        assert_eq!(item_tier(&item("Long Sword", 350, &[])), ItemTier::Basic);
        assert_eq!(item_tier(&item("Pickaxe", 875, &[])), ItemTier::Component);

        let mut mythic = item("Galeforce", 3400, &[]);
        mythic.description = "<mythic>Mythic Passive:</mythic>".to_string();
        assert_eq!(item_tier(&mythic), ItemTier::Mythic);
        assert_eq!(ItemTier::Mythic.label(), "Mythic");
    }

    #[tokio::test]
    async fn test_all_items_cached() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/versions.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!(["26.1.1"])))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/cdn/26.1.1/data/en_US/item.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {
                    "1001": {"name": "Boots", "gold": {"base": 300, "total": 300, "sell": 210, "purchasable": true}, "tags": ["Boots"]}
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let data = game_data(&server);
        let items = data.all_items().await.unwrap();
        assert_eq!(items["1001"].gold.total, 300);
        data.all_items().await.unwrap();
    }
}
