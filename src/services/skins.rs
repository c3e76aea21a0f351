// Skins: loaded from the bundled skins dataset rather than a remote endpoint.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate};

use crate::api::{Distribution, RawSkin, Skin};
use crate::error::{Result, RiftdexError};

use super::{GameData, cmp_names, matches_search};

impl GameData {
    /// Every skin in the local dataset.
    pub async fn all_skins(&self) -> Result<Arc<Vec<Skin>>> {
        self.cache
            .get("skins-all", || async {
                let raw: Vec<RawSkin> = self.client.read_json_file(&self.config.skins_path).await?;
                Ok::<_, RiftdexError>(Arc::new(raw.into_iter().map(Skin::from).collect()))
            })
            .await
    }
}

#[derive(Debug, Clone, Default)]
pub struct SkinFilter {
    /// Matches skin name or champion name.
    pub search: Option<String>,
    pub prestige: bool,
    pub esports: bool,
    pub chromas: Option<bool>,
    pub price_min: Option<u64>,
    pub price_max: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SkinSort {
    #[default]
    Name,
    /// Newest release first.
    Date,
    /// Most expensive first.
    Price,
}

pub fn filter_skins<'a>(skins: &'a [Skin], filter: &SkinFilter) -> Vec<&'a Skin> {
    skins
        .iter()
        .filter(|s| {
            matches_search(
                filter.search.as_deref(),
                &[s.name.as_str(), s.champion.as_str()],
            )
        })
        .filter(|s| {
            !filter.prestige
                || s.distribution == Distribution::Prestige
                || s.name.to_lowercase().contains("prestige")
        })
        .filter(|s| {
            !filter.esports
                || s.distribution == Distribution::Esports
                || s.name.contains("Championship")
                || s.name.contains("Worlds")
        })
        .filter(|s| filter.chromas.is_none_or(|chromas| s.chromas == chromas))
        .filter(|s| filter.price_min.is_none_or(|min| s.price.rp() >= min))
        .filter(|s| filter.price_max.is_none_or(|max| s.price.rp() <= max))
        .collect()
}

pub fn sort_skins(skins: &mut [&Skin], by: SkinSort) {
    match by {
        SkinSort::Name => skins.sort_by(|a, b| cmp_names(&a.name, &b.name)),
        SkinSort::Date => {
            skins.sort_by_cached_key(|s| std::cmp::Reverse(release_date(&s.release_date)))
        }
        SkinSort::Price => skins.sort_by(|a, b| b.price.rp().cmp(&a.price.rp())),
    }
}

/// Parse `YYYY-MM-DD` or RFC 3339 release dates. Unknown dates sort as oldest.
fn release_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Price;
    use crate::config::Config;
    use std::io::Write;

    fn skin(name: &str, champion: &str, price: Price, date: &str) -> Skin {
        Skin {
            id: 1,
            num: 1,
            name: name.to_string(),
            champion: champion.to_string(),
            champion_id: 1,
            chromas: false,
            price,
            release_date: date.to_string(),
            distribution: Distribution::Standard,
            splash_image: String::new(),
            rarity: None,
        }
    }

    fn wardrobe() -> Vec<Skin> {
        let mut prestige = skin(
            "Prestige K/DA Ahri",
            "Ahri",
            Price::Label("Special".into()),
            "2020-11-05",
        );
        prestige.distribution = Distribution::Prestige;
        let mut worlds = skin("Worlds 2014 Ahri", "Ahri", Price::Rp(975), "bad date");
        worlds.chromas = true;
        vec![
            skin("Spirit Blossom Ahri", "Ahri", Price::Rp(1350), "2020-07-23"),
            prestige,
            worlds,
            skin("Star Guardian Lux", "Lux", Price::Rp(1350), "2015-09-24"),
            skin("Elementalist Lux", "Lux", Price::Rp(3250), "2016-11-22T00:00:00Z"),
        ]
    }

    #[test]
    fn test_filter_skins() {
        let skins = wardrobe();

        let lux = filter_skins(&skins, &SkinFilter {
            search: Some("LUX".into()),
            ..Default::default()
        });
        assert_eq!(lux.len(), 2);

        let prestige = filter_skins(&skins, &SkinFilter {
            prestige: true,
            ..Default::default()
        });
        assert_eq!(prestige.len(), 1);

        let esports = filter_skins(&skins, &SkinFilter {
            esports: true,
            ..Default::default()
        });
        assert_eq!(esports[0].name, "Worlds 2014 Ahri");

        let chromas = filter_skins(&skins, &SkinFilter {
            chromas: Some(true),
            ..Default::default()
        });
        assert_eq!(chromas.len(), 1);

        // Label prices count as zero
        let cheap = filter_skins(&skins, &SkinFilter {
            price_max: Some(1000),
            ..Default::default()
        });
        assert_eq!(cheap.len(), 2);
    }

    #[test]
    fn test_sort_skins() {
        let skins = wardrobe();
        let mut refs: Vec<&Skin> = skins.iter().collect();

        sort_skins(&mut refs, SkinSort::Date);
        let names: Vec<&str> = refs.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Prestige K/DA Ahri",
                "Spirit Blossom Ahri",
                "Elementalist Lux",
                "Star Guardian Lux",
                "Worlds 2014 Ahri",
            ]
        );

        sort_skins(&mut refs, SkinSort::Price);
        assert_eq!(refs[0].name, "Elementalist Lux");

        sort_skins(&mut refs, SkinSort::Name);
        assert_eq!(refs[0].name, "Elementalist Lux");
        assert_eq!(refs[4].name, "Worlds 2014 Ahri");
    }

    #[tokio::test]
    async fn test_all_skins_from_dataset() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            br#"[{"skin_id": "103015", "skin_num": 15, "skin_name": "Spirit Blossom Ahri",
                  "champion": "Ahri", "champion_id": "103", "price": 1350, "isPrestige": false}]"#,
        )
        .unwrap();

        let config = Config {
            skins_path: file.path().to_path_buf(),
            ..Config::default()
        };
        let data = GameData::new(config).unwrap();

        let skins = data.all_skins().await.unwrap();
        assert_eq!(skins.len(), 1);
        assert_eq!(skins[0].champion_id, 103);

        // Served from cache even once the file is gone
        drop(file);
        assert_eq!(data.all_skins().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_missing_dataset_is_not_cached() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = Config {
            skins_path: dir.path().join("skins_all.json"),
            ..Config::default()
        };
        let data = GameData::new(config).unwrap();

        assert!(matches!(data.all_skins().await, Err(RiftdexError::Io(_))));
        assert_eq!(data.cache().size(), 0);
    }
}
