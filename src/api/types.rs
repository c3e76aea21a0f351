// Game-data response types.
// Defines structs for deserializing Data Dragon and Community Dragon JSON files.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize, de};
use serde_json::Value;

/// Data Dragon wraps every file's payload in a `data` field.
#[derive(Debug, Clone, Deserialize)]
pub struct DataFile<T> {
    pub data: T,
}

/// Sprite reference attached to most Data Dragon objects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Image {
    pub full: String,
    pub sprite: String,
    pub group: String,
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

/// Champion summary from `champion.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Champion {
    pub id: String,
    pub key: String,
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub blurb: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub partype: String,
    #[serde(default)]
    pub stats: ChampionStats,
    #[serde(default)]
    pub image: Image,
}

/// Base stats and per-level growth.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChampionStats {
    pub hp: f64,
    pub hpperlevel: f64,
    pub mp: f64,
    pub mpperlevel: f64,
    pub movespeed: f64,
    pub armor: f64,
    pub armorperlevel: f64,
    pub spellblock: f64,
    pub spellblockperlevel: f64,
    pub attackrange: f64,
    pub hpregen: f64,
    pub hpregenperlevel: f64,
    pub mpregen: f64,
    pub mpregenperlevel: f64,
    pub crit: f64,
    pub critperlevel: f64,
    pub attackdamage: f64,
    pub attackdamageperlevel: f64,
    pub attackspeedperlevel: f64,
    pub attackspeed: f64,
}

/// Full champion record from `champion/{id}.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChampionDetails {
    #[serde(flatten)]
    pub summary: Champion,
    #[serde(default)]
    pub lore: String,
    #[serde(default)]
    pub allytips: Vec<String>,
    #[serde(default)]
    pub enemytips: Vec<String>,
    #[serde(default)]
    pub spells: Vec<ChampionSpell>,
    pub passive: Passive,
    #[serde(default)]
    pub skins: Vec<ChampionSkin>,
}

/// Champion ability (Q/W/E/R).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChampionSpell {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tooltip: String,
    #[serde(default)]
    pub cooldown: Vec<f64>,
    #[serde(default)]
    pub cost: Vec<f64>,
    #[serde(default)]
    pub range: Vec<f64>,
    #[serde(default)]
    pub image: Image,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Passive {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: Image,
}

/// Skin entry embedded in champion details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChampionSkin {
    pub id: String,
    pub num: u32,
    pub name: String,
    #[serde(default)]
    pub chromas: bool,
}

/// Item from `item.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub plaintext: String,
    pub gold: Gold,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub maps: BTreeMap<String, bool>,
    #[serde(default)]
    pub stats: BTreeMap<String, f64>,
    /// Build depth (1 = basic, 2 = advanced, 3 = legendary).
    pub depth: Option<u8>,
    /// Items this builds into.
    #[serde(default)]
    pub into: Vec<String>,
    /// Items this builds from.
    #[serde(default)]
    pub from: Vec<String>,
    #[serde(default)]
    pub image: Image,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Gold {
    pub base: u32,
    pub total: u32,
    pub sell: u32,
    pub purchasable: bool,
}

/// Rune (perk) from Community Dragon `perks.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Rune {
    pub id: i64,
    pub name: String,
    pub major_change_patch_version: String,
    pub tooltip: String,
    pub short_desc: String,
    pub long_desc: String,
    pub recommendation_descriptor: String,
    pub icon_path: String,
    pub end_of_game_stat_descs: Vec<String>,
}

/// Summoner emote from `summoner-emotes.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Emote {
    pub id: i64,
    pub content_id: String,
    pub name: String,
    pub inventory_icon: String,
    pub tagged_champions_ids: Vec<i64>,
    pub description: String,
}

/// Ward skin from `ward-skins.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WardSkin {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub ward_image_path: String,
    pub ward_shadow_image_path: String,
}

/// Profile icon from `profileicon.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileIcon {
    #[serde(deserialize_with = "string_or_number")]
    pub id: u64,
    #[serde(default)]
    pub image: Image,
}

/// Summoner spell from `summoner.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SummonerSpell {
    pub id: String,
    pub name: String,
    pub description: String,
    pub tooltip: String,
    pub maxrank: u32,
    pub cooldown: Vec<f64>,
    pub cooldown_burn: String,
    pub cost: Vec<f64>,
    pub cost_burn: String,
    pub key: String,
    pub summoner_level: u32,
    pub modes: Vec<String>,
    pub cost_type: String,
    pub maxammo: String,
    pub range: Vec<f64>,
    pub range_burn: String,
    pub image: Image,
}

/// Challenge from `challenges.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Challenge {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub short_description: String,
    pub icon_path: String,
    /// "VETERANCY", "TEAMWORK", etc.
    pub category: String,
    pub level_to_icon_path: BTreeMap<String, String>,
}

/// Champion record from the Community Dragon CDN `champion/{id}/data` file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CdragonChampion {
    pub id: i64,
    pub name: String,
    pub alias: String,
    pub title: String,
    pub short_bio: String,
    pub roles: Vec<String>,
    pub square_portrait_path: String,
    pub passive: CdragonAbility,
    pub spells: Vec<CdragonAbility>,
    pub skins: Vec<CdragonSkin>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CdragonAbility {
    /// `q`, `w`, `e` or `r`; empty for the passive.
    pub spell_key: String,
    pub name: String,
    pub description: String,
    pub ability_icon_path: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CdragonSkin {
    pub id: i64,
    pub name: String,
    pub is_base: bool,
    pub splash_path: String,
    pub tile_path: String,
    pub rarity: String,
}

/// One stat line from the Meraki Analytics champion file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MerakiStat {
    pub flat: f64,
    pub percent: f64,
    pub per_level: f64,
    pub percent_per_level: f64,
}

/// ARAM balance stats of a Meraki champion. Champions without ARAM
/// adjustments omit some or all of them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MerakiStats {
    pub aram_ability_haste: Option<MerakiStat>,
    pub aram_attack_speed: Option<MerakiStat>,
    pub aram_damage_dealt: Option<MerakiStat>,
    pub aram_damage_taken: Option<MerakiStat>,
    pub aram_energy_regen: Option<MerakiStat>,
    pub aram_healing: Option<MerakiStat>,
    pub aram_shielding: Option<MerakiStat>,
    pub aram_tenacity: Option<MerakiStat>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MerakiChampion {
    pub stats: MerakiStats,
}

/// Skin record as stored in the bundled `skins_all.json` dataset.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSkin {
    #[serde(rename = "skin_id", deserialize_with = "string_or_number")]
    pub skin_id: u64,
    #[serde(rename = "skin_num", default)]
    pub skin_num: u32,
    #[serde(rename = "skin_name")]
    pub skin_name: String,
    pub champion: String,
    #[serde(rename = "champion_id", deserialize_with = "string_or_number")]
    pub champion_id: u64,
    #[serde(default)]
    pub chromas: bool,
    #[serde(default)]
    pub price: Price,
    #[serde(rename = "release_date", default)]
    pub release_date: String,
    #[serde(default)]
    pub is_prestige: bool,
    #[serde(default)]
    pub is_esports: bool,
    #[serde(default)]
    pub splash_path: String,
    pub rarity: Option<String>,
}

/// Skin as exposed to callers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Skin {
    pub id: u64,
    pub num: u32,
    pub name: String,
    pub champion: String,
    /// Champion numeric id, needed for Community Dragon image URLs.
    pub champion_id: u64,
    pub chromas: bool,
    pub price: Price,
    pub release_date: String,
    pub distribution: Distribution,
    pub splash_image: String,
    pub rarity: Option<String>,
}

impl From<RawSkin> for Skin {
    fn from(raw: RawSkin) -> Self {
        let distribution = if raw.is_prestige {
            Distribution::Prestige
        } else if raw.is_esports {
            Distribution::Esports
        } else {
            Distribution::Standard
        };

        Self {
            id: raw.skin_id,
            num: raw.skin_num,
            name: raw.skin_name,
            champion: raw.champion,
            champion_id: raw.champion_id,
            chromas: raw.chromas,
            price: raw.price,
            release_date: raw.release_date,
            distribution,
            splash_image: raw.splash_path,
            rarity: raw.rarity,
        }
    }
}

/// Skin price: RP amount, or a label such as "Special" or "Legacy".
///
/// Floats are rounded to whole RP. `null`, negative numbers and any other
/// JSON value read as zero RP instead of failing the whole dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Price {
    Rp(u64),
    Label(String),
}

impl Price {
    /// RP amount, with labels counting as zero.
    pub fn rp(&self) -> u64 {
        match self {
            Price::Rp(rp) => *rp,
            Price::Label(_) => 0,
        }
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let price = match Value::deserialize(deserializer)? {
            Value::Number(n) => Price::Rp(
                n.as_u64()
                    .or_else(|| {
                        n.as_f64()
                            .filter(|f| f.is_finite() && *f >= 0.0)
                            .map(|f| f.round() as u64)
                    })
                    .unwrap_or(0),
            ),
            Value::String(label) => Price::Label(label),
            _ => Price::Rp(0),
        };
        Ok(price)
    }
}

impl Default for Price {
    fn default() -> Self {
        Price::Rp(0)
    }
}

/// How a skin is obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Distribution {
    Standard,
    Prestige,
    Esports,
}

/// Accept ids encoded either as JSON numbers or numeric strings.
fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(u64),
        Text(String),
    }

    match Repr::deserialize(deserializer)? {
        Repr::Number(n) => Ok(n),
        Repr::Text(s) => s.trim().parse().map_err(de::Error::custom),
    }
}
