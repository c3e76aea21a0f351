// Endpoint and asset URL builders.
// Data files come from Data Dragon (versioned) or Community Dragon (latest).

use crate::config::Config;

const CDRAGON_GAME_DATA: &str = "latest/plugins/rcp-be-lol-game-data/global/default/v1";

/// Data Dragon versions list, newest first.
pub fn versions_url(config: &Config) -> String {
    format!("{}/api/versions.json", config.ddragon_url)
}

/// Versioned Data Dragon CDN root.
pub fn ddragon_cdn(config: &Config, version: &str) -> String {
    format!("{}/cdn/{}", config.ddragon_url, version)
}

/// Localised Data Dragon data file, e.g. `champion.json`.
pub fn ddragon_data_url(config: &Config, version: &str, file: &str) -> String {
    format!(
        "{}/data/{}/{}",
        ddragon_cdn(config, version),
        config.locale,
        file
    )
}

/// Per-champion Data Dragon file.
pub fn champion_details_url(config: &Config, version: &str, champion_id: &str) -> String {
    ddragon_data_url(config, version, &format!("champion/{}.json", champion_id))
}

/// Community Dragon game-data file, e.g. `perks.json`.
pub fn cdragon_data_url(config: &Config, file: &str) -> String {
    format!("{}/{}/{}", config.cdragon_raw_url, CDRAGON_GAME_DATA, file)
}

/// Square champion icon. Community Dragon needs no version, so this stays synchronous.
pub fn champion_icon(config: &Config, champion_id: &str) -> String {
    cdragon_data_url(config, &format!("champion-icons/{}.png", champion_id))
}

pub fn champion_splash(config: &Config, champion_id: &str, skin_num: u32) -> String {
    format!(
        "{}/cdn/img/champion/splash/{}_{}.jpg",
        config.ddragon_url, champion_id, skin_num
    )
}

pub fn champion_loading(config: &Config, champion_id: &str, skin_num: u32) -> String {
    format!(
        "{}/cdn/img/champion/loading/{}_{}.jpg",
        config.ddragon_url, champion_id, skin_num
    )
}

/// Ability or passive icon by Data Dragon image name.
pub fn spell_icon(config: &Config, image_name: &str) -> String {
    format!(
        "{}/latest/game/assets/characters/shared/spells/icons2d/{}",
        config.cdragon_raw_url,
        image_name.to_lowercase()
    )
}

pub fn item_icon(config: &Config, image_name: &str) -> String {
    format!(
        "{}/latest/game/assets/items/icons2d/{}",
        config.cdragon_raw_url,
        image_name.to_lowercase()
    )
}

/// Community Dragon asset from a `/lol-game-data/...` style path.
/// Used for runes, emotes, ward skins and challenges. Empty in, empty out.
pub fn asset_url(config: &Config, asset_path: &str) -> String {
    if asset_path.is_empty() {
        return String::new();
    }
    format!("{}/latest{}", config.cdragon_raw_url, asset_path.to_lowercase())
}

pub fn profile_icon(config: &Config, icon_id: u64) -> String {
    cdragon_data_url(config, &format!("profile-icons/{}.jpg", icon_id))
}

pub fn summoner_spell_icon(config: &Config, version: &str, image_name: &str) -> String {
    format!("{}/img/spell/{}", ddragon_cdn(config, version), image_name)
}

pub fn skin_splash(config: &Config, champion_id: u64, skin_num: u32) -> String {
    format!(
        "{}/latest/champion/{}/splash-art/skin/{}",
        config.cdragon_cdn_url, champion_id, skin_num
    )
}

pub fn skin_tile(config: &Config, champion_id: u64, skin_num: u32) -> String {
    format!(
        "{}/latest/champion/{}/tile/skin/{}",
        config.cdragon_cdn_url, champion_id, skin_num
    )
}

pub fn skin_splash_centered(config: &Config, champion_id: u64, skin_num: u32) -> String {
    format!(
        "{}/latest/champion/{}/splash-art/centered/skin/{}",
        config.cdragon_cdn_url, champion_id, skin_num
    )
}

pub fn skin_portrait(config: &Config, champion_id: u64, skin_num: u32) -> String {
    format!(
        "{}/latest/champion/{}/portrait/skin/{}",
        config.cdragon_cdn_url, champion_id, skin_num
    )
}

/// Square champion portrait by numeric champion id.
pub fn champion_square(config: &Config, champion_id: u64) -> String {
    format!("{}/latest/champion/{}/square", config.cdragon_cdn_url, champion_id)
}

/// Community Dragon champion record by numeric champion id.
pub fn cdragon_champion_url(config: &Config, champion_id: u64) -> String {
    format!("{}/latest/champion/{}/data", config.cdragon_cdn_url, champion_id)
}

/// Ability slot for [`ability_icon`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbilitySlot {
    Passive,
    Q,
    W,
    E,
    R,
}

impl AbilitySlot {
    pub const ALL: [AbilitySlot; 5] = [
        AbilitySlot::Passive,
        AbilitySlot::Q,
        AbilitySlot::W,
        AbilitySlot::E,
        AbilitySlot::R,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AbilitySlot::Passive => "p",
            AbilitySlot::Q => "q",
            AbilitySlot::W => "w",
            AbilitySlot::E => "e",
            AbilitySlot::R => "r",
        }
    }
}

pub fn ability_icon(config: &Config, champion_id: u64, slot: AbilitySlot) -> String {
    format!(
        "{}/latest/champion/{}/ability-icon/{}",
        config.cdragon_cdn_url,
        champion_id,
        slot.as_str()
    )
}

pub fn ward_icon(config: &Config, ward_id: i64) -> String {
    format!("{}/latest/ward/{}", config.cdragon_cdn_url, ward_id)
}

pub fn ward_shadow(config: &Config, ward_id: i64) -> String {
    format!("{}/latest/ward/{}/shadow", config.cdragon_cdn_url, ward_id)
}

pub fn honor_icon(config: &Config, honor_id: u32, level: u32) -> String {
    format!(
        "{}/latest/honor/{}/level/{}",
        config.cdragon_cdn_url, honor_id, level
    )
}

pub fn honor_emblem(config: &Config, honor_id: u32, level: u32) -> String {
    format!(
        "{}/latest/honor/emblem/{}/level/{}",
        config.cdragon_cdn_url, honor_id, level
    )
}

/// Meraki Analytics champion file, which carries ARAM balance stats.
pub fn meraki_champions_url(config: &Config) -> String {
    format!(
        "{}/riot/lol/resources/latest/en-US/champions.json",
        config.meraki_url
    )
}
