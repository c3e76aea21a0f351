// riftdex command-line entry point.
// Fetches game data through one shared cache and prints one line per entry.

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use riftdex::api::endpoints::{self, AbilitySlot};
use riftdex::services::{
    ChallengeFilter, ChallengeProgress, EmoteFilter, IconSort, ItemFilter, ItemSort, ProfileIconFilter, RuneFilter,
    SkinFilter, SkinSort, SpellFilter, SpellSort, WardFilter, WardSort,
    filter_challenges, filter_emotes, filter_items, filter_profile_icons, filter_runes,
    filter_skins, filter_summoner_spells, filter_ward_skins, item_tier, sort_items,
    sort_profile_icons, sort_skins, sort_summoner_spells, sort_ward_skins,
};
use riftdex::{Config, GameData, Result};

#[derive(Parser)]
#[command(name = "riftdex", version, about = "Browse League of Legends game data")]
struct Cli {
    /// Enable debug logging (cache hits and misses)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Latest Data Dragon patch
    Version,
    /// Champion roster
    Champions {
        /// Only the N most recent releases
        #[arg(long)]
        latest: Option<usize>,
    },
    /// Details for one champion, e.g. Ahri
    Champion { id: String },
    /// Item shop
    Items {
        #[arg(short, long)]
        search: Option<String>,
        #[arg(long)]
        tag: Vec<String>,
        #[arg(long)]
        purchasable: bool,
        /// Most expensive first
        #[arg(long)]
        by_price: bool,
    },
    /// Skins from the local dataset
    Skins {
        #[arg(short, long)]
        search: Option<String>,
        #[arg(long)]
        prestige: bool,
        /// Newest release first
        #[arg(long)]
        newest: bool,
    },
    /// Runes
    Runes {
        #[arg(short, long)]
        search: Option<String>,
        #[arg(long)]
        keystones: bool,
    },
    /// Summoner emotes
    Emotes {
        #[arg(short, long)]
        search: Option<String>,
        /// Numeric champion id
        #[arg(long)]
        champion: Option<i64>,
    },
    /// Ward skins
    Wards {
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Profile icons
    Icons {
        #[arg(long)]
        min: Option<u64>,
        #[arg(long)]
        max: Option<u64>,
    },
    /// Summoner spells
    Spells {
        #[arg(short, long)]
        search: Option<String>,
        /// Game mode, e.g. ARAM
        #[arg(long)]
        mode: Option<String>,
    },
    /// Challenges
    Challenges {
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Tier and progress for a completion count, e.g. `tier 42 170`
    Tier { completed: usize, total: usize },
    /// ARAM balance modifiers
    Aram {
        /// Data Dragon champion id, e.g. Ahri
        champion: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "riftdex=debug,info"
    } else {
        "riftdex=info,warn"
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let data = GameData::new(Config::from_env()?)?;
    run(&data, cli.command).await?;

    debug!(entries = data.cache().size(), "done");
    Ok(())
}

async fn run(data: &GameData, command: Command) -> Result<()> {
    let config = data.config();

    match command {
        Command::Version => {
            println!("{}", data.latest_version().await);
        }
        Command::Champions { latest } => {
            let champions = match latest {
                Some(count) => data.latest_champions(count).await?,
                None => data.all_champions().await?.to_vec(),
            };
            for c in champions {
                println!("{:<14} {:<4} {}", c.id, c.key, c.title);
            }
        }
        Command::Champion { id } => {
            let details = data.champion_details(&id).await?;
            let summary = &details.summary;
            println!("{}, {}", summary.name, summary.title);
            println!("  icon: {}", endpoints::champion_icon(config, &summary.id));
            println!(
                "  passive: {} ({})",
                details.passive.name,
                endpoints::spell_icon(config, &details.passive.image.full)
            );
            if let Ok(key) = summary.key.parse::<u64>() {
                println!("  square: {}", endpoints::champion_square(config, key));
                let cdragon = data.champion_data(key).await?;
                println!("  roles: {}", cdragon.roles.join(", "));
                for slot in AbilitySlot::ALL {
                    println!(
                        "  {} {}",
                        slot.as_str(),
                        endpoints::ability_icon(config, key, slot)
                    );
                }
            }
            for spell in &details.spells {
                println!("  {:<12} {}", spell.id, spell.name);
            }
            for skin in &details.skins {
                println!(
                    "  skin {:>2} {:<30} {}",
                    skin.num,
                    skin.name,
                    endpoints::champion_splash(config, &summary.id, skin.num)
                );
            }
        }
        Command::Items {
            search,
            tag,
            purchasable,
            by_price,
        } => {
            let items = data.all_items().await?;
            let filter = ItemFilter {
                search,
                tags: tag,
                purchasable_only: purchasable,
                ..Default::default()
            };
            let mut entries = filter_items(items.iter(), &filter);
            sort_items(
                &mut entries,
                if by_price { ItemSort::Price } else { ItemSort::Name },
            );
            for (id, item) in entries {
                println!(
                    "{:<6} {:<32} {:>5}g {:<10} {}",
                    id,
                    item.name,
                    item.gold.total,
                    item_tier(item).label(),
                    endpoints::item_icon(config, &item.image.full)
                );
            }
        }
        Command::Skins {
            search,
            prestige,
            newest,
        } => {
            let skins = data.all_skins().await?;
            let filter = SkinFilter {
                search,
                prestige,
                ..Default::default()
            };
            let mut matches = filter_skins(&skins, &filter);
            sort_skins(
                &mut matches,
                if newest { SkinSort::Date } else { SkinSort::Name },
            );
            for skin in matches {
                println!(
                    "{:<40} {:<12} {}",
                    skin.name,
                    skin.champion,
                    endpoints::skin_tile(config, skin.champion_id, skin.num)
                );
            }
        }
        Command::Runes { search, keystones } => {
            let runes = data.all_runes().await?;
            let filter = RuneFilter {
                search,
                keystones_only: keystones,
            };
            for rune in filter_runes(&runes, &filter) {
                println!(
                    "{:<6} {:<28} {}",
                    rune.id,
                    rune.name,
                    endpoints::asset_url(config, &rune.icon_path)
                );
            }
        }
        Command::Emotes { search, champion } => {
            let emotes = data.all_emotes().await?;
            let filter = EmoteFilter {
                search,
                champion_id: champion,
            };
            for emote in filter_emotes(&emotes, &filter) {
                println!(
                    "{:<6} {:<40} {}",
                    emote.id,
                    emote.name,
                    endpoints::asset_url(config, &emote.inventory_icon)
                );
            }
        }
        Command::Wards { search } => {
            let wards = data.all_ward_skins().await?;
            let mut matches = filter_ward_skins(&wards, &WardFilter { search });
            sort_ward_skins(&mut matches, WardSort::Name);
            for ward in matches {
                println!(
                    "{:<5} {:<40} {}",
                    ward.id,
                    ward.name,
                    endpoints::ward_icon(config, ward.id)
                );
            }
        }
        Command::Icons { min, max } => {
            let icons = data.all_profile_icons().await?;
            let filter = ProfileIconFilter {
                id_min: min,
                id_max: max,
                ..Default::default()
            };
            let mut matches = filter_profile_icons(icons.iter(), &filter);
            sort_profile_icons(&mut matches, IconSort::IdAsc);
            for icon in matches {
                println!("{:<6} {}", icon.id, endpoints::profile_icon(config, icon.id));
            }
        }
        Command::Spells { search, mode } => {
            let version = data.latest_version().await;
            let spells = data.all_summoner_spells().await?;
            let mut matches = filter_summoner_spells(spells.iter(), &SpellFilter { search, mode });
            sort_summoner_spells(&mut matches, SpellSort::Level);
            for spell in matches {
                println!(
                    "{:<10} lvl {:<2} {}",
                    spell.name,
                    spell.summoner_level,
                    endpoints::summoner_spell_icon(config, &version, &spell.image.full)
                );
            }
        }
        Command::Challenges { search } => {
            let challenges = data.all_challenges().await?;
            for challenge in filter_challenges(&challenges, &ChallengeFilter { search }) {
                println!(
                    "{:<8} {:<40} {}",
                    challenge.id,
                    challenge.name,
                    endpoints::asset_url(config, &challenge.icon_path)
                );
            }
        }
        Command::Tier { completed, total } => {
            let progress = ChallengeProgress::new(completed, total);
            let tier = progress.tier();
            println!(
                "{}/{} ({}%) {} {}",
                progress.current,
                progress.total,
                progress.percentage,
                tier.label(),
                tier.color()
            );
        }
        Command::Aram { champion } => {
            let stats = data.aram_stats().await?;
            for (id, m) in stats.iter() {
                if champion.as_deref().is_some_and(|wanted| wanted != id.as_str()) {
                    continue;
                }
                println!(
                    "{:<14} dealt {:+5.1}% taken {:+5.1}% healing {:+5.1}% shielding {:+5.1}% haste {}",
                    id, m.damage_dealt, m.damage_taken, m.healing, m.shielding, m.ability_haste
                );
            }
        }
    }

    Ok(())
}
