//! Storyteller CLI
//!
//! Builds a highlight story from the configured match feed, squads and asset catalog.

mod logging;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use match_feed::{AssetCatalog, Event, PlayerDirectory, PlayerId};
use story_core::{AssetMatcher, JsonDirStore, StoryBuilder, StoryConfig, StoryStore};

#[derive(Parser)]
#[command(name = "storyteller")]
#[command(about = "Build highlight stories from match event feeds", long_about = None)]
struct Cli {
    /// TOML config file (defaults are used when omitted)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a story from the configured match and squad files
    Build {
        /// Number of highlight pages to include
        #[arg(long = "n")]
        top_n: Option<usize>,

        /// Output JSON filename inside the output directory
        #[arg(long, default_value = "story.json")]
        out: String,
    },

    /// Show which catalog image an event would get
    PickAsset {
        /// Event type, e.g. "penalty goal"
        #[arg(long = "type")]
        event_type: String,

        /// Player names involved (repeatable)
        #[arg(long = "player")]
        players: Vec<String>,
    },

    /// Resolve a player id against both squads
    LookupPlayer {
        /// Feed player id
        id: String,
    },
}

fn main() -> Result<()> {
    logging::init_tracing();
    let cli = Cli::parse();

    let config = StoryConfig::load_or_default(cli.config.as_deref())
        .context("failed to load configuration")?;

    match cli.command {
        Commands::Build { top_n, out } => {
            let builder = StoryBuilder::new(config.story.clone());
            let top_n = top_n.unwrap_or(config.story.top_n);
            tracing::info!(top_n, out = %out, "building story");

            let story = builder
                .build_from_paths(&config.paths, top_n)
                .context("failed to build story")?;
            let path = JsonDirStore::new(&config.paths.out_dir)
                .save(&story, &out)
                .context("failed to save story")?;

            println!("Story written to {}", path.display());
        }

        Commands::PickAsset {
            event_type,
            players,
        } => {
            let catalog = AssetCatalog::load(&config.paths.asset_descriptions)
                .context("failed to load asset catalog")?;
            let matcher = AssetMatcher::new(&config.story.asset_root, &config.story.placeholder_image);

            let chosen = matcher.pick(&Event::new(event_type), &players, &catalog);
            println!("Chosen asset: {}", chosen);
        }

        Commands::LookupPlayer { id } => {
            let home = PlayerDirectory::load(&config.paths.home_squad)
                .context("failed to load home squad")?;
            let away = PlayerDirectory::load(&config.paths.away_squad)
                .context("failed to load away squad")?;
            println!("Total players loaded: {}", home.len() + away.len());

            let players = PlayerDirectory::union(home, away);
            match players.resolve(&PlayerId::new(id)) {
                Some(name) => println!("Lookup: {}", name),
                None => println!("Lookup: unknown"),
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_build_arguments() {
        let cli = Cli::try_parse_from(["storyteller", "build", "--n", "3", "--out", "derby.json"]).unwrap();
        match cli.command {
            Commands::Build { top_n, out } => {
                assert_eq!(top_n, Some(3));
                assert_eq!(out, "derby.json");
            }
            _ => panic!("expected build"),
        }
    }

    #[test]
    fn test_build_defaults_and_global_config() {
        let cli = Cli::try_parse_from(["storyteller", "build", "--config", "st.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("st.toml")));
        match cli.command {
            Commands::Build { top_n, out } => {
                assert_eq!(top_n, None);
                assert_eq!(out, "story.json");
            }
            _ => panic!("expected build"),
        }
    }

    #[test]
    fn test_pick_asset_collects_players() {
        let cli = Cli::try_parse_from([
            "storyteller",
            "pick-asset",
            "--type",
            "penalty goal",
            "--player",
            "Arne Engels",
            "--player",
            "Johnny Kenny",
        ])
        .unwrap();
        match cli.command {
            Commands::PickAsset { event_type, players } => {
                assert_eq!(event_type, "penalty goal");
                assert_eq!(players, vec!["Arne Engels", "Johnny Kenny"]);
            }
            _ => panic!("expected pick-asset"),
        }
    }
}
