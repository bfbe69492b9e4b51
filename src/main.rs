//! Creature Effects - Immunity Report
//!
//! Loads the effect data directory, builds a monster or a character, and
//! prints which effects it is immune to or resists.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use creature_effects::core::types::MonsterTypeId;
use creature_effects::core::{config as effects_config, set_config};
use creature_effects::report::{build_report, render_text};
use creature_effects::{Character, Creature, EffectsConfig, GameData, Monster, Result};

/// Report effect immunity for a monster type or a character
#[derive(Parser, Debug)]
#[command(name = "creature-effects")]
#[command(about = "Report which status effects a creature is immune to or resists")]
struct Args {
    /// Directory holding effects.toml, species.toml, materials.toml and monsters.toml
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Optional config TOML
    #[arg(long)]
    config: Option<PathBuf>,

    /// Monster type id to report on
    #[arg(long, conflicts_with = "traits")]
    monster: Option<String>,

    /// Character trait (repeatable); without --monster a character is used
    #[arg(long = "trait", value_name = "TRAIT")]
    traits: Vec<String>,

    /// Output format: json or text
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = if args.verbose {
        "creature_effects=debug"
    } else {
        "creature_effects=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(&args) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<String> {
    let mut config = match &args.config {
        Some(path) => EffectsConfig::load_from_toml(path)?,
        None => EffectsConfig::default(),
    };
    if let Some(dir) = &args.data_dir {
        config.data_dir = dir.clone();
    }
    if set_config(config).is_err() {
        tracing::warn!("Effects config already set, keeping the existing one");
    }

    let data = GameData::load(effects_config())?;

    let creature: Creature = match &args.monster {
        Some(id) => Monster::new(data, &MonsterTypeId::new(id.as_str()))?.into(),
        None => {
            let mut character = Character::new(data).with_name("Character");
            for trait_id in &args.traits {
                character.set_trait(trait_id.as_str());
            }
            character.into()
        }
    };

    let report = build_report(&creature);
    match args.format.as_str() {
        "json" => Ok(serde_json::to_string_pretty(&report)?),
        "text" => Ok(render_text(&report)),
        other => {
            tracing::warn!("Unknown format '{}', using text", other);
            Ok(render_text(&report))
        }
    }
}
