//! Binary entrypoint for the craftplan CLI.
//!
//! Commands:
//! - `init` - write a starter `craftplan.toml`
//! - `plan [--catalog <path>] [--character <path>] [--profession <name>] [--json]` - report craftability
//! - `level <xp>` - resolve an experience value to a skill level
//! - `check <path>` - validate a character record without planning
//!
//! See the library crate docs for module-level details: `craftplan::`.
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{error, info, warn};

use craftplan::config::Config;
use craftplan::crafting::{
    format_plan_compact, level_for_xp, load_catalog_from_json, load_character_from_json,
    load_icon_index_from_json, Planner,
};

#[derive(Parser)]
#[command(name = "craftplan")]
#[command(about = "Work out which recipes a character can craft right now")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path (can be used before or after subcommand)
    #[arg(short, long, default_value = "craftplan.toml", global = true)]
    config: String,

    /// Verbose logging (-v, -vv for more; may appear before or after subcommand)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default configuration file
    Init,
    /// Evaluate every recipe against the character
    Plan {
        /// Recipe catalog JSON (overrides config)
        #[arg(long)]
        catalog: Option<String>,
        /// Character record JSON (overrides config)
        #[arg(long)]
        character: Option<String>,
        /// Only show this profession group
        #[arg(short, long)]
        profession: Option<String>,
        /// Only show recipes craftable in at least one tier
        #[arg(long)]
        craftable_only: bool,
        /// Print the plan as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the skill level for an experience value
    Level {
        xp: u64,
    },
    /// Validate a character record
    Check {
        path: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Only a missing file falls back to defaults; parse errors surface in `plan`
    let pre_config = match cli.command {
        Commands::Init => Ok(None),
        _ => Config::load_optional(&cli.config).await,
    };
    init_logging(pre_config.as_ref().ok().and_then(|c| c.as_ref()), cli.verbose);

    match cli.command {
        Commands::Init => {
            info!("Initializing new craftplan configuration");
            Config::create_default(&cli.config).await?;
            info!("Configuration file created at {}", cli.config);
        }
        Commands::Plan {
            catalog,
            character,
            profession,
            craftable_only,
            json,
        } => {
            let config = match pre_config? {
                Some(config) => config,
                None => {
                    warn!("No config file at {}; using defaults", cli.config);
                    Config::default()
                }
            };
            let catalog_path = catalog.unwrap_or_else(|| config.catalog.path.clone());
            let character_path = character.unwrap_or_else(|| config.character.path.clone());

            let recipes = load_catalog_from_json(&catalog_path)
                .with_context(|| format!("loading catalog {}", catalog_path))?;
            let record = load_character_from_json(&character_path)
                .with_context(|| format!("loading character {}", character_path))?;

            let mut planner = Planner::new(recipes)
                .with_character(record)
                .with_unaffiliated_group(&config.planner.unaffiliated_group);
            if let Some(icons_path) = &config.catalog.icons {
                match load_icon_index_from_json(icons_path) {
                    Ok(icons) => planner = planner.with_icons(icons),
                    Err(e) => warn!("Icon index {} not loaded: {}", icons_path, e),
                }
            }

            let mut plan = planner.plan().clone();
            if let Some(name) = profession {
                plan.professions.retain(|p| p.profession.eq_ignore_ascii_case(&name));
                if plan.professions.is_empty() {
                    warn!("No recipes for profession '{}'", name);
                }
            }
            info!("{} recipes craftable", plan.craftable_count());

            if json {
                println!("{}", serde_json::to_string_pretty(&plan)?);
            } else {
                let craftable_only = craftable_only || config.planner.craftable_only;
                for line in format_plan_compact(&plan, craftable_only) {
                    println!("{}", line);
                }
            }
        }
        Commands::Level { xp } => {
            if let Err(e) = &pre_config {
                warn!("Ignoring config: {:#}", e);
            }
            println!("{}", level_for_xp(xp));
        }
        Commands::Check { path } => {
            if let Err(e) = &pre_config {
                warn!("Ignoring config: {:#}", e);
            }
            match load_character_from_json(&path) {
                Ok(record) => {
                    println!(
                        "ok: {} skills, {} inventory keys, {} bank keys",
                        record.skills.len(),
                        record.inventory.len(),
                        record.bank.len()
                    );
                }
                Err(e) => {
                    error!("{} rejected: {}", path, e);
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}

fn init_logging(config: Option<&Config>, verbosity: u8) {
    use std::io::Write;
    let mut builder = env_logger::Builder::new();
    // CLI verbosity overrides the configured level
    let base_level = match verbosity {
        0 => config
            .map(|cfg| cfg.logging.level_filter())
            .unwrap_or(log::LevelFilter::Info),
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(base_level);

    let log_file = config
        .and_then(|cfg| cfg.logging.file.as_ref())
        .and_then(|file| {
            std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(file)
                .ok()
        });

    if let Some(f) = log_file {
        let write_mutex = std::sync::Arc::new(std::sync::Mutex::new(f));
        // Mirror to the console only when attached to a terminal
        let is_tty = atty::is(atty::Stream::Stdout);
        builder.format(move |fmt, record| {
            let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
            let line = format!("{} [{}] {}", ts, record.level(), record.args());
            if let Ok(mut guard) = write_mutex.lock() {
                let _ = writeln!(guard, "{}", line);
            }
            if is_tty {
                writeln!(fmt, "{}", line)
            } else {
                Ok(())
            }
        });
    } else {
        builder.format(|fmt, record| {
            let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
            writeln!(fmt, "{} [{}] {}", ts, record.level(), record.args())
        });
    }
    let _ = builder.try_init();
}
