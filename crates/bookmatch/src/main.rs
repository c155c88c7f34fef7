//! BookMatch - Entry Point
//!
//! Command line front end of the recommendation layer. Every command loads
//! the configuration, wires the gateway over the configured cache backend and
//! seed catalog, runs once, prints JSON on stdout and releases the cache.
//!
//! | Command | Description |
//! |---------|-------------|
//! | `recommend --user <id>` | Personalized list, optionally seeded |
//! | `similar --item <id>` | Items similar to a book |
//! | `invalidate --user <id>` | Drop a user's cached lists |
//! | `providers` | Registered cache backends |

// Force-link bookmatch-providers to ensure linkme registrations are included
extern crate bookmatch_providers;

use anyhow::Context;
use bookmatch_application::ports::registry::list_cache_backends;
use bookmatch_application::use_cases::clamp_limit;
use bookmatch_domain::value_objects::{ItemId, UserId};
use bookmatch_infrastructure::logging::init_logging;
use bookmatch_infrastructure::{AppContext, ConfigLoader, init_app};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

/// Command line interface for BookMatch recommendations
#[derive(Parser, Debug)]
#[command(name = "bookmatch")]
#[command(about = "BookMatch - Recommendation serving and caching")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Personalized recommendations for a user
    Recommend {
        /// User identifier
        #[arg(long)]
        user: String,
        /// Number of items (default and maximum come from the configuration)
        #[arg(long)]
        limit: Option<usize>,
        /// Extra items joining the user's own when building the taste profile
        #[arg(long = "seed")]
        seeds: Vec<String>,
    },
    /// Items similar to a book
    Similar {
        /// Item identifier
        #[arg(long)]
        item: String,
        /// Number of items (default and maximum come from the configuration)
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Drop every cached list of a user
    Invalidate {
        /// User identifier
        #[arg(long)]
        user: String,
    },
    /// List registered cache backends
    Providers,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BackendInfo {
    name: &'static str,
    description: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InvalidationReport {
    user_id: UserId,
    removed: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.command == Command::Providers {
        let backends: Vec<BackendInfo> = list_cache_backends()
            .into_iter()
            .map(|(name, description)| BackendInfo { name, description })
            .collect();
        return print_json(&backends);
    }

    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let config = loader.load().context("Failed to load configuration")?;
    init_logging(&config.logging).context("Failed to initialize logging")?;

    let context = init_app(config)
        .await
        .context("Failed to initialize recommendation gateway")?;
    let outcome = run(&context, cli.command).await;
    context
        .shutdown()
        .await
        .context("Failed to shut down cache backend")?;
    outcome
}

async fn run(context: &AppContext, command: Command) -> anyhow::Result<()> {
    let gateway = context.gateway();
    let limits = &context.config.recommendations;

    match command {
        Command::Recommend { user, limit, seeds } => {
            let user = UserId::new(user);
            let limit = clamp_limit(limit, limits.default_user_limit, limits.max_limit);
            let seeds: Vec<ItemId> = seeds.into_iter().map(ItemId::new).collect();
            let recs = gateway
                .get_user_recommendations_seeded(&user, limit, &seeds)
                .await;
            print_json(&recs)
        }
        Command::Similar { item, limit } => {
            let item = ItemId::new(item);
            let limit = clamp_limit(limit, limits.default_similar_limit, limits.max_limit);
            print_json(&gateway.get_similar_items(&item, limit).await)
        }
        Command::Invalidate { user } => {
            let user_id = UserId::new(user);
            let removed = gateway.invalidate_user(&user_id).await;
            print_json(&InvalidationReport { user_id, removed })
        }
        Command::Providers => Ok(()),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to encode output")?;
    println!("{json}");
    Ok(())
}
