//! World Exporter CLI
//!
//! Generates the club or player population for a season and writes it out
//! as JSON, or decodes a single entity ID back into its hierarchy address.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fl_core::{AttributeTable, HierarchyConfig, WorldGenerator};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fl_cli")]
#[command(about = "Generate and inspect league world populations", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the club population as a JSON array
    Clubs {
        /// Season year baked into every ID
        #[arg(long, default_value = "2024")]
        season: u32,

        /// World seed for attribute jitter
        #[arg(long, default_value = "0")]
        seed: u64,

        /// Output JSON file path
        #[arg(long)]
        out: PathBuf,

        /// Only export the first N records
        #[arg(long)]
        limit: Option<u64>,
    },

    /// Generate the player population as a JSON array
    Players {
        /// Season year baked into every ID
        #[arg(long, default_value = "2024")]
        season: u32,

        /// World seed for attribute jitter
        #[arg(long, default_value = "0")]
        seed: u64,

        /// Output JSON file path
        #[arg(long)]
        out: PathBuf,

        /// Only export the first N records
        #[arg(long)]
        limit: Option<u64>,
    },

    /// Decode an entity ID and print its hierarchy address
    Inspect {
        /// Club or player ID string
        id: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = HierarchyConfig::default();

    match cli.command {
        Commands::Clubs { season, seed, out, limit } => {
            let generator =
                WorldGenerator::new(season, config, AttributeTable::default_tables(), seed)?;
            println!("Generating clubs...");
            println!("   Season: {season}");
            println!("   Output: {}", out.display());
            export(generator.clubs(), limit, &out)?;
        }
        Commands::Players { season, seed, out, limit } => {
            let generator =
                WorldGenerator::new(season, config, AttributeTable::default_tables(), seed)?;
            println!("Generating players...");
            println!("   Season: {season}");
            println!("   Output: {}", out.display());
            export(generator.players(), limit, &out)?;
        }
        Commands::Inspect { id } => {
            // Field count tells the two schemas apart; try the finer one first.
            if let Ok(addr) = fl_core::decode_player_id(&id, &config) {
                println!("{}", serde_json::to_string_pretty(&addr)?);
            } else {
                let addr = fl_core::decode_club_id(&id, &config)
                    .with_context(|| format!("`{id}` is neither a player nor a club ID"))?;
                println!("{}", serde_json::to_string_pretty(&addr)?);
            }
        }
    }

    Ok(())
}

fn export(
    records: impl Iterator<Item = fl_core::Result<fl_core::EntityRecord>>,
    limit: Option<u64>,
    out: &PathBuf,
) -> Result<()> {
    let take = limit.unwrap_or(u64::MAX) as usize;
    let records: Vec<_> = records.take(take).collect::<fl_core::Result<_>>()?;
    let json = serde_json::to_string_pretty(&records)?;
    std::fs::write(out, json).with_context(|| format!("writing {}", out.display()))?;
    println!("   Records: {}", records.len());
    Ok(())
}
