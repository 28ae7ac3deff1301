//! recseed CLI library
//!
//! One-shot seeding of a remote recommendation catalog:
//!
//! - **Schema sync**: declare item/user properties, tolerating ones that
//!   already exist (`recseed run`)
//! - **Item upload**: map a song-metadata CSV into catalog items, capped at
//!   1000 records
//! - **User upload**: synthesize a small set of fixture users
//! - **Connectivity check**: probe the catalog endpoint (`recseed check`)
//!
//! All state lives in the remote catalog; the tool keeps nothing locally.

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod progress;
pub mod schema;
pub mod tracks;
pub mod upload;
pub mod users;

// Re-export commonly used types
pub use config::Config;
pub use error::{Result, SeedError};

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// recseed - recommendation catalog seeder
#[derive(Parser, Debug)]
#[command(name = "recseed")]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Catalog API base URL (overrides the region)
    #[arg(long, env = "RECSEED_API_URL", global = true)]
    pub api_url: Option<String>,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Seed the catalog: schemas, items from a CSV, then synthetic users
    Run {
        /// Path to the track CSV file
        csv: PathBuf,

        /// Maximum number of CSV records to read
        #[arg(long, default_value_t = tracks::DEFAULT_TRACK_CAP)]
        limit: usize,

        /// Number of synthetic users to generate
        #[arg(long, default_value_t = 20)]
        users: usize,

        /// Seed items only, skip user generation
        #[arg(long)]
        skip_users: bool,

        /// Random seed for reproducible user generation
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Check catalog connectivity and credentials
    Check,
}
