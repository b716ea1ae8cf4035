//! CLI command definitions.

use clap::{Parser, Subcommand, ValueEnum};
use sekai_honors::{Server, SyncType};

/// Sekai honors - mirror honor masterdata into PostgreSQL and query it
#[derive(Parser, Debug)]
#[command(name = "sekai-honors")]
#[command(about = "Mirror Sekai honor masterdata into PostgreSQL and query it", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// PostgreSQL URL (overrides configuration and DATABASE_URL)
    #[arg(long, global = true)]
    pub database_url: Option<String>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Apply pending schema migrations
    Migrate,

    /// Sync masterdata from upstream into the store
    Sync {
        /// Server to sync (repeatable; defaults to configured servers)
        #[arg(long = "server", short = 's')]
        servers: Vec<Server>,

        /// Sync every known server
        #[arg(long, conflicts_with = "servers")]
        all: bool,
    },

    /// Query ordinary honors
    #[command(subcommand)]
    Honors(HonorsCommands),

    /// Query bonds honors
    #[command(subcommand)]
    Bonds(BondsCommands),

    /// Query honor groups
    #[command(subcommand)]
    Groups(GroupsCommands),

    /// Show recent sync runs
    Logs {
        /// Only runs for this server
        #[arg(long, short = 's')]
        server: Option<Server>,

        /// Only runs of this type (honors, bonds_honors, honor_groups)
        #[arg(long = "type")]
        sync_type: Option<SyncType>,

        /// Maximum number of rows
        #[arg(long, default_value = "20")]
        limit: i64,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },
}

/// Honor subcommands
#[derive(Subcommand, Debug)]
pub enum HonorsCommands {
    /// List honors joined with their group
    List {
        /// Server to query
        #[arg(long, short = 's')]
        server: Server,

        /// Only honors in this group
        #[arg(long)]
        group: Option<i32>,

        /// Only honors of this rarity
        #[arg(long)]
        rarity: Option<String>,

        /// Maximum number of rows
        #[arg(long)]
        limit: Option<i64>,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Show one honor joined with its group
    Show {
        /// Server to query
        #[arg(long, short = 's')]
        server: Server,

        /// Honor id
        id: i32,
    },
}

/// Bonds honor subcommands
#[derive(Subcommand, Debug)]
pub enum BondsCommands {
    /// List bonds honors
    List {
        /// Server to query
        #[arg(long, short = 's')]
        server: Server,

        /// Only bonds honors in this bonds group
        #[arg(long)]
        group: Option<i32>,

        /// Only bonds honors involving this character unit
        #[arg(long)]
        character: Option<i32>,

        /// Only bonds honors of this rarity
        #[arg(long)]
        rarity: Option<String>,

        /// Maximum number of rows
        #[arg(long)]
        limit: Option<i64>,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Show one bonds honor
    Show {
        /// Server to query
        #[arg(long, short = 's')]
        server: Server,

        /// Bonds honor id
        id: i32,
    },
}

/// Honor group subcommands
#[derive(Subcommand, Debug)]
pub enum GroupsCommands {
    /// List honor groups
    List {
        /// Server to query
        #[arg(long, short = 's')]
        server: Server,

        /// Only groups of this honor type
        #[arg(long = "type")]
        honor_type: Option<String>,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },
}

/// Output format for query commands
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Human,
    /// Pretty-printed JSON
    Json,
}
