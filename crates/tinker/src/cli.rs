//! Clap derive structures for the `tinker` CLI.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// tinker -- navigate and query the Tinker Space Command dashboard
#[derive(Debug, Parser)]
#[command(
    name = "tinker",
    version,
    about = "Resolve dashboard routes and query sensor and space telemetry",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Config file (defaults to the platform config directory)
    #[arg(long, env = "TINKER_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// API base URL (overrides config and TINKER_API_BASE_URL)
    #[arg(long, short = 'b', global = true)]
    pub base_url: Option<String>,

    /// Request timeout in seconds (default: wait indefinitely)
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Output format
    #[arg(long, short = 'o', default_value = "json", global = true)]
    pub output: OutputFormat,

    /// Print the request that would be sent instead of sending it
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON (default)
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Pretty table where the data is tabular, JSON otherwise
    Table,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the dashboard route table
    Routes,

    /// Resolve a navigation path to a view and its parameters
    Resolve {
        /// Path such as /sensor/42
        path: String,
    },

    /// Build the navigation path for a named view
    Link {
        /// Route name: Dashboard, Sensors, Sensor, Spaces or Space
        view: String,

        /// Entity ID, required by the Sensor and Space views
        #[arg(long)]
        id: Option<String>,
    },

    /// Resolve a path and fetch the data its view displays
    Open {
        /// Path such as /space/lab
        path: String,
    },

    /// Query sensors
    #[command(alias = "s")]
    Sensors(SensorsArgs),

    /// Query spaces
    #[command(alias = "sp")]
    Spaces(SpacesArgs),

    /// Query one sensor channel over a date range
    Query(QueryArgs),

    /// Inspect or create the config file
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Resources ────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct SensorsArgs {
    #[command(subcommand)]
    pub command: SensorsCommand,
}

#[derive(Debug, Subcommand)]
pub enum SensorsCommand {
    /// List all sensors
    #[command(alias = "ls")]
    List,
    /// Show one sensor
    Get {
        /// Sensor ID
        id: String,
    },
}

#[derive(Debug, Args)]
pub struct SpacesArgs {
    #[command(subcommand)]
    pub command: SpacesCommand,
}

#[derive(Debug, Subcommand)]
pub enum SpacesCommand {
    /// List all spaces
    #[command(alias = "ls")]
    List,
    /// Show one space
    Get {
        /// Space ID
        id: String,
    },
}

#[derive(Debug, Args)]
pub struct QueryArgs {
    /// Sensor ID
    pub sensor_id: String,

    /// Channel ID on the sensor
    #[arg(long, short = 'c')]
    pub channel: String,

    /// First day, e.g. 2020-01-01 (sent as midnight MST)
    #[arg(long)]
    pub start: String,

    /// Last day, e.g. 2020-01-31 (sent as midnight MST)
    #[arg(long)]
    pub end: String,
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,
    /// Print the config file path
    Path,
    /// Write a config file with the effective settings
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
