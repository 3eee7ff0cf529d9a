use crate::config::toml_config::DEFAULT_CONFIG_FILE;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "love-connect")]
#[command(about = "Love calculator, Valentine countdown, week planner, cards and memories")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compute the compatibility score for two names
    Score { name_a: String, name_b: String },

    /// Time left until Valentine's Day
    Countdown {
        /// Local time to count from, e.g. 2026-02-13T18:30:00
        #[arg(long)]
        at: Option<chrono::NaiveDateTime>,

        /// Refresh every second until interrupted
        #[arg(long, conflicts_with = "at")]
        watch: bool,
    },

    /// Valentine week planner
    Planner {
        #[command(subcommand)]
        action: PlannerAction,
    },

    /// Shareable love cards
    Card {
        #[command(subcommand)]
        action: CardAction,
    },

    /// Memory gallery
    Memory {
        #[command(subcommand)]
        action: MemoryAction,
    },

    /// Photo storage
    Photo {
        #[command(subcommand)]
        action: PhotoAction,
    },
}

#[derive(Debug, Subcommand)]
pub enum PlannerAction {
    /// Show every day with its status and note
    List,
    /// Mark a day done, or undo it
    Toggle { day: String },
    /// Save a note for a day
    Note { day: String, text: String },
    /// Use the day's suggested message as its note
    Template { day: String },
}

#[derive(Debug, Subcommand)]
pub enum CardAction {
    Create {
        #[arg(long)]
        partner: String,
        #[arg(long)]
        message: String,
        /// romantic, modern, classic or playful
        #[arg(long, default_value = "romantic")]
        theme: String,
        #[arg(long)]
        photo: Option<String>,
    },
    Show { share_code: String },
}

#[derive(Debug, Subcommand)]
pub enum MemoryAction {
    List,
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        /// YYYY-MM-DD
        #[arg(long)]
        date: String,
        #[arg(long)]
        photo: Option<String>,
    },
    Delete { id: String },
}

#[derive(Debug, Subcommand)]
pub enum PhotoAction {
    Upload { path: PathBuf },
}
