//! Command-line interface for Reelbox.
//!
//! Besides `serve`, every subcommand operates on the configured store
//! directly through the same service layer the HTTP API uses.

mod commands;

use clap::{Parser, Subcommand};

/// Reelbox - movie record service
#[derive(Parser)]
#[command(name = "reelbox")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP API until Ctrl+C
    #[command(alias = "daemon")]
    Serve,

    /// List stored movies
    #[command(alias = "ls", alias = "l")]
    List {
        /// Zero-based page index
        #[arg(long)]
        page: Option<u64>,
        /// Page size
        #[arg(long)]
        size: Option<u64>,
        /// Sort key, `field[,asc|desc]`
        #[arg(long)]
        sort: Option<String>,
    },

    /// Show a single movie
    #[command(alias = "i", alias = "info")]
    Show {
        /// Movie ID
        id: i64,
    },

    /// Add a movie
    #[command(alias = "a")]
    Add {
        title: String,
        #[command(flatten)]
        fields: MovieFields,
    },

    /// Replace the fields of an existing movie
    Update {
        /// Movie ID
        id: i64,
        title: String,
        #[command(flatten)]
        fields: MovieFields,
    },

    /// Remove a movie
    #[command(alias = "rm", alias = "r")]
    Remove {
        /// Movie ID
        id: i64,
    },

    /// Find movies by exact title and release year
    #[command(alias = "s")]
    Search {
        title: String,
        year: i32,
    },

    /// Create default config file
    #[command(alias = "--init")]
    Init,
}

/// Optional movie fields shared by `add` and `update`.
#[derive(clap::Args, Debug, Default)]
pub struct MovieFields {
    #[arg(long)]
    pub genre: Option<String>,
    /// Release year
    #[arg(long)]
    pub year: Option<i32>,
    #[arg(long)]
    pub rating: Option<f64>,
}

pub use commands::*;
