//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for combodeck using the `clap` crate.
//!
//! # Commands
//!
//! - **combos**: Grid listing of visible combos (default)
//! - **deck**: One combo at a time with a position label
//! - **moves**: Move-string table bucketed by step count
//! - **link** / **open**: Produce and consume shareable deep links
//! - **characters**, **portraits**: Roster and portrait sync plan
//!
//! # Examples
//!
//! ```
//! use clap::Parser;
//! use combodeck::cli::{Cli, Commands};
//!
//! let cli = Cli::parse_from(["combodeck", "deck", "-c", "paul", "-n", "3"]);
//! assert!(matches!(cli.get_command(), Commands::Deck { number: Some(3), .. }));
//! ```

use crate::browse::{FilterTag, MoveListMode, MoveTier, ViewMode};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Selection flags shared by the listing commands
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionArgs {
    /// Character id (defaults to the last selected, then the first in the data)
    #[arg(short = 'c', long = "character", value_name = "ID")]
    pub character: Option<String>,

    /// Combo type filter: all, bnb, heat or wall
    #[arg(long = "filter", value_name = "TAG")]
    pub filter: Option<FilterTag>,

    /// Case-insensitive text search over titles, notes and moves
    #[arg(short = 's', long = "search", value_name = "TEXT")]
    pub search: Option<String>,
}

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "combodeck")]
#[command(about = "Browse fighting-game combo routes", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Raw combo dataset (overrides config)
    #[arg(long = "data", value_name = "PATH", global = true)]
    pub data: Option<PathBuf>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List characters with their combo counts
    Characters,

    /// List visible combos (default)
    #[command(visible_alias = "ls")]
    Combos {
        #[command(flatten)]
        selection: SelectionArgs,
    },

    /// Show one combo at a time
    Deck {
        #[command(flatten)]
        selection: SelectionArgs,

        /// Combo number to show, 1-based
        #[arg(short = 'n', long = "number", value_name = "N")]
        number: Option<usize>,

        /// Page forward from the selected combo
        #[arg(long = "next", conflicts_with = "prev")]
        next: bool,

        /// Page back from the selected combo
        #[arg(long = "prev", conflicts_with = "next")]
        prev: bool,
    },

    /// Show the move-string table
    Moves {
        /// Character id
        #[arg(short = 'c', long = "character", value_name = "ID")]
        character: Option<String>,

        /// Tier: all, single, simple, med-simple, medium, advanced or expert
        #[arg(long = "tier", value_name = "TIER")]
        tier: Option<MoveTier>,

        /// Render moves as icons or text
        #[arg(long = "mode", value_name = "MODE")]
        mode: Option<MoveListMode>,
    },

    /// Print a shareable link to a combo
    Link {
        /// Character id
        #[arg(short = 'c', long = "character", value_name = "ID")]
        character: Option<String>,

        /// Combo number, 1-based
        #[arg(short = 'n', long = "number", value_name = "N")]
        number: Option<usize>,

        /// View to open the link in: grid or deck
        #[arg(long = "view", value_name = "VIEW")]
        view: Option<ViewMode>,

        /// Copy the link to the clipboard instead of only printing it
        #[arg(long = "copy")]
        copy: bool,
    },

    /// Restore a session from a link or query string and show it
    Open {
        /// Full URL or query string (`?character=paul&combo=2&view=deck`)
        #[arg(value_name = "LOCATOR")]
        locator: String,
    },

    /// Print the portrait sync plan for the dataset
    Portraits,
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to Combos if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Combos {
            selection: SelectionArgs::default(),
        })
    }
}
