//! CLI Argument Parsing
//!
//! Global flags (--data-dir, --json, --verbose) are inherited by all
//! subcommands. Counts are parsed as signed integers so that negative values
//! reach the desk and are rejected there with a typed error.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Reliefdesk - track relief camps, displaced persons and aid distribution
#[derive(Parser, Debug)]
#[command(name = "reliefdesk")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory holding camps.json and victims.json
    #[arg(long, global = true, value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// Emit JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Register a new relief camp
    AddCamp {
        /// Unique camp id
        id: String,

        /// Where the camp is
        #[arg(long, default_value = "")]
        location: String,

        /// Maximum number of occupants
        #[arg(long, allow_negative_numbers = true)]
        capacity: i64,

        /// Initial food stock
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        food: i64,

        /// Initial medical stock
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        medical: i64,

        /// Volunteer headcount
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        volunteers: i64,
    },

    /// Add food and medical stock to a camp
    AddResources {
        /// Camp to restock
        camp: String,

        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        food: i64,

        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        medical: i64,
    },

    /// Register a victim and assign them to a camp
    Register {
        /// Unique victim id
        id: String,

        #[arg(long)]
        name: String,

        #[arg(long, allow_negative_numbers = true)]
        age: i64,

        /// normal or critical
        #[arg(long, default_value = "normal")]
        health: String,

        /// Camp to assign the victim to
        #[arg(long)]
        camp: String,
    },

    /// Give food and medical units from the victim's camp to the victim
    Distribute {
        /// Receiving victim
        victim: String,

        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        food: i64,

        /// Critical victims always receive at least one unit
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        medical: i64,
    },

    /// Show one victim
    Find {
        /// Victim id
        victim: String,
    },

    /// List camps
    Camps,

    /// List victims
    Victims {
        /// Only victims assigned to this camp
        #[arg(long)]
        camp: Option<String>,

        /// Only critical victims
        #[arg(long)]
        critical: bool,
    },

    /// Summary totals across camps and victims
    Report,

    /// Rewrite both data files in the current format
    Migrate,
}
