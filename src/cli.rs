use std::path::PathBuf;

use clap::Parser;

/// Library catalog console.
#[derive(Debug, Parser)]
#[command(name = "library-catalog", version, about = "Interactive library catalog")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Start with an empty catalog instead of the sample books.
    #[arg(long)]
    pub no_samples: bool,

    /// Override the loan period from config.
    #[arg(long = "loan-days")]
    pub loan_days: Option<u32>,

    /// Add loan days to the day field only, without month rollover.
    #[arg(long)]
    pub day_field_dates: bool,
}
