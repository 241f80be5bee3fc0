use std::path::PathBuf;
use clap::Subcommand;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Parse the coverage report, print the ranking and save a snapshot
    Report {
        #[clap(short, long)]
        input: Option<PathBuf>,
        #[clap(short, long)]
        output: Option<PathBuf>,
        /// Print the report without touching the snapshot file
        #[clap(long)]
        no_save: bool,
    },
    /// Write a sample coverage-tracker.toml to the current directory
    Init {
        #[clap(short, long)]
        force: bool,
    },
    /// Check the configuration for problems
    Validate,
    /// Show the last saved snapshot
    Status {
        #[clap(short, long)]
        snapshot: Option<PathBuf>,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Self::Report {
            input: None,
            output: None,
            no_save: false,
        }
    }
}
