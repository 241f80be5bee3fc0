use std::path::PathBuf;
use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "coverage-tracker")]
#[clap(about = "Ranks coverage report categories by priority and tracks the next target", long_about = None)]
pub struct Cli {
    /// Config file to use instead of the default lookup
    #[clap(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[clap(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[clap(subcommand)]
    pub command: Option<Commands>,
}
