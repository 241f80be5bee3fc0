use std::process::ExitCode;
use clap::Parser;
use coverage_tracker::structs::cli::Cli;
use coverage_tracker::workers::command_runner::CommandRunner;

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let mut runner = CommandRunner::new(cli.config);
    match runner.run_command(cli.command.unwrap_or_default()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("{:?}", e);
            println!("❌ Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
