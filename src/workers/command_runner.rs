use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use chrono::Local;
use crate::config::config_manager::ConfigManager;
use crate::config::constants::LOCAL_CONFIG_FILE;
use crate::enums::commands::Commands;
use crate::errors::{TrackerError, TrackerResult};
use crate::logger::coverage_logger::CoverageLogger;
use crate::services::coverage_parser::CoverageParser;
use crate::services::priority_ranker::PriorityRanker;
use crate::services::snapshot_writer::SnapshotWriter;
use crate::structs::config::config::Config;
use crate::structs::tracker_snapshot::TrackerSnapshot;

pub struct CommandRunner {
    config_path: Option<PathBuf>,
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub const fn new(config_path: Option<PathBuf>) -> Self {
        Self {
            config_path,
            start_time: None,
        }
    }

    pub fn run_command(&mut self, command: Commands) -> TrackerResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Report { input, output, no_save } => self.report_command(input, output, no_save).map(|_| ()),
            Commands::Init { force } => Self::init_command(force),
            Commands::Validate => self.validate_command(),
            Commands::Status { snapshot } => self.status_command(snapshot),
        };

        if let Some(start) = self.start_time {
            log::info!("⏱️  Command completed in {:.2}s", start.elapsed().as_secs_f64());
        }

        result
    }

    fn report_command(&self, input: Option<PathBuf>, output: Option<PathBuf>, no_save: bool) -> TrackerResult<TrackerSnapshot> {
        let mut config = self.load_config()?;
        if let Some(input) = input {
            config.paths.input = input.display().to_string();
        }
        if let Some(output) = output {
            config.paths.output = output.display().to_string();
        }

        Self::run_report(&config, !no_save)
    }

    pub fn run_report(config: &Config, save: bool) -> TrackerResult<TrackerSnapshot> {
        Self::run_report_to(&mut io::stdout().lock(), config, save)
    }

    /// Parses the configured input, prints the ranking to `out` and, when `save`
    /// is set, replaces the snapshot file. Nothing is written if any step fails.
    pub fn run_report_to<W: Write>(out: &mut W, config: &Config, save: bool) -> TrackerResult<TrackerSnapshot> {
        let input = Path::new(&config.paths.input);
        log::info!("🔍 Reading coverage report: {}", input.display());

        let content = fs::read_to_string(input).map_err(|e| TrackerError::input_error(&config.paths.input, &e))?;
        let categories = CoverageParser::new(&content).parse().ok_or_else(|| TrackerError::TableNotFound {
            path: config.paths.input.clone(),
        })?;

        let ranking = PriorityRanker::new(&config.priority_list, &config.thresholds).rank(&categories);

        let now = Local::now();
        CoverageLogger::print_report(out, &ranking, &now, &config.thresholds)?;

        let snapshot = SnapshotWriter::build(now, categories, &config.priority_list, ranking.next_target);

        if save {
            let output = Path::new(&config.paths.output);
            SnapshotWriter::write(&snapshot, output)?;
            writeln!(out, "\n💾 Updated {}", output.display()).map_err(|e| TrackerError::output_error(&e))?;
        } else {
            log::info!("⏭️ Snapshot not saved (--no-save)");
        }

        Ok(snapshot)
    }

    fn init_command(force: bool) -> TrackerResult<()> {
        log::info!("🚀 Initializing coverage tracker configuration...");
        ConfigManager::create_sample_config(Path::new(LOCAL_CONFIG_FILE), force)
    }

    fn validate_command(&self) -> TrackerResult<()> {
        let config = ConfigManager::load(self.config_path.as_deref())?;

        match ConfigManager::validate_config(&config) {
            Ok(()) => {
                println!("✅ Configuration is valid");
                println!("   {} categories in priority list", config.priority_list.len());
                Ok(())
            }
            Err(errors) => {
                println!("❌ Configuration has {} problems", errors.len());
                for error in &errors {
                    println!("   ❌ {}", error);
                }
                Err(TrackerError::ValidationError { errors })
            }
        }
    }

    fn status_command(&self, snapshot: Option<PathBuf>) -> TrackerResult<()> {
        let config = self.load_config()?;
        let path = snapshot.unwrap_or_else(|| PathBuf::from(&config.paths.output));

        let snapshot = SnapshotWriter::read(&path)?;
        CoverageLogger::print_status(&snapshot, &config.thresholds)
    }

    fn load_config(&self) -> TrackerResult<Config> {
        let config = ConfigManager::load(self.config_path.as_deref())?;
        ConfigManager::validate_config(&config).map_err(|errors| TrackerError::ValidationError { errors })?;
        Ok(config)
    }
}
