use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use clap::Parser;
use serde_json::Value;
use tempfile::TempDir;
use coverage_tracker::enums::commands::Commands;
use coverage_tracker::errors::TrackerError;
use coverage_tracker::structs::cli::Cli;
use coverage_tracker::structs::config::config::Config;
use coverage_tracker::workers::command_runner::CommandRunner;

const SAMPLE_REPORT: &str = "\
 RUN  v1.6.0 /app

 % Coverage report from v8
File               | % Stmts | % Branch | % Funcs | % Lines | Uncovered Line #s
All files          |   55.00 |    50.00 |   60.00 |   55.00 |
middleware         |      80 |       70 |      75 |      80 |
utils              |      40 |       30 |      50 |      40 |
  parser.js        |      30 |       10 |      20 |      30 | 5-60
-------------------|---------|----------|---------|---------|-------------------
";

const COMPLETE_REPORT: &str = "\
File               | % Stmts | % Branch | % Funcs | % Lines | Uncovered Line #s
middleware         |   95.5  |       70 |      75 |   95.5  |
base               |     100 |      100 |     100 |     100 |
---
";

fn workspace(report: Option<&str>) -> (TempDir, Config) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let input = dir.path().join("coverage-raw.json");
    if let Some(report) = report {
        fs::write(&input, report).expect("write coverage report");
    }

    let mut config = Config::default();
    config.paths.input = input.display().to_string();
    config.paths.output = dir.path().join("coverage-tracker.json").display().to_string();
    (dir, config)
}

fn empty_config_file(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("coverage-tracker.toml");
    fs::write(&path, "").expect("write config");
    path
}

struct ClosedStdout;

impl Write for ClosedStdout {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::from(io::ErrorKind::BrokenPipe))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).expect("read snapshot")).expect("parse snapshot")
}

#[test]
fn report_writes_snapshot_with_parsed_values() {
    let (_dir, config) = workspace(Some(SAMPLE_REPORT));

    let snapshot = CommandRunner::run_report(&config, true).expect("report succeeds");
    assert_eq!(snapshot.next_target.as_deref(), Some("middleware"));

    let json = read_json(Path::new(&config.paths.output));
    assert_eq!(json["categories"]["middleware"]["coverage"], 80.0);
    assert_eq!(json["categories"]["middleware"]["files"], Value::Array(vec![]));
    assert_eq!(json["categories"]["utils"]["coverage"], 40.0);
    assert_eq!(json["categories"]["utils"]["files"][0]["name"], "parser.js");
    assert_eq!(json["categories"]["utils"]["files"][0]["coverage"], 30.0);
    assert_eq!(json["nextTarget"], "middleware");
    assert_eq!(json["priorityList"].as_array().map(Vec::len), Some(11));
    assert!(json["lastUpdated"].as_str().is_some_and(|ts| ts.contains('T')));
}

#[test]
fn complete_coverage_stores_null_next_target() {
    let (_dir, config) = workspace(Some(COMPLETE_REPORT));

    let snapshot = CommandRunner::run_report(&config, true).expect("report succeeds");
    assert!(snapshot.next_target.is_none());
    assert!(read_json(Path::new(&config.paths.output))["nextTarget"].is_null());
}

#[test]
fn missing_input_leaves_existing_snapshot_untouched() {
    let (_dir, config) = workspace(None);
    fs::write(&config.paths.output, "{\"previous\": true}").expect("seed snapshot");

    let err = CommandRunner::run_report(&config, true).expect_err("missing input fails");
    assert!(err.is_missing_input());
    assert_eq!(fs::read_to_string(&config.paths.output).expect("read snapshot"), "{\"previous\": true}");
}

#[test]
fn report_without_table_is_malformed_and_writes_nothing() {
    let (_dir, config) = workspace(Some("no coverage here\n"));

    let err = CommandRunner::run_report(&config, true).expect_err("table missing");
    assert!(err.is_malformed_table());
    assert!(!Path::new(&config.paths.output).exists());
}

#[test]
fn report_without_save_skips_snapshot() {
    let (_dir, config) = workspace(Some(SAMPLE_REPORT));

    let snapshot = CommandRunner::run_report(&config, false).expect("report succeeds");
    assert_eq!(snapshot.categories.len(), 2);
    assert!(!Path::new(&config.paths.output).exists());
}

#[test]
fn custom_priority_list_changes_next_target() {
    let (_dir, mut config) = workspace(Some(SAMPLE_REPORT));
    config.priority_list = vec!["utils".to_string(), "middleware".to_string()];

    let snapshot = CommandRunner::run_report(&config, true).expect("report succeeds");
    assert_eq!(snapshot.next_target.as_deref(), Some("utils"));
}

#[test]
fn report_command_honours_config_file_and_cli_paths() {
    let (dir, config) = workspace(Some(SAMPLE_REPORT));
    let config_path = dir.path().join("coverage-tracker.toml");
    fs::write(&config_path, "priority_list = [\"utils\"]\n\n[thresholds]\ntarget = 30.0\n").expect("write config");
    let output = dir.path().join("custom.json");

    let mut runner = CommandRunner::new(Some(config_path));
    runner
        .run_command(Commands::Report {
            input: Some(PathBuf::from(&config.paths.input)),
            output: Some(output.clone()),
            no_save: false,
        })
        .expect("report command succeeds");

    let json = read_json(&output);
    assert!(json["nextTarget"].is_null());
    assert_eq!(json["priorityList"], serde_json::json!(["utils"]));
    assert!(!Path::new(&config.paths.output).exists());
}

#[test]
fn invalid_config_aborts_before_reading_input() {
    let (dir, config) = workspace(Some(SAMPLE_REPORT));
    let config_path = dir.path().join("coverage-tracker.toml");
    fs::write(&config_path, "priority_list = []\n").expect("write config");

    let mut runner = CommandRunner::new(Some(config_path));
    let err = runner
        .run_command(Commands::Report {
            input: Some(PathBuf::from(&config.paths.input)),
            output: Some(PathBuf::from(&config.paths.output)),
            no_save: false,
        })
        .expect_err("invalid config fails");

    assert!(matches!(err, TrackerError::ValidationError { .. }));
    assert!(!Path::new(&config.paths.output).exists());
}

#[test]
fn failed_report_output_writes_no_snapshot() {
    let (_dir, config) = workspace(Some(SAMPLE_REPORT));
    fs::write(&config.paths.output, "{\"previous\": true}").expect("seed snapshot");

    let err = CommandRunner::run_report_to(&mut ClosedStdout, &config, true).expect_err("output fails");
    assert!(matches!(err, TrackerError::OutputError { .. }));
    assert_eq!(fs::read_to_string(&config.paths.output).expect("read snapshot"), "{\"previous\": true}");
}

#[test]
fn non_finite_rows_are_dropped_and_snapshot_stays_readable() {
    let report = "\
File | % Stmts | % Branch | % Funcs | % Lines
utils | inf | 0 | 0 | 0 |
base | NaN | 0 | 0 | 0 |
services | 95 | 0 | 0 | 0 |
---
";
    let (dir, config) = workspace(Some(report));
    let mut out = Vec::new();
    let snapshot = CommandRunner::run_report_to(&mut out, &config, true).expect("report succeeds");

    assert_eq!(snapshot.categories.keys().collect::<Vec<_>>(), vec!["services"]);
    assert!(!String::from_utf8(out).expect("utf8 output").contains("NaN"));

    let mut runner = CommandRunner::new(Some(empty_config_file(&dir)));
    runner
        .run_command(Commands::Status {
            snapshot: Some(PathBuf::from(&config.paths.output)),
        })
        .expect("status reads the snapshot");
}

#[test]
fn status_reads_back_the_written_snapshot() {
    let (dir, config) = workspace(Some(SAMPLE_REPORT));
    CommandRunner::run_report(&config, true).expect("report succeeds");

    let mut runner = CommandRunner::new(Some(empty_config_file(&dir)));
    runner
        .run_command(Commands::Status {
            snapshot: Some(PathBuf::from(&config.paths.output)),
        })
        .expect("status succeeds");
}

#[test]
fn status_without_snapshot_fails() {
    let (dir, _config) = workspace(None);

    let mut runner = CommandRunner::new(Some(empty_config_file(&dir)));
    let err = runner
        .run_command(Commands::Status {
            snapshot: Some(dir.path().join("missing.json")),
        })
        .expect_err("missing snapshot fails");
    assert!(matches!(err, TrackerError::SnapshotReadError { .. }));
}

#[test]
fn cli_defaults_to_report_without_a_subcommand() {
    let cli = Cli::try_parse_from(["coverage-tracker"]).expect("parse bare invocation");
    assert!(cli.command.is_none());
    assert_eq!(cli.command.unwrap_or_default(), Commands::default());
}

#[test]
fn cli_parses_report_overrides_and_verbosity() {
    let cli = Cli::try_parse_from(["coverage-tracker", "-vv", "report", "--input", "raw.txt", "--no-save"])
        .expect("parse report");

    assert_eq!(cli.verbose, 2);
    assert_eq!(
        cli.command,
        Some(Commands::Report {
            input: Some(PathBuf::from("raw.txt")),
            output: None,
            no_save: true,
        })
    );
}
