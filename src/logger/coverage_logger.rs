use std::io::{self, Write};
use chrono::{DateTime, Local};
use crate::config::constants::REPORT_RULE_WIDTH;
use crate::enums::coverage_status::CoverageStatus;
use crate::errors::{TrackerError, TrackerResult};
use crate::helpers::format_helper::FormatHelper;
use crate::structs::config::threshold_config::ThresholdConfig;
use crate::structs::coverage_ranking::CoverageRanking;
use crate::structs::ranked_category::RankedCategory;
use crate::structs::tracker_snapshot::TrackerSnapshot;

pub struct CoverageLogger;

impl CoverageLogger {
    pub fn print_report<W: Write>(
        out: &mut W,
        ranking: &CoverageRanking,
        timestamp: &DateTime<Local>,
        thresholds: &ThresholdConfig,
    ) -> TrackerResult<()> {
        Self::write_report(out, ranking, timestamp, thresholds).map_err(|e| TrackerError::output_error(&e))
    }

    pub fn write_report<W: Write>(
        out: &mut W,
        ranking: &CoverageRanking,
        timestamp: &DateTime<Local>,
        thresholds: &ThresholdConfig,
    ) -> io::Result<()> {
        writeln!(out, "📊 Coverage analysis ({})", timestamp.format("%Y-%m-%d %H:%M:%S"))?;
        writeln!(out, "{}", FormatHelper::rule(REPORT_RULE_WIDTH))?;

        for entry in &ranking.entries {
            Self::write_entry(out, entry)?;
        }

        match ranking.next_target_entry() {
            Some(target) => writeln!(
                out,
                "🎯 Next target: {} (currently {}%)",
                target.name,
                FormatHelper::percentage(target.coverage)
            )?,
            None => writeln!(out, "🎉 All categories are at {}% or above!", thresholds.target)?,
        }

        Ok(())
    }

    fn write_entry<W: Write>(out: &mut W, entry: &RankedCategory) -> io::Result<()> {
        writeln!(
            out,
            "{} {} {} {}: {}%",
            entry.mark.symbol(),
            entry.status.emoji(),
            entry.status.label(),
            entry.name,
            FormatHelper::percentage(entry.coverage)
        )?;

        if !entry.improvement_files.is_empty() {
            writeln!(out, "   📁 Files needing improvement:")?;
            for file in &entry.improvement_files {
                writeln!(out, "      • {}: {}%", file.name, FormatHelper::percentage(file.coverage))?;
            }
        }

        writeln!(out)
    }

    pub fn print_status(snapshot: &TrackerSnapshot, thresholds: &ThresholdConfig) -> TrackerResult<()> {
        Self::write_status(&mut io::stdout().lock(), snapshot, thresholds).map_err(|e| TrackerError::output_error(&e))
    }

    pub fn write_status<W: Write>(out: &mut W, snapshot: &TrackerSnapshot, thresholds: &ThresholdConfig) -> io::Result<()> {
        writeln!(out, "🕒 Last updated: {}", snapshot.last_updated)?;
        writeln!(out, "{}", FormatHelper::rule(REPORT_RULE_WIDTH))?;

        for name in &snapshot.priority_list {
            if let Some(category) = snapshot.categories.get(name) {
                let status = CoverageStatus::from_coverage(category.coverage, thresholds);
                writeln!(
                    out,
                    "{} {} {}: {}%",
                    status.emoji(),
                    status.label(),
                    name,
                    FormatHelper::percentage(category.coverage)
                )?;
            }
        }

        match &snapshot.next_target {
            Some(target) => writeln!(out, "🎯 Next target: {target}")?,
            None => writeln!(out, "🎉 All categories are at {}% or above!", thresholds.target)?,
        }

        Ok(())
    }
}
