// 🔄 Member Migration - CSV → JSON
// Single sequential pass: load rows, transform, collect, write

use anyhow::Result;

use crate::config::MigrationConfig;
use crate::export::write_members_json;
use crate::member::{transform_row, MigratedMember, SkipReason};
use crate::parser::load_rows;

// ============================================================================
// REPORT
// ============================================================================

/// Row counts for one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MigrationReport {
    pub total_rows: usize,
    pub accepted: usize,
    pub skipped_too_short: usize,
    pub skipped_missing_name: usize,
}

impl MigrationReport {
    pub fn skipped(&self) -> usize {
        self.skipped_too_short + self.skipped_missing_name
    }
}

// ============================================================================
// PASS
// ============================================================================

/// Transform rows in order, numbering accepted members from 10000
pub fn migrate_rows<S: AsRef<str>>(rows: &[Vec<S>]) -> (Vec<MigratedMember>, MigrationReport) {
    let mut members = Vec::new();
    let mut report = MigrationReport::default();

    for row in rows {
        report.total_rows += 1;

        match transform_row(row, members.len()) {
            Ok(member) => members.push(member),
            Err(SkipReason::TooShort) => report.skipped_too_short += 1,
            Err(SkipReason::MissingName) => report.skipped_missing_name += 1,
        }
    }

    report.accepted = members.len();
    (members, report)
}

/// Run the full migration described by `config`
///
/// Any file-level failure aborts the run; the output file is left in
/// whatever state the failed write produced.
pub fn run_migration(config: &MigrationConfig) -> Result<MigrationReport> {
    let rows = load_rows(&config.input_path)?;
    let (members, report) = migrate_rows(&rows);
    write_members_json(&config.output_path, &members)?;

    Ok(report)
}
