// tests/common/mod.rs

//! Shared test utilities and helpers for integration tests.

use std::path::PathBuf;
use tempfile::TempDir;

/// Write JIL text into a temp directory and return the paths used by a run.
///
/// Returns (TempDir, jil_path, sql_path) - keep the TempDir alive to prevent
/// cleanup.
pub fn setup_jil_fixture(jil: &str) -> (TempDir, PathBuf, PathBuf) {
    let temp_dir = tempfile::tempdir().unwrap();
    let jil_path = temp_dir.path().join("jobs.jil");
    std::fs::write(&jil_path, jil).unwrap();
    let sql_path = temp_dir.path().join("migration.sql");
    (temp_dir, jil_path, sql_path)
}

/// A realistic nightly batch definition exercising every job type,
/// scheduling, box membership, and forward/dangling dependencies.
pub fn nightly_batch_jil() -> &'static str {
    r#"
/* ----------------- */
/* Nightly EOD batch */
/* ----------------- */

insert_job: eod_box   job_type: BOX
description: "End of day container"

insert_job: eod_extract   job_type: CMD
box_name: eod_box
command: "/opt/batch/extract.sh --all"
start_times: "22:30"
priority: 80
alarm_if_fail: y

insert_job: eod_load   job_type: SQL
box_name: eod_box
condition: success(eod_extract)
n_retrys: 2
job_terminator: y

insert_job: eod_report   job_type: CMD
box_name: eod_box
command: /opt/batch/report.sh
condition: success(eod_load) and done(eod_archive)

insert_job: feed_watcher   job_type: FW
watch_file: /data/incoming/positions.csv
watch_file_min_size: 30
run_calendar: BUSINESS_DAYS
"#
}

/// Strip the generation timestamp comment so outputs can be compared
pub fn without_timestamp(sql: &str) -> String {
    sql.lines()
        .filter(|line| !line.starts_with("-- Generated:"))
        .collect::<Vec<_>>()
        .join("\n")
}
