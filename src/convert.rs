// src/convert.rs

//! Conversion of raw JIL job blocks into batch orchestrator records.
//!
//! Each raw job is mapped to a `JobRecord` plus its conditionally derived
//! side artifacts: at most one schedule, zero or more dependency edges, and a
//! file watcher configuration for FILE_WATCHER jobs. BOX containers map to
//! CHAIN and are excluded from migration entirely; they survive only as the
//! `box_name` group label on their member jobs.

use crate::allocator::IdAllocator;
use crate::condition;
use crate::config::MigrationConfig;
use crate::error::{Error, Result};
use crate::jil::RawJob;
use crate::records::{DependencyEdge, FileWatcherConfig, JobRecord, JobType, ScheduleRecord};
use crate::schedule;
use tracing::debug;

/// Sentinel watch directory when the legacy path has no directory part
const DEFAULT_WATCH_DIR: &str = "/tmp";

/// A converted job with its derived side artifacts
#[derive(Debug, Clone)]
pub struct ConvertedJob {
    pub record: JobRecord,
    pub schedule: Option<ScheduleRecord>,
    pub edges: Vec<DependencyEdge>,
    pub watcher: Option<FileWatcherConfig>,
}

/// Map a legacy job type token to the orchestrator vocabulary
///
/// The lookup is case-insensitive; unrecognized tokens fall back to SHELL.
pub fn map_job_type(token: &str) -> JobType {
    match token.to_ascii_uppercase().as_str() {
        "CMD" | "SCRIPT" => JobType::Shell,
        "BOX" => JobType::Chain,
        "FW" => JobType::FileWatcher,
        "SQL" => JobType::StoredProc,
        _ => JobType::Shell,
    }
}

/// Convert a raw job, assigning it the next id
///
/// Returns `Ok(None)` for CHAIN jobs, which are not migrated.
pub fn convert_job(
    raw: &RawJob,
    allocator: &mut IdAllocator,
    config: &MigrationConfig,
) -> Result<Option<ConvertedJob>> {
    let job_type = map_job_type(&raw.job_type);
    if job_type == JobType::Chain {
        debug!("Skipping box container '{}'", raw.name);
        return Ok(None);
    }

    let id = allocator.allocate(&raw.name)?;

    let script_path = match job_type {
        JobType::Shell => Some(raw.attr("command").unwrap_or("").to_string()),
        _ => None,
    };

    let record = JobRecord {
        id,
        name: raw.name.clone(),
        group: raw
            .attr("box_name")
            .unwrap_or(&config.default_group)
            .to_string(),
        job_type,
        description: raw
            .attr("description")
            .map(str::to_string)
            .unwrap_or_else(|| format!("Migrated from Autosys: {}", raw.name)),
        active: true,
        priority: map_priority(raw.attr("priority")),
        max_retry_count: numeric_attr(raw, "n_retrys", 0)?,
        retry_interval_seconds: config.retry_interval_seconds,
        timeout_minutes: numeric_attr(raw, "term_run_time", 60)?,
        alert_on_failure: raw.attr("alarm_if_fail") == Some("y"),
        is_critical: raw.attr("job_terminator") == Some("y"),
        created_by: config.created_by.clone(),
        modified_by: config.created_by.clone(),
        script_path,
    };

    let watcher = match job_type {
        JobType::FileWatcher => Some(derive_watcher(id, raw)?),
        _ => None,
    };

    let schedule = schedule::synthesize(id, raw, &config.created_by);

    let edges = match raw.attr("condition") {
        Some(cond) => condition::parse_condition(cond)
            .into_iter()
            .map(|p| DependencyEdge {
                job_id: id,
                target_name: p.target_name,
                dependency_type: p.dependency_type,
                created_by: config.created_by.clone(),
            })
            .collect(),
        None => Vec::new(),
    };

    Ok(Some(ConvertedJob {
        record,
        schedule,
        edges,
        watcher,
    }))
}

/// Map the legacy 0-100 priority scale onto 1-10
///
/// Missing or non-numeric values get the midpoint.
fn map_priority(value: Option<&str>) -> i64 {
    match value.and_then(|v| v.parse::<i64>().ok()) {
        Some(p) => (p / 10).clamp(1, 10),
        None => 5,
    }
}

/// Parse a numeric attribute, defaulting when absent
///
/// A present but non-numeric value aborts the run; silently coercing it
/// would hide a corrupt source definition.
fn numeric_attr(raw: &RawJob, key: &str, default: i64) -> Result<i64> {
    match raw.attr(key) {
        None => Ok(default),
        Some(value) => value.parse::<i64>().map_err(|_| Error::InvalidAttribute {
            job: raw.name.clone(),
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}

/// Derive the file watcher configuration from the legacy watch attributes
fn derive_watcher(job_id: i64, raw: &RawJob) -> Result<FileWatcherConfig> {
    let watch_file = raw.attr("watch_file").unwrap_or("");
    let (dir, pattern) = match watch_file.rsplit_once('/') {
        Some((dir, file)) => (dir, file),
        None => ("", watch_file),
    };

    Ok(FileWatcherConfig {
        job_id,
        watch_directory: if dir.is_empty() {
            DEFAULT_WATCH_DIR.to_string()
        } else {
            dir.to_string()
        },
        file_pattern: if pattern.is_empty() {
            "*".to_string()
        } else {
            pattern.to_string()
        },
        stable_time_seconds: numeric_attr(raw, "watch_file_min_size", 5)?,
    })
}
