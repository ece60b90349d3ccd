// src/records.rs

//! Data models for migrated batch orchestrator entities
//!
//! This module defines Rust structs that correspond to the target schema's
//! tables (`job_definitions`, `job_schedules`, `job_dependencies`). Records
//! are created during conversion and never mutated afterwards; field
//! declaration order matches the column order used by the SQL emitter.

use strum_macros::{Display, EnumString};

/// Job type in the batch orchestrator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum JobType {
    Shell,
    Chain,
    FileWatcher,
    StoredProc,
}

/// Dependency predicate kind between two jobs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum DependencyType {
    Success,
    Failure,
    Completion,
}

/// Schedule trigger kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum ScheduleType {
    Cron,
    Calendar,
}

/// A migrated job definition row
///
/// Field order matches the `job_definitions` column order.
#[derive(Debug, Clone)]
pub struct JobRecord {
    pub id: i64,
    pub name: String,
    pub group: String,
    pub job_type: JobType,
    pub description: String,
    pub active: bool,
    pub priority: i64,
    pub max_retry_count: i64,
    pub retry_interval_seconds: i64,
    pub timeout_minutes: i64,
    pub alert_on_failure: bool,
    pub is_critical: bool,
    pub created_by: String,
    pub modified_by: String,
    /// Populated only for SHELL jobs
    pub script_path: Option<String>,
}

/// A migrated schedule row, at most one per job
///
/// Field order matches the `job_schedules` column order.
#[derive(Debug, Clone)]
pub struct ScheduleRecord {
    pub job_id: i64,
    pub name: String,
    pub schedule_type: Option<ScheduleType>,
    pub cron_expression: Option<String>,
    pub calendar_name: Option<String>,
    pub date_conditions: Option<String>,
    pub created_by: String,
    pub modified_by: String,
}

/// A dependency edge created during conversion
///
/// `target_name` is a forward reference into the legacy namespace; the
/// numeric target id is resolved only once every job has been assigned one.
#[derive(Debug, Clone)]
pub struct DependencyEdge {
    pub job_id: i64,
    pub target_name: String,
    pub dependency_type: DependencyType,
    pub created_by: String,
}

/// File watcher configuration derived for FILE_WATCHER jobs
///
/// Side artifact of conversion; not part of the relational emission.
#[derive(Debug, Clone)]
pub struct FileWatcherConfig {
    pub job_id: i64,
    pub watch_directory: String,
    pub file_pattern: String,
    pub stable_time_seconds: i64,
}
