// src/sql.rs

//! SQL script emission for the target schema.
//!
//! Renders the accumulated records as one transactional script with three
//! ordered sections: job inserts, schedule inserts, dependency inserts.
//! Dependency edges are resolved against the name map here, after every job
//! has an id; an edge whose target is outside the migrated set is dropped
//! and counted, never an error.

use crate::allocator::IdAllocator;
use crate::records::{DependencyEdge, JobRecord, ScheduleRecord};
use chrono::{DateTime, Utc};
use std::fmt::Write;
use tracing::warn;

/// Outcome of resolving one dependency edge against the name map
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EdgeResolution {
    Resolved { target_id: i64 },
    /// Target job is not in the migrated set (box, external, or undeclared)
    Dropped,
}

/// Resolve an edge's target name to a job id
pub fn resolve_edge(edge: &DependencyEdge, allocator: &IdAllocator) -> EdgeResolution {
    match allocator.lookup(&edge.target_name) {
        Some(target_id) => EdgeResolution::Resolved { target_id },
        None => EdgeResolution::Dropped,
    }
}

/// A rendered SQL script plus emission statistics
#[derive(Debug)]
pub struct SqlArtifact {
    pub text: String,
    pub emitted_dependencies: usize,
    /// Target names of edges dropped as dangling references
    pub dropped_targets: Vec<String>,
}

/// Render the full migration script
pub fn render_script(
    jobs: &[JobRecord],
    schedules: &[ScheduleRecord],
    edges: &[DependencyEdge],
    allocator: &IdAllocator,
    generated_at: DateTime<Utc>,
) -> SqlArtifact {
    let mut out = String::new();

    writeln!(out, "-- Autosys Migration SQL Script").unwrap();
    writeln!(out, "-- Generated: {}", generated_at.to_rfc3339()).unwrap();
    writeln!(out, "-- =============================================").unwrap();
    writeln!(out).unwrap();
    writeln!(out, "BEGIN TRANSACTION;").unwrap();
    writeln!(out).unwrap();

    writeln!(out, "-- Job Definitions").unwrap();
    for job in jobs {
        writeln!(out, "{}", job_insert(job)).unwrap();
    }

    writeln!(out).unwrap();
    writeln!(out, "-- Job Schedules").unwrap();
    for schedule in schedules {
        writeln!(out, "{}", schedule_insert(schedule)).unwrap();
    }

    writeln!(out).unwrap();
    writeln!(out, "-- Job Dependencies").unwrap();
    let mut emitted = 0;
    let mut dropped = Vec::new();
    for edge in edges {
        match resolve_edge(edge, allocator) {
            EdgeResolution::Resolved { target_id } => {
                writeln!(out, "{}", dependency_insert(edge, target_id)).unwrap();
                emitted += 1;
            }
            EdgeResolution::Dropped => {
                warn!(
                    "Dropping dependency of job {} on unknown job '{}'",
                    edge.job_id, edge.target_name
                );
                dropped.push(edge.target_name.clone());
            }
        }
    }

    writeln!(out).unwrap();
    writeln!(out, "COMMIT;").unwrap();

    SqlArtifact {
        text: out,
        emitted_dependencies: emitted,
        dropped_targets: dropped,
    }
}

fn job_insert(job: &JobRecord) -> String {
    format!(
        "INSERT INTO job_definitions (job_id, job_name, job_group, job_type, description, \
         is_active, priority, max_retry_count, retry_interval_seconds, timeout_minutes, \
         alert_on_failure, critical_job, created_by, modified_by, script_path) \
         VALUES ({}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {});",
        job.id,
        quote(&job.name),
        quote(&job.group),
        quote(&job.job_type.to_string()),
        quote(&job.description),
        flag(job.active),
        job.priority,
        job.max_retry_count,
        job.retry_interval_seconds,
        job.timeout_minutes,
        flag(job.alert_on_failure),
        flag(job.is_critical),
        quote(&job.created_by),
        quote(&job.modified_by),
        opt_text(job.script_path.as_deref()),
    )
}

fn schedule_insert(schedule: &ScheduleRecord) -> String {
    format!(
        "INSERT INTO job_schedules (job_id, schedule_name, schedule_type, cron_expression, \
         calendar_name, date_conditions, created_by, modified_by) \
         VALUES ({}, {}, {}, {}, {}, {}, {}, {});",
        schedule.job_id,
        quote(&schedule.name),
        opt_text(schedule.schedule_type.map(|t| t.to_string()).as_deref()),
        opt_text(schedule.cron_expression.as_deref()),
        opt_text(schedule.calendar_name.as_deref()),
        opt_text(schedule.date_conditions.as_deref()),
        quote(&schedule.created_by),
        quote(&schedule.modified_by),
    )
}

fn dependency_insert(edge: &DependencyEdge, target_id: i64) -> String {
    format!(
        "INSERT INTO job_dependencies (job_id, dependent_job_id, dependency_type, created_by) \
         VALUES ({}, {}, {}, {});",
        edge.job_id,
        target_id,
        quote(&edge.dependency_type.to_string()),
        quote(&edge.created_by),
    )
}

/// Single-quote a string value, doubling internal quotes
fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

/// Render an optional string value, NULL when absent
fn opt_text(value: Option<&str>) -> String {
    match value {
        Some(v) => quote(v),
        None => "NULL".to_string(),
    }
}

/// Render a boolean flag the way the target schema stores it
fn flag(value: bool) -> &'static str {
    if value { "1" } else { "0" }
}
