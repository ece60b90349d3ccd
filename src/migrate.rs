// src/migrate.rs

//! The migration engine.
//!
//! Runs the explicit two-phase pipeline: phase 1 parses the source and
//! converts every job, assigning ids and collecting schedules, dependency
//! edges, and watcher configs; phase 2 resolves edge targets against the
//! completed name map and renders the SQL artifact. A dependency may
//! forward-reference a job declared later in the source, so no resolution
//! happens before phase 1 has seen the whole file.
//!
//! The run is all-or-nothing: artifacts reach disk only after every job has
//! converted successfully.

use crate::allocator::IdAllocator;
use crate::config::MigrationConfig;
use crate::convert;
use crate::error::Result;
use crate::jil;
use crate::records::{DependencyEdge, FileWatcherConfig, JobRecord, ScheduleRecord};
use crate::report::MigrationReport;
use crate::sql;
use chrono::{DateTime, Utc};
use std::path::Path;
use tracing::{debug, info};

/// Everything a migration run produces, before any of it touches disk
#[derive(Debug)]
pub struct MigrationOutcome {
    pub jobs: Vec<JobRecord>,
    pub schedules: Vec<ScheduleRecord>,
    pub edges: Vec<DependencyEdge>,
    pub watchers: Vec<FileWatcherConfig>,
    pub sql: String,
    pub dropped_targets: Vec<String>,
    pub report: MigrationReport,
}

/// One-shot batch transform from a JIL source to the target schema
#[derive(Debug, Default)]
pub struct Migration {
    config: MigrationConfig,
}

impl Migration {
    pub fn new(config: MigrationConfig) -> Self {
        Self { config }
    }

    /// Run the pipeline against a source file and write both artifacts
    ///
    /// The SQL script lands at `output_path`; the summary report is written
    /// beside it under the configured fixed name.
    pub fn run(&self, jil_path: &Path, output_path: &Path) -> Result<MigrationOutcome> {
        info!("Starting migration from {}", jil_path.display());

        let content = std::fs::read_to_string(jil_path)?;
        let outcome = self.execute(&content, Utc::now())?;

        std::fs::write(output_path, &outcome.sql)?;
        info!("Migration SQL written to {}", output_path.display());

        let report_path = output_path
            .parent()
            .unwrap_or(Path::new("."))
            .join(&self.config.report_file);
        outcome.report.write_to(&report_path)?;

        Ok(outcome)
    }

    /// Run the pipeline in memory
    pub fn execute(&self, jil_text: &str, generated_at: DateTime<Utc>) -> Result<MigrationOutcome> {
        // Phase 1: parse and convert every job, populating the name map
        let raw_jobs = jil::parse_jil_string(jil_text);
        info!("Found {} jobs in JIL source", raw_jobs.len());

        let mut allocator = IdAllocator::new(self.config.id_offset);
        let mut jobs = Vec::new();
        let mut schedules = Vec::new();
        let mut edges = Vec::new();
        let mut watchers = Vec::new();

        for raw in &raw_jobs {
            let Some(converted) = convert::convert_job(raw, &mut allocator, &self.config)? else {
                continue;
            };
            debug!("Converted job '{}' as id {}", raw.name, converted.record.id);
            jobs.push(converted.record);
            schedules.extend(converted.schedule);
            edges.extend(converted.edges);
            watchers.extend(converted.watcher);
        }

        info!(
            "Converted {} jobs, {} schedules, {} dependencies, {} file watchers",
            jobs.len(),
            schedules.len(),
            edges.len(),
            watchers.len()
        );

        // Phase 2: every name is now resolvable; render the script
        let artifact = sql::render_script(&jobs, &schedules, &edges, &allocator, generated_at);
        let report = MigrationReport::build(
            &jobs,
            schedules.len(),
            edges.len(),
            artifact.dropped_targets.len(),
            generated_at,
        );

        Ok(MigrationOutcome {
            jobs,
            schedules,
            edges,
            watchers,
            sql: artifact.text,
            dropped_targets: artifact.dropped_targets,
            report,
        })
    }
}
