// src/report.rs

//! Migration summary report.
//!
//! Aggregates counts over the converted records and serializes them as a
//! JSON artifact; also prints a human-readable digest with the top job
//! groups. Count maps keep first-encountered order so that ranking ties
//! resolve the same way on every run.

use crate::error::Result;
use crate::records::JobRecord;
use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use std::path::Path;
use tracing::info;

/// Summary of one migration run
#[derive(Debug, Serialize)]
pub struct MigrationReport {
    pub migration_date: String,
    pub total_jobs: usize,
    pub total_schedules: usize,
    pub total_dependencies: usize,
    /// Edges referencing jobs outside the migrated set
    pub dropped_dependencies: usize,
    #[serde(serialize_with = "serialize_counts")]
    pub job_types: Vec<(String, usize)>,
    #[serde(serialize_with = "serialize_counts")]
    pub job_groups: Vec<(String, usize)>,
}

impl MigrationReport {
    /// Build the report from the final record collections
    pub fn build(
        jobs: &[JobRecord],
        total_schedules: usize,
        total_dependencies: usize,
        dropped_dependencies: usize,
        generated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            migration_date: generated_at.to_rfc3339(),
            total_jobs: jobs.len(),
            total_schedules,
            total_dependencies,
            dropped_dependencies,
            job_types: count_ordered(jobs.iter().map(|j| j.job_type.to_string())),
            job_groups: count_ordered(jobs.iter().map(|j| j.group.clone())),
        }
    }

    /// Top groups by descending count; ties keep first-encountered order
    pub fn top_groups(&self, limit: usize) -> Vec<(&str, usize)> {
        let mut ranked: Vec<(&str, usize)> = self
            .job_groups
            .iter()
            .map(|(g, n)| (g.as_str(), *n))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(limit);
        ranked
    }

    /// Write the report as pretty-printed JSON
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        info!("Migration report written to {}", path.display());
        Ok(())
    }

    /// Print the human-readable digest to stdout
    pub fn print_digest(&self) {
        println!("\nMigration Summary:");
        println!("  Total Jobs: {}", self.total_jobs);
        println!("  Total Schedules: {}", self.total_schedules);
        println!("  Total Dependencies: {}", self.total_dependencies);
        if self.dropped_dependencies > 0 {
            println!("  Dropped Dependencies: {}", self.dropped_dependencies);
        }
        println!("\nJob Types:");
        for (job_type, count) in &self.job_types {
            println!("  {}: {}", job_type, count);
        }
        println!("\nTop Job Groups:");
        for (group, count) in self.top_groups(5) {
            println!("  {}: {}", group, count);
        }
    }
}

/// Frequency count preserving first-encountered key order
fn count_ordered(values: impl Iterator<Item = String>) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for value in values {
        match counts.iter_mut().find(|(k, _)| *k == value) {
            Some((_, n)) => *n += 1,
            None => counts.push((value, 1)),
        }
    }
    counts
}

fn serialize_counts<S>(counts: &[(String, usize)], serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_map(counts.iter().map(|(k, v)| (k, v)))
}
