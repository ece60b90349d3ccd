// src/jil.rs

//! Parser for Autosys JIL job definition files.
//!
//! JIL is a line-oriented format: a `insert_job:` line opens a job block and
//! every following `key: value` line attaches an attribute to it, until the
//! next `insert_job:` line or end of input. `/*`-prefixed lines and blank
//! lines are ignored.

use crate::error::Result;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, warn};

/// Keyword that opens a new job block
const JOB_KEYWORD: &str = "insert_job:";

/// Legacy job type assumed when a declaration carries none
const DEFAULT_JOB_TYPE: &str = "CMD";

/// A raw job block as written in the source file
///
/// The type token and attribute values are kept verbatim; vocabulary mapping
/// happens during conversion.
#[derive(Debug, Clone)]
pub struct RawJob {
    pub name: String,
    pub job_type: String,
    pub attributes: HashMap<String, String>,
}

impl RawJob {
    fn new(name: String, job_type: String) -> Self {
        Self {
            name,
            job_type,
            attributes: HashMap::new(),
        }
    }

    /// Look up an attribute value
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(|s| s.as_str())
    }
}

/// Parse a JIL file into raw job blocks, in source order
pub fn parse_jil_file(path: &Path) -> Result<Vec<RawJob>> {
    let content = std::fs::read_to_string(path)?;
    Ok(parse_jil_string(&content))
}

/// Parse JIL text into raw job blocks, in source order
///
/// Lines before the first job declaration, and colon-free lines, are ignored.
pub fn parse_jil_string(content: &str) -> Vec<RawJob> {
    let mut jobs = Vec::new();
    let mut current: Option<RawJob> = None;

    for line in content.lines() {
        let line = line.trim();

        if line.is_empty() || line.starts_with("/*") {
            continue;
        }

        if line.starts_with(JOB_KEYWORD) {
            if let Some(job) = current.take() {
                jobs.push(job);
            }

            let fields: Vec<&str> = line.split(':').collect();
            let Some(name) = fields[1].trim().split_whitespace().next() else {
                warn!("Skipping job declaration without a name: '{}'", line);
                continue;
            };
            let job_type = fields
                .get(2)
                .map(|t| t.trim().to_string())
                .unwrap_or_else(|| DEFAULT_JOB_TYPE.to_string());

            debug!("Found job declaration: {} ({})", name, job_type);
            current = Some(RawJob::new(name.to_string(), job_type));
        } else if let Some(job) = current.as_mut()
            && let Some((key, value)) = line.split_once(':')
        {
            // Duplicate keys overwrite: last one wins
            job.attributes
                .insert(key.trim().to_string(), unquote(value.trim()).to_string());
        }
    }

    if let Some(job) = current.take() {
        jobs.push(job);
    }

    jobs
}

/// Strip one layer of surrounding double quotes
fn unquote(value: &str) -> &str {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        &value[1..value.len() - 1]
    } else {
        value
    }
}
