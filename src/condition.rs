// src/condition.rs

//! Resolver for Autosys dependency condition expressions.
//!
//! Conditions look like `success(job_a) and failure(job_b, 12.00)`. Every
//! predicate occurrence yields one dependency edge; the `and`/`or`
//! connectives between predicates are not evaluated, so the logical
//! combination is flattened into independent edges. Text that matches no
//! predicate yields no edges.

use crate::records::DependencyType;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

static PREDICATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(success|failure|done|terminated|notrunning|exitcode)\(([^)]+)\)").unwrap()
});

/// One predicate occurrence extracted from a condition string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate {
    pub dependency_type: DependencyType,
    /// Referenced job name (first argument; thresholds and the like dropped)
    pub target_name: String,
}

/// Extract dependency predicates from a condition string, in occurrence order
pub fn parse_condition(condition: &str) -> Vec<Predicate> {
    let mut predicates = Vec::new();

    for caps in PREDICATE_RE.captures_iter(condition) {
        let kind = caps[1].to_ascii_lowercase();
        let dependency_type = match kind.as_str() {
            "success" => DependencyType::Success,
            "failure" => DependencyType::Failure,
            _ => DependencyType::Completion,
        };

        // First comma-separated argument is the job name; extra arguments
        // (exit codes, lookback windows) carry no meaning in the target schema
        let target_name = caps[2]
            .split(',')
            .next()
            .unwrap_or("")
            .trim()
            .to_string();
        if target_name.is_empty() {
            continue;
        }

        predicates.push(Predicate {
            dependency_type,
            target_name,
        });
    }

    if predicates.is_empty() {
        debug!("Condition yielded no predicates: '{}'", condition);
    }

    predicates
}
