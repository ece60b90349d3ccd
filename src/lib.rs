// src/lib.rs

//! Jilmig
//!
//! Migrates legacy Autosys JIL job definitions into the batch orchestrator's
//! relational schema, emitting a transactional SQL script plus a migration
//! summary report.
//!
//! # Architecture
//!
//! - Line-oriented JIL parsing into raw job blocks
//! - Vocabulary mapping into typed job, schedule, and dependency records
//! - Explicit two-phase pipeline: ids are assigned while converting, but
//!   dependency names resolve only after the whole job set is known, so
//!   forward references work
//! - All-or-nothing emission: artifacts are written only after every job
//!   converted successfully

pub mod allocator;
pub mod condition;
pub mod config;
pub mod convert;
mod error;
pub mod jil;
pub mod migrate;
pub mod records;
pub mod report;
pub mod schedule;
pub mod sql;

pub use allocator::{DEFAULT_ID_OFFSET, IdAllocator};
pub use config::MigrationConfig;
pub use error::{Error, Result};
pub use jil::{RawJob, parse_jil_file, parse_jil_string};
pub use migrate::{Migration, MigrationOutcome};
pub use records::{
    DependencyEdge, DependencyType, FileWatcherConfig, JobRecord, JobType, ScheduleRecord,
    ScheduleType,
};
pub use report::MigrationReport;
pub use sql::{EdgeResolution, SqlArtifact};
