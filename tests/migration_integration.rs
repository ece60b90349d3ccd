// tests/migration_integration.rs

//! Integration tests for the migration pipeline.
//!
//! These tests verify end-to-end behavior from a JIL source file to the SQL
//! and report artifacts.

mod common;

use common::{nightly_batch_jil, setup_jil_fixture, without_timestamp};
use jilmig::{DependencyType, JobType, Migration, MigrationConfig};

#[test]
fn test_nightly_batch_end_to_end() {
    let (dir, jil_path, sql_path) = setup_jil_fixture(nightly_batch_jil());

    let outcome = Migration::default().run(&jil_path, &sql_path).unwrap();

    // The box container is not migrated; its members carry it as group
    assert_eq!(outcome.jobs.len(), 4);
    let extract = &outcome.jobs[0];
    assert_eq!(extract.name, "eod_extract");
    assert_eq!(extract.id, 1000);
    assert_eq!(extract.group, "eod_box");
    assert_eq!(extract.job_type, JobType::Shell);
    assert_eq!(extract.priority, 8);
    assert!(extract.alert_on_failure);
    assert_eq!(
        extract.script_path.as_deref(),
        Some("/opt/batch/extract.sh --all")
    );

    let load = &outcome.jobs[1];
    assert_eq!(load.job_type, JobType::StoredProc);
    assert_eq!(load.max_retry_count, 2);
    assert!(load.is_critical);
    assert_eq!(load.script_path, None);

    // One cron schedule and one calendar schedule
    assert_eq!(outcome.schedules.len(), 2);
    assert_eq!(
        outcome.schedules[0].cron_expression.as_deref(),
        Some("30 22 * * *")
    );
    assert_eq!(
        outcome.schedules[1].calendar_name.as_deref(),
        Some("BUSINESS_DAYS")
    );

    // Three edges created; the one naming an undeclared job is dropped
    assert_eq!(outcome.edges.len(), 3);
    assert_eq!(outcome.dropped_targets, vec!["eod_archive".to_string()]);

    // File watcher side artifact
    assert_eq!(outcome.watchers.len(), 1);
    assert_eq!(outcome.watchers[0].watch_directory, "/data/incoming");
    assert_eq!(outcome.watchers[0].stable_time_seconds, 30);

    // Both artifacts on disk
    let sql = std::fs::read_to_string(&sql_path).unwrap();
    assert!(sql.starts_with("-- Autosys Migration SQL Script"));
    assert!(dir.path().join("migration_report.json").exists());
}

#[test]
fn test_job_insert_count_matches_non_box_declarations() {
    let (_dir, jil_path, sql_path) = setup_jil_fixture(nightly_batch_jil());
    Migration::default().run(&jil_path, &sql_path).unwrap();

    let sql = std::fs::read_to_string(&sql_path).unwrap();
    let job_inserts = sql
        .lines()
        .filter(|l| l.starts_with("INSERT INTO job_definitions"))
        .count();
    assert_eq!(job_inserts, 4);
    assert!(!sql.contains("'CHAIN'"));
}

#[test]
fn test_sql_sections_are_ordered_and_framed() {
    let (_dir, jil_path, sql_path) = setup_jil_fixture(nightly_batch_jil());
    Migration::default().run(&jil_path, &sql_path).unwrap();

    let sql = std::fs::read_to_string(&sql_path).unwrap();
    let begin = sql.find("BEGIN TRANSACTION;").unwrap();
    let jobs = sql.find("INSERT INTO job_definitions").unwrap();
    let schedules = sql.find("INSERT INTO job_schedules").unwrap();
    let deps = sql.find("INSERT INTO job_dependencies").unwrap();
    let commit = sql.find("COMMIT;").unwrap();
    assert!(begin < jobs && jobs < schedules && schedules < deps && deps < commit);
}

#[test]
fn test_success_dependency_scenario() {
    let jil = r#"
insert_job: jobA   job_type: CMD
command: "/bin/run.sh"

insert_job: jobB   job_type: CMD
condition: success(jobA)
"#;
    let (_dir, jil_path, sql_path) = setup_jil_fixture(jil);
    let outcome = Migration::default().run(&jil_path, &sql_path).unwrap();

    assert_eq!(outcome.jobs.len(), 2);
    assert!(outcome.jobs.iter().all(|j| j.job_type == JobType::Shell));
    assert_eq!(outcome.edges[0].dependency_type, DependencyType::Success);

    let sql = std::fs::read_to_string(&sql_path).unwrap();
    assert!(sql.contains("VALUES (1001, 1000, 'SUCCESS', 'MIGRATION');"));
}

#[test]
fn test_dangling_dependency_never_fails_the_run() {
    let jil = "insert_job: jobB   job_type: CMD\ncondition: success(jobX)\n";
    let (_dir, jil_path, sql_path) = setup_jil_fixture(jil);
    let outcome = Migration::default().run(&jil_path, &sql_path).unwrap();

    assert_eq!(outcome.jobs.len(), 1);
    let sql = std::fs::read_to_string(&sql_path).unwrap();
    assert!(sql.contains("INSERT INTO job_definitions"));
    assert!(!sql.lines().any(|l| l.starts_with("INSERT INTO job_dependencies")));
    assert_eq!(outcome.report.dropped_dependencies, 1);
}

#[test]
fn test_start_times_schedule_scenario() {
    let jil = "insert_job: timed   job_type: CMD\nstart_times: \"10:30\"\n";
    let (_dir, jil_path, sql_path) = setup_jil_fixture(jil);
    Migration::default().run(&jil_path, &sql_path).unwrap();

    let sql = std::fs::read_to_string(&sql_path).unwrap();
    assert!(sql.contains("'30 10 * * *'"));
}

#[test]
fn test_non_numeric_retry_aborts_without_artifacts() {
    let jil = "insert_job: bad   job_type: CMD\nn_retrys: \"abc\"\n";
    let (dir, jil_path, sql_path) = setup_jil_fixture(jil);

    let result = Migration::default().run(&jil_path, &sql_path);
    assert!(result.is_err());
    assert!(!sql_path.exists());
    assert!(!dir.path().join("migration_report.json").exists());
}

#[test]
fn test_rerun_is_identical_except_timestamp() {
    let (_dir, jil_path, sql_path) = setup_jil_fixture(nightly_batch_jil());
    Migration::default().run(&jil_path, &sql_path).unwrap();
    let first = std::fs::read_to_string(&sql_path).unwrap();

    Migration::default().run(&jil_path, &sql_path).unwrap();
    let second = std::fs::read_to_string(&sql_path).unwrap();

    assert_eq!(without_timestamp(&first), without_timestamp(&second));
}

#[test]
fn test_report_artifact_contents() {
    let (dir, jil_path, sql_path) = setup_jil_fixture(nightly_batch_jil());
    Migration::default().run(&jil_path, &sql_path).unwrap();

    let report: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(dir.path().join("migration_report.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(report["total_jobs"], 4);
    assert_eq!(report["total_schedules"], 2);
    assert_eq!(report["total_dependencies"], 3);
    assert_eq!(report["dropped_dependencies"], 1);
    assert_eq!(report["job_types"]["SHELL"], 2);
    assert_eq!(report["job_types"]["STORED_PROC"], 1);
    assert_eq!(report["job_types"]["FILE_WATCHER"], 1);
    assert_eq!(report["job_groups"]["eod_box"], 3);
    assert_eq!(report["job_groups"]["DEFAULT"], 1);
}

#[test]
fn test_config_file_overrides_run_settings() {
    let (dir, jil_path, sql_path) = setup_jil_fixture(
        "insert_job: solo   job_type: CMD\ncommand: /bin/solo\n",
    );
    let config_path = dir.path().join("run.toml");
    std::fs::write(
        &config_path,
        "created_by = \"MIG_WAVE2\"\nid_offset = 9000\ndefault_group = \"UNASSIGNED\"\n",
    )
    .unwrap();

    let config = MigrationConfig::from_file(&config_path).unwrap();
    let outcome = Migration::new(config).run(&jil_path, &sql_path).unwrap();

    assert_eq!(outcome.jobs[0].id, 9000);
    assert_eq!(outcome.jobs[0].group, "UNASSIGNED");
    assert_eq!(outcome.jobs[0].created_by, "MIG_WAVE2");

    let sql = std::fs::read_to_string(&sql_path).unwrap();
    assert!(sql.contains("VALUES (9000, 'solo', 'UNASSIGNED', 'SHELL',"));
}

#[test]
fn test_values_with_quotes_are_escaped() {
    let jil = "insert_job: quoted   job_type: CMD\ndescription: \"Trader's overnight run\"\n";
    let (_dir, jil_path, sql_path) = setup_jil_fixture(jil);
    Migration::default().run(&jil_path, &sql_path).unwrap();

    let sql = std::fs::read_to_string(&sql_path).unwrap();
    assert!(sql.contains("'Trader''s overnight run'"));
}
