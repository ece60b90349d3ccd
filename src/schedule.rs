// src/schedule.rs

//! Schedule synthesis from legacy timing attributes.
//!
//! The conversion is deliberately partial: a plain `HH:MM` start time becomes
//! a daily five-field cron expression, anything else falls back to daily at
//! midnight. Recurring/interval/day-of-week legacy syntax is not modeled.

use crate::jil::RawJob;
use crate::records::{ScheduleRecord, ScheduleType};
use tracing::debug;

/// Fallback when the start time is not a plain HH:MM value
const DEFAULT_CRON: &str = "0 0 * * *";

/// Derive zero or one schedule record for a converted job
///
/// Returns `None` when the job carries no scheduling attributes at all.
pub fn synthesize(job_id: i64, raw: &RawJob, created_by: &str) -> Option<ScheduleRecord> {
    let start_times = raw.attr("start_times");
    let run_calendar = raw.attr("run_calendar");

    if start_times.is_none() && run_calendar.is_none() {
        return None;
    }

    let (schedule_type, cron_expression) = match start_times {
        Some(times) => {
            let cron = cron_from_start_times(times);
            debug!("Job {}: start_times '{}' -> cron '{}'", job_id, times, cron);
            (ScheduleType::Cron, Some(cron))
        }
        None => (ScheduleType::Calendar, None),
    };

    Some(ScheduleRecord {
        job_id,
        name: format!("Schedule_{}", job_id),
        schedule_type: Some(schedule_type),
        cron_expression,
        calendar_name: run_calendar.map(str::to_string),
        date_conditions: raw.attr("date_conditions").map(str::to_string),
        created_by: created_by.to_string(),
        modified_by: created_by.to_string(),
    })
}

/// Convert a legacy start time to a five-field cron expression
fn cron_from_start_times(start_times: &str) -> String {
    if start_times.contains(':') {
        let parts: Vec<&str> = start_times.split(':').collect();
        if parts.len() == 2 {
            return format!("{} {} * * *", parts[1].trim(), parts[0].trim());
        }
    }

    DEFAULT_CRON.to_string()
}
