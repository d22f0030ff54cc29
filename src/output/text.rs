use chrono::{DateTime, SecondsFormat, Utc};

use crate::models::Task;

pub fn print_task_list(tasks: &[Task]) {
    if tasks.is_empty() {
        println!("No tasks found");
        return;
    }
    for t in tasks {
        println!(
            "[{}] {} {} - Created at: {} - updated at: {}",
            t.id,
            t.description,
            t.status.as_str(),
            format_timestamp(&t.created_at),
            format_timestamp(&t.updated_at)
        );
    }
}

/// Same form the store serializes: RFC 3339, millisecond precision, Z suffix.
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}
