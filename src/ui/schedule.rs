//! Plain-text rendering of the consolidated schedule.

use crate::core::schedule::Schedule;

pub const EMPTY_DAY: &str = "(звільнень немає)";

pub fn render(schedule: &Schedule, group_name: &str) -> String {
    let mut out = format!("{} звільнення\n", group_name);

    for day in &schedule.days {
        out.push_str(&format!("\n– {}:\n\n", day.day.label()));

        if day.groups.is_empty() {
            out.push_str(EMPTY_DAY);
            out.push('\n');
            continue;
        }

        for group in &day.groups {
            out.push_str(&format!("({}):\n", group.range));
            for label in &group.labels {
                out.push_str(label);
                out.push('\n');
            }
            out.push('\n');
        }
    }

    out
}
