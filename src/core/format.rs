//! Clock-style rendering of durations.

use std::time::Duration;

/// Format a duration as `MM:SS`, or `HH:MM:SS` once there is an hour
/// component. Rounds to the nearest whole second first, so a value like
/// 1.5s displays as `00:02` rather than truncating.
pub fn format_duration(d: Duration) -> String {
    let total_secs = (d.as_millis() + 500) / 1000;
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    if hours > 0 {
        format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}", minutes, seconds)
    }
}
