// ABOUTME: Human-readable duration rendering for notification contexts
// ABOUTME: Produces compact elapsed-time strings like "5m", "1m 30s", "1d 2h"

use chrono::Duration;

/// Render an elapsed time in compact human form. Zero-valued components are
/// omitted; sub-second durations render in milliseconds.
pub fn humanize(duration: Duration) -> String {
    let total_ms = duration.num_milliseconds().max(0);
    let total_secs = total_ms / 1000;

    if total_secs == 0 {
        if total_ms == 0 {
            return "0s".to_string();
        }
        return format!("{}ms", total_ms);
    }

    let days = total_secs / 86_400;
    let hours = (total_secs % 86_400) / 3_600;
    let minutes = (total_secs % 3_600) / 60;
    let seconds = total_secs % 60;

    let mut parts = Vec::new();
    if days > 0 {
        parts.push(format!("{}d", days));
    }
    if hours > 0 {
        parts.push(format!("{}h", hours));
    }
    if minutes > 0 {
        parts.push(format!("{}m", minutes));
    }
    if seconds > 0 {
        parts.push(format!("{}s", seconds));
    }

    parts.join(" ")
}
