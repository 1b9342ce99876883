//! Human-readable formatting for counts, sizes, and durations.

use std::time::Duration;

/// Format number with thousands separator
pub fn format_count(n: u128) -> String {
    let digits = n.to_string();
    let mut result = String::with_capacity(digits.len().saturating_add(digits.len() / 3));
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && digits.len().saturating_sub(i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

/// Format a byte count in MB with two decimals
#[allow(clippy::cast_precision_loss)]
pub fn format_megabytes(bytes: u128) -> String {
    format!("{:.2} MB", bytes as f64 / (1024.0 * 1024.0))
}

/// Format duration in human-readable format
pub fn format_duration(duration: Duration) -> String {
    let seconds = duration.as_secs_f64();
    if seconds < 60.0 {
        format!("{:.2}s", seconds)
    } else if seconds < 3600.0 {
        format!("{:.1}m", seconds / 60.0)
    } else if seconds < 86400.0 {
        format!("{:.1}h", seconds / 3600.0)
    } else {
        format!("{:.1}d", seconds / 86400.0)
    }
}
