//! Reusable formatting utilities for CLI output

use chrono::{DateTime, Utc};

/// Truncate string to max characters with ellipsis
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Format a job rating with a star.
///
/// # Example output
/// `★ 4`, `★ 4.5`
pub fn format_rating(rating: f64) -> String {
    format!("★ {}", rating)
}

/// Format the time left until `expires_at`.
///
/// Returns "expired" once the moment has passed.
///
/// # Example output
/// - `29d 23h` (days, hours)
/// - `5h 10m` (hours, minutes)
/// - `45m` (minutes only)
pub fn format_remaining(expires_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let remaining = expires_at.signed_duration_since(now);
    if remaining.num_seconds() <= 0 {
        return "expired".to_string();
    }

    let days = remaining.num_days();
    let hours = remaining.num_hours() % 24;
    let mins = remaining.num_minutes() % 60;

    if days > 0 {
        format!("{}d {}h", days, hours)
    } else if hours > 0 {
        format!("{}h {}m", hours, mins)
    } else {
        format!("{}m", mins)
    }
}
