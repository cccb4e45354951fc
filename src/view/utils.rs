//! Formatting helpers for rendering

pub fn format_elapsed(secs: u64) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// Cut `s` to `max_width` characters, marking the cut with an ellipsis
pub fn truncate_string(s: &str, max_width: usize) -> String {
    if s.chars().count() > max_width {
        let kept: String = s.chars().take(max_width.saturating_sub(1)).collect();
        format!("{}…", kept)
    } else {
        s.to_string()
    }
}
