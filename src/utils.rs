use once_cell::sync::Lazy;
use ratatui::widgets::{Paragraph, Wrap};
use regex::Regex;

// youtube.com/watch?v=ID, youtube.com/shorts/ID, youtu.be/ID
static VIDEO_ID_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?:https?://)?(?:(?:www\.|m\.)?youtube\.com/(?:watch\?(?:.*&)?v=|shorts/)|youtu\.be/)([A-Za-z0-9_-]{6,})",
    )
    .expect("video id regex is valid")
});

/// Video id for display next to the URL input. Never used to block a submit.
pub fn extract_video_id(url: &str) -> Option<&str> {
    VIDEO_ID_REGEX
        .captures(url.trim())
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Number of rows `content` takes when word-wrapped to `width` columns,
/// using the same wrapping as the output panes.
pub fn wrapped_line_count(content: &str, width: u16) -> u16 {
    if content.is_empty() {
        return 0;
    }
    let rows = Paragraph::new(content)
        .wrap(Wrap { trim: false })
        .line_count(width.max(1));
    rows.min(u16::MAX as usize) as u16
}

pub fn calculate_max_scroll(content: &str, view_width: u16, view_height: u16) -> u16 {
    let content_lines = wrapped_line_count(content, view_width.saturating_sub(2));
    let visible_lines = view_height.saturating_sub(2);
    content_lines.saturating_sub(visible_lines)
}
