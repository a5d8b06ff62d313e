//! Bullet and risk line extraction.

use super::rules::{is_risk_line, BULLET_MARKER};

/// Maximum bullets returned from one extraction.
pub const MAX_BULLETS: usize = 14;

/// Maximum risk lines returned from one extraction.
pub const MAX_RISK_LINES: usize = 5;

/// Lines must be longer than this (in characters) after cleaning.
pub const MIN_BULLET_CHARS: usize = 10;

/// Strip leading bullet glyphs and numbering, then trim.
pub fn clean_line(line: &str) -> &str {
    let rest = match BULLET_MARKER.find(line) {
        Some(m) => &line[m.end()..],
        None => line,
    };
    rest.trim()
}

/// Split text into cleaned, non-trivial lines in source order.
pub fn extract_bullets(text: &str) -> Vec<String> {
    text.split('\n')
        .map(clean_line)
        .filter(|line| line.chars().count() > MIN_BULLET_CHARS)
        .take(MAX_BULLETS)
        .map(str::to_string)
        .collect()
}

/// Bullets that mention risk vocabulary.
///
/// When no bullet mentions a risk, the first bullets are returned instead so
/// a risk panel is never blank for non-empty text.
pub fn extract_risk_lines(text: &str) -> Vec<String> {
    let candidates = extract_bullets(text);
    let hits: Vec<String> = candidates
        .iter()
        .filter(|line| is_risk_line(line))
        .cloned()
        .collect();

    let selected = if hits.is_empty() { candidates } else { hits };
    selected.into_iter().take(MAX_RISK_LINES).collect()
}
