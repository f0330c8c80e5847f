// Output formatting: terminal display of tokens, topics and recommendations.

pub mod terminal;

/// Truncate a string to at most `max_chars` characters, appending "..." if truncated.
///
/// Respects UTF-8 character boundaries, so summaries with accented
/// letters or curly quotes never panic.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}

/// Render a weight in [0, 1] as a fixed-width bar, e.g. `[=====     ]`.
pub fn weight_bar(weight: f64, width: usize) -> String {
    let filled = ((weight.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    format!("[{}{}]", "=".repeat(filled), " ".repeat(width - filled))
}
