//! Text wrapping and truncation utilities
//!
//! Helpers for fitting ticket text into card-sized regions, with support for
//! multi-byte characters and proper ellipsis handling.

/// Truncate a string to a maximum length, handling multi-byte characters properly.
/// Appends "..." if truncated.
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{truncated}...")
    }
}

/// Wrap text into multiple lines, breaking at word boundaries.
///
/// Returns up to `max_lines` lines, with "..." appended to the last line
/// if the text was truncated. Each line will be at most `width` characters.
///
/// If a single word is longer than `width`, it will be broken mid-word.
pub fn wrap_text_lines(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    if width == 0 || max_lines == 0 {
        return vec![];
    }

    let text = text.trim();
    if text.is_empty() {
        return vec![];
    }

    // Pre-split words, breaking any word longer than width into
    // width-sized chunks so the fill loop below never sees an
    // unplaceable piece.
    let mut pieces: Vec<String> = Vec::new();
    for word in text.split_whitespace() {
        if word.chars().count() <= width {
            pieces.push(word.to_string());
        } else {
            let mut chars = word.chars();
            loop {
                let chunk: String = chars.by_ref().take(width).collect();
                if chunk.is_empty() {
                    break;
                }
                pieces.push(chunk);
            }
        }
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    for piece in pieces {
        let current_len = current.chars().count();
        let piece_len = piece.chars().count();

        if current.is_empty() {
            current = piece;
        } else if current_len + 1 + piece_len <= width {
            current.push(' ');
            current.push_str(&piece);
        } else {
            lines.push(std::mem::replace(&mut current, piece));
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    if lines.len() > max_lines {
        lines.truncate(max_lines);
        add_ellipsis(&mut lines, width);
    }

    lines
}

/// Mark the last line with "..." to show that text was cut off
fn add_ellipsis(lines: &mut [String], width: usize) {
    let Some(last) = lines.last_mut() else {
        return;
    };
    let last_len = last.chars().count();

    if last_len + 3 <= width {
        last.push_str("...");
    } else if last_len >= 3 {
        let truncated: String = last.chars().take(width.saturating_sub(3)).collect();
        *last = format!("{truncated}...");
    }
}
