use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

use crate::types::TextAlign;

pub fn display_width(s: &str) -> usize {
    s.width()
}

pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Truncate to at most `max_width` display columns, ending in an ellipsis
/// when anything was cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    let current_width = display_width(s);
    if current_width <= max_width {
        return s.to_string();
    }

    if max_width == 0 {
        return String::new();
    }

    let ellipsis = "…";
    let ellipsis_width = 1;
    let target_width = max_width.saturating_sub(ellipsis_width);

    let mut result = String::new();
    let mut width = 0;

    for ch in s.chars() {
        let ch_width = char_width(ch);
        if width + ch_width > target_width {
            break;
        }
        result.push(ch);
        width += ch_width;
    }

    result.push_str(ellipsis);
    result
}

/// Fit `s` to exactly `width` display columns: truncate when too long,
/// pad with spaces according to `align` when too short.
pub fn pad_to_width(s: &str, width: usize, align: TextAlign) -> String {
    let text = truncate_to_width(s, width);
    let text_width = display_width(&text);
    let remaining = width.saturating_sub(text_width);

    match align {
        TextAlign::Left => format!("{}{}", text, " ".repeat(remaining)),
        TextAlign::Right => format!("{}{}", " ".repeat(remaining), text),
        TextAlign::Center => {
            let left = remaining / 2;
            let right = remaining - left;
            format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
        }
    }
}
