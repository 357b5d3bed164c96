//! String helpers that measure in terminal columns.
//!
//! ANSI escape sequences count as zero width and pass through to the output
//! untouched. Wide characters (CJK, most emoji) occupy two columns.

use console::{measure_text_width, pad_str, Alignment};

/// Returns the display width of a string in terminal columns.
///
/// ANSI escape sequences contribute nothing; combining marks are
/// zero-width; CJK characters are two columns each.
///
/// # Example
///
/// ```rust
/// use peristyle::text::display_width;
///
/// assert_eq!(display_width("pillar"), 6);
/// assert_eq!(display_width("\x1b[2mdim\x1b[0m"), 3);
/// ```
pub fn display_width(s: &str) -> usize {
    measure_text_width(s)
}

/// Truncates a string from the end to fit `max_width`, appending `marker`
/// when anything was cut.
///
/// Strings that already fit come back unchanged, so re-applying this at the
/// same width is a no-op. Escape sequences are preserved but not counted.
///
/// # Example
///
/// ```rust
/// use peristyle::text::truncate_end;
///
/// assert_eq!(truncate_end("negotiation", 8, "\u{2026}"), "negotia\u{2026}");
/// assert_eq!(truncate_end("short", 9, "\u{2026}"), "short");
/// ```
pub fn truncate_end(s: &str, max_width: usize, marker: &str) -> String {
    let width = measure_text_width(s);
    if width <= max_width {
        return s.to_string();
    }

    let marker_width = measure_text_width(marker);
    if max_width < marker_width {
        // No room for the marker itself; cut the marker instead.
        return clip_to_width(marker, max_width);
    }
    if max_width == marker_width {
        return marker.to_string();
    }

    let mut result = clip_to_width(s, max_width - marker_width);
    result.push_str(marker);
    result
}

/// Pads on the left (right-aligns) up to `width`. Wider strings pass
/// through untouched.
pub fn pad_left(s: &str, width: usize) -> String {
    pad_str(s, width, Alignment::Right, None).into_owned()
}

/// Pads on the right (left-aligns) up to `width`. Wider strings pass
/// through untouched.
pub fn pad_right(s: &str, width: usize) -> String {
    pad_str(s, width, Alignment::Left, None).into_owned()
}

/// Pads on both sides (centers) up to `width`, extra column on the right.
pub fn pad_center(s: &str, width: usize) -> String {
    pad_str(s, width, Alignment::Center, None).into_owned()
}

/// Keeps the longest prefix whose display width fits `max_width`,
/// carrying escape sequences through without counting them.
fn clip_to_width(s: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if measure_text_width(s) <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut used = 0;
    let mut in_escape = false;

    for c in s.chars() {
        if c == '\x1b' {
            result.push(c);
            in_escape = true;
            continue;
        }
        if in_escape {
            result.push(c);
            // CSI sequences terminate on a letter (or tilde).
            if c.is_ascii_alphabetic() || c == '~' {
                in_escape = false;
            }
            continue;
        }

        let char_width = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + char_width > max_width {
            break;
        }
        result.push(c);
        used += char_width;
    }

    result
}
