//! Terminal output sanitization
//!
//! Transcript snippets, titles and summaries come from a remote service and are
//! drawn straight into the terminal. They are passed through [`sanitize`] first
//! so escape sequences embedded in backend data cannot move the cursor, recolor
//! the screen or set the window title.

const ESC: char = '\x1b';
const BEL: char = '\x07';

/// Strip ANSI CSI/OSC escape sequences and control characters
///
/// Newlines and tabs survive; use [`single_line`] for one-row widgets.
///
/// # Examples
///
/// ```
/// use civicly::utils::terminal::sanitize;
///
/// assert_eq!(sanitize("\x1b[31mRed text\x1b[0m"), "Red text");
/// assert_eq!(sanitize("\x1b]0;pwned\x07Title"), "Title");
/// ```
pub fn sanitize(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == ESC {
            match chars.peek() {
                // CSI: ESC [ params final-letter
                Some('[') => {
                    chars.next();
                    for next in chars.by_ref() {
                        if next.is_ascii_alphabetic() || next == '~' {
                            break;
                        }
                    }
                }
                // OSC: ESC ] ... terminated by BEL or ESC \
                Some(']') => {
                    chars.next();
                    while let Some(next) = chars.next() {
                        if next == BEL {
                            break;
                        }
                        if next == ESC && chars.peek() == Some(&'\\') {
                            chars.next();
                            break;
                        }
                    }
                }
                // Two-character escapes such as ESC c (reset)
                Some(_) => {
                    chars.next();
                }
                None => {}
            }
            continue;
        }

        if ch.is_control() && ch != '\n' && ch != '\t' {
            continue;
        }

        result.push(ch);
    }

    result
}

/// Sanitize and collapse all whitespace runs (including newlines) into single spaces
pub fn single_line(text: &str) -> String {
    sanitize(text).split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Truncate to at most `max_chars` characters, marking the cut with an ellipsis
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_color_codes() {
        assert_eq!(sanitize("\x1b[1m\x1b[31mBold Red\x1b[0m normal"), "Bold Red normal");
    }

    #[test]
    fn test_sanitize_cursor_movement() {
        assert_eq!(sanitize("\x1b[2J\x1b[H Cleared"), " Cleared");
    }

    #[test]
    fn test_sanitize_osc_title_bel_terminated() {
        assert_eq!(sanitize("before\x1b]2;evil title\x07after"), "beforeafter");
    }

    #[test]
    fn test_sanitize_osc_st_terminated() {
        assert_eq!(sanitize("a\x1b]8;;https://x.test\x1b\\link\x1b]8;;\x1b\\b"), "alinkb");
    }

    #[test]
    fn test_sanitize_two_char_escape() {
        assert_eq!(sanitize("\x1bcreset"), "reset");
    }

    #[test]
    fn test_sanitize_trailing_escape() {
        assert_eq!(sanitize("dangling\x1b"), "dangling");
    }

    #[test]
    fn test_sanitize_keeps_newlines_and_tabs() {
        assert_eq!(sanitize("Line 1\nLine 2\tTabbed\r"), "Line 1\nLine 2\tTabbed");
    }

    #[test]
    fn test_sanitize_unicode() {
        assert_eq!(sanitize("Café \x1b[32mSeattle\x1b[0m 🌧"), "Café Seattle 🌧");
    }

    #[test]
    fn test_single_line_collapses_whitespace() {
        assert_eq!(single_line("  Mayor:\n  the levy\t\tpassed  "), "Mayor: the levy passed");
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("short", 10), "short");
        assert_eq!(truncate_chars("a long meeting title", 6), "a lon…");
        assert_eq!(truncate_chars("ñññññ", 3), "ññ…");
    }
}
