//! Deterministic text cleaning applied to every raw capture.
//!
//! Stage order matters — later stages see the output of earlier ones:
//!
//! 1. delete every substring matching the user-supplied pattern,
//! 2. delete ASCII control characters (anything below `' '`),
//! 3. delete the full-width space (U+3000).
//!
//! The length gate itself lives in the pipeline controller; this module
//! only exports the cutoff constant.

use regex::Regex;

/// Normalized captures longer than this (in chars) are treated as noise and
/// never tokenized or dispatched. Hard cutoff, not a truncation.
pub const MAX_CAPTURE_CHARS: usize = 120;

/// Clean `raw` for display and dispatch. Pure and side-effect-free.
///
/// `user_pattern` is a regex configured per game; every match is deleted.
/// An invalid pattern skips stage 1 with a warning rather than dropping the
/// capture — the user sees uncleaned text instead of nothing.
///
/// ```
/// use game_text_overlay::normalize::normalize;
///
/// assert_eq!(normalize("Hello\u{3000}World\x01", ""), "HelloWorld");
/// assert_eq!(normalize("A<ruby>x</ruby>B", "<.*?>"), "AxB");
/// ```
pub fn normalize(raw: &str, user_pattern: &str) -> String {
    let mut text = if user_pattern.is_empty() {
        raw.to_string()
    } else {
        match Regex::new(user_pattern) {
            Ok(re) => re.split(raw).collect::<Vec<_>>().join(""),
            Err(e) => {
                log::warn!("normalize: invalid capture pattern {user_pattern:?}: {e}");
                raw.to_string()
            }
        }
    };

    text.retain(|c| c >= ' ' && c != '\u{3000}');
    text
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_full_width_space_and_control_bytes() {
        assert_eq!(normalize("Hello\u{3000}World\x01", ""), "HelloWorld");
    }

    #[test]
    fn strips_line_breaks() {
        assert_eq!(normalize("one\r\ntwo\nthree", ""), "onetwothree");
    }

    #[test]
    fn pattern_matches_are_deleted() {
        assert_eq!(normalize("「せ、先生……」", "[「」…]"), "せ、先生");
    }

    #[test]
    fn pattern_runs_before_character_cleanup() {
        // The pattern sees the raw text, control bytes included.
        assert_eq!(normalize("a\x02b", "\x02b"), "a");
    }

    #[test]
    fn empty_pattern_skips_stage_one() {
        assert_eq!(normalize("plain text", ""), "plain text");
    }

    #[test]
    fn invalid_pattern_degrades_to_character_cleanup_only() {
        assert_eq!(normalize("abc\u{3000}", "[unclosed"), "abc");
    }

    #[test]
    fn output_contains_no_control_or_full_width_space() {
        let cleaned = normalize("\x00a\x1fb\u{3000}c\x7fd", "");
        assert!(cleaned.chars().all(|c| c >= ' ' && c != '\u{3000}'));
        // DEL (0x7f) is above the space character, so it survives.
        assert_eq!(cleaned, "abc\x7fd");
    }

    #[test]
    fn normalize_is_idempotent() {
        for (raw, pattern) in [
            ("Hello\u{3000}World\x01", ""),
            ("「せ、先生……」", "[「」…]"),
            ("line\r\nbreaks\u{3000}here", "breaks"),
        ] {
            let once = normalize(raw, pattern);
            assert_eq!(normalize(&once, pattern), once);
        }
    }
}
