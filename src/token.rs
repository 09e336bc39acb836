//! Extracts the format token usable by the inline (two field) input
//! from a caller-supplied format string.
//!
//! Callers may pick arbitrary literal separators (`-`, `/`, `.`) for
//! the date half, but a time-bearing format must be exactly
//! `<date token><single space><time token>`:
//!
//! - `yyyy-MM-dd` stays `yyyy-MM-dd`
//! - `yyyy-MM` stays `yyyy-MM`
//! - `yyyy-MM-dd HH:mm:ss` stays `yyyy-MM-dd HH:mm:ss`
//! - `yyyy-MM-dd  HH:mm:ss` (double space) is rejected
//! - `Pp` (no placeholder characters) is rejected
//!
//! Rejected formats never error; they fall back to the mode's default
//! token, so every keystroke still has a usable pattern.

use crate::mode::Mode;

use regex::Regex;
use once_cell::sync::Lazy;

static DATE_TOKEN_RE: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"(?i)([yMd]{0,4}[^a-z\s]*[yMd]{0,4}[^a-z\s]*[yMd]{0,4})").unwrap());
static DATE_TIME_TOKEN_RE: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"(?i)([yMd]{0,4}[^a-z\s]*[yMd]{0,4}[^a-z\s]*[yMd]{0,4}) (H{0,2}[^a-z\s]*m{0,2}[^a-z\s]*s{0,2})").unwrap());

/// Returns the sub-pattern of `format` usable for the inline input in
/// the given mode, or the mode's default token if `format` does not
/// contain one.
pub fn inline_format_token(format: &str, mode: Mode) -> String {
  match mode {
    Mode::DateTime | Mode::DateTimeRange => {
      let captured = DATE_TIME_TOKEN_RE.captures(format).and_then(|caps| {
        let date = caps.get(1)?.as_str();
        let time = caps.get(2)?.as_str();
        if date.is_empty() || time.is_empty() {
          None
        } else {
          Some(format!("{date} {time}"))
        }
      });
      captured.unwrap_or_else(|| mode.default_format_token().to_owned())
    }
    _ => {
      let captured = DATE_TOKEN_RE.captures(format)
        .and_then(|caps| caps.get(1))
        .map(|group| group.as_str())
        .filter(|group| !group.is_empty());
      captured
        .map(str::to_owned)
        .unwrap_or_else(|| mode.default_format_token().to_owned())
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_date_tokens_pass_through() {
    assert_eq!(inline_format_token("yyyy-MM-dd", Mode::Date), "yyyy-MM-dd");
    assert_eq!(inline_format_token("yyyy-MM", Mode::Date), "yyyy-MM");
    assert_eq!(inline_format_token("yyyy-MM", Mode::Month), "yyyy-MM");
    assert_eq!(inline_format_token("yyyy-MM-dd", Mode::DateRange), "yyyy-MM-dd");
  }

  #[test]
  fn test_date_tokens_with_other_separators() {
    assert_eq!(inline_format_token("yyyy/MM/dd", Mode::Date), "yyyy/MM/dd");
    assert_eq!(inline_format_token("dd.MM.yyyy", Mode::Date), "dd.MM.yyyy");
  }

  #[test]
  fn test_date_time_tokens_pass_through() {
    assert_eq!(
      inline_format_token("yyyy-MM-dd HH:mm:ss", Mode::DateTime),
      "yyyy-MM-dd HH:mm:ss",
    );
    assert_eq!(
      inline_format_token("yyyy-MM-dd HH:mm", Mode::DateTime),
      "yyyy-MM-dd HH:mm",
    );
    assert_eq!(
      inline_format_token("yyyy-MM-dd HH:mm:ss", Mode::DateTimeRange),
      "yyyy-MM-dd HH:mm:ss",
    );
  }

  #[test]
  fn test_double_space_falls_back() {
    assert_eq!(
      inline_format_token("yyyy-MM-dd  HH:mm:ss", Mode::DateTime),
      "yyyy-MM-dd HH:mm:ss",
    );
  }

  #[test]
  fn test_missing_time_half_falls_back() {
    assert_eq!(
      inline_format_token("yyyy-MM-dd", Mode::DateTime),
      "yyyy-MM-dd HH:mm:ss",
    );
  }

  #[test]
  fn test_no_placeholders_falls_back() {
    assert_eq!(inline_format_token("Pp", Mode::Date), "yyyy-MM-dd");
    assert_eq!(inline_format_token("", Mode::Month), "yyyy-MM");
  }

  #[test]
  fn test_trailing_time_ignored_in_date_mode() {
    // The date pattern stops at the space, so a full date-time format
    // still yields just the date half for a date-only mode.
    assert_eq!(inline_format_token("yyyy-MM-dd HH:mm:ss", Mode::Date), "yyyy-MM-dd");
  }
}
