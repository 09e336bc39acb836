//! The decomposed per-field representation of the inline input, plus
//! the conversions between it and the flattened single-line string the
//! user actually types.
//!
//! Parsing is best effort by design: the value is rebuilt on every
//! keystroke, so any missing piece of the input becomes an empty field
//! rather than an error.

use crate::mode::Mode;

use serde::{Serialize, Deserialize};

/// The date and time fields of one side (one "month panel") of the
/// inline input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelInput {
  pub date_input: String,
  pub time_input: String,
}

/// The full decomposed inline input. Non-range modes only use `left`;
/// modes without a time component leave both `time_input` fields
/// empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineInputValue {
  pub left: PanelInput,
  pub right: PanelInput,
}

/// Selects one of the four writable fields of an [`InlineInputValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InputSlot {
  LeftDate,
  LeftTime,
  RightDate,
  RightTime,
}

impl PanelInput {
  pub fn new(date_input: impl Into<String>, time_input: impl Into<String>) -> Self {
    PanelInput { date_input: date_input.into(), time_input: time_input.into() }
  }

  pub fn is_empty(&self) -> bool {
    self.date_input.is_empty() && self.time_input.is_empty()
  }
}

impl InlineInputValue {
  pub fn is_empty(&self) -> bool {
    self.left.is_empty() && self.right.is_empty()
  }

  /// Replaces the field selected by `slot` with `text`.
  pub fn set(&mut self, slot: InputSlot, text: impl Into<String>) {
    let field = match slot {
      InputSlot::LeftDate => &mut self.left.date_input,
      InputSlot::LeftTime => &mut self.left.time_input,
      InputSlot::RightDate => &mut self.right.date_input,
      InputSlot::RightTime => &mut self.right.time_input,
    };
    *field = text.into();
  }

  /// Returns a copy with the field selected by `slot` replaced.
  pub fn with(&self, slot: InputSlot, text: impl Into<String>) -> Self {
    let mut copy = self.clone();
    copy.set(slot, text);
    copy
  }
}

/// The separator between the date and time halves of one side. Exactly
/// one space; anything else is part of the field text.
const TIME_SEPARATOR: &str = " ";

/// Splits `input` at every occurrence of `separator` and keeps the
/// first two segments, defaulting absent segments to `""`. Note that a
/// third and later segment is dropped, not folded into the second one.
fn split_pair<'a>(input: &'a str, separator: &str) -> (&'a str, &'a str) {
  if separator.is_empty() {
    return (input, "");
  }
  let mut segments = input.split(separator);
  let first = segments.next().unwrap_or("");
  let second = segments.next().unwrap_or("");
  (first, second)
}

/// Decomposes a flattened inline input string into its per-field
/// representation for the given mode.
///
/// - `2022-02-01` (date) puts the whole input in `left.date_input`.
/// - `2022-02-01 00:00:` (dateTime) splits on the first space; a
///   partial time half is kept verbatim.
/// - `2022-02-01 00:00:00 ~ ` (dateTimeRange) leaves `right` fully
///   empty; each range side is trimmed before its date/time split so a
///   bare `~` separator tolerates the spaces users type around it.
///
/// `Year` has no inline decomposition; the result stays empty.
pub fn parse_inline_input(input: &str, mode: Mode, range_separator: &str) -> InlineInputValue {
  let mut value = InlineInputValue::default();
  match mode {
    Mode::Date | Mode::Month => {
      value.left.date_input = input.to_owned();
    }
    Mode::DateRange => {
      let (left, right) = split_pair(input, range_separator);
      value.left.date_input = left.trim().to_owned();
      value.right.date_input = right.trim().to_owned();
    }
    Mode::DateTime => {
      let (date, time) = split_pair(input, TIME_SEPARATOR);
      value.left.date_input = date.to_owned();
      value.left.time_input = time.to_owned();
    }
    Mode::DateTimeRange => {
      let (left, right) = split_pair(input, range_separator);
      let (left_date, left_time) = split_pair(left.trim(), TIME_SEPARATOR);
      let (right_date, right_time) = split_pair(right.trim(), TIME_SEPARATOR);
      value.left = PanelInput::new(left_date, left_time);
      value.right = PanelInput::new(right_date, right_time);
    }
    Mode::Year => {}
  }
  value
}

/// Recomposes the flattened inline input string from its per-field
/// representation. Inverse of [`parse_inline_input`] for well-formed
/// input.
pub fn concat_inline_input(value: &InlineInputValue, mode: Mode, range_separator: &str) -> String {
  match mode {
    Mode::Date | Mode::Month => value.left.date_input.clone(),
    Mode::DateRange => {
      format!("{}{}{}", value.left.date_input, range_separator, value.right.date_input)
    }
    Mode::DateTime => concat_date_and_time(&value.left),
    Mode::DateTimeRange => {
      let left = concat_date_and_time(&value.left);
      let right = concat_date_and_time(&value.right);
      format!("{left}{range_separator}{right}")
    }
    Mode::Year => String::new(),
  }
}

fn concat_date_and_time(panel: &PanelInput) -> String {
  format!("{}{}{}", panel.date_input, TIME_SEPARATOR, panel.time_input)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn value(
    left_date: &str,
    left_time: &str,
    right_date: &str,
    right_time: &str,
  ) -> InlineInputValue {
    InlineInputValue {
      left: PanelInput::new(left_date, left_time),
      right: PanelInput::new(right_date, right_time),
    }
  }

  #[test]
  fn test_parse_date() {
    assert_eq!(
      parse_inline_input("2022-02-01", Mode::Date, "~"),
      value("2022-02-01", "", "", ""),
    );
  }

  #[test]
  fn test_parse_date_partial() {
    assert_eq!(
      parse_inline_input("2022-0", Mode::Date, "~"),
      value("2022-0", "", "", ""),
    );
  }

  #[test]
  fn test_parse_month() {
    assert_eq!(
      parse_inline_input("2022-02", Mode::Month, "~"),
      value("2022-02", "", "", ""),
    );
  }

  #[test]
  fn test_parse_year_stays_empty() {
    assert_eq!(parse_inline_input("2022", Mode::Year, "~"), InlineInputValue::default());
  }

  #[test]
  fn test_parse_date_range() {
    assert_eq!(
      parse_inline_input("2022-02-01~2022-02-15", Mode::DateRange, "~"),
      value("2022-02-01", "", "2022-02-15", ""),
    );
  }

  #[test]
  fn test_parse_date_range_without_separator() {
    assert_eq!(
      parse_inline_input("2022-02-01", Mode::DateRange, "~"),
      value("2022-02-01", "", "", ""),
    );
  }

  #[test]
  fn test_parse_date_range_trailing_separator() {
    assert_eq!(
      parse_inline_input("2022-02-01~", Mode::DateRange, "~"),
      value("2022-02-01", "", "", ""),
    );
  }

  #[test]
  fn test_parse_date_time() {
    assert_eq!(
      parse_inline_input("2022-02-01 00:00:00", Mode::DateTime, "~"),
      value("2022-02-01", "00:00:00", "", ""),
    );
  }

  #[test]
  fn test_parse_date_time_partial_time() {
    assert_eq!(
      parse_inline_input("2022-02-01 00:00:", Mode::DateTime, "~"),
      value("2022-02-01", "00:00:", "", ""),
    );
  }

  #[test]
  fn test_parse_date_time_no_time() {
    assert_eq!(
      parse_inline_input("2022-02-01", Mode::DateTime, "~"),
      value("2022-02-01", "", "", ""),
    );
  }

  #[test]
  fn test_parse_date_time_range() {
    assert_eq!(
      parse_inline_input("2022-02-01 00:00:00 ~ 2022-02-15 00:00:00", Mode::DateTimeRange, "~"),
      value("2022-02-01", "00:00:00", "2022-02-15", "00:00:00"),
    );
  }

  #[test]
  fn test_parse_date_time_range_missing_right() {
    assert_eq!(
      parse_inline_input("2022-02-01 00:00:00 ~ ", Mode::DateTimeRange, "~"),
      value("2022-02-01", "00:00:00", "", ""),
    );
  }

  #[test]
  fn test_parse_date_time_range_missing_left() {
    assert_eq!(
      parse_inline_input(" ~ 2022-02-15 00:00:00", Mode::DateTimeRange, "~"),
      value("", "", "2022-02-15", "00:00:00"),
    );
  }

  #[test]
  fn test_concat_by_mode() {
    let v = value("2022-02-01", "00:00:00", "2022-02-15", "12:30:00");
    assert_eq!(concat_inline_input(&v, Mode::Date, "~"), "2022-02-01");
    assert_eq!(concat_inline_input(&v, Mode::Month, "~"), "2022-02-01");
    assert_eq!(concat_inline_input(&v, Mode::DateRange, "~"), "2022-02-01~2022-02-15");
    assert_eq!(concat_inline_input(&v, Mode::DateTime, "~"), "2022-02-01 00:00:00");
    assert_eq!(
      concat_inline_input(&v, Mode::DateTimeRange, "~"),
      "2022-02-01 00:00:00~2022-02-15 12:30:00",
    );
    assert_eq!(concat_inline_input(&v, Mode::Year, "~"), "");
  }

  #[test]
  fn test_round_trip_well_formed() {
    let cases = [
      ("2022-02-01", Mode::Date),
      ("2022-02", Mode::Month),
      ("2022-02-01~2022-02-15", Mode::DateRange),
      ("2022-02-01 00:00:00", Mode::DateTime),
      ("2022-02-01 00:00:00~2022-02-15 00:00:00", Mode::DateTimeRange),
    ];
    for (input, mode) in cases {
      let parsed = parse_inline_input(input, mode, "~");
      assert_eq!(concat_inline_input(&parsed, mode, "~"), input, "mode {mode}");
    }
  }

  #[test]
  fn test_round_trip_trailing_separator() {
    // Partial input with a dangling separator survives the round trip
    // through the empty-string defaults.
    let parsed = parse_inline_input("2022-02-01~", Mode::DateRange, "~");
    assert_eq!(concat_inline_input(&parsed, Mode::DateRange, "~"), "2022-02-01~");
  }

  #[test]
  fn test_set_and_with() {
    let mut v = InlineInputValue::default();
    v.set(InputSlot::LeftDate, "2022-02-01");
    v.set(InputSlot::RightTime, "08:00:00");
    assert_eq!(v, value("2022-02-01", "", "", "08:00:00"));

    let copy = v.with(InputSlot::LeftTime, "00:30:00");
    assert_eq!(copy, value("2022-02-01", "00:30:00", "", "08:00:00"));
    // The original is untouched.
    assert_eq!(v, value("2022-02-01", "", "", "08:00:00"));
  }

  #[test]
  fn test_serde_field_names() {
    let v = value("2022-02-01", "00:00:00", "", "");
    let json = serde_json::to_value(&v).unwrap();
    assert_eq!(json["left"]["dateInput"], "2022-02-01");
    assert_eq!(json["left"]["timeInput"], "00:00:00");
    assert_eq!(json["right"]["dateInput"], "");
  }
}
