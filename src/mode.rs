//! The date picker's operating mode, which determines whether the
//! inline input has one field or two (single vs. range) and whether a
//! time component follows the date component.

use serde::{Serialize, Deserialize};
use thiserror::Error;

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Mode {
  Date,
  DateRange,
  Year,
  Month,
  DateTime,
  DateTimeRange,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("'{input}' is not a date picker mode")]
pub struct ParseModeError {
  pub input: String,
}

impl Mode {
  /// All modes, in the order the picker presents them.
  pub const ALL: [Mode; 6] =
    [Mode::Date, Mode::DateRange, Mode::Year, Mode::Month, Mode::DateTime, Mode::DateTimeRange];

  /// Whether the mode takes two values joined by a range separator.
  pub fn is_range(self) -> bool {
    matches!(self, Mode::DateRange | Mode::DateTimeRange)
  }

  /// Whether the mode carries a time component after the date.
  pub fn has_time(self) -> bool {
    matches!(self, Mode::DateTime | Mode::DateTimeRange)
  }

  /// The format token used when the caller supplies none, or supplies
  /// one the extractor rejects.
  pub fn default_format_token(self) -> &'static str {
    match self {
      Mode::Year => "yyyy",
      Mode::Month => "yyyy-MM",
      Mode::Date | Mode::DateRange => "yyyy-MM-dd",
      Mode::DateTime | Mode::DateTimeRange => "yyyy-MM-dd HH:mm:ss",
    }
  }

  /// The camelCase name used in serialization and `FromStr`.
  pub fn name(self) -> &'static str {
    match self {
      Mode::Date => "date",
      Mode::DateRange => "dateRange",
      Mode::Year => "year",
      Mode::Month => "month",
      Mode::DateTime => "dateTime",
      Mode::DateTimeRange => "dateTimeRange",
    }
  }
}

impl Display for Mode {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.name())
  }
}

impl FromStr for Mode {
  type Err = ParseModeError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Mode::ALL.iter()
      .find(|mode| mode.name() == s)
      .copied()
      .ok_or_else(|| ParseModeError { input: s.to_owned() })
  }
}
