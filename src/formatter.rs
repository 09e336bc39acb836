//! Renders date values through a `y/M/d/H/m/s` format token. This is
//! the formatting collaborator behind the inline input's show text:
//! the façade never inspects the token itself, it only chooses one and
//! passes it here.

use itertools::Itertools;
use time::PrimitiveDateTime;

/// How to group multiple formatted values. Range modes format two
/// values as one group joined by the range separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grouping {
  pub size: usize,
  pub inner_separator: String,
}

impl Grouping {
  pub fn new(size: usize, inner_separator: impl Into<String>) -> Self {
    Grouping { size, inner_separator: inner_separator.into() }
  }
}

/// Formats each value through `token`, then joins them. Grouped values
/// are joined by the group's inner separator first; groups (or
/// ungrouped values) are joined by `","`.
pub fn format_date_values(
  values: &[PrimitiveDateTime],
  token: &str,
  grouping: Option<&Grouping>,
) -> String {
  let formatted: Vec<String> = values.iter()
    .map(|value| format_date_value(*value, token))
    .collect();
  match grouping {
    Some(grouping) if grouping.size > 0 => {
      formatted.chunks(grouping.size)
        .map(|group| group.join(&grouping.inner_separator))
        .join(",")
    }
    _ => formatted.join(","),
  }
}

/// Formats one value through `token`. Runs of the placeholder
/// characters `y`, `M`, `d`, `H`, `m`, `s` become the zero-padded
/// component (a `yy` run keeps only the last two digits of the year);
/// every other character is copied verbatim. Placeholders are
/// case-sensitive: `M` is the month, `m` the minute.
pub fn format_date_value(value: PrimitiveDateTime, token: &str) -> String {
  let mut out = String::with_capacity(token.len());
  let mut chars = token.chars().peekable();
  while let Some(ch) = chars.next() {
    if !is_placeholder(ch) {
      out.push(ch);
      continue;
    }
    let mut width = 1;
    while chars.next_if_eq(&ch).is_some() {
      width += 1;
    }
    push_component(&mut out, ch, width, value);
  }
  out
}

fn is_placeholder(ch: char) -> bool {
  matches!(ch, 'y' | 'M' | 'd' | 'H' | 'm' | 's')
}

fn push_component(out: &mut String, placeholder: char, width: usize, value: PrimitiveDateTime) {
  let component = match placeholder {
    'y' if width == 2 => (value.year().rem_euclid(100)) as u64,
    'y' => value.year().max(0) as u64,
    'M' => u64::from(u8::from(value.month())),
    'd' => u64::from(value.day()),
    'H' => u64::from(value.hour()),
    'm' => u64::from(value.minute()),
    's' => u64::from(value.second()),
    _ => unreachable!("not a placeholder: {placeholder}"),
  };
  out.push_str(&format!("{component:0width$}"));
}
