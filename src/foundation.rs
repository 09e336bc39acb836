//! The input foundation: a façade between the hosting widget's UI
//! events and the parsing/formatting functions in [`crate::token`],
//! [`crate::value`] and [`crate::formatter`].
//!
//! The foundation owns no state of its own. Everything it needs comes
//! through the injected [`DateInputAdapter`]: current props on one
//! side, notification callbacks on the other. Handlers never mutate a
//! caller-owned value in place; they clone, write, and hand the new
//! value back through a notification.

use crate::events::{InputEvent, InlineInputChangePayload, Key, RangeType};
use crate::formatter::{format_date_values, Grouping};
use crate::mode::Mode;
use crate::token::inline_format_token;
use crate::value::{concat_inline_input, parse_inline_input, InlineInputValue, InputSlot};

use time::PrimitiveDateTime;

/// The properties the foundation reads on every operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateInputProps {
  pub mode: Mode,
  /// Caller-supplied format token; `None` means "use the mode
  /// default". An unusable token also falls back to the default, see
  /// [`inline_format_token`].
  pub format: Option<String>,
  pub range_separator: String,
}

pub const DEFAULT_RANGE_SEPARATOR: &str = "~";

impl Default for DateInputProps {
  fn default() -> Self {
    DateInputProps {
      mode: Mode::Date,
      format: None,
      range_separator: DEFAULT_RANGE_SEPARATOR.to_owned(),
    }
  }
}

/// The widget-side surface the foundation is wired to: a property
/// accessor plus notification callbacks. Every callback defaults to a
/// no-op, so an adapter only implements the notifications it consumes.
pub trait DateInputAdapter {
  fn props(&self) -> DateInputProps;

  /// Stops the event from reaching outside-click handlers. Called
  /// before the range-input clear notification.
  fn stop_propagation(&mut self, _event: &InputEvent) {}

  fn notify_click(&mut self, _event: &InputEvent) {}
  fn notify_change(&mut self, _value: &str, _event: &InputEvent) {}
  fn notify_inline_input_change(&mut self, _payload: InlineInputChangePayload) {}
  fn notify_enter(&mut self, _value: &str) {}
  fn notify_blur(&mut self, _event: &InputEvent) {}
  fn notify_focus(&mut self, _event: &InputEvent) {}
  fn notify_clear(&mut self, _event: &InputEvent) {}
  fn notify_range_input_clear(&mut self, _event: &InputEvent) {}
  fn notify_range_input_focus(&mut self, _event: &InputEvent, _range_type: RangeType) {}
  fn notify_tab_press(&mut self, _event: &InputEvent) {}
}

/// The date and (for time-bearing modes) time placeholders shown in
/// the empty inline input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlinePlaceholder {
  pub date_placeholder: String,
  pub time_placeholder: Option<String>,
}

/// One edit of the inline input: the new text for one field of the
/// current decomposed value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineInputChange {
  pub value: String,
  pub slot: InputSlot,
  pub inline_input_value: InlineInputValue,
}

pub struct InputFoundation<A: DateInputAdapter> {
  adapter: A,
}

impl<A: DateInputAdapter> InputFoundation<A> {
  pub fn new(adapter: A) -> Self {
    InputFoundation { adapter }
  }

  pub fn adapter(&self) -> &A {
    &self.adapter
  }

  pub fn into_adapter(self) -> A {
    self.adapter
  }

  /// The inline format token in effect for the current props.
  pub fn inline_format_token(&self) -> String {
    let props = self.adapter.props();
    inline_format_token(props.format.as_deref().unwrap_or_default(), props.mode)
  }

  /// Formats date values into the widget's show text. The token is
  /// chosen by priority: `custom_format`, then the props format, then
  /// the mode default. Range modes group two values joined by the
  /// range separator.
  pub fn format_show_text(&self, values: &[PrimitiveDateTime], custom_format: Option<&str>) -> String {
    let props = self.adapter.props();
    let token = custom_format
      .map(str::to_owned)
      .or_else(|| props.format.clone())
      .unwrap_or_else(|| props.mode.default_format_token().to_owned());
    match props.mode {
      Mode::Date | Mode::Month | Mode::DateTime => format_date_values(values, &token, None),
      Mode::DateRange | Mode::DateTimeRange => {
        let grouping = Grouping::new(2, props.range_separator.as_str());
        format_date_values(values, &token, Some(&grouping))
      }
      Mode::Year => String::new(),
    }
  }

  /// Derives the inline input's placeholders from the format token.
  /// Time-bearing modes split the token on its single space; date-only
  /// modes use the whole token as the date placeholder.
  pub fn inline_input_placeholder(&self) -> InlinePlaceholder {
    let token = self.inline_format_token();
    if self.adapter.props().mode.has_time() {
      match token.split_once(' ') {
        Some((date, time)) => InlinePlaceholder {
          date_placeholder: date.to_owned(),
          time_placeholder: Some(time.to_owned()),
        },
        None => InlinePlaceholder { date_placeholder: token, time_placeholder: None },
      }
    } else {
      InlinePlaceholder { date_placeholder: token, time_placeholder: None }
    }
  }

  /// Applies one field edit: copies the incoming decomposed value,
  /// writes the new text at the selected slot, recomposes the
  /// flattened string, and notifies the widget.
  pub fn handle_inline_input_change(&mut self, change: InlineInputChange) {
    let props = self.adapter.props();
    let new_value = change.inline_input_value.with(change.slot, change.value);
    let inline_input = concat_inline_input(&new_value, props.mode, &props.range_separator);
    self.adapter.notify_inline_input_change(InlineInputChangePayload {
      inline_input_value: new_value,
      format: self.inline_format_token(),
      inline_input,
    });
  }

  /// Builds a fresh decomposed value from an already-known decomposed
  /// value, or from formatted date values if none is known. Either
  /// source is flattened and re-parsed, so externally constructed
  /// values are canonicalized through the same parser that handles
  /// user keystrokes.
  pub fn inline_input_value(
    &self,
    values: &[PrimitiveDateTime],
    existing: Option<&InlineInputValue>,
  ) -> InlineInputValue {
    let props = self.adapter.props();
    let flattened = match existing {
      Some(value) => concat_inline_input(value, props.mode, &props.range_separator),
      None => {
        let token = self.inline_format_token();
        self.format_show_text(values, Some(&token))
      }
    };
    parse_inline_input(&flattened, props.mode, &props.range_separator)
  }

  /// Flattens a decomposed value using the current props. Inverse of
  /// the parser for well-formed input.
  pub fn concat_inline_input_value(&self, value: &InlineInputValue) -> String {
    let props = self.adapter.props();
    concat_inline_input(value, props.mode, &props.range_separator)
  }

  pub fn handle_click(&mut self, event: &InputEvent) {
    self.adapter.notify_click(event);
  }

  pub fn handle_change(&mut self, value: &str, event: &InputEvent) {
    self.adapter.notify_change(value, event);
  }

  /// Notifies enter with the input's text, gated on the logical Enter
  /// key.
  pub fn handle_input_complete(&mut self, event: &InputEvent) {
    if event.key == Key::Enter {
      self.adapter.notify_enter(&event.value);
    }
  }

  pub fn handle_input_clear(&mut self, event: &InputEvent) {
    self.adapter.notify_clear(event);
  }

  pub fn handle_range_input_clear(&mut self, event: &InputEvent) {
    self.adapter.stop_propagation(event);
    self.adapter.notify_range_input_clear(event);
  }

  pub fn handle_range_input_enter_press(&mut self, event: &InputEvent, range_input_value: &str) {
    if event.key == Key::Enter {
      self.adapter.notify_enter(range_input_value);
    }
  }

  /// Tab on the end input hands focus back to the widget, gated on the
  /// logical Tab key.
  pub fn handle_range_input_end_key_press(&mut self, event: &InputEvent) {
    if event.key == Key::Tab {
      self.adapter.notify_tab_press(event);
    }
  }

  pub fn handle_range_input_focus(&mut self, event: &InputEvent, range_type: RangeType) {
    self.adapter.notify_range_input_focus(event, range_type);
  }

  pub fn handle_focus(&mut self, event: &InputEvent) {
    self.adapter.notify_focus(event);
  }

  pub fn handle_blur(&mut self, event: &InputEvent) {
    self.adapter.notify_blur(event);
  }
}
