//! The input-event model seen by the foundation and the serializable
//! payload it emits back to the hosting widget.

use crate::value::InlineInputValue;

use serde::{Serialize, Deserialize};

/// Logical key identity of an input event. Keystroke dispatch must key
/// off this, never a numeric key code: key press events report code 0
/// for Enter on some event types.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Key {
  Enter,
  Tab,
  #[default]
  Other,
}

impl Key {
  /// Maps a DOM-style logical key name (`event.key`) to its identity.
  pub fn from_name(name: &str) -> Key {
    match name {
      "Enter" => Key::Enter,
      "Tab" => Key::Tab,
      _ => Key::Other,
    }
  }
}

/// Which half of a range input an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RangeType {
  RangeStart,
  RangeEnd,
}

/// A UI input event, reduced to the parts the foundation reads: the
/// logical key (if any) and the input's current text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputEvent {
  pub key: Key,
  pub value: String,
}

impl InputEvent {
  pub fn new(key: Key, value: impl Into<String>) -> Self {
    InputEvent { key, value: value.into() }
  }

  /// An event carrying only text, e.g. a change event.
  pub fn with_value(value: impl Into<String>) -> Self {
    InputEvent::new(Key::Other, value)
  }
}

/// Notifies the hosting widget that the inline input changed: the new
/// decomposed value, the format token in effect, and the recomposed
/// flattened string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineInputChangePayload {
  pub inline_input_value: InlineInputValue,
  pub format: String,
  pub inline_input: String,
}

impl InlineInputChangePayload {
  pub const EVENT_NAME: &'static str = "inline-input-change";
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::value::PanelInput;

  #[test]
  fn test_key_from_name() {
    assert_eq!(Key::from_name("Enter"), Key::Enter);
    assert_eq!(Key::from_name("Tab"), Key::Tab);
    assert_eq!(Key::from_name("a"), Key::Other);
    assert_eq!(Key::from_name(""), Key::Other);
  }

  #[test]
  fn test_payload_serialization() {
    let payload = InlineInputChangePayload {
      inline_input_value: InlineInputValue {
        left: PanelInput::new("2022-02-01", ""),
        right: PanelInput::default(),
      },
      format: "yyyy-MM-dd".to_owned(),
      inline_input: "2022-02-01".to_owned(),
    };
    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(json["inlineInputValue"]["left"]["dateInput"], "2022-02-01");
    assert_eq!(json["format"], "yyyy-MM-dd");
    assert_eq!(json["inlineInput"], "2022-02-01");
  }
}
