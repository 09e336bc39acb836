//! Input parsing and formatting for a date picker's inline text-input
//! mode: the conversions between a date value, the one-line display
//! string, and the decomposed per-field representation (date/time,
//! left/right of a range), plus the [`foundation`] façade that wires
//! them to the hosting widget's events.
//!
//! All parsing here is best effort. Unusable format tokens fall back
//! to per-mode defaults and incomplete input degrades to empty fields;
//! nothing in this crate errors on user input.

pub mod events;
pub mod formatter;
pub mod foundation;
pub mod mode;
pub mod token;
pub mod value;
