//! Element values.
//!
//! Values represent the current state of an element: the text of a text
//! field, the position of a slider, the checked state of a checkbox. The
//! platform reports them dynamically typed; this enum is the decoded form.

use serde::{Deserialize, Serialize};

/// Typed value of an accessibility element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
#[serde(rename_all = "lowercase")]
pub enum Value {
  /// Text content (text fields, static text).
  String(String),

  /// Integer value (steppers, discrete controls).
  Integer(i64),

  /// Floating point value (sliders, progress indicators).
  Float(f64),

  /// Boolean state (checkboxes, radio buttons).
  Boolean(bool),
}

impl Value {
  /// Get as string slice if this is a `String` value.
  pub fn as_str(&self) -> Option<&str> {
    match self {
      Self::String(s) => Some(s),
      _ => None,
    }
  }

  /// Get as `i64` if this is an `Integer`, truncating a `Float`.
  pub fn as_i64(&self) -> Option<i64> {
    match self {
      Self::Integer(i) => Some(*i),
      Self::Float(f) => Some(*f as i64),
      _ => None,
    }
  }

  /// Get as `f64` if this is a `Float` or `Integer`.
  pub fn as_f64(&self) -> Option<f64> {
    match self {
      Self::Float(f) => Some(*f),
      Self::Integer(i) => Some(*i as f64),
      _ => None,
    }
  }

  /// Get as `bool` if this is a `Boolean` value.
  ///
  /// Checkbox-like elements on macOS report their state as the integers
  /// 0/1/2 (off/on/mixed), so integer values 0 and 1 convert as well.
  pub fn as_bool(&self) -> Option<bool> {
    match self {
      Self::Boolean(b) => Some(*b),
      Self::Integer(0) => Some(false),
      Self::Integer(1) => Some(true),
      _ => None,
    }
  }

  /// Convert into a display string regardless of the underlying type.
  pub fn into_string(self) -> String {
    match self {
      Self::String(s) => s,
      Self::Integer(i) => i.to_string(),
      Self::Float(f) => f.to_string(),
      Self::Boolean(b) => b.to_string(),
    }
  }
}

impl From<String> for Value {
  fn from(s: String) -> Self {
    Self::String(s)
  }
}

impl From<&str> for Value {
  fn from(s: &str) -> Self {
    Self::String(s.to_owned())
  }
}

impl From<i64> for Value {
  fn from(i: i64) -> Self {
    Self::Integer(i)
  }
}

impl From<f64> for Value {
  fn from(f: f64) -> Self {
    Self::Float(f)
  }
}

impl From<bool> for Value {
  fn from(b: bool) -> Self {
    Self::Boolean(b)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn string_accessors() {
    let v = Value::String("hello".into());
    assert_eq!(v.as_str(), Some("hello"));
    assert_eq!(v.as_i64(), None);
    assert_eq!(v.as_bool(), None);
  }

  #[test]
  fn numeric_conversions() {
    let int = Value::Integer(42);
    assert_eq!(int.as_i64(), Some(42));
    assert_eq!(int.as_f64(), Some(42.0));

    let float = Value::Float(0.5);
    assert_eq!(float.as_f64(), Some(0.5));
    assert_eq!(float.as_i64(), Some(0)); // truncates
  }

  #[test]
  fn checkbox_integers_read_as_bool() {
    assert_eq!(Value::Integer(0).as_bool(), Some(false));
    assert_eq!(Value::Integer(1).as_bool(), Some(true));
    assert_eq!(Value::Integer(2).as_bool(), None); // mixed state
  }

  #[test]
  fn into_string_converts() {
    assert_eq!(Value::String("test".into()).into_string(), "test");
    assert_eq!(Value::Integer(42).into_string(), "42");
    assert_eq!(Value::Boolean(true).into_string(), "true");
  }
}
