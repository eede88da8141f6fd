/*!
Statically-typed attribute keys.

The platform exposes attributes as a dynamically-typed string-keyed
dictionary. This module replaces that with an explicit registry: an
[`AttributeKey`] binds a platform attribute name to the type its value
decodes to, and [`DecodeAttribute`] is the conversion from the raw platform
value. Fetching through a key either yields the promised type, an absent
result, or a type-mismatch error naming both sides.
*/

use std::fmt;
use std::marker::PhantomData;

use crate::accessibility::{Role, Subrole, Value};
use crate::element::Element;
use crate::platform::{PlatformHandle, RawValue};

/// A platform attribute name bound to its expected decoded type.
///
/// The constants in [`keys`] cover every attribute this crate reads.
/// [`AttributeKey::new`] is public so callers can address attributes the
/// registry does not name:
///
/// ```
/// use axray::AttributeKey;
///
/// const MAIN: AttributeKey<bool> = AttributeKey::new("AXMain");
/// ```
pub struct AttributeKey<T> {
  name: &'static str,
  _decoded: PhantomData<fn() -> T>,
}

impl<T> AttributeKey<T> {
  /// Bind a platform attribute name to the decoded type `T`.
  pub const fn new(name: &'static str) -> Self {
    Self {
      name,
      _decoded: PhantomData,
    }
  }

  /// The platform attribute name.
  pub const fn name(self) -> &'static str {
    self.name
  }
}

impl<T> Clone for AttributeKey<T> {
  fn clone(&self) -> Self {
    *self
  }
}

impl<T> Copy for AttributeKey<T> {}

impl<T> fmt::Debug for AttributeKey<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_tuple("AttributeKey").field(&self.name).finish()
  }
}

/// Conversion from a raw platform value to a typed attribute value.
///
/// Returning `None` means the platform handed back a value of a different
/// shape than the key promises; the caller turns that into a type-mismatch
/// error.
pub trait DecodeAttribute<H: PlatformHandle>: Sized {
  /// Name of the expected type, used in type-mismatch errors.
  const EXPECTED: &'static str;

  /// Decode the raw value, or reject it.
  fn decode(raw: RawValue<H>) -> Option<Self>;
}

impl<H: PlatformHandle> DecodeAttribute<H> for String {
  const EXPECTED: &'static str = "string";

  fn decode(raw: RawValue<H>) -> Option<Self> {
    match raw {
      RawValue::String(s) => Some(s),
      _ => None,
    }
  }
}

impl<H: PlatformHandle> DecodeAttribute<H> for bool {
  const EXPECTED: &'static str = "boolean";

  fn decode(raw: RawValue<H>) -> Option<Self> {
    match raw {
      RawValue::Bool(b) => Some(b),
      _ => None,
    }
  }
}

impl<H: PlatformHandle> DecodeAttribute<H> for i64 {
  const EXPECTED: &'static str = "integer";

  fn decode(raw: RawValue<H>) -> Option<Self> {
    match raw {
      RawValue::Int(i) => Some(i),
      _ => None,
    }
  }
}

impl<H: PlatformHandle> DecodeAttribute<H> for f64 {
  const EXPECTED: &'static str = "number";

  fn decode(raw: RawValue<H>) -> Option<Self> {
    match raw {
      RawValue::Float(f) => Some(f),
      // Numeric attributes surface as integers when the value is whole.
      RawValue::Int(i) => Some(i as f64),
      _ => None,
    }
  }
}

impl<H: PlatformHandle> DecodeAttribute<H> for Value {
  const EXPECTED: &'static str = "value";

  fn decode(raw: RawValue<H>) -> Option<Self> {
    match raw {
      RawValue::String(s) => Some(Value::String(s)),
      RawValue::Bool(b) => Some(Value::Boolean(b)),
      RawValue::Int(i) => Some(Value::Integer(i)),
      RawValue::Float(f) => Some(Value::Float(f)),
      _ => None,
    }
  }
}

impl<H: PlatformHandle> DecodeAttribute<H> for Role {
  const EXPECTED: &'static str = "role string";

  fn decode(raw: RawValue<H>) -> Option<Self> {
    match raw {
      RawValue::String(s) => Some(Role::from_ax_str(&s)),
      _ => None,
    }
  }
}

impl<H: PlatformHandle> DecodeAttribute<H> for Subrole {
  const EXPECTED: &'static str = "subrole string";

  fn decode(raw: RawValue<H>) -> Option<Self> {
    match raw {
      RawValue::String(s) => Some(Subrole::from_ax_str(&s)),
      _ => None,
    }
  }
}

impl<H: PlatformHandle> DecodeAttribute<H> for Element<H> {
  const EXPECTED: &'static str = "element";

  fn decode(raw: RawValue<H>) -> Option<Self> {
    match raw {
      RawValue::Element(handle) => Some(Element::from_handle(handle)),
      _ => None,
    }
  }
}

impl<H: PlatformHandle> DecodeAttribute<H> for Vec<Element<H>> {
  const EXPECTED: &'static str = "element array";

  fn decode(raw: RawValue<H>) -> Option<Self> {
    match raw {
      RawValue::Array(items) => items
        .into_iter()
        .map(|item| match item {
          RawValue::Element(handle) => Some(Element::from_handle(handle)),
          _ => None,
        })
        .collect(),
      _ => None,
    }
  }
}

impl<H: PlatformHandle> DecodeAttribute<H> for Vec<Value> {
  const EXPECTED: &'static str = "value array";

  fn decode(raw: RawValue<H>) -> Option<Self> {
    match raw {
      RawValue::Array(items) => items.into_iter().map(DecodeAttribute::decode).collect(),
      _ => None,
    }
  }
}

/// Attribute keys for the attributes this crate reads.
///
/// Element-valued attributes (children, parent, windows) are not listed
/// here; [`Element`](crate::Element) exposes them as dedicated methods.
pub mod keys {
  use super::AttributeKey;
  use crate::accessibility::{Role, Subrole, Value};

  /// Role classifying the element. All accessibility objects carry it.
  pub const ROLE: AttributeKey<Role> = AttributeKey::new("AXRole");
  /// Specialized subtype of the role.
  pub const SUBROLE: AttributeKey<Subrole> = AttributeKey::new("AXSubrole");
  /// Title string of the element.
  pub const TITLE: AttributeKey<String> = AttributeKey::new("AXTitle");
  /// Descriptive text for elements without a title, e.g. image buttons.
  pub const DESCRIPTION: AttributeKey<String> = AttributeKey::new("AXDescription");
  /// Current value of the element.
  pub const VALUE: AttributeKey<Value> = AttributeKey::new("AXValue");
  /// Discrete values the element's value may take.
  pub const ALLOWED_VALUES: AttributeKey<Vec<Value>> = AttributeKey::new("AXAllowedValues");
  /// Whether the element responds to user interaction.
  pub const ENABLED: AttributeKey<bool> = AttributeKey::new("AXEnabled");
  /// Whether the element has keyboard focus.
  pub const FOCUSED: AttributeKey<bool> = AttributeKey::new("AXFocused");
  /// Placeholder text of an empty text field.
  pub const PLACEHOLDER: AttributeKey<String> = AttributeKey::new("AXPlaceholderValue");
  /// Stable identifier assigned by the application's developer.
  pub const IDENTIFIER: AttributeKey<String> = AttributeKey::new("AXIdentifier");
  /// Help text, typically the tooltip.
  pub const HELP: AttributeKey<String> = AttributeKey::new("AXHelp");
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::platform::fake::FakeHandle;

  #[test]
  fn key_carries_name() {
    assert_eq!(keys::ROLE.name(), "AXRole");
    assert_eq!(keys::ALLOWED_VALUES.name(), "AXAllowedValues");
    assert_eq!(AttributeKey::<bool>::new("AXMain").name(), "AXMain");
  }

  #[test]
  fn scalar_decoding() {
    let decoded: Option<String> = DecodeAttribute::<FakeHandle>::decode(RawValue::String("a".into()));
    assert_eq!(decoded, Some("a".into()));

    let rejected: Option<String> = DecodeAttribute::<FakeHandle>::decode(RawValue::Int(3));
    assert_eq!(rejected, None);

    let float: Option<f64> = DecodeAttribute::<FakeHandle>::decode(RawValue::Int(3));
    assert_eq!(float, Some(3.0));
  }

  #[test]
  fn role_decoding_absorbs_unknown_strings() {
    let known: Option<Role> = DecodeAttribute::<FakeHandle>::decode(RawValue::String("AXButton".into()));
    assert_eq!(known, Some(Role::Button));

    let unknown: Option<Role> =
      DecodeAttribute::<FakeHandle>::decode(RawValue::String("AXNovelRole".into()));
    assert_eq!(unknown, Some(Role::Unknown));

    let not_a_string: Option<Role> = DecodeAttribute::<FakeHandle>::decode(RawValue::Int(1));
    assert_eq!(not_a_string, None);
  }

  #[test]
  fn value_array_decoding() {
    let raw: RawValue<FakeHandle> =
      RawValue::Array(vec![RawValue::Int(1), RawValue::Int(2), RawValue::Int(3)]);
    let decoded: Option<Vec<Value>> = DecodeAttribute::decode(raw);
    assert_eq!(
      decoded,
      Some(vec![
        Value::Integer(1),
        Value::Integer(2),
        Value::Integer(3)
      ])
    );

    let mixed: RawValue<FakeHandle> =
      RawValue::Array(vec![RawValue::Int(1), RawValue::Opaque("AXValue".into())]);
    let rejected: Option<Vec<Value>> = DecodeAttribute::decode(mixed);
    assert_eq!(rejected, None);
  }
}
