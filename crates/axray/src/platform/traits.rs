/*!
Platform abstraction traits.

These define the contract between core code and a platform backend. The
backend resolves string-keyed attribute and action names against one opaque
accessibility object and reports raw statuses; all interpretation (absence
mapping, typed decoding, enum fallbacks) happens above this seam.
*/

use crate::accessibility::Value;
use crate::types::AxStatus;

/// Dynamically-typed attribute value as reported by the platform.
///
/// This is the undecoded form handed to the typed attribute registry.
/// Element-valued attributes carry further handles of the same backend.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue<H> {
  /// A string value.
  String(String),
  /// A boolean value.
  Bool(bool),
  /// An integer number.
  Int(i64),
  /// A floating point number.
  Float(f64),
  /// Another accessibility object.
  Element(H),
  /// A homogeneous or mixed array of values.
  Array(Vec<RawValue<H>>),
  /// A platform value of a type this crate does not translate.
  /// Carries the platform's own description of the value.
  Opaque(String),
}

impl<H> RawValue<H> {
  /// Short name of the carried type, for diagnostics.
  pub fn kind(&self) -> String {
    match self {
      Self::String(_) => "string".into(),
      Self::Bool(_) => "boolean".into(),
      Self::Int(_) => "integer".into(),
      Self::Float(_) => "float".into(),
      Self::Element(_) => "element".into(),
      Self::Array(_) => "array".into(),
      Self::Opaque(description) => description.clone(),
    }
  }
}

/// Opaque handle to one platform accessibility object.
///
/// The handle must stay cheap to clone; clones refer to the same OS-side
/// object. Validity is owned by the OS: any call can fail with
/// [`AxStatus::InvalidElement`] once the underlying UI object is gone.
pub trait PlatformHandle: Clone + Sized {
  /// Copy one attribute value by platform name.
  ///
  /// An attribute without a value must be reported as [`AxStatus::NoValue`]
  /// or [`AxStatus::AttributeUnsupported`], never as a success carrying an
  /// empty value.
  fn copy_attribute(&self, name: &str) -> Result<RawValue<Self>, AxStatus>;

  /// Names of the attributes this element supports.
  fn attribute_names(&self) -> Result<Vec<String>, AxStatus>;

  /// Write a typed value to an attribute.
  fn set_attribute(&self, name: &str, value: &Value) -> Result<(), AxStatus>;

  /// Names of the actions this element supports.
  fn action_names(&self) -> Result<Vec<String>, AxStatus>;

  /// Localized description of an action, by platform name.
  fn action_description(&self, action: &str) -> Result<String, AxStatus>;

  /// Perform a named action on this element.
  fn perform(&self, action: &str) -> Result<(), AxStatus>;

  /// Process id of the application owning this element.
  fn pid(&self) -> Result<i32, AxStatus>;
}
