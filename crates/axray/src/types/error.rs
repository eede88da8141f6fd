/*! Error types for axray operations. */

use super::AxStatus;

/// Errors that can occur while talking to the accessibility service.
///
/// "No value" and "attribute unsupported" platform statuses are not errors;
/// they come back as `Ok(None)` from attribute getters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AxrayError {
  /// The platform returned a non-success status.
  #[error("accessibility call failed: {0:?} (code {code})", code = .0.raw())]
  Platform(AxStatus),

  /// An attribute value did not decode to the expected type.
  #[error("attribute {attribute} decoded as {actual}, expected {expected}")]
  TypeMismatch {
    /// Platform name of the attribute that was fetched.
    attribute: &'static str,
    /// Type the attribute key promises.
    expected: &'static str,
    /// Type the platform actually reported.
    actual: String,
  },
}

/// Result type for axray operations.
pub type AxrayResult<T> = Result<T, AxrayError>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn platform_error_shows_code() {
    let message = AxrayError::Platform(AxStatus::CannotComplete).to_string();
    assert!(message.contains("CannotComplete"));
    assert!(message.contains("-25204"));
  }

  #[test]
  fn type_mismatch_names_attribute() {
    let err = AxrayError::TypeMismatch {
      attribute: "AXTitle",
      expected: "string",
      actual: "integer".into(),
    };
    let message = err.to_string();
    assert!(message.contains("AXTitle"));
    assert!(message.contains("expected string"));
  }
}
