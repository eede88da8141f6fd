//! Raw status codes of the platform accessibility service.

use serde::{Deserialize, Serialize};

/// Status code reported by the platform for an accessibility call.
///
/// The named variants mirror the `AXError` constants of the macOS
/// Accessibility API; codes this crate does not name are preserved in
/// [`AxStatus::Other`]. Two of these are not failures from the caller's
/// point of view: [`AxStatus::NoValue`] and [`AxStatus::AttributeUnsupported`]
/// mean "the element has nothing to report here" and are surfaced as an
/// absent result, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxStatus {
  /// The call succeeded.
  Success,
  /// A system error occurred.
  Failure,
  /// An argument was an illegal value.
  IllegalArgument,
  /// The element reference is invalid (its UI object is gone).
  InvalidElement,
  /// The observer reference is invalid.
  InvalidObserver,
  /// A message could not be delivered to the target application.
  CannotComplete,
  /// The element does not support the requested attribute.
  AttributeUnsupported,
  /// The element does not support the requested action.
  ActionUnsupported,
  /// The element does not support the requested notification.
  NotificationUnsupported,
  /// The target application does not implement the accessibility API.
  NotImplemented,
  /// The notification was already registered.
  NotificationAlreadyRegistered,
  /// The notification was never registered.
  NotificationNotRegistered,
  /// The accessibility API is disabled (process is not a trusted client).
  ApiDisabled,
  /// The requested value does not exist.
  NoValue,
  /// The element does not support the parameterized attribute.
  ParameterizedAttributeUnsupported,
  /// Not enough precision for the requested value.
  NotEnoughPrecision,
  /// A status code this crate does not name.
  Other(i32),
}

impl AxStatus {
  /// Map a raw platform status code onto the named variants.
  pub const fn from_raw(code: i32) -> Self {
    match code {
      0 => Self::Success,
      -25200 => Self::Failure,
      -25201 => Self::IllegalArgument,
      -25202 => Self::InvalidElement,
      -25203 => Self::InvalidObserver,
      -25204 => Self::CannotComplete,
      -25205 => Self::AttributeUnsupported,
      -25206 => Self::ActionUnsupported,
      -25207 => Self::NotificationUnsupported,
      -25208 => Self::NotImplemented,
      -25209 => Self::NotificationAlreadyRegistered,
      -25210 => Self::NotificationNotRegistered,
      -25211 => Self::ApiDisabled,
      -25212 => Self::NoValue,
      -25213 => Self::ParameterizedAttributeUnsupported,
      -25214 => Self::NotEnoughPrecision,
      other => Self::Other(other),
    }
  }

  /// The raw platform status code.
  pub const fn raw(self) -> i32 {
    match self {
      Self::Success => 0,
      Self::Failure => -25200,
      Self::IllegalArgument => -25201,
      Self::InvalidElement => -25202,
      Self::InvalidObserver => -25203,
      Self::CannotComplete => -25204,
      Self::AttributeUnsupported => -25205,
      Self::ActionUnsupported => -25206,
      Self::NotificationUnsupported => -25207,
      Self::NotImplemented => -25208,
      Self::NotificationAlreadyRegistered => -25209,
      Self::NotificationNotRegistered => -25210,
      Self::ApiDisabled => -25211,
      Self::NoValue => -25212,
      Self::ParameterizedAttributeUnsupported => -25213,
      Self::NotEnoughPrecision => -25214,
      Self::Other(code) => code,
    }
  }

  /// Whether this status means "nothing to report" rather than failure.
  pub const fn is_absent(self) -> bool {
    matches!(self, Self::NoValue | Self::AttributeUnsupported)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn raw_roundtrip_for_named_codes() {
    let statuses = [
      AxStatus::Success,
      AxStatus::Failure,
      AxStatus::IllegalArgument,
      AxStatus::InvalidElement,
      AxStatus::InvalidObserver,
      AxStatus::CannotComplete,
      AxStatus::AttributeUnsupported,
      AxStatus::ActionUnsupported,
      AxStatus::NotificationUnsupported,
      AxStatus::NotImplemented,
      AxStatus::NotificationAlreadyRegistered,
      AxStatus::NotificationNotRegistered,
      AxStatus::ApiDisabled,
      AxStatus::NoValue,
      AxStatus::ParameterizedAttributeUnsupported,
      AxStatus::NotEnoughPrecision,
    ];
    for status in statuses {
      assert_eq!(AxStatus::from_raw(status.raw()), status);
    }
  }

  #[test]
  fn unknown_code_is_preserved() {
    assert_eq!(AxStatus::from_raw(-12345), AxStatus::Other(-12345));
    assert_eq!(AxStatus::Other(-12345).raw(), -12345);
  }

  #[test]
  fn absence_statuses() {
    assert!(AxStatus::NoValue.is_absent());
    assert!(AxStatus::AttributeUnsupported.is_absent());
    assert!(!AxStatus::CannotComplete.is_absent());
    assert!(!AxStatus::Success.is_absent());
  }
}
