/*! Opaque platform handle with safe accessor methods.

All unsafe FFI against the Accessibility C API is encapsulated here. The
rest of the crate talks to [`ElementHandle`] through the `PlatformHandle`
trait and never sees a raw `AXUIElement`.
*/

#![allow(unsafe_code)]
#![allow(
  clippy::expect_used // NonNull::new on stack pointers - never null
)]

use std::fmt;
use std::ptr::NonNull;

use objc2_application_services::{AXError, AXUIElement, AXValue as AXValueRef, AXValueType};
use objc2_core_foundation::{
  CFArray, CFBoolean, CFCopyTypeIDDescription, CFGetTypeID, CFNumber, CFRetained, CFString, CFType,
};

use crate::accessibility::Value;
use crate::platform::{PlatformHandle, RawValue};
use crate::types::AxStatus;

/// Opaque handle to one `AXUIElement`. Clone is cheap (reference counted).
#[derive(Clone)]
pub struct ElementHandle {
  inner: CFRetained<AXUIElement>,
}

impl ElementHandle {
  fn new(element: CFRetained<AXUIElement>) -> Self {
    Self { inner: element }
  }

  /// The system-wide accessibility object.
  pub fn system_wide() -> Self {
    Self::new(unsafe { AXUIElement::new_system_wide() })
  }

  /// The top-level accessibility object of the application with `pid`.
  pub fn application(pid: i32) -> Self {
    Self::new(unsafe { AXUIElement::new_application(pid) })
  }

  /// Translate a Core Foundation value into the backend-agnostic form.
  fn translate(value: CFRetained<CFType>) -> RawValue<Self> {
    if let Some(s) = value.downcast_ref::<CFString>() {
      return RawValue::String(s.to_string());
    }
    if let Some(b) = value.downcast_ref::<CFBoolean>() {
      return RawValue::Bool(b.as_bool());
    }
    if let Some(n) = value.downcast_ref::<CFNumber>() {
      // CFNumber refuses lossy integer extraction, so fractional values
      // fall through to the float arm.
      if let Some(i) = n.as_i64() {
        return RawValue::Int(i);
      }
      if let Some(f) = n.as_f64() {
        return RawValue::Float(f);
      }
    }
    if let Some(ax_value) = value.downcast_ref::<AXValueRef>() {
      return RawValue::Opaque(ax_value_type_name(unsafe { ax_value.r#type() }).to_owned());
    }
    let value = match value.downcast::<AXUIElement>() {
      Ok(element) => return RawValue::Element(Self::new(element)),
      Err(value) => value,
    };
    let value = match value.downcast::<CFArray>() {
      Ok(array) => {
        let typed: CFRetained<CFArray<CFType>> = unsafe { CFRetained::cast_unchecked(array) };
        let len = typed.len();
        let mut items = Vec::with_capacity(len);
        for i in 0..len {
          if let Some(item) = typed.get(i) {
            items.push(Self::translate(item));
          }
        }
        return RawValue::Array(items);
      }
      Err(value) => value,
    };
    RawValue::Opaque(type_description(&value))
  }
}

impl PlatformHandle for ElementHandle {
  fn copy_attribute(&self, name: &str) -> Result<RawValue<Self>, AxStatus> {
    let attr = CFString::from_str(name);
    unsafe {
      let mut value: *const CFType = std::ptr::null();
      let result = self
        .inner
        .copy_attribute_value(&attr, NonNull::new(&raw mut value).expect("value ptr"));
      if result != AXError::Success {
        return Err(AxStatus::from_raw(result.0));
      }
      if value.is_null() {
        return Err(AxStatus::NoValue);
      }
      let value = CFRetained::from_raw(NonNull::new_unchecked(value.cast_mut()));
      Ok(Self::translate(value))
    }
  }

  fn attribute_names(&self) -> Result<Vec<String>, AxStatus> {
    unsafe {
      let mut names_ref: *const CFArray<CFString> = std::ptr::null();
      let result = self.inner.copy_attribute_names(
        NonNull::new((&raw mut names_ref).cast::<*const CFArray>()).expect("names ptr"),
      );
      if result != AXError::Success {
        return Err(AxStatus::from_raw(result.0));
      }
      if names_ref.is_null() {
        return Ok(Vec::new());
      }
      let names =
        CFRetained::<CFArray<CFString>>::from_raw(NonNull::new_unchecked(names_ref.cast_mut()));
      let len = names.len();
      let mut out = Vec::with_capacity(len);
      for i in 0..len {
        if let Some(s) = names.get(i) {
          out.push(s.to_string());
        }
      }
      Ok(out)
    }
  }

  fn set_attribute(&self, name: &str, value: &Value) -> Result<(), AxStatus> {
    let attr = CFString::from_str(name);
    unsafe {
      let result = match value {
        Value::String(s) => {
          let cf_value = CFString::from_str(s);
          self.inner.set_attribute_value(&attr, &cf_value)
        }
        Value::Boolean(b) => {
          // macOS checkboxes take CFNumber 0/1, not CFBoolean
          let cf_value = CFNumber::new_i32(i32::from(*b));
          self.inner.set_attribute_value(&attr, &cf_value)
        }
        Value::Integer(i) => {
          let cf_value = CFNumber::new_i64(*i);
          self.inner.set_attribute_value(&attr, &cf_value)
        }
        Value::Float(f) => {
          let cf_value = CFNumber::new_f64(*f);
          self.inner.set_attribute_value(&attr, &cf_value)
        }
      };
      if result == AXError::Success {
        Ok(())
      } else {
        Err(AxStatus::from_raw(result.0))
      }
    }
  }

  fn action_names(&self) -> Result<Vec<String>, AxStatus> {
    unsafe {
      let mut actions_ref: *const CFArray<CFString> = std::ptr::null();
      let result = self.inner.copy_action_names(
        NonNull::new((&raw mut actions_ref).cast::<*const CFArray>()).expect("actions ptr"),
      );
      if result != AXError::Success {
        return Err(AxStatus::from_raw(result.0));
      }
      if actions_ref.is_null() {
        return Ok(Vec::new());
      }
      let actions =
        CFRetained::<CFArray<CFString>>::from_raw(NonNull::new_unchecked(actions_ref.cast_mut()));
      let len = actions.len();
      let mut out = Vec::with_capacity(len);
      for i in 0..len {
        if let Some(s) = actions.get(i) {
          out.push(s.to_string());
        }
      }
      Ok(out)
    }
  }

  fn action_description(&self, action: &str) -> Result<String, AxStatus> {
    let action_name = CFString::from_str(action);
    unsafe {
      let mut description: *const CFString = std::ptr::null();
      let result = self.inner.copy_action_description(
        &action_name,
        NonNull::new(&raw mut description).expect("description ptr"),
      );
      if result != AXError::Success {
        return Err(AxStatus::from_raw(result.0));
      }
      if description.is_null() {
        return Err(AxStatus::NoValue);
      }
      let description = CFRetained::from_raw(NonNull::new_unchecked(description.cast_mut()));
      Ok(description.to_string())
    }
  }

  fn perform(&self, action: &str) -> Result<(), AxStatus> {
    let action_name = CFString::from_str(action);
    let result = unsafe { self.inner.perform_action(&action_name) };
    if result == AXError::Success {
      Ok(())
    } else {
      Err(AxStatus::from_raw(result.0))
    }
  }

  fn pid(&self) -> Result<i32, AxStatus> {
    unsafe {
      let mut pid: i32 = 0;
      let result = self.inner.pid(NonNull::new_unchecked(&raw mut pid));
      if result == AXError::Success {
        Ok(pid)
      } else {
        Err(AxStatus::from_raw(result.0))
      }
    }
  }
}

impl fmt::Debug for ElementHandle {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ElementHandle").finish_non_exhaustive()
  }
}

// SAFETY: AXUIElement is a thread-safe Core Foundation object.
unsafe impl Send for ElementHandle {}
unsafe impl Sync for ElementHandle {}

/// Name of a structured `AXValue` payload, for diagnostics.
fn ax_value_type_name(value_type: AXValueType) -> &'static str {
  if value_type == AXValueType::CGPoint {
    "CGPoint"
  } else if value_type == AXValueType::CGSize {
    "CGSize"
  } else if value_type == AXValueType::CGRect {
    "CGRect"
  } else if value_type == AXValueType::CFRange {
    "CFRange"
  } else if value_type == AXValueType::AXError {
    "AXError"
  } else {
    "AXValue"
  }
}

fn type_description(value: &CFType) -> String {
  let type_id = CFGetTypeID(Some(value));
  CFCopyTypeIDDescription(type_id).map_or_else(|| "unknown".to_owned(), |s| s.to_string())
}
