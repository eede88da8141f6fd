/*! Accessibility trust checks.

The service only answers processes the user has approved under Privacy &
Security > Accessibility. Both checks are cheap enough to call before every
session.
*/

#![allow(unsafe_code)]

use objc2_application_services::{
  kAXTrustedCheckOptionPrompt, AXIsProcessTrusted, AXIsProcessTrustedWithOptions,
};
use objc2_core_foundation::{CFBoolean, CFDictionary, CFRetained};

/// Whether the current process is a trusted accessibility client.
pub fn trusted() -> bool {
  unsafe { AXIsProcessTrusted() }
}

/// Like [`trusted`], but lets the system show its permission dialog when
/// the process is not yet trusted.
pub fn trusted_with_prompt() -> bool {
  let Some(prompt_key) = (unsafe { kAXTrustedCheckOptionPrompt }) else {
    return trusted();
  };
  let value = CFBoolean::new(true);
  let options = CFDictionary::from_slices(&[prompt_key], &[&*value]);
  // The check takes an untyped dictionary.
  let options_ref =
    unsafe { &*(CFRetained::as_ptr(&options).as_ptr() as *const CFDictionary) };
  unsafe { AXIsProcessTrustedWithOptions(Some(options_ref)) }
}
