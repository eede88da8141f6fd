/*! Running-application lookup via AppKit.

Resolving a bundle identifier or a display name to a pid needs no
accessibility permission; only talking to the resulting element does.
*/

#![allow(unsafe_code)]

use objc2_app_kit::{NSRunningApplication, NSWorkspace};
use objc2_foundation::NSString;

/// Pid of the first running application with the given bundle identifier.
pub(crate) fn pid_with_bundle_identifier(bundle_id: &str) -> Option<i32> {
  let bundle_id = NSString::from_str(bundle_id);
  let apps = unsafe { NSRunningApplication::runningApplicationsWithBundleIdentifier(&bundle_id) };
  let app = apps.iter().next()?;
  Some(unsafe { app.processIdentifier() })
}

/// Pid of the first non-terminated running application whose localized name
/// contains `name`.
pub(crate) fn pid_with_name_containing(name: &str) -> Option<i32> {
  let workspace = unsafe { NSWorkspace::sharedWorkspace() };
  let apps = unsafe { workspace.runningApplications() };
  for app in apps.iter() {
    if unsafe { app.isTerminated() } {
      continue;
    }
    let Some(localized) = (unsafe { app.localizedName() }) else {
      continue;
    };
    if localized.to_string().contains(name) {
      return Some(unsafe { app.processIdentifier() });
    }
  }
  None
}
