/*!
Platform boundary.

Core code never touches OS types directly; it talks to an opaque handle
through the [`PlatformHandle`] trait defined in `traits.rs`. The macOS
implementation (the only shipped backend) lives in `macos/` and keeps all
unsafe FFI behind that trait.
*/

mod traits;

pub use traits::{PlatformHandle, RawValue};

#[cfg(target_os = "macos")]
pub(crate) mod macos;

#[cfg(target_os = "macos")]
pub use macos::{trusted, trusted_with_prompt, ElementHandle};

#[cfg(test)]
pub(crate) mod fake;
