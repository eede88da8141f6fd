/*!
macOS backend.

Everything that touches the Accessibility C API lives in this module; the
rest of the crate sees one opaque [`ElementHandle`] through the
`PlatformHandle` trait.
*/

mod apps;
mod handles;
mod trust;

pub(crate) use apps::{pid_with_bundle_identifier, pid_with_name_containing};
pub use handles::ElementHandle;
pub use trust::{trusted, trusted_with_prompt};
