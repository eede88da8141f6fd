/*!
Axray - typed inspection and interaction for accessibility trees

```ignore
use axray::{Action, Application, Role};

// Attach to a running application by display name
let app = Application::with_name_containing("Preview").expect("Preview is not running");

// Dump its accessibility tree
app.walk(|element, depth| {
  let role = element.role()?;
  let title = element.title()?.unwrap_or_default();
  println!("{}{role:?} {title}", "  ".repeat(depth));
  Ok(())
})?;

// Find a button and press it
if let Some(button) =
  app.find_element(|e| e.role().unwrap_or_default() == Some(Role::Button))?
{
  button.perform(Action::Press)?;
}
```

Every getter asks the OS at call time; nothing is cached, and an element is
only as alive as the UI object behind it. On macOS the calling process must
be a trusted accessibility client (`trusted_with_prompt` triggers the
system dialog) before the service answers.
*/

pub mod accessibility;
mod application;
mod attribute;
mod element;
mod platform;
mod types;

pub use accessibility::{Action, Role, Subrole, Value};
pub use application::Application;
pub use attribute::{keys, AttributeKey, DecodeAttribute};
pub use element::Element;
pub use platform::{PlatformHandle, RawValue};
pub use types::{AxStatus, AxrayError, AxrayResult};

#[cfg(target_os = "macos")]
pub use platform::{trusted, trusted_with_prompt, ElementHandle};
