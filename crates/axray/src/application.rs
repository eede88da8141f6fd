/*!
Application-rooted access.

An [`Application`] wraps the root element of one process's accessibility
tree and carries the tree-level conveniences: window listing, search, and a
depth-first walk. It is a starting point, not a registry; dropping it does
not affect the OS-side objects.
*/

use std::fmt;

use crate::element::Element;
use crate::platform::PlatformHandle;
use crate::types::AxrayResult;

/// The accessibility tree of one running application.
#[derive(Clone)]
pub struct Application<H: PlatformHandle> {
  root: Element<H>,
}

impl<H: PlatformHandle> Application<H> {
  /// Wrap an existing application root element.
  pub const fn from_root(root: Element<H>) -> Self {
    Self { root }
  }

  /// The root element of the application's tree.
  pub const fn root(&self) -> &Element<H> {
    &self.root
  }

  /// The application's windows, in platform-reported order.
  pub fn windows(&self) -> AxrayResult<Vec<Element<H>>> {
    self.root.windows()
  }

  /// Find the first element in the tree satisfying a predicate.
  ///
  /// Searches depth-first in pre-order starting at the root; see
  /// [`Element::find`].
  pub fn find_element<P>(&self, predicate: P) -> AxrayResult<Option<Element<H>>>
  where
    P: FnMut(&Element<H>) -> bool,
  {
    self.root.find(predicate)
  }

  /// Walk the whole tree depth-first, pre-order. The root is depth 0.
  pub fn walk<F>(&self, visit: F) -> AxrayResult<()>
  where
    F: FnMut(&Element<H>, usize) -> AxrayResult<()>,
  {
    self.root.walk(visit)
  }
}

impl<H: PlatformHandle> fmt::Debug for Application<H> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Application").finish_non_exhaustive()
  }
}

#[cfg(target_os = "macos")]
impl Application<crate::platform::ElementHandle> {
  /// The application with the given process id.
  pub fn new(pid: i32) -> Self {
    Self::from_root(Element::application(pid))
  }

  /// The first running application with the given bundle identifier, or
  /// `None` when no such process exists.
  pub fn with_bundle_identifier(bundle_id: &str) -> Option<Self> {
    crate::platform::macos::pid_with_bundle_identifier(bundle_id).map(Self::new)
  }

  /// The first non-terminated running application whose localized name
  /// contains `name`, or `None` when no such process exists.
  pub fn with_name_containing(name: &str) -> Option<Self> {
    crate::platform::macos::pid_with_name_containing(name).map(Self::new)
  }
}
