/*!
The element wrapper.

An [`Element`] wraps one opaque platform accessibility object and exposes
typed attribute getters, action invocation, and recursive search over the
element's subtree. Nothing is cached: every getter asks the platform, and
the answer is only as alive as the OS-side object backing the handle.
*/

use std::fmt;

use crate::accessibility::{Action, Role, Subrole, Value};
use crate::attribute::{keys, AttributeKey, DecodeAttribute};
use crate::platform::PlatformHandle;
use crate::types::{AxrayError, AxrayResult};

const CHILDREN: &str = "AXChildren";
const PARENT: &str = "AXParent";
const WINDOWS: &str = "AXWindows";

/// One node of an accessibility tree.
///
/// Cloning is cheap; clones refer to the same OS-side object.
#[derive(Clone)]
pub struct Element<H: PlatformHandle> {
  handle: H,
}

impl<H: PlatformHandle> Element<H> {
  /// Wrap a platform handle.
  pub const fn from_handle(handle: H) -> Self {
    Self { handle }
  }

  /// The underlying platform handle.
  pub const fn handle(&self) -> &H {
    &self.handle
  }

  /// Fetch one attribute through its typed key.
  ///
  /// Returns `Ok(None)` when the platform reports that the element has no
  /// value for the attribute or does not support it at all. Any other
  /// non-success status is a [`AxrayError::Platform`] error; a value of an
  /// unexpected shape is a [`AxrayError::TypeMismatch`].
  pub fn attribute<T: DecodeAttribute<H>>(&self, key: AttributeKey<T>) -> AxrayResult<Option<T>> {
    let raw = match self.handle.copy_attribute(key.name()) {
      Ok(raw) => raw,
      Err(status) if status.is_absent() => return Ok(None),
      Err(status) => return Err(AxrayError::Platform(status)),
    };
    let actual = raw.kind();
    match T::decode(raw) {
      Some(value) => Ok(Some(value)),
      None => Err(AxrayError::TypeMismatch {
        attribute: key.name(),
        expected: T::EXPECTED,
        actual,
      }),
    }
  }

  // === Attribute getters ===

  /// Role classifying this element. Unrecognized role strings come back as
  /// [`Role::Unknown`].
  pub fn role(&self) -> AxrayResult<Option<Role>> {
    self.attribute(keys::ROLE)
  }

  /// Specialized subtype of the role, if the element reports one.
  pub fn subrole(&self) -> AxrayResult<Option<Subrole>> {
    self.attribute(keys::SUBROLE)
  }

  /// Title string, if the element has one.
  pub fn title(&self) -> AxrayResult<Option<String>> {
    self.attribute(keys::TITLE)
  }

  /// Descriptive text, e.g. for image buttons without a title.
  pub fn description(&self) -> AxrayResult<Option<String>> {
    self.attribute(keys::DESCRIPTION)
  }

  /// Current value of the element.
  pub fn value(&self) -> AxrayResult<Option<Value>> {
    self.attribute(keys::VALUE)
  }

  /// Discrete values this element's value may take. Empty when the element
  /// does not constrain its value.
  pub fn allowed_values(&self) -> AxrayResult<Vec<Value>> {
    Ok(self.attribute(keys::ALLOWED_VALUES)?.unwrap_or_default())
  }

  /// Whether the element responds to user interaction.
  pub fn enabled(&self) -> AxrayResult<Option<bool>> {
    self.attribute(keys::ENABLED)
  }

  /// Whether the element has keyboard focus.
  pub fn focused(&self) -> AxrayResult<Option<bool>> {
    self.attribute(keys::FOCUSED)
  }

  /// Placeholder text of an empty text field.
  pub fn placeholder(&self) -> AxrayResult<Option<String>> {
    self.attribute(keys::PLACEHOLDER)
  }

  /// Developer-assigned identifier.
  pub fn identifier(&self) -> AxrayResult<Option<String>> {
    self.attribute(keys::IDENTIFIER)
  }

  /// Help text, typically the tooltip.
  pub fn help(&self) -> AxrayResult<Option<String>> {
    self.attribute(keys::HELP)
  }

  /// Child elements in platform-reported order. Empty for leaves.
  pub fn children(&self) -> AxrayResult<Vec<Self>> {
    Ok(
      self
        .attribute(AttributeKey::<Vec<Self>>::new(CHILDREN))?
        .unwrap_or_default(),
    )
  }

  /// Parent element, absent on the root of a tree.
  pub fn parent(&self) -> AxrayResult<Option<Self>> {
    self.attribute(AttributeKey::<Self>::new(PARENT))
  }

  /// Window elements of an application element. Empty for other roles.
  pub fn windows(&self) -> AxrayResult<Vec<Self>> {
    Ok(
      self
        .attribute(AttributeKey::<Vec<Self>>::new(WINDOWS))?
        .unwrap_or_default(),
    )
  }

  /// Process id of the application owning this element.
  pub fn pid(&self) -> AxrayResult<i32> {
    self.handle.pid().map_err(AxrayError::Platform)
  }

  /// Names of the attributes this element supports.
  pub fn attribute_names(&self) -> AxrayResult<Vec<String>> {
    self.handle.attribute_names().map_err(AxrayError::Platform)
  }

  /// Write a typed value to the element's value attribute.
  pub fn set_value(&self, value: &Value) -> AxrayResult<()> {
    self
      .handle
      .set_attribute(keys::VALUE.name(), value)
      .map_err(AxrayError::Platform)
  }

  // === Actions ===

  /// Actions this element supports. Unrecognized action strings come back
  /// as [`Action::Unknown`].
  pub fn actions(&self) -> AxrayResult<Vec<Action>> {
    let names = self.handle.action_names().map_err(AxrayError::Platform)?;
    Ok(names.iter().map(|name| Action::from_ax_str(name)).collect())
  }

  /// Localized description of an action, absent when the element does not
  /// describe it.
  pub fn action_description(&self, action: Action) -> AxrayResult<Option<String>> {
    match self.handle.action_description(action.as_ax_str()) {
      Ok(description) => Ok(Some(description)),
      Err(status) if status.is_absent() => Ok(None),
      Err(status) => Err(AxrayError::Platform(status)),
    }
  }

  /// Perform an action on this element.
  ///
  /// Success or failure is reported through the platform status alone; the
  /// platform offers no further diagnostics.
  pub fn perform(&self, action: Action) -> AxrayResult<()> {
    self
      .handle
      .perform(action.as_ax_str())
      .map_err(AxrayError::Platform)
  }

  // === Tree traversal ===

  /// Walk the subtree rooted at this element depth-first, pre-order.
  ///
  /// The visitor receives each element together with its depth below this
  /// one (the root itself is depth 0). Children are visited in
  /// platform-reported order. An error from the visitor or from a children
  /// fetch aborts the walk.
  pub fn walk<F>(&self, mut visit: F) -> AxrayResult<()>
  where
    F: FnMut(&Self, usize) -> AxrayResult<()>,
  {
    self.walk_at(0, &mut visit)
  }

  fn walk_at<F>(&self, depth: usize, visit: &mut F) -> AxrayResult<()>
  where
    F: FnMut(&Self, usize) -> AxrayResult<()>,
  {
    visit(self, depth)?;
    for child in self.children()? {
      child.walk_at(depth + 1, visit)?;
    }
    Ok(())
  }

  /// Find the first element in this subtree satisfying a predicate.
  ///
  /// Searches depth-first in pre-order, so the match closest to the root
  /// (and earliest among siblings) wins. Returns `Ok(None)` when nothing
  /// matches.
  pub fn find<P>(&self, mut predicate: P) -> AxrayResult<Option<Self>>
  where
    P: FnMut(&Self) -> bool,
  {
    self.find_inner(&mut predicate)
  }

  fn find_inner<P>(&self, predicate: &mut P) -> AxrayResult<Option<Self>>
  where
    P: FnMut(&Self) -> bool,
  {
    if predicate(self) {
      return Ok(Some(self.clone()));
    }
    for child in self.children()? {
      if let Some(found) = child.find_inner(predicate)? {
        return Ok(Some(found));
      }
    }
    Ok(None)
  }
}

impl<H: PlatformHandle> fmt::Debug for Element<H> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Element").finish_non_exhaustive()
  }
}

#[cfg(target_os = "macos")]
impl Element<crate::platform::ElementHandle> {
  /// The system-wide accessibility object.
  ///
  /// Use it to read attributes that apply to the system at large, such as
  /// the focused application.
  pub fn system_wide() -> Self {
    Self::from_handle(crate::platform::ElementHandle::system_wide())
  }

  /// The top-level accessibility object of the application with the given
  /// process id.
  pub fn application(pid: i32) -> Self {
    Self::from_handle(crate::platform::ElementHandle::application(pid))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::platform::fake::FakeHandle;
  use crate::platform::RawValue;
  use crate::types::AxStatus;

  fn leaf(role: &str, title: &str) -> FakeHandle {
    FakeHandle::new()
      .with_attr("AXRole", Ok(RawValue::String(role.into())))
      .with_attr("AXTitle", Ok(RawValue::String(title.into())))
  }

  /// window
  /// ├── group
  /// │   ├── button "OK"
  /// │   └── button "Cancel"
  /// └── text "status"
  fn fixture_tree() -> FakeHandle {
    let group = leaf("AXGroup", "group").with_children(vec![
      leaf("AXButton", "OK"),
      leaf("AXButton", "Cancel"),
    ]);
    leaf("AXWindow", "window").with_children(vec![group, leaf("AXStaticText", "status")])
  }

  fn titles_in_visit_order(root: &Element<FakeHandle>) -> Vec<(String, usize)> {
    let mut seen = Vec::new();
    root
      .walk(|element, depth| {
        let title = element.title()?.unwrap_or_default();
        seen.push((title, depth));
        Ok(())
      })
      .unwrap();
    seen
  }

  #[test]
  fn no_value_is_absent_not_error() {
    let handle = FakeHandle::new().with_attr("AXTitle", Err(AxStatus::NoValue));
    let element = Element::from_handle(handle);
    assert_eq!(element.title().unwrap(), None);
  }

  #[test]
  fn unsupported_attribute_is_absent_not_error() {
    // The fake reports AttributeUnsupported for attributes never set.
    let element = Element::from_handle(FakeHandle::new());
    assert_eq!(element.title().unwrap(), None);
    assert_eq!(element.role().unwrap(), None);
  }

  #[test]
  fn other_statuses_are_platform_errors() {
    let handle = FakeHandle::new().with_attr("AXTitle", Err(AxStatus::CannotComplete));
    let element = Element::from_handle(handle);
    assert_eq!(
      element.title(),
      Err(AxrayError::Platform(AxStatus::CannotComplete))
    );
  }

  #[test]
  fn wrong_shape_is_a_type_mismatch() {
    let handle = FakeHandle::new().with_attr("AXTitle", Ok(RawValue::Int(7)));
    let element = Element::from_handle(handle);
    assert_eq!(
      element.title(),
      Err(AxrayError::TypeMismatch {
        attribute: "AXTitle",
        expected: "string",
        actual: "integer".into(),
      })
    );
  }

  #[test]
  fn unknown_role_decodes_to_unknown_variant() {
    let element = Element::from_handle(leaf("AXBrandNewRole", "x"));
    assert_eq!(element.role().unwrap(), Some(Role::Unknown));
  }

  #[test]
  fn children_default_to_empty() {
    let element = Element::from_handle(leaf("AXButton", "OK"));
    assert!(element.children().unwrap().is_empty());
    assert!(element.windows().unwrap().is_empty());
    assert!(element.allowed_values().unwrap().is_empty());
  }

  #[test]
  fn parent_absent_on_root() {
    let element = Element::from_handle(fixture_tree());
    assert!(element.parent().unwrap().is_none());
  }

  #[test]
  fn walk_visits_depth_first_pre_order() {
    let root = Element::from_handle(fixture_tree());
    let seen = titles_in_visit_order(&root);
    assert_eq!(
      seen,
      vec![
        ("window".to_owned(), 0),
        ("group".to_owned(), 1),
        ("OK".to_owned(), 2),
        ("Cancel".to_owned(), 2),
        ("status".to_owned(), 1),
      ]
    );
  }

  #[test]
  fn walk_propagates_visitor_errors() {
    let root = Element::from_handle(fixture_tree());
    let mut visited = 0;
    let result = root.walk(|_, _| {
      visited += 1;
      if visited == 3 {
        Err(AxrayError::Platform(AxStatus::Failure))
      } else {
        Ok(())
      }
    });
    assert_eq!(result, Err(AxrayError::Platform(AxStatus::Failure)));
    assert_eq!(visited, 3);
  }

  #[test]
  fn find_returns_first_pre_order_match() {
    let root = Element::from_handle(fixture_tree());
    let found = root
      .find(|element| element.role().unwrap_or_default() == Some(Role::Button))
      .unwrap()
      .unwrap();
    assert_eq!(found.title().unwrap().as_deref(), Some("OK"));
  }

  #[test]
  fn find_returns_none_without_match() {
    let root = Element::from_handle(fixture_tree());
    let found = root
      .find(|element| element.title().unwrap_or_default().as_deref() == Some("missing"))
      .unwrap();
    assert!(found.is_none());
  }

  #[test]
  fn actions_map_unknown_strings_to_unknown() {
    let handle = FakeHandle::new().with_actions(vec!["AXPress".into(), "AXWiggle".into()]);
    let element = Element::from_handle(handle);
    assert_eq!(
      element.actions().unwrap(),
      vec![Action::Press, Action::Unknown]
    );
  }

  #[test]
  fn perform_reports_status_only() {
    let pressable = FakeHandle::new().with_actions(vec!["AXPress".into()]);
    let element = Element::from_handle(pressable.clone());
    element.perform(Action::Press).unwrap();
    assert_eq!(pressable.performed(), vec!["AXPress".to_owned()]);

    let inert = Element::from_handle(FakeHandle::new());
    assert_eq!(
      inert.perform(Action::Press),
      Err(AxrayError::Platform(AxStatus::ActionUnsupported))
    );
  }

  #[test]
  fn action_description_absent_when_not_described() {
    let handle = FakeHandle::new()
      .with_actions(vec!["AXPress".into()])
      .with_action_description("AXPress", "press the button");
    let element = Element::from_handle(handle);
    assert_eq!(
      element.action_description(Action::Press).unwrap().as_deref(),
      Some("press the button")
    );
    assert_eq!(element.action_description(Action::Raise).unwrap(), None);
  }

  #[test]
  fn set_value_writes_through() {
    let handle = FakeHandle::new();
    let element = Element::from_handle(handle.clone());
    element.set_value(&Value::String("typed".into())).unwrap();
    assert_eq!(
      handle.written(),
      vec![("AXValue".to_owned(), Value::String("typed".into()))]
    );
  }

  #[test]
  fn pid_comes_from_the_handle() {
    let element = Element::from_handle(FakeHandle::new().with_pid(4242));
    assert_eq!(element.pid().unwrap(), 4242);
  }

  #[test]
  fn custom_keys_fetch_unregistered_attributes() {
    const MAIN: AttributeKey<bool> = AttributeKey::new("AXMain");
    let handle = FakeHandle::new().with_attr("AXMain", Ok(RawValue::Bool(true)));
    let element = Element::from_handle(handle);
    assert_eq!(element.attribute(MAIN).unwrap(), Some(true));
  }
}
