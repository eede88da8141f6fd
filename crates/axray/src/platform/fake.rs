/*!
In-memory backend for exercising core logic off-platform.

A [`FakeHandle`] is one node of a fixture tree built by tests. Attribute
lookups resolve against a per-node table; anything not configured reports
[`AxStatus::AttributeUnsupported`], matching how the real service answers
for attribute names an element does not carry.
*/

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use crate::accessibility::Value;
use crate::platform::{PlatformHandle, RawValue};
use crate::types::AxStatus;

type AttrResult = Result<RawValue<FakeHandle>, AxStatus>;

#[derive(Default)]
struct FakeState {
  attributes: BTreeMap<String, AttrResult>,
  actions: Vec<String>,
  action_descriptions: BTreeMap<String, String>,
  pid: i32,
  performed: Vec<String>,
  written: Vec<(String, Value)>,
}

/// Handle into an in-memory fixture tree.
///
/// Clones share state, like the reference-counted handles of a real
/// backend, so a test can keep a clone and observe what the element under
/// test recorded.
#[derive(Clone)]
pub(crate) struct FakeHandle {
  state: Rc<RefCell<FakeState>>,
}

impl FakeHandle {
  pub(crate) fn new() -> Self {
    Self {
      state: Rc::new(RefCell::new(FakeState::default())),
    }
  }

  /// Set the outcome of fetching one attribute.
  pub(crate) fn with_attr(self, name: &str, result: AttrResult) -> Self {
    self
      .state
      .borrow_mut()
      .attributes
      .insert(name.to_owned(), result);
    self
  }

  /// Attach child nodes, exposed through the `AXChildren` attribute.
  pub(crate) fn with_children(self, children: Vec<Self>) -> Self {
    let raw = RawValue::Array(children.into_iter().map(RawValue::Element).collect());
    self.with_attr("AXChildren", Ok(raw))
  }

  /// Set the action names this node supports.
  pub(crate) fn with_actions(self, actions: Vec<String>) -> Self {
    self.state.borrow_mut().actions = actions;
    self
  }

  /// Set the description for one action.
  pub(crate) fn with_action_description(self, action: &str, description: &str) -> Self {
    self
      .state
      .borrow_mut()
      .action_descriptions
      .insert(action.to_owned(), description.to_owned());
    self
  }

  /// Set the owning process id.
  pub(crate) fn with_pid(self, pid: i32) -> Self {
    self.state.borrow_mut().pid = pid;
    self
  }

  /// Actions performed on this node, in order.
  pub(crate) fn performed(&self) -> Vec<String> {
    self.state.borrow().performed.clone()
  }

  /// Attribute writes this node received, in order.
  pub(crate) fn written(&self) -> Vec<(String, Value)> {
    self.state.borrow().written.clone()
  }
}

impl PlatformHandle for FakeHandle {
  fn copy_attribute(&self, name: &str) -> Result<RawValue<Self>, AxStatus> {
    match self.state.borrow().attributes.get(name) {
      Some(result) => result.clone(),
      None => Err(AxStatus::AttributeUnsupported),
    }
  }

  fn attribute_names(&self) -> Result<Vec<String>, AxStatus> {
    Ok(self.state.borrow().attributes.keys().cloned().collect())
  }

  fn set_attribute(&self, name: &str, value: &Value) -> Result<(), AxStatus> {
    self
      .state
      .borrow_mut()
      .written
      .push((name.to_owned(), value.clone()));
    Ok(())
  }

  fn action_names(&self) -> Result<Vec<String>, AxStatus> {
    Ok(self.state.borrow().actions.clone())
  }

  fn action_description(&self, action: &str) -> Result<String, AxStatus> {
    match self.state.borrow().action_descriptions.get(action) {
      Some(description) => Ok(description.clone()),
      None => Err(AxStatus::NoValue),
    }
  }

  fn perform(&self, action: &str) -> Result<(), AxStatus> {
    let mut state = self.state.borrow_mut();
    if state.actions.iter().any(|name| name == action) {
      state.performed.push(action.to_owned());
      Ok(())
    } else {
      Err(AxStatus::ActionUnsupported)
    }
  }

  fn pid(&self) -> Result<i32, AxStatus> {
    Ok(self.state.borrow().pid)
  }
}

impl fmt::Debug for FakeHandle {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let state = self.state.borrow();
    f.debug_struct("FakeHandle")
      .field("attributes", &state.attributes.keys().collect::<Vec<_>>())
      .field("actions", &state.actions)
      .finish()
  }
}
