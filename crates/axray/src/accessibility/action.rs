//! Simulated user actions.
//!
//! Actions are the interactions an element advertises: pressing a button,
//! raising a window, stepping a slider. Invoking one asks the owning
//! application to behave as if the user had performed it.

use serde::{Deserialize, Serialize};

/// Action that can be performed on a UI element, mapped from the platform's
/// action string constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Action {
  /// Simulate pressing the cancel button.
  Cancel,
  /// Simulate pressing the Return key.
  Confirm,
  /// Decrement the element's value by its increment amount.
  Decrement,
  /// Increment the element's value by its increment amount.
  Increment,
  /// Select the element, e.g. a menu item.
  Pick,
  /// Simulate a single click, e.g. pressing a button.
  Press,
  /// Bring the window forward as far as the application allows.
  Raise,
  /// Reveal alternate UI, as on mouse-over.
  ShowAlternateUI,
  /// Restore the default UI, as when mouse-over ends.
  ShowDefaultUI,
  /// Open the element's context menu.
  ShowMenu,
  /// Scroll the element into the visible area.
  ScrollToVisible,
  /// Scroll one page to the left.
  ScrollLeftByPage,
  /// Scroll one page to the right.
  ScrollRightByPage,
  /// Scroll one page up.
  ScrollUpByPage,
  /// Scroll one page down.
  ScrollDownByPage,
  /// Toggle window zoom.
  ZoomWindow,
  /// Action string this crate does not name.
  Unknown,
}

impl Action {
  /// Every named action, in declaration order.
  pub const ALL: &'static [Self] = &[
    Self::Cancel,
    Self::Confirm,
    Self::Decrement,
    Self::Increment,
    Self::Pick,
    Self::Press,
    Self::Raise,
    Self::ShowAlternateUI,
    Self::ShowDefaultUI,
    Self::ShowMenu,
    Self::ScrollToVisible,
    Self::ScrollLeftByPage,
    Self::ScrollRightByPage,
    Self::ScrollUpByPage,
    Self::ScrollDownByPage,
    Self::ZoomWindow,
  ];

  /// Map a platform action string onto the enum.
  ///
  /// Unrecognized strings map to [`Action::Unknown`] and are logged at debug
  /// level.
  pub fn from_ax_str(action: &str) -> Self {
    match action {
      "AXCancel" => Self::Cancel,
      "AXConfirm" => Self::Confirm,
      "AXDecrement" => Self::Decrement,
      "AXIncrement" => Self::Increment,
      "AXPick" => Self::Pick,
      "AXPress" => Self::Press,
      "AXRaise" => Self::Raise,
      "AXShowAlternateUI" => Self::ShowAlternateUI,
      "AXShowDefaultUI" => Self::ShowDefaultUI,
      "AXShowMenu" => Self::ShowMenu,
      "AXScrollToVisible" => Self::ScrollToVisible,
      "AXScrollLeftByPage" => Self::ScrollLeftByPage,
      "AXScrollRightByPage" => Self::ScrollRightByPage,
      "AXScrollUpByPage" => Self::ScrollUpByPage,
      "AXScrollDownByPage" => Self::ScrollDownByPage,
      "AXZoomWindow" => Self::ZoomWindow,
      other => {
        log::debug!("unrecognized accessibility action: {other}");
        Self::Unknown
      }
    }
  }

  /// The canonical platform string for this action.
  pub const fn as_ax_str(self) -> &'static str {
    match self {
      Self::Cancel => "AXCancel",
      Self::Confirm => "AXConfirm",
      Self::Decrement => "AXDecrement",
      Self::Increment => "AXIncrement",
      Self::Pick => "AXPick",
      Self::Press => "AXPress",
      Self::Raise => "AXRaise",
      Self::ShowAlternateUI => "AXShowAlternateUI",
      Self::ShowDefaultUI => "AXShowDefaultUI",
      Self::ShowMenu => "AXShowMenu",
      Self::ScrollToVisible => "AXScrollToVisible",
      Self::ScrollLeftByPage => "AXScrollLeftByPage",
      Self::ScrollRightByPage => "AXScrollRightByPage",
      Self::ScrollUpByPage => "AXScrollUpByPage",
      Self::ScrollDownByPage => "AXScrollDownByPage",
      Self::ZoomWindow => "AXZoomWindow",
      Self::Unknown => "AXUnknown",
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn action_roundtrip() {
    for action in Action::ALL {
      let back = Action::from_ax_str(action.as_ax_str());
      assert_eq!(back, *action, "roundtrip failed for {action:?}");
    }
  }

  #[test]
  fn unknown_action_string_falls_back() {
    assert_eq!(Action::from_ax_str("AXDoTheThing"), Action::Unknown);
  }
}
