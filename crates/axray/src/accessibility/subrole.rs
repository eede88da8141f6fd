//! UI element subroles.
//!
//! A subrole refines the role with a specialized subtype: a window can be a
//! standard window or a dialog, a button can be a window close button.
//! Elements without a specialization simply do not report the attribute.

use serde::{Deserialize, Serialize};

/// Subrole of a UI element, mapped from the platform's `AXSubrole` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Subrole {
  // === Window buttons ===
  CloseButton,
  MinimizeButton,
  ZoomButton,
  FullScreenButton,
  ToolbarButton,

  // === Windows ===
  StandardWindow,
  Dialog,
  SystemDialog,
  FloatingWindow,
  SystemFloatingWindow,

  // === Text ===
  SecureTextField,
  SearchField,

  // === Rows and lists ===
  TableRow,
  OutlineRow,
  ContentList,
  DefinitionList,
  DescriptionList,

  // === Steppers and scroll bars ===
  IncrementArrow,
  DecrementArrow,
  IncrementPage,
  DecrementPage,

  // === Controls ===
  Toggle,
  Switch,
  SortButton,
  RatingIndicator,
  Timeline,

  /// Subrole string this crate does not name.
  Unknown,
}

impl Subrole {
  /// Every named subrole, in declaration order.
  pub const ALL: &'static [Self] = &[
    Self::CloseButton,
    Self::MinimizeButton,
    Self::ZoomButton,
    Self::FullScreenButton,
    Self::ToolbarButton,
    Self::StandardWindow,
    Self::Dialog,
    Self::SystemDialog,
    Self::FloatingWindow,
    Self::SystemFloatingWindow,
    Self::SecureTextField,
    Self::SearchField,
    Self::TableRow,
    Self::OutlineRow,
    Self::ContentList,
    Self::DefinitionList,
    Self::DescriptionList,
    Self::IncrementArrow,
    Self::DecrementArrow,
    Self::IncrementPage,
    Self::DecrementPage,
    Self::Toggle,
    Self::Switch,
    Self::SortButton,
    Self::RatingIndicator,
    Self::Timeline,
  ];

  /// Map a platform `AXSubrole` string onto the enum.
  pub fn from_ax_str(subrole: &str) -> Self {
    match subrole {
      "AXCloseButton" => Self::CloseButton,
      "AXMinimizeButton" => Self::MinimizeButton,
      "AXZoomButton" => Self::ZoomButton,
      "AXFullScreenButton" => Self::FullScreenButton,
      "AXToolbarButton" => Self::ToolbarButton,
      "AXStandardWindow" => Self::StandardWindow,
      "AXDialog" => Self::Dialog,
      "AXSystemDialog" => Self::SystemDialog,
      "AXFloatingWindow" => Self::FloatingWindow,
      "AXSystemFloatingWindow" => Self::SystemFloatingWindow,
      "AXSecureTextField" => Self::SecureTextField,
      "AXSearchField" => Self::SearchField,
      "AXTableRow" => Self::TableRow,
      "AXOutlineRow" => Self::OutlineRow,
      "AXContentList" => Self::ContentList,
      "AXDefinitionList" => Self::DefinitionList,
      "AXDescriptionList" => Self::DescriptionList,
      "AXIncrementArrow" => Self::IncrementArrow,
      "AXDecrementArrow" => Self::DecrementArrow,
      "AXIncrementPage" => Self::IncrementPage,
      "AXDecrementPage" => Self::DecrementPage,
      "AXToggle" => Self::Toggle,
      "AXSwitch" => Self::Switch,
      "AXSortButton" => Self::SortButton,
      "AXRatingIndicator" => Self::RatingIndicator,
      "AXTimeline" => Self::Timeline,
      other => {
        log::debug!("unrecognized accessibility subrole: {other}");
        Self::Unknown
      }
    }
  }

  /// The canonical platform string for this subrole.
  pub const fn as_ax_str(self) -> &'static str {
    match self {
      Self::CloseButton => "AXCloseButton",
      Self::MinimizeButton => "AXMinimizeButton",
      Self::ZoomButton => "AXZoomButton",
      Self::FullScreenButton => "AXFullScreenButton",
      Self::ToolbarButton => "AXToolbarButton",
      Self::StandardWindow => "AXStandardWindow",
      Self::Dialog => "AXDialog",
      Self::SystemDialog => "AXSystemDialog",
      Self::FloatingWindow => "AXFloatingWindow",
      Self::SystemFloatingWindow => "AXSystemFloatingWindow",
      Self::SecureTextField => "AXSecureTextField",
      Self::SearchField => "AXSearchField",
      Self::TableRow => "AXTableRow",
      Self::OutlineRow => "AXOutlineRow",
      Self::ContentList => "AXContentList",
      Self::DefinitionList => "AXDefinitionList",
      Self::DescriptionList => "AXDescriptionList",
      Self::IncrementArrow => "AXIncrementArrow",
      Self::DecrementArrow => "AXDecrementArrow",
      Self::IncrementPage => "AXIncrementPage",
      Self::DecrementPage => "AXDecrementPage",
      Self::Toggle => "AXToggle",
      Self::Switch => "AXSwitch",
      Self::SortButton => "AXSortButton",
      Self::RatingIndicator => "AXRatingIndicator",
      Self::Timeline => "AXTimeline",
      Self::Unknown => "AXUnknown",
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn subrole_roundtrip() {
    for subrole in Subrole::ALL {
      let back = Subrole::from_ax_str(subrole.as_ax_str());
      assert_eq!(back, *subrole, "roundtrip failed for {subrole:?}");
    }
  }

  #[test]
  fn unknown_subrole_string_falls_back() {
    assert_eq!(Subrole::from_ax_str("AXMysteryRow"), Subrole::Unknown);
  }
}
