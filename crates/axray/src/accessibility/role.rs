//! UI element roles.
//!
//! A role classifies what an element *is* (button, text field, scroll bar).
//! Every accessibility object reports exactly one role string; this enum
//! names the documented `AXRole` constants and folds anything else into
//! [`Role::Unknown`].

use serde::{Deserialize, Serialize};

/// Role of a UI element, mapped from the platform's `AXRole` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Role {
  // === Top level ===
  Application,
  SystemWide,
  Window,
  Sheet,
  Drawer,

  // === Containers ===
  Group,
  SplitGroup,
  TabGroup,
  RadioGroup,
  ScrollArea,
  Toolbar,
  LayoutArea,
  LayoutItem,
  Grid,
  Matte,

  // === Menus ===
  Menu,
  MenuBar,
  MenuBarItem,
  MenuItem,
  MenuButton,

  // === Collections ===
  List,
  Table,
  Outline,
  Column,
  Row,
  Cell,
  Browser,

  // === Controls ===
  Button,
  PopUpButton,
  CheckBox,
  RadioButton,
  ComboBox,
  TextField,
  TextArea,
  Slider,
  Incrementor,
  ColorWell,
  DisclosureTriangle,
  Link,
  ScrollBar,
  Splitter,
  Handle,
  GrowArea,
  RulerMarker,

  // === Indicators ===
  BusyIndicator,
  ProgressIndicator,
  LevelIndicator,
  RelevanceIndicator,
  ValueIndicator,

  // === Static content ===
  StaticText,
  Image,
  HelpTag,
  Ruler,
  Page,

  // === Hardware-surfaced ===
  FunctionRowTopLevelElement,

  /// Role string this crate does not name.
  Unknown,
}

impl Role {
  /// Every named role, in declaration order.
  pub const ALL: &'static [Self] = &[
    Self::Application,
    Self::SystemWide,
    Self::Window,
    Self::Sheet,
    Self::Drawer,
    Self::Group,
    Self::SplitGroup,
    Self::TabGroup,
    Self::RadioGroup,
    Self::ScrollArea,
    Self::Toolbar,
    Self::LayoutArea,
    Self::LayoutItem,
    Self::Grid,
    Self::Matte,
    Self::Menu,
    Self::MenuBar,
    Self::MenuBarItem,
    Self::MenuItem,
    Self::MenuButton,
    Self::List,
    Self::Table,
    Self::Outline,
    Self::Column,
    Self::Row,
    Self::Cell,
    Self::Browser,
    Self::Button,
    Self::PopUpButton,
    Self::CheckBox,
    Self::RadioButton,
    Self::ComboBox,
    Self::TextField,
    Self::TextArea,
    Self::Slider,
    Self::Incrementor,
    Self::ColorWell,
    Self::DisclosureTriangle,
    Self::Link,
    Self::ScrollBar,
    Self::Splitter,
    Self::Handle,
    Self::GrowArea,
    Self::RulerMarker,
    Self::BusyIndicator,
    Self::ProgressIndicator,
    Self::LevelIndicator,
    Self::RelevanceIndicator,
    Self::ValueIndicator,
    Self::StaticText,
    Self::Image,
    Self::HelpTag,
    Self::Ruler,
    Self::Page,
    Self::FunctionRowTopLevelElement,
  ];

  /// Map a platform `AXRole` string onto the enum.
  ///
  /// Unrecognized strings map to [`Role::Unknown`] and are logged at debug
  /// level so new vocabulary shows up during tree dumps.
  pub fn from_ax_str(role: &str) -> Self {
    match role {
      "AXApplication" => Self::Application,
      "AXSystemWide" => Self::SystemWide,
      "AXWindow" => Self::Window,
      "AXSheet" => Self::Sheet,
      "AXDrawer" => Self::Drawer,
      "AXGroup" => Self::Group,
      "AXSplitGroup" => Self::SplitGroup,
      "AXTabGroup" => Self::TabGroup,
      "AXRadioGroup" => Self::RadioGroup,
      "AXScrollArea" => Self::ScrollArea,
      "AXToolbar" => Self::Toolbar,
      "AXLayoutArea" => Self::LayoutArea,
      "AXLayoutItem" => Self::LayoutItem,
      "AXGrid" => Self::Grid,
      "AXMatte" => Self::Matte,
      "AXMenu" => Self::Menu,
      "AXMenuBar" => Self::MenuBar,
      "AXMenuBarItem" => Self::MenuBarItem,
      "AXMenuItem" => Self::MenuItem,
      "AXMenuButton" => Self::MenuButton,
      "AXList" => Self::List,
      "AXTable" => Self::Table,
      "AXOutline" => Self::Outline,
      "AXColumn" => Self::Column,
      "AXRow" => Self::Row,
      "AXCell" => Self::Cell,
      "AXBrowser" => Self::Browser,
      "AXButton" => Self::Button,
      "AXPopUpButton" => Self::PopUpButton,
      "AXCheckBox" => Self::CheckBox,
      "AXRadioButton" => Self::RadioButton,
      "AXComboBox" => Self::ComboBox,
      "AXTextField" => Self::TextField,
      "AXTextArea" => Self::TextArea,
      "AXSlider" => Self::Slider,
      "AXIncrementor" => Self::Incrementor,
      "AXColorWell" => Self::ColorWell,
      "AXDisclosureTriangle" => Self::DisclosureTriangle,
      "AXLink" => Self::Link,
      "AXScrollBar" => Self::ScrollBar,
      "AXSplitter" => Self::Splitter,
      "AXHandle" => Self::Handle,
      "AXGrowArea" => Self::GrowArea,
      "AXRulerMarker" => Self::RulerMarker,
      "AXBusyIndicator" => Self::BusyIndicator,
      "AXProgressIndicator" => Self::ProgressIndicator,
      "AXLevelIndicator" => Self::LevelIndicator,
      "AXRelevanceIndicator" => Self::RelevanceIndicator,
      "AXValueIndicator" => Self::ValueIndicator,
      "AXStaticText" => Self::StaticText,
      "AXImage" => Self::Image,
      "AXHelpTag" => Self::HelpTag,
      "AXRuler" => Self::Ruler,
      "AXPageRole" => Self::Page,
      "AXFunctionRowTopLevelElement" => Self::FunctionRowTopLevelElement,
      other => {
        log::debug!("unrecognized accessibility role: {other}");
        Self::Unknown
      }
    }
  }

  /// The canonical platform string for this role.
  pub const fn as_ax_str(self) -> &'static str {
    match self {
      Self::Application => "AXApplication",
      Self::SystemWide => "AXSystemWide",
      Self::Window => "AXWindow",
      Self::Sheet => "AXSheet",
      Self::Drawer => "AXDrawer",
      Self::Group => "AXGroup",
      Self::SplitGroup => "AXSplitGroup",
      Self::TabGroup => "AXTabGroup",
      Self::RadioGroup => "AXRadioGroup",
      Self::ScrollArea => "AXScrollArea",
      Self::Toolbar => "AXToolbar",
      Self::LayoutArea => "AXLayoutArea",
      Self::LayoutItem => "AXLayoutItem",
      Self::Grid => "AXGrid",
      Self::Matte => "AXMatte",
      Self::Menu => "AXMenu",
      Self::MenuBar => "AXMenuBar",
      Self::MenuBarItem => "AXMenuBarItem",
      Self::MenuItem => "AXMenuItem",
      Self::MenuButton => "AXMenuButton",
      Self::List => "AXList",
      Self::Table => "AXTable",
      Self::Outline => "AXOutline",
      Self::Column => "AXColumn",
      Self::Row => "AXRow",
      Self::Cell => "AXCell",
      Self::Browser => "AXBrowser",
      Self::Button => "AXButton",
      Self::PopUpButton => "AXPopUpButton",
      Self::CheckBox => "AXCheckBox",
      Self::RadioButton => "AXRadioButton",
      Self::ComboBox => "AXComboBox",
      Self::TextField => "AXTextField",
      Self::TextArea => "AXTextArea",
      Self::Slider => "AXSlider",
      Self::Incrementor => "AXIncrementor",
      Self::ColorWell => "AXColorWell",
      Self::DisclosureTriangle => "AXDisclosureTriangle",
      Self::Link => "AXLink",
      Self::ScrollBar => "AXScrollBar",
      Self::Splitter => "AXSplitter",
      Self::Handle => "AXHandle",
      Self::GrowArea => "AXGrowArea",
      Self::RulerMarker => "AXRulerMarker",
      Self::BusyIndicator => "AXBusyIndicator",
      Self::ProgressIndicator => "AXProgressIndicator",
      Self::LevelIndicator => "AXLevelIndicator",
      Self::RelevanceIndicator => "AXRelevanceIndicator",
      Self::ValueIndicator => "AXValueIndicator",
      Self::StaticText => "AXStaticText",
      Self::Image => "AXImage",
      Self::HelpTag => "AXHelpTag",
      Self::Ruler => "AXRuler",
      Self::Page => "AXPageRole",
      Self::FunctionRowTopLevelElement => "AXFunctionRowTopLevelElement",
      Self::Unknown => "AXUnknown",
    }
  }

  /// Does this role typically contain other elements?
  pub const fn is_container(self) -> bool {
    matches!(
      self,
      Self::Application
        | Self::SystemWide
        | Self::Window
        | Self::Sheet
        | Self::Drawer
        | Self::Group
        | Self::SplitGroup
        | Self::TabGroup
        | Self::RadioGroup
        | Self::ScrollArea
        | Self::Toolbar
        | Self::LayoutArea
        | Self::Grid
        | Self::Menu
        | Self::MenuBar
        | Self::List
        | Self::Table
        | Self::Outline
        | Self::Column
        | Self::Row
        | Self::Browser
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn role_roundtrip() {
    for role in Role::ALL {
      let back = Role::from_ax_str(role.as_ax_str());
      assert_eq!(back, *role, "roundtrip failed for {role:?}");
    }
  }

  #[test]
  fn unknown_role_string_falls_back() {
    assert_eq!(Role::from_ax_str("AXSomeNewThing"), Role::Unknown);
    // Strings without the AX prefix are not platform roles.
    assert_eq!(Role::from_ax_str("Button"), Role::Unknown);
  }

  #[test]
  fn containers() {
    assert!(Role::Window.is_container());
    assert!(Role::ScrollArea.is_container());
    assert!(!Role::Button.is_container());
    assert!(!Role::StaticText.is_container());
  }
}
