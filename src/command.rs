//! Shell command surface
//!
//! One keybindable action per container: reveal the region when it is
//! hidden, otherwise move keyboard focus into the active panel.
//! Registration with the shell's keymap goes through [`ActionDescriptor`]
//! metadata; keystroke dispatch itself is the shell's concern.

use std::rc::Rc;

use crate::container::PanelContainer;
use crate::region::{Region, VisibilityController};

/// Metadata the host shell needs to register an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionDescriptor {
    /// Stable command id (e.g. `view.focus-sidebar`)
    pub id: &'static str,
    /// Human-readable label for palettes and menus
    pub label: &'static str,
    /// Menu category the action is listed under
    pub category: &'static str,
    /// Default keybinding in keymap string syntax (e.g. `ctrl+0`)
    pub default_binding: &'static str,
}

/// Focus-or-reveal command for a panel container's region
///
/// Two mutually exclusive behaviors, picked by current visibility:
/// a hidden region is revealed (the shell's restore behavior brings back
/// whatever was last active, focus is left alone), a visible region has
/// keyboard focus forwarded to its active panel.
pub struct FocusRegionAction {
    container: Rc<PanelContainer>,
    visibility: Rc<dyn VisibilityController>,
}

impl FocusRegionAction {
    pub const CATEGORY: &'static str = "View";

    pub fn new(container: Rc<PanelContainer>, visibility: Rc<dyn VisibilityController>) -> Self {
        Self {
            container,
            visibility,
        }
    }

    /// Registration metadata for this action's region
    pub fn descriptor(&self) -> ActionDescriptor {
        match self.container.region() {
            Region::Sidebar => ActionDescriptor {
                id: "view.focus-sidebar",
                label: "Focus into Side Region",
                category: Self::CATEGORY,
                default_binding: "ctrl+0",
            },
            Region::BottomDock => ActionDescriptor {
                id: "view.focus-bottom-dock",
                label: "Focus into Bottom Dock",
                category: Self::CATEGORY,
                default_binding: "ctrl+9",
            },
        }
    }

    /// Run the command
    ///
    /// "Did nothing" (region visible but no active panel) is still a
    /// success; the result is always `true`.
    pub fn run(&self) -> bool {
        let region = self.container.region();

        if !self.visibility.is_visible(region) {
            self.visibility.set_hidden(region, false);
        } else if let Some(panel) = self.container.active_panel() {
            panel.focus();
        }

        true
    }
}
