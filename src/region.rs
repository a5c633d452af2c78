//! Shell regions and the shared visibility flag
//!
//! A region is a named area of the application shell that can host exactly
//! one panel container. The shell owns layout; the container only ever
//! needs to know whether its region is currently shown, and to request
//! that it be shown when a panel is opened into a hidden region.

/// Region of the application shell a panel container can manage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// Primary side region (file trees, outlines, search, ...)
    Sidebar,
    /// Bottom dock region (terminals, task output, problems, ...)
    BottomDock,
}

impl Region {
    /// All regions for iteration
    pub const ALL: [Region; 2] = [Region::Sidebar, Region::BottomDock];

    /// Stable name used in logs and persistence keys
    pub fn name(&self) -> &'static str {
        match self {
            Region::Sidebar => "sidebar",
            Region::BottomDock => "bottom-dock",
        }
    }

    /// Fixed, versionless storage key for this region's last active panel
    pub fn last_active_key(&self) -> &'static str {
        match self {
            Region::Sidebar => "sidebar.last-active-panel",
            Region::BottomDock => "bottom-dock.last-active-panel",
        }
    }
}

/// Shared visibility flag for shell regions
///
/// The shown/hidden flag is read/write state shared between a panel
/// container and the host shell. The responsibility split is
/// one-directional: the container only ever sets a region to shown as a
/// side effect of opening a panel, hiding is always a shell decision.
///
/// `set_hidden` is synchronous and side-effecting, and implementations may
/// notify layout listeners from inside the call. A listener reacting to
/// the region becoming visible can call straight back into
/// `PanelContainer::open_panel`, which is the reentrancy hazard the
/// container guards against.
pub trait VisibilityController {
    fn is_visible(&self, region: Region) -> bool;
    fn set_hidden(&self, region: Region, hidden: bool);
}
