//! Composite hosting capability consumed by the container
//!
//! The host shell implements [`CompositeHost`]: it knows the registered
//! panel types, lazily instantiates their views, reveals existing
//! instances, and tears them down again. The container treats it as a
//! capability object and keeps only the bookkeeping (which panel is
//! active, which was last active) on its own side.

use std::fmt;

use crate::panel::{PanelHandle, PanelId};

/// Machinery for instantiating, revealing, and tearing down panel views
pub trait CompositeHost {
    /// Instantiate the panel with the given id, or reveal an existing
    /// instance, optionally giving it keyboard focus.
    ///
    /// Id validation lives here: an id with no registered panel type fails
    /// with [`HostError::PanelNotFound`].
    fn instantiate_and_show(&self, id: &PanelId, focus: bool) -> Result<PanelHandle, HostError>;

    /// Hide the panel with the given id, releasing its view state
    ///
    /// The panel instance may be destroyed and recreated on a later show;
    /// the container holds no ownership beyond its active handle.
    fn hide(&self, id: &PanelId) -> Result<(), HostError>;
}

/// Failure surfaced by a [`CompositeHost`]
///
/// The container propagates these unchanged; it never wraps, retries, or
/// swallows them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    /// No panel type registered under this id
    PanelNotFound(PanelId),
    /// Panel construction or reveal failed
    Instantiation { id: PanelId, reason: String },
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostError::PanelNotFound(id) => write!(f, "Panel not found: {}", id),
            HostError::Instantiation { id, reason } => {
                write!(f, "Failed to instantiate panel '{}': {}", id, reason)
            }
        }
    }
}

impl std::error::Error for HostError {}
