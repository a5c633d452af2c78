//! Panel identity and behavior contract
//!
//! Panels are pluggable side-region views (file explorers, outlines,
//! search results, ...). The container never looks inside a panel; it only
//! needs a stable identity, a display title, and a focus entry point.

use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// Unique identifier for a panel type
///
/// Panel ids are opaque strings, unique per registered panel type and
/// stable across sessions (they double as persistence keys).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PanelId(String);

impl PanelId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PanelId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Behavior a hosted panel exposes to the container
///
/// Rendering and interaction are owned by the panel implementation and the
/// shell that hosts it; this is only the surface the container and the
/// focus command need.
pub trait Panel {
    /// Identity of the panel type this instance belongs to
    fn id(&self) -> &PanelId;

    /// Display title for tab strips and status UI
    fn title(&self) -> &str;

    /// Transfer keyboard focus into the panel
    fn focus(&self);
}

/// Shared handle to a hosted panel instance
pub type PanelHandle = Rc<dyn Panel>;
