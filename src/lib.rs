//! Sidedock - mutually exclusive side-panel hosting for application shells
//!
//! This crate provides the state-owning container behind a workbench-style
//! side region: tracking which panel is active, opening/closing/switching
//! panels, persisting the last active choice across sessions, and notifying
//! observers of lifecycle changes.
//!
//! The container composes over three collaborator seams the host shell
//! implements: [`CompositeHost`] (instantiating and tearing down panel
//! views), [`VisibilityController`] (the shared shown/hidden flag of a
//! shell region), and [`Storage`] (persisted key-value state).

pub mod command;
pub mod container;
pub mod events;
pub mod host;
pub mod panel;
pub mod region;
pub mod storage;
pub mod tracing;

// Re-export commonly used types
pub use command::{ActionDescriptor, FocusRegionAction};
pub use container::PanelContainer;
pub use events::{EventEmitter, Subscription};
pub use host::{CompositeHost, HostError};
pub use panel::{Panel, PanelHandle, PanelId};
pub use region::{Region, VisibilityController};
pub use storage::{FileStorage, MemoryStorage, Storage};
