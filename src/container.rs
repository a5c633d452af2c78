//! The side-panel container
//!
//! [`PanelContainer`] is the single source of truth for which panel, if
//! any, is active in its shell region, and the only component allowed to
//! show that region as a side effect of panel switching. Panels are
//! mutually exclusive per region; opening one switches away from the
//! previous one.
//!
//! Opening a panel into a hidden region toggles the region visible first.
//! That toggle can notify layout listeners synchronously, and a listener
//! may call straight back into [`PanelContainer::open_panel`]; a scoped
//! reentrancy guard turns such nested requests into resolved no-ops so a
//! single open cannot cascade into two.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::events::{EventEmitter, Subscription};
use crate::host::{CompositeHost, HostError};
use crate::panel::{PanelHandle, PanelId};
use crate::region::{Region, VisibilityController};
use crate::storage::Storage;

/// Container for mutually exclusive panels in one shell region
///
/// Constructed once at shell startup and alive for the process lifetime.
/// Panel instances are created lazily by the [`CompositeHost`]; the
/// container holds no ownership beyond its active handle.
pub struct PanelContainer {
    region: Region,
    host: Rc<dyn CompositeHost>,
    visibility: Rc<dyn VisibilityController>,
    storage: Rc<dyn Storage>,

    active: RefCell<Option<PanelHandle>>,
    last_active_id: RefCell<Option<PanelId>>,

    /// True only while a region-show request is in flight. Open requests
    /// arriving inside that window resolve as no-ops.
    opening: Cell<bool>,

    panel_opened: EventEmitter<PanelHandle>,
    panel_closed: EventEmitter<PanelHandle>,
}

impl PanelContainer {
    /// Create the container for a region
    ///
    /// The last active panel id is seeded from storage so it survives
    /// restarts; the shell uses it to restore the region's content.
    pub fn new(
        region: Region,
        host: Rc<dyn CompositeHost>,
        visibility: Rc<dyn VisibilityController>,
        storage: Rc<dyn Storage>,
    ) -> Self {
        let last_active_id = storage.get(region.last_active_key()).map(PanelId::new);

        Self {
            region,
            host,
            visibility,
            storage,
            active: RefCell::new(None),
            last_active_id: RefCell::new(last_active_id),
            opening: Cell::new(false),
            panel_opened: EventEmitter::new(),
            panel_closed: EventEmitter::new(),
        }
    }

    /// The shell region this container manages
    pub fn region(&self) -> Region {
        self.region
    }

    /// Open the panel with the given id, switching away from the active one
    ///
    /// Shows the container's region first if it is hidden. Returns
    /// `Ok(None)` without touching any state when the request arrives while
    /// that visibility toggle is still running; callers treat this as a
    /// resolved no-op, not a failure. Host errors propagate unchanged and
    /// leave the container state and subscribers unnotified.
    ///
    /// On success the active panel and last-active history are updated
    /// before any notification fires: a subscriber to the opened event
    /// already observes [`active_panel`](Self::active_panel) returning the
    /// new panel.
    pub fn open_panel(&self, id: &PanelId, focus: bool) -> Result<Option<PanelHandle>, HostError> {
        if self.opening.get() {
            tracing::debug!(
                "Rejecting open of '{}': '{}' region toggle in flight",
                id,
                self.region.name()
            );
            return Ok(None);
        }

        if !self.visibility.is_visible(self.region) {
            // set_hidden can synchronously re-enter open_panel through
            // layout listeners; hold the guard for the duration of the
            // call. The guard drops on every exit path, unwinds included.
            let _guard = OpenGuard::hold(&self.opening);
            self.visibility.set_hidden(self.region, false);
        }

        let panel = self.host.instantiate_and_show(id, focus)?;

        let previous = self.active.replace(Some(Rc::clone(&panel)));
        let reopened = previous.as_ref().is_some_and(|prev| prev.id() == id);
        *self.last_active_id.borrow_mut() = Some(id.clone());
        self.storage.set(self.region.last_active_key(), id.as_str());

        if reopened {
            tracing::trace!("Panel '{}' already active, revealed without events", id);
            return Ok(Some(panel));
        }

        if let Some(prev) = previous {
            self.panel_closed.emit(&prev);
        }

        tracing::debug!("Opened panel '{}' in '{}' region", id, self.region.name());
        self.panel_opened.emit(&panel);

        Ok(Some(panel))
    }

    /// Currently active panel, if any
    pub fn active_panel(&self) -> Option<PanelHandle> {
        self.active.borrow().clone()
    }

    /// Most recently active panel id
    ///
    /// History, not current state: unaffected by
    /// [`hide_panel`](Self::hide_panel) and preserved across sessions.
    /// Only ever overwritten with a concrete id.
    pub fn last_active_panel_id(&self) -> Option<PanelId> {
        self.last_active_id.borrow().clone()
    }

    /// Hide the active panel
    ///
    /// No-op when nothing is active. Clears the active panel and emits the
    /// closed notification after the clear. The region itself stays as the
    /// shell left it, and the last-active history is untouched.
    pub fn hide_panel(&self) -> Result<(), HostError> {
        let active = self.active.borrow().clone();
        let Some(panel) = active else {
            return Ok(());
        };

        self.host.hide(panel.id())?;
        *self.active.borrow_mut() = None;

        tracing::debug!(
            "Hid panel '{}' in '{}' region",
            panel.id(),
            self.region.name()
        );
        self.panel_closed.emit(&panel);

        Ok(())
    }

    /// Subscribe to successful opens
    ///
    /// Fires once per open, strictly after the active panel is updated.
    pub fn on_panel_opened(&self, handler: impl Fn(&PanelHandle) + 'static) -> Subscription {
        self.panel_opened.subscribe(handler)
    }

    /// Subscribe to closes and switch-aways
    ///
    /// Fires once per close, strictly after the active panel is cleared or
    /// replaced.
    pub fn on_panel_closed(&self, handler: impl Fn(&PanelHandle) + 'static) -> Subscription {
        self.panel_closed.subscribe(handler)
    }
}

/// Scoped reentrancy token for the visibility-toggle window
///
/// Releases the flag on every exit path, including unwinds out of the
/// visibility controller.
struct OpenGuard<'a> {
    flag: &'a Cell<bool>,
}

impl<'a> OpenGuard<'a> {
    fn hold(flag: &'a Cell<bool>) -> Self {
        flag.set(true);
        Self { flag }
    }
}

impl Drop for OpenGuard<'_> {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}
