//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use sidedock::{
    CompositeHost, HostError, MemoryStorage, Panel, PanelContainer, PanelHandle, PanelId, Region,
    Storage, VisibilityController,
};

/// Panel double recording focus calls
pub struct TestPanel {
    id: PanelId,
    title: String,
    pub focus_count: Cell<usize>,
}

impl TestPanel {
    pub fn new(id: &str) -> Rc<Self> {
        Rc::new(Self {
            id: PanelId::new(id),
            title: id.to_string(),
            focus_count: Cell::new(0),
        })
    }
}

impl Panel for TestPanel {
    fn id(&self) -> &PanelId {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn focus(&self) {
        self.focus_count.set(self.focus_count.get() + 1);
    }
}

/// Scripted composite host with a fixed set of registered panels
pub struct TestHost {
    panels: RefCell<HashMap<PanelId, Rc<TestPanel>>>,
    pub show_calls: RefCell<Vec<(PanelId, bool)>>,
    pub hide_calls: RefCell<Vec<PanelId>>,
    /// Makes the next instantiate_and_show fail
    pub fail_next_show: Cell<bool>,
}

impl TestHost {
    pub fn with_panels(ids: &[&str]) -> Rc<Self> {
        let panels = ids
            .iter()
            .map(|id| (PanelId::new(*id), TestPanel::new(id)))
            .collect();

        Rc::new(Self {
            panels: RefCell::new(panels),
            show_calls: RefCell::new(Vec::new()),
            hide_calls: RefCell::new(Vec::new()),
            fail_next_show: Cell::new(false),
        })
    }

    pub fn panel(&self, id: &str) -> Rc<TestPanel> {
        self.panels
            .borrow()
            .get(&PanelId::new(id))
            .cloned()
            .expect("panel registered in test host")
    }
}

impl CompositeHost for TestHost {
    fn instantiate_and_show(&self, id: &PanelId, focus: bool) -> Result<PanelHandle, HostError> {
        if self.fail_next_show.replace(false) {
            return Err(HostError::Instantiation {
                id: id.clone(),
                reason: "injected failure".to_string(),
            });
        }

        let panel = self
            .panels
            .borrow()
            .get(id)
            .cloned()
            .ok_or_else(|| HostError::PanelNotFound(id.clone()))?;

        self.show_calls.borrow_mut().push((id.clone(), focus));
        if focus {
            panel.focus();
        }

        Ok(panel)
    }

    fn hide(&self, id: &PanelId) -> Result<(), HostError> {
        self.hide_calls.borrow_mut().push(id.clone());
        Ok(())
    }
}

/// Visibility controller double with an optional synchronous show hook
///
/// The hook mimics a layout listener reacting to the region becoming
/// visible, which is exactly where the reentrant open hazard lives.
#[derive(Default)]
pub struct TestShell {
    visible: RefCell<HashMap<Region, bool>>,
    pub set_hidden_calls: RefCell<Vec<(Region, bool)>>,
    pub on_show: RefCell<Option<Box<dyn Fn()>>>,
}

impl TestShell {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Mark a region visible without going through set_hidden
    pub fn show(&self, region: Region) {
        self.visible.borrow_mut().insert(region, true);
    }
}

impl VisibilityController for TestShell {
    fn is_visible(&self, region: Region) -> bool {
        self.visible.borrow().get(&region).copied().unwrap_or(false)
    }

    fn set_hidden(&self, region: Region, hidden: bool) {
        self.set_hidden_calls.borrow_mut().push((region, hidden));
        self.visible.borrow_mut().insert(region, !hidden);

        if !hidden {
            if let Some(hook) = &*self.on_show.borrow() {
                hook();
            }
        }
    }
}

/// Sidebar container over fresh in-memory storage
pub fn sidebar_container(host: Rc<TestHost>, shell: Rc<TestShell>) -> Rc<PanelContainer> {
    sidebar_container_with_storage(host, shell, Rc::new(MemoryStorage::new()))
}

/// Sidebar container over caller-provided storage (for persistence tests)
pub fn sidebar_container_with_storage(
    host: Rc<TestHost>,
    shell: Rc<TestShell>,
    storage: Rc<dyn Storage>,
) -> Rc<PanelContainer> {
    Rc::new(PanelContainer::new(Region::Sidebar, host, shell, storage))
}

/// Open a panel and unwrap the handle, panicking on no-op or error
pub fn open(container: &PanelContainer, id: &str) -> PanelHandle {
    container
        .open_panel(&PanelId::new(id), false)
        .expect("open succeeds")
        .expect("open is not a guard no-op")
}
