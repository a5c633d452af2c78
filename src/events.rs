//! Observer lists for container lifecycle notifications
//!
//! Single-threaded pub/sub: subscribers register closures and receive an
//! RAII [`Subscription`] handle back; dropping the handle unsubscribes.
//! Emission order is subscription order. Handlers are infallible closures,
//! so one observer cannot prevent the others from running.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

type Handler<T> = Rc<dyn Fn(&T)>;

struct Subscribers<T> {
    entries: Vec<(u64, Handler<T>)>,
    next_id: u64,
}

/// Observer list for a single event kind
pub struct EventEmitter<T> {
    subscribers: Rc<RefCell<Subscribers<T>>>,
}

impl<T> EventEmitter<T> {
    pub fn new() -> Self {
        Self {
            subscribers: Rc::new(RefCell::new(Subscribers {
                entries: Vec::new(),
                next_id: 0,
            })),
        }
    }

    /// Register a handler; the returned handle unsubscribes on drop
    pub fn subscribe(&self, handler: impl Fn(&T) + 'static) -> Subscription
    where
        T: 'static,
    {
        let id = {
            let mut subs = self.subscribers.borrow_mut();
            let id = subs.next_id;
            subs.next_id += 1;
            subs.entries.push((id, Rc::new(handler)));
            id
        };

        let weak = Rc::downgrade(&self.subscribers);
        Subscription::new(move || {
            if let Some(subs) = weak.upgrade() {
                subs.borrow_mut().entries.retain(|(entry_id, _)| *entry_id != id);
            }
        })
    }

    /// Call every handler in subscription order
    ///
    /// The handler list is snapshotted before dispatch, so handlers may
    /// subscribe or unsubscribe reentrantly; changes take effect from the
    /// next emission.
    pub fn emit(&self, event: &T) {
        let snapshot: Vec<Handler<T>> = self
            .subscribers
            .borrow()
            .entries
            .iter()
            .map(|(_, handler)| Rc::clone(handler))
            .collect();

        for handler in snapshot {
            handler(event);
        }
    }

    /// Number of live subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().entries.len()
    }
}

impl<T> Default for EventEmitter<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// A handle to a subscription. When dropped, the subscription is cancelled.
#[must_use]
pub struct Subscription {
    unsubscribe: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    fn new(unsubscribe: impl FnOnce() + 'static) -> Self {
        Self {
            unsubscribe: Some(Box::new(unsubscribe)),
        }
    }

    /// Detach the handle, keeping the handler registered for the
    /// emitter's lifetime.
    pub fn detach(mut self) {
        self.unsubscribe.take();
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").finish()
    }
}
