//! Property-change notifications.
//!
//! Every mutation of a board descriptor is bracketed by an `Updating` event
//! (before the value is assigned) and an `Updated` event (after the hash and
//! the board were rebuilt). Observers can use the pair to invalidate and then
//! refresh anything derived from the board.

use std::fmt;

/// Event emitted around a descriptor mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PropertyEvent {
    /// About to change. `hash` is the hash before the change.
    Updating { hash: i32 },
    /// Changed. `hash` is the recomputed hash, `board_valid` tells whether
    /// the board could be rebuilt from the new configuration.
    Updated { hash: i32, board_valid: bool },
}

/// Receiver of [`PropertyEvent`]s.
pub trait PropertyObserver {
    fn on_event(&mut self, event: &PropertyEvent);
}

impl<F> PropertyObserver for F
where
    F: FnMut(&PropertyEvent),
{
    fn on_event(&mut self, event: &PropertyEvent) {
        self(event)
    }
}

/// Handle returned by [`Observers::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// Registry of observers, notified in subscription order.
#[derive(Default)]
pub struct Observers {
    next_id: u64,
    entries: Vec<(ObserverId, Box<dyn PropertyObserver>)>,
}

impl Observers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<O>(&mut self, observer: O) -> ObserverId
    where
        O: PropertyObserver + 'static,
    {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer. Returns `false` if the id was not registered.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub fn notify(&mut self, event: &PropertyEvent) {
        for (_, observer) in &mut self.entries {
            observer.on_event(event);
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for Observers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("count", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn notifies_in_subscription_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut observers = Observers::new();
        for tag in ["a", "b"] {
            let log = Rc::clone(&log);
            observers.subscribe(move |_: &PropertyEvent| log.borrow_mut().push(tag));
        }
        observers.notify(&PropertyEvent::Updating { hash: 1 });
        assert_eq!(*log.borrow(), vec!["a", "b"]);
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let count = Rc::new(RefCell::new(0));
        let mut observers = Observers::new();
        let id = {
            let count = Rc::clone(&count);
            observers.subscribe(move |_: &PropertyEvent| *count.borrow_mut() += 1)
        };
        observers.notify(&PropertyEvent::Updating { hash: 0 });
        assert!(observers.unsubscribe(id));
        assert!(!observers.unsubscribe(id));
        observers.notify(&PropertyEvent::Updating { hash: 0 });
        assert_eq!(*count.borrow(), 1);
        assert!(observers.is_empty());
    }
}
