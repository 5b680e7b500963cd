//! Synchronous change-event fan-out.

use std::fmt;

/// Identifies a registered listener so it can be removed later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener<E> = Box<dyn FnMut(&E) + Send + 'static>;

/// Delivers events to every subscribed listener, in subscription order,
/// before `emit` returns.
pub struct EventEmitter<E> {
    listeners: Vec<(ListenerId, Listener<E>)>,
    next_id: u64,
}

impl<E> EventEmitter<E> {
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&E) + Send + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns false if the id was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    pub fn emit(&mut self, event: &E) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(event);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl<E> Default for EventEmitter<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for EventEmitter<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventEmitter")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[test]
    fn emit_reaches_all_listeners_in_order() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut emitter = EventEmitter::<u32>::new();
        let first = Arc::clone(&seen);
        emitter.subscribe(move |v| first.lock().push(("a", *v)));
        let second = Arc::clone(&seen);
        emitter.subscribe(move |v| second.lock().push(("b", *v)));

        emitter.emit(&7);

        assert_eq!(*seen.lock(), vec![("a", 7), ("b", 7)]);
    }

    #[test]
    fn unsubscribed_listener_is_not_called() {
        let count = Arc::new(Mutex::new(0));
        let mut emitter = EventEmitter::<()>::new();
        let counter = Arc::clone(&count);
        let id = emitter.subscribe(move |_| *counter.lock() += 1);

        assert!(emitter.unsubscribe(id));
        assert!(!emitter.unsubscribe(id));
        emitter.emit(&());

        assert_eq!(*count.lock(), 0);
        assert_eq!(emitter.listener_count(), 0);
    }
}
