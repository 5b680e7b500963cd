//! Host-owned slide collections.
//!
//! The engine never caches the item count: every transition asks the
//! source again, so items added or removed by the host between transitions
//! are always observed.

use parking_lot::{RwLock, RwLockReadGuard};
use std::sync::Arc;

/// Ordered collection of slides, queried on demand.
pub trait ItemSource {
    /// Number of slides currently present.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> ItemSource for Vec<T> {
    fn len(&self) -> usize {
        Vec::len(self)
    }
}

impl<S: ItemSource + ?Sized> ItemSource for Arc<S> {
    fn len(&self) -> usize {
        (**self).len()
    }
}

/// Slide list shared between the host (which mutates it) and a carousel
/// (which only counts it).
#[derive(Debug)]
pub struct SharedItems<T> {
    inner: Arc<RwLock<Vec<T>>>,
}

impl<T> SharedItems<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(items)),
        }
    }

    pub fn push(&self, item: T) {
        self.inner.write().push(item);
    }

    /// Remove the item at `index`, if present.
    pub fn remove(&self, index: usize) -> Option<T> {
        let mut items = self.inner.write();
        if index < items.len() {
            Some(items.remove(index))
        } else {
            None
        }
    }

    pub fn pop(&self) -> Option<T> {
        self.inner.write().pop()
    }

    pub fn clear(&self) {
        self.inner.write().clear();
    }

    pub fn read(&self) -> RwLockReadGuard<'_, Vec<T>> {
        self.inner.read()
    }
}

impl<T: Clone> SharedItems<T> {
    pub fn get(&self, index: usize) -> Option<T> {
        self.inner.read().get(index).cloned()
    }
}

impl<T> Clone for SharedItems<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Default for SharedItems<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T> ItemSource for SharedItems<T> {
    fn len(&self) -> usize {
        self.inner.read().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_observe_mutations() {
        let items = SharedItems::new(vec!["a", "b"]);
        let view = items.clone();
        items.push("c");
        assert_eq!(ItemSource::len(&view), 3);
        assert_eq!(view.remove(0), Some("a"));
        assert_eq!(ItemSource::len(&items), 2);
    }

    #[test]
    fn remove_out_of_range_is_none() {
        let items = SharedItems::new(vec![1]);
        assert_eq!(items.remove(3), None);
        assert_eq!(items.get(0), Some(1));
    }
}
