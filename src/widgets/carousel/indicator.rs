//! Indicator row: one dot per slide, with an explicit handle table.
//!
//! Each rebuild mints fresh handle ids, so a handle held from before a
//! rebuild no longer resolves to a position.

use std::collections::HashMap;

/// Opaque identifier of one indicator dot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IndicatorId(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicatorHandle {
    id: IndicatorId,
    position: usize,
    current: bool,
}

impl IndicatorHandle {
    pub fn id(&self) -> IndicatorId {
        self.id
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_current(&self) -> bool {
        self.current
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IndicatorSet {
    handles: Vec<IndicatorHandle>,
    table: HashMap<IndicatorId, usize>,
    next_id: u64,
}

impl IndicatorSet {
    /// Empty set whose first minted id is `next_id`.
    pub fn starting_at(next_id: u64) -> Self {
        Self {
            next_id,
            ..Self::default()
        }
    }

    /// Discard every handle and create one per item. No handle is current
    /// until the next [`resync`](Self::resync).
    pub fn rebuild(&mut self, item_count: usize) {
        self.handles.clear();
        self.table.clear();
        for position in 0..item_count {
            let id = IndicatorId(self.next_id);
            self.next_id += 1;
            self.table.insert(id, position);
            self.handles.push(IndicatorHandle {
                id,
                position,
                current: false,
            });
        }
    }

    /// Set every handle's current flag to `position == index`.
    pub fn resync(&mut self, index: Option<usize>) {
        for handle in self.handles.iter_mut() {
            handle.current = Some(handle.position) == index;
        }
    }

    /// Position bound to `id`, if the handle belongs to the live row.
    pub fn position_of(&self, id: IndicatorId) -> Option<usize> {
        self.table.get(&id).copied()
    }

    pub fn handles(&self) -> &[IndicatorHandle] {
        &self.handles
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    pub fn current_position(&self) -> Option<usize> {
        self.handles.iter().find(|h| h.current).map(|h| h.position)
    }

    pub fn current_count(&self) -> usize {
        self.handles.iter().filter(|h| h.current).count()
    }

    /// Id the next rebuild will start from.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }
}
