//! Tabbed panel switcher.
//!
//! Same selection idea as the carousel without the timer: one tab per
//! panel, exactly one panel visible, a change event per selection.

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::TabsIntent;
pub use reducer::TabsReducer;
pub use state::{Tab, TabsState};
pub use view::{TabsLayout, TabsView};

use crate::widgets::attributes::Attributes;
use crate::widgets::emitter::{EventEmitter, ListenerId};
use crate::widgets::mvi::Reducer;

pub const VARIANT_ATTR: &str = "variant";

/// Announced on every tab selection, including re-selecting the current tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabChangeEvent {
    pub index: usize,
    pub label: String,
}

#[derive(Debug, Default)]
pub struct Tabs {
    attributes: Attributes,
    state: TabsState,
    connected: bool,
    emitter: EventEmitter<TabChangeEvent>,
}

impl Tabs {
    pub const TAG_NAME: &'static str = "frmwk-tabs";
    pub const OBSERVED_ATTRIBUTES: &'static [&'static str] = &[VARIANT_ATTR];

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Build the tab list from the panels' labels, first panel selected.
    /// No change event is emitted.
    pub fn connected(&mut self, labels: Vec<Option<String>>) {
        self.dispatch(TabsIntent::Upgrade { labels });
        self.connected = true;
        tracing::debug!(tabs = self.state.len(), "Tabs connected");
    }

    /// Stop reacting to selections.
    pub fn disconnected(&mut self) {
        self.connected = false;
    }

    pub fn attribute_changed(&mut self, name: &str, value: Option<&str>) {
        match value {
            Some(value) => self.attributes.set(name, value),
            None => {
                self.attributes.remove(name);
            }
        }
    }

    /// Select tab `index`. Out-of-range indices and selections while
    /// disconnected are ignored.
    pub fn select(&mut self, index: usize) -> Option<TabChangeEvent> {
        if !self.connected || index >= self.state.len() {
            return None;
        }
        self.dispatch(TabsIntent::Select { index });
        let event = TabChangeEvent {
            index,
            label: self.state.label(index)?.to_string(),
        };
        tracing::debug!(index, label = %event.label, "Tab selected");
        self.emitter.emit(&event);
        Some(event)
    }

    pub fn next_tab(&mut self) -> Option<TabChangeEvent> {
        let len = self.state.len();
        if len == 0 {
            return None;
        }
        let current = self.state.selected().unwrap_or(0);
        self.select((current + 1) % len)
    }

    pub fn previous_tab(&mut self) -> Option<TabChangeEvent> {
        let len = self.state.len();
        if len == 0 {
            return None;
        }
        let current = self.state.selected().unwrap_or(0);
        self.select((current + len - 1) % len)
    }

    pub fn on_change<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&TabChangeEvent) + Send + 'static,
    {
        self.emitter.subscribe(listener)
    }

    pub fn off(&mut self, id: ListenerId) -> bool {
        self.emitter.unsubscribe(id)
    }

    pub fn state(&self) -> &TabsState {
        &self.state
    }

    pub fn variant(&self) -> Option<&str> {
        self.attributes.get(VARIANT_ATTR)
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    fn dispatch(&mut self, intent: TabsIntent) {
        self.state = TabsReducer::reduce(std::mem::take(&mut self.state), intent);
    }
}
