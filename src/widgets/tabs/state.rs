use crate::widgets::mvi::WidgetState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub label: String,
    pub selected: bool,
}

/// Tab buttons and the visibility of their panels, index-aligned.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TabsState {
    pub tabs: Vec<Tab>,
    pub hidden: Vec<bool>,
}

impl WidgetState for TabsState {}

impl TabsState {
    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn selected(&self) -> Option<usize> {
        self.tabs.iter().position(|tab| tab.selected)
    }

    pub fn label(&self, index: usize) -> Option<&str> {
        self.tabs.get(index).map(|tab| tab.label.as_str())
    }

    /// First panel that is not hidden.
    pub fn visible_panel(&self) -> Option<usize> {
        self.hidden.iter().position(|hidden| !hidden)
    }
}
