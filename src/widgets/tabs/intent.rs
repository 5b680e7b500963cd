use crate::widgets::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabsIntent {
    /// Build one tab per panel. Missing or empty labels become `Tab N`.
    Upgrade { labels: Vec<Option<String>> },
    /// Show panel `index` and mark its tab selected.
    Select { index: usize },
}

impl Intent for TabsIntent {}
