use crate::widgets::mvi::Reducer;

use super::intent::TabsIntent;
use super::state::{Tab, TabsState};

pub struct TabsReducer;

impl Reducer for TabsReducer {
    type State = TabsState;
    type Intent = TabsIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            TabsIntent::Upgrade { labels } => {
                let tabs = labels
                    .into_iter()
                    .enumerate()
                    .map(|(i, label)| Tab {
                        label: label
                            .filter(|l| !l.is_empty())
                            .unwrap_or_else(|| format!("Tab {}", i + 1)),
                        selected: i == 0,
                    })
                    .collect::<Vec<_>>();
                let hidden = (0..tabs.len()).map(|i| i != 0).collect();
                TabsState { tabs, hidden }
            }
            TabsIntent::Select { index } => {
                if index >= state.tabs.len() {
                    return state;
                }
                let TabsState {
                    mut tabs,
                    mut hidden,
                } = state;
                for (i, panel_hidden) in hidden.iter_mut().enumerate() {
                    *panel_hidden = i != index;
                }
                for (i, tab) in tabs.iter_mut().enumerate() {
                    tab.selected = i == index;
                }
                TabsState { tabs, hidden }
            }
        }
    }
}
