//! Reducer trait for widget state machines.

use super::intent::Intent;
use super::state::WidgetState;

/// Reducer transforms widget state based on intents.
///
/// The reducer is the only place where selection state changes.
/// It must be a pure function: (State, Intent) -> State
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: WidgetState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
