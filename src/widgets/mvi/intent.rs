//! Base trait for widget intents.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (button presses, indicator and tab clicks)
/// - Host notifications (attach, detach, item collection changes)
/// - Timer ticks
pub trait Intent: Send + 'static {}
