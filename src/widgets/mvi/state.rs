//! Base trait for widget state.

/// Marker trait for widget state objects.
///
/// States are cloned to produce new states and compared to detect changes.
pub trait WidgetState: Clone + PartialEq + Default + Send + 'static {}
