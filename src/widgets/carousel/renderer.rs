//! Render hook invoked after every committed index change.

use parking_lot::Mutex;
use std::sync::Arc;

/// Repositions the visible track so the slide at `index` is shown.
///
/// Must be idempotent: rendering the already-current index has no effect.
pub trait SlideRenderer {
    fn render_at(&mut self, index: usize);
}

impl<F: FnMut(usize)> SlideRenderer for F {
    fn render_at(&mut self, index: usize) {
        self(index)
    }
}

/// Track position shared between the carousel (which moves it) and the view
/// (which draws the slide under it).
///
/// The offset mirrors a horizontal track translated by whole slide widths:
/// slide `n` sits at `n * 100` percent.
#[derive(Debug, Clone, Default)]
pub struct Track {
    position: Arc<Mutex<Option<usize>>>,
}

impl Track {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slide currently under the viewport, `None` before the first render.
    pub fn position(&self) -> Option<usize> {
        *self.position.lock()
    }

    pub fn offset_percent(&self) -> usize {
        self.position().unwrap_or(0) * 100
    }
}

impl SlideRenderer for Track {
    fn render_at(&mut self, index: usize) {
        let mut position = self.position.lock();
        if *position != Some(index) {
            *position = Some(index);
        }
    }
}
