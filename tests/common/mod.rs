//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use frmwk_widgets::widgets::attributes::Attributes;
use frmwk_widgets::widgets::carousel::{
    AutoplayTick, Carousel, ChangeEvent, ItemSource, SlideRenderer, TimerConfig,
};
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver};

pub type Recorded<T> = Arc<Mutex<Vec<T>>>;

/// Renderer that records every index it is asked to show.
pub fn recording_renderer() -> (Recorded<usize>, impl FnMut(usize) + Send) {
    let renders: Recorded<usize> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&renders);
    (renders, move |index| sink.lock().push(index))
}

/// Subscribe a listener that records every emitted index.
pub fn collect_changes<S: ItemSource, R: SlideRenderer>(
    carousel: &mut Carousel<S, R>,
) -> Recorded<usize> {
    let events: Recorded<usize> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    carousel.on_change(move |event: &ChangeEvent| sink.lock().push(event.index));
    events
}

/// Attributes for a carousel that never autoplays.
pub fn paused_attributes() -> Attributes {
    let mut attributes = Attributes::new();
    TimerConfig {
        interval_ms: 4000,
        paused: true,
    }
    .write_attributes(&mut attributes);
    attributes
}

pub fn autoplay_attributes(interval_ms: u64) -> Attributes {
    let mut attributes = Attributes::new();
    TimerConfig {
        interval_ms,
        paused: false,
    }
    .write_attributes(&mut attributes);
    attributes
}

/// Paused carousel over `item_count` items, attached to a throwaway queue.
pub fn attached_carousel(
    item_count: usize,
) -> (
    Carousel<Vec<usize>, impl FnMut(usize) + Send>,
    Recorded<usize>,
) {
    let (renders, renderer) = recording_renderer();
    let mut carousel =
        Carousel::new((0..item_count).collect(), renderer).with_attributes(paused_attributes());
    let (tx, _rx) = mpsc::unbounded_channel::<AutoplayTick>();
    carousel.attach(tx).expect("paused attach needs no runtime");
    (carousel, renders)
}

/// Feed every queued tick to the carousel; returns how many advanced it.
pub fn pump<S: ItemSource, R: SlideRenderer>(
    carousel: &mut Carousel<S, R>,
    rx: &mut UnboundedReceiver<AutoplayTick>,
) -> usize {
    let mut applied = 0;
    while let Ok(tick) = rx.try_recv() {
        if carousel.on_tick(tick).is_some() {
            applied += 1;
        }
    }
    applied
}
