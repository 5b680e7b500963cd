//! The carousel component: selection state, autoplay and change events.

use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;

use crate::widgets::attributes::Attributes;
use crate::widgets::emitter::{EventEmitter, ListenerId};
use crate::widgets::mvi::Reducer;

use super::config::{TimerConfig, OBSERVED_ATTRIBUTES};
use super::error::CarouselError;
use super::indicator::{IndicatorHandle, IndicatorId};
use super::intent::CarouselIntent;
use super::reducer::CarouselReducer;
use super::renderer::SlideRenderer;
use super::source::ItemSource;
use super::state::CarouselState;
use super::timer::{channel_sink, AutoplayTick, AutoplayTimer, TickSink};

/// Announced after every committed transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeEvent {
    pub index: usize,
}

/// Auto-advancing slide switcher.
///
/// All triggers (buttons, indicators, timer ticks) go through one
/// transition: normalize the index against the live item count, render,
/// resync the indicator row, emit a [`ChangeEvent`]. With zero items a
/// transition does nothing at all.
///
/// The carousel is driven from a single task: the host owns the event
/// queue that autoplay ticks arrive on and calls [`on_tick`](Self::on_tick)
/// for each of them, interleaved with its own input handling.
pub struct Carousel<S, R> {
    source: S,
    renderer: R,
    attributes: Attributes,
    state: CarouselState,
    timer: AutoplayTimer,
    sink: Option<TickSink>,
    emitter: EventEmitter<ChangeEvent>,
}

impl<S: ItemSource, R: SlideRenderer> Carousel<S, R> {
    pub const TAG_NAME: &'static str = "frmwk-carousel";

    pub fn new(source: S, renderer: R) -> Self {
        Self {
            source,
            renderer,
            attributes: Attributes::new(),
            state: CarouselState::default(),
            timer: AutoplayTimer::new(),
            sink: None,
            emitter: EventEmitter::new(),
        }
    }

    /// Initial attributes, read when the carousel attaches.
    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn observed_attributes() -> &'static [&'static str] {
        OBSERVED_ATTRIBUTES
    }

    /// Attach to a host whose event queue accepts autoplay ticks.
    pub fn attach<T>(&mut self, tx: UnboundedSender<T>) -> Result<(), CarouselError>
    where
        T: From<AutoplayTick> + Send + 'static,
    {
        self.attach_with_sink(channel_sink(tx))
    }

    /// Attach: build the indicator row, start autoplay unless paused, and
    /// render the first slide. No change event is emitted.
    pub fn attach_with_sink(&mut self, sink: TickSink) -> Result<(), CarouselError> {
        if self.state.is_attached() {
            return Err(CarouselError::AlreadyAttached);
        }
        self.sink = Some(sink);
        let item_count = self.source.len();
        self.dispatch(CarouselIntent::Attach { item_count });
        if let Err(err) = self.restart_timer() {
            self.detach();
            return Err(err);
        }
        self.render_current();
        tracing::debug!(item_count, "Carousel attached");
        Ok(())
    }

    /// Stop autoplay and drop the selection state. Terminal until the next
    /// attach; ticks still queued from before are ignored.
    pub fn detach(&mut self) {
        self.timer.cancel();
        self.sink = None;
        if self.state.is_attached() {
            self.dispatch(CarouselIntent::Detach);
            tracing::debug!("Carousel detached");
        }
    }

    pub fn is_attached(&self) -> bool {
        self.state.is_attached()
    }

    /// Record an attribute change. Changes to `interval` or `paused`
    /// restart the autoplay timer from scratch.
    pub fn attribute_changed(
        &mut self,
        name: &str,
        value: Option<&str>,
    ) -> Result<(), CarouselError> {
        match value {
            Some(value) => self.attributes.set(name, value),
            None => {
                self.attributes.remove(name);
            }
        }
        if OBSERVED_ATTRIBUTES.contains(&name) {
            self.restart_timer()?;
        }
        Ok(())
    }

    /// Apply a whole timer configuration at once (one restart).
    pub fn configure(&mut self, config: TimerConfig) -> Result<(), CarouselError> {
        config.write_attributes(&mut self.attributes);
        self.restart_timer()
    }

    /// Timer configuration as currently expressed by the attributes.
    pub fn timer_config(&self) -> TimerConfig {
        TimerConfig::from_attributes(&self.attributes)
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn next(&mut self) -> Option<ChangeEvent> {
        self.advance(1)
    }

    pub fn previous(&mut self) -> Option<ChangeEvent> {
        self.advance(-1)
    }

    /// Move by `delta` slides, wrapping at both ends.
    pub fn advance(&mut self, delta: i64) -> Option<ChangeEvent> {
        self.transition(|item_count| CarouselIntent::Advance { delta, item_count })
    }

    /// Jump straight to `index`.
    pub fn select(&mut self, index: usize) -> Option<ChangeEvent> {
        self.transition(|item_count| CarouselIntent::Jump {
            position: index,
            item_count,
        })
    }

    /// Jump to the position bound to an indicator. Handles from a previous
    /// indicator row resolve to nothing and are ignored.
    pub fn activate_indicator(&mut self, id: IndicatorId) -> Option<ChangeEvent> {
        let Some(position) = self.state.indicators().and_then(|row| row.position_of(id)) else {
            tracing::trace!(?id, "Ignoring stale indicator");
            return None;
        };
        self.select(position)
    }

    /// Apply one autoplay tick from the host's queue.
    pub fn on_tick(&mut self, tick: AutoplayTick) -> Option<ChangeEvent> {
        if !self.state.is_attached() || !self.timer.accepts(tick) {
            tracing::trace!(
                generation = tick.generation(),
                live = self.timer.generation(),
                "Dropping stale autoplay tick"
            );
            return None;
        }
        self.advance(1)
    }

    /// Host notification that slides were added or removed: rebuild the
    /// indicator row and re-render. No change event is emitted.
    pub fn items_changed(&mut self) {
        if !self.state.is_attached() {
            return;
        }
        let item_count = self.source.len();
        self.dispatch(CarouselIntent::ItemsChanged { item_count });
        self.render_current();
    }

    pub fn on_change<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&ChangeEvent) + Send + 'static,
    {
        self.emitter.subscribe(listener)
    }

    pub fn off(&mut self, id: ListenerId) -> bool {
        self.emitter.unsubscribe(id)
    }

    /// Selected slide, `None` while detached.
    pub fn current(&self) -> Option<usize> {
        self.state.current()
    }

    pub fn item_count(&self) -> usize {
        self.source.len()
    }

    pub fn indicators(&self) -> &[IndicatorHandle] {
        self.state
            .indicators()
            .map(|row| row.handles())
            .unwrap_or(&[])
    }

    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    pub fn timer(&self) -> &AutoplayTimer {
        &self.timer
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    fn dispatch(&mut self, intent: CarouselIntent) {
        self.state = CarouselReducer::reduce(std::mem::take(&mut self.state), intent);
    }

    /// The reducer resyncs the indicator row as part of the state commit,
    /// so `render_at` and listeners always see a settled row.
    fn transition<F>(&mut self, intent: F) -> Option<ChangeEvent>
    where
        F: FnOnce(usize) -> CarouselIntent,
    {
        if !self.state.is_attached() {
            return None;
        }
        let item_count = self.source.len();
        if item_count == 0 {
            return None;
        }
        self.dispatch(intent(item_count));
        let index = self.state.current()?;
        self.renderer.render_at(index);
        let event = ChangeEvent { index };
        tracing::debug!(index, item_count, "Carousel transition");
        self.emitter.emit(&event);
        Some(event)
    }

    fn render_current(&mut self) {
        if self.source.is_empty() {
            return;
        }
        if let Some(index) = self.state.current() {
            self.renderer.render_at(index);
        }
    }

    fn restart_timer(&mut self) -> Result<(), CarouselError> {
        self.timer.cancel();
        let sink = match &self.sink {
            Some(sink) if self.state.is_attached() => Arc::clone(sink),
            _ => return Ok(()),
        };
        let config = self.timer_config();
        if config.paused {
            tracing::debug!("Autoplay paused");
            return Ok(());
        }
        self.timer.schedule(config.interval(), sink)
    }
}

impl<S, R> std::fmt::Debug for Carousel<S, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Carousel")
            .field("attributes", &self.attributes)
            .field("state", &self.state)
            .field("timer", &self.timer)
            .field("emitter", &self.emitter)
            .finish()
    }
}
