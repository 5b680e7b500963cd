use std::sync::Arc;

use parking_lot::Mutex;
use ratatui::layout::Rect;
use tokio::sync::mpsc::UnboundedSender;

use crate::args::Overrides;
use crate::config::{Config, ConfigStore, SlideConfig};
use crate::ui::events::AppEvent;
use crate::ui::layout::Regions;
use crate::widgets::attributes::Attributes;
use crate::widgets::card::{Card, CardSlots, CardVariant, VARIANT_ATTR};
use crate::widgets::carousel::{
    AutoplayTick, Carousel, CarouselError, CarouselHit, CarouselLayout, ChangeEvent,
    SharedItems, TimerConfig, Track, INTERVAL_ATTR, PAUSED_ATTR,
};
use crate::widgets::tabs::{TabChangeEvent, Tabs, TabsLayout};

/// Smallest interval reachable with the `-` key.
const MIN_INTERVAL_MS: u64 = 250;
pub const INTERVAL_STEP_MS: u64 = 500;

pub type SlideCarousel = Carousel<SharedItems<SlideConfig>, Track>;

/// Demo state: one card hosting the carousel, a tab strip below it.
pub struct App {
    slides: SharedItems<SlideConfig>,
    carousel: SlideCarousel,
    card: Card,
    tabs: Tabs,
    panels: Vec<String>,
    last_slide_change: Arc<Mutex<Option<ChangeEvent>>>,
    last_tab_change: Arc<Mutex<Option<TabChangeEvent>>>,
    notice: Option<String>,
    store: ConfigStore,
    overrides: Overrides,
    added_slides: usize,
    size: Rect,
    should_quit: bool,
}

impl App {
    pub fn new(store: ConfigStore, overrides: Overrides) -> Self {
        let mut config = store.get();
        overrides.apply(&mut config);

        let slides = SharedItems::new(config.slides.clone());
        let mut attributes = Attributes::new();
        config.carousel.timer_config().write_attributes(&mut attributes);
        let mut carousel =
            Carousel::new(slides.clone(), Track::new()).with_attributes(attributes);

        let last_slide_change = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&last_slide_change);
        carousel.on_change(move |event: &ChangeEvent| *sink.lock() = Some(*event));

        let mut card = Card::new(card_slots(&config)).with_attributes(card_attributes(&config));
        card.connected();

        let mut tabs = Tabs::new();
        let last_tab_change = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&last_tab_change);
        tabs.on_change(move |event: &TabChangeEvent| *sink.lock() = Some(event.clone()));
        tabs.connected(config.tabs.iter().map(|tab| tab.label.clone()).collect());
        let panels = config.tabs.iter().map(|tab| tab.body.clone()).collect();

        Self {
            slides,
            carousel,
            card,
            tabs,
            panels,
            last_slide_change,
            last_tab_change,
            notice: None,
            store,
            overrides,
            added_slides: 0,
            size: Rect::default(),
            should_quit: false,
        }
    }

    /// Attach the carousel to the event queue; autoplay starts here.
    pub fn attach(&mut self, tx: UnboundedSender<AppEvent>) -> Result<(), CarouselError> {
        self.carousel.attach(tx)
    }

    pub fn detach(&mut self) {
        self.carousel.detach();
        self.tabs.disconnected();
    }

    pub fn on_autoplay(&mut self, tick: AutoplayTick) {
        self.carousel.on_tick(tick);
    }

    pub fn next_slide(&mut self) {
        self.carousel.next();
    }

    pub fn previous_slide(&mut self) {
        self.carousel.previous();
    }

    pub fn select_slide(&mut self, index: usize) {
        self.carousel.select(index);
    }

    pub fn next_tab(&mut self) {
        self.tabs.next_tab();
    }

    pub fn previous_tab(&mut self) {
        self.tabs.previous_tab();
    }

    pub fn toggle_paused(&mut self) {
        let paused = self.carousel.timer_config().paused;
        let value = (!paused).then_some("");
        self.apply_carousel_attribute(PAUSED_ATTR, value);
    }

    pub fn adjust_interval(&mut self, delta_ms: i64) {
        let current = self.carousel.timer_config().interval_ms;
        let next = current
            .saturating_add_signed(delta_ms)
            .max(MIN_INTERVAL_MS);
        if next != current {
            self.apply_carousel_attribute(INTERVAL_ATTR, Some(&next.to_string()));
        }
    }

    pub fn add_slide(&mut self) {
        self.added_slides += 1;
        self.slides.push(SlideConfig {
            title: format!("Added slide {}", self.added_slides),
            body: "Added at runtime; the indicator row was rebuilt.".to_string(),
        });
        self.carousel.items_changed();
    }

    pub fn remove_slide(&mut self) {
        if self.slides.pop().is_some() {
            self.carousel.items_changed();
        }
    }

    pub fn cycle_card_variant(&mut self) {
        let next = self.card.variant().cycle();
        self.card.attribute_changed(VARIANT_ATTR, next.as_attr());
    }

    /// Route a left click to whatever control sits under it.
    pub fn click(&mut self, x: u16, y: u16) {
        let regions = self.regions();
        let carousel = CarouselLayout::compute(regions.carousel, self.carousel.indicators());
        match carousel.hit_test(x, y) {
            Some(CarouselHit::Previous) => {
                self.carousel.previous();
                return;
            }
            Some(CarouselHit::Next) => {
                self.carousel.next();
                return;
            }
            Some(CarouselHit::Indicator(id)) => {
                self.carousel.activate_indicator(id);
                return;
            }
            None => {}
        }
        let tabs = TabsLayout::compute(regions.tabs, self.tabs.state());
        if let Some(index) = tabs.tab_at(x, y) {
            self.tabs.select(index);
        }
    }

    /// Re-read the store after the watcher reloaded it. Command-line
    /// overrides still win over the file.
    pub fn on_config_reload(&mut self) {
        let mut config = self.store.get();
        self.overrides.apply(&mut config);

        self.slides.clear();
        for slide in config.slides.iter().cloned() {
            self.slides.push(slide);
        }
        self.added_slides = 0;
        self.carousel.items_changed();
        self.notice = Some("config reloaded".to_string());
        if let Err(err) = self.carousel.configure(config.carousel.timer_config()) {
            tracing::error!(error = %err, "Failed to restart autoplay after reload");
            self.notice = Some(err.to_string());
        }

        *self.card.slots_mut() = card_slots(&config);
        self.card
            .attribute_changed(VARIANT_ATTR, config.card.variant.as_deref());

        self.tabs
            .connected(config.tabs.iter().map(|tab| tab.label.clone()).collect());
        self.panels = config.tabs.iter().map(|tab| tab.body.clone()).collect();
    }

    pub fn on_config_error(&mut self, message: String) {
        self.notice = Some(message);
    }

    /// Terminal area used for hit testing; refreshed on every draw.
    pub fn set_size(&mut self, area: Rect) {
        self.size = area;
    }

    pub fn regions(&self) -> Regions {
        Regions::compute(self.size, &self.card)
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn carousel(&self) -> &SlideCarousel {
        &self.carousel
    }

    pub fn card(&self) -> &Card {
        &self.card
    }

    pub fn tabs(&self) -> &Tabs {
        &self.tabs
    }

    /// Slide the track currently shows.
    pub fn visible_slide(&self) -> Option<SlideConfig> {
        let position = self.carousel.renderer().position()?;
        self.slides.get(position)
    }

    pub fn visible_panel(&self) -> Option<&str> {
        let index = self.tabs.state().visible_panel()?;
        self.panels.get(index).map(String::as_str)
    }

    pub fn timer_config(&self) -> TimerConfig {
        self.carousel.timer_config()
    }

    pub fn last_slide_change(&self) -> Option<ChangeEvent> {
        *self.last_slide_change.lock()
    }

    pub fn last_tab_change(&self) -> Option<TabChangeEvent> {
        self.last_tab_change.lock().clone()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    fn apply_carousel_attribute(&mut self, name: &str, value: Option<&str>) {
        if let Err(err) = self.carousel.attribute_changed(name, value) {
            tracing::error!(error = %err, attribute = name, "Failed to restart autoplay");
            self.notice = Some(err.to_string());
        }
    }
}

fn card_slots(config: &Config) -> CardSlots {
    CardSlots {
        header: None,
        title: config.card.title.clone(),
        subtitle: config.card.subtitle.clone(),
        body: None,
        footer: config.card.footer.clone(),
    }
}

fn card_attributes(config: &Config) -> Attributes {
    let mut attributes = Attributes::new();
    if let Some(variant) = CardVariant::parse(config.card.variant.as_deref()).as_attr() {
        attributes.set(VARIANT_ATTR, variant);
    }
    attributes
}
