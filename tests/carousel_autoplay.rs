mod common;

use std::time::Duration;

use common::{autoplay_attributes, collect_changes, pump, recording_renderer};
use frmwk_widgets::widgets::carousel::{
    AutoplayTick, Carousel, CarouselError, TimerConfig, INTERVAL_ATTR, PAUSED_ATTR,
};
use tokio::sync::mpsc;
use tokio::time::sleep;

#[tokio::test(start_paused = true)]
async fn autoplay_advances_once_per_interval() {
    let (_renders, renderer) = recording_renderer();
    let mut carousel =
        Carousel::new(vec![0, 1, 2], renderer).with_attributes(autoplay_attributes(100));
    let events = collect_changes(&mut carousel);
    let (tx, mut rx) = mpsc::unbounded_channel::<AutoplayTick>();
    carousel.attach(tx).unwrap();

    sleep(Duration::from_millis(350)).await;
    assert_eq!(pump(&mut carousel, &mut rx), 3);

    assert_eq!(*events.lock(), vec![1, 2, 0]);
}

#[tokio::test(start_paused = true)]
async fn first_tick_waits_a_full_interval() {
    let (_renders, renderer) = recording_renderer();
    let mut carousel =
        Carousel::new(vec![0, 1], renderer).with_attributes(autoplay_attributes(1000));
    let (tx, mut rx) = mpsc::unbounded_channel::<AutoplayTick>();
    carousel.attach(tx).unwrap();

    sleep(Duration::from_millis(999)).await;
    assert_eq!(pump(&mut carousel, &mut rx), 0);
    sleep(Duration::from_millis(2)).await;
    assert_eq!(pump(&mut carousel, &mut rx), 1);
}

#[tokio::test(start_paused = true)]
async fn reconfigure_leaves_exactly_one_timer() {
    let (_renders, renderer) = recording_renderer();
    let mut carousel =
        Carousel::new(vec![0, 1, 2, 3], renderer).with_attributes(autoplay_attributes(4000));
    let (tx, mut rx) = mpsc::unbounded_channel::<AutoplayTick>();
    carousel.attach(tx).unwrap();
    sleep(Duration::from_millis(500)).await;

    carousel
        .configure(TimerConfig {
            interval_ms: 1000,
            paused: false,
        })
        .unwrap();

    assert_eq!(carousel.timer().cancellations(), 1);
    assert!(carousel.timer().is_running());
    assert_eq!(carousel.timer().interval(), Some(Duration::from_millis(1000)));

    // Past the old 4000 ms deadline: only the new cadence is observed.
    sleep(Duration::from_millis(3600)).await;
    assert_eq!(pump(&mut carousel, &mut rx), 3);
}

#[tokio::test(start_paused = true)]
async fn interval_attribute_change_restarts_timer() {
    let (_renders, renderer) = recording_renderer();
    let mut carousel =
        Carousel::new(vec![0, 1, 2], renderer).with_attributes(autoplay_attributes(4000));
    let (tx, mut rx) = mpsc::unbounded_channel::<AutoplayTick>();
    carousel.attach(tx).unwrap();

    carousel.attribute_changed(INTERVAL_ATTR, Some("250")).unwrap();
    assert_eq!(carousel.timer().cancellations(), 1);

    sleep(Duration::from_millis(600)).await;
    assert_eq!(pump(&mut carousel, &mut rx), 2);
}

#[tokio::test(start_paused = true)]
async fn unrelated_attribute_leaves_timer_alone() {
    let (_renders, renderer) = recording_renderer();
    let mut carousel =
        Carousel::new(vec![0, 1], renderer).with_attributes(autoplay_attributes(100));
    let (tx, _rx) = mpsc::unbounded_channel::<AutoplayTick>();
    carousel.attach(tx).unwrap();

    carousel.attribute_changed("aria-label", Some("Gallery")).unwrap();

    assert_eq!(carousel.timer().cancellations(), 0);
    assert_eq!(carousel.attributes().get("aria-label"), Some("Gallery"));
}

#[tokio::test(start_paused = true)]
async fn paused_stops_and_unpausing_resumes() {
    let (_renders, renderer) = recording_renderer();
    let mut carousel =
        Carousel::new(vec![0, 1, 2], renderer).with_attributes(autoplay_attributes(100));
    let (tx, mut rx) = mpsc::unbounded_channel::<AutoplayTick>();
    carousel.attach(tx).unwrap();

    carousel.attribute_changed(PAUSED_ATTR, Some("")).unwrap();
    assert!(!carousel.timer().is_running());
    sleep(Duration::from_millis(500)).await;
    assert_eq!(pump(&mut carousel, &mut rx), 0);

    carousel.attribute_changed(PAUSED_ATTR, None).unwrap();
    assert!(carousel.timer().is_running());
    sleep(Duration::from_millis(150)).await;
    assert_eq!(pump(&mut carousel, &mut rx), 1);
}

#[tokio::test(start_paused = true)]
async fn detach_right_after_attach_never_ticks() {
    let (renders, renderer) = recording_renderer();
    let mut carousel =
        Carousel::new(vec![0, 1, 2], renderer).with_attributes(autoplay_attributes(50));
    let events = collect_changes(&mut carousel);
    let (tx, mut rx) = mpsc::unbounded_channel::<AutoplayTick>();
    carousel.attach(tx).unwrap();
    carousel.detach();

    sleep(Duration::from_millis(500)).await;

    assert_eq!(pump(&mut carousel, &mut rx), 0);
    assert!(events.lock().is_empty());
    assert_eq!(*renders.lock(), vec![0]);
    assert!(!carousel.timer().is_running());
}

#[tokio::test(start_paused = true)]
async fn tick_queued_before_detach_is_ignored() {
    let (_renders, renderer) = recording_renderer();
    let mut carousel =
        Carousel::new(vec![0, 1, 2], renderer).with_attributes(autoplay_attributes(100));
    let events = collect_changes(&mut carousel);
    let (tx, mut rx) = mpsc::unbounded_channel::<AutoplayTick>();
    carousel.attach(tx).unwrap();

    sleep(Duration::from_millis(150)).await;
    let queued = rx.try_recv().unwrap();
    carousel.detach();

    assert_eq!(carousel.on_tick(queued), None);
    assert!(events.lock().is_empty());
}

#[tokio::test(start_paused = true)]
async fn tick_from_previous_generation_is_ignored() {
    let (_renders, renderer) = recording_renderer();
    let mut carousel =
        Carousel::new(vec![0, 1, 2], renderer).with_attributes(autoplay_attributes(100));
    let (tx, mut rx) = mpsc::unbounded_channel::<AutoplayTick>();
    carousel.attach(tx).unwrap();

    sleep(Duration::from_millis(150)).await;
    let stale = rx.try_recv().unwrap();
    carousel.attribute_changed(INTERVAL_ATTR, Some("200")).unwrap();

    assert_eq!(carousel.on_tick(stale), None);
    assert_eq!(carousel.current(), Some(0));
}

#[test]
fn autoplay_attach_outside_runtime_fails() {
    let (_renders, renderer) = recording_renderer();
    let mut carousel =
        Carousel::new(vec![0, 1], renderer).with_attributes(autoplay_attributes(100));
    let (tx, _rx) = mpsc::unbounded_channel::<AutoplayTick>();

    let result = carousel.attach(tx);

    assert!(matches!(result, Err(CarouselError::NoRuntime)));
    assert!(!carousel.is_attached());
}

#[test]
fn default_interval_applies_without_attribute() {
    let (_renders, renderer) = recording_renderer();
    let carousel = Carousel::new(vec![0], renderer);
    assert_eq!(carousel.timer_config(), TimerConfig::default());
    assert_eq!(carousel.timer_config().interval_ms, 4000);
}
