mod common;

use common::{attached_carousel, collect_changes};
use frmwk_widgets::widgets::carousel::{
    AutoplayTick, CarouselHit, CarouselLayout, ChangeEvent, IndicatorHandle,
};
use ratatui::layout::Rect;
use tokio::sync::mpsc;

fn current_count(handles: &[IndicatorHandle]) -> usize {
    handles.iter().filter(|h| h.is_current()).count()
}

#[test]
fn exactly_one_indicator_is_current() {
    let (mut carousel, _renders) = attached_carousel(4);

    assert_eq!(current_count(carousel.indicators()), 1);
    for _ in 0..6 {
        carousel.next();
        assert_eq!(current_count(carousel.indicators()), 1);
    }
    let current = carousel.current().unwrap();
    assert!(carousel.indicators()[current].is_current());
}

#[test]
fn activating_an_indicator_jumps_to_its_slide() {
    let (mut carousel, renders) = attached_carousel(5);
    let events = collect_changes(&mut carousel);
    let third = carousel.indicators()[3].id();

    let event = carousel.activate_indicator(third);

    assert_eq!(event, Some(ChangeEvent { index: 3 }));
    assert_eq!(*events.lock(), vec![3]);
    assert_eq!(renders.lock().last(), Some(&3));
}

#[test]
fn stale_indicator_from_before_rebuild_is_ignored() {
    let (mut carousel, _renders) = attached_carousel(3);
    let stale = carousel.indicators()[2].id();

    carousel.detach();
    let (tx, _rx) = mpsc::unbounded_channel::<AutoplayTick>();
    carousel.attach(tx).unwrap();

    assert_eq!(carousel.activate_indicator(stale), None);
    assert_eq!(carousel.current(), Some(0));
}

#[test]
fn clicking_a_dot_maps_to_its_indicator() {
    let (mut carousel, _renders) = attached_carousel(3);
    let layout = CarouselLayout::compute(Rect::new(0, 0, 21, 6), carousel.indicators());
    let (id, rect) = layout.dots[1];

    let hit = layout.hit_test(rect.x, rect.y);

    assert_eq!(hit, Some(CarouselHit::Indicator(id)));
    assert_eq!(carousel.activate_indicator(id), Some(ChangeEvent { index: 1 }));
}
