use frmwk_widgets::widgets::attributes::Attributes;
use frmwk_widgets::widgets::card::{Card, CardSlots, CardVariant, CardView, VARIANT_ATTR};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;

fn card(variant: Option<&str>) -> Card {
    let mut attributes = Attributes::new();
    if let Some(v) = variant {
        attributes.set(VARIANT_ATTR, v);
    }
    let mut card = Card::new(CardSlots {
        title: Some("Title".to_string()),
        body: Some("Body".to_string()),
        ..CardSlots::default()
    })
    .with_attributes(attributes);
    card.connected();
    card
}

fn variant_classes(card: &Card) -> Vec<&'static str> {
    card.classes().filter(|c| c.starts_with("card--")).collect()
}

#[test]
fn base_class_is_always_present() {
    assert!(card(None).has_class("card"));
    assert!(card(Some("dark")).has_class("card"));
}

#[test]
fn at_most_one_variant_class() {
    let mut card = card(Some("elevated"));
    for value in [Some("dark"), Some("bordered"), Some("nope"), None, Some("elevated")] {
        card.attribute_changed(VARIANT_ATTR, value);
        assert!(variant_classes(&card).len() <= 1, "after {value:?}");
    }
    assert_eq!(variant_classes(&card), vec!["card--elevated"]);
}

#[test]
fn removing_variant_clears_its_class() {
    let mut card = card(Some("bordered"));
    assert_eq!(card.variant(), CardVariant::Bordered);

    card.attribute_changed(VARIANT_ATTR, None);

    assert_eq!(card.variant(), CardVariant::Plain);
    assert!(variant_classes(&card).is_empty());
}

#[test]
fn unknown_variant_means_plain() {
    let card = card(Some("glossy"));
    assert_eq!(card.variant(), CardVariant::Plain);
    assert!(variant_classes(&card).is_empty());
}

#[test]
fn bordered_card_draws_double_border() {
    let card = card(Some("bordered"));
    let area = Rect::new(0, 0, 20, 6);
    let mut buf = Buffer::empty(area);

    CardView::new(&card).render(area, &mut buf);

    assert_eq!(buf[(0, 0)].symbol(), "╔");
    assert_eq!(buf[(19, 5)].symbol(), "╝");
}

#[test]
fn title_is_drawn_inside_the_border() {
    let card = card(None);
    let area = Rect::new(0, 0, 20, 6);
    let mut buf = Buffer::empty(area);

    CardView::new(&card).render(area, &mut buf);

    let row: String = (1..6).map(|x| buf[(x, 1)].symbol().to_string()).collect();
    assert_eq!(row, "Title");
}
