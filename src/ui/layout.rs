use ratatui::layout::Rect;

use crate::widgets::card::{Card, CardView};

/// Screen regions shared by drawing and mouse hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub card: Rect,
    /// The card's body slot, which hosts the carousel.
    pub carousel: Rect,
    pub tabs: Rect,
    pub status: Rect,
}

const TABS_HEIGHT: u16 = 7;

impl Regions {
    pub fn compute(area: Rect, card: &Card) -> Self {
        let status_height = area.height.min(1);
        let status = Rect {
            y: area.y + area.height.saturating_sub(status_height),
            height: status_height,
            ..area
        };
        let above_status = area.height.saturating_sub(status_height);
        let tabs_height = TABS_HEIGHT.min(above_status / 2);
        let tabs = Rect {
            y: status.y.saturating_sub(tabs_height),
            height: tabs_height,
            ..area
        };
        let card_area = Rect {
            height: above_status.saturating_sub(tabs_height),
            ..area
        };
        let carousel = CardView::new(card).body_area(card_area);
        Self {
            card: card_area,
            carousel,
            tabs,
            status,
        }
    }
}
