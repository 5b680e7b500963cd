//! Terminal rendering and hit testing for the carousel.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Text};
use ratatui::widgets::{Paragraph, Widget, Wrap};

use crate::widgets::theme::{BORDER, BORDER_HOVER, FG, PRIMARY};

use super::indicator::{IndicatorHandle, IndicatorId};

const PREV_LABEL: &str = " ◀ ";
const NEXT_LABEL: &str = " ▶ ";
const DOT_CURRENT: &str = "●";
const DOT: &str = "○";

/// What a click inside the carousel area landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselHit {
    Previous,
    Next,
    Indicator(IndicatorId),
}

/// Screen regions of a carousel drawn into `area`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselLayout {
    pub slide: Rect,
    pub previous: Rect,
    pub next: Rect,
    /// One single-cell rect per indicator, in position order.
    pub dots: Vec<(IndicatorId, Rect)>,
}

impl CarouselLayout {
    /// Slide on top, one control row at the bottom: buttons on the left,
    /// dots centered and one cell apart.
    pub fn compute(area: Rect, indicators: &[IndicatorHandle]) -> Self {
        let controls_height = area.height.min(1);
        let slide = Rect {
            height: area.height.saturating_sub(controls_height),
            ..area
        };
        let row_y = area.y + area.height.saturating_sub(1);
        let button_width = PREV_LABEL.chars().count() as u16;

        let previous = Rect {
            x: area.x + 1.min(area.width),
            y: row_y,
            width: button_width.min(area.width.saturating_sub(1)),
            height: controls_height,
        };
        let next = Rect {
            x: previous.x + previous.width + 1,
            y: row_y,
            width: button_width.min(
                (area.x + area.width).saturating_sub(previous.x + previous.width + 1),
            ),
            height: controls_height,
        };

        let dots_width = (indicators.len() as u16).saturating_mul(2).saturating_sub(1);
        let dots_start = area.x + area.width.saturating_sub(dots_width) / 2;
        let dots = indicators
            .iter()
            .enumerate()
            .filter_map(|(i, handle)| {
                let x = dots_start + (i as u16) * 2;
                (x < area.x + area.width && controls_height > 0).then(|| {
                    (
                        handle.id(),
                        Rect {
                            x,
                            y: row_y,
                            width: 1,
                            height: 1,
                        },
                    )
                })
            })
            .collect();

        Self {
            slide,
            previous,
            next,
            dots,
        }
    }

    pub fn hit_test(&self, x: u16, y: u16) -> Option<CarouselHit> {
        if contains(self.previous, x, y) {
            return Some(CarouselHit::Previous);
        }
        if contains(self.next, x, y) {
            return Some(CarouselHit::Next);
        }
        self.dots
            .iter()
            .find(|(_, rect)| contains(*rect, x, y))
            .map(|(id, _)| CarouselHit::Indicator(*id))
    }
}

fn contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
}

/// Draws the slide under the track plus the control row.
pub struct CarouselView<'a> {
    slide: Text<'a>,
    indicators: &'a [IndicatorHandle],
}

impl<'a> CarouselView<'a> {
    pub fn new(slide: Text<'a>, indicators: &'a [IndicatorHandle]) -> Self {
        Self { slide, indicators }
    }
}

impl Widget for CarouselView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let layout = CarouselLayout::compute(area, self.indicators);

        // Vertically center the slide content.
        let content_height = (self.slide.height() as u16).min(layout.slide.height);
        let slide_area = Rect {
            y: layout.slide.y + (layout.slide.height - content_height) / 2,
            height: content_height,
            ..layout.slide
        };
        Paragraph::new(self.slide)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(slide_area, buf);

        let button_style = Style::default().fg(FG).bg(BORDER);
        Paragraph::new(Line::styled(PREV_LABEL, button_style)).render(layout.previous, buf);
        Paragraph::new(Line::styled(NEXT_LABEL, button_style)).render(layout.next, buf);

        for ((_, rect), handle) in layout.dots.iter().zip(self.indicators) {
            let (symbol, style) = if handle.is_current() {
                (DOT_CURRENT, Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD))
            } else {
                (DOT, Style::default().fg(BORDER_HOVER))
            };
            buf.set_string(rect.x, rect.y, symbol, style);
        }
    }
}
