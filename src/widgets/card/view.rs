//! Terminal rendering for the card.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap};

use crate::widgets::theme::{BG, BG_TERTIARY, BORDER, BORDER_HOVER, FG, FG_SECONDARY, PRIMARY};

use super::{Card, CardSlots, CardVariant};

/// Regions inside the card's border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardLayout {
    pub header: Rect,
    pub body: Rect,
    pub footer: Rect,
}

impl CardLayout {
    /// Header rows (one per filled header slot) and footer row are each
    /// separated from the body by a rule line.
    pub fn compute(area: Rect, slots: &CardSlots) -> Self {
        let inner = Block::default().borders(Borders::ALL).inner(area);

        let header_rows = [&slots.header, &slots.title, &slots.subtitle]
            .iter()
            .filter(|slot| slot.is_some())
            .count() as u16;
        let header_height = header_rows.min(inner.height);
        let header_rule = u16::from(header_rows > 0);

        let footer_height = u16::from(slots.footer.is_some());
        let footer_rule = footer_height;

        let top = (header_height + header_rule).min(inner.height);
        let bottom = (footer_height + footer_rule).min(inner.height.saturating_sub(top));

        let header = Rect {
            height: header_height,
            ..inner
        };
        let body = Rect {
            y: inner.y + top,
            height: inner.height.saturating_sub(top + bottom),
            ..inner
        };
        let footer = Rect {
            y: inner.y + inner.height.saturating_sub(footer_height),
            height: footer_height.min(bottom),
            ..inner
        };
        Self {
            header,
            body,
            footer,
        }
    }
}

pub struct CardView<'a> {
    card: &'a Card,
}

impl<'a> CardView<'a> {
    pub fn new(card: &'a Card) -> Self {
        Self { card }
    }

    /// Area the default slot occupies; hosts draw nested widgets here.
    pub fn body_area(&self, area: Rect) -> Rect {
        CardLayout::compute(area, self.card.slots()).body
    }

    fn block(&self) -> Block<'static> {
        let block = Block::default().borders(Borders::ALL);
        match self.card.variant() {
            CardVariant::Plain => block
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(BORDER))
                .style(Style::default().bg(BG)),
            CardVariant::Elevated => block
                .border_type(BorderType::Thick)
                .border_style(Style::default().fg(BORDER_HOVER))
                .style(Style::default().bg(BG)),
            CardVariant::Dark => block
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(BORDER_HOVER))
                .style(Style::default().bg(BG_TERTIARY)),
            CardVariant::Bordered => block
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(PRIMARY))
                .style(Style::default().bg(BG)),
        }
    }
}

impl Widget for CardView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 2 || area.height < 2 {
            return;
        }
        let slots = self.card.slots();
        let layout = CardLayout::compute(area, slots);
        self.block().render(area, buf);

        let mut header = Vec::new();
        if let Some(text) = &slots.header {
            header.push(Line::styled(text.clone(), Style::default().fg(FG)));
        }
        if let Some(text) = &slots.title {
            header.push(Line::styled(
                text.clone(),
                Style::default().fg(FG).add_modifier(Modifier::BOLD),
            ));
        }
        if let Some(text) = &slots.subtitle {
            header.push(Line::styled(text.clone(), Style::default().fg(FG_SECONDARY)));
        }
        if !header.is_empty() {
            Paragraph::new(header).render(layout.header, buf);
            rule(layout.header.x, layout.body.y.saturating_sub(1), layout.header.width, buf);
        }

        if let Some(body) = &slots.body {
            Paragraph::new(body.as_str())
                .style(Style::default().fg(FG))
                .wrap(Wrap { trim: true })
                .render(layout.body, buf);
        }

        if let Some(text) = &slots.footer {
            if layout.footer.height > 0 {
                rule(layout.footer.x, layout.footer.y.saturating_sub(1), layout.footer.width, buf);
                Paragraph::new(Line::from(Span::styled(
                    text.clone(),
                    Style::default().fg(FG_SECONDARY),
                )))
                .render(layout.footer, buf);
            }
        }
    }
}

fn rule(x: u16, y: u16, width: u16, buf: &mut Buffer) {
    buf.set_string(x, y, "─".repeat(width as usize), Style::default().fg(BORDER));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slots() -> CardSlots {
        CardSlots {
            title: Some("Title".into()),
            subtitle: Some("Sub".into()),
            footer: Some("Footer".into()),
            ..CardSlots::default()
        }
    }

    #[test]
    fn layout_reserves_header_and_footer() {
        let layout = CardLayout::compute(Rect::new(0, 0, 20, 12), &slots());
        // inner is 18x10 at (1,1): 2 header rows + rule, rule + 1 footer row.
        assert_eq!(layout.header, Rect::new(1, 1, 18, 2));
        assert_eq!(layout.body, Rect::new(1, 4, 18, 5));
        assert_eq!(layout.footer, Rect::new(1, 10, 18, 1));
    }

    #[test]
    fn layout_without_slots_uses_whole_inner_area() {
        let layout = CardLayout::compute(Rect::new(0, 0, 20, 12), &CardSlots::default());
        assert_eq!(layout.body, Rect::new(1, 1, 18, 10));
        assert_eq!(layout.header.height, 0);
        assert_eq!(layout.footer.height, 0);
    }

    #[test]
    fn bordered_variant_uses_double_border() {
        let mut card = Card::new(slots());
        card.attribute_changed("variant", Some("bordered"));
        let area = Rect::new(0, 0, 20, 12);
        let mut buf = Buffer::empty(area);
        CardView::new(&card).render(area, &mut buf);
        assert_eq!(buf[(0, 0)].symbol(), "╔");
        assert_eq!(buf[(1, 1)].symbol(), "T");
    }
}
