//! Terminal rendering and hit testing for tabs.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Text;
use ratatui::widgets::{Block, Borders, Paragraph, Widget, Wrap};

use crate::widgets::theme::{BG, BORDER, FG, FG_SECONDARY, PRIMARY};

use super::state::TabsState;

/// Horizontal padding on each side of a tab label.
const TAB_PADDING: u16 = 2;
const TAB_GAP: u16 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabsLayout {
    /// One rect per tab on the tab list row.
    pub tabs: Vec<Rect>,
    pub panel: Rect,
}

impl TabsLayout {
    pub fn compute(area: Rect, state: &TabsState) -> Self {
        let list_height = area.height.min(1);
        let mut x = area.x;
        let right = area.x + area.width;
        let mut tabs = Vec::with_capacity(state.len());
        for tab in &state.tabs {
            let width = tab.label.chars().count() as u16 + TAB_PADDING * 2;
            let clipped = width.min(right.saturating_sub(x));
            tabs.push(Rect {
                x,
                y: area.y,
                width: clipped,
                height: list_height,
            });
            x = (x + clipped + TAB_GAP).min(right);
        }
        let panel = Rect {
            y: area.y + list_height,
            height: area.height.saturating_sub(list_height),
            ..area
        };
        Self { tabs, panel }
    }

    pub fn tab_at(&self, x: u16, y: u16) -> Option<usize> {
        self.tabs.iter().position(|rect| {
            rect.width > 0
                && x >= rect.x
                && x < rect.x + rect.width
                && y >= rect.y
                && y < rect.y + rect.height
        })
    }
}

/// Draws the tab list and the visible panel's body.
pub struct TabsView<'a> {
    state: &'a TabsState,
    panel: Text<'a>,
}

impl<'a> TabsView<'a> {
    pub fn new(state: &'a TabsState, panel: Text<'a>) -> Self {
        Self { state, panel }
    }
}

impl Widget for TabsView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let layout = TabsLayout::compute(area, self.state);

        for (tab, rect) in self.state.tabs.iter().zip(&layout.tabs) {
            if rect.width == 0 {
                continue;
            }
            let style = if tab.selected {
                Style::default()
                    .fg(PRIMARY)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(FG_SECONDARY)
            };
            let padding = " ".repeat(TAB_PADDING as usize);
            let label = format!("{padding}{}{padding}", tab.label);
            let _ = buf.set_stringn(rect.x, rect.y, label, rect.width as usize, style);
        }

        if layout.panel.height > 0 {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(BORDER))
                .style(Style::default().bg(BG));
            Paragraph::new(self.panel)
                .style(Style::default().fg(FG))
                .wrap(Wrap { trim: true })
                .block(block)
                .render(layout.panel, buf);
        }
    }
}
