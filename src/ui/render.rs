use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::ui::app::App;
use crate::widgets::card::CardView;
use crate::widgets::carousel::CarouselView;
use crate::widgets::tabs::TabsView;
use crate::widgets::theme::{FG, FG_SECONDARY, PRIMARY, STATUS_ERROR, STATUS_OK};

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let regions = app.regions();

    frame.render_widget(CardView::new(app.card()), regions.card);
    frame.render_widget(
        CarouselView::new(slide_text(app), app.carousel().indicators()),
        regions.carousel,
    );

    let panel = app.visible_panel().unwrap_or_default();
    frame.render_widget(TabsView::new(app.tabs().state(), Text::raw(panel)), regions.tabs);

    frame.render_widget(Paragraph::new(status_line(app)), regions.status);
}

fn slide_text(app: &App) -> Text<'static> {
    let Some(slide) = app.visible_slide() else {
        return Text::styled("No slides. Press a to add one.", Style::default().fg(FG_SECONDARY));
    };
    let mut text = Text::from(Line::styled(
        slide.title,
        Style::default().fg(FG).add_modifier(Modifier::BOLD),
    ));
    text.push_line(Line::default());
    text.push_line(Line::styled(slide.body, Style::default().fg(FG_SECONDARY)));
    text
}

fn status_line(app: &App) -> Line<'static> {
    let timer = app.timer_config();
    let autoplay = if timer.paused {
        Span::styled("paused", Style::default().fg(STATUS_ERROR))
    } else {
        Span::styled(format!("every {} ms", timer.interval_ms), Style::default().fg(STATUS_OK))
    };
    let slide = match app.carousel().current() {
        Some(index) if app.carousel().item_count() > 0 => {
            format!("slide {}/{}", index + 1, app.carousel().item_count())
        }
        _ => "no slides".to_string(),
    };
    let mut spans = vec![
        Span::styled(" autoplay ", Style::default().fg(FG_SECONDARY)),
        autoplay,
        Span::styled(format!(" · {slide}"), Style::default().fg(FG)),
    ];
    if let Some(event) = app.last_slide_change() {
        spans.push(Span::styled(
            format!(" · changed to {}", event.index),
            Style::default().fg(FG_SECONDARY),
        ));
    }
    if let Some(event) = app.last_tab_change() {
        spans.push(Span::styled(
            format!(" · tab {}", event.label),
            Style::default().fg(PRIMARY),
        ));
    }
    if let Some(notice) = app.notice() {
        spans.push(Span::styled(format!(" · {notice}"), Style::default().fg(FG_SECONDARY)));
    }
    Line::from(spans)
}
