use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::ui::app::{App, INTERVAL_STEP_MS};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Left | KeyCode::Char('h') => app.previous_slide(),
        KeyCode::Right | KeyCode::Char('l') => app.next_slide(),
        // 1-9 jump to a slide; out-of-range digits wrap like any index.
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            app.select_slide(index);
        }
        KeyCode::Tab => app.next_tab(),
        KeyCode::BackTab => app.previous_tab(),
        KeyCode::Char('p') | KeyCode::Char(' ') => app.toggle_paused(),
        KeyCode::Char('+') | KeyCode::Char('=') => app.adjust_interval(INTERVAL_STEP_MS as i64),
        KeyCode::Char('-') => app.adjust_interval(-(INTERVAL_STEP_MS as i64)),
        KeyCode::Char('a') => app.add_slide(),
        KeyCode::Char('d') => app.remove_slide(),
        KeyCode::Char('v') => app.cycle_card_variant(),
        _ => {}
    }
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
        app.click(mouse.column, mouse.row);
    }
}
