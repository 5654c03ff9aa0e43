//! Terminal input mapping.
//!
//! Turns crossterm key and mouse events into [`AppInput`]s. The activate
//! input is deliberately overloaded; the screens decide what it means.

use crate::app::AppInput;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Map one terminal event. Returns `None` for events with no meaning here
/// (key releases, mouse moves, focus changes).
pub fn map_event(event: &Event) -> Option<AppInput> {
    match event {
        Event::Key(key) => map_key(key),
        Event::Mouse(mouse) => map_mouse(mouse),
        _ => None,
    }
}

pub fn map_key(key: &KeyEvent) -> Option<AppInput> {
    // Windows reports releases too
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
    {
        return Some(AppInput::Quit);
    }

    match key.code {
        KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Up => Some(AppInput::Activate),
        KeyCode::Char('k') | KeyCode::Char('K') => Some(AppInput::ToggleSurprise),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(AppInput::Restart),
        KeyCode::Esc => Some(AppInput::Back),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(AppInput::Quit),
        _ => None,
    }
}

pub fn map_mouse(mouse: &MouseEvent) -> Option<AppInput> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(AppInput::Activate),
        _ => None,
    }
}
