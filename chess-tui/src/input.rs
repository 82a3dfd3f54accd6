//! Raw key events to abstract board commands.

use chess::Command;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// One tick's worth of input after key translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Command(Command),
    Undo,
    ToggleTheme,
    Quit,
}

pub fn map_key(key: KeyEvent) -> InputEvent {
    // Terminals with keyboard enhancement report releases and repeats too.
    if key.kind != KeyEventKind::Press {
        return InputEvent::Command(Command::None);
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => InputEvent::Quit,
            _ => InputEvent::Command(Command::None),
        };
    }

    let command = match key.code {
        KeyCode::Char('q') => return InputEvent::Quit,
        KeyCode::Char('u') => return InputEvent::Undo,
        KeyCode::Char('t') => return InputEvent::ToggleTheme,
        KeyCode::Left | KeyCode::Char('h') => Command::Left,
        KeyCode::Right | KeyCode::Char('l') => Command::Right,
        KeyCode::Up | KeyCode::Char('k') => Command::Up,
        KeyCode::Down | KeyCode::Char('j') => Command::Down,
        KeyCode::Enter | KeyCode::Char(' ') => Command::Confirm,
        KeyCode::Esc | KeyCode::Backspace => Command::Cancel,
        _ => Command::None,
    };
    InputEvent::Command(command)
}
