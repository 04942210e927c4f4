use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::platform::Buttons;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Press(Buttons),
    Quit,
    None,
}

/// Maps terminal keys onto controller buttons
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        // Raw mode swallows SIGINT, so Ctrl+C arrives as a key
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            // D-pad - Arrow keys
            KeyCode::Up => KeyAction::Press(Buttons::UP),
            KeyCode::Down => KeyAction::Press(Buttons::DOWN),
            KeyCode::Left => KeyAction::Press(Buttons::LEFT),
            KeyCode::Right => KeyAction::Press(Buttons::RIGHT),

            // D-pad - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => KeyAction::Press(Buttons::UP),
            KeyCode::Char('s') | KeyCode::Char('S') => KeyAction::Press(Buttons::DOWN),
            KeyCode::Char('a') | KeyCode::Char('A') => KeyAction::Press(Buttons::LEFT),
            KeyCode::Char('d') | KeyCode::Char('D') => KeyAction::Press(Buttons::RIGHT),

            // Face buttons
            KeyCode::Char('z') | KeyCode::Char('Z') => KeyAction::Press(Buttons::A),
            KeyCode::Char('x') | KeyCode::Char('X') => KeyAction::Press(Buttons::B),
            KeyCode::Enter => KeyAction::Press(Buttons::START),
            KeyCode::Backspace => KeyAction::Press(Buttons::SELECT),

            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,

            _ => KeyAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
