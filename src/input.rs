//! Input handling: terminal events to game actions.
//!
//! The game itself only knows one input, the primary action. Mute and quit
//! belong to the terminal front-end.

use crate::game::{ActionOutcome, GameCoordinator};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    /// Left click, Space, Enter or Up.
    Primary,
    /// M.
    ToggleMute,
    /// Q, Esc or Ctrl+C.
    Quit,
    Other,
}

/// Classify a raw terminal event.
pub fn map_event(event: &Event) -> GameInput {
    match event {
        Event::Key(key) => map_key(key),
        Event::Mouse(mouse) => map_mouse(mouse),
        _ => GameInput::Other,
    }
}

fn map_key(key: &KeyEvent) -> GameInput {
    // Ignore release/repeat so one keypress is one flap
    if key.kind != KeyEventKind::Press {
        return GameInput::Other;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => GameInput::Quit,
        KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Up => GameInput::Primary,
        KeyCode::Char('m') | KeyCode::Char('M') => GameInput::ToggleMute,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => GameInput::Quit,
        _ => GameInput::Other,
    }
}

fn map_mouse(mouse: &MouseEvent) -> GameInput {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => GameInput::Primary,
        _ => GameInput::Other,
    }
}

/// Apply an input to the game. Returns false when the player asked to quit.
pub fn handle_input(game: &mut GameCoordinator, input: GameInput) -> bool {
    match input {
        GameInput::Primary => {
            let outcome = game.primary_action();
            if outcome != ActionOutcome::Ignored {
                tracing::trace!(?outcome, "primary action");
            }
            true
        }
        GameInput::ToggleMute => {
            game.toggle_mute();
            true
        }
        GameInput::Quit => false,
        GameInput::Other => true,
    }
}
