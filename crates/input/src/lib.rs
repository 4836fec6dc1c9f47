//! Terminal input module.
//!
//! Maps `crossterm` events into [`crate::types::GameAction`] values or a quit
//! request. Timing is left to the terminal: key presses and auto-repeats are
//! both turned into actions, so holding a key keeps moving the piece.

pub mod map;

pub use termtris_types as types;

pub use map::{handle_key_event, should_quit};

use crossterm::event::Event;

use crate::types::GameAction;

/// What one terminal event asks the game loop to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCommand {
    Action(GameAction),
    Quit,
}

/// Translate a terminal event. Non-key events and unmapped keys yield `None`.
pub fn translate_event(event: &Event) -> Option<InputCommand> {
    let Event::Key(key) = event else {
        return None;
    };
    if should_quit(*key) {
        return Some(InputCommand::Quit);
    }
    handle_key_event(*key).map(InputCommand::Action)
}
