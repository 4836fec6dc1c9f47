//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the rules, state management and simulation of the game.
//! It has no dependencies on terminal I/O or storage, so the same seed always
//! produces the same game.
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid with collision checks and row clearing
//! - [`game_state`]: session lifecycle, active piece, scoring and gravity timing
//! - [`pieces`]: piece matrices, clockwise rotation and horizontal kicks
//! - [`rng`]: seeded uniform piece generation
//! - [`scoring`]: line clear points, drop points, level and speed curve
//! - [`snapshot`]: plain copy of the state for rendering
//!
//! # Game Rules
//!
//! - Pieces are drawn uniformly at random, with a one-piece preview.
//! - Rotation is clockwise only; a blocked rotation tries column offsets 0, -1, +1, -2, +2.
//! - A piece that cannot fall further locks on the next gravity step (no lock delay).
//! - Full rows are removed and everything above moves down.
//! - When a new piece cannot be placed at the top, the game is over.
//!
//! # Example
//!
//! ```
//! use termtris_core::GameState;
//! use termtris_types::{GameAction, GamePhase};
//!
//! let mut game = GameState::new(12345);
//! game.start();
//! assert_eq!(game.phase(), GamePhase::Running);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::HardDrop);
//!
//! // A hard drop from the top row always descends, and each row is worth 2 points.
//! assert!(game.score() > 0);
//! ```
//!
//! # Timing
//!
//! Call [`GameState::tick`](game_state::GameState::tick) every frame with a
//! monotonic timestamp in milliseconds. Gravity starts at 1000ms per row and gets
//! 100ms faster per level, down to 100ms.

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use termtris_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, ClearedRows};
pub use game_state::{GameState, Tetromino};
pub use pieces::{spawn_x, try_rotate, Shape};
pub use rng::{PieceGenerator, SimpleRng};
pub use scoring::{drop_interval_ms, drop_score, level_for_lines, line_clear_score};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
