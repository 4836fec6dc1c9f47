//! Terminal game renderer.
//!
//! A small, game-oriented rendering layer: [`GameView`] turns a
//! [`GameSnapshot`](core::GameSnapshot) into a [`FrameBuffer`] of styled cells,
//! and [`TerminalRenderer`] flushes framebuffers to the terminal, writing only
//! what changed since the previous frame.
//!
//! Board cells are drawn two columns wide to compensate for glyph aspect ratio.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use termtris_core as core;
pub use termtris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{piece_color, AnchorY, GameView, HudView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
