//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no external dependencies, so they can be used
//! by the simulation, the input mapping and the terminal view alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 is the top)
//! - Rows above the board (negative indices) are valid piece positions but are never stored
//!
//! # Speed Curve
//!
//! Gravity interval in milliseconds per row, by level:
//!
//! | Level | Interval |
//! |-------|----------|
//! | 1 | 1000ms |
//! | 2 | 900ms |
//! | 3 | 800ms |
//! | ... | -100ms per level |
//! | 10+ | 100ms (floor) |
//!
//! # Examples
//!
//! ```
//! use termtris_types::{GameAction, GamePhase, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let piece = PieceKind::T;
//! assert_eq!(PieceKind::from_id(piece.id()), Some(piece));
//!
//! assert_eq!(GameAction::HardDrop.as_str(), "hardDrop");
//!
//! assert!(GamePhase::Running.is_live());
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Default frame period for the terminal runner (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Gravity interval at level 1
pub const BASE_DROP_MS: u32 = 1000;

/// Gravity speed-up per level
pub const DROP_STEP_MS: u32 = 100;

/// Gravity interval floor
pub const DROP_INTERVAL_MIN_MS: u32 = 100;

/// Lines needed per level
pub const LINES_PER_LEVEL: u32 = 10;

/// Level at game start
pub const START_LEVEL: u32 = 1;

/// Points awarded per row of hard drop
pub const HARD_DROP_POINTS_PER_ROW: u32 = 2;

/// Points awarded per row of soft drop
pub const SOFT_DROP_POINTS_PER_ROW: u32 = 1;

/// Line clear scoring table, indexed by the number of rows cleared at once.
///
/// Points are multiplied by the current level.
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Horizontal kick offsets tried, in order, when a rotation does not fit.
pub const ROTATION_KICKS: [i8; 5] = [0, -1, 1, -2, 2];

/// The seven tetromino piece kinds
///
/// Each kind has a fixed spawn matrix and a board id (1-7) used when the grid
/// is exported to the presentation layer:
/// - **I** (1): cyan bar
/// - **J** (2): blue
/// - **L** (3): orange
/// - **O** (4): yellow square
/// - **S** (5): green
/// - **T** (6): purple
/// - **Z** (7): red
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds, in board id order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Board id of this kind (1-7). Zero is reserved for empty cells.
    ///
    /// ```
    /// use termtris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::I.id(), 1);
    /// assert_eq!(PieceKind::Z.id(), 7);
    /// ```
    pub fn id(&self) -> u8 {
        match self {
            PieceKind::I => 1,
            PieceKind::J => 2,
            PieceKind::L => 3,
            PieceKind::O => 4,
            PieceKind::S => 5,
            PieceKind::T => 6,
            PieceKind::Z => 7,
        }
    }

    /// Inverse of [`PieceKind::id`]. Returns `None` for 0 and anything above 7.
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1..=7 => Some(Self::ALL[(id - 1) as usize]),
            _ => None,
        }
    }

    /// Parse piece kind from string (case-insensitive)
    ///
    /// ```
    /// use termtris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "o" => Some(PieceKind::O),
            "s" => Some(PieceKind::S),
            "t" => Some(PieceKind::T),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Uppercase letter, used by the side panel and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::J => "J",
            PieceKind::L => "L",
            PieceKind::O => "O",
            PieceKind::S => "S",
            PieceKind::T => "T",
            PieceKind::Z => "Z",
        }
    }
}

/// Session lifecycle
///
/// ```text
/// NotStarted --start--> Running <--pause/resume--> Paused
///                          |
///                   spawn collision
///                          v
///                      GameOver --start/restart--> Running
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GamePhase {
    #[default]
    NotStarted,
    Running,
    Paused,
    GameOver,
}

impl GamePhase {
    /// True while a session is in progress (running or paused).
    pub fn is_live(&self) -> bool {
        matches!(self, GamePhase::Running | GamePhase::Paused)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::NotStarted => "notStarted",
            GamePhase::Running => "running",
            GamePhase::Paused => "paused",
            GamePhase::GameOver => "gameOver",
        }
    }
}

/// Commands delivered by the input collaborator
///
/// Every command is accepted in every phase; commands that make no sense in the
/// current phase are ignored by the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Drop piece one cell down (1 point when it moves)
    SoftDrop,
    /// Drop piece to its resting row and lock it (2 points per row)
    HardDrop,
    /// Rotate piece 90° clockwise, with horizontal kicks
    Rotate,
    /// Toggle pause
    Pause,
    /// Start a game from the title or game-over screen
    Start,
    /// Reset and start over from any phase
    Restart,
}

impl GameAction {
    /// camelCase name used in log fields
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::HardDrop => "hardDrop",
            GameAction::Rotate => "rotate",
            GameAction::Pause => "pause",
            GameAction::Start => "start",
            GameAction::Restart => "restart",
        }
    }
}

/// Emitted once per locked piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub kind: PieceKind,
    pub lines_cleared: u32,
    pub line_clear_score: u32,
    /// Points earned by the hard drop that caused this lock (0 for gravity locks).
    pub drop_score: u32,
    /// The follow-up spawn collided and ended the game.
    pub topped_out: bool,
}

/// A cell on the game board
///
/// - `None`: empty
/// - `Some(PieceKind)`: filled by a locked piece of that kind
pub type Cell = Option<PieceKind>;
