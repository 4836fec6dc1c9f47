//! Game state module - manages the complete game session
//!
//! This module ties together the board, pieces, piece generator and scoring.
//! It owns the session lifecycle ([`GamePhase`]), gravity timing, piece movement,
//! rotation, line clears and spawning.

use crate::pieces::{spawn_x, try_rotate, Shape};
use crate::scoring::{drop_interval_ms, drop_score, level_for_lines, line_clear_score};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::*;
use crate::{Board, PieceGenerator};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl Tetromino {
    /// Create a new tetromino at the spawn position (centred, top row)
    pub fn new(kind: PieceKind) -> Self {
        let shape = Shape::spawn(kind);
        Self {
            kind,
            shape,
            x: spawn_x(&shape),
            y: 0,
        }
    }

    /// Absolute board coordinates of the filled cells.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape.cells().map(|(dx, dy)| (self.x + dx, self.y + dy))
    }

    /// Check if the piece fits on the board at its current position
    pub fn is_valid(&self, board: &Board) -> bool {
        board.fits(&self.shape, self.x, self.y)
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Option<Tetromino>,
    next: Option<PieceKind>,
    generator: PieceGenerator,
    phase: GamePhase,
    /// Incremented every time a game is started.
    episode_id: u32,
    score: u32,
    level: u32,
    lines: u32,
    drop_interval_ms: u32,
    /// Timestamp of the last gravity step. `None` until the first tick after a
    /// start or resume, so paused time is never counted.
    last_drop_ms: Option<u64>,
    /// Last lock event (consumed by observers).
    last_event: Option<LockEvent>,
}

impl GameState {
    /// Create a new game with the given RNG seed. The game waits in
    /// [`GamePhase::NotStarted`] until [`GameState::start`] is called.
    pub fn new(seed: u32) -> Self {
        Self {
            board: Board::new(),
            active: None,
            next: None,
            generator: PieceGenerator::new(seed),
            phase: GamePhase::NotStarted,
            episode_id: 0,
            score: 0,
            level: START_LEVEL,
            lines: 0,
            drop_interval_ms: drop_interval_ms(START_LEVEL),
            last_drop_ms: None,
            last_event: None,
        }
    }

    /// Start a game from the title or game-over screen.
    ///
    /// Returns false (and does nothing) while a game is running or paused.
    pub fn start(&mut self) -> bool {
        if self.phase.is_live() {
            return false;
        }
        self.reset_session();
        self.phase = GamePhase::Running;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.spawn_piece();
        true
    }

    /// Abandon whatever is in progress and start a fresh game.
    pub fn restart(&mut self) {
        self.phase = GamePhase::NotStarted;
        self.start();
    }

    /// Running -> Paused. Returns false in any other phase.
    pub fn pause(&mut self) -> bool {
        if self.phase != GamePhase::Running {
            return false;
        }
        self.phase = GamePhase::Paused;
        true
    }

    /// Paused -> Running. The gravity baseline restarts at the next tick.
    pub fn resume(&mut self) -> bool {
        if self.phase != GamePhase::Paused {
            return false;
        }
        self.phase = GamePhase::Running;
        self.last_drop_ms = None;
        true
    }

    pub fn toggle_pause(&mut self) -> bool {
        match self.phase {
            GamePhase::Running => self.pause(),
            GamePhase::Paused => self.resume(),
            GamePhase::NotStarted | GamePhase::GameOver => false,
        }
    }

    fn reset_session(&mut self) {
        self.board.clear();
        self.active = None;
        self.next = None;
        self.score = 0;
        self.level = START_LEVEL;
        self.lines = 0;
        self.drop_interval_ms = drop_interval_ms(START_LEVEL);
        self.last_drop_ms = None;
        self.last_event = None;
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    /// Current gravity interval in milliseconds.
    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    pub fn active(&self) -> Option<Tetromino> {
        self.active
    }

    /// Queued piece shown in the preview.
    pub fn next_piece(&self) -> Option<PieceKind> {
        self.next
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);

        out.active = self.active.map(ActiveSnapshot::from);
        out.ghost_y = self.ghost_y();
        out.next = self.next;
        out.phase = self.phase;
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.drop_interval_ms = self.drop_interval_ms;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Promote the queued piece and queue a new one.
    ///
    /// When the promoted piece does not fit where it spawns, the game is over:
    /// the phase becomes [`GamePhase::GameOver`], no piece is active and the board
    /// is left untouched. Returns whether the spawn succeeded.
    pub fn spawn_piece(&mut self) -> bool {
        let kind = match self.next.take() {
            Some(kind) => kind,
            None => self.generator.next(),
        };
        self.next = Some(self.generator.next());

        let piece = Tetromino::new(kind);
        if !self.is_valid_move(&piece, 0, 0, None) {
            self.active = None;
            self.phase = GamePhase::GameOver;
            return false;
        }

        self.active = Some(piece);
        true
    }

    /// Would `piece`, offset by (dx, dy) and optionally replaced by `shape`, fit?
    ///
    /// Pure: the board and the piece are not modified.
    pub fn is_valid_move(&self, piece: &Tetromino, dx: i8, dy: i8, shape: Option<&Shape>) -> bool {
        let shape = shape.unwrap_or(&piece.shape);
        match (piece.x.checked_add(dx), piece.y.checked_add(dy)) {
            (Some(x), Some(y)) => self.board.fits(shape, x, y),
            _ => false,
        }
    }

    /// Shift the active piece if the target position is valid.
    pub(crate) fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        if self.phase != GamePhase::Running {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        if !self.is_valid_move(&active, dx, dy, None) {
            return false;
        }

        self.active = Some(Tetromino {
            x: active.x + dx,
            y: active.y + dy,
            ..active
        });
        true
    }

    pub fn move_left(&mut self) -> bool {
        self.try_move(-1, 0)
    }

    pub fn move_right(&mut self) -> bool {
        self.try_move(1, 0)
    }

    /// Move the active piece one row down.
    ///
    /// Returns false when blocked (or when no game is running); the piece is not
    /// locked here, that is up to the caller.
    pub fn move_down(&mut self) -> bool {
        self.try_move(0, 1)
    }

    /// Player-driven descent: one row, 1 point when it moves. Never locks.
    pub fn soft_drop(&mut self) -> bool {
        let moved = self.move_down();
        if moved {
            self.score = self.score.saturating_add(drop_score(1, false));
        }
        moved
    }

    /// Rotate the active piece clockwise, trying horizontal kicks.
    pub fn rotate(&mut self) -> bool {
        if self.phase != GamePhase::Running {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let result = try_rotate(&active.shape, |shape, dx| {
            self.is_valid_move(&active, dx, 0, Some(shape))
        });

        match result {
            Some((shape, dx)) => {
                self.active = Some(Tetromino {
                    shape,
                    x: active.x + dx,
                    ..active
                });
                true
            }
            None => false,
        }
    }

    /// Drop the active piece to its resting row and lock it.
    ///
    /// Returns the drop points (2 per row descended); line clear points are
    /// added separately by the lock.
    pub fn hard_drop(&mut self) -> u32 {
        if self.phase != GamePhase::Running || self.active.is_none() {
            return 0;
        }

        let mut rows: u32 = 0;
        while self.move_down() {
            rows += 1;
        }

        let points = drop_score(rows, true);
        self.score = self.score.saturating_add(points);
        self.lock_active(points);
        points
    }

    /// Lock the active piece onto the board, clear lines and spawn the next piece.
    pub fn lock_piece(&mut self) {
        self.lock_active(0);
    }

    fn lock_active(&mut self, drop_points: u32) {
        let Some(active) = self.active.take() else {
            return;
        };

        self.board
            .lock_shape(&active.shape, active.x, active.y, active.kind);

        let score_before = self.score;
        let lines_cleared = self.clear_lines();
        let line_clear_score = self.score - score_before;

        let spawned = self.spawn_piece();

        self.last_event = Some(LockEvent {
            kind: active.kind,
            lines_cleared,
            line_clear_score,
            drop_score: drop_points,
            topped_out: !spawned,
        });
    }

    /// Remove full rows and update score, lines, level and gravity.
    ///
    /// Points use the level in effect before this clear. Returns the number of rows removed.
    pub fn clear_lines(&mut self) -> u32 {
        let rows = self.board.clear_full_rows().len();
        if rows == 0 {
            return 0;
        }

        self.score = self
            .score
            .saturating_add(line_clear_score(rows, self.level));
        self.lines = self.lines.saturating_add(rows as u32);

        let level = level_for_lines(self.lines);
        if level > self.level {
            self.level = level;
            self.drop_interval_ms = drop_interval_ms(level);
        }

        rows as u32
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Row the active piece would rest on after a hard drop (for the ghost piece).
    pub fn ghost_y(&self) -> Option<i8> {
        let active = self.active?;
        let mut dy: i8 = 0;
        while self.is_valid_move(&active, 0, dy + 1, None) {
            dy += 1;
        }
        Some(active.y + dy)
    }

    /// Frame scheduler entry point.
    ///
    /// `now_ms` is a monotonic timestamp. Once more than the drop interval has
    /// passed since the last gravity step, the active piece moves down one row, or
    /// locks when it cannot. Returns whether a gravity step happened.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if self.phase != GamePhase::Running {
            return false;
        }

        let Some(last) = self.last_drop_ms else {
            self.last_drop_ms = Some(now_ms);
            return false;
        };

        if now_ms.saturating_sub(last) <= u64::from(self.drop_interval_ms) {
            return false;
        }

        if !self.move_down() {
            self.lock_piece();
        }
        self.last_drop_ms = Some(now_ms);
        true
    }

    /// Apply an input command. Returns whether anything changed.
    ///
    /// Commands that do not apply to the current phase are ignored. On the title
    /// and game-over screens a hard drop starts a new game.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::HardDrop => match self.phase {
                GamePhase::Running => {
                    self.hard_drop();
                    true
                }
                GamePhase::Paused => false,
                GamePhase::NotStarted | GamePhase::GameOver => self.start(),
            },
            GameAction::Rotate => self.rotate(),
            GameAction::Pause => self.toggle_pause(),
            GameAction::Start => self.start(),
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
