//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, Shape};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{GamePhase, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

const PLAY_BG: Rgb = Rgb::new(10, 10, 21);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Data shown beside the board that does not live in the game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HudView {
    pub high_score: u32,
}

/// A lightweight terminal renderer for the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

/// Where the board frame landed on screen.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl GameView {
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// Callers can reuse one framebuffer across frames; it is only resized when
    /// the viewport changes.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        hud: &HudView,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::new(SCREEN_BG, SCREEN_BG).cell(' '));

        let board_px_w = (BOARD_WIDTH as u16) * self.cell_w;
        let board_px_h = (BOARD_HEIGHT as u16) * self.cell_h;
        let frame = Frame {
            x: viewport.width.saturating_sub(board_px_w + 2) / 2,
            y: match self.anchor_y {
                AnchorY::Center => viewport.height.saturating_sub(board_px_h + 2) / 2,
                AnchorY::Top => 0,
            },
            w: board_px_w + 2,
            h: board_px_h + 2,
        };

        let play = CellStyle::new(PLAY_BG, PLAY_BG);
        fb.fill_rect(frame.x + 1, frame.y + 1, board_px_w, board_px_h, ' ', play);
        draw_border(fb, frame, CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG));

        // Locked cells.
        for (y, row) in snap.board.iter().enumerate() {
            for (x, &id) in row.iter().enumerate() {
                match PieceKind::from_id(id) {
                    Some(kind) => self.draw_block(fb, frame, x as i8, y as i8, kind),
                    None => self.fill_cell(fb, frame, x as i8, y as i8, '·', empty_style()),
                }
            }
        }

        if let Some(active) = snap.active {
            if let Some(ghost_y) = snap.ghost_y {
                if ghost_y != active.y {
                    let style = CellStyle::new(piece_color(active.kind), PLAY_BG).dim();
                    for (dx, dy) in active.shape.cells() {
                        self.fill_cell(fb, frame, active.x + dx, ghost_y + dy, '░', style);
                    }
                }
            }
            for (x, y) in active.cells() {
                self.draw_block(fb, frame, x, y, active.kind);
            }
        }

        self.draw_side_panel(fb, snap, hud, viewport, frame);

        match snap.phase {
            GamePhase::NotStarted => {
                draw_overlay(fb, frame, &["TERMTRIS", "", "PRESS ENTER"], None);
            }
            GamePhase::Paused => draw_overlay(fb, frame, &["PAUSED", "", "P TO RESUME"], None),
            GamePhase::GameOver => {
                let lines = ["GAME OVER", "SCORE", "", "ENTER TO PLAY"];
                draw_overlay(fb, frame, &lines, Some(snap.score));
            }
            GamePhase::Running => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, hud: &HudView, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, hud, viewport, &mut fb);
        fb
    }

    fn draw_block(&self, fb: &mut FrameBuffer, frame: Frame, x: i8, y: i8, kind: PieceKind) {
        let style = CellStyle::new(piece_color(kind), PLAY_BG).bold();
        self.fill_cell(fb, frame, x, y, '█', style);
    }

    /// Fill one board cell. Cells outside the 10x20 grid (above the top while
    /// spawning) are skipped.
    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        frame: Frame,
        x: i8,
        y: i8,
        ch: char,
        style: CellStyle,
    ) {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return;
        }
        let px = frame.x + 1 + (x as u16) * self.cell_w;
        let py = frame.y + 1 + (y as u16) * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        hud: &HudView,
        viewport: Viewport,
        frame: Frame,
    ) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 10 {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);

        let mut y = frame.y;
        for (name, v) in [
            ("SCORE", snap.score),
            ("BEST", hud.high_score.max(snap.score)),
            ("LEVEL", snap.level),
            ("LINES", snap.lines),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y.saturating_add(1), v, value);
            y = y.saturating_add(3);
        }

        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        if let Some(kind) = snap.next {
            let shape = Shape::spawn(kind);
            let style = CellStyle::new(piece_color(kind), SCREEN_BG).bold();
            for (dx, dy) in shape.cells() {
                let px = panel_x + (dx as u16) * self.cell_w;
                let py = y + (dy as u16) * self.cell_h;
                fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', style);
            }
        }
    }
}

/// Piece colours: I cyan, J blue, L orange, O yellow, S green, T purple, Z red.
pub fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(0x00, 0xf0, 0xf0),
        PieceKind::J => Rgb::new(0x00, 0x00, 0xf0),
        PieceKind::L => Rgb::new(0xf0, 0xa0, 0x00),
        PieceKind::O => Rgb::new(0xf0, 0xf0, 0x00),
        PieceKind::S => Rgb::new(0x00, 0xf0, 0x00),
        PieceKind::T => Rgb::new(0xa0, 0x00, 0xf0),
        PieceKind::Z => Rgb::new(0xf0, 0x00, 0x00),
    }
}

fn empty_style() -> CellStyle {
    CellStyle::new(Rgb::new(60, 60, 80), PLAY_BG).dim()
}

fn draw_border(fb: &mut FrameBuffer, f: Frame, style: CellStyle) {
    if f.w < 2 || f.h < 2 {
        return;
    }

    fb.put_char(f.x, f.y, '┌', style);
    fb.put_char(f.x + f.w - 1, f.y, '┐', style);
    fb.put_char(f.x, f.y + f.h - 1, '└', style);
    fb.put_char(f.x + f.w - 1, f.y + f.h - 1, '┘', style);

    for dx in 1..f.w - 1 {
        fb.put_char(f.x + dx, f.y, '─', style);
        fb.put_char(f.x + dx, f.y + f.h - 1, '─', style);
    }
    for dy in 1..f.h - 1 {
        fb.put_char(f.x, f.y + dy, '│', style);
        fb.put_char(f.x + f.w - 1, f.y + dy, '│', style);
    }
}

/// Centre a block of lines over the board. A `SCORE` line is followed by `score`
/// on the same row when given.
///
/// Each text row is blanked one column wider on both sides before drawing, so
/// board cells never show through between words.
fn draw_overlay(fb: &mut FrameBuffer, f: Frame, lines: &[&str], score: Option<u32>) {
    let style = CellStyle::new(Rgb::new(255, 255, 255), SCREEN_BG).bold();
    let top = f
        .y
        .saturating_add(f.h / 2)
        .saturating_sub(lines.len() as u16 / 2);

    for (i, text) in lines.iter().enumerate() {
        if text.is_empty() {
            continue;
        }
        let y = top + i as u16;
        let mut width = text.chars().count() as u16;
        let shown_score = score.filter(|_| *text == "SCORE");
        if let Some(s) = shown_score {
            width += 1 + digit_count(s);
        }
        let x = f.x.saturating_add(f.w.saturating_sub(width) / 2);
        fb.fill_rect(x.saturating_sub(1), y, width + 2, 1, ' ', style);
        let used = fb.put_str(x, y, text, style);
        if let Some(s) = shown_score {
            fb.put_u32(x + used + 1, y, s, style);
        }
    }
}

fn digit_count(mut n: u32) -> u16 {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_counts() {
        assert_eq!(digit_count(0), 1);
        assert_eq!(digit_count(9), 1);
        assert_eq!(digit_count(10), 2);
        assert_eq!(digit_count(123_456), 6);
    }

    #[test]
    fn locked_cells_use_piece_colour() {
        let mut snap = GameSnapshot::default();
        snap.phase = GamePhase::Running;
        snap.board[19][0] = PieceKind::L.id();
        let view = GameView::default().with_anchor_y(AnchorY::Top);
        let fb = view.render(&snap, &HudView::default(), Viewport::new(60, 24));

        // Frame at x=(60-22)/2=19; cell (0,19) at x=20..21, y=20.
        let cell = fb.get(20, 20).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, piece_color(PieceKind::L));
        assert_eq!(fb.get(21, 20).unwrap().ch, '█');
        assert_eq!(fb.get(22, 20).unwrap().ch, '·');
    }

    #[test]
    fn title_overlay_only_before_start() {
        let view = GameView::default();
        let mut snap = GameSnapshot::default();
        let fb = view.render(&snap, &HudView::default(), Viewport::new(80, 24));
        assert!(fb.contains_text("PRESS ENTER"));

        snap.phase = GamePhase::Running;
        let fb = view.render(&snap, &HudView::default(), Viewport::new(80, 24));
        assert!(!fb.contains_text("PRESS ENTER"));
    }

    #[test]
    fn game_over_overlay_shows_final_score() {
        let view = GameView::default();
        let mut snap = GameSnapshot::default();
        snap.phase = GamePhase::GameOver;
        snap.score = 1234;
        let fb = view.render(&snap, &HudView::default(), Viewport::new(80, 24));
        assert!(fb.contains_text("GAME OVER"));
        assert!(fb.contains_text("SCORE 1234"));
    }

    #[test]
    fn game_over_score_row_hides_locked_blocks() {
        let view = GameView::default().with_anchor_y(AnchorY::Top);
        let mut snap = GameSnapshot::default();
        snap.phase = GamePhase::GameOver;
        snap.score = 7;
        for row in snap.board.iter_mut() {
            row.fill(PieceKind::Z.id());
        }
        let fb = view.render(&snap, &HudView::default(), Viewport::new(22, 22));

        // Four lines centred on a 22-row frame start at row 9.
        let text = fb.row_text(10);
        assert!(text.contains(" SCORE 7 "), "{text:?}");
        assert!(fb.row_text(9).contains(" GAME OVER "));
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let view = GameView::default();
        let snap = GameSnapshot::default();
        let fb = view.render(&snap, &HudView::default(), Viewport::new(3, 2));
        assert_eq!(fb.width(), 3);
    }
}
