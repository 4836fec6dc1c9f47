use termtris::core::GameState;
use termtris::term::{piece_color, AnchorY, GameView, HudView, Viewport};
use termtris::types::{GameAction, GamePhase, PieceKind};

fn hud() -> HudView {
    HudView::default()
}

#[test]
fn term_view_renders_border_corners() {
    let state = GameState::new(1);
    let snap = state.snapshot();
    let view = GameView::default();

    // With cell_w=2 and cell_h=1:
    // board pixels = 10*2 by 20*1 => 20x20
    // plus border => 22x22
    let fb = view.render(&snap, &hud(), Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut snap = GameState::new(1).snapshot();
    snap.phase = GamePhase::Running;
    snap.board[19][0] = PieceKind::I.id();

    let fb = GameView::default().render(&snap, &hud(), Viewport::new(22, 22));

    // Inside border: (1,1) origin. Each cell is 2 chars wide.
    let cell = fb.get(1, 20).unwrap();
    assert_eq!(cell.ch, '█');
    assert_eq!(cell.style.fg, piece_color(PieceKind::I));
    assert_eq!(fb.get(2, 20).unwrap().ch, '█');
    assert_ne!(fb.get(3, 20).unwrap().ch, '█');
}

#[test]
fn term_view_draws_active_piece_and_ghost() {
    let mut state = GameState::new(3);
    state.start();
    let snap = state.snapshot();
    let active = snap.active.unwrap();
    let ghost_y = snap.ghost_y.unwrap();
    assert!(ghost_y > active.y + 4);

    let fb = GameView::default()
        .with_anchor_y(AnchorY::Top)
        .render(&snap, &hud(), Viewport::new(22, 22));

    for (x, y) in active.cells() {
        let cell = fb.get(1 + 2 * x as u16, 1 + y as u16).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, piece_color(active.kind));
    }
    for (dx, dy) in active.shape.cells() {
        let x = (active.x + dx) as u16;
        let y = (ghost_y + dy) as u16;
        assert_eq!(fb.get(1 + 2 * x, 1 + y).unwrap().ch, '░');
    }
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut gs = GameState::new(1);
    gs.start();
    let mut snap = gs.snapshot();
    snap.score = 1234;
    snap.level = 2;
    snap.lines = 10;

    let hud = HudView { high_score: 98765 };
    let fb = GameView::default().render(&snap, &hud, Viewport::new(60, 22));

    for label in ["SCORE", "BEST", "LEVEL", "LINES", "NEXT", "1234", "98765"] {
        assert!(fb.contains_text(label), "missing {label}");
    }
}

#[test]
fn term_view_best_never_lags_current_score() {
    let mut snap = GameState::new(1).snapshot();
    snap.phase = GamePhase::Running;
    snap.score = 5000;
    let fb = GameView::default().render(&snap, &HudView { high_score: 10 }, Viewport::new(60, 22));
    // SCORE and BEST both show 5000.
    let rows_with_score = (0..fb.height())
        .filter(|&y| fb.row_text(y).contains("5000"))
        .count();
    assert_eq!(rows_with_score, 2);
}

#[test]
fn term_view_previews_next_piece_shape() {
    let mut snap = GameState::new(1).snapshot();
    snap.phase = GamePhase::Running;
    snap.next = Some(PieceKind::O);

    let fb = GameView::default()
        .with_anchor_y(AnchorY::Top)
        .render(&snap, &hud(), Viewport::new(60, 22));

    // Frame spans x=19..40, panel starts at 43; four 3-row entries put NEXT on row 12.
    assert!(fb.row_text(12).contains("NEXT"));
    for (x, y) in [(43, 13), (46, 13), (43, 14), (46, 14)] {
        let cell = fb.get(x, y).unwrap();
        assert_eq!(cell.ch, '█', "({x},{y})");
        assert_eq!(cell.style.fg, piece_color(PieceKind::O));
    }
    assert_ne!(fb.get(47, 13).unwrap().ch, '█');
}

#[test]
fn term_view_overlays_follow_phase() {
    let view = GameView::default();
    let vp = Viewport::new(60, 24);
    let mut state = GameState::new(11);

    let fb = view.render(&state.snapshot(), &hud(), vp);
    assert!(fb.contains_text("PRESS ENTER"));

    state.apply_action(GameAction::Start);
    let fb = view.render(&state.snapshot(), &hud(), vp);
    assert!(!fb.contains_text("PRESS ENTER"));
    assert!(!fb.contains_text("PAUSED"));

    state.apply_action(GameAction::Pause);
    let fb = view.render(&state.snapshot(), &hud(), vp);
    assert!(fb.contains_text("PAUSED"));

    state.apply_action(GameAction::Pause);
    while state.phase() == GamePhase::Running {
        state.apply_action(GameAction::HardDrop);
    }
    let fb = view.render(&state.snapshot(), &hud(), vp);
    assert!(fb.contains_text("GAME OVER"));
    assert!(fb.contains_text(&format!("SCORE {}", state.score())));
}

#[test]
fn term_view_game_over_text_covers_the_stack() {
    let mut state = GameState::new(11);
    state.start();
    while state.phase() == GamePhase::Running {
        state.apply_action(GameAction::HardDrop);
    }
    let snap = state.snapshot();
    assert!(snap.board.iter().flatten().any(|&id| id != 0));

    let fb = GameView::default().render(&snap, &hud(), Viewport::new(60, 24));
    // Frame at y=1, 22 rows tall; the four overlay lines start at row 10.
    let row = fb.row_text(11);
    assert!(row.contains(&format!(" SCORE {} ", state.score())), "{row:?}");
}

#[test]
fn term_view_centers_board_by_default_on_tall_viewports() {
    let snap = GameState::new(1).snapshot();

    // Board frame is 22 rows tall (20 + border).
    let fb = GameView::default().render(&snap, &hud(), Viewport::new(22, 30));

    // start_y = (30 - 22) / 2 = 4 => top-left corner at (0,4).
    assert_eq!(fb.get(0, 4).unwrap().ch, '┌');
}

#[test]
fn term_view_can_anchor_board_to_top() {
    let snap = GameState::new(1).snapshot();
    let view = GameView::default().with_anchor_y(AnchorY::Top);

    let fb = view.render(&snap, &hud(), Viewport::new(22, 30));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
}
