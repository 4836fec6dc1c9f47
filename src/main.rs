//! Terminal runner (default binary).
//!
//! Wires the pieces together: crossterm input, the simulation in
//! `termtris::core`, the framebuffer renderer, and the best-score file.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use termtris::core::{GameSnapshot, GameState};
use termtris::input::{translate_event, InputCommand};
use termtris::store::{FileHighScoreStore, HighScoreStore, HighScoreTracker};
use termtris::term::{FrameBuffer, GameView, HudView, TerminalRenderer, Viewport};
use termtris::types::{GameAction, GamePhase, FRAME_MS};

#[derive(Debug, Parser)]
#[command(name = "termtris", version, about = "Falling-block puzzle game for the terminal")]
struct Args {
    /// Seed for the piece sequence (random when omitted).
    #[arg(long)]
    seed: Option<u32>,

    /// Where the best score is kept [default: $XDG_CONFIG_HOME/termtris/highscore].
    #[arg(long, value_name = "PATH")]
    high_score_file: Option<PathBuf>,

    /// Write logs to this file (RUST_LOG selects the level, default info).
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Frame period in milliseconds.
    #[arg(
        long,
        default_value_t = FRAME_MS,
        value_parser = clap::value_parser!(u32).range(1..=1000)
    )]
    frame_ms: u32,

    /// Skip the title screen and start playing immediately.
    #[arg(long)]
    no_title: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_deref())?;

    let seed = args.seed.unwrap_or_else(clock_seed);
    let store = match &args.high_score_file {
        Some(path) => FileHighScoreStore::new(path),
        None => FileHighScoreStore::at_default_path(),
    };
    info!(seed, path = %store.path().display(), frame_ms = args.frame_ms, "termtris starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &args, seed, store);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// File logging only: the terminal belongs to the game.
fn init_logging(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("cannot open log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}

/// Game plus the bookkeeping that reacts to its changes.
struct Session<S: HighScoreStore> {
    game: GameState,
    tracker: HighScoreTracker<S>,
    phase: GamePhase,
}

impl<S: HighScoreStore> Session<S> {
    fn new(game: GameState, tracker: HighScoreTracker<S>) -> Self {
        let phase = game.phase();
        Self {
            game,
            tracker,
            phase,
        }
    }

    fn apply(&mut self, action: GameAction) {
        if self.game.apply_action(action) {
            debug!(action = action.as_str(), "action applied");
        }
        self.settle();
    }

    fn tick(&mut self, now_ms: u64) {
        self.game.tick(now_ms);
        self.settle();
    }

    /// Log what changed and offer the score to the tracker.
    fn settle(&mut self) {
        if let Some(ev) = self.game.take_last_event() {
            if ev.lines_cleared > 0 {
                info!(
                    lines = ev.lines_cleared,
                    points = ev.line_clear_score,
                    total_lines = self.game.lines(),
                    level = self.game.level(),
                    "lines cleared"
                );
            }
        }

        let phase = self.game.phase();
        if phase != self.phase {
            match phase {
                GamePhase::Running if !self.phase.is_live() => {
                    info!(episode = self.game.episode_id(), "game started")
                }
                GamePhase::GameOver => info!(
                    score = self.game.score(),
                    lines = self.game.lines(),
                    level = self.game.level(),
                    "game over"
                ),
                _ => debug!(from = self.phase.as_str(), to = phase.as_str(), "phase changed"),
            }
            self.phase = phase;
        }

        self.tracker.observe(self.game.score());
    }
}

fn run<S: HighScoreStore>(
    term: &mut TerminalRenderer,
    args: &Args,
    seed: u32,
    store: S,
) -> Result<()> {
    let clock = Instant::now();
    let mut session = Session::new(GameState::new(seed), HighScoreTracker::new(store));
    if args.no_title {
        session.apply(GameAction::Start);
    }

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();
    let frame = Duration::from_millis(u64::from(args.frame_ms));
    let mut next_frame = Instant::now();

    loop {
        // Render.
        session.game.snapshot_into(&mut snap);
        let hud = HudView {
            high_score: session.tracker.best(),
        };
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, &hud, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input until the next frame is due.
        next_frame += frame;
        loop {
            let timeout = next_frame.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                break;
            }
            let ev = event::read()?;
            if matches!(ev, Event::Resize(..)) {
                term.invalidate();
            }
            match translate_event(&ev) {
                Some(InputCommand::Quit) => {
                    info!(score = session.game.score(), "quit");
                    return Ok(());
                }
                Some(InputCommand::Action(action)) => session.apply(action),
                None => {}
            }
        }

        // Do not try to catch up after a stall.
        let now = Instant::now();
        if next_frame < now {
            next_frame = now;
        }

        session.tick(clock.elapsed().as_millis() as u64);
    }
}
