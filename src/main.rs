//! Terminal ball-drop runner (default binary).
//!
//! Owns the single engine instance and drives it at a fixed ~60 Hz cadence:
//! render, poll input until the next tick boundary, tick. Drop/restart
//! presses land between ticks; the engine defines out-of-phase presses as
//! no-ops, so input needs no further gating here.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_dropshot::core::GameState;
use tui_dropshot::input::{handle_key_event, should_quit};
use tui_dropshot::scores::{default_path, ScoreRecorder};
use tui_dropshot::term::{GameView, TerminalRenderer, Viewport};
use tui_dropshot::types::{GameAction, TICK_MS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game = GameState::new();
    game.start();

    let view = GameView::default();
    let mut recorder = ScoreRecorder::open(default_path());
    let player = std::env::var("USER").unwrap_or_else(|_| String::from("player"));

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(u64::from(TICK_MS));
    // One recorder call per round, at the tick where the round ends.
    let mut round_recorded = false;

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let snap = game.snapshot();
        let best = recorder.board().top_score().unwrap_or(0);
        let fb = view.render(&snap, best, Viewport::new(w, h));
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        if action == GameAction::Restart {
                            round_recorded = false;
                        }
                        game.apply_action(action);
                    }
                }
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            game.tick();

            if game.game_over() && !round_recorded {
                round_recorded = true;
                if game.score() > 0 {
                    recorder.record(game.score(), &player);
                }
            }
        }
    }
}
