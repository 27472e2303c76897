//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the board,
//! translates keyboard and mouse events into core `Action` values and runs
//! the deferred work the core asks for.
//!
//! This is the only module that knows about ratatui, crossterm and tokio.
//!
//! ## Event Loop
//!
//! A single loop owns the `App`. Terminal events and timer callbacks both
//! arrive as actions and go through [`scheduler::dispatch`], one at a time,
//! so there is no shared mutable state between tasks:
//!
//! ```text
//! terminal ──TuiEvent──► BoardState ──Action──┐
//!                                             ├─► dispatch ─► update(app)
//! tokio timers ───────mpsc Action─────────────┘        │
//!        ▲                                             │ Effect
//!        └──────────── Scheduler ◄─────────────────────┘
//! ```
//!
//! The loop only redraws after an event or a timer action changed something.

mod component;
pub mod components;
pub mod event;
pub mod scheduler;
mod ui;

use log::info;
use std::io::stdout;
use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::core::action::{Action, Effect};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{BoardEvent, BoardState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::scheduler::{Scheduler, dispatch};

const POLL_TIMEOUT: Duration = Duration::from_millis(50);

/// TUI-specific presentation state (not part of core game logic)
pub struct TuiState {
    pub board: BoardState,
}

impl TuiState {
    pub fn new(columns: usize) -> Self {
        Self {
            board: BoardState::new(columns),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

/// Runs the terminal restore when `run` returns, including early `?` exits.
struct RestoreGuard {
    restore: fn(),
}

impl RestoreGuard {
    fn new(restore: fn()) -> Self {
        Self { restore }
    }
}

impl Drop for RestoreGuard {
    fn drop(&mut self) {
        (self.restore)();
    }
}

/// Map a terminal event to a core action, updating TUI-local state on the way.
fn action_for_event(event: &TuiEvent, tui: &mut TuiState) -> Option<Action> {
    match event {
        TuiEvent::Quit | TuiEvent::ForceQuit => Some(Action::Quit),
        TuiEvent::NewGame => Some(Action::NewGame),
        TuiEvent::StartTimer => Some(Action::StartTimer),
        TuiEvent::Resize => None,
        _ => tui
            .board
            .handle_event(event)
            .map(|BoardEvent::Flip(index)| Action::FlipCard(index)),
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new(config.columns);
    info!(
        "Starting game: pairs={}, columns={}, seeded={}",
        config.pairs,
        config.columns,
        config.seed.is_some()
    );

    let mut terminal = ratatui::init();
    let _restore_guard = RestoreGuard::new(ratatui::restore);
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from timer tasks. Dropping the scheduler aborts
    // its tasks, so an error out of the loop leaves nothing running.
    let (tx, rx) = mpsc::channel();
    let mut scheduler = Scheduler::new();

    let mut needs_redraw = true; // Force first frame

    loop {
        tui.board.card_count = app.session.cards.len();

        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        // Process first event + drain ALL pending events before next draw
        let first_event = poll_event_timeout(POLL_TIMEOUT);
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            needs_redraw = true;
            if let Some(action) = action_for_event(&event, &mut tui)
                && dispatch(&mut app, action, &mut scheduler, &tx) == Effect::Quit
            {
                should_quit = true;
            }
        }

        if should_quit {
            break;
        }

        // Handle timer actions (flip-backs and clock ticks)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            dispatch(&mut app, action, &mut scheduler, &tx);
        }
    }

    scheduler.cancel_all();
    info!(
        "Exiting: generation={}, moves={}, seconds={}, over={}",
        app.session.generation,
        app.session.move_count,
        app.session.elapsed_seconds,
        app.session.is_over
    );
    Ok(())
}
