//! # Actions
//!
//! Everything that can happen in a game becomes an `Action`.
//! Player flips a card? That's `Action::FlipCard(index)`.
//! The clock fires? That's `Action::Tick { generation }`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state and returns an `Effect` describing deferred work the adapter
//! must arrange. No timers or I/O here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Resolution of a pair and win detection happen synchronously inside
//! `update`, at the end of the flip that caused them.

use log::{debug, info};

use crate::core::state::{App, MAX_PENDING_FLIPS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Player picked the card at this grid index.
    FlipCard(usize),
    /// Mismatch display time elapsed for the session with this generation.
    FlipBack { generation: u64 },
    /// One second of wall-clock time for the session with this generation.
    Tick { generation: u64 },
    /// Manual clock start on a fresh board.
    StartTimer,
    NewGame,
    Quit,
}

/// Deferred work requested by `update`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Send `Action::FlipBack { generation }` after `MISMATCH_DELAY`.
    ScheduleFlipBack { generation: u64 },
    /// The session was replaced; pending callbacks belong to a dead game.
    CancelDeferred,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::FlipCard(index) => flip_card(app, index),
        Action::FlipBack { generation } => {
            flip_back(app, generation);
            Effect::None
        }
        Action::Tick { generation } => {
            tick(app, generation);
            Effect::None
        }
        Action::StartTimer => {
            if app.session.can_start_timer() {
                app.session.timer_active = true;
                app.status_message = String::from("Clock started");
                debug!("Timer started manually (generation={})", app.session.generation);
            }
            Effect::None
        }
        Action::NewGame => {
            app.new_game();
            Effect::CancelDeferred
        }
        Action::Quit => Effect::Quit,
    }
}

fn flip_card(app: &mut App, index: usize) -> Effect {
    let session = &mut app.session;

    if session.is_over || session.awaiting_resolution() {
        return Effect::None;
    }
    let Some(card) = session.cards.get_mut(index) else {
        debug!("Ignoring flip of out-of-range index {}", index);
        return Effect::None;
    };
    if card.is_flipped || card.is_matched {
        return Effect::None;
    }

    // The clock starts on the first real flip, not when the board is dealt.
    if !session.timer_active {
        session.timer_active = true;
    }
    card.is_flipped = true;
    session.pending_flips.push(index);

    if session.pending_flips.len() == MAX_PENDING_FLIPS {
        resolve(app)
    } else {
        Effect::None
    }
}

fn resolve(app: &mut App) -> Effect {
    let session = &mut app.session;
    let (first, second) = (session.pending_flips[0], session.pending_flips[1]);

    // Counts attempts started, so a mismatch counts before it flips back.
    session.move_count += 1;

    if session.cards[first].value == session.cards[second].value {
        session.cards[first].is_matched = true;
        session.cards[second].is_matched = true;
        session.pending_flips.clear();
        debug!(
            "Match: cards {} and {} (value {})",
            first, second, session.cards[first].value
        );
        app.status_message = String::from("Match!");
        check_win(app);
        Effect::None
    } else {
        debug!("Mismatch: cards {} and {}", first, second);
        app.status_message = String::from("No match");
        Effect::ScheduleFlipBack {
            generation: session.generation,
        }
    }
}

/// Hides an unmatched pair. Matching happens in `resolve`, so this can't win.
fn flip_back(app: &mut App, generation: u64) {
    let session = &mut app.session;
    if generation != session.generation {
        debug!(
            "Dropping stale flip-back (generation={}, current={})",
            generation, session.generation
        );
        return;
    }
    if !session.awaiting_resolution() {
        return;
    }

    for index in session.pending_flips.drain(..) {
        let card = &mut session.cards[index];
        if !card.is_matched {
            card.is_flipped = false;
        }
    }
}

fn tick(app: &mut App, generation: u64) {
    let session = &mut app.session;
    if generation != session.generation || !session.clock_should_run() {
        debug!(
            "Dropping tick (generation={}, current={}, running={})",
            generation,
            session.generation,
            session.clock_should_run()
        );
        return;
    }
    session.elapsed_seconds += 1;
}

/// Stops the clock once, at the moment the last pair is matched.
fn check_win(app: &mut App) {
    let session = &mut app.session;
    if session.is_over || !session.all_matched() {
        return;
    }
    session.is_over = true;
    session.timer_active = false;
    app.status_message = String::from("You Won!");
    info!(
        "Game won: generation={}, moves={}, seconds={}",
        session.generation, session.move_count, session.elapsed_seconds
    );
}
