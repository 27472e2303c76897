//! # Application State
//!
//! Core game state. This module contains domain logic only,
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── session: Session             // the current game, replaced on reset
//! │   ├── cards: Vec<Card>         // grid order, fixed after dealing
//! │   ├── pending_flips: Vec<usize> // 0..=2 indices awaiting resolution
//! │   ├── move_count: u32          // resolution attempts started
//! │   ├── elapsed_seconds: u64     // clock display
//! │   ├── timer_active: bool       // clock running?
//! │   ├── is_over: bool            // every card matched
//! │   └── generation: u64          // tags deferred callbacks
//! ├── pairs: usize                 // deck size for new games
//! ├── rng: StdRng                  // shuffle source
//! └── status_message: String       // status bar text
//! ```
//!
//! State changes only happen through `update(app, action)` in action.rs.

use std::time::Duration;

use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::core::card::{Card, deck_from_values, generate_deck};
use crate::core::config::ResolvedConfig;

/// A second flip starts resolution; nothing can be flipped past this.
pub const MAX_PENDING_FLIPS: usize = 2;

/// How long a mismatched pair stays face-up before flipping back.
pub const MISMATCH_DELAY: Duration = Duration::from_secs(1);

#[derive(Debug, Clone)]
pub struct Session {
    pub cards: Vec<Card>,
    pub pending_flips: Vec<usize>,
    pub move_count: u32,
    pub elapsed_seconds: u64,
    pub timer_active: bool,
    pub is_over: bool,
    /// Incremented on every new game. Deferred work carries the generation
    /// it was scheduled under and is dropped if it no longer matches.
    pub generation: u64,
}

impl Session {
    pub fn new(cards: Vec<Card>, generation: u64) -> Self {
        Self {
            cards,
            pending_flips: Vec::with_capacity(MAX_PENDING_FLIPS),
            move_count: 0,
            elapsed_seconds: 0,
            timer_active: false,
            is_over: false,
            generation,
        }
    }

    /// Level condition for the one-second clock.
    pub fn clock_should_run(&self) -> bool {
        self.timer_active && !self.is_over
    }

    /// Two cards are face-up and waiting on match/mismatch resolution.
    pub fn awaiting_resolution(&self) -> bool {
        self.pending_flips.len() >= MAX_PENDING_FLIPS
    }

    pub fn all_matched(&self) -> bool {
        !self.cards.is_empty() && self.cards.iter().all(|c| c.is_matched)
    }

    pub fn matched_pairs(&self) -> usize {
        self.cards.iter().filter(|c| c.is_matched).count() / 2
    }

    /// Whether the manual "start timer" affordance applies.
    pub fn can_start_timer(&self) -> bool {
        !self.cards.is_empty() && !self.timer_active && !self.is_over && self.move_count == 0
    }
}

pub struct App {
    pub session: Session,
    pub pairs: usize,
    pub rng: StdRng,
    pub status_message: String,
}

impl App {
    pub fn new(pairs: usize, mut rng: StdRng) -> Self {
        let cards = generate_deck(pairs, &mut rng);
        Self {
            session: Session::new(cards, 0),
            pairs,
            rng,
            status_message: String::from("Find all the pairs!"),
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(config.pairs, rng)
    }

    /// Start from a fixed deck instead of a shuffled one.
    ///
    /// Later new games deal shuffled decks of the same size.
    pub fn with_values(values: &[u32]) -> Self {
        Self {
            session: Session::new(deck_from_values(values), 0),
            pairs: values.len() / 2,
            rng: StdRng::seed_from_u64(0),
            status_message: String::from("Find all the pairs!"),
        }
    }

    /// Replace the whole session with a freshly dealt one.
    pub fn new_game(&mut self) {
        let generation = self.session.generation + 1;
        let cards = generate_deck(self.pairs, &mut self.rng);
        self.session = Session::new(cards, generation);
        self.status_message = String::from("New game");
        info!("New game: generation={}, pairs={}", generation, self.pairs);
    }
}
