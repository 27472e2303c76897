//! # Core Game Logic
//!
//! This module contains the rules of the game.
//! It knows nothing about any specific UI technology or about timers.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (session)      │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │ Effect
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui + │
//!                         │   tokio)   │
//!                         └────────────┘
//! ```
//!
//! Deferred work (the mismatch flip-back and the one-second clock) is
//! requested through `Effect` and performed by the adapter, which feeds
//! the result back in as another `Action`.
//!
//! ## Modules
//!
//! - [`card`]: `Card` and deck dealing
//! - [`state`]: `Session` and its owner `App`
//! - [`action`]: `Action`, `Effect` and the `update()` reducer
//! - [`config`]: layered settings

pub mod action;
pub mod card;
pub mod config;
pub mod state;
