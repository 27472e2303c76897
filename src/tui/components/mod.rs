//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as parameters:
//! - `TitleBar`: move counter, clock and status line
//! - `Footer`: win banner, clock-start hint or key help
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `Board`: the card grid. `BoardState` keeps the cursor and the card
//!   areas of the last frame for mouse hit testing.
//!
//! Components receive external data as "props" (function parameters or
//! struct fields), never by reaching into `App` themselves:
//!
//! ```rust,ignore
//! // Good: Dependencies are explicit
//! Board::new(&mut tui.board, &app.session.cards).render(frame, area);
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs        (this file)
//! ├── title_bar.rs  (top status bar)
//! ├── board.rs      (card grid)
//! └── footer.rs     (banner / help)
//! ```

pub mod board;
pub mod footer;
mod title_bar;

pub use board::{Board, BoardEvent, BoardState};
pub use footer::{Footer, FooterMode};
pub use title_bar::TitleBar;
