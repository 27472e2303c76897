//! # TitleBar Component
//!
//! Top status bar: move counter, matched pairs, clock and the last event.
//!
//! Stateless: it receives all data as props and has no internal state.
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(session.move_count, session.elapsed_seconds, "Match!".into())
//!     .with_pairs(session.matched_pairs(), app.pairs);
//! title_bar.render(frame, area);
//! ```
//!
//! ## Conditional Formatting
//!
//! 1. **Status message**: `"Concentration | Moves: 3 | Pairs: 1/10 | Time: 12s | Match!"`
//! 2. **Default**: `"Concentration | Moves: 3 | Pairs: 1/10 | Time: 12s"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

pub struct TitleBar {
    pub move_count: u32,
    pub elapsed_seconds: u64,
    pub matched_pairs: usize,
    pub total_pairs: usize,
    /// Transient status (e.g. "Match!", "No match")
    pub status_message: String,
}

impl TitleBar {
    pub fn new(move_count: u32, elapsed_seconds: u64, status_message: String) -> Self {
        Self {
            move_count,
            elapsed_seconds,
            matched_pairs: 0,
            total_pairs: 0,
            status_message,
        }
    }

    pub fn with_pairs(mut self, matched: usize, total: usize) -> Self {
        self.matched_pairs = matched;
        self.total_pairs = total;
        self
    }

    fn text(&self) -> String {
        let counters = format!(
            "Concentration | Moves: {} | Pairs: {}/{} | Time: {}s",
            self.move_count, self.matched_pairs, self.total_pairs, self.elapsed_seconds
        );
        if self.status_message.is_empty() {
            counters
        } else {
            format!("{} | {}", counters, self.status_message)
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(Span::styled(
            self.text(),
            Style::default().add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(line, area);
    }
}
