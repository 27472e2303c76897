//! # Footer Component
//!
//! Bottom panel. Shows, in priority order:
//!
//! 1. the win banner with the restart affordance once the game is over;
//! 2. the manual clock-start hint while the board is untouched;
//! 3. key help otherwise.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};

use crate::core::state::Session;
use crate::tui::component::Component;

const KEY_HELP: &str = "←↑↓→ move · Enter flip · n new game · q quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FooterMode {
    Won { move_count: u32, elapsed_seconds: u64 },
    Fresh,
    Playing,
}

impl FooterMode {
    pub fn for_session(session: &Session) -> Self {
        if session.is_over {
            FooterMode::Won {
                move_count: session.move_count,
                elapsed_seconds: session.elapsed_seconds,
            }
        } else if session.can_start_timer() {
            FooterMode::Fresh
        } else {
            FooterMode::Playing
        }
    }
}

pub struct Footer {
    pub mode: FooterMode,
}

impl Footer {
    pub fn new(mode: FooterMode) -> Self {
        Self { mode }
    }

    fn line(&self) -> Line<'static> {
        match self.mode {
            FooterMode::Won {
                move_count,
                elapsed_seconds,
            } => Line::styled(
                format!(
                    "You Won! {move_count} moves in {elapsed_seconds}s. Press n to play again."
                ),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            FooterMode::Fresh => Line::styled(
                format!("Press t to start the clock, or flip a card · {KEY_HELP}"),
                Style::default().fg(Color::Yellow),
            ),
            FooterMode::Playing => Line::styled(KEY_HELP, Style::default().fg(Color::DarkGray)),
        }
    }
}

impl Component for Footer {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let paragraph = Paragraph::new(self.line())
            .alignment(Alignment::Center)
            .block(Block::bordered());
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card::deck_from_values;
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_mode_follows_session() {
        let mut session = Session::new(deck_from_values(&[1, 1]), 0);
        assert_eq!(FooterMode::for_session(&session), FooterMode::Fresh);

        session.timer_active = true;
        assert_eq!(FooterMode::for_session(&session), FooterMode::Playing);

        session.is_over = true;
        session.move_count = 1;
        session.elapsed_seconds = 4;
        assert_eq!(
            FooterMode::for_session(&session),
            FooterMode::Won {
                move_count: 1,
                elapsed_seconds: 4
            }
        );
    }

    #[test]
    fn test_won_banner_renders_restart_hint() {
        let backend = TestBackend::new(80, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut footer = Footer::new(FooterMode::Won {
            move_count: 12,
            elapsed_seconds: 40,
        });

        terminal.draw(|f| footer.render(f, f.area())).unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("You Won!"));
        assert!(text.contains("12 moves"));
        assert!(text.contains("play again"));
    }
}
