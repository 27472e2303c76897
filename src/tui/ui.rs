use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{Board, Footer, FooterMode, TitleBar};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(3)]);
    let [title_area, board_area, footer_area] = layout.areas(frame.area());

    let session = &app.session;

    TitleBar::new(
        session.move_count,
        session.elapsed_seconds,
        app.status_message.clone(),
    )
    .with_pairs(session.matched_pairs(), session.cards.len() / 2)
    .render(frame, title_area);

    Board::new(&mut tui.board, &session.cards).render(frame, board_area);

    Footer::new(FooterMode::for_session(session)).render(frame, footer_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::test_support::{buffer_text, flip, test_app};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(app: &App, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_draw_ui_fresh_board() {
        let app = test_app(&[1, 2, 1, 2]);
        let mut tui = TuiState::new(5);
        let text = render(&app, &mut tui);

        assert!(text.contains("Moves: 0"));
        assert!(text.contains("Pairs: 0/2"));
        assert!(text.contains("Time: 0s"));
        assert_eq!(text.matches('?').count(), 4);
        assert!(text.contains("start the clock"));
        assert_eq!(tui.board.card_areas.len(), 4);
    }

    #[test]
    fn test_draw_ui_after_win() {
        let mut app = test_app(&[1, 2, 1, 2]);
        for index in [0, 2, 1, 3] {
            flip(&mut app, index);
        }
        update(&mut app, Action::Tick { generation: 0 });
        let mut tui = TuiState::new(5);
        let text = render(&app, &mut tui);

        assert!(text.contains("Moves: 2"));
        assert!(text.contains("Pairs: 2/2"));
        assert!(text.contains("You Won!"));
        assert!(!text.contains('?'));
    }
}
