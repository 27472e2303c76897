//! # Board Component
//!
//! The card grid. Cards are laid out row-major, `columns` per row, and
//! centered in the available area.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `BoardState` lives in `TuiState` (cursor, cached card areas)
//! - `Board` is created each frame with borrowed state and the cards as props
//!
//! The card areas computed during render are cached so mouse clicks can be
//! hit-tested against exactly what was drawn.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::core::card::Card;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

pub const CARD_WIDTH: u16 = 7;
pub const CARD_HEIGHT: u16 = 3;
const CARD_GAP: u16 = 1;

/// Persistent presentation state for the grid.
pub struct BoardState {
    /// Highlighted card index.
    pub cursor: usize,
    /// Cards per row.
    pub columns: usize,
    /// Number of cards on the board (prop, synced from the session).
    pub card_count: usize,
    /// Screen areas of the cards from the last render, indexed like the cards.
    pub card_areas: Vec<Rect>,
}

/// Events emitted by the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardEvent {
    Flip(usize),
}

impl BoardState {
    pub fn new(columns: usize) -> Self {
        Self {
            cursor: 0,
            columns: columns.max(1),
            card_count: 0,
            card_areas: Vec::new(),
        }
    }

    /// Which card, if any, was drawn at this screen position.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<usize> {
        let position = Position::new(column, row);
        self.card_areas.iter().position(|area| area.contains(position))
    }

    fn move_cursor(&mut self, d_col: isize, d_row: isize) {
        if self.card_count == 0 {
            return;
        }
        let columns = self.columns as isize;
        let row = (self.cursor / self.columns) as isize + d_row;
        let col = (self.cursor % self.columns) as isize + d_col;
        if row < 0 || !(0..columns).contains(&col) {
            return;
        }
        let target = (row * columns + col) as usize;
        if target < self.card_count {
            self.cursor = target;
        }
    }

    fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.card_count.saturating_sub(1));
    }
}

impl EventHandler for BoardState {
    type Event = BoardEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<BoardEvent> {
        self.clamp_cursor();
        match event {
            TuiEvent::CursorUp => self.move_cursor(0, -1),
            TuiEvent::CursorDown => self.move_cursor(0, 1),
            TuiEvent::CursorLeft => self.move_cursor(-1, 0),
            TuiEvent::CursorRight => self.move_cursor(1, 0),
            TuiEvent::Select if self.card_count > 0 => {
                return Some(BoardEvent::Flip(self.cursor));
            }
            TuiEvent::MouseClick(column, row) => {
                let index = self.hit_test(*column, *row)?;
                self.cursor = index;
                return Some(BoardEvent::Flip(index));
            }
            _ => {}
        }
        None
    }
}

/// Transient render wrapper for the grid.
pub struct Board<'a> {
    state: &'a mut BoardState,
    cards: &'a [Card],
}

impl<'a> Board<'a> {
    pub fn new(state: &'a mut BoardState, cards: &'a [Card]) -> Self {
        Self { state, cards }
    }
}

impl Component for Board<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let columns = self.state.columns;
        self.state.card_count = self.cards.len();
        self.state.clamp_cursor();
        self.state.card_areas = grid_areas(area, self.cards.len(), columns);

        for (index, card) in self.cards.iter().enumerate() {
            let highlighted = index == self.state.cursor;
            let card_area = self.state.card_areas[index];
            frame.render_widget(card_widget(card, highlighted), card_area);
        }
    }
}

/// Centered, row-major card rectangles for `count` cards.
fn grid_areas(area: Rect, count: usize, columns: usize) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }
    let rows = count.div_ceil(columns);
    let row_areas = Layout::vertical(vec![Constraint::Length(CARD_HEIGHT); rows])
        .flex(Flex::Center)
        .spacing(CARD_GAP)
        .split(area);

    let mut areas = Vec::with_capacity(count);
    for row_area in row_areas.iter() {
        let cells = Layout::horizontal(vec![Constraint::Length(CARD_WIDTH); columns])
            .flex(Flex::Center)
            .spacing(CARD_GAP)
            .split(*row_area);
        for cell in cells.iter() {
            if areas.len() == count {
                break;
            }
            areas.push(*cell);
        }
    }
    areas
}

fn card_widget(card: &Card, highlighted: bool) -> Paragraph<'static> {
    let (label, style) = if card.is_matched {
        (card.value.to_string(), Style::default().fg(Color::Green))
    } else if card.is_face_up() {
        (
            card.value.to_string(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )
    } else {
        ("?".to_string(), Style::default().fg(Color::Blue))
    };

    let block = if highlighted {
        Block::bordered()
            .border_type(BorderType::Thick)
            .border_style(Style::default().fg(Color::Cyan))
    } else {
        Block::bordered().border_style(style.add_modifier(Modifier::DIM))
    };

    Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(style)
        .block(block)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card::deck_from_values;
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn board_state(columns: usize, count: usize) -> BoardState {
        let mut state = BoardState::new(columns);
        state.card_count = count;
        state
    }

    #[test]
    fn test_cursor_moves_within_grid() {
        let mut state = board_state(5, 20);
        state.handle_event(&TuiEvent::CursorRight);
        assert_eq!(state.cursor, 1);
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(state.cursor, 6);
        state.handle_event(&TuiEvent::CursorLeft);
        state.handle_event(&TuiEvent::CursorLeft);
        assert_eq!(state.cursor, 5);
        state.handle_event(&TuiEvent::CursorUp);
        state.handle_event(&TuiEvent::CursorUp);
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_cursor_stops_at_edges_and_partial_last_row() {
        let mut state = board_state(3, 4);
        state.cursor = 2;
        state.handle_event(&TuiEvent::CursorRight);
        assert_eq!(state.cursor, 2);
        // Row 1 only has index 3, so moving down from column 2 stays put.
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(state.cursor, 2);
        state.cursor = 0;
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(state.cursor, 3);
    }

    #[test]
    fn test_select_emits_flip_of_cursor() {
        let mut state = board_state(5, 20);
        state.cursor = 7;
        assert_eq!(state.handle_event(&TuiEvent::Select), Some(BoardEvent::Flip(7)));
    }

    #[test]
    fn test_select_on_empty_board_does_nothing() {
        let mut state = board_state(5, 0);
        assert_eq!(state.handle_event(&TuiEvent::Select), None);
    }

    #[test]
    fn test_grid_areas_are_row_major_and_sized() {
        let area = Rect::new(0, 0, 80, 24);
        let areas = grid_areas(area, 7, 5);
        assert_eq!(areas.len(), 7);
        assert!(areas.iter().all(|a| a.width == CARD_WIDTH && a.height == CARD_HEIGHT));
        assert_eq!(areas[0].y, areas[4].y);
        assert!(areas[5].y > areas[0].y);
        assert!(areas[1].x > areas[0].x);
        assert_eq!(areas[5].x, areas[0].x);
    }

    #[test]
    fn test_render_shows_faces_and_caches_hit_areas() {
        let backend = TestBackend::new(60, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut cards = deck_from_values(&[1, 2, 2, 1]);
        cards[1].is_flipped = true;
        cards[1].value = 7;
        let mut state = BoardState::new(2);

        terminal
            .draw(|f| {
                Board::new(&mut state, &cards).render(f, f.area());
            })
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert_eq!(text.matches('?').count(), 3);
        assert!(text.contains('7'));
        assert_eq!(state.card_areas.len(), 4);
        assert_eq!(state.card_count, 4);

        let second = state.card_areas[1];
        assert_eq!(state.hit_test(second.x + 1, second.y + 1), Some(1));
        assert_eq!(state.hit_test(0, 0), None);
    }

    #[test]
    fn test_mouse_click_flips_and_moves_cursor() {
        let mut state = BoardState::new(2);
        state.card_count = 2;
        state.card_areas = vec![Rect::new(0, 0, 7, 3), Rect::new(8, 0, 7, 3)];

        let event = state.handle_event(&TuiEvent::MouseClick(9, 1));
        assert_eq!(event, Some(BoardEvent::Flip(1)));
        assert_eq!(state.cursor, 1);
        assert_eq!(state.handle_event(&TuiEvent::MouseClick(30, 1)), None);
    }
}
