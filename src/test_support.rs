//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::action::{Action, Effect, update};
use crate::core::state::App;

/// Creates a test App dealt in exactly the given order.
pub fn test_app(values: &[u32]) -> App {
    App::with_values(values)
}

/// Flip the card at `index` through the reducer.
pub fn flip(app: &mut App, index: usize) -> Effect {
    update(app, Action::FlipCard(index))
}

/// Concatenate every cell symbol of a rendered buffer.
pub fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    buffer.content().iter().map(|c| c.symbol()).collect()
}
