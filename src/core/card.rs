//! # Cards and Deck Generation
//!
//! A deck is `2 * pairs` cards. Every value `1..=pairs` appears exactly
//! twice, and a card's `id` is its position in the dealt order. The grid
//! never reorders cards after dealing, so `id == index` for the whole game.

use rand::Rng;
use rand::seq::SliceRandom;

/// Number of pairs in a standard game.
pub const DEFAULT_PAIRS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: usize,
    pub value: u32,
    /// Face shown: pending resolution, or matched.
    pub is_flipped: bool,
    /// Terminal. Once set, `is_flipped` stays true as well.
    pub is_matched: bool,
}

impl Card {
    pub fn new(id: usize, value: u32) -> Self {
        Self {
            id,
            value,
            is_flipped: false,
            is_matched: false,
        }
    }

    pub fn is_face_up(&self) -> bool {
        self.is_flipped || self.is_matched
    }
}

/// Deal a freshly shuffled deck of `pairs` pairs.
///
/// `SliceRandom::shuffle` is a Fisher–Yates shuffle, so every ordering of
/// the card instances is equally likely for a uniform `rng`.
pub fn generate_deck<R: Rng + ?Sized>(pairs: usize, rng: &mut R) -> Vec<Card> {
    let mut values: Vec<u32> = (1..=pairs as u32).flat_map(|v| [v, v]).collect();
    values.shuffle(rng);
    deck_from_values(&values)
}

/// Build a face-down deck in exactly the given order.
pub fn deck_from_values(values: &[u32]) -> Vec<Card> {
    values
        .iter()
        .enumerate()
        .map(|(id, &value)| Card::new(id, value))
        .collect()
}
