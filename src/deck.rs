//! Deck construction, shuffling, and drawing.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DrawError;

/// An ordered deck of cards.
///
/// The last card in the sequence is the top of the deck.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Remaining cards, bottom first.
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a freshly built, unshuffled deck.
    #[must_use]
    pub fn new() -> Self {
        let mut deck = Self {
            cards: Vec::with_capacity(DECK_SIZE),
        };
        deck.build();
        deck
    }

    /// Creates a deck holding exactly the given cards, last card on top.
    ///
    /// Mainly useful for stacking a deck in tests.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Resets the deck to the full 52 cards, one per (suit, rank) pair, in
    /// canonical order (suits outer loop, ranks inner), discarding whatever
    /// it currently holds.
    pub fn build(&mut self) {
        self.cards.clear();
        self.cards.reserve(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                self.cards.push(Card::new(suit, rank));
            }
        }
    }

    /// Shuffles the deck in place.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck is empty.
    pub fn draw(&mut self) -> Result<Card, DrawError> {
        self.cards.pop().ok_or(DrawError::Empty)
    }

    /// Returns the number of remaining cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck has no cards left.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
