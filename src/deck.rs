//! The deck: a mutable, ordered sequence of remaining cards.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::error::DrawError;

/// A 52-card deck supporting draw, refill, and shuffle.
///
/// The deck starts as the full canonical set from [`Card::full_set`] and
/// owns a seeded RNG for shuffling, so a given seed yields a reproducible
/// sequence of shuffles. Index 0 is the bottom of the deck; draws come off
/// the back.
///
/// The deck performs no internal locking. Share it across threads only
/// behind external synchronization.
///
/// # Example
///
/// ```
/// use trumpdeck::Deck;
///
/// let mut deck = Deck::new(42);
/// deck.shuffle();
/// let hand = deck.draw(5)?;
/// assert_eq!(hand.len(), 5);
/// assert_eq!(deck.cards_remaining(), 47);
/// # Ok::<(), trumpdeck::DrawError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Deck {
    /// Remaining cards, bottom first.
    cards: Vec<Card>,
    /// Random number generator for shuffling.
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a full, unshuffled deck with the given RNG seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            cards: Card::full_set(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Removes and returns the top `count` cards.
    ///
    /// Cards come back top-first. The draw is all-or-nothing: on error the
    /// deck is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::InvalidCount`] if `count` is zero, and
    /// [`DrawError::InsufficientCards`] if `count` exceeds the number of
    /// cards remaining.
    pub fn draw(&mut self, count: usize) -> Result<Vec<Card>, DrawError> {
        if count == 0 {
            return Err(DrawError::InvalidCount);
        }
        if count > self.cards.len() {
            return Err(DrawError::InsufficientCards);
        }

        let mut drawn = Vec::with_capacity(count);
        for _ in 0..count {
            // Length was checked above; the deck cannot run out mid-draw.
            if let Some(card) = self.cards.pop() {
                drawn.push(card);
            }
        }

        Ok(drawn)
    }

    /// Resets the deck to the full canonical 52-card set.
    ///
    /// Previously drawn cards are discarded and any shuffle order is lost.
    pub fn refill(&mut self) {
        self.cards = Card::full_set();
    }

    /// Shuffles the remaining cards into a uniformly random order in place.
    ///
    /// The membership and size of the deck are unchanged.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
    }

    /// Returns the remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
