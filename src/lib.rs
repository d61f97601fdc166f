//! A standard 52-card deck model with optional `no_std` support.
//!
//! The crate provides immutable [`Card`], [`Suit`], and [`Rank`] value types
//! with ace-high ordering, and a mutable [`Deck`] supporting draw, refill,
//! and shuffle.
//!
//! # Example
//!
//! ```
//! use trumpdeck::{Card, Deck, Rank, Suit};
//!
//! let mut deck = Deck::new(42);
//! deck.shuffle();
//! let hand = deck.draw(2).unwrap();
//! assert_eq!(hand.len(), 2);
//!
//! let ace = Card::new(Suit::Spade, Rank::Ace);
//! assert_eq!(ace.to_string(), "A\u{2664}");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::DrawError;
