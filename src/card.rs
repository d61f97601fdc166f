//! Card value types: suits, ranks, and the cards they form.

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 52;

/// Card suit.
///
/// Suits carry a fixed priority used for ordering: clover is the lowest,
/// spade the highest. Declaration order matches priority order, so the
/// derived `Ord` is the semantic one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Suit {
    /// Clovers (clubs). Priority 1, the lowest.
    Clover = 1,
    /// Hearts. Priority 2.
    Heart = 2,
    /// Diamonds. Priority 3.
    Diamond = 3,
    /// Spades. Priority 4, the highest.
    Spade = 4,
}

impl Suit {
    /// All four suits in deck-construction order.
    pub const ALL: [Self; 4] = [Self::Spade, Self::Diamond, Self::Heart, Self::Clover];

    /// Returns the suit's fixed priority (1 = clover .. 4 = spade).
    #[must_use]
    pub const fn priority(self) -> u8 {
        self as u8
    }

    /// Returns the display glyph for this suit.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Spade => "\u{2664}",
            Self::Diamond => "\u{2666}\u{fe0e}",
            Self::Heart => "\u{2665}\u{fe0e}",
            Self::Clover => "\u{2667}",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

/// Card rank (ace through king).
///
/// The discriminant is the storage value (1 = ace .. 13 = king) and is kept
/// separate from the comparison rule: the ace stores the lowest value but
/// compares as the highest rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Rank {
    /// Ace. Stored as 1, compares above every other rank.
    Ace = 1,
    /// Two.
    Two = 2,
    /// Three.
    Three = 3,
    /// Four.
    Four = 4,
    /// Five.
    Five = 5,
    /// Six.
    Six = 6,
    /// Seven.
    Seven = 7,
    /// Eight.
    Eight = 8,
    /// Nine.
    Nine = 9,
    /// Ten.
    Ten = 10,
    /// Jack. Displayed as `11`.
    Jack = 11,
    /// Queen. Displayed as `12`.
    Queen = 12,
    /// King. Displayed as `13`.
    King = 13,
}

impl Rank {
    /// All thirteen ranks in deck-construction order (ace first, then two
    /// through king). This is the natural 1..=13 order, not the ace-high
    /// comparison order.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Returns the rank's storage value (1 = ace .. 13 = king).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }
}

impl Ord for Rank {
    /// Ace-high comparison: the ace beats every other rank, including the
    /// king; non-ace ranks compare by numeric value.
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Ace, Self::Ace) => Ordering::Equal,
            (Self::Ace, _) => Ordering::Greater,
            (_, Self::Ace) => Ordering::Less,
            _ => self.value().cmp(&other.value()),
        }
    }
}

impl PartialOrd for Rank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Rank {
    /// `A` for the ace, the decimal value otherwise. Face ranks render as
    /// `11`, `12`, and `13`, not letters.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ace => f.write_str("A"),
            _ => write!(f, "{}", self.value()),
        }
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Returns the full 52-card set in canonical order: suits in
    /// [`Suit::ALL`] order, each holding ranks in [`Rank::ALL`] order.
    ///
    /// Every `(suit, rank)` pair appears exactly once.
    #[must_use]
    pub fn full_set() -> Vec<Self> {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Self::new(suit, rank));
            }
        }

        cards
    }
}

impl Ord for Card {
    /// Ranks compare first (ace-high); suit priority breaks ties.
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank
            .cmp(&other.rank)
            .then_with(|| self.suit.cmp(&other.suit))
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Card {
    /// Rank label followed by suit glyph, e.g. `A♤`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}
