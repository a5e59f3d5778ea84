// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use serde::{Deserialize, Serialize};
use std::{fmt, hash};

/// A Poker card.
///
/// A card has a rank, a suit and an [Origin] tag that tells where the card
/// was dealt. The origin is only used when rendering a hand, equality uses the
/// rank and the suit:
///
/// ```
/// # use omaha_cards::{Card, Origin, Rank, Suit};
/// let ah = Card::new(Rank::Ace, Suit::Hearts);
/// assert_eq!(ah, Card::parse("aH"));
/// assert_eq!(ah, ah.with_origin(Origin::Hole));
/// assert_eq!(ah.to_string(), "Ah");
/// ```
///
/// Classification compares cards by rank only, see [Card::rank].
#[derive(Clone, Copy, Default, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
    origin: Origin,
}

impl Card {
    /// The empty card, the result of parsing an invalid token.
    pub const EMPTY: Card = Card {
        rank: Rank::Unknown,
        suit: Suit::Unknown,
        origin: Origin::Unspecified,
    };

    /// Create a card given a suit and rank.
    pub fn new(rank: Rank, suit: Suit) -> Card {
        Card {
            rank,
            suit,
            origin: Origin::Unspecified,
        }
    }

    /// Parses a one or two characters card token.
    ///
    /// The first character is the rank (`2`..`9`, `T`, `J`, `Q`, `K`, `A`) and
    /// the optional second character the suit (`d`, `c`, `h`, `s`, `*` for an
    /// unknown suit), both case insensitive. Parsing never fails, fields that
    /// cannot be parsed are left unknown and a token that is empty or longer
    /// than two characters gives [Card::EMPTY].
    pub fn parse(token: &str) -> Card {
        let mut chars = token.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(r), s, None) => {
                let suit = s.map_or(Suit::Unknown, Suit::from_char);
                Card::new(Rank::from_char(r), suit)
            }
            _ => Card::EMPTY,
        }
    }

    /// Returns the same card tagged with the given origin.
    pub fn with_origin(self, origin: Origin) -> Card {
        Card { origin, ..self }
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns where this card was dealt.
    pub fn origin(&self) -> Origin {
        self.origin
    }

    /// Checks if this card has no valid rank.
    pub fn is_empty(&self) -> bool {
        self.rank == Rank::Unknown
    }

    /// Checks if this card has a known suit.
    pub fn has_suit(&self) -> bool {
        self.suit != Suit::Unknown
    }

    /// Checks if this card rank can be part of an 8-or-better low hand.
    pub fn is_low8(&self) -> bool {
        self.rank.low().value() <= 8
    }

    /// Returns the card with an ace counted as one, the suit is kept.
    pub fn to_low_ace(self) -> Card {
        Card {
            rank: self.rank.low(),
            ..self
        }
    }

    /// Returns the card as used by a low hand: no suit and aces counted as one.
    pub fn to_low8(self) -> Card {
        Card {
            rank: self.rank.low(),
            suit: Suit::Unknown,
            origin: self.origin,
        }
    }

    /// Returns a value that displays this card with its origin tag.
    pub fn tagged(&self) -> Tagged<'_> {
        Tagged(self)
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank && self.suit == other.suit
    }
}

impl Eq for Card {}

impl hash::Hash for Card {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.rank.hash(state);
        self.suit.hash(state);
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "##")
        } else {
            write!(f, "{}{}", self.rank, self.suit)
        }
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({self})")
    }
}

/// Displays a card followed by its origin tag, `/P` for hole cards and `/B`
/// for community cards.
pub struct Tagged<'a>(&'a Card);

impl fmt::Display for Tagged<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.0, self.0.origin)
    }
}

/// Card rank.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Rank {
    /// Unparsed rank.
    #[default]
    Unknown = 0,
    /// Ace played below the deuce.
    LowAce,
    /// Deuce
    Deuce,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// Returns all ranks in a standard deck.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// The numeric rank value, 0 for unknown, 1 for the low ace, 14 for the ace.
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Maps the ace to the low ace, other ranks are unchanged.
    pub fn low(self) -> Rank {
        match self {
            Rank::Ace => Rank::LowAce,
            rank => rank,
        }
    }

    /// Parses a rank character.
    ///
    /// The `1` digit is not accepted, the low ace is only used internally.
    pub fn from_char(c: char) -> Rank {
        match c.to_ascii_lowercase() {
            '2' => Rank::Deuce,
            '3' => Rank::Trey,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            't' => Rank::Ten,
            'j' => Rank::Jack,
            'q' => Rank::Queen,
            'k' => Rank::King,
            'a' => Rank::Ace,
            _ => Rank::Unknown,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Unknown => '#',
            Rank::LowAce => 'A',
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };

        write!(f, "{rank}")
    }
}

/// Card suit.
#[derive(
    Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Suit {
    /// Suit not given or not parsed.
    #[default]
    Unknown,
    /// Diamonds suit.
    Diamonds,
    /// Clubs suit.
    Clubs,
    /// Hearts suit.
    Hearts,
    /// Spades suit.
    Spades,
}

impl Suit {
    /// Returns all suits in a standard deck.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Diamonds, Suit::Clubs, Suit::Hearts, Suit::Spades].into_iter()
    }

    /// Parses a suit character, `*` and unrecognized characters are unknown.
    pub fn from_char(c: char) -> Suit {
        match c.to_ascii_lowercase() {
            'd' => Suit::Diamonds,
            'c' => Suit::Clubs,
            'h' => Suit::Hearts,
            's' => Suit::Spades,
            _ => Suit::Unknown,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Suit::Unknown => Ok(()),
            Suit::Diamonds => write!(f, "d"),
            Suit::Clubs => write!(f, "c"),
            Suit::Hearts => write!(f, "h"),
            Suit::Spades => write!(f, "s"),
        }
    }
}

/// Where a card was dealt.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Origin {
    /// Unknown origin.
    #[default]
    Unspecified,
    /// A player private card.
    Hole,
    /// A shared board card.
    Community,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::Unspecified => Ok(()),
            Origin::Hole => write!(f, "/P"),
            Origin::Community => write!(f, "/B"),
        }
    }
}
