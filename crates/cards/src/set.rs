// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Card sets and the helpers used to classify them.
use serde::{Deserialize, Serialize};
use std::{fmt, ops};

use crate::{Card, Origin};

/// An ordered set of cards with an optional name.
///
/// A set is parsed from dash separated card tokens with an optional `name:`
/// prefix:
///
/// ```
/// # use omaha_cards::{CardSet, Origin};
/// let hole = CardSet::parse("Bob:As-Kd-7c-2h").with_origin(Origin::Hole);
/// assert_eq!(hole.name(), Some("Bob"));
/// assert_eq!(hole.len(), 4);
/// assert_eq!(hole.to_string(), "Bob:As-Kd-7c-2h");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSet {
    cards: Vec<Card>,
    name: Option<String>,
}

impl CardSet {
    /// Creates an unnamed set from cards.
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards, name: None }
    }

    /// Parses a set, invalid tokens give empty cards.
    pub fn parse(s: &str) -> Self {
        let (name, cards) = match s.split_once(':') {
            Some((name, cards)) => (Some(name.to_string()), cards),
            None => (None, s),
        };

        let cards = cards.split('-').map(Card::parse).collect();
        Self { cards, name }
    }

    /// Returns this set with all the cards tagged with the given origin.
    pub fn with_origin(mut self, origin: Origin) -> Self {
        self.cards.iter_mut().for_each(|c| *c = c.with_origin(origin));
        self
    }

    /// The set name.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The set cards.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards in the set.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Checks if the set has no cards.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Checks if any of the cards failed to parse.
    pub fn has_empty_card(&self) -> bool {
        self.cards.iter().any(Card::is_empty)
    }

    /// Checks if all cards have the same suit.
    pub fn all_same_suit(&self) -> bool {
        all_same_suit(&self.cards)
    }

    /// Checks if the cards ranks go down one step at a time.
    pub fn in_consecutive_order(&self) -> bool {
        in_consecutive_order(&self.cards)
    }

    /// Returns the cards that can play in an 8-or-better low hand.
    ///
    /// Suits are removed, aces count as one, ranks above eight are dropped and
    /// only one card per rank is kept, the result is sorted by ascending rank.
    /// Deduplication only looks at this set, cards in two different sets may
    /// still share a rank.
    pub fn to_low8(&self) -> CardSet {
        let mut cards = self
            .cards
            .iter()
            .map(|c| c.to_low8())
            .filter(Card::is_low8)
            .collect::<Vec<_>>();
        cards.sort_by_key(Card::rank);
        cards.dedup_by_key(|c| c.rank());

        CardSet::new(cards)
    }
}

impl ops::Index<usize> for CardSet {
    type Output = Card;

    fn index(&self, index: usize) -> &Self::Output {
        &self.cards[index]
    }
}

impl FromIterator<Card> for CardSet {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        CardSet::new(iter.into_iter().collect())
    }
}

impl fmt::Display for CardSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = &self.name {
            write!(f, "{name}:")?;
        }

        write_cards(f, &self.cards)
    }
}

/// Writes cards separated by `-`, cards without a suit are written back to
/// back so that a low hand reads like `8632A`.
pub fn write_cards(f: &mut fmt::Formatter<'_>, cards: &[Card]) -> fmt::Result {
    for (pos, card) in cards.iter().enumerate() {
        write!(f, "{card}")?;
        if card.has_suit() && pos + 1 < cards.len() {
            write!(f, "-")?;
        }
    }

    Ok(())
}

/// Checks if all cards have the same suit, cards with unknown suit match each
/// other.
pub fn all_same_suit(cards: &[Card]) -> bool {
    cards.windows(2).all(|w| w[0].suit() == w[1].suit())
}

/// Checks if each card rank is one less than the previous card rank.
pub fn in_consecutive_order(cards: &[Card]) -> bool {
    cards
        .windows(2)
        .all(|w| w[0].rank().value() == w[1].rank().value() + 1)
}

/// Sorts cards by descending rank, cards with the same rank keep their order.
pub fn sort_descending(cards: &mut [Card]) {
    cards.sort_by(|a, b| b.rank().cmp(&a.rank()));
}
