// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A standard 52 cards deck.
use rand::prelude::*;

use crate::{Card, CardSet, Origin, Rank, Suit};

/// A cards Deck
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.cards.shuffle(rng);
        deck
    }

    /// Deals a card from the deck.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Deals `n` cards tagged with the given origin, returns `None` if the deck
    /// doesn't have enough cards.
    pub fn deal_set(&mut self, n: usize, origin: Origin) -> Option<CardSet> {
        if n > self.cards.len() {
            return None;
        }

        let at = self.cards.len() - n;
        Some(self.cards.split_off(at).into_iter().collect::<CardSet>().with_origin(origin))
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn deck_cards() {
        let mut cards = HashSet::default();
        let mut deck = Deck::new_and_shuffled(&mut rand::rng());
        assert_eq!(deck.count(), Deck::SIZE);

        while let Some(card) = deck.deal() {
            assert!(!card.is_empty());
            assert!(card.has_suit());
            assert_ne!(card.rank(), Rank::LowAce);
            cards.insert(card);
        }

        // Check uniquness.
        assert_eq!(cards.len(), Deck::SIZE);
        assert!(deck.is_empty());
    }

    #[test]
    fn deck_deal_set() {
        let mut deck = Deck::new_and_shuffled(&mut rand::rng());

        let hole = deck.deal_set(4, Origin::Hole).unwrap();
        assert_eq!(hole.len(), 4);
        assert!(hole.cards().iter().all(|c| c.origin() == Origin::Hole));
        assert_eq!(deck.count(), Deck::SIZE - 4);

        let board = deck.deal_set(5, Origin::Community).unwrap();
        assert_eq!(board.len(), 5);
        assert!(hole.cards().iter().all(|c| !board.cards().contains(c)));

        assert!(deck.deal_set(44, Origin::Community).is_none());
        assert_eq!(deck.deal_set(43, Origin::Community).unwrap().len(), 43);
        assert!(deck.is_empty());
    }
}
