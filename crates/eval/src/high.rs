// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! High hand evaluation.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

use omaha_cards::{Card, CardSet, Rank, set::write_cards};

use crate::{
    Showdown,
    classify::{Category, classify, rank_key},
    combos::omaha_hands,
};

/// The best high hand a player can make.
///
/// ```
/// # use omaha_eval::*;
/// let hole = CardSet::parse("Ah-Ad-7c-2h");
/// let board = CardSet::parse("As-9s-Ac-7h-6h");
/// let hand = HighHand::evaluate(&hole, &board);
/// assert_eq!(hand.category(), Category::FourOfAKind);
/// assert_eq!(hand.to_string(), "Ah-Ad-As-Ac-9s");
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HighHand {
    category: Category,
    cards: Option<[Card; 5]>,
}

impl HighHand {
    /// Finds the best hand using two hole cards and three community cards.
    ///
    /// Returns an unknown hand if there are less than two hole cards or less
    /// than three community cards.
    pub fn evaluate(hole: &CardSet, community: &CardSet) -> Self {
        omaha_hands(hole.cards(), community.cards())
            .map(classify)
            .reduce(|best, candidate| {
                // Replace only on a strictly better candidate.
                if key(&candidate) > key(&best) {
                    candidate
                } else {
                    best
                }
            })
            .map(|(category, cards)| Self {
                category,
                cards: Some(cards),
            })
            .unwrap_or_default()
    }

    /// The hand category.
    pub fn category(&self) -> Category {
        self.category
    }

    /// The hand category name.
    pub fn name(&self) -> &'static str {
        self.category.name()
    }

    /// The winning cards in canonical order.
    pub fn cards(&self) -> Option<&[Card; 5]> {
        self.cards.as_ref()
    }

    /// Checks if this hand has been evaluated to a ranked category.
    pub fn qualified(&self) -> bool {
        self.category != Category::Unknown
    }

    /// Compares this hand with another high hand.
    pub fn showdown(&self, other: &HighHand) -> Showdown {
        if !self.qualified() && !other.qualified() {
            return Showdown::NoneQualified;
        }

        Showdown::from_ordering(self.cmp(other))
    }

    /// Returns a value that displays the hand cards with their origin and
    /// the category.
    pub fn describe(&self) -> Describe<'_> {
        Describe(self)
    }
}

fn key((category, cards): &(Category, [Card; 5])) -> (Category, [Rank; 5]) {
    (*category, rank_key(cards))
}

impl Ord for HighHand {
    fn cmp(&self, other: &Self) -> Ordering {
        let ranks = |h: &HighHand| h.cards.as_ref().map(rank_key);
        self.category
            .cmp(&other.category)
            .then_with(|| ranks(self).cmp(&ranks(other)))
    }
}

impl PartialEq for HighHand {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HighHand {}

impl PartialOrd for HighHand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for HighHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.cards {
            Some(cards) => write_cards(f, cards),
            None => Ok(()),
        }
    }
}

/// Displays a high hand as `As/P Ks/P Qs/B Js/B Ts/B - Rank: 9(Straight Flush)`.
pub struct Describe<'a>(&'a HighHand);

impl fmt::Display for Describe<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hand = self.0;
        for card in hand.cards.iter().flatten() {
            write!(f, "{} ", card.tagged())?;
        }

        write!(f, "- Rank: {}({})", hand.category.value(), hand.name())
    }
}
