// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Eight or better low hand evaluation.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

use omaha_cards::{
    Card, CardSet,
    set::{sort_descending, write_cards},
};

use crate::{Showdown, classify::rank_key, combos::omaha_hands};

/// The best 8-or-better low hand a player can make.
///
/// A low hand has five cards of different ranks, all ranks eight or lower with
/// aces counting as one. The lower the highest card the better the hand:
///
/// ```
/// # use omaha_eval::*;
/// let hole = CardSet::parse("Ah-2d-Kc-Kd");
/// let board = CardSet::parse("3h-4c-8s-9d-Ts");
/// let hand = LowHand::evaluate(&hole, &board);
/// assert!(hand.qualified());
/// assert_eq!(hand.name(), "8432A");
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LowHand {
    cards: Option<[Card; 5]>,
}

impl LowHand {
    /// Finds the best low hand using two hole cards and three community cards.
    ///
    /// Hole and community cards are reduced to low cards separately, see
    /// [CardSet::to_low8], a hand doesn't qualify if less than two hole
    /// cards or three community cards are left, or if no combination has
    /// five different ranks.
    pub fn evaluate(hole: &CardSet, community: &CardSet) -> Self {
        let hole = hole.to_low8();
        let community = community.to_low8();

        let cards = omaha_hands(hole.cards(), community.cards())
            .filter_map(|mut cards| {
                sort_descending(&mut cards);
                cards
                    .windows(2)
                    .all(|w| w[0].rank() != w[1].rank())
                    .then_some(cards)
            })
            .min_by_key(rank_key);

        Self { cards }
    }

    /// Checks if this hand is a valid low hand.
    pub fn qualified(&self) -> bool {
        self.cards.is_some()
    }

    /// The winning low cards by descending rank.
    pub fn cards(&self) -> Option<&[Card; 5]> {
        self.cards.as_ref()
    }

    /// The hand name, the ranks listed from the highest, empty if the hand
    /// doesn't qualify.
    pub fn name(&self) -> String {
        self.to_string()
    }

    /// Compares this hand with another low hand.
    pub fn showdown(&self, other: &LowHand) -> Showdown {
        if !self.qualified() && !other.qualified() {
            return Showdown::NoneQualified;
        }

        Showdown::from_ordering(self.cmp(other))
    }
}

/// Orders low hands by strength, a qualified hand is greater than an
/// unqualified one and lower ranks are greater than higher ranks.
impl Ord for LowHand {
    fn cmp(&self, other: &Self) -> Ordering {
        match (&self.cards, &other.cards) {
            (Some(a), Some(b)) => rank_key(b).cmp(&rank_key(a)),
            (Some(_), None) => Ordering::Greater,
            (None, Some(_)) => Ordering::Less,
            (None, None) => Ordering::Equal,
        }
    }
}

impl PartialOrd for LowHand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for LowHand {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for LowHand {}

impl fmt::Display for LowHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.cards {
            Some(cards) => write_cards(f, cards),
            None => Ok(()),
        }
    }
}
