// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hands of either kind and their comparison.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

use omaha_cards::CardSet;

use crate::{HighHand, LowHand};

/// The outcome of comparing two hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Showdown {
    /// The first hand wins.
    AWins,
    /// The second hand wins.
    BWins,
    /// The hands are equal.
    Split,
    /// Neither hand qualifies.
    NoneQualified,
    /// The hands are of different kinds.
    NotComparable,
}

impl Showdown {
    /// Maps the first hand ordering relative to the second hand.
    pub fn from_ordering(ord: Ordering) -> Showdown {
        match ord {
            Ordering::Greater => Showdown::AWins,
            Ordering::Less => Showdown::BWins,
            Ordering::Equal => Showdown::Split,
        }
    }
}

/// The hand kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kind {
    /// High hand.
    High,
    /// Eight or better low hand.
    Low,
}

impl Kind {
    /// The suffix used in results, `Hi` or `Lo`.
    pub fn suffix(self) -> &'static str {
        match self {
            Kind::High => "Hi",
            Kind::Low => "Lo",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.suffix())
    }
}

/// An evaluated hand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Hand {
    /// A high hand.
    High(HighHand),
    /// A low hand.
    Low(LowHand),
}

impl Hand {
    /// Evaluates a high hand.
    pub fn high(hole: &CardSet, community: &CardSet) -> Hand {
        Hand::High(HighHand::evaluate(hole, community))
    }

    /// Evaluates a low hand.
    pub fn low(hole: &CardSet, community: &CardSet) -> Hand {
        Hand::Low(LowHand::evaluate(hole, community))
    }

    /// The hand kind.
    pub fn kind(&self) -> Kind {
        match self {
            Hand::High(_) => Kind::High,
            Hand::Low(_) => Kind::Low,
        }
    }

    /// Checks if the hand qualifies.
    pub fn qualified(&self) -> bool {
        match self {
            Hand::High(h) => h.qualified(),
            Hand::Low(h) => h.qualified(),
        }
    }

    /// The hand name, the category for high hands and the ranks for low
    /// hands.
    pub fn name(&self) -> String {
        match self {
            Hand::High(h) => h.name().to_string(),
            Hand::Low(h) => h.name(),
        }
    }

    /// Compares this hand with another hand of the same kind.
    pub fn showdown(&self, other: &Hand) -> Showdown {
        match (self, other) {
            (Hand::High(a), Hand::High(b)) => a.showdown(b),
            (Hand::Low(a), Hand::Low(b)) => a.showdown(b),
            _ => Showdown::NotComparable,
        }
    }
}

impl From<HighHand> for Hand {
    fn from(hand: HighHand) -> Self {
        Hand::High(hand)
    }
}

impl From<LowHand> for Hand {
    fn from(hand: LowHand) -> Self {
        Hand::Low(hand)
    }
}

/// Compares two hands, hands of different kinds are not comparable.
pub fn compare(a: &Hand, b: &Hand) -> Showdown {
    a.showdown(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sets(hole: &str, board: &str) -> (CardSet, CardSet) {
        (CardSet::parse(hole), CardSet::parse(board))
    }

    #[test]
    fn different_kinds() {
        let (hole, board) = sets("Ah-2d-Kc-Kd", "3h-4c-5s-9d-Ts");
        let high = Hand::high(&hole, &board);
        let low = Hand::low(&hole, &board);
        assert_eq!(high.kind(), Kind::High);
        assert_eq!(low.kind(), Kind::Low);
        assert_eq!(compare(&high, &low), Showdown::NotComparable);
        assert_eq!(compare(&low, &high), Showdown::NotComparable);

        // Even when neither hand qualifies.
        let (hole, board) = sets("As", "Ts");
        let high = Hand::high(&hole, &board);
        let low = Hand::low(&hole, &board);
        assert!(!high.qualified() && !low.qualified());
        assert_eq!(compare(&high, &low), Showdown::NotComparable);
    }

    #[test]
    fn same_kind() {
        let board = CardSet::parse("3h-4c-5s-9d-Ts");
        let a = CardSet::parse("Ah-2d-Kc-Kd");
        let b = CardSet::parse("9h-9c-Qc-Jd");

        let (ha, hb) = (Hand::high(&a, &board), Hand::high(&b, &board));
        assert_eq!(ha.name(), "Straight");
        assert_eq!(hb.name(), "3-of-a-Kind");
        assert_eq!(compare(&ha, &hb), Showdown::AWins);
        assert_eq!(compare(&hb, &ha), Showdown::BWins);
        assert_eq!(compare(&ha, &ha.clone()), Showdown::Split);

        let (la, lb) = (Hand::low(&a, &board), Hand::low(&b, &board));
        assert_eq!(la.name(), "5432A");
        assert_eq!(lb.name(), "");
        assert_eq!(compare(&la, &lb), Showdown::AWins);
        assert_eq!(compare(&lb, &lb), Showdown::NoneQualified);
    }

    #[test]
    fn kind_suffix() {
        assert_eq!(Kind::High.to_string(), "Hi");
        assert_eq!(Kind::Low.to_string(), "Lo");
    }
}
