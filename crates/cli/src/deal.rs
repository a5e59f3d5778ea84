// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Deal lines parsing.
use anyhow::{Result, anyhow};
use rand::Rng;
use serde::Serialize;
use std::{fmt, str::FromStr};
use thiserror::Error;

use omaha_eval::{CardSet, Deck, Origin};

/// Deal line parsing errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DealError {
    /// The line doesn't have three space separated groups.
    #[error("expected three card groups separated by spaces")]
    MissingGroups,
    /// A group has the wrong number of cards.
    #[error("{group} has {found} cards, expected {expected}")]
    WrongCount {
        /// The group name.
        group: &'static str,
        /// The number of cards in the group.
        found: usize,
        /// The expected number of cards.
        expected: usize,
    },
    /// A group has a card that cannot be parsed.
    #[error("invalid card in {group} {cards}")]
    InvalidCard {
        /// The group name.
        group: &'static str,
        /// The group cards.
        cards: String,
    },
}

/// The cards for a two players deal.
#[derive(Debug, Clone, Serialize)]
pub struct Deal {
    /// First player hole cards.
    pub hole_a: CardSet,
    /// Second player hole cards.
    pub hole_b: CardSet,
    /// The community cards.
    pub board: CardSet,
}

impl Deal {
    /// The number of hole cards per player.
    pub const HOLE_CARDS: usize = 4;
    /// The number of community cards.
    pub const BOARD_CARDS: usize = 5;

    /// Parses a `hole1 hole2 board` line.
    pub fn parse(line: &str) -> Result<Deal, DealError> {
        let mut groups = line.splitn(3, ' ');
        let (Some(a), Some(b), Some(board)) = (groups.next(), groups.next(), groups.next()) else {
            return Err(DealError::MissingGroups);
        };

        Ok(Deal {
            hole_a: parse_group("HandA", a, Self::HOLE_CARDS, Origin::Hole)?,
            hole_b: parse_group("HandB", b, Self::HOLE_CARDS, Origin::Hole)?,
            board: parse_group("Board", board, Self::BOARD_CARDS, Origin::Community)?,
        })
    }

    /// Deals from a shuffled deck.
    pub fn random<R: Rng>(rng: &mut R) -> Result<Deal> {
        let mut deck = Deck::new_and_shuffled(rng);
        let mut deal_set = |n, origin| {
            deck.deal_set(n, origin)
                .ok_or_else(|| anyhow!("Not enough cards in the deck"))
        };

        Ok(Deal {
            hole_a: deal_set(Self::HOLE_CARDS, Origin::Hole)?,
            hole_b: deal_set(Self::HOLE_CARDS, Origin::Hole)?,
            board: deal_set(Self::BOARD_CARDS, Origin::Community)?,
        })
    }
}

fn parse_group(
    group: &'static str,
    s: &str,
    expected: usize,
    origin: Origin,
) -> Result<CardSet, DealError> {
    let cards = CardSet::parse(s).with_origin(origin);
    if cards.len() != expected {
        return Err(DealError::WrongCount {
            group,
            found: cards.len(),
            expected,
        });
    }

    if cards.has_empty_card() {
        return Err(DealError::InvalidCard {
            group,
            cards: s.to_string(),
        });
    }

    Ok(cards)
}

impl FromStr for Deal {
    type Err = DealError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Deal::parse(s)
    }
}

impl fmt::Display for Deal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.hole_a, self.hole_b, self.board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use omaha_eval::{Card, Rank, Suit};
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn parse_deal() {
        let deal = Deal::parse("Ac-Kd-Jd-3d 5c-5d-6c-7d Ah-Kh-5s-2s-Qd").unwrap();
        assert_eq!(deal.hole_a.len(), 4);
        assert_eq!(deal.hole_b.len(), 4);
        assert_eq!(deal.board.len(), 5);
        assert_eq!(deal.hole_a[0], Card::new(Rank::Ace, Suit::Clubs));
        assert_eq!(deal.hole_a[0].origin(), Origin::Hole);
        assert_eq!(deal.board[4].origin(), Origin::Community);
        assert_eq!(deal.to_string(), "Ac-Kd-Jd-3d 5c-5d-6c-7d Ah-Kh-5s-2s-Qd");
    }

    #[test]
    fn parse_named_groups() {
        let line = "HandA:Ac-Kd-Jd-3d HandB:5c-5d-6c-7d Board:Ah-Kh-5s-2s-Qd";
        let deal: Deal = line.parse().unwrap();
        assert_eq!(deal.hole_a.name(), Some("HandA"));
        assert_eq!(deal.board.name(), Some("Board"));
        assert_eq!(deal.to_string(), line);
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            Deal::parse("Ac-Kd-Jd-3d 5c-5d-6c-7d").unwrap_err(),
            DealError::MissingGroups
        );

        assert_eq!(
            Deal::parse("Ac-Kd-Jd 5c-5d-6c-7d Ah-Kh-5s-2s-Qd").unwrap_err(),
            DealError::WrongCount {
                group: "HandA",
                found: 3,
                expected: 4
            }
        );

        assert_eq!(
            Deal::parse("Ac-Kd-Jd-3d 5c-5d-6c-7d Ah-Kh-5s-2s").unwrap_err(),
            DealError::WrongCount {
                group: "Board",
                found: 4,
                expected: 5
            }
        );

        assert_eq!(
            Deal::parse("Ac-Kd-Jd-3d 5c-1d-6c-7d Ah-Kh-5s-2s-Qd").unwrap_err(),
            DealError::InvalidCard {
                group: "HandB",
                cards: "5c-1d-6c-7d".to_string()
            }
        );

        // Two spaces give an empty group.
        assert!(matches!(
            Deal::parse("Ac-Kd-Jd-3d  5c-5d-6c-7d Ah-Kh-5s-2s-Qd"),
            Err(DealError::WrongCount { group: "HandB", .. })
        ));
    }

    #[test]
    fn random_deal() {
        let mut rng = StdRng::seed_from_u64(101);
        let deal = Deal::random(&mut rng).unwrap();

        // Random deals parse back.
        let parsed = Deal::parse(&deal.to_string()).unwrap();
        assert_eq!(parsed.hole_a, deal.hole_a);
        assert_eq!(parsed.hole_b, deal.hole_b);
        assert_eq!(parsed.board, deal.board);

        // Same seed, same deal.
        let mut rng = StdRng::seed_from_u64(101);
        assert_eq!(Deal::random(&mut rng).unwrap().to_string(), deal.to_string());
    }
}
