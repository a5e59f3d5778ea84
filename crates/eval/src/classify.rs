// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards hand classification.
//!
//! The [classify] function finds the best category a five cards hand belongs
//! to and returns the cards in the canonical order used to compare hands of
//! the same category: grouped cards first, largest group first, then by
//! descending rank. Straights are ordered from their top card, so that the
//! wheel (5-4-3-2-A) is ordered with the ace last as a low ace.
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

use omaha_cards::{
    Card, Rank,
    set::{all_same_suit, in_consecutive_order, sort_descending},
};

/// A high hand category.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Category {
    /// The hand has not been evaluated.
    #[default]
    Unknown = 0,
    /// High card.
    HighCard,
    /// One pair.
    OnePair,
    /// Two pair.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Straight.
    Straight,
    /// Flush.
    Flush,
    /// Full house.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// Straight flush.
    StraightFlush,
}

impl Category {
    /// Returns all the ranked categories from the lowest.
    pub fn categories() -> impl DoubleEndedIterator<Item = Category> {
        use Category::*;
        [
            HighCard,
            OnePair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
        ]
        .into_iter()
    }

    /// The category number, 0 for unknown and 1 to 9 for ranked categories.
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Gets a category from its number, out of range numbers are unknown.
    pub fn from_value(value: u8) -> Category {
        Category::categories()
            .find(|c| c.value() == value)
            .unwrap_or(Category::Unknown)
    }

    /// The category display name.
    pub fn name(self) -> &'static str {
        match self {
            Category::StraightFlush => "Straight Flush",
            Category::FourOfAKind => "4-of-a-Kind",
            Category::FullHouse => "Full House",
            Category::Flush => "Flush",
            Category::Straight => "Straight",
            Category::ThreeOfAKind => "3-of-a-Kind",
            Category::TwoPair => "Two Pair",
            Category::OnePair => "One Pair",
            Category::HighCard => "High card",
            Category::Unknown => "Unknown rank",
        }
    }
}

/// Gets the display name for a category number.
pub fn category_name(value: u8) -> &'static str {
    Category::from_value(value).name()
}

/// Classifies five cards.
///
/// Returns the best category the cards belong to and the cards in canonical
/// order, the input cards are not changed.
pub fn classify(cards: [Card; 5]) -> (Category, [Card; 5]) {
    let groups = Groups::new(cards);
    let flush = all_same_suit(&cards);
    let straight = straight(cards);

    straight
        .filter(|_| flush)
        .map(|c| (Category::StraightFlush, c))
        .or_else(|| groups.matching(&[4, 1]).map(|c| (Category::FourOfAKind, c)))
        .or_else(|| groups.matching(&[3, 2]).map(|c| (Category::FullHouse, c)))
        .or_else(|| flush.then(|| descending(cards)).map(|c| (Category::Flush, c)))
        .or_else(|| straight.map(|c| (Category::Straight, c)))
        .or_else(|| groups.matching(&[3, 1, 1]).map(|c| (Category::ThreeOfAKind, c)))
        .or_else(|| groups.matching(&[2, 2, 1]).map(|c| (Category::TwoPair, c)))
        .or_else(|| groups.matching(&[2, 1, 1, 1]).map(|c| (Category::OnePair, c)))
        .unwrap_or((Category::HighCard, groups.cards))
}

/// Returns the cards ranks, used as a comparison key for canonically ordered
/// hands.
pub fn rank_key(cards: &[Card; 5]) -> [Rank; 5] {
    std::array::from_fn(|i| cards[i].rank())
}

/// Cards grouped by rank.
struct Groups {
    /// Cards ordered by descending group size and then by descending rank.
    cards: [Card; 5],
    /// The groups sizes in cards order.
    sizes: Vec<usize>,
}

impl Groups {
    fn new(mut cards: [Card; 5]) -> Self {
        let mut counts = [0u8; 15];
        for c in &cards {
            counts[c.rank().value() as usize] += 1;
        }

        cards.sort_by_key(|c| (Reverse(counts[c.rank().value() as usize]), Reverse(c.rank())));

        let sizes = cards
            .chunk_by(|a, b| a.rank() == b.rank())
            .map(<[Card]>::len)
            .collect();

        Self { cards, sizes }
    }

    /// Returns the grouped cards if the groups have the given sizes.
    fn matching(&self, sizes: &[usize]) -> Option<[Card; 5]> {
        (self.sizes == sizes).then_some(self.cards)
    }
}

fn descending(mut cards: [Card; 5]) -> [Card; 5] {
    sort_descending(&mut cards);
    cards
}

/// Checks for five consecutive ranks, an ace that doesn't make a straight
/// as the top card is tried as the lowest card.
fn straight(cards: [Card; 5]) -> Option<[Card; 5]> {
    let cards = descending(cards);
    if in_consecutive_order(&cards) {
        return Some(cards);
    }

    if cards[0].rank() == Rank::Ace {
        let mut wheel = cards;
        wheel[0] = wheel[0].to_low_ace();
        wheel.rotate_left(1);
        if in_consecutive_order(&wheel) {
            return Some(wheel);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use omaha_cards::{CardSet, Deck, Suit};

    fn cards(s: &str) -> [Card; 5] {
        CardSet::parse(s).cards().try_into().unwrap()
    }

    fn check(s: &str, category: Category, expected: &str) {
        let (c, ordered) = classify(cards(s));
        assert_eq!(c, category, "{s}");
        assert_eq!(CardSet::new(ordered.to_vec()).to_string(), expected, "{s}");
    }

    #[test]
    fn category_names() {
        assert_eq!(category_name(9), "Straight Flush");
        assert_eq!(category_name(8), "4-of-a-Kind");
        assert_eq!(category_name(7), "Full House");
        assert_eq!(category_name(6), "Flush");
        assert_eq!(category_name(5), "Straight");
        assert_eq!(category_name(4), "3-of-a-Kind");
        assert_eq!(category_name(3), "Two Pair");
        assert_eq!(category_name(2), "One Pair");
        assert_eq!(category_name(1), "High card");
        assert_eq!(category_name(0), "Unknown rank");
        assert_eq!(category_name(10), "Unknown rank");

        for (n, c) in Category::categories().enumerate() {
            assert_eq!(c.value() as usize, n + 1);
            assert_eq!(Category::from_value(c.value()), c);
        }
    }

    #[test]
    fn straight_flush() {
        check("Ts-Js-As-Qs-Ks", Category::StraightFlush, "As-Ks-Qs-Js-Ts");
        check("9h-5h-6h-8h-7h", Category::StraightFlush, "9h-8h-7h-6h-5h");
        check("2d-Ad-4d-5d-3d", Category::StraightFlush, "5d-4d-3d-2d-Ad");
    }

    #[test]
    fn four_of_a_kind() {
        check("7s-7d-Ah-7c-7h", Category::FourOfAKind, "7s-7d-7c-7h-Ah");
        check("Ks-2d-2h-2c-2s", Category::FourOfAKind, "2d-2h-2c-2s-Ks");
    }

    #[test]
    fn full_house() {
        check("3s-Kd-3d-Kc-3h", Category::FullHouse, "3s-3d-3h-Kd-Kc");
        check("As-Ad-Qh-Qc-Qs", Category::FullHouse, "Qh-Qc-Qs-As-Ad");
    }

    #[test]
    fn flush() {
        check("2c-9c-Kc-4c-Jc", Category::Flush, "Kc-Jc-9c-4c-2c");
        // Broken wheel.
        check("2c-3c-4c-5c-Kc", Category::Flush, "Kc-5c-4c-3c-2c");
    }

    #[test]
    fn straight() {
        check("Th-Js-Ad-Qs-Ks", Category::Straight, "Ad-Ks-Qs-Js-Th");
        check("6h-3s-5d-2c-4c", Category::Straight, "6h-5d-4c-3s-2c");
        check("5h-3s-Ad-2c-4c", Category::Straight, "5h-4c-3s-2c-Ad");
    }

    #[test]
    fn no_wrap_around_straight() {
        check("Kh-As-2d-3c-4c", Category::HighCard, "As-Kh-4c-3c-2d");
        check("Qh-Ks-As-2c-3c", Category::HighCard, "As-Ks-Qh-3c-2c");
    }

    #[test]
    fn three_of_a_kind() {
        check("9s-Ah-9d-3c-9h", Category::ThreeOfAKind, "9s-9d-9h-Ah-3c");
        check("2s-2h-Kd-2c-Qh", Category::ThreeOfAKind, "2s-2h-2c-Kd-Qh");
    }

    #[test]
    fn two_pair() {
        check("5s-Kh-5d-Kc-2h", Category::TwoPair, "Kh-Kc-5s-5d-2h");
        check("As-3h-4d-3c-4h", Category::TwoPair, "4d-4h-3h-3c-As");
    }

    #[test]
    fn one_pair() {
        check("2s-9h-2d-Kc-7h", Category::OnePair, "2s-2d-Kc-9h-7h");
        check("As-Ah-4d-3c-Th", Category::OnePair, "As-Ah-Th-4d-3c");
    }

    #[test]
    fn high_card() {
        check("2s-9h-Jd-Kc-7h", Category::HighCard, "Kc-Jd-9h-7h-2s");
    }

    #[test]
    fn unknown_suits_make_a_flush() {
        check("K-2-9-4-J", Category::Flush, "KJ942");
        check("K-K-9-4-J", Category::Flush, "KKJ94");
        check("9-8-7-6-5", Category::StraightFlush, "98765");
    }

    #[test]
    fn wheel_below_six_high() {
        let (c1, wheel) = classify(cards("As-2d-3h-4c-5s"));
        let (c2, six) = classify(cards("6s-2d-3h-4c-5s"));
        assert_eq!(c1, Category::Straight);
        assert_eq!(c2, Category::Straight);
        assert_eq!(wheel[4].rank(), Rank::LowAce);
        assert_eq!(wheel[4].suit(), Suit::Spades);
        assert!(rank_key(&wheel) < rank_key(&six));
    }

    #[test]
    fn input_is_not_changed() {
        let input = cards("5h-3s-Ad-2c-4c");
        let (_, ordered) = classify(input);
        assert_eq!(input[2].rank(), Rank::Ace);
        assert_eq!(ordered[4].rank(), Rank::LowAce);
    }

    #[test]
    fn random_hands() {
        for _ in 0..20_000 {
            let mut deck = Deck::new_and_shuffled(&mut rand::rng());
            let hand: [Card; 5] = std::array::from_fn(|_| deck.deal().unwrap());
            let (category, ordered) = classify(hand);

            // Same cards, different order.
            for c in &hand {
                assert!(ordered.contains(c) || ordered.contains(&c.to_low_ace()));
            }

            let distinct = ordered.iter().all(|c| {
                ordered.iter().filter(|o| o.rank().low() == c.rank().low()).count() == 1
            });

            match category {
                Category::HighCard => {
                    assert!(distinct);
                    assert!(!all_same_suit(&ordered));
                    assert!(!in_consecutive_order(&ordered));
                    assert!(ordered.windows(2).all(|w| w[0].rank() > w[1].rank()));
                }
                Category::FourOfAKind => {
                    assert!(ordered[..4].iter().all(|c| c.rank() == ordered[0].rank()));
                    assert_ne!(ordered[4].rank(), ordered[0].rank());
                }
                Category::FullHouse => {
                    assert!(ordered[..3].iter().all(|c| c.rank() == ordered[0].rank()));
                    assert_eq!(ordered[3].rank(), ordered[4].rank());
                }
                Category::Straight | Category::StraightFlush => {
                    assert!(distinct);
                    assert!(in_consecutive_order(&ordered));
                }
                Category::Flush => assert!(all_same_suit(&ordered)),
                Category::Unknown => panic!("Unknown category for {hand:?}"),
                _ => assert!(!distinct),
            }
        }
    }
}
