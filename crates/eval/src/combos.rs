// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Omaha hands enumeration.
use omaha_cards::Card;

/// Returns the indices of all 2-subsets of `0..n` in lexicographic order.
pub fn pairs(n: usize) -> impl Iterator<Item = [usize; 2]> + Clone {
    (0..n).flat_map(move |i| (i + 1..n).map(move |j| [i, j]))
}

/// Returns the indices of all 3-subsets of `0..n` in lexicographic order.
pub fn triples(n: usize) -> impl Iterator<Item = [usize; 3]> + Clone {
    (0..n).flat_map(move |i| {
        (i + 1..n).flat_map(move |j| (j + 1..n).map(move |k| [i, j, k]))
    })
}

/// Iterates all five cards hands made of exactly two hole cards and three
/// community cards.
///
/// With four hole cards and five community cards this gives 6 x 10 = 60 hands,
/// no hands are produced if there are less than two hole cards or less than
/// three community cards.
pub fn omaha_hands<'a>(
    hole: &'a [Card],
    community: &'a [Card],
) -> impl Iterator<Item = [Card; 5]> + 'a {
    pairs(hole.len()).flat_map(move |[h1, h2]| {
        triples(community.len()).map(move |[c1, c2, c3]| {
            [
                hole[h1],
                hole[h2],
                community[c1],
                community[c2],
                community[c3],
            ]
        })
    })
}
