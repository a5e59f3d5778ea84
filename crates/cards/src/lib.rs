// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Omaha Hi/Lo cards types.
//!
//! This crate define types to parse and render cards:
//!
//! ```
//! # use omaha_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! assert_eq!(Card::parse("Ah"), ah);
//! ```
//!
//! a [CardSet] type for named groups of cards as found in a deal line:
//!
//! ```
//! # use omaha_cards::CardSet;
//! let board = CardSet::parse("Board:Ts-9s-8h-7h-6h");
//! assert_eq!(board.len(), 5);
//! assert!(board.in_consecutive_order());
//! ```
//!
//! and a [Deck] type for dealing random hands:
//!
//! ```
//! # use omaha_cards::{Deck, Origin};
//! let mut deck = Deck::new_and_shuffled(&mut rand::rng());
//! let hole = deck.deal_set(4, Origin::Hole).unwrap();
//! let board = deck.deal_set(5, Origin::Community).unwrap();
//! assert_eq!(deck.count(), Deck::SIZE - 9);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod card;
pub use card::{Card, Origin, Rank, Suit, Tagged};

mod deck;
pub use deck::Deck;

pub mod set;
pub use set::CardSet;
