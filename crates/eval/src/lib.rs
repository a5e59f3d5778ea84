// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Omaha Hi/Lo hand evaluator.
//!
//! An Omaha hand is made of exactly two of the player four hole cards and
//! three of the five community cards. This crate finds the best high hand and
//! the best 8-or-better low hand by evaluating all 60 combinations, and
//! compares hands of the same kind:
//!
//! ```
//! # use omaha_eval::*;
//! let board = CardSet::parse("3h-4c-5s-9d-Ts");
//! let a = CardSet::parse("Ah-2d-Kc-Kd");
//! let b = CardSet::parse("9h-9c-Qc-Jd");
//!
//! let (ha, hb) = (HighHand::evaluate(&a, &board), HighHand::evaluate(&b, &board));
//! assert_eq!(ha.category(), Category::Straight);
//! assert_eq!(ha.showdown(&hb), Showdown::AWins);
//!
//! let (la, lb) = (LowHand::evaluate(&a, &board), LowHand::evaluate(&b, &board));
//! assert_eq!(la.name(), "5432A");
//! assert!(!lb.qualified());
//! assert_eq!(la.showdown(&lb), Showdown::AWins);
//! ```
//!
//! Hands of different kinds are wrapped in a [Hand], comparing a high hand
//! with a low hand gives [Showdown::NotComparable]:
//!
//! ```
//! # use omaha_eval::*;
//! # let board = CardSet::parse("3h-4c-5s-9d-Ts");
//! # let a = CardSet::parse("Ah-2d-Kc-Kd");
//! let high = Hand::high(&a, &board);
//! let low = Hand::low(&a, &board);
//! assert_eq!(compare(&high, &low), Showdown::NotComparable);
//! ```
//!
//! Evaluation has no shared state, hands can be evaluated from many threads.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod classify;
pub use classify::{Category, category_name, classify};

pub mod combos;

mod hand;
pub use hand::{Hand, Kind, Showdown, compare};

mod high;
pub use high::{Describe, HighHand};

mod low;
pub use low::LowHand;

// Reexport cards types.
pub use omaha_cards::{Card, CardSet, Deck, Origin, Rank, Suit};
