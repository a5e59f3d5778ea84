// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Deal results.
use log::debug;
use serde::Serialize;
use std::fmt;

use omaha_eval::{Hand, HighHand, Kind, LowHand, Showdown};

use crate::deal::Deal;

/// The result of comparing two players hands of the same kind.
///
/// Unqualified high hands only come from short pools and are reported as
/// `No hand qualified for High`.
#[derive(Debug, Clone, Serialize)]
pub struct Contest {
    /// First player hand.
    pub hand_a: Hand,
    /// Second player hand.
    pub hand_b: Hand,
    /// Who wins.
    pub showdown: Showdown,
}

impl Contest {
    /// Compares two hands.
    pub fn new(hand_a: Hand, hand_b: Hand) -> Self {
        let showdown = hand_a.showdown(&hand_b);
        Self {
            hand_a,
            hand_b,
            showdown,
        }
    }
}

impl fmt::Display for Contest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = self.hand_a.kind();
        match self.showdown {
            Showdown::NotComparable => write!(f, "Cannot compare hands with different type"),
            Showdown::NoneQualified => match kind {
                Kind::High => write!(f, "No hand qualified for High"),
                Kind::Low => write!(f, "No hand qualified for Low"),
            },
            Showdown::Split => write!(f, "Split Pot {kind} ({})", self.hand_a.name()),
            Showdown::AWins => write!(f, "HandA wins {kind} ({})", self.hand_a.name()),
            Showdown::BWins => write!(f, "HandB wins {kind} ({})", self.hand_b.name()),
        }
    }
}

/// The high and low results for a deal.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// The deal cards.
    pub deal: Deal,
    /// The high hands result.
    pub high: Contest,
    /// The low hands result.
    pub low: Contest,
    /// The results summary line.
    pub summary: String,
}

impl Report {
    /// Evaluates a deal.
    pub fn new(deal: &Deal) -> Self {
        let high_a = HighHand::evaluate(&deal.hole_a, &deal.board);
        let high_b = HighHand::evaluate(&deal.hole_b, &deal.board);
        debug!("{deal} A: {} B: {}", high_a.describe(), high_b.describe());

        let high = Contest::new(high_a.into(), high_b.into());
        let low = Contest::new(
            LowHand::evaluate(&deal.hole_a, &deal.board).into(),
            LowHand::evaluate(&deal.hole_b, &deal.board).into(),
        );

        Self {
            deal: deal.clone(),
            summary: format!("{high}; {low}"),
            high,
            low,
        }
    }
}

/// Formats a report as the deal line followed by `=> ` and the summary.
impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.deal)?;
        writeln!(f, "=> {}", self.summary)
    }
}
