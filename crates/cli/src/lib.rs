// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Omaha Hi/Lo deals evaluation.
//!
//! Reads deals with two players hole cards and the community cards, one deal
//! per line, and writes who wins the high and the low pot:
//!
//! ```
//! # use omaha_cli::*;
//! let deals = read_deals("Ac-Kd-Jd-3d 5c-5d-6c-7d Ah-Kh-5s-2s-Qd\n".as_bytes()).unwrap();
//! let reports = evaluate_all(&deals, 1);
//!
//! let mut out = Vec::new();
//! write_reports(&reports, Format::Text, &mut out).unwrap();
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "Ac-Kd-Jd-3d 5c-5d-6c-7d Ah-Kh-5s-2s-Qd\n\
//!      => HandB wins Hi (3-of-a-Kind); HandB wins Lo (7652A)\n\n"
//! );
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub mod deal;
pub use deal::{Deal, DealError};
pub mod report;
pub use report::{Contest, Report};
pub mod runner;
pub use runner::{
    Config, DealConfig, Format, evaluate_all, generate, read_deals, run, write_random_deals,
    write_reports,
};
