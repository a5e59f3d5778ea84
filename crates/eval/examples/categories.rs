// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example categories -- --deals 1000000 --tasks 4
// ```
use clap::{Parser, value_parser};
use std::{
    sync::atomic::{AtomicU64, Ordering},
    thread,
    time::Instant,
};

use omaha_eval::*;

#[derive(Debug, Parser)]
struct Cli {
    /// Number of random deals per task.
    #[clap(long, default_value_t = 100_000)]
    deals: u64,
    /// Number of parallel tasks.
    #[clap(long, default_value_t = 4, value_parser = value_parser!(u16).range(1..=64))]
    tasks: u16,
}

/// Per task counters.
#[derive(Default)]
struct Counters {
    categories: [AtomicU64; 10],
    low: AtomicU64,
}

fn main() {
    let cli = Cli::parse();

    // Create per task counters to avoid contention.
    let task_counters = (0..cli.tasks)
        .map(|_| Counters::default())
        .collect::<Vec<_>>();

    let now = Instant::now();

    thread::scope(|s| {
        for counters in &task_counters {
            s.spawn(move || {
                let mut rng = rand::rng();
                for _ in 0..cli.deals {
                    let mut deck = Deck::new_and_shuffled(&mut rng);
                    let (Some(hole), Some(board)) = (
                        deck.deal_set(4, Origin::Hole),
                        deck.deal_set(5, Origin::Community),
                    ) else {
                        unreachable!("A new deck has 52 cards");
                    };

                    let high = HighHand::evaluate(&hole, &board);
                    counters.categories[high.category().value() as usize]
                        .fetch_add(1, Ordering::Relaxed);

                    if LowHand::evaluate(&hole, &board).qualified() {
                        counters.low.fetch_add(1, Ordering::Relaxed);
                    }
                }
            });
        }
    });

    let elapsed = now.elapsed().as_secs_f64();

    let total = cli.deals * cli.tasks as u64;
    println!("Total deals      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Deals/sec:       {:.0}\n", total as f64 / elapsed);

    for category in Category::categories() {
        let count = task_counters
            .iter()
            .map(|c| c.categories[category.value() as usize].load(Ordering::Relaxed))
            .sum::<u64>();
        println!("{:<16} {count}", format!("{}:", category.name()));
    }

    let low = task_counters
        .iter()
        .map(|c| c.low.load(Ordering::Relaxed))
        .sum::<u64>();
    println!("\nLow qualified:   {low}");
}
