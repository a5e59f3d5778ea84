// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Deals file processing.
use anyhow::{Context, Result};
use clap::ValueEnum;
use log::info;
use rand::{SeedableRng, rngs::StdRng};
use std::{
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Write},
    panic,
    path::{Path, PathBuf},
    thread,
    time::Instant,
};

use crate::{deal::Deal, report::Report};

/// Reports output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Deal line followed by the results line.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Evaluation config.
#[derive(Debug)]
pub struct Config {
    /// The deals input file.
    pub input: PathBuf,
    /// The reports output file, stdout if none.
    pub output: Option<PathBuf>,
    /// The reports format.
    pub format: Format,
    /// The number of evaluation threads.
    pub tasks: usize,
}

/// Random deals config.
#[derive(Debug)]
pub struct DealConfig {
    /// The number of deals.
    pub count: usize,
    /// Seed for reproducible deals.
    pub seed: Option<u64>,
    /// The deals output file, stdout if none.
    pub output: Option<PathBuf>,
}

/// Evaluates all deals in the input file and writes the reports.
pub fn run(config: &Config) -> Result<()> {
    let input = File::open(&config.input)
        .with_context(|| format!("Cannot open input file {}", config.input.display()))?;
    let deals = read_deals(BufReader::new(input))?;

    info!("Evaluating {} deals with {} tasks", deals.len(), config.tasks);
    let now = Instant::now();
    let reports = evaluate_all(&deals, config.tasks);
    info!(
        "Evaluated {} deals in {:.3}s",
        reports.len(),
        now.elapsed().as_secs_f64()
    );

    let output = create_output(config.output.as_deref())?;
    write_reports(&reports, config.format, output)
}

/// Writes random deals in the input file format.
pub fn generate(config: &DealConfig) -> Result<()> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    info!("Generating {} deals", config.count);
    let output = create_output(config.output.as_deref())?;
    write_random_deals(config.count, &mut rng, output)
}

/// Reads deals skipping blank lines, fails on the first malformed line.
pub fn read_deals<R: BufRead>(reader: R) -> Result<Vec<Deal>> {
    let mut deals = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.context("Input file read error")?;
        let line = line.strip_suffix('\r').unwrap_or(&line);
        if line.trim().is_empty() {
            continue;
        }

        let deal = Deal::parse(line)
            .with_context(|| format!("Wrong syntax in the input file at line {}", idx + 1))?;
        deals.push(deal);
    }

    Ok(deals)
}

/// Evaluates deals on `tasks` threads, the reports are in the deals order.
pub fn evaluate_all(deals: &[Deal], tasks: usize) -> Vec<Report> {
    if tasks <= 1 || deals.len() < 2 {
        return deals.iter().map(Report::new).collect();
    }

    let chunk_size = deals.len().div_ceil(tasks);
    thread::scope(|s| {
        let handles = deals
            .chunks(chunk_size)
            .map(|chunk| s.spawn(move || chunk.iter().map(Report::new).collect::<Vec<_>>()))
            .collect::<Vec<_>>();

        handles
            .into_iter()
            .flat_map(|h| h.join().unwrap_or_else(|e| panic::resume_unwind(e)))
            .collect()
    })
}

/// Writes reports, text reports are separated by an empty line.
pub fn write_reports<W: Write>(reports: &[Report], format: Format, mut writer: W) -> Result<()> {
    for report in reports {
        match format {
            Format::Text => writeln!(writer, "{report}")?,
            Format::Json => {
                serde_json::to_writer(&mut writer, report)?;
                writeln!(writer)?;
            }
        }
    }

    writer.flush().context("Output flush error")
}

/// Writes `count` random deals, one per line.
pub fn write_random_deals<W: Write>(count: usize, rng: &mut StdRng, mut writer: W) -> Result<()> {
    for _ in 0..count {
        writeln!(writer, "{}", Deal::random(rng)?)?;
    }

    writer.flush().context("Output flush error")
}

fn create_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Cannot open output file {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEALS: &str = "\
Ac-Kd-Jd-3d 5c-5d-6c-7d Ah-Kh-5s-2s-Qd

As-2s-Jd-Kc Ah-2h-Qc-Kd 3h-4c-5s-9d-Ts
   \r
Qc-Kd-Jd-Td 5c-5d-6c-7d Ah-Kh-9s-2s-Qd\r
";

    #[test]
    fn skip_blank_lines() {
        let deals = read_deals(DEALS.as_bytes()).unwrap();
        assert_eq!(deals.len(), 3);
        assert_eq!(deals[2].to_string(), "Qc-Kd-Jd-Td 5c-5d-6c-7d Ah-Kh-9s-2s-Qd");
    }

    #[test]
    fn syntax_error_line() {
        let input = "Ac-Kd-Jd-3d 5c-5d-6c-7d Ah-Kh-5s-2s-Qd\n\nAc-Kd-Jd-3d 5c-5d-6c\n";
        let err = read_deals(input.as_bytes()).unwrap_err();
        assert_eq!(err.to_string(), "Wrong syntax in the input file at line 3");
    }

    #[test]
    fn tasks_keep_order() {
        let mut rng = StdRng::seed_from_u64(7);
        let deals = (0..101)
            .map(|_| Deal::random(&mut rng).unwrap())
            .collect::<Vec<_>>();

        let expected = evaluate_all(&deals, 1)
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<_>>();

        for tasks in [2, 3, 8, 64, 200] {
            let reports = evaluate_all(&deals, tasks)
                .iter()
                .map(|r| r.to_string())
                .collect::<Vec<_>>();
            assert_eq!(reports, expected, "tasks: {tasks}");
        }
    }

    #[test]
    fn random_deals_lines() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut out = Vec::new();
        write_random_deals(5, &mut rng, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 5);
        assert_eq!(read_deals(text.as_bytes()).unwrap().len(), 5);
    }
}
