use crate::cards::deal::Deal;
use crate::cards::deal::Winner;
use crate::cards::mode::Mode;
use anyhow::Context;
use std::io::BufRead;
use std::time::Instant;

/// Running count of deal outcomes over a dataset.
///
/// Lines that fail to parse are logged and counted as skipped instead of
/// aborting the run. Only I/O failures stop it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Tally {
    deals: usize,
    player1: usize,
    player2: usize,
    ties: usize,
    skipped: usize,
    millis: u64,
}

impl Tally {
    pub fn from_reader<R: BufRead>(reader: R, mode: Mode) -> anyhow::Result<Self> {
        let start = Instant::now();
        let mut tally = Self::default();
        for (i, line) in reader.lines().enumerate() {
            let line = line.with_context(|| format!("reading line {}", i + 1))?;
            if line.trim().is_empty() {
                continue;
            }
            match Deal::parse(&line, mode) {
                Ok(deal) => {
                    log::debug!(
                        "{:>8} {} [{}| {}]",
                        i + 1,
                        deal,
                        deal.player1().strength(),
                        deal.player2().strength()
                    );
                    tally.record(deal.winner());
                }
                Err(e) => {
                    log::warn!("skipping line {}: {}", i + 1, e);
                    tally.skipped += 1;
                }
            }
        }
        tally.millis = start.elapsed().as_millis() as u64;
        Ok(tally)
    }

    pub fn record(&mut self, winner: Winner) {
        self.deals += 1;
        match winner {
            Winner::Player1 => self.player1 += 1,
            Winner::Player2 => self.player2 += 1,
            Winner::Tie => self.ties += 1,
        }
    }

    pub fn deals(&self) -> usize {
        self.deals
    }
    pub fn player1(&self) -> usize {
        self.player1
    }
    pub fn player2(&self) -> usize {
        self.player2
    }
    pub fn ties(&self) -> usize {
        self.ties
    }
    pub fn skipped(&self) -> usize {
        self.skipped
    }
    pub fn millis(&self) -> u64 {
        self.millis
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "Player 1 wins: {} | Time Elapsed: {}ms | Player 2 wins: {} | Ties: {} | Skipped: {} | Deals: {}",
            self.player1, self.millis, self.player2, self.ties, self.skipped, self.deals
        )
    }
}
