//! Five-card poker hand classification and head-to-head ranking.
//!
//! ## Core Types
//!
//! - [`Hand`] — Five cards held as rank and suit multisets
//! - [`HandRank`] — Hand category, high card through royal flush
//! - [`Kickers`] — Tie-break key of `(frequency, rank)` pairs
//! - [`Strength`] — Category plus tie-break key, totally ordered
//!
//! ## Records
//!
//! - [`Deal`] — Two hands read from one dataset line
//! - [`Tally`] — Outcome counts over a whole dataset
//!
//! [`Hand`]: cards::Hand
//! [`HandRank`]: cards::HandRank
//! [`Kickers`]: cards::Kickers
//! [`Strength`]: cards::Strength
//! [`Deal`]: cards::Deal
//! [`Tally`]: tally::Tally
pub mod cards;
pub mod tally;

#[cfg(feature = "cli")]
pub mod cli;

/// Random instance generation for testing and benchmarking.
pub trait Arbitrary {
    fn random() -> Self;
}

/// Initialize terminal logging at the given level.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter) {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .unwrap_or_else(|e| eprintln!("logger already initialized: {}", e));
}
