//! # lr_core - League Ranking Engine
//!
//! This library computes a league table from plain-text match result lines
//! of the form `"Lions 3, Snakes 3"`, tallying points under standard
//! win/draw/loss rules and producing competition-style standings.
//!
//! ## Features
//! - Strict per-line validation with every bad line collected and reported
//! - Configurable win/draw/loss point values
//! - Tie-aware ranking: equal points share a rank, the next rank gaps ahead
//! - Single-pass, allocation-light line consumption with no I/O of its own

pub mod error;
pub mod models;
pub mod parser;
pub mod ranking;

// Re-export the main API types
pub use error::LineError;
pub use models::{BadLine, GameResult, RankedEntry, Team};
pub use parser::{LineParser, ScoringRules};
pub use ranking::RankingEngine;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
