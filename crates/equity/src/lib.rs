// Copyright (C) 2025 Foldcall Developers
// SPDX-License-Identifier: Apache-2.0

//! Foldcall Monte Carlo equity estimator.
//!
//! Estimates a player win rate against a number of random opponents given
//! the player cards and the known board cards, and maps the win rate to a
//! betting action. Each simulation shuffles a deck without the known cards,
//! deals two cards to each opponent, completes the board, and compares hand
//! categories (see [classify()]). Kickers are ignored so two hands in the
//! same category tie.
//!
//! ```
//! # use foldcall_equity::*;
//! let scenario = Scenario::parse("4C 4D", "4H 4S 2C 7D 9H", 3).unwrap();
//! let config = EquityConfig {
//!     simulations: 1_000,
//!     seed: Some(42),
//!     ..Default::default()
//! };
//!
//! let est = estimate(&scenario, Chips::new(500), &config).unwrap();
//! assert_eq!(est.win_rate, 1.0);
//! assert_eq!(est.action, Action::AllIn);
//! assert_eq!(est.raise, Chips::new(500));
//! ```
//!
//! Simulations can be split across parallel tasks and bounded in time, a run
//! stopped by the time limit returns an estimate over the completed
//! simulations with the `truncated` flag set:
//!
//! ```
//! # use foldcall_equity::*;
//! # use std::time::Duration;
//! let scenario = Scenario::parse("AH KH", "", 2).unwrap();
//! let config = EquityConfig {
//!     simulations: 100_000,
//!     tasks: 4,
//!     seed: None,
//!     time_limit: Some(Duration::from_millis(50)),
//! };
//!
//! let est = estimate(&scenario, Chips::new(1_000), &config).unwrap();
//! assert!((0.0..=1.0).contains(&est.win_rate));
//! assert!(est.truncated || est.trials == 100_000);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod category;
mod classify;
mod config;
pub mod dealer;
mod error;
mod estimate;
pub mod parallel;
mod policy;
pub mod trial;

pub use category::Category;
pub use classify::classify;
pub use config::EquityConfig;
pub use error::EquityError;
pub use estimate::{Estimate, Scenario, estimate};
pub use policy::{Action, Chips, recommend};
pub use trial::Outcome;

// Reexport cards types.
pub use foldcall_cards::{Card, Deck, Rank, Suit, parse_cards};
