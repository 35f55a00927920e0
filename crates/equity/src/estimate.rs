// Copyright (C) 2025 Foldcall Developers
// SPDX-License-Identifier: Apache-2.0

//! Equity estimate and betting recommendation.
use ahash::HashSet;
use log::{info, warn};
use serde::{Deserialize, Serialize};

use foldcall_cards::{Card, Deck, parse_cards};

use crate::{
    Action, Chips, EquityConfig, EquityError,
    dealer::BOARD_SIZE,
    parallel::par_simulate,
    policy::recommend,
};

/// The known cards and the number of opponents.
///
/// A scenario is checked when created so that any deal from it has enough
/// cards and no duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    hole: [Card; 2],
    board: Vec<Card>,
    opponents: usize,
}

impl Scenario {
    /// Creates a scenario from the player cards, the known board cards, and
    /// the number of opponents.
    pub fn new(hole: &[Card], board: &[Card], opponents: usize) -> Result<Self, EquityError> {
        let &[c1, c2] = hole else {
            return Err(EquityError::HoleCards(hole.len()));
        };

        if board.len() > BOARD_SIZE {
            return Err(EquityError::BoardCards(board.len()));
        }

        let mut seen = HashSet::default();
        if let Some(card) = hole.iter().chain(board).find(|c| !seen.insert(**c)) {
            return Err(EquityError::DuplicateCard(*card));
        }

        if opponents == 0 {
            return Err(EquityError::NoOpponents);
        }

        let available = Deck::SIZE - hole.len() - board.len();
        let needed = 2 * opponents + BOARD_SIZE - board.len();
        if needed > available {
            return Err(EquityError::InsufficientCards { needed, available });
        }

        Ok(Self {
            hole: [c1, c2],
            board: board.to_vec(),
            opponents,
        })
    }

    /// Creates a scenario from cards identifiers like `"AD KD"`.
    pub fn parse(hole: &str, board: &str, opponents: usize) -> Result<Self, EquityError> {
        Self::new(&parse_cards(hole)?, &parse_cards(board)?, opponents)
    }

    /// The player cards.
    pub fn hole(&self) -> &[Card; 2] {
        &self.hole
    }

    /// The known board cards.
    pub fn board(&self) -> &[Card] {
        &self.board
    }

    /// The number of opponents.
    pub fn opponents(&self) -> usize {
        self.opponents
    }
}

/// The result of an estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    /// Share of opponents beaten with ties counted as half, in `[0, 1]`.
    pub win_rate: f64,
    /// The recommended action.
    pub action: Action,
    /// The amount to raise, never more than the available chips.
    pub raise: Chips,
    /// Number of simulated hands.
    pub trials: u64,
    /// Opponents beaten over all simulated hands.
    pub wins: u64,
    /// Opponents tied over all simulated hands.
    pub ties: u64,
    /// The time limit stopped the simulations before all of them ran.
    pub truncated: bool,
}

/// Estimates the player win rate against random opponents and recommends an
/// action given the available `chips`.
///
/// Fails before simulating any hand if the configuration is not valid.
pub fn estimate(
    scenario: &Scenario,
    chips: Chips,
    config: &EquityConfig,
) -> Result<Estimate, EquityError> {
    let tally = par_simulate(scenario, config)?;

    let wins = tally.outcome.wins;
    let ties = tally.outcome.ties;
    let matchups = tally.trials as f64 * scenario.opponents() as f64;
    let win_rate = (wins as f64 + ties as f64 / 2.0) / matchups;
    let (action, raise) = recommend(win_rate, chips);

    if tally.truncated {
        warn!(
            "Time limit reached after {} of {} simulations",
            tally.trials, config.simulations
        );
    }

    info!(
        "Win rate {:.3} over {} simulations against {} opponents: {} {}",
        win_rate,
        tally.trials,
        scenario.opponents(),
        action,
        raise
    );

    Ok(Estimate {
        win_rate,
        action,
        raise,
        trials: tally.trials,
        wins,
        ties,
        truncated: tally.truncated,
    })
}
