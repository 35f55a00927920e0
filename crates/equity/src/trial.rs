// Copyright (C) 2025 Foldcall Developers
// SPDX-License-Identifier: Apache-2.0

//! A single simulated hand.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, iter, ops};

use foldcall_cards::Deck;

use crate::{EquityError, Scenario, classify, dealer};

/// Wins and ties against the opponents, losses are the rest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    /// Opponents with a lower category.
    pub wins: u64,
    /// Opponents with the same category.
    pub ties: u64,
}

impl ops::Add for Outcome {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            wins: self.wins + rhs.wins,
            ties: self.ties + rhs.ties,
        }
    }
}

impl ops::AddAssign for Outcome {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl iter::Sum for Outcome {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Outcome::default(), ops::Add::add)
    }
}

/// Simulates one hand against the scenario opponents.
///
/// Builds a shuffled deck without the player and board cards, deals the
/// opponents, completes the board, and compares the player category with each
/// opponent category. The scenario guarantees the known cards are distinct.
pub fn simulate<R: Rng>(scenario: &Scenario, rng: &mut R) -> Result<Outcome, EquityError> {
    let hole = scenario.hole();
    let mut deck = Deck::with_excluded(&[hole.as_slice(), scenario.board()].concat());
    deck.shuffle(rng);

    let hands = dealer::deal(&mut deck, scenario.opponents())?;

    let mut board = scenario.board().to_vec();
    dealer::complete_board(&mut board, &mut deck)?;

    let mut hand = [hole[0], hole[1], board[0], board[1], board[2], board[3], board[4]];
    let player = classify(&hand);

    let mut outcome = Outcome::default();
    for [c1, c2] in hands {
        hand[0] = c1;
        hand[1] = c2;
        match player.compare(classify(&hand)) {
            Ordering::Greater => outcome.wins += 1,
            Ordering::Equal => outcome.ties += 1,
            Ordering::Less => {}
        }
    }

    Ok(outcome)
}
