// Copyright (C) 2025 Foldcall Developers
// SPDX-License-Identifier: Apache-2.0

//! Equity estimation errors.
use thiserror::Error;

use foldcall_cards::{Card, ParseCardError};

/// Errors reported before or while running an estimate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EquityError {
    /// A card identifier could not be parsed.
    #[error(transparent)]
    InvalidCard(#[from] ParseCardError),
    /// The player must hold exactly two cards.
    #[error("expected 2 hole cards, got {0}")]
    HoleCards(usize),
    /// The board has more than five cards.
    #[error("expected at most 5 board cards, got {0}")]
    BoardCards(usize),
    /// The same card appears more than once in the hole and board cards.
    #[error("card {0} appears more than once")]
    DuplicateCard(Card),
    /// There must be at least one opponent.
    #[error("at least one opponent is required")]
    NoOpponents,
    /// The deck does not have enough cards for the opponents and the board.
    #[error("insufficient cards: {needed} needed, {available} left in the deck")]
    InsufficientCards {
        /// Cards needed to deal the opponents and complete the board.
        needed: usize,
        /// Cards left in the deck.
        available: usize,
    },
    /// The estimate configuration is not valid.
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
}
