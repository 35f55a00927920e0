// Copyright (C) 2025 Foldcall Developers
// SPDX-License-Identifier: Apache-2.0

//! Dealing opponents hands and board cards.
//!
//! Both functions draw from the end of the deck and the cards they draw are
//! gone from the deck, the deck should be shuffled before dealing to get
//! random hands.
use foldcall_cards::{Card, Deck};

use crate::EquityError;

/// The number of cards in a complete board.
pub const BOARD_SIZE: usize = 5;

/// Deals a two cards hand to each of the `num_players`.
///
/// Each hand takes two consecutive cards from the end of the deck, fails
/// without drawing any card if the deck doesn't have enough cards.
pub fn deal(deck: &mut Deck, num_players: usize) -> Result<Vec<[Card; 2]>, EquityError> {
    ensure_cards(deck, 2 * num_players)?;

    let mut hands = Vec::with_capacity(num_players);
    while hands.len() < num_players {
        hands.push([draw(deck)?, draw(deck)?]);
    }

    Ok(hands)
}

/// Draws cards from the end of the deck until the board has 5 cards.
pub fn complete_board(board: &mut Vec<Card>, deck: &mut Deck) -> Result<(), EquityError> {
    ensure_cards(deck, BOARD_SIZE.saturating_sub(board.len()))?;

    while board.len() < BOARD_SIZE {
        board.push(draw(deck)?);
    }

    Ok(())
}

fn draw(deck: &mut Deck) -> Result<Card, EquityError> {
    deck.deal().ok_or(EquityError::InsufficientCards {
        needed: 1,
        available: 0,
    })
}

fn ensure_cards(deck: &Deck, needed: usize) -> Result<(), EquityError> {
    if deck.count() < needed {
        Err(EquityError::InsufficientCards {
            needed,
            available: deck.count(),
        })
    } else {
        Ok(())
    }
}
