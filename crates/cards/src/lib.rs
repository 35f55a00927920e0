// Copyright (C) 2025 Foldcall Developers
// SPDX-License-Identifier: Apache-2.0

//! Foldcall cards types.
//!
//! This crate define types to create and parse cards:
//!
//! ```
//! # use foldcall_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let td = "TD".parse::<Card>().unwrap();
//! assert_eq!(ah.to_string(), "AH");
//! assert_eq!(td, Card::new(Rank::Ten, Suit::Diamonds));
//! ```
//!
//! and a [Deck] type that lists the cards in canonical order (ranks from deuce
//! to ace, and clubs, diamonds, hearts, spades within a rank), optionally
//! without some known cards, that can be shuffled and dealt from:
//!
//! ```
//! # use foldcall_cards::{parse_cards, Deck};
//! let known = parse_cards("AD KD 2C 7H 9S").unwrap();
//! let mut deck = Deck::with_excluded(&known);
//! assert_eq!(deck.count(), 47);
//!
//! deck.shuffle(&mut rand::rng());
//! let card = deck.deal().unwrap();
//! assert!(!known.contains(&card));
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, ParseCardError, Rank, Suit, parse_cards};
