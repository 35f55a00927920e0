// Copyright (C) 2025 Foldcall Developers
// SPDX-License-Identifier: Apache-2.0

//! Betting recommendation from a win rate.
use serde::{Deserialize, Serialize};
use std::{fmt, ops};

/// Chips amount.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Chips(u32);

impl Chips {
    /// The zero chips.
    pub const ZERO: Chips = Chips(0);

    /// Creates chips with the given value.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }
}

impl ops::Div<u32> for Chips {
    type Output = Self;

    fn div(self, rhs: u32) -> Self::Output {
        Self(self.0 / rhs)
    }
}

impl fmt::Display for Chips {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let amount = self.0;
        if amount >= 10_000_000 {
            write!(f, "{:.1}M", amount as f64 / 1e6)
        } else if amount >= 1_000_000 {
            write!(
                f,
                "{},{:03},{:03}",
                amount / 1_000_000,
                amount % 1_000_000 / 1_000,
                amount % 1000
            )
        } else if amount >= 1_000 {
            write!(f, "{},{:03}", amount / 1000, amount % 1000)
        } else {
            write!(f, "{}", amount)
        }
    }
}

/// A recommended action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Give up the hand.
    Fold,
    /// Match the current bet.
    Call,
    /// Raise half the chips.
    Raise,
    /// Bet all the chips.
    AllIn,
}

impl Action {
    /// The action label.
    pub fn label(&self) -> &'static str {
        match self {
            Action::Fold => "Fold",
            Action::Call => "Call",
            Action::Raise => "Raise",
            Action::AllIn => "Go All In",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Win rate above which to go all in.
pub const ALL_IN_THRESHOLD: f64 = 0.7;
/// Win rate above which to raise.
pub const RAISE_THRESHOLD: f64 = 0.5;
/// Win rate above which to call.
pub const CALL_THRESHOLD: f64 = 0.3;

/// Maps a win rate to an action and the amount to raise.
///
/// | win rate      | action    | raise       |
/// |---------------|-----------|-------------|
/// | > 0.7         | Go All In | chips       |
/// | (0.5, 0.7]    | Raise     | chips / 2   |
/// | (0.3, 0.5]    | Call      | 0           |
/// | <= 0.3        | Fold      | 0           |
///
/// The raise never exceeds `chips`.
pub fn recommend(win_rate: f64, chips: Chips) -> (Action, Chips) {
    if win_rate > ALL_IN_THRESHOLD {
        (Action::AllIn, chips)
    } else if win_rate > RAISE_THRESHOLD {
        (Action::Raise, chips.min(chips / 2))
    } else if win_rate > CALL_THRESHOLD {
        (Action::Call, Chips::ZERO)
    } else {
        (Action::Fold, Chips::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chips_formatting() {
        assert_eq!(Chips(123).to_string(), "123");
        assert_eq!(Chips(1_000).to_string(), "1,000");
        assert_eq!(Chips(12_345).to_string(), "12,345");
        assert_eq!(Chips(1_234_567).to_string(), "1,234,567");
        assert_eq!(Chips(123_456_789).to_string(), "123.5M");
    }

    #[test]
    fn recommend_tiers() {
        let chips = Chips::new(1_000);
        assert_eq!(recommend(0.95, chips), (Action::AllIn, chips));
        assert_eq!(recommend(0.6, chips), (Action::Raise, Chips::new(500)));
        assert_eq!(recommend(0.4, chips), (Action::Call, Chips::ZERO));
        assert_eq!(recommend(0.1, chips), (Action::Fold, Chips::ZERO));
        assert_eq!(recommend(0.0, chips), (Action::Fold, Chips::ZERO));
        assert_eq!(recommend(1.0, chips), (Action::AllIn, chips));
    }

    #[test]
    fn recommend_boundaries_take_lower_tier() {
        let chips = Chips::new(1_000);
        assert_eq!(recommend(0.7, chips).0, Action::Raise);
        assert_eq!(recommend(0.5, chips).0, Action::Call);
        assert_eq!(recommend(0.3, chips).0, Action::Fold);

        assert_eq!(recommend(0.7 + f64::EPSILON, chips).0, Action::AllIn);
        assert_eq!(recommend(0.5 + f64::EPSILON, chips).0, Action::Raise);
        assert_eq!(recommend(0.3 + f64::EPSILON, chips).0, Action::Call);
    }

    #[test]
    fn raise_never_exceeds_chips() {
        for amount in [0, 1, 2, 3, 999, 1_001, u32::MAX] {
            let chips = Chips::new(amount);
            for rate in [0.0, 0.3, 0.31, 0.5, 0.51, 0.7, 0.71, 1.0] {
                let (_, raise) = recommend(rate, chips);
                assert!(raise <= chips);
            }
        }

        assert_eq!(recommend(0.6, Chips::new(1)), (Action::Raise, Chips::ZERO));
        assert_eq!(recommend(0.6, Chips::new(7)), (Action::Raise, Chips::new(3)));
        assert_eq!(recommend(0.9, Chips::ZERO), (Action::AllIn, Chips::ZERO));
    }

    #[test]
    fn action_labels() {
        assert_eq!(Action::AllIn.to_string(), "Go All In");
        assert_eq!(Action::Fold.to_string(), "Fold");
    }
}
