// Copyright (C) 2025 Foldcall Developers
// SPDX-License-Identifier: Apache-2.0

//! Hand categories and their ordering.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

/// A hand category, from the weakest to the strongest.
///
/// Categories are the only strength a hand has, two hands in the same
/// category are equal whatever their kickers. There is no straight flush
/// category, see [classify](crate::classify()).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    /// No other category.
    HighCard = 0,
    /// Two cards of the same rank.
    OnePair,
    /// Two different pairs.
    TwoPair,
    /// Three cards of the same rank.
    ThreeOfAKind,
    /// Five consecutive ranks.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four cards of the same rank.
    FourOfAKind,
}

impl Category {
    /// All categories from the weakest to the strongest.
    pub const ALL: [Category; 8] = [
        Category::HighCard,
        Category::OnePair,
        Category::TwoPair,
        Category::ThreeOfAKind,
        Category::Straight,
        Category::Flush,
        Category::FullHouse,
        Category::FourOfAKind,
    ];

    /// Compares two categories by their position in [Category::ALL].
    pub fn compare(self, other: Category) -> Ordering {
        (self as u8).cmp(&(other as u8))
    }

    /// The category label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compare_is_reflexive() {
        for c in Category::ALL {
            assert_eq!(c.compare(c), Ordering::Equal);
        }
    }

    #[test]
    fn compare_is_antisymmetric() {
        for a in Category::ALL {
            for b in Category::ALL {
                assert_eq!(a.compare(b), b.compare(a).reverse());
                if a.compare(b) == Ordering::Equal {
                    assert_eq!(a, b);
                }
            }
        }
    }

    #[test]
    fn compare_is_transitive() {
        for a in Category::ALL {
            for b in Category::ALL {
                for c in Category::ALL {
                    if a.compare(b) == Ordering::Less && b.compare(c) == Ordering::Less {
                        assert_eq!(a.compare(c), Ordering::Less);
                    }
                }
            }
        }
    }

    #[test]
    fn compare_follows_ranking() {
        for (i, a) in Category::ALL.into_iter().enumerate() {
            for (j, b) in Category::ALL.into_iter().enumerate() {
                assert_eq!(a.compare(b), i.cmp(&j));
                assert_eq!(a.cmp(&b), a.compare(b));
            }
        }

        assert_eq!(Category::Flush.compare(Category::Straight), Ordering::Greater);
        assert_eq!(Category::TwoPair.compare(Category::ThreeOfAKind), Ordering::Less);
    }

    #[test]
    fn category_labels() {
        assert_eq!(Category::FourOfAKind.to_string(), "Four of a Kind");
        assert_eq!(Category::HighCard.to_string(), "High Card");
    }
}
