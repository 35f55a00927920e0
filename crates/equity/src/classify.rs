// Copyright (C) 2025 Foldcall Developers
// SPDX-License-Identifier: Apache-2.0

//! Hand classifier.
//!
//! A hand is classified by counting its ranks and suits and then walking an
//! ordered list of rules, the first rule that matches gives the category and
//! [Category::HighCard] is returned when no rule matches.
//!
//! The rules are not mutually exclusive so their order matters:
//!
//! | Order | Category          | Rule                                           |
//! |-------|-------------------|------------------------------------------------|
//! | 1     | Four of a Kind    | a rank appears 4 or more times                 |
//! | 2     | Full House        | a rank appears 3 times and a rank 2 times      |
//! | 3     | Flush             | a suit appears 5 or more times                 |
//! | 4     | Straight          | 5 consecutive ranks, deuce to ace, no wrapping |
//! | 5     | Three of a Kind   | a rank appears 3 times                         |
//! | 6     | Two Pair          | 2 or more ranks appear 2 times                 |
//! | 7     | One Pair          | a rank appears 2 times                         |
//!
//! A straight flush is a [Category::Flush] as the flush rule comes first, and
//! the wheel (A-2-3-4-5) is not a straight.
use foldcall_cards::{Card, Rank, Suit};

use crate::Category;

/// Number of ranks in a straight.
const STRAIGHT_LEN: usize = 5;

/// Number of cards of the same suit in a flush.
const FLUSH_LEN: u32 = 5;

/// A classification rule.
type Rule = (Category, fn(&Tally) -> bool);

/// The classification rules, from the first checked to the last.
const RULES: [Rule; 7] = [
    (Category::FourOfAKind, Tally::is_four_of_a_kind),
    (Category::FullHouse, Tally::is_full_house),
    (Category::Flush, Tally::is_flush),
    (Category::Straight, Tally::is_straight),
    (Category::ThreeOfAKind, Tally::is_three_of_a_kind),
    (Category::TwoPair, Tally::is_two_pair),
    (Category::OnePair, Tally::is_one_pair),
];

/// Classifies a hand, usually the two hole cards and the five board cards.
///
/// The classification only depends on the cards and not on their order.
pub fn classify(cards: &[Card]) -> Category {
    let tally = Tally::new(cards);
    RULES
        .iter()
        .find(|(_, rule)| rule(&tally))
        .map(|(category, _)| *category)
        .unwrap_or(Category::HighCard)
}

/// Rank and suit counts for a hand.
#[derive(Debug, Default)]
struct Tally {
    ranks: [u32; Rank::COUNT],
    suits: [u32; Suit::COUNT],
}

impl Tally {
    fn new(cards: &[Card]) -> Self {
        let mut tally = Self::default();
        for card in cards {
            tally.ranks[card.rank() as usize] += 1;
            tally.suits[card.suit() as usize] += 1;
        }

        tally
    }

    /// Number of ranks that appear exactly `n` times.
    fn ranks_with(&self, n: u32) -> usize {
        self.ranks.iter().filter(|&&c| c == n).count()
    }

    fn is_four_of_a_kind(&self) -> bool {
        self.ranks.iter().any(|&c| c >= 4)
    }

    fn is_full_house(&self) -> bool {
        self.ranks_with(3) > 0 && self.ranks_with(2) > 0
    }

    fn is_flush(&self) -> bool {
        self.suits.iter().any(|&c| c >= FLUSH_LEN)
    }

    fn is_straight(&self) -> bool {
        self.ranks
            .windows(STRAIGHT_LEN)
            .any(|w| w.iter().all(|&c| c > 0))
    }

    fn is_three_of_a_kind(&self) -> bool {
        self.ranks_with(3) > 0
    }

    fn is_two_pair(&self) -> bool {
        self.ranks_with(2) >= 2
    }

    fn is_one_pair(&self) -> bool {
        self.ranks_with(2) > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use foldcall_cards::{Deck, parse_cards};
    use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

    fn cat(cards: &str) -> Category {
        classify(&parse_cards(cards).unwrap())
    }

    #[test]
    fn four_of_a_kind() {
        assert_eq!(cat("4C 4D 4H 4S 9C JD 2H"), Category::FourOfAKind);
        assert_eq!(cat("4C 4D 4H 4S 9C"), Category::FourOfAKind);
        // Quads beat the full house that is also there.
        assert_eq!(cat("4C 4D 4H 4S 9C 9D 9H"), Category::FourOfAKind);
    }

    #[test]
    fn full_house() {
        assert_eq!(cat("KC KD KH 3S 3C 8D 2H"), Category::FullHouse);
        // A full house with five suited cards is still a full house.
        assert_eq!(cat("KC KD KH 3C 3S 8C 2C 5C"), Category::FullHouse);
        // Two trips and no pair is not a full house.
        assert_eq!(cat("KC KD KH 3S 3C 3D 8H"), Category::ThreeOfAKind);
    }

    #[test]
    fn flush() {
        assert_eq!(cat("2D 5D 8D JD AD 3C 9S"), Category::Flush);
        assert_eq!(cat("2D 5D 8D JD AD 6D 9S"), Category::Flush);
        // Flush beats the pair.
        assert_eq!(cat("2D 5D 8D JD AD 2C 9S"), Category::Flush);
    }

    #[test]
    fn straight_flush_is_a_flush() {
        assert_eq!(cat("5H 6H 7H 8H 9H 2C KD"), Category::Flush);
    }

    #[test]
    fn straight() {
        assert_eq!(cat("5C 6D 7H 8S 9C 2D KH"), Category::Straight);
        assert_eq!(cat("TC JD QH KS AC 2D 2H"), Category::Straight);
        assert_eq!(cat("2C 3D 4H 5S 6C KD KH"), Category::Straight);
        // Straight beats trips.
        assert_eq!(cat("5C 6D 7H 8S 9C 9D 9H"), Category::Straight);
    }

    #[test]
    fn wheel_is_not_a_straight() {
        assert_eq!(cat("AC 2D 3H 4S 5C 9D JH"), Category::HighCard);
        assert_eq!(cat("QC KD AH 2S 3C 8D 8H"), Category::OnePair);
    }

    #[test]
    fn three_of_a_kind() {
        assert_eq!(cat("7C 7D 7H 2S 9C JD KH"), Category::ThreeOfAKind);
    }

    #[test]
    fn two_pair() {
        assert_eq!(cat("7C 7D 2H 2S 9C JD KH"), Category::TwoPair);
        assert_eq!(cat("7C 7D 2H 2S 9C 9D KH"), Category::TwoPair);
    }

    #[test]
    fn one_pair() {
        assert_eq!(cat("7C 7D 2H 4S 9C JD KH"), Category::OnePair);
    }

    #[test]
    fn high_card() {
        assert_eq!(cat("7C 8D 2H 4S TC JD KH"), Category::HighCard);
        assert_eq!(cat("2C 3D 4H 7S 9C JD KH"), Category::HighCard);
    }

    #[test]
    fn repeated_cards_count_without_overflow() {
        let ad = "AD".parse::<Card>().unwrap();
        assert_eq!(classify(&vec![ad; 300]), Category::FourOfAKind);

        let suited = parse_cards("2H 5H 9H JH KH").unwrap().repeat(60);
        assert_eq!(classify(&suited), Category::FourOfAKind);
    }

    #[test]
    fn order_does_not_matter() {
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..1_000 {
            let mut hand = Deck::new_and_shuffled(&mut rng)
                .into_iter()
                .take(7)
                .collect::<Vec<_>>();

            let category = classify(&hand);
            for _ in 0..5 {
                hand.shuffle(&mut rng);
                assert_eq!(classify(&hand), category);
            }
        }
    }

    #[test]
    fn every_category_is_reachable() {
        use ahash::HashSet;

        let mut rng = StdRng::seed_from_u64(3);
        let mut seen = HashSet::default();

        for _ in 0..200_000 {
            let hand = Deck::new_and_shuffled(&mut rng)
                .into_iter()
                .take(7)
                .collect::<Vec<_>>();
            seen.insert(classify(&hand));
        }

        assert_eq!(seen.len(), Category::ALL.len());
    }
}
