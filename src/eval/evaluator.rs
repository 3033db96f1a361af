//! Poker hand evaluation.
//!
//! Ranks 5-card hands directly from rank groupings and finds the best
//! 5-card subset of 6 or 7 cards by exhaustive search.

use crate::cards::{Card, HoleCards};
use crate::error::EvalError;

use super::hand_rank::{HandCategory, HandRank};

/// Rank bitmask of the wheel (A-5-4-3-2).
const WHEEL_BITS: u16 = (1 << 14) | (1 << 5) | (1 << 4) | (1 << 3) | (1 << 2);

/// Hand evaluator for poker hands.
#[derive(Debug, Clone, Copy, Default)]
pub struct HandEvaluator;

impl HandEvaluator {
    /// Create a new hand evaluator.
    pub fn new() -> Self {
        Self
    }

    /// Evaluate the best 5-card hand among 5 to 7 cards.
    pub fn best_hand_rank(&self, cards: &[Card]) -> Result<HandRank, EvalError> {
        match cards.len() {
            5 => Ok(self.evaluate_5(&[cards[0], cards[1], cards[2], cards[3], cards[4]])),
            6 => Ok(self.evaluate_6(&[cards[0], cards[1], cards[2], cards[3], cards[4], cards[5]])),
            7 => Ok(self.evaluate_7(&[
                cards[0], cards[1], cards[2], cards[3], cards[4], cards[5], cards[6],
            ])),
            n => Err(EvalError::InvalidCardCount(n)),
        }
    }

    /// Evaluate hole cards on a complete board.
    #[inline]
    pub fn evaluate_hole(&self, hole: &HoleCards, board: &[Card; 5]) -> HandRank {
        self.evaluate_7(&[
            hole.card1, hole.card2, board[0], board[1], board[2], board[3], board[4],
        ])
    }

    /// Evaluate a 5-card hand.
    pub fn evaluate_5(&self, cards: &[Card; 5]) -> HandRank {
        let mut rank_counts = [0u8; 15];
        let mut rank_bits = 0u16;
        for card in cards {
            rank_counts[card.rank() as usize] += 1;
            rank_bits |= 1 << card.rank();
        }

        let first_suit = cards[0].suit();
        let is_flush = cards.iter().all(|c| c.suit() == first_suit);

        // (count, rank) groups sorted by count desc, then rank desc
        let mut groups = [(0u8, 0u8); 5];
        let mut distinct = 0;
        for rank in (2..=14u8).rev() {
            let count = rank_counts[rank as usize];
            if count > 0 {
                groups[distinct] = (count, rank);
                distinct += 1;
            }
        }
        let groups = &mut groups[..distinct];
        groups.sort_unstable_by(|a, b| b.cmp(a));

        let straight_high = if distinct == 5 {
            Self::straight_high(groups[0].1, groups[4].1, rank_bits)
        } else {
            None
        };

        // Grouped ranks in significance order double as the tiebreak for
        // every category except straights.
        let mut ordered = [0u8; 5];
        for (slot, &(_, rank)) in ordered.iter_mut().zip(groups.iter()) {
            *slot = rank;
        }
        let ordered = &ordered[..distinct];

        if let Some(high) = straight_high {
            let category = if is_flush {
                HandCategory::StraightFlush
            } else {
                HandCategory::Straight
            };
            return HandRank::new(category, &[high]);
        }

        if is_flush {
            return HandRank::new(HandCategory::Flush, ordered);
        }

        let category = match (groups[0].0, groups.get(1).map_or(0, |g| g.0)) {
            (4, _) => HandCategory::FourOfAKind,
            (3, 2) => HandCategory::FullHouse,
            (3, _) => HandCategory::ThreeOfAKind,
            (2, 2) => HandCategory::TwoPair,
            (2, _) => HandCategory::OnePair,
            _ => HandCategory::HighCard,
        };

        HandRank::new(category, ordered)
    }

    /// Evaluate a 6-card hand (best 5-card combination).
    pub fn evaluate_6(&self, cards: &[Card; 6]) -> HandRank {
        let mut best = self.evaluate_5(&[cards[0], cards[1], cards[2], cards[3], cards[4]]);

        // Try the remaining 5 combinations by skipping one card
        for skip in 0..5 {
            let mut hand = [cards[5]; 5];
            let mut n = 0;
            for (i, &card) in cards.iter().enumerate() {
                if i != skip && n < 5 {
                    hand[n] = card;
                    n += 1;
                }
            }
            let rank = self.evaluate_5(&hand);
            if rank > best {
                best = rank;
            }
        }

        best
    }

    /// Evaluate a 7-card hand (best 5-card combination).
    pub fn evaluate_7(&self, cards: &[Card; 7]) -> HandRank {
        let mut best = self.evaluate_5(&[cards[0], cards[1], cards[2], cards[3], cards[4]]);

        // Try all 21 combinations of 5 cards from 7
        for i in 0..7 {
            for j in (i + 1)..7 {
                for k in (j + 1)..7 {
                    for l in (k + 1)..7 {
                        for m in (l + 1)..7 {
                            let hand = [cards[i], cards[j], cards[k], cards[l], cards[m]];
                            let rank = self.evaluate_5(&hand);
                            if rank > best {
                                best = rank;
                            }
                        }
                    }
                }
            }
        }

        best
    }

    /// High card of a straight over five distinct ranks, if any.
    /// The wheel counts the ace as 1, so its high card is 5.
    fn straight_high(highest: u8, lowest: u8, rank_bits: u16) -> Option<u8> {
        if highest - lowest == 4 {
            Some(highest)
        } else if rank_bits == WHEEL_BITS {
            Some(5)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards_from_str(s: &str) -> Vec<Card> {
        s.split_whitespace().map(|c| c.parse().unwrap()).collect()
    }

    fn rank5(s: &str) -> HandRank {
        HandEvaluator::new().best_hand_rank(&cards_from_str(s)).unwrap()
    }

    #[test]
    fn test_high_card() {
        let rank = rank5("As Kd Qh Jc 9s");
        assert_eq!(rank.category(), HandCategory::HighCard);
        assert_eq!(rank.tiebreak(), &[14, 13, 12, 11, 9]);
    }

    #[test]
    fn test_one_pair() {
        let rank = rank5("Js Ad Kh Jc 4s");
        assert_eq!(rank.category(), HandCategory::OnePair);
        assert_eq!(rank.tiebreak(), &[11, 14, 13, 4]);
    }

    #[test]
    fn test_two_pair() {
        let rank = rank5("4s Ad Kh 4c As");
        assert_eq!(rank.category(), HandCategory::TwoPair);
        assert_eq!(rank.tiebreak(), &[14, 4, 13]);
    }

    #[test]
    fn test_three_of_a_kind() {
        let rank = rank5("7s 7d 7h Kc 2s");
        assert_eq!(rank.category(), HandCategory::ThreeOfAKind);
        assert_eq!(rank.tiebreak(), &[7, 13, 2]);
    }

    #[test]
    fn test_straight() {
        let rank = rank5("Ts 9d 8h 7c 6s");
        assert_eq!(rank.category(), HandCategory::Straight);
        assert_eq!(rank.tiebreak(), &[10]);

        let broadway = rank5("As Kd Qh Jc Ts");
        assert_eq!(broadway.category(), HandCategory::Straight);
        assert_eq!(broadway.tiebreak(), &[14]);
    }

    #[test]
    fn test_wheel_is_five_high() {
        let wheel = rank5("As 2d 3h 4c 5s");
        assert_eq!(wheel.category(), HandCategory::Straight);
        assert_eq!(wheel.tiebreak(), &[5]);

        let six_high = rank5("2d 3h 4c 5s 6h");
        assert!(six_high > wheel);

        let steel_wheel = rank5("Ah 2h 3h 4h 5h");
        assert_eq!(steel_wheel.category(), HandCategory::StraightFlush);
        assert_eq!(steel_wheel.tiebreak(), &[5]);
    }

    #[test]
    fn test_no_wraparound_straight() {
        let rank = rank5("Qs Kd Ah 2c 3s");
        assert_eq!(rank.category(), HandCategory::HighCard);
    }

    #[test]
    fn test_flush() {
        let rank = rank5("As Ks 9s 7s 2s");
        assert_eq!(rank.category(), HandCategory::Flush);
        assert_eq!(rank.tiebreak(), &[14, 13, 9, 7, 2]);
    }

    #[test]
    fn test_full_house() {
        let rank = rank5("3s 3d 3h Kc Kd");
        assert_eq!(rank.category(), HandCategory::FullHouse);
        assert_eq!(rank.tiebreak(), &[3, 13]);
    }

    #[test]
    fn test_four_of_a_kind() {
        let rank = rank5("9s 9d 9h 9c Ks");
        assert_eq!(rank.category(), HandCategory::FourOfAKind);
        assert_eq!(rank.tiebreak(), &[9, 13]);
    }

    #[test]
    fn test_straight_flush() {
        let rank = rank5("9s 8s 7s 6s 5s");
        assert_eq!(rank.category(), HandCategory::StraightFlush);
        assert_eq!(rank.tiebreak(), &[9]);

        let royal = rank5("As Ks Qs Js Ts");
        assert_eq!(royal.category(), HandCategory::StraightFlush);
        assert!(royal > rank);
    }

    #[test]
    fn test_category_ordering() {
        let ladder = [
            rank5("As Kd Qh Jc 9s"),
            rank5("2s 2d 3h 4c 5s"),
            rank5("2s 2d 3h 3c 4s"),
            rank5("2s 2d 2h 3c 4s"),
            rank5("As 2d 3h 4c 5s"),
            rank5("2h 3h 4h 5h 7h"),
            rank5("2s 2d 2h 3c 3s"),
            rank5("2s 2d 2h 2c 3s"),
            rank5("Ah 2h 3h 4h 5h"),
        ];
        for pair in ladder.windows(2) {
            assert!(pair[1] > pair[0], "{} should beat {}", pair[1], pair[0]);
        }

        // Weakest straight flush over strongest quads over strongest boat
        assert!(rank5("Ah 2h 3h 4h 5h") > rank5("As Ad Ah Ac Ks"));
        assert!(rank5("2s 2d 2h 2c 3s") > rank5("As Ad Ah Kc Ks"));
    }

    #[test]
    fn test_kickers_break_ties() {
        assert!(rank5("As Ad Kh Qc 3s") > rank5("Ac Ah Kd Jc Ts"));
        assert!(rank5("Ks Kd 4h 4c As") > rank5("Kc Kh 4d 4s Qs"));
        assert!(rank5("7s 7d 7h Ac 2s") > rank5("7c 7h 7d Kc Qs"));
        assert!(rank5("9s 9d 9h 9c As") > rank5("9c 9h 9d 9s Ks"));
    }

    #[test]
    fn test_equal_hands_in_different_suits_tie() {
        assert_eq!(rank5("As Kd Qh Jc 9s"), rank5("Ah Kc Qd Js 9h"));
        assert_eq!(rank5("Ts 9d 8h 7c 6s"), rank5("Th 9s 8c 7d 6h"));
    }

    #[test]
    fn test_7_card_evaluation() {
        let rank = rank5("Ah As Ad Ac Kh Qs Jd");
        assert_eq!(rank.category(), HandCategory::FourOfAKind);
        assert_eq!(rank.tiebreak(), &[14, 13]);

        // Two sets make a full house with the higher set on top
        let rank = rank5("8h 8s 8d 5c 5h 5s 2d");
        assert_eq!(rank.category(), HandCategory::FullHouse);
        assert_eq!(rank.tiebreak(), &[8, 5]);

        // Six suited cards keep the best five
        let rank = rank5("2h 9h Kh 4h 7h Jh Ac");
        assert_eq!(rank.category(), HandCategory::Flush);
        assert_eq!(rank.tiebreak(), &[13, 11, 9, 7, 4]);

        // Three pairs keep the best two and the best remaining kicker
        let rank = rank5("Qs Qd 6h 6c 3s 3d 2h");
        assert_eq!(rank.category(), HandCategory::TwoPair);
        assert_eq!(rank.tiebreak(), &[12, 6, 3]);
    }

    #[test]
    fn test_6_card_evaluation() {
        let rank = rank5("5c 6d 7h 8s 9c Tc");
        assert_eq!(rank.category(), HandCategory::Straight);
        assert_eq!(rank.tiebreak(), &[10]);
    }

    #[test]
    fn test_evaluate_hole() {
        let eval = HandEvaluator::new();
        let aa: HoleCards = "AhAd".parse().unwrap();
        let kk: HoleCards = "KhKd".parse().unwrap();
        let board: Vec<Card> = cards_from_str("Qs Jc 7d 3s 2h");
        let board = [board[0], board[1], board[2], board[3], board[4]];

        assert!(eval.evaluate_hole(&aa, &board) > eval.evaluate_hole(&kk, &board));
    }

    #[test]
    fn test_invalid_card_count() {
        let eval = HandEvaluator::new();
        let four = cards_from_str("As Kd Qh Jc");
        assert_eq!(eval.best_hand_rank(&four), Err(EvalError::InvalidCardCount(4)));
        let eight = cards_from_str("As Kd Qh Jc 9s 8s 7s 6s");
        assert_eq!(eval.best_hand_rank(&eight), Err(EvalError::InvalidCardCount(8)));
    }
}
