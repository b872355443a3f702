//! Builds the unknown-card pool and fills in the deal (`spec.md` §6, §9).
//!
//! Resolves the "Open Question" in `spec.md` §9 about `std::random_shuffle`'s
//! unspecified RNG by requiring an explicit seed: the pool is shuffled with
//! a seeded `rand::rngs::SmallRng`, never process-global randomness, so a
//! given seed always reproduces the same deal.

use std::collections::VecDeque;

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use spider_engine::card::{Card, Suit};
use spider_engine::deck::Deck;
use spider_engine::error::SpiderError;

/// Which of the two supported card universes this deck is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Two-suit Spider: Spades and Hearts, four copies of each rank per suit.
    TwoSuit,
    /// One-suit Spider: all Spades, eight copies of each rank.
    OneSuit,
}

impl Variant {
    fn full_multiset(self) -> Vec<Card> {
        let (suits, copies): (&[Suit], u32) = match self {
            Variant::TwoSuit => (&[Suit::Spades, Suit::Hearts], 4),
            Variant::OneSuit => (&[Suit::Spades], 8),
        };
        let mut cards = Vec::with_capacity(104);
        for &suit in suits {
            for rank in 1..=13u8 {
                for _ in 0..copies {
                    cards.push(Card::new(rank, suit, true, false));
                }
            }
        }
        cards
    }
}

/// Computes the pool of cards still required to fill `deck`'s unknown slots,
/// shuffles it with `seed`, and hands it to `Deck::assign_left_cards`.
///
/// Fails with `DeckInconsistent` if the game file already places more copies
/// of some `(suit, rank)` than the variant allows — the diagnostic mirrors
/// what the caller should print to stderr as `Required left: ...`.
pub fn fill_unknowns(deck: &mut Deck, variant: Variant, seed: u64) -> Result<(), SpiderError> {
    let mut required = required_pool(deck, variant)?;
    let mut rng = SmallRng::seed_from_u64(seed);
    required.shuffle(&mut rng);
    let mut pool: VecDeque<Card> = required.into();
    deck.assign_left_cards(&mut pool)
}

/// The multiset of cards not yet placed by the game file: the variant's full
/// multiset minus one entry per already-known card, minus all 13 ranks of
/// each suit already parked in the foundation (each `off` entry is a single
/// sentinel card standing in for its whole completed run — see `Deck::id`'s
/// doc comment and `deck::execution::apply_move`'s `ToFoundation` handling).
pub fn required_pool(deck: &Deck, variant: Variant) -> Result<Vec<Card>, SpiderError> {
    let mut remaining = variant.full_multiset();

    let mut take = |suit, rank| -> Result<(), SpiderError> {
        let pos = remaining
            .iter()
            .position(|c| c.suit() == suit && c.rank() == rank)
            .ok_or_else(|| {
                SpiderError::DeckInconsistent(format!(
                    "too many of card {}{}",
                    rank_letter(rank),
                    suit_letter(suit)
                ))
            })?;
        remaining.swap_remove(pos);
        Ok(())
    };

    let known = deck.count_known_cards();
    for (&(suit, rank), &count) in known.iter() {
        for _ in 0..count {
            take(suit, rank)?;
        }
    }

    for i in 0..deck.off().card_count() {
        let suit = deck.off().at(i).suit();
        for rank in 1..=13u8 {
            take(suit, rank)?;
        }
    }

    Ok(remaining)
}

fn rank_letter(rank: u8) -> char {
    match rank {
        1 => 'A',
        2..=9 => (b'0' + rank) as char,
        10 => 'T',
        11 => 'J',
        12 => 'Q',
        13 => 'K',
        _ => 'N',
    }
}

fn suit_letter(suit: Suit) -> char {
    match suit {
        Suit::Spades => 'S',
        Suit::Hearts => 'H',
        Suit::Clubs => 'C',
        Suit::Diamonds => 'D',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_multiset_has_104_cards_for_both_variants() {
        assert_eq!(Variant::TwoSuit.full_multiset().len(), 104);
        assert_eq!(Variant::OneSuit.full_multiset().len(), 104);
    }

    #[test]
    fn required_pool_shrinks_by_known_cards() {
        spider_engine::pile::reset_intern_table();
        let mut deck = Deck::new();
        deck.add_card(0, Card::new(5, Suit::Spades, true, false)).unwrap();
        let pool = required_pool(&deck, Variant::TwoSuit).unwrap();
        assert_eq!(pool.len(), 103);
    }

    #[test]
    fn required_pool_subtracts_a_full_suit_per_off_entry() {
        spider_engine::pile::reset_intern_table();
        let mut deck = Deck::new();
        deck.add_card(15, Card::new(13, Suit::Spades, true, false)).unwrap();
        let pool = required_pool(&deck, Variant::TwoSuit).unwrap();
        assert_eq!(pool.len(), 104 - 13);
        // 4 copies of each Spades rank minus the 13 (one per rank) the completed run consumed.
        assert_eq!(pool.iter().filter(|c| c.suit() == Suit::Spades).count(), 4 * 13 - 13);
    }

    #[test]
    fn rejects_too_many_copies_of_a_card() {
        spider_engine::pile::reset_intern_table();
        let mut deck = Deck::new();
        for i in 0..5 {
            deck.add_card(i, Card::new(5, Suit::Spades, true, false)).unwrap();
        }
        assert!(required_pool(&deck, Variant::TwoSuit).is_err());
    }

    #[test]
    fn fill_unknowns_is_deterministic_for_a_fixed_seed() {
        spider_engine::pile::reset_intern_table();
        let mut a = Deck::new();
        a.add_card(10, Card::new(0, Suit::Spades, false, true)).unwrap();
        let mut b = a.clone();
        fill_unknowns(&mut a, Variant::TwoSuit, 42).unwrap();

        spider_engine::pile::reset_intern_table();
        fill_unknowns(&mut b, Variant::TwoSuit, 42).unwrap();
        assert_eq!(a.talon(0).to_token_string(), b.talon(0).to_token_string());
    }
}
