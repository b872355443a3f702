//! `Deck.applyMove` (§4.5).

use super::Deck;
use crate::r#move::Move;

/// Builds the deck reached from `deck` by applying `m`, appending `m` to the
/// returned deck's move trail. `deck` itself is left untouched — piles are
/// shared, so the clone below is cheap.
pub fn apply_move(deck: &Deck, m: Move) -> Deck {
    let mut out = deck.clone();
    out.moves.push(m);

    match m {
        Move::Regular { from, to, index } => {
            let (from, to, index) = (from as usize, to as usize, index as usize);
            out.play[to] = out.play[to].copy_from(&out.play[from], index);
            out.play[from] = out.play[from].remove(index);
        }
        Move::ToFoundation { from, index } => {
            let from = from as usize;
            let index = index as usize;
            let king = out.play[from].at(out.play[from].card_count() - 13);
            out.off = out.off.add_card(king);
            out.play[from] = out.play[from].remove(index);
        }
        Move::FromReserve { reserve_index } => {
            let r = reserve_index as usize;
            for to in 0..super::TABLEAU_COUNT {
                let c = out.talon[r].at(to).with_face_up(true);
                out.play[to] = out.play[to].add_card(c);
            }
            out.talon[r] = crate::pile::Pile::empty();
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Card, Suit};
    use crate::pile::reset_intern_table;

    fn up(rank: u8, suit: Suit) -> Card {
        Card::new(rank, suit, true, false)
    }

    #[test]
    fn regular_move_transfers_run_and_flips_new_top() {
        reset_intern_table();
        let mut deck = Deck::new();
        deck.add_card(0, up(10, Suit::Spades)).unwrap();
        deck.add_card(0, Card::new(9, Suit::Hearts, false, false)).unwrap();
        deck.add_card(0, up(9, Suit::Spades)).unwrap();
        deck.add_card(1, up(10, Suit::Hearts)).unwrap();

        let moved = apply_move(&deck, Move::regular(0, 1, 1));
        assert_eq!(moved.play(1).card_count(), 2);
        assert_eq!(moved.play(0).card_count(), 1);
        assert!(moved.play(0).at(0).is_face_up());
        assert_eq!(moved.moves().len(), 1);
    }

    #[test]
    fn to_foundation_pushes_one_card_and_removes_run() {
        reset_intern_table();
        let mut deck = Deck::new();
        for rank in (1..=13u8).rev() {
            deck.add_card(0, up(rank, Suit::Spades)).unwrap();
        }
        let won = apply_move(&deck, Move::to_foundation(0, 0));
        assert_eq!(won.off().card_count(), 1);
        assert!(won.play(0).is_empty());
    }

    #[test]
    fn from_reserve_deals_one_card_per_tableau_pile_and_clears_talon() {
        reset_intern_table();
        let mut deck = Deck::new();
        for _ in 0..10 {
            deck.add_card(10, Card::new(0, Suit::Spades, false, true)).unwrap();
        }
        for i in 0..10 {
            deck.add_card(i, up(5, Suit::Clubs)).unwrap();
        }
        let dealt = apply_move(&deck, Move::from_reserve(0));
        assert!(dealt.talon(0).is_empty());
        for i in 0..10 {
            assert_eq!(dealt.play(i).card_count(), 2);
            assert!(dealt.play(i).at(1).is_face_up());
        }
    }
}
