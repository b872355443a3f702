//! Turns a winning move trail into the stdout listing (`spec.md` §6).
//!
//! Replays the trail against the initial deck so each line can show the
//! cards involved as they stood immediately before that move. `Regular` and
//! `FromReserve` moves are numbered; `ToFoundation` moves are silent but
//! still advance the replayed state, matching the reference solver's
//! `explainMove`/`applyMove` split.

use spider_engine::deck::Deck;
use spider_engine::r#move::Move;

#[must_use]
pub fn format_solution(initial: &Deck, moves: &[Move]) -> String {
    let mut out = String::new();
    let mut deck = initial.clone();
    let mut line = 0usize;

    for &m in moves {
        match m {
            Move::Regular { from, to, index } => {
                line += 1;
                let (from, to, index) = (from as usize, to as usize, index as usize);
                let from_pile = deck.play(from);
                let to_pile = deck.play(to);
                let moved = from_pile.card_count() - index;
                let from_card = from_pile.at(index);
                let to_card = if to_pile.is_empty() {
                    "-".to_string()
                } else {
                    to_pile.at(to_pile.card_count() - 1).to_string()
                };
                out.push_str(&format!(
                    "{line} Move {moved} cards from {from} to {to} - {from_card}->{to_card}\n"
                ));
            }
            Move::FromReserve { .. } => {
                line += 1;
                out.push_str(&format!("{line} Draw another talon\n"));
            }
            Move::ToFoundation { .. } => {}
        }
        deck = deck.apply_move(m);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use spider_engine::card::{Card, Suit};
    use spider_engine::pile::reset_intern_table;

    #[test]
    fn numbers_regular_and_reserve_lines_but_not_foundation() {
        reset_intern_table();
        let mut deck = Deck::new();
        for rank in (2..=13u8).rev() {
            deck.add_card(0, Card::new(rank, Suit::Spades, true, false)).unwrap();
        }
        deck.add_card(1, Card::new(1, Suit::Spades, true, false)).unwrap();

        let moves = vec![Move::regular(1, 0, 0), Move::to_foundation(0, 0)];
        let rendered = format_solution(&deck, &moves);
        assert_eq!(rendered.lines().count(), 1);
        assert!(rendered.starts_with("1 Move 1 cards from 1 to 0"));
    }

    #[test]
    fn reserve_draw_renders_as_draw_another_talon() {
        reset_intern_table();
        let mut deck = Deck::new();
        for _ in 0..10 {
            deck.add_card(10, Card::new(0, Suit::Spades, false, true)).unwrap();
        }
        for i in 0..10 {
            deck.add_card(i, Card::new(5, Suit::Clubs, true, false)).unwrap();
        }
        let rendered = format_solution(&deck, &[Move::from_reserve(0)]);
        assert_eq!(rendered.trim_end(), "1 Draw another talon");
    }
}
