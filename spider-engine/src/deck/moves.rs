//! The move generator (§4.4).

use super::Deck;
use crate::r#move::Move;

/// Enumerates legal, non-redundant moves from `deck`.
///
/// Completing a 13-card run always preempts every other candidate: as soon
/// as one is found the whole output is discarded in favor of the single
/// `ToFoundation` move.
pub fn get_moves(deck: &Deck) -> Vec<Move> {
    if deck.moves_len() >= super::MAX_MOVES - 1 {
        return Vec::new();
    }

    let next_talon = deck.talon.iter().position(|p| !p.is_empty());
    let mut moves = Vec::new();
    let mut any_tableau_empty = false;

    for from in 0..super::TABLEAU_COUNT {
        let from_pile = &deck.play[from];
        if from_pile.is_empty() {
            any_tableau_empty = true;
            continue;
        }

        let count = from_pile.card_count();
        let top_suit = from_pile.at(count - 1).suit();
        // Seeded one below the top card's rank so the first iteration's own
        // check trivially passes (spec.md §9 calls this out explicitly).
        let mut top_rank = from_pile.at(count - 1).rank() - 1;

        let mut i = count;
        while i > 0 {
            let index = i - 1;
            let current = from_pile.at(index);
            if !current.is_face_up() || current.suit() != top_suit || top_rank + 1 != current.rank() {
                break;
            }
            top_rank = current.rank();

            let run_len = count - index;
            if run_len == 13 {
                return vec![Move::to_foundation(from as u8, index as u8)];
            }

            let broken_sequence = if index > 0 && from_pile.at(index).in_sequence_to(from_pile.at(index - 1)) {
                count - index
            } else {
                0
            };

            let can_move_to_empty =
                next_talon.is_some() || (index != 0 && broken_sequence == 0);
            let mut emitted_to_empty = false;

            for to in 0..super::TABLEAU_COUNT {
                if to == from {
                    continue;
                }
                let to_pile = &deck.play[to];
                if !to_pile.is_empty() {
                    let to_top = to_pile.at(to_pile.card_count() - 1);
                    if to_top.rank() != top_rank + 1 {
                        continue;
                    }
                    if broken_sequence > 0
                        && !(to_pile.sequence_of(top_suit) + broken_sequence as u32
                            > from_pile.sequence_of(top_suit))
                    {
                        continue;
                    }
                    moves.push(Move::regular(from as u8, to as u8, index as u8));
                } else {
                    if !can_move_to_empty || emitted_to_empty {
                        continue;
                    }
                    moves.push(Move::regular(from as u8, to as u8, index as u8));
                    emitted_to_empty = true;
                }
            }

            i -= 1;
        }
    }

    if !any_tableau_empty {
        if let Some(t) = next_talon {
            moves.push(Move::from_reserve(t as u8));
        }
    }

    moves
}
