//! `SearchEngine` — the bucketed best-first bounded search (§4.7).

use fxhash::FxHashSet;

use crate::deck::Deck;
use crate::error::SpiderError;
use crate::evaluator;
use crate::r#move::Move;

/// Number of rolling "seen" sets forming the de-dup filter (§4.7, §5).
const SEEN_CYCLE: u64 = 2;

/// Number of frontier buckets, indexed by a deck's `left_talons()` (0..=5).
const BUCKET_COUNT: usize = 6;

/// Multiplier applied to `cap * BUCKET_COUNT` for the successor arena's
/// pre-allocated capacity (§5).
const ARENA_FACTOR: usize = 30;

/// Result of a completed search: the depth reached, and — on success —
/// the winning move trail.
pub struct Outcome {
    pub depth: u64,
    pub winning_moves: Option<Vec<Move>>,
}

/// Runs the bucketed best-first search from `root` until a win is found or
/// the frontier is exhausted. `root`'s own move trail (if any) is not
/// inspected; the winning trail returned is whatever trail the winning
/// successor deck accumulated along the way.
///
/// Does not reset the pile intern table — callers own that table's
/// lifecycle (§5: created at search start, reset or torn down at search end).
pub fn run(root: Deck, cap: usize, debug: bool) -> Result<Outcome, SpiderError> {
    let arena_cap = cap.saturating_mul(BUCKET_COUNT).saturating_mul(ARENA_FACTOR);

    let mut unvisited: [Vec<Deck>; BUCKET_COUNT] = Default::default();
    unvisited[root.left_talons()].push(root);

    let mut seen: Vec<FxHashSet<u64>> = (0..SEEN_CYCLE).map(|_| FxHashSet::default()).collect();

    let mut depth: u64 = 0;
    loop {
        let write_idx = (depth % SEEN_CYCLE) as usize;
        let mut new_unvisited: Vec<Deck> = Vec::new();

        for bucket in unvisited.iter() {
            for deck in bucket.iter() {
                for m in deck.get_moves() {
                    let candidate = deck.apply_move(m);
                    let id = candidate.id();
                    if seen.iter().any(|s| s.contains(&id)) {
                        continue;
                    }
                    seen[write_idx].insert(id);
                    if new_unvisited.len() >= arena_cap {
                        return Err(SpiderError::SearchOverflow { capacity: arena_cap });
                    }
                    new_unvisited.push(candidate);
                }
            }
        }

        for bucket in unvisited.iter_mut() {
            bucket.clear();
        }
        depth += 1;

        if debug {
            let min_chaos = new_unvisited.iter().map(Deck::chaos).min();
            log::debug!(
                "depth {depth}: {} successors, min chaos {min_chaos:?}",
                new_unvisited.len()
            );
        }

        if new_unvisited.is_empty() {
            return Ok(Outcome { depth, winning_moves: None });
        }

        new_unvisited.sort_by(evaluator::compare);

        let mut winner = None;
        for candidate in new_unvisited {
            if candidate.is_won() {
                winner = Some(candidate.moves().to_vec());
                break;
            }
            let bucket_idx = candidate.left_talons();
            if unvisited[bucket_idx].len() < cap {
                unvisited[bucket_idx].push(candidate);
            }
        }

        if let Some(trail) = winner {
            return Ok(Outcome { depth, winning_moves: Some(trail) });
        }

        seen[(depth % SEEN_CYCLE) as usize].clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Card, Suit};
    use crate::pile::reset_intern_table;

    fn up(rank: u8, suit: Suit) -> Card {
        Card::new(rank, suit, true, false)
    }

    /// Scenario 6: a tiny synthetic deck, one suit away from winning.
    ///
    /// Seven of the eight required runs are already parked in the
    /// foundation; `play[0]` holds a King..2 run of Spades and `play[1]`
    /// holds a lone Ace of Spades. Moving the Ace onto `play[0]` completes
    /// the run, which the generator immediately preempts into the final
    /// `ToFoundation` move.
    #[test]
    fn solves_the_final_suit_in_two_moves() {
        reset_intern_table();
        let mut deck = Deck::new();
        for _ in 0..7 {
            deck.add_card(15, up(13, Suit::Spades)).unwrap();
        }
        for rank in (2..=13u8).rev() {
            deck.add_card(0, up(rank, Suit::Spades)).unwrap();
        }
        deck.add_card(1, up(1, Suit::Spades)).unwrap();

        let mut working = deck.clone();
        let depth = working.shortest_path(50, false).unwrap();
        assert_eq!(depth, 2, "expected the win at depth 2, got {depth}");
        assert_eq!(working.moves().len(), 2);
        assert!(matches!(working.moves()[0], Move::Regular { from: 1, to: 0, index: 0 }));
        assert!(matches!(working.moves()[1], Move::ToFoundation { from: 0, index: 0 }));
    }

    #[test]
    fn exhausts_with_negative_depth_when_unsolvable() {
        reset_intern_table();
        let mut deck = Deck::new();
        // Two piles that can never interact: no legal moves at all.
        deck.add_card(0, up(5, Suit::Spades)).unwrap();
        deck.add_card(1, up(5, Suit::Spades)).unwrap();
        let outcome = run(deck, 10, false).unwrap();
        assert!(outcome.winning_moves.is_none());
    }
}
