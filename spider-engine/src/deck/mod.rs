//! `Deck`: a complete game position (§3, §4.5-§4.7).
//!
//! Ten tableau piles, five reserve deals, one foundation pile, and the
//! recorded move trail that produced this position. Copying a `Deck` is
//! cheap — the piles are `Rc`-backed interned values and the move trail is
//! a small `Vec` — which is what makes the search engine's depth-by-depth
//! cloning affordable.

mod execution;
mod heuristics;
mod moves;
mod validation;

pub use validation::{check_invariants, count_known_cards};

use crate::error::SpiderError;
use crate::hash::HashPrimitive;
use crate::r#move::Move;
use crate::pile::Pile;

/// Hard cap on the recorded move trail (§3).
pub const MAX_MOVES: usize = 230;

/// Number of tableau ("play") piles.
pub const TABLEAU_COUNT: usize = 10;

/// Number of reserve ("talon"/"deal") piles.
pub const RESERVE_COUNT: usize = 5;

/// Number of cards dealt per reserve row, one onto each tableau pile.
pub const RESERVE_ROW_SIZE: usize = 10;

/// A complete Spider position.
#[derive(Clone, Debug)]
pub struct Deck {
    play: [Pile; TABLEAU_COUNT],
    talon: [Pile; RESERVE_COUNT],
    off: Pile,
    moves: Vec<Move>,
}

impl Deck {
    /// An empty deck: every pile empty, no moves recorded.
    #[must_use]
    pub fn new() -> Deck {
        Deck {
            play: std::array::from_fn(|_| Pile::empty()),
            talon: std::array::from_fn(|_| Pile::empty()),
            off: Pile::empty(),
            moves: Vec::with_capacity(MAX_MOVES),
        }
    }

    /// Index space: `0..10` tableau, `10..15` reserve, `15` foundation.
    pub fn add_card(&mut self, pile_index: usize, c: crate::card::Card) -> Result<(), SpiderError> {
        match pile_index {
            0..=9 => self.play[pile_index] = self.play[pile_index].add_card(c),
            10..=14 => self.talon[pile_index - 10] = self.talon[pile_index - 10].add_card(c),
            15 => self.off = self.off.add_card(c),
            _ => {
                return Err(SpiderError::DeckInconsistent(format!(
                    "pile index {pile_index} out of range 0..=15"
                )))
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn play(&self, i: usize) -> &Pile {
        &self.play[i]
    }

    #[must_use]
    pub fn talon(&self, i: usize) -> &Pile {
        &self.talon[i]
    }

    #[must_use]
    pub fn off(&self) -> &Pile {
        &self.off
    }

    #[must_use]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    #[must_use]
    pub fn moves_len(&self) -> usize {
        self.moves.len()
    }

    /// Fills every unknown card across the tableau and reserve, in pile
    /// order `play[0..10]` then `talon[0..5]`, consuming `pool`.
    pub fn assign_left_cards(&mut self, pool: &mut std::collections::VecDeque<crate::card::Card>) -> Result<(), SpiderError> {
        for pile in self.play.iter_mut() {
            *pile = pile.assign_left_cards(pool)?;
        }
        for pile in self.talon.iter_mut() {
            *pile = pile.assign_left_cards(pool)?;
        }
        Ok(())
    }

    /// Checks the structural invariants of §8: reserve sizes, face-up tops,
    /// move-trail bound, and foundation count.
    pub fn check_invariants(&self) -> Result<(), SpiderError> {
        validation::check_invariants(self)
    }

    /// Counts known (non-unknown) cards by `(suit, rank)`, for callers that
    /// need to detect "too many of card X" before `assign_left_cards` runs.
    #[must_use]
    pub fn count_known_cards(&self) -> fxhash::FxHashMap<(crate::card::Suit, u8), u32> {
        validation::count_known_cards(self)
    }

    /// `off.cardCount() == 8` — every suit's 13-card run has been taken off.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.off.card_count() == 8
    }

    /// 64-bit position identity: the hash of the concatenated per-pile
    /// hashes of the 10 tableau and 5 reserve piles. The foundation is
    /// excluded so that two decks differing only in whether a completed
    /// suit has been taken off share identity (§4.8).
    #[must_use]
    pub fn id(&self) -> u64 {
        let mut state = HashPrimitive::new(0);
        for pile in self.play.iter().chain(self.talon.iter()) {
            state.push(pile.hash());
        }
        state.finish()
    }

    /// Builds the deck reached by applying `m`. The receiver is left
    /// unmodified; the returned deck has `m` appended to its move trail.
    #[must_use]
    pub fn apply_move(&self, m: Move) -> Deck {
        execution::apply_move(self, m)
    }

    /// Enumerates legal, non-redundant moves (§4.4).
    #[must_use]
    pub fn get_moves(&self) -> Vec<Move> {
        moves::get_moves(self)
    }

    #[must_use]
    pub fn chaos(&self) -> u32 {
        heuristics::chaos(self)
    }

    #[must_use]
    pub fn playable_cards(&self) -> u32 {
        heuristics::playable_cards(self)
    }

    #[must_use]
    pub fn in_off(&self) -> u32 {
        heuristics::in_off(self)
    }

    #[must_use]
    pub fn free_plays(&self) -> usize {
        heuristics::free_plays(self)
    }

    #[must_use]
    pub fn left_talons(&self) -> usize {
        heuristics::left_talons(self)
    }

    /// Best-first bounded search (§4.7). On success, overwrites `self`'s
    /// move trail with the winning sequence and returns the positive depth
    /// at which the win was found; on exhaustion returns the negative
    /// depth reached.
    pub fn shortest_path(&mut self, cap: usize, debug: bool) -> Result<i64, SpiderError> {
        let outcome = crate::search::run(self.clone(), cap, debug)?;
        match outcome.winning_moves {
            Some(trail) => {
                self.moves = trail;
                Ok(outcome.depth as i64)
            }
            None => Ok(-(outcome.depth as i64)),
        }
    }
}

impl Default for Deck {
    fn default() -> Deck {
        Deck::new()
    }
}
