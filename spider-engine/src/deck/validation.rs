//! Structural invariant checks (§8) and known-card accounting.
//!
//! Counting the required card pool and enforcing a variant's card
//! multiplicities is a harness concern (`spec.md` §1 draws the line at
//! "random shuffling of the unknown-card pool"); this module only gives the
//! harness the primitive it needs — `count_known_cards` — plus the engine's
//! own structural invariants, which hold regardless of variant.

use fxhash::FxHashMap;

use super::Deck;
use crate::card::Suit;
use crate::error::SpiderError;

/// Checks the invariants of §8.1-§8.5 that hold for any reachable deck:
/// every non-empty tableau pile's top card is face-up, every reserve pile
/// is empty or exactly 10 cards, the foundation holds at most 8 runs, and
/// the move trail has not exceeded `MAX_MOVES`.
pub fn check_invariants(deck: &Deck) -> Result<(), SpiderError> {
    for (i, pile) in deck.play.iter().enumerate() {
        if !pile.is_empty() && !pile.at(pile.card_count() - 1).is_face_up() {
            return Err(SpiderError::DeckInconsistent(format!(
                "play[{i}] top card is face-down"
            )));
        }
    }
    for (i, pile) in deck.talon.iter().enumerate() {
        let n = pile.card_count();
        if n != 0 && n != super::RESERVE_ROW_SIZE {
            return Err(SpiderError::DeckInconsistent(format!(
                "talon[{i}] holds {n} cards, expected 0 or {}",
                super::RESERVE_ROW_SIZE
            )));
        }
    }
    if deck.off.card_count() > 8 {
        return Err(SpiderError::DeckInconsistent(format!(
            "off holds {} completed runs, at most 8 are possible",
            deck.off.card_count()
        )));
    }
    if deck.moves.len() > super::MAX_MOVES {
        return Err(SpiderError::MoveLimitExceeded(super::MAX_MOVES));
    }
    Ok(())
}

/// Tallies every known (non-unknown) card across the tableau and reserve by
/// `(suit, rank)`. Unknown placeholders are not counted — they are filled in
/// later by `assign_left_cards` from whatever pool the harness hands it.
#[must_use]
pub fn count_known_cards(deck: &Deck) -> FxHashMap<(Suit, u8), u32> {
    let mut counts = FxHashMap::default();
    let piles = deck.play.iter().chain(deck.talon.iter());
    for pile in piles {
        for i in 0..pile.card_count() {
            let card = pile.at(i);
            if card.is_unknown() {
                continue;
            }
            *counts.entry((card.suit(), card.rank())).or_insert(0) += 1;
        }
    }
    counts
}
