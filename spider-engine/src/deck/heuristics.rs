//! Deck-level heuristics: chaos and its auxiliary measures (§4.6).

use super::Deck;

/// `Σ play[i].chaos() + 11 × (non-empty reserve piles)`.
pub fn chaos(deck: &Deck) -> u32 {
    let play_chaos: u32 = deck.play.iter().map(|p| p.chaos()).sum();
    play_chaos + 11 * left_talons(deck) as u32
}

/// `Σ play[i].playableCards()` — total length of every pile's movable top-run.
pub fn playable_cards(deck: &Deck) -> u32 {
    deck.play.iter().map(|p| p.playable_cards()).sum()
}

/// `off.cardCount() * 13`.
pub fn in_off(deck: &Deck) -> u32 {
    deck.off.card_count() as u32 * 13
}

/// Number of empty tableau piles.
pub fn free_plays(deck: &Deck) -> usize {
    deck.play.iter().filter(|p| p.is_empty()).count()
}

/// Number of non-empty reserve piles.
pub fn left_talons(deck: &Deck) -> usize {
    deck.talon.iter().filter(|p| !p.is_empty()).count()
}
