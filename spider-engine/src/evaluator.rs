//! Frontier ordering for the search engine (§4.6).
//!
//! Smaller is better. Compared in this exact sequence: `chaos` ascending,
//! then `playable + inOff + freePlays` descending, then — only once
//! `chaos` has bottomed out at zero — `freePlays` descending and `inOff`
//! ascending, and finally the 64-bit deck id ascending for determinism.

use std::cmp::Ordering;

use crate::deck::Deck;

/// Orders two decks for frontier admission; `Less` means `a` is preferred.
#[must_use]
pub fn compare(a: &Deck, b: &Deck) -> Ordering {
    let chaos_a = a.chaos();
    let chaos_b = b.chaos();

    chaos_a
        .cmp(&chaos_b)
        .then_with(|| weighted(b).cmp(&weighted(a)))
        .then_with(|| {
            if chaos_a == 0 && chaos_b == 0 {
                b.free_plays()
                    .cmp(&a.free_plays())
                    .then_with(|| a.in_off().cmp(&b.in_off()))
            } else {
                Ordering::Equal
            }
        })
        .then_with(|| a.id().cmp(&b.id()))
}

fn weighted(deck: &Deck) -> u32 {
    deck.playable_cards() + deck.in_off() + deck.free_plays() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Suit;
    use crate::pile::reset_intern_table;

    fn fresh() -> Deck {
        Deck::new()
    }

    #[test]
    fn lower_chaos_sorts_first() {
        reset_intern_table();
        let mut low = fresh();
        low.add_card(0, crate::card::Card::new(5, Suit::Spades, true, false)).unwrap();
        let mut high = fresh();
        high.add_card(0, crate::card::Card::new(5, Suit::Spades, true, false)).unwrap();
        high.add_card(10, crate::card::Card::new(3, Suit::Hearts, false, false)).unwrap();
        assert_eq!(compare(&low, &high), Ordering::Less);
    }

    #[test]
    fn equal_decks_compare_equal() {
        reset_intern_table();
        let a = fresh();
        let b = fresh();
        assert_eq!(compare(&a, &b), Ordering::Equal);
    }

    #[test]
    fn ordering_is_transitive_for_a_small_sample() {
        reset_intern_table();
        let mut decks = Vec::new();
        for n in 0..5u8 {
            let mut d = fresh();
            for i in 0..n {
                d.add_card((i % 10) as usize, crate::card::Card::new((i % 13) + 1, Suit::Spades, true, false)).unwrap();
            }
            decks.push(d);
        }
        decks.sort_by(compare);
        for w in decks.windows(2) {
            assert_ne!(compare(&w[0], &w[1]), Ordering::Greater);
        }
    }
}
