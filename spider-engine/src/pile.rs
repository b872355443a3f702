//! Immutable, interned piles (§4.2).
//!
//! Every distinct card sequence maps to exactly one [`Pile`] value, located
//! through a thread-local table keyed by the 64-bit hash of the pile's raw
//! card bytes. Two piles with equal card sequences are therefore the same
//! `Rc`, and equality/hashing reduce to pointer identity — the "crucial
//! optimisation" `spec.md` §9 calls out for making the search tractable.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use fxhash::FxHashMap;

use crate::card::Card;
use crate::error::SpiderError;
use crate::hash;

/// Maximum cards a pile can ever hold (two full 52-card decks).
pub const MAX_CARDS: usize = 104;

struct PileData {
    cards: Box<[u8]>,
    hash: u64,
    chaos: u32,
    /// Cached top-run length per suit, indexed by `suit as usize`.
    seqs: [u32; 4],
}

thread_local! {
    static INTERN_TABLE: RefCell<FxHashMap<u64, Rc<PileData>>> = RefCell::new(FxHashMap::default());
}

/// Clears the pile intern table. Call once per search (§5, §9): the table
/// is conceptually process-wide but is safe to reset between independent
/// searches since nothing outside the active search holds a `Pile`.
pub fn reset_intern_table() {
    INTERN_TABLE.with(|t| t.borrow_mut().clear());
}

fn query_or_insert(cards: &[u8]) -> Rc<PileData> {
    let h = hash::hash_bytes(cards);
    INTERN_TABLE.with(|table| {
        let mut table = table.borrow_mut();
        if let Some(existing) = table.get(&h) {
            return Rc::clone(existing);
        }
        let data = Rc::new(PileData {
            cards: cards.to_vec().into_boxed_slice(),
            hash: h,
            chaos: compute_chaos(cards),
            seqs: compute_seqs(cards),
        });
        table.insert(h, Rc::clone(&data));
        data
    })
}

fn compute_chaos(cards: &[u8]) -> u32 {
    let mut chaos = 0u32;
    let mut last = Card::NONE;
    for &raw in cards {
        let current = Card::from_raw(raw);
        if last.is_none() {
            chaos += 1;
        } else if !current.in_sequence_to(last) {
            chaos += 1;
        }
        last = current;
    }
    chaos
}

fn sequence_of_raw(cards: &[u8], suit: Card) -> u32 {
    let mut index = cards.len();
    if index == 0 {
        return 0;
    }
    index -= 1;
    let mut top_card = Card::from_raw(cards[index]);
    if top_card.suit() != suit.suit() {
        return 0;
    }
    while index > 0 && top_card.in_sequence_to(Card::from_raw(cards[index - 1])) {
        index -= 1;
        top_card = Card::from_raw(cards[index]);
    }
    (cards.len() - index) as u32
}

fn compute_seqs(cards: &[u8]) -> [u32; 4] {
    let mut seqs = [0u32; 4];
    for suit in Card::all_suits() {
        let probe = Card::new(0, suit, true, false);
        seqs[suit as usize] = sequence_of_raw(cards, probe);
    }
    seqs
}

/// An interned, immutable pile. Cheap to clone (an `Rc` bump).
#[derive(Clone)]
pub struct Pile(Rc<PileData>);

impl Pile {
    /// The canonical empty pile.
    #[must_use]
    pub fn empty() -> Pile {
        Pile(query_or_insert(&[]))
    }

    #[must_use]
    pub fn from_cards(cards: &[Card]) -> Pile {
        let bytes: Vec<u8> = cards.iter().map(|c| c.raw()).collect();
        Pile(query_or_insert(&bytes))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.cards.is_empty()
    }

    #[must_use]
    pub fn card_count(&self) -> usize {
        self.0.cards.len()
    }

    #[must_use]
    pub fn at(&self, index: usize) -> Card {
        Card::from_raw(self.0.cards[index])
    }

    #[must_use]
    pub fn hash(&self) -> u64 {
        self.0.hash
    }

    #[must_use]
    pub fn chaos(&self) -> u32 {
        self.0.chaos
    }

    /// Length of the maximal suited-descending suffix whose top card is of `suit`.
    #[must_use]
    pub fn sequence_of(&self, suit: crate::card::Suit) -> u32 {
        self.0.seqs[suit as usize]
    }

    /// Length of the movable top-run: for piles shorter than two cards, the
    /// whole pile; otherwise the same-suit sequence at the top.
    #[must_use]
    pub fn playable_cards(&self) -> u32 {
        if self.card_count() < 2 {
            return self.card_count() as u32;
        }
        self.sequence_of(self.at(self.card_count() - 1).suit())
    }

    /// Appends `c`, returning the (possibly newly interned) resulting pile.
    #[must_use]
    pub fn add_card(&self, c: Card) -> Pile {
        let mut bytes = self.0.cards.to_vec();
        bytes.push(c.raw());
        Pile(query_or_insert(&bytes))
    }

    /// Truncates to `index` cards; if `index > 0`, the new top card is
    /// flipped face-up.
    #[must_use]
    pub fn remove(&self, index: usize) -> Pile {
        if index == 0 {
            return Pile(query_or_insert(&[]));
        }
        let mut bytes = self.0.cards[..index].to_vec();
        let last = bytes.len() - 1;
        let flipped = Card::from_raw(bytes[last]).with_face_up(true);
        bytes[last] = flipped.raw();
        Pile(query_or_insert(&bytes))
    }

    /// Appends `other[index..]` onto this pile.
    #[must_use]
    pub fn copy_from(&self, other: &Pile, index: usize) -> Pile {
        let mut bytes = self.0.cards.to_vec();
        bytes.extend_from_slice(&other.0.cards[index..]);
        Pile(query_or_insert(&bytes))
    }

    /// Overwrites the card at `index`.
    #[must_use]
    pub fn replace_at(&self, index: usize, c: Card) -> Pile {
        let mut bytes = self.0.cards.to_vec();
        bytes[index] = c.raw();
        Pile(query_or_insert(&bytes))
    }

    /// Fills every unknown card from `pool`, consuming it in encounter
    /// order and preserving each slot's original face-up flag. Extra,
    /// unused cards left in `pool` are not an error (§9 open question,
    /// resolved permissively in `SPEC_FULL.md` §4).
    pub fn assign_left_cards(&self, pool: &mut VecDeque<Card>) -> Result<Pile, SpiderError> {
        let mut bytes = self.0.cards.to_vec();
        for slot in bytes.iter_mut() {
            let current = Card::from_raw(*slot);
            if current.is_unknown() {
                let face_up = current.is_face_up();
                let replacement = pool.pop_front().ok_or(SpiderError::PoolExhausted {
                    needed: 1,
                    available: 0,
                })?;
                *slot = replacement.with_face_up(face_up).raw();
            }
        }
        Ok(Pile(query_or_insert(&bytes)))
    }

    #[must_use]
    pub fn to_token_string(&self) -> String {
        let mut s = String::new();
        for &raw in self.0.cards.iter() {
            s.push(' ');
            s.push_str(&Card::from_raw(raw).to_token());
        }
        s
    }
}

impl PartialEq for Pile {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Pile {}

impl Hash for Pile {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash.hash(state);
    }
}

impl fmt::Debug for Pile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pile[{}]", self.to_token_string().trim_start())
    }
}
