//! Card encoding for the two-suit Spider variant.
//!
//! A [`Card`] is a single byte: the low 4 bits hold the rank (`0` for "no
//! rank", `1..=13` for Ace through King), the next 2 bits hold the suit,
//! bit 6 is the face-up flag, and bit 7 is the unknown flag. A raw byte of
//! `0` denotes "no card" — rank `None`, suit `Spades`, face-down, known.

use std::fmt;

use crate::error::SpiderError;

const RANK_MASK: u8 = 0b0000_1111;
const SUIT_SHIFT: u8 = 4;
const SUIT_MASK: u8 = 0b0011_0000;
const FACE_UP_BIT: u8 = 0b0100_0000;
const UNKNOWN_BIT: u8 = 0b1000_0000;

/// One of the four standard suits, encoded 0..=3 as `spec.md` §3 requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Suit {
    Spades = 0,
    Hearts = 1,
    Clubs = 2,
    Diamonds = 3,
}

impl Suit {
    const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Clubs, Suit::Diamonds];

    #[must_use]
    pub const fn from_u8(v: u8) -> Suit {
        match v & 0b11 {
            0 => Suit::Spades,
            1 => Suit::Hearts,
            2 => Suit::Clubs,
            _ => Suit::Diamonds,
        }
    }

    fn from_letter(c: char) -> Result<Suit, SpiderError> {
        match c {
            'S' => Ok(Suit::Spades),
            'H' => Ok(Suit::Hearts),
            'C' => Ok(Suit::Clubs),
            'D' => Ok(Suit::Diamonds),
            _ => Err(SpiderError::InvalidToken(c.to_string())),
        }
    }

    fn to_letter(self) -> char {
        match self {
            Suit::Spades => 'S',
            Suit::Hearts => 'H',
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
        }
    }
}

/// Rank letter used by the two-character card token grammar.
fn rank_from_letter(c: char) -> Result<u8, SpiderError> {
    match c {
        'A' => Ok(1),
        '2'..='9' => Ok(c as u8 - b'0'),
        'T' => Ok(10),
        'J' => Ok(11),
        'Q' => Ok(12),
        'K' => Ok(13),
        _ => Err(SpiderError::InvalidToken(c.to_string())),
    }
}

fn rank_to_letter(rank: u8) -> char {
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

/// A single card: rank, suit, face-up flag, and unknown flag packed into one byte.
#[derive(Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card(u8);

/// Cards compare by `(suit, rank)` only — face-up and unknown flags are
/// ignored, matching the original `Card::operator==`'s "we don't care for
/// faceup and unknown".
impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.suit() == other.suit() && self.rank() == other.rank()
    }
}

impl Eq for Card {}

impl std::hash::Hash for Card {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.suit().hash(state);
        self.rank().hash(state);
    }
}

impl Card {
    /// Encodes "no card" — used as a sentinel while scanning a pile.
    pub const NONE: Card = Card(0);

    #[must_use]
    pub const fn new(rank: u8, suit: Suit, face_up: bool, unknown: bool) -> Card {
        let mut v = rank & RANK_MASK;
        v |= (suit as u8) << SUIT_SHIFT;
        if face_up {
            v |= FACE_UP_BIT;
        }
        if unknown {
            v |= UNKNOWN_BIT;
        }
        Card(v)
    }

    #[must_use]
    pub const fn from_raw(value: u8) -> Card {
        Card(value)
    }

    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn rank(self) -> u8 {
        self.0 & RANK_MASK
    }

    #[must_use]
    pub const fn suit(self) -> Suit {
        Suit::from_u8((self.0 & SUIT_MASK) >> SUIT_SHIFT)
    }

    #[must_use]
    pub const fn is_face_up(self) -> bool {
        self.0 & FACE_UP_BIT != 0
    }

    #[must_use]
    pub const fn is_unknown(self) -> bool {
        self.0 & UNKNOWN_BIT != 0
    }

    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }

    /// Returns the same card with the face-up flag overwritten, preserving rank/suit/unknown.
    #[must_use]
    pub const fn with_face_up(self, face_up: bool) -> Card {
        if face_up {
            Card(self.0 | FACE_UP_BIT)
        } else {
            Card(self.0 & !FACE_UP_BIT)
        }
    }

    /// `self.in_sequence_to(other)`: `other` is face-up, same suit, and exactly one rank higher.
    #[must_use]
    pub fn in_sequence_to(self, other: Card) -> bool {
        other.is_face_up() && self.suit() == other.suit() && other.rank() == self.rank() + 1
    }

    /// Parses a card token: optional leading `|` for face-down, `XX` for unknown,
    /// otherwise a two-character rank-letter/suit-letter token.
    pub fn parse_token(token: &str) -> Result<Card, SpiderError> {
        let face_up = !token.starts_with('|');
        let body = token.strip_prefix('|').unwrap_or(token);
        if body == "XX" {
            return Ok(Card::new(0, Suit::Spades, face_up, true));
        }
        let mut chars = body.chars();
        let rank_char = chars
            .next()
            .ok_or_else(|| SpiderError::InvalidToken(token.to_string()))?;
        let suit_char = chars
            .next()
            .ok_or_else(|| SpiderError::InvalidToken(token.to_string()))?;
        if chars.next().is_some() {
            return Err(SpiderError::InvalidToken(token.to_string()));
        }
        let rank = rank_from_letter(rank_char).map_err(|_| SpiderError::InvalidToken(token.to_string()))?;
        let suit = Suit::from_letter(suit_char).map_err(|_| SpiderError::InvalidToken(token.to_string()))?;
        Ok(Card::new(rank, suit, face_up, false))
    }

    /// Renders the token form: `XX`/`|XX` for unknown, `|`-prefixed for face-down.
    #[must_use]
    pub fn to_token(self) -> String {
        if self.is_unknown() {
            return if self.is_face_up() {
                "XX".to_string()
            } else {
                "|XX".to_string()
            };
        }
        let mut s = String::with_capacity(3);
        if !self.is_face_up() {
            s.push('|');
        }
        s.push(rank_to_letter(self.rank()));
        s.push(self.suit().to_letter());
        s
    }

    /// All suits, in the fixed 0..=3 order used by `Pile`'s per-suit cache.
    #[must_use]
    pub const fn all_suits() -> [Suit; 4] {
        Suit::ALL
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({})", self.to_token())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("AS", 1, Suit::Spades, true, false)]
    #[case("KH", 13, Suit::Hearts, true, false)]
    #[case("|TD", 10, Suit::Diamonds, false, false)]
    #[case("XX", 0, Suit::Spades, true, true)]
    #[case("|XX", 0, Suit::Spades, false, true)]
    fn parses_tokens(
        #[case] token: &str,
        #[case] rank: u8,
        #[case] suit: Suit,
        #[case] face_up: bool,
        #[case] unknown: bool,
    ) {
        let card = Card::parse_token(token).unwrap();
        assert_eq!(card.rank(), rank);
        assert_eq!(card.suit(), suit);
        assert_eq!(card.is_face_up(), face_up);
        assert_eq!(card.is_unknown(), unknown);
    }

    #[test]
    fn round_trips_through_token() {
        for rank in 1..=13u8 {
            for suit in Suit::ALL {
                for face_up in [true, false] {
                    let c = Card::new(rank, suit, face_up, false);
                    let token = c.to_token();
                    let parsed = Card::parse_token(&token).unwrap();
                    assert_eq!(c, parsed, "round trip failed for {token}");
                }
            }
        }
    }

    #[test]
    fn rejects_invalid_token() {
        assert!(Card::parse_token("Zz").is_err());
        assert!(Card::parse_token("A").is_err());
        assert!(Card::parse_token("ASX").is_err());
    }

    #[test]
    fn in_sequence_to_requires_face_up_same_suit_one_higher() {
        let king = Card::new(13, Suit::Spades, true, false);
        let queen = Card::new(12, Suit::Spades, true, false);
        let queen_other_suit = Card::new(12, Suit::Hearts, true, false);
        let queen_facedown = Card::new(12, Suit::Spades, false, false);

        assert!(queen.in_sequence_to(king));
        assert!(!queen_other_suit.in_sequence_to(king));
        assert!(!queen.in_sequence_to(queen_facedown));
    }

    #[test]
    fn equality_ignores_face_up_and_unknown_flags() {
        let a = Card::new(5, Suit::Clubs, true, false);
        let b = Card::new(5, Suit::Clubs, false, false);
        let c = Card::new(5, Suit::Clubs, false, true);
        let different_rank = Card::new(6, Suit::Clubs, true, false);
        let different_suit = Card::new(5, Suit::Hearts, true, false);

        assert_eq!(a, b);
        assert_eq!(a, c);
        assert_ne!(a, different_rank);
        assert_ne!(a, different_suit);
    }

    #[test]
    fn none_is_zero_byte() {
        assert_eq!(Card::NONE.raw(), 0);
        assert!(Card::NONE.is_none());
    }
}
