//! The three move kinds (§3, §4.3).

/// One candidate transition between `Deck` positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// Move cards `[index..end]` of tableau pile `from` onto tableau pile `to`.
    Regular { from: u8, to: u8, index: u8 },
    /// Take the completed 13-card King..Ace run at `[index..end]` of `from` into the foundation.
    ToFoundation { from: u8, index: u8 },
    /// Deal one card from reserve row `reserve_index` onto each of the 10 tableau piles.
    FromReserve { reserve_index: u8 },
}

impl Move {
    #[must_use]
    pub const fn regular(from: u8, to: u8, index: u8) -> Move {
        Move::Regular { from, to, index }
    }

    #[must_use]
    pub const fn to_foundation(from: u8, index: u8) -> Move {
        Move::ToFoundation { from, index }
    }

    #[must_use]
    pub const fn from_reserve(reserve_index: u8) -> Move {
        Move::FromReserve { reserve_index }
    }
}
