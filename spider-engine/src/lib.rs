//! Core engine for a heuristic best-first solver of two-deck Spider solitaire.
//!
//! This crate covers the hard part of the problem: a compact, hashable
//! position representation built on interned immutable piles, a move
//! generator with Spider's legality and pruning rules, a chaos-based
//! heuristic evaluator, and a bucketed best-first search engine with
//! rolling de-duplication. Reading game files, shuffling the unknown-card
//! pool, and formatting the winning move list are left to `spider-solver`.
//!
//! # Getting started
//!
//! ```
//! use spider_engine::card::{Card, Suit};
//! use spider_engine::deck::Deck;
//!
//! let mut deck = Deck::new();
//! deck.add_card(0, Card::new(5, Suit::Spades, true, false)).unwrap();
//! assert_eq!(deck.play(0).card_count(), 1);
//! ```

pub mod card;
pub mod deck;
pub mod error;
pub mod evaluator;
pub mod hash;
pub mod r#move;
pub mod pile;
pub mod search;

pub use card::{Card, Suit};
pub use deck::Deck;
pub use error::SpiderError;
pub use hash::HashPrimitive;
pub use r#move::Move;
pub use pile::Pile;
