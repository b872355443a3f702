//! Parses the line-oriented game description file (`spec.md` §6).
//!
//! Lines starting with `#` are comments. Section headers `PlayN:`, `DealN:`,
//! `Off:` switch the pile that subsequent card tokens are appended to; they
//! are expected in the fixed order `Play0:`..`Play9:`, `Deal0:`..`Deal4:`,
//! `Off:`. Inside the `Off:` section only, a six-character run token
//! `<first_rank><first_suit>..<last_rank><last_suit>` (e.g. `KS..AS`)
//! names a completed run compactly. `spider_engine::deck::Deck`'s `off`
//! pile holds one sentinel card per completed run (the King at the head of
//! it — see `Deck::apply_move`'s `ToFoundation` handling), not the 13
//! individual cards, so a run token collapses to that single King rather
//! than expanding onto the pile.

use spider_engine::card::Card;
use spider_engine::deck::Deck;
use spider_engine::error::SpiderError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Play(usize),
    Deal(usize),
    Off,
}

impl Section {
    fn pile_index(self) -> usize {
        match self {
            Section::Play(n) => n,
            Section::Deal(n) => 10 + n,
            Section::Off => 15,
        }
    }

    fn parse_header(token: &str) -> Option<Section> {
        let body = token.strip_suffix(':')?;
        if let Some(n) = body.strip_prefix("Play") {
            let n: usize = n.parse().ok()?;
            return (n < 10).then_some(Section::Play(n));
        }
        if let Some(n) = body.strip_prefix("Deal") {
            let n: usize = n.parse().ok()?;
            return (n < 5).then_some(Section::Deal(n));
        }
        if body == "Off" {
            return Some(Section::Off);
        }
        None
    }
}

/// Reads `text` and builds a `Deck` by appending every card token to the
/// pile named by the section header preceding it.
pub fn parse(text: &str) -> Result<Deck, SpiderError> {
    let mut deck = Deck::new();
    let mut section: Option<Section> = None;

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        for token in line.split_whitespace() {
            if let Some(s) = Section::parse_header(token) {
                section = Some(s);
                continue;
            }
            let pile_index = section
                .ok_or_else(|| SpiderError::InvalidToken(format!("card token before any section header: {token}")))?
                .pile_index();

            if section == Some(Section::Off) && is_run_expansion_token(token) {
                deck.add_card(pile_index, run_sentinel(token)?)?;
                continue;
            }
            let card = Card::parse_token(token)?;
            deck.add_card(pile_index, card)?;
        }
    }
    Ok(deck)
}

fn is_run_expansion_token(token: &str) -> bool {
    token.len() == 6 && &token[2..4] == ".."
}

/// Validates `<first_rank><first_suit>..<last_rank><last_suit>` (e.g.
/// `KS..AS`) as a full, same-suit, descending King-to-Ace run, and returns
/// the single King sentinel card `Deck::off` uses to represent it.
fn run_sentinel(token: &str) -> Result<Card, SpiderError> {
    let first = Card::parse_token(&token[0..2])?;
    let last = Card::parse_token(&token[4..6])?;
    if first.suit() != last.suit() {
        return Err(SpiderError::InvalidToken(format!(
            "run expansion token {token} mixes suits"
        )));
    }
    if first.rank() < last.rank() {
        return Err(SpiderError::InvalidToken(format!(
            "run expansion token {token} is not descending"
        )));
    }
    if first.rank() != 13 || last.rank() != 1 {
        return Err(SpiderError::InvalidToken(format!(
            "run expansion token {token} does not span a full King..Ace run"
        )));
    }
    Ok(first)
}
