//! A player's private cards and the follow-color legality query.

use crate::domain::cards_logic::hand_has_color;
use crate::domain::{Card, Color};
use crate::errors::domain::DomainError;

/// Positions in `hand` that may legally be played.
///
/// With no color to follow, or when the hand holds none of it, everything is
/// legal. Otherwise only cards of that color plus the colorless specials.
pub fn playable_positions(hand: &[Card], led: Option<Color>) -> Vec<usize> {
    match led {
        Some(color) if hand_has_color(hand, color) => hand
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_special() || c.color() == Some(color))
            .map(|(i, _)| i)
            .collect(),
        _ => (0..hand.len()).collect(),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn receive(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn get(&self, pos: usize) -> Option<Card> {
        self.cards.get(pos).copied()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn can_follow(&self, color: Color) -> bool {
        hand_has_color(&self.cards, color)
    }

    pub fn playable_positions(&self, led: Option<Color>) -> Vec<usize> {
        playable_positions(&self.cards, led)
    }

    pub fn remove(&mut self, pos: usize) -> Result<Card, DomainError> {
        if pos >= self.cards.len() {
            return Err(DomainError::HandIndexOutOfRange {
                index: pos,
                len: self.cards.len(),
            });
        }
        Ok(self.cards.remove(pos))
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }
}
