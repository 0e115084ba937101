//! The 60-card deck: construction, shuffling, dealing and the trump draw.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::domain::rules::{DECK_SIZE, FOOLS, WIZARDS};
use crate::domain::{Card, Color, Value};
use crate::errors::domain::DomainError;

/// Ordered pile of cards. Index 0 is the top of the deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

/// Full deck in canonical order: each color 1..=13, then Wizards, then Fools.
fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for color in Color::ALL {
        for value in Value::MIN..=Value::MAX {
            if let Ok(value) = Value::new(value) {
                deck.push(Card::Regular { color, value });
            }
        }
    }
    deck.extend(std::iter::repeat(Card::Wizard).take(WIZARDS));
    deck.extend(std::iter::repeat(Card::Fool).take(FOOLS));
    deck
}

impl Deck {
    pub fn new() -> Self {
        Self { cards: full_deck() }
    }

    /// Deck with a caller-chosen order; `cards[0]` is dealt first.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Reproducible shuffle for a given seed.
    pub fn shuffle_with_seed(&mut self, seed: u64) {
        let mut rng = StdRng::seed_from_u64(seed);
        self.shuffle(&mut rng);
    }

    /// Take `n` cards off the top. Nothing is removed when there are too few.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>, DomainError> {
        if n > self.cards.len() {
            return Err(DomainError::NotEnoughCards {
                requested: n,
                available: self.cards.len(),
            });
        }
        Ok(self.cards.drain(..n).collect())
    }

    /// Deal `per_player` cards to each of `players` hands, hand by hand.
    pub fn deal_to_players(
        &mut self,
        players: usize,
        per_player: usize,
    ) -> Result<Vec<Vec<Card>>, DomainError> {
        let requested = players * per_player;
        if requested > self.cards.len() {
            return Err(DomainError::NotEnoughCards {
                requested,
                available: self.cards.len(),
            });
        }
        (0..players).map(|_| self.deal(per_player)).collect()
    }

    /// Turn up the top card to fix trump. `None` once the deck is exhausted.
    pub fn draw_trump_card(&mut self) -> Option<Card> {
        if self.cards.is_empty() {
            return None;
        }
        Some(self.cards.remove(0))
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
