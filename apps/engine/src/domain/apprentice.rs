//! A seat at the table: hand, prediction, tricks won and running score.

use crate::domain::hand::Hand;
use crate::domain::scoring::round_points;
use crate::domain::Card;
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Apprentice {
    name: String,
    hand: Hand,
    prediction: Option<u8>,
    tricks_won: u8,
    score: i32,
}

impl Apprentice {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Hand::new(),
            prediction: None,
            tricks_won: 0,
            score: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn prediction(&self) -> Option<u8> {
        self.prediction
    }

    pub fn tricks_won(&self) -> u8 {
        self.tricks_won
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn receive_cards(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.hand.receive(cards);
    }

    pub(crate) fn set_prediction(&mut self, prediction: u8) {
        self.prediction = Some(prediction);
    }

    pub(crate) fn play_card(&mut self, pos: usize) -> Result<Card, DomainError> {
        self.hand.remove(pos)
    }

    pub(crate) fn win_trick(&mut self) {
        self.tricks_won = self.tricks_won.saturating_add(1);
    }

    pub(crate) fn add_points(&mut self, points: i32) {
        self.score += points;
    }

    /// Points earned this round; fails if no prediction was made.
    pub fn round_points(&self) -> Result<i32, DomainError> {
        round_points(self.prediction, self.tricks_won)
    }

    /// Clear per-round state. The cumulative score is kept.
    pub fn reset_for_new_round(&mut self) {
        self.hand.clear();
        self.prediction = None;
        self.tricks_won = 0;
    }
}
