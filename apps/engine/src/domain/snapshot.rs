//! Public, serializable view of a game in progress.
//!
//! Hands are private: a snapshot carries hand sizes, never cards held.

use serde::{Deserialize, Serialize};

use crate::domain::game::{Game, GamePhase};
use crate::domain::round::{PhaseKind, Round};
use crate::domain::seats::Seat;
use crate::domain::{Card, Color};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprenticePublic {
    pub seat: Seat,
    pub name: String,
    pub score: i32,
    pub is_dealer: bool,
    pub is_confidant: bool,
    pub prediction: Option<u8>,
    pub tricks_won: u8,
    pub cards_in_hand: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayedCard {
    pub seat: Seat,
    pub card: Card,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundPublic {
    pub round_no: u8,
    pub phase: PhaseKind,
    pub cards_per_player: u8,
    pub trump_card: Option<Card>,
    pub trump: Option<Color>,
    pub trump_choice_pending: bool,
    pub tricks_played: usize,
    pub current_seat: Option<Seat>,
    pub leading_color: Option<Color>,
    pub trick_plays: Vec<PlayedCard>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub phase: GamePhase,
    pub round_no: u8,
    pub max_rounds: u8,
    pub apprentices: Vec<ApprenticePublic>,
    pub round: Option<RoundPublic>,
}

impl RoundPublic {
    fn from_round(round: &Round) -> Self {
        let trick = round.current_trick();
        Self {
            round_no: round.round_no(),
            phase: round.phase(),
            cards_per_player: round.cards_per_player(),
            trump_card: round.trump_card(),
            trump: round.trump(),
            trump_choice_pending: round.trump_choice_pending(),
            tricks_played: round.tricks_played(),
            current_seat: round.current_seat(),
            leading_color: trick.and_then(|t| t.leading_color()),
            trick_plays: trick
                .map(|t| {
                    t.plays()
                        .iter()
                        .map(|&(seat, card)| PlayedCard { seat, card })
                        .collect()
                })
                .unwrap_or_default(),
        }
    }
}

pub fn snapshot(game: &Game) -> GameSnapshot {
    let dealer = game.dealer();
    let confidant = game.confidant();
    let apprentices = game
        .apprentices()
        .iter()
        .enumerate()
        .map(|(seat, a)| ApprenticePublic {
            seat,
            name: a.name().to_string(),
            score: a.score(),
            is_dealer: seat == dealer,
            is_confidant: seat == confidant,
            prediction: a.prediction(),
            tricks_won: a.tricks_won(),
            cards_in_hand: a.hand().len(),
        })
        .collect();

    GameSnapshot {
        phase: game.phase(),
        round_no: game.round_no(),
        max_rounds: game.max_rounds(),
        apprentices,
        round: game.current_round().map(RoundPublic::from_round),
    }
}

impl Game {
    pub fn snapshot(&self) -> GameSnapshot {
        snapshot(self)
    }
}
