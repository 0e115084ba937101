//! Whole-game orchestration: seating, dealer rotation, round sequencing and
//! game-over detection around the per-round state machine.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use tracing::info;

use crate::domain::apprentice::Apprentice;
use crate::domain::rules::{max_rounds, validate_player_count};
use crate::domain::round::{PlayOutcome, PredictionOutcome, Round};
use crate::domain::seats::{next_seat, Seat};
use crate::domain::seed_derivation::{derive_dealer_seed, derive_dealing_seed};
use crate::domain::{Card, Color};
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum GamePhase {
    Setup,
    RoundInProgress,
    GameOver,
}

/// Game setup: who plays and, optionally, the seed that fixes every shuffle.
///
/// # Example JSON Config
///
/// ```json
/// {"apprentices": ["Ada", "Brom", "Cyra"], "seed": 12345}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub apprentices: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl GameConfig {
    pub fn new(apprentices: Vec<String>, seed: Option<u64>) -> Self {
        Self { apprentices, seed }
    }

    /// Parse a config from JSON. A missing value is an error, not a default.
    pub fn from_json(config: Option<&JsonValue>) -> Result<Self, DomainError> {
        let json = config.ok_or_else(|| DomainError::Config("missing game config".into()))?;
        let parsed: Self = serde_json::from_value(json.clone())
            .map_err(|e| DomainError::Config(format!("invalid game config: {e}")))?;
        parsed.validate()?;
        Ok(parsed)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        validate_player_count(self.apprentices.len())
    }
}

/// Summary of a finished round, kept in the game history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub round_no: u8,
    pub dealer: Seat,
    pub trump_card: Option<Card>,
    pub trump: Option<Color>,
    pub predictions: Vec<Option<u8>>,
    pub tricks_won: Vec<u8>,
    pub points: Vec<i32>,
}

#[derive(Debug, Clone)]
pub struct Game {
    seed: u64,
    players: usize,
    max_rounds: u8,
    phase: GamePhase,
    dealer: Seat,
    round_no: u8,
    /// Holds the roster between rounds; empty while a round owns it.
    roster: Vec<Apprentice>,
    current: Option<Round>,
    history: Vec<RoundRecord>,
}

impl Game {
    pub fn new(config: GameConfig) -> Result<Self, DomainError> {
        config.validate()?;
        let players = config.apprentices.len();
        let seed = config.seed.unwrap_or_else(rand::random);
        let dealer = StdRng::seed_from_u64(derive_dealer_seed(seed)).random_range(0..players);

        info!(players, seed, dealer, "Game created");
        Ok(Self {
            seed,
            players,
            max_rounds: max_rounds(players),
            phase: GamePhase::Setup,
            dealer,
            round_no: 0,
            roster: config.apprentices.into_iter().map(Apprentice::new).collect(),
            current: None,
            history: Vec::new(),
        })
    }

    /// Seed in effect; record it to replay the game.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn players(&self) -> usize {
        self.players
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn round_no(&self) -> u8 {
        self.round_no
    }

    pub fn max_rounds(&self) -> u8 {
        self.max_rounds
    }

    pub fn dealer(&self) -> Seat {
        self.dealer
    }

    /// The confidant sits left of the dealer and opens predictions and play.
    pub fn confidant(&self) -> Seat {
        next_seat(self.dealer, self.players)
    }

    pub fn current_round(&self) -> Option<&Round> {
        self.current.as_ref()
    }

    pub fn apprentices(&self) -> &[Apprentice] {
        match &self.current {
            Some(round) => round.apprentices(),
            None => &self.roster,
        }
    }

    pub fn history(&self) -> &[RoundRecord] {
        &self.history
    }

    /// Seat to play, only while a trick is in progress.
    pub fn current_seat(&self) -> Option<Seat> {
        self.current.as_ref().and_then(Round::current_seat)
    }

    pub fn start(&mut self) -> Result<(), DomainError> {
        if self.phase != GamePhase::Setup {
            return Err(DomainError::GamePhaseMismatch {
                op: "start",
                actual: self.phase,
            });
        }
        self.start_next_round()
    }

    fn start_next_round(&mut self) -> Result<(), DomainError> {
        let round_no = self.round_no + 1;
        let roster = std::mem::take(&mut self.roster);
        let round = Round::new(round_no, roster, self.dealer)?;
        self.round_no = round_no;
        self.phase = GamePhase::RoundInProgress;
        let round = self.current.insert(round);
        round.deal_with_seed(derive_dealing_seed(self.seed, round_no))?;
        info!(round_no, dealer = self.dealer, "Round started");
        Ok(())
    }

    fn round_mut(&mut self, op: &'static str) -> Result<&mut Round, DomainError> {
        match (self.phase, self.current.as_mut()) {
            (GamePhase::RoundInProgress, Some(round)) => Ok(round),
            (actual, _) => Err(DomainError::GamePhaseMismatch { op, actual }),
        }
    }

    pub fn predict(&mut self, seat: Seat, prediction: u8) -> Result<PredictionOutcome, DomainError> {
        self.round_mut("predict")?.predict(seat, prediction)
    }

    pub fn choose_trump(&mut self, color: Color) -> Result<(), DomainError> {
        self.round_mut("choose_trump")?.choose_trump(color)
    }

    pub fn play(&mut self, seat: Seat, pos: usize) -> Result<PlayOutcome, DomainError> {
        self.round_mut("play")?.play(seat, pos)
    }

    /// Score the finished round, rotate the dealer and deal the next round,
    /// or end the game after the last one. Returns the round's points.
    pub fn end_round(&mut self) -> Result<Vec<i32>, DomainError> {
        let points = self.round_mut("end_round")?.score()?;
        let Some(round) = self.current.take() else {
            return Err(DomainError::GamePhaseMismatch {
                op: "end_round",
                actual: self.phase,
            });
        };

        self.history.push(RoundRecord {
            round_no: round.round_no(),
            dealer: round.dealer(),
            trump_card: round.trump_card(),
            trump: round.trump(),
            predictions: round.apprentices().iter().map(Apprentice::prediction).collect(),
            tricks_won: round.apprentices().iter().map(Apprentice::tricks_won).collect(),
            points: points.clone(),
        });

        self.dealer = round.next_dealer();
        let mut roster = round.into_roster();
        for apprentice in &mut roster {
            apprentice.reset_for_new_round();
        }
        self.roster = roster;

        if self.round_no >= self.max_rounds {
            self.phase = GamePhase::GameOver;
            info!(round_no = self.round_no, winners = ?self.winners(), "Game over");
        } else {
            self.start_next_round()?;
        }
        Ok(points)
    }

    /// Seats tied on the top score; empty until the game is over.
    pub fn winners(&self) -> Vec<Seat> {
        if self.phase != GamePhase::GameOver {
            return Vec::new();
        }
        let apprentices = self.apprentices();
        let Some(best) = apprentices.iter().map(Apprentice::score).max() else {
            return Vec::new();
        };
        apprentices
            .iter()
            .enumerate()
            .filter(|(_, a)| a.score() == best)
            .map(|(seat, _)| seat)
            .collect()
    }
}
