//! Contract violations raised by the rules engine.
//!
//! A `DomainError` means the caller broke the documented call protocol
//! (wrong phase, wrong seat, bad index, ...). Ordinary rule rejections such
//! as an out-of-range prediction or a card that does not follow the leading
//! color are reported as outcome values instead; see
//! [`crate::domain::round::PredictionOutcome`] and
//! [`crate::domain::round::PlayOutcome`].
//!
//! Every operation that returns `DomainError` leaves state untouched.

use thiserror::Error;

use crate::domain::game::GamePhase;
use crate::domain::round::PhaseKind;
use crate::domain::seats::Seat;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("{op} is not allowed in {actual:?} (expected {expected:?})")]
    PhaseMismatch {
        op: &'static str,
        expected: PhaseKind,
        actual: PhaseKind,
    },
    #[error("{op} is not allowed while the game is {actual:?}")]
    GamePhaseMismatch { op: &'static str, actual: GamePhase },
    #[error("out of turn: seat {actual} acted, seat {expected} is to act")]
    OutOfTurn { expected: Seat, actual: Seat },
    #[error("unknown seat {seat} (table has {players} seats)")]
    UnknownSeat { seat: Seat, players: usize },
    #[error("hand index {index} out of range for hand of {len} cards")]
    HandIndexOutOfRange { index: usize, len: usize },
    #[error("seat {seat} has already played to this trick")]
    DuplicatePlay { seat: Seat },
    #[error("trick is already complete")]
    TrickComplete,
    #[error("trick has {played} of {expected} cards")]
    TrickIncomplete { played: usize, expected: usize },
    #[error("seat {seat} has already made a prediction this round")]
    DuplicatePrediction { seat: Seat },
    #[error("no prediction recorded")]
    MissingPrediction,
    #[error("dealer may only choose trump when the trump card is a Wizard")]
    TrumpChoiceNotAllowed,
    #[error("cannot deal {requested} cards, only {available} left in deck")]
    NotEnoughCards { requested: usize, available: usize },
    #[error("invalid card: {0}")]
    InvalidCard(String),
    #[error("parse card: {0}")]
    ParseCard(String),
    #[error("invalid player count {0}: a game needs 3 to 6 apprentices")]
    InvalidPlayerCount(usize),
    #[error("invalid round number {round_no} for {players} players")]
    InvalidRoundNumber { round_no: u8, players: usize },
    #[error("configuration error: {0}")]
    Config(String),
}
