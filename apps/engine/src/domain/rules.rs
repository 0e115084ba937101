use std::ops::RangeInclusive;

use crate::errors::domain::DomainError;

pub const MIN_PLAYERS: usize = 3;
pub const MAX_PLAYERS: usize = 6;

pub const COLORS: usize = 4;
pub const VALUES_PER_COLOR: usize = 13;
pub const WIZARDS: usize = 4;
pub const FOOLS: usize = 4;
pub const DECK_SIZE: usize = COLORS * VALUES_PER_COLOR + WIZARDS + FOOLS;

/// Points for an exact prediction before the per-trick bonus.
pub const EXACT_BASE_POINTS: i32 = 20;
/// Points per trick won on an exact prediction, and penalty per trick missed otherwise.
pub const POINTS_PER_TRICK: i32 = 10;

pub fn validate_player_count(players: usize) -> Result<(), DomainError> {
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&players) {
        return Err(DomainError::InvalidPlayerCount(players));
    }
    Ok(())
}

/// Number of rounds in a game: the deck is dealt out completely in the last one.
pub fn max_rounds(players: usize) -> u8 {
    (DECK_SIZE / players.max(1)) as u8
}

/// Round `n` deals `n` cards to every apprentice.
pub fn cards_for_round(round_no: u8, players: usize) -> Result<u8, DomainError> {
    if round_no == 0 || round_no > max_rounds(players) {
        return Err(DomainError::InvalidRoundNumber { round_no, players });
    }
    Ok(round_no)
}

pub fn valid_prediction_range(cards_per_player: u8) -> RangeInclusive<u8> {
    0..=cards_per_player
}
