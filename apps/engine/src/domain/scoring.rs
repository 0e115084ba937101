use crate::domain::rules::{EXACT_BASE_POINTS, POINTS_PER_TRICK};
use crate::errors::domain::DomainError;

/// Points for one apprentice's round.
///
/// An exact prediction earns 20 plus 10 per trick won; any miss costs 10 per
/// trick of difference, whichever direction.
pub fn round_points(prediction: Option<u8>, tricks_won: u8) -> Result<i32, DomainError> {
    let prediction = prediction.ok_or(DomainError::MissingPrediction)?;
    let won = i32::from(tricks_won);
    if prediction == tricks_won {
        return Ok(EXACT_BASE_POINTS + POINTS_PER_TRICK * won);
    }
    Ok(-POINTS_PER_TRICK * (i32::from(prediction) - won).abs())
}
