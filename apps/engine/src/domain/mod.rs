//! Domain layer: pure Wizard rules, no I/O.

pub mod apprentice;
pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod deck;
pub mod game;
pub mod hand;
pub mod round;
pub mod rules;
pub mod scoring;
pub mod seats;
pub mod seed_derivation;
pub mod snapshot;
pub mod tricks;

#[cfg(test)]
mod domain_prop_helpers;
#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod tests_props_legality;
#[cfg(test)]
mod tests_props_trick_winner;
#[cfg(test)]
mod tests_tricks;

// Re-exports for ergonomics
pub use apprentice::Apprentice;
pub use cards_logic::{hand_has_color, ranks_higher};
pub use cards_types::{Card, CardKind, Color, Value};
pub use deck::Deck;
pub use game::{Game, GameConfig, GamePhase, RoundRecord};
pub use hand::{playable_positions, Hand};
pub use round::{
    PhaseKind, PlayCardResult, PlayOutcome, PlayRejection, PredictionOutcome,
    PredictionRejection, Round, RoundPhase,
};
pub use scoring::round_points;
pub use seats::Seat;
pub use seed_derivation::{derive_dealer_seed, derive_dealing_seed};
pub use snapshot::GameSnapshot;
pub use tricks::Trick;
