//! RNG seed derivation utilities for deterministic game behavior.
//!
//! A single game seed fans out into one seed per purpose (first dealer,
//! each round's shuffle) so a whole game replays from that one number.

/// Derive the seed used to draw the first dealer.
pub fn derive_dealer_seed(game_seed: u64) -> u64 {
    game_seed.wrapping_mul(0x9E37_79B9_7F4A_7C15).wrapping_add(1)
}

/// Derive the shuffle seed for a 1-based round number.
///
/// Same game + round = same deal; different rounds deal differently.
pub fn derive_dealing_seed(game_seed: u64, round_no: u8) -> u64 {
    // Different multiplier from the dealer seed to keep contexts apart
    game_seed
        .wrapping_add((round_no as u64).wrapping_mul(1_000_000))
        .wrapping_add(2)
}
