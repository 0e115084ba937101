//! Seat / turn math helpers for a table of 3 to 6 apprentices.
//!
//! Every layer (round, trick, game, snapshot) uses these for rotation and
//! "who acts next". Clockwise is positive.

pub type Seat = usize;

#[inline]
pub fn seat_offset(seat: Seat, delta: isize, players: usize) -> Seat {
    debug_assert!(players > 0, "table must have seats");
    (seat as isize + delta).rem_euclid(players as isize) as Seat
}

/// Next seat clockwise, wrapping to seat 0.
#[inline]
pub fn next_seat(seat: Seat, players: usize) -> Seat {
    seat_offset(seat, 1, players)
}

#[inline]
pub fn prev_seat(seat: Seat, players: usize) -> Seat {
    seat_offset(seat, -1, players)
}

/// Round-start seat (apprentice to the left of the dealer). Also the confidant.
#[inline]
pub fn round_start_seat(dealer: Seat, players: usize) -> Seat {
    next_seat(dealer, players)
}

/// Seat expected to act in a trick led by `leader` after `play_count` plays.
#[inline]
pub fn expected_actor(leader: Seat, play_count: usize, players: usize) -> Seat {
    seat_offset(leader, play_count as isize, players)
}

/// Dealer for a 1-based round number, rotating one seat per round.
#[inline]
pub fn dealer_for_round(starting_dealer: Seat, round_no: u8, players: usize) -> Seat {
    debug_assert!(round_no >= 1, "round_no is 1-based and must be >= 1");
    seat_offset(
        starting_dealer,
        round_no.saturating_sub(1) as isize,
        players,
    )
}
