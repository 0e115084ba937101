// Independent reference implementations for property tests.
// Written from the rules, not from the engine code, to catch regressions.

use crate::domain::seats::Seat;
use crate::domain::{Card, Color};

/// Leading color derived straight from the plays: the first card if
/// regular, else the second card if regular, else none.
pub fn oracle_leading_color(plays: &[(Seat, Card)]) -> Option<Color> {
    plays.iter().take(2).find_map(|(_, c)| c.color())
}

/// Whether the oracle can decide this trick. Tricks with neither a
/// leading color nor a Wizard, and not made of Fools only, fall back to
/// play-order comparisons the oracle does not model.
pub fn oracle_decidable(plays: &[(Seat, Card)]) -> bool {
    oracle_leading_color(plays).is_some()
        || plays.iter().any(|(_, c)| c.is_wizard())
        || plays.iter().all(|(_, c)| c.is_fool())
}

/// Winner by strength: Wizard beats everything (first one wins), then trump
/// by value, then leading color by value. Fools and off-color cards never win
/// while a stronger card is present.
pub fn oracle_trick_winner(plays: &[(Seat, Card)], trump: Option<Color>) -> Seat {
    assert!(!plays.is_empty(), "oracle needs at least one play");

    if let Some((seat, _)) = plays.iter().find(|(_, c)| c.is_wizard()) {
        return *seat;
    }
    if plays.iter().all(|(_, c)| c.is_fool()) {
        return plays[0].0;
    }

    let lead = oracle_leading_color(plays);
    let strength = |card: &Card| -> u32 {
        match (card.color(), card.value()) {
            (Some(c), Some(v)) if Some(c) == trump => 200 + v as u32,
            (Some(c), Some(v)) if Some(c) == lead => 100 + v as u32,
            _ => 0,
        }
    };

    let mut best = 0;
    for (i, (_, card)) in plays.iter().enumerate() {
        if strength(card) > strength(&plays[best].1) {
            best = i;
        }
    }
    plays[best].0
}

/// Positions a follower may play, spelled out card by card.
pub fn oracle_playable(hand: &[Card], lead: Option<Color>) -> Vec<usize> {
    let Some(lead) = lead else {
        return (0..hand.len()).collect();
    };
    let holds_lead = hand.iter().any(|c| c.color() == Some(lead));
    (0..hand.len())
        .filter(|&i| !holds_lead || hand[i].is_special() || hand[i].color() == Some(lead))
        .collect()
}
