use tracing::debug;

use crate::domain::apprentice::Apprentice;
use crate::domain::cards_logic::ranks_higher;
use crate::domain::hand::Hand;
use crate::domain::seats::{expected_actor, Seat};
use crate::domain::{Card, Color};
use crate::errors::domain::DomainError;

/// One card from every seat, in play order.
///
/// Plays are kept as an ordered list rather than a map: the first Wizard
/// wins, and an all-Fool trick goes to whoever played first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trick {
    leader: Seat,
    trump: Option<Color>,
    players: usize,
    plays: Vec<(Seat, Card)>,
    leading_color: Option<Color>,
    winner: Option<Seat>,
    complete: bool,
}

impl Trick {
    pub fn new(leader: Seat, trump: Option<Color>, players: usize) -> Self {
        Self {
            leader,
            trump,
            players,
            plays: Vec::with_capacity(players),
            leading_color: None,
            winner: None,
            complete: false,
        }
    }

    pub fn leader(&self) -> Seat {
        self.leader
    }

    pub fn trump(&self) -> Option<Color> {
        self.trump
    }

    /// Plays in the order they were made.
    pub fn plays(&self) -> &[(Seat, Card)] {
        &self.plays
    }

    pub fn leading_color(&self) -> Option<Color> {
        self.leading_color
    }

    pub fn winner(&self) -> Option<Seat> {
        self.winner
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// All seats have played; the trick is ready to resolve.
    pub fn is_full(&self) -> bool {
        self.plays.len() == self.players
    }

    /// Seat expected to play next, counting clockwise from the leader.
    pub fn next_to_play(&self) -> Seat {
        expected_actor(self.leader, self.plays.len(), self.players)
    }

    pub fn first_card_is_wizard(&self) -> bool {
        matches!(self.plays.first(), Some((_, Card::Wizard)))
    }

    /// Color a follower must follow if able.
    ///
    /// A led Wizard frees everyone for the rest of the trick, even if the
    /// second card then sets the leading color.
    pub fn constraint_color(&self) -> Option<Color> {
        if self.first_card_is_wizard() {
            return None;
        }
        self.leading_color
    }

    /// Whether `card` from `hand` may be played to this trick.
    pub fn is_valid_play(&self, hand: &Hand, card: Card) -> bool {
        let Some(color) = self.constraint_color() else {
            return true;
        };
        card.is_special() || card.color() == Some(color) || !hand.can_follow(color)
    }

    /// Record `seat`'s card.
    ///
    /// Only the first card, or the second if the first was a Wizard or Fool,
    /// can set the leading color, and only when it is a regular card. A
    /// third card never does, so two leading specials leave the trick without
    /// a leading color.
    pub fn record_play(&mut self, seat: Seat, card: Card) -> Result<(), DomainError> {
        if self.complete {
            return Err(DomainError::TrickComplete);
        }
        if seat >= self.players {
            return Err(DomainError::UnknownSeat {
                seat,
                players: self.players,
            });
        }
        if self.plays.iter().any(|(s, _)| *s == seat) {
            return Err(DomainError::DuplicatePlay { seat });
        }

        let sets_lead = match self.plays.len() {
            0 => true,
            1 => self.leading_color.is_none(),
            _ => false,
        };
        if sets_lead {
            if let Card::Regular { color, .. } = card {
                self.leading_color = Some(color);
            }
        }

        self.plays.push((seat, card));
        Ok(())
    }

    /// Pure winner policy over the plays recorded so far.
    ///
    /// 1. Nothing but Fools: the first to play wins.
    /// 2. Otherwise the first Wizard wins outright.
    /// 3. Otherwise fold [`ranks_higher`] over the non-Fool cards in play
    ///    order, keeping the running best.
    pub fn determine_winner(&self) -> Option<Seat> {
        let (first_seat, _) = *self.plays.first()?;

        if self.plays.iter().all(|(_, c)| c.is_fool()) {
            return Some(first_seat);
        }

        if let Some((seat, _)) = self.plays.iter().find(|(_, c)| c.is_wizard()) {
            return Some(*seat);
        }

        let mut best: Option<(Seat, Card)> = None;
        for &(seat, card) in self.plays.iter().filter(|(_, c)| !c.is_fool()) {
            best = match best {
                Some((_, best_card))
                    if !ranks_higher(card, best_card, self.trump, self.leading_color) =>
                {
                    best
                }
                _ => Some((seat, card)),
            };
        }
        best.map(|(seat, _)| seat)
    }

    /// Close the trick: resolve the winner once and credit their trick.
    pub fn resolve_winner(&mut self, roster: &mut [Apprentice]) -> Result<Seat, DomainError> {
        if self.complete {
            return Err(DomainError::TrickComplete);
        }
        if !self.is_full() {
            return Err(DomainError::TrickIncomplete {
                played: self.plays.len(),
                expected: self.players,
            });
        }
        let winner = self.determine_winner().ok_or(DomainError::TrickIncomplete {
            played: 0,
            expected: self.players,
        })?;
        let players = roster.len();
        let apprentice = roster
            .get_mut(winner)
            .ok_or(DomainError::UnknownSeat {
                seat: winner,
                players,
            })?;
        apprentice.win_trick();

        self.winner = Some(winner);
        self.complete = true;
        debug!(winner, leading_color = ?self.leading_color, trump = ?self.trump, "Trick resolved");
        Ok(winner)
    }
}
