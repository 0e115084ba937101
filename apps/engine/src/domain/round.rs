//! One deal: Dealing → Predicting → Playing → Scoring → Complete.
//!
//! The round owns the roster for its lifetime; seats index into it. Phase
//! data lives in [`RoundPhase`], so the live trick only exists while playing.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::apprentice::Apprentice;
use crate::domain::deck::Deck;
use crate::domain::hand::playable_positions;
use crate::domain::rules::{cards_for_round, valid_prediction_range, validate_player_count};
use crate::domain::seats::{next_seat, round_start_seat, Seat};
use crate::domain::tricks::Trick;
use crate::domain::{Card, Color};
use crate::errors::domain::DomainError;

/// Phase tag without payload, for comparisons, errors and snapshots.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum PhaseKind {
    Dealing,
    Predicting,
    Playing,
    Scoring,
    Complete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundPhase {
    /// Fresh round; nothing dealt yet.
    Dealing,
    /// Collecting predictions (and the dealer's trump choice after a Wizard).
    Predicting,
    /// Tricks in progress; `trick` is the live one.
    Playing { trick: Trick },
    /// All tricks played, awaiting `score()`.
    Scoring,
    /// Scored. `points` holds each seat's delta for this round.
    Complete { points: Vec<i32> },
}

impl RoundPhase {
    pub fn kind(&self) -> PhaseKind {
        match self {
            RoundPhase::Dealing => PhaseKind::Dealing,
            RoundPhase::Predicting => PhaseKind::Predicting,
            RoundPhase::Playing { .. } => PhaseKind::Playing,
            RoundPhase::Scoring => PhaseKind::Scoring,
            RoundPhase::Complete { .. } => PhaseKind::Complete,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictionRejection {
    OutOfRange { prediction: u8, max: u8 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictionOutcome {
    /// Recorded. `playing_started` is set when this completed the predictions
    /// and the first trick was opened.
    Accepted { playing_started: bool },
    Rejected(PredictionRejection),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayRejection {
    /// The hand holds the color to follow and the chosen card is neither that
    /// color nor a special.
    MustFollowColor { color: Color },
}

/// Result of playing a card, describing what state changes occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayCardResult {
    pub card: Card,
    /// Whether this play completed the trick.
    pub trick_completed: bool,
    /// Winner of the completed trick, if one was completed.
    pub trick_winner: Option<Seat>,
    /// Completed tricks after this play.
    pub tricks_played: usize,
    /// Phase transitioned to, if any (None means still playing).
    pub phase_transitioned: Option<PhaseKind>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayOutcome {
    Accepted(PlayCardResult),
    Rejected(PlayRejection),
}

#[derive(Debug, Clone)]
pub struct Round {
    round_no: u8,
    cards_per_player: u8,
    dealer: Seat,
    roster: Vec<Apprentice>,
    deck: Deck,
    trump_card: Option<Card>,
    trump: Option<Color>,
    completed: Vec<Trick>,
    turn: Seat,
    phase: RoundPhase,
}

impl Round {
    /// Set up round `round_no` (1-based, also the hand size) for `roster`
    /// with `dealer` dealing.
    pub fn new(round_no: u8, roster: Vec<Apprentice>, dealer: Seat) -> Result<Self, DomainError> {
        let players = roster.len();
        validate_player_count(players)?;
        if dealer >= players {
            return Err(DomainError::UnknownSeat {
                seat: dealer,
                players,
            });
        }
        let cards_per_player = cards_for_round(round_no, players)?;
        Ok(Self {
            round_no,
            cards_per_player,
            dealer,
            roster,
            deck: Deck::new(),
            trump_card: None,
            trump: None,
            completed: Vec::with_capacity(cards_per_player as usize),
            turn: round_start_seat(dealer, players),
            phase: RoundPhase::Dealing,
        })
    }

    pub fn round_no(&self) -> u8 {
        self.round_no
    }

    pub fn cards_per_player(&self) -> u8 {
        self.cards_per_player
    }

    pub fn dealer(&self) -> Seat {
        self.dealer
    }

    pub fn next_dealer(&self) -> Seat {
        next_seat(self.dealer, self.players())
    }

    pub fn players(&self) -> usize {
        self.roster.len()
    }

    pub fn apprentices(&self) -> &[Apprentice] {
        &self.roster
    }

    pub fn apprentice(&self, seat: Seat) -> Option<&Apprentice> {
        self.roster.get(seat)
    }

    pub fn phase(&self) -> PhaseKind {
        self.phase.kind()
    }

    pub fn phase_state(&self) -> &RoundPhase {
        &self.phase
    }

    pub fn trump(&self) -> Option<Color> {
        self.trump
    }

    pub fn trump_card(&self) -> Option<Card> {
        self.trump_card
    }

    /// The turned-up card was a Wizard and the dealer has not named trump yet.
    pub fn trump_choice_pending(&self) -> bool {
        self.trump_card == Some(Card::Wizard) && self.trump.is_none()
    }

    /// Cards left in the deck after dealing and the trump draw.
    pub fn deck_remaining(&self) -> usize {
        self.deck.len()
    }

    pub fn current_trick(&self) -> Option<&Trick> {
        match &self.phase {
            RoundPhase::Playing { trick } => Some(trick),
            _ => None,
        }
    }

    pub fn completed_tricks(&self) -> &[Trick] {
        &self.completed
    }

    pub fn tricks_played(&self) -> usize {
        self.completed.len()
    }

    pub fn tricks_remaining(&self) -> usize {
        self.cards_per_player as usize - self.completed.len()
    }

    /// Seat to play, only while playing.
    pub fn current_seat(&self) -> Option<Seat> {
        match self.phase {
            RoundPhase::Playing { .. } => Some(self.turn),
            _ => None,
        }
    }

    /// Round points per seat once scored.
    pub fn points(&self) -> Option<&[i32]> {
        match &self.phase {
            RoundPhase::Complete { points } => Some(points),
            _ => None,
        }
    }

    /// Legal hand positions for `seat` in the live trick; empty outside play.
    pub fn playable_positions(&self, seat: Seat) -> Vec<usize> {
        match (&self.phase, self.roster.get(seat)) {
            (RoundPhase::Playing { trick }, Some(apprentice)) => {
                playable_positions(apprentice.hand().cards(), trick.constraint_color())
            }
            _ => Vec::new(),
        }
    }

    /// Hand the roster back to the orchestrator.
    pub fn into_roster(self) -> Vec<Apprentice> {
        self.roster
    }

    fn require_phase(&self, op: &'static str, expected: PhaseKind) -> Result<(), DomainError> {
        let actual = self.phase.kind();
        if actual != expected {
            return Err(DomainError::PhaseMismatch {
                op,
                expected,
                actual,
            });
        }
        Ok(())
    }

    fn require_seat(&self, seat: Seat) -> Result<(), DomainError> {
        if seat >= self.roster.len() {
            return Err(DomainError::UnknownSeat {
                seat,
                players: self.roster.len(),
            });
        }
        Ok(())
    }

    /// Shuffle a fresh deck with `rng` and deal.
    pub fn deal<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Option<Card>, DomainError> {
        self.require_phase("deal", PhaseKind::Dealing)?;
        let mut deck = Deck::new();
        deck.shuffle(rng);
        self.deal_from(deck)
    }

    /// Shuffle a fresh deck reproducibly from `seed` and deal.
    pub fn deal_with_seed(&mut self, seed: u64) -> Result<Option<Card>, DomainError> {
        self.require_phase("deal", PhaseKind::Dealing)?;
        let mut deck = Deck::new();
        deck.shuffle_with_seed(seed);
        self.deal_from(deck)
    }

    /// Deal from `deck` as given, without shuffling.
    ///
    /// Hands go out clockwise from the seat left of the dealer, each taking
    /// the next `cards_per_player` cards from the top. The following card,
    /// if any, is turned up for trump and returned.
    pub fn deal_from(&mut self, mut deck: Deck) -> Result<Option<Card>, DomainError> {
        self.require_phase("deal", PhaseKind::Dealing)?;
        let players = self.players();
        let hands = deck.deal_to_players(players, self.cards_per_player as usize)?;

        let start = round_start_seat(self.dealer, players);
        for (i, hand) in hands.into_iter().enumerate() {
            let seat = (start + i) % players;
            self.roster[seat].receive_cards(hand);
        }

        self.trump_card = deck.draw_trump_card();
        self.trump = match self.trump_card {
            Some(Card::Regular { color, .. }) => Some(color),
            // A Wizard waits for the dealer's choice; a Fool or an empty deck means no trump
            Some(Card::Wizard) | Some(Card::Fool) | None => None,
        };
        self.deck = deck;
        self.phase = RoundPhase::Predicting;

        info!(
            round_no = self.round_no,
            dealer = self.dealer,
            trump_card = ?self.trump_card,
            trump = ?self.trump,
            "Round dealt"
        );
        Ok(self.trump_card)
    }

    /// Dealer names trump after a Wizard was turned up.
    pub fn choose_trump(&mut self, color: Color) -> Result<(), DomainError> {
        self.require_phase("choose_trump", PhaseKind::Predicting)?;
        if self.trump_card != Some(Card::Wizard) {
            return Err(DomainError::TrumpChoiceNotAllowed);
        }
        self.trump = Some(color);
        info!(round_no = self.round_no, dealer = self.dealer, trump = ?color, "Dealer chose trump");
        self.maybe_start_playing();
        Ok(())
    }

    /// Record `seat`'s prediction. Values above the hand size are rejected
    /// without touching state.
    pub fn predict(&mut self, seat: Seat, prediction: u8) -> Result<PredictionOutcome, DomainError> {
        self.require_phase("predict", PhaseKind::Predicting)?;
        self.require_seat(seat)?;
        if self.roster[seat].prediction().is_some() {
            return Err(DomainError::DuplicatePrediction { seat });
        }
        if !valid_prediction_range(self.cards_per_player).contains(&prediction) {
            debug!(round_no = self.round_no, seat, prediction, "Prediction out of range");
            return Ok(PredictionOutcome::Rejected(PredictionRejection::OutOfRange {
                prediction,
                max: self.cards_per_player,
            }));
        }

        self.roster[seat].set_prediction(prediction);
        debug!(round_no = self.round_no, seat, prediction, "Prediction recorded");

        let playing_started = self.maybe_start_playing();
        Ok(PredictionOutcome::Accepted { playing_started })
    }

    /// Open the first trick once every prediction is in and trump is settled.
    fn maybe_start_playing(&mut self) -> bool {
        if !matches!(self.phase, RoundPhase::Predicting) {
            return false;
        }
        if self.roster.iter().any(|a| a.prediction().is_none()) || self.trump_choice_pending() {
            return false;
        }
        let leader = round_start_seat(self.dealer, self.players());
        self.turn = leader;
        self.phase = RoundPhase::Playing {
            trick: Trick::new(leader, self.trump, self.players()),
        };
        info!(round_no = self.round_no, leader, "All predictions recorded, first trick started");
        true
    }

    /// Play the card at `pos` in `seat`'s hand.
    pub fn play(&mut self, seat: Seat, pos: usize) -> Result<PlayOutcome, DomainError> {
        self.require_phase("play", PhaseKind::Playing)?;
        self.require_seat(seat)?;
        if seat != self.turn {
            return Err(DomainError::OutOfTurn {
                expected: self.turn,
                actual: seat,
            });
        }

        let players = self.roster.len();
        let actual = self.phase.kind();
        let RoundPhase::Playing { trick } = &mut self.phase else {
            return Err(DomainError::PhaseMismatch {
                op: "play",
                expected: PhaseKind::Playing,
                actual,
            });
        };

        let hand = self.roster[seat].hand();
        let Some(card) = hand.get(pos) else {
            return Err(DomainError::HandIndexOutOfRange {
                index: pos,
                len: hand.len(),
            });
        };
        if let Some(color) = trick.constraint_color() {
            if !playable_positions(hand.cards(), Some(color)).contains(&pos) {
                debug!(round_no = self.round_no, seat, card = %card, "Play rejected: must follow color");
                return Ok(PlayOutcome::Rejected(PlayRejection::MustFollowColor {
                    color,
                }));
            }
        }

        trick.record_play(seat, card)?;
        self.roster[seat].play_card(pos)?;
        self.turn = next_seat(seat, players);
        debug!(round_no = self.round_no, seat, card = %card, "Card played");

        let mut result = PlayCardResult {
            card,
            trick_completed: false,
            trick_winner: None,
            tricks_played: self.completed.len(),
            phase_transitioned: None,
        };

        if !trick.is_full() {
            return Ok(PlayOutcome::Accepted(result));
        }

        let winner = trick.resolve_winner(&mut self.roster)?;
        let finished = std::mem::replace(trick, Trick::new(winner, self.trump, players));
        self.completed.push(finished);
        self.turn = winner;

        result.trick_completed = true;
        result.trick_winner = Some(winner);
        result.tricks_played = self.completed.len();

        if self.completed.len() == self.cards_per_player as usize {
            self.phase = RoundPhase::Scoring;
            result.phase_transitioned = Some(PhaseKind::Scoring);
            info!(round_no = self.round_no, "All tricks played, round ready to score");
        }

        Ok(PlayOutcome::Accepted(result))
    }

    /// Apply every seat's round points to their score, once.
    pub fn score(&mut self) -> Result<Vec<i32>, DomainError> {
        self.require_phase("score", PhaseKind::Scoring)?;
        let points = self
            .roster
            .iter()
            .map(Apprentice::round_points)
            .collect::<Result<Vec<i32>, DomainError>>()?;

        for (apprentice, delta) in self.roster.iter_mut().zip(&points) {
            apprentice.add_points(*delta);
        }
        self.phase = RoundPhase::Complete {
            points: points.clone(),
        };
        info!(round_no = self.round_no, ?points, "Round scored");
        Ok(points)
    }
}
