use crate::domain::apprentice::Apprentice;
use crate::domain::fixtures::CardFixtures;
use crate::domain::hand::Hand;
use crate::domain::seats::Seat;
use crate::domain::tricks::Trick;
use crate::domain::{Card, Color};
use crate::errors::domain::DomainError;

fn trick_with(leader: Seat, players: usize, trump: Option<Color>, tokens: &[&str]) -> Trick {
    let mut trick = Trick::new(leader, trump, players);
    for (i, card) in CardFixtures::parse_hardcoded(tokens).into_iter().enumerate() {
        trick.record_play((leader + i) % players, card).unwrap();
    }
    trick
}

fn roster(players: usize) -> Vec<Apprentice> {
    (0..players).map(|i| Apprentice::new(format!("p{i}"))).collect()
}

#[test]
fn regular_lead_sets_leading_color() {
    let trick = trick_with(0, 3, None, &["G4", "R13"]);
    assert_eq!(trick.leading_color(), Some(Color::Green));
}

#[test]
fn fool_lead_defers_to_second_card() {
    let trick = trick_with(0, 3, None, &["N", "G10"]);
    assert_eq!(trick.leading_color(), Some(Color::Green));
}

#[test]
fn wizard_lead_then_regular_sets_color_but_frees_followers() {
    let trick = trick_with(0, 3, None, &["Z", "B3"]);
    assert_eq!(trick.leading_color(), Some(Color::Blue));
    assert!(trick.first_card_is_wizard());
    assert_eq!(trick.constraint_color(), None);
}

#[test]
fn two_specials_leave_no_leading_color() {
    let trick = trick_with(0, 3, None, &["Z", "N"]);
    assert_eq!(trick.leading_color(), None);

    // A third card never sets it
    let trick = trick_with(0, 3, None, &["N", "Z", "G10"]);
    assert_eq!(trick.leading_color(), None);
    assert_eq!(trick.constraint_color(), None);
}

#[test]
fn wizard_beats_everything() {
    let trick = trick_with(0, 3, Some(Color::Blue), &["R13", "Z", "B10"]);
    assert_eq!(trick.determine_winner(), Some(1));
}

#[test]
fn first_wizard_wins_when_two_are_played() {
    let trick = trick_with(2, 4, None, &["G2", "Z", "Z", "G13"]);
    // Seats 2, 3, 0, 1: the first Wizard came from seat 3
    assert_eq!(trick.determine_winner(), Some(3));
}

#[test]
fn all_fools_first_player_wins() {
    let trick = trick_with(1, 3, Some(Color::Red), &["N", "N", "N"]);
    assert_eq!(trick.determine_winner(), Some(1));
}

#[test]
fn trump_beats_leading_color() {
    let trick = trick_with(0, 3, Some(Color::Blue), &["R13", "B2", "R1"]);
    assert_eq!(trick.determine_winner(), Some(1));
}

#[test]
fn highest_trump_wins_among_trumps() {
    let trick = trick_with(0, 4, Some(Color::Yellow), &["Y3", "G13", "Y11", "Y7"]);
    assert_eq!(trick.determine_winner(), Some(2));
}

#[test]
fn highest_leading_color_wins_without_trump() {
    let trick = trick_with(0, 4, None, &["G5", "R13", "G9", "N"]);
    assert_eq!(trick.determine_winner(), Some(2));
}

#[test]
fn off_color_cards_cannot_win() {
    let trick = trick_with(0, 3, Some(Color::Red), &["B2", "G13", "Y13"]);
    assert_eq!(trick.determine_winner(), Some(0));
}

#[test]
fn fool_lead_then_regular_decides_on_second_card_color() {
    let trick = trick_with(0, 4, None, &["N", "Y4", "Y12", "B13"]);
    assert_eq!(trick.determine_winner(), Some(2));
}

#[test]
fn empty_trick_has_no_winner() {
    let trick = Trick::new(0, None, 3);
    assert_eq!(trick.determine_winner(), None);
    assert_eq!(trick.leading_color(), None);
}

#[test]
fn is_valid_play_requires_following_when_able() {
    let trick = trick_with(0, 3, None, &["R5"]);
    let hand = Hand::from_cards(CardFixtures::parse_hardcoded(&["R2", "B9", "Z", "N"]));

    assert!(trick.is_valid_play(&hand, Card::regular(Color::Red, 2).unwrap()));
    assert!(!trick.is_valid_play(&hand, Card::regular(Color::Blue, 9).unwrap()));
    assert!(trick.is_valid_play(&hand, Card::Wizard));
    assert!(trick.is_valid_play(&hand, Card::Fool));

    let void = Hand::from_cards(CardFixtures::parse_hardcoded(&["B9", "G1"]));
    assert!(trick.is_valid_play(&void, Card::regular(Color::Blue, 9).unwrap()));
}

#[test]
fn anything_goes_after_a_led_wizard() {
    let trick = trick_with(0, 3, None, &["Z", "R5"]);
    let hand = Hand::from_cards(CardFixtures::parse_hardcoded(&["R2", "B9"]));
    assert!(trick.is_valid_play(&hand, Card::regular(Color::Blue, 9).unwrap()));
}

#[test]
fn record_play_rejects_duplicate_and_unknown_seats() {
    let mut trick = trick_with(0, 3, None, &["R5"]);
    assert_eq!(
        trick.record_play(0, Card::Fool),
        Err(DomainError::DuplicatePlay { seat: 0 })
    );
    assert_eq!(
        trick.record_play(3, Card::Fool),
        Err(DomainError::UnknownSeat { seat: 3, players: 3 })
    );
    assert_eq!(trick.plays().len(), 1);
}

#[test]
fn next_to_play_counts_clockwise_from_leader() {
    let trick = trick_with(2, 3, None, &["R5"]);
    assert_eq!(trick.next_to_play(), 0);
}

#[test]
fn resolve_winner_credits_winner_once() {
    let mut trick = trick_with(0, 3, Some(Color::Green), &["R5", "G1", "R9"]);
    let mut apprentices = roster(3);

    assert_eq!(trick.resolve_winner(&mut apprentices), Ok(1));
    assert!(trick.is_complete());
    assert_eq!(trick.winner(), Some(1));
    assert_eq!(apprentices[1].tricks_won(), 1);
    assert_eq!(apprentices[0].tricks_won(), 0);

    assert_eq!(trick.resolve_winner(&mut apprentices), Err(DomainError::TrickComplete));
    assert_eq!(apprentices[1].tricks_won(), 1);
    assert_eq!(
        trick.record_play(0, Card::Fool),
        Err(DomainError::TrickComplete)
    );
}

#[test]
fn resolve_winner_refuses_partial_trick() {
    let mut trick = trick_with(0, 4, None, &["R5", "G1"]);
    let mut apprentices = roster(4);
    assert_eq!(
        trick.resolve_winner(&mut apprentices),
        Err(DomainError::TrickIncomplete {
            played: 2,
            expected: 4
        })
    );
    assert!(!trick.is_complete());
}
