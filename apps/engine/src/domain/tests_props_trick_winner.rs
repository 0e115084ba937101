/// Property-based tests for trick winner resolution
use proptest::prelude::*;

use crate::domain::domain_prop_helpers::{
    oracle_decidable, oracle_leading_color, oracle_trick_winner,
};
use crate::domain::tricks::Trick;
use crate::domain::{test_gens, test_prelude, Card, Color};

fn build_trick(
    players: usize,
    leader: usize,
    plays: &[(usize, Card)],
    trump: Option<Color>,
) -> Trick {
    let mut trick = Trick::new(leader, trump, players);
    for &(seat, card) in plays {
        trick.record_play(seat, card).unwrap();
    }
    trick
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: leading color is fixed by the first two plays only
    #[test]
    fn prop_leading_color_from_first_two(
        (players, leader, plays) in test_gens::complete_trick(),
        trump in test_gens::trump(),
    ) {
        let trick = build_trick(players, leader, &plays, trump);
        prop_assert_eq!(trick.leading_color(), oracle_leading_color(&plays));
    }

    /// Property: the engine agrees with the strength oracle
    #[test]
    fn prop_winner_matches_oracle(
        (players, leader, plays) in test_gens::complete_trick(),
        trump in test_gens::trump(),
    ) {
        prop_assume!(oracle_decidable(&plays));
        let trick = build_trick(players, leader, &plays, trump);
        let winner = trick.determine_winner();
        prop_assert_eq!(winner, Some(oracle_trick_winner(&plays, trump)),
            "plays={:?} trump={:?}", plays, trump);
    }

    /// Property: a Wizard in the trick means a Wizard wins
    #[test]
    fn prop_wizard_always_wins(
        (players, leader, plays) in test_gens::complete_trick(),
        trump in test_gens::trump(),
    ) {
        let trick = build_trick(players, leader, &plays, trump);
        let winner = trick.determine_winner().unwrap();
        let card = plays.iter().find(|(s, _)| *s == winner).unwrap().1;
        if plays.iter().any(|(_, c)| c.is_wizard()) {
            prop_assert!(card.is_wizard());
        } else if !plays.iter().all(|(_, c)| c.is_fool()) {
            prop_assert!(!card.is_fool(), "a Fool cannot beat a regular card");
        }
    }

    /// Property: without Wizards, a played trump card means the highest trump wins
    #[test]
    fn prop_highest_trump_wins(
        (players, leader, plays) in test_gens::complete_trick(),
        trump in test_gens::color(),
    ) {
        prop_assume!(!plays.iter().any(|(_, c)| c.is_wizard()));
        let best_trump = plays
            .iter()
            .filter_map(|(s, c)| (c.color() == Some(trump)).then(|| (c.value(), *s)))
            .max();
        prop_assume!(best_trump.is_some());

        let trick = build_trick(players, leader, &plays, Some(trump));
        prop_assert_eq!(trick.determine_winner(), best_trump.map(|(_, s)| s));
    }
}
