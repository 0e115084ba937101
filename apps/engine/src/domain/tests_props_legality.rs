/// Property-based tests for follow-color legality
use proptest::prelude::*;

use crate::domain::domain_prop_helpers::oracle_playable;
use crate::domain::{hand_has_color, playable_positions, test_gens, test_prelude, Card};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: legal positions match the card-by-card rule
    #[test]
    fn prop_playable_matches_oracle(
        hand in test_gens::hand(),
        lead in test_gens::trump(),
    ) {
        prop_assert_eq!(playable_positions(&hand, lead), oracle_playable(&hand, lead));
    }

    /// Property: holding the led color restricts play to that color and the specials
    #[test]
    fn prop_follow_color_when_able(
        lead_card in test_gens::regular_card(),
        others in test_gens::unique_cards_up_to(12),
    ) {
        let lead = lead_card.color().unwrap();
        let mut hand = vec![lead_card];
        hand.extend(others.into_iter().filter(|c| *c != lead_card));

        let legal = playable_positions(&hand, Some(lead));
        for &i in &legal {
            let card: Card = hand[i];
            prop_assert!(card.is_special() || card.color() == Some(lead),
                "Legal play {:?} must follow {:?} or be special", card, lead);
        }
        let expected = hand.iter().filter(|c| c.is_special() || c.color() == Some(lead)).count();
        prop_assert_eq!(legal.len(), expected);
    }

    /// Property: a hand without the led color may play anything
    #[test]
    fn prop_anything_goes_when_void((lead, hand) in test_gens::color().prop_flat_map(|c| {
        (Just(c), test_gens::hand_without_color(c))
    })) {
        prop_assert!(!hand_has_color(&hand, lead));
        prop_assert_eq!(playable_positions(&hand, Some(lead)), (0..hand.len()).collect::<Vec<_>>());
    }

    /// Property: never empty for a non-empty hand, strictly ascending, in range
    #[test]
    fn prop_playable_well_formed(
        hand in test_gens::hand(),
        lead in test_gens::trump(),
    ) {
        let legal = playable_positions(&hand, lead);
        prop_assert!(!legal.is_empty());
        prop_assert!(legal.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(legal.iter().all(|&i| i < hand.len()));
    }
}
