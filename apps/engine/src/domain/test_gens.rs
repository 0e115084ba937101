// Proptest generators for domain types.
// Card sets are drawn from a real deck, so regular cards never repeat.

use proptest::prelude::*;

use crate::domain::seats::Seat;
use crate::domain::{Card, Color, Deck};

/// Generate a random Color
pub fn color() -> impl Strategy<Value = Color> {
    prop_oneof![
        Just(Color::Blue),
        Just(Color::Green),
        Just(Color::Red),
        Just(Color::Yellow),
    ]
}

/// Generate a random trump, including "no trump"
pub fn trump() -> impl Strategy<Value = Option<Color>> {
    proptest::option::of(color())
}

pub fn value() -> impl Strategy<Value = u8> {
    1u8..=13u8
}

pub fn regular_card() -> impl Strategy<Value = Card> {
    (color(), value()).prop_map(|(color, value)| {
        Card::regular(color, value).expect("generated value is in range")
    })
}

/// Any card, specials included at roughly their deck frequency
pub fn card() -> impl Strategy<Value = Card> {
    prop_oneof![
        13 => regular_card(),
        1 => Just(Card::Wizard),
        1 => Just(Card::Fool),
    ]
}

/// `count` distinct deck entries (Wizards and Fools may repeat, as in a real deck)
pub fn unique_cards(count: usize) -> impl Strategy<Value = Vec<Card>> {
    Just(()).prop_perturb(move |_, mut rng| {
        let mut cards = Deck::new().cards().to_vec();
        // Partial Fisher-Yates: shuffle only the first `count` slots
        for i in 0..count.min(cards.len()) {
            let j = rng.random_range(i..cards.len());
            cards.swap(i, j);
        }
        cards.truncate(count);
        cards
    })
}

/// Generate a vector of 1 to max_count unique cards
pub fn unique_cards_up_to(max_count: usize) -> impl Strategy<Value = Vec<Card>> {
    (1..=max_count).prop_flat_map(unique_cards)
}

/// A hand of 1-20 cards (the largest hand is 20 with three players)
pub fn hand() -> impl Strategy<Value = Vec<Card>> {
    unique_cards_up_to(20)
}

/// Hand with no regular card of `color`
pub fn hand_without_color(color: Color) -> impl Strategy<Value = Vec<Card>> {
    unique_cards_up_to(20).prop_map(move |cards| {
        cards
            .into_iter()
            .filter(|c| c.color() != Some(color))
            .collect()
    })
}

pub fn player_count() -> impl Strategy<Value = usize> {
    3usize..=6usize
}

/// Full trick: (players, leader, plays in seat order from the leader)
pub fn complete_trick() -> impl Strategy<Value = (usize, Seat, Vec<(Seat, Card)>)> {
    player_count()
        .prop_flat_map(|players| (Just(players), 0..players, unique_cards(players)))
        .prop_map(|(players, leader, cards)| {
            let plays = cards
                .into_iter()
                .enumerate()
                .map(|(i, card)| ((leader + i) % players, card))
                .collect();
            (players, leader, plays)
        })
}
