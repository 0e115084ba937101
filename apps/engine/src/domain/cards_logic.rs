//! Card game logic: checking colors in hands, comparing card strength

use super::cards_types::{Card, Color};

pub fn hand_has_color(hand: &[Card], color: Color) -> bool {
    hand.iter().any(|c| c.color() == Some(color))
}

/// Whether `a` outranks `b` when both sit in the same trick.
///
/// Not an ordering: two off-color regulars that are neither trump nor
/// leading color rank higher than each other in neither direction. Two
/// Wizards both report `true`; which one wins is decided by play order in
/// [`crate::domain::tricks::Trick::determine_winner`].
pub fn ranks_higher(a: Card, b: Card, trump: Option<Color>, leading: Option<Color>) -> bool {
    match (a, b) {
        (Card::Wizard, _) => true,
        (_, Card::Wizard) => false,
        (Card::Fool, _) => false,
        (_, Card::Fool) => true,
        (
            Card::Regular {
                color: a_color,
                value: a_value,
            },
            Card::Regular {
                color: b_color,
                value: b_value,
            },
        ) => {
            let a_trump = Some(a_color) == trump;
            let b_trump = Some(b_color) == trump;
            if a_trump && !b_trump {
                return true;
            }
            if b_trump && !a_trump {
                return false;
            }
            if a_color == b_color {
                return a_value > b_value;
            }
            // Different colors, neither trump: only the leading color can win
            Some(a_color) == leading && Some(b_color) != leading
        }
    }
}

impl Card {
    /// Method form of [`ranks_higher`].
    pub fn ranks_higher(self, other: Card, trump: Option<Color>, leading: Option<Color>) -> bool {
        ranks_higher(self, other, trump, leading)
    }
}
