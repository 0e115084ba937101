//! Core card-related types: Card, CardKind, Color, Value

use std::fmt;

use crate::errors::domain::DomainError;

/// The four colors of the deck, one per faction.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Color {
    Blue,
    Green,
    Red,
    Yellow,
}

impl Color {
    pub const ALL: [Color; 4] = [Color::Blue, Color::Green, Color::Red, Color::Yellow];

    /// Faction printed on the cards of this color.
    pub fn faction(self) -> &'static str {
        match self {
            Color::Blue => "Humans",
            Color::Green => "Elves",
            Color::Red => "Dwarves",
            Color::Yellow => "Giants",
        }
    }

    pub fn letter(self) -> char {
        match self {
            Color::Blue => 'B',
            Color::Green => 'G',
            Color::Red => 'R',
            Color::Yellow => 'Y',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.faction())
    }
}

/// Face value of a regular card, always within `1..=13`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Value(u8);

impl Value {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 13;

    pub fn new(value: u8) -> Result<Self, DomainError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(DomainError::InvalidCard(format!(
                "regular cards must have a value between {} and {}, got {value}",
                Self::MIN,
                Self::MAX
            )));
        }
        Ok(Self(value))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum CardKind {
    Regular,
    Wizard,
    Fool,
}

/// A single card. Wizards and Fools carry neither color nor value.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Card {
    Regular { color: Color, value: Value },
    Wizard,
    Fool,
}

impl Card {
    pub fn regular(color: Color, value: u8) -> Result<Self, DomainError> {
        Ok(Card::Regular {
            color,
            value: Value::new(value)?,
        })
    }

    pub fn kind(self) -> CardKind {
        match self {
            Card::Regular { .. } => CardKind::Regular,
            Card::Wizard => CardKind::Wizard,
            Card::Fool => CardKind::Fool,
        }
    }

    /// `None` for the colorless specials.
    pub fn color(self) -> Option<Color> {
        match self {
            Card::Regular { color, .. } => Some(color),
            Card::Wizard | Card::Fool => None,
        }
    }

    pub fn value(self) -> Option<u8> {
        match self {
            Card::Regular { value, .. } => Some(value.get()),
            Card::Wizard | Card::Fool => None,
        }
    }

    pub fn is_special(self) -> bool {
        !matches!(self, Card::Regular { .. })
    }

    pub fn is_wizard(self) -> bool {
        matches!(self, Card::Wizard)
    }

    pub fn is_fool(self) -> bool {
        matches!(self, Card::Fool)
    }

    /// Short face label: "Z" for a Wizard, "N" for a Fool, the number otherwise.
    pub fn display_value(self) -> String {
        match self {
            Card::Regular { value, .. } => value.get().to_string(),
            Card::Wizard => "Z".to_string(),
            Card::Fool => "N".to_string(),
        }
    }
}

// Note: Ord on Card is only for stable sorting: regulars by color then value,
// then Wizards, then Fools. Never use it to decide a trick.
impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        fn key(card: &Card) -> (u8, Option<Color>, Option<u8>) {
            match *card {
                Card::Regular { color, value } => (0, Some(color), Some(value.get())),
                Card::Wizard => (1, None, None),
                Card::Fool => (2, None, None),
            }
        }
        key(self).cmp(&key(other))
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
