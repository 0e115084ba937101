//! Card parsing from string representations (e.g., "B7", "G13", "Z", "N")

use std::fmt;
use std::str::FromStr;

use super::cards_types::{Card, Color};
use crate::errors::domain::DomainError;

impl FromStr for Color {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "B" => Ok(Color::Blue),
            "G" => Ok(Color::Green),
            "R" => Ok(Color::Red),
            "Y" => Ok(Color::Yellow),
            _ => Err(DomainError::ParseCard(format!("unknown color: {s}"))),
        }
    }
}

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Z" => return Ok(Card::Wizard),
            "N" => return Ok(Card::Fool),
            _ => {}
        }
        if !s.is_ascii() || !(2..=3).contains(&s.len()) {
            return Err(DomainError::ParseCard(s.to_string()));
        }
        let (color_part, value_part) = s.split_at(1);
        let color = color_part
            .parse::<Color>()
            .map_err(|_| DomainError::ParseCard(s.to_string()))?;
        let value = value_part
            .parse::<u8>()
            .map_err(|_| DomainError::ParseCard(s.to_string()))?;
        Card::regular(color, value).map_err(|_| DomainError::ParseCard(s.to_string()))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::Regular { color, value } => write!(f, "{}{}", color.letter(), value.get()),
            Card::Wizard => f.write_str("Z"),
            Card::Fool => f.write_str("N"),
        }
    }
}
