//! Serialization and deserialization for card types

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::cards_types::{Card, Color};

// Color serde
impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let s = match self {
            Color::Blue => "BLUE",
            Color::Green => "GREEN",
            Color::Red => "RED",
            Color::Yellow => "YELLOW",
        };
        serializer.serialize_str(s)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "BLUE" => Ok(Color::Blue),
            "GREEN" => Ok(Color::Green),
            "RED" => Ok(Color::Red),
            "YELLOW" => Ok(Color::Yellow),
            _ => Err(serde::de::Error::custom(format!("Invalid color: {s}"))),
        }
    }
}

// Card serde uses the short token form ("B7", "Z", "N")
impl Serialize for Card {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<Card>()
            .map_err(|_| serde::de::Error::custom(format!("Invalid card: {s}")))
    }
}
