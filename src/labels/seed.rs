//! Deterministic display seeds derived from game identifiers.
//!
//! The trend and public-money labels are not statistics. They are picked from
//! `integer(game_id) mod 100`, so the same game shows the same label on every
//! run.

use serde::de::{self, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a game, as delivered by the schedule feed.
///
/// Feeds are loose about ids, so deserialization never fails: floats are
/// truncated toward zero, integers too large for `i64` keep their digits as
/// text, and `null`, booleans, objects or a missing id become [`GameId::Unknown`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum GameId {
    Numeric(i64),
    Text(String),
    #[default]
    Unknown,
}

impl From<i64> for GameId {
    fn from(id: i64) -> Self {
        GameId::Numeric(id)
    }
}

impl From<&str> for GameId {
    fn from(id: &str) -> Self {
        GameId::Text(id.to_string())
    }
}

impl From<String> for GameId {
    fn from(id: String) -> Self {
        GameId::Text(id)
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameId::Numeric(id) => write!(f, "{}", id),
            GameId::Text(id) => f.write_str(id),
            GameId::Unknown => f.write_str("unknown"),
        }
    }
}

struct GameIdVisitor;

impl<'de> Visitor<'de> for GameIdVisitor {
    type Value = GameId;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a game id")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<GameId, E> {
        Ok(GameId::Numeric(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<GameId, E> {
        Ok(i64::try_from(v)
            .map(GameId::Numeric)
            .unwrap_or_else(|_| GameId::Text(v.to_string())))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<GameId, E> {
        if !v.is_finite() {
            return Ok(GameId::Unknown);
        }
        let truncated = v.trunc();
        if truncated >= i64::MIN as f64 && truncated < i64::MAX as f64 {
            Ok(GameId::Numeric(truncated as i64))
        } else {
            Ok(GameId::Text(format!("{:.0}", truncated)))
        }
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<GameId, E> {
        Ok(GameId::Text(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<GameId, E> {
        Ok(GameId::Text(v))
    }

    fn visit_bool<E: de::Error>(self, _v: bool) -> Result<GameId, E> {
        Ok(GameId::Unknown)
    }

    fn visit_unit<E: de::Error>(self) -> Result<GameId, E> {
        Ok(GameId::Unknown)
    }

    fn visit_none<E: de::Error>(self) -> Result<GameId, E> {
        Ok(GameId::Unknown)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<GameId, D::Error> {
        deserializer.deserialize_any(GameIdVisitor)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<GameId, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(GameId::Unknown)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<GameId, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(GameId::Unknown)
    }
}

impl<'de> Deserialize<'de> for GameId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(GameIdVisitor)
    }
}

/// Seed in `-99..=99`, or no seed when the identifier has no leading integer.
///
/// A missing seed compares false against every threshold, so it always
/// falls through to the last bucket of a lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Seed(Option<i64>);

impl Seed {
    pub fn new(value: Option<i64>) -> Self {
        Self(value)
    }

    pub fn value(self) -> Option<i64> {
        self.0
    }

    /// `seed < threshold`; false when there is no seed.
    pub fn is_below(self, threshold: i64) -> bool {
        self.0.is_some_and(|seed| seed < threshold)
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(seed) => write!(f, "{}", seed),
            None => f.write_str("NaN"),
        }
    }
}

/// Derive the display seed for a game.
///
/// The remainder keeps the sign of the identifier: `-130` gives `-30`.
pub fn game_seed(game_id: &GameId) -> Seed {
    match game_id {
        GameId::Numeric(id) => Seed(Some(id % 100)),
        GameId::Text(id) => Seed(leading_integer_mod_100(id)),
        GameId::Unknown => Seed(None),
    }
}

/// Parse the leading integer of `text` and reduce it mod 100.
///
/// Leading whitespace and one sign are accepted, parsing stops at the first
/// non-digit. Only the last two digits matter for the remainder, so digit
/// runs of any length are handled without overflow.
fn leading_integer_mod_100(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let remainder = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .map(|b| i64::from(b - b'0'))
        .fold(None, |acc: Option<i64>, digit| {
            Some((acc.unwrap_or(0) * 10 + digit) % 100)
        })?;

    Some(if negative { -remainder } else { remainder })
}
