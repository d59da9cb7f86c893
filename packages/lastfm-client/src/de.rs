//! Serde helpers for the service's loosely typed JSON

use std::fmt::Display;
use std::str::FromStr;

use serde::de::{DeserializeOwned, Error};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Counters arrive as JSON numbers or as decimal strings
#[derive(Deserialize)]
#[serde(untagged)]
enum Numeric {
    Int(u64),
    Text(String),
}

impl Numeric {
    fn parse<T, E>(self) -> Result<Option<T>, E>
    where
        T: FromStr + TryFrom<u64>,
        <T as FromStr>::Err: Display,
        E: Error,
    {
        match self {
            Numeric::Int(n) => T::try_from(n)
                .map(Some)
                .map_err(|_| E::custom(format!("number {} out of range", n))),
            Numeric::Text(text) if text.trim().is_empty() => Ok(None),
            Numeric::Text(text) => text.trim().parse().map(Some).map_err(E::custom),
        }
    }
}

/// Required number, string or numeric
pub(crate) fn number<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + TryFrom<u64>,
    <T as FromStr>::Err: Display,
{
    Numeric::deserialize(deserializer)?
        .parse()?
        .ok_or_else(|| D::Error::custom("expected a number, found an empty string"))
}

/// Optional number; `null` and `""` read as absent
pub(crate) fn opt_number<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + TryFrom<u64>,
    <T as FromStr>::Err: Display,
{
    match Option::<Numeric>::deserialize(deserializer)? {
        Some(numeric) => numeric.parse(),
        None => Ok(None),
    }
}

/// Listings hold a single object instead of an array when there is one entry
pub(crate) fn one_or_many<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<T>, _>>()
            .map_err(D::Error::custom),
        other => serde_json::from_value(other)
            .map(|one| vec![one])
            .map_err(D::Error::custom),
    }
}
