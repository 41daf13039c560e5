//! Product record as returned by the inventory backend.

use serde::{Deserialize, Deserializer};

/// One inventory item.
///
/// Every field tolerates being absent or `null`: strings become empty,
/// `colors` becomes an empty list, `price` becomes `None`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ProductRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub api_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub colors: Vec<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub manufacturer: String,
    #[serde(default)]
    pub availability: Availability,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Stock status code.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Availability {
    InStock,
    LessThan10,
    OutOfStock,
    /// Empty or missing code: the backend has not resolved availability yet.
    #[default]
    Unknown,
    /// Any other code, kept verbatim.
    Other(String),
}

impl Availability {
    /// Parses a backend code. Matching is exact (codes are case-sensitive).
    pub fn from_code(code: &str) -> Self {
        match code {
            "INSTOCK" => Availability::InStock,
            "LESSTHAN10" => Availability::LessThan10,
            "OUTOFSTOCK" => Availability::OutOfStock,
            "" => Availability::Unknown,
            other => Availability::Other(other.to_string()),
        }
    }

    /// Backend code; empty for [`Availability::Unknown`].
    pub fn code(&self) -> &str {
        match self {
            Availability::InStock => "INSTOCK",
            Availability::LessThan10 => "LESSTHAN10",
            Availability::OutOfStock => "OUTOFSTOCK",
            Availability::Unknown => "",
            Availability::Other(code) => code,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Availability::Unknown)
    }
}

impl<'de> Deserialize<'de> for Availability {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = Option::<String>::deserialize(deserializer)?;
        Ok(code.as_deref().map_or(Availability::Unknown, Availability::from_code))
    }
}
