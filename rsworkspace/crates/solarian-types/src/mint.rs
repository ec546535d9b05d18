//! Inventory records returned by the Solarians `/api/mints` endpoint
//!
//! The endpoint returns thousands of records and some carry `null` where a
//! value is expected. A `null` decodes to the field's empty value so one odd
//! record never spoils the whole list.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

/// A single trait of a mint: body part or text attribute.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Attribute {
    #[serde(
        rename = "type",
        alias = "Type",
        default,
        deserialize_with = "null_as_default"
    )]
    pub kind: String,
    #[serde(alias = "Variation", default, deserialize_with = "null_as_default")]
    pub variation: String,
    /// Percentage of all mints sharing this variation
    #[serde(alias = "Rarity", default, deserialize_with = "rarity_from_json")]
    pub rarity: Decimal,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// `null` list becomes empty and `null` entries become empty attributes,
/// keeping positions intact.
fn nullable_attributes<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<Attribute>, D::Error> {
    let entries = Option::<Vec<Option<Attribute>>>::deserialize(deserializer)?;
    Ok(entries
        .unwrap_or_default()
        .into_iter()
        .map(Option::unwrap_or_default)
        .collect())
}

/// Rarities arrive as JSON numbers or quoted strings. The raw token is
/// parsed directly so no digits are lost to a float round trip.
fn rarity_from_json<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Decimal, D::Error> {
    let Some(raw) = Option::<Box<RawValue>>::deserialize(deserializer)? else {
        return Ok(Decimal::ZERO);
    };

    let token = raw.get().trim();
    let text = if token.starts_with('"') {
        serde_json::from_str::<String>(token).map_err(de::Error::custom)?
    } else {
        token.to_string()
    };

    parse_rarity(text.trim()).map_err(de::Error::custom)
}

fn parse_rarity(text: &str) -> Result<Decimal, rust_decimal::Error> {
    let value = if text.contains(['e', 'E']) {
        Decimal::from_scientific(text)?
    } else {
        Decimal::from_str(text)?
    };
    Ok(value.normalize())
}

impl Attribute {
    /// `"<variation> | <rarity>%"`
    pub fn with_rarity(&self) -> String {
        format!("{} | {}%", self.variation, self.rarity)
    }
}

/// One collectible in the inventory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Mint {
    /// On-chain mint address (44-character hash)
    #[serde(alias = "Mint", default, deserialize_with = "null_as_default")]
    pub mint: String,
    #[serde(alias = "Parts", default, deserialize_with = "nullable_attributes")]
    pub parts: Vec<Attribute>,
    #[serde(
        alias = "TextAttributes",
        alias = "text_attributes",
        default,
        deserialize_with = "nullable_attributes"
    )]
    pub text_attributes: Vec<Attribute>,
}

impl Mint {
    /// Mint number taken from the first text attribute, e.g. `"42"` out of
    /// `"Solarian #42"`. `None` when the attribute or the `#` is missing.
    pub fn serial(&self) -> Option<&str> {
        self.text_attributes
            .first()
            .and_then(|a| a.variation.split('#').nth(1))
    }

    /// True if `identifier` is this record's mint hash or its mint number.
    pub fn matches(&self, identifier: &str) -> bool {
        self.mint == identifier || self.serial() == Some(identifier)
    }
}

/// First record, in list order, matching `identifier`.
pub fn find_mint<'a>(mints: &'a [Mint], identifier: &str) -> Option<&'a Mint> {
    mints.iter().find(|m| m.matches(identifier))
}
