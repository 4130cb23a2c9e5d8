//! Serde helpers for fields the scraping tools may write as `null`.

use serde::{Deserialize, Deserializer};

/// Decode `null` as `T::default()`.
///
/// The scrapers serialize an empty list as `null`, e.g. a freshly created
/// collection with no member films yet.
pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
