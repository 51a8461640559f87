//! Serde helpers for request payloads

use serde::{Deserialize, Deserializer};

/// Decode `null` as the zero value of the field, like an absent field.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
