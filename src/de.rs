//! Deserialization helpers shared by the resource records.

use serde::{Deserialize, Deserializer};

/// Reads an explicit `null` the same way as a missing field.
///
/// Pair with `#[serde(default)]` so both cases yield `T::default()`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
