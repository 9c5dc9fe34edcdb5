use serde::{Deserialize, Deserializer};

/// Field of a partial update that may also be cleared: `None` leaves the column
/// alone, `Some(None)` (an explicit JSON `null`) sets it to NULL.
pub type Nullable<T> = Option<Option<T>>;

/// Use with `#[serde(default, deserialize_with = "nullable")]`; plain `Option`
/// would fold `null` and a missing key together.
pub fn nullable<'de, D, T>(deserializer: D) -> Result<Nullable<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
