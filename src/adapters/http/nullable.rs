//! Deserializer for PATCH fields that distinguish "absent" from "null".
//!
//! Use with `#[serde(default, deserialize_with = "nullable::deserialize")]`
//! on an `Option<Option<T>>` field:
//!
//! - field absent: `None`
//! - field `null`: `Some(None)`
//! - field set: `Some(Some(value))`

use serde::{Deserialize, Deserializer};

pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
