//! Snapshot encoding.

use super::error::SnapshotError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// How a state is laid out in storage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SnapshotFormat {
    /// Human-readable JSON, the same document a browser storefront keeps
    /// in local storage.
    #[default]
    Json,
    /// Compact bincode encoding.
    Binary,
}

impl SnapshotFormat {
    pub fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, SnapshotError> {
        match self {
            Self::Json => serde_json::to_vec(value)
                .map_err(|e| SnapshotError::SerializationFailed(e.to_string())),
            Self::Binary => bincode::serialize(value)
                .map_err(|e| SnapshotError::SerializationFailed(e.to_string())),
        }
    }

    pub fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, SnapshotError> {
        match self {
            Self::Json => serde_json::from_slice(bytes)
                .map_err(|e| SnapshotError::DeserializationFailed(e.to_string())),
            Self::Binary => bincode::deserialize(bytes)
                .map_err(|e| SnapshotError::DeserializationFailed(e.to_string())),
        }
    }
}

impl fmt::Display for SnapshotFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => f.write_str("json"),
            Self::Binary => f.write_str("binary"),
        }
    }
}

impl FromStr for SnapshotFormat {
    type Err = SnapshotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "binary" | "bincode" => Ok(Self::Binary),
            other => Err(SnapshotError::UnknownFormat(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::{Cart, CartItem};
    use crate::model::Product;
    use chrono::Utc;

    fn sample_cart() -> Cart {
        let mut lamp = Product::new("lamp", "Lamp", 19.99);
        lamp.original_price = Some(24.99);
        lamp.created_at = Some("1704067200000".to_string());
        Cart::from_items(vec![CartItem::new("lamp-1", lamp, 2)], Utc::now())
    }

    #[test]
    fn both_formats_preserve_the_cart() {
        let cart = sample_cart();
        for format in [SnapshotFormat::Json, SnapshotFormat::Binary] {
            let bytes = format.encode(&cart).unwrap();
            let decoded: Cart = format.decode(&bytes).unwrap();
            assert_eq!(decoded, cart, "format {format}");
        }
    }

    #[test]
    fn binary_is_smaller_than_json() {
        let cart = sample_cart();
        let json = SnapshotFormat::Json.encode(&cart).unwrap();
        let binary = SnapshotFormat::Binary.encode(&cart).unwrap();
        assert!(binary.len() < json.len());
    }

    #[test]
    fn garbage_fails_to_decode() {
        let result: Result<Cart, _> = SnapshotFormat::Json.decode(b"{not json");
        assert!(matches!(
            result,
            Err(SnapshotError::DeserializationFailed(_))
        ));
    }

    #[test]
    fn parses_format_names() {
        assert_eq!("JSON".parse::<SnapshotFormat>().unwrap(), SnapshotFormat::Json);
        assert_eq!(
            "binary".parse::<SnapshotFormat>().unwrap(),
            SnapshotFormat::Binary
        );
        assert!("yaml".parse::<SnapshotFormat>().is_err());
    }
}
