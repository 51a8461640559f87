//! Product types

use crate::de::null_as_default;
use crate::RecordId;
use serde::{Deserialize, Serialize};

/// A product on sale
///
/// Field names on the wire follow the public API (`nama`, `harga`, `stok`).
/// `price` is expressed in the smallest currency unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: RecordId,
    #[serde(rename = "nama")]
    pub name: String,
    #[serde(rename = "harga")]
    pub price: i64,
    #[serde(rename = "stok")]
    pub stock: i64,
}

impl Product {
    pub fn new(id: RecordId, name: impl Into<String>, price: i64, stock: i64) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            stock,
        }
    }

    /// Build a stored record from an incoming payload.
    pub fn from_payload(id: RecordId, payload: ProductPayload) -> Self {
        Self {
            id,
            name: payload.name,
            price: payload.price,
            stock: payload.stock,
        }
    }
}

/// Create/replace request body
///
/// Absent or `null` fields decode to their zero value, so an update replaces the
/// whole record. Any `id` in the body is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductPayload {
    #[serde(rename = "nama", deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "harga", deserialize_with = "null_as_default")]
    pub price: i64,
    #[serde(rename = "stok", deserialize_with = "null_as_default")]
    pub stock: i64,
}

impl ProductPayload {
    pub fn new(name: impl Into<String>, price: i64, stock: i64) -> Self {
        Self {
            name: name.into(),
            price,
            stock,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_product_wire_names() {
        let product = Product::new(1, "Indomie Goreng", 3500, 10);
        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(
            value,
            json!({"id": 1, "nama": "Indomie Goreng", "harga": 3500, "stok": 10})
        );
    }

    #[test]
    fn test_payload_missing_fields_are_zeroed() {
        let payload: ProductPayload = serde_json::from_value(json!({"nama": "Kecap"})).unwrap();
        assert_eq!(payload, ProductPayload::new("Kecap", 0, 0));
    }

    #[test]
    fn test_payload_null_fields_are_zeroed() {
        let payload: ProductPayload =
            serde_json::from_value(json!({"nama": null, "harga": 5, "stok": null})).unwrap();
        assert_eq!(payload, ProductPayload::new("", 5, 0));
    }

    #[test]
    fn test_payload_ignores_id() {
        let payload: ProductPayload =
            serde_json::from_value(json!({"id": 99, "nama": "Vit", "harga": 3000, "stok": 40}))
                .unwrap();
        let product = Product::from_payload(7, payload);
        assert_eq!(product, Product::new(7, "Vit", 3000, 40));
    }

    #[test]
    fn test_payload_rejects_wrong_types() {
        let result = serde_json::from_value::<ProductPayload>(json!({"harga": "mahal"}));
        assert!(result.is_err());
    }
}
