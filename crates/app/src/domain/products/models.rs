//! Product Models

use rust_decimal::Decimal;

use crate::uuids::TypedUuid;

/// Marker for product identifiers.
#[derive(Debug)]
pub struct ProductIdentity;

/// Product UUID
pub type ProductUuid = TypedUuid<ProductIdentity>;

/// A product, generic over how its identity is held.
///
/// Persisted records always carry an identity; transfer data may not have one
/// yet. Both shapes share the same fields so the mapping between them is total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product<I> {
    pub uuid: I,
    pub code: String,
    pub price: Decimal,
    pub quantity: u32,
}

/// Product Record
pub type ProductRecord = Product<ProductUuid>;

/// Product Data, exchanged with callers
pub type ProductData = Product<Option<ProductUuid>>;

/// Listing filter. Listings currently return every product regardless.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    pub code: Option<String>,
}

impl ProductData {
    /// Product data that has not been assigned an identity.
    pub fn new(code: impl Into<String>, price: Decimal, quantity: u32) -> Self {
        Self {
            uuid: None,
            code: code.into(),
            price,
            quantity,
        }
    }
}

impl ProductRecord {
    /// Build a record from transfer data under the given identity.
    ///
    /// Any identity already present on `data` is ignored.
    #[must_use]
    pub fn from_data(uuid: ProductUuid, data: ProductData) -> Self {
        Self {
            uuid,
            code: data.code,
            price: data.price,
            quantity: data.quantity,
        }
    }

    /// Replace price and quantity with those from `data`, keeping identity and code.
    #[must_use]
    pub fn apply(self, data: ProductData) -> Self {
        Self {
            price: data.price,
            quantity: data.quantity,
            ..self
        }
    }
}

impl From<ProductRecord> for ProductData {
    fn from(record: ProductRecord) -> Self {
        Self {
            uuid: Some(record.uuid),
            code: record.code,
            price: record.price,
            quantity: record.quantity,
        }
    }
}
