//! Catalog product data model.
//!
//! These types mirror the records served by the remote catalog API. The API
//! speaks camelCase JSON with a Mongo-style `_id` field; the serde attributes
//! here own that mapping so the rest of the workspace only sees Rust names.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::id::ProductId;

/// A volume-price breakpoint.
///
/// A tier becomes active once the ordered inner-pack count reaches `inner`.
/// Sorted ascending by `inner`, a product's tiers define non-overlapping
/// half-open activation ranges, the last tier open-ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkTier {
    /// Minimum inner-pack count at which this tier's unit price applies.
    pub inner: u32,
    /// Total piece count the tier label represents. Stored independently of
    /// `inner * piecesPerInner` and trusted when `innerQty` is absent.
    pub qty: u32,
    /// Unit price per piece at this tier. Catalog records occasionally omit
    /// it; resolution falls back to the product's base price.
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub price: Option<Decimal>,
}

/// A product as served by the remote catalog API.
///
/// Read-only from the store's perspective: line items hold a snapshot of the
/// product as it looked at the time it was added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Catalog identifier.
    #[serde(rename = "_id")]
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Base unit price per piece, before any bulk tier applies.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Image references, first one used as the thumbnail.
    #[serde(default)]
    pub images: Vec<String>,
    /// Canonical pieces-per-inner override. Zero is treated as absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inner_qty: Option<u32>,
    /// Bulk pricing tiers, in catalog order (not necessarily sorted).
    #[serde(default)]
    pub bulk_pricing: Vec<BulkTier>,
}

impl Product {
    /// First catalog image, denormalized onto line items at add time.
    #[must_use]
    pub fn first_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}
