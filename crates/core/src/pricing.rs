//! Tiered bulk-pricing resolution.
//!
//! Wholesale customers order in inner packs; each inner contains
//! `pieces_per_inner` individual pieces, and the unit price per piece drops
//! as the ordered inner count crosses tier thresholds. This module is the
//! single home for that derivation - every consumer (cart lines, wishlist
//! rows, checkout summaries) goes through the same fallback chain instead of
//! re-implementing it.
//!
//! All functions are total: malformed catalog data (missing tiers, zero
//! `innerQty`, tiers without a price) degrades to a usable value and emits a
//! `tracing` event so the degradation is observable in tests and logs.

use rust_decimal::Decimal;

use crate::types::product::{BulkTier, Product};

/// Derived pricing facts for a product at a chosen inner-pack quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    /// Pieces contained in one inner pack.
    pub pieces_per_inner: Decimal,
    /// Ordered inner count times `pieces_per_inner`.
    pub total_pieces: Decimal,
    /// Unit price per piece at the active tier.
    pub unit_price: Decimal,
    /// `total_pieces * unit_price`.
    pub total_price: Decimal,
}

/// A product's tiers sorted ascending by activation threshold.
///
/// The catalog does not guarantee order. The sort is stable, so tiers that
/// share a threshold keep their catalog order and the later one wins
/// resolution in [`active_tier`].
#[must_use]
pub fn sorted_tiers(product: &Product) -> Vec<BulkTier> {
    let mut tiers = product.bulk_pricing.clone();
    tiers.sort_by_key(|tier| tier.inner);
    tiers
}

/// The tier active at `inner_count`, given tiers sorted ascending by `inner`.
///
/// Selects the tier with the greatest threshold not exceeding `inner_count`.
/// When no tier qualifies (count below the smallest threshold, including
/// zero), the first tier still applies; `None` only for an empty tier list.
#[must_use]
pub fn active_tier(tiers: &[BulkTier], inner_count: u32) -> Option<&BulkTier> {
    let first = tiers.first()?;
    Some(tiers.iter().fold(first, |current, tier| {
        if inner_count >= tier.inner {
            tier
        } else {
            current
        }
    }))
}

/// Pieces contained in one inner pack of `product`.
///
/// Resolution order: the product's `innerQty` when positive, else the first
/// sorted tier's `qty / inner` when both are positive, else `1`. Always
/// returns a positive number.
#[must_use]
pub fn pieces_per_inner(product: &Product) -> Decimal {
    if let Some(qty) = product.inner_qty
        && qty > 0
    {
        return Decimal::from(qty);
    }

    let tiers = sorted_tiers(product);
    if let Some(first) = tiers.first()
        && first.qty > 0
        && first.inner > 0
    {
        return Decimal::from(first.qty) / Decimal::from(first.inner);
    }

    tracing::debug!(
        product_id = %product.id,
        "no usable innerQty or tier data; defaulting to 1 piece per inner"
    );
    Decimal::ONE
}

/// Unit price per piece for `product` at `inner_count` inner packs.
///
/// The active tier's price when it carries one, else the product's base
/// price. A tier list that is entirely absent also resolves to base price.
#[must_use]
pub fn unit_price(product: &Product, inner_count: u32) -> Decimal {
    let tiers = sorted_tiers(product);
    match active_tier(&tiers, inner_count) {
        Some(tier) => tier.price.unwrap_or_else(|| {
            tracing::debug!(
                product_id = %product.id,
                tier_inner = tier.inner,
                "active tier carries no price; falling back to base price"
            );
            product.price
        }),
        None => product.price,
    }
}

/// Full pricing breakdown for `product` at `inner_count` inner packs.
#[must_use]
pub fn totals(product: &Product, inner_count: u32) -> Totals {
    let pieces_per_inner = pieces_per_inner(product);
    let total_pieces = Decimal::from(inner_count) * pieces_per_inner;
    let unit_price = unit_price(product, inner_count);

    Totals {
        pieces_per_inner,
        total_pieces,
        unit_price,
        total_price: total_pieces * unit_price,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::id::ProductId;

    fn tier(inner: u32, qty: u32, price: u32) -> BulkTier {
        BulkTier {
            inner,
            qty,
            price: Some(Decimal::from(price)),
        }
    }

    fn product_with_tiers(tiers: Vec<BulkTier>) -> Product {
        Product {
            id: ProductId::new("p1"),
            name: "Stacking Rings".to_owned(),
            price: Decimal::from(120u32),
            images: Vec::new(),
            inner_qty: None,
            bulk_pricing: tiers,
        }
    }

    /// The three-tier wholesale ladder used across these tests:
    /// 1+ inners at 100/piece, 5+ at 90, 10+ at 80.
    fn ladder() -> Vec<BulkTier> {
        vec![tier(1, 12, 100), tier(5, 60, 90), tier(10, 120, 80)]
    }

    #[test]
    fn test_sorted_tiers_orders_by_threshold() {
        let product = product_with_tiers(vec![tier(10, 120, 80), tier(1, 12, 100), tier(5, 60, 90)]);
        let sorted = sorted_tiers(&product);
        let thresholds: Vec<u32> = sorted.iter().map(|t| t.inner).collect();
        assert_eq!(thresholds, vec![1, 5, 10]);
    }

    #[test]
    fn test_active_tier_picks_greatest_met_threshold() {
        let tiers = ladder();
        assert_eq!(active_tier(&tiers, 4).unwrap().inner, 1);
        assert_eq!(active_tier(&tiers, 5).unwrap().inner, 5);
        assert_eq!(active_tier(&tiers, 9).unwrap().inner, 5);
        assert_eq!(active_tier(&tiers, 10).unwrap().inner, 10);
        assert_eq!(active_tier(&tiers, 500).unwrap().inner, 10);
    }

    #[test]
    fn test_active_tier_zero_count_yields_first_tier() {
        // Reduce-with-initial-value semantics: a count below every threshold
        // still resolves to the first tier, never to a zero price.
        let tiers = vec![tier(5, 60, 90), tier(10, 120, 80)];
        assert_eq!(active_tier(&tiers, 0).unwrap().inner, 5);
        assert_eq!(active_tier(&tiers, 3).unwrap().inner, 5);
    }

    #[test]
    fn test_active_tier_empty_list() {
        assert!(active_tier(&[], 7).is_none());
    }

    #[test]
    fn test_active_tier_duplicate_threshold_later_wins() {
        let tiers = vec![tier(1, 12, 100), tier(5, 60, 90), tier(5, 60, 85)];
        assert_eq!(
            active_tier(&tiers, 5).unwrap().price,
            Some(Decimal::from(85u32))
        );
    }

    #[test]
    fn test_active_tier_monotonic() {
        let tiers = ladder();
        let mut previous = 0u32;
        for count in 0..=30 {
            let selected = active_tier(&tiers, count).unwrap().inner;
            assert!(selected >= previous, "tier threshold regressed at count {count}");
            previous = selected;
        }
    }

    #[test]
    fn test_pieces_per_inner_prefers_inner_qty() {
        let mut product = product_with_tiers(ladder());
        product.inner_qty = Some(24);
        assert_eq!(pieces_per_inner(&product), Decimal::from(24u32));
    }

    #[test]
    fn test_pieces_per_inner_from_first_tier() {
        let product = product_with_tiers(ladder());
        assert_eq!(pieces_per_inner(&product), Decimal::from(12u32));
    }

    #[test]
    fn test_pieces_per_inner_zero_inner_qty_falls_through() {
        let mut product = product_with_tiers(ladder());
        product.inner_qty = Some(0);
        assert_eq!(pieces_per_inner(&product), Decimal::from(12u32));
    }

    #[test]
    fn test_pieces_per_inner_defaults_to_one() {
        let product = product_with_tiers(Vec::new());
        assert_eq!(pieces_per_inner(&product), Decimal::ONE);

        // A first tier with a zero threshold is unusable for the ratio.
        let product = product_with_tiers(vec![tier(0, 12, 100)]);
        assert_eq!(pieces_per_inner(&product), Decimal::ONE);
    }

    #[test]
    fn test_unit_price_empty_tiers_uses_base_price() {
        let mut product = product_with_tiers(Vec::new());
        product.price = Decimal::from(50u32);
        assert_eq!(unit_price(&product, 0), Decimal::from(50u32));
        assert_eq!(unit_price(&product, 7), Decimal::from(50u32));
    }

    #[test]
    fn test_unit_price_tier_without_price_uses_base_price() {
        let product = product_with_tiers(vec![BulkTier {
            inner: 1,
            qty: 12,
            price: None,
        }]);
        assert_eq!(unit_price(&product, 3), Decimal::from(120u32));
    }

    #[test]
    fn test_totals_wholesale_ladder() {
        let product = product_with_tiers(ladder());

        // innerQty unset: pieces per inner comes from the first tier, 12/1.
        let at_4 = totals(&product, 4);
        assert_eq!(at_4.pieces_per_inner, Decimal::from(12u32));
        assert_eq!(at_4.unit_price, Decimal::from(100u32));
        assert_eq!(at_4.total_pieces, Decimal::from(48u32));
        assert_eq!(at_4.total_price, Decimal::from(4800u32));

        let at_5 = totals(&product, 5);
        assert_eq!(at_5.unit_price, Decimal::from(90u32));
        assert_eq!(at_5.total_pieces, Decimal::from(60u32));
        assert_eq!(at_5.total_price, Decimal::from(5400u32));

        let at_12 = totals(&product, 12);
        assert_eq!(at_12.unit_price, Decimal::from(80u32));
        assert_eq!(at_12.total_pieces, Decimal::from(144u32));
        assert_eq!(at_12.total_price, Decimal::from(11520u32));
    }

    #[test]
    fn test_totals_zero_count() {
        let product = product_with_tiers(ladder());
        let at_0 = totals(&product, 0);
        assert_eq!(at_0.total_pieces, Decimal::ZERO);
        assert_eq!(at_0.total_price, Decimal::ZERO);
        // The lowest tier's price still applies, not a zero price.
        assert_eq!(at_0.unit_price, Decimal::from(100u32));
    }
}
