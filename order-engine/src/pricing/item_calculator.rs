//! Item Price Calculator
//!
//! Reduces one composed order item to a unit price and line total:
//!
//! ```text
//! unit_price = base (selected size price, else dish base price)
//!            + Σ(paid addon unit price × paid quantity)
//! line_total = unit_price × quantity
//! ```
//!
//! Added and removed ingredients never affect the price, and neither do
//! free addon counters. Uses rust_decimal for precision calculations; amounts
//! beyond its range fail with [`PricingError::AmountOutOfRange`].

use rust_decimal::prelude::*;
use shared::models::Size;
use shared::order::{ComposedOrderItem, DishSelection, ItemComposition};
use tracing::debug;

use super::error::PricingError;
use super::half_half::price_half_half_item;
use super::money::{non_negative, round_money};
use super::policy::HalfHalfSizePricing;

/// Result of item price calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemPrice {
    /// Per-unit price, rounded to 2 decimal places
    pub unit_price: Decimal,
    /// unit_price × quantity
    pub line_total: Decimal,
}

impl ItemPrice {
    /// Build from an unrounded unit price; quantity is clamped to at least 1
    pub(crate) fn from_unit(
        unit_price: Decimal,
        quantity: i32,
        item: &str,
    ) -> Result<Self, PricingError> {
        let unit_price = round_money(unit_price.max(Decimal::ZERO));
        let line_total = unit_price
            .checked_mul(Decimal::from(quantity.max(1)))
            .map(round_money)
            .ok_or_else(|| PricingError::out_of_range(item))?;
        Ok(Self {
            unit_price,
            line_total,
        })
    }
}

/// Sum of paid addons on one dish selection (price × paid quantity)
pub fn paid_addons_total(selection: &DishSelection) -> Result<Decimal, PricingError> {
    selection
        .paid_addons()
        .try_fold(Decimal::ZERO, |total, a| {
            non_negative(a.unit_price)
                .checked_mul(Decimal::from(a.paid_quantity))
                .and_then(|amount| total.checked_add(amount))
        })
        .ok_or_else(|| PricingError::out_of_range(&selection.dish.name))
}

/// Price a single-dish item
///
/// A dish that declares sizes must have one selected; otherwise the item is
/// an incomplete configuration and is not priced.
pub fn price_simple_item(
    selection: &DishSelection,
    selected_size: Option<&Size>,
    quantity: i32,
) -> Result<ItemPrice, PricingError> {
    let base_price = match selected_size {
        Some(size) => non_negative(size.price),
        None if selection.dish.requires_size() => {
            return Err(PricingError::SizeRequired {
                dish: selection.dish.name.clone(),
            });
        }
        None => non_negative(selection.dish.base_price),
    };

    let name = &selection.dish.name;
    let addons_total = paid_addons_total(selection)?;
    let unit_price = base_price
        .checked_add(addons_total)
        .ok_or_else(|| PricingError::out_of_range(name))?;
    let result = ItemPrice::from_unit(unit_price, quantity, name)?;

    debug!(
        dish = %selection.dish.name,
        size = ?selected_size.map(|s| &s.name),
        %base_price,
        %addons_total,
        unit_price = %result.unit_price,
        line_total = %result.line_total,
        "[Pricing] Simple item priced"
    );

    Ok(result)
}

/// Price any composed item
pub fn price_item(
    item: &ComposedOrderItem,
    size_pricing: HalfHalfSizePricing,
) -> Result<ItemPrice, PricingError> {
    match &item.composition {
        ItemComposition::Simple(selection) => {
            price_simple_item(selection, item.selected_size.as_ref(), item.quantity)
        }
        ItemComposition::HalfHalf { left, right } => price_half_half_item(
            left.as_ref(),
            right.as_ref(),
            item.selected_size.as_ref(),
            item.quantity,
            size_pricing,
        ),
    }
}
