//! Half-half Price Calculator
//!
//! Two dishes served as halves of one physical item. Each half contributes
//! half of its whole-item base price, and paid addons on a half are charged
//! at half their unit price:
//!
//! ```text
//! unit_price = half_base(left) + half_base(right)
//!            + paid_addons(left) / 2 + paid_addons(right) / 2
//! ```

use rust_decimal::prelude::*;
use shared::models::Size;
use shared::order::{DishSelection, HalfSide};
use tracing::debug;

use super::error::PricingError;
use super::item_calculator::{ItemPrice, paid_addons_total};
use super::money::non_negative;
use super::policy::HalfHalfSizePricing;

/// Whole-item base price of one half before halving
fn whole_base_price(
    side: &DishSelection,
    selected_size: Option<&Size>,
    size_pricing: HalfHalfSizePricing,
) -> Decimal {
    match (selected_size, size_pricing) {
        (Some(size), HalfHalfSizePricing::SharedSize) => non_negative(size.price),
        (Some(size), HalfHalfSizePricing::PerDishSize) => {
            // Dishes without a size of that name fall back to the shared size
            let price = side
                .dish
                .size_named(&size.name)
                .map(|s| s.price)
                .unwrap_or(size.price);
            non_negative(price)
        }
        (None, _) => non_negative(side.dish.base_price),
    }
}

/// Price a half-half item
///
/// Both halves must name a dish, and when either dish declares sizes the
/// shared size must be selected.
pub fn price_half_half_item(
    left: Option<&DishSelection>,
    right: Option<&DishSelection>,
    selected_size: Option<&Size>,
    quantity: i32,
    size_pricing: HalfHalfSizePricing,
) -> Result<ItemPrice, PricingError> {
    let left = left.ok_or(PricingError::MissingHalf {
        side: HalfSide::Left,
    })?;
    let right = right.ok_or(PricingError::MissingHalf {
        side: HalfSide::Right,
    })?;

    if selected_size.is_none()
        && let Some(sized) = [left, right].into_iter().find(|s| s.dish.requires_size())
    {
        return Err(PricingError::SizeRequired {
            dish: sized.dish.name.clone(),
        });
    }

    let name = format!("{} / {}", left.dish.name, right.dish.name);

    let half = |side: &DishSelection| -> Result<(Decimal, Decimal), PricingError> {
        let base = whole_base_price(side, selected_size, size_pricing) / Decimal::TWO;
        let addons = paid_addons_total(side)? / Decimal::TWO;
        Ok((base, addons))
    };
    let (left_base, left_addons) = half(left)?;
    let (right_base, right_addons) = half(right)?;

    let unit_price = [left_base, right_base, left_addons, right_addons]
        .into_iter()
        .try_fold(Decimal::ZERO, |total, part| total.checked_add(part))
        .ok_or_else(|| PricingError::out_of_range(&name))?;
    let result = ItemPrice::from_unit(unit_price, quantity, &name)?;

    debug!(
        left = %left.dish.name,
        right = %right.dish.name,
        size = ?selected_size.map(|s| &s.name),
        ?size_pricing,
        %left_base,
        %right_base,
        %left_addons,
        %right_addons,
        unit_price = %result.unit_price,
        "[Pricing] Half-half item priced"
    );

    Ok(result)
}
