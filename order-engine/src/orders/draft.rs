//! Order draft
//!
//! The in-progress order: priced lines, fulfillment channel, delivery
//! coordinate and the zone set. Every mutation re-runs [`OrderDraft::recalculate`],
//! so `totals()` always reflects the current lines, coordinate and zones.

use rust_decimal::prelude::*;
use shared::models::{DeliveryZone, LatLng};
use shared::order::{
    ComposedOrderItem, ItemComposition, OrderType, PricedOrder, PricedOrderItem,
};
use shared::util::now_millis;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::merge::generate_instance_id;
use super::totals::{OrderTotals, PricingSettings, calculate_order_totals};
use crate::pricing::money::{stored_unit_price, to_f64};
use crate::pricing::{HalfHalfPolicy, ItemPrice, PricingError, price_item};

/// One priced line of an order draft
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLine {
    /// Content-addressed merge key hash
    pub instance_id: String,
    pub item: ComposedOrderItem,
    pub unit_price: Decimal,
    pub line_total: Decimal,
}

impl OrderLine {
    fn apply_price(&mut self, price: ItemPrice) {
        self.unit_price = price.unit_price;
        self.line_total = price.line_total;
    }
}

/// In-progress order with always-current totals
#[derive(Debug, Clone)]
pub struct OrderDraft {
    order_type: OrderType,
    lines: Vec<OrderLine>,
    coordinate: Option<LatLng>,
    zones: Vec<DeliveryZone>,
    settings: PricingSettings,
    vat_rate: Option<f64>,
    totals: Result<OrderTotals, PricingError>,
    created_at: i64,
}

impl OrderDraft {
    pub fn new(order_type: OrderType, settings: PricingSettings) -> Self {
        let mut draft = Self {
            order_type,
            lines: Vec::new(),
            coordinate: None,
            zones: Vec::new(),
            settings,
            vat_rate: None,
            totals: Ok(OrderTotals::default()),
            created_at: now_millis(),
        };
        draft.recalculate();
        draft
    }

    // ========== Mutations ==========

    /// Add a configured item, merging into an identical line when present
    ///
    /// The item is priced before the order changes, so an incomplete
    /// configuration or an out-of-range amount leaves the draft untouched.
    /// Returns the line's instance_id.
    pub fn add_item(&mut self, mut item: ComposedOrderItem) -> Result<String, PricingError> {
        let size_pricing = self.settings.half_half.size_pricing;
        price_item(&item, size_pricing)?;

        if let ItemComposition::HalfHalf {
            left: Some(left),
            right: Some(right),
        } = &item.composition
            && !self.settings.half_half.is_combinable(&left.dish, &right.dish)
        {
            return Err(PricingError::HalfHalfNotAllowed {
                left: left.dish.name.clone(),
                right: right.dish.name.clone(),
            });
        }

        item.quantity = item.effective_quantity();
        let instance_id = generate_instance_id(&item);

        match self.lines.iter_mut().find(|l| l.instance_id == instance_id) {
            Some(line) => {
                let mut merged = line.item.clone();
                merged.quantity = merged.effective_quantity().saturating_add(item.quantity);
                let price = price_item(&merged, size_pricing)?;
                line.item = merged;
                line.apply_price(price);
                debug!(
                    instance_id = %instance_id,
                    quantity = line.item.quantity,
                    "[Order] Merged into existing line"
                );
            }
            None => {
                let price = price_item(&item, size_pricing)?;
                debug!(
                    instance_id = %instance_id,
                    name = %item.display_name(),
                    "[Order] Added new line"
                );
                self.lines.push(OrderLine {
                    instance_id: instance_id.clone(),
                    item,
                    unit_price: price.unit_price,
                    line_total: price.line_total,
                });
            }
        }

        self.recalculate();
        Ok(instance_id)
    }

    /// Change a line's quantity (values below 1 are clamped to 1)
    ///
    /// The line is left unchanged when the new total cannot be priced.
    pub fn set_quantity(&mut self, instance_id: &str, quantity: i32) -> Result<(), PricingError> {
        let size_pricing = self.settings.half_half.size_pricing;
        let line = self
            .lines
            .iter_mut()
            .find(|l| l.instance_id == instance_id)
            .ok_or_else(|| PricingError::ItemNotFound(instance_id.to_string()))?;

        let mut updated = line.item.clone();
        updated.quantity = quantity.max(1);
        let price = price_item(&updated, size_pricing)?;
        line.item = updated;
        line.apply_price(price);

        self.recalculate();
        Ok(())
    }

    /// Remove a line, returning its item
    pub fn remove_item(&mut self, instance_id: &str) -> Result<ComposedOrderItem, PricingError> {
        let index = self
            .lines
            .iter()
            .position(|l| l.instance_id == instance_id)
            .ok_or_else(|| PricingError::ItemNotFound(instance_id.to_string()))?;

        let line = self.lines.remove(index);
        self.recalculate();
        Ok(line.item)
    }

    pub fn set_order_type(&mut self, order_type: OrderType) {
        self.order_type = order_type;
        self.recalculate();
    }

    /// Set the geocoded delivery coordinate (`None` while not geocoded)
    pub fn set_coordinate(&mut self, coordinate: Option<LatLng>) {
        self.coordinate = coordinate;
        self.recalculate();
    }

    /// Replace the zone set, keeping the given order for first-match resolution
    pub fn set_zones(&mut self, zones: Vec<DeliveryZone>) {
        self.zones = zones;
        self.recalculate();
    }

    /// Flat VAT rate copied into the priced order
    pub fn set_vat_rate(&mut self, vat_rate: Option<f64>) {
        self.vat_rate = vat_rate;
    }

    /// Swap in a new half-half policy and reprice every line
    ///
    /// Eligibility is only enforced when items are added; existing half-half
    /// lines stay on the order.
    pub fn apply_half_half_policy(&mut self, policy: HalfHalfPolicy) {
        self.settings.half_half = policy;
        let size_pricing = self.settings.half_half.size_pricing;

        for line in &mut self.lines {
            match price_item(&line.item, size_pricing) {
                Ok(price) => line.apply_price(price),
                Err(e) => warn!(
                    instance_id = %line.instance_id,
                    error = %e,
                    "[Order] Failed to reprice line, keeping previous price"
                ),
            }
        }

        self.recalculate();
    }

    /// Apply a pending policy update from a [`PolicyStore`](crate::pricing::PolicyStore)
    /// subscription. Returns true when the policy changed.
    pub fn sync_policy(&mut self, rx: &mut watch::Receiver<HalfHalfPolicy>) -> bool {
        if !rx.has_changed().unwrap_or(false) {
            return false;
        }
        let policy = rx.borrow_and_update().clone();
        self.apply_half_half_policy(policy);
        true
    }

    /// Recompute order totals from the current lines, coordinate and zones
    pub fn recalculate(&mut self) {
        self.totals = calculate_order_totals(
            self.order_type,
            &self.lines,
            self.coordinate,
            &self.zones,
            self.settings.outside_zone,
        );
    }

    // ========== Accessors ==========

    pub fn order_type(&self) -> OrderType {
        self.order_type
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn line(&self, instance_id: &str) -> Option<&OrderLine> {
        self.lines.iter().find(|l| l.instance_id == instance_id)
    }

    pub fn coordinate(&self) -> Option<LatLng> {
        self.coordinate
    }

    pub fn zones(&self) -> &[DeliveryZone] {
        &self.zones
    }

    pub fn settings(&self) -> &PricingSettings {
        &self.settings
    }

    pub fn vat_rate(&self) -> Option<f64> {
        self.vat_rate
    }

    pub fn created_at(&self) -> i64 {
        self.created_at
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Current totals, or the reason the order cannot be totalled
    pub fn totals(&self) -> Result<&OrderTotals, PricingError> {
        self.totals.as_ref().map_err(Clone::clone)
    }

    /// Build the record handed to order storage
    pub fn to_priced_order(&self) -> Result<PricedOrder, PricingError> {
        if self.lines.is_empty() {
            return Err(PricingError::EmptyOrder);
        }
        let totals = self.totals()?;

        let items: Vec<PricedOrderItem> = self
            .lines
            .iter()
            .map(|line| PricedOrderItem {
                instance_id: line.instance_id.clone(),
                name: line.item.display_name(),
                quantity: line.item.effective_quantity(),
                price: stored_unit_price(line.unit_price),
                line_total: to_f64(line.line_total),
                selected_size: line.item.selected_size.clone(),
                composition: line.item.composition.clone(),
                note: line.item.note.clone(),
            })
            .collect();

        info!(
            order_type = ?self.order_type,
            items = items.len(),
            subtotal = %totals.subtotal,
            delivery_fee = %totals.delivery_fee,
            total = %totals.total,
            "[Order] Order priced"
        );

        Ok(PricedOrder {
            order_type: self.order_type,
            coordinate: self.coordinate.filter(|_| self.order_type.is_delivery()),
            zone_id: totals.zone_id.clone(),
            zone_name: totals.zone_name.clone(),
            items,
            subtotal: to_f64(totals.subtotal),
            delivery_fee: to_f64(totals.delivery_fee),
            total: to_f64(totals.total),
            minimum_order_shortfall: totals.minimum_order_shortfall.map(to_f64),
            vat_rate: self.vat_rate,
            created_at: self.created_at,
        })
    }
}
