//! End-to-end pricing scenarios

use order_engine::delivery::load_zones;
use order_engine::orders::{OrderDraft, PricingSettings, generate_instance_id};
use order_engine::pricing::{HalfHalfSizePricing, price_item};
use rust_decimal::Decimal;
use shared::models::{DeliveryZoneRecord, Dish, Size};
use shared::order::{AddonSelection, ComposedOrderItem, DishSelection, OrderType};

fn size(name: &str, price: f64) -> Size {
    Size {
        id: format!("size-{}", name),
        name: name.to_string(),
        price,
    }
}

fn dish(id: &str, name: &str, base_price: f64, sizes: Vec<Size>) -> Dish {
    Dish {
        id: id.to_string(),
        name: name.to_string(),
        category_id: "pizza".to_string(),
        base_price,
        sizes,
        ingredients: vec![],
        addon_groups: vec![],
    }
}

fn addon(id: &str, unit_price: f64, paid: u32, free: u32) -> AddonSelection {
    AddonSelection {
        addon_id: id.to_string(),
        name: id.to_string(),
        unit_price,
        paid_quantity: paid,
        free_quantity: free,
    }
}

/// Square zone around (52.0..52.1, 21.0..21.1), prices in cents
fn zone_record(id: &str, offset: f64, is_active: bool) -> DeliveryZoneRecord {
    let (lo, hi) = (offset, offset + 0.1);
    DeliveryZoneRecord {
        id: id.to_string(),
        name: id.to_uppercase(),
        polygon: vec![
            [52.0 + lo, 21.0 + lo],
            [52.0 + lo, 21.0 + hi],
            [52.0 + hi, 21.0 + hi],
            [52.0 + hi, 21.0 + lo],
        ],
        is_active,
        delivery_price: 700,
        min_order_value: None,
        free_delivery_from: Some(12000),
        courier_rate: Some(500),
    }
}

fn soup(price: f64, quantity: i32) -> ComposedOrderItem {
    let d = dish(&format!("soup-{}", price), "Soup", price, vec![]);
    ComposedOrderItem::simple(DishSelection::plain(d), None, quantity)
}

#[test]
fn test_scenario_a_sized_dish_with_paid_addon() {
    let mut selection = DishSelection::plain(dish(
        "p1",
        "Margherita",
        20.0,
        vec![size("30cm", 36.0)],
    ));
    selection.addons.push(addon("cheese", 3.0, 2, 0));
    let item = ComposedOrderItem::simple(selection, Some(size("30cm", 36.0)), 1);

    let price = price_item(&item, HalfHalfSizePricing::SharedSize).unwrap();
    assert_eq!(price.unit_price, Decimal::new(42, 0));
    assert_eq!(price.line_total, Decimal::new(42, 0));
}

#[test]
fn test_scenario_b_half_half() {
    let mut left = DishSelection::plain(dish("p1", "Funghi", 20.0, vec![size("40cm", 40.0)]));
    left.addons.push(addon("ham", 4.0, 1, 0));
    let mut right = DishSelection::plain(dish("p2", "Diavola", 20.0, vec![size("40cm", 40.0)]));
    right.addons.push(addon("olives", 2.0, 1, 0));

    let item = ComposedOrderItem::half_half(left, right, Some(size("40cm", 40.0)), 1);
    let price = price_item(&item, HalfHalfSizePricing::SharedSize).unwrap();
    assert_eq!(price.unit_price, Decimal::new(43, 0));
}

#[test]
fn test_scenario_c_delivery_fee_and_threshold() {
    let mut draft = OrderDraft::new(OrderType::Delivery, PricingSettings::default());
    draft.set_zones(load_zones(vec![zone_record("centre", 0.0, true)]));
    draft.set_coordinate(Some([52.05, 21.05].into()));

    draft.add_item(soup(55.0, 1)).unwrap();
    let order = draft.to_priced_order().unwrap();
    assert_eq!(order.subtotal, 55.0);
    assert_eq!(order.delivery_fee, 7.0);
    assert_eq!(order.total, 62.0);

    let mut draft = OrderDraft::new(OrderType::Delivery, PricingSettings::default());
    draft.set_zones(load_zones(vec![zone_record("centre", 0.0, true)]));
    draft.set_coordinate(Some([52.05, 21.05].into()));

    draft.add_item(soup(130.0, 1)).unwrap();
    let order = draft.to_priced_order().unwrap();
    assert_eq!(order.delivery_fee, 0.0);
    assert_eq!(order.total, 130.0);
}

#[test]
fn test_scenario_d_outside_every_zone() {
    let mut draft = OrderDraft::new(OrderType::Delivery, PricingSettings::default());
    draft.set_zones(load_zones(vec![zone_record("centre", 0.0, true)]));
    draft.set_coordinate(Some([50.0, 19.0].into()));
    draft.add_item(soup(55.0, 1)).unwrap();

    let order = draft.to_priced_order().unwrap();
    assert_eq!(order.total, 55.0);
    assert!(order.zone_id.is_none());
}

#[test]
fn test_overlapping_zones_first_listed_wins() {
    let zones = load_zones(vec![
        zone_record("first", 0.0, true),
        zone_record("second", 0.05, true),
    ]);
    let mut draft = OrderDraft::new(OrderType::Delivery, PricingSettings::default());
    draft.set_zones(zones);
    draft.set_coordinate(Some([52.08, 21.08].into()));
    draft.add_item(soup(10.0, 1)).unwrap();

    assert_eq!(draft.totals().unwrap().zone_id.as_deref(), Some("first"));
}

#[test]
fn test_inactive_zone_is_ignored() {
    let mut draft = OrderDraft::new(OrderType::Delivery, PricingSettings::default());
    draft.set_zones(load_zones(vec![zone_record("centre", 0.0, false)]));
    draft.set_coordinate(Some([52.05, 21.05].into()));
    draft.add_item(soup(55.0, 1)).unwrap();

    let totals = draft.totals().unwrap();
    assert!(totals.zone_id.is_none());
    assert_eq!(totals.total, Decimal::new(55, 0));
}

#[test]
fn test_scaling_law() {
    let one = price_item(&soup(12.35, 1), HalfHalfSizePricing::SharedSize).unwrap();
    let seven = price_item(&soup(12.35, 7), HalfHalfSizePricing::SharedSize).unwrap();
    assert_eq!(seven.line_total, one.unit_price * Decimal::from(7));
}

#[test]
fn test_free_addons_never_change_price() {
    let base = DishSelection::plain(dish("p1", "Funghi", 20.0, vec![]));
    let mut with_free = base.clone();
    with_free.addons.push(addon("basil", 1.5, 0, 3));

    let plain = price_item(
        &ComposedOrderItem::simple(base, None, 2),
        HalfHalfSizePricing::SharedSize,
    )
    .unwrap();
    let free = price_item(
        &ComposedOrderItem::simple(with_free, None, 2),
        HalfHalfSizePricing::SharedSize,
    )
    .unwrap();
    assert_eq!(plain, free);
}

#[test]
fn test_addon_insertion_order_merges_lines() {
    let mut a = DishSelection::plain(dish("p1", "Funghi", 20.0, vec![]));
    a.addons = vec![addon("ham", 4.0, 1, 0), addon("olives", 2.0, 1, 0)];
    let mut b = DishSelection::plain(dish("p1", "Funghi", 20.0, vec![]));
    b.addons = vec![addon("olives", 2.0, 1, 0), addon("ham", 4.0, 1, 0)];

    let item_a = ComposedOrderItem::simple(a, None, 1);
    let item_b = ComposedOrderItem::simple(b, None, 1);
    assert_eq!(generate_instance_id(&item_a), generate_instance_id(&item_b));

    let mut draft = OrderDraft::new(OrderType::DineIn, PricingSettings::default());
    draft.add_item(item_a).unwrap();
    draft.add_item(item_b).unwrap();
    assert_eq!(draft.lines().len(), 1);
    assert_eq!(draft.lines()[0].item.quantity, 2);
    assert_eq!(draft.totals().unwrap().total, Decimal::new(52, 0));
}
