//! Composed order item types
//!
//! A composed item is either a single dish or two dishes served as halves of
//! one physical item. All selection collections are always materialised,
//! possibly empty, so pricing never has to null-guard them.

use crate::models::{Dish, Ingredient, Size};
use serde::{Deserialize, Serialize};

// ============================================================================
// Order Type
// ============================================================================

/// Fulfillment channel
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    /// 堂食
    #[default]
    DineIn,
    /// 外带
    Takeaway,
    /// 外卖配送
    Delivery,
}

impl OrderType {
    pub fn is_delivery(&self) -> bool {
        matches!(self, OrderType::Delivery)
    }
}

// ============================================================================
// Selections
// ============================================================================

/// Addon selected on a dish
///
/// The paid and free counters are tracked independently; only
/// `paid_quantity` contributes to the price.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AddonSelection {
    pub addon_id: String,
    pub name: String,
    /// Unit price of the addon (major currency units)
    pub unit_price: f64,
    #[serde(default)]
    pub paid_quantity: u32,
    #[serde(default)]
    pub free_quantity: u32,
}

/// Ingredient added on top of the default recipe
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IngredientSelection {
    pub ingredient_id: String,
    pub name: String,
    pub quantity: u32,
}

/// One dish with the customer's modifications
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DishSelection {
    pub dish: Dish,
    #[serde(default)]
    pub added_ingredients: Vec<IngredientSelection>,
    /// Default ingredients the customer opted out of
    #[serde(default)]
    pub removed_ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub addons: Vec<AddonSelection>,
}

impl DishSelection {
    /// Plain dish without modifications
    pub fn plain(dish: Dish) -> Self {
        Self {
            dish,
            added_ingredients: Vec::new(),
            removed_ingredients: Vec::new(),
            addons: Vec::new(),
        }
    }

    /// Addons with a non-zero paid counter
    pub fn paid_addons(&self) -> impl Iterator<Item = &AddonSelection> {
        self.addons.iter().filter(|a| a.paid_quantity > 0)
    }
}

/// Which half of a half-half item
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum HalfSide {
    Left,
    Right,
}

impl std::fmt::Display for HalfSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HalfSide::Left => write!(f, "left"),
            HalfSide::Right => write!(f, "right"),
        }
    }
}

/// Exactly one of the two compositions holds
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ItemComposition {
    Simple(DishSelection),
    /// Both halves share the item's `selected_size`
    HalfHalf {
        left: Option<DishSelection>,
        right: Option<DishSelection>,
    },
}

// ============================================================================
// Composed Order Item
// ============================================================================

/// The unit being priced
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComposedOrderItem {
    pub composition: ItemComposition,
    #[serde(default)]
    pub selected_size: Option<Size>,
    /// Number of copies of this exact configuration
    pub quantity: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl ComposedOrderItem {
    pub fn simple(selection: DishSelection, selected_size: Option<Size>, quantity: i32) -> Self {
        Self {
            composition: ItemComposition::Simple(selection),
            selected_size,
            quantity,
            note: None,
        }
    }

    pub fn half_half(
        left: DishSelection,
        right: DishSelection,
        selected_size: Option<Size>,
        quantity: i32,
    ) -> Self {
        Self {
            composition: ItemComposition::HalfHalf {
                left: Some(left),
                right: Some(right),
            },
            selected_size,
            quantity,
            note: None,
        }
    }

    /// Quantity clamped to the minimum of 1
    pub fn effective_quantity(&self) -> i32 {
        self.quantity.max(1)
    }

    /// Name shown on the order line and receipt
    pub fn display_name(&self) -> String {
        match &self.composition {
            ItemComposition::Simple(sel) => sel.dish.name.clone(),
            ItemComposition::HalfHalf { left, right } => {
                let name = |side: &Option<DishSelection>| {
                    side.as_ref()
                        .map(|s| s.dish.name.clone())
                        .unwrap_or_else(|| "?".to_string())
                };
                format!("{} / {}", name(left), name(right))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dish(id: &str, name: &str) -> Dish {
        Dish {
            id: id.to_string(),
            name: name.to_string(),
            category_id: "pizza".to_string(),
            base_price: 20.0,
            sizes: vec![],
            ingredients: vec![],
            addon_groups: vec![],
        }
    }

    #[test]
    fn test_order_type_serde() {
        assert_eq!(
            serde_json::to_string(&OrderType::DineIn).unwrap(),
            "\"DINE_IN\""
        );
        let t: OrderType = serde_json::from_str("\"DELIVERY\"").unwrap();
        assert!(t.is_delivery());
        assert!(!OrderType::Takeaway.is_delivery());
    }

    #[test]
    fn test_effective_quantity_clamps() {
        let mut item = ComposedOrderItem::simple(DishSelection::plain(dish("a", "A")), None, 0);
        assert_eq!(item.effective_quantity(), 1);
        item.quantity = -3;
        assert_eq!(item.effective_quantity(), 1);
        item.quantity = 4;
        assert_eq!(item.effective_quantity(), 4);
    }

    #[test]
    fn test_display_name() {
        let simple = ComposedOrderItem::simple(DishSelection::plain(dish("a", "Funghi")), None, 1);
        assert_eq!(simple.display_name(), "Funghi");

        let half = ComposedOrderItem::half_half(
            DishSelection::plain(dish("a", "Funghi")),
            DishSelection::plain(dish("b", "Diavola")),
            None,
            1,
        );
        assert_eq!(half.display_name(), "Funghi / Diavola");
        assert!(matches!(half.composition, ItemComposition::HalfHalf { .. }));
    }

    #[test]
    fn test_composition_tagged_serde() {
        let item = ComposedOrderItem::simple(DishSelection::plain(dish("a", "Funghi")), None, 2);
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["composition"]["kind"], "simple");

        let parsed: ComposedOrderItem = serde_json::from_str(
            r#"{"composition":{"kind":"half_half","left":null,"right":null},"quantity":1}"#,
        )
        .unwrap();
        assert!(matches!(
            parsed.composition,
            ItemComposition::HalfHalf {
                left: None,
                right: None
            }
        ));
        assert!(parsed.selected_size.is_none());
    }

    #[test]
    fn test_paid_addons_filters_free_only() {
        let mut sel = DishSelection::plain(dish("a", "A"));
        sel.addons = vec![
            AddonSelection {
                addon_id: "x".to_string(),
                name: "X".to_string(),
                unit_price: 2.0,
                paid_quantity: 1,
                free_quantity: 0,
            },
            AddonSelection {
                addon_id: "y".to_string(),
                name: "Y".to_string(),
                unit_price: 2.0,
                paid_quantity: 0,
                free_quantity: 3,
            },
        ];
        let ids: Vec<_> = sel.paid_addons().map(|a| a.addon_id.as_str()).collect();
        assert_eq!(ids, vec!["x"]);
    }
}
