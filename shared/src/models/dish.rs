//! Dish Model
//!
//! Menu records supplied by menu storage. The pricing core only reads them.

use serde::{Deserialize, Serialize};

/// Dish entity (a sellable base item)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Dish {
    pub id: String,
    pub name: String,
    /// Category reference (String ID)
    pub category_id: String,
    /// Price used when the dish has no sizes (major currency units)
    pub base_price: f64,
    /// Size variants; empty means `base_price` applies
    #[serde(default)]
    pub sizes: Vec<Size>,
    /// Ingredients included by default
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    /// Named clusters of optional extras
    #[serde(default)]
    pub addon_groups: Vec<AddonGroup>,
}

impl Dish {
    /// Whether a size must be selected before this dish can be priced
    pub fn requires_size(&self) -> bool {
        !self.sizes.is_empty()
    }

    /// Find a size by its display name
    pub fn size_named(&self, name: &str) -> Option<&Size> {
        self.sizes.iter().find(|s| s.name == name)
    }
}

/// Named size variant with its own absolute price (not a delta)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Size {
    pub id: String,
    pub name: String,
    pub price: f64,
}

/// Ingredient (no price effect; identity is by id)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ingredient {
    pub id: String,
    pub name: String,
}

/// Addon group (e.g. "Extra toppings")
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AddonGroup {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub items: Vec<AddonItem>,
}

/// Priced optional extra belonging to an [`AddonGroup`]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AddonItem {
    pub id: String,
    pub name: String,
    /// Non-negative unit price
    pub price: f64,
}
