//! Line-item merge key
//!
//! A newly configured item merges into an existing order line iff their keys
//! are equal: composition kind, dish name(s), size name, the sorted paid-addon
//! ids with each addon's paid quantity, the sorted added-ingredient ids with
//! each ingredient's quantity, and the sorted removed-ingredient ids. Olives x1
//! and olives x2 are therefore separate lines, since the merged line would
//! otherwise carry only one of the two prices. Free-addon counters are not part
//! of the key. "No size" and "no modifications" are the empty string / empty
//! lists, so they compare as defined values.
//!
//! The instance_id is a content-addressed hash of the key, so items with the
//! same instance_id can be merged (quantities added together).

use sha2::{Digest, Sha256};
use shared::order::{ComposedOrderItem, DishSelection, ItemComposition};

/// Comparable identity of one dish selection
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SelectionKey {
    pub dish_name: String,
    /// (addon id, paid quantity), sorted by id
    pub paid_addons: Vec<(String, u32)>,
    /// (ingredient id, quantity), sorted by id
    pub added_ingredients: Vec<(String, u32)>,
    /// Sorted ingredient ids
    pub removed_ingredients: Vec<String>,
}

impl SelectionKey {
    fn from_selection(selection: &DishSelection) -> Self {
        let mut paid_addons: Vec<(String, u32)> = selection
            .paid_addons()
            .map(|a| (a.addon_id.clone(), a.paid_quantity))
            .collect();
        paid_addons.sort();

        let mut added_ingredients: Vec<(String, u32)> = selection
            .added_ingredients
            .iter()
            .map(|i| (i.ingredient_id.clone(), i.quantity))
            .collect();
        added_ingredients.sort();

        let mut removed_ingredients: Vec<String> = selection
            .removed_ingredients
            .iter()
            .map(|i| i.id.clone())
            .collect();
        removed_ingredients.sort();
        removed_ingredients.dedup();

        Self {
            dish_name: selection.dish.name.clone(),
            paid_addons,
            added_ingredients,
            removed_ingredients,
        }
    }
}

/// Comparable identity of a composed item (quantity excluded)
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct MergeKey {
    pub half_half: bool,
    /// Selected size name, empty when no size
    pub size_name: String,
    /// One entry for simple items, left then right for half-half
    pub sides: Vec<SelectionKey>,
}

impl MergeKey {
    pub fn from_item(item: &ComposedOrderItem) -> Self {
        let side_key = |side: &Option<DishSelection>| {
            side.as_ref()
                .map(SelectionKey::from_selection)
                .unwrap_or_default()
        };

        let (half_half, sides) = match &item.composition {
            ItemComposition::Simple(selection) => {
                (false, vec![SelectionKey::from_selection(selection)])
            }
            ItemComposition::HalfHalf { left, right } => {
                (true, vec![side_key(left), side_key(right)])
            }
        };

        Self {
            half_half,
            size_name: item
                .selected_size
                .as_ref()
                .map(|s| s.name.clone())
                .unwrap_or_default(),
            sides,
        }
    }

    /// Content-addressed instance id (first 16 bytes of SHA-256, hex)
    pub fn instance_id(&self) -> String {
        let mut hasher = Sha256::new();

        hasher.update([u8::from(self.half_half)]);
        hash_str(&mut hasher, &self.size_name);

        for side in &self.sides {
            hash_str(&mut hasher, &side.dish_name);

            hasher.update((side.paid_addons.len() as u64).to_le_bytes());
            for (id, qty) in &side.paid_addons {
                hash_str(&mut hasher, id);
                hasher.update(qty.to_le_bytes());
            }

            hasher.update((side.added_ingredients.len() as u64).to_le_bytes());
            for (id, qty) in &side.added_ingredients {
                hash_str(&mut hasher, id);
                hasher.update(qty.to_le_bytes());
            }

            hasher.update((side.removed_ingredients.len() as u64).to_le_bytes());
            for id in &side.removed_ingredients {
                hash_str(&mut hasher, id);
            }
        }

        let result = hasher.finalize();
        hex::encode(&result[..16])
    }
}

/// Length-prefixed so adjacent fields can't run together
fn hash_str(hasher: &mut Sha256, value: &str) {
    hasher.update((value.len() as u64).to_le_bytes());
    hasher.update(value.as_bytes());
}

/// Build the merge key of a composed item
pub fn merge_key(item: &ComposedOrderItem) -> MergeKey {
    MergeKey::from_item(item)
}

/// Generate the instance_id for a composed item
pub fn generate_instance_id(item: &ComposedOrderItem) -> String {
    merge_key(item).instance_id()
}
