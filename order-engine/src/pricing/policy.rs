//! Half-half policy
//!
//! Which dishes may be combined as halves, and how a half's base price is
//! derived from the selected size. The policy is an explicit value injected
//! at startup; updates are published through [`PolicyStore`] and observed by
//! subscribers.

use serde::{Deserialize, Serialize};
use shared::models::Dish;
use std::collections::{BTreeMap, BTreeSet};
use std::str::FromStr;
use tokio::sync::watch;
use tracing::info;

/// How a half's base price is derived when a size is selected
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum HalfHalfSizePricing {
    /// Halve the shared selected size's price for both halves
    #[default]
    SharedSize,
    /// Halve each dish's own price at the size of the same name
    PerDishSize,
}

impl FromStr for HalfHalfSizePricing {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "shared_size" => Ok(Self::SharedSize),
            "per_dish_size" => Ok(Self::PerDishSize),
            other => Err(format!("unknown half-half size pricing: {}", other)),
        }
    }
}

/// Half-half eligibility and pricing configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HalfHalfPolicy {
    /// Category ID -> dish IDs that may be combined within that category.
    /// An empty map places no restriction.
    #[serde(default)]
    pub combinable: BTreeMap<String, BTreeSet<String>>,
    #[serde(default)]
    pub size_pricing: HalfHalfSizePricing,
}

impl HalfHalfPolicy {
    /// Allow the given dishes of a category to be combined
    pub fn allow<I, S>(mut self, category_id: impl Into<String>, dish_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.combinable
            .entry(category_id.into())
            .or_default()
            .extend(dish_ids.into_iter().map(Into::into));
        self
    }

    pub fn with_size_pricing(mut self, size_pricing: HalfHalfSizePricing) -> Self {
        self.size_pricing = size_pricing;
        self
    }

    /// Both dishes share a category and are listed for it
    pub fn is_combinable(&self, left: &Dish, right: &Dish) -> bool {
        if self.combinable.is_empty() {
            return true;
        }
        if left.category_id != right.category_id {
            return false;
        }
        self.combinable
            .get(&left.category_id)
            .is_some_and(|ids| ids.contains(&left.id) && ids.contains(&right.id))
    }
}

/// Holds the current half-half policy and notifies subscribers of updates
#[derive(Debug)]
pub struct PolicyStore {
    tx: watch::Sender<HalfHalfPolicy>,
}

impl PolicyStore {
    pub fn new(initial: HalfHalfPolicy) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// Snapshot of the current policy
    pub fn current(&self) -> HalfHalfPolicy {
        self.tx.borrow().clone()
    }

    /// Replace the policy and notify subscribers
    pub fn update(&self, policy: HalfHalfPolicy) {
        info!(
            categories = policy.combinable.len(),
            size_pricing = ?policy.size_pricing,
            "Half-half policy updated"
        );
        self.tx.send_replace(policy);
    }

    pub fn subscribe(&self) -> watch::Receiver<HalfHalfPolicy> {
        self.tx.subscribe()
    }
}

impl Default for PolicyStore {
    fn default() -> Self {
        Self::new(HalfHalfPolicy::default())
    }
}
