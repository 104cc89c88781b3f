//! Standard resources and per-player stock.
//!
//! Standard resources are the six player-held kinds. Card resources
//! (animals, microbes, ...) live on individual cards and are defined in
//! `cards::definition`.

use serde::{Deserialize, Serialize};

/// A standard player resource.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Resource {
    MegaCredits,
    Steel,
    Titanium,
    Plants,
    Energy,
    Heat,
}

impl Resource {
    /// All resources in stock order.
    pub const ALL: [Resource; 6] = [
        Resource::MegaCredits,
        Resource::Steel,
        Resource::Titanium,
        Resource::Plants,
        Resource::Energy,
        Resource::Heat,
    ];

    /// Index into a stock array.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase display name used in log messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Resource::MegaCredits => "megacredits",
            Resource::Steel => "steel",
            Resource::Titanium => "titanium",
            Resource::Plants => "plants",
            Resource::Energy => "energy",
            Resource::Heat => "heat",
        }
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resource balances for one player.
///
/// Backed by a fixed array indexed by [`Resource::index`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceStock {
    amounts: [i64; 6],
}

impl ResourceStock {
    /// Create an empty stock.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the balance of a resource.
    #[must_use]
    pub fn get(&self, resource: Resource) -> i64 {
        self.amounts[resource.index()]
    }

    /// Set the balance of a resource.
    pub fn set(&mut self, resource: Resource, amount: i64) {
        self.amounts[resource.index()] = amount;
    }

    /// Add `delta` to a resource, clamping at zero.
    pub fn add(&mut self, resource: Resource, delta: i64) {
        let slot = &mut self.amounts[resource.index()];
        *slot = (*slot + delta).max(0);
    }

    /// Iterate over `(resource, amount)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Resource, i64)> + '_ {
        Resource::ALL.iter().map(move |&r| (r, self.get(r)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_add_and_clamp() {
        let mut stock = ResourceStock::new();
        stock.add(Resource::Steel, 2);
        assert_eq!(stock.get(Resource::Steel), 2);

        stock.add(Resource::Steel, -5);
        assert_eq!(stock.get(Resource::Steel), 0);
        assert_eq!(stock.get(Resource::Heat), 0);
    }

    #[test]
    fn test_resource_display() {
        assert_eq!(Resource::Plants.to_string(), "plants");
        assert_eq!(format!("{}", Resource::MegaCredits), "megacredits");
    }

    #[test]
    fn test_stock_iter_order() {
        let mut stock = ResourceStock::new();
        stock.set(Resource::Heat, 4);
        let pairs: Vec<_> = stock.iter().collect();
        assert_eq!(pairs.len(), 6);
        assert_eq!(pairs[0], (Resource::MegaCredits, 0));
        assert_eq!(pairs[5], (Resource::Heat, 4));
    }
}
