//! Cards in play.
//!
//! `PlayedCard` is the runtime record of a card on a player's tableau:
//! its identity, the card resource it accumulates (if any) and how many
//! of that resource it currently holds.

use serde::{Deserialize, Serialize};

use super::definition::{CardName, CardResource};

/// A card in a player's tableau.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayedCard {
    pub name: CardName,

    /// Card resource this card accumulates. `None` for cards without a
    /// resource counter.
    pub resource_type: Option<CardResource>,

    /// Resources currently on the card.
    pub resource_count: u32,
}

impl PlayedCard {
    /// A card with no resource counter.
    #[must_use]
    pub const fn new(name: CardName) -> Self {
        Self {
            name,
            resource_type: None,
            resource_count: 0,
        }
    }

    /// A card that accumulates `resource`.
    #[must_use]
    pub const fn accumulating(name: CardName, resource: CardResource) -> Self {
        Self {
            name,
            resource_type: Some(resource),
            resource_count: 0,
        }
    }

    /// Set the starting resource count (builder pattern).
    #[must_use]
    pub const fn with_resources(mut self, count: u32) -> Self {
        self.resource_count = count;
        self
    }

    /// Add resources to the counter.
    pub fn add_resources(&mut self, count: u32) {
        self.resource_count = self.resource_count.saturating_add(count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_has_no_counter() {
        let card = PlayedCard::new(CardName::ArcticAlgae);
        assert_eq!(card.resource_type, None);
        assert_eq!(card.resource_count, 0);
    }

    #[test]
    fn test_accumulating() {
        let mut card = PlayedCard::accumulating(CardName::Decomposers, CardResource::Microbe)
            .with_resources(2);
        card.add_resources(1);
        assert_eq!(card.resource_type, Some(CardResource::Microbe));
        assert_eq!(card.resource_count, 3);
    }
}
