//! Reaction registry.
//!
//! Reacting cards are registered when they enter play, each with the player
//! who owns it. Every placement is broadcast to all enabled reactions in
//! dispatch order.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::SurveyCard;
use crate::core::PlayerId;

/// Unique identifier for a registered reaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ReactionId(pub u32);

impl ReactionId {
    /// Create a new reaction ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ReactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Reaction({})", self.0)
    }
}

/// A reacting card in play.
pub struct Reaction {
    /// Unique identifier, in registration order.
    pub id: ReactionId,

    /// The player whose placements this card reacts to.
    pub owner: PlayerId,

    /// The card's strategy.
    pub card: Box<dyn SurveyCard>,

    /// Is this reaction currently active?
    pub enabled: bool,

    /// Priority for ordering reactions (higher fires first).
    /// When equal, reactions fire in registration order.
    pub priority: i32,
}

impl Reaction {
    /// Create an enabled reaction with default priority.
    pub fn new(id: ReactionId, owner: PlayerId, card: Box<dyn SurveyCard>) -> Self {
        Self {
            id,
            owner,
            card,
            enabled: true,
            priority: 0,
        }
    }

    /// Set priority (builder pattern).
    #[must_use]
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

impl std::fmt::Debug for Reaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Reaction")
            .field("id", &self.id)
            .field("owner", &self.owner)
            .field("card", &self.card.name())
            .field("enabled", &self.enabled)
            .field("priority", &self.priority)
            .finish()
    }
}

/// Registry of reacting cards.
#[derive(Debug, Default)]
pub struct ReactionRegistry {
    reactions: FxHashMap<ReactionId, Reaction>,
    next_id: u32,
}

impl ReactionRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `card` for `owner` with default priority.
    pub fn register(&mut self, owner: PlayerId, card: Box<dyn SurveyCard>) -> ReactionId {
        self.register_with_priority(owner, card, 0)
    }

    /// Register `card` for `owner` with an explicit priority.
    pub fn register_with_priority(&mut self, owner: PlayerId, card: Box<dyn SurveyCard>, priority: i32) -> ReactionId {
        let id = ReactionId::new(self.next_id);
        self.next_id += 1;

        tracing::debug!(
            target: "placement_rules::triggers",
            reaction = id.0,
            card = %card.name(),
            owner = owner.0,
            "reaction registered"
        );
        self.reactions
            .insert(id, Reaction::new(id, owner, card).with_priority(priority));
        id
    }

    /// Unregister a reaction.
    pub fn unregister(&mut self, id: ReactionId) -> Option<Reaction> {
        self.reactions.remove(&id)
    }

    /// Get a reaction by ID.
    #[must_use]
    pub fn get(&self, id: ReactionId) -> Option<&Reaction> {
        self.reactions.get(&id)
    }

    /// Enable or disable a reaction. Returns false for an unknown id.
    pub fn set_enabled(&mut self, id: ReactionId, enabled: bool) -> bool {
        match self.reactions.get_mut(&id) {
            Some(reaction) => {
                reaction.enabled = enabled;
                true
            }
            None => false,
        }
    }

    /// Enabled reactions in dispatch order: priority (descending), then
    /// registration order.
    pub fn in_dispatch_order(&self) -> Vec<&Reaction> {
        let mut ordered: Vec<&Reaction> = self.reactions.values().filter(|r| r.enabled).collect();
        ordered.sort_by(|a, b| b.priority.cmp(&a.priority).then_with(|| a.id.cmp(&b.id)));
        ordered
    }

    /// Get total reaction count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.reactions.len()
    }

    /// Check if registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reactions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardName, EcologicalSurvey, GeologicalSurvey};

    #[test]
    fn test_reaction_id() {
        let id = ReactionId::new(5);
        assert_eq!(id.raw(), 5);
        assert_eq!(format!("{}", id), "Reaction(5)");
    }

    #[test]
    fn test_registry_register() {
        let mut registry = ReactionRegistry::new();
        let id = registry.register(PlayerId::new(0), Box::new(GeologicalSurvey));

        let reaction = registry.get(id).unwrap();
        assert_eq!(reaction.card.name(), CardName::GeologicalSurvey);
        assert!(reaction.enabled);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_registry_unregister() {
        let mut registry = ReactionRegistry::new();
        let id = registry.register(PlayerId::new(0), Box::new(GeologicalSurvey));

        assert!(registry.unregister(id).is_some());
        assert!(registry.is_empty());
        assert!(registry.get(id).is_none());
    }

    #[test]
    fn test_dispatch_order() {
        let mut registry = ReactionRegistry::new();
        let first = registry.register(PlayerId::new(0), Box::new(GeologicalSurvey));
        let second = registry.register(PlayerId::new(1), Box::new(EcologicalSurvey));
        let urgent = registry.register_with_priority(PlayerId::new(1), Box::new(GeologicalSurvey), 5);

        let order: Vec<ReactionId> = registry.in_dispatch_order().iter().map(|r| r.id).collect();
        assert_eq!(order, vec![urgent, first, second]);
    }

    #[test]
    fn test_disabled_reactions_are_skipped() {
        let mut registry = ReactionRegistry::new();
        let id = registry.register(PlayerId::new(0), Box::new(GeologicalSurvey));

        assert!(registry.set_enabled(id, false));
        assert!(registry.in_dispatch_order().is_empty());
        assert!(!registry.set_enabled(ReactionId::new(9), true));
        assert_eq!(registry.len(), 1);
    }
}
