//! Policy hook engine.
//!
//! Answers "is policy P currently active for player X". The ruling party
//! and its active policy are decided elsewhere (elections, delegates); this
//! module only stores the outcome and evaluates queries against it.
//!
//! ## Example
//!
//! ```
//! use placement_rules::core::PlayerId;
//! use placement_rules::policy::{PartyName, PolicyHooks, PolicyId, PolicyState};
//!
//! let mut policies = PolicyState::enabled();
//! policies.set_ruling(PartyName::MarsFirst, PolicyId::MARS_FIRST_01);
//!
//! assert!(policies.is_policy_active_for(PlayerId::new(0), PolicyId::MARS_FIRST_01));
//! ```

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// A political party.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartyName {
    MarsFirst,
    Scientists,
    Unity,
    Greens,
    Reds,
    Kelvinists,
}

impl PartyName {
    /// Short code used in policy ids.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            PartyName::MarsFirst => "mfp",
            PartyName::Scientists => "sp",
            PartyName::Unity => "up",
            PartyName::Greens => "gp",
            PartyName::Reds => "rp",
            PartyName::Kelvinists => "kp",
        }
    }
}

/// A party policy, e.g. `mfp01`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PolicyId {
    pub party: PartyName,
    pub number: u8,
}

impl PolicyId {
    /// Mars First policy 1: placing a tile grants a steel.
    pub const MARS_FIRST_01: PolicyId = PolicyId::new(PartyName::MarsFirst, 1);

    /// Create a policy id.
    #[must_use]
    pub const fn new(party: PartyName, number: u8) -> Self {
        Self { party, number }
    }
}

impl std::fmt::Display for PolicyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{:02}", self.party.code(), self.number)
    }
}

/// Read-only policy query consumed by placement reactions.
pub trait PolicyHooks {
    /// Whether `policy` currently applies to `player`.
    fn is_policy_active_for(&self, player: PlayerId, policy: PolicyId) -> bool;
}

/// Stored policy outcome for one game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyState {
    /// Whether the politics module is in play at all.
    pub enabled: bool,

    /// Current ruling party.
    pub ruling_party: Option<PartyName>,

    /// The ruling party's active policy.
    pub active_policy: Option<PolicyId>,

    /// Players the active policy does not apply to.
    pub exempt: FxHashSet<PlayerId>,
}

impl PolicyState {
    /// Politics disabled: no policy is ever active.
    #[must_use]
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Politics enabled, no ruling party yet.
    #[must_use]
    pub fn enabled() -> Self {
        Self {
            enabled: true,
            ..Self::default()
        }
    }

    /// Install a ruling party and its active policy.
    ///
    /// A policy that belongs to another party is ignored.
    pub fn set_ruling(&mut self, party: PartyName, policy: PolicyId) {
        self.ruling_party = Some(party);
        self.active_policy = (policy.party == party).then_some(policy);
    }

    /// Remove the ruling party.
    pub fn clear_ruling(&mut self) {
        self.ruling_party = None;
        self.active_policy = None;
    }

    /// Exempt a player from the active policy.
    pub fn exempt(&mut self, player: PlayerId) {
        self.exempt.insert(player);
    }
}

impl PolicyHooks for PolicyState {
    fn is_policy_active_for(&self, player: PlayerId, policy: PolicyId) -> bool {
        self.enabled
            && self.ruling_party == Some(policy.party)
            && self.active_policy == Some(policy)
            && !self.exempt.contains(&player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const P0: PlayerId = PlayerId::new(0);
    const P1: PlayerId = PlayerId::new(1);

    #[test]
    fn test_policy_display() {
        assert_eq!(PolicyId::MARS_FIRST_01.to_string(), "mfp01");
        assert_eq!(PolicyId::new(PartyName::Reds, 3).to_string(), "rp03");
    }

    #[test]
    fn test_disabled_never_active() {
        let mut policies = PolicyState::disabled();
        policies.set_ruling(PartyName::MarsFirst, PolicyId::MARS_FIRST_01);
        assert!(!policies.is_policy_active_for(P0, PolicyId::MARS_FIRST_01));
    }

    #[test]
    fn test_ruling_policy_active() {
        let mut policies = PolicyState::enabled();
        assert!(!policies.is_policy_active_for(P0, PolicyId::MARS_FIRST_01));

        policies.set_ruling(PartyName::MarsFirst, PolicyId::MARS_FIRST_01);
        assert!(policies.is_policy_active_for(P0, PolicyId::MARS_FIRST_01));
        assert!(!policies.is_policy_active_for(P0, PolicyId::new(PartyName::MarsFirst, 2)));

        policies.clear_ruling();
        assert!(!policies.is_policy_active_for(P0, PolicyId::MARS_FIRST_01));
    }

    #[test]
    fn test_policy_of_other_party_ignored() {
        let mut policies = PolicyState::enabled();
        policies.set_ruling(PartyName::Greens, PolicyId::MARS_FIRST_01);
        assert_eq!(policies.active_policy, None);
        assert!(!policies.is_policy_active_for(P0, PolicyId::MARS_FIRST_01));
    }

    #[test]
    fn test_player_scoped_exemption() {
        let mut policies = PolicyState::enabled();
        policies.set_ruling(PartyName::MarsFirst, PolicyId::MARS_FIRST_01);
        policies.exempt(P1);

        assert!(policies.is_policy_active_for(P0, PolicyId::MARS_FIRST_01));
        assert!(!policies.is_policy_active_for(P1, PolicyId::MARS_FIRST_01));
    }
}
