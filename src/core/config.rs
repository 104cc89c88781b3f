//! Session configuration.
//!
//! Hosts configure a session at startup:
//! - how many players and which RNG seed
//! - which board identity the placement-bonus protocol applies to
//! - which phase suppresses placement bonuses
//! - how card selections are resolved when several cards qualify
//!
//! `SessionConfig` derives serde so it can be loaded from any serde format.

use serde::{Deserialize, Serialize};

use crate::board::BoardType;

/// Game phase. Progression is owned by the turn engine; this core only
/// reads the current value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Phase {
    Research,
    Drafting,
    Preludes,
    Ceos,
    #[default]
    Action,
    Production,
    /// World-government terraforming at the end of a generation.
    Solar,
    Intergeneration,
    End,
}

/// How a queued card-resource grant picks its target when more than one
/// card in play accumulates the resource.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CardSelection {
    /// Suspend the unit and ask the owning player.
    #[default]
    Ask,
    /// Take the earliest-played candidate.
    First,
    /// Draw a candidate from the session RNG.
    Random,
}

/// Complete session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Number of players (1-255).
    pub player_count: usize,

    /// Seed for the session RNG.
    #[serde(default)]
    pub seed: u64,

    /// The only board whose placements fire survey reactions.
    #[serde(default = "default_designated_board")]
    pub designated_board: BoardType,

    /// Phase during which placements never dispatch to reacting cards.
    #[serde(default = "default_excluded_phase")]
    pub excluded_phase: Phase,

    /// Target selection for card-resource grants.
    #[serde(default)]
    pub card_selection: CardSelection,
}

fn default_designated_board() -> BoardType {
    BoardType::Mars
}

fn default_excluded_phase() -> Phase {
    Phase::Solar
}

impl SessionConfig {
    /// Create a configuration with defaults for `player_count` players.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        Self {
            player_count,
            seed: 0,
            designated_board: default_designated_board(),
            excluded_phase: default_excluded_phase(),
            card_selection: CardSelection::default(),
        }
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the designated board.
    #[must_use]
    pub fn with_designated_board(mut self, board: BoardType) -> Self {
        self.designated_board = board;
        self
    }

    /// Set the excluded phase.
    #[must_use]
    pub fn with_excluded_phase(mut self, phase: Phase) -> Self {
        self.excluded_phase = phase;
        self
    }

    /// Set the card selection policy.
    #[must_use]
    pub fn with_card_selection(mut self, selection: CardSelection) -> Self {
        self.card_selection = selection;
        self
    }
}
