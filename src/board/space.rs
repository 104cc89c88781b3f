//! Spaces, tiles and bonus annotations.
//!
//! A space carries two kinds of bonus:
//! - its own static `bonus` list, collected by whoever places on it and
//!   suppressed once a tile covers another tile there;
//! - an optional `adjacency` bonus, offered to every space *next to* it.
//!
//! The two are independent: covering a space's tile never touches the
//! adjacency bonus its neighbours see.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::PlayerId;

/// Space identifier, unique within one board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SpaceId(pub String);

impl SpaceId {
    /// Create a space ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw id.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SpaceId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for SpaceId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for SpaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Spatial type of a space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpaceType {
    Land,
    Ocean,
    /// Counts as both land and ocean.
    Cove,
    /// Off-map colony or orbital space.
    Colony,
    Restricted,
}

/// A bonus annotation on a space or offered through adjacency.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpaceBonus {
    Titanium,
    Steel,
    Plant,
    DrawCard,
    Heat,
    Ocean,
    MegaCredits,
    Animal,
    Microbe,
    Power,
    Data,
    Science,
    EnergyProduction,
    Temperature,
    Restricted,
    AsteroidResource,
}

/// Kind of tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileType {
    Greenery,
    Ocean,
    City,
    Capital,
    CommercialDistrict,
    EcologicalZone,
    IndustrialCenter,
    LavaFlows,
    MiningArea,
    MiningRights,
    NaturalPreserve,
    NuclearZone,
    RestrictedArea,
    DustStormMild,
    DustStormSevere,
    ErosionMild,
    ErosionSevere,
    OceanCity,
    OceanFarm,
    OceanSanctuary,
}

impl TileType {
    /// Tiles that count as an ocean for placement rules.
    #[must_use]
    pub const fn is_ocean(self) -> bool {
        matches!(
            self,
            TileType::Ocean | TileType::OceanCity | TileType::OceanFarm | TileType::OceanSanctuary
        )
    }
}

/// A tile on a space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    pub tile_type: TileType,

    /// Set when this tile was placed over another tile (upgrade tiles such
    /// as an ocean city on an ocean). A defined value suppresses the
    /// space's static bonus.
    pub covers: Option<TileType>,
}

impl Tile {
    /// A tile placed on an empty space.
    #[must_use]
    pub const fn new(tile_type: TileType) -> Self {
        Self {
            tile_type,
            covers: None,
        }
    }

    /// A tile placed over an existing tile.
    #[must_use]
    pub const fn covering(tile_type: TileType, covered: TileType) -> Self {
        Self {
            tile_type,
            covers: Some(covered),
        }
    }
}

/// Bonus a space offers to every adjacent space.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjacencyBonus {
    pub bonus: SmallVec<[SpaceBonus; 2]>,
}

impl AdjacencyBonus {
    /// Create an adjacency bonus from a list of bonuses.
    pub fn new(bonus: impl IntoIterator<Item = SpaceBonus>) -> Self {
        Self {
            bonus: bonus.into_iter().collect(),
        }
    }

    /// Whether this adjacency offers `bonus`.
    #[must_use]
    pub fn offers(&self, bonus: SpaceBonus) -> bool {
        self.bonus.contains(&bonus)
    }
}

/// A space on a board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Space {
    pub id: SpaceId,
    pub space_type: SpaceType,

    /// Static bonuses printed on the space.
    pub bonus: SmallVec<[SpaceBonus; 2]>,

    /// Occupying tile, if any.
    pub tile: Option<Tile>,

    /// Bonus offered to adjacent spaces.
    pub adjacency: Option<AdjacencyBonus>,

    /// Owner of the occupying tile.
    pub player: Option<PlayerId>,
}

impl Space {
    /// Create an empty space with no bonuses.
    pub fn new(id: impl Into<SpaceId>, space_type: SpaceType) -> Self {
        Self {
            id: id.into(),
            space_type,
            bonus: SmallVec::new(),
            tile: None,
            adjacency: None,
            player: None,
        }
    }

    /// Add a static bonus (builder pattern).
    #[must_use]
    pub fn with_bonus(mut self, bonus: SpaceBonus) -> Self {
        self.bonus.push(bonus);
        self
    }

    /// Set the adjacency bonus (builder pattern).
    #[must_use]
    pub fn with_adjacency(mut self, adjacency: AdjacencyBonus) -> Self {
        self.adjacency = Some(adjacency);
        self
    }

    /// Set a pre-existing tile (builder pattern).
    #[must_use]
    pub fn with_tile(mut self, tile: Tile) -> Self {
        self.tile = Some(tile);
        self
    }

    /// Whether a tile on this space covers an older tile.
    #[must_use]
    pub fn is_covered(&self) -> bool {
        self.tile.is_some_and(|t| t.covers.is_some())
    }

    /// Whether the static `bonus` would be granted by placing here right now.
    ///
    /// True iff no covering tile sits on the space and the bonus is printed
    /// on it.
    #[must_use]
    pub fn grants_bonus_now(&self, bonus: SpaceBonus) -> bool {
        !self.is_covered() && self.bonus.contains(&bonus)
    }

    /// Whether this space offers `bonus` to its neighbours.
    #[must_use]
    pub fn offers_adjacency_bonus(&self, bonus: SpaceBonus) -> bool {
        self.adjacency.as_ref().is_some_and(|a| a.offers(bonus))
    }

    /// Whether ocean tiles may sit here. Coves count as ocean.
    #[must_use]
    pub const fn is_ocean_space(&self) -> bool {
        matches!(self.space_type, SpaceType::Ocean | SpaceType::Cove)
    }

    /// An ocean-type space holding an ocean tile that covers nothing.
    #[must_use]
    pub fn is_uncovered_ocean(&self) -> bool {
        self.is_ocean_space()
            && self
                .tile
                .is_some_and(|t| t.tile_type.is_ocean() && t.covers.is_none())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grants_bonus_now_empty_space() {
        let space = Space::new("03", SpaceType::Land).with_bonus(SpaceBonus::Steel);
        assert!(space.grants_bonus_now(SpaceBonus::Steel));
        assert!(!space.grants_bonus_now(SpaceBonus::Titanium));
    }

    #[test]
    fn test_plain_tile_keeps_bonus_live() {
        let space = Space::new("03", SpaceType::Land)
            .with_bonus(SpaceBonus::Steel)
            .with_tile(Tile::new(TileType::Greenery));
        assert!(space.grants_bonus_now(SpaceBonus::Steel));
    }

    #[test]
    fn test_covering_tile_suppresses_bonus() {
        let space = Space::new("10", SpaceType::Ocean)
            .with_bonus(SpaceBonus::Plant)
            .with_tile(Tile::covering(TileType::OceanCity, TileType::Ocean));
        assert!(space.is_covered());
        assert!(!space.grants_bonus_now(SpaceBonus::Plant));
    }

    #[test]
    fn test_adjacency_bonus_independent_of_cover() {
        let space = Space::new("10", SpaceType::Land)
            .with_tile(Tile::covering(TileType::City, TileType::MiningArea))
            .with_adjacency(AdjacencyBonus::new([SpaceBonus::Steel]));
        assert!(space.offers_adjacency_bonus(SpaceBonus::Steel));
        assert!(!space.offers_adjacency_bonus(SpaceBonus::Heat));
    }

    #[test]
    fn test_uncovered_ocean() {
        let empty = Space::new("20", SpaceType::Ocean);
        assert!(!empty.is_uncovered_ocean());

        let ocean = Space::new("20", SpaceType::Ocean).with_tile(Tile::new(TileType::Ocean));
        assert!(ocean.is_uncovered_ocean());

        let upgraded = Space::new("20", SpaceType::Ocean)
            .with_tile(Tile::covering(TileType::OceanFarm, TileType::Ocean));
        assert!(!upgraded.is_uncovered_ocean());

        let cove = Space::new("22", SpaceType::Cove).with_tile(Tile::new(TileType::Ocean));
        assert!(cove.is_ocean_space());
        assert!(cove.is_uncovered_ocean());

        let upgraded_cove = Space::new("22", SpaceType::Cove)
            .with_tile(Tile::covering(TileType::OceanCity, TileType::Ocean));
        assert!(!upgraded_cove.is_uncovered_ocean());

        let land = Space::new("21", SpaceType::Land).with_tile(Tile::new(TileType::Ocean));
        assert!(!land.is_ocean_space());
        assert!(!land.is_uncovered_ocean());
    }
}
