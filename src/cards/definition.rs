//! Card identities and card-resource kinds.
//!
//! Only the cards this core needs to name are listed: the reacting survey
//! cards, cards whose passive effect a reaction consults, and cards that
//! accumulate card resources. Costs, tags and requirements belong to the
//! card catalog, not here.

use serde::{Deserialize, Serialize};

/// Card identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CardName {
    // Placement reactions
    EcologicalSurvey,
    GeologicalSurvey,

    // Passive effects consulted by reactions
    ArcticAlgae,

    // Animal accumulators
    Birds,
    Fish,
    Livestock,
    Pets,
    SmallAnimals,

    // Microbe accumulators
    Ants,
    Decomposers,
    Tardigrades,
    NitriteReducingBacteria,

    // Other accumulators
    PhysicsComplex,
    SearchForLife,
    Dirigibles,
}

impl CardName {
    /// Printed card title.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            CardName::EcologicalSurvey => "Ecological Survey",
            CardName::GeologicalSurvey => "Geological Survey",
            CardName::ArcticAlgae => "Arctic Algae",
            CardName::Birds => "Birds",
            CardName::Fish => "Fish",
            CardName::Livestock => "Livestock",
            CardName::Pets => "Pets",
            CardName::SmallAnimals => "Small Animals",
            CardName::Ants => "Ants",
            CardName::Decomposers => "Decomposers",
            CardName::Tardigrades => "Tardigrades",
            CardName::NitriteReducingBacteria => "Nitrite Reducing Bacteria",
            CardName::PhysicsComplex => "Physics Complex",
            CardName::SearchForLife => "Search For Life",
            CardName::Dirigibles => "Dirigibles",
        }
    }
}

impl std::fmt::Display for CardName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resource kinds that accumulate on cards rather than in a player's stock.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardResource {
    Animal,
    Microbe,
    Science,
    Data,
    Floater,
    Asteroid,
    Fighter,
}

impl CardResource {
    /// Display name used in log messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            CardResource::Animal => "Animal",
            CardResource::Microbe => "Microbe",
            CardResource::Science => "Science",
            CardResource::Data => "Data",
            CardResource::Floater => "Floater",
            CardResource::Asteroid => "Asteroid",
            CardResource::Fighter => "Fighter",
        }
    }
}

impl std::fmt::Display for CardResource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
