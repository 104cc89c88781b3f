//! Cards: identities, tableau records, and placement-reacting surveys.
//!
//! ## Key Types
//!
//! - `CardName`: Card identity
//! - `CardResource`: Resources that accumulate on cards
//! - `PlayedCard`: A card on a player's tableau
//! - `SurveyCard`: Placement reaction with the shared grant tests
//! - `SideCondition`: Extra per-resource eligibility
//!
//! ## Survey Cards
//!
//! `GeologicalSurvey` and `EcologicalSurvey` each list the resource/bonus
//! pairs they watch; the adjacency and coverage checks are shared through
//! the provided methods on `SurveyCard`.

pub mod catalog;
pub mod definition;
pub mod instance;
pub mod survey;

pub use catalog::{survey_card, EcologicalSurvey, GeologicalSurvey};
pub use definition::{CardName, CardResource};
pub use instance::PlayedCard;
pub use survey::{grant_log, SideCondition, SurveyCard, SurveyContext, SURVEY_GRANT_TEMPLATE};
