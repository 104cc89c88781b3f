//! The concrete survey cards.

use crate::board::{Space, SpaceBonus};
use crate::core::{PlayerId, Resource};

use super::definition::{CardName, CardResource};
use super::survey::{SurveyCard, SurveyContext};

/// Steel, titanium and heat for placing on or next to matching bonuses.
#[derive(Clone, Copy, Debug, Default)]
pub struct GeologicalSurvey;

impl SurveyCard for GeologicalSurvey {
    fn name(&self) -> CardName {
        CardName::GeologicalSurvey
    }

    fn check_for_bonuses(&self, ctx: &mut SurveyContext<'_>, owner: PlayerId, space: &Space) {
        self.test_for_standard_resource(ctx, owner, space, Resource::Steel, SpaceBonus::Steel);
        self.test_for_standard_resource(ctx, owner, space, Resource::Titanium, SpaceBonus::Titanium);
        self.test_for_standard_resource(ctx, owner, space, Resource::Heat, SpaceBonus::Heat);
    }
}

/// Plants, animals and microbes for placing on or next to matching bonuses.
#[derive(Clone, Copy, Debug, Default)]
pub struct EcologicalSurvey;

impl SurveyCard for EcologicalSurvey {
    fn name(&self) -> CardName {
        CardName::EcologicalSurvey
    }

    fn check_for_bonuses(&self, ctx: &mut SurveyContext<'_>, owner: PlayerId, space: &Space) {
        self.test_for_standard_resource(ctx, owner, space, Resource::Plants, SpaceBonus::Plant);
        self.test_for_card_resource(ctx, owner, space, CardResource::Animal, SpaceBonus::Animal);
        self.test_for_card_resource(ctx, owner, space, CardResource::Microbe, SpaceBonus::Microbe);
    }
}

/// The reaction behind a card, if it reacts to placements.
#[must_use]
pub fn survey_card(name: CardName) -> Option<Box<dyn SurveyCard>> {
    match name {
        CardName::GeologicalSurvey => Some(Box::new(GeologicalSurvey)),
        CardName::EcologicalSurvey => Some(Box::new(EcologicalSurvey)),
        _ => None,
    }
}
