//! Deferred effects.
//!
//! A grant decision never mutates state directly. It becomes a
//! [`DeferredAction`] placed on the session's queue:
//! - [`GainResources`]: standard resources into a player's stock
//! - [`AddResourcesToCard`]: card resources onto one accumulating card
//!
//! Units mutate state through an [`ApplyContext`], write their log
//! message, and may schedule follow-up units. A unit that needs a player's
//! choice returns [`Step::AwaitInput`] and is resumed with an
//! [`InputResponse`].

mod grants;
mod unit;

pub use grants::{AddResourcesToCard, GainResources};
pub use unit::{ApplyContext, DeferredAction, InputRequest, InputResponse, OnApplied, Step};
