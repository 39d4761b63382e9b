//! Application routes
//!
//! Campaigns → characters → encounter setup → tracker, plus the reference
//! browser reachable from the campaign list. Ids travel as plain integers in
//! the URL and are wrapped into domain newtypes by the route components.

use dioxus::prelude::*;

mod campaign_routes;
mod encounter_routes;
mod reference_route;
mod screen_layout;

pub use campaign_routes::{CampaignsRoute, CharactersRoute};
pub use encounter_routes::{EncounterSetupRoute, EncounterTrackerRoute};
pub use reference_route::ReferenceRoute;
pub use screen_layout::ScreenLayout;

#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    CampaignsRoute {},
    #[route("/campaigns/:campaign_id")]
    CharactersRoute { campaign_id: i64 },
    #[route("/encounter/setup")]
    EncounterSetupRoute {},
    #[route("/encounters/:encounter_id")]
    EncounterTrackerRoute { encounter_id: i64 },
    #[route("/reference")]
    ReferenceRoute {},
}
