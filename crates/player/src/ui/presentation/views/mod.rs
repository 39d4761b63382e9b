//! Screens
//!
//! Each view owns its local signals and view-model, loads through the
//! services from context and reports outcomes as toasts.

pub mod campaigns;
pub mod characters;
pub mod encounter_setup;
pub mod reference;
pub mod tracker;
