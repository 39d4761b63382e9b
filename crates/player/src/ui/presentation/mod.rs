//! Presentation layer - Dioxus UI components, view-models and views

pub mod components;
pub mod messages;
pub mod services;
pub mod state;
pub mod view_models;
pub mod views;

pub use services::Services;
