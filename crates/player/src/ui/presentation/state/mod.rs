//! Reactive state shared through Dioxus context

pub mod app_state;
pub mod toast_state;

pub use app_state::{use_app_state, AppState};
pub use toast_state::{use_toast, Toast, ToastKind, ToastState};
