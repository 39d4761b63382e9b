//! Platform abstraction ports for cross-platform compatibility
//!
//! These traits abstract platform-specific operations so that:
//! 1. View-models and components remain platform-agnostic
//! 2. Platform-specific code is isolated in infrastructure
//! 3. Code becomes easily testable with mock implementations
//!
//! NOTE: The `Platform` struct (DI container) that aggregates these traits
//! lives in `crate::state::platform`. Ports contain only trait definitions.

use std::{future::Future, pin::Pin};

/// Async sleep abstraction
///
/// Used for search debouncing and toast auto-hide without `#[cfg]` branches
/// in UI code.
pub trait SleepProvider: Clone + 'static {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>>;
}

/// Browser document operations (page title, etc.)
pub trait DocumentProvider: Clone + 'static {
    /// Set the browser page title (no-op on desktop)
    fn set_page_title(&self, title: &str);
}

/// Host chat-platform Mini-App context
pub trait MiniAppProvider: Clone + 'static {
    /// Signed launch parameters sent as `Authorization: tma <initData>`.
    ///
    /// Empty when the client runs outside the Mini-App container.
    fn init_data(&self) -> String;

    /// Expand the web view and tell the host the app is ready
    fn signal_ready(&self);
}
