//! PlatformPort - Unified platform services interface
//!
//! This trait abstracts the `Platform` DI container so that UI code only
//! depends on a trait object.

use std::{future::Future, pin::Pin};

/// Unified platform services port
///
/// Implemented by the `Platform` struct in `crate::state`.
///
/// Use via Dioxus context: `use_context::<Arc<dyn PlatformPort>>()`
pub trait PlatformPort: Send + Sync {
    // -------------------------------------------------------------------------
    // Sleep operations
    // -------------------------------------------------------------------------

    /// Sleep for the given number of milliseconds
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>>;

    // -------------------------------------------------------------------------
    // Document operations
    // -------------------------------------------------------------------------

    /// Set the browser page title (no-op on desktop)
    fn set_page_title(&self, title: &str);

    // -------------------------------------------------------------------------
    // Mini-App operations
    // -------------------------------------------------------------------------

    /// Launch parameters for the `Authorization` header (may be empty)
    fn init_data(&self) -> String;

    /// Expand the web view and signal readiness to the host
    fn signal_ready(&self);
}
