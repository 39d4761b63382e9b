//! Desktop platform implementations
//!
//! Provides platform-specific implementations for desktop using the
//! standard library and tokio.

use std::{future::Future, pin::Pin};

use crate::infrastructure::config::INIT_DATA_ENV;
use crate::ports::outbound::platform::{
    DocumentProvider, MiniAppProvider, SleepProvider,
};
use crate::state::Platform;

/// Desktop document provider (no-op for page title)
#[derive(Clone, Default)]
pub struct DesktopDocumentProvider;

impl DocumentProvider for DesktopDocumentProvider {
    fn set_page_title(&self, _title: &str) {
        // Window title is managed by Dioxus desktop
    }
}

/// Desktop sleep provider using tokio timer
#[derive(Clone, Default)]
pub struct DesktopSleepProvider;

impl SleepProvider for DesktopSleepProvider {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        Box::pin(async move {
            tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
        })
    }
}

/// Outside the Mini-App container there is no host; init data may be
/// injected through the environment for development against a real backend.
#[derive(Clone, Default)]
pub struct DesktopMiniAppProvider {
    init_data: String,
}

impl DesktopMiniAppProvider {
    pub fn from_env() -> Self {
        let init_data = std::env::var(INIT_DATA_ENV).unwrap_or_default();
        if init_data.is_empty() {
            tracing::debug!("{} not set, requests go out without Authorization", INIT_DATA_ENV);
        }
        Self { init_data }
    }
}

impl MiniAppProvider for DesktopMiniAppProvider {
    fn init_data(&self) -> String {
        self.init_data.clone()
    }

    fn signal_ready(&self) {}
}

/// Create platform services for desktop
pub fn create_platform() -> Platform {
    Platform::new(
        DesktopSleepProvider,
        DesktopDocumentProvider,
        DesktopMiniAppProvider::from_env(),
    )
}
