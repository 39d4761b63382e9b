//! Platform DI Container
//!
//! This module provides the `Platform` struct - a dependency injection container
//! that aggregates all platform-specific service implementations behind port traits.
//!
//! Usage:
//! - Created by `create_platform()` in `infrastructure/platform/{desktop,wasm}.rs`
//! - Injected into Dioxus context by the binary as `Arc<dyn PlatformPort>`
//! - Accessed in UI via `use_platform()`

use std::{future::Future, pin::Pin, sync::Arc};

use crate::ports::outbound::{DocumentProvider, MiniAppProvider, PlatformPort, SleepProvider};

/// Unified platform services container
#[derive(Clone)]
pub struct Platform {
    sleep: Arc<dyn SleepProviderDyn>,
    document: Arc<dyn DocumentProviderDyn>,
    mini_app: Arc<dyn MiniAppProviderDyn>,
}

// =============================================================================
// Dynamic trait versions for Arc storage (need Send + Sync for Dioxus context)
// =============================================================================

trait SleepProviderDyn: Send + Sync {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>>;
}

trait DocumentProviderDyn: Send + Sync {
    fn set_page_title(&self, title: &str);
}

trait MiniAppProviderDyn: Send + Sync {
    fn init_data(&self) -> String;
    fn signal_ready(&self);
}

// =============================================================================
// Blanket implementations - convert port traits to dyn-safe wrappers
// =============================================================================

impl<T: SleepProvider + Send + Sync> SleepProviderDyn for T {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        SleepProvider::sleep_ms(self, ms)
    }
}

impl<T: DocumentProvider + Send + Sync> DocumentProviderDyn for T {
    fn set_page_title(&self, title: &str) {
        DocumentProvider::set_page_title(self, title)
    }
}

impl<T: MiniAppProvider + Send + Sync> MiniAppProviderDyn for T {
    fn init_data(&self) -> String {
        MiniAppProvider::init_data(self)
    }
    fn signal_ready(&self) {
        MiniAppProvider::signal_ready(self)
    }
}

// =============================================================================
// Platform implementation
// =============================================================================

impl Platform {
    /// Create a new Platform with the given providers
    pub fn new<Sl, D, M>(sleep: Sl, document: D, mini_app: M) -> Self
    where
        Sl: SleepProvider + Send + Sync,
        D: DocumentProvider + Send + Sync,
        M: MiniAppProvider + Send + Sync,
    {
        Self {
            sleep: Arc::new(sleep),
            document: Arc::new(document),
            mini_app: Arc::new(mini_app),
        }
    }
}

impl PlatformPort for Platform {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        self.sleep.sleep_ms(ms)
    }

    fn set_page_title(&self, title: &str) {
        self.document.set_page_title(title)
    }

    fn init_data(&self) -> String {
        self.mini_app.init_data()
    }

    fn signal_ready(&self) {
        self.mini_app.signal_ready()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Clone, Default)]
    struct InstantSleep;

    impl SleepProvider for InstantSleep {
        fn sleep_ms(&self, _ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
            Box::pin(async {})
        }
    }

    #[derive(Clone, Default)]
    struct RecordingDocument {
        titles: Arc<Mutex<Vec<String>>>,
    }

    impl DocumentProvider for RecordingDocument {
        fn set_page_title(&self, title: &str) {
            self.titles.lock().unwrap().push(title.to_string());
        }
    }

    #[derive(Clone, Default)]
    struct RecordingMiniApp {
        ready_calls: Arc<Mutex<u32>>,
    }

    impl MiniAppProvider for RecordingMiniApp {
        fn init_data(&self) -> String {
            "user=1&hash=abc".to_string()
        }

        fn signal_ready(&self) {
            *self.ready_calls.lock().unwrap() += 1;
        }
    }

    #[tokio::test]
    async fn platform_delegates_to_its_providers() {
        let document = RecordingDocument::default();
        let mini_app = RecordingMiniApp::default();
        let platform: Arc<dyn PlatformPort> = Arc::new(Platform::new(
            InstantSleep,
            document.clone(),
            mini_app.clone(),
        ));

        platform.set_page_title("Кампании");
        platform.signal_ready();
        platform.sleep_ms(300).await;

        assert_eq!(*document.titles.lock().unwrap(), vec!["Кампании".to_string()]);
        assert_eq!(*mini_app.ready_calls.lock().unwrap(), 1);
        assert_eq!(platform.init_data(), "user=1&hash=abc");
    }
}
