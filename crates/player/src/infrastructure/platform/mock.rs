//! Mock platform for tests
//!
//! Sleep resolves immediately, so debounce and toast timers can be
//! driven deterministically.

use std::{future::Future, pin::Pin};

use crate::ports::outbound::platform::{
    DocumentProvider, MiniAppProvider, SleepProvider,
};
use crate::state::Platform;

#[derive(Clone, Default)]
pub struct MockSleepProvider;

impl SleepProvider for MockSleepProvider {
    fn sleep_ms(&self, _ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        Box::pin(async {})
    }
}

#[derive(Clone, Default)]
pub struct MockDocumentProvider;

impl DocumentProvider for MockDocumentProvider {
    fn set_page_title(&self, _title: &str) {}
}

#[derive(Clone, Default)]
pub struct MockMiniAppProvider {
    pub init_data: String,
}

impl MiniAppProvider for MockMiniAppProvider {
    fn init_data(&self) -> String {
        self.init_data.clone()
    }

    fn signal_ready(&self) {}
}

/// Platform with no-op providers and the given init data
pub fn create_mock_platform(init_data: &str) -> Platform {
    Platform::new(
        MockSleepProvider,
        MockDocumentProvider,
        MockMiniAppProvider {
            init_data: init_data.to_string(),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::PlatformPort;

    #[test]
    fn mock_platform_exposes_init_data() {
        let platform = create_mock_platform("query_id=abc&hash=def");
        assert_eq!(platform.init_data(), "query_id=abc&hash=def");
    }

    #[tokio::test]
    async fn mock_sleep_resolves_immediately() {
        let platform = create_mock_platform("");
        platform.sleep_ms(60_000).await;
    }
}
