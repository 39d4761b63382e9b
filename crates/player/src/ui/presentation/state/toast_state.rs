//! Toast notifications
//!
//! One toast at a time. A newer toast replaces the visible one and restarts
//! the auto-hide timer; older timers find their ticket stale and do nothing.

use dioxus::prelude::*;

use crate::presentation::view_models::{Debouncer, TOAST_VISIBLE_MS};
use crate::Platform;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
}

/// Toast manager, shared through context
#[derive(Clone)]
pub struct ToastState {
    current: Signal<Option<Toast>>,
    timer: Signal<Debouncer>,
    platform: Platform,
}

impl ToastState {
    pub fn new(platform: Platform) -> Self {
        Self {
            current: Signal::new(None),
            timer: Signal::new(Debouncer::new()),
            platform,
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(message.into(), ToastKind::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(message.into(), ToastKind::Error);
    }

    fn show(&self, message: String, kind: ToastKind) {
        let mut current = self.current;
        let mut timer = self.timer;

        current.set(Some(Toast { message, kind }));
        let ticket = timer.write().ticket();

        let platform = self.platform.clone();
        spawn(async move {
            platform.sleep_ms(TOAST_VISIBLE_MS).await;
            if timer.peek().is_current(ticket) {
                current.set(None);
            }
        });
    }

    pub fn dismiss(&self) {
        let mut current = self.current;
        let mut timer = self.timer;
        timer.write().cancel();
        current.set(None);
    }

    pub fn current(&self) -> Option<Toast> {
        self.current.read().clone()
    }
}

/// Get the toast manager from context
pub fn use_toast() -> ToastState {
    use_context::<ToastState>()
}
