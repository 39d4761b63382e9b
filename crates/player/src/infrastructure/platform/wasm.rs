//! WASM platform implementations
//!
//! Provides platform-specific implementations for the browser using
//! web-sys, js-sys and gloo-timers.

use std::{future::Future, pin::Pin};

use wasm_bindgen::{JsCast, JsValue};

use crate::ports::outbound::platform::{
    DocumentProvider, MiniAppProvider, SleepProvider,
};
use crate::state::Platform;

/// WASM sleep provider using gloo-timers
#[derive(Clone, Default)]
pub struct WasmSleepProvider;

impl SleepProvider for WasmSleepProvider {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        let ms = u32::try_from(ms).unwrap_or(u32::MAX);
        Box::pin(gloo_timers::future::TimeoutFuture::new(ms))
    }
}

/// WASM document provider
#[derive(Clone, Default)]
pub struct WasmDocumentProvider;

impl DocumentProvider for WasmDocumentProvider {
    fn set_page_title(&self, title: &str) {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(title);
        }
    }
}

/// Reads the host's `window.Telegram.WebApp` object.
///
/// Every lookup tolerates a missing object so the page still works when
/// opened directly in a browser.
#[derive(Clone, Default)]
pub struct WasmMiniAppProvider;

impl WasmMiniAppProvider {
    fn web_app() -> Option<JsValue> {
        let window: JsValue = web_sys::window()?.into();
        let telegram = js_sys::Reflect::get(&window, &JsValue::from_str("Telegram")).ok()?;
        if telegram.is_undefined() || telegram.is_null() {
            return None;
        }
        let web_app = js_sys::Reflect::get(&telegram, &JsValue::from_str("WebApp")).ok()?;
        (!web_app.is_undefined() && !web_app.is_null()).then_some(web_app)
    }

    fn call(web_app: &JsValue, method: &str) {
        let func = js_sys::Reflect::get(web_app, &JsValue::from_str(method))
            .ok()
            .and_then(|f| f.dyn_into::<js_sys::Function>().ok());
        match func {
            Some(func) => {
                if let Err(e) = func.call0(web_app) {
                    tracing::warn!("WebApp.{}() failed: {:?}", method, e);
                }
            }
            None => tracing::debug!("WebApp.{} is not available", method),
        }
    }
}

impl MiniAppProvider for WasmMiniAppProvider {
    fn init_data(&self) -> String {
        Self::web_app()
            .and_then(|app| js_sys::Reflect::get(&app, &JsValue::from_str("initData")).ok())
            .and_then(|value| value.as_string())
            .unwrap_or_default()
    }

    fn signal_ready(&self) {
        match Self::web_app() {
            Some(app) => {
                Self::call(&app, "expand");
                Self::call(&app, "ready");
            }
            None => tracing::info!("Telegram WebApp not found, running standalone"),
        }
    }
}

/// Create platform services for the browser
pub fn create_platform() -> Platform {
    Platform::new(
        WasmSleepProvider,
        WasmDocumentProvider,
        WasmMiniAppProvider,
    )
}
