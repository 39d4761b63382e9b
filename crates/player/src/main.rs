//! Skirmish Player - composition root binary.

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use skirmish_player::infrastructure::{ApiAdapter, ClientConfig};
use skirmish_player::ports::outbound::PlatformPort;

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "skirmish_player=debug,dioxus=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    tracing::info!("Starting Skirmish Player");

    // Platform
    let platform = skirmish_player::infrastructure::platform::create_platform();
    platform.signal_ready();
    let init_data = platform.init_data();
    if init_data.is_empty() {
        tracing::warn!("No mini-app init data; requests go out unauthenticated");
    }
    let platform: std::sync::Arc<dyn PlatformPort> = std::sync::Arc::new(platform);

    // HTTP
    let config = ClientConfig::from_env().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Invalid client configuration, using defaults");
        ClientConfig::default()
    });
    tracing::info!(api_base = %config.api_base, "Backend configured");
    let raw_api = std::sync::Arc::new(ApiAdapter::new(config, &init_data));
    let api = skirmish_player::application::api::Api::new(raw_api);

    // Shell kind (desktop vs mobile layout)
    let shell = {
        #[cfg(target_arch = "wasm32")]
        {
            let width = web_sys::window()
                .and_then(|w| w.inner_width().ok())
                .and_then(|v| v.as_f64())
                .unwrap_or(1024.0);

            if width < 768.0 {
                skirmish_player::ui::ShellKind::Mobile
            } else {
                skirmish_player::ui::ShellKind::Desktop
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            std::env::var(skirmish_player::infrastructure::config::SHELL_ENV)
                .ok()
                .and_then(|s| match s.trim().to_ascii_lowercase().as_str() {
                    "desktop" => Some(skirmish_player::ui::ShellKind::Desktop),
                    "mobile" => Some(skirmish_player::ui::ShellKind::Mobile),
                    _ => None,
                })
                .unwrap_or_default()
        }
    };

    // Launch Dioxus
    #[allow(unused_mut)]
    let mut builder = dioxus::LaunchBuilder::new();

    #[cfg(not(target_arch = "wasm32"))]
    {
        let css = load_player_css();
        let head = format!("<style>{}</style>", css);
        let cfg = dioxus_desktop::Config::new().with_custom_head(head);
        builder = builder.with_cfg(cfg);
    }

    builder
        .with_context(platform)
        .with_context(shell)
        .with_context(skirmish_player::ui::presentation::Services::new(api))
        .launch(skirmish_player::ui::app);
}

#[cfg(not(target_arch = "wasm32"))]
fn load_player_css() -> String {
    const FALLBACK_CSS: &str = "";

    let css_path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/css/output.css");
    std::fs::read_to_string(css_path).unwrap_or_else(|_| FALLBACK_CSS.to_string())
}
