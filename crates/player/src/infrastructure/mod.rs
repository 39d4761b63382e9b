pub mod config;
pub mod http_client;
pub mod platform;

pub use config::ClientConfig;
pub use http_client::ApiAdapter;
