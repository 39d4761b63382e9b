//! State containers for player-side dependency injection
//!
//! DI containers aggregate adapters behind port traits. They are concrete
//! implementations, so they live beside infrastructure rather than in ports.

mod platform;

pub use platform::Platform;
