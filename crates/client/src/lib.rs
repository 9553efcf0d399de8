// Client modules
pub mod api;
pub mod keystore;

// App state (configuration, paths)
pub mod state;

// Re-exports for consumers
pub use state::{AppConfig, AppState, StateError};
