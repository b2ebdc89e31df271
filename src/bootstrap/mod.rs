pub mod config;
pub mod runtime;
pub mod tracing;
pub mod wiring;

pub use config::load_config;
pub use runtime::{build_runtime, ConsoleRuntime};
pub use wiring::{resolve_settings, wire_dependencies, ConsoleDeps, WiringError};
