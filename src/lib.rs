//! Security workforce console: officer onboarding.
//!
//! The domain lives in `wf-core`, use cases in `wf-app` and adapters in
//! `wf-infra`. This crate only loads configuration, sets up tracing and
//! assembles the pieces into a [`bootstrap::ConsoleRuntime`].

pub mod bootstrap;

pub use bootstrap::{build_runtime, load_config, ConsoleRuntime};
