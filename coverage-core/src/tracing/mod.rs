//! Observability for coverage.
//! `tracing` crate with `EnvFilter`.

pub mod setup;

pub use setup::init_tracing;
