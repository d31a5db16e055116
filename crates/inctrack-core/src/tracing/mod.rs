//! Observability for inctrack.
//! `tracing` crate with `EnvFilter`; output always goes to stderr.

pub mod setup;

pub use setup::init_tracing;
