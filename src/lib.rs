//! Conceptual aircraft aerodynamics toolkit.
//!
//! The numerical core lives in the workspace crates: AERODAS stall blending in
//! `airframe_aerodas`, decibel summation in `airframe_noise`. This crate wires
//! case files to those models and checks results against stored truth values,
//! so that the binaries and integration tests share one entry point.

pub mod case;
pub mod regression;

pub use airframe_aerodas as aerodas;
pub use airframe_config as config;
pub use airframe_core::{AngleUnit, constants, series, units};
pub use airframe_export as export;
pub use airframe_noise as noise;

/// Install the stderr `tracing` subscriber used by the binaries.
///
/// Honors `RUST_LOG`; defaults to `info`.
pub fn init_tracing() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
