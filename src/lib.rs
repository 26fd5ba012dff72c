//! Conceptual aircraft sizing.
//!
//! The library re-exports the workspace crates so binaries and integration tests can
//! reach every stage through one path, and hosts the pieces shared by the binaries:
//! diagram rendering and log setup.

pub mod diagram;
pub mod logging;

pub use sizing_analysis as analysis;
pub use sizing_config as config;
pub use sizing_core::{constants, mass, units};
pub use sizing_export as export;
pub use sizing_field as field;
pub use sizing_payload_range as payload_range;
pub use sizing_weights as weights;

/// Returns the version of the library, recorded in exported results.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
