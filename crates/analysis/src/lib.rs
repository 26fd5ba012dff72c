//! Sizing pipeline crate; re-exports the stage crates it drives.

pub mod pipeline;

pub use facade::*;
pub use sizing_field as field;
pub use sizing_payload_range as payload_range;
pub use sizing_weights as weights;

mod facade;
