//! Cost projection.
//!
//! Per-tool pricing, usage scaling, and stack totals with a confidence label.

#![warn(missing_docs)]

pub mod projector;
pub mod rates;
pub mod stack;

pub use projector::{CostProjector, calculate_cost_projection};
pub use rates::{scaling_factors, usage_base, usage_multiplier, round2, DEFAULT_USAGE_BASE};
pub use stack::{cost_category, cost_model, stack_item};
