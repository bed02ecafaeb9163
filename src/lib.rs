// Page Replacement Simulation Engine

pub mod common;
pub mod generator;
pub mod input;
pub mod sim;

// Re-export key items for convenient access
pub use common::types::Page;
pub use generator::generate_reference_string;
pub use input::{InputError, parse_reference_string};
pub use sim::batch::{run_comparison, sweep_frame_counts};
pub use sim::error::SimulationError;
pub use sim::policy::Policy;
pub use sim::result::{ComparisonBatch, ComparisonRow, RunResult, StepRecord};
pub use sim::runner::run_simulation;
