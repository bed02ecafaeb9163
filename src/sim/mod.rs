pub mod batch;
pub mod error;
pub mod frame_set;
pub mod policy;
pub mod result;
pub mod runner;

pub use batch::{run_comparison, sweep_frame_counts};
pub use error::SimulationError;
pub use frame_set::FrameSet;
pub use policy::Policy;
pub use result::{ComparisonBatch, ComparisonRow, RunResult, StepRecord};
pub use runner::run_simulation;
