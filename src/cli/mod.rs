//! Command-line workflow shared by the binary and tests

pub mod orchestration;

pub use orchestration::{run_workflow, InputSource, RenderWorkflowArgs, WorkflowResult};
