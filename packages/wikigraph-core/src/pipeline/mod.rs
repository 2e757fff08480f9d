//! Build pipeline
//!
//! - `orchestrator` : index → resolve → aggregate → merge, plus render hooks
//! - `renderer`     : seam for the external structured-text renderer
//! - `result`       : build outputs and report

pub mod orchestrator;
pub mod renderer;
pub mod result;

pub use orchestrator::Pipeline;
pub use renderer::{PassthroughRenderer, Renderer};
pub use result::{BuildOutput, BuildReport};
