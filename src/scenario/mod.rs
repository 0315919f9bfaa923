//! Scripted verification scenarios: line tests and the draw sweep.

pub mod runner;
pub mod sweep;

pub use runner::{ScenarioReport, ScenarioRunner, ScenarioStatus};
pub use sweep::DrawSweep;
