//! Python interpreter discovery and scripting-venv management.
//!
//! The monitor's workspace carries a local virtual environment for operator
//! scripts. This module finds an interpreter, creates the venv when absent,
//! and keeps its package installer current.

mod detect;
mod venv;

pub use detect::find_python;
pub use venv::VenvManager;
