//! File discovery and processing.
//!
//! This module finds the documents under a root, runs the fix pipeline over
//! them and writes the results back in place or to the proposed directory.

mod discovery;
mod processing;

pub use discovery::*;
pub use processing::*;
