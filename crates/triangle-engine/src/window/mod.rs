//! Native window runtime.
//!
//! Opens a single window, registers it as the canvas and runs the bootstrap
//! once. There is no frame loop.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
