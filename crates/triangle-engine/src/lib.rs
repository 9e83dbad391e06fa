//! Triangle engine crate.
//!
//! Brings up a GPU device against a canvas, compiles a fixed shader pair and
//! draws one red triangle, once.

pub mod bootstrap;
pub mod device;
pub mod shader;

pub mod logging;
#[cfg(not(target_arch = "wasm32"))]
pub mod window;
