//! GPU device + surface management.
//!
//! This module is responsible for:
//! - implementing the bootstrap [`Host`](crate::bootstrap::Host) on top of wgpu
//! - looking up the canvas (DOM element or registered window)
//! - building the shader module, pipeline and render pass the triangle needs

mod canvas;
mod gpu;
mod init;
mod pipeline;
mod surface;

pub use canvas::{Canvas, CanvasLookup};
pub use gpu::{CanvasSurface, FrameTarget, GpuDevice, WgpuHost};
pub use init::GpuInit;
pub use pipeline::{ColorTarget, record_pass, render_pipeline, shader_module};
