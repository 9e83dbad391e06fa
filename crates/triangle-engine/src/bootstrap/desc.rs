use std::ops::Range;

use crate::shader;

/// Clear color of the canvas (gray).
pub const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.3,
    g: 0.3,
    b: 0.3,
    a: 1.0,
};

/// Shader module request.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ShaderDesc<'a> {
    pub label: Option<&'a str>,
    pub source: &'a str,
}

/// Render pipeline request.
///
/// The pipeline layout is always inferred from the shader.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct PipelineDesc<'a> {
    pub label: Option<&'a str>,
    pub vertex_entry: &'a str,
    pub fragment_entry: &'a str,
    pub topology: wgpu::PrimitiveTopology,
    /// Format of the single color target.
    pub target_format: wgpu::TextureFormat,
}

/// One color attachment: where to draw and how to load/store it.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorAttachment<V> {
    pub view: V,
    pub ops: wgpu::Operations<wgpu::Color>,
}

/// Single-attachment render pass.
///
/// The view is captured when the descriptor is built. It is only valid for the
/// frame it was acquired for.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPassDesc<'a, V> {
    pub label: Option<&'a str>,
    pub color_attachment: ColorAttachment<V>,
}

/// Non-indexed draw without vertex buffers.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct DrawCall {
    pub vertices: Range<u32>,
    pub instances: Range<u32>,
}

impl DrawCall {
    /// Three vertices, one instance.
    pub const TRIANGLE: DrawCall = DrawCall {
        vertices: 0..shader::VERTEX_COUNT,
        instances: 0..1,
    };
}

pub fn shader_desc() -> ShaderDesc<'static> {
    ShaderDesc {
        label: Some("Our Hardcoded Red Triangle Shaders"),
        source: shader::TRIANGLE_WGSL,
    }
}

pub fn pipeline_desc(target_format: wgpu::TextureFormat) -> PipelineDesc<'static> {
    PipelineDesc {
        label: Some("Our Hardcoded Red Triangle Pipeline"),
        vertex_entry: shader::VERTEX_ENTRY,
        fragment_entry: shader::FRAGMENT_ENTRY,
        topology: wgpu::PrimitiveTopology::TriangleList,
        target_format,
    }
}

/// Describes the canvas pass: clear to [`CLEAR_COLOR`], then store.
pub fn pass_desc<V>(view: V) -> RenderPassDesc<'static, V> {
    RenderPassDesc {
        label: Some("Our Basic Canvas RenderPass"),
        color_attachment: ColorAttachment {
            view,
            ops: wgpu::Operations {
                load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                store: wgpu::StoreOp::Store,
            },
        },
    }
}
