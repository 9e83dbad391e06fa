use anyhow::Result;

use super::desc::{DrawCall, PipelineDesc, RenderPassDesc, ShaderDesc};

/// Graphics environment the bootstrap runs against.
///
/// Acquisition calls return `None` when the environment cannot provide the
/// resource. Everything after that has no declared failure path: errors are
/// reported by the environment itself (e.g. wgpu's uncaptured error handler).
#[allow(async_fn_in_trait)]
pub trait Host {
    type Adapter;
    type Device;
    type Canvas;
    type Context;
    type ShaderModule;
    type Pipeline;
    type View;

    async fn request_adapter(&mut self) -> Option<Self::Adapter>;

    async fn request_device(&mut self, adapter: &Self::Adapter) -> Option<Self::Device>;

    /// Looks up a canvas by element id.
    fn find_canvas(&mut self, id: &str) -> Option<Self::Canvas>;

    /// Obtains a drawable surface context for `canvas`.
    fn context(&mut self, canvas: Self::Canvas) -> Option<Self::Context>;

    /// Environment's preferred surface format. Always yields a format.
    fn preferred_format(
        &mut self,
        adapter: &Self::Adapter,
        context: &Self::Context,
    ) -> wgpu::TextureFormat;

    fn configure(
        &mut self,
        context: &Self::Context,
        device: &Self::Device,
        format: wgpu::TextureFormat,
    );

    fn create_shader_module(
        &mut self,
        device: &Self::Device,
        desc: &ShaderDesc<'_>,
    ) -> Self::ShaderModule;

    fn create_render_pipeline(
        &mut self,
        device: &Self::Device,
        module: &Self::ShaderModule,
        desc: &PipelineDesc<'_>,
    ) -> Self::Pipeline;

    /// View of the surface texture to draw into this frame.
    fn current_view(&mut self, context: &Self::Context) -> Result<Self::View>;

    /// Encodes `pass` with a single draw and submits it to the device queue.
    ///
    /// Submission does not wait for the GPU.
    fn submit(
        &mut self,
        device: &Self::Device,
        pass: &RenderPassDesc<'_, Self::View>,
        pipeline: &Self::Pipeline,
        draw: &DrawCall,
    );

    /// Hands the drawn frame back to the surface.
    fn present(&mut self, view: Self::View);
}
