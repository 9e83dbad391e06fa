use anyhow::{Context, Result};

use crate::bootstrap::{DrawCall, Host, PipelineDesc, RenderPassDesc, ShaderDesc};

use super::canvas::{self, Canvas, CanvasLookup};
use super::pipeline::{self, ColorTarget};
use super::surface;
use super::GpuInit;

/// Logical device and its command queue.
pub struct GpuDevice {
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
}

/// Surface bound to a canvas, with the canvas size and the format negotiated
/// with the adapter captured at creation.
pub struct CanvasSurface {
    pub surface: wgpu::Surface<'static>,
    pub size: (u32, u32),
    pub format: wgpu::TextureFormat,
}

/// Acquired surface texture and a view onto it.
///
/// Holding the surface texture prevents acquisition of subsequent frames.
pub struct FrameTarget {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
}

impl ColorTarget for FrameTarget {
    fn texture_view(&self) -> &wgpu::TextureView {
        &self.view
    }
}

/// [`Host`] backed by wgpu.
///
/// Uses the browser's WebGPU implementation on wasm32 and every native
/// backend elsewhere.
pub struct WgpuHost {
    instance: wgpu::Instance,
    init: GpuInit,
    canvases: CanvasLookup,
    /// Adapter the surface must be presentable from.
    adapter: Option<wgpu::Adapter>,
}

impl WgpuHost {
    pub fn new(init: GpuInit) -> Self {
        let backends = if cfg!(target_arch = "wasm32") {
            wgpu::Backends::BROWSER_WEBGPU
        } else {
            wgpu::Backends::all()
        };

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends,
            ..Default::default()
        });

        Self {
            instance,
            init,
            canvases: CanvasLookup::default(),
            adapter: None,
        }
    }

    /// Makes `window` discoverable under `id`.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn register_canvas(&mut self, id: impl Into<String>, window: Canvas) {
        self.canvases.insert(id, window);
    }
}

impl Host for WgpuHost {
    type Adapter = wgpu::Adapter;
    type Device = GpuDevice;
    type Canvas = Canvas;
    type Context = CanvasSurface;
    type ShaderModule = wgpu::ShaderModule;
    type Pipeline = wgpu::RenderPipeline;
    type View = FrameTarget;

    async fn request_adapter(&mut self) -> Option<wgpu::Adapter> {
        // No compatible surface yet: the canvas is looked up after the device.
        let adapter = self
            .instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: self.init.power_preference,
                compatible_surface: None,
                force_fallback_adapter: false,
            })
            .await
            .inspect_err(|e| log::debug!("adapter request failed: {e}"))
            .ok()?;

        log::info!("using adapter {:?}", adapter.get_info());
        self.adapter = Some(adapter.clone());
        Some(adapter)
    }

    async fn request_device(&mut self, adapter: &wgpu::Adapter) -> Option<GpuDevice> {
        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("triangle-engine device"),
                required_features: self.init.required_features,
                required_limits: self.init.required_limits.clone(),
                experimental_features: wgpu::ExperimentalFeatures::disabled(),
                memory_hints: wgpu::MemoryHints::Performance,
                trace: wgpu::Trace::Off,
            })
            .await
            .inspect_err(|e| log::debug!("device request failed: {e}"))
            .ok()?;

        Some(GpuDevice { device, queue })
    }

    fn find_canvas(&mut self, id: &str) -> Option<Canvas> {
        self.canvases.find(id)
    }

    fn context(&mut self, canvas: Canvas) -> Option<CanvasSurface> {
        let size = canvas::size(&canvas);
        let surface = self
            .instance
            .create_surface(canvas::surface_target(canvas))
            .inspect_err(|e| log::debug!("surface creation failed: {e}"))
            .ok()?;

        // The adapter was picked without a surface; make sure it can present here.
        let adapter = self.adapter.as_ref()?;
        let format = surface::negotiate_format(
            adapter.is_surface_supported(&surface),
            &surface.get_capabilities(adapter),
            self.init.prefer_srgb,
        );
        let Some(format) = format else {
            log::debug!("adapter cannot present to this surface");
            return None;
        };

        Some(CanvasSurface {
            surface,
            size,
            format,
        })
    }

    fn preferred_format(
        &mut self,
        _adapter: &wgpu::Adapter,
        context: &CanvasSurface,
    ) -> wgpu::TextureFormat {
        context.format
    }

    fn configure(
        &mut self,
        context: &CanvasSurface,
        device: &GpuDevice,
        format: wgpu::TextureFormat,
    ) {
        let config = surface::configuration(format, context.size, &self.init);
        context.surface.configure(&device.device, &config);
    }

    fn create_shader_module(
        &mut self,
        device: &GpuDevice,
        desc: &ShaderDesc<'_>,
    ) -> wgpu::ShaderModule {
        pipeline::shader_module(&device.device, desc)
    }

    fn create_render_pipeline(
        &mut self,
        device: &GpuDevice,
        module: &wgpu::ShaderModule,
        desc: &PipelineDesc<'_>,
    ) -> wgpu::RenderPipeline {
        pipeline::render_pipeline(&device.device, module, desc)
    }

    fn current_view(&mut self, context: &CanvasSurface) -> Result<FrameTarget> {
        let surface_texture = context
            .surface
            .get_current_texture()
            .context("failed to acquire surface texture")?;
        let view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        Ok(FrameTarget {
            surface_texture,
            view,
        })
    }

    fn submit(
        &mut self,
        device: &GpuDevice,
        pass: &RenderPassDesc<'_, FrameTarget>,
        pipeline: &wgpu::RenderPipeline,
        draw: &DrawCall,
    ) {
        let mut encoder = device
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Our Encoder"),
            });

        pipeline::record_pass(&mut encoder, pass, pipeline, draw);

        device.queue.submit(std::iter::once(encoder.finish()));
    }

    fn present(&mut self, frame: FrameTarget) {
        drop(frame.view);
        frame.surface_texture.present();
    }
}
