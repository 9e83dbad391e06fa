use crate::bootstrap::{DrawCall, PipelineDesc, RenderPassDesc, ShaderDesc};

/// Anything a render pass can draw into.
pub trait ColorTarget {
    fn texture_view(&self) -> &wgpu::TextureView;
}

impl ColorTarget for wgpu::TextureView {
    fn texture_view(&self) -> &wgpu::TextureView {
        self
    }
}

pub fn shader_module(device: &wgpu::Device, desc: &ShaderDesc<'_>) -> wgpu::ShaderModule {
    device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: desc.label,
        source: wgpu::ShaderSource::Wgsl(desc.source.into()),
    })
}

/// Builds a pipeline with an inferred layout and no vertex buffers.
pub fn render_pipeline(
    device: &wgpu::Device,
    module: &wgpu::ShaderModule,
    desc: &PipelineDesc<'_>,
) -> wgpu::RenderPipeline {
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: desc.label,
        layout: None,

        vertex: wgpu::VertexState {
            module,
            entry_point: Some(desc.vertex_entry),
            compilation_options: Default::default(),
            buffers: &[],
        },

        fragment: Some(wgpu::FragmentState {
            module,
            entry_point: Some(desc.fragment_entry),
            compilation_options: Default::default(),
            targets: &[Some(wgpu::ColorTargetState {
                format: desc.target_format,
                blend: None,
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),

        primitive: wgpu::PrimitiveState {
            topology: desc.topology,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: None,
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },

        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        multiview_mask: None,
        cache: None,
    })
}

/// Records `pass` into `encoder`: bind `pipeline`, issue `draw`, end the pass.
pub fn record_pass<V: ColorTarget>(
    encoder: &mut wgpu::CommandEncoder,
    pass: &RenderPassDesc<'_, V>,
    pipeline: &wgpu::RenderPipeline,
    draw: &DrawCall,
) {
    let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
        label: pass.label,
        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
            view: pass.color_attachment.view.texture_view(),
            resolve_target: None,
            ops: pass.color_attachment.ops,
            depth_slice: None,
        })],
        depth_stencil_attachment: None,
        timestamp_writes: None,
        occlusion_query_set: None,
        multiview_mask: None,
    });

    rpass.set_pipeline(pipeline);
    rpass.draw(draw.vertices.clone(), draw.instances.clone());
}
