//! Renderer bootstrap.
//!
//! Runs the one-shot setup sequence against a [`Host`]:
//! - acquire adapter, device, canvas and surface context
//! - configure the surface with the preferred format
//! - compile the shader, build the pipeline, describe the pass
//! - record and submit a single draw
//!
//! A missing adapter, device, canvas or context aborts the sequence with an
//! error log line and no further GPU work. Any other failure is the
//! environment's to report.

mod desc;
mod error;
mod host;
mod stage;


use anyhow::Result;

pub use desc::{
    ColorAttachment, DrawCall, PipelineDesc, RenderPassDesc, ShaderDesc, CLEAR_COLOR, pass_desc,
    pipeline_desc, shader_desc,
};
pub use error::Abort;
pub use host::Host;
pub use stage::Stage;

/// Element id of the canvas the triangle is drawn into.
pub const CANVAS_ID: &str = "myCanvas";

/// GPU objects that outlive a successful bootstrap.
///
/// Nothing here is released explicitly; dropping it is left to the caller.
pub struct Triangle<H: Host> {
    pub adapter: H::Adapter,
    pub device: H::Device,
    pub context: H::Context,
    pub pipeline: H::Pipeline,
    pub format: wgpu::TextureFormat,
}

/// Terminal state of [`run`].
pub enum Outcome<H: Host> {
    Rendered(Triangle<H>),
    /// A precondition was missing; `stage` is the last stage reached.
    Aborted { stage: Stage, reason: Abort },
}

impl<H: Host> Outcome<H> {
    pub fn is_rendered(&self) -> bool {
        matches!(self, Outcome::Rendered(_))
    }

    pub fn abort_reason(&self) -> Option<&Abort> {
        match self {
            Outcome::Rendered(_) => None,
            Outcome::Aborted { reason, .. } => Some(reason),
        }
    }
}

fn aborted<H: Host>(stage: Stage, reason: Abort) -> Outcome<H> {
    log::error!("{reason}");
    Outcome::Aborted { stage, reason }
}

/// Brings up the GPU against `host` and draws the triangle once.
///
/// Only adapter and device acquisition suspend. Returns `Err` when acquiring
/// the surface texture fails.
pub async fn run<H: Host>(host: &mut H) -> Result<Outcome<H>> {
    let mut stage = Stage::Start;

    let Some(adapter) = host.request_adapter().await else {
        return Ok(aborted(stage, Abort::NoAdapter));
    };
    stage = stage.enter(Stage::AdapterAcquired);

    let Some(device) = host.request_device(&adapter).await else {
        return Ok(aborted(stage, Abort::NoDevice));
    };
    stage = stage.enter(Stage::DeviceAcquired);

    let Some(canvas) = host.find_canvas(CANVAS_ID) else {
        return Ok(aborted(stage, Abort::CanvasNotFound(CANVAS_ID.to_owned())));
    };
    stage = stage.enter(Stage::CanvasFound);

    let Some(context) = host.context(canvas) else {
        return Ok(aborted(stage, Abort::NoContext));
    };
    stage = stage.enter(Stage::ContextAcquired);

    let format = host.preferred_format(&adapter, &context);
    host.configure(&context, &device, format);
    log::info!("surface configured with {format:?}");
    stage = stage.enter(Stage::Configured);

    let module = host.create_shader_module(&device, &shader_desc());
    stage = stage.enter(Stage::ShaderCompiled);

    let pipeline = host.create_render_pipeline(&device, &module, &pipeline_desc(format));
    stage = stage.enter(Stage::PipelineBuilt);

    // Captures this frame's texture; a frame loop would have to rebuild it.
    let pass = pass_desc(host.current_view(&context)?);
    stage = stage.enter(Stage::PassDescribed);

    render(host, &device, &pipeline, &pass);
    stage.enter(Stage::Rendered);

    host.present(pass.color_attachment.view);

    Ok(Outcome::Rendered(Triangle {
        adapter,
        device,
        context,
        pipeline,
        format,
    }))
}

/// Records `pass` with a single triangle draw and submits it.
pub fn render<H: Host>(
    host: &mut H,
    device: &H::Device,
    pipeline: &H::Pipeline,
    pass: &RenderPassDesc<'_, H::View>,
) {
    log::debug!("submitting {:?}", DrawCall::TRIANGLE);
    host.submit(device, pass, pipeline, &DrawCall::TRIANGLE);
}
