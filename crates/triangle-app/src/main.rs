#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use triangle_engine::device::GpuInit;
    use triangle_engine::logging::{init_logging, LoggingConfig};
    use triangle_engine::window::{Runtime, RuntimeConfig};

    init_logging(LoggingConfig::default());
    Runtime::run(RuntimeConfig::default(), GpuInit::default())
}

// The browser build starts from `triangle_app::start` instead.
#[cfg(target_arch = "wasm32")]
fn main() {}
