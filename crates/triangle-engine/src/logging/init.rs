use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info", "warn",
/// "triangle_engine=debug,wgpu=warn"). In the browser only a bare level is
/// understood.
///
/// `write_style` controls ANSI coloring behavior on native targets.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// This function is idempotent; subsequent calls are ignored.
/// Intended usage is early in `main`.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| install(config));
}

#[cfg(not(target_arch = "wasm32"))]
fn install(config: LoggingConfig) {
    let mut builder = env_logger::Builder::new();

    if let Some(filter) = config.env_filter {
        builder.parse_filters(&filter);
    } else if let Ok(filter) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filter);
    } else {
        // wgpu is chatty at info.
        builder
            .filter_level(log::LevelFilter::Info)
            .filter_module("wgpu_core", log::LevelFilter::Warn)
            .filter_module("wgpu_hal", log::LevelFilter::Warn);
    }

    builder.write_style(config.write_style);

    if builder.try_init().is_err() {
        // Someone else installed a logger first; keep theirs.
        return;
    }

    log::debug!("logging initialized");
}

#[cfg(target_arch = "wasm32")]
fn install(config: LoggingConfig) {
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));

    let level = config
        .env_filter
        .as_deref()
        .and_then(|f| f.parse::<log::Level>().ok())
        .unwrap_or(log::Level::Info);

    // Error records go to `console.error`.
    if console_log::init_with_level(level).is_err() {
        return;
    }

    log::debug!("logging initialized");
}
