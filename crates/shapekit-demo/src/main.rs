mod app;
mod scenes;

use std::path::PathBuf;

use shapekit_engine::logging::{init_logging, LoggingConfig};
use shapekit_engine::render::ShaderSource;
use shapekit_engine::window::{Runtime, RuntimeConfig};

use app::DemoApp;

/// Optional WGSL file replacing the bundled shape shader.
const SHADER_ENV: &str = "SHAPEKIT_SHADER";

fn shader_source() -> ShaderSource {
    match std::env::var_os(SHADER_ENV) {
        Some(path) if !path.is_empty() => ShaderSource::File(PathBuf::from(path)),
        _ => ShaderSource::Builtin,
    }
}

fn run() -> anyhow::Result<()> {
    let config = RuntimeConfig {
        title: "shapekit".to_string(),
        shader: shader_source(),
        ..RuntimeConfig::default()
    };
    log::info!("w/a/s/d move, tab switches scene, esc quits");

    let app = DemoApp::new(config.title.clone());
    Runtime::run(config, app)
}

fn main() {
    init_logging(LoggingConfig::default());

    if let Err(e) = run() {
        log::error!("{e:#}");
        std::process::exit(1);
    }
}
