use std::sync::atomic::Ordering;
use xmas_scene::config::SceneConfig;
use xmas_scene::core::{Engine, EngineResult};

fn main() -> EngineResult<()> {
    let (mut config, source) = SceneConfig::load_or_default()?;
    config.apply_env_overrides();

    Engine::initialize_logging(&config);
    match source {
        Some(path) => tracing::info!(target: "config", "Loaded config from {}", path.display()),
        None => tracing::info!(target: "config", "Using default configuration"),
    }

    let mut engine = Engine::new(config)?;
    let quit = engine.quit_handle();
    if let Err(e) = ctrlc::set_handler(move || quit.store(true, Ordering::Relaxed)) {
        tracing::warn!(target: "engine", "Ctrl-C handler unavailable: {}", e);
    }
    engine.run()
}
