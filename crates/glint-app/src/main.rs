mod app_state;
mod cli;

use std::path::PathBuf;

use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

use glint_config::schema::GlintConfig;
use glint_config::toml_loader;

const DEFAULT_LOG_DIRECTIVE: &str = "glint=info";

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        tracing::error!("glint panicked: {info}");
        eprintln!("\n--- glint crashed ---");
        eprintln!("Rerun with RUST_LOG=glint=debug for more detail.");
        eprintln!("---------------------\n");
        default_hook(info);
    }));
}

/// `--log-level` wins, then the config's `[logging] level`.
fn log_directive(cli_level: Option<&str>, config: &GlintConfig) -> String {
    match cli_level {
        Some(level) => level.to_string(),
        None if config.logging.level.is_empty() => DEFAULT_LOG_DIRECTIVE.to_string(),
        None => format!("glint={}", config.logging.level),
    }
}

fn init_logging(directive: &str) {
    let directive = directive.parse().unwrap_or_else(|e| {
        eprintln!("invalid log directive {directive:?} ({e}), using {DEFAULT_LOG_DIRECTIVE}");
        DEFAULT_LOG_DIRECTIVE
            .parse()
            .unwrap_or_else(|_| tracing_subscriber::filter::LevelFilter::INFO.into())
    });
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .init();
}

fn main() {
    install_panic_hook();

    let args = cli::parse();

    // Logging depends on the config, so load first and report afterwards
    let config_path: Option<PathBuf> = match &args.config {
        Some(path) => Some(path.clone()),
        None => toml_loader::default_config_path().ok(),
    };
    let loaded = glint_config::load_config(config_path.as_deref());
    let config = match &loaded {
        Ok(config) => config.clone(),
        Err(_) => GlintConfig::default(),
    };

    if args.print_config {
        println!("{}", glint_config::config_to_json(&config));
        return;
    }

    init_logging(&log_directive(args.log_level.as_deref(), &config));
    tracing::info!("glint v{} starting...", env!("CARGO_PKG_VERSION"));

    match (&loaded, &config_path) {
        (Ok(_), Some(path)) => tracing::info!("Config loaded from {}", path.display()),
        (Ok(_), None) => tracing::info!("Config loaded"),
        (Err(e), _) => tracing::warn!("Config load failed, using defaults: {e}"),
    }

    // Reload runs on its own runtime; the event loop owns the main thread
    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => Some(rt),
        Err(e) => {
            tracing::warn!("Failed to start tokio runtime, live reload disabled: {e}");
            None
        }
    };
    let config_rx = match (&runtime, &config_path) {
        (Some(rt), Some(path)) => {
            let _guard = rt.enter();
            Some(glint_config::ReloadManager::start(path.clone(), config.clone()))
        }
        _ => None,
    };

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            std::process::exit(1);
        }
    };
    let mut app = app_state::GlintApp::new(config, config_rx, runtime);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    if app.failed() {
        std::process::exit(1);
    }
    tracing::info!("Shutdown complete");
}
