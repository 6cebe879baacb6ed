//! Core reload manager implementation.

use crate::schema::GlintConfig;
use crate::toml_loader;
use crate::validation;
use crate::watcher::ConfigWatcher;
use glint_common::ConfigError;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::sync::{broadcast, watch};
use tracing::{error, info, warn};

/// Manages live config reloading.
///
/// Watches the config file for changes and publishes new, validated configs
/// via a [`tokio::sync::watch`] channel. An edit that fails to parse or
/// validate is logged and dropped, so the last good config stays live.
pub struct ReloadManager {
    config_path: PathBuf,
}

impl ReloadManager {
    /// Publish `initial` and start watching `config_path` in a background task.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(config_path: PathBuf, initial: GlintConfig) -> watch::Receiver<GlintConfig> {
        Self::start_with_debounce(config_path, initial, crate::watcher::DEFAULT_DEBOUNCE)
    }

    pub fn start_with_debounce(
        config_path: PathBuf,
        initial: GlintConfig,
        debounce: Duration,
    ) -> watch::Receiver<GlintConfig> {
        let (config_tx, config_rx) = watch::channel(initial);

        tokio::spawn(async move {
            let manager = ReloadManager { config_path };
            manager.run_watch_loop(config_tx, debounce).await;
        });

        config_rx
    }

    async fn run_watch_loop(&self, config_tx: watch::Sender<GlintConfig>, debounce: Duration) {
        let watcher = match ConfigWatcher::new(self.config_path.clone()) {
            Ok(w) => w.with_debounce(debounce),
            Err(e) => {
                error!("failed to create config watcher: {e}");
                return;
            }
        };

        let (change_tx, mut change_rx) = broadcast::channel::<()>(16);

        tokio::spawn(async move {
            if let Err(e) = watcher.watch(change_tx).await {
                error!("config watcher error: {e}");
            }
        });

        loop {
            match change_rx.recv().await {
                Ok(()) => {
                    info!("reloading config from {}", self.config_path.display());
                    match reload_config(&self.config_path) {
                        Ok(config) => {
                            if config_tx.send(config).is_err() {
                                info!("all config receivers dropped, stopping reload manager");
                                break;
                            }
                        }
                        Err(e) => warn!("config reload rejected: {e}"),
                    }
                }
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    warn!("config watcher lagged by {n} events");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    info!("config watcher channel closed");
                    break;
                }
            }
        }
    }
}

/// Load and validate the config at `path`.
pub(crate) fn reload_config(path: &Path) -> Result<GlintConfig, ConfigError> {
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}
