//! Core config file watcher implementation.

use glint_common::ConfigError;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::ffi::{OsStr, OsString};
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::{broadcast, mpsc};
use tracing::{debug, error, info, warn};

/// Quiet period after the last filesystem event before a reload is signalled.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Watches a config file for changes and sends notifications.
pub struct ConfigWatcher {
    path: PathBuf,
    debounce: Duration,
}

impl ConfigWatcher {
    /// Create a new watcher for the given config file path.
    pub fn new(path: PathBuf) -> Result<Self, ConfigError> {
        if path.file_name().is_none() {
            return Err(ConfigError::WatchError(format!(
                "{} does not name a file",
                path.display()
            )));
        }
        if !path.exists() {
            warn!(
                "config file {} does not exist yet, will watch for creation",
                path.display()
            );
        }

        Ok(Self {
            path,
            debounce: DEFAULT_DEBOUNCE,
        })
    }

    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    /// Watch the config file, sending `()` on `tx` once per settled burst of
    /// changes. Runs until the notify backend goes away.
    pub async fn watch(&self, tx: broadcast::Sender<()>) -> Result<(), ConfigError> {
        let watch_dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let file_name: OsString = self
            .path
            .file_name()
            .map(OsStr::to_os_string)
            .unwrap_or_default();

        info!("starting config file watcher for {}", self.path.display());

        // Bridges the sync notify callback into async
        let (raw_tx, mut raw_rx) = mpsc::channel::<()>(16);

        let mut watcher = RecommendedWatcher::new(
            move |result: Result<Event, notify::Error>| match result {
                Ok(event) => {
                    if is_config_event(&event, &file_name) {
                        debug!("config file change detected");
                        let _ = raw_tx.try_send(());
                    }
                }
                Err(e) => error!("file watcher error: {e}"),
            },
            notify::Config::default(),
        )
        .map_err(|e| ConfigError::WatchError(format!("failed to create watcher: {e}")))?;

        watcher
            .watch(&watch_dir, RecursiveMode::NonRecursive)
            .map_err(|e| {
                ConfigError::WatchError(format!("failed to watch {}: {e}", watch_dir.display()))
            })?;

        while raw_rx.recv().await.is_some() {
            if !settle(&mut raw_rx, self.debounce).await {
                break;
            }
            info!("config file changed, sending reload signal");
            if tx.send(()).is_err() {
                debug!("no receivers for config reload signal");
            }
        }

        // The notify callback inside `watcher` owns `raw_tx`, so `raw_rx`
        // stays open while the watcher lives. The loop above runs until
        // the task is aborted; the watcher must not be dropped before it.
        drop(watcher);
        Ok(())
    }
}

/// Drain events until `quiet` passes with none arriving.
///
/// Returns `false` if the channel closed while waiting.
pub(super) async fn settle(rx: &mut mpsc::Receiver<()>, quiet: Duration) -> bool {
    loop {
        match tokio::time::timeout(quiet, rx.recv()).await {
            Err(_elapsed) => return true,
            Ok(Some(())) => continue,
            Ok(None) => return false,
        }
    }
}

/// Whether a notify event is a create/modify touching `file_name`.
pub(super) fn is_config_event(event: &Event, file_name: &OsStr) -> bool {
    matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_))
        && event
            .paths
            .iter()
            .any(|p| p.file_name() == Some(file_name))
}
