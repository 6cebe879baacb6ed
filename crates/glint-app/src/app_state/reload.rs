//! Applying live config edits to the running scene.

use super::core::GlintApp;

impl GlintApp {
    /// Push color edits from the latest config into the big sphere.
    ///
    /// Only the colors are live; other sections take effect on restart.
    pub(super) fn poll_config_changes(&mut self) {
        let Some(rx) = self.config_rx.as_mut() else {
            return;
        };
        match rx.has_changed() {
            Ok(false) => return,
            Ok(true) => {}
            Err(_) => {
                tracing::warn!("config reload channel closed, live colors disabled");
                self.config_rx = None;
                return;
            }
        }

        let config = rx.borrow_and_update().clone();
        if let Some(scene) = self.scene.as_mut() {
            let changed = config
                .colors
                .entries()
                .into_iter()
                .filter_map(|(name, hex)| scene.set_color(name, hex))
                .count();
            tracing::info!("config reloaded, {changed} color(s) changed");
        }
        self.config = config;
    }
}
