//! GlintApp struct definition and constructor.

use std::sync::Arc;

use tokio::sync::watch;
use winit::window::Window;

use glint_config::schema::GlintConfig;
use glint_renderer::{Clock, FrameDriver, RenderState, SceneState};

use super::input::DragState;

/// Top-level application state.
pub struct GlintApp {
    pub(super) config: GlintConfig,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) render_state: Option<RenderState>,
    pub(super) scene: Option<SceneState>,

    // Frame loop
    pub(super) clock: Clock,
    pub(super) driver: FrameDriver,

    // Orbit input
    pub(super) drag: DragState,

    // Live reload
    pub(super) config_rx: Option<watch::Receiver<GlintConfig>>,
    pub(super) tokio_runtime: Option<tokio::runtime::Runtime>,

    // Set when startup or rendering hit an unrecoverable error
    pub(super) failed: bool,
}

impl GlintApp {
    pub fn new(
        config: GlintConfig,
        config_rx: Option<watch::Receiver<GlintConfig>>,
        tokio_runtime: Option<tokio::runtime::Runtime>,
    ) -> Self {
        let driver = FrameDriver::from_config(&config);
        Self {
            config,
            window: None,
            render_state: None,
            scene: None,
            clock: Clock::new(),
            driver,
            drag: DragState::default(),
            config_rx,
            tokio_runtime,
            failed: false,
        }
    }

    /// Whether the app stopped because of an error.
    pub fn failed(&self) -> bool {
        self.failed
    }

    pub(super) fn request_redraw(&self) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    /// Stop the reload task and release GPU resources.
    pub(super) fn shutdown(&mut self) {
        tracing::info!("Initiating shutdown");
        self.config_rx = None;
        if let Some(rt) = self.tokio_runtime.take() {
            rt.shutdown_timeout(std::time::Duration::from_secs(2));
        }
        self.render_state = None;
        self.scene = None;
        tracing::info!(
            "Shutdown finished after {} frames",
            self.driver.ticks()
        );
    }
}
