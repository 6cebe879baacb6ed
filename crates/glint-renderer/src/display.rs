//! Window size bookkeeping: logical size, device pixel ratio, and the
//! capped drawing buffer derived from them.

use crate::gpu::PhysicalSize;

/// Pixel ratio cap applied when the config does not override it.
pub const DEFAULT_MAX_PIXEL_RATIO: f64 = 2.0;

/// Current display surface dimensions as reported by the window system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplaySize {
    pub logical_width: f64,
    pub logical_height: f64,
    /// Device pixel ratio reported by the window system.
    pub scale_factor: f64,
    pub max_pixel_ratio: f64,
}

impl DisplaySize {
    pub fn new(logical_width: f64, logical_height: f64, scale_factor: f64) -> Self {
        Self {
            logical_width,
            logical_height,
            scale_factor,
            max_pixel_ratio: DEFAULT_MAX_PIXEL_RATIO,
        }
    }

    /// Build from a physical window size and its scale factor.
    pub fn from_physical(width: u32, height: u32, scale_factor: f64) -> Self {
        let scale = if scale_factor > 0.0 { scale_factor } else { 1.0 };
        Self::new(width as f64 / scale, height as f64 / scale, scale)
    }

    pub fn with_max_pixel_ratio(mut self, max_pixel_ratio: f64) -> Self {
        self.max_pixel_ratio = max_pixel_ratio;
        self
    }

    /// `min(scale_factor, max_pixel_ratio)`.
    pub fn pixel_ratio(&self) -> f64 {
        self.scale_factor.min(self.max_pixel_ratio)
    }

    /// Drawing buffer size in device pixels, never smaller than 1x1.
    pub fn drawing_buffer(&self) -> PhysicalSize {
        let ratio = self.pixel_ratio();
        PhysicalSize {
            width: ((self.logical_width * ratio).round() as u32).max(1),
            height: ((self.logical_height * ratio).round() as u32).max(1),
        }
    }

    /// Width over height of the logical viewport; 1.0 for a degenerate window.
    pub fn aspect(&self) -> f32 {
        if self.logical_width <= 0.0 || self.logical_height <= 0.0 {
            return 1.0;
        }
        (self.logical_width / self.logical_height) as f32
    }

    /// Apply a resize notification in physical pixels.
    pub fn resize_physical(&mut self, width: u32, height: u32) {
        let scale = self.scale_factor.max(f64::MIN_POSITIVE);
        self.logical_width = width as f64 / scale;
        self.logical_height = height as f64 / scale;
    }

    /// Apply a scale factor change; the logical size is kept.
    pub fn set_scale_factor(&mut self, scale_factor: f64) {
        if scale_factor > 0.0 {
            self.scale_factor = scale_factor;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_ratio_is_capped_at_two() {
        assert_eq!(DisplaySize::new(800.0, 600.0, 1.0).pixel_ratio(), 1.0);
        assert_eq!(DisplaySize::new(800.0, 600.0, 1.5).pixel_ratio(), 1.5);
        assert_eq!(DisplaySize::new(800.0, 600.0, 3.0).pixel_ratio(), 2.0);
    }

    #[test]
    fn drawing_buffer_uses_capped_ratio() {
        let size = DisplaySize::new(800.0, 600.0, 3.0);
        assert_eq!(
            size.drawing_buffer(),
            PhysicalSize {
                width: 1600,
                height: 1200
            }
        );
    }

    #[test]
    fn drawing_buffer_follows_custom_cap() {
        let size = DisplaySize::new(100.0, 50.0, 2.0).with_max_pixel_ratio(1.0);
        assert_eq!(
            size.drawing_buffer(),
            PhysicalSize {
                width: 100,
                height: 50
            }
        );
    }

    #[test]
    fn drawing_buffer_is_at_least_one_pixel() {
        let size = DisplaySize::new(0.0, 0.0, 2.0);
        assert_eq!(
            size.drawing_buffer(),
            PhysicalSize {
                width: 1,
                height: 1
            }
        );
    }

    #[test]
    fn from_physical_recovers_logical_size() {
        let size = DisplaySize::from_physical(2400, 1800, 3.0);
        assert!((size.logical_width - 800.0).abs() < 1e-9);
        assert!((size.logical_height - 600.0).abs() < 1e-9);
        assert_eq!(size.drawing_buffer().width, 1600);
    }

    #[test]
    fn resize_then_render_uses_new_viewport() {
        let mut size = DisplaySize::new(800.0, 600.0, 1.0);
        size.resize_physical(1024, 512);
        assert_eq!(
            size.drawing_buffer(),
            PhysicalSize {
                width: 1024,
                height: 512
            }
        );
        assert!((size.aspect() - 2.0).abs() < 1e-6);
    }

    #[test]
    fn scale_factor_change_keeps_logical_size() {
        let mut size = DisplaySize::new(640.0, 480.0, 1.0);
        size.set_scale_factor(2.0);
        assert_eq!(size.drawing_buffer().width, 1280);
        size.set_scale_factor(0.0);
        assert_eq!(size.scale_factor, 2.0);
    }

    #[test]
    fn degenerate_aspect_is_one() {
        assert_eq!(DisplaySize::new(0.0, 600.0, 1.0).aspect(), 1.0);
    }
}
