use crate::gpu::PhysicalSize;

/// Log the first frame presentation (once only).
pub(super) fn log_first_frame(size: PhysicalSize, format: wgpu::TextureFormat, cubemap: u32) {
    static PRESENTED: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(false);
    if !PRESENTED.swap(true, std::sync::atomic::Ordering::Relaxed) {
        tracing::info!(
            "First frame presented ({}x{}, format={:?}, cubemap={}px)",
            size.width,
            size.height,
            format,
            cubemap,
        );
    }
}

/// What to do when the surface refuses to hand out a texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum SurfaceRecovery {
    /// Reconfigure and drop this frame.
    Reconfigure,
    /// Drop this frame and try again on the next tick.
    Skip,
    Fatal,
}

pub(super) fn surface_recovery(error: &wgpu::SurfaceError) -> SurfaceRecovery {
    match error {
        wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => SurfaceRecovery::Reconfigure,
        wgpu::SurfaceError::OutOfMemory => SurfaceRecovery::Fatal,
        _ => SurfaceRecovery::Skip,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lost_and_outdated_surfaces_are_reconfigured() {
        assert_eq!(
            surface_recovery(&wgpu::SurfaceError::Lost),
            SurfaceRecovery::Reconfigure
        );
        assert_eq!(
            surface_recovery(&wgpu::SurfaceError::Outdated),
            SurfaceRecovery::Reconfigure
        );
    }

    #[test]
    fn timeouts_skip_the_frame() {
        assert_eq!(
            surface_recovery(&wgpu::SurfaceError::Timeout),
            SurfaceRecovery::Skip
        );
    }

    #[test]
    fn out_of_memory_is_fatal() {
        assert_eq!(
            surface_recovery(&wgpu::SurfaceError::OutOfMemory),
            SurfaceRecovery::Fatal
        );
    }
}
