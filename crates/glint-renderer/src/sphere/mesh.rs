//! UV sphere generation.
//!
//! Produces a shared-vertex grid of `(width + 1) * (height + 1)` vertices
//! with an index buffer. The seam column is duplicated so UVs wrap
//! cleanly, and the degenerate triangles at both poles are skipped.

use std::f32::consts::{PI, TAU};

use super::types::{SphereGeometry, SphereVertex};

/// Generate a sphere of `radius` centered at the origin.
///
/// `width_segments` is clamped to at least 3, `height_segments` to at
/// least 2. North pole is `(0, radius, 0)`; triangles wind counter-clockwise
/// seen from outside.
pub fn generate_sphere(radius: f32, width_segments: u32, height_segments: u32) -> SphereGeometry {
    let width = width_segments.max(3);
    let height = height_segments.max(2);

    let mut vertices = Vec::with_capacity(((width + 1) * (height + 1)) as usize);
    for iy in 0..=height {
        let v = iy as f32 / height as f32;
        // Pole vertices sit between their neighbours in U
        let u_offset = if iy == 0 {
            0.5 / width as f32
        } else if iy == height {
            -0.5 / width as f32
        } else {
            0.0
        };

        for ix in 0..=width {
            let u = ix as f32 / width as f32;
            let (sin_phi, cos_phi) = (u * TAU).sin_cos();
            let (sin_theta, cos_theta) = (v * PI).sin_cos();

            let normal = [-cos_phi * sin_theta, cos_theta, sin_phi * sin_theta];
            vertices.push(SphereVertex {
                position: normal.map(|c| c * radius),
                normal,
                uv: [u + u_offset, 1.0 - v],
            });
        }
    }

    let row = width + 1;
    let mut indices = Vec::with_capacity((width * (height - 1) * 6) as usize);
    for iy in 0..height {
        for ix in 0..width {
            let a = iy * row + ix + 1;
            let b = iy * row + ix;
            let c = (iy + 1) * row + ix;
            let d = (iy + 1) * row + ix + 1;

            if iy != 0 {
                indices.extend_from_slice(&[a, b, d]);
            }
            if iy != height - 1 {
                indices.extend_from_slice(&[b, c, d]);
            }
        }
    }

    SphereGeometry {
        radius,
        vertices,
        indices,
    }
}
