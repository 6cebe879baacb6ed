//! Cubemap faces and the 90 degree cameras that render them.

use glam::{Mat4, Vec3};

/// Cube faces in wgpu array-layer order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CubeFace {
    PositiveX,
    NegativeX,
    PositiveY,
    NegativeY,
    PositiveZ,
    NegativeZ,
}

impl CubeFace {
    pub const ALL: [CubeFace; 6] = [
        CubeFace::PositiveX,
        CubeFace::NegativeX,
        CubeFace::PositiveY,
        CubeFace::NegativeY,
        CubeFace::PositiveZ,
        CubeFace::NegativeZ,
    ];

    /// Array layer of this face in a cube texture.
    pub fn layer(&self) -> u32 {
        match self {
            CubeFace::PositiveX => 0,
            CubeFace::NegativeX => 1,
            CubeFace::PositiveY => 2,
            CubeFace::NegativeY => 3,
            CubeFace::PositiveZ => 4,
            CubeFace::NegativeZ => 5,
        }
    }

    pub fn direction(&self) -> Vec3 {
        match self {
            CubeFace::PositiveX => Vec3::X,
            CubeFace::NegativeX => Vec3::NEG_X,
            CubeFace::PositiveY => Vec3::Y,
            CubeFace::NegativeY => Vec3::NEG_Y,
            CubeFace::PositiveZ => Vec3::Z,
            CubeFace::NegativeZ => Vec3::NEG_Z,
        }
    }

    /// Up vector that puts texel row 0 where cube sampling expects it.
    pub fn up(&self) -> Vec3 {
        match self {
            CubeFace::PositiveY => Vec3::NEG_Z,
            CubeFace::NegativeY => Vec3::Z,
            _ => Vec3::Y,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CubeFace::PositiveX => "+x",
            CubeFace::NegativeX => "-x",
            CubeFace::PositiveY => "+y",
            CubeFace::NegativeY => "-y",
            CubeFace::PositiveZ => "+z",
            CubeFace::NegativeZ => "-z",
        }
    }

    /// View-projection for this face seen from `eye`.
    ///
    /// Left-handed, so screen right follows the cube's `s` axis. This
    /// mirrors the scene, which flips triangle winding for these renders.
    pub fn view_projection(&self, eye: Vec3, near: f32, far: f32) -> Mat4 {
        let projection = Mat4::perspective_lh(std::f32::consts::FRAC_PI_2, 1.0, near, far);
        projection * Mat4::look_to_lh(eye, self.direction(), self.up())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layers_follow_wgpu_order() {
        let layers: Vec<u32> = CubeFace::ALL.iter().map(CubeFace::layer).collect();
        assert_eq!(layers, [0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn face_direction_projects_to_center() {
        let eye = Vec3::new(0.5, -1.0, 2.0);
        for face in CubeFace::ALL {
            let vp = face.view_projection(eye, 0.1, 10.0);
            let ndc = vp.project_point3(eye + face.direction());
            assert!(ndc.x.abs() < 1e-5, "{}", face.label());
            assert!(ndc.y.abs() < 1e-5, "{}", face.label());
            assert!(ndc.z > 0.0 && ndc.z < 1.0, "{}", face.label());
        }
    }

    #[test]
    fn up_vector_maps_to_top_of_face() {
        for face in CubeFace::ALL {
            let vp = face.view_projection(Vec3::ZERO, 0.1, 10.0);
            let ndc = vp.project_point3(face.direction() + face.up() * 0.5);
            assert!(ndc.y > 0.0, "{}", face.label());
            assert!(ndc.x.abs() < 1e-5, "{}", face.label());
        }
    }

    #[test]
    fn positive_x_face_has_negative_z_on_the_right() {
        let vp = CubeFace::PositiveX.view_projection(Vec3::ZERO, 0.1, 10.0);
        let ndc = vp.project_point3(Vec3::new(1.0, 0.0, -0.5));
        assert!(ndc.x > 0.0);
    }

    #[test]
    fn positive_y_face_has_positive_x_on_the_right() {
        let vp = CubeFace::PositiveY.view_projection(Vec3::ZERO, 0.1, 10.0);
        let ndc = vp.project_point3(Vec3::new(0.5, 1.0, 0.0));
        assert!(ndc.x > 0.0);
    }

    #[test]
    fn face_frustums_cover_ninety_degrees() {
        let vp = CubeFace::PositiveZ.view_projection(Vec3::ZERO, 0.1, 10.0);
        let edge = vp.project_point3(Vec3::new(1.0, 0.0, 1.0));
        assert!((edge.x.abs() - 1.0).abs() < 1e-4);
    }
}
