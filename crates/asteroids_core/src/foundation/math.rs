//! Math utilities and types
//!
//! Provides the fundamental 2D math types used by the simulation.

pub use nalgebra::Vector2;

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// Unit vector pointing along a heading angle (radians, x-axis zero,
/// clockwise-positive in screen coordinates).
pub fn heading_vector(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_heading_vector_axes() {
        let right = heading_vector(0.0);
        assert_relative_eq!(right.x, 1.0);
        assert_relative_eq!(right.y, 0.0);

        let up = heading_vector(-std::f32::consts::FRAC_PI_2);
        assert_relative_eq!(up.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(up.y, -1.0);
    }

    #[test]
    fn test_heading_vector_is_unit_length() {
        let v = heading_vector(1.234);
        assert_relative_eq!(v.norm(), 1.0, epsilon = 1e-6);
    }
}
