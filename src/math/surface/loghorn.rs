use nalgebra::Point3;

use crate::math::surface::surface::ParametricSurface;

/// Surface of revolution of y = ln(α) around the x axis.
///
/// Parameters are α (position along the axis, must be positive) and θ (the
/// rotation angle). The throat pinches to a point at α = 1.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LogHorn;

impl LogHorn {
    pub fn new() -> LogHorn {
        LogHorn
    }

    pub fn profile(&self, alpha: f64) -> f64 {
        alpha.ln()
    }
}

impl ParametricSurface for LogHorn {
    fn point(&self, alpha: f64, theta: f64) -> Point3<f64> {
        let radius = self.profile(alpha);
        let (sin, cos) = theta.sin_cos();
        Point3::new(alpha, radius * cos, radius * sin)
    }
}
