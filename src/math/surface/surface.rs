use nalgebra::Point3;

use crate::math::grid::linspace;

/// A surface in space parametrized over a rectangle of (u, v).
pub trait ParametricSurface {
    fn point(&self, u: f64, v: f64) -> Point3<f64>;

    /// Row-major mesh: one row per `u` sample, one column per `v` sample.
    fn sample(&self,
              u_range: (f64, f64),
              u_samples: usize,
              v_range: (f64, f64),
              v_samples: usize) -> Vec<Vec<Point3<f64>>> {
        let vs = linspace(v_range.0, v_range.1, v_samples);
        linspace(u_range.0, u_range.1, u_samples)
            .into_iter()
            .map(|u| vs.iter().map(|&v| self.point(u, v)).collect())
            .collect()
    }
}
