use nalgebra::Point2;

use crate::math::grid::linspace;

/// A plane curve parametrized by a real parameter.
pub trait ParametricCurve {
    fn point(&self, t: f64) -> Point2<f64>;

    fn sample(&self, t_min: f64, t_max: f64, samples: usize) -> Vec<Point2<f64>> {
        linspace(t_min, t_max, samples)
            .into_iter()
            .map(|t| self.point(t))
            .collect()
    }
}
