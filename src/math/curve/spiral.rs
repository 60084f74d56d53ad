use nalgebra::Point2;
use serde::{
    Deserialize,
    Serialize
};

use crate::math::curve::curve::ParametricCurve;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpiralKind {
    /// r = b·θ
    Archimedean,
    /// r = e^(b·θ)
    Logarithmic
}


/// A polar spiral swept at angular speed `w0`, so θ = w0·t.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spiral {
    kind: SpiralKind,
    b: f64,
    w0: f64
}

impl Spiral {
    pub fn new(kind: SpiralKind, b: f64, w0: f64) -> Spiral {
        Spiral { kind, b, w0 }
    }

    pub fn archimedean(b: f64) -> Spiral {
        Spiral::new(SpiralKind::Archimedean, b, 1.0)
    }

    pub fn logarithmic(b: f64) -> Spiral {
        Spiral::new(SpiralKind::Logarithmic, b, 1.0)
    }

    pub fn kind(&self) -> SpiralKind {
        self.kind
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn w0(&self) -> f64 {
        self.w0
    }

    pub fn angle(&self, t: f64) -> f64 {
        self.w0 * t
    }

    pub fn radius(&self, theta: f64) -> f64 {
        match self.kind {
            SpiralKind::Archimedean => self.b * theta,
            SpiralKind::Logarithmic => (self.b * theta).exp()
        }
    }
}

impl ParametricCurve for Spiral {
    fn point(&self, t: f64) -> Point2<f64> {
        let theta = self.angle(t);
        let r = self.radius(theta);
        let (sin, cos) = theta.sin_cos();
        Point2::new(r * cos, r * sin)
    }
}
