use nalgebra::Vector2;

use crate::math::ode::odesystem::OdeSystem;

/// Predator/prey dynamics. State is `[prey, predator]`:
///
/// ```text
/// prey'     = α·prey − β·prey·predator
/// predator' = δ·prey·predator − γ·predator
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LotkaVolterra {
    alpha: f64,
    beta: f64,
    delta: f64,
    gamma: f64
}

impl LotkaVolterra {
    pub fn new(alpha: f64, beta: f64, delta: f64, gamma: f64) -> LotkaVolterra {
        LotkaVolterra { alpha, beta, delta, gamma }
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn beta(&self) -> f64 {
        self.beta
    }

    pub fn delta(&self) -> f64 {
        self.delta
    }

    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// The non-trivial fixed point (γ/δ, α/β).
    pub fn equilibrium(&self) -> Vector2<f64> {
        Vector2::new(self.gamma / self.delta, self.alpha / self.beta)
    }

    /// First integral δx − γ ln x + βy − α ln y, constant along exact orbits.
    pub fn invariant(&self, state: &Vector2<f64>) -> f64 {
        let (prey, predator) = (state[0], state[1]);
        self.delta * prey - self.gamma * prey.ln() + self.beta * predator - self.alpha * predator.ln()
    }
}

impl OdeSystem<2> for LotkaVolterra {
    fn derivative(&self, _t: f64, y: &Vector2<f64>) -> Vector2<f64> {
        let (prey, predator) = (y[0], y[1]);
        Vector2::new(
            self.alpha * prey - self.beta * prey * predator,
            self.delta * prey * predator - self.gamma * predator
        )
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::ode::adaptivesolver::AdaptiveSolver;

    fn classic() -> LotkaVolterra {
        LotkaVolterra::new(1.1, 0.4, 0.1, 0.4)
    }

    #[test]
    fn test_equilibrium_is_stationary() {
        let system = classic();
        let fixed = system.equilibrium();
        assert!((fixed - Vector2::new(4.0, 2.75)).norm() < 1e-12);
        assert!(system.derivative(0.0, &fixed).norm() < 1e-12);
    }

    #[test]
    fn test_extinct_predators_let_prey_grow() {
        let system = classic();
        let d = system.derivative(0.0, &Vector2::new(5.0, 0.0));
        assert!((d[0] - 5.5).abs() < 1e-12);
        assert_eq!(d[1], 0.0);
    }

    #[test]
    fn test_invariant_is_conserved() {
        let system = classic();
        let y0 = Vector2::new(10.0, 10.0);
        let trajectory = AdaptiveSolver::new(500).solve(&system, 0.0, y0, 50.0).unwrap();
        let v0 = system.invariant(&y0);
        for (_, state) in trajectory.iter() {
            assert!((system.invariant(state) - v0).abs() < 1e-6);
            assert!(state[0] > 0.0 && state[1] > 0.0);
        }
    }
}
