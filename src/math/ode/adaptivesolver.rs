use ivp::prelude::*;
use nalgebra::SVector;

use crate::math::grid::linspace;
use crate::math::ode::odeerror::OdeError;
use crate::math::ode::odesystem::{
    OdeSystem,
    Trajectory
};

pub const DEFAULT_TOLERANCE: f64 = 1e-10;


/// Exposes an `OdeSystem` through the slice interface `solve_ivp` drives.
struct SliceSystem<'a, S, const N: usize> {
    system: &'a S
}

impl<S, const N: usize> IVP for SliceSystem<'_, S, N> where
    S: OdeSystem<N> {
    fn ode(&self, x: f64, y: &[f64], dydx: &mut [f64]) {
        let derivative = self.system.derivative(x, &SVector::from_column_slice(y));
        dydx.copy_from_slice(derivative.as_slice());
    }
}


/// Dormand-Prince RK45 with error control. `steps` fixes only the output grid;
/// the integrator picks its own internal step sizes between samples.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AdaptiveSolver {
    steps: usize,
    rtol: f64,
    atol: f64
}

impl AdaptiveSolver {
    pub fn new(steps: usize) -> AdaptiveSolver {
        AdaptiveSolver { steps, rtol: DEFAULT_TOLERANCE, atol: DEFAULT_TOLERANCE }
    }

    pub fn with_tolerances(self, rtol: f64, atol: f64) -> Result<AdaptiveSolver, OdeError> {
        let valid = |tol: f64| tol.is_finite() && tol > 0.0;
        if !valid(rtol) || !valid(atol) {
            return Err(OdeError::InvalidTolerance { rtol, atol });
        }
        Ok(AdaptiveSolver { rtol, atol, ..self })
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn rtol(&self) -> f64 {
        self.rtol
    }

    pub fn atol(&self) -> f64 {
        self.atol
    }

    fn advance<S, const N: usize>(&self,
                                  system: &SliceSystem<'_, S, N>,
                                  t_from: f64,
                                  y: &SVector<f64, N>,
                                  t_to: f64) -> Result<SVector<f64, N>, OdeError>
        where S: OdeSystem<N> {
        let options = Options::builder()
            .method(Method::DOPRI5)
            .rtol(self.rtol)
            .atol(self.atol)
            .build();
        let solution = solve_ivp(system, t_from, t_to, y.as_slice(), options)
            .map_err(|err| OdeError::IntegrationFailed { t_from, t_to, reason: format!("{err:?}") })?;
        let last = solution.y.last().ok_or(OdeError::MissingState(t_to))?;
        Ok(SVector::from_column_slice(&last[..]))
    }

    /// Integrates from `(t0, y0)` to `t_end`, returning `steps + 1` evenly spaced
    /// samples that start with the initial state. Zero steps yields only the initial state.
    pub fn solve<S, const N: usize>(&self,
                                    system: &S,
                                    t0: f64,
                                    y0: SVector<f64, N>,
                                    t_end: f64) -> Result<Trajectory<N>, OdeError>
        where S: OdeSystem<N> {
        if self.steps == 0 {
            return Ok(Trajectory::new(vec![t0], vec![y0]));
        }

        let slice_system = SliceSystem { system };
        let times = linspace(t0, t_end, self.steps + 1);
        let mut states = Vec::with_capacity(times.len());
        states.push(y0);
        let mut y = y0;
        for window in times.windows(2) {
            y = self.advance(&slice_system, window[0], &y, window[1])?;
            states.push(y);
        }
        Ok(Trajectory::new(times, states))
    }
}
