use nalgebra::Vector2;
use serde::Deserialize;
use tracing::debug;

use crate::manager::manager::Manager;
use crate::manager::managererror::ManagerError;
use crate::math::ode::adaptivesolver::{
    AdaptiveSolver,
    DEFAULT_TOLERANCE
};
use crate::math::ode::lotkavolterra::LotkaVolterra;
use crate::math::ode::odeerror::OdeError;
use crate::math::ode::odesystem::Trajectory;

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LotkaVolterraSetting {
    alpha: f64,
    beta: f64,
    delta: f64,
    gamma: f64,
    prey0: f64,
    predator0: f64,
    #[serde(default)]
    t_start: f64,
    t_end: f64,
    steps: usize,
    #[serde(default = "default_tolerance")]
    rtol: f64,
    #[serde(default = "default_tolerance")]
    atol: f64
}

fn default_tolerance() -> f64 {
    DEFAULT_TOLERANCE
}

impl LotkaVolterraSetting {
    pub fn new(system: LotkaVolterra,
               initial: Vector2<f64>,
               t_end: f64,
               steps: usize) -> LotkaVolterraSetting {
        LotkaVolterraSetting {
            alpha: system.alpha(),
            beta: system.beta(),
            delta: system.delta(),
            gamma: system.gamma(),
            prey0: initial[0],
            predator0: initial[1],
            t_start: 0.0,
            t_end,
            steps,
            rtol: DEFAULT_TOLERANCE,
            atol: DEFAULT_TOLERANCE
        }
    }

    pub fn system(&self) -> LotkaVolterra {
        LotkaVolterra::new(self.alpha, self.beta, self.delta, self.gamma)
    }

    pub fn initial_state(&self) -> Vector2<f64> {
        Vector2::new(self.prey0, self.predator0)
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn validate(&self, name: &str) -> Result<(), ManagerError> {
        let rates = [self.alpha, self.beta, self.delta, self.gamma];
        if rates.iter().any(|r| !r.is_finite() || *r <= 0.0) {
            return Err(ManagerError::invalid_setting(name, "rates must be positive"));
        }
        if !(self.prey0 > 0.0 && self.predator0 > 0.0) || !self.prey0.is_finite() || !self.predator0.is_finite() {
            return Err(ManagerError::invalid_setting(name, "initial populations must be positive"));
        }
        if !self.t_start.is_finite() || !self.t_end.is_finite() || self.t_end <= self.t_start {
            return Err(ManagerError::invalid_setting(name, "t_end must exceed t_start"));
        }
        if self.steps == 0 {
            return Err(ManagerError::invalid_setting(name, "steps must be positive"));
        }
        self.solver().map_err(|err| ManagerError::invalid_setting(name, err.to_string()))?;
        Ok(())
    }

    fn solver(&self) -> Result<AdaptiveSolver, OdeError> {
        AdaptiveSolver::new(self.steps).with_tolerances(self.rtol, self.atol)
    }

    /// Samples the populations on `steps + 1` evenly spaced times over `[t_start, t_end]`.
    pub fn solve(&self) -> Result<Trajectory<2>, OdeError> {
        let system = self.system();
        let trajectory = self.solver()?.solve(&system, self.t_start, self.initial_state(), self.t_end)?;
        if let Some((_, last)) = trajectory.last() {
            debug!(
                steps = self.steps,
                rtol = self.rtol,
                atol = self.atol,
                invariant_drift = system.invariant(last) - system.invariant(&self.initial_state()),
                "integrated Lotka-Volterra system"
            );
        }
        Ok(trajectory)
    }
}


fn get_lotka_volterra_setting_from_json(name: &str, json_value: serde_json::Value) -> Result<LotkaVolterraSetting, ManagerError> {
    let setting: LotkaVolterraSetting = ManagerError::from_json_or_json_parse_error(json_value)?;
    setting.validate(name)?;
    Ok(setting)
}


pub struct LotkaVolterraSettingManager;

impl LotkaVolterraSettingManager {
    pub fn new() -> Manager<LotkaVolterraSetting> {
        Manager::new(get_lotka_volterra_setting_from_json)
    }
}
