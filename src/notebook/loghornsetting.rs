use nalgebra::Point3;
use serde::Deserialize;

use crate::manager::manager::Manager;
use crate::manager::managererror::ManagerError;
use crate::math::surface::loghorn::LogHorn;
use crate::math::surface::surface::ParametricSurface;

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogHornSetting {
    alpha_min: f64,
    alpha_max: f64,
    alpha_samples: usize,
    theta_min: f64,
    theta_max: f64,
    theta_samples: usize
}

impl LogHornSetting {
    pub fn new(alpha_range: (f64, f64),
               alpha_samples: usize,
               theta_range: (f64, f64),
               theta_samples: usize) -> LogHornSetting {
        LogHornSetting {
            alpha_min: alpha_range.0,
            alpha_max: alpha_range.1,
            alpha_samples,
            theta_min: theta_range.0,
            theta_max: theta_range.1,
            theta_samples
        }
    }

    pub fn alpha_range(&self) -> (f64, f64) {
        (self.alpha_min, self.alpha_max)
    }

    pub fn theta_range(&self) -> (f64, f64) {
        (self.theta_min, self.theta_max)
    }

    pub fn validate(&self, name: &str) -> Result<(), ManagerError> {
        let parameters = [self.alpha_min, self.alpha_max, self.theta_min, self.theta_max];
        if parameters.iter().any(|p| !p.is_finite()) {
            return Err(ManagerError::invalid_setting(name, "horn parameters must be finite"));
        }
        // ln is undefined at and below zero.
        if self.alpha_min <= 0.0 {
            return Err(ManagerError::invalid_setting(name, "alpha_min must be positive"));
        }
        if self.alpha_max <= self.alpha_min || self.theta_max <= self.theta_min {
            return Err(ManagerError::invalid_setting(name, "ranges must be increasing"));
        }
        if self.alpha_samples < 2 || self.theta_samples < 2 {
            return Err(ManagerError::invalid_setting(name, "samples must be at least 2"));
        }
        Ok(())
    }

    pub fn sample(&self) -> Vec<Vec<Point3<f64>>> {
        LogHorn::new().sample(
            self.alpha_range(),
            self.alpha_samples,
            self.theta_range(),
            self.theta_samples
        )
    }
}


fn get_log_horn_setting_from_json(name: &str, json_value: serde_json::Value) -> Result<LogHornSetting, ManagerError> {
    let setting: LogHornSetting = ManagerError::from_json_or_json_parse_error(json_value)?;
    setting.validate(name)?;
    Ok(setting)
}


pub struct LogHornSettingManager;

impl LogHornSettingManager {
    pub fn new() -> Manager<LogHornSetting> {
        Manager::new(get_log_horn_setting_from_json)
    }
}
