use nalgebra::Point2;
use serde::Deserialize;

use crate::manager::manager::Manager;
use crate::manager::managererror::ManagerError;
use crate::math::curve::curve::ParametricCurve;
use crate::math::curve::spiral::{
    Spiral,
    SpiralKind
};

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpiralSetting {
    kind: SpiralKind,
    b: f64,
    #[serde(default = "default_w0")]
    w0: f64,
    t_min: f64,
    t_max: f64,
    samples: usize
}

fn default_w0() -> f64 {
    1.0
}

impl SpiralSetting {
    pub fn new(spiral: Spiral, t_min: f64, t_max: f64, samples: usize) -> SpiralSetting {
        SpiralSetting {
            kind: spiral.kind(),
            b: spiral.b(),
            w0: spiral.w0(),
            t_min,
            t_max,
            samples
        }
    }

    pub fn spiral(&self) -> Spiral {
        Spiral::new(self.kind, self.b, self.w0)
    }

    pub fn t_range(&self) -> (f64, f64) {
        (self.t_min, self.t_max)
    }

    pub fn samples(&self) -> usize {
        self.samples
    }

    pub fn validate(&self, name: &str) -> Result<(), ManagerError> {
        let parameters = [self.b, self.w0, self.t_min, self.t_max];
        if parameters.iter().any(|p| !p.is_finite()) {
            return Err(ManagerError::invalid_setting(name, "spiral parameters must be finite"));
        }
        if self.t_max <= self.t_min {
            return Err(ManagerError::invalid_setting(name, "t_max must exceed t_min"));
        }
        if self.samples < 2 {
            return Err(ManagerError::invalid_setting(name, "samples must be at least 2"));
        }
        Ok(())
    }

    pub fn sample(&self) -> Vec<Point2<f64>> {
        self.spiral().sample(self.t_min, self.t_max, self.samples)
    }
}


fn get_spiral_setting_from_json(name: &str, json_value: serde_json::Value) -> Result<SpiralSetting, ManagerError> {
    let setting: SpiralSetting = ManagerError::from_json_or_json_parse_error(json_value)?;
    setting.validate(name)?;
    Ok(setting)
}


pub struct SpiralSettingManager;

impl SpiralSettingManager {
    pub fn new() -> Manager<SpiralSetting> {
        Manager::new(get_spiral_setting_from_json)
    }
}
