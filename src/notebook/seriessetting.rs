use serde::Deserialize;

use crate::manager::manager::Manager;
use crate::manager::managererror::ManagerError;
use crate::math::series::functionprovider::FunctionProvider;
use crate::math::series::seriesevaluator::{
    MAX_TERMS_CEILING,
    SeriesError,
    SeriesEvaluator,
    SeriesResult
};
use crate::math::series::termfunction::SeriesKind;

/// One Maclaurin table: which series, where, and how many terms.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeriesSetting {
    kind: SeriesKind,
    x: f64,
    max_terms: usize
}

impl SeriesSetting {
    pub fn new(kind: SeriesKind, x: f64, max_terms: usize) -> SeriesSetting {
        SeriesSetting { kind, x, max_terms }
    }

    pub fn kind(&self) -> SeriesKind {
        self.kind
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn max_terms(&self) -> usize {
        self.max_terms
    }

    pub fn validate(&self, name: &str) -> Result<(), ManagerError> {
        if self.max_terms == 0 || self.max_terms >= MAX_TERMS_CEILING {
            return Err(ManagerError::invalid_setting(
                name,
                format!("max_terms must lie in 1..{}, got {}", MAX_TERMS_CEILING, self.max_terms)
            ));
        }
        if !self.x.is_finite() {
            return Err(ManagerError::invalid_setting(name, "x must be finite"));
        }
        Ok(())
    }

    pub fn evaluate<P: FunctionProvider>(&self, evaluator: &SeriesEvaluator<P>) -> Result<SeriesResult, SeriesError> {
        evaluator.evaluate(&self.kind, self.x, self.max_terms)
    }
}


fn get_series_setting_from_json(name: &str, json_value: serde_json::Value) -> Result<SeriesSetting, ManagerError> {
    let setting: SeriesSetting = ManagerError::from_json_or_json_parse_error(json_value)?;
    setting.validate(name)?;
    Ok(setting)
}


pub struct SeriesSettingManager;

impl SeriesSettingManager {
    pub fn new() -> Manager<SeriesSetting> {
        Manager::new(get_series_setting_from_json)
    }
}
