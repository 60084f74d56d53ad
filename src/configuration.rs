use std::fs::File;
use std::io::{
    BufReader,
    Read
};
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::manager::manager::{
    IJsonManager,
    IManager,
    Manager
};
use crate::manager::managererror::ManagerError;
use crate::notebook::loghornsetting::{
    LogHornSetting,
    LogHornSettingManager
};
use crate::notebook::lotkavolterrasetting::{
    LotkaVolterraSetting,
    LotkaVolterraSettingManager
};
use crate::notebook::seriessetting::{
    SeriesSetting,
    SeriesSettingManager
};
use crate::notebook::spiralsetting::{
    SpiralSetting,
    SpiralSettingManager
};

const DEFAULT_NOTEBOOKS: &str = include_str!("../config/notebooks.json");


#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigurationJsonProp {
    #[serde(default)]
    series: Vec<serde_json::Value>,
    #[serde(default)]
    spiral: Vec<serde_json::Value>,
    #[serde(default)]
    log_horn: Vec<serde_json::Value>,
    #[serde(default)]
    lotka_volterra: Vec<serde_json::Value>
}


/// Named notebook settings, one manager per notebook kind.
pub struct Configuration {
    series_setting_manager: Manager<SeriesSetting>,
    spiral_setting_manager: Manager<SpiralSetting>,
    log_horn_setting_manager: Manager<LogHornSetting>,
    lotka_volterra_setting_manager: Manager<LotkaVolterraSetting>
}


impl Configuration {
    pub fn new() -> Configuration {
        Configuration {
            series_setting_manager: SeriesSettingManager::new(),
            spiral_setting_manager: SpiralSettingManager::new(),
            log_horn_setting_manager: LogHornSettingManager::new(),
            lotka_volterra_setting_manager: LotkaVolterraSettingManager::new()
        }
    }

    /// The parameter values the notebooks ship with.
    pub fn default_notebooks() -> Result<Configuration, ManagerError> {
        let config = Configuration::new();
        config.from_str(DEFAULT_NOTEBOOKS)?;
        Ok(config)
    }

    pub fn series_setting_manager(&self) -> &Manager<SeriesSetting> {
        &self.series_setting_manager
    }

    pub fn spiral_setting_manager(&self) -> &Manager<SpiralSetting> {
        &self.spiral_setting_manager
    }

    pub fn log_horn_setting_manager(&self) -> &Manager<LogHornSetting> {
        &self.log_horn_setting_manager
    }

    pub fn lotka_volterra_setting_manager(&self) -> &Manager<LotkaVolterraSetting> {
        &self.lotka_volterra_setting_manager
    }

    pub fn from_reader<R: Read>(&self, reader: R) -> Result<(), ManagerError> {
        let json_prop: ConfigurationJsonProp = serde_json::from_reader(reader)?;
        self.insert_all(json_prop)
    }

    pub fn from_str(&self, json: &str) -> Result<(), ManagerError> {
        let json_prop: ConfigurationJsonProp = serde_json::from_str(json)?;
        self.insert_all(json_prop)
    }

    pub fn from_path(&self, file_path: &Path) -> Result<(), ManagerError> {
        let file = File::open(file_path)?;
        self.from_reader(BufReader::new(file))?;
        info!(path = %file_path.display(), "loaded notebook configuration");
        Ok(())
    }

    fn insert_all(&self, json_prop: ConfigurationJsonProp) -> Result<(), ManagerError> {
        self.series_setting_manager.insert_obj_from_json_vec(&json_prop.series)?;
        self.spiral_setting_manager.insert_obj_from_json_vec(&json_prop.spiral)?;
        self.log_horn_setting_manager.insert_obj_from_json_vec(&json_prop.log_horn)?;
        self.lotka_volterra_setting_manager.insert_obj_from_json_vec(&json_prop.lotka_volterra)?;
        Ok(())
    }

    /// Every registered setting as `(section, name)`, sections in file order.
    pub fn setting_names(&self) -> Vec<(&'static str, String)> {
        let sections = [
            ("series", self.series_setting_manager.names()),
            ("spiral", self.spiral_setting_manager.names()),
            ("log_horn", self.log_horn_setting_manager.names()),
            ("lotka_volterra", self.lotka_volterra_setting_manager.names())
        ];
        sections
            .into_iter()
            .flat_map(|(section, names)| names.into_iter().map(move |name| (section, name)))
            .collect()
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new()
    }
}


#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::math::series::termfunction::SeriesKind;

    #[test]
    fn test_default_notebooks_load() {
        let config = Configuration::default_notebooks().unwrap();
        let setting = config.series_setting_manager().get("exp_at_one").unwrap();
        assert_eq!(setting.kind(), SeriesKind::Exponential);
        assert_eq!(setting.max_terms(), 6);
        assert!(config.spiral_setting_manager().contains("archimedean"));
        assert!(config.log_horn_setting_manager().contains("horn"));
        assert!(config.lotka_volterra_setting_manager().contains("classic"));
    }

    #[test]
    fn test_sections_are_optional() {
        let config = Configuration::new();
        config.from_str(r#"{"spiral": [{"name": "s", "kind": "Archimedean", "b": 1.0,
                             "t_min": 0.0, "t_max": 1.0, "samples": 2}]}"#).unwrap();
        assert!(config.series_setting_manager().is_empty());
        assert_eq!(config.setting_names(), vec![("spiral", "s".to_owned())]);
    }

    #[test]
    fn test_invalid_entry_reports_its_name() {
        let config = Configuration::new();
        let result = config.from_str(
            r#"{"series": [{"name": "too_long", "kind": "Sine", "x": 1.0, "max_terms": 120}]}"#
        );
        match result {
            Err(ManagerError::InvalidSetting { name, .. }) => assert_eq!(name, "too_long"),
            _ => panic!("expected InvalidSetting"),
        }
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"series": [{{"name": "c", "kind": "Cosine", "x": 0.0, "max_terms": 3}}]}}"#).unwrap();
        let config = Configuration::new();
        config.from_path(file.path()).unwrap();
        assert_eq!(config.series_setting_manager().get("c").unwrap().x(), 0.0);
    }

    #[test]
    fn test_unknown_section_rejected() {
        let config = Configuration::new();
        let result = config.from_str(r#"{"spirals": []}"#);
        assert!(matches!(result, Err(ManagerError::JsonParseError(_))));
    }

    #[test]
    fn test_malformed_json() {
        let config = Configuration::new();
        assert!(matches!(config.from_str("{"), Err(ManagerError::JsonParseError(_))));
    }
}
