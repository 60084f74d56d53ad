use serde::Deserialize;
use thiserror::Error;

/// Failures raised while loading or querying a name-keyed manager.
#[derive(Debug, Error)]
pub enum ManagerError {
    #[error("{0}")]
    IOError(#[from] std::io::Error),
    #[error("{0}")]
    JsonParseError(#[from] serde_json::Error),
    #[error("key '{0}' not found")]
    NameNotFoundError(String),
    #[error("setting '{name}' is invalid: {reason}")]
    InvalidSetting {
        name: String,
        reason: String
    }
}

impl ManagerError {
    pub fn from_json_or_json_parse_error <T> (json_value: serde_json::Value) -> Result<T, Self>
        where T : for<'a> Deserialize<'a> {
        serde_json::from_value(json_value).map_err(ManagerError::JsonParseError)
    }

    pub fn map_elem_not_found(name: &str) -> ManagerError {
        ManagerError::NameNotFoundError(name.to_owned())
    }

    pub fn invalid_setting(name: &str, reason: impl Into<String>) -> ManagerError {
        ManagerError::InvalidSetting {
            name: name.to_owned(),
            reason: reason.into()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let error = ManagerError::map_elem_not_found("exp_at_one");
        assert_eq!(error.to_string(), "key 'exp_at_one' not found");
    }

    #[test]
    fn test_invalid_setting_message() {
        let error = ManagerError::invalid_setting("spiral", "samples must be at least 2");
        assert_eq!(error.to_string(), "setting 'spiral' is invalid: samples must be at least 2");
    }

    #[test]
    fn test_json_parse_error_is_wrapped() {
        let result: Result<u32, ManagerError> =
            ManagerError::from_json_or_json_parse_error(serde_json::json!("not a number"));
        assert!(matches!(result, Err(ManagerError::JsonParseError(_))));
    }
}
