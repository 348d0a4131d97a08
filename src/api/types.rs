use yupik_core::exceptions::ExceptionConfigError;
use yupik_core::settings::SettingsError;
use yupik_core::translit::ConventionParseError;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("invalid data: {msg}")]
    InvalidData { msg: String },
}

impl From<SettingsError> for EngineError {
    fn from(e: SettingsError) -> Self {
        EngineError::InvalidData {
            msg: format!("settings: {e}"),
        }
    }
}

impl From<ExceptionConfigError> for EngineError {
    fn from(e: ExceptionConfigError) -> Self {
        EngineError::InvalidData {
            msg: format!("exceptions: {e}"),
        }
    }
}

impl From<ConventionParseError> for EngineError {
    fn from(e: ConventionParseError) -> Self {
        EngineError::InvalidData { msg: e.to_string() }
    }
}
