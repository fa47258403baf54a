//! Error types for PharmaGuard

use thiserror::Error;

/// The main error type for PharmaGuard operations
#[derive(Debug, Error)]
pub enum HeroError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(String),

    #[error("TOML serialization error: {0}")]
    TomlSerError(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Value out of range: {field} must be between {min} and {max}, got {value}")]
    ValueOutOfRange {
        field: String,
        min: f64,
        max: f64,
        value: f64,
    },

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Render error: {0}")]
    RenderError(String),
}

/// Result type alias for PharmaGuard operations
pub type Result<T> = std::result::Result<T, HeroError>;

impl From<toml::de::Error> for HeroError {
    fn from(err: toml::de::Error) -> Self {
        HeroError::TomlParseError(err.to_string())
    }
}

impl From<toml::ser::Error> for HeroError {
    fn from(err: toml::ser::Error) -> Self {
        HeroError::TomlSerError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_message_names_field() {
        let err = HeroError::ValueOutOfRange {
            field: "opacity.max".into(),
            min: 0.0,
            max: 1.0,
            value: 1.5,
        };
        let msg = err.to_string();
        assert!(msg.contains("opacity.max"));
        assert!(msg.contains("1.5"));
    }

    #[test]
    fn toml_errors_convert() {
        let parse: std::result::Result<toml::Value, _> = toml::from_str("= nope");
        let err: HeroError = parse.unwrap_err().into();
        assert!(matches!(err, HeroError::TomlParseError(_)));
    }
}
