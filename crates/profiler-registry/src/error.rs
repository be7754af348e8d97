//! Error types for the profiler registry.

use thiserror::Error;

/// CLI exit code for configuration errors.
pub const EXIT_CONFIG_ERROR: u8 = 1;
/// CLI exit code for unknown dialect or converter names.
pub const EXIT_UNKNOWN_NAME: u8 = 2;
/// CLI exit code for scalar conversion failures.
pub const EXIT_CONVERSION_ERROR: u8 = 3;
/// CLI exit code for file system errors.
pub const EXIT_IO_ERROR: u8 = 7;

/// Main error type for registry operations.
///
/// Classification predicates and registry lookups on the closed enums never
/// fail. Errors only come from parsing names supplied from outside the
/// process, running scalar converters, and loading configuration.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Configuration error (invalid YAML, missing fields, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Service type with no registered dialect
    #[error("No dialect registered for service type '{0}'")]
    UnknownDialect(String),

    /// Name outside the custom type registry
    #[error("No converter registered under '{0}' (expected one of BYTES, UUID, BYTEA)")]
    UnknownConverter(String),

    /// Catalog or native type name that could not be parsed
    #[error("Unknown {kind} type '{name}'")]
    UnknownType { kind: &'static str, name: String },

    /// A scalar converter rejected a value
    #[error("Conversion failed in {converter}: {message}")]
    Conversion { converter: String, message: String },

    /// IO error (file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization/deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RegistryError {
    /// Create a Conversion error
    pub fn conversion(converter: impl Into<String>, message: impl Into<String>) -> Self {
        RegistryError::Conversion {
            converter: converter.into(),
            message: message.into(),
        }
    }

    /// Create an UnknownType error for a catalog or native type name
    pub fn unknown_type(kind: &'static str, name: impl Into<String>) -> Self {
        RegistryError::UnknownType {
            kind,
            name: name.into(),
        }
    }

    /// Process exit code the CLI reports for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            RegistryError::Config(_) | RegistryError::Yaml(_) | RegistryError::Json(_) => {
                EXIT_CONFIG_ERROR
            }
            RegistryError::UnknownDialect(_)
            | RegistryError::UnknownConverter(_)
            | RegistryError::UnknownType { .. } => EXIT_UNKNOWN_NAME,
            RegistryError::Conversion { .. } => EXIT_CONVERSION_ERROR,
            RegistryError::Io(_) => EXIT_IO_ERROR,
        }
    }

    /// Format error with full details including error chain
    pub fn format_detailed(&self) -> String {
        let mut output = format!("Error: {}\n", self);

        let mut source = std::error::Error::source(self);
        let mut depth = 1;
        while let Some(err) = source {
            output.push_str(&format!("\nCaused by:\n  {}: {}", depth, err));
            source = err.source();
            depth += 1;
        }

        output
    }
}

/// Result type alias for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(RegistryError::Config("x".into()).exit_code(), EXIT_CONFIG_ERROR);
        assert_eq!(
            RegistryError::UnknownDialect("Foo".into()).exit_code(),
            EXIT_UNKNOWN_NAME
        );
        assert_eq!(
            RegistryError::conversion("UUID", "bad").exit_code(),
            EXIT_CONVERSION_ERROR
        );
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        assert_eq!(RegistryError::from(io).exit_code(), EXIT_IO_ERROR);
    }

    #[test]
    fn test_format_detailed_includes_cause() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "profiler.yaml");
        let err = RegistryError::from(io);
        let detailed = err.format_detailed();
        assert!(detailed.starts_with("Error: IO error"));
        assert!(detailed.contains("profiler.yaml"));
    }

    #[test]
    fn test_unknown_converter_message_lists_names() {
        let err = RegistryError::UnknownConverter("BLOB".into());
        assert!(err.to_string().contains("BYTES, UUID, BYTEA"));
    }
}
