use serde::{Deserialize, Serialize};

/// The combined error type for configuration and for API errors
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq, Serialize)]
pub enum Error {
    #[error("Builder error: {0}")]
    Builder(BuilderError),

    #[error("Runtime error: {0}")]
    Runtime(RuntimeError),
}

impl Error {
    /// Whether the error was raised while decoding a response body.
    ///
    /// Every other runtime failure happens before a body is available to decode.
    pub fn is_deserialization(&self) -> bool {
        matches!(self, Error::Runtime(RuntimeError::Deserialization(_)))
    }
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq, Deserialize, Serialize)]
pub enum BuilderError {
    #[error("Failed to load configuration from environment variables, {0} is missing.")]
    MissingEnv(String),

    #[error("Failed to load configuration from environment variables: {0}")]
    InvalidEnv(String),

    #[error("Failed to load configuration from the provided environment file, could not read {0}")]
    InvalidEnvPath(String),

    #[error("Failed to build configuration, no account ID was provided")]
    MissingAccountId,

    #[error("Failed to build configuration, no access token was provided")]
    MissingToken,
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq, Deserialize, Serialize)]
pub enum RuntimeError {
    #[error("Failed to get valid response from server: {0}")]
    Response(String),

    #[error("Failed to deserialize the response: {0}")]
    Deserialization(String),

    #[error("Failed to parse item into valid URI: {0}")]
    InvalidUri(String),

    // The io::Error is not kept since it does not implement Clone, PartialEq, or Eq
    #[error("Failed to write the report: {0}")]
    Output(String),
}

impl From<RuntimeError> for Error {
    fn from(value: RuntimeError) -> Self {
        Error::Runtime(value)
    }
}

impl From<BuilderError> for Error {
    fn from(value: BuilderError) -> Self {
        Error::Builder(value)
    }
}

impl From<reqwest::Error> for Error {
    fn from(value: reqwest::Error) -> Self {
        tracing::debug!(error = ?value, "HTTP client error");
        Error::Runtime(RuntimeError::Response(value.to_string()))
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Error::Runtime(RuntimeError::Deserialization(value.to_string()))
    }
}

impl From<url::ParseError> for Error {
    fn from(value: url::ParseError) -> Self {
        Self::Runtime(RuntimeError::InvalidUri(value.to_string()))
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self::Runtime(RuntimeError::Output(value.to_string()))
    }
}

impl From<envy::Error> for Error {
    fn from(value: envy::Error) -> Self {
        match value {
            envy::Error::MissingValue(field) => {
                Self::Builder(BuilderError::MissingEnv(field.to_uppercase()))
            }
            other => Self::Builder(BuilderError::InvalidEnv(other.to_string())),
        }
    }
}
