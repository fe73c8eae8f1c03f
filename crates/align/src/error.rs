use thiserror::Error;

#[derive(Debug, Error)]
pub enum AlignError {
    /// TOML parse / deserialization error.
    #[error("config parse error: {0}")]
    ConfigParse(String),
    /// Config validation error (bad relation IRI, zero threshold, etc.).
    #[error("config validation error: {0}")]
    ConfigValidation(String),
}
