// Error handling for uritemplate

use thiserror::Error;

/// Errors produced while parsing a template string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// An opening `{` was never closed before the end of input
    #[error("Malformed template: unterminated expression starting at position {position}")]
    MalformedTemplate { position: usize },
}

/// Errors produced while loading parameters from a YAML or JSON document
#[derive(Error, Debug)]
pub enum ParameterFileError {
    #[error("Could not read parameter file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid YAML parameters: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid JSON parameters: {0}")]
    Json(#[from] serde_json::Error),
}
