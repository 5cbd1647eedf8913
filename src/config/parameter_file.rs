// Parameter files: a YAML or JSON mapping of variable name to value
//
//   a: 1
//   d: [4, 5]
//   color:
//     r: 1
//     g: 2
//
// Scalars bind as strings, sequences as lists and mappings as maps, in
// document order. `null` leaves the name unbound.

use std::path::Path;

use crate::domain::parameters::UriParameters;
use crate::error::ParameterFileError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterFormat {
    Yaml,
    Json,
}

impl ParameterFormat {
    /// Pick the format from the file extension. Anything but `.json` is YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ParameterFormat::Json,
            _ => ParameterFormat::Yaml,
        }
    }
}

pub fn parse_parameters(
    text: &str,
    format: ParameterFormat,
) -> Result<UriParameters, ParameterFileError> {
    let params = match format {
        ParameterFormat::Yaml => serde_yaml::from_str(text)?,
        ParameterFormat::Json => serde_json::from_str(text)?,
    };
    Ok(params)
}

pub fn load_parameters(path: impl AsRef<Path>) -> Result<UriParameters, ParameterFileError> {
    let path = path.as_ref();
    let format = ParameterFormat::from_path(path);
    let text = std::fs::read_to_string(path)?;
    let params = parse_parameters(&text, format)?;
    tracing::debug!(
        path = %path.display(),
        ?format,
        count = params.len(),
        "loaded template parameters"
    );
    Ok(params)
}
