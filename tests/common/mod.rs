// Common test utilities shared across test files

use serde_json::json;
use uritemplate::UriParameters;

/// The parameter set used by the combined path and query scenarios
#[allow(dead_code)]
pub fn color_parameters() -> UriParameters {
    UriParameters::new()
        .param("hello", "francesco")
        .param_json("coordinates", &json!(["10", "20"]))
        .param_json("color", &json!({"r": 1, "g": 2, "b": 1}))
        .param_json("secondColor", &json!({"r": 255, "g": 255, "b": 255}))
}

/// `{x: ["1","2","3"]}`
#[allow(dead_code)]
pub fn list_parameters() -> UriParameters {
    UriParameters::new().param_list("x", ["1", "2", "3"])
}

/// `{x: {"a": 1, "b": 2}}`
#[allow(dead_code)]
pub fn map_parameters() -> UriParameters {
    UriParameters::new().param_json("x", &json!({"a": 1, "b": 2}))
}

/// Parse and expand in one step
#[allow(dead_code)]
pub fn expand(template: &str, params: &UriParameters) -> String {
    uritemplate::parse(template)
        .expect("Failed to parse template")
        .expand(params)
}
