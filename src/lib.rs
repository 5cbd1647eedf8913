//! RFC 6570-style URI templates.
//!
//! A template is parsed once into an immutable [`Template`] and expanded any
//! number of times against [`UriParameters`]:
//!
//! ```
//! use uritemplate::UriParameters;
//!
//! let template = uritemplate::parse("/api{/id}{?tags*}").unwrap();
//! let params = UriParameters::new()
//!     .param_display("id", 42)
//!     .param_list("tags", ["a", "b"]);
//!
//! assert_eq!(template.expand(&params), "/api/42?tags=a&tags=b");
//! ```
//!
//! Supported expressions are `{var}`, `{/var}`, `{?var}` and `{&var}`, each
//! taking a comma separated variable list where any variable may carry the
//! explode modifier (`{?color*}`). Values are not percent-encoded.

pub mod config;
pub mod domain;
pub mod error;

pub use domain::{Expression, Operator, Segment, Template, UriParameters, Value, VarSpec};
pub use error::{ParameterFileError, TemplateError};

/// Parse a template string
pub fn parse(template: &str) -> Result<Template, TemplateError> {
    Template::parse(template)
}
