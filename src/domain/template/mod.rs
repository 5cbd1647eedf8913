// Template module for RFC 6570-style URI templates
//
// This module provides parsing and expansion of templates using the simple,
// path-segment (`/`), query (`?`) and query-continuation (`&`) operators
// with the explode (`*`) modifier.

mod ast;
pub mod expander;
mod parser;

pub use ast::{Expression, Operator, Segment, Template, VarSpec};
pub use parser::TemplateParser;
