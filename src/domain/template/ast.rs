// Abstract Syntax Tree types for URI templates

use std::fmt;
use std::str::FromStr;

use crate::domain::parameters::UriParameters;
use crate::error::TemplateError;

use super::expander;
use super::parser::TemplateParser;

/// A parsed template: the source text plus its segments in source order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    segments: Vec<Segment>,
}

impl Template {
    pub(crate) fn new(source: String, segments: Vec<Segment>) -> Self {
        Self { source, segments }
    }

    /// Parse a template string
    pub fn parse(template: &str) -> Result<Self, TemplateError> {
        TemplateParser::parse(template)
    }

    /// Expand the template against a set of parameters. Unbound variables
    /// contribute nothing.
    pub fn expand(&self, parameters: &UriParameters) -> String {
        expander::expand(&self.segments, parameters)
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Get all variables in this template
    pub fn variables(&self) -> Vec<&VarSpec> {
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Expression(expr) => Some(expr.varspecs.iter()),
                Segment::Literal(_) => None,
            })
            .flatten()
            .collect()
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl FromStr for Template {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Template::parse(s)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// A template consists of literal strings and expressions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Expression(Expression),
}

/// A `{...}` expression: an operator and the variables it references
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    pub operator: Operator,
    pub varspecs: Vec<VarSpec>,
}

impl Expression {
    pub fn new(operator: Operator, varspecs: Vec<VarSpec>) -> Self {
        Self { operator, varspecs }
    }
}

/// A single variable reference inside an expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarSpec {
    pub name: String,
    pub exploded: bool,
}

impl VarSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            exploded: false,
        }
    }

    pub fn with_explode(mut self, exploded: bool) -> Self {
        self.exploded = exploded;
        self
    }
}

/// Expression operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `{x}`
    None,
    /// `{/x}`
    Slash,
    /// `{?x}`
    Query,
    /// `{&x}`
    QueryCont,
}

impl Operator {
    /// Recognise an operator character at the start of an expression body
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '/' => Some(Operator::Slash),
            '?' => Some(Operator::Query),
            '&' => Some(Operator::QueryCont),
            _ => None,
        }
    }

    /// Emitted before the expression when at least one variable is bound
    pub fn prefix(self) -> &'static str {
        match self {
            Operator::None => "",
            Operator::Slash => "/",
            Operator::Query => "?",
            Operator::QueryCont => "&",
        }
    }

    /// Joins variables, and elements of exploded values
    pub fn separator(self) -> &'static str {
        match self {
            Operator::None => ",",
            Operator::Slash => "/",
            Operator::Query | Operator::QueryCont => "&",
        }
    }

    /// Whether values render as `name=value` pairs
    pub fn is_named(self) -> bool {
        matches!(self, Operator::Query | Operator::QueryCont)
    }
}
