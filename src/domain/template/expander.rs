// Template expansion
//
// Expansion is total: unbound variables contribute nothing, and an
// expression whose variables are all unbound disappears, operator prefix
// included.

use crate::domain::parameters::{UriParameters, Value};

use super::ast::{Expression, Operator, Segment, VarSpec};

/// Render every segment in order against the given parameters
pub fn expand(segments: &[Segment], parameters: &UriParameters) -> String {
    let mut result = String::new();

    for segment in segments {
        match segment {
            Segment::Literal(s) => result.push_str(s),
            Segment::Expression(expr) => expand_expression(expr, parameters, &mut result),
        }
    }

    result
}

fn expand_expression(expr: &Expression, parameters: &UriParameters, out: &mut String) {
    let rendered: Vec<String> = expr
        .varspecs
        .iter()
        .filter_map(|spec| {
            let value = parameters.get(&spec.name).filter(|value| is_defined(value));
            if value.is_none() {
                tracing::trace!(name = %spec.name, "variable undefined, skipping");
            }
            value.map(|value| render_variable(expr.operator, spec, value))
        })
        .collect();

    if rendered.is_empty() {
        return;
    }

    out.push_str(expr.operator.prefix());
    out.push_str(&rendered.join(expr.operator.separator()));
}

// Lists and maps with no members count as undefined
fn is_defined(value: &Value) -> bool {
    match value {
        Value::Str(_) => true,
        Value::List(items) => !items.is_empty(),
        Value::Map(pairs) => !pairs.is_empty(),
    }
}

/// Render one bound variable. Each (shape, explode, named) combination is a
/// separate arm.
fn render_variable(operator: Operator, spec: &VarSpec, value: &Value) -> String {
    let name = spec.name.as_str();
    let separator = operator.separator();

    match (value, spec.exploded, operator.is_named()) {
        (Value::Str(v), _, false) => v.clone(),
        (Value::Str(v), _, true) => format!("{}={}", name, v),

        (Value::List(items), false, false) => items.join(","),
        (Value::List(items), false, true) => format!("{}={}", name, items.join(",")),
        (Value::List(items), true, false) => items.join(separator),
        (Value::List(items), true, true) => items
            .iter()
            .map(|item| format!("{}={}", name, item))
            .collect::<Vec<_>>()
            .join(separator),

        (Value::Map(pairs), false, false) => flatten_pairs(pairs),
        (Value::Map(pairs), false, true) => format!("{}={}", name, flatten_pairs(pairs)),
        (Value::Map(pairs), true, _) => pairs
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join(separator),
    }
}

// k1,v1,k2,v2,...
fn flatten_pairs(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .flat_map(|(k, v)| [k.as_str(), v.as_str()])
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(items: &[&str]) -> Value {
        Value::list(items)
    }

    fn map(pairs: &[(&str, &str)]) -> Value {
        Value::map(pairs.iter().copied())
    }

    fn render(operator: Operator, exploded: bool, value: Value) -> String {
        render_variable(operator, &VarSpec::new("x").with_explode(exploded), &value)
    }

    #[test]
    fn test_render_string() {
        let value = Value::Str("1".to_string());
        assert_eq!(render(Operator::None, false, value.clone()), "1");
        assert_eq!(render(Operator::Slash, true, value.clone()), "1");
        assert_eq!(render(Operator::Query, false, value.clone()), "x=1");
        assert_eq!(render(Operator::QueryCont, true, value), "x=1");
    }

    #[test]
    fn test_render_list() {
        let value = list(&["1", "2", "3"]);
        assert_eq!(render(Operator::None, false, value.clone()), "1,2,3");
        assert_eq!(render(Operator::None, true, value.clone()), "1,2,3");
        assert_eq!(render(Operator::Slash, false, value.clone()), "1,2,3");
        assert_eq!(render(Operator::Slash, true, value.clone()), "1/2/3");
        assert_eq!(render(Operator::Query, false, value.clone()), "x=1,2,3");
        assert_eq!(render(Operator::Query, true, value.clone()), "x=1&x=2&x=3");
        assert_eq!(render(Operator::QueryCont, true, value), "x=1&x=2&x=3");
    }

    #[test]
    fn test_render_map() {
        let value = map(&[("a", "1"), ("b", "2")]);
        assert_eq!(render(Operator::None, false, value.clone()), "a,1,b,2");
        assert_eq!(render(Operator::None, true, value.clone()), "a=1,b=2");
        assert_eq!(render(Operator::Slash, false, value.clone()), "a,1,b,2");
        assert_eq!(render(Operator::Slash, true, value.clone()), "a=1/b=2");
        assert_eq!(render(Operator::Query, false, value.clone()), "x=a,1,b,2");
        assert_eq!(render(Operator::Query, true, value.clone()), "a=1&b=2");
        assert_eq!(render(Operator::QueryCont, false, value), "x=a,1,b,2");
    }

    #[test]
    fn test_unbound_expression_renders_nothing() {
        let segments = vec![
            Segment::Literal("/path".to_string()),
            Segment::Expression(Expression::new(
                Operator::Query,
                vec![VarSpec::new("a"), VarSpec::new("b").with_explode(true)],
            )),
        ];
        assert_eq!(expand(&segments, &UriParameters::new()), "/path");
    }

    #[test]
    fn test_unbound_variables_leave_no_joiner_slot() {
        let segments = vec![Segment::Expression(Expression::new(
            Operator::Slash,
            vec![VarSpec::new("a"), VarSpec::new("b"), VarSpec::new("c")],
        ))];
        let params = UriParameters::new().param("a", "1").param("c", "3");
        assert_eq!(expand(&segments, &params), "/1/3");
    }

    #[test]
    fn test_empty_expression_renders_nothing() {
        let segments = vec![Segment::Expression(Expression::new(Operator::Query, Vec::new()))];
        let params = UriParameters::new().param("x", "1");
        assert_eq!(expand(&segments, &params), "");
    }

    #[test]
    fn test_empty_collections_are_undefined() {
        let segments = vec![
            Segment::Literal("/p".to_string()),
            Segment::Expression(Expression::new(
                Operator::Query,
                vec![
                    VarSpec::new("a"),
                    VarSpec::new("x").with_explode(true),
                    VarSpec::new("b"),
                ],
            )),
        ];
        let params = UriParameters::new()
            .param("a", "1")
            .bind("x", Value::List(Vec::new()))
            .param("b", "2");
        assert_eq!(expand(&segments, &params), "/p?a=1&b=2");

        let params = UriParameters::new().bind("x", Value::Map(Vec::new()));
        assert_eq!(expand(&segments, &params), "/p");
    }

    #[test]
    fn test_empty_exploded_list_drops_prefix() {
        let segments = vec![
            Segment::Literal("/p".to_string()),
            Segment::Expression(Expression::new(
                Operator::Query,
                vec![VarSpec::new("x").with_explode(true)],
            )),
        ];
        let params = UriParameters::new().bind("x", Value::List(Vec::new()));
        assert_eq!(expand(&segments, &params), "/p");
    }

    #[test]
    fn test_empty_string_is_defined() {
        let segments = vec![Segment::Expression(Expression::new(
            Operator::Query,
            vec![VarSpec::new("x")],
        ))];
        let params = UriParameters::new().param("x", "");
        assert_eq!(expand(&segments, &params), "?x=");
    }
}
