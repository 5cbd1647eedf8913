// Template parser: a single left-to-right scan over the template string

use crate::error::TemplateError;

use super::ast::{Expression, Operator, Segment, Template, VarSpec};

pub struct TemplateParser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> TemplateParser<'a> {
    pub fn parse(template: &'a str) -> Result<Template, TemplateError> {
        let mut parser = Self {
            input: template,
            pos: 0,
        };
        let segments = parser.parse_segments()?;
        tracing::debug!(
            template,
            segments = segments.len(),
            "parsed URI template"
        );
        Ok(Template::new(template.to_string(), segments))
    }

    fn parse_segments(&mut self) -> Result<Vec<Segment>, TemplateError> {
        let mut segments = Vec::new();
        let mut literal_buf = String::new();

        while let Some(ch) = self.peek_char() {
            if ch == '{' {
                // Start of expression - flush literal buffer first
                if !literal_buf.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal_buf)));
                }
                let expr = self.parse_expression()?;
                segments.push(Segment::Expression(expr));
            } else {
                literal_buf.push(ch);
                self.pos += ch.len_utf8();
            }
        }

        if !literal_buf.is_empty() {
            segments.push(Segment::Literal(literal_buf));
        }

        Ok(segments)
    }

    fn parse_expression(&mut self) -> Result<Expression, TemplateError> {
        let start = self.pos;
        // Consume opening {
        self.pos += 1;

        // Expressions do not nest: the body ends at the first closing brace
        let body_len = self.input[self.pos..]
            .find('}')
            .ok_or(TemplateError::MalformedTemplate { position: start })?;
        let body = &self.input[self.pos..self.pos + body_len];
        self.pos += body_len + 1;

        let mut chars = body.chars();
        let (operator, var_list) = match chars.next().and_then(Operator::from_char) {
            Some(op) => (op, chars.as_str()),
            None => (Operator::None, body),
        };

        Ok(Expression::new(operator, parse_var_list(var_list)))
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }
}

fn parse_var_list(var_list: &str) -> Vec<VarSpec> {
    if var_list.is_empty() {
        return Vec::new();
    }

    var_list
        .split(',')
        .map(|token| match token.strip_suffix('*') {
            Some(name) => VarSpec::new(name).with_explode(true),
            None => VarSpec::new(token),
        })
        .collect()
}
