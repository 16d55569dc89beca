// Template scanner and expression parser

use log::debug;

use super::ast::{Expression, Modifier, TemplatePart, UriTemplate, VarSpec};
use super::operator::Operator;
use crate::error::ExpandError;

/// Largest prefix length allowed by the `:N` modifier
const MAX_PREFIX_LENGTH: usize = 9999;

pub struct TemplateParser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> TemplateParser<'a> {
    pub fn parse(template: &'a str) -> Result<UriTemplate, ExpandError> {
        let mut parser = Self {
            input: template,
            pos: 0,
        };
        let parts = parser.parse_template()?;

        debug!(
            "parsed template {:?}: {} expression(s)",
            template,
            parts
                .iter()
                .filter(|p| matches!(p, TemplatePart::Expression(_)))
                .count()
        );

        Ok(UriTemplate::new(template.to_string(), parts))
    }

    fn parse_template(&mut self) -> Result<Vec<TemplatePart>, ExpandError> {
        let input = self.input;
        let mut parts = Vec::new();
        let mut literal_buf = String::new();

        while let Some(ch) = self.peek_char() {
            if ch != '{' {
                literal_buf.push(ch);
                self.pos += ch.len_utf8();
                continue;
            }

            let start = self.pos;
            let rest = &input[start + 1..];
            match rest.find('}') {
                // `{}` is not an expression
                Some(0) => {
                    literal_buf.push_str("{}");
                    self.pos += 2;
                }
                Some(len) => {
                    if !literal_buf.is_empty() {
                        parts.push(TemplatePart::Literal(std::mem::take(&mut literal_buf)));
                    }
                    let expr = parse_expression(&rest[..len], start)?;
                    parts.push(TemplatePart::Expression(expr));
                    self.pos = start + len + 2;
                }
                // Unterminated expression: the rest is literal
                None => {
                    literal_buf.push_str(&input[start..]);
                    self.pos = input.len();
                }
            }
        }

        if !literal_buf.is_empty() {
            parts.push(TemplatePart::Literal(literal_buf));
        }

        Ok(parts)
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }
}

/// Parse the text between `{` and `}` into an operator and its variable list.
///
/// `position` is the offset of the opening brace, used for error reporting.
pub fn parse_expression(text: &str, position: usize) -> Result<Expression, ExpandError> {
    let mut chars = text.chars();
    let first = chars.next().ok_or_else(|| ExpandError::InvalidSpecifier {
        spec: String::new(),
        position,
    })?;

    let (operator, var_list) = match Operator::from_symbol(first) {
        Some(op) => (op, chars.as_str()),
        None if is_varchar_start(first) => (Operator::SIMPLE, text),
        // Includes `= , ! @ |`, which RFC 6570 reserves for future operators
        None => {
            return Err(ExpandError::InvalidOperator {
                operator: first,
                position,
            })
        }
    };

    let specs = var_list
        .split(',')
        .map(|token| {
            parse_varspec(token).ok_or_else(|| ExpandError::InvalidSpecifier {
                spec: token.to_string(),
                position,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Expression { operator, specs })
}

/// Parse `name`, `name:N` or `name*`
fn parse_varspec(token: &str) -> Option<VarSpec> {
    let (name, modifier) = if let Some(name) = token.strip_suffix('*') {
        (name, Modifier::Explode)
    } else if let Some((name, digits)) = token.split_once(':') {
        (name, Modifier::Prefix(parse_prefix_length(digits)?))
    } else {
        (token, Modifier::None)
    };

    is_varname(name).then(|| VarSpec::new(name, modifier))
}

/// `max-length = %x31-39 0*3DIGIT`
fn parse_prefix_length(digits: &str) -> Option<usize> {
    if digits.is_empty()
        || digits.len() > 4
        || digits.starts_with('0')
        || !digits.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }
    digits
        .parse()
        .ok()
        .filter(|n| (1..=MAX_PREFIX_LENGTH).contains(n))
}

fn is_varchar_start(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_' || ch == '%'
}

/// `varname = varchar *( ["."] varchar )`, `varchar = ALPHA / DIGIT / "_" / pct-encoded`
fn is_varname(name: &str) -> bool {
    let bytes = name.as_bytes();
    let mut i = 0;
    let mut after_varchar = false;

    while i < bytes.len() {
        match bytes[i] {
            b if b.is_ascii_alphanumeric() || b == b'_' => {
                i += 1;
                after_varchar = true;
            }
            b'%' => {
                let triplet = bytes.get(i + 1..i + 3);
                if !triplet.map_or(false, |t| t.iter().all(u8::is_ascii_hexdigit)) {
                    return false;
                }
                i += 3;
                after_varchar = true;
            }
            b'.' if after_varchar => {
                i += 1;
                after_varchar = false;
            }
            _ => return false,
        }
    }

    after_varchar
}
