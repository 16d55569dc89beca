// Expression expansion against variable bindings

use log::trace;

use super::ast::{Expression, Modifier, TemplatePart, UriTemplate, VarSpec};
use super::encoder::encode;
use super::operator::Operator;
use super::value::{VariableValue, Variables};

impl UriTemplate {
    /// Expand the template, replacing every expression with its value.
    ///
    /// Unbound variables and empty lists/associations expand to nothing.
    pub fn expand<V: Variables + ?Sized>(&self, variables: &V) -> String {
        let mut result = String::with_capacity(self.as_str().len());

        for part in &self.parts {
            match part {
                TemplatePart::Literal(s) => result.push_str(s),
                TemplatePart::Expression(expr) => {
                    result.push_str(&expand_expression(expr, variables));
                }
            }
        }

        result
    }
}

/// Expand one expression: the operator prefix followed by the fragments of
/// all defined variables joined with the operator separator.
pub fn expand_expression<V: Variables + ?Sized>(expr: &Expression, variables: &V) -> String {
    let op = &expr.operator;
    let fragments: Vec<String> = expr
        .specs
        .iter()
        .filter_map(|spec| match variables.get(&spec.name) {
            Some(value) if value.is_defined() => Some(format_variable(op, spec, value)),
            Some(value) => {
                trace!("{:?} variable '{}' is empty, skipping", value.shape(), spec.name);
                None
            }
            None => {
                trace!("variable '{}' is unbound, skipping", spec.name);
                None
            }
        })
        .collect();

    trace!(
        "expression {:?} expanded {} of {} variable(s)",
        op.symbol,
        fragments.len(),
        expr.specs.len()
    );

    if fragments.is_empty() {
        return String::new();
    }

    let mut out = String::from(op.prefix);
    out.push_str(&join(&fragments, op.separator));
    out
}

/// Produce the expansion fragment for a single defined variable.
pub fn format_variable(op: &Operator, spec: &VarSpec, value: &VariableValue) -> String {
    match value {
        VariableValue::Scalar(s) => format_scalar(op, spec, s),
        VariableValue::List(items) => format_list(op, spec, items),
        VariableValue::Association(pairs) => format_association(op, spec, pairs),
    }
}

fn format_scalar(op: &Operator, spec: &VarSpec, value: &str) -> String {
    let encoded = match spec.modifier {
        Modifier::Prefix(len) => encode(truncate_chars(value, len), op.allow_reserved),
        _ => encode(value, op.allow_reserved),
    };

    if op.named {
        named_pair(op, &spec.name, &encoded)
    } else {
        encoded.into_owned()
    }
}

fn format_list(op: &Operator, spec: &VarSpec, items: &[String]) -> String {
    let encoded = items.iter().map(|item| encode(item, op.allow_reserved));

    if spec.is_explode() {
        let parts: Vec<String> = if op.named {
            encoded.map(|item| named_pair(op, &spec.name, &item)).collect()
        } else {
            encoded.map(|item| item.into_owned()).collect()
        };
        return join(&parts, op.separator);
    }

    let joined = join(&encoded.collect::<Vec<_>>(), ',');
    if op.named {
        named_pair(op, &spec.name, &joined)
    } else {
        joined
    }
}

fn format_association(op: &Operator, spec: &VarSpec, pairs: &[(String, String)]) -> String {
    let encoded = pairs.iter().map(|(key, value)| {
        (
            encode(key, op.allow_reserved),
            encode(value, op.allow_reserved),
        )
    });

    if spec.is_explode() {
        let parts: Vec<String> = encoded
            .map(|(key, value)| {
                if op.named {
                    named_pair(op, &key, &value)
                } else {
                    format!("{}={}", key, value)
                }
            })
            .collect();
        return join(&parts, op.separator);
    }

    let parts: Vec<String> = encoded
        .map(|(key, value)| format!("{},{}", key, value))
        .collect();
    let joined = join(&parts, ',');
    if op.named {
        named_pair(op, &spec.name, &joined)
    } else {
        joined
    }
}

/// `name=value`, or `name` followed by the operator's empty marker
fn named_pair(op: &Operator, name: &str, value: &str) -> String {
    if value.is_empty() {
        format!("{}{}", name, op.if_empty)
    } else {
        format!("{}={}", name, value)
    }
}

fn join<S: AsRef<str>>(parts: &[S], separator: char) -> String {
    let mut out = String::new();
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            out.push(separator);
        }
        out.push_str(part.as_ref());
    }
    out
}

/// First `len` code points of `value`
fn truncate_chars(value: &str, len: usize) -> &str {
    match value.char_indices().nth(len) {
        Some((idx, _)) => &value[..idx],
        None => value,
    }
}
