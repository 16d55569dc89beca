// Parsed representation of a URI template

use std::fmt;
use std::str::FromStr;

use super::operator::Operator;
use super::parser::TemplateParser;
use crate::error::ExpandError;

/// A parsed URI template: literal text interleaved with expressions
#[derive(Debug, Clone, PartialEq)]
pub struct UriTemplate {
    source: String,
    pub parts: Vec<TemplatePart>,
}

impl UriTemplate {
    pub(crate) fn new(source: String, parts: Vec<TemplatePart>) -> Self {
        Self { source, parts }
    }

    pub fn parse(template: &str) -> Result<Self, ExpandError> {
        TemplateParser::parse(template)
    }

    /// Original template text
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Get all expressions in this template
    pub fn expressions(&self) -> impl Iterator<Item = &Expression> {
        self.parts.iter().filter_map(|part| match part {
            TemplatePart::Expression(expr) => Some(expr),
            TemplatePart::Literal(_) => None,
        })
    }

    /// Names of all referenced variables, in order of first use
    pub fn variable_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for spec in self.expressions().flat_map(|expr| expr.specs.iter()) {
            if !names.contains(&spec.name.as_str()) {
                names.push(&spec.name);
            }
        }
        names
    }
}

impl FromStr for UriTemplate {
    type Err = ExpandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for UriTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// A template consists of literal strings and `{...}` expressions
#[derive(Debug, Clone, PartialEq)]
pub enum TemplatePart {
    Literal(String),
    Expression(Expression),
}

/// One `{...}` expression: an operator applied to a list of variables
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    pub operator: Operator,
    pub specs: Vec<VarSpec>,
}

/// A variable reference inside an expression, e.g. `var`, `var:3` or `var*`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarSpec {
    pub name: String,
    pub modifier: Modifier,
}

impl VarSpec {
    pub fn new(name: impl Into<String>, modifier: Modifier) -> Self {
        Self {
            name: name.into(),
            modifier,
        }
    }

    pub fn is_explode(&self) -> bool {
        self.modifier == Modifier::Explode
    }
}

/// Level 4 value modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Modifier {
    #[default]
    None,
    /// Keep at most this many characters of a scalar value (1-9999)
    Prefix(usize),
    Explode,
}
