// Template module for RFC 6570 URI templates (levels 1-4)
//
// This module provides parsing of templates into literal text and
// expressions, and expansion of those expressions against variable values.

mod ast;
mod encoder;
mod operator;
mod parser;
mod resolver;
mod value;

pub use ast::{Expression, Modifier, TemplatePart, UriTemplate, VarSpec};
pub use encoder::encode;
pub use operator::Operator;
pub use parser::{parse_expression, TemplateParser};
pub use resolver::{expand_expression, format_variable};
pub use value::{ValueShape, VariableValue, Variables};
