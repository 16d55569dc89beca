//! RFC 6570 URI Template expansion.
//!
//! ```
//! use std::collections::HashMap;
//! use uritemplate::{expand, VariableValue};
//!
//! let mut vars = HashMap::new();
//! vars.insert("count".to_string(), VariableValue::from(vec!["one", "two", "three"]));
//!
//! assert_eq!(expand("{?count*}", &vars).unwrap(), "?count=one&count=two&count=three");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod template;

pub use error::ExpandError;
pub use template::{UriTemplate, ValueShape, VariableValue, Variables};

/// Expand `template` against `variables` in one call.
///
/// Fails on the first malformed expression; nothing is expanded in that case.
pub fn expand<V: Variables + ?Sized>(template: &str, variables: &V) -> Result<String, ExpandError> {
    Ok(UriTemplate::parse(template)?.expand(variables))
}
