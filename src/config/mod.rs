// Loading variable bindings for the command line host

pub mod variables;

pub use variables::{load_variables, parse_binding, parse_variables, VariablesFormat};
