// Common test utilities shared across test files

use std::collections::HashMap;
use uritemplate::{expand, VariableValue};

/// The variable set used by the examples in RFC 6570 section 3.2
#[allow(dead_code)]
pub fn rfc_variables() -> HashMap<String, VariableValue> {
    let mut vars = HashMap::new();
    let mut set = |name: &str, value: VariableValue| {
        vars.insert(name.to_string(), value);
    };

    set("count", vec!["one", "two", "three"].into());
    set("dom", vec!["example", "com"].into());
    set("dub", "me/too".into());
    set("hello", "Hello World!".into());
    set("half", "50%".into());
    set("var", "value".into());
    set("who", "fred".into());
    set("base", "http://example.com/home/".into());
    set("path", "/foo/bar".into());
    set("list", vec!["red", "green", "blue"].into());
    set(
        "keys",
        VariableValue::association([("semi", ";"), ("dot", "."), ("comma", ",")]),
    );
    set("v", "6".into());
    set("x", "1024".into());
    set("y", "768".into());
    set("empty", "".into());
    set("empty_keys", VariableValue::Association(vec![]));

    vars
}

/// Expand each `(template, expected)` pair against the RFC variables
#[allow(dead_code)]
pub fn assert_expansions(cases: &[(&str, &str)]) {
    let vars = rfc_variables();
    for (template, expected) in cases {
        let result = expand(template, &vars).unwrap();
        assert_eq!(&result, expected, "template {}", template);
    }
}
