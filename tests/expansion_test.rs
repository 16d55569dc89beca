// Tests for whole-template expansion behavior

mod common;

use std::collections::{BTreeMap, HashMap};
use uritemplate::{expand, ExpandError, UriTemplate, VariableValue};

fn count_vars() -> HashMap<String, VariableValue> {
    let mut vars = HashMap::new();
    vars.insert("var".to_string(), VariableValue::from("value"));
    vars.insert("hello".to_string(), VariableValue::from("Hello World!"));
    vars.insert(
        "count".to_string(),
        VariableValue::from(vec!["one", "two", "three"]),
    );
    vars
}

#[test]
fn test_canonical_scenarios() {
    let vars = count_vars();
    let cases = [
        ("{var}", "value"),
        ("{hello}", "Hello%20World%21"),
        ("{+hello}", "Hello%20World!"),
        ("{/count}", "/one,two,three"),
        ("{/count*}", "/one/two/three"),
        ("{;count*}", ";count=one;count=two;count=three"),
        ("{?count}", "?count=one,two,three"),
        ("{?count*}", "?count=one&count=two&count=three"),
    ];

    for (template, expected) in cases {
        assert_eq!(expand(template, &vars).unwrap(), expected, "template {}", template);
    }
}

#[test]
fn test_literal_text_unchanged() {
    let vars: HashMap<String, VariableValue> = HashMap::new();
    for template in [
        "",
        "http://example.com/path?q=1#frag",
        "unicode ü and spaces stay as-is",
        "braces {} and unterminated {open",
        "stray } brace",
    ] {
        assert_eq!(expand(template, &vars).unwrap(), template);
    }
}

#[test]
fn test_unbound_expressions_vanish() {
    let vars: HashMap<String, VariableValue> = HashMap::new();
    assert_eq!(
        expand("http://example.com{/a,b}{?c*}{&d}{#e}", &vars).unwrap(),
        "http://example.com"
    );
}

#[test]
fn test_prefix_counts_code_points() {
    let mut vars = HashMap::new();
    vars.insert("city".to_string(), VariableValue::from("Zürich"));
    vars.insert("snow".to_string(), VariableValue::from("☃☃☃"));

    assert_eq!(expand("{city:2}", &vars).unwrap(), "Z%C3%BC");
    assert_eq!(expand("{?snow:1}", &vars).unwrap(), "?snow=%E2%98%83");
}

#[test]
fn test_reserved_expansion_keeps_pct_triplets() {
    let mut vars = HashMap::new();
    vars.insert("q".to_string(), VariableValue::from("a%20b c"));

    assert_eq!(expand("{q}", &vars).unwrap(), "a%2520b%20c");
    assert_eq!(expand("{+q}", &vars).unwrap(), "a%20b%20c");
    assert_eq!(expand("{#q}", &vars).unwrap(), "#a%20b%20c");
}

#[test]
fn test_malformed_expression_fails_whole_expansion() {
    let vars = count_vars();

    let err = expand("{var}/{@count}", &vars).unwrap_err();
    assert_eq!(
        err,
        ExpandError::InvalidOperator {
            operator: '@',
            position: 6
        }
    );

    let err = expand("{var}{?count:0}", &vars).unwrap_err();
    assert_eq!(
        err,
        ExpandError::InvalidSpecifier {
            spec: "count:0".to_string(),
            position: 5
        }
    );
}

#[test]
fn test_parsed_template_is_reusable() {
    let template = UriTemplate::parse("https://api.example.com/users{/id}{?fields*}").unwrap();
    assert_eq!(template.variable_names(), vec!["id", "fields"]);

    let mut first = BTreeMap::new();
    first.insert("id".to_string(), VariableValue::from("42"));
    assert_eq!(template.expand(&first), "https://api.example.com/users/42");

    let mut second = BTreeMap::new();
    second.insert(
        "fields".to_string(),
        VariableValue::association([("sort", "name"), ("limit", "10")]),
    );
    assert_eq!(
        template.expand(&second),
        "https://api.example.com/users?sort=name&limit=10"
    );
}

#[test]
fn test_rfc_variables_with_mixed_literals() {
    let vars = common::rfc_variables();
    assert_eq!(
        expand("{+base}search{?list,x}{&who}{#var}", &vars).unwrap(),
        "http://example.com/home/search?list=red,green,blue&x=1024&who=fred#value"
    );
}
