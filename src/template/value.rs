// Variable values bound to template names

use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::BuildHasher;

/// A value bound to a template variable
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VariableValue {
    Scalar(String),
    /// Ordered list of values
    List(Vec<String>),
    /// Key/value pairs, expanded in the order given
    Association(Vec<(String, String)>),
}

/// Shape of a bound value, which decides how the formatter expands it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueShape {
    Scalar,
    List,
    Association,
}

impl VariableValue {
    pub fn shape(&self) -> ValueShape {
        match self {
            VariableValue::Scalar(_) => ValueShape::Scalar,
            VariableValue::List(_) => ValueShape::List,
            VariableValue::Association(_) => ValueShape::Association,
        }
    }

    /// Lists and associations without members count as undefined.
    /// An empty string is still a defined scalar.
    pub fn is_defined(&self) -> bool {
        match self {
            VariableValue::Scalar(_) => true,
            VariableValue::List(items) => !items.is_empty(),
            VariableValue::Association(pairs) => !pairs.is_empty(),
        }
    }

    pub fn association<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        VariableValue::Association(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl From<&str> for VariableValue {
    fn from(value: &str) -> Self {
        VariableValue::Scalar(value.to_string())
    }
}

impl From<String> for VariableValue {
    fn from(value: String) -> Self {
        VariableValue::Scalar(value)
    }
}

impl<T: Into<String>> From<Vec<T>> for VariableValue {
    fn from(items: Vec<T>) -> Self {
        VariableValue::List(items.into_iter().map(Into::into).collect())
    }
}

/// Source of variable bindings for expansion
pub trait Variables {
    /// Value bound to `name`, or `None` when the name is unbound
    fn get(&self, name: &str) -> Option<&VariableValue>;
}

impl<S: BuildHasher> Variables for HashMap<String, VariableValue, S> {
    fn get(&self, name: &str) -> Option<&VariableValue> {
        HashMap::get(self, name)
    }
}

impl Variables for BTreeMap<String, VariableValue> {
    fn get(&self, name: &str) -> Option<&VariableValue> {
        BTreeMap::get(self, name)
    }
}

// Deserialization maps host-native data onto the three value shapes:
// scalars become `Scalar`, sequences `List`, maps `Association` in document order.

impl<'de> Deserialize<'de> for VariableValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ValueVisitor)
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = VariableValue;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a string, number, boolean, list of scalars or map of scalars")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(VariableValue::Scalar(v.to_string()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(VariableValue::Scalar(v.to_string()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(VariableValue::Scalar(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(VariableValue::Scalar(v.to_string()))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(VariableValue::Scalar(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(VariableValue::Scalar(v))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(ScalarText(item)) = seq.next_element()? {
            items.push(item);
        }
        Ok(VariableValue::List(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut pairs = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((ScalarText(key), ScalarText(value))) = map.next_entry()? {
            pairs.push((key, value));
        }
        Ok(VariableValue::Association(pairs))
    }
}

/// A scalar member of a list or association, in its textual form
struct ScalarText(String);

impl<'de> Deserialize<'de> for ScalarText {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match deserializer.deserialize_any(ValueVisitor)? {
            VariableValue::Scalar(text) => Ok(ScalarText(text)),
            _ => Err(de::Error::custom(
                "lists and maps may only contain scalar values",
            )),
        }
    }
}
