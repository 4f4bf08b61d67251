//! `environment` normalization.
//!
//! A service may declare its environment either as a mapping
//! (`{FOO: bar}`) or as a list of `KEY=VALUE` strings (`["FOO=bar"]`).
//! Both shapes are folded into one list of `KEY=VALUE` entries.
//!
//! Decoding order is fixed: the mapping shape is tried first and adopted
//! only when it yields at least one entry; otherwise the list shape is
//! tried; if that fails too, the whole document fails to parse. An empty
//! mapping (`environment: {}`) is therefore an error, since it is neither a
//! non-empty mapping nor a list.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};

use crate::de::Scalar;

/// Normalized `KEY=VALUE` environment entries of a service.
///
/// Mapping-form entries are sorted by key, and a repeated key keeps its
/// last value. List-form entries keep their document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment(Vec<String>);

impl Environment {
    pub fn entries(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a Environment {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<Vec<String>> for Environment {
    fn from(entries: Vec<String>) -> Self {
        Self(entries)
    }
}

const EXPECTED: &str = "environment must be a mapping or a list of KEY=VALUE strings";

struct EnvironmentVisitor;

impl<'de> Visitor<'de> for EnvironmentVisitor {
    type Value = Environment;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an environment mapping or a list of KEY=VALUE strings")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Environment, E> {
        Ok(Environment::default())
    }

    fn visit_none<E: de::Error>(self) -> Result<Environment, E> {
        Ok(Environment::default())
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Environment, A::Error> {
        let mut vars = BTreeMap::new();
        while let Some(Scalar(key)) = map.next_key::<Scalar>()? {
            let value = map
                .next_value::<Option<Scalar>>()
                .map_err(|err| <A::Error as de::Error>::custom(format!("{EXPECTED}: {err}")))?;
            vars.insert(key, value.map(String::from).unwrap_or_default());
        }

        // An empty mapping is neither a usable mapping nor a list.
        if vars.is_empty() {
            return Err(de::Error::custom(format!("{EXPECTED}: found an empty mapping")));
        }
        Ok(Environment(
            vars.into_iter()
                .map(|(key, value)| format!("{key}={value}"))
                .collect(),
        ))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Environment, A::Error> {
        let mut entries = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(entry) = seq
            .next_element::<Scalar>()
            .map_err(|err| <A::Error as de::Error>::custom(format!("{EXPECTED}: {err}")))?
        {
            entries.push(String::from(entry));
        }
        Ok(Environment(entries))
    }
}

impl<'de> Deserialize<'de> for Environment {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(EnvironmentVisitor)
    }
}
