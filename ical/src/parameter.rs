// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Property parameters as defined in RFC 5545 Section 3.2.

mod kind;

use std::slice;

pub use crate::parameter::kind::{Encoding, ValueType};

/// One parameter of a content line, with all of its values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Parameter name, original casing preserved
    pub name: String,
    /// Parameter values in order of appearance
    pub values: Vec<String>,
}

impl Parameter {
    /// The first value of the parameter.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.values.first().map(String::as_str)
    }
}

/// Ordered multimap from case-insensitive parameter names to values.
///
/// Parameters keep the order of their first appearance. Appending to a
/// name that is already present adds to its value list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parameters {
    entries: Vec<Parameter>,
}

impl Parameters {
    /// Create an empty parameter map.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Number of distinct parameter names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map holds no parameter.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a parameter by name, ignoring ASCII case.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Parameter> {
        self.entries
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    fn get_mut(&mut self, name: &str) -> Option<&mut Parameter> {
        self.entries
            .iter_mut()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// First value of the named parameter.
    #[must_use]
    pub fn first(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Parameter::value)
    }

    /// All values of the named parameter, in order.
    pub fn values<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a str> + 'a {
        self.get(name)
            .into_iter()
            .flat_map(|p| p.values.iter().map(String::as_str))
    }

    /// Whether the named parameter is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Append a value to the named parameter, creating it if needed.
    pub fn append(&mut self, name: &str, value: impl Into<String>) {
        match self.get_mut(name) {
            Some(param) => param.values.push(value.into()),
            None => self.entries.push(Parameter {
                name: name.to_string(),
                values: vec![value.into()],
            }),
        }
    }

    /// Replace all values of the named parameter.
    pub fn insert<I, S>(&mut self, name: &str, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values = values.into_iter().map(Into::into).collect();
        match self.get_mut(name) {
            Some(param) => param.values = values,
            None => self.entries.push(Parameter {
                name: name.to_string(),
                values,
            }),
        }
    }

    /// Remove the named parameter, returning it if it was present.
    pub fn remove(&mut self, name: &str) -> Option<Parameter> {
        let index = self
            .entries
            .iter()
            .position(|p| p.name.eq_ignore_ascii_case(name))?;
        Some(self.entries.remove(index))
    }

    /// Iterate over the parameters in order.
    pub fn iter(&self) -> slice::Iter<'_, Parameter> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Parameters {
    type Item = &'a Parameter;
    type IntoIter = slice::Iter<'a, Parameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
