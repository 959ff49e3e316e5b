// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Dynamically typed configuration value.

use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

/// A configuration value as exchanged between nodes.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValue {
    Integer(i64),
    Boolean(bool),
    Real(f64),
    Timespan(Duration),
    String(String),
    List(Vec<ConfigValue>),
    Dictionary(BTreeMap<String, ConfigValue>),
}

impl Default for ConfigValue {
    fn default() -> Self {
        ConfigValue::Integer(0)
    }
}

impl ConfigValue {
    /// Name of the held alternative, for diagnostics.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            ConfigValue::Integer(_) => "integer",
            ConfigValue::Boolean(_) => "boolean",
            ConfigValue::Real(_) => "real",
            ConfigValue::Timespan(_) => "timespan",
            ConfigValue::String(_) => "string",
            ConfigValue::List(_) => "list",
            ConfigValue::Dictionary(_) => "dictionary",
        }
    }

    /// Try to get as integer.
    #[must_use]
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            ConfigValue::Integer(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as boolean.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ConfigValue::Boolean(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::String(v) => Some(v),
            _ => None,
        }
    }

    /// Look up a dotted path (`"a.b.c"`) in nested dictionaries.
    #[must_use]
    pub fn get_path(&self, path: &str) -> Option<&ConfigValue> {
        path.split('.').try_fold(self, |value, key| match value {
            ConfigValue::Dictionary(map) => map.get(key),
            _ => None,
        })
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Integer(v) => write!(f, "{}", v),
            ConfigValue::Boolean(v) => write!(f, "{}", v),
            ConfigValue::Real(v) => write!(f, "{}", v),
            ConfigValue::Timespan(v) => write!(f, "{:?}", v),
            ConfigValue::String(v) => write!(f, "{:?}", v),
            ConfigValue::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            ConfigValue::Dictionary(map) => {
                f.write_str("{")?;
                for (i, (key, item)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{} = {}", key, item)?;
                }
                f.write_str("}")
            }
        }
    }
}
