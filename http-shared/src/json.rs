//! # JSON serialization with naming profiles
//!
//! Service payloads cross the wire with either camelCase or PascalCase
//! property names depending on which side of the fence the remote service
//! was written on. This module bridges Rust's snake_case field names and
//! those wire conventions without per-type serde attributes: values pass
//! through `serde_json::Value`, where object keys are renamed recursively
//! and null-valued fields are dropped.
//!
//! The profile is fixed when a [`JsonSerializer`] is constructed and never
//! changes afterwards.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::any::{Any, TypeId, type_name};

/// Wire-side property naming convention.
///
/// `CamelCase` is the default profile and omits null fields; `PascalCase`
/// also omits null fields but capitalizes every key segment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NamingProfile {
    #[default]
    CamelCase,
    PascalCase,
}

/// (De)serializes typed values to and from JSON text under a fixed
/// [`NamingProfile`].
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSerializer {
    profile: NamingProfile,
}

/// A payload failed to parse into the expected type.
///
/// Carries the offending text so callers can surface it in diagnostics.
/// Only constructed when a parse attempt actually failed.
#[derive(Debug, thiserror::Error)]
#[error("failed to deserialize into {target}")]
pub struct DeserializeError {
    /// Name of the type the payload was expected to parse into.
    pub target: &'static str,
    /// The payload that failed to parse.
    pub json: String,
    #[source]
    pub source: serde_json::Error,
}

impl DeserializeError {
    fn new<T>(json: &str, source: serde_json::Error) -> Self {
        Self {
            target: type_name::<T>(),
            json: json.to_owned(),
            source,
        }
    }
}

impl JsonSerializer {
    pub fn new(profile: NamingProfile) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> NamingProfile {
        self.profile
    }

    /// Serializes `value` to indented JSON text with wire-convention keys.
    ///
    /// Null-valued object fields are omitted.
    pub fn serialize<T: Serialize>(&self, value: &T) -> Result<String, serde_json::Error> {
        let value = serde_json::to_value(value)?;
        let value = transform(value, self.wire_key(), true);
        serde_json::to_string_pretty(&value)
    }

    /// Deserializes JSON text into `T`, renaming wire-convention keys back
    /// to snake_case first.
    ///
    /// When `T` is `String` the text is taken verbatim and no parsing is
    /// attempted, so plain-text bodies pass through unchanged.
    pub fn deserialize<T>(&self, json: &str) -> Result<T, DeserializeError>
    where
        T: DeserializeOwned + 'static,
    {
        if let Some(text) = raw_text::<T>(json) {
            return Ok(text);
        }

        let value: Value =
            serde_json::from_str(json).map_err(|source| DeserializeError::new::<T>(json, source))?;
        let value = transform(value, wire_to_snake, false);

        serde_json::from_value(value).map_err(|source| DeserializeError::new::<T>(json, source))
    }

    fn wire_key(&self) -> fn(&str) -> String {
        match self.profile {
            NamingProfile::CamelCase => snake_to_camel,
            NamingProfile::PascalCase => snake_to_pascal,
        }
    }
}

/// Returns the body verbatim when the target type is `String`.
///
/// The check resolves per generic instantiation.
fn raw_text<T: 'static>(json: &str) -> Option<T> {
    if TypeId::of::<T>() != TypeId::of::<String>() {
        return None;
    }
    let boxed: Box<dyn Any> = Box::new(json.to_owned());
    boxed.downcast::<T>().ok().map(|text| *text)
}

/// Renames object keys recursively, descending into arrays. When
/// `drop_nulls` is set, null-valued object fields are removed.
fn transform(value: Value, rename: fn(&str) -> String, drop_nulls: bool) -> Value {
    match value {
        Value::Object(map) => {
            let mut out = serde_json::Map::with_capacity(map.len());
            for (key, val) in map {
                if drop_nulls && val.is_null() {
                    continue;
                }
                out.insert(rename(&key), transform(val, rename, drop_nulls));
            }
            Value::Object(out)
        }
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| transform(item, rename, drop_nulls))
                .collect(),
        ),
        other => other,
    }
}

fn snake_to_camel(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut upper_next = false;
    for c in key.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

fn snake_to_pascal(key: &str) -> String {
    let camel = snake_to_camel(key);
    let mut chars = camel.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => camel,
    }
}

fn wire_to_snake(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for (i, c) in key.chars().enumerate() {
        if c.is_uppercase() {
            if i != 0 {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
