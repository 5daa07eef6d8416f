// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Helpers to decode JSON objects into one of several variants.
//!
//! Some request and response payloads are a closed union of shapes. The
//! concrete shape is not identified by a tag field, but by which
//! *discriminating* field is present in the JSON object. For example, a
//! Logpush job destination is a COS bucket if the object has a `cos` field,
//! and an IBM Cloud Logs instance if the object has an `ibmcl` field.
//!
//! The generated models describe each variant with a [Variant], and decode
//! with [select] followed by [decode]. Fields set to `null` are treated as
//! absent.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// The error returned when a JSON object cannot be decoded into a union.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum OneOfError {
    /// None of the discriminating fields is present.
    #[error("cannot decode `{type_name}`, expected one of the fields {expected:?}")]
    UnrecognizedVariant {
        type_name: &'static str,
        expected: Vec<&'static str>,
    },
    /// A discriminating field is present, but its value is invalid, or it
    /// conflicts with fields from a different variant.
    #[error("cannot decode `{type_name}`, the `{field}` field is malformed: {source}")]
    MalformedField {
        type_name: &'static str,
        field: &'static str,
        #[source]
        source: BoxError,
    },
}

impl OneOfError {
    /// Returns true if no discriminating field was found.
    pub fn is_unrecognized_variant(&self) -> bool {
        matches!(self, Self::UnrecognizedVariant { .. })
    }

    /// Returns true if a discriminating field was present but malformed.
    pub fn is_malformed_field(&self) -> bool {
        matches!(self, Self::MalformedField { .. })
    }

    /// The name of the malformed field, if any.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::MalformedField { field, .. } => Some(field),
            Self::UnrecognizedVariant { .. } => None,
        }
    }

    fn malformed<T: Into<BoxError>>(
        type_name: &'static str,
        field: &'static str,
        source: T,
    ) -> Self {
        Self::MalformedField {
            type_name,
            field,
            source: source.into(),
        }
    }
}

/// Describes one variant of a union.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Variant {
    discriminator: &'static str,
    exclusive: &'static [&'static str],
}

impl Variant {
    /// A variant identified by the `discriminator` field.
    pub const fn new(discriminator: &'static str) -> Self {
        Self {
            discriminator,
            exclusive: &[],
        }
    }

    /// Fields, other than the discriminator, that only appear in this variant.
    pub const fn with_exclusive(mut self, exclusive: &'static [&'static str]) -> Self {
        self.exclusive = exclusive;
        self
    }

    /// The name of the discriminating field.
    pub fn discriminator(&self) -> &'static str {
        self.discriminator
    }

    fn fields(&self) -> impl Iterator<Item = &'static str> {
        std::iter::once(self.discriminator).chain(self.exclusive.iter().copied())
    }
}

/// Returns the JSON object in `value`, or an error if `value` is not an object.
pub fn as_object<'a>(
    type_name: &'static str,
    variants: &[Variant],
    value: &'a Value,
) -> Result<&'a Map<String, Value>, OneOfError> {
    value
        .as_object()
        .ok_or_else(|| unrecognized(type_name, variants))
}

/// Finds the index of the variant represented by `object`.
///
/// Fails if no variant is present, if more than one is present, or if fields
/// exclusive to other variants are present.
pub fn select(
    type_name: &'static str,
    object: &Map<String, Value>,
    variants: &[Variant],
) -> Result<usize, OneOfError> {
    let mut present = variants
        .iter()
        .enumerate()
        .filter(|(_, v)| is_present(object, v.discriminator));
    let Some((index, selected)) = present.next() else {
        return Err(unrecognized(type_name, variants));
    };
    if let Some((_, other)) = present.next() {
        return Err(OneOfError::malformed(
            type_name,
            other.discriminator,
            format!("conflicts with `{}`", selected.discriminator),
        ));
    }
    let conflict = variants
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .flat_map(|(_, v)| v.fields())
        .find(|f| is_present(object, f));
    if let Some(field) = conflict {
        return Err(OneOfError::malformed(
            type_name,
            field,
            format!("not allowed with `{}`", selected.discriminator),
        ));
    }
    Ok(index)
}

/// Fails if any of `fields` is present in `object`.
///
/// Used for fields that no variant accepts, e.g. fields that cannot change
/// after a resource is created.
pub fn reject(
    type_name: &'static str,
    object: &Map<String, Value>,
    fields: &[&'static str],
) -> Result<(), OneOfError> {
    match fields.iter().find(|f| is_present(object, f)) {
        Some(field) => Err(OneOfError::malformed(
            type_name,
            *field,
            "the field is not allowed",
        )),
        None => Ok(()),
    }
}

/// Decodes `value` into the payload type of the selected variant.
///
/// The discriminating field is validated on its own first, as type `D`, so
/// errors in that field are attributed to it.
pub fn decode<T, D>(
    type_name: &'static str,
    variant: &Variant,
    value: Value,
) -> Result<T, OneOfError>
where
    T: DeserializeOwned,
    D: DeserializeOwned,
{
    let field = variant.discriminator;
    let discriminator = value.get(field).cloned().unwrap_or(Value::Null);
    serde_json::from_value::<D>(discriminator)
        .map_err(|e| OneOfError::malformed(type_name, field, e))?;
    serde_json::from_value::<T>(value).map_err(|e| OneOfError::malformed(type_name, field, e))
}

fn is_present(object: &Map<String, Value>, field: &str) -> bool {
    object.get(field).is_some_and(|v| !v.is_null())
}

fn unrecognized(type_name: &'static str, variants: &[Variant]) -> OneOfError {
    OneOfError::UnrecognizedVariant {
        type_name,
        expected: variants.iter().map(|v| v.discriminator).collect(),
    }
}
