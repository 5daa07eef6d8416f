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

//! Handling of missing required parameters.
//!
//! Some parameters are required, but they appear in optional fields of the
//! request builders. For example, the name of a new Direct Link gateway is a
//! required field in the request body. The client libraries return a
//! validation error when such a parameter is missing, before making any
//! request.

use crate::error::Error;

/// The error returned when a required parameter is missing.
#[derive(thiserror::Error, Debug, PartialEq)]
#[error("missing required parameter `{0}`")]
pub struct MissingRequiredParameter(String);

impl MissingRequiredParameter {
    /// The name of the missing parameter.
    pub fn name(&self) -> &str {
        &self.0
    }
}

/// Returns a validation error for the missing parameter `name`.
pub fn missing(name: &str) -> Error {
    Error::validation(MissingRequiredParameter(name.to_string()))
}

/// Returns the value of a required parameter, or a validation error.
///
/// # Example
/// ```
/// # use ibm_cloud_networking_gax::path_parameter::required;
/// let name: Option<String> = None;
/// let err = required("name", name).unwrap_err();
/// assert!(err.is_validation());
/// assert_eq!(required("speed_mbps", Some(1000)).ok(), Some(1000));
/// ```
pub fn required<T>(name: &str, value: Option<T>) -> Result<T, Error> {
    value.ok_or_else(|| missing(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn missing() {
        let e = super::missing("abc123");
        assert!(e.is_validation(), "{e:?}");
        let fmt = format!("{e}");
        assert!(fmt.contains("abc123"), "{e:?}");
        let inner = e
            .source()
            .and_then(|s| s.downcast_ref::<MissingRequiredParameter>());
        assert_eq!(inner.map(|i| i.name()), Some("abc123"), "{e:?}");
    }

    #[test]
    fn required() {
        let got = super::required("p", Some("value"));
        assert!(matches!(got, Ok("value")), "{got:?}");

        let got = super::required::<i64>("p", None);
        assert!(matches!(&got, Err(e) if e.is_validation()), "{got:?}");
    }
}
