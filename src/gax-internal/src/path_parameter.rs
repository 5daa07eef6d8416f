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

//! Substitution of path parameters.
//!
//! Path parameters are required. An empty value is reported as a validation
//! error before any request is made. Non-empty values are percent-encoded as
//! a single path segment, so a `/` in a CRN cannot change the request path.
//! The dot segments `.` and `..` are rejected, as URL normalization would
//! remove them from the path.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

// Everything except the unreserved characters and the sub-delimiters allowed
// in a path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// The error returned when a path parameter is a dot segment.
#[derive(thiserror::Error, Debug, PartialEq)]
#[error("path parameter `{name}` cannot be {value:?}")]
pub struct DotSegment {
    name: String,
    value: String,
}

impl DotSegment {
    /// The name of the parameter.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Returns the percent-encoded `value`, or a validation error if it is empty
/// or a dot segment.
pub fn required(name: &str, value: &str) -> gax::Result<String> {
    if value.is_empty() {
        return Err(gax::path_parameter::missing(name));
    }
    if value == "." || value == ".." {
        return Err(gax::error::Error::validation(DotSegment {
            name: name.to_string(),
            value: value.to_string(),
        }));
    }
    Ok(utf8_percent_encode(value, SEGMENT).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gax::path_parameter::MissingRequiredParameter;
    use std::error::Error as _;
    use test_case::test_case;

    #[test_case("abc-123", "abc-123")]
    #[test_case("crn:v1:bluemix:public:internet-svcs:global:a/1234:5678::", "crn:v1:bluemix:public:internet-svcs:global:a%2F1234:5678::")]
    #[test_case("with space", "with%20space")]
    #[test_case("a?b#c", "a%3Fb%23c")]
    #[test_case("100%", "100%25")]
    #[test_case("ünïcode", "%C3%BCn%C3%AFcode")]
    #[test_case("...", "...")]
    #[test_case("%2e%2e", "%252e%252e")]
    #[test_case("../gateways", "..%2Fgateways")]
    fn encoded(input: &str, want: &str) -> anyhow::Result<()> {
        let got = required("p", input)?;
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn empty() {
        let err = required("zone_id", "").unwrap_err();
        assert!(err.is_validation(), "{err:?}");
        let source = err
            .source()
            .and_then(|e| e.downcast_ref::<MissingRequiredParameter>());
        assert_eq!(source.map(|s| s.name()), Some("zone_id"), "{err:?}");
    }

    #[test_case(".")]
    #[test_case("..")]
    fn dot_segment(input: &str) {
        let err = required("id", input).unwrap_err();
        assert!(err.is_validation(), "{err:?}");
        let source = err.source().and_then(|e| e.downcast_ref::<DotSegment>());
        assert_eq!(source.map(|s| s.name()), Some("id"), "{err:?}");
    }
}
