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

use serde_json::Value;

const UNKNOWN_ERROR: &str = "Unknown Error";

/// The error payload returned by an IBM Cloud service.
///
/// IBM Cloud services report errors using a handful of JSON shapes. The
/// platform services use an `errors` array, each element with a `code` and a
/// `message`. The CIS services use a similar envelope, with numeric codes.
/// Some older services use a top-level `error`, `message`, or `errorMessage`
/// field. This type normalizes all of them.
///
/// The original JSON body, if the payload was JSON, is preserved in
/// [body][ApiError::body].
///
/// # Example
/// ```
/// # use ibm_cloud_networking_gax::error::ApiError;
/// let payload = bytes::Bytes::from_static(br#"{"errors":[{"code":"not_found","message":"zone not found"}],"trace":"abc"}"#);
/// let error = ApiError::from_response(404, &payload);
/// assert_eq!(error.status_code(), 404);
/// assert_eq!(error.message(), "zone not found");
/// assert_eq!(error.code(), Some("not_found"));
/// assert_eq!(error.trace(), Some("abc"));
/// ```
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct ApiError {
    status_code: u16,
    message: String,
    code: Option<String>,
    trace: Option<String>,
    errors: Vec<ErrorDetail>,
    body: Option<Value>,
}

/// One element of the `errors` array in an IBM Cloud error payload.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ErrorDetail {
    /// The error code, numeric codes are converted to their decimal string.
    pub code: Option<String>,
    /// A human-readable description of the problem.
    pub message: Option<String>,
    /// A link to more information about the problem.
    pub more_info: Option<String>,
}

impl ApiError {
    /// Creates a new error with the given status code and message.
    pub fn new<T: Into<String>>(status_code: u16, message: T) -> Self {
        Self {
            status_code,
            message: message.into(),
            code: None,
            trace: None,
            errors: Vec::new(),
            body: None,
        }
    }

    /// Parses the error payload of an unsuccessful HTTP response.
    ///
    /// This never fails: payloads that are not JSON, or JSON in an
    /// unrecognized shape, produce an error with a generic message.
    pub fn from_response(status_code: u16, payload: &bytes::Bytes) -> Self {
        let Ok(body) = serde_json::from_slice::<Value>(payload) else {
            let message = std::str::from_utf8(payload)
                .ok()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .unwrap_or(UNKNOWN_ERROR);
            return Self::new(status_code, message);
        };
        let errors: Vec<ErrorDetail> = body
            .get("errors")
            .and_then(Value::as_array)
            .map(|v| v.iter().filter_map(ErrorDetail::from_value).collect())
            .unwrap_or_default();
        let message = Self::message_from(&body, &errors);
        let code = errors
            .first()
            .and_then(|e| e.code.clone())
            .or_else(|| scalar_as_string(body.get("code")));
        let trace = scalar_as_string(body.get("trace"));
        Self {
            status_code,
            message,
            code,
            trace,
            errors,
            body: Some(body),
        }
    }

    fn message_from(body: &Value, errors: &[ErrorDetail]) -> String {
        errors
            .first()
            .and_then(|e| e.message.clone())
            .or_else(|| body.get("error").and_then(Value::as_str).map(str::to_string))
            .or_else(|| body.get("message").and_then(Value::as_str).map(str::to_string))
            .or_else(|| {
                body.get("errorMessage")
                    .and_then(Value::as_str)
                    .map(str::to_string)
            })
            .unwrap_or_else(|| UNKNOWN_ERROR.to_string())
    }

    /// The HTTP status code.
    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    /// The human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The error code reported by the service, if any.
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// The trace id reported by the service, useful when contacting support.
    pub fn trace(&self) -> Option<&str> {
        self.trace.as_deref()
    }

    /// All the error details in the payload.
    pub fn errors(&self) -> &[ErrorDetail] {
        &self.errors
    }

    /// The parsed JSON payload, if the payload was JSON.
    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }
}

impl ErrorDetail {
    fn from_value(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        Some(Self {
            code: scalar_as_string(object.get("code")),
            message: scalar_as_string(object.get("message")),
            more_info: scalar_as_string(object.get("more_info")),
        })
    }
}

fn scalar_as_string(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.code {
            Some(code) => write!(f, "[{}] {} ({code})", self.status_code, self.message),
            None => write!(f, "[{}] {}", self.status_code, self.message),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    fn payload(v: Value) -> bytes::Bytes {
        bytes::Bytes::from(v.to_string())
    }

    #[test]
    fn platform_errors() {
        let body = json!({
            "errors": [
                {"code": "validation_error", "message": "bad speed", "more_info": "https://cloud.ibm.com/docs"},
                {"code": "other", "message": "ignored"}
            ],
            "trace": "trace-123",
        });
        let got = ApiError::from_response(400, &payload(body.clone()));
        assert_eq!(got.status_code(), 400);
        assert_eq!(got.message(), "bad speed");
        assert_eq!(got.code(), Some("validation_error"));
        assert_eq!(got.trace(), Some("trace-123"));
        assert_eq!(got.errors().len(), 2);
        assert_eq!(
            got.errors()[0].more_info.as_deref(),
            Some("https://cloud.ibm.com/docs")
        );
        assert_eq!(got.body(), Some(&body));
    }

    #[test]
    fn cis_envelope() {
        let body = json!({
            "success": false,
            "errors": [{"code": 1003, "message": "Invalid or missing zone id."}],
            "messages": [],
            "result": null,
        });
        let got = ApiError::from_response(403, &payload(body));
        assert_eq!(got.message(), "Invalid or missing zone id.");
        assert_eq!(got.code(), Some("1003"));
        assert!(got.to_string().contains("1003"), "{got}");
        assert!(got.to_string().contains("403"), "{got}");
    }

    #[test_case(json!({"error": "from-error"}), "from-error")]
    #[test_case(json!({"message": "from-message"}), "from-message")]
    #[test_case(json!({"errorMessage": "from-error-message"}), "from-error-message")]
    #[test_case(json!({"error": "first", "message": "second"}), "first")]
    #[test_case(json!({"unknown": "field"}), UNKNOWN_ERROR)]
    #[test_case(json!([1, 2, 3]), UNKNOWN_ERROR)]
    fn message_precedence(body: Value, want: &str) {
        let got = ApiError::from_response(500, &payload(body));
        assert_eq!(got.message(), want, "{got:?}");
        assert!(got.errors().is_empty(), "{got:?}");
    }

    #[test_case(b"", UNKNOWN_ERROR)]
    #[test_case(b"   ", UNKNOWN_ERROR)]
    #[test_case(b"Bad Gateway", "Bad Gateway")]
    #[test_case(&[0xFF, 0xFF], UNKNOWN_ERROR)]
    fn not_json(input: &[u8], want: &str) {
        let got = ApiError::from_response(502, &bytes::Bytes::copy_from_slice(input));
        assert_eq!(got.message(), want, "{got:?}");
        assert!(got.body().is_none(), "{got:?}");
        assert!(got.code().is_none(), "{got:?}");
    }
}
