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

//! Errors created while using credentials.

use http::StatusCode;

pub use gax::error::CredentialsError;

/// Returns true if a token request failing with `status` may succeed later.
///
/// Timeouts, throttling, and server errors do not indicate anything wrong
/// with the request itself.
pub(crate) fn is_retryable(status: StatusCode) -> bool {
    status == StatusCode::REQUEST_TIMEOUT
        || status == StatusCode::TOO_MANY_REQUESTS
        || status.is_server_error()
}

/// A helper to create a retryable error.
pub(crate) fn retryable<T: std::error::Error + Send + Sync + 'static>(
    source: T,
) -> CredentialsError {
    CredentialsError::new(true, source)
}

/// A helper to create a non-retryable error.
pub(crate) fn non_retryable<T: std::error::Error + Send + Sync + 'static>(
    source: T,
) -> CredentialsError {
    CredentialsError::new(false, source)
}

pub(crate) fn non_retryable_from_str<T: Into<String>>(message: T) -> CredentialsError {
    CredentialsError::from_msg(false, message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(StatusCode::INTERNAL_SERVER_ERROR)]
    #[test_case(StatusCode::BAD_GATEWAY)]
    #[test_case(StatusCode::SERVICE_UNAVAILABLE)]
    #[test_case(StatusCode::GATEWAY_TIMEOUT)]
    #[test_case(StatusCode::REQUEST_TIMEOUT)]
    #[test_case(StatusCode::TOO_MANY_REQUESTS)]
    fn retryable_status(c: StatusCode) {
        assert!(is_retryable(c));
    }

    #[test_case(StatusCode::NOT_FOUND)]
    #[test_case(StatusCode::UNAUTHORIZED)]
    #[test_case(StatusCode::BAD_REQUEST)]
    #[test_case(StatusCode::FORBIDDEN)]
    #[test_case(StatusCode::PRECONDITION_FAILED)]
    fn non_retryable_status(c: StatusCode) {
        assert!(!is_retryable(c));
    }

    #[test]
    fn helpers() {
        let e = retryable(std::io::Error::other("test-only"));
        assert!(e.is_transient(), "{e}");
        let e = non_retryable(std::io::Error::other("test-only"));
        assert!(!e.is_transient(), "{e}");
        let e = non_retryable_from_str("test-only");
        assert!(!e.is_transient(), "{e}");
        assert!(e.to_string().contains("test-only"), "{e}");
    }
}
