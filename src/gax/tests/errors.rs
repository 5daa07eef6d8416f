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

//! Verify the error types are usable from outside the crate.

#[cfg(test)]
mod tests {
    use ibm_cloud_networking_gax::error::{ApiError, CredentialsError, Error};
    use std::error::Error as _;

    #[derive(Debug, Default)]
    struct LeafError {}

    impl LeafError {
        fn hey(&self) -> &'static str {
            "hey"
        }
    }

    impl std::fmt::Display for LeafError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "leaf error")
        }
    }

    impl std::error::Error for LeafError {}

    #[test]
    fn downcast() {
        let root_err = Error::io(LeafError::default());
        let msg = root_err
            .source()
            .and_then(|e| e.downcast_ref::<LeafError>())
            .map(LeafError::hey);
        assert_eq!(msg, Some("hey"));
    }

    #[test]
    fn api_error_details() {
        let payload = bytes::Bytes::from_static(
            br#"{"success":false,"errors":[{"code":1001,"message":"invalid zone"}],"messages":[],"result":null}"#,
        );
        let mut headers = http::HeaderMap::new();
        headers.insert(
            "x-correlation-id",
            http::HeaderValue::from_static("test-correlation"),
        );
        let error = Error::http(400, headers, payload.clone());
        assert!(error.is_api(), "{error:?}");
        assert_eq!(error.http_status_code(), Some(400));
        assert_eq!(
            error
                .http_headers()
                .and_then(|h| h.get("x-correlation-id"))
                .and_then(|v| v.to_str().ok()),
            Some("test-correlation")
        );
        assert_eq!(error.http_payload(), Some(&payload));
        let api = error.api_error().expect("api errors have details");
        assert_eq!(api.message(), "invalid zone");
        assert_eq!(api.code(), Some("1001"));
    }

    #[test]
    fn custom_api_error() {
        let api = ApiError::new(409, "conflict");
        let error = Error::api(api.clone(), http::HeaderMap::new(), bytes::Bytes::new());
        assert_eq!(error.api_error(), Some(&api));
        assert!(error.to_string().contains("conflict"), "{error}");
    }

    #[test]
    fn credentials_error() {
        let error = Error::authentication(CredentialsError::from_msg(false, "bad api key"));
        assert!(error.is_authentication(), "{error:?}");
        assert!(error.is_request(), "{error:?}");
        assert!(error.to_string().contains("bad api key"), "{error}");
    }
}
