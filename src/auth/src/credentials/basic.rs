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

//! Credentials using [HTTP basic authentication].
//!
//! # Example
//! ```
//! # use ibm_cloud_networking_auth::credentials::basic::Builder;
//! # tokio_test::block_on(async {
//! let credentials = Builder::new("user", "password").build()?;
//! let headers = credentials.headers().await?;
//! assert_eq!(
//!     headers.get(http::header::AUTHORIZATION).map(|v| v.as_bytes()),
//!     Some(&b"Basic dXNlcjpwYXNzd29yZA=="[..])
//! );
//! # Ok::<(), anyhow::Error>(()) });
//! ```
//!
//! [HTTP basic authentication]: https://datatracker.ietf.org/doc/html/rfc7617

use crate::build_errors::Error as BuildError;
use crate::credentials::{Credentials, CredentialsProvider, auth_type, validate_secret};
use crate::{BuildResult, Result};
use base64::Engine;
use base64::prelude::BASE64_STANDARD;
use http::header::{AUTHORIZATION, HeaderMap, HeaderValue, InvalidHeaderValue};

/// Creates the value of an `Authorization: Basic ...` header.
pub(crate) fn authorization(
    username: &str,
    password: &str,
) -> std::result::Result<HeaderValue, InvalidHeaderValue> {
    let encoded = BASE64_STANDARD.encode(format!("{username}:{password}"));
    let mut value = HeaderValue::from_str(&format!("Basic {encoded}"))?;
    value.set_sensitive(true);
    Ok(value)
}

struct BasicCredentials {
    header: HeaderValue,
}

impl std::fmt::Debug for BasicCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicCredentials")
            .field("header", &"[censored]")
            .finish()
    }
}

impl CredentialsProvider for BasicCredentials {
    async fn headers(&self) -> Result<HeaderMap> {
        Ok(HeaderMap::from_iter([(AUTHORIZATION, self.header.clone())]))
    }

    fn authentication_type(&self) -> &'static str {
        auth_type::BASIC
    }
}

/// A builder for basic authentication credentials.
pub struct Builder {
    username: String,
    password: String,
}

impl std::fmt::Debug for Builder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Builder")
            .field("username", &self.username)
            .field("password", &"[censored]")
            .finish()
    }
}

impl Builder {
    pub fn new<U: Into<String>, P: Into<String>>(username: U, password: P) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Returns a [Credentials] instance with the configured settings.
    ///
    /// # Errors
    ///
    /// Fails if the username or password are empty, or if they are wrapped in
    /// braces or quotes.
    pub fn build(self) -> BuildResult<Credentials> {
        validate_secret("username", &self.username)?;
        validate_secret("password", &self.password)?;
        let header = authorization(&self.username, &self.password)
            .map_err(|e| BuildError::invalid_field("username", e))?;
        Ok(Credentials::from(BasicCredentials { header }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[tokio::test]
    async fn headers() -> anyhow::Result<()> {
        let credentials = Builder::new("Aladdin", "open sesame").build()?;
        let headers = credentials.headers().await?;
        let value = headers.get(AUTHORIZATION).expect("has an authorization header");
        assert_eq!(value, "Basic QWxhZGRpbjpvcGVuIHNlc2FtZQ==");
        assert!(value.is_sensitive());
        assert_eq!(credentials.authentication_type(), "basic");
        Ok(())
    }

    #[test_case("", "p", true)]
    #[test_case("u", "", true)]
    #[test_case("{u}", "p", false)]
    #[test_case("u", "\"p\"", false)]
    fn build_errors(username: &str, password: &str, missing: bool) {
        let err = Builder::new(username, password).build().unwrap_err();
        assert_eq!(err.is_missing_field(), missing, "{err:?}");
        assert_eq!(err.is_invalid_field(), !missing, "{err:?}");
    }

    #[test]
    fn debug() -> anyhow::Result<()> {
        let builder = Builder::new("test-user", "test-secret");
        let got = format!("{builder:?}");
        assert!(got.contains("test-user"), "{got}");
        assert!(!got.contains("test-secret"), "{got}");

        let credentials = builder.build()?;
        let got = format!("{credentials:?}");
        assert!(!got.contains("dGVzdC11c2VyOnRlc3Qtc2VjcmV0"), "{got}");
        Ok(())
    }
}
