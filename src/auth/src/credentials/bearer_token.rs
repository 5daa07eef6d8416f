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

//! Credentials using a bearer token managed by the application.
//!
//! The token is sent as-is, in an `Authorization: Bearer ...` header. The
//! client libraries never refresh these tokens. Applications must create new
//! credentials, and a new client, before the token expires.
//!
//! # Example
//! ```
//! # use ibm_cloud_networking_auth::credentials::bearer_token::Builder;
//! # tokio_test::block_on(async {
//! let credentials = Builder::new("my-access-token").build()?;
//! assert_eq!(credentials.authentication_type(), "bearertoken");
//! # Ok::<(), anyhow::Error>(()) });
//! ```

use crate::build_errors::Error as BuildError;
use crate::credentials::{Credentials, CredentialsProvider, auth_type};
use crate::{BuildResult, Result};
use http::header::{AUTHORIZATION, HeaderMap, HeaderValue};

struct BearerTokenCredentials {
    header: HeaderValue,
}

impl std::fmt::Debug for BearerTokenCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BearerTokenCredentials")
            .field("header", &"[censored]")
            .finish()
    }
}

impl CredentialsProvider for BearerTokenCredentials {
    async fn headers(&self) -> Result<HeaderMap> {
        Ok(HeaderMap::from_iter([(AUTHORIZATION, self.header.clone())]))
    }

    fn authentication_type(&self) -> &'static str {
        auth_type::BEARER_TOKEN
    }
}

/// A builder for bearer token credentials.
pub struct Builder {
    token: String,
}

impl std::fmt::Debug for Builder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Builder")
            .field("token", &"[censored]")
            .finish()
    }
}

impl Builder {
    pub fn new<T: Into<String>>(token: T) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// Returns a [Credentials] instance with the configured settings.
    ///
    /// # Errors
    ///
    /// Fails if the token is empty or cannot be used in an HTTP header.
    pub fn build(self) -> BuildResult<Credentials> {
        if self.token.is_empty() {
            return Err(BuildError::missing_field("bearer_token"));
        }
        let mut header = HeaderValue::from_str(&format!("Bearer {}", self.token))
            .map_err(|e| BuildError::invalid_field("bearer_token", e))?;
        header.set_sensitive(true);
        Ok(Credentials::from(BearerTokenCredentials { header }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn headers() -> anyhow::Result<()> {
        let credentials = Builder::new("test-token").build()?;
        let headers = credentials.headers().await?;
        let value = headers.get(AUTHORIZATION).expect("has an authorization header");
        assert_eq!(value, "Bearer test-token");
        assert!(value.is_sensitive());
        Ok(())
    }

    #[test]
    fn build_errors() {
        let err = Builder::new("").build().unwrap_err();
        assert!(err.is_missing_field(), "{err:?}");
        let err = Builder::new("bad\ntoken").build().unwrap_err();
        assert!(err.is_invalid_field(), "{err:?}");
    }

    #[test]
    fn debug() -> anyhow::Result<()> {
        let builder = Builder::new("test-token");
        let got = format!("{builder:?}");
        assert!(!got.contains("test-token"), "{got}");
        let credentials = builder.build()?;
        let got = format!("{credentials:?}");
        assert!(!got.contains("test-token"), "{got}");
        Ok(())
    }
}
