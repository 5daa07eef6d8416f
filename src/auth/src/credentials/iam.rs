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

//! [IAM] API key credentials.
//!
//! These credentials exchange an IAM API key for short-lived access tokens.
//! The tokens are cached, and refreshed once 80% of their lifetime has
//! elapsed. Concurrent requests share a single refresh.
//!
//! # Example
//! ```
//! # use ibm_cloud_networking_auth::credentials::iam::Builder;
//! let credentials = Builder::new("my-api-key")
//!     .with_url("https://private.iam.cloud.ibm.com")
//!     .build()?;
//! assert_eq!(credentials.authentication_type(), "iam");
//! # Ok::<(), ibm_cloud_networking_auth::build_errors::Error>(())
//! ```
//!
//! [IAM]: https://cloud.ibm.com/docs/account?topic=account-iamoverview

use crate::build_errors::Error as BuildError;
use crate::credentials::{Credentials, CredentialsProvider, auth_type, basic, validate_secret};
use crate::errors::{self, CredentialsError, is_retryable};
use crate::token::{Token, TokenProvider};
use crate::token_cache::TokenCache;
use crate::{BuildResult, Result};
use http::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use std::time::Duration;
use tokio::time::Instant;

const DEFAULT_URL: &str = "https://iam.cloud.ibm.com";
const TOKEN_PATH: &str = "/identity/token";
const GRANT_TYPE: &str = "urn:ibm:params:oauth:grant-type:apikey";
const RESPONSE_TYPE: &str = "cloud_iam";
// Refresh the token after this fraction of its lifetime.
const REFRESH_FRACTION: f64 = 0.8;

/// A builder for IAM API key credentials.
pub struct Builder {
    api_key: String,
    url: Option<String>,
    client_id_and_secret: Option<(String, String)>,
}

impl std::fmt::Debug for Builder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Builder")
            .field("api_key", &"[censored]")
            .field("url", &self.url)
            .field(
                "client_id",
                &self.client_id_and_secret.as_ref().map(|(id, _)| id),
            )
            .finish()
    }
}

impl Builder {
    pub fn new<T: Into<String>>(api_key: T) -> Self {
        Self {
            api_key: api_key.into(),
            url: None,
            client_id_and_secret: None,
        }
    }

    /// Changes the IAM token service URL.
    ///
    /// The default is `https://iam.cloud.ibm.com`. The `/identity/token` path
    /// is appended if missing.
    pub fn with_url<T: Into<String>>(mut self, url: T) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Authenticates the token requests with a client id and secret.
    ///
    /// Only needed when the IAM service requires it for the API key.
    pub fn with_client_id_and_secret<I, S>(mut self, client_id: I, client_secret: S) -> Self
    where
        I: Into<String>,
        S: Into<String>,
    {
        self.client_id_and_secret = Some((client_id.into(), client_secret.into()));
        self
    }

    /// Returns a [Credentials] instance with the configured settings.
    ///
    /// This does not contact the IAM service, the first token is fetched
    /// with the first request.
    ///
    /// # Errors
    ///
    /// Fails if the API key is empty, if it is wrapped in braces or quotes, or
    /// if the client id and secret cannot be used in an HTTP header.
    pub fn build(self) -> BuildResult<Credentials> {
        validate_secret("apikey", &self.api_key)?;
        let client_authorization = self
            .client_id_and_secret
            .as_ref()
            .map(|(id, secret)| basic::authorization(id, secret))
            .transpose()
            .map_err(|e| BuildError::invalid_field("client_id", e))?;
        let url = self.url.as_deref().unwrap_or(DEFAULT_URL);
        let url = url.trim_end_matches('/');
        let endpoint = if url.ends_with(TOKEN_PATH) {
            url.to_string()
        } else {
            format!("{url}{TOKEN_PATH}")
        };
        let provider = IamTokenProvider {
            api_key: self.api_key,
            endpoint,
            client_authorization,
            client: reqwest::Client::new(),
        };
        Ok(Credentials::from(IamCredentials {
            token_provider: TokenCache::new(provider),
        }))
    }
}

struct IamTokenProvider {
    api_key: String,
    endpoint: String,
    client_authorization: Option<HeaderValue>,
    client: reqwest::Client,
}

impl std::fmt::Debug for IamTokenProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IamTokenProvider")
            .field("api_key", &"[censored]")
            .field("endpoint", &self.endpoint)
            .field(
                "client_authorization",
                &self.client_authorization.as_ref().map(|_| "[censored]"),
            )
            .finish()
    }
}

#[async_trait::async_trait]
impl TokenProvider for IamTokenProvider {
    async fn token(&self) -> Result<Token> {
        let form = [
            ("grant_type", GRANT_TYPE),
            ("apikey", self.api_key.as_str()),
            ("response_type", RESPONSE_TYPE),
        ];
        let mut builder = self
            .client
            .post(self.endpoint.as_str())
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .form(&form);
        if let Some(value) = &self.client_authorization {
            builder = builder.header(AUTHORIZATION, value.clone());
        }
        tracing::debug!(endpoint = %self.endpoint, "fetching IAM access token");
        let resp = builder.send().await.map_err(errors::retryable)?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp
                .text()
                .await
                .map_err(|e| CredentialsError::new(is_retryable(status), e))?;
            return Err(CredentialsError::from_msg(
                is_retryable(status),
                format!("cannot fetch IAM access token, status={status}, body={body}"),
            ));
        }
        let response = resp.json::<IamTokenResponse>().await.map_err(|e| {
            let retryable = !e.is_decode();
            CredentialsError::new(retryable, e)
        })?;
        Ok(response.into_token(Instant::now()))
    }
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
struct IamTokenResponse {
    access_token: String,
    #[serde(default)]
    token_type: Option<String>,
    expires_in: u64,
}

impl IamTokenResponse {
    fn into_token(self, now: Instant) -> Token {
        let token_type = self.token_type.unwrap_or_else(|| "Bearer".to_string());
        Token::new(self.access_token, token_type).with_lifetime(
            now,
            Duration::from_secs(self.expires_in),
            REFRESH_FRACTION,
        )
    }
}

#[derive(Debug)]
struct IamCredentials<T>
where
    T: TokenProvider,
{
    token_provider: TokenCache<T>,
}

impl<T> CredentialsProvider for IamCredentials<T>
where
    T: TokenProvider + 'static,
{
    async fn headers(&self) -> Result<HeaderMap> {
        let token = self.token_provider.token().await?;
        Ok(HeaderMap::from_iter([(AUTHORIZATION, token.authorization()?)]))
    }

    fn authentication_type(&self) -> &'static str {
        auth_type::IAM
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::tests::MockTokenProvider;
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use serde_json::json;
    use test_case::test_case;

    fn token_response(token: &str) -> serde_json::Value {
        json!({
            "access_token": token,
            "refresh_token": "not-used",
            "token_type": "Bearer",
            "expires_in": 3600,
            "expiration": 1_700_003_600,
        })
    }

    #[tokio::test]
    async fn exchange_api_key() -> anyhow::Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/identity/token"),
                request::headers(contains(("accept", "application/json"))),
                request::body(url_decoded(contains(("grant_type", GRANT_TYPE)))),
                request::body(url_decoded(contains(("apikey", "test-api-key")))),
                request::body(url_decoded(contains(("response_type", "cloud_iam")))),
            ])
            .times(1)
            .respond_with(json_encoded(token_response("test-access-token"))),
        );

        let credentials = Builder::new("test-api-key")
            .with_url(server.url_str("/"))
            .build()?;
        // The second call uses the cached token.
        for _ in 0..2 {
            let headers = credentials.headers().await?;
            let value = headers.get(AUTHORIZATION).expect("has authorization");
            assert_eq!(value, "Bearer test-access-token");
            assert!(value.is_sensitive());
        }
        Ok(())
    }

    #[tokio::test]
    async fn client_id_and_secret() -> anyhow::Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/identity/token"),
                request::headers(contains(("authorization", "Basic aWQ6c2VjcmV0"))),
            ])
            .respond_with(json_encoded(token_response("test-access-token"))),
        );

        let credentials = Builder::new("test-api-key")
            .with_url(server.url_str("/identity/token"))
            .with_client_id_and_secret("id", "secret")
            .build()?;
        let headers = credentials.headers().await?;
        assert_eq!(
            headers.get(AUTHORIZATION),
            Some(&HeaderValue::from_static("Bearer test-access-token"))
        );
        Ok(())
    }

    #[test_case(503, true)]
    #[test_case(429, true)]
    #[test_case(400, false)]
    #[test_case(401, false)]
    #[tokio::test]
    async fn token_service_errors(code: u16, transient: bool) -> anyhow::Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", "/identity/token"))
                .respond_with(status_code(code).body("uh-oh")),
        );

        let credentials = Builder::new("test-api-key")
            .with_url(server.url_str(""))
            .build()?;
        let err = credentials.headers().await.unwrap_err();
        assert_eq!(err.is_transient(), transient, "{err:?}");
        assert!(err.to_string().contains("uh-oh"), "{err}");
        Ok(())
    }

    #[tokio::test]
    async fn malformed_response() -> anyhow::Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", "/identity/token"))
                .respond_with(json_encoded(json!({"unexpected": "field"}))),
        );

        let credentials = Builder::new("test-api-key")
            .with_url(server.url_str(""))
            .build()?;
        let err = credentials.headers().await.unwrap_err();
        assert!(!err.is_transient(), "{err:?}");
        Ok(())
    }

    #[test]
    fn refresh_at_fraction_of_lifetime() {
        let now = Instant::now();
        let response = IamTokenResponse {
            access_token: "test-token".into(),
            token_type: None,
            expires_in: 3600,
        };
        let token = response.into_token(now);
        assert_eq!(token.access_token, "test-token");
        assert_eq!(token.token_type, "Bearer");
        assert_eq!(token.refresh_at, Some(now + Duration::from_secs(2880)));
        assert_eq!(token.expires_at, Some(now + Duration::from_secs(3600)));
    }

    #[tokio::test]
    async fn headers_from_provider() -> anyhow::Result<()> {
        let mut mock = MockTokenProvider::new();
        mock.expect_token().times(1).return_once(|| {
            Ok(Token::new("mock-token", "Bearer"))
        });
        let credentials = IamCredentials {
            token_provider: TokenCache::new(mock),
        };
        let headers = credentials.headers().await?;
        assert_eq!(
            headers.get(AUTHORIZATION),
            Some(&HeaderValue::from_static("Bearer mock-token"))
        );
        Ok(())
    }

    #[test_case("")]
    #[test_case("{key}")]
    fn build_errors(api_key: &str) {
        let err = Builder::new(api_key).build().unwrap_err();
        assert!(err.is_missing_field() || err.is_invalid_field(), "{err:?}");
    }

    #[test]
    fn debug() -> anyhow::Result<()> {
        let builder = Builder::new("test-api-key").with_client_id_and_secret("id", "test-secret");
        let got = format!("{builder:?}");
        assert!(!got.contains("test-api-key"), "{got}");
        assert!(!got.contains("test-secret"), "{got}");

        let credentials = builder.build()?;
        let got = format!("{credentials:?}");
        assert!(!got.contains("test-api-key"), "{got}");
        assert!(got.contains("https://iam.cloud.ibm.com/identity/token"), "{got}");
        Ok(())
    }
}
