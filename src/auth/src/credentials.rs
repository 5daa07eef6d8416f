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

//! Types and functions to work with IBM Cloud authentication credentials.
//!
//! The client libraries consume [Credentials] to create the authentication
//! headers for each request. Applications create credentials using one of the
//! builders in the submodules, or from the external configuration of a
//! service, see [Builder].
//!
//! # Example
//! ```
//! # use ibm_cloud_networking_auth::credentials::bearer_token;
//! # tokio_test::block_on(async {
//! let credentials = bearer_token::Builder::new("my-token").build()?;
//! let headers = credentials.headers().await?;
//! assert_eq!(headers.get(http::header::AUTHORIZATION).map(|v| v.as_bytes()), Some(&b"Bearer my-token"[..]));
//! # Ok::<(), anyhow::Error>(()) });
//! ```

pub mod basic;
pub mod bearer_token;
pub mod iam;
pub mod no_auth;

use crate::BuildResult;
use crate::Result;
use crate::build_errors::Error as BuildError;
use gax::external_config::{ExternalConfig, keys};
use http::HeaderMap;
use std::future::Future;
use std::sync::Arc;

/// The values of `<PREFIX>_AUTH_TYPE` recognized by [Builder].
pub mod auth_type {
    pub const IAM: &str = "iam";
    pub const BASIC: &str = "basic";
    pub const BEARER_TOKEN: &str = "bearertoken";
    pub const NO_AUTH: &str = "noauth";
}

/// An implementation of [crate::credentials::CredentialsProvider].
///
/// Represents a [Credentials] used to obtain the auth request headers.
///
/// Clones share the same underlying provider, including any cached token.
#[derive(Clone, Debug)]
pub struct Credentials {
    inner: Arc<dyn dynamic::CredentialsProvider>,
}

impl<T> std::convert::From<T> for Credentials
where
    T: crate::credentials::CredentialsProvider + Send + Sync + 'static,
{
    fn from(value: T) -> Self {
        Self {
            inner: Arc::new(value),
        }
    }
}

impl Credentials {
    /// Returns the headers to authenticate one request.
    pub async fn headers(&self) -> Result<HeaderMap> {
        self.inner.headers().await
    }

    /// The authentication type, one of the [auth_type] values.
    pub fn authentication_type(&self) -> &'static str {
        self.inner.authentication_type()
    }
}

/// Represents a provider of authentication headers.
///
/// Applications rarely implement this trait. The exception is tests, or
/// applications with a custom authentication scheme, for example, a token
/// obtained from a secrets manager.
///
/// # Example
/// ```
/// # use ibm_cloud_networking_auth::credentials::{Credentials, CredentialsProvider};
/// # use ibm_cloud_networking_auth::errors::CredentialsError;
/// # use http::HeaderMap;
/// #[derive(Debug)]
/// struct MyCredentials;
/// impl CredentialsProvider for MyCredentials {
///     async fn headers(&self) -> Result<HeaderMap, CredentialsError> {
///         Ok(HeaderMap::new())
///     }
///     fn authentication_type(&self) -> &'static str {
///         "custom"
///     }
/// }
/// let credentials = Credentials::from(MyCredentials);
/// assert_eq!(credentials.authentication_type(), "custom");
/// ```
pub trait CredentialsProvider: std::fmt::Debug {
    /// Asynchronously constructs the auth headers.
    fn headers(&self) -> impl Future<Output = Result<HeaderMap>> + Send;

    /// The authentication type.
    fn authentication_type(&self) -> &'static str;
}

pub mod dynamic {
    use super::Result;
    use http::HeaderMap;

    /// A dyn-compatible, crate-private version of `CredentialsProvider`.
    #[async_trait::async_trait]
    pub trait CredentialsProvider: Send + Sync + std::fmt::Debug {
        async fn headers(&self) -> Result<HeaderMap>;

        fn authentication_type(&self) -> &'static str;
    }

    /// The public CredentialsProvider implements the dyn-compatible CredentialsProvider.
    #[async_trait::async_trait]
    impl<T> CredentialsProvider for T
    where
        T: super::CredentialsProvider + Send + Sync,
    {
        async fn headers(&self) -> Result<HeaderMap> {
            T::headers(self).await
        }

        fn authentication_type(&self) -> &'static str {
            T::authentication_type(self)
        }
    }
}

/// Creates [Credentials] from the external configuration of a service.
///
/// The authenticator is selected by `<PREFIX>_AUTH_TYPE`:
///
/// | `AUTH_TYPE`   | Properties                                         |
/// |---------------|----------------------------------------------------|
/// | `iam`         | `APIKEY`, optional `AUTH_URL`, `CLIENT_ID`, `CLIENT_SECRET` |
/// | `basic`       | `USERNAME`, `PASSWORD`                             |
/// | `bearertoken` | `BEARER_TOKEN`                                     |
/// | `noauth`      |                                                    |
///
/// The value is case-insensitive. If `<PREFIX>_AUTH_TYPE` is not set, but
/// `<PREFIX>_APIKEY` is, the builder creates IAM credentials.
///
/// # Example
/// ```
/// # use ibm_cloud_networking_auth::credentials::Builder;
/// # use gax::external_config::ExternalConfig;
/// let config = ExternalConfig::from_vars("logpush_jobs_api", [
///     ("LOGPUSH_JOBS_API_AUTH_TYPE", "noauth"),
/// ]);
/// let credentials = Builder::from_external_config(&config)?;
/// assert_eq!(credentials.authentication_type(), "noauth");
/// # Ok::<(), ibm_cloud_networking_auth::build_errors::Error>(())
/// ```
#[derive(Debug)]
pub struct Builder {
    config: ExternalConfig,
}

impl Builder {
    /// Creates a builder using the given configuration.
    pub fn new(config: ExternalConfig) -> Self {
        Self { config }
    }

    /// Creates credentials from `config`.
    pub fn from_external_config(config: &ExternalConfig) -> BuildResult<Credentials> {
        Self::new(config.clone()).build()
    }

    /// Returns a [Credentials] instance with the configured settings.
    pub fn build(self) -> BuildResult<Credentials> {
        let auth_type = match self.config.auth_type() {
            Some(t) => t.to_lowercase(),
            None if self.config.get(keys::APIKEY).is_some() => auth_type::IAM.to_string(),
            None => return Err(BuildError::missing_field(keys::AUTH_TYPE)),
        };
        match auth_type.as_str() {
            auth_type::IAM => self.iam(),
            auth_type::BASIC => basic::Builder::new(
                self.required(keys::USERNAME)?,
                self.required(keys::PASSWORD)?,
            )
            .build(),
            auth_type::BEARER_TOKEN => {
                bearer_token::Builder::new(self.required(keys::BEARER_TOKEN)?).build()
            }
            auth_type::NO_AUTH => Ok(no_auth::Builder::new().build()),
            unknown => Err(BuildError::unknown_type(unknown.to_string())),
        }
    }

    fn iam(&self) -> BuildResult<Credentials> {
        let mut builder = iam::Builder::new(self.required(keys::APIKEY)?);
        if let Some(url) = self.config.get(keys::AUTH_URL) {
            builder = builder.with_url(url);
        }
        match (
            self.config.get(keys::CLIENT_ID),
            self.config.get(keys::CLIENT_SECRET),
        ) {
            (Some(id), Some(secret)) => builder = builder.with_client_id_and_secret(id, secret),
            (None, None) => {}
            (Some(_), None) => return Err(BuildError::missing_field(keys::CLIENT_SECRET)),
            (None, Some(_)) => return Err(BuildError::missing_field(keys::CLIENT_ID)),
        }
        builder.build()
    }

    fn required(&self, key: &'static str) -> BuildResult<&str> {
        self.config
            .get(key)
            .ok_or_else(|| BuildError::missing_field(key))
    }
}

// Values copied from the IBM Cloud console sometimes keep the surrounding
// braces or quotes.
pub(crate) fn validate_secret(field: &'static str, value: &str) -> BuildResult<()> {
    if value.is_empty() {
        return Err(BuildError::missing_field(field));
    }
    let quoted = |open: char, close: char| value.starts_with(open) || value.ends_with(close);
    if quoted('{', '}') || quoted('"', '"') {
        return Err(BuildError::invalid_field(
            field,
            "the value must not begin or end with braces or quotes",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn config<const N: usize>(vars: [(&str, &str); N]) -> ExternalConfig {
        ExternalConfig::from_vars("test_service", vars)
    }

    #[test_case(config([("TEST_SERVICE_AUTH_TYPE", "noauth")]), auth_type::NO_AUTH)]
    #[test_case(config([("TEST_SERVICE_AUTH_TYPE", "NOAUTH")]), auth_type::NO_AUTH)]
    #[test_case(config([("TEST_SERVICE_AUTH_TYPE", "bearerToken"), ("TEST_SERVICE_BEARER_TOKEN", "t")]), auth_type::BEARER_TOKEN)]
    #[test_case(config([("TEST_SERVICE_AUTH_TYPE", "basic"), ("TEST_SERVICE_USERNAME", "u"), ("TEST_SERVICE_PASSWORD", "p")]), auth_type::BASIC)]
    #[test_case(config([("TEST_SERVICE_AUTH_TYPE", "iam"), ("TEST_SERVICE_APIKEY", "k")]), auth_type::IAM)]
    #[test_case(config([("TEST_SERVICE_APIKEY", "k")]), auth_type::IAM)]
    #[test_case(config([("TEST_SERVICE_APIKEY", "k"), ("TEST_SERVICE_AUTH_URL", "http://127.0.0.1:1"), ("TEST_SERVICE_CLIENT_ID", "id"), ("TEST_SERVICE_CLIENT_SECRET", "s")]), auth_type::IAM)]
    fn select(config: ExternalConfig, want: &str) -> anyhow::Result<()> {
        let got = Builder::from_external_config(&config)?;
        assert_eq!(got.authentication_type(), want);
        Ok(())
    }

    #[test_case(config([]), keys::AUTH_TYPE)]
    #[test_case(config([("TEST_SERVICE_AUTH_TYPE", "iam")]), keys::APIKEY)]
    #[test_case(config([("TEST_SERVICE_AUTH_TYPE", "basic"), ("TEST_SERVICE_USERNAME", "u")]), keys::PASSWORD)]
    #[test_case(config([("TEST_SERVICE_AUTH_TYPE", "bearertoken")]), keys::BEARER_TOKEN)]
    #[test_case(config([("TEST_SERVICE_APIKEY", "k"), ("TEST_SERVICE_CLIENT_ID", "id")]), keys::CLIENT_SECRET)]
    fn missing(config: ExternalConfig, field: &str) {
        let err = Builder::from_external_config(&config).unwrap_err();
        assert!(err.is_missing_field(), "{err:?}");
        assert!(err.to_string().contains(field), "{err}");
    }

    #[test]
    fn unknown_type() {
        let config = config([("TEST_SERVICE_AUTH_TYPE", "cp4d")]);
        let err = Builder::from_external_config(&config).unwrap_err();
        assert!(err.is_unknown_type(), "{err:?}");
        assert!(err.to_string().contains("cp4d"), "{err}");
    }

    #[test_case("{abc}")]
    #[test_case("\"abc\"")]
    #[test_case("{abc")]
    fn invalid_secret(value: &str) {
        let err = validate_secret("apikey", value).unwrap_err();
        assert!(err.is_invalid_field(), "{err:?}");
    }

    #[test]
    fn valid_secret() -> anyhow::Result<()> {
        validate_secret("apikey", "abc-123_XYZ")?;
        Ok(())
    }

    #[derive(Debug)]
    struct Custom;
    impl CredentialsProvider for Custom {
        async fn headers(&self) -> Result<HeaderMap> {
            let mut headers = HeaderMap::new();
            headers.insert("x-custom", http::HeaderValue::from_static("value"));
            Ok(headers)
        }
        fn authentication_type(&self) -> &'static str {
            "custom"
        }
    }

    #[tokio::test]
    async fn custom_provider() -> anyhow::Result<()> {
        let credentials = Credentials::from(Custom);
        let clone = credentials.clone();
        let headers = clone.headers().await?;
        assert_eq!(
            headers.get("x-custom"),
            Some(&http::HeaderValue::from_static("value"))
        );
        assert_eq!(credentials.authentication_type(), "custom");
        Ok(())
    }

    #[test]
    fn builder_debug() {
        let builder = Builder::new(config([
            ("TEST_SERVICE_AUTH_TYPE", "iam"),
            ("TEST_SERVICE_APIKEY", "super-secret-key"),
            ("TEST_SERVICE_CLIENT_ID", "bx"),
            ("TEST_SERVICE_CLIENT_SECRET", "bx-secret"),
        ]));
        let got = format!("{builder:?}");
        assert!(!got.contains("super-secret-key"), "{got}");
        assert!(!got.contains("bx-secret"), "{got}");
        assert!(got.contains("[censored]"), "{got}");
        assert!(got.contains("\"CLIENT_ID\": \"bx\""), "{got}");
    }

    #[test]
    fn traits() {
        static_assertions::assert_impl_all!(Credentials: Clone, Send, Sync, std::fmt::Debug);
    }
}
