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

//! Provide types for client construction.
//!
//! Some applications need to construct clients with custom configuration, for
//! example, they may need to override the endpoint, the authentication
//! credentials, or enable retries. The IBM Cloud networking libraries for
//! Rust use a generic builder type to provide such functionality. The types
//! in this module implement the client builders.
//!
//! Applications should not create builders directly, instead each client type
//! defines a `builder()` function to obtain the correct type of builder.
//!
//! ## Example: create a client with the default configuration.
//!
//! ```
//! # use ibm_cloud_networking_gax::client_builder::examples;
//! # use ibm_cloud_networking_gax::client_builder::Result;
//! # tokio_test::block_on(async {
//! pub use examples::Client; // Placeholder for examples
//! let client = Client::builder().build().await?;
//! # Result::<()>::Ok(()) });
//! ```
//!
//! ## Example: create a client with a different endpoint
//!
//! ```
//! # use ibm_cloud_networking_gax::client_builder::examples;
//! # use ibm_cloud_networking_gax::client_builder::Result;
//! # tokio_test::block_on(async {
//! pub use examples::Client; // Placeholder for examples
//! let client = Client::builder()
//!     .with_endpoint("https://private.api.cis.cloud.ibm.com")
//!     .build().await?;
//! # Result::<()>::Ok(()) });
//! ```

use crate::backoff_policy::{BackoffPolicy, BackoffPolicyArg};
use crate::exponential_backoff::ExponentialBackoffBuilder;
use crate::external_config::ExternalConfig;
use crate::retry_policy::{NeverRetry, RetryPolicy, RetryPolicyArg, RetryPolicyExt, TransientErrors};
use std::sync::Arc;
use std::time::Duration;

/// The result type for this module.
pub type Result<T> = std::result::Result<T, Error>;

/// Indicates a problem while constructing a client.
///
/// # Examples
/// ```no_run
/// # use ibm_cloud_networking_gax::client_builder::examples;
/// use ibm_cloud_networking_gax::client_builder::Error as Error;
/// use examples::Client; // Placeholder for examples
/// # tokio_test::block_on(async {
/// let client = match Client::builder().build().await {
///     Ok(c) => c,
///     Err(e) if e.is_credentials() => {
///         println!("error during client initialization: {e}");
///         println!("troubleshoot using https://cloud.ibm.com/docs/account?topic=account-iamoverview");
///         return Err(e);
///     }
///     Err(e) => {
///         println!("error during client initialization {e}");
///         return Err(e);
///     }
/// };
/// # Ok::<(), Error>(()) });
/// ```
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct Error(ErrorKind);

impl Error {
    /// If true, the client could not initialize the credentials.
    pub fn is_credentials(&self) -> bool {
        matches!(&self.0, ErrorKind::Credentials(_))
    }

    /// If true, the client could not initialize the transport client.
    pub fn is_transport(&self) -> bool {
        matches!(&self.0, ErrorKind::Transport(_))
    }

    /// If true, the external configuration is invalid.
    pub fn is_configuration(&self) -> bool {
        matches!(&self.0, ErrorKind::Configuration(_))
    }

    /// Not part of the public API, subject to change without notice.
    #[doc(hidden)]
    pub fn cred<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::Credentials(source.into()))
    }

    /// Not part of the public API, subject to change without notice.
    #[doc(hidden)]
    pub fn transport<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::Transport(source.into()))
    }

    /// Not part of the public API, subject to change without notice.
    #[doc(hidden)]
    pub fn configuration<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::Configuration(source.into()))
    }
}

#[derive(thiserror::Error, Debug)]
enum ErrorKind {
    #[error("could not create the credentials")]
    Credentials(#[source] BoxError),
    #[error("could not initialize transport client")]
    Transport(#[source] BoxError),
    #[error("invalid client configuration")]
    Configuration(#[source] BoxError),
}

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A generic builder for clients.
///
/// In the IBM Cloud networking libraries for Rust a "client" represents a
/// connection to a specific service. Each client library defines one or more
/// client types. All the clients are initialized using a `ClientBuilder`.
///
/// Applications obtain a builder with the correct generic types using the
/// `builder()` method on each client:
/// ```
/// # use ibm_cloud_networking_gax::client_builder::examples;
/// # use ibm_cloud_networking_gax::client_builder::Result;
/// # tokio_test::block_on(async {
/// use examples::Client; // Placeholder for examples
/// let builder = Client::builder();
/// # Result::<()>::Ok(()) });
/// ```
///
/// To create a client with the default configuration just invoke the
/// `.build()` method:
/// ```
/// # use ibm_cloud_networking_gax::client_builder::examples;
/// # use ibm_cloud_networking_gax::client_builder::Result;
/// # tokio_test::block_on(async {
/// use examples::Client; // Placeholder for examples
/// let client = Client::builder().build().await?;
/// # Result::<()>::Ok(()) });
/// ```
///
/// As usual, the builder offers several method to configure the client, and a
/// `.build()` method to construct the client:
/// ```
/// # use ibm_cloud_networking_gax::client_builder::examples;
/// # use ibm_cloud_networking_gax::client_builder::Result;
/// # tokio_test::block_on(async {
/// use examples::Client; // Placeholder for examples
/// use std::time::Duration;
/// let client = Client::builder()
///     .with_endpoint("https://private.api.cis.cloud.ibm.com")
///     .with_retries(3, Duration::from_secs(10))
///     .build().await?;
/// # Result::<()>::Ok(()) });
/// ```
#[derive(Clone, Debug)]
pub struct ClientBuilder<F, Cr> {
    config: internal::ClientConfig<Cr>,
    factory: F,
}

impl<F, Cr> ClientBuilder<F, Cr> {
    /// Creates a new client.
    ///
    /// The external configuration, if any, is resolved at this point. Explicit
    /// settings in the builder take precedence over the external
    /// configuration.
    pub async fn build<C>(self) -> Result<C>
    where
        F: internal::ClientFactory<Client = C, Credentials = Cr>,
    {
        self.factory.build(self.config).await
    }

    /// Sets the endpoint.
    ///
    /// ```
    /// # use ibm_cloud_networking_gax::client_builder::examples;
    /// # use ibm_cloud_networking_gax::client_builder::Result;
    /// # tokio_test::block_on(async {
    /// use examples::Client; // Placeholder for examples
    /// let client = Client::builder()
    ///     .with_endpoint("https://private.api.cis.cloud.ibm.com")
    ///     .build().await?;
    /// # Result::<()>::Ok(()) });
    /// ```
    pub fn with_endpoint<V: Into<String>>(mut self, v: V) -> Self {
        self.config.endpoint = Some(v.into());
        self
    }

    /// Enables tracing.
    ///
    /// The client libraries can be dynamically instrumented with the Tokio
    /// [tracing] framework. Setting this flag enables this instrumentation.
    ///
    /// ```
    /// # use ibm_cloud_networking_gax::client_builder::examples;
    /// # use ibm_cloud_networking_gax::client_builder::Result;
    /// # tokio_test::block_on(async {
    /// use examples::Client; // Placeholder for examples
    /// let client = Client::builder()
    ///     .with_tracing()
    ///     .build().await?;
    /// # Result::<()>::Ok(()) });
    /// ```
    ///
    /// [tracing]: https://docs.rs/tracing/latest/tracing/
    pub fn with_tracing(mut self) -> Self {
        self.config.tracing = true;
        self
    }

    /// Configure the authentication credentials.
    ///
    /// Most IBM Cloud services require authentication. More information about
    /// valid credentials types can be found in the
    /// `ibm-cloud-networking-auth` crate documentation.
    ///
    /// ```
    /// # use ibm_cloud_networking_gax::client_builder::examples;
    /// # use ibm_cloud_networking_gax::client_builder::Result;
    /// # tokio_test::block_on(async {
    /// use examples::Client; // Placeholder for examples
    /// // Placeholder, normally use ibm_cloud_networking_auth::credentials
    /// use examples::credentials;
    /// let client = Client::builder()
    ///     .with_credentials(credentials::iam::Builder::new("my-api-key").build())
    ///     .build().await?;
    /// # Result::<()>::Ok(()) });
    /// ```
    pub fn with_credentials<T: Into<Cr>>(mut self, v: T) -> Self {
        self.config.cred = Some(v.into());
        self
    }

    /// Configure the client from external properties.
    ///
    /// The endpoint, credentials, and retry settings are read from the
    /// `<SERVICE_PREFIX>_*` properties, unless they are explicitly set in
    /// this builder.
    ///
    /// ```
    /// # use ibm_cloud_networking_gax::client_builder::examples;
    /// # use ibm_cloud_networking_gax::client_builder::Result;
    /// # use ibm_cloud_networking_gax::external_config::ExternalConfig;
    /// # tokio_test::block_on(async {
    /// use examples::Client; // Placeholder for examples
    /// let config = ExternalConfig::from_vars("example", [
    ///     ("EXAMPLE_URL", "https://private.api.cis.cloud.ibm.com"),
    ///     ("EXAMPLE_AUTH_TYPE", "noauth"),
    /// ]);
    /// let client = Client::builder()
    ///     .with_external_config(config)
    ///     .build().await?;
    /// # Result::<()>::Ok(()) });
    /// ```
    pub fn with_external_config(mut self, v: ExternalConfig) -> Self {
        self.config.external_config = Some(v);
        self
    }

    /// Enable retries for transient errors.
    ///
    /// Failed requests are retried at most `max_retries` times, waiting at
    /// most `max_interval` between attempts. Requests that fail with `429 Too
    /// Many Requests` or `503 Service Unavailable` are always retried. Other
    /// transient errors are only retried for idempotent requests.
    ///
    /// ```
    /// # use ibm_cloud_networking_gax::client_builder::examples;
    /// # use ibm_cloud_networking_gax::client_builder::Result;
    /// # tokio_test::block_on(async {
    /// use examples::Client; // Placeholder for examples
    /// use std::time::Duration;
    /// let client = Client::builder()
    ///     .with_retries(3, Duration::from_secs(30))
    ///     .build().await?;
    /// # Result::<()>::Ok(()) });
    /// ```
    pub fn with_retries(mut self, max_retries: u32, max_interval: Duration) -> Self {
        let (retry, backoff) = internal::retries(max_retries, max_interval);
        self.config.retry_policy = Some(retry);
        self.config.backoff_policy = Some(backoff);
        self
    }

    /// Disable retries.
    ///
    /// This is the default, use this function to override any retry settings
    /// in the external configuration.
    pub fn without_retries(mut self) -> Self {
        self.config.retry_policy = Some(Arc::new(NeverRetry));
        self.config.backoff_policy = None;
        self
    }

    /// Configure the retry policy.
    ///
    /// The client libraries can automatically retry operations that fail. The
    /// retry policy controls what errors are considered retryable, sets limits
    /// on the number of attempts or the time trying to make attempts.
    ///
    /// ```
    /// # use ibm_cloud_networking_gax::client_builder::examples;
    /// # use ibm_cloud_networking_gax as gax;
    /// # use ibm_cloud_networking_gax::client_builder::Result;
    /// # tokio_test::block_on(async {
    /// use examples::Client; // Placeholder for examples
    /// use gax::retry_policy::{AlwaysRetry, RetryPolicyExt};
    /// let client = Client::builder()
    ///     .with_retry_policy(AlwaysRetry.with_attempt_limit(3))
    ///     .build().await?;
    /// # Result::<()>::Ok(()) });
    /// ```
    pub fn with_retry_policy<V: Into<RetryPolicyArg>>(mut self, v: V) -> Self {
        self.config.retry_policy = Some(v.into().into());
        self
    }

    /// Configure the retry backoff policy.
    ///
    /// The backoff policy controls how long to wait in between retry attempts.
    ///
    /// ```
    /// # use ibm_cloud_networking_gax::client_builder::examples;
    /// # use ibm_cloud_networking_gax as gax;
    /// # use ibm_cloud_networking_gax::client_builder::Result;
    /// # tokio_test::block_on(async {
    /// use examples::Client; // Placeholder for examples
    /// use gax::exponential_backoff::ExponentialBackoff;
    /// let policy = ExponentialBackoff::default();
    /// let client = Client::builder()
    ///     .with_backoff_policy(policy)
    ///     .build().await?;
    /// # Result::<()>::Ok(()) });
    /// ```
    pub fn with_backoff_policy<V: Into<BackoffPolicyArg>>(mut self, v: V) -> Self {
        self.config.backoff_policy = Some(v.into().into());
        self
    }
}

#[doc(hidden)]
pub mod internal {
    use super::*;

    pub trait ClientFactory {
        type Client;
        type Credentials;
        fn build(
            self,
            config: internal::ClientConfig<Self::Credentials>,
        ) -> impl Future<Output = Result<Self::Client>>;
    }

    pub fn new_builder<F, Cr, C>(factory: F) -> super::ClientBuilder<F, Cr>
    where
        F: ClientFactory<Client = C, Credentials = Cr>,
    {
        super::ClientBuilder {
            factory,
            config: ClientConfig::default(),
        }
    }

    /// The retry and backoff policies for `max_retries` and `max_interval`.
    pub fn retries(
        max_retries: u32,
        max_interval: Duration,
    ) -> (Arc<dyn RetryPolicy>, Arc<dyn BackoffPolicy>) {
        let retry = TransientErrors.with_attempt_limit(max_retries.saturating_add(1));
        let backoff = ExponentialBackoffBuilder::with_max_interval(max_interval).clamp();
        (Arc::new(retry), Arc::new(backoff))
    }

    /// Configure a client.
    ///
    /// A client represents a connection to an IBM Cloud service. Each service
    /// has one or more client types. The default configuration for each client
    /// should work for most applications. But some applications may need to
    /// override the default endpoint, the default authentication credentials,
    /// the retry policies, and/or other behaviors of the client.
    #[derive(Clone, Debug)]
    pub struct ClientConfig<Cr> {
        pub endpoint: Option<String>,
        pub cred: Option<Cr>,
        pub tracing: bool,
        pub retry_policy: Option<Arc<dyn RetryPolicy>>,
        pub backoff_policy: Option<Arc<dyn BackoffPolicy>>,
        pub external_config: Option<ExternalConfig>,
    }

    impl<Cr> std::default::Default for ClientConfig<Cr> {
        fn default() -> Self {
            Self {
                endpoint: None,
                cred: None,
                tracing: false,
                retry_policy: None,
                backoff_policy: None,
                external_config: None,
            }
        }
    }
}

#[doc(hidden)]
pub mod examples {
    //! This module contains helper types used in the rustdoc examples.
    //!
    //! The examples require relatively complex types to be useful.

    type Config = super::internal::ClientConfig<Credentials>;
    use super::Result;

    /// A client type for use in examples.
    ///
    /// This type is used in examples as a placeholder for a real client. It
    /// does not work, but illustrates how to use `ClientBuilder`.
    #[allow(dead_code)]
    pub struct Client(pub(crate) Config);
    impl Client {
        /// Create a builder to initialize new instances of this client.
        pub fn builder() -> client::Builder {
            super::internal::new_builder(client::Factory)
        }

        async fn new(config: super::internal::ClientConfig<Credentials>) -> Result<Self> {
            Ok(Self(config))
        }
    }
    mod client {
        pub type Builder = super::super::ClientBuilder<Factory, super::Credentials>;
        pub struct Factory;
        impl super::super::internal::ClientFactory for Factory {
            type Credentials = super::Credentials;
            type Client = super::Client;
            async fn build(
                self,
                config: crate::client_builder::internal::ClientConfig<Self::Credentials>,
            ) -> super::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Credentials {
        pub api_key: String,
    }

    pub mod credentials {
        pub mod iam {
            #[derive(Clone, Default)]
            pub struct Builder(super::super::Credentials);
            impl Builder {
                pub fn new<V: Into<String>>(api_key: V) -> Self {
                    Self(super::super::Credentials {
                        api_key: api_key.into(),
                    })
                }
                pub fn build(self) -> super::super::Credentials {
                    self.0
                }
            }
        }
    }
}
