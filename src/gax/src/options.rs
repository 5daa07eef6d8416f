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

//! Client configuration and per request options.
//!
//! While the client library defaults are intended to work for most
//! applications, it is sometimes necessary to change the configuration of a
//! single request. Applications sometimes set a deadline for a specific call,
//! add custom headers, or change the retry configuration. The `*Builder`
//! returned by each client method implements the [RequestOptionsBuilder] trait
//! where applications can override some defaults.

use crate::backoff_policy::{BackoffPolicy, BackoffPolicyArg};
use crate::retry_policy::{RetryPolicy, RetryPolicyArg};
use std::sync::Arc;
use std::time::Duration;

/// A set of options configuring a single request.
///
/// Application only use this class directly in mocks, where they may want to
/// verify their application has configured all the right request parameters
/// and options.
///
/// All other code uses this type indirectly, via the per-request builders.
#[derive(Clone, Debug, Default)]
pub struct RequestOptions {
    idempotent: Option<bool>,
    user_agent: Option<String>,
    attempt_timeout: Option<Duration>,
    deadline: Option<Duration>,
    headers: Vec<(String, String)>,
    retry_policy: Option<Arc<dyn RetryPolicy>>,
    backoff_policy: Option<Arc<dyn BackoffPolicy>>,
}

impl RequestOptions {
    /// Gets the idempotency.
    pub fn idempotent(&self) -> Option<bool> {
        self.idempotent
    }

    /// Treat the underlying request as idempotent.
    ///
    /// If a retry policy is configured, the policy may examine the idempotency
    /// and the error details to decide if the error is retryable. Typically
    /// [idempotent] requests are safe to retry under more error conditions
    /// than non-idempotent requests.
    ///
    /// The client libraries provide a default for idempotency, based on the
    /// HTTP method (`GET`, `POST`, `DELETE`, etc.).
    ///
    /// [idempotent]: https://en.wikipedia.org/wiki/Idempotence
    pub fn set_idempotency(&mut self, value: bool) {
        self.idempotent = Some(value);
    }

    /// Set the idempotency for the underlying request unless it is already set.
    pub(crate) fn set_default_idempotency(&mut self, default: bool) {
        self.idempotent.get_or_insert(default);
    }

    /// Prepends this prefix to the user agent header value.
    pub fn set_user_agent<T: Into<String>>(&mut self, v: T) {
        self.user_agent = Some(v.into());
    }

    /// Gets the current user-agent prefix.
    pub fn user_agent(&self) -> &Option<String> {
        &self.user_agent
    }

    /// Sets the per-attempt timeout.
    ///
    /// When using a retry loop, this affects the timeout for each attempt. Use
    /// [set_deadline][Self::set_deadline] to limit the time spent in all
    /// attempts.
    pub fn set_attempt_timeout<T: Into<Duration>>(&mut self, v: T) {
        self.attempt_timeout = Some(v.into());
    }

    /// Gets the current per-attempt timeout.
    pub fn attempt_timeout(&self) -> &Option<Duration> {
        &self.attempt_timeout
    }

    /// Sets the overall deadline for the request.
    ///
    /// The deadline covers all attempts, including any backoff delays between
    /// them. Once it expires the request fails with an error where
    /// [is_timeout()][crate::error::Error::is_timeout] is `true`.
    pub fn set_deadline<T: Into<Duration>>(&mut self, v: T) {
        self.deadline = Some(v.into());
    }

    /// Gets the current deadline.
    pub fn deadline(&self) -> &Option<Duration> {
        &self.deadline
    }

    /// Adds a custom header to the request.
    ///
    /// Custom headers are sent in addition to the headers set by the client
    /// library. Invalid header names or values are reported when the request
    /// is sent, as a [validation][crate::error::Error::is_validation] error.
    pub fn set_header<K: Into<String>, V: Into<String>>(&mut self, name: K, value: V) {
        self.headers.push((name.into(), value.into()));
    }

    /// Gets the custom headers.
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Gets the retry policy override, if any.
    pub fn retry_policy(&self) -> &Option<Arc<dyn RetryPolicy>> {
        &self.retry_policy
    }

    /// Sets the retry policy configuration.
    pub fn set_retry_policy<V: Into<RetryPolicyArg>>(&mut self, v: V) {
        self.retry_policy = Some(v.into().into());
    }

    /// Gets the backoff policy override, if any.
    pub fn backoff_policy(&self) -> &Option<Arc<dyn BackoffPolicy>> {
        &self.backoff_policy
    }

    /// Sets the backoff policy configuration.
    pub fn set_backoff_policy<V: Into<BackoffPolicyArg>>(&mut self, v: V) {
        self.backoff_policy = Some(v.into().into());
    }
}

/// Implementations of this trait provide setters to configure request options.
///
/// The client libraries provide a builder for each operation. These builders
/// can be used to set the request parameters, e.g., the identifier of the
/// zone targeted by the request, as well as any options affecting the request,
/// such as additional headers or timeouts.
pub trait RequestOptionsBuilder: internal::RequestBuilder {
    /// If `v` is `true`, treat the request underlying this method as idempotent.
    fn with_idempotency(self, v: bool) -> Self;

    /// Set the user agent header.
    fn with_user_agent<V: Into<String>>(self, v: V) -> Self;

    /// Sets the per-attempt timeout.
    fn with_attempt_timeout<V: Into<Duration>>(self, v: V) -> Self;

    /// Sets the overall deadline for the request, including all attempts.
    fn with_deadline<V: Into<Duration>>(self, v: V) -> Self;

    /// Adds a custom header to the request.
    fn with_header<K: Into<String>, V: Into<String>>(self, name: K, value: V) -> Self;

    /// Sets the retry policy configuration.
    fn with_retry_policy<V: Into<RetryPolicyArg>>(self, v: V) -> Self;

    /// Sets the backoff policy configuration.
    fn with_backoff_policy<V: Into<BackoffPolicyArg>>(self, v: V) -> Self;
}

#[doc(hidden)]
pub mod internal {
    //! This module contains implementation details. It is not part of the
    //! public API. Types and functions in this module may be changed or removed
    //! without warnings. Applications should not use any types contained
    //! within.
    use super::RequestOptions;

    /// Simplify implementation of the [super::RequestOptionsBuilder] trait in
    /// generated code.
    pub trait RequestBuilder {
        fn request_options(&mut self) -> &mut RequestOptions;
    }

    pub fn set_default_idempotency(mut options: RequestOptions, default: bool) -> RequestOptions {
        options.set_default_idempotency(default);
        options
    }
}

/// Implements the sealed [RequestOptionsBuilder] trait.
impl<T> RequestOptionsBuilder for T
where
    T: internal::RequestBuilder,
{
    fn with_idempotency(mut self, v: bool) -> Self {
        self.request_options().set_idempotency(v);
        self
    }

    fn with_user_agent<V: Into<String>>(mut self, v: V) -> Self {
        self.request_options().set_user_agent(v);
        self
    }

    fn with_attempt_timeout<V: Into<Duration>>(mut self, v: V) -> Self {
        self.request_options().set_attempt_timeout(v);
        self
    }

    fn with_deadline<V: Into<Duration>>(mut self, v: V) -> Self {
        self.request_options().set_deadline(v);
        self
    }

    fn with_header<K: Into<String>, V: Into<String>>(mut self, name: K, value: V) -> Self {
        self.request_options().set_header(name, value);
        self
    }

    fn with_retry_policy<V: Into<RetryPolicyArg>>(mut self, v: V) -> Self {
        self.request_options().set_retry_policy(v);
        self
    }

    fn with_backoff_policy<V: Into<BackoffPolicyArg>>(mut self, v: V) -> Self {
        self.request_options().set_backoff_policy(v);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exponential_backoff::ExponentialBackoff;
    use crate::retry_policy::LimitedAttemptCount;
    use internal::RequestBuilder;

    #[derive(Debug, Default)]
    struct ListZones {
        options: RequestOptions,
    }

    impl internal::RequestBuilder for ListZones {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.options
        }
    }

    #[test]
    fn defaults() {
        let opts = RequestOptions::default();
        assert_eq!(opts.idempotent(), None);
        assert_eq!(opts.user_agent(), &None);
        assert_eq!(opts.attempt_timeout(), &None);
        assert_eq!(opts.deadline(), &None);
        assert!(opts.headers().is_empty(), "{opts:?}");
        assert!(opts.retry_policy().is_none(), "{opts:?}");
        assert!(opts.backoff_policy().is_none(), "{opts:?}");
    }

    #[test]
    fn builder_sets_options() {
        let mut builder = ListZones::default()
            .with_idempotency(true)
            .with_user_agent("my-app/1.0")
            .with_attempt_timeout(Duration::from_secs(5))
            .with_deadline(Duration::from_secs(30))
            .with_header("X-Correlation-ID", "abc")
            .with_header("x-custom", "123")
            .with_retry_policy(LimitedAttemptCount::new(3))
            .with_backoff_policy(ExponentialBackoff::default());

        let opts = builder.request_options();
        assert_eq!(opts.idempotent(), Some(true));
        assert_eq!(opts.user_agent().as_deref(), Some("my-app/1.0"));
        assert_eq!(opts.attempt_timeout(), &Some(Duration::from_secs(5)));
        assert_eq!(opts.deadline(), &Some(Duration::from_secs(30)));
        let headers = opts
            .headers()
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect::<Vec<_>>();
        assert_eq!(headers, vec![("X-Correlation-ID", "abc"), ("x-custom", "123")]);
        assert!(opts.retry_policy().is_some(), "{opts:?}");
        assert!(opts.backoff_policy().is_some(), "{opts:?}");
    }

    #[test]
    fn default_idempotency_does_not_override() {
        let opts = internal::set_default_idempotency(RequestOptions::default(), true);
        assert_eq!(opts.idempotent(), Some(true));
        let opts = internal::set_default_idempotency(opts, false);
        assert_eq!(opts.idempotent(), Some(true));

        let mut builder = ListZones::default().with_idempotency(false);
        let opts = internal::set_default_idempotency(builder.request_options().clone(), true);
        assert_eq!(opts.idempotent(), Some(false));
    }
}
