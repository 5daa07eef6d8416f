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

//! Defines traits for retry policies and some common implementations.
//!
//! The client libraries can automatically retry requests that fail due to
//! transient errors. Retries are disabled by default: the default policy for
//! all clients is [NeverRetry]. Applications enable retries with
//! [ClientBuilder::with_retries], or with a custom policy set via
//! [ClientBuilder::with_retry_policy].
//!
//! Only some errors are safe to retry. Some errors, such as `429 Too Many
//! Requests` or `503 Service Unavailable`, indicate that the service did not
//! process the request. Those are always safe to retry. Other errors, such as
//! a broken connection or a `502 Bad Gateway`, leave the outcome of the
//! request unknown. Those are only safe to retry when the request is
//! idempotent.
//!
//! # Example
//! ```
//! # use ibm_cloud_networking_gax::retry_policy::*;
//! use std::time::Duration;
//! // Retry transient errors for at most 15 seconds or at most 5 attempts:
//! // whichever limit is reached first stops the retry loop.
//! let policy = TransientErrors
//!     .with_time_limit(Duration::from_secs(15))
//!     .with_attempt_limit(5);
//! ```
//!
//! [ClientBuilder::with_retries]: crate::client_builder::ClientBuilder::with_retries
//! [ClientBuilder::with_retry_policy]: crate::client_builder::ClientBuilder::with_retry_policy

use crate::error::Error;
use crate::retry_result::RetryResult;
use std::sync::Arc;
use std::time::Duration;

/// Determines how errors are handled in the retry loop.
///
/// Implementations of this trait determine if errors are retryable, and for
/// how long the retry loop may continue.
pub trait RetryPolicy: Send + Sync + std::fmt::Debug {
    /// Query the retry policy after an error.
    ///
    /// # Parameters
    /// * `loop_start` - when the retry loop started.
    /// * `attempt_count` - the number of attempts. This includes the initial
    ///   attempt. This method is called after the first attempt, so the value
    ///   is always non-zero.
    /// * `idempotent` - if `true` assume the operation is idempotent. Many more
    ///   errors are retryable on idempotent operations.
    /// * `error` - the last error when attempting the request.
    fn on_error(
        &self,
        loop_start: std::time::Instant,
        attempt_count: u32,
        idempotent: bool,
        error: Error,
    ) -> RetryResult;

    /// The remaining time in the retry policy.
    ///
    /// For policies based on time, this returns the remaining time in the
    /// policy. The retry loop can use this value to adjust the next attempt
    /// timeout. For policies that are not time based this returns `None`.
    fn remaining_time(
        &self,
        _loop_start: std::time::Instant,
        _attempt_count: u32,
    ) -> Option<Duration> {
        None
    }
}

/// A helper type to use [RetryPolicy] in client and request options.
#[derive(Clone, Debug)]
pub struct RetryPolicyArg(Arc<dyn RetryPolicy>);

impl<T> std::convert::From<T> for RetryPolicyArg
where
    T: RetryPolicy + 'static,
{
    fn from(value: T) -> Self {
        Self(Arc::new(value))
    }
}

impl std::convert::From<Arc<dyn RetryPolicy>> for RetryPolicyArg {
    fn from(value: Arc<dyn RetryPolicy>) -> Self {
        Self(value)
    }
}

impl std::convert::From<RetryPolicyArg> for Arc<dyn RetryPolicy> {
    fn from(value: RetryPolicyArg) -> Arc<dyn RetryPolicy> {
        value.0
    }
}

/// Extension trait for [RetryPolicy]
pub trait RetryPolicyExt: RetryPolicy + Sized {
    /// Decorate a [RetryPolicy] to limit the total elapsed time in the retry
    /// loop.
    ///
    /// While the time spent in the retry loop (including time in backoff) is
    /// less than the prescribed duration the `on_error()` method returns the
    /// results of the inner policy. After that time it returns
    /// [Exhausted][RetryResult::Exhausted] if the inner policy returns
    /// [Continue][RetryResult::Continue].
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_gax::retry_policy::*;
    /// # use ibm_cloud_networking_gax::error::Error;
    /// use std::time::{Duration, Instant};
    /// let policy = TransientErrors.with_time_limit(Duration::from_secs(10));
    /// let start = Instant::now() - Duration::from_secs(20);
    /// assert!(policy.on_error(start, 1, true, transient_error()).is_exhausted());
    ///
    /// fn transient_error() -> Error {
    ///     Error::http(503, http::HeaderMap::new(), bytes::Bytes::new())
    /// }
    /// ```
    fn with_time_limit(self, maximum_duration: Duration) -> LimitedElapsedTime<Self> {
        LimitedElapsedTime::custom(self, maximum_duration)
    }

    /// Decorate a [RetryPolicy] to limit the number of attempts.
    ///
    /// The policy passes through the results from the inner policy as long as
    /// `attempt_count < maximum_attempts`. Once the maximum number of attempts
    /// is reached, the policy returns [Exhausted][RetryResult::Exhausted] if
    /// the inner policy returns [Continue][RetryResult::Continue].
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_gax::retry_policy::*;
    /// # use ibm_cloud_networking_gax::error::Error;
    /// use std::time::Instant;
    /// let policy = TransientErrors.with_attempt_limit(3);
    /// assert!(policy.on_error(Instant::now(), 1, true, transient_error()).is_continue());
    /// assert!(policy.on_error(Instant::now(), 2, true, transient_error()).is_continue());
    /// assert!(policy.on_error(Instant::now(), 3, true, transient_error()).is_exhausted());
    ///
    /// fn transient_error() -> Error {
    ///     Error::http(503, http::HeaderMap::new(), bytes::Bytes::new())
    /// }
    /// ```
    fn with_attempt_limit(self, maximum_attempts: u32) -> LimitedAttemptCount<Self> {
        LimitedAttemptCount::custom(self, maximum_attempts)
    }
}

impl<T: RetryPolicy> RetryPolicyExt for T {}

/// A retry policy that continues on transient errors.
///
/// This policy must be decorated to limit the number of retry attempts or the
/// duration of the retry loop.
///
/// The policy always retries `429 Too Many Requests` and `503 Service
/// Unavailable`, as well as transient failures to create the authentication
/// headers. For idempotent requests it also retries `500`, `502`, and `504`
/// status codes, I/O errors, and attempt timeouts.
///
/// # Example
/// ```
/// # use ibm_cloud_networking_gax::retry_policy::*;
/// # use ibm_cloud_networking_gax::error::Error;
/// use std::time::Instant;
/// let policy = TransientErrors;
/// assert!(policy.on_error(Instant::now(), 1, false, http(503)).is_continue());
/// assert!(policy.on_error(Instant::now(), 1, true, http(502)).is_continue());
/// assert!(policy.on_error(Instant::now(), 1, false, http(502)).is_permanent());
/// assert!(policy.on_error(Instant::now(), 1, true, http(404)).is_permanent());
///
/// fn http(code: u16) -> Error {
///     Error::http(code, http::HeaderMap::new(), bytes::Bytes::new())
/// }
/// ```
#[derive(Clone, Debug)]
pub struct TransientErrors;

impl RetryPolicy for TransientErrors {
    fn on_error(
        &self,
        _loop_start: std::time::Instant,
        _attempt_count: u32,
        idempotent: bool,
        error: Error,
    ) -> RetryResult {
        if error.is_transient_and_before_rpc() {
            return RetryResult::Continue(error);
        }
        if error.is_io() || error.is_timeout() {
            return if idempotent {
                RetryResult::Continue(error)
            } else {
                RetryResult::Permanent(error)
            };
        }
        match error.http_status_code() {
            Some(429) | Some(503) => RetryResult::Continue(error),
            Some(500) | Some(502) | Some(504) if idempotent => RetryResult::Continue(error),
            _ => RetryResult::Permanent(error),
        }
    }
}

/// A retry policy that retries all errors.
///
/// This policy must be decorated to limit the number of retry attempts or the
/// duration of the retry loop.
///
/// The policy retries all errors. This may be useful if the service guarantees
/// idempotency, maybe through the use of request ids.
///
/// # Example
/// ```
/// # use ibm_cloud_networking_gax::retry_policy::*;
/// # use ibm_cloud_networking_gax::error::Error;
/// use std::time::Instant;
/// let policy = AlwaysRetry;
/// assert!(policy.on_error(Instant::now(), 1, false, Error::io("err")).is_continue());
/// ```
#[derive(Clone, Debug)]
pub struct AlwaysRetry;

impl RetryPolicy for AlwaysRetry {
    fn on_error(
        &self,
        _loop_start: std::time::Instant,
        _attempt_count: u32,
        _idempotent: bool,
        error: Error,
    ) -> RetryResult {
        RetryResult::Continue(error)
    }
}

/// A retry policy that never retries.
///
/// This is the default policy for all clients.
///
/// # Example
/// ```
/// # use ibm_cloud_networking_gax::retry_policy::*;
/// # use ibm_cloud_networking_gax::error::Error;
/// use std::time::Instant;
/// let policy = NeverRetry;
/// assert!(policy.on_error(Instant::now(), 1, true, Error::io("err")).is_exhausted());
/// ```
#[derive(Clone, Debug)]
pub struct NeverRetry;

impl RetryPolicy for NeverRetry {
    fn on_error(
        &self,
        _loop_start: std::time::Instant,
        _attempt_count: u32,
        _idempotent: bool,
        error: Error,
    ) -> RetryResult {
        RetryResult::Exhausted(error)
    }
}

/// A retry policy decorator that limits the total time in the retry loop.
///
/// This policy decorates an inner policy and limits the duration of retry
/// loops. While the time spent in the retry loop (including time in backoff)
/// is less than the prescribed duration the `on_error()` method returns the
/// results of the inner policy. After that time it returns
/// [Exhausted][RetryResult::Exhausted] if the inner policy returns
/// [Continue][RetryResult::Continue].
///
/// The `remaining_time()` function returns the remaining time. This is always
/// [Duration::ZERO] once or after the policy's deadline is reached.
///
/// # Parameters
/// * `P` - the inner retry policy, defaults to [TransientErrors].
#[derive(Debug)]
pub struct LimitedElapsedTime<P = TransientErrors>
where
    P: RetryPolicy,
{
    inner: P,
    maximum_duration: Duration,
}

impl LimitedElapsedTime {
    /// Creates a new instance, with the default inner policy.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_gax::retry_policy::*;
    /// # use ibm_cloud_networking_gax::error::Error;
    /// use std::time::{Duration, Instant};
    /// let policy = LimitedElapsedTime::new(Duration::from_secs(10));
    /// let start = Instant::now() - Duration::from_secs(20);
    /// assert!(policy.on_error(start, 1, true, transient_error()).is_exhausted());
    ///
    /// fn transient_error() -> Error {
    ///     Error::http(503, http::HeaderMap::new(), bytes::Bytes::new())
    /// }
    /// ```
    pub fn new(maximum_duration: Duration) -> Self {
        Self {
            inner: TransientErrors,
            maximum_duration,
        }
    }
}

impl<P> LimitedElapsedTime<P>
where
    P: RetryPolicy,
{
    /// Creates a new instance with a custom inner policy.
    pub fn custom(inner: P, maximum_duration: Duration) -> Self {
        Self {
            inner,
            maximum_duration,
        }
    }
}

impl<P> RetryPolicy for LimitedElapsedTime<P>
where
    P: RetryPolicy + 'static,
{
    fn on_error(
        &self,
        start: std::time::Instant,
        count: u32,
        idempotent: bool,
        error: Error,
    ) -> RetryResult {
        match self.inner.on_error(start, count, idempotent, error) {
            RetryResult::Permanent(e) => RetryResult::Permanent(e),
            RetryResult::Exhausted(e) => RetryResult::Exhausted(e),
            RetryResult::Continue(e) => {
                if std::time::Instant::now() >= start + self.maximum_duration {
                    RetryResult::Exhausted(e)
                } else {
                    RetryResult::Continue(e)
                }
            }
        }
    }

    fn remaining_time(&self, start: std::time::Instant, count: u32) -> Option<Duration> {
        let deadline = start + self.maximum_duration;
        let remaining = deadline.saturating_duration_since(std::time::Instant::now());
        if let Some(inner) = self.inner.remaining_time(start, count) {
            return Some(std::cmp::min(remaining, inner));
        }
        Some(remaining)
    }
}

/// A retry policy decorator that limits the number of attempts.
///
/// This policy decorates an inner policy and limits the total number of
/// attempts, including the initial attempt. Setting the maximum number of
/// attempts to 0 or 1 results in no retries.
///
/// The policy passes through the results from the inner policy as long as
/// `attempt_count < maximum_attempts`. However, once the maximum number of
/// attempts is reached, the policy replaces any
/// [Continue][RetryResult::Continue] result with
/// [Exhausted][RetryResult::Exhausted].
///
/// # Parameters
/// * `P` - the inner retry policy.
#[derive(Debug)]
pub struct LimitedAttemptCount<P = TransientErrors>
where
    P: RetryPolicy,
{
    inner: P,
    maximum_attempts: u32,
}

impl LimitedAttemptCount {
    /// Creates a new instance, with the default inner policy.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_gax::retry_policy::*;
    /// # use ibm_cloud_networking_gax::error::Error;
    /// use std::time::Instant;
    /// let policy = LimitedAttemptCount::new(5);
    /// let attempt_count = 10;
    /// assert!(policy.on_error(Instant::now(), attempt_count, true, transient_error()).is_exhausted());
    ///
    /// fn transient_error() -> Error {
    ///     Error::http(503, http::HeaderMap::new(), bytes::Bytes::new())
    /// }
    /// ```
    pub fn new(maximum_attempts: u32) -> Self {
        Self {
            inner: TransientErrors,
            maximum_attempts,
        }
    }
}

impl<P> LimitedAttemptCount<P>
where
    P: RetryPolicy,
{
    /// Creates a new instance with a custom inner policy.
    pub fn custom(inner: P, maximum_attempts: u32) -> Self {
        Self {
            inner,
            maximum_attempts,
        }
    }
}

impl<P> RetryPolicy for LimitedAttemptCount<P>
where
    P: RetryPolicy,
{
    fn on_error(
        &self,
        start: std::time::Instant,
        count: u32,
        idempotent: bool,
        error: Error,
    ) -> RetryResult {
        match self.inner.on_error(start, count, idempotent, error) {
            RetryResult::Permanent(e) => RetryResult::Permanent(e),
            RetryResult::Exhausted(e) => RetryResult::Exhausted(e),
            RetryResult::Continue(e) => {
                if count >= self.maximum_attempts {
                    RetryResult::Exhausted(e)
                } else {
                    RetryResult::Continue(e)
                }
            }
        }
    }

    fn remaining_time(&self, start: std::time::Instant, count: u32) -> Option<Duration> {
        self.inner.remaining_time(start, count)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::error::CredentialsError;
    use std::time::Instant;
    use test_case::test_case;

    mockall::mock! {
        #[derive(Debug)]
        pub(crate) Policy {}
        impl RetryPolicy for Policy {
            fn on_error(
                &self,
                loop_start: Instant,
                attempt_count: u32,
                idempotent: bool,
                error: Error,
            ) -> RetryResult;
            fn remaining_time(&self, loop_start: Instant, attempt_count: u32) -> Option<Duration>;
        }
    }

    fn http(code: u16) -> Error {
        Error::http(code, http::HeaderMap::new(), bytes::Bytes::new())
    }

    fn auth(transient: bool) -> Error {
        Error::authentication(CredentialsError::from_msg(transient, "test-only"))
    }

    #[test]
    fn retry_policy_arg() {
        let policy = LimitedAttemptCount::new(3);
        let _ = RetryPolicyArg::from(policy);

        let policy: Arc<dyn RetryPolicy> = Arc::new(LimitedAttemptCount::new(3));
        let arg = RetryPolicyArg::from(policy);
        let _: Arc<dyn RetryPolicy> = arg.into();
    }

    #[test_case(429, true, true)]
    #[test_case(429, false, true)]
    #[test_case(503, true, true)]
    #[test_case(503, false, true)]
    #[test_case(500, true, true)]
    #[test_case(500, false, false)]
    #[test_case(502, true, true)]
    #[test_case(502, false, false)]
    #[test_case(504, true, true)]
    #[test_case(504, false, false)]
    #[test_case(400, true, false)]
    #[test_case(401, true, false)]
    #[test_case(404, true, false)]
    #[test_case(409, true, false)]
    fn transient_errors_http(code: u16, idempotent: bool, want_continue: bool) {
        let p = TransientErrors;
        let now = Instant::now();
        let got = p.on_error(now, 1, idempotent, http(code));
        if want_continue {
            assert!(got.is_continue(), "{got:?}");
        } else {
            assert!(got.is_permanent(), "{got:?}");
        }
        assert!(p.remaining_time(now, 1).is_none());
    }

    #[test]
    fn transient_errors_request() {
        let p = TransientErrors;
        let now = Instant::now();
        assert!(p.on_error(now, 1, true, Error::io("err")).is_continue());
        assert!(p.on_error(now, 1, false, Error::io("err")).is_permanent());
        assert!(p.on_error(now, 1, true, Error::timeout("err")).is_continue());
        assert!(p.on_error(now, 1, false, Error::timeout("err")).is_permanent());

        assert!(p.on_error(now, 1, true, auth(true)).is_continue());
        assert!(p.on_error(now, 1, false, auth(true)).is_continue());
        assert!(p.on_error(now, 1, true, auth(false)).is_permanent());
        assert!(p.on_error(now, 1, false, auth(false)).is_permanent());

        assert!(p.on_error(now, 1, true, Error::ser("err")).is_permanent());
        assert!(p.on_error(now, 1, true, Error::validation("err")).is_permanent());
        let e = Error::response_processing(200, http::HeaderMap::new(), bytes::Bytes::new(), "err");
        assert!(p.on_error(now, 1, true, e).is_permanent());
    }

    #[test]
    fn always_retry() {
        let p = AlwaysRetry;
        let now = Instant::now();
        assert!(p.on_error(now, 1, true, http(404)).is_continue());
        assert!(p.on_error(now, 1, false, http(404)).is_continue());
        assert!(p.on_error(now, 1, false, Error::io("err")).is_continue());
        assert!(p.remaining_time(now, 1).is_none());
    }

    #[test]
    fn never_retry() {
        let p = NeverRetry;
        let now = Instant::now();
        assert!(p.on_error(now, 1, true, http(503)).is_exhausted());
        assert!(p.on_error(now, 1, false, http(404)).is_exhausted());
        assert!(p.remaining_time(now, 1).is_none());
    }

    #[test]
    fn limited_elapsed_time_error() {
        let limit = Duration::from_secs(10);
        let p = LimitedElapsedTime::new(limit);
        let now = Instant::now();
        assert!(p.on_error(now, 1, true, http(503)).is_continue());
        assert!(p.on_error(now, 1, true, http(404)).is_permanent());

        let start = now - limit - Duration::from_secs(1);
        assert!(p.on_error(start, 1, true, http(503)).is_exhausted());
        assert!(p.on_error(start, 1, true, http(404)).is_permanent());
    }

    #[test]
    fn limited_elapsed_time_forwards() {
        let mut mock = MockPolicy::new();
        mock.expect_on_error()
            .times(1)
            .returning(|_, _, _, e| RetryResult::Continue(e));
        mock.expect_on_error()
            .times(1)
            .returning(|_, _, _, e| RetryResult::Permanent(e));
        mock.expect_on_error()
            .times(1)
            .returning(|_, _, _, e| RetryResult::Exhausted(e));

        let p = LimitedElapsedTime::custom(mock, Duration::from_secs(60));
        let now = Instant::now();
        assert!(p.on_error(now, 1, true, http(503)).is_continue());
        assert!(p.on_error(now, 1, true, http(503)).is_permanent());
        assert!(p.on_error(now, 1, true, http(503)).is_exhausted());
    }

    #[test]
    fn limited_elapsed_time_remaining_inner_longer() {
        let mut mock = MockPolicy::new();
        mock.expect_remaining_time()
            .times(1)
            .returning(|_, _| Some(Duration::from_secs(50)));
        let p = LimitedElapsedTime::custom(mock, Duration::from_secs(60));

        let start = Instant::now() - Duration::from_secs(50);
        let remaining = p.remaining_time(start, 1);
        assert!(
            remaining <= Some(Duration::from_secs(10)),
            "{remaining:?}"
        );
    }

    #[test]
    fn limited_elapsed_time_remaining_inner_shorter() {
        let mut mock = MockPolicy::new();
        mock.expect_remaining_time()
            .times(1)
            .returning(|_, _| Some(Duration::from_secs(5)));
        let p = LimitedElapsedTime::custom(mock, Duration::from_secs(60));

        let start = Instant::now() - Duration::from_secs(10);
        let remaining = p.remaining_time(start, 1);
        assert_eq!(remaining, Some(Duration::from_secs(5)));
    }

    #[test]
    fn limited_elapsed_time_remaining_expired() {
        let p = LimitedElapsedTime::new(Duration::from_secs(10));
        let start = Instant::now() - Duration::from_secs(20);
        assert_eq!(p.remaining_time(start, 1), Some(Duration::ZERO));
    }

    #[test]
    fn limited_attempt_count() {
        let p = LimitedAttemptCount::new(3);
        let now = Instant::now();
        assert!(p.on_error(now, 1, true, http(503)).is_continue());
        assert!(p.on_error(now, 2, true, http(503)).is_continue());
        assert!(p.on_error(now, 3, true, http(503)).is_exhausted());
        assert!(p.on_error(now, 1, true, http(404)).is_permanent());
        assert!(p.on_error(now, 3, true, http(404)).is_permanent());
    }

    #[test]
    fn limited_attempt_count_forwards() {
        let mut mock = MockPolicy::new();
        mock.expect_on_error()
            .times(1)
            .returning(|_, _, _, e| RetryResult::Exhausted(e));
        mock.expect_remaining_time()
            .times(1)
            .returning(|_, _| Some(Duration::from_secs(7)));
        let p = LimitedAttemptCount::custom(mock, 5);
        let now = Instant::now();
        assert!(p.on_error(now, 1, true, http(503)).is_exhausted());
        assert_eq!(p.remaining_time(now, 1), Some(Duration::from_secs(7)));
    }

    #[test]
    fn composed() {
        let p = TransientErrors
            .with_time_limit(Duration::from_secs(60))
            .with_attempt_limit(2);
        let now = Instant::now();
        assert!(p.on_error(now, 1, false, http(429)).is_continue());
        assert!(p.on_error(now, 2, false, http(429)).is_exhausted());
        assert!(p.on_error(now, 1, false, http(500)).is_permanent());
        assert!(p.remaining_time(now, 1).is_some());
    }
}
