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

//! The retry loop shared by all the clients.

use super::Result;
use super::backoff_policy::BackoffPolicy;
use super::error::Error;
use super::retry_policy::RetryPolicy;
use super::retry_result::RetryResult;
use std::sync::Arc;
use std::time::Duration;

/// Runs `inner` until it succeeds or `retry_policy` stops the loop.
///
/// Each call of `inner` receives the time left before the retry policy
/// expires, if the policy has a deadline. Between attempts the loop waits the
/// delay prescribed by `backoff_policy`, or the `Retry-After` delay requested
/// by the service if that is longer. The loop gives up early when the wait
/// would outlive the retry policy.
pub async fn retry_loop<F, S, Response>(
    mut inner: F,
    sleep: S,
    idempotent: bool,
    retry_policy: Arc<dyn RetryPolicy>,
    backoff_policy: Arc<dyn BackoffPolicy>,
) -> Result<Response>
where
    F: AsyncFnMut(Option<Duration>) -> Result<Response> + Send,
    S: AsyncFn(Duration) -> () + Send,
{
    let start = tokio::time::Instant::now().into_std();
    let mut attempts = 0_u32;
    loop {
        let remaining = retry_policy.remaining_time(start, attempts);
        attempts += 1;
        let error = match inner(remaining).await {
            Ok(r) => return Ok(r),
            Err(e) => e,
        };
        let requested = retry_after(&error);
        let error = match retry_policy.on_error(start, attempts, idempotent, error) {
            RetryResult::Continue(e) => e,
            RetryResult::Permanent(e) | RetryResult::Exhausted(e) => return Err(e),
        };
        let delay = backoff_policy.on_failure(start, attempts);
        let delay = requested.map_or(delay, |r| r.max(delay));
        if retry_policy
            .remaining_time(start, attempts)
            .is_some_and(|r| r < delay)
        {
            return Err(Error::exhausted(error));
        }
        tracing::debug!(attempts, ?delay, "retrying after error: {error}");
        sleep(delay).await;
    }
}

/// The delay requested by the service in a `Retry-After` header.
///
/// Only 429 and 503 responses carry a meaningful value. The HTTP-date form of
/// the header is ignored.
fn retry_after(error: &Error) -> Option<Duration> {
    if !matches!(error.http_status_code(), Some(429 | 503)) {
        return None;
    }
    let value = error.http_headers()?.get(http::header::RETRY_AFTER)?;
    let seconds = value.to_str().ok()?.trim().parse::<u64>().ok()?;
    Some(Duration::from_secs(seconds))
}

/// The timeout for the next attempt: the attempt timeout or the time left in
/// the retry loop, whichever is shorter.
pub fn effective_timeout(
    options: &crate::options::RequestOptions,
    remaining_time: Option<Duration>,
) -> Option<Duration> {
    let attempt = *options.attempt_timeout();
    match (attempt, remaining_time) {
        (Some(a), Some(r)) => Some(a.min(r)),
        (a, r) => a.or(r),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::retry_policy::{AlwaysRetry, NeverRetry, RetryPolicyExt, TransientErrors};
    use http::HeaderMap;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use test_case::test_case;

    #[derive(Debug)]
    struct FixedBackoff(Duration);

    impl BackoffPolicy for FixedBackoff {
        fn on_failure(&self, _loop_start: std::time::Instant, _attempt_count: u32) -> Duration {
            self.0
        }
    }

    fn http_error(code: u16, retry_after: Option<&str>) -> Error {
        let mut headers = HeaderMap::new();
        if let Some(v) = retry_after {
            headers.insert(
                http::header::RETRY_AFTER,
                http::HeaderValue::from_str(v).unwrap(),
            );
        }
        Error::http(code, headers, bytes::Bytes::new())
    }

    // Runs the retry loop over a scripted sequence of results, returning the
    // outcome, the number of attempts, and the delays between them.
    async fn run(
        script: Vec<Result<&'static str>>,
        idempotent: bool,
        retry_policy: Arc<dyn RetryPolicy>,
        backoff: Duration,
    ) -> (Result<&'static str>, usize, Vec<Duration>) {
        let script = Mutex::new(VecDeque::from(script));
        let attempts = Mutex::new(0_usize);
        let delays = Mutex::new(Vec::new());
        let inner = async |_remaining: Option<Duration>| {
            *attempts.lock().unwrap() += 1;
            script
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(Error::io("script exhausted")))
        };
        let sleep = async |d: Duration| delays.lock().unwrap().push(d);
        let result = retry_loop(
            inner,
            sleep,
            idempotent,
            retry_policy,
            Arc::new(FixedBackoff(backoff)),
        )
        .await;
        let attempts = *attempts.lock().unwrap();
        let delays = delays.into_inner().unwrap();
        (result, attempts, delays)
    }

    #[test_case(None, None, None)]
    #[test_case(Some(4), None, Some(4))]
    #[test_case(None, Some(4), Some(4))]
    #[test_case(Some(2), Some(4), Some(2))]
    #[test_case(Some(4), Some(2), Some(2))]
    fn effective_timeouts(attempt: Option<u64>, remaining: Option<u64>, want: Option<u64>) {
        let mut options = crate::options::RequestOptions::default();
        if let Some(t) = attempt {
            options.set_attempt_timeout(Duration::from_secs(t));
        }
        let got = effective_timeout(&options, remaining.map(Duration::from_secs));
        assert_eq!(got, want.map(Duration::from_secs));
    }

    #[tokio::test]
    async fn first_attempt_succeeds() {
        let (result, attempts, delays) = run(
            vec![Ok("ok")],
            false,
            Arc::new(NeverRetry),
            Duration::from_secs(1),
        )
        .await;
        assert_eq!(result.ok(), Some("ok"));
        assert_eq!(attempts, 1);
        assert!(delays.is_empty(), "{delays:?}");
    }

    #[tokio::test]
    async fn retries_transient_errors() {
        let (result, attempts, delays) = run(
            vec![Err(http_error(503, None)), Err(http_error(502, None)), Ok("ok")],
            true,
            Arc::new(TransientErrors.with_attempt_limit(5)),
            Duration::from_millis(100),
        )
        .await;
        assert_eq!(result.ok(), Some("ok"));
        assert_eq!(attempts, 3);
        assert_eq!(delays, vec![Duration::from_millis(100); 2]);
    }

    #[tokio::test]
    async fn permanent_error_stops_the_loop() {
        let (result, attempts, delays) = run(
            vec![Err(http_error(503, None)), Err(http_error(404, None)), Ok("ok")],
            true,
            Arc::new(TransientErrors.with_attempt_limit(5)),
            Duration::from_millis(100),
        )
        .await;
        let err = result.unwrap_err();
        assert_eq!(err.http_status_code(), Some(404), "{err:?}");
        assert_eq!(attempts, 2);
        assert_eq!(delays.len(), 1);
    }

    #[tokio::test]
    async fn attempt_limit() {
        let script = (0..5).map(|_| Err(http_error(429, None))).collect();
        let (result, attempts, _) = run(
            script,
            false,
            Arc::new(TransientErrors.with_attempt_limit(3)),
            Duration::from_millis(100),
        )
        .await;
        // The last error is returned as-is.
        let err = result.unwrap_err();
        assert_eq!(err.http_status_code(), Some(429), "{err:?}");
        assert_eq!(attempts, 3);
    }

    #[tokio::test]
    async fn non_idempotent_server_errors_are_not_retried() {
        let (result, attempts, _) = run(
            vec![Err(http_error(500, None)), Ok("ok")],
            false,
            Arc::new(TransientErrors.with_attempt_limit(3)),
            Duration::from_millis(100),
        )
        .await;
        assert_eq!(result.unwrap_err().http_status_code(), Some(500));
        assert_eq!(attempts, 1);
    }

    #[test_case(429, Some("3"), Duration::from_secs(3); "longer than backoff")]
    #[test_case(503, Some("0"), Duration::from_millis(100); "shorter than backoff")]
    #[test_case(503, Some("Wed, 21 Oct 2015 07:28:00 GMT"), Duration::from_millis(100); "http date")]
    #[test_case(502, Some("3"), Duration::from_millis(100); "ignored for 502")]
    #[test_case(429, None, Duration::from_millis(100); "absent")]
    #[tokio::test]
    async fn honors_retry_after(code: u16, header: Option<&'static str>, want: Duration) {
        let (result, _, delays) = run(
            vec![Err(http_error(code, header)), Ok("ok")],
            true,
            Arc::new(AlwaysRetry.with_attempt_limit(2)),
            Duration::from_millis(100),
        )
        .await;
        assert_eq!(result.ok(), Some("ok"));
        assert_eq!(delays, vec![want]);
    }

    #[tokio::test]
    async fn no_sleep_past_the_time_limit() {
        let (result, attempts, delays) = run(
            vec![Err(http_error(429, Some("60"))), Ok("ok")],
            true,
            Arc::new(AlwaysRetry.with_time_limit(Duration::from_secs(10))),
            Duration::from_millis(100),
        )
        .await;
        let err = result.unwrap_err();
        assert!(err.is_exhausted(), "{err:?}");
        assert_eq!(attempts, 1);
        assert!(delays.is_empty(), "{delays:?}");
    }
}
