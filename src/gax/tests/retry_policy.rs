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

//! Verify retry policies are usable from outside the crate.

#[cfg(test)]
mod tests {
    use ibm_cloud_networking_gax::error::Error;
    use ibm_cloud_networking_gax::options::RequestOptions;
    use ibm_cloud_networking_gax::retry_policy::*;
    use ibm_cloud_networking_gax::retry_result::RetryResult;
    use std::time::{Duration, Instant};

    #[derive(Debug)]
    struct CustomRetryPolicy;
    impl RetryPolicy for CustomRetryPolicy {
        fn on_error(
            &self,
            _loop_start: Instant,
            _attempt_count: u32,
            idempotent: bool,
            error: Error,
        ) -> RetryResult {
            if idempotent {
                RetryResult::Continue(error)
            } else {
                RetryResult::Permanent(error)
            }
        }
    }

    #[test]
    fn create_limited_attempt_count() {
        let _policy = LimitedAttemptCount::custom(CustomRetryPolicy, 3);
        let _policy = LimitedAttemptCount::new(3);
        let _policy = CustomRetryPolicy.with_attempt_limit(3);
    }

    #[test]
    fn create_limited_elapsed_time() {
        let _policy = LimitedElapsedTime::custom(CustomRetryPolicy, Duration::from_millis(100));
        let _policy = LimitedElapsedTime::new(Duration::from_millis(100));
        let _policy = CustomRetryPolicy.with_time_limit(Duration::from_millis(100));
    }

    #[test]
    fn custom_policy_in_options() {
        let mut options = RequestOptions::default();
        options.set_retry_policy(CustomRetryPolicy.with_attempt_limit(2));
        let policy = options.retry_policy().clone().expect("policy was set");
        let error = Error::io("simulated");
        let got = policy.on_error(Instant::now(), 1, true, error);
        assert!(got.is_continue(), "{got:?}");
        let got = policy.on_error(Instant::now(), 2, true, Error::io("simulated"));
        assert!(got.is_exhausted(), "{got:?}");
    }
}
