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

//! Defines traits for backoff policies and a common implementations.
//!
//! When retries are enabled, the client libraries retry requests that fail
//! due to transient errors **and** are [idempotent], or that failed before the
//! request was sent. That is, when it is safe to attempt the request more
//! than once.
//!
//! Retry strategies should avoid immediately retrying a request, as the
//! service may need time to recover. [Exponential backoff] is a well known
//! algorithm to find an acceptable delay between retries.
//!
//! # Example
//! ```
//! # use ibm_cloud_networking_gax::*;
//! # use ibm_cloud_networking_gax::backoff_policy::*;
//! use exponential_backoff::ExponentialBackoffBuilder;
//! use options::RequestOptions;
//! use std::time::Duration;
//!
//! fn configure_backoff(mut options: RequestOptions) -> anyhow::Result<RequestOptions> {
//!     let policy = ExponentialBackoffBuilder::new()
//!         .with_initial_delay(Duration::from_millis(100))
//!         .with_maximum_delay(Duration::from_secs(5))
//!         .with_scaling(4.0)
//!         .build()?;
//!     options.set_backoff_policy(policy);
//!     Ok(options)
//! }
//! ```
//!
//! [Exponential backoff]: https://en.wikipedia.org/wiki/Exponential_backoff
//! [idempotent]: https://en.wikipedia.org/wiki/Idempotence

use std::sync::Arc;

/// Defines the trait implemented by all backoff strategies.
pub trait BackoffPolicy: Send + Sync + std::fmt::Debug {
    /// Returns the backoff delay on a failure.
    ///
    /// # Parameters
    /// * `loop_start` - when the retry loop started.
    /// * `attempt_count` - the number of attempts. This method is always called
    ///   after the first attempt.
    fn on_failure(&self, loop_start: std::time::Instant, attempt_count: u32)
    -> std::time::Duration;
}

/// A helper type to use [BackoffPolicy] in client and request options.
#[derive(Clone, Debug)]
pub struct BackoffPolicyArg(Arc<dyn BackoffPolicy>);

impl<T: BackoffPolicy + 'static> From<T> for BackoffPolicyArg {
    fn from(value: T) -> Self {
        Self(Arc::new(value))
    }
}

impl From<Arc<dyn BackoffPolicy>> for BackoffPolicyArg {
    fn from(value: Arc<dyn BackoffPolicy>) -> Self {
        Self(value)
    }
}

impl From<BackoffPolicyArg> for Arc<dyn BackoffPolicy> {
    fn from(value: BackoffPolicyArg) -> Arc<dyn BackoffPolicy> {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exponential_backoff::ExponentialBackoffBuilder;
    use std::time::{Duration, Instant};

    #[test]
    fn backoff_policy_arg() {
        let policy = ExponentialBackoffBuilder::default().clamp();
        let arg = BackoffPolicyArg::from(policy);
        let policy: Arc<dyn BackoffPolicy> = arg.into();
        let d = policy.on_failure(Instant::now(), 1);
        assert!(d <= Duration::from_secs(1), "{d:?}");

        let policy: Arc<dyn BackoffPolicy> = Arc::new(ExponentialBackoffBuilder::default().clamp());
        let arg = BackoffPolicyArg::from(policy.clone());
        let got: Arc<dyn BackoffPolicy> = arg.into();
        assert!(Arc::ptr_eq(&got, &policy));
    }
}
