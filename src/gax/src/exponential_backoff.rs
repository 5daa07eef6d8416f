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

//! Truncated [exponential backoff] with full jitter.
//!
//! [exponential backoff]: https://en.wikipedia.org/wiki/Exponential_backoff

use std::time::Duration;

/// The error type for exponential backoff creation.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("the scaling value ({0}) should be >= 1.0")]
    InvalidScalingFactor(f64),
    #[error("the initial delay ({0:?}) should be greater than zero")]
    InvalidInitialDelay(Duration),
    #[error(
        "the maximum delay ({maximum:?}) should be greater than or equal to the initial delay ({initial:?})"
    )]
    EmptyRange {
        maximum: Duration,
        initial: Duration,
    },
}

/// Configures and creates an [ExponentialBackoff] policy.
#[derive(Clone, Debug)]
pub struct ExponentialBackoffBuilder {
    initial_delay: Duration,
    maximum_delay: Duration,
    scaling: f64,
}

impl ExponentialBackoffBuilder {
    /// Creates a builder with the default parameters.
    ///
    /// The defaults are an initial delay of one second, a maximum delay of
    /// 60 seconds, and a scaling factor of 2.0.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_gax::exponential_backoff::Error;
    /// # use ibm_cloud_networking_gax::exponential_backoff::ExponentialBackoffBuilder;
    /// use std::time::Duration;
    ///
    /// let policy = ExponentialBackoffBuilder::new()
    ///         .with_initial_delay(Duration::from_millis(100))
    ///         .with_maximum_delay(Duration::from_secs(5))
    ///         .with_scaling(4.0)
    ///         .build()?;
    /// # Ok::<(), Error>(())
    /// ```
    pub fn new() -> Self {
        Self {
            initial_delay: Duration::from_secs(1),
            maximum_delay: Duration::from_secs(60),
            scaling: 2.0,
        }
    }

    /// Creates a builder where the delay never exceeds `max_interval`.
    ///
    /// The initial delay is one second, or `max_interval` if that is shorter.
    /// A zero `max_interval` is treated as one millisecond.
    pub fn with_max_interval(max_interval: Duration) -> Self {
        let maximum_delay = max_interval.max(Duration::from_millis(1));
        Self::new()
            .with_initial_delay(Duration::from_secs(1).min(maximum_delay))
            .with_maximum_delay(maximum_delay)
    }

    /// Change the initial delay.
    pub fn with_initial_delay<V: Into<Duration>>(mut self, v: V) -> Self {
        self.initial_delay = v.into();
        self
    }

    /// Change the maximum delay.
    pub fn with_maximum_delay<V: Into<Duration>>(mut self, v: V) -> Self {
        self.maximum_delay = v.into();
        self
    }

    /// Change the scaling factor in this backoff policy.
    pub fn with_scaling<V: Into<f64>>(mut self, v: V) -> Self {
        self.scaling = v.into();
        self
    }

    /// Creates a new exponential backoff policy.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_gax::exponential_backoff::Error;
    /// # use ibm_cloud_networking_gax::exponential_backoff::ExponentialBackoffBuilder;
    /// # use ibm_cloud_networking_gax::backoff_policy::BackoffPolicy;
    /// use std::time::Duration;
    /// use std::time::Instant;
    /// let backoff = ExponentialBackoffBuilder::new()
    ///     .with_initial_delay(Duration::from_secs(5))
    ///     .with_maximum_delay(Duration::from_secs(50))
    ///     .with_scaling(2.0)
    ///     .build()?;
    /// let p = backoff.on_failure(Instant::now(), 1);
    /// assert!(p <= Duration::from_secs(5));
    /// let p = backoff.on_failure(Instant::now(), 2);
    /// assert!(p <= Duration::from_secs(10));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn build(self) -> Result<ExponentialBackoff, Error> {
        if self.scaling < 1.0 {
            return Err(Error::InvalidScalingFactor(self.scaling));
        }
        if self.initial_delay.is_zero() {
            return Err(Error::InvalidInitialDelay(self.initial_delay));
        }
        if self.maximum_delay < self.initial_delay {
            return Err(Error::EmptyRange {
                maximum: self.maximum_delay,
                initial: self.initial_delay,
            });
        }
        Ok(ExponentialBackoff {
            maximum_delay: self.maximum_delay,
            scaling: self.scaling,
            initial_delay: self.initial_delay,
        })
    }

    /// Creates a new exponential backoff policy clamping the ranges towards
    /// recommended values.
    ///
    /// The maximum delay is clamped first, to be between one millisecond and
    /// one day (both inclusive). Then the initial delay is clamped to be
    /// between one millisecond and the maximum delay. Finally, the scaling
    /// factor is clamped to the `[1.0, 32.0]` range.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_gax::exponential_backoff::ExponentialBackoffBuilder;
    /// # use ibm_cloud_networking_gax::backoff_policy::BackoffPolicy;
    /// use std::time::Duration;
    /// use std::time::Instant;
    /// let backoff = ExponentialBackoffBuilder::new().clamp();
    /// assert!(backoff.on_failure(Instant::now(), 1) <= Duration::from_secs(1));
    /// ```
    pub fn clamp(self) -> ExponentialBackoff {
        let scaling = self.scaling.clamp(1.0, 32.0);
        let maximum_delay = self
            .maximum_delay
            .clamp(Duration::from_millis(1), Duration::from_secs(24 * 60 * 60));
        let initial_delay = self
            .initial_delay
            .clamp(Duration::from_millis(1), maximum_delay);
        ExponentialBackoff {
            initial_delay,
            maximum_delay,
            scaling,
        }
    }
}

impl Default for ExponentialBackoffBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Implements truncated exponential backoff with full jitter.
///
/// The delay after the n-th attempt is a random value between zero and
/// `min(maximum_delay, initial_delay * scaling^(n-1))`.
#[derive(Clone, Debug)]
pub struct ExponentialBackoff {
    initial_delay: Duration,
    maximum_delay: Duration,
    scaling: f64,
}

impl ExponentialBackoff {
    fn delay(&self, attempt_count: u32) -> Duration {
        let exp = std::cmp::min(i32::MAX as u32, attempt_count) as i32;
        let exp = exp.saturating_sub(1);
        let scaling = self.scaling.powi(exp);
        if scaling >= self.maximum_delay.div_duration_f64(self.initial_delay) {
            self.maximum_delay
        } else {
            // Cannot overflow: scaling >= 1.0 and initial_delay * scaling < maximum_delay.
            self.initial_delay.mul_f64(scaling)
        }
    }

    fn delay_with_jitter(&self, attempt_count: u32, rng: &mut impl rand::Rng) -> Duration {
        let delay = self.delay(attempt_count);
        rng.random_range(Duration::ZERO..=delay)
    }
}

impl Default for ExponentialBackoff {
    fn default() -> Self {
        ExponentialBackoffBuilder::new().clamp()
    }
}

impl crate::backoff_policy::BackoffPolicy for ExponentialBackoff {
    fn on_failure(&self, _loop_start: std::time::Instant, attempt_count: u32) -> Duration {
        self.delay_with_jitter(attempt_count, &mut rand::rng())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backoff_policy::BackoffPolicy;
    use rand::SeedableRng;
    use test_case::test_case;

    const SECOND: Duration = Duration::from_secs(1);

    fn builder(initial: Duration, maximum: Duration, scaling: f64) -> ExponentialBackoffBuilder {
        ExponentialBackoffBuilder::new()
            .with_initial_delay(initial)
            .with_maximum_delay(maximum)
            .with_scaling(scaling)
    }

    #[test_case(Duration::ZERO, SECOND, 2.0 => matches Err(Error::InvalidInitialDelay(_)); "zero initial")]
    #[test_case(SECOND * 10, SECOND, 2.0 => matches Err(Error::EmptyRange { .. }); "empty range")]
    #[test_case(SECOND, SECOND * 5, 0.5 => matches Err(Error::InvalidScalingFactor(_)); "bad scaling")]
    #[test_case(Duration::from_nanos(1), Duration::MAX, 1.0 => matches Ok(_); "extremes")]
    #[test_case(SECOND, SECOND * 60, 2.0 => matches Ok(_); "defaults")]
    fn build(
        initial: Duration,
        maximum: Duration,
        scaling: f64,
    ) -> Result<ExponentialBackoff, Error> {
        builder(initial, maximum, scaling).build()
    }

    #[test_case(SECOND * 30, SECOND, SECOND * 30; "long interval")]
    #[test_case(Duration::from_millis(200), Duration::from_millis(200), Duration::from_millis(200); "short interval")]
    #[test_case(Duration::ZERO, Duration::from_millis(1), Duration::from_millis(1); "zero interval")]
    fn max_interval(input: Duration, initial: Duration, maximum: Duration) -> anyhow::Result<()> {
        let b = ExponentialBackoffBuilder::with_max_interval(input).build()?;
        assert_eq!((b.initial_delay, b.maximum_delay), (initial, maximum), "{b:?}");
        Ok(())
    }

    #[test_case(SECOND, Duration::MAX, 0.5, (SECOND, Duration::from_secs(86_400), 1.0); "scaling below range")]
    #[test_case(SECOND, SECOND * 5, 1e6, (SECOND, SECOND * 5, 32.0); "scaling over range")]
    #[test_case(SECOND, Duration::ZERO, 8.0, (Duration::from_millis(1), Duration::from_millis(1), 8.0); "max below range")]
    #[test_case(SECOND * 10, SECOND * 5, 8.0, (SECOND * 5, SECOND * 5, 8.0); "initial over max")]
    fn clamp(initial: Duration, maximum: Duration, scaling: f64, want: (Duration, Duration, f64)) {
        let b = builder(initial, maximum, scaling).clamp();
        assert_eq!((b.initial_delay, b.maximum_delay, b.scaling), want, "{b:?}");
    }

    #[test]
    fn delay_grows_until_maximum() -> anyhow::Result<()> {
        let b = builder(SECOND, SECOND * 4, 2.0).build()?;
        let got = [1, 2, 3, 4, u32::MAX].map(|n| b.delay(n));
        assert_eq!(got, [SECOND, SECOND * 2, SECOND * 4, SECOND * 4, SECOND * 4]);
        Ok(())
    }

    #[test]
    fn jitter_stays_below_delay() -> anyhow::Result<()> {
        let b = builder(SECOND, SECOND * 4, 2.0).build()?;
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        for attempt in 1..=6 {
            let upper = b.delay(attempt);
            for _ in 0..20 {
                let d = b.delay_with_jitter(attempt, &mut rng);
                assert!(d <= upper, "attempt={attempt} d={d:?} upper={upper:?}");
            }
        }
        let d = b.on_failure(std::time::Instant::now(), 5);
        assert!(d <= SECOND * 4, "{d:?}");
        Ok(())
    }
}
