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

use crate::Result;
use crate::token::{Token, TokenProvider};
use std::sync::Arc;
use tokio::sync::{Mutex, Notify};
// Using tokio's clock makes the cache testable with paused time.
use tokio::time::Instant;

/// Caches the tokens returned by a [TokenProvider].
///
/// The cached token is replaced once its refresh time passes. If the
/// replacement fails the cache keeps serving the old token until it expires.
/// Concurrent callers share a single refresh.
#[derive(Debug)]
pub(crate) struct TokenCache<T>
where
    T: TokenProvider,
{
    // The cached token, the last error, or nothing before the first refresh.
    slot: Arc<Mutex<Option<Result<Token>>>>,
    // Held while a refresh is running.
    refreshing: Arc<Mutex<()>>,
    // Wakes up the callers waiting on a refresh.
    refreshed: Arc<Notify>,
    inner: Arc<T>,
}

impl<T: TokenProvider> Clone for TokenCache<T> {
    fn clone(&self) -> Self {
        Self {
            slot: self.slot.clone(),
            refreshing: self.refreshing.clone(),
            refreshed: self.refreshed.clone(),
            inner: self.inner.clone(),
        }
    }
}

impl<T: TokenProvider> TokenCache<T> {
    pub fn new(inner: T) -> Self {
        Self {
            slot: Arc::new(Mutex::new(None)),
            refreshing: Arc::new(Mutex::new(())),
            refreshed: Arc::new(Notify::new()),
            inner: Arc::new(inner),
        }
    }

    async fn cached(&self) -> Option<Result<Token>> {
        self.slot.lock().await.clone()
    }

    async fn refresh(&self) -> Result<Token> {
        let fresh = self.inner.token().await;
        let mut slot = self.slot.lock().await;
        let result = match (fresh, slot.take()) {
            (Ok(token), _) => Ok(token),
            (Err(e), Some(Ok(current))) if !current.is_expired(Instant::now()) => {
                tracing::debug!("cannot refresh the token, using the current one: {e}");
                Ok(current)
            }
            (Err(e), _) => {
                tracing::debug!("cannot refresh the token: {e}");
                Err(e)
            }
        };
        *slot = Some(result.clone());
        result
    }
}

#[async_trait::async_trait]
impl<T: TokenProvider + 'static> TokenProvider for TokenCache<T> {
    async fn token(&self) -> Result<Token> {
        if let Some(Ok(token)) = self.cached().await {
            if !token.needs_refresh(Instant::now()) {
                return Ok(token);
            }
        }

        // Register before checking for a refresh in progress, so a refresh
        // completing in between still wakes us up.
        let notified = self.refreshed.notified();
        tokio::pin!(notified);
        notified.as_mut().enable();

        if let Ok(guard) = self.refreshing.try_lock() {
            let result = self.refresh().await;
            drop(guard);
            self.refreshed.notify_waiters();
            return result;
        }
        notified.await;

        match self.cached().await {
            Some(result) => result,
            None => Err(crate::errors::CredentialsError::from_msg(
                true,
                "the token refresh completed without a result",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CredentialsError;
    use crate::token::tests::MockTokenProvider;
    use std::time::Duration;

    const LIFETIME: Duration = Duration::from_secs(3600);
    const REFRESH: Duration = Duration::from_secs(2880);

    fn token(name: &str) -> Token {
        Token::new(name, "Bearer").with_lifetime(Instant::now(), LIFETIME, 0.8)
    }

    fn failure() -> Result<Token> {
        Err(CredentialsError::from_msg(true, "token service unavailable"))
    }

    #[tokio::test]
    async fn cached_token() -> anyhow::Result<()> {
        let mut mock = MockTokenProvider::new();
        mock.expect_token()
            .times(1)
            .return_once(|| Ok(Token::new("static", "Bearer")));

        let cache = TokenCache::new(mock);
        for _ in 0..3 {
            assert_eq!(cache.token().await?.access_token, "static");
        }
        Ok(())
    }

    #[tokio::test]
    async fn errors_are_not_cached() {
        let mut mock = MockTokenProvider::new();
        mock.expect_token().times(2).returning(failure);

        let cache = TokenCache::new(mock);
        assert!(cache.token().await.is_err());
        assert!(cache.token().await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn refresh_after_refresh_time() -> anyhow::Result<()> {
        let mut seq = mockall::Sequence::new();
        let mut mock = MockTokenProvider::new();
        mock.expect_token()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(token("first")));
        mock.expect_token()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(token("second")));

        let cache = TokenCache::new(mock);
        assert_eq!(cache.token().await?.access_token, "first");

        tokio::time::advance(REFRESH - Duration::from_secs(1)).await;
        assert_eq!(cache.token().await?.access_token, "first");

        tokio::time::advance(Duration::from_secs(1)).await;
        assert_eq!(cache.token().await?.access_token, "second");
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn failed_refresh_keeps_valid_token() -> anyhow::Result<()> {
        let mut seq = mockall::Sequence::new();
        let mut mock = MockTokenProvider::new();
        mock.expect_token()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(token("first")));
        mock.expect_token()
            .times(2)
            .in_sequence(&mut seq)
            .returning(failure);

        let cache = TokenCache::new(mock);
        assert_eq!(cache.token().await?.access_token, "first");

        // Past the refresh time the refresh fails, the token is still valid.
        tokio::time::advance(REFRESH).await;
        assert_eq!(cache.token().await?.access_token, "first");

        // Past the expiration the error is returned.
        tokio::time::advance(LIFETIME - REFRESH).await;
        let err = cache.token().await.unwrap_err();
        assert!(err.is_transient(), "{err:?}");
        Ok(())
    }

    #[derive(Clone, Debug)]
    struct SlowProvider {
        result: Result<Token>,
        calls: Arc<std::sync::Mutex<i32>>,
    }

    impl SlowProvider {
        fn new(result: Result<Token>) -> Self {
            Self {
                result,
                calls: Arc::new(std::sync::Mutex::new(0)),
            }
        }

        fn calls(&self) -> i32 {
            *self.calls.lock().unwrap()
        }
    }

    #[async_trait::async_trait]
    impl TokenProvider for SlowProvider {
        async fn token(&self) -> Result<Token> {
            // Give the concurrent callers time to pile up.
            tokio::time::sleep(Duration::from_millis(50)).await;
            *self.calls.lock().unwrap() += 1;
            self.result.clone()
        }
    }

    async fn concurrent_calls(provider: SlowProvider) -> anyhow::Result<Vec<Result<Token>>> {
        let cache = TokenCache::new(provider);
        let tasks = (0..64)
            .map(|_| {
                let cache = cache.clone();
                tokio::spawn(async move { cache.token().await })
            })
            .collect::<Vec<_>>();
        let mut results = Vec::new();
        for task in tasks {
            results.push(task.await?);
        }
        Ok(results)
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn concurrent_callers_share_refresh() -> anyhow::Result<()> {
        let provider = SlowProvider::new(Ok(Token::new("shared", "Bearer")));
        let results = concurrent_calls(provider.clone()).await?;
        for r in results {
            assert_eq!(r?.access_token, "shared");
        }
        // Tasks may start after the first refresh completes, the bound is loose.
        let calls = provider.calls();
        assert!(calls < 64, "{calls}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn concurrent_callers_share_error() -> anyhow::Result<()> {
        let provider = SlowProvider::new(failure());
        let results = concurrent_calls(provider.clone()).await?;
        for r in results {
            let e = r.expect_err("the provider always fails");
            assert!(e.to_string().contains("token service unavailable"), "{e}");
        }
        let calls = provider.calls();
        assert!(calls < 64, "{calls}");
        Ok(())
    }
}
