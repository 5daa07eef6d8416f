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
use http::HeaderValue;
use std::time::Duration;
use tokio::time::Instant;

/// An access token issued by a token service.
#[derive(Clone, PartialEq)]
pub(crate) struct Token {
    pub access_token: String,

    /// The scheme used in the `Authorization` header, typically `Bearer`.
    pub token_type: String,

    /// The token should be replaced after this instant. It remains usable
    /// until `expires_at` if the replacement fails.
    pub refresh_at: Option<Instant>,

    /// The service rejects the token after this instant.
    pub expires_at: Option<Instant>,
}

impl Token {
    /// A token that never expires.
    pub fn new<T: Into<String>, S: Into<String>>(access_token: T, token_type: S) -> Self {
        Self {
            access_token: access_token.into(),
            token_type: token_type.into(),
            refresh_at: None,
            expires_at: None,
        }
    }

    /// Sets the expiration to `issued + lifetime`, and the refresh time to
    /// `refresh_fraction` of the lifetime.
    pub fn with_lifetime(
        mut self,
        issued: Instant,
        lifetime: Duration,
        refresh_fraction: f64,
    ) -> Self {
        self.refresh_at = Some(issued + lifetime.mul_f64(refresh_fraction.clamp(0.0, 1.0)));
        self.expires_at = Some(issued + lifetime);
        self
    }

    pub fn needs_refresh(&self, now: Instant) -> bool {
        self.refresh_at.is_some_and(|t| t <= now)
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|t| t <= now)
    }

    /// The value of the `Authorization` header for this token.
    pub fn authorization(&self) -> Result<HeaderValue> {
        let mut value =
            HeaderValue::from_str(&format!("{} {}", self.token_type, self.access_token))
                .map_err(crate::errors::non_retryable)?;
        value.set_sensitive(true);
        Ok(value)
    }
}

impl std::fmt::Debug for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Token")
            .field("access_token", &"[censored]")
            .field("token_type", &self.token_type)
            .field("refresh_at", &self.refresh_at)
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

#[async_trait::async_trait]
pub(crate) trait TokenProvider: std::fmt::Debug + Send + Sync {
    async fn token(&self) -> Result<Token>;
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    // Used by tests in other modules.
    mockall::mock! {
        #[derive(Debug)]
        pub TokenProvider { }

        #[async_trait::async_trait]
        impl TokenProvider for TokenProvider {
            async fn token(&self) -> Result<Token>;
        }
    }

    #[test]
    fn lifetime() {
        let now = Instant::now();
        let token = Token::new("abc", "Bearer").with_lifetime(now, Duration::from_secs(3600), 0.8);
        assert_eq!(token.refresh_at, Some(now + Duration::from_secs(2880)));
        assert_eq!(token.expires_at, Some(now + Duration::from_secs(3600)));

        assert!(!token.needs_refresh(now));
        assert!(token.needs_refresh(now + Duration::from_secs(2880)));
        assert!(!token.is_expired(now + Duration::from_secs(3599)));
        assert!(token.is_expired(now + Duration::from_secs(3600)));
    }

    #[test]
    fn never_expires() {
        let token = Token::new("abc", "Bearer");
        let later = Instant::now() + Duration::from_secs(365 * 24 * 3600);
        assert!(!token.needs_refresh(later));
        assert!(!token.is_expired(later));
    }

    #[test]
    fn authorization() -> anyhow::Result<()> {
        let value = Token::new("abc", "Bearer").authorization()?;
        assert_eq!(value, HeaderValue::from_static("Bearer abc"));
        assert!(value.is_sensitive());

        let err = Token::new("bad\nvalue", "Bearer").authorization().unwrap_err();
        assert!(!err.is_transient(), "{err:?}");
        Ok(())
    }

    #[test]
    fn debug() {
        let token = Token::new("token-test-only", "Bearer");
        let got = format!("{token:?}");
        assert!(!got.contains("token-test-only"), "{got}");
        assert!(got.contains("access_token: \"[censored]\""), "{got}");
        assert!(got.contains("token_type: \"Bearer\""), "{got}");
    }
}
