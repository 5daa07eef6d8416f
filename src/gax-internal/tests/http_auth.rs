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

#[cfg(test)]
mod tests {
    use auth::credentials::{Credentials, CredentialsProvider};
    use auth::errors::CredentialsError;
    use gax::options::*;
    use gax::retry_policy::{RetryPolicyExt, TransientErrors};
    use http::HeaderMap;
    use http::header::{HeaderName, HeaderValue};
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use ibm_cloud_networking_gax_internal::http::{NoBody, ReqwestClient};
    use ibm_cloud_networking_gax_internal::options::ClientConfig;
    use serde_json::json;
    use std::error::Error as _;

    type AuthResult<T> = std::result::Result<T, CredentialsError>;
    type Result<T> = anyhow::Result<T>;

    mockall::mock! {
        #[derive(Debug)]
        Credentials {}

        impl CredentialsProvider for Credentials {
            async fn headers(&self) -> AuthResult<HeaderMap>;
            fn authentication_type(&self) -> &'static str;
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn auth_headers() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/echo"),
                request::headers(contains(("auth-key-1", "auth-value-1"))),
                request::headers(contains(("auth-key-2", "auth-value-2"))),
            ])
            .respond_with(json_encoded(json!({}))),
        );

        // Mock credentials verify all the headers are included in the request.
        let mut mock = MockCredentials::new();
        let headers = HeaderMap::from_iter([
            (
                HeaderName::from_static("auth-key-1"),
                HeaderValue::from_static("auth-value-1"),
            ),
            (
                HeaderName::from_static("auth-key-2"),
                HeaderValue::from_static("auth-value-2"),
            ),
        ]);
        mock.expect_headers().return_once(|| Ok(headers));

        let client = ReqwestClient::new(
            test_config(Credentials::from(mock)),
            &server.url_str(""),
            "test",
        )
        .await?;
        let builder = client.builder(reqwest::Method::GET, "/echo".into());
        client
            .execute::<NoBody, serde_json::Value>(builder, None, RequestOptions::default())
            .await?;
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn auth_error_retryable() -> Result<()> {
        let server = Server::run();
        let retry_count = 3;
        let mut mock = MockCredentials::new();
        mock.expect_headers()
            .times(retry_count)
            .returning(|| Err(CredentialsError::from_msg(true, "mock retryable error")));

        let client = ReqwestClient::new(
            test_config(Credentials::from(mock)),
            &server.url_str(""),
            "test",
        )
        .await?;
        let builder = client.builder(reqwest::Method::GET, "/echo".into());
        let mut options = RequestOptions::default();
        options.set_retry_policy(TransientErrors.with_attempt_limit(retry_count as u32));
        options.set_backoff_policy(test_backoff());
        let err = client
            .execute::<NoBody, serde_json::Value>(builder, None, options)
            .await
            .unwrap_err();
        assert!(err.is_authentication(), "{err:?}");
        let source = err
            .source()
            .and_then(|e| e.downcast_ref::<CredentialsError>());
        assert!(
            matches!(source, Some(e) if e.is_transient()),
            "{err:?}"
        );
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn auth_error_non_retryable() -> Result<()> {
        let server = Server::run();
        let mut mock = MockCredentials::new();
        mock.expect_headers()
            .times(1)
            .returning(|| Err(CredentialsError::from_msg(false, "mock non-retryable error")));

        let client = ReqwestClient::new(
            test_config(Credentials::from(mock)),
            &server.url_str(""),
            "test",
        )
        .await?;
        let builder = client.builder(reqwest::Method::GET, "/echo".into());
        let mut options = RequestOptions::default();
        options.set_retry_policy(TransientErrors.with_attempt_limit(3));
        options.set_backoff_policy(test_backoff());
        let err = client
            .execute::<NoBody, serde_json::Value>(builder, None, options)
            .await
            .unwrap_err();
        assert!(err.is_authentication(), "{err:?}");
        assert!(err.to_string().contains("mock non-retryable error"), "{err}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn bearer_token() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/echo"),
                request::headers(contains(("authorization", "Bearer test-token"))),
            ])
            .respond_with(json_encoded(json!({}))),
        );

        let credentials = auth::credentials::bearer_token::Builder::new("test-token").build()?;
        let client =
            ReqwestClient::new(test_config(credentials), &server.url_str(""), "test").await?;
        let builder = client.builder(reqwest::Method::GET, "/echo".into());
        client
            .execute::<NoBody, serde_json::Value>(builder, None, RequestOptions::default())
            .await?;
        Ok(())
    }

    fn test_config(credentials: Credentials) -> ClientConfig {
        let mut config = ClientConfig::default();
        config.cred = Some(credentials);
        config
    }

    fn test_backoff() -> gax::exponential_backoff::ExponentialBackoff {
        gax::exponential_backoff::ExponentialBackoffBuilder::new()
            .with_initial_delay(std::time::Duration::from_millis(1))
            .with_maximum_delay(std::time::Duration::from_millis(1))
            .clamp()
    }
}
