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
    use gax::exponential_backoff::ExponentialBackoffBuilder;
    use gax::options::*;
    use gax::retry_policy::{AlwaysRetry, RetryPolicyExt};
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use ibm_cloud_networking_gax_internal::http::{NoBody, ReqwestClient};
    use ibm_cloud_networking_gax_internal::options::ClientConfig;
    use serde_json::json;
    use std::time::Duration;

    type Result<T> = anyhow::Result<T>;

    const DELAY: Duration = Duration::from_millis(100);

    #[tokio::test]
    async fn no_deadline() -> Result<()> {
        let server = start_slow();
        let client = ReqwestClient::new(test_config(), &server.url_str(""), "test").await?;

        let builder = client.builder(reqwest::Method::GET, "/slow".into());
        let response = client
            .execute::<NoBody, serde_json::Value>(builder, None, RequestOptions::default())
            .await?;
        assert_eq!(response.into_body(), Some(json!({"status": "done"})));
        Ok(())
    }

    #[tokio::test]
    async fn deadline_does_not_expire() -> Result<()> {
        let server = start_slow();
        let client = ReqwestClient::new(test_config(), &server.url_str(""), "test").await?;

        let builder = client.builder(reqwest::Method::GET, "/slow".into());
        let options = test_options(Duration::from_secs(5));
        let response = client
            .execute::<NoBody, serde_json::Value>(builder, None, options)
            .await?;
        assert_eq!(response.into_body(), Some(json!({"status": "done"})));
        Ok(())
    }

    #[tokio::test]
    async fn deadline_expires() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/slow"))
                .times(..)
                .respond_with(delay_and_then(DELAY, json_encoded(json!({"status": "done"})))),
        );
        let client = ReqwestClient::new(test_config(), &server.url_str(""), "test").await?;

        let builder = client.builder(reqwest::Method::GET, "/slow".into());
        let options = test_options(Duration::from_millis(80));
        let start = std::time::Instant::now();
        let err = client
            .execute::<NoBody, serde_json::Value>(builder, None, options)
            .await
            .unwrap_err();
        assert!(err.is_timeout(), "{err:?}");
        assert!(start.elapsed() < DELAY, "{:?}", start.elapsed());
        Ok(())
    }

    #[tokio::test]
    async fn deadline_covers_retry_loop() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/slow"))
                .times(1..)
                .respond_with(delay_and_then(
                    Duration::from_millis(20),
                    status_code(503).body("try-again"),
                )),
        );
        let client = ReqwestClient::new(test_config(), &server.url_str(""), "test").await?;

        let builder = client.builder(reqwest::Method::GET, "/slow".into());
        let mut options = test_options(Duration::from_millis(150));
        options.set_retry_policy(AlwaysRetry.with_attempt_limit(1000));
        options.set_backoff_policy(
            ExponentialBackoffBuilder::new()
                .with_initial_delay(Duration::from_millis(10))
                .with_maximum_delay(Duration::from_millis(10))
                .clamp(),
        );
        let err = client
            .execute::<NoBody, serde_json::Value>(builder, None, options)
            .await
            .unwrap_err();
        assert!(err.is_timeout(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn attempt_timeout_expires() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/slow"))
                .times(..)
                .respond_with(delay_and_then(DELAY, json_encoded(json!({"status": "done"})))),
        );
        let client = ReqwestClient::new(test_config(), &server.url_str(""), "test").await?;

        let builder = client.builder(reqwest::Method::GET, "/slow".into());
        let mut options = RequestOptions::default();
        options.set_attempt_timeout(Duration::from_millis(20));
        let err = client
            .execute::<NoBody, serde_json::Value>(builder, None, options)
            .await
            .unwrap_err();
        assert!(err.is_timeout(), "{err:?}");
        Ok(())
    }

    fn start_slow() -> Server {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/slow"))
                .respond_with(delay_and_then(DELAY, json_encoded(json!({"status": "done"})))),
        );
        server
    }

    fn test_config() -> ClientConfig {
        let mut config = ClientConfig::default();
        config.cred = Some(auth::credentials::no_auth::Builder::new().build());
        config
    }

    fn test_options(deadline: Duration) -> RequestOptions {
        let mut options = RequestOptions::default();
        options.set_deadline(deadline);
        options
    }
}
