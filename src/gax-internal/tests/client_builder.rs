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
    use auth::credentials::Credentials;
    use gax::external_config::ExternalConfig;
    use gax::options::RequestOptions;
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use ibm_cloud_networking_gax_internal as gaxi;
    use serde_json::json;
    use std::time::Duration;

    const DEFAULT_ENDPOINT: &str = "https://test.cloud.ibm.com/v1";
    const SERVICE_NAME: &str = "test_service";

    type Result<T> = anyhow::Result<T>;

    #[tokio::test]
    async fn default_endpoint() -> Result<()> {
        let client = FakeClient::builder()
            .with_credentials(no_auth())
            .build()
            .await?;
        assert_eq!(client.inner.endpoint(), DEFAULT_ENDPOINT);
        Ok(())
    }

    #[tokio::test]
    async fn endpoint_from_external_config() -> Result<()> {
        let config = ExternalConfig::from_vars(
            SERVICE_NAME,
            [
                ("TEST_SERVICE_URL", "https://private.test.cloud.ibm.com/v1/"),
                ("TEST_SERVICE_AUTH_TYPE", "noauth"),
            ],
        );
        let client = FakeClient::builder()
            .with_external_config(config)
            .build()
            .await?;
        assert_eq!(client.inner.endpoint(), "https://private.test.cloud.ibm.com/v1");
        Ok(())
    }

    #[tokio::test]
    async fn explicit_endpoint_wins() -> Result<()> {
        let config = ExternalConfig::from_vars(
            SERVICE_NAME,
            [
                ("TEST_SERVICE_URL", "https://private.test.cloud.ibm.com/v1"),
                ("TEST_SERVICE_AUTH_TYPE", "noauth"),
            ],
        );
        let client = FakeClient::builder()
            .with_external_config(config)
            .with_endpoint("http://localhost:8080/")
            .build()
            .await?;
        assert_eq!(client.inner.endpoint(), "http://localhost:8080");
        Ok(())
    }

    #[tokio::test]
    async fn missing_credentials() -> Result<()> {
        let config = ExternalConfig::from_vars(SERVICE_NAME, [("OTHER_SERVICE_APIKEY", "k")]);
        let err = FakeClient::builder()
            .with_external_config(config)
            .build()
            .await
            .unwrap_err();
        assert!(err.is_credentials(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn invalid_retry_configuration() -> Result<()> {
        let config = ExternalConfig::from_vars(
            SERVICE_NAME,
            [
                ("TEST_SERVICE_AUTH_TYPE", "noauth"),
                ("TEST_SERVICE_ENABLE_RETRIES", "true"),
                ("TEST_SERVICE_MAX_RETRIES", "many"),
            ],
        );
        let err = FakeClient::builder()
            .with_external_config(config)
            .build()
            .await
            .unwrap_err();
        assert!(err.is_configuration(), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn retries_from_external_config() -> Result<()> {
        let server = Server::run();
        // Two retries, three attempts.
        server.expect(
            Expectation::matching(request::method_path("GET", "/things"))
                .times(3)
                .respond_with(status_code(503).body("try-again")),
        );
        let url = server.url_str("");
        let config = ExternalConfig::from_vars(
            SERVICE_NAME,
            [
                ("TEST_SERVICE_URL", url.as_str()),
                ("TEST_SERVICE_AUTH_TYPE", "noauth"),
                ("TEST_SERVICE_ENABLE_RETRIES", "TRUE"),
                ("TEST_SERVICE_MAX_RETRIES", "2"),
                ("TEST_SERVICE_RETRY_INTERVAL", "1"),
            ],
        );
        let client = FakeClient::builder()
            .with_external_config(config)
            .with_backoff_policy(
                gax::exponential_backoff::ExponentialBackoffBuilder::new()
                    .with_initial_delay(Duration::from_millis(1))
                    .with_maximum_delay(Duration::from_millis(1))
                    .clamp(),
            )
            .build()
            .await?;
        let err = client.get_things().await.unwrap_err();
        assert_eq!(err.http_status_code(), Some(503), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn without_retries_overrides_external_config() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/things"))
                .times(1)
                .respond_with(status_code(503).body("try-again")),
        );
        let url = server.url_str("");
        let config = ExternalConfig::from_vars(
            SERVICE_NAME,
            [
                ("TEST_SERVICE_URL", url.as_str()),
                ("TEST_SERVICE_AUTH_TYPE", "noauth"),
                ("TEST_SERVICE_ENABLE_RETRIES", "true"),
            ],
        );
        let client = FakeClient::builder()
            .with_external_config(config)
            .without_retries()
            .build()
            .await?;
        let err = client.get_things().await.unwrap_err();
        assert_eq!(err.http_status_code(), Some(503), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn success() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/things"))
                .respond_with(json_encoded(json!({"things": []}))),
        );
        let client = FakeClient::builder()
            .with_endpoint(server.url_str(""))
            .with_credentials(no_auth())
            .build()
            .await?;
        let got = client.get_things().await?;
        assert_eq!(got, Some(json!({"things": []})));
        Ok(())
    }

    fn no_auth() -> Credentials {
        auth::credentials::no_auth::Builder::new().build()
    }

    #[derive(Debug)]
    pub struct FakeClient {
        inner: gaxi::http::ReqwestClient,
    }
    impl FakeClient {
        pub fn builder() -> ClientBuilder {
            gax::client_builder::internal::new_builder(fake_client::Factory)
        }

        async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
            let inner =
                gaxi::http::ReqwestClient::new(config, DEFAULT_ENDPOINT, SERVICE_NAME).await?;
            Ok(Self { inner })
        }

        async fn get_things(&self) -> gax::Result<Option<serde_json::Value>> {
            let builder = self.inner.builder(reqwest::Method::GET, "/things".into());
            let options = gax::options::internal::set_default_idempotency(
                RequestOptions::default(),
                true,
            );
            self.inner
                .execute::<gaxi::http::NoBody, serde_json::Value>(builder, None, options)
                .await
                .map(gax::response::Response::into_body)
        }
    }
    /// Make this visible for documentation purposes.
    pub type ClientBuilder = gax::client_builder::ClientBuilder<fake_client::Factory, Credentials>;
    // Note the pub(self), the types in this module are not accessible to
    // application developers.
    mod fake_client {
        use super::gaxi;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = super::FakeClient;
            type Credentials = super::Credentials;
            async fn build(
                self,
                config: gaxi::options::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }
}
