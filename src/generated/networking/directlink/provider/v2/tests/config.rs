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

use gax::external_config::ExternalConfig;
use httptest::{Expectation, Server, matchers::*, responders::*};
use ibm_cloud_networking_directlink_provider_v2::SERVICE_NAME;
use ibm_cloud_networking_directlink_provider_v2::client::DirectLinkProvider;
use serde_json::json;
use std::time::Duration;

type TestResult = anyhow::Result<()>;

fn port_json() -> serde_json::Value {
    json!({"id": "port-1", "label": "XCR-FRK-CS-SEC-01", "supported_link_speeds": [1000]})
}

fn unavailable() -> ResponseBuilder<&'static str> {
    status_code(503)
}

#[tokio::test]
async fn external_config() -> TestResult {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/ports/port-1"),
            request::headers(contains(("authorization", "Bearer my-token"))),
        ])
        .respond_with(json_encoded(port_json())),
    );

    let config = ExternalConfig::from_vars(
        SERVICE_NAME,
        [
            ("DIRECT_LINK_PROVIDER_URL", format!("http://{}/", server.addr())),
            ("DIRECT_LINK_PROVIDER_AUTH_TYPE", "bearerToken".to_string()),
            ("DIRECT_LINK_PROVIDER_BEARER_TOKEN", "my-token".to_string()),
        ],
    );
    let client = DirectLinkProvider::builder()
        .with_external_config(config)
        .build()
        .await?;
    let response = client.get_provider_port("port-1").send().await?;
    assert_eq!(response.body().map(|p| p.label.as_str()), Some("XCR-FRK-CS-SEC-01"));
    Ok(())
}

#[tokio::test]
async fn external_config_missing_auth() -> TestResult {
    let config = ExternalConfig::from_vars(
        SERVICE_NAME,
        [("DIRECT_LINK_PROVIDER_URL", "http://localhost:1")],
    );
    let err = DirectLinkProvider::builder()
        .with_external_config(config)
        .build()
        .await
        .unwrap_err();
    assert!(err.is_credentials(), "{err:?}");
    Ok(())
}

#[tokio::test]
async fn no_retries_by_default() -> TestResult {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/ports/port-1"))
            .times(1)
            .respond_with(unavailable()),
    );

    let client = DirectLinkProvider::builder()
        .with_endpoint(format!("http://{}", server.addr()))
        .with_credentials(auth::credentials::no_auth::Builder::new().build())
        .build()
        .await?;
    let err = client.get_provider_port("port-1").send().await.unwrap_err();
    assert_eq!(err.http_status_code(), Some(503), "{err:?}");
    Ok(())
}

#[tokio::test]
async fn with_retries() -> TestResult {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/ports/port-1"))
            .times(3)
            .respond_with(cycle(vec![
                Box::new(unavailable()) as Box<dyn Responder>,
                Box::new(unavailable()),
                Box::new(json_encoded(port_json())),
            ])),
    );

    let client = DirectLinkProvider::builder()
        .with_endpoint(format!("http://{}", server.addr()))
        .with_credentials(auth::credentials::no_auth::Builder::new().build())
        .with_retries(2, Duration::from_millis(10))
        .build()
        .await?;
    let response = client.get_provider_port("port-1").send().await?;
    assert_eq!(response.body().map(|p| p.id.as_str()), Some("port-1"));
    Ok(())
}

#[tokio::test]
async fn retries_exhausted() -> TestResult {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/ports/port-1"))
            .times(2)
            .respond_with(unavailable()),
    );

    let client = DirectLinkProvider::builder()
        .with_endpoint(format!("http://{}", server.addr()))
        .with_credentials(auth::credentials::no_auth::Builder::new().build())
        .with_retries(1, Duration::from_millis(10))
        .build()
        .await?;
    let err = client.get_provider_port("port-1").send().await.unwrap_err();
    assert_eq!(err.http_status_code(), Some(503), "{err:?}");
    Ok(())
}

#[tokio::test]
async fn with_tracing() -> TestResult {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/ports/port-1"))
            .respond_with(json_encoded(port_json())),
    );

    let client = DirectLinkProvider::builder()
        .with_endpoint(format!("http://{}", server.addr()))
        .with_credentials(auth::credentials::no_auth::Builder::new().build())
        .with_tracing()
        .build()
        .await?;
    let response = client.get_provider_port("port-1").send().await?;
    assert!(response.body().is_some());
    Ok(())
}
