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

use gax::options::RequestOptionsBuilder;
use httptest::{Expectation, Server, matchers::*, responders::*};
use ibm_cloud_networking_directlink_provider_v2::client::DirectLinkProvider;
use ibm_cloud_networking_directlink_provider_v2::model::{
    GatewayUpdate, ProviderGateway, ProviderGatewayChangeRequest, ProviderGatewayPortIdentity,
    ProviderPortCollection,
};
use serde_json::json;
use std::time::Duration;
use test_case::test_case;

type TestResult = anyhow::Result<()>;

const VERSION: &str = ibm_cloud_networking_directlink_provider_v2::DEFAULT_VERSION;

async fn test_client(server: &Server) -> anyhow::Result<DirectLinkProvider> {
    let client = DirectLinkProvider::builder()
        .with_endpoint(format!("http://{}", server.addr()))
        .with_credentials(auth::credentials::no_auth::Builder::new().build())
        .build()
        .await?;
    Ok(client)
}

fn gateway_json(id: &str) -> serde_json::Value {
    json!({
        "bgp_asn": 64999,
        "bgp_cer_cidr": "10.254.30.78/30",
        "bgp_ibm_asn": 13884,
        "bgp_ibm_cidr": "10.254.30.77/30",
        "bgp_status": "idle",
        "created_at": "2020-03-31T12:08:20Z",
        "crn": "crn:v1:bluemix:public:directlink:dal03:a/57a7d05f36894e3cb9b46a43556d903e::connect:ef4dcb1a-fee4-41c7-9e11-9cd99e65c1f4",
        "customer_account_id": "57a7d05f36894e3cb9b46a43556d903e",
        "id": id,
        "name": "my-gateway",
        "operational_status": "configuring",
        "port": {"id": "fffdcb1a-fee4-41c7-9e11-9cd99e65c777"},
        "provider_api_managed": true,
        "speed_mbps": 1000,
        "type": "connect",
        "vlan": 10,
    })
}

#[tokio::test]
async fn get_gateway() -> TestResult {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/gateways/gw-123"),
            request::query(url_decoded(contains(("version", VERSION)))),
            request::headers(contains((
                "x-ibmcloud-sdk-analytics",
                "service_name=direct_link_provider;service_version=V2;operation_id=GetProviderGateway"
            ))),
        ])
        .respond_with(json_encoded(gateway_json("gw-123"))),
    );

    let client = test_client(&server).await?;
    let response = client.get_provider_gateway("gw-123").send().await?;
    assert_eq!(response.status_code(), 200);
    let gateway = response.into_body().expect("a body in a 200 response");
    assert_eq!(gateway.id, "gw-123");
    assert_eq!(gateway.bgp_asn, 64999);
    assert_eq!(gateway.r#type, "connect");
    assert_eq!(gateway.vlan, Some(10));
    assert_eq!(
        gateway.port.map(|p| p.id),
        Some("fffdcb1a-fee4-41c7-9e11-9cd99e65c777".to_string())
    );
    Ok(())
}

#[test]
fn gateway_unknown_fields_round_trip() -> TestResult {
    let mut input = gateway_json("gw-123");
    input["some_new_field"] = json!({"a": 1});
    let gateway = serde_json::from_value::<ProviderGateway>(input.clone())?;
    let output = serde_json::to_value(&gateway)?;
    assert_eq!(output, input);
    Ok(())
}

#[test]
fn gateway_change_request() -> TestResult {
    let mut input = gateway_json("gw-123");
    input["change_request"] = json!({
        "type": "update_attributes",
        "updates": [
            {"speed_mbps": 2000},
            {"bgp_ibm_cidr": "10.0.0.1/30", "bgp_cer_cidr": "10.0.0.2/30"},
            {"something_else": true},
        ],
    });
    let gateway = serde_json::from_value::<ProviderGateway>(input)?;
    let Some(ProviderGatewayChangeRequest::UpdateAttributes { updates }) = gateway.change_request
    else {
        panic!("expected an update_attributes change request");
    };
    assert_eq!(updates.len(), 3, "{updates:?}");
    assert!(
        matches!(&updates[0], GatewayUpdate::Speed(u) if u.speed_mbps == 2000),
        "{updates:?}"
    );
    let GatewayUpdate::BgpCidr(cidr) = &updates[1] else {
        panic!("expected a BGP CIDR update: {updates:?}");
    };
    assert_eq!(cidr.bgp_ibm_cidr, "10.0.0.1/30");
    assert_eq!(cidr.bgp_cer_cidr.as_deref(), Some("10.0.0.2/30"));
    assert!(
        matches!(&updates[2], GatewayUpdate::Raw(m) if m.contains_key("something_else")),
        "{updates:?}"
    );

    let got =
        serde_json::from_value::<ProviderGatewayChangeRequest>(json!({"type": "delete_gateway"}))?;
    assert_eq!(got, ProviderGatewayChangeRequest::DeleteGateway);
    let got =
        serde_json::from_value::<ProviderGatewayChangeRequest>(json!({"type": "move_gateway"}))?;
    assert_eq!(got, ProviderGatewayChangeRequest::Unknown);
    Ok(())
}

#[tokio::test]
async fn list_gateways_by_item() -> TestResult {
    let server = Server::run();
    let next = format!("http://{}/gateways?limit=2&start=page-2", server.addr());
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/gateways"),
            request::query(url_decoded(contains(("limit", "2")))),
            request::query(url_decoded(not(contains(key("start"))))),
        ])
        .respond_with(json_encoded(json!({
            "first": {"href": format!("http://{}/gateways?limit=2", server.addr())},
            "limit": 2,
            "next": {"href": next},
            "total_count": 3,
            "gateways": [gateway_json("gw-1"), gateway_json("gw-2")],
        }))),
    );
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/gateways"),
            request::query(url_decoded(contains(("start", "page-2")))),
            request::query(url_decoded(contains(("version", VERSION)))),
        ])
        .respond_with(json_encoded(json!({
            "limit": 2,
            "total_count": 3,
            "gateways": [gateway_json("gw-3")],
        }))),
    );

    let client = test_client(&server).await?;
    let mut items = client.list_provider_gateways().set_limit(2).by_item();
    let mut got = Vec::new();
    while let Some(gateway) = items.next().await {
        got.push(gateway?.id);
    }
    assert_eq!(got, vec!["gw-1", "gw-2", "gw-3"]);
    Ok(())
}

#[tokio::test]
async fn list_gateways_single_page() -> TestResult {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/gateways")).respond_with(
            json_encoded(json!({
                "limit": 10,
                "total_count": 1,
                "gateways": [gateway_json("gw-1")],
            })),
        ),
    );

    let client = test_client(&server).await?;
    let page = client
        .list_provider_gateways()
        .send()
        .await?
        .into_body()
        .unwrap_or_default();
    assert_eq!(page.gateways.len(), 1);
    assert_eq!(page.next_start(), None);
    Ok(())
}

fn port_json(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "label": "XCR-FRK-CS-SEC-01",
        "location_display_name": "Dallas 03",
        "location_name": "dal03",
        "provider_name": "provider_1",
        "supported_link_speeds": [1000, 2000, 5000, 10000],
    })
}

#[tokio::test]
async fn list_and_get_ports() -> TestResult {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/ports"),
            request::query(url_decoded(not(contains(key("start"))))),
            request::query(url_decoded(contains(("version", VERSION)))),
        ])
        .respond_with(json_encoded(json!({
            "limit": 1,
            "next": {
                "href": format!("http://{}/ports?limit=1&start=port-page-2", server.addr()),
                "start": "port-page-2",
            },
            "total_count": 2,
            "ports": [port_json("port-1")],
        }))),
    );
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/ports"),
            request::query(url_decoded(contains(("start", "port-page-2")))),
        ])
        .respond_with(json_encoded(json!({
            "limit": 1,
            "total_count": 2,
            "ports": [port_json("port-2")],
        }))),
    );
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/ports/port-2"),
            request::query(url_decoded(contains(("version", VERSION)))),
        ])
        .respond_with(json_encoded(port_json("port-2"))),
    );

    let client = test_client(&server).await?;
    let mut pages = client.list_provider_ports().set_limit(1).by_page();
    let mut got = Vec::new();
    while let Some(page) = pages.next().await {
        got.extend(page?.ports.into_iter().map(|p| p.id));
    }
    assert_eq!(got, vec!["port-1", "port-2"]);

    let port = client
        .get_provider_port("port-2")
        .send()
        .await?
        .into_body()
        .unwrap_or_default();
    assert_eq!(port.location_name, "dal03");
    assert_eq!(port.supported_link_speeds, vec![1000, 2000, 5000, 10000]);
    Ok(())
}

#[tokio::test]
async fn create_gateway() -> TestResult {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("POST", "/gateways"),
            request::query(url_decoded(contains(("check_only", "true")))),
            request::query(url_decoded(contains(("version", VERSION)))),
            request::headers(contains(("content-type", "application/json"))),
            request::body(json_decoded(eq(json!({
                "bgp_asn": 64999,
                "customer_account_id": "57a7d05f36894e3cb9b46a43556d903e",
                "name": "my-gateway",
                "port": {"id": "fffdcb1a-fee4-41c7-9e11-9cd99e65c777"},
                "speed_mbps": 1000,
                "vlan": 10,
            })))),
        ])
        .respond_with(
            status_code(201)
                .append_header("content-type", "application/json")
                .body(gateway_json("gw-new").to_string()),
        ),
    );

    let client = test_client(&server).await?;
    let response = client
        .create_provider_gateway()
        .set_check_only(true)
        .set_bgp_asn(64999)
        .set_customer_account_id("57a7d05f36894e3cb9b46a43556d903e")
        .set_name("my-gateway")
        .set_port(ProviderGatewayPortIdentity::new().set_id("fffdcb1a-fee4-41c7-9e11-9cd99e65c777"))
        .set_speed_mbps(1000)
        .set_vlan(10)
        .send()
        .await?;
    assert_eq!(response.status_code(), 201);
    assert_eq!(response.body().map(|g| g.id.as_str()), Some("gw-new"));
    Ok(())
}

#[tokio::test]
async fn create_gateway_missing_fields() -> TestResult {
    // The server has no expectations, any request fails the test.
    let server = Server::run();
    let client = test_client(&server).await?;

    let err = client
        .create_provider_gateway()
        .set_bgp_asn(64999)
        .set_customer_account_id("57a7d05f36894e3cb9b46a43556d903e")
        .set_port(ProviderGatewayPortIdentity::new().set_id("port-1"))
        .set_speed_mbps(1000)
        .send()
        .await
        .unwrap_err();
    assert!(err.is_validation(), "{err:?}");
    assert!(err.to_string().contains("name"), "{err}");

    let err = client
        .create_provider_gateway()
        .set_name("my-gateway")
        .send()
        .await
        .unwrap_err();
    assert!(err.is_validation(), "{err:?}");

    let err = client.get_provider_gateway("").send().await.unwrap_err();
    assert!(err.is_validation(), "{err:?}");
    assert!(err.to_string().contains("id"), "{err}");
    Ok(())
}

#[tokio::test]
async fn update_gateway() -> TestResult {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("PATCH", "/gateways/gw-123"),
            request::body(json_decoded(eq(json!({"speed_mbps": 2000})))),
        ])
        .respond_with(json_encoded(gateway_json("gw-123"))),
    );

    let client = test_client(&server).await?;
    let response = client
        .update_provider_gateway("gw-123")
        .set_speed_mbps(2000)
        .send()
        .await?;
    assert!(response.body().is_some());
    Ok(())
}

#[tokio::test]
async fn delete_gateway_pending() -> TestResult {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("DELETE", "/gateways/gw-123")).respond_with(
            status_code(202)
                .append_header("content-type", "application/json")
                .body(gateway_json("gw-123").to_string()),
        ),
    );

    let client = test_client(&server).await?;
    let response = client.delete_provider_gateway("gw-123").send().await?;
    assert_eq!(response.status_code(), 202);
    assert!(response.body().is_some());
    Ok(())
}

#[tokio::test]
async fn delete_gateway_immediate() -> TestResult {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("DELETE", "/gateways/gw-123"))
            .respond_with(status_code(204)),
    );

    let client = test_client(&server).await?;
    let response = client.delete_provider_gateway("gw-123").send().await?;
    assert_eq!(response.status_code(), 204);
    assert!(response.body().is_none());
    Ok(())
}

#[test_case(".")]
#[test_case("..")]
#[tokio::test]
async fn dot_segment_ids_are_rejected(id: &str) -> TestResult {
    // The server has no expectations, any request fails the test.
    let server = Server::run();
    let client = DirectLinkProvider::builder()
        .with_endpoint(format!("http://{}/provider/v2", server.addr()))
        .with_credentials(auth::credentials::no_auth::Builder::new().build())
        .build()
        .await?;

    let err = client.delete_provider_gateway(id).send().await.unwrap_err();
    assert!(err.is_validation(), "{err:?}");
    let err = client.get_provider_port(id).send().await.unwrap_err();
    assert!(err.is_validation(), "{err:?}");
    Ok(())
}

#[tokio::test]
async fn version_per_client_and_request() -> TestResult {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/gateways/gw-123"),
            request::query(url_decoded(contains(("version", "2021-06-30")))),
        ])
        .times(2)
        .respond_with(json_encoded(gateway_json("gw-123"))),
    );
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/gateways/gw-123"),
            request::query(url_decoded(contains(("version", VERSION)))),
        ])
        .times(1)
        .respond_with(json_encoded(gateway_json("gw-123"))),
    );

    let client = test_client(&server).await?;
    let versioned = client.with_version("2021-06-30");
    assert_eq!(versioned.version(), "2021-06-30");
    assert_eq!(client.version(), VERSION);

    versioned.get_provider_gateway("gw-123").send().await?;
    client.get_provider_gateway("gw-123").send().await?;
    client
        .get_provider_gateway("gw-123")
        .set_version("2021-06-30")
        .send()
        .await?;

    let err = client
        .get_provider_gateway("gw-123")
        .set_version("")
        .send()
        .await
        .unwrap_err();
    assert!(err.is_validation(), "{err:?}");
    Ok(())
}

#[tokio::test]
async fn service_error() -> TestResult {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/gateways/gw-404")).respond_with(
            status_code(404)
                .append_header("content-type", "application/json")
                .body(
                    json!({
                        "errors": [{"code": "not_found", "message": "Gateway not found"}],
                        "trace": "trace-1",
                    })
                    .to_string(),
                ),
        ),
    );

    let client = test_client(&server).await?;
    let err = client.get_provider_gateway("gw-404").send().await.unwrap_err();
    assert!(err.is_api(), "{err:?}");
    assert_eq!(err.http_status_code(), Some(404));
    let api = err.api_error().expect("an ApiError for a 404 response");
    assert_eq!(api.message(), "Gateway not found");
    assert_eq!(api.code(), Some("not_found"));
    assert_eq!(api.trace(), Some("trace-1"));
    Ok(())
}

#[tokio::test]
async fn not_json() -> TestResult {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/ports/port-1")).respond_with(
            status_code(200)
                .append_header("content-type", "text/plain")
                .body("hello"),
        ),
    );

    let client = test_client(&server).await?;
    let err = client.get_provider_port("port-1").send().await.unwrap_err();
    assert!(err.is_response_processing(), "{err:?}");
    assert_eq!(err.http_status_code(), Some(200));
    assert_eq!(err.http_payload().map(|p| p.as_ref()), Some("hello".as_bytes()));
    Ok(())
}

#[tokio::test]
async fn deadline_exceeded() -> TestResult {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/ports/port-1")).respond_with(
            delay_and_then(Duration::from_millis(100), json_encoded(json!({"id": "port-1"}))),
        ),
    );

    let client = test_client(&server).await?;
    let err = client
        .get_provider_port("port-1")
        .with_deadline(Duration::from_millis(80))
        .send()
        .await
        .unwrap_err();
    assert!(err.is_timeout(), "{err:?}");
    assert!(err.to_string().contains("deadline exceeded"), "{err}");
    Ok(())
}

#[tokio::test]
async fn no_deadline_succeeds() -> TestResult {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/ports/port-1")).respond_with(
            delay_and_then(Duration::from_millis(100), json_encoded(json!({"id": "port-1"}))),
        ),
    );

    let client = test_client(&server).await?;
    let port = client
        .get_provider_port("port-1")
        .send()
        .await?
        .into_body();
    assert_eq!(port.map(|p| p.id), Some("port-1".to_string()));
    Ok(())
}

#[test_case(json!({"ports": []}), None; "no next")]
#[test_case(json!({"next": {"href": "https://directlink.cloud.ibm.com/provider/v2/ports?start=abc-123&limit=10", "start": "abc-123"}}), Some("abc-123"); "start field")]
#[test_case(json!({"next": {"href": "https://directlink.cloud.ibm.com/provider/v2/ports?start=from-href"}}), Some("from-href"); "start in href")]
#[test_case(json!({"next": {"href": "/ports?limit=10&start=relative"}}), Some("relative"); "relative href")]
#[test_case(json!({"next": {"href": "https://directlink.cloud.ibm.com/provider/v2/ports?limit=10"}}), None; "no cursor")]
fn pagination_cursor(body: serde_json::Value, want: Option<&str>) -> TestResult {
    let page = serde_json::from_value::<ProviderPortCollection>(body)?;
    assert_eq!(page.next_start().as_deref(), want);
    Ok(())
}
