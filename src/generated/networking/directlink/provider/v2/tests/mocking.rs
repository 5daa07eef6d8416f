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

use gax::options::RequestOptions;
use gax::response::Response;
use ibm_cloud_networking_directlink_provider_v2::client::DirectLinkProvider;
use ibm_cloud_networking_directlink_provider_v2::model::*;
use ibm_cloud_networking_directlink_provider_v2::stub;

type TestResult = anyhow::Result<()>;

mockall::mock! {
    #[derive(Debug)]
    Provider {}
    impl stub::DirectLinkProvider for Provider {
        async fn list_provider_ports(
            &self,
            req: ListProviderPortsRequest,
            options: RequestOptions,
        ) -> gax::Result<Response<ProviderPortCollection>>;
        async fn get_provider_port(
            &self,
            req: GetProviderPortRequest,
            options: RequestOptions,
        ) -> gax::Result<Response<ProviderPort>>;
    }
}

fn port(id: &str) -> ProviderPort {
    ProviderPort::new()
        .set_id(id)
        .set_label("XCR-FRK-CS-SEC-01")
        .set_location_name("dal03")
        .set_supported_link_speeds([1000, 2000])
}

#[tokio::test]
async fn get_port_from_stub() -> TestResult {
    let mut mock = MockProvider::new();
    mock.expect_get_provider_port()
        .withf(|req, _| req.id == "port-1" && req.version == "2020-03-31")
        .return_once(|_, _| Ok(Response::from(port("port-1"))));

    let client = DirectLinkProvider::from_stub(mock);
    let response = client.get_provider_port("port-1").send().await?;
    assert_eq!(response.body(), Some(&port("port-1")));
    Ok(())
}

#[tokio::test]
async fn list_ports_from_stub() -> TestResult {
    let mut seq = mockall::Sequence::new();
    let mut mock = MockProvider::new();
    mock.expect_list_provider_ports()
        .once()
        .in_sequence(&mut seq)
        .withf(|req, _| req.start.is_none() && req.version == "2022-01-01")
        .return_once(|_, _| {
            let page = ProviderPortCollection::new()
                .set_ports([port("port-1"), port("port-2")])
                .set_next(PaginationNext::new().set_href("https://example.com/ports?start=abc"));
            Ok(Response::from(page))
        });
    mock.expect_list_provider_ports()
        .once()
        .in_sequence(&mut seq)
        .withf(|req, _| req.start.as_deref() == Some("abc"))
        .return_once(|_, _| {
            let page = ProviderPortCollection::new().set_ports([port("port-3")]);
            Ok(Response::from(page))
        });

    let client = DirectLinkProvider::from_stub(mock).with_version("2022-01-01");
    let mut pages = client.list_provider_ports().by_page();
    let mut got = Vec::new();
    while let Some(page) = pages.next().await {
        let page = page?;
        got.extend(page.ports.into_iter().map(|p| p.id));
    }
    assert_eq!(got, vec!["port-1", "port-2", "port-3"]);
    Ok(())
}

#[tokio::test]
async fn list_ports_error_stops_iteration() -> TestResult {
    let mut mock = MockProvider::new();
    mock.expect_list_provider_ports()
        .once()
        .return_once(|_, _| Err(gax::error::Error::io("connection reset")));

    let client = DirectLinkProvider::from_stub(mock);
    let mut items = client.list_provider_ports().by_item();
    let err = items.next().await.and_then(|r| r.err());
    assert!(err.is_some_and(|e| e.is_io()));
    assert!(items.next().await.is_none());
    Ok(())
}
