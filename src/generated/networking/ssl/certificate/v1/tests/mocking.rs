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
use ibm_cloud_networking_ssl_certificate_v1::client::SslCertificate;
use ibm_cloud_networking_ssl_certificate_v1::model::*;
use ibm_cloud_networking_ssl_certificate_v1::stub;

type TestResult = anyhow::Result<()>;

mockall::mock! {
    #[derive(Debug)]
    Certificates {}
    impl stub::SslCertificate for Certificates {
        async fn get_tls13_setting(
            &self,
            req: GetTls13SettingRequest,
            options: RequestOptions,
        ) -> gax::Result<Response<SettingResp>>;
        async fn change_tls13_setting(
            &self,
            req: ChangeTls13SettingRequest,
            options: RequestOptions,
        ) -> gax::Result<Response<SettingResp>>;
    }
}

fn setting(value: &str) -> SettingResp {
    SettingResp::new().set_success(true).set_result(
        ZoneSetting::new()
            .set_id("tls_1_3")
            .set_value(value)
            .set_editable(true),
    )
}

// Enables TLS 1.3 unless it is already on.
async fn enable_tls13(client: &SslCertificate, crn: &str, zone: &str) -> gax::Result<String> {
    let current = client
        .get_tls13_setting(crn, zone)
        .send()
        .await?
        .into_body()
        .and_then(|b| b.result)
        .map(|s| s.value)
        .unwrap_or_default();
    if current != tls_setting::OFF {
        return Ok(current);
    }
    let changed = client
        .change_tls13_setting(crn, zone)
        .set_value(tls_setting::ON)
        .set_x_correlation_id("enable-tls13")
        .send()
        .await?
        .into_body()
        .and_then(|b| b.result)
        .map(|s| s.value)
        .unwrap_or_default();
    Ok(changed)
}

#[tokio::test]
async fn change_when_off() -> TestResult {
    let mut mock = MockCertificates::new();
    mock.expect_get_tls13_setting()
        .withf(|req, _| req.crn == "crn-1" && req.zone_identifier == "zone-1")
        .return_once(|_, _| Ok(Response::from(setting(tls_setting::OFF))));
    mock.expect_change_tls13_setting()
        .withf(|req, _| {
            req.value.as_deref() == Some(tls_setting::ON)
                && req.x_correlation_id.as_deref() == Some("enable-tls13")
        })
        .return_once(|_, _| Ok(Response::from(setting(tls_setting::ON))));

    let client = SslCertificate::from_stub(mock);
    let got = enable_tls13(&client, "crn-1", "zone-1").await?;
    assert_eq!(got, tls_setting::ON);
    Ok(())
}

#[tokio::test]
async fn unchanged_when_on() -> TestResult {
    let mut mock = MockCertificates::new();
    mock.expect_get_tls13_setting()
        .return_once(|_, _| Ok(Response::from(setting(tls_setting::ZRT))));
    mock.expect_change_tls13_setting().never();

    let client = SslCertificate::from_stub(mock);
    let got = enable_tls13(&client, "crn-1", "zone-1").await?;
    assert_eq!(got, tls_setting::ZRT);
    Ok(())
}

#[tokio::test]
async fn error_is_propagated() -> TestResult {
    let mut mock = MockCertificates::new();
    mock.expect_get_tls13_setting().return_once(|_, _| {
        Err(gax::error::Error::io("connection reset"))
    });
    mock.expect_change_tls13_setting().never();

    let client = SslCertificate::from_stub(mock);
    let err = enable_tls13(&client, "crn-1", "zone-1").await.unwrap_err();
    assert!(err.is_io(), "{err:?}");
    Ok(())
}
