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

use httptest::{Expectation, Server, matchers::*, responders::*};
use ibm_cloud_networking_logpush_jobs_v2::client::LogpushJobs;
use ibm_cloud_networking_logpush_jobs_v2::model::*;
use serde_json::json;

type TestResult = anyhow::Result<()>;

const CRN: &str = "crn:v1:bluemix:public:internet-svcs:global:a/abc123:def456::";
const CRN_PATH: &str = "crn:v1:bluemix:public:internet-svcs:global:a%2Fabc123:def456::";
const ZONE: &str = "zone-1";

async fn test_client(server: &Server) -> anyhow::Result<LogpushJobs> {
    let client = LogpushJobs::builder()
        .with_endpoint(format!("http://{}", server.addr()))
        .with_credentials(auth::credentials::no_auth::Builder::new().build())
        .build()
        .await?;
    Ok(client)
}

fn path(suffix: &str) -> String {
    format!("/v2/{CRN_PATH}/zones/{ZONE}/logpush{suffix}")
}

fn job_json(id: i64) -> serde_json::Value {
    json!({
        "id": id,
        "name": "My log push job",
        "enabled": true,
        "dataset": "http_requests",
        "frequency": "high",
        "logpull_options": "timestamps=rfc3339",
        "destination_conf": "cos://cos-bucket001?region=us-south&instance-id=231f5467",
    })
}

fn envelope(result: serde_json::Value) -> serde_json::Value {
    json!({"success": true, "errors": [], "messages": [], "result": result})
}

#[tokio::test]
async fn list_jobs() -> TestResult {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", path("/jobs")),
            request::headers(contains((
                "x-ibmcloud-sdk-analytics",
                "service_name=logpush_jobs_api;service_version=V2;operation_id=GetLogpushJobsV2"
            ))),
        ])
        .respond_with(json_encoded(envelope(json!([job_json(1), job_json(2)])))),
    );

    let client = test_client(&server).await?;
    let response = client.get_logpush_jobs_v2(CRN, ZONE).send().await?;
    let body = response.into_body().expect("a body in a 200 response");
    assert!(body.success);
    let ids = body.result.iter().map(|j| j.id).collect::<Vec<_>>();
    assert_eq!(ids, vec![1, 2]);
    Ok(())
}

#[tokio::test]
async fn create_job() -> TestResult {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("POST", path("/jobs")),
            request::body(json_decoded(eq(json!({
                "cos": {"bucket_name": "my-bucket", "region": "us-south"},
                "ownership_challenge": "challenge-token",
                "name": "my-job",
                "dataset": "http_requests",
                "frequency": "high",
            })))),
        ])
        .respond_with(json_encoded(envelope(job_json(42)))),
    );

    let client = test_client(&server).await?;
    let job = CreateLogpushJobCosV2Request::new()
        .set_cos([("bucket_name", "my-bucket"), ("region", "us-south")])
        .set_ownership_challenge("challenge-token")
        .set_name("my-job")
        .set_dataset(dataset::HTTP_REQUESTS)
        .set_frequency(frequency::HIGH);
    let response = client
        .create_logpush_job_v2(CRN, ZONE)
        .set_job(job)
        .send()
        .await?;
    let job = response.into_body().and_then(|b| b.result);
    assert_eq!(job.map(|j| j.id), Some(42));
    Ok(())
}

#[tokio::test]
async fn create_job_requires_payload() -> TestResult {
    // Any request fails the test, the server has no expectations.
    let server = Server::run();
    let client = test_client(&server).await?;

    let err = client
        .create_logpush_job_v2(CRN, ZONE)
        .send()
        .await
        .unwrap_err();
    assert!(err.is_validation(), "{err:?}");
    assert!(err.to_string().contains("job"), "{err}");

    let job = CreateLogpushJobGenericV2Request::new().set_destination_conf("s3://bucket");
    let err = client
        .create_logpush_job_v2("", ZONE)
        .set_job(job.clone())
        .send()
        .await
        .unwrap_err();
    assert!(err.is_validation(), "{err:?}");
    assert!(err.to_string().contains("crn"), "{err}");

    let err = client
        .create_logpush_job_v2(CRN, "")
        .set_job(job)
        .send()
        .await
        .unwrap_err();
    assert!(err.is_validation(), "{err:?}");
    assert!(err.to_string().contains("zone_id"), "{err}");
    Ok(())
}

#[tokio::test]
async fn update_job() -> TestResult {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("PUT", path("/jobs/42")),
            request::body(json_decoded(eq(json!({
                "destination_conf": "https://logs.example.com/upload",
                "enabled": false,
            })))),
        ])
        .respond_with(json_encoded(envelope(job_json(42)))),
    );

    let client = test_client(&server).await?;
    let job = UpdateLogpushJobGenericV2Request::new()
        .set_destination_conf("https://logs.example.com/upload")
        .set_enabled(false);
    let response = client
        .update_logpush_job_v2(CRN, ZONE, "42")
        .set_job(job)
        .send()
        .await?;
    assert!(response.body().is_some_and(|b| b.success));
    Ok(())
}

#[tokio::test]
async fn get_and_delete_job() -> TestResult {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", path("/jobs/42")))
            .respond_with(json_encoded(envelope(job_json(42)))),
    );
    server.expect(
        Expectation::matching(request::method_path("DELETE", path("/jobs/42")))
            .respond_with(json_encoded(envelope(json!({})))),
    );

    let client = test_client(&server).await?;
    let response = client.get_logpush_job_v2(CRN, ZONE, "42").send().await?;
    let job = response.into_body().and_then(|b| b.result);
    assert_eq!(job.and_then(|j| j.name), Some("My log push job".to_string()));

    let response = client.delete_logpush_job_v2(CRN, ZONE, "42").send().await?;
    let body = response.into_body().expect("a body in a 200 response");
    assert!(body.success);
    assert!(body.result.is_empty(), "{body:?}");
    Ok(())
}

#[tokio::test]
async fn datasets() -> TestResult {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path(
            "GET",
            path("/datasets/http_requests/fields"),
        ))
        .respond_with(json_encoded(envelope(json!({
            "ClientIP": "IP address of the client",
            "RayID": "ID of the request",
        })))),
    );
    server.expect(
        Expectation::matching(request::method_path(
            "GET",
            path("/datasets/http_requests/jobs"),
        ))
        .respond_with(json_encoded(envelope(json!([job_json(7)])))),
    );

    let client = test_client(&server).await?;
    let fields = client
        .list_fields_for_dataset_v2(CRN, ZONE, dataset::HTTP_REQUESTS)
        .send()
        .await?
        .into_body()
        .map(|b| b.result)
        .unwrap_or_default();
    assert!(fields.contains_key("ClientIP"), "{fields:?}");

    let jobs = client
        .list_logpush_jobs_for_dataset_v2(CRN, ZONE, dataset::HTTP_REQUESTS)
        .send()
        .await?
        .into_body()
        .map(|b| b.result)
        .unwrap_or_default();
    assert_eq!(jobs.len(), 1);
    Ok(())
}

#[tokio::test]
async fn ownership_challenge() -> TestResult {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("POST", path("/ownership")),
            request::body(json_decoded(eq(json!({"cos": {"bucket_name": "my-bucket"}})))),
        ])
        .respond_with(json_encoded(envelope(json!({
            "filename": "logs/challenge-filename.txt",
            "message": "",
            "valid": true,
        })))),
    );
    server.expect(
        Expectation::matching(all_of![
            request::method_path("POST", path("/ownership/validate")),
            request::body(json_decoded(eq(json!({
                "cos": {"bucket_name": "my-bucket"},
                "ownership_challenge": "token",
            })))),
        ])
        .respond_with(json_encoded(json!({"valid": true}))),
    );

    let client = test_client(&server).await?;
    let response = client
        .get_logpush_ownership_v2(CRN, ZONE)
        .set_cos([("bucket_name", "my-bucket")])
        .send()
        .await?;
    let result = response.into_body().and_then(|b| b.result);
    assert_eq!(
        result.and_then(|r| r.filename),
        Some("logs/challenge-filename.txt".to_string())
    );

    let response = client
        .validate_logpush_ownership_challenge_v2(CRN, ZONE)
        .set_cos([("bucket_name", "my-bucket")])
        .set_ownership_challenge("token")
        .send()
        .await?;
    assert_eq!(response.body().and_then(|b| b.valid), Some(true));
    Ok(())
}

#[tokio::test]
async fn service_error() -> TestResult {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", path("/jobs/404"))).respond_with(
            status_code(400)
                .append_header("content-type", "application/json")
                .body(
                    json!({
                        "success": false,
                        "errors": [{"code": 1003, "message": "Invalid or missing zone id."}],
                        "messages": [],
                        "result": null,
                    })
                    .to_string(),
                ),
        ),
    );

    let client = test_client(&server).await?;
    let err = client
        .get_logpush_job_v2(CRN, ZONE, "404")
        .send()
        .await
        .unwrap_err();
    assert!(err.is_api(), "{err:?}");
    let api = err.api_error().expect("an ApiError for a 400 response");
    assert_eq!(api.status_code(), 400);
    assert_eq!(api.code(), Some("1003"));
    assert_eq!(api.message(), "Invalid or missing zone id.");
    Ok(())
}

#[tokio::test]
async fn empty_response() -> TestResult {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("DELETE", path("/jobs/42")))
            .respond_with(status_code(200)),
    );

    let client = test_client(&server).await?;
    let response = client.delete_logpush_job_v2(CRN, ZONE, "42").send().await?;
    assert_eq!(response.status_code(), 200);
    assert!(response.body().is_none());
    Ok(())
}
