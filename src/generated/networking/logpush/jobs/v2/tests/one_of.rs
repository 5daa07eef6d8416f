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

use ibm_cloud_networking_logpush_jobs_v2::model::*;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use test_case::test_case;

type TestResult = anyhow::Result<()>;

fn ibmcl() -> LogpushJobIbmclReq {
    LogpushJobIbmclReq::new()
        .set_instance_id("90d208cb-fa8c-4a8e-9f2b-38c4c8d1c0f1")
        .set_region("us-south")
        .set_api_key("my-api-key")
}

fn create_variants() -> Vec<CreateLogpushJobV2Request> {
    vec![
        CreateLogpushJobCosV2Request::new()
            .set_cos([("bucket_name", "my-bucket"), ("region", "us-south")])
            .set_ownership_challenge("challenge")
            .set_name("cos-job")
            .set_enabled(true)
            .set_dataset(dataset::HTTP_REQUESTS)
            .set_frequency(frequency::HIGH)
            .into(),
        CreateLogpushJobGenericV2Request::new()
            .set_destination_conf("cos://bucket?region=us-south&instance-id=abc")
            .set_logpull_options("timestamps=rfc3339")
            .into(),
        CreateLogpushJobIbmclV2Request::new()
            .set_ibmcl(ibmcl())
            .set_dataset(dataset::FIREWALL_EVENTS)
            .into(),
        CreateLogpushJobLogdnaV2Request::new()
            .set_logdna([("hostname", "cis"), ("ingress_key", "key")])
            .set_frequency(frequency::LOW)
            .into(),
    ]
}

fn update_variants() -> Vec<UpdateLogpushJobV2Request> {
    vec![
        UpdateLogpushJobCosV2Request::new()
            .set_cos([("bucket_name", "new-bucket")])
            .set_ownership_challenge("challenge")
            .set_enabled(false)
            .into(),
        UpdateLogpushJobGenericV2Request::new()
            .set_destination_conf("https://logs.example.com/upload")
            .into(),
        UpdateLogpushJobIbmclV2Request::new()
            .set_ibmcl(ibmcl())
            .set_frequency(frequency::HIGH)
            .into(),
        UpdateLogpushJobLogdnaV2Request::new()
            .set_logdna([("hostname", "cis")])
            .into(),
    ]
}

#[test]
fn create_round_trip() -> TestResult {
    for input in create_variants() {
        let encoded = input.encode()?;
        let got = CreateLogpushJobV2Request::decode(encoded.clone())?;
        assert_eq!(got, input, "{encoded}");
        let got = serde_json::from_value::<CreateLogpushJobV2Request>(encoded)?;
        assert_eq!(got, input);
    }
    Ok(())
}

#[test]
fn update_round_trip() -> TestResult {
    for input in update_variants() {
        let encoded = input.encode()?;
        let got = UpdateLogpushJobV2Request::decode(encoded.clone())?;
        assert_eq!(got, input, "{encoded}");
    }
    Ok(())
}

#[test]
fn encode_only_variant_fields() -> TestResult {
    let job = CreateLogpushJobV2Request::from(
        CreateLogpushJobIbmclV2Request::new()
            .set_ibmcl(ibmcl())
            .set_name("my-job")
            .set_enabled(true),
    );
    let got = job.encode()?;
    let want = json!({
        "ibmcl": {
            "instance_id": "90d208cb-fa8c-4a8e-9f2b-38c4c8d1c0f1",
            "region": "us-south",
            "api_key": "my-api-key",
        },
        "name": "my-job",
        "enabled": true,
    });
    assert_eq!(got, want);
    Ok(())
}

#[test]
fn encode_cos() -> TestResult {
    let job = CreateLogpushJobV2Request::from(
        CreateLogpushJobCosV2Request::new()
            .set_cos([("bucket_name", "my-bucket")])
            .set_ownership_challenge("challenge"),
    );
    let got = job.encode()?;
    let want = json!({
        "cos": {"bucket_name": "my-bucket"},
        "ownership_challenge": "challenge",
    });
    assert_eq!(got, want);
    Ok(())
}

#[test_case(json!({"cos": {"bucket_name": "b"}, "ownership_challenge": "c"}), 0)]
#[test_case(json!({"destination_conf": "s3://bucket", "name": "n", "enabled": true}), 1)]
#[test_case(json!({"ibmcl": {"instance_id": "i", "region": "r", "api_key": "k"}}), 2)]
#[test_case(json!({"logdna": {"hostname": "h"}, "frequency": "low"}), 3)]
#[test_case(json!({"destination_conf": "s3://bucket", "cos": null}), 1)]
#[test_case(json!({"destination_conf": "s3://bucket", "new_field": 42}), 1)]
fn decode_selects_variant(input: Value, want: usize) -> TestResult {
    let got = CreateLogpushJobV2Request::decode(input)?;
    let index = match got {
        CreateLogpushJobV2Request::Cos(_) => 0,
        CreateLogpushJobV2Request::Generic(_) => 1,
        CreateLogpushJobV2Request::IbmCloudLogs(_) => 2,
        CreateLogpushJobV2Request::Logdna(_) => 3,
        _ => unreachable!("unexpected variant {got:?}"),
    };
    assert_eq!(index, want);
    Ok(())
}

#[test_case(json!({}))]
#[test_case(json!({"name": "job", "dataset": "http_requests"}))]
#[test_case(json!({"cos": null}))]
#[test_case(json!("cos://bucket"))]
fn decode_unrecognized(input: Value) {
    let err = CreateLogpushJobV2Request::decode(input).unwrap_err();
    assert!(err.is_unrecognized_variant(), "{err:?}");
    assert!(err.to_string().contains("destination_conf"), "{err}");
}

#[test_case(json!({"ibmcl": {"instance_id": "i", "api_key": "k"}}), "ibmcl")]
#[test_case(json!({"ibmcl": "not-an-object"}), "ibmcl")]
#[test_case(json!({"cos": "not-an-object", "ownership_challenge": "c"}), "cos")]
#[test_case(json!({"destination_conf": 42}), "destination_conf")]
#[test_case(json!({"destination_conf": "s3://bucket", "logdna": {}}), "logdna")]
#[test_case(json!({"destination_conf": "s3://bucket", "ownership_challenge": "c"}), "ownership_challenge")]
fn decode_malformed(input: Value, field: &str) {
    let err = CreateLogpushJobV2Request::decode(input).unwrap_err();
    assert!(err.is_malformed_field(), "{err:?}");
    assert_eq!(err.field(), Some(field), "{err:?}");
}

#[test_case(json!({"destination_conf": "s3://bucket", "name": "renamed"}), "name")]
#[test_case(json!({"logdna": {"hostname": "h"}, "dataset": "firewall_events"}), "dataset")]
fn update_rejects_immutable_fields(input: Value, field: &str) {
    let err = UpdateLogpushJobV2Request::decode(input.clone()).unwrap_err();
    assert!(err.is_malformed_field(), "{err:?}");
    assert_eq!(err.field(), Some(field), "{err:?}");

    let got = serde_json::from_value::<UpdateLogpushJobV2Request>(input);
    assert!(got.is_err(), "{got:?}");
}

#[test]
fn update_accepts_mutable_fields() -> TestResult {
    let input = json!({"destination_conf": "s3://bucket", "enabled": false, "frequency": "low"});
    let got = UpdateLogpushJobV2Request::decode(input.clone())?;
    assert_eq!(got.encode()?, input);
    Ok(())
}

#[test]
fn decode_missing_region() {
    let input = json!({"ibmcl": {"instance_id": "i", "api_key": "k"}});
    let err = UpdateLogpushJobV2Request::decode(input).unwrap_err();
    assert_eq!(err.field(), Some("ibmcl"), "{err:?}");
    assert!(err.to_string().contains("region"), "{err}");
}

#[test]
fn deserialize_error() {
    let got = serde_json::from_value::<CreateLogpushJobV2Request>(json!({"name": "job"}));
    let err = got.unwrap_err();
    assert!(err.to_string().contains("cos"), "{err}");
}

#[test]
fn job_pack_unknown_fields() -> TestResult {
    let input = json!({
        "id": 5850,
        "name": "My log push job",
        "enabled": false,
        "dataset": "http_requests",
        "frequency": "high",
        "logpull_options": "timestamps=rfc3339&timestamps=rfc3339",
        "destination_conf": "cos://cos-bucket001?region=us-south&instance-id=231f5467-3072-4cb9-9e39-a906fa3032ea",
        "last_complete": "2022-01-15T16:33:31.834209Z",
        "last_error": "2022-01-15T16:33:31.834209Z",
        "error_message": "test",
        "ownership_challenge_filename": "ownership-challenge-1234.txt",
    });
    let job = serde_json::from_value::<LogpushJobPack>(input.clone())?;
    assert_eq!(job.id, 5850);
    assert_eq!(job.dataset.as_deref(), Some(dataset::HTTP_REQUESTS));
    assert_eq!(serde_json::to_value(&job)?, input);
    Ok(())
}
