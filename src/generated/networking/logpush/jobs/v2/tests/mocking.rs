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
use ibm_cloud_networking_logpush_jobs_v2::client::LogpushJobs;
use ibm_cloud_networking_logpush_jobs_v2::model::*;
use ibm_cloud_networking_logpush_jobs_v2::stub;

type TestResult = anyhow::Result<()>;

mockall::mock! {
    #[derive(Debug)]
    Jobs {}
    impl stub::LogpushJobs for Jobs {
        async fn create_logpush_job_v2(
            &self,
            req: CreateLogpushJobV2Params,
            options: RequestOptions,
        ) -> gax::Result<Response<LogpushJobsResp>>;
    }
}

#[tokio::test]
async fn create_job_from_stub() -> TestResult {
    let mut mock = MockJobs::new();
    mock.expect_create_logpush_job_v2()
        .withf(|req, _| {
            let logdna = match &req.job {
                Some(CreateLogpushJobV2Request::Logdna(j)) => j.logdna.contains_key("hostname"),
                _ => false,
            };
            req.crn == "crn-1" && req.zone_id == "zone-1" && logdna
        })
        .return_once(|_, _| {
            let body = LogpushJobsResp::new()
                .set_success(true)
                .set_result(LogpushJobPack::new().set_id(7).set_enabled(true));
            Ok(Response::from(body))
        });

    let client = LogpushJobs::from_stub(mock);
    let response = client
        .create_logpush_job_v2("crn-1", "zone-1")
        .set_job(CreateLogpushJobLogdnaV2Request::new().set_logdna([("hostname", "cis")]))
        .send()
        .await?;
    let job = response.into_body().and_then(|b| b.result);
    assert_eq!(job.map(|j| j.id), Some(7));
    Ok(())
}
