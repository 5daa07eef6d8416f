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

use crate::Result;
use gaxi::api_header::X_IBMCLOUD_SDK_ANALYTICS;
use gaxi::query_parameter::QueryParameter;

/// Implements [LogpushJobs](super::stub::LogpushJobs) using a [gaxi::http::ReqwestClient].
#[derive(Clone)]
pub struct LogpushJobs {
    inner: gaxi::http::ReqwestClient,
}

impl std::fmt::Debug for LogpushJobs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("LogpushJobs")
            .field("inner", &self.inner)
            .finish()
    }
}

impl LogpushJobs {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner =
            gaxi::http::ReqwestClient::new(config, crate::DEFAULT_HOST, crate::SERVICE_NAME).await?;
        Ok(Self { inner })
    }
}

impl super::stub::LogpushJobs for LogpushJobs {
    async fn get_logpush_jobs_v2(
        &self,
        req: crate::model::GetLogpushJobsV2Request,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListLogpushJobsResp>> {
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/v2/{}/zones/{}/logpush/jobs",
            gaxi::path_parameter::required("crn", &req.crn)?,
            gaxi::path_parameter::required("zone_id", &req.zone_id)?,
        );
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = builder.header(
            X_IBMCLOUD_SDK_ANALYTICS,
            crate::info::ANALYTICS.header_value("GetLogpushJobsV2"),
        );
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn create_logpush_job_v2(
        &self,
        req: crate::model::CreateLogpushJobV2Params,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogpushJobsResp>> {
        let options = gax::options::internal::set_default_idempotency(options, false);
        let path = format!(
            "/v2/{}/zones/{}/logpush/jobs",
            gaxi::path_parameter::required("crn", &req.crn)?,
            gaxi::path_parameter::required("zone_id", &req.zone_id)?,
        );
        let body = gax::path_parameter::required("job", req.job)?;
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder = builder.header(
            X_IBMCLOUD_SDK_ANALYTICS,
            crate::info::ANALYTICS.header_value("CreateLogpushJobV2"),
        );
        self.inner.execute(builder, Some(body), options).await
    }

    async fn get_logpush_job_v2(
        &self,
        req: crate::model::GetLogpushJobV2Request,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogpushJobsResp>> {
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/v2/{}/zones/{}/logpush/jobs/{}",
            gaxi::path_parameter::required("crn", &req.crn)?,
            gaxi::path_parameter::required("zone_id", &req.zone_id)?,
            gaxi::path_parameter::required("job_id", &req.job_id)?,
        );
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = builder.header(
            X_IBMCLOUD_SDK_ANALYTICS,
            crate::info::ANALYTICS.header_value("GetLogpushJobV2"),
        );
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn update_logpush_job_v2(
        &self,
        req: crate::model::UpdateLogpushJobV2Params,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogpushJobsResp>> {
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/v2/{}/zones/{}/logpush/jobs/{}",
            gaxi::path_parameter::required("crn", &req.crn)?,
            gaxi::path_parameter::required("zone_id", &req.zone_id)?,
            gaxi::path_parameter::required("job_id", &req.job_id)?,
        );
        let body = gax::path_parameter::required("job", req.job)?;
        let builder = self.inner.builder(reqwest::Method::PUT, path);
        let builder = builder.header(
            X_IBMCLOUD_SDK_ANALYTICS,
            crate::info::ANALYTICS.header_value("UpdateLogpushJobV2"),
        );
        self.inner.execute(builder, Some(body), options).await
    }

    async fn delete_logpush_job_v2(
        &self,
        req: crate::model::DeleteLogpushJobV2Request,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::DeleteLogpushJobResp>> {
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/v2/{}/zones/{}/logpush/jobs/{}",
            gaxi::path_parameter::required("crn", &req.crn)?,
            gaxi::path_parameter::required("zone_id", &req.zone_id)?,
            gaxi::path_parameter::required("job_id", &req.job_id)?,
        );
        let builder = self.inner.builder(reqwest::Method::DELETE, path);
        let builder = builder.header(
            X_IBMCLOUD_SDK_ANALYTICS,
            crate::info::ANALYTICS.header_value("DeleteLogpushJobV2"),
        );
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn list_fields_for_dataset_v2(
        &self,
        req: crate::model::ListFieldsForDatasetV2Request,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListFieldsResp>> {
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/v2/{}/zones/{}/logpush/datasets/{}/fields",
            gaxi::path_parameter::required("crn", &req.crn)?,
            gaxi::path_parameter::required("zone_id", &req.zone_id)?,
            gaxi::path_parameter::required("dataset", &req.dataset)?,
        );
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = builder.header(
            X_IBMCLOUD_SDK_ANALYTICS,
            crate::info::ANALYTICS.header_value("ListFieldsForDatasetV2"),
        );
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn list_logpush_jobs_for_dataset_v2(
        &self,
        req: crate::model::ListLogpushJobsForDatasetV2Request,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListLogpushJobsResp>> {
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/v2/{}/zones/{}/logpush/datasets/{}/jobs",
            gaxi::path_parameter::required("crn", &req.crn)?,
            gaxi::path_parameter::required("zone_id", &req.zone_id)?,
            gaxi::path_parameter::required("dataset", &req.dataset)?,
        );
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = builder.header(
            X_IBMCLOUD_SDK_ANALYTICS,
            crate::info::ANALYTICS.header_value("ListLogpushJobsForDatasetV2"),
        );
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn get_logpush_ownership_v2(
        &self,
        req: crate::model::GetLogpushOwnershipV2Request,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::OwnershipChallengeResp>> {
        let options = gax::options::internal::set_default_idempotency(options, false);
        let path = format!(
            "/v2/{}/zones/{}/logpush/ownership",
            gaxi::path_parameter::required("crn", &req.crn)?,
            gaxi::path_parameter::required("zone_id", &req.zone_id)?,
        );
        let body = GetLogpushOwnershipV2Body {
            cos: req.cos,
        };
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder = builder.header(
            X_IBMCLOUD_SDK_ANALYTICS,
            crate::info::ANALYTICS.header_value("GetLogpushOwnershipV2"),
        );
        self.inner.execute(builder, Some(body), options).await
    }

    async fn validate_logpush_ownership_challenge_v2(
        &self,
        req: crate::model::ValidateLogpushOwnershipChallengeV2Request,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::OwnershipChallengeValidateResult>> {
        let options = gax::options::internal::set_default_idempotency(options, false);
        let path = format!(
            "/v2/{}/zones/{}/logpush/ownership/validate",
            gaxi::path_parameter::required("crn", &req.crn)?,
            gaxi::path_parameter::required("zone_id", &req.zone_id)?,
        );
        let body = ValidateLogpushOwnershipChallengeV2Body {
            cos: req.cos,
            ownership_challenge: req.ownership_challenge,
        };
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder = builder.header(
            X_IBMCLOUD_SDK_ANALYTICS,
            crate::info::ANALYTICS.header_value("ValidateLogpushOwnershipChallengeV2"),
        );
        self.inner.execute(builder, Some(body), options).await
    }
}

#[serde_with::skip_serializing_none]
#[derive(serde::Serialize)]
struct GetLogpushOwnershipV2Body {
    cos: std::option::Option<serde_json::Map<std::string::String, serde_json::Value>>,
}

#[serde_with::skip_serializing_none]
#[derive(serde::Serialize)]
struct ValidateLogpushOwnershipChallengeV2Body {
    cos: std::option::Option<serde_json::Map<std::string::String, serde_json::Value>>,
    ownership_challenge: std::option::Option<std::string::String>,
}
