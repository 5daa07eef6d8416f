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

/// Implements a [LogpushJobs](super::stub::LogpushJobs) decorator for logging and tracing.
#[derive(Clone, Debug)]
pub struct LogpushJobs<T>
where
    T: super::stub::LogpushJobs + std::fmt::Debug + Send + Sync,
{
    inner: T,
}

impl<T> LogpushJobs<T>
where
    T: super::stub::LogpushJobs + std::fmt::Debug + Send + Sync,
{
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T> super::stub::LogpushJobs for LogpushJobs<T>
where
    T: super::stub::LogpushJobs + std::fmt::Debug + Send + Sync,
{
    #[tracing::instrument(level = "info", ret)]
    async fn get_logpush_jobs_v2(
        &self,
        req: crate::model::GetLogpushJobsV2Request,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListLogpushJobsResp>> {
        self.inner.get_logpush_jobs_v2(req, options).await
    }

    #[tracing::instrument(level = "info", ret)]
    async fn create_logpush_job_v2(
        &self,
        req: crate::model::CreateLogpushJobV2Params,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogpushJobsResp>> {
        self.inner.create_logpush_job_v2(req, options).await
    }

    #[tracing::instrument(level = "info", ret)]
    async fn get_logpush_job_v2(
        &self,
        req: crate::model::GetLogpushJobV2Request,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogpushJobsResp>> {
        self.inner.get_logpush_job_v2(req, options).await
    }

    #[tracing::instrument(level = "info", ret)]
    async fn update_logpush_job_v2(
        &self,
        req: crate::model::UpdateLogpushJobV2Params,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogpushJobsResp>> {
        self.inner.update_logpush_job_v2(req, options).await
    }

    #[tracing::instrument(level = "info", ret)]
    async fn delete_logpush_job_v2(
        &self,
        req: crate::model::DeleteLogpushJobV2Request,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::DeleteLogpushJobResp>> {
        self.inner.delete_logpush_job_v2(req, options).await
    }

    #[tracing::instrument(level = "info", ret)]
    async fn list_fields_for_dataset_v2(
        &self,
        req: crate::model::ListFieldsForDatasetV2Request,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListFieldsResp>> {
        self.inner.list_fields_for_dataset_v2(req, options).await
    }

    #[tracing::instrument(level = "info", ret)]
    async fn list_logpush_jobs_for_dataset_v2(
        &self,
        req: crate::model::ListLogpushJobsForDatasetV2Request,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListLogpushJobsResp>> {
        self.inner.list_logpush_jobs_for_dataset_v2(req, options).await
    }

    #[tracing::instrument(level = "info", ret)]
    async fn get_logpush_ownership_v2(
        &self,
        req: crate::model::GetLogpushOwnershipV2Request,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::OwnershipChallengeResp>> {
        self.inner.get_logpush_ownership_v2(req, options).await
    }

    #[tracing::instrument(level = "info", ret)]
    async fn validate_logpush_ownership_challenge_v2(
        &self,
        req: crate::model::ValidateLogpushOwnershipChallengeV2Request,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::OwnershipChallengeValidateResult>> {
        self.inner.validate_logpush_ownership_challenge_v2(req, options).await
    }
}
