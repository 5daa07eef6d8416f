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

/// A dyn-compatible, crate-private version of [super::LogpushJobs].
#[async_trait::async_trait]
pub trait LogpushJobs: std::fmt::Debug + Send + Sync {
    async fn get_logpush_jobs_v2(
        &self,
        req: crate::model::GetLogpushJobsV2Request,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ListLogpushJobsResp>>;

    async fn create_logpush_job_v2(
        &self,
        req: crate::model::CreateLogpushJobV2Params,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogpushJobsResp>>;

    async fn get_logpush_job_v2(
        &self,
        req: crate::model::GetLogpushJobV2Request,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogpushJobsResp>>;

    async fn update_logpush_job_v2(
        &self,
        req: crate::model::UpdateLogpushJobV2Params,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogpushJobsResp>>;

    async fn delete_logpush_job_v2(
        &self,
        req: crate::model::DeleteLogpushJobV2Request,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DeleteLogpushJobResp>>;

    async fn list_fields_for_dataset_v2(
        &self,
        req: crate::model::ListFieldsForDatasetV2Request,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ListFieldsResp>>;

    async fn list_logpush_jobs_for_dataset_v2(
        &self,
        req: crate::model::ListLogpushJobsForDatasetV2Request,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ListLogpushJobsResp>>;

    async fn get_logpush_ownership_v2(
        &self,
        req: crate::model::GetLogpushOwnershipV2Request,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::OwnershipChallengeResp>>;

    async fn validate_logpush_ownership_challenge_v2(
        &self,
        req: crate::model::ValidateLogpushOwnershipChallengeV2Request,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::OwnershipChallengeValidateResult>>;
}

/// All implementations of [super::LogpushJobs] also implement [LogpushJobs].
#[async_trait::async_trait]
impl<T: super::LogpushJobs> LogpushJobs for T {
    /// Forwards the call to the implementation provided by `T`.
    async fn get_logpush_jobs_v2(
        &self,
        req: crate::model::GetLogpushJobsV2Request,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ListLogpushJobsResp>> {
        T::get_logpush_jobs_v2(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn create_logpush_job_v2(
        &self,
        req: crate::model::CreateLogpushJobV2Params,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogpushJobsResp>> {
        T::create_logpush_job_v2(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_logpush_job_v2(
        &self,
        req: crate::model::GetLogpushJobV2Request,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogpushJobsResp>> {
        T::get_logpush_job_v2(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn update_logpush_job_v2(
        &self,
        req: crate::model::UpdateLogpushJobV2Params,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogpushJobsResp>> {
        T::update_logpush_job_v2(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete_logpush_job_v2(
        &self,
        req: crate::model::DeleteLogpushJobV2Request,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DeleteLogpushJobResp>> {
        T::delete_logpush_job_v2(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_fields_for_dataset_v2(
        &self,
        req: crate::model::ListFieldsForDatasetV2Request,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ListFieldsResp>> {
        T::list_fields_for_dataset_v2(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_logpush_jobs_for_dataset_v2(
        &self,
        req: crate::model::ListLogpushJobsForDatasetV2Request,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ListLogpushJobsResp>> {
        T::list_logpush_jobs_for_dataset_v2(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_logpush_ownership_v2(
        &self,
        req: crate::model::GetLogpushOwnershipV2Request,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::OwnershipChallengeResp>> {
        T::get_logpush_ownership_v2(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn validate_logpush_ownership_challenge_v2(
        &self,
        req: crate::model::ValidateLogpushOwnershipChallengeV2Request,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::OwnershipChallengeValidateResult>> {
        T::validate_logpush_ownership_challenge_v2(self, req, options).await
    }
}
