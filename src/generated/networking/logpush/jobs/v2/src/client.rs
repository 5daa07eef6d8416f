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

#![allow(rustdoc::redundant_explicit_links)]
#![allow(rustdoc::broken_intra_doc_links)]

/// Implements a client for the Logpush Jobs API.
///
/// # Example
/// ```no_run
/// # async fn sample() -> anyhow::Result<()> {
/// # use ibm_cloud_networking_logpush_jobs_v2::client::LogpushJobs;
/// let client = LogpushJobs::builder().build().await?;
/// let response = client
///     .list_fields_for_dataset_v2("crn:v1:bluemix:public:internet-svcs:global:a/abc:123::", "zone-1", "http_requests")
///     .send()
///     .await?;
/// println!("{:?}", response.body());
/// # Ok(()) }
/// ```
///
/// # Service Description
///
/// Logpush jobs push the logs of a CIS zone to a destination, such as a
/// Cloud Object Storage bucket or an IBM Cloud Logs instance.
///
/// # Configuration
///
/// To configure `LogpushJobs` use the `with_*` methods in the type returned
/// by [builder()][LogpushJobs::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://api.cis.cloud.ibm.com`). Applications can use this to connect
///   to private endpoints, or to test against a fake server.
/// * [with_credentials()]: by default this client reads the
///   `LOGPUSH_JOBS_API_*` environment variables to create credentials.
///   Applications can use this method to provide their own credentials.
///
/// [with_endpoint()]: super::builder::logpush_jobs::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::logpush_jobs::ClientBuilder::with_credentials
///
/// # Pooling and Cloning
///
/// `LogpushJobs` holds a connection pool internally, it is advised to
/// create one and reuse it. You do not need to wrap `LogpushJobs` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[derive(Clone, Debug)]
pub struct LogpushJobs {
    inner: std::sync::Arc<dyn super::stub::dynamic::LogpushJobs>,
}

impl LogpushJobs {
    /// Returns a builder for [LogpushJobs].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use ibm_cloud_networking_logpush_jobs_v2::client::LogpushJobs;
    /// let client = LogpushJobs::builder()
    ///     .with_credentials(auth::credentials::no_auth::Builder::new().build())
    ///     .build()
    ///     .await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::logpush_jobs::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::logpush_jobs::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::LogpushJobs + 'static,
    {
        Self {
            inner: std::sync::Arc::new(stub),
        }
    }

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner = Self::build_inner(config).await?;
        Ok(Self { inner })
    }

    async fn build_inner(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<std::sync::Arc<dyn super::stub::dynamic::LogpushJobs>> {
        if conf.tracing {
            return Ok(std::sync::Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(std::sync::Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::LogpushJobs> {
        super::transport::LogpushJobs::new(conf).await
    }

    async fn build_with_tracing(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::LogpushJobs> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::LogpushJobs::new)
    }

    /// Lists the Logpush jobs in a zone.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_logpush_jobs_v2::client::LogpushJobs;
    /// # async fn sample(client: &LogpushJobs) -> gax::Result<()> {
    /// let response = client.get_logpush_jobs_v2("crn:v1:bluemix:public:internet-svcs:global:a/abc:123::", "zone-1").send().await?;
    /// for job in response.into_body().map(|r| r.result).unwrap_or_default() {
    ///     println!("{} {:?}", job.id, job.name);
    /// }
    /// # Ok(()) }
    /// ```
    pub fn get_logpush_jobs_v2(
        &self,
        crn: impl Into<std::string::String>,
        zone_id: impl Into<std::string::String>,
    ) -> super::builder::logpush_jobs::GetLogpushJobsV2 {
        super::builder::logpush_jobs::GetLogpushJobsV2::new(self.inner.clone())
            .set_crn(crn.into())
            .set_zone_id(zone_id.into())
    }

    /// Creates a Logpush job.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_logpush_jobs_v2::client::LogpushJobs;
    /// # use ibm_cloud_networking_logpush_jobs_v2::model::*;
    /// # async fn sample(client: &LogpushJobs) -> gax::Result<()> {
    /// let job = CreateLogpushJobCosV2Request::new()
    ///     .set_cos([("bucket_name", "my-bucket"), ("region", "us-south")])
    ///     .set_ownership_challenge("challenge-token")
    ///     .set_name("my-job")
    ///     .set_dataset(dataset::HTTP_REQUESTS)
    ///     .set_frequency(frequency::HIGH);
    /// let response = client
    ///     .create_logpush_job_v2("crn:v1:bluemix:public:internet-svcs:global:a/abc:123::", "zone-1")
    ///     .set_job(job)
    ///     .send()
    ///     .await?;
    /// # Ok(()) }
    /// ```
    pub fn create_logpush_job_v2(
        &self,
        crn: impl Into<std::string::String>,
        zone_id: impl Into<std::string::String>,
    ) -> super::builder::logpush_jobs::CreateLogpushJobV2 {
        super::builder::logpush_jobs::CreateLogpushJobV2::new(self.inner.clone())
            .set_crn(crn.into())
            .set_zone_id(zone_id.into())
    }

    /// Gets a Logpush job.
    pub fn get_logpush_job_v2(
        &self,
        crn: impl Into<std::string::String>,
        zone_id: impl Into<std::string::String>,
        job_id: impl Into<std::string::String>,
    ) -> super::builder::logpush_jobs::GetLogpushJobV2 {
        super::builder::logpush_jobs::GetLogpushJobV2::new(self.inner.clone())
            .set_crn(crn.into())
            .set_zone_id(zone_id.into())
            .set_job_id(job_id.into())
    }

    /// Updates a Logpush job.
    pub fn update_logpush_job_v2(
        &self,
        crn: impl Into<std::string::String>,
        zone_id: impl Into<std::string::String>,
        job_id: impl Into<std::string::String>,
    ) -> super::builder::logpush_jobs::UpdateLogpushJobV2 {
        super::builder::logpush_jobs::UpdateLogpushJobV2::new(self.inner.clone())
            .set_crn(crn.into())
            .set_zone_id(zone_id.into())
            .set_job_id(job_id.into())
    }

    /// Deletes a Logpush job.
    pub fn delete_logpush_job_v2(
        &self,
        crn: impl Into<std::string::String>,
        zone_id: impl Into<std::string::String>,
        job_id: impl Into<std::string::String>,
    ) -> super::builder::logpush_jobs::DeleteLogpushJobV2 {
        super::builder::logpush_jobs::DeleteLogpushJobV2::new(self.inner.clone())
            .set_crn(crn.into())
            .set_zone_id(zone_id.into())
            .set_job_id(job_id.into())
    }

    /// Lists the fields available in a dataset.
    pub fn list_fields_for_dataset_v2(
        &self,
        crn: impl Into<std::string::String>,
        zone_id: impl Into<std::string::String>,
        dataset: impl Into<std::string::String>,
    ) -> super::builder::logpush_jobs::ListFieldsForDatasetV2 {
        super::builder::logpush_jobs::ListFieldsForDatasetV2::new(self.inner.clone())
            .set_crn(crn.into())
            .set_zone_id(zone_id.into())
            .set_dataset(dataset.into())
    }

    /// Lists the Logpush jobs pushing a dataset.
    pub fn list_logpush_jobs_for_dataset_v2(
        &self,
        crn: impl Into<std::string::String>,
        zone_id: impl Into<std::string::String>,
        dataset: impl Into<std::string::String>,
    ) -> super::builder::logpush_jobs::ListLogpushJobsForDatasetV2 {
        super::builder::logpush_jobs::ListLogpushJobsForDatasetV2::new(self.inner.clone())
            .set_crn(crn.into())
            .set_zone_id(zone_id.into())
            .set_dataset(dataset.into())
    }

    /// Writes an ownership challenge token to a Cloud Object Storage bucket.
    ///
    /// Creating a job that pushes to the bucket requires the token.
    pub fn get_logpush_ownership_v2(
        &self,
        crn: impl Into<std::string::String>,
        zone_id: impl Into<std::string::String>,
    ) -> super::builder::logpush_jobs::GetLogpushOwnershipV2 {
        super::builder::logpush_jobs::GetLogpushOwnershipV2::new(self.inner.clone())
            .set_crn(crn.into())
            .set_zone_id(zone_id.into())
    }

    /// Validates an ownership challenge token for a Cloud Object Storage bucket.
    pub fn validate_logpush_ownership_challenge_v2(
        &self,
        crn: impl Into<std::string::String>,
        zone_id: impl Into<std::string::String>,
    ) -> super::builder::logpush_jobs::ValidateLogpushOwnershipChallengeV2 {
        super::builder::logpush_jobs::ValidateLogpushOwnershipChallengeV2::new(self.inner.clone())
            .set_crn(crn.into())
            .set_zone_id(zone_id.into())
    }
}
