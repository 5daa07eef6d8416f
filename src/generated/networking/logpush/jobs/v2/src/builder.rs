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

pub mod logpush_jobs {
    use crate::Result;

    /// A builder for [LogpushJobs][crate::client::LogpushJobs].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use ibm_cloud_networking_logpush_jobs_v2::*;
    /// # use builder::logpush_jobs::ClientBuilder;
    /// # use client::LogpushJobs;
    /// let builder : ClientBuilder = LogpushJobs::builder();
    /// let client = builder
    ///     .with_endpoint("https://api.cis.cloud.ibm.com")
    ///     .with_credentials(auth::credentials::no_auth::Builder::new().build())
    ///     .build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub type ClientBuilder =
        gax::client_builder::ClientBuilder<client::Factory, gaxi::options::Credentials>;

    pub(crate) mod client {
        use super::super::super::client::LogpushJobs;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = LogpushJobs;
            type Credentials = gaxi::options::Credentials;
            async fn build(
                self,
                config: gaxi::options::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// Common implementation for [crate::client::LogpushJobs] request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R: std::default::Default> {
        stub: std::sync::Arc<dyn super::super::stub::dynamic::LogpushJobs>,
        request: R,
        options: gax::options::RequestOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogpushJobs>,
        ) -> Self {
            Self {
                stub,
                request: R::default(),
                options: gax::options::RequestOptions::default(),
            }
        }
    }

    /// The request builder for [LogpushJobs::get_logpush_jobs_v2][crate::client::LogpushJobs::get_logpush_jobs_v2] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_logpush_jobs_v2::builder;
    /// use builder::logpush_jobs::GetLogpushJobsV2;
    /// # async fn sample() -> gax::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> GetLogpushJobsV2 {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetLogpushJobsV2(RequestBuilder<crate::model::GetLogpushJobsV2Request>);

    impl GetLogpushJobsV2 {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogpushJobs>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetLogpushJobsV2Request>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::ListLogpushJobsResp>> {
            (*self.0.stub)
                .get_logpush_jobs_v2(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [crn][crate::model::GetLogpushJobsV2Request::crn].
        ///
        /// This is a **required** field for requests.
        pub fn set_crn<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.crn = v.into();
            self
        }

        /// Sets the value of [zone_id][crate::model::GetLogpushJobsV2Request::zone_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_zone_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.zone_id = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetLogpushJobsV2 {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogpushJobs::create_logpush_job_v2][crate::client::LogpushJobs::create_logpush_job_v2] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_logpush_jobs_v2::builder;
    /// use builder::logpush_jobs::CreateLogpushJobV2;
    /// # async fn sample() -> gax::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> CreateLogpushJobV2 {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct CreateLogpushJobV2(RequestBuilder<crate::model::CreateLogpushJobV2Params>);

    impl CreateLogpushJobV2 {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogpushJobs>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateLogpushJobV2Params>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::LogpushJobsResp>> {
            (*self.0.stub)
                .create_logpush_job_v2(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [crn][crate::model::CreateLogpushJobV2Params::crn].
        ///
        /// This is a **required** field for requests.
        pub fn set_crn<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.crn = v.into();
            self
        }

        /// Sets the value of [zone_id][crate::model::CreateLogpushJobV2Params::zone_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_zone_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.zone_id = v.into();
            self
        }

        /// Sets the value of [job][crate::model::CreateLogpushJobV2Params::job].
        ///
        /// This is a **required** field for requests.
        pub fn set_job<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::CreateLogpushJobV2Request>,
        {
            self.0.request.job = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [job][crate::model::CreateLogpushJobV2Params::job].
        pub fn set_or_clear_job<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::CreateLogpushJobV2Request>,
        {
            self.0.request.job = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateLogpushJobV2 {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogpushJobs::get_logpush_job_v2][crate::client::LogpushJobs::get_logpush_job_v2] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_logpush_jobs_v2::builder;
    /// use builder::logpush_jobs::GetLogpushJobV2;
    /// # async fn sample() -> gax::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> GetLogpushJobV2 {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetLogpushJobV2(RequestBuilder<crate::model::GetLogpushJobV2Request>);

    impl GetLogpushJobV2 {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogpushJobs>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetLogpushJobV2Request>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::LogpushJobsResp>> {
            (*self.0.stub)
                .get_logpush_job_v2(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [crn][crate::model::GetLogpushJobV2Request::crn].
        ///
        /// This is a **required** field for requests.
        pub fn set_crn<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.crn = v.into();
            self
        }

        /// Sets the value of [zone_id][crate::model::GetLogpushJobV2Request::zone_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_zone_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.zone_id = v.into();
            self
        }

        /// Sets the value of [job_id][crate::model::GetLogpushJobV2Request::job_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_job_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.job_id = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetLogpushJobV2 {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogpushJobs::update_logpush_job_v2][crate::client::LogpushJobs::update_logpush_job_v2] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_logpush_jobs_v2::builder;
    /// use builder::logpush_jobs::UpdateLogpushJobV2;
    /// # async fn sample() -> gax::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> UpdateLogpushJobV2 {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct UpdateLogpushJobV2(RequestBuilder<crate::model::UpdateLogpushJobV2Params>);

    impl UpdateLogpushJobV2 {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogpushJobs>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateLogpushJobV2Params>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::LogpushJobsResp>> {
            (*self.0.stub)
                .update_logpush_job_v2(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [crn][crate::model::UpdateLogpushJobV2Params::crn].
        ///
        /// This is a **required** field for requests.
        pub fn set_crn<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.crn = v.into();
            self
        }

        /// Sets the value of [zone_id][crate::model::UpdateLogpushJobV2Params::zone_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_zone_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.zone_id = v.into();
            self
        }

        /// Sets the value of [job_id][crate::model::UpdateLogpushJobV2Params::job_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_job_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.job_id = v.into();
            self
        }

        /// Sets the value of [job][crate::model::UpdateLogpushJobV2Params::job].
        ///
        /// This is a **required** field for requests.
        pub fn set_job<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::UpdateLogpushJobV2Request>,
        {
            self.0.request.job = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [job][crate::model::UpdateLogpushJobV2Params::job].
        pub fn set_or_clear_job<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::UpdateLogpushJobV2Request>,
        {
            self.0.request.job = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateLogpushJobV2 {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogpushJobs::delete_logpush_job_v2][crate::client::LogpushJobs::delete_logpush_job_v2] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_logpush_jobs_v2::builder;
    /// use builder::logpush_jobs::DeleteLogpushJobV2;
    /// # async fn sample() -> gax::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> DeleteLogpushJobV2 {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DeleteLogpushJobV2(RequestBuilder<crate::model::DeleteLogpushJobV2Request>);

    impl DeleteLogpushJobV2 {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogpushJobs>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteLogpushJobV2Request>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::DeleteLogpushJobResp>> {
            (*self.0.stub)
                .delete_logpush_job_v2(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [crn][crate::model::DeleteLogpushJobV2Request::crn].
        ///
        /// This is a **required** field for requests.
        pub fn set_crn<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.crn = v.into();
            self
        }

        /// Sets the value of [zone_id][crate::model::DeleteLogpushJobV2Request::zone_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_zone_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.zone_id = v.into();
            self
        }

        /// Sets the value of [job_id][crate::model::DeleteLogpushJobV2Request::job_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_job_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.job_id = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteLogpushJobV2 {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogpushJobs::list_fields_for_dataset_v2][crate::client::LogpushJobs::list_fields_for_dataset_v2] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_logpush_jobs_v2::builder;
    /// use builder::logpush_jobs::ListFieldsForDatasetV2;
    /// # async fn sample() -> gax::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> ListFieldsForDatasetV2 {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ListFieldsForDatasetV2(RequestBuilder<crate::model::ListFieldsForDatasetV2Request>);

    impl ListFieldsForDatasetV2 {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogpushJobs>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListFieldsForDatasetV2Request>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::ListFieldsResp>> {
            (*self.0.stub)
                .list_fields_for_dataset_v2(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [crn][crate::model::ListFieldsForDatasetV2Request::crn].
        ///
        /// This is a **required** field for requests.
        pub fn set_crn<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.crn = v.into();
            self
        }

        /// Sets the value of [zone_id][crate::model::ListFieldsForDatasetV2Request::zone_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_zone_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.zone_id = v.into();
            self
        }

        /// Sets the value of [dataset][crate::model::ListFieldsForDatasetV2Request::dataset].
        ///
        /// This is a **required** field for requests.
        pub fn set_dataset<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.dataset = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListFieldsForDatasetV2 {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogpushJobs::list_logpush_jobs_for_dataset_v2][crate::client::LogpushJobs::list_logpush_jobs_for_dataset_v2] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_logpush_jobs_v2::builder;
    /// use builder::logpush_jobs::ListLogpushJobsForDatasetV2;
    /// # async fn sample() -> gax::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> ListLogpushJobsForDatasetV2 {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ListLogpushJobsForDatasetV2(
        RequestBuilder<crate::model::ListLogpushJobsForDatasetV2Request>,
    );

    impl ListLogpushJobsForDatasetV2 {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogpushJobs>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListLogpushJobsForDatasetV2Request>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::ListLogpushJobsResp>> {
            (*self.0.stub)
                .list_logpush_jobs_for_dataset_v2(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [crn][crate::model::ListLogpushJobsForDatasetV2Request::crn].
        ///
        /// This is a **required** field for requests.
        pub fn set_crn<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.crn = v.into();
            self
        }

        /// Sets the value of [zone_id][crate::model::ListLogpushJobsForDatasetV2Request::zone_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_zone_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.zone_id = v.into();
            self
        }

        /// Sets the value of [dataset][crate::model::ListLogpushJobsForDatasetV2Request::dataset].
        ///
        /// This is a **required** field for requests.
        pub fn set_dataset<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.dataset = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListLogpushJobsForDatasetV2 {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogpushJobs::get_logpush_ownership_v2][crate::client::LogpushJobs::get_logpush_ownership_v2] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_logpush_jobs_v2::builder;
    /// use builder::logpush_jobs::GetLogpushOwnershipV2;
    /// # async fn sample() -> gax::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> GetLogpushOwnershipV2 {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetLogpushOwnershipV2(RequestBuilder<crate::model::GetLogpushOwnershipV2Request>);

    impl GetLogpushOwnershipV2 {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogpushJobs>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetLogpushOwnershipV2Request>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::OwnershipChallengeResp>> {
            (*self.0.stub)
                .get_logpush_ownership_v2(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [crn][crate::model::GetLogpushOwnershipV2Request::crn].
        ///
        /// This is a **required** field for requests.
        pub fn set_crn<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.crn = v.into();
            self
        }

        /// Sets the value of [zone_id][crate::model::GetLogpushOwnershipV2Request::zone_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_zone_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.zone_id = v.into();
            self
        }

        /// Sets the value of [cos][crate::model::GetLogpushOwnershipV2Request::cos].
        pub fn set_cos<T, K, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = (K, V)>,
            K: std::convert::Into<std::string::String>,
            V: std::convert::Into<serde_json::Value>,
        {
            use std::iter::Iterator;
            self.0.request.cos = std::option::Option::Some(
                v.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
            );
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetLogpushOwnershipV2 {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogpushJobs::validate_logpush_ownership_challenge_v2][crate::client::LogpushJobs::validate_logpush_ownership_challenge_v2] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_logpush_jobs_v2::builder;
    /// use builder::logpush_jobs::ValidateLogpushOwnershipChallengeV2;
    /// # async fn sample() -> gax::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> ValidateLogpushOwnershipChallengeV2 {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ValidateLogpushOwnershipChallengeV2(
        RequestBuilder<crate::model::ValidateLogpushOwnershipChallengeV2Request>,
    );

    impl ValidateLogpushOwnershipChallengeV2 {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogpushJobs>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ValidateLogpushOwnershipChallengeV2Request>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::OwnershipChallengeValidateResult>> {
            (*self.0.stub)
                .validate_logpush_ownership_challenge_v2(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [crn][crate::model::ValidateLogpushOwnershipChallengeV2Request::crn].
        ///
        /// This is a **required** field for requests.
        pub fn set_crn<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.crn = v.into();
            self
        }

        /// Sets the value of [zone_id][crate::model::ValidateLogpushOwnershipChallengeV2Request::zone_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_zone_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.zone_id = v.into();
            self
        }

        /// Sets the value of [cos][crate::model::ValidateLogpushOwnershipChallengeV2Request::cos].
        pub fn set_cos<T, K, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = (K, V)>,
            K: std::convert::Into<std::string::String>,
            V: std::convert::Into<serde_json::Value>,
        {
            use std::iter::Iterator;
            self.0.request.cos = std::option::Option::Some(
                v.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
            );
            self
        }

        /// Sets the value of [ownership_challenge][crate::model::ValidateLogpushOwnershipChallengeV2Request::ownership_challenge].
        pub fn set_ownership_challenge<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.ownership_challenge = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [ownership_challenge][crate::model::ValidateLogpushOwnershipChallengeV2Request::ownership_challenge].
        pub fn set_or_clear_ownership_challenge<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.ownership_challenge = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ValidateLogpushOwnershipChallengeV2 {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }
}
