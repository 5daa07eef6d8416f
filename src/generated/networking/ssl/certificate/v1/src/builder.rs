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

pub mod ssl_certificate {
    use crate::Result;

    /// A builder for [SslCertificate][crate::client::SslCertificate].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use ibm_cloud_networking_ssl_certificate_v1::*;
    /// # use builder::ssl_certificate::ClientBuilder;
    /// # use client::SslCertificate;
    /// let builder : ClientBuilder = SslCertificate::builder();
    /// let client = builder
    ///     .with_endpoint("https://api.cis.cloud.ibm.com")
    ///     .with_credentials(auth::credentials::no_auth::Builder::new().build())
    ///     .build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub type ClientBuilder =
        gax::client_builder::ClientBuilder<client::Factory, gaxi::options::Credentials>;

    pub(crate) mod client {
        use super::super::super::client::SslCertificate;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = SslCertificate;
            type Credentials = gaxi::options::Credentials;
            async fn build(
                self,
                config: gaxi::options::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// Common implementation for [crate::client::SslCertificate] request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R: std::default::Default> {
        stub: std::sync::Arc<dyn super::super::stub::dynamic::SslCertificate>,
        request: R,
        options: gax::options::RequestOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::SslCertificate>,
        ) -> Self {
            Self {
                stub,
                request: R::default(),
                options: gax::options::RequestOptions::default(),
            }
        }
    }

    /// The request builder for [SslCertificate::list_certificates][crate::client::SslCertificate::list_certificates] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_ssl_certificate_v1::builder;
    /// use builder::ssl_certificate::ListCertificates;
    /// # async fn sample() -> gax::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> ListCertificates {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ListCertificates(RequestBuilder<crate::model::ListCertificatesRequest>);

    impl ListCertificates {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::SslCertificate>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListCertificatesRequest>>(
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
        ) -> Result<gax::response::Response<crate::model::ListCertificateResp>> {
            (*self.0.stub)
                .list_certificates(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [crn][crate::model::ListCertificatesRequest::crn].
        ///
        /// This is a **required** field for requests.
        pub fn set_crn<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.crn = v.into();
            self
        }

        /// Sets the value of [zone_identifier][crate::model::ListCertificatesRequest::zone_identifier].
        ///
        /// This is a **required** field for requests.
        pub fn set_zone_identifier<T: std::convert::Into<std::string::String>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.zone_identifier = v.into();
            self
        }

        /// Sets the value of [x_correlation_id][crate::model::ListCertificatesRequest::x_correlation_id].
        pub fn set_x_correlation_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.x_correlation_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [x_correlation_id][crate::model::ListCertificatesRequest::x_correlation_id].
        pub fn set_or_clear_x_correlation_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.x_correlation_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListCertificates {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [SslCertificate::order_certificate][crate::client::SslCertificate::order_certificate] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_ssl_certificate_v1::builder;
    /// use builder::ssl_certificate::OrderCertificate;
    /// # async fn sample() -> gax::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> OrderCertificate {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct OrderCertificate(RequestBuilder<crate::model::OrderCertificateRequest>);

    impl OrderCertificate {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::SslCertificate>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::OrderCertificateRequest>>(
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
        ) -> Result<gax::response::Response<crate::model::DedicatedCertificateResp>> {
            (*self.0.stub)
                .order_certificate(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [crn][crate::model::OrderCertificateRequest::crn].
        ///
        /// This is a **required** field for requests.
        pub fn set_crn<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.crn = v.into();
            self
        }

        /// Sets the value of [zone_identifier][crate::model::OrderCertificateRequest::zone_identifier].
        ///
        /// This is a **required** field for requests.
        pub fn set_zone_identifier<T: std::convert::Into<std::string::String>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.zone_identifier = v.into();
            self
        }

        /// Sets the value of [x_correlation_id][crate::model::OrderCertificateRequest::x_correlation_id].
        pub fn set_x_correlation_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.x_correlation_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [x_correlation_id][crate::model::OrderCertificateRequest::x_correlation_id].
        pub fn set_or_clear_x_correlation_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.x_correlation_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [r#type][crate::model::OrderCertificateRequest::r#type].
        pub fn set_type<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.r#type = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [r#type][crate::model::OrderCertificateRequest::r#type].
        pub fn set_or_clear_type<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.r#type = v.map(|x| x.into());
            self
        }

        /// Sets the value of [hosts][crate::model::OrderCertificateRequest::hosts].
        ///
        /// This is a **required** field for requests.
        pub fn set_hosts<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<std::string::String>,
        {
            use std::iter::Iterator;
            self.0.request.hosts = v.into_iter().map(|i| i.into()).collect();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for OrderCertificate {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [SslCertificate::delete_certificate][crate::client::SslCertificate::delete_certificate] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_ssl_certificate_v1::builder;
    /// use builder::ssl_certificate::DeleteCertificate;
    /// # async fn sample() -> gax::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> DeleteCertificate {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DeleteCertificate(RequestBuilder<crate::model::DeleteCertificateRequest>);

    impl DeleteCertificate {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::SslCertificate>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteCertificateRequest>>(
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
        ) -> Result<gax::response::Response<crate::model::DeleteCertificateResp>> {
            (*self.0.stub)
                .delete_certificate(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [crn][crate::model::DeleteCertificateRequest::crn].
        ///
        /// This is a **required** field for requests.
        pub fn set_crn<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.crn = v.into();
            self
        }

        /// Sets the value of [zone_identifier][crate::model::DeleteCertificateRequest::zone_identifier].
        ///
        /// This is a **required** field for requests.
        pub fn set_zone_identifier<T: std::convert::Into<std::string::String>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.zone_identifier = v.into();
            self
        }

        /// Sets the value of [cert_identifier][crate::model::DeleteCertificateRequest::cert_identifier].
        ///
        /// This is a **required** field for requests.
        pub fn set_cert_identifier<T: std::convert::Into<std::string::String>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.cert_identifier = v.into();
            self
        }

        /// Sets the value of [x_correlation_id][crate::model::DeleteCertificateRequest::x_correlation_id].
        pub fn set_x_correlation_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.x_correlation_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [x_correlation_id][crate::model::DeleteCertificateRequest::x_correlation_id].
        pub fn set_or_clear_x_correlation_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.x_correlation_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteCertificate {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [SslCertificate::get_ssl_setting][crate::client::SslCertificate::get_ssl_setting] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_ssl_certificate_v1::builder;
    /// use builder::ssl_certificate::GetSslSetting;
    /// # async fn sample() -> gax::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> GetSslSetting {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetSslSetting(RequestBuilder<crate::model::GetSslSettingRequest>);

    impl GetSslSetting {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::SslCertificate>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetSslSettingRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::SettingResp>> {
            (*self.0.stub)
                .get_ssl_setting(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [crn][crate::model::GetSslSettingRequest::crn].
        ///
        /// This is a **required** field for requests.
        pub fn set_crn<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.crn = v.into();
            self
        }

        /// Sets the value of [zone_identifier][crate::model::GetSslSettingRequest::zone_identifier].
        ///
        /// This is a **required** field for requests.
        pub fn set_zone_identifier<T: std::convert::Into<std::string::String>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.zone_identifier = v.into();
            self
        }

        /// Sets the value of [x_correlation_id][crate::model::GetSslSettingRequest::x_correlation_id].
        pub fn set_x_correlation_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.x_correlation_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [x_correlation_id][crate::model::GetSslSettingRequest::x_correlation_id].
        pub fn set_or_clear_x_correlation_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.x_correlation_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetSslSetting {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [SslCertificate::change_ssl_setting][crate::client::SslCertificate::change_ssl_setting] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_ssl_certificate_v1::builder;
    /// use builder::ssl_certificate::ChangeSslSetting;
    /// # async fn sample() -> gax::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> ChangeSslSetting {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ChangeSslSetting(RequestBuilder<crate::model::ChangeSslSettingRequest>);

    impl ChangeSslSetting {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::SslCertificate>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ChangeSslSettingRequest>>(
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
        pub async fn send(self) -> Result<gax::response::Response<crate::model::SettingResp>> {
            (*self.0.stub)
                .change_ssl_setting(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [crn][crate::model::ChangeSslSettingRequest::crn].
        ///
        /// This is a **required** field for requests.
        pub fn set_crn<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.crn = v.into();
            self
        }

        /// Sets the value of [zone_identifier][crate::model::ChangeSslSettingRequest::zone_identifier].
        ///
        /// This is a **required** field for requests.
        pub fn set_zone_identifier<T: std::convert::Into<std::string::String>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.zone_identifier = v.into();
            self
        }

        /// Sets the value of [x_correlation_id][crate::model::ChangeSslSettingRequest::x_correlation_id].
        pub fn set_x_correlation_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.x_correlation_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [x_correlation_id][crate::model::ChangeSslSettingRequest::x_correlation_id].
        pub fn set_or_clear_x_correlation_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.x_correlation_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [value][crate::model::ChangeSslSettingRequest::value].
        pub fn set_value<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.value = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [value][crate::model::ChangeSslSettingRequest::value].
        pub fn set_or_clear_value<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.value = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ChangeSslSetting {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [SslCertificate::list_custom_certificates][crate::client::SslCertificate::list_custom_certificates] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_ssl_certificate_v1::builder;
    /// use builder::ssl_certificate::ListCustomCertificates;
    /// # async fn sample() -> gax::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> ListCustomCertificates {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ListCustomCertificates(RequestBuilder<crate::model::ListCustomCertificatesRequest>);

    impl ListCustomCertificates {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::SslCertificate>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListCustomCertificatesRequest>>(
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
        ) -> Result<gax::response::Response<crate::model::ListCustomCertsResp>> {
            (*self.0.stub)
                .list_custom_certificates(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [crn][crate::model::ListCustomCertificatesRequest::crn].
        ///
        /// This is a **required** field for requests.
        pub fn set_crn<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.crn = v.into();
            self
        }

        /// Sets the value of [zone_identifier][crate::model::ListCustomCertificatesRequest::zone_identifier].
        ///
        /// This is a **required** field for requests.
        pub fn set_zone_identifier<T: std::convert::Into<std::string::String>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.zone_identifier = v.into();
            self
        }

        /// Sets the value of [x_correlation_id][crate::model::ListCustomCertificatesRequest::x_correlation_id].
        pub fn set_x_correlation_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.x_correlation_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [x_correlation_id][crate::model::ListCustomCertificatesRequest::x_correlation_id].
        pub fn set_or_clear_x_correlation_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.x_correlation_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListCustomCertificates {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [SslCertificate::upload_custom_certificate][crate::client::SslCertificate::upload_custom_certificate] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_ssl_certificate_v1::builder;
    /// use builder::ssl_certificate::UploadCustomCertificate;
    /// # async fn sample() -> gax::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> UploadCustomCertificate {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct UploadCustomCertificate(
        RequestBuilder<crate::model::UploadCustomCertificateRequest>,
    );

    impl UploadCustomCertificate {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::SslCertificate>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UploadCustomCertificateRequest>>(
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
        pub async fn send(self) -> Result<gax::response::Response<crate::model::CustomCertResp>> {
            (*self.0.stub)
                .upload_custom_certificate(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [crn][crate::model::UploadCustomCertificateRequest::crn].
        ///
        /// This is a **required** field for requests.
        pub fn set_crn<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.crn = v.into();
            self
        }

        /// Sets the value of [zone_identifier][crate::model::UploadCustomCertificateRequest::zone_identifier].
        ///
        /// This is a **required** field for requests.
        pub fn set_zone_identifier<T: std::convert::Into<std::string::String>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.zone_identifier = v.into();
            self
        }

        /// Sets the value of [x_correlation_id][crate::model::UploadCustomCertificateRequest::x_correlation_id].
        pub fn set_x_correlation_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.x_correlation_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [x_correlation_id][crate::model::UploadCustomCertificateRequest::x_correlation_id].
        pub fn set_or_clear_x_correlation_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.x_correlation_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [certificate][crate::model::UploadCustomCertificateRequest::certificate].
        ///
        /// This is a **required** field for requests.
        pub fn set_certificate<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.certificate = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [certificate][crate::model::UploadCustomCertificateRequest::certificate].
        pub fn set_or_clear_certificate<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.certificate = v.map(|x| x.into());
            self
        }

        /// Sets the value of [private_key][crate::model::UploadCustomCertificateRequest::private_key].
        ///
        /// This is a **required** field for requests.
        pub fn set_private_key<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.private_key = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [private_key][crate::model::UploadCustomCertificateRequest::private_key].
        pub fn set_or_clear_private_key<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.private_key = v.map(|x| x.into());
            self
        }

        /// Sets the value of [bundle_method][crate::model::UploadCustomCertificateRequest::bundle_method].
        pub fn set_bundle_method<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.bundle_method = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [bundle_method][crate::model::UploadCustomCertificateRequest::bundle_method].
        pub fn set_or_clear_bundle_method<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.bundle_method = v.map(|x| x.into());
            self
        }

        /// Sets the value of [geo_restrictions][crate::model::UploadCustomCertificateRequest::geo_restrictions].
        pub fn set_geo_restrictions<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::CustomCertReqGeoRestrictions>,
        {
            self.0.request.geo_restrictions = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [geo_restrictions][crate::model::UploadCustomCertificateRequest::geo_restrictions].
        pub fn set_or_clear_geo_restrictions<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::CustomCertReqGeoRestrictions>,
        {
            self.0.request.geo_restrictions = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UploadCustomCertificate {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [SslCertificate::get_custom_certificate][crate::client::SslCertificate::get_custom_certificate] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_ssl_certificate_v1::builder;
    /// use builder::ssl_certificate::GetCustomCertificate;
    /// # async fn sample() -> gax::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> GetCustomCertificate {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetCustomCertificate(RequestBuilder<crate::model::GetCustomCertificateRequest>);

    impl GetCustomCertificate {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::SslCertificate>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetCustomCertificateRequest>>(
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
        pub async fn send(self) -> Result<gax::response::Response<crate::model::CustomCertResp>> {
            (*self.0.stub)
                .get_custom_certificate(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [crn][crate::model::GetCustomCertificateRequest::crn].
        ///
        /// This is a **required** field for requests.
        pub fn set_crn<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.crn = v.into();
            self
        }

        /// Sets the value of [zone_identifier][crate::model::GetCustomCertificateRequest::zone_identifier].
        ///
        /// This is a **required** field for requests.
        pub fn set_zone_identifier<T: std::convert::Into<std::string::String>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.zone_identifier = v.into();
            self
        }

        /// Sets the value of [custom_cert_id][crate::model::GetCustomCertificateRequest::custom_cert_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_custom_cert_id<T: std::convert::Into<std::string::String>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.custom_cert_id = v.into();
            self
        }

        /// Sets the value of [x_correlation_id][crate::model::GetCustomCertificateRequest::x_correlation_id].
        pub fn set_x_correlation_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.x_correlation_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [x_correlation_id][crate::model::GetCustomCertificateRequest::x_correlation_id].
        pub fn set_or_clear_x_correlation_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.x_correlation_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetCustomCertificate {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [SslCertificate::update_custom_certificate][crate::client::SslCertificate::update_custom_certificate] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_ssl_certificate_v1::builder;
    /// use builder::ssl_certificate::UpdateCustomCertificate;
    /// # async fn sample() -> gax::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> UpdateCustomCertificate {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct UpdateCustomCertificate(
        RequestBuilder<crate::model::UpdateCustomCertificateRequest>,
    );

    impl UpdateCustomCertificate {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::SslCertificate>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateCustomCertificateRequest>>(
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
        pub async fn send(self) -> Result<gax::response::Response<crate::model::CustomCertResp>> {
            (*self.0.stub)
                .update_custom_certificate(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [crn][crate::model::UpdateCustomCertificateRequest::crn].
        ///
        /// This is a **required** field for requests.
        pub fn set_crn<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.crn = v.into();
            self
        }

        /// Sets the value of [zone_identifier][crate::model::UpdateCustomCertificateRequest::zone_identifier].
        ///
        /// This is a **required** field for requests.
        pub fn set_zone_identifier<T: std::convert::Into<std::string::String>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.zone_identifier = v.into();
            self
        }

        /// Sets the value of [custom_cert_id][crate::model::UpdateCustomCertificateRequest::custom_cert_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_custom_cert_id<T: std::convert::Into<std::string::String>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.custom_cert_id = v.into();
            self
        }

        /// Sets the value of [x_correlation_id][crate::model::UpdateCustomCertificateRequest::x_correlation_id].
        pub fn set_x_correlation_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.x_correlation_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [x_correlation_id][crate::model::UpdateCustomCertificateRequest::x_correlation_id].
        pub fn set_or_clear_x_correlation_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.x_correlation_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [certificate][crate::model::UpdateCustomCertificateRequest::certificate].
        pub fn set_certificate<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.certificate = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [certificate][crate::model::UpdateCustomCertificateRequest::certificate].
        pub fn set_or_clear_certificate<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.certificate = v.map(|x| x.into());
            self
        }

        /// Sets the value of [private_key][crate::model::UpdateCustomCertificateRequest::private_key].
        pub fn set_private_key<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.private_key = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [private_key][crate::model::UpdateCustomCertificateRequest::private_key].
        pub fn set_or_clear_private_key<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.private_key = v.map(|x| x.into());
            self
        }

        /// Sets the value of [bundle_method][crate::model::UpdateCustomCertificateRequest::bundle_method].
        pub fn set_bundle_method<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.bundle_method = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [bundle_method][crate::model::UpdateCustomCertificateRequest::bundle_method].
        pub fn set_or_clear_bundle_method<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.bundle_method = v.map(|x| x.into());
            self
        }

        /// Sets the value of [geo_restrictions][crate::model::UpdateCustomCertificateRequest::geo_restrictions].
        pub fn set_geo_restrictions<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::CustomCertReqGeoRestrictions>,
        {
            self.0.request.geo_restrictions = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [geo_restrictions][crate::model::UpdateCustomCertificateRequest::geo_restrictions].
        pub fn set_or_clear_geo_restrictions<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::CustomCertReqGeoRestrictions>,
        {
            self.0.request.geo_restrictions = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateCustomCertificate {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [SslCertificate::delete_custom_certificate][crate::client::SslCertificate::delete_custom_certificate] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_ssl_certificate_v1::builder;
    /// use builder::ssl_certificate::DeleteCustomCertificate;
    /// # async fn sample() -> gax::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> DeleteCustomCertificate {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DeleteCustomCertificate(
        RequestBuilder<crate::model::DeleteCustomCertificateRequest>,
    );

    impl DeleteCustomCertificate {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::SslCertificate>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteCustomCertificateRequest>>(
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
        ) -> Result<gax::response::Response<crate::model::DeleteCertificateResp>> {
            (*self.0.stub)
                .delete_custom_certificate(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [crn][crate::model::DeleteCustomCertificateRequest::crn].
        ///
        /// This is a **required** field for requests.
        pub fn set_crn<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.crn = v.into();
            self
        }

        /// Sets the value of [zone_identifier][crate::model::DeleteCustomCertificateRequest::zone_identifier].
        ///
        /// This is a **required** field for requests.
        pub fn set_zone_identifier<T: std::convert::Into<std::string::String>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.zone_identifier = v.into();
            self
        }

        /// Sets the value of [custom_cert_id][crate::model::DeleteCustomCertificateRequest::custom_cert_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_custom_cert_id<T: std::convert::Into<std::string::String>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.custom_cert_id = v.into();
            self
        }

        /// Sets the value of [x_correlation_id][crate::model::DeleteCustomCertificateRequest::x_correlation_id].
        pub fn set_x_correlation_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.x_correlation_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [x_correlation_id][crate::model::DeleteCustomCertificateRequest::x_correlation_id].
        pub fn set_or_clear_x_correlation_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.x_correlation_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteCustomCertificate {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [SslCertificate::change_certificate_priority][crate::client::SslCertificate::change_certificate_priority] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_ssl_certificate_v1::builder;
    /// use builder::ssl_certificate::ChangeCertificatePriority;
    /// # async fn sample() -> gax::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> ChangeCertificatePriority {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ChangeCertificatePriority(
        RequestBuilder<crate::model::ChangeCertificatePriorityRequest>,
    );

    impl ChangeCertificatePriority {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::SslCertificate>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ChangeCertificatePriorityRequest>>(
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
        ) -> Result<gax::response::Response<crate::model::ListCustomCertsResp>> {
            (*self.0.stub)
                .change_certificate_priority(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [crn][crate::model::ChangeCertificatePriorityRequest::crn].
        ///
        /// This is a **required** field for requests.
        pub fn set_crn<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.crn = v.into();
            self
        }

        /// Sets the value of [zone_identifier][crate::model::ChangeCertificatePriorityRequest::zone_identifier].
        ///
        /// This is a **required** field for requests.
        pub fn set_zone_identifier<T: std::convert::Into<std::string::String>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.zone_identifier = v.into();
            self
        }

        /// Sets the value of [x_correlation_id][crate::model::ChangeCertificatePriorityRequest::x_correlation_id].
        pub fn set_x_correlation_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.x_correlation_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [x_correlation_id][crate::model::ChangeCertificatePriorityRequest::x_correlation_id].
        pub fn set_or_clear_x_correlation_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.x_correlation_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [certificates][crate::model::ChangeCertificatePriorityRequest::certificates].
        pub fn set_certificates<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<crate::model::CertPriorityReqCertificatesItem>,
        {
            use std::iter::Iterator;
            self.0.request.certificates = v.into_iter().map(|i| i.into()).collect();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ChangeCertificatePriority {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [SslCertificate::get_universal_certificate_setting][crate::client::SslCertificate::get_universal_certificate_setting] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_ssl_certificate_v1::builder;
    /// use builder::ssl_certificate::GetUniversalCertificateSetting;
    /// # async fn sample() -> gax::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> GetUniversalCertificateSetting {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetUniversalCertificateSetting(
        RequestBuilder<crate::model::GetUniversalCertificateSettingRequest>,
    );

    impl GetUniversalCertificateSetting {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::SslCertificate>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetUniversalCertificateSettingRequest>>(
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
        ) -> Result<gax::response::Response<crate::model::UniversalSettingResp>> {
            (*self.0.stub)
                .get_universal_certificate_setting(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [crn][crate::model::GetUniversalCertificateSettingRequest::crn].
        ///
        /// This is a **required** field for requests.
        pub fn set_crn<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.crn = v.into();
            self
        }

        /// Sets the value of [zone_identifier][crate::model::GetUniversalCertificateSettingRequest::zone_identifier].
        ///
        /// This is a **required** field for requests.
        pub fn set_zone_identifier<T: std::convert::Into<std::string::String>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.zone_identifier = v.into();
            self
        }

        /// Sets the value of [x_correlation_id][crate::model::GetUniversalCertificateSettingRequest::x_correlation_id].
        pub fn set_x_correlation_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.x_correlation_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [x_correlation_id][crate::model::GetUniversalCertificateSettingRequest::x_correlation_id].
        pub fn set_or_clear_x_correlation_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.x_correlation_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetUniversalCertificateSetting {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [SslCertificate::change_universal_certificate_setting][crate::client::SslCertificate::change_universal_certificate_setting] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_ssl_certificate_v1::builder;
    /// use builder::ssl_certificate::ChangeUniversalCertificateSetting;
    /// # async fn sample() -> gax::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> ChangeUniversalCertificateSetting {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ChangeUniversalCertificateSetting(
        RequestBuilder<crate::model::ChangeUniversalCertificateSettingRequest>,
    );

    impl ChangeUniversalCertificateSetting {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::SslCertificate>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ChangeUniversalCertificateSettingRequest>>(
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
        ) -> Result<gax::response::Response<crate::model::UniversalSettingResp>> {
            (*self.0.stub)
                .change_universal_certificate_setting(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [crn][crate::model::ChangeUniversalCertificateSettingRequest::crn].
        ///
        /// This is a **required** field for requests.
        pub fn set_crn<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.crn = v.into();
            self
        }

        /// Sets the value of [zone_identifier][crate::model::ChangeUniversalCertificateSettingRequest::zone_identifier].
        ///
        /// This is a **required** field for requests.
        pub fn set_zone_identifier<T: std::convert::Into<std::string::String>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.zone_identifier = v.into();
            self
        }

        /// Sets the value of [x_correlation_id][crate::model::ChangeUniversalCertificateSettingRequest::x_correlation_id].
        pub fn set_x_correlation_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.x_correlation_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [x_correlation_id][crate::model::ChangeUniversalCertificateSettingRequest::x_correlation_id].
        pub fn set_or_clear_x_correlation_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.x_correlation_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [enabled][crate::model::ChangeUniversalCertificateSettingRequest::enabled].
        pub fn set_enabled<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.enabled = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [enabled][crate::model::ChangeUniversalCertificateSettingRequest::enabled].
        pub fn set_or_clear_enabled<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.enabled = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ChangeUniversalCertificateSetting {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [SslCertificate::get_tls12_setting][crate::client::SslCertificate::get_tls12_setting] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_ssl_certificate_v1::builder;
    /// use builder::ssl_certificate::GetTls12Setting;
    /// # async fn sample() -> gax::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> GetTls12Setting {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetTls12Setting(RequestBuilder<crate::model::GetTls12SettingRequest>);

    impl GetTls12Setting {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::SslCertificate>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetTls12SettingRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::SettingResp>> {
            (*self.0.stub)
                .get_tls12_setting(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [crn][crate::model::GetTls12SettingRequest::crn].
        ///
        /// This is a **required** field for requests.
        pub fn set_crn<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.crn = v.into();
            self
        }

        /// Sets the value of [zone_identifier][crate::model::GetTls12SettingRequest::zone_identifier].
        ///
        /// This is a **required** field for requests.
        pub fn set_zone_identifier<T: std::convert::Into<std::string::String>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.zone_identifier = v.into();
            self
        }

        /// Sets the value of [x_correlation_id][crate::model::GetTls12SettingRequest::x_correlation_id].
        pub fn set_x_correlation_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.x_correlation_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [x_correlation_id][crate::model::GetTls12SettingRequest::x_correlation_id].
        pub fn set_or_clear_x_correlation_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.x_correlation_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetTls12Setting {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [SslCertificate::change_tls12_setting][crate::client::SslCertificate::change_tls12_setting] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_ssl_certificate_v1::builder;
    /// use builder::ssl_certificate::ChangeTls12Setting;
    /// # async fn sample() -> gax::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> ChangeTls12Setting {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ChangeTls12Setting(RequestBuilder<crate::model::ChangeTls12SettingRequest>);

    impl ChangeTls12Setting {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::SslCertificate>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ChangeTls12SettingRequest>>(
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
        pub async fn send(self) -> Result<gax::response::Response<crate::model::SettingResp>> {
            (*self.0.stub)
                .change_tls12_setting(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [crn][crate::model::ChangeTls12SettingRequest::crn].
        ///
        /// This is a **required** field for requests.
        pub fn set_crn<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.crn = v.into();
            self
        }

        /// Sets the value of [zone_identifier][crate::model::ChangeTls12SettingRequest::zone_identifier].
        ///
        /// This is a **required** field for requests.
        pub fn set_zone_identifier<T: std::convert::Into<std::string::String>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.zone_identifier = v.into();
            self
        }

        /// Sets the value of [x_correlation_id][crate::model::ChangeTls12SettingRequest::x_correlation_id].
        pub fn set_x_correlation_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.x_correlation_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [x_correlation_id][crate::model::ChangeTls12SettingRequest::x_correlation_id].
        pub fn set_or_clear_x_correlation_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.x_correlation_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [value][crate::model::ChangeTls12SettingRequest::value].
        pub fn set_value<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.value = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [value][crate::model::ChangeTls12SettingRequest::value].
        pub fn set_or_clear_value<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.value = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ChangeTls12Setting {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [SslCertificate::get_tls13_setting][crate::client::SslCertificate::get_tls13_setting] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_ssl_certificate_v1::builder;
    /// use builder::ssl_certificate::GetTls13Setting;
    /// # async fn sample() -> gax::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> GetTls13Setting {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetTls13Setting(RequestBuilder<crate::model::GetTls13SettingRequest>);

    impl GetTls13Setting {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::SslCertificate>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetTls13SettingRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::SettingResp>> {
            (*self.0.stub)
                .get_tls13_setting(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [crn][crate::model::GetTls13SettingRequest::crn].
        ///
        /// This is a **required** field for requests.
        pub fn set_crn<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.crn = v.into();
            self
        }

        /// Sets the value of [zone_identifier][crate::model::GetTls13SettingRequest::zone_identifier].
        ///
        /// This is a **required** field for requests.
        pub fn set_zone_identifier<T: std::convert::Into<std::string::String>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.zone_identifier = v.into();
            self
        }

        /// Sets the value of [x_correlation_id][crate::model::GetTls13SettingRequest::x_correlation_id].
        pub fn set_x_correlation_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.x_correlation_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [x_correlation_id][crate::model::GetTls13SettingRequest::x_correlation_id].
        pub fn set_or_clear_x_correlation_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.x_correlation_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetTls13Setting {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [SslCertificate::change_tls13_setting][crate::client::SslCertificate::change_tls13_setting] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_ssl_certificate_v1::builder;
    /// use builder::ssl_certificate::ChangeTls13Setting;
    /// # async fn sample() -> gax::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> ChangeTls13Setting {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ChangeTls13Setting(RequestBuilder<crate::model::ChangeTls13SettingRequest>);

    impl ChangeTls13Setting {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::SslCertificate>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ChangeTls13SettingRequest>>(
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
        pub async fn send(self) -> Result<gax::response::Response<crate::model::SettingResp>> {
            (*self.0.stub)
                .change_tls13_setting(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [crn][crate::model::ChangeTls13SettingRequest::crn].
        ///
        /// This is a **required** field for requests.
        pub fn set_crn<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.crn = v.into();
            self
        }

        /// Sets the value of [zone_identifier][crate::model::ChangeTls13SettingRequest::zone_identifier].
        ///
        /// This is a **required** field for requests.
        pub fn set_zone_identifier<T: std::convert::Into<std::string::String>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.zone_identifier = v.into();
            self
        }

        /// Sets the value of [x_correlation_id][crate::model::ChangeTls13SettingRequest::x_correlation_id].
        pub fn set_x_correlation_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.x_correlation_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [x_correlation_id][crate::model::ChangeTls13SettingRequest::x_correlation_id].
        pub fn set_or_clear_x_correlation_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.x_correlation_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [value][crate::model::ChangeTls13SettingRequest::value].
        pub fn set_value<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.value = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [value][crate::model::ChangeTls13SettingRequest::value].
        pub fn set_or_clear_value<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.value = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ChangeTls13Setting {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }
}
