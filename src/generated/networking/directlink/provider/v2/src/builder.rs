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

pub mod direct_link_provider {
    use crate::Result;

    /// A builder for [DirectLinkProvider][crate::client::DirectLinkProvider].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use ibm_cloud_networking_directlink_provider_v2::*;
    /// # use builder::direct_link_provider::ClientBuilder;
    /// # use client::DirectLinkProvider;
    /// let builder : ClientBuilder = DirectLinkProvider::builder();
    /// let client = builder
    ///     .with_endpoint("https://directlink.cloud.ibm.com/provider/v2")
    ///     .with_credentials(auth::credentials::no_auth::Builder::new().build())
    ///     .build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub type ClientBuilder =
        gax::client_builder::ClientBuilder<client::Factory, gaxi::options::Credentials>;

    pub(crate) mod client {
        use super::super::super::client::DirectLinkProvider;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = DirectLinkProvider;
            type Credentials = gaxi::options::Credentials;
            async fn build(
                self,
                config: gaxi::options::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// Common implementation for [crate::client::DirectLinkProvider] request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R: std::default::Default> {
        stub: std::sync::Arc<dyn super::super::stub::dynamic::DirectLinkProvider>,
        request: R,
        options: gax::options::RequestOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DirectLinkProvider>,
        ) -> Self {
            Self {
                stub,
                request: R::default(),
                options: gax::options::RequestOptions::default(),
            }
        }
    }

    /// The request builder for [DirectLinkProvider::list_provider_gateways][crate::client::DirectLinkProvider::list_provider_gateways] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_directlink_provider_v2::builder;
    /// use builder::direct_link_provider::ListProviderGateways;
    /// # async fn sample() -> gax::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let mut items = builder.by_item();
    /// while let Some(result) = items.next().await {
    ///   let item = result?;
    /// }
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> ListProviderGateways {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ListProviderGateways(RequestBuilder<crate::model::ListProviderGatewaysRequest>);

    impl ListProviderGateways {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DirectLinkProvider>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListProviderGatewaysRequest>>(
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
        ) -> Result<gax::response::Response<crate::model::ProviderGatewayCollection>> {
            (*self.0.stub)
                .list_provider_gateways(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<crate::model::ProviderGatewayCollection, gax::error::Error> {
            use std::clone::Clone;
            let token = self.0.request.start.clone().unwrap_or_default();
            let execute = move |token: String| {
                let mut builder = self.clone();
                if !token.is_empty() {
                    builder.0.request = builder.0.request.set_start(token);
                }
                async move {
                    builder
                        .send()
                        .await
                        .map(|r| r.into_body().unwrap_or_default())
                }
            };
            gax::paginator::internal::new_paginator(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            crate::model::ProviderGatewayCollection,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [version][crate::model::ListProviderGatewaysRequest::version].
        ///
        /// This is a **required** field for requests.
        pub fn set_version<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.version = v.into();
            self
        }

        /// Sets the value of [start][crate::model::ListProviderGatewaysRequest::start].
        pub fn set_start<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.start = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [start][crate::model::ListProviderGatewaysRequest::start].
        pub fn set_or_clear_start<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.start = v.map(|x| x.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListProviderGatewaysRequest::limit].
        pub fn set_limit<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<i64>,
        {
            self.0.request.limit = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [limit][crate::model::ListProviderGatewaysRequest::limit].
        pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i64>,
        {
            self.0.request.limit = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListProviderGateways {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DirectLinkProvider::create_provider_gateway][crate::client::DirectLinkProvider::create_provider_gateway] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_directlink_provider_v2::builder;
    /// use builder::direct_link_provider::CreateProviderGateway;
    /// # async fn sample() -> gax::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> CreateProviderGateway {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct CreateProviderGateway(RequestBuilder<crate::model::CreateProviderGatewayRequest>);

    impl CreateProviderGateway {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DirectLinkProvider>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateProviderGatewayRequest>>(
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
        pub async fn send(self) -> Result<gax::response::Response<crate::model::ProviderGateway>> {
            (*self.0.stub)
                .create_provider_gateway(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [version][crate::model::CreateProviderGatewayRequest::version].
        ///
        /// This is a **required** field for requests.
        pub fn set_version<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.version = v.into();
            self
        }

        /// Sets the value of [check_only][crate::model::CreateProviderGatewayRequest::check_only].
        pub fn set_check_only<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.check_only = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [check_only][crate::model::CreateProviderGatewayRequest::check_only].
        pub fn set_or_clear_check_only<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.check_only = v.map(|x| x.into());
            self
        }

        /// Sets the value of [bgp_asn][crate::model::CreateProviderGatewayRequest::bgp_asn].
        ///
        /// This is a **required** field for requests.
        pub fn set_bgp_asn<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<i64>,
        {
            self.0.request.bgp_asn = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [bgp_asn][crate::model::CreateProviderGatewayRequest::bgp_asn].
        pub fn set_or_clear_bgp_asn<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i64>,
        {
            self.0.request.bgp_asn = v.map(|x| x.into());
            self
        }

        /// Sets the value of [customer_account_id][crate::model::CreateProviderGatewayRequest::customer_account_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_customer_account_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.customer_account_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [customer_account_id][crate::model::CreateProviderGatewayRequest::customer_account_id].
        pub fn set_or_clear_customer_account_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.customer_account_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [name][crate::model::CreateProviderGatewayRequest::name].
        ///
        /// This is a **required** field for requests.
        pub fn set_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.name = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [name][crate::model::CreateProviderGatewayRequest::name].
        pub fn set_or_clear_name<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.name = v.map(|x| x.into());
            self
        }

        /// Sets the value of [port][crate::model::CreateProviderGatewayRequest::port].
        ///
        /// This is a **required** field for requests.
        pub fn set_port<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::ProviderGatewayPortIdentity>,
        {
            self.0.request.port = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [port][crate::model::CreateProviderGatewayRequest::port].
        pub fn set_or_clear_port<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::ProviderGatewayPortIdentity>,
        {
            self.0.request.port = v.map(|x| x.into());
            self
        }

        /// Sets the value of [speed_mbps][crate::model::CreateProviderGatewayRequest::speed_mbps].
        ///
        /// This is a **required** field for requests.
        pub fn set_speed_mbps<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<i64>,
        {
            self.0.request.speed_mbps = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [speed_mbps][crate::model::CreateProviderGatewayRequest::speed_mbps].
        pub fn set_or_clear_speed_mbps<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i64>,
        {
            self.0.request.speed_mbps = v.map(|x| x.into());
            self
        }

        /// Sets the value of [bgp_cer_cidr][crate::model::CreateProviderGatewayRequest::bgp_cer_cidr].
        pub fn set_bgp_cer_cidr<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.bgp_cer_cidr = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [bgp_cer_cidr][crate::model::CreateProviderGatewayRequest::bgp_cer_cidr].
        pub fn set_or_clear_bgp_cer_cidr<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.bgp_cer_cidr = v.map(|x| x.into());
            self
        }

        /// Sets the value of [bgp_ibm_cidr][crate::model::CreateProviderGatewayRequest::bgp_ibm_cidr].
        pub fn set_bgp_ibm_cidr<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.bgp_ibm_cidr = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [bgp_ibm_cidr][crate::model::CreateProviderGatewayRequest::bgp_ibm_cidr].
        pub fn set_or_clear_bgp_ibm_cidr<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.bgp_ibm_cidr = v.map(|x| x.into());
            self
        }

        /// Sets the value of [vlan][crate::model::CreateProviderGatewayRequest::vlan].
        pub fn set_vlan<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<i64>,
        {
            self.0.request.vlan = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [vlan][crate::model::CreateProviderGatewayRequest::vlan].
        pub fn set_or_clear_vlan<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i64>,
        {
            self.0.request.vlan = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateProviderGateway {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DirectLinkProvider::delete_provider_gateway][crate::client::DirectLinkProvider::delete_provider_gateway] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_directlink_provider_v2::builder;
    /// use builder::direct_link_provider::DeleteProviderGateway;
    /// # async fn sample() -> gax::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> DeleteProviderGateway {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DeleteProviderGateway(RequestBuilder<crate::model::DeleteProviderGatewayRequest>);

    impl DeleteProviderGateway {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DirectLinkProvider>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteProviderGatewayRequest>>(
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
        pub async fn send(self) -> Result<gax::response::Response<crate::model::ProviderGateway>> {
            (*self.0.stub)
                .delete_provider_gateway(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [version][crate::model::DeleteProviderGatewayRequest::version].
        ///
        /// This is a **required** field for requests.
        pub fn set_version<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.version = v.into();
            self
        }

        /// Sets the value of [id][crate::model::DeleteProviderGatewayRequest::id].
        ///
        /// This is a **required** field for requests.
        pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.id = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteProviderGateway {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DirectLinkProvider::get_provider_gateway][crate::client::DirectLinkProvider::get_provider_gateway] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_directlink_provider_v2::builder;
    /// use builder::direct_link_provider::GetProviderGateway;
    /// # async fn sample() -> gax::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> GetProviderGateway {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetProviderGateway(RequestBuilder<crate::model::GetProviderGatewayRequest>);

    impl GetProviderGateway {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DirectLinkProvider>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetProviderGatewayRequest>>(
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
        pub async fn send(self) -> Result<gax::response::Response<crate::model::ProviderGateway>> {
            (*self.0.stub)
                .get_provider_gateway(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [version][crate::model::GetProviderGatewayRequest::version].
        ///
        /// This is a **required** field for requests.
        pub fn set_version<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.version = v.into();
            self
        }

        /// Sets the value of [id][crate::model::GetProviderGatewayRequest::id].
        ///
        /// This is a **required** field for requests.
        pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.id = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetProviderGateway {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DirectLinkProvider::update_provider_gateway][crate::client::DirectLinkProvider::update_provider_gateway] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_directlink_provider_v2::builder;
    /// use builder::direct_link_provider::UpdateProviderGateway;
    /// # async fn sample() -> gax::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> UpdateProviderGateway {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct UpdateProviderGateway(RequestBuilder<crate::model::UpdateProviderGatewayRequest>);

    impl UpdateProviderGateway {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DirectLinkProvider>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateProviderGatewayRequest>>(
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
        pub async fn send(self) -> Result<gax::response::Response<crate::model::ProviderGateway>> {
            (*self.0.stub)
                .update_provider_gateway(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [version][crate::model::UpdateProviderGatewayRequest::version].
        ///
        /// This is a **required** field for requests.
        pub fn set_version<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.version = v.into();
            self
        }

        /// Sets the value of [id][crate::model::UpdateProviderGatewayRequest::id].
        ///
        /// This is a **required** field for requests.
        pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.id = v.into();
            self
        }

        /// Sets the value of [name][crate::model::UpdateProviderGatewayRequest::name].
        pub fn set_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.name = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [name][crate::model::UpdateProviderGatewayRequest::name].
        pub fn set_or_clear_name<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.name = v.map(|x| x.into());
            self
        }

        /// Sets the value of [speed_mbps][crate::model::UpdateProviderGatewayRequest::speed_mbps].
        pub fn set_speed_mbps<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<i64>,
        {
            self.0.request.speed_mbps = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [speed_mbps][crate::model::UpdateProviderGatewayRequest::speed_mbps].
        pub fn set_or_clear_speed_mbps<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i64>,
        {
            self.0.request.speed_mbps = v.map(|x| x.into());
            self
        }

        /// Sets the value of [vlan][crate::model::UpdateProviderGatewayRequest::vlan].
        pub fn set_vlan<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<i64>,
        {
            self.0.request.vlan = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [vlan][crate::model::UpdateProviderGatewayRequest::vlan].
        pub fn set_or_clear_vlan<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i64>,
        {
            self.0.request.vlan = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateProviderGateway {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DirectLinkProvider::list_provider_ports][crate::client::DirectLinkProvider::list_provider_ports] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_directlink_provider_v2::builder;
    /// use builder::direct_link_provider::ListProviderPorts;
    /// # async fn sample() -> gax::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let mut items = builder.by_item();
    /// while let Some(result) = items.next().await {
    ///   let item = result?;
    /// }
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> ListProviderPorts {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ListProviderPorts(RequestBuilder<crate::model::ListProviderPortsRequest>);

    impl ListProviderPorts {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DirectLinkProvider>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListProviderPortsRequest>>(
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
        ) -> Result<gax::response::Response<crate::model::ProviderPortCollection>> {
            (*self.0.stub)
                .list_provider_ports(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<crate::model::ProviderPortCollection, gax::error::Error> {
            use std::clone::Clone;
            let token = self.0.request.start.clone().unwrap_or_default();
            let execute = move |token: String| {
                let mut builder = self.clone();
                if !token.is_empty() {
                    builder.0.request = builder.0.request.set_start(token);
                }
                async move {
                    builder
                        .send()
                        .await
                        .map(|r| r.into_body().unwrap_or_default())
                }
            };
            gax::paginator::internal::new_paginator(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<crate::model::ProviderPortCollection, gax::error::Error>
        {
            self.by_page().items()
        }

        /// Sets the value of [version][crate::model::ListProviderPortsRequest::version].
        ///
        /// This is a **required** field for requests.
        pub fn set_version<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.version = v.into();
            self
        }

        /// Sets the value of [start][crate::model::ListProviderPortsRequest::start].
        pub fn set_start<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.start = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [start][crate::model::ListProviderPortsRequest::start].
        pub fn set_or_clear_start<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.start = v.map(|x| x.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListProviderPortsRequest::limit].
        pub fn set_limit<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<i64>,
        {
            self.0.request.limit = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [limit][crate::model::ListProviderPortsRequest::limit].
        pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i64>,
        {
            self.0.request.limit = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListProviderPorts {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DirectLinkProvider::get_provider_port][crate::client::DirectLinkProvider::get_provider_port] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_directlink_provider_v2::builder;
    /// use builder::direct_link_provider::GetProviderPort;
    /// # async fn sample() -> gax::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> GetProviderPort {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetProviderPort(RequestBuilder<crate::model::GetProviderPortRequest>);

    impl GetProviderPort {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DirectLinkProvider>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetProviderPortRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::ProviderPort>> {
            (*self.0.stub)
                .get_provider_port(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [version][crate::model::GetProviderPortRequest::version].
        ///
        /// This is a **required** field for requests.
        pub fn set_version<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.version = v.into();
            self
        }

        /// Sets the value of [id][crate::model::GetProviderPortRequest::id].
        ///
        /// This is a **required** field for requests.
        pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.id = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetProviderPort {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }
}
