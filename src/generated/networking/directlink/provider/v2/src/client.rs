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

/// Implements a client for the Direct Link Provider API.
///
/// # Example
/// ```no_run
/// # async fn sample() -> anyhow::Result<()> {
/// # use ibm_cloud_networking_directlink_provider_v2::client::DirectLinkProvider;
/// let client = DirectLinkProvider::builder().build().await?;
/// let mut items = client.list_provider_ports().by_item();
/// while let Some(port) = items.next().await {
///     let port = port?;
///     println!("{} at {}", port.label, port.location_display_name);
/// }
/// # Ok(()) }
/// ```
///
/// # Service Description
///
/// Direct Link Connect providers use this API to manage the gateways they
/// create on behalf of IBM Cloud customers, and to inspect their ports.
///
/// # Configuration
///
/// To configure `DirectLinkProvider` use the `with_*` methods in the type returned
/// by [builder()][DirectLinkProvider::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://directlink.cloud.ibm.com/provider/v2`). Applications can use
///   this to connect to private endpoints, or to test against a fake server.
/// * [with_credentials()]: by default this client reads the
///   `DIRECT_LINK_PROVIDER_*` environment variables to create credentials.
///   Applications can use this method to provide their own credentials.
///
/// Every request carries the API version, [DEFAULT_VERSION][crate::DEFAULT_VERSION]
/// unless changed with [with_version()][DirectLinkProvider::with_version].
///
/// [with_endpoint()]: super::builder::direct_link_provider::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::direct_link_provider::ClientBuilder::with_credentials
///
/// # Pooling and Cloning
///
/// `DirectLinkProvider` holds a connection pool internally, it is advised to
/// create one and reuse it. You do not need to wrap `DirectLinkProvider` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[derive(Clone, Debug)]
pub struct DirectLinkProvider {
    inner: std::sync::Arc<dyn super::stub::dynamic::DirectLinkProvider>,
    version: std::string::String,
}

impl DirectLinkProvider {
    /// Returns a builder for [DirectLinkProvider].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use ibm_cloud_networking_directlink_provider_v2::client::DirectLinkProvider;
    /// let client = DirectLinkProvider::builder()
    ///     .with_credentials(auth::credentials::no_auth::Builder::new().build())
    ///     .build()
    ///     .await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::direct_link_provider::ClientBuilder {
        gax::client_builder::internal::new_builder(
            super::builder::direct_link_provider::client::Factory,
        )
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::DirectLinkProvider + 'static,
    {
        Self {
            inner: std::sync::Arc::new(stub),
            version: crate::DEFAULT_VERSION.to_string(),
        }
    }

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner = Self::build_inner(config).await?;
        Ok(Self {
            inner,
            version: crate::DEFAULT_VERSION.to_string(),
        })
    }

    async fn build_inner(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<std::sync::Arc<dyn super::stub::dynamic::DirectLinkProvider>>
    {
        if conf.tracing {
            return Ok(std::sync::Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(std::sync::Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::DirectLinkProvider> {
        super::transport::DirectLinkProvider::new(conf).await
    }

    async fn build_with_tracing(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::DirectLinkProvider> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::DirectLinkProvider::new)
    }

    /// Returns a copy of this client that sends `version` with each request.
    ///
    /// The copy shares the connection pool with this client. Changing the
    /// version of the copy does not affect this client.
    ///
    /// ```
    /// # use ibm_cloud_networking_directlink_provider_v2::client::DirectLinkProvider;
    /// # fn sample(client: &DirectLinkProvider) {
    /// let client = client.with_version("2020-03-31");
    /// assert_eq!(client.version(), "2020-03-31");
    /// # }
    /// ```
    pub fn with_version<V: Into<std::string::String>>(&self, v: V) -> Self {
        Self {
            inner: self.inner.clone(),
            version: v.into(),
        }
    }

    /// The API version sent with each request.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Lists all Direct Link Connect gateways created by this provider.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_directlink_provider_v2::client::DirectLinkProvider;
    /// # async fn sample(client: &DirectLinkProvider) -> gax::Result<()> {
    /// let mut items = client.list_provider_gateways().set_limit(50).by_item();
    /// while let Some(gateway) = items.next().await {
    ///     let gateway = gateway?;
    ///     println!("{} {}", gateway.id, gateway.name);
    /// }
    /// # Ok(()) }
    /// ```
    pub fn list_provider_gateways(
        &self,
    ) -> super::builder::direct_link_provider::ListProviderGateways {
        super::builder::direct_link_provider::ListProviderGateways::new(self.inner.clone())
            .set_version(self.version.clone())
    }

    /// Creates a Direct Link Connect gateway for the given customer account.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_directlink_provider_v2::client::DirectLinkProvider;
    /// # use ibm_cloud_networking_directlink_provider_v2::model::ProviderGatewayPortIdentity;
    /// # async fn sample(client: &DirectLinkProvider) -> gax::Result<()> {
    /// let response = client
    ///     .create_provider_gateway()
    ///     .set_bgp_asn(64999)
    ///     .set_customer_account_id("57a7d05f36894e3cb9b46a43556d903e")
    ///     .set_name("my-gateway")
    ///     .set_port(ProviderGatewayPortIdentity::new().set_id("fffdcb1a-fee4-41c7-9e11-9cd99e65c777"))
    ///     .set_speed_mbps(1000)
    ///     .send()
    ///     .await?;
    /// println!("{:?}", response.body());
    /// # Ok(()) }
    /// ```
    pub fn create_provider_gateway(
        &self,
    ) -> super::builder::direct_link_provider::CreateProviderGateway {
        super::builder::direct_link_provider::CreateProviderGateway::new(self.inner.clone())
            .set_version(self.version.clone())
    }

    /// Deletes a Direct Link Connect gateway.
    ///
    /// The response body is set when the deletion requires the customer's
    /// approval (status 202), and absent when the gateway is deleted
    /// immediately (status 204).
    pub fn delete_provider_gateway(
        &self,
        id: impl Into<std::string::String>,
    ) -> super::builder::direct_link_provider::DeleteProviderGateway {
        super::builder::direct_link_provider::DeleteProviderGateway::new(self.inner.clone())
            .set_version(self.version.clone())
            .set_id(id.into())
    }

    /// Gets a Direct Link Connect gateway.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_directlink_provider_v2::client::DirectLinkProvider;
    /// # async fn sample(client: &DirectLinkProvider) -> gax::Result<()> {
    /// let response = client.get_provider_gateway("0a06fb9b-820f-4c44-8a31-77f1f0806d28").send().await?;
    /// if let Some(gateway) = response.body() {
    ///     println!("{}", gateway.operational_status);
    /// }
    /// # Ok(()) }
    /// ```
    pub fn get_provider_gateway(
        &self,
        id: impl Into<std::string::String>,
    ) -> super::builder::direct_link_provider::GetProviderGateway {
        super::builder::direct_link_provider::GetProviderGateway::new(self.inner.clone())
            .set_version(self.version.clone())
            .set_id(id.into())
    }

    /// Updates a Direct Link Connect gateway.
    ///
    /// Changes to the speed or VLAN may require the customer's approval.
    pub fn update_provider_gateway(
        &self,
        id: impl Into<std::string::String>,
    ) -> super::builder::direct_link_provider::UpdateProviderGateway {
        super::builder::direct_link_provider::UpdateProviderGateway::new(self.inner.clone())
            .set_version(self.version.clone())
            .set_id(id.into())
    }

    /// Lists the ports owned by this provider.
    pub fn list_provider_ports(&self) -> super::builder::direct_link_provider::ListProviderPorts {
        super::builder::direct_link_provider::ListProviderPorts::new(self.inner.clone())
            .set_version(self.version.clone())
    }

    /// Gets a provider port.
    pub fn get_provider_port(
        &self,
        id: impl Into<std::string::String>,
    ) -> super::builder::direct_link_provider::GetProviderPort {
        super::builder::direct_link_provider::GetProviderPort::new(self.inner.clone())
            .set_version(self.version.clone())
            .set_id(id.into())
    }
}
