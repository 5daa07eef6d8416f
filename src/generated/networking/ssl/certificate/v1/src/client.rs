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

/// Implements a client for the SSL Certificate API.
///
/// # Example
/// ```no_run
/// # async fn sample() -> anyhow::Result<()> {
/// # use ibm_cloud_networking_ssl_certificate_v1::client::SslCertificate;
/// let client = SslCertificate::builder().build().await?;
/// let response = client
///     .get_tls13_setting("crn:v1:bluemix:public:internet-svcs:global:a/abc:123::", "zone-1")
///     .send()
///     .await?;
/// println!("{:?}", response.body());
/// # Ok(()) }
/// ```
///
/// # Service Description
///
/// Manages the certificate packs, custom certificates, and TLS settings of
/// an IBM Cloud Internet Services (CIS) zone.
///
/// # Configuration
///
/// To configure `SslCertificate` use the `with_*` methods in the type returned
/// by [builder()][SslCertificate::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://api.cis.cloud.ibm.com`). Applications can use this to connect
///   to private endpoints, or to test against a fake server.
/// * [with_credentials()]: by default this client reads the
///   `SSL_CERTIFICATE_API_*` environment variables to create credentials.
///   Applications can use this method to provide their own credentials.
///
/// [with_endpoint()]: super::builder::ssl_certificate::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::ssl_certificate::ClientBuilder::with_credentials
///
/// # Pooling and Cloning
///
/// `SslCertificate` holds a connection pool internally, it is advised to
/// create one and reuse it. You do not need to wrap `SslCertificate` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[derive(Clone, Debug)]
pub struct SslCertificate {
    inner: std::sync::Arc<dyn super::stub::dynamic::SslCertificate>,
}

impl SslCertificate {
    /// Returns a builder for [SslCertificate].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use ibm_cloud_networking_ssl_certificate_v1::client::SslCertificate;
    /// let client = SslCertificate::builder()
    ///     .with_credentials(auth::credentials::no_auth::Builder::new().build())
    ///     .build()
    ///     .await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::ssl_certificate::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::ssl_certificate::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::SslCertificate + 'static,
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
    ) -> gax::client_builder::Result<std::sync::Arc<dyn super::stub::dynamic::SslCertificate>> {
        if conf.tracing {
            return Ok(std::sync::Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(std::sync::Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::SslCertificate> {
        super::transport::SslCertificate::new(conf).await
    }

    async fn build_with_tracing(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::SslCertificate> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::SslCertificate::new)
    }

    /// Lists the certificate packs in a zone.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_ssl_certificate_v1::client::SslCertificate;
    /// # async fn sample(client: &SslCertificate) -> gax::Result<()> {
    /// let response = client
    ///     .list_certificates("crn:v1:bluemix:public:internet-svcs:global:a/abc:123::", "zone-1")
    ///     .set_x_correlation_id("my-trace-id")
    ///     .send()
    ///     .await?;
    /// for pack in response.into_body().map(|r| r.result).unwrap_or_default() {
    ///     println!("{} {:?}", pack.id, pack.hosts);
    /// }
    /// # Ok(()) }
    /// ```
    pub fn list_certificates(
        &self,
        crn: impl Into<std::string::String>,
        zone_identifier: impl Into<std::string::String>,
    ) -> super::builder::ssl_certificate::ListCertificates {
        super::builder::ssl_certificate::ListCertificates::new(self.inner.clone())
            .set_crn(crn.into())
            .set_zone_identifier(zone_identifier.into())
    }

    /// Orders a dedicated certificate for the given hosts.
    pub fn order_certificate(
        &self,
        crn: impl Into<std::string::String>,
        zone_identifier: impl Into<std::string::String>,
    ) -> super::builder::ssl_certificate::OrderCertificate {
        super::builder::ssl_certificate::OrderCertificate::new(self.inner.clone())
            .set_crn(crn.into())
            .set_zone_identifier(zone_identifier.into())
    }

    /// Deletes a certificate pack.
    pub fn delete_certificate(
        &self,
        crn: impl Into<std::string::String>,
        zone_identifier: impl Into<std::string::String>,
        cert_identifier: impl Into<std::string::String>,
    ) -> super::builder::ssl_certificate::DeleteCertificate {
        super::builder::ssl_certificate::DeleteCertificate::new(self.inner.clone())
            .set_crn(crn.into())
            .set_zone_identifier(zone_identifier.into())
            .set_cert_identifier(cert_identifier.into())
    }

    /// Gets the SSL mode of the zone.
    pub fn get_ssl_setting(
        &self,
        crn: impl Into<std::string::String>,
        zone_identifier: impl Into<std::string::String>,
    ) -> super::builder::ssl_certificate::GetSslSetting {
        super::builder::ssl_certificate::GetSslSetting::new(self.inner.clone())
            .set_crn(crn.into())
            .set_zone_identifier(zone_identifier.into())
    }

    /// Changes the SSL mode of the zone.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_networking_ssl_certificate_v1::client::SslCertificate;
    /// # use ibm_cloud_networking_ssl_certificate_v1::model::ssl_mode;
    /// # async fn sample(client: &SslCertificate) -> gax::Result<()> {
    /// let response = client
    ///     .change_ssl_setting("crn:v1:bluemix:public:internet-svcs:global:a/abc:123::", "zone-1")
    ///     .set_value(ssl_mode::STRICT)
    ///     .send()
    ///     .await?;
    /// # Ok(()) }
    /// ```
    pub fn change_ssl_setting(
        &self,
        crn: impl Into<std::string::String>,
        zone_identifier: impl Into<std::string::String>,
    ) -> super::builder::ssl_certificate::ChangeSslSetting {
        super::builder::ssl_certificate::ChangeSslSetting::new(self.inner.clone())
            .set_crn(crn.into())
            .set_zone_identifier(zone_identifier.into())
    }

    /// Lists the custom certificates in a zone.
    pub fn list_custom_certificates(
        &self,
        crn: impl Into<std::string::String>,
        zone_identifier: impl Into<std::string::String>,
    ) -> super::builder::ssl_certificate::ListCustomCertificates {
        super::builder::ssl_certificate::ListCustomCertificates::new(self.inner.clone())
            .set_crn(crn.into())
            .set_zone_identifier(zone_identifier.into())
    }

    /// Uploads a custom certificate.
    pub fn upload_custom_certificate(
        &self,
        crn: impl Into<std::string::String>,
        zone_identifier: impl Into<std::string::String>,
    ) -> super::builder::ssl_certificate::UploadCustomCertificate {
        super::builder::ssl_certificate::UploadCustomCertificate::new(self.inner.clone())
            .set_crn(crn.into())
            .set_zone_identifier(zone_identifier.into())
    }

    /// Gets a custom certificate.
    pub fn get_custom_certificate(
        &self,
        crn: impl Into<std::string::String>,
        zone_identifier: impl Into<std::string::String>,
        custom_cert_id: impl Into<std::string::String>,
    ) -> super::builder::ssl_certificate::GetCustomCertificate {
        super::builder::ssl_certificate::GetCustomCertificate::new(self.inner.clone())
            .set_crn(crn.into())
            .set_zone_identifier(zone_identifier.into())
            .set_custom_cert_id(custom_cert_id.into())
    }

    /// Replaces the certificate, the private key, or the settings of a custom certificate.
    pub fn update_custom_certificate(
        &self,
        crn: impl Into<std::string::String>,
        zone_identifier: impl Into<std::string::String>,
        custom_cert_id: impl Into<std::string::String>,
    ) -> super::builder::ssl_certificate::UpdateCustomCertificate {
        super::builder::ssl_certificate::UpdateCustomCertificate::new(self.inner.clone())
            .set_crn(crn.into())
            .set_zone_identifier(zone_identifier.into())
            .set_custom_cert_id(custom_cert_id.into())
    }

    /// Deletes a custom certificate.
    pub fn delete_custom_certificate(
        &self,
        crn: impl Into<std::string::String>,
        zone_identifier: impl Into<std::string::String>,
        custom_cert_id: impl Into<std::string::String>,
    ) -> super::builder::ssl_certificate::DeleteCustomCertificate {
        super::builder::ssl_certificate::DeleteCustomCertificate::new(self.inner.clone())
            .set_crn(crn.into())
            .set_zone_identifier(zone_identifier.into())
            .set_custom_cert_id(custom_cert_id.into())
    }

    /// Changes the priority of the custom certificates in a zone.
    pub fn change_certificate_priority(
        &self,
        crn: impl Into<std::string::String>,
        zone_identifier: impl Into<std::string::String>,
    ) -> super::builder::ssl_certificate::ChangeCertificatePriority {
        super::builder::ssl_certificate::ChangeCertificatePriority::new(self.inner.clone())
            .set_crn(crn.into())
            .set_zone_identifier(zone_identifier.into())
    }

    /// Gets the universal certificate setting of the zone.
    pub fn get_universal_certificate_setting(
        &self,
        crn: impl Into<std::string::String>,
        zone_identifier: impl Into<std::string::String>,
    ) -> super::builder::ssl_certificate::GetUniversalCertificateSetting {
        super::builder::ssl_certificate::GetUniversalCertificateSetting::new(self.inner.clone())
            .set_crn(crn.into())
            .set_zone_identifier(zone_identifier.into())
    }

    /// Enables or disables the universal certificate of the zone.
    pub fn change_universal_certificate_setting(
        &self,
        crn: impl Into<std::string::String>,
        zone_identifier: impl Into<std::string::String>,
    ) -> super::builder::ssl_certificate::ChangeUniversalCertificateSetting {
        super::builder::ssl_certificate::ChangeUniversalCertificateSetting::new(self.inner.clone())
            .set_crn(crn.into())
            .set_zone_identifier(zone_identifier.into())
    }

    /// Gets the TLS 1.2 only setting of the zone.
    pub fn get_tls12_setting(
        &self,
        crn: impl Into<std::string::String>,
        zone_identifier: impl Into<std::string::String>,
    ) -> super::builder::ssl_certificate::GetTls12Setting {
        super::builder::ssl_certificate::GetTls12Setting::new(self.inner.clone())
            .set_crn(crn.into())
            .set_zone_identifier(zone_identifier.into())
    }

    /// Changes the TLS 1.2 only setting of the zone.
    pub fn change_tls12_setting(
        &self,
        crn: impl Into<std::string::String>,
        zone_identifier: impl Into<std::string::String>,
    ) -> super::builder::ssl_certificate::ChangeTls12Setting {
        super::builder::ssl_certificate::ChangeTls12Setting::new(self.inner.clone())
            .set_crn(crn.into())
            .set_zone_identifier(zone_identifier.into())
    }

    /// Gets the TLS 1.3 setting of the zone.
    pub fn get_tls13_setting(
        &self,
        crn: impl Into<std::string::String>,
        zone_identifier: impl Into<std::string::String>,
    ) -> super::builder::ssl_certificate::GetTls13Setting {
        super::builder::ssl_certificate::GetTls13Setting::new(self.inner.clone())
            .set_crn(crn.into())
            .set_zone_identifier(zone_identifier.into())
    }

    /// Changes the TLS 1.3 setting of the zone.
    pub fn change_tls13_setting(
        &self,
        crn: impl Into<std::string::String>,
        zone_identifier: impl Into<std::string::String>,
    ) -> super::builder::ssl_certificate::ChangeTls13Setting {
        super::builder::ssl_certificate::ChangeTls13Setting::new(self.inner.clone())
            .set_crn(crn.into())
            .set_zone_identifier(zone_identifier.into())
    }
}
