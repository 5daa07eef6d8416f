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

/// Implements [SslCertificate](super::stub::SslCertificate) using a [gaxi::http::ReqwestClient].
#[derive(Clone)]
pub struct SslCertificate {
    inner: gaxi::http::ReqwestClient,
}

impl std::fmt::Debug for SslCertificate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("SslCertificate")
            .field("inner", &self.inner)
            .finish()
    }
}

// Invalid values are reported before any request is made.
fn correlation_id(value: &str) -> Result<reqwest::header::HeaderValue> {
    reqwest::header::HeaderValue::from_str(value).map_err(gax::error::Error::validation)
}

impl SslCertificate {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner =
            gaxi::http::ReqwestClient::new(config, crate::DEFAULT_HOST, crate::SERVICE_NAME).await?;
        Ok(Self { inner })
    }
}

impl super::stub::SslCertificate for SslCertificate {
    async fn list_certificates(
        &self,
        req: crate::model::ListCertificatesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListCertificateResp>> {
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/v1/{}/zones/{}/ssl/certificate_packs",
            gaxi::path_parameter::required("crn", &req.crn)?,
            gaxi::path_parameter::required("zone_identifier", &req.zone_identifier)?,
        );
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = match &req.x_correlation_id {
            Some(v) => builder.header("X-Correlation-ID", correlation_id(v)?),
            None => builder,
        };
        let builder = builder.header(
            X_IBMCLOUD_SDK_ANALYTICS,
            crate::info::ANALYTICS.header_value("ListCertificates"),
        );
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn order_certificate(
        &self,
        req: crate::model::OrderCertificateRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::DedicatedCertificateResp>> {
        let options = gax::options::internal::set_default_idempotency(options, false);
        let path = format!(
            "/v1/{}/zones/{}/ssl/certificate_packs",
            gaxi::path_parameter::required("crn", &req.crn)?,
            gaxi::path_parameter::required("zone_identifier", &req.zone_identifier)?,
        );
        if req.hosts.is_empty() {
            return Err(gax::path_parameter::missing("hosts"));
        }
        let body = OrderCertificateBody {
            r#type: req.r#type,
            hosts: req.hosts,
        };
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder = match &req.x_correlation_id {
            Some(v) => builder.header("X-Correlation-ID", correlation_id(v)?),
            None => builder,
        };
        let builder = builder.header(
            X_IBMCLOUD_SDK_ANALYTICS,
            crate::info::ANALYTICS.header_value("OrderCertificate"),
        );
        self.inner.execute(builder, Some(body), options).await
    }

    async fn delete_certificate(
        &self,
        req: crate::model::DeleteCertificateRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::DeleteCertificateResp>> {
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/v1/{}/zones/{}/ssl/certificate_packs/{}",
            gaxi::path_parameter::required("crn", &req.crn)?,
            gaxi::path_parameter::required("zone_identifier", &req.zone_identifier)?,
            gaxi::path_parameter::required("cert_identifier", &req.cert_identifier)?,
        );
        let builder = self.inner.builder(reqwest::Method::DELETE, path);
        let builder = match &req.x_correlation_id {
            Some(v) => builder.header("X-Correlation-ID", correlation_id(v)?),
            None => builder,
        };
        let builder = builder.header(
            X_IBMCLOUD_SDK_ANALYTICS,
            crate::info::ANALYTICS.header_value("DeleteCertificate"),
        );
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn get_ssl_setting(
        &self,
        req: crate::model::GetSslSettingRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::SettingResp>> {
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/v1/{}/zones/{}/settings/ssl",
            gaxi::path_parameter::required("crn", &req.crn)?,
            gaxi::path_parameter::required("zone_identifier", &req.zone_identifier)?,
        );
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = match &req.x_correlation_id {
            Some(v) => builder.header("X-Correlation-ID", correlation_id(v)?),
            None => builder,
        };
        let builder = builder.header(
            X_IBMCLOUD_SDK_ANALYTICS,
            crate::info::ANALYTICS.header_value("GetSslSetting"),
        );
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn change_ssl_setting(
        &self,
        req: crate::model::ChangeSslSettingRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::SettingResp>> {
        let options = gax::options::internal::set_default_idempotency(options, false);
        let path = format!(
            "/v1/{}/zones/{}/settings/ssl",
            gaxi::path_parameter::required("crn", &req.crn)?,
            gaxi::path_parameter::required("zone_identifier", &req.zone_identifier)?,
        );
        let body = ChangeSslSettingBody {
            value: req.value,
        };
        let builder = self.inner.builder(reqwest::Method::PATCH, path);
        let builder = match &req.x_correlation_id {
            Some(v) => builder.header("X-Correlation-ID", correlation_id(v)?),
            None => builder,
        };
        let builder = builder.header(
            X_IBMCLOUD_SDK_ANALYTICS,
            crate::info::ANALYTICS.header_value("ChangeSslSetting"),
        );
        self.inner.execute(builder, Some(body), options).await
    }

    async fn list_custom_certificates(
        &self,
        req: crate::model::ListCustomCertificatesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListCustomCertsResp>> {
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/v1/{}/zones/{}/custom_certificates",
            gaxi::path_parameter::required("crn", &req.crn)?,
            gaxi::path_parameter::required("zone_identifier", &req.zone_identifier)?,
        );
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = match &req.x_correlation_id {
            Some(v) => builder.header("X-Correlation-ID", correlation_id(v)?),
            None => builder,
        };
        let builder = builder.header(
            X_IBMCLOUD_SDK_ANALYTICS,
            crate::info::ANALYTICS.header_value("ListCustomCertificates"),
        );
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn upload_custom_certificate(
        &self,
        req: crate::model::UploadCustomCertificateRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::CustomCertResp>> {
        let options = gax::options::internal::set_default_idempotency(options, false);
        let path = format!(
            "/v1/{}/zones/{}/custom_certificates",
            gaxi::path_parameter::required("crn", &req.crn)?,
            gaxi::path_parameter::required("zone_identifier", &req.zone_identifier)?,
        );
        let body = UploadCustomCertificateBody {
            certificate: gax::path_parameter::required("certificate", req.certificate)?,
            private_key: gax::path_parameter::required("private_key", req.private_key)?,
            bundle_method: req.bundle_method,
            geo_restrictions: req.geo_restrictions,
        };
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder = match &req.x_correlation_id {
            Some(v) => builder.header("X-Correlation-ID", correlation_id(v)?),
            None => builder,
        };
        let builder = builder.header(
            X_IBMCLOUD_SDK_ANALYTICS,
            crate::info::ANALYTICS.header_value("UploadCustomCertificate"),
        );
        self.inner.execute(builder, Some(body), options).await
    }

    async fn get_custom_certificate(
        &self,
        req: crate::model::GetCustomCertificateRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::CustomCertResp>> {
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/v1/{}/zones/{}/custom_certificates/{}",
            gaxi::path_parameter::required("crn", &req.crn)?,
            gaxi::path_parameter::required("zone_identifier", &req.zone_identifier)?,
            gaxi::path_parameter::required("custom_cert_id", &req.custom_cert_id)?,
        );
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = match &req.x_correlation_id {
            Some(v) => builder.header("X-Correlation-ID", correlation_id(v)?),
            None => builder,
        };
        let builder = builder.header(
            X_IBMCLOUD_SDK_ANALYTICS,
            crate::info::ANALYTICS.header_value("GetCustomCertificate"),
        );
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn update_custom_certificate(
        &self,
        req: crate::model::UpdateCustomCertificateRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::CustomCertResp>> {
        let options = gax::options::internal::set_default_idempotency(options, false);
        let path = format!(
            "/v1/{}/zones/{}/custom_certificates/{}",
            gaxi::path_parameter::required("crn", &req.crn)?,
            gaxi::path_parameter::required("zone_identifier", &req.zone_identifier)?,
            gaxi::path_parameter::required("custom_cert_id", &req.custom_cert_id)?,
        );
        let body = UpdateCustomCertificateBody {
            certificate: req.certificate,
            private_key: req.private_key,
            bundle_method: req.bundle_method,
            geo_restrictions: req.geo_restrictions,
        };
        let builder = self.inner.builder(reqwest::Method::PATCH, path);
        let builder = match &req.x_correlation_id {
            Some(v) => builder.header("X-Correlation-ID", correlation_id(v)?),
            None => builder,
        };
        let builder = builder.header(
            X_IBMCLOUD_SDK_ANALYTICS,
            crate::info::ANALYTICS.header_value("UpdateCustomCertificate"),
        );
        self.inner.execute(builder, Some(body), options).await
    }

    async fn delete_custom_certificate(
        &self,
        req: crate::model::DeleteCustomCertificateRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::DeleteCertificateResp>> {
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/v1/{}/zones/{}/custom_certificates/{}",
            gaxi::path_parameter::required("crn", &req.crn)?,
            gaxi::path_parameter::required("zone_identifier", &req.zone_identifier)?,
            gaxi::path_parameter::required("custom_cert_id", &req.custom_cert_id)?,
        );
        let builder = self.inner.builder(reqwest::Method::DELETE, path);
        let builder = match &req.x_correlation_id {
            Some(v) => builder.header("X-Correlation-ID", correlation_id(v)?),
            None => builder,
        };
        let builder = builder.header(
            X_IBMCLOUD_SDK_ANALYTICS,
            crate::info::ANALYTICS.header_value("DeleteCustomCertificate"),
        );
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn change_certificate_priority(
        &self,
        req: crate::model::ChangeCertificatePriorityRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListCustomCertsResp>> {
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/v1/{}/zones/{}/custom_certificates/prioritize",
            gaxi::path_parameter::required("crn", &req.crn)?,
            gaxi::path_parameter::required("zone_identifier", &req.zone_identifier)?,
        );
        let body = ChangeCertificatePriorityBody {
            certificates: req.certificates,
        };
        let builder = self.inner.builder(reqwest::Method::PUT, path);
        let builder = match &req.x_correlation_id {
            Some(v) => builder.header("X-Correlation-ID", correlation_id(v)?),
            None => builder,
        };
        let builder = builder.header(
            X_IBMCLOUD_SDK_ANALYTICS,
            crate::info::ANALYTICS.header_value("ChangeCertificatePriority"),
        );
        self.inner.execute(builder, Some(body), options).await
    }

    async fn get_universal_certificate_setting(
        &self,
        req: crate::model::GetUniversalCertificateSettingRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::UniversalSettingResp>> {
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/v1/{}/zones/{}/ssl/universal/settings",
            gaxi::path_parameter::required("crn", &req.crn)?,
            gaxi::path_parameter::required("zone_identifier", &req.zone_identifier)?,
        );
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = match &req.x_correlation_id {
            Some(v) => builder.header("X-Correlation-ID", correlation_id(v)?),
            None => builder,
        };
        let builder = builder.header(
            X_IBMCLOUD_SDK_ANALYTICS,
            crate::info::ANALYTICS.header_value("GetUniversalCertificateSetting"),
        );
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn change_universal_certificate_setting(
        &self,
        req: crate::model::ChangeUniversalCertificateSettingRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::UniversalSettingResp>> {
        let options = gax::options::internal::set_default_idempotency(options, false);
        let path = format!(
            "/v1/{}/zones/{}/ssl/universal/settings",
            gaxi::path_parameter::required("crn", &req.crn)?,
            gaxi::path_parameter::required("zone_identifier", &req.zone_identifier)?,
        );
        let body = ChangeUniversalCertificateSettingBody {
            enabled: req.enabled,
        };
        let builder = self.inner.builder(reqwest::Method::PATCH, path);
        let builder = match &req.x_correlation_id {
            Some(v) => builder.header("X-Correlation-ID", correlation_id(v)?),
            None => builder,
        };
        let builder = builder.header(
            X_IBMCLOUD_SDK_ANALYTICS,
            crate::info::ANALYTICS.header_value("ChangeUniversalCertificateSetting"),
        );
        self.inner.execute(builder, Some(body), options).await
    }

    async fn get_tls12_setting(
        &self,
        req: crate::model::GetTls12SettingRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::SettingResp>> {
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/v1/{}/zones/{}/settings/tls_1_2_only",
            gaxi::path_parameter::required("crn", &req.crn)?,
            gaxi::path_parameter::required("zone_identifier", &req.zone_identifier)?,
        );
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = match &req.x_correlation_id {
            Some(v) => builder.header("X-Correlation-ID", correlation_id(v)?),
            None => builder,
        };
        let builder = builder.header(
            X_IBMCLOUD_SDK_ANALYTICS,
            crate::info::ANALYTICS.header_value("GetTls12Setting"),
        );
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn change_tls12_setting(
        &self,
        req: crate::model::ChangeTls12SettingRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::SettingResp>> {
        let options = gax::options::internal::set_default_idempotency(options, false);
        let path = format!(
            "/v1/{}/zones/{}/settings/tls_1_2_only",
            gaxi::path_parameter::required("crn", &req.crn)?,
            gaxi::path_parameter::required("zone_identifier", &req.zone_identifier)?,
        );
        let body = ChangeTls12SettingBody {
            value: req.value,
        };
        let builder = self.inner.builder(reqwest::Method::PATCH, path);
        let builder = match &req.x_correlation_id {
            Some(v) => builder.header("X-Correlation-ID", correlation_id(v)?),
            None => builder,
        };
        let builder = builder.header(
            X_IBMCLOUD_SDK_ANALYTICS,
            crate::info::ANALYTICS.header_value("ChangeTls12Setting"),
        );
        self.inner.execute(builder, Some(body), options).await
    }

    async fn get_tls13_setting(
        &self,
        req: crate::model::GetTls13SettingRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::SettingResp>> {
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/v1/{}/zones/{}/settings/tls_1_3",
            gaxi::path_parameter::required("crn", &req.crn)?,
            gaxi::path_parameter::required("zone_identifier", &req.zone_identifier)?,
        );
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = match &req.x_correlation_id {
            Some(v) => builder.header("X-Correlation-ID", correlation_id(v)?),
            None => builder,
        };
        let builder = builder.header(
            X_IBMCLOUD_SDK_ANALYTICS,
            crate::info::ANALYTICS.header_value("GetTls13Setting"),
        );
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn change_tls13_setting(
        &self,
        req: crate::model::ChangeTls13SettingRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::SettingResp>> {
        let options = gax::options::internal::set_default_idempotency(options, false);
        let path = format!(
            "/v1/{}/zones/{}/settings/tls_1_3",
            gaxi::path_parameter::required("crn", &req.crn)?,
            gaxi::path_parameter::required("zone_identifier", &req.zone_identifier)?,
        );
        let body = ChangeTls13SettingBody {
            value: req.value,
        };
        let builder = self.inner.builder(reqwest::Method::PATCH, path);
        let builder = match &req.x_correlation_id {
            Some(v) => builder.header("X-Correlation-ID", correlation_id(v)?),
            None => builder,
        };
        let builder = builder.header(
            X_IBMCLOUD_SDK_ANALYTICS,
            crate::info::ANALYTICS.header_value("ChangeTls13Setting"),
        );
        self.inner.execute(builder, Some(body), options).await
    }
}

#[serde_with::skip_serializing_none]
#[derive(serde::Serialize)]
struct OrderCertificateBody {
    r#type: std::option::Option<std::string::String>,
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    hosts: std::vec::Vec<std::string::String>,
}

#[serde_with::skip_serializing_none]
#[derive(serde::Serialize)]
struct ChangeSslSettingBody {
    value: std::option::Option<std::string::String>,
}

#[serde_with::skip_serializing_none]
#[derive(serde::Serialize)]
struct UploadCustomCertificateBody {
    certificate: std::string::String,
    private_key: std::string::String,
    bundle_method: std::option::Option<std::string::String>,
    geo_restrictions: std::option::Option<crate::model::CustomCertReqGeoRestrictions>,
}

#[serde_with::skip_serializing_none]
#[derive(serde::Serialize)]
struct UpdateCustomCertificateBody {
    certificate: std::option::Option<std::string::String>,
    private_key: std::option::Option<std::string::String>,
    bundle_method: std::option::Option<std::string::String>,
    geo_restrictions: std::option::Option<crate::model::CustomCertReqGeoRestrictions>,
}

#[serde_with::skip_serializing_none]
#[derive(serde::Serialize)]
struct ChangeCertificatePriorityBody {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    certificates: std::vec::Vec<crate::model::CertPriorityReqCertificatesItem>,
}

#[serde_with::skip_serializing_none]
#[derive(serde::Serialize)]
struct ChangeUniversalCertificateSettingBody {
    enabled: std::option::Option<bool>,
}

#[serde_with::skip_serializing_none]
#[derive(serde::Serialize)]
struct ChangeTls12SettingBody {
    value: std::option::Option<std::string::String>,
}

#[serde_with::skip_serializing_none]
#[derive(serde::Serialize)]
struct ChangeTls13SettingBody {
    value: std::option::Option<std::string::String>,
}
