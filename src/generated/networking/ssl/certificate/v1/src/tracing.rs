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

/// Implements a [SslCertificate](super::stub::SslCertificate) decorator for logging and tracing.
#[derive(Clone, Debug)]
pub struct SslCertificate<T>
where
    T: super::stub::SslCertificate + std::fmt::Debug + Send + Sync,
{
    inner: T,
}

impl<T> SslCertificate<T>
where
    T: super::stub::SslCertificate + std::fmt::Debug + Send + Sync,
{
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T> super::stub::SslCertificate for SslCertificate<T>
where
    T: super::stub::SslCertificate + std::fmt::Debug + Send + Sync,
{
    #[tracing::instrument(level = "info", ret)]
    async fn list_certificates(
        &self,
        req: crate::model::ListCertificatesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListCertificateResp>> {
        self.inner.list_certificates(req, options).await
    }

    #[tracing::instrument(level = "info", ret)]
    async fn order_certificate(
        &self,
        req: crate::model::OrderCertificateRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::DedicatedCertificateResp>> {
        self.inner.order_certificate(req, options).await
    }

    #[tracing::instrument(level = "info", ret)]
    async fn delete_certificate(
        &self,
        req: crate::model::DeleteCertificateRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::DeleteCertificateResp>> {
        self.inner.delete_certificate(req, options).await
    }

    #[tracing::instrument(level = "info", ret)]
    async fn get_ssl_setting(
        &self,
        req: crate::model::GetSslSettingRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::SettingResp>> {
        self.inner.get_ssl_setting(req, options).await
    }

    #[tracing::instrument(level = "info", ret)]
    async fn change_ssl_setting(
        &self,
        req: crate::model::ChangeSslSettingRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::SettingResp>> {
        self.inner.change_ssl_setting(req, options).await
    }

    #[tracing::instrument(level = "info", ret)]
    async fn list_custom_certificates(
        &self,
        req: crate::model::ListCustomCertificatesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListCustomCertsResp>> {
        self.inner.list_custom_certificates(req, options).await
    }

    #[tracing::instrument(level = "info", ret)]
    async fn upload_custom_certificate(
        &self,
        req: crate::model::UploadCustomCertificateRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::CustomCertResp>> {
        self.inner.upload_custom_certificate(req, options).await
    }

    #[tracing::instrument(level = "info", ret)]
    async fn get_custom_certificate(
        &self,
        req: crate::model::GetCustomCertificateRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::CustomCertResp>> {
        self.inner.get_custom_certificate(req, options).await
    }

    #[tracing::instrument(level = "info", ret)]
    async fn update_custom_certificate(
        &self,
        req: crate::model::UpdateCustomCertificateRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::CustomCertResp>> {
        self.inner.update_custom_certificate(req, options).await
    }

    #[tracing::instrument(level = "info", ret)]
    async fn delete_custom_certificate(
        &self,
        req: crate::model::DeleteCustomCertificateRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::DeleteCertificateResp>> {
        self.inner.delete_custom_certificate(req, options).await
    }

    #[tracing::instrument(level = "info", ret)]
    async fn change_certificate_priority(
        &self,
        req: crate::model::ChangeCertificatePriorityRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListCustomCertsResp>> {
        self.inner.change_certificate_priority(req, options).await
    }

    #[tracing::instrument(level = "info", ret)]
    async fn get_universal_certificate_setting(
        &self,
        req: crate::model::GetUniversalCertificateSettingRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::UniversalSettingResp>> {
        self.inner.get_universal_certificate_setting(req, options).await
    }

    #[tracing::instrument(level = "info", ret)]
    async fn change_universal_certificate_setting(
        &self,
        req: crate::model::ChangeUniversalCertificateSettingRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::UniversalSettingResp>> {
        self.inner.change_universal_certificate_setting(req, options).await
    }

    #[tracing::instrument(level = "info", ret)]
    async fn get_tls12_setting(
        &self,
        req: crate::model::GetTls12SettingRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::SettingResp>> {
        self.inner.get_tls12_setting(req, options).await
    }

    #[tracing::instrument(level = "info", ret)]
    async fn change_tls12_setting(
        &self,
        req: crate::model::ChangeTls12SettingRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::SettingResp>> {
        self.inner.change_tls12_setting(req, options).await
    }

    #[tracing::instrument(level = "info", ret)]
    async fn get_tls13_setting(
        &self,
        req: crate::model::GetTls13SettingRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::SettingResp>> {
        self.inner.get_tls13_setting(req, options).await
    }

    #[tracing::instrument(level = "info", ret)]
    async fn change_tls13_setting(
        &self,
        req: crate::model::ChangeTls13SettingRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::SettingResp>> {
        self.inner.change_tls13_setting(req, options).await
    }
}
