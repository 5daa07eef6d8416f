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

/// A dyn-compatible, crate-private version of [super::SslCertificate].
#[async_trait::async_trait]
pub trait SslCertificate: std::fmt::Debug + Send + Sync {
    async fn list_certificates(
        &self,
        req: crate::model::ListCertificatesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ListCertificateResp>>;

    async fn order_certificate(
        &self,
        req: crate::model::OrderCertificateRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DedicatedCertificateResp>>;

    async fn delete_certificate(
        &self,
        req: crate::model::DeleteCertificateRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DeleteCertificateResp>>;

    async fn get_ssl_setting(
        &self,
        req: crate::model::GetSslSettingRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::SettingResp>>;

    async fn change_ssl_setting(
        &self,
        req: crate::model::ChangeSslSettingRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::SettingResp>>;

    async fn list_custom_certificates(
        &self,
        req: crate::model::ListCustomCertificatesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ListCustomCertsResp>>;

    async fn upload_custom_certificate(
        &self,
        req: crate::model::UploadCustomCertificateRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::CustomCertResp>>;

    async fn get_custom_certificate(
        &self,
        req: crate::model::GetCustomCertificateRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::CustomCertResp>>;

    async fn update_custom_certificate(
        &self,
        req: crate::model::UpdateCustomCertificateRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::CustomCertResp>>;

    async fn delete_custom_certificate(
        &self,
        req: crate::model::DeleteCustomCertificateRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DeleteCertificateResp>>;

    async fn change_certificate_priority(
        &self,
        req: crate::model::ChangeCertificatePriorityRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ListCustomCertsResp>>;

    async fn get_universal_certificate_setting(
        &self,
        req: crate::model::GetUniversalCertificateSettingRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::UniversalSettingResp>>;

    async fn change_universal_certificate_setting(
        &self,
        req: crate::model::ChangeUniversalCertificateSettingRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::UniversalSettingResp>>;

    async fn get_tls12_setting(
        &self,
        req: crate::model::GetTls12SettingRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::SettingResp>>;

    async fn change_tls12_setting(
        &self,
        req: crate::model::ChangeTls12SettingRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::SettingResp>>;

    async fn get_tls13_setting(
        &self,
        req: crate::model::GetTls13SettingRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::SettingResp>>;

    async fn change_tls13_setting(
        &self,
        req: crate::model::ChangeTls13SettingRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::SettingResp>>;
}

/// All implementations of [super::SslCertificate] also implement [SslCertificate].
#[async_trait::async_trait]
impl<T: super::SslCertificate> SslCertificate for T {
    /// Forwards the call to the implementation provided by `T`.
    async fn list_certificates(
        &self,
        req: crate::model::ListCertificatesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ListCertificateResp>> {
        T::list_certificates(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn order_certificate(
        &self,
        req: crate::model::OrderCertificateRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DedicatedCertificateResp>> {
        T::order_certificate(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete_certificate(
        &self,
        req: crate::model::DeleteCertificateRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DeleteCertificateResp>> {
        T::delete_certificate(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_ssl_setting(
        &self,
        req: crate::model::GetSslSettingRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::SettingResp>> {
        T::get_ssl_setting(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn change_ssl_setting(
        &self,
        req: crate::model::ChangeSslSettingRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::SettingResp>> {
        T::change_ssl_setting(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_custom_certificates(
        &self,
        req: crate::model::ListCustomCertificatesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ListCustomCertsResp>> {
        T::list_custom_certificates(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn upload_custom_certificate(
        &self,
        req: crate::model::UploadCustomCertificateRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::CustomCertResp>> {
        T::upload_custom_certificate(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_custom_certificate(
        &self,
        req: crate::model::GetCustomCertificateRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::CustomCertResp>> {
        T::get_custom_certificate(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn update_custom_certificate(
        &self,
        req: crate::model::UpdateCustomCertificateRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::CustomCertResp>> {
        T::update_custom_certificate(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete_custom_certificate(
        &self,
        req: crate::model::DeleteCustomCertificateRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DeleteCertificateResp>> {
        T::delete_custom_certificate(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn change_certificate_priority(
        &self,
        req: crate::model::ChangeCertificatePriorityRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ListCustomCertsResp>> {
        T::change_certificate_priority(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_universal_certificate_setting(
        &self,
        req: crate::model::GetUniversalCertificateSettingRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::UniversalSettingResp>> {
        T::get_universal_certificate_setting(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn change_universal_certificate_setting(
        &self,
        req: crate::model::ChangeUniversalCertificateSettingRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::UniversalSettingResp>> {
        T::change_universal_certificate_setting(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_tls12_setting(
        &self,
        req: crate::model::GetTls12SettingRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::SettingResp>> {
        T::get_tls12_setting(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn change_tls12_setting(
        &self,
        req: crate::model::ChangeTls12SettingRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::SettingResp>> {
        T::change_tls12_setting(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_tls13_setting(
        &self,
        req: crate::model::GetTls13SettingRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::SettingResp>> {
        T::get_tls13_setting(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn change_tls13_setting(
        &self,
        req: crate::model::ChangeTls13SettingRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::SettingResp>> {
        T::change_tls13_setting(self, req, options).await
    }
}
