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

//! Traits to mock the clients in this library.
//!
//! Application developers may need to mock the clients in this library to test
//! how their application works with different (and sometimes hard to trigger)
//! client and service behavior. Such test can define mocks implementing the
//! trait(s) defined in this module, initialize the client with an instance of
//! this mock in their tests, and verify their application responds as expected.

#![allow(rustdoc::broken_intra_doc_links)]

pub(crate) mod dynamic;

/// Defines the trait used to implement [super::client::SslCertificate].
///
/// Application developers may need to implement this trait to mock
/// `client::SslCertificate`. In other use-cases, application developers only
/// use `client::SslCertificate` and need not be concerned with this trait or
/// its implementations.
///
/// Services gain new RPCs routinely. Consequently, this trait gains new methods
/// too. To avoid breaking applications the trait provides a default
/// implementation of each method. Most of these implementations just return an
/// error.
pub trait SslCertificate: std::fmt::Debug + Send + Sync {
    /// Implements [super::client::SslCertificate::list_certificates].
    fn list_certificates(
        &self,
        _req: crate::model::ListCertificatesRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::ListCertificateResp>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::SslCertificate::order_certificate].
    fn order_certificate(
        &self,
        _req: crate::model::OrderCertificateRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::DedicatedCertificateResp>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::SslCertificate::delete_certificate].
    fn delete_certificate(
        &self,
        _req: crate::model::DeleteCertificateRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::DeleteCertificateResp>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::SslCertificate::get_ssl_setting].
    fn get_ssl_setting(
        &self,
        _req: crate::model::GetSslSettingRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::SettingResp>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::SslCertificate::change_ssl_setting].
    fn change_ssl_setting(
        &self,
        _req: crate::model::ChangeSslSettingRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::SettingResp>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::SslCertificate::list_custom_certificates].
    fn list_custom_certificates(
        &self,
        _req: crate::model::ListCustomCertificatesRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::ListCustomCertsResp>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::SslCertificate::upload_custom_certificate].
    fn upload_custom_certificate(
        &self,
        _req: crate::model::UploadCustomCertificateRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::CustomCertResp>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::SslCertificate::get_custom_certificate].
    fn get_custom_certificate(
        &self,
        _req: crate::model::GetCustomCertificateRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::CustomCertResp>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::SslCertificate::update_custom_certificate].
    fn update_custom_certificate(
        &self,
        _req: crate::model::UpdateCustomCertificateRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::CustomCertResp>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::SslCertificate::delete_custom_certificate].
    fn delete_custom_certificate(
        &self,
        _req: crate::model::DeleteCustomCertificateRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::DeleteCertificateResp>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::SslCertificate::change_certificate_priority].
    fn change_certificate_priority(
        &self,
        _req: crate::model::ChangeCertificatePriorityRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::ListCustomCertsResp>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::SslCertificate::get_universal_certificate_setting].
    fn get_universal_certificate_setting(
        &self,
        _req: crate::model::GetUniversalCertificateSettingRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::UniversalSettingResp>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::SslCertificate::change_universal_certificate_setting].
    fn change_universal_certificate_setting(
        &self,
        _req: crate::model::ChangeUniversalCertificateSettingRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::UniversalSettingResp>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::SslCertificate::get_tls12_setting].
    fn get_tls12_setting(
        &self,
        _req: crate::model::GetTls12SettingRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::SettingResp>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::SslCertificate::change_tls12_setting].
    fn change_tls12_setting(
        &self,
        _req: crate::model::ChangeTls12SettingRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::SettingResp>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::SslCertificate::get_tls13_setting].
    fn get_tls13_setting(
        &self,
        _req: crate::model::GetTls13SettingRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::SettingResp>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::SslCertificate::change_tls13_setting].
    fn change_tls13_setting(
        &self,
        _req: crate::model::ChangeTls13SettingRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::SettingResp>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }
}
