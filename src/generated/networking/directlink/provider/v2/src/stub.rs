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

/// Defines the trait used to implement [super::client::DirectLinkProvider].
///
/// Application developers may need to implement this trait to mock
/// `client::DirectLinkProvider`. In other use-cases, application developers only
/// use `client::DirectLinkProvider` and need not be concerned with this trait or
/// its implementations.
///
/// Services gain new RPCs routinely. Consequently, this trait gains new methods
/// too. To avoid breaking applications the trait provides a default
/// implementation of each method. Most of these implementations just return an
/// error.
pub trait DirectLinkProvider: std::fmt::Debug + Send + Sync {
    /// Implements [super::client::DirectLinkProvider::list_provider_gateways].
    fn list_provider_gateways(
        &self,
        _req: crate::model::ListProviderGatewaysRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::ProviderGatewayCollection>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::DirectLinkProvider::create_provider_gateway].
    fn create_provider_gateway(
        &self,
        _req: crate::model::CreateProviderGatewayRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::ProviderGateway>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::DirectLinkProvider::delete_provider_gateway].
    fn delete_provider_gateway(
        &self,
        _req: crate::model::DeleteProviderGatewayRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::ProviderGateway>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::DirectLinkProvider::get_provider_gateway].
    fn get_provider_gateway(
        &self,
        _req: crate::model::GetProviderGatewayRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::ProviderGateway>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::DirectLinkProvider::update_provider_gateway].
    fn update_provider_gateway(
        &self,
        _req: crate::model::UpdateProviderGatewayRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::ProviderGateway>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::DirectLinkProvider::list_provider_ports].
    fn list_provider_ports(
        &self,
        _req: crate::model::ListProviderPortsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::ProviderPortCollection>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::DirectLinkProvider::get_provider_port].
    fn get_provider_port(
        &self,
        _req: crate::model::GetProviderPortRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::ProviderPort>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }
}
