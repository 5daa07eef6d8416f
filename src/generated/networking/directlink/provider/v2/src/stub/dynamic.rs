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

/// A dyn-compatible, crate-private version of [super::DirectLinkProvider].
#[async_trait::async_trait]
pub trait DirectLinkProvider: std::fmt::Debug + Send + Sync {
    async fn list_provider_gateways(
        &self,
        req: crate::model::ListProviderGatewaysRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ProviderGatewayCollection>>;

    async fn create_provider_gateway(
        &self,
        req: crate::model::CreateProviderGatewayRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ProviderGateway>>;

    async fn delete_provider_gateway(
        &self,
        req: crate::model::DeleteProviderGatewayRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ProviderGateway>>;

    async fn get_provider_gateway(
        &self,
        req: crate::model::GetProviderGatewayRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ProviderGateway>>;

    async fn update_provider_gateway(
        &self,
        req: crate::model::UpdateProviderGatewayRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ProviderGateway>>;

    async fn list_provider_ports(
        &self,
        req: crate::model::ListProviderPortsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ProviderPortCollection>>;

    async fn get_provider_port(
        &self,
        req: crate::model::GetProviderPortRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ProviderPort>>;
}

/// All implementations of [super::DirectLinkProvider] also implement [DirectLinkProvider].
#[async_trait::async_trait]
impl<T: super::DirectLinkProvider> DirectLinkProvider for T {
    /// Forwards the call to the implementation provided by `T`.
    async fn list_provider_gateways(
        &self,
        req: crate::model::ListProviderGatewaysRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ProviderGatewayCollection>> {
        T::list_provider_gateways(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn create_provider_gateway(
        &self,
        req: crate::model::CreateProviderGatewayRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ProviderGateway>> {
        T::create_provider_gateway(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete_provider_gateway(
        &self,
        req: crate::model::DeleteProviderGatewayRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ProviderGateway>> {
        T::delete_provider_gateway(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_provider_gateway(
        &self,
        req: crate::model::GetProviderGatewayRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ProviderGateway>> {
        T::get_provider_gateway(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn update_provider_gateway(
        &self,
        req: crate::model::UpdateProviderGatewayRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ProviderGateway>> {
        T::update_provider_gateway(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_provider_ports(
        &self,
        req: crate::model::ListProviderPortsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ProviderPortCollection>> {
        T::list_provider_ports(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_provider_port(
        &self,
        req: crate::model::GetProviderPortRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ProviderPort>> {
        T::get_provider_port(self, req, options).await
    }
}
