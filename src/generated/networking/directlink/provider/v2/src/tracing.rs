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

/// Implements a [DirectLinkProvider](super::stub::DirectLinkProvider) decorator for logging and tracing.
#[derive(Clone, Debug)]
pub struct DirectLinkProvider<T>
where
    T: super::stub::DirectLinkProvider + std::fmt::Debug + Send + Sync,
{
    inner: T,
}

impl<T> DirectLinkProvider<T>
where
    T: super::stub::DirectLinkProvider + std::fmt::Debug + Send + Sync,
{
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T> super::stub::DirectLinkProvider for DirectLinkProvider<T>
where
    T: super::stub::DirectLinkProvider + std::fmt::Debug + Send + Sync,
{
    #[tracing::instrument(level = "info", ret)]
    async fn list_provider_gateways(
        &self,
        req: crate::model::ListProviderGatewaysRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ProviderGatewayCollection>> {
        self.inner.list_provider_gateways(req, options).await
    }

    #[tracing::instrument(level = "info", ret)]
    async fn create_provider_gateway(
        &self,
        req: crate::model::CreateProviderGatewayRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ProviderGateway>> {
        self.inner.create_provider_gateway(req, options).await
    }

    #[tracing::instrument(level = "info", ret)]
    async fn delete_provider_gateway(
        &self,
        req: crate::model::DeleteProviderGatewayRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ProviderGateway>> {
        self.inner.delete_provider_gateway(req, options).await
    }

    #[tracing::instrument(level = "info", ret)]
    async fn get_provider_gateway(
        &self,
        req: crate::model::GetProviderGatewayRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ProviderGateway>> {
        self.inner.get_provider_gateway(req, options).await
    }

    #[tracing::instrument(level = "info", ret)]
    async fn update_provider_gateway(
        &self,
        req: crate::model::UpdateProviderGatewayRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ProviderGateway>> {
        self.inner.update_provider_gateway(req, options).await
    }

    #[tracing::instrument(level = "info", ret)]
    async fn list_provider_ports(
        &self,
        req: crate::model::ListProviderPortsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ProviderPortCollection>> {
        self.inner.list_provider_ports(req, options).await
    }

    #[tracing::instrument(level = "info", ret)]
    async fn get_provider_port(
        &self,
        req: crate::model::GetProviderPortRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ProviderPort>> {
        self.inner.get_provider_port(req, options).await
    }
}
