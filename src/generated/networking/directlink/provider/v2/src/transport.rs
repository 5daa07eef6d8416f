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

/// Implements [DirectLinkProvider](super::stub::DirectLinkProvider) using a [gaxi::http::ReqwestClient].
#[derive(Clone)]
pub struct DirectLinkProvider {
    inner: gaxi::http::ReqwestClient,
}

impl std::fmt::Debug for DirectLinkProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("DirectLinkProvider")
            .field("inner", &self.inner)
            .finish()
    }
}

impl DirectLinkProvider {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner =
            gaxi::http::ReqwestClient::new(config, crate::DEFAULT_HOST, crate::SERVICE_NAME).await?;
        Ok(Self { inner })
    }
}

impl super::stub::DirectLinkProvider for DirectLinkProvider {
    async fn list_provider_gateways(
        &self,
        req: crate::model::ListProviderGatewaysRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ProviderGatewayCollection>> {
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = "/gateways".to_string();
        if req.version.is_empty() {
            return Err(gax::path_parameter::missing("version"));
        }
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = req.version.add(builder, "version");
        let builder = req.start.add(builder, "start");
        let builder = req.limit.add(builder, "limit");
        let builder = builder.header(
            X_IBMCLOUD_SDK_ANALYTICS,
            crate::info::ANALYTICS.header_value("ListProviderGateways"),
        );
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn create_provider_gateway(
        &self,
        req: crate::model::CreateProviderGatewayRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ProviderGateway>> {
        let options = gax::options::internal::set_default_idempotency(options, false);
        let path = "/gateways".to_string();
        if req.version.is_empty() {
            return Err(gax::path_parameter::missing("version"));
        }
        let body = CreateProviderGatewayBody {
            bgp_asn: gax::path_parameter::required("bgp_asn", req.bgp_asn)?,
            customer_account_id: gax::path_parameter::required(
                "customer_account_id",
                req.customer_account_id,
            )?,
            name: gax::path_parameter::required("name", req.name)?,
            port: gax::path_parameter::required("port", req.port)?,
            speed_mbps: gax::path_parameter::required("speed_mbps", req.speed_mbps)?,
            bgp_cer_cidr: req.bgp_cer_cidr,
            bgp_ibm_cidr: req.bgp_ibm_cidr,
            vlan: req.vlan,
        };
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder = req.version.add(builder, "version");
        let builder = req.check_only.add(builder, "check_only");
        let builder = builder.header(
            X_IBMCLOUD_SDK_ANALYTICS,
            crate::info::ANALYTICS.header_value("CreateProviderGateway"),
        );
        self.inner.execute(builder, Some(body), options).await
    }

    async fn delete_provider_gateway(
        &self,
        req: crate::model::DeleteProviderGatewayRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ProviderGateway>> {
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/gateways/{}",
            gaxi::path_parameter::required("id", &req.id)?,
        );
        if req.version.is_empty() {
            return Err(gax::path_parameter::missing("version"));
        }
        let builder = self.inner.builder(reqwest::Method::DELETE, path);
        let builder = req.version.add(builder, "version");
        let builder = builder.header(
            X_IBMCLOUD_SDK_ANALYTICS,
            crate::info::ANALYTICS.header_value("DeleteProviderGateway"),
        );
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn get_provider_gateway(
        &self,
        req: crate::model::GetProviderGatewayRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ProviderGateway>> {
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/gateways/{}",
            gaxi::path_parameter::required("id", &req.id)?,
        );
        if req.version.is_empty() {
            return Err(gax::path_parameter::missing("version"));
        }
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = req.version.add(builder, "version");
        let builder = builder.header(
            X_IBMCLOUD_SDK_ANALYTICS,
            crate::info::ANALYTICS.header_value("GetProviderGateway"),
        );
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn update_provider_gateway(
        &self,
        req: crate::model::UpdateProviderGatewayRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ProviderGateway>> {
        let options = gax::options::internal::set_default_idempotency(options, false);
        let path = format!(
            "/gateways/{}",
            gaxi::path_parameter::required("id", &req.id)?,
        );
        if req.version.is_empty() {
            return Err(gax::path_parameter::missing("version"));
        }
        let body = UpdateProviderGatewayBody {
            name: req.name,
            speed_mbps: req.speed_mbps,
            vlan: req.vlan,
        };
        let builder = self.inner.builder(reqwest::Method::PATCH, path);
        let builder = req.version.add(builder, "version");
        let builder = builder.header(
            X_IBMCLOUD_SDK_ANALYTICS,
            crate::info::ANALYTICS.header_value("UpdateProviderGateway"),
        );
        self.inner.execute(builder, Some(body), options).await
    }

    async fn list_provider_ports(
        &self,
        req: crate::model::ListProviderPortsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ProviderPortCollection>> {
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = "/ports".to_string();
        if req.version.is_empty() {
            return Err(gax::path_parameter::missing("version"));
        }
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = req.version.add(builder, "version");
        let builder = req.start.add(builder, "start");
        let builder = req.limit.add(builder, "limit");
        let builder = builder.header(
            X_IBMCLOUD_SDK_ANALYTICS,
            crate::info::ANALYTICS.header_value("ListProviderPorts"),
        );
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn get_provider_port(
        &self,
        req: crate::model::GetProviderPortRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ProviderPort>> {
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/ports/{}",
            gaxi::path_parameter::required("id", &req.id)?,
        );
        if req.version.is_empty() {
            return Err(gax::path_parameter::missing("version"));
        }
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = req.version.add(builder, "version");
        let builder = builder.header(
            X_IBMCLOUD_SDK_ANALYTICS,
            crate::info::ANALYTICS.header_value("GetProviderPort"),
        );
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }
}

#[serde_with::skip_serializing_none]
#[derive(serde::Serialize)]
struct CreateProviderGatewayBody {
    bgp_asn: i64,
    customer_account_id: std::string::String,
    name: std::string::String,
    port: crate::model::ProviderGatewayPortIdentity,
    speed_mbps: i64,
    bgp_cer_cidr: std::option::Option<std::string::String>,
    bgp_ibm_cidr: std::option::Option<std::string::String>,
    vlan: std::option::Option<i64>,
}

#[serde_with::skip_serializing_none]
#[derive(serde::Serialize)]
struct UpdateProviderGatewayBody {
    name: std::option::Option<std::string::String>,
    speed_mbps: std::option::Option<i64>,
    vlan: std::option::Option<i64>,
}
