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

/// A Direct Link gateway managed by a provider.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ProviderGateway {
    /// The customer BGP ASN.
    pub bgp_asn: i64,

    /// The BGP customer edge router CIDR.
    pub bgp_cer_cidr: std::option::Option<std::string::String>,

    /// The IBM BGP ASN.
    pub bgp_ibm_asn: std::option::Option<i64>,

    /// The BGP IBM CIDR.
    pub bgp_ibm_cidr: std::option::Option<std::string::String>,

    /// The gateway BGP status.
    ///
    /// See [bgp_status][crate::model::provider_gateway::bgp_status] for the known values.
    pub bgp_status: std::option::Option<std::string::String>,

    /// The pending change requested by the customer, if any.
    pub change_request: std::option::Option<crate::model::ProviderGatewayChangeRequest>,

    /// The date and time the resource was created, in RFC 3339 format.
    pub created_at: std::string::String,

    /// The CRN (Cloud Resource Name) of this gateway.
    pub crn: std::option::Option<std::string::String>,

    /// The customer IBM Cloud account ID.
    pub customer_account_id: std::string::String,

    /// The unique identifier of this gateway.
    pub id: std::string::String,

    /// The unique user-defined name for this gateway.
    pub name: std::string::String,

    /// The gateway operational status.
    ///
    /// See [operational_status][crate::model::provider_gateway::operational_status] for the known values.
    pub operational_status: std::string::String,

    /// The port used by the gateway.
    pub port: std::option::Option<crate::model::ProviderGatewayPortReference>,

    /// Indicates whether gateway changes must be made through a provider portal.
    pub provider_api_managed: bool,

    /// The gateway speed in megabits per second.
    pub speed_mbps: i64,

    /// The gateway type.
    pub r#type: std::string::String,

    /// The VLAN allocated for this gateway.
    pub vlan: std::option::Option<i64>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ProviderGateway {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [bgp_asn][crate::model::ProviderGateway::bgp_asn].
    pub fn set_bgp_asn<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.bgp_asn = v.into();
        self
    }

    /// Sets the value of [bgp_cer_cidr][crate::model::ProviderGateway::bgp_cer_cidr].
    pub fn set_bgp_cer_cidr<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.bgp_cer_cidr = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [bgp_cer_cidr][crate::model::ProviderGateway::bgp_cer_cidr].
    pub fn set_or_clear_bgp_cer_cidr<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.bgp_cer_cidr = v.map(|x| x.into());
        self
    }

    /// Sets the value of [bgp_ibm_asn][crate::model::ProviderGateway::bgp_ibm_asn].
    pub fn set_bgp_ibm_asn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.bgp_ibm_asn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [bgp_ibm_asn][crate::model::ProviderGateway::bgp_ibm_asn].
    pub fn set_or_clear_bgp_ibm_asn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.bgp_ibm_asn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [bgp_ibm_cidr][crate::model::ProviderGateway::bgp_ibm_cidr].
    pub fn set_bgp_ibm_cidr<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.bgp_ibm_cidr = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [bgp_ibm_cidr][crate::model::ProviderGateway::bgp_ibm_cidr].
    pub fn set_or_clear_bgp_ibm_cidr<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.bgp_ibm_cidr = v.map(|x| x.into());
        self
    }

    /// Sets the value of [bgp_status][crate::model::ProviderGateway::bgp_status].
    pub fn set_bgp_status<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.bgp_status = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [bgp_status][crate::model::ProviderGateway::bgp_status].
    pub fn set_or_clear_bgp_status<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.bgp_status = v.map(|x| x.into());
        self
    }

    /// Sets the value of [change_request][crate::model::ProviderGateway::change_request].
    pub fn set_change_request<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ProviderGatewayChangeRequest>,
    {
        self.change_request = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [change_request][crate::model::ProviderGateway::change_request].
    pub fn set_or_clear_change_request<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ProviderGatewayChangeRequest>,
    {
        self.change_request = v.map(|x| x.into());
        self
    }

    /// Sets the value of [created_at][crate::model::ProviderGateway::created_at].
    pub fn set_created_at<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.created_at = v.into();
        self
    }

    /// Sets the value of [crn][crate::model::ProviderGateway::crn].
    pub fn set_crn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.crn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [crn][crate::model::ProviderGateway::crn].
    pub fn set_or_clear_crn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.crn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [customer_account_id][crate::model::ProviderGateway::customer_account_id].
    pub fn set_customer_account_id<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.customer_account_id = v.into();
        self
    }

    /// Sets the value of [id][crate::model::ProviderGateway::id].
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [name][crate::model::ProviderGateway::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [operational_status][crate::model::ProviderGateway::operational_status].
    pub fn set_operational_status<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.operational_status = v.into();
        self
    }

    /// Sets the value of [port][crate::model::ProviderGateway::port].
    pub fn set_port<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ProviderGatewayPortReference>,
    {
        self.port = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [port][crate::model::ProviderGateway::port].
    pub fn set_or_clear_port<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ProviderGatewayPortReference>,
    {
        self.port = v.map(|x| x.into());
        self
    }

    /// Sets the value of [provider_api_managed][crate::model::ProviderGateway::provider_api_managed].
    pub fn set_provider_api_managed<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.provider_api_managed = v.into();
        self
    }

    /// Sets the value of [speed_mbps][crate::model::ProviderGateway::speed_mbps].
    pub fn set_speed_mbps<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.speed_mbps = v.into();
        self
    }

    /// Sets the value of [r#type][crate::model::ProviderGateway::r#type].
    pub fn set_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.r#type = v.into();
        self
    }

    /// Sets the value of [vlan][crate::model::ProviderGateway::vlan].
    pub fn set_vlan<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.vlan = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [vlan][crate::model::ProviderGateway::vlan].
    pub fn set_or_clear_vlan<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.vlan = v.map(|x| x.into());
        self
    }
}

/// A page of provider gateways.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ProviderGatewayCollection {
    /// A reference to the first page of resources.
    pub first: std::option::Option<crate::model::PaginationFirst>,

    /// The maximum number of gateways in a page.
    pub limit: i64,

    /// A reference to the next page of resources.
    ///
    /// Absent in the last page.
    pub next: std::option::Option<crate::model::PaginationNext>,

    /// The total number of resources across all pages.
    pub total_count: i64,

    /// The gateways in this page.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub gateways: std::vec::Vec<crate::model::ProviderGateway>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ProviderGatewayCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [first][crate::model::ProviderGatewayCollection::first].
    pub fn set_first<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::PaginationFirst>,
    {
        self.first = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [first][crate::model::ProviderGatewayCollection::first].
    pub fn set_or_clear_first<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::PaginationFirst>,
    {
        self.first = v.map(|x| x.into());
        self
    }

    /// Sets the value of [limit][crate::model::ProviderGatewayCollection::limit].
    pub fn set_limit<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.limit = v.into();
        self
    }

    /// Sets the value of [next][crate::model::ProviderGatewayCollection::next].
    pub fn set_next<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::PaginationNext>,
    {
        self.next = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [next][crate::model::ProviderGatewayCollection::next].
    pub fn set_or_clear_next<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::PaginationNext>,
    {
        self.next = v.map(|x| x.into());
        self
    }

    /// Sets the value of [total_count][crate::model::ProviderGatewayCollection::total_count].
    pub fn set_total_count<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.total_count = v.into();
        self
    }

    /// Sets the value of [gateways][crate::model::ProviderGatewayCollection::gateways].
    pub fn set_gateways<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::ProviderGateway>,
    {
        use std::iter::Iterator;
        self.gateways = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// Selects the port for a new gateway.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ProviderGatewayPortIdentity {
    /// The port identifier.
    pub id: std::string::String,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ProviderGatewayPortIdentity {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::ProviderGatewayPortIdentity::id].
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }
}

/// The port used by a gateway.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ProviderGatewayPortReference {
    /// The port identifier.
    pub id: std::string::String,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ProviderGatewayPortReference {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::ProviderGatewayPortReference::id].
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }
}

/// A provider port.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ProviderPort {
    /// The port identifier.
    pub id: std::string::String,

    /// The port label.
    pub label: std::string::String,

    /// The port location long name.
    pub location_display_name: std::string::String,

    /// The port location name identifier.
    pub location_name: std::string::String,

    /// The port provider name.
    pub provider_name: std::string::String,

    /// The port supported speeds in megabits per second.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub supported_link_speeds: std::vec::Vec<i64>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ProviderPort {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::ProviderPort::id].
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [label][crate::model::ProviderPort::label].
    pub fn set_label<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.label = v.into();
        self
    }

    /// Sets the value of [location_display_name][crate::model::ProviderPort::location_display_name].
    pub fn set_location_display_name<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.location_display_name = v.into();
        self
    }

    /// Sets the value of [location_name][crate::model::ProviderPort::location_name].
    pub fn set_location_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.location_name = v.into();
        self
    }

    /// Sets the value of [provider_name][crate::model::ProviderPort::provider_name].
    pub fn set_provider_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.provider_name = v.into();
        self
    }

    /// Sets the value of [supported_link_speeds][crate::model::ProviderPort::supported_link_speeds].
    pub fn set_supported_link_speeds<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<i64>,
    {
        use std::iter::Iterator;
        self.supported_link_speeds = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A page of provider ports.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ProviderPortCollection {
    /// A reference to the first page of resources.
    pub first: std::option::Option<crate::model::PaginationFirst>,

    /// The maximum number of ports in a page.
    pub limit: i64,

    /// A reference to the next page of resources.
    ///
    /// Absent in the last page.
    pub next: std::option::Option<crate::model::PaginationNext>,

    /// The total number of resources across all pages.
    pub total_count: i64,

    /// The ports in this page.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub ports: std::vec::Vec<crate::model::ProviderPort>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ProviderPortCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [first][crate::model::ProviderPortCollection::first].
    pub fn set_first<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::PaginationFirst>,
    {
        self.first = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [first][crate::model::ProviderPortCollection::first].
    pub fn set_or_clear_first<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::PaginationFirst>,
    {
        self.first = v.map(|x| x.into());
        self
    }

    /// Sets the value of [limit][crate::model::ProviderPortCollection::limit].
    pub fn set_limit<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.limit = v.into();
        self
    }

    /// Sets the value of [next][crate::model::ProviderPortCollection::next].
    pub fn set_next<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::PaginationNext>,
    {
        self.next = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [next][crate::model::ProviderPortCollection::next].
    pub fn set_or_clear_next<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::PaginationNext>,
    {
        self.next = v.map(|x| x.into());
        self
    }

    /// Sets the value of [total_count][crate::model::ProviderPortCollection::total_count].
    pub fn set_total_count<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.total_count = v.into();
        self
    }

    /// Sets the value of [ports][crate::model::ProviderPortCollection::ports].
    pub fn set_ports<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::ProviderPort>,
    {
        use std::iter::Iterator;
        self.ports = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A reference to the first page of resources.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct PaginationFirst {
    /// The URL for the first page of resources.
    pub href: std::string::String,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl PaginationFirst {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [href][crate::model::PaginationFirst::href].
    pub fn set_href<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.href = v.into();
        self
    }
}

/// A reference to the next page of resources.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct PaginationNext {
    /// The URL for the next page of resources.
    pub href: std::string::String,

    /// The cursor to request the next page.
    pub start: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl PaginationNext {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [href][crate::model::PaginationNext::href].
    pub fn set_href<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.href = v.into();
        self
    }

    /// Sets the value of [start][crate::model::PaginationNext::start].
    pub fn set_start<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.start = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [start][crate::model::PaginationNext::start].
    pub fn set_or_clear_start<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.start = v.map(|x| x.into());
        self
    }
}

/// Requests a change to the customer BGP ASN.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct BgpAsnUpdate {
    /// The new customer BGP ASN.
    pub bgp_asn: i64,
}

impl BgpAsnUpdate {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [bgp_asn][crate::model::BgpAsnUpdate::bgp_asn].
    pub fn set_bgp_asn<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.bgp_asn = v.into();
        self
    }
}

/// Requests a change to the BGP CIDRs.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct BgpCidrUpdate {
    /// The new customer edge router CIDR.
    pub bgp_cer_cidr: std::option::Option<std::string::String>,

    /// The new IBM CIDR.
    pub bgp_ibm_cidr: std::string::String,
}

impl BgpCidrUpdate {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [bgp_cer_cidr][crate::model::BgpCidrUpdate::bgp_cer_cidr].
    pub fn set_bgp_cer_cidr<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.bgp_cer_cidr = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [bgp_cer_cidr][crate::model::BgpCidrUpdate::bgp_cer_cidr].
    pub fn set_or_clear_bgp_cer_cidr<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.bgp_cer_cidr = v.map(|x| x.into());
        self
    }

    /// Sets the value of [bgp_ibm_cidr][crate::model::BgpCidrUpdate::bgp_ibm_cidr].
    pub fn set_bgp_ibm_cidr<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.bgp_ibm_cidr = v.into();
        self
    }
}

/// Requests a change to the gateway speed.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct SpeedUpdate {
    /// The new gateway speed in megabits per second.
    pub speed_mbps: i64,
}

impl SpeedUpdate {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [speed_mbps][crate::model::SpeedUpdate::speed_mbps].
    pub fn set_speed_mbps<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.speed_mbps = v.into();
        self
    }
}

/// Requests a change to the gateway VLAN.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct VlanUpdate {
    /// The new VLAN.
    pub vlan: i64,
}

impl VlanUpdate {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [vlan][crate::model::VlanUpdate::vlan].
    pub fn set_vlan<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.vlan = v.into();
        self
    }
}

/// Defines additional types related to [ProviderGateway].
pub mod provider_gateway {
    /// The known values for [bgp_status][crate::model::ProviderGateway::bgp_status].
    pub mod bgp_status {
        pub const ACTIVE: &str = "active";
        pub const CONNECT: &str = "connect";
        pub const ESTABLISHED: &str = "established";
        pub const IDLE: &str = "idle";
    }

    /// The known values for [operational_status][crate::model::ProviderGateway::operational_status].
    pub mod operational_status {
        pub const CONFIGURING: &str = "configuring";
        pub const CREATE_PENDING: &str = "create_pending";
        pub const CREATE_REJECTED: &str = "create_rejected";
        pub const DELETE_PENDING: &str = "delete_pending";
        pub const PROVISIONED: &str = "provisioned";
    }
}

/// A change to a gateway, requested by the customer and pending the
/// provider's approval.
///
/// The service identifies the kind of change with the `type` field. Values
/// not known to this version of the library decode as
/// [Unknown][ProviderGatewayChangeRequest::Unknown].
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
#[non_exhaustive]
pub enum ProviderGatewayChangeRequest {
    /// The customer requested the gateway.
    CreateGateway,
    /// The customer requested the deletion of the gateway.
    DeleteGateway,
    /// The customer requested changes to the gateway attributes.
    UpdateAttributes {
        /// The requested changes.
        #[serde(default, skip_serializing_if = "std::vec::Vec::is_empty")]
        updates: std::vec::Vec<GatewayUpdate>,
    },
    /// A change request type not known to this version of the library.
    #[serde(other)]
    Unknown,
}

/// One requested change in a
/// [UpdateAttributes][ProviderGatewayChangeRequest::UpdateAttributes] request.
///
/// The kind of change is identified by the fields present in the JSON
/// object. Objects that match none of the known kinds are preserved in
/// [Raw][GatewayUpdate::Raw].
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum GatewayUpdate {
    BgpAsn(BgpAsnUpdate),
    BgpCidr(BgpCidrUpdate),
    Speed(SpeedUpdate),
    Vlan(VlanUpdate),
    Raw(serde_json::Map<std::string::String, serde_json::Value>),
}

impl GatewayUpdate {
    const NAME: &'static str = "GatewayUpdate";
    const VARIANTS: &'static [gax::one_of::Variant] = &[
        gax::one_of::Variant::new("bgp_asn"),
        gax::one_of::Variant::new("bgp_ibm_cidr").with_exclusive(&["bgp_cer_cidr"]),
        gax::one_of::Variant::new("speed_mbps"),
        gax::one_of::Variant::new("vlan"),
    ];

    /// Decodes a JSON object into the matching kind of change.
    ///
    /// Objects with none of the known fields decode as
    /// [Raw][GatewayUpdate::Raw].
    pub fn decode(value: serde_json::Value) -> Result<Self, gax::one_of::OneOfError> {
        use gax::one_of::{as_object, decode, select};
        let object = as_object(Self::NAME, Self::VARIANTS, &value)?;
        let index = match select(Self::NAME, object, Self::VARIANTS) {
            Ok(index) => index,
            Err(e) if e.is_unrecognized_variant() => return Ok(Self::Raw(object.clone())),
            Err(e) => return Err(e),
        };
        let variant = &Self::VARIANTS[index];
        match index {
            0 => decode::<_, i64>(Self::NAME, variant, value).map(Self::BgpAsn),
            1 => decode::<_, std::string::String>(Self::NAME, variant, value).map(Self::BgpCidr),
            2 => decode::<_, i64>(Self::NAME, variant, value).map(Self::Speed),
            _ => decode::<_, i64>(Self::NAME, variant, value).map(Self::Vlan),
        }
    }
}

impl serde::ser::Serialize for GatewayUpdate {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        match self {
            Self::BgpAsn(v) => v.serialize(serializer),
            Self::BgpCidr(v) => v.serialize(serializer),
            Self::Speed(v) => v.serialize(serializer),
            Self::Vlan(v) => v.serialize(serializer),
            Self::Raw(v) => v.serialize(serializer),
        }
    }
}

impl<'de> serde::de::Deserialize<'de> for GatewayUpdate {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;
        let value = serde_json::Value::deserialize(deserializer)?;
        Self::decode(value).map_err(D::Error::custom)
    }
}

impl PaginationNext {
    /// The cursor to request the next page.
    ///
    /// Uses [start][PaginationNext::start] if set, and otherwise the `start`
    /// query parameter of [href][PaginationNext::href].
    pub fn start_token(&self) -> std::option::Option<std::string::String> {
        if let Some(start) = self.start.as_ref().filter(|s| !s.is_empty()) {
            return Some(start.clone());
        }
        // `join()` accepts both absolute and relative references.
        let base = url::Url::parse("https://localhost/").ok()?;
        let href = base.join(&self.href).ok()?;
        href.query_pairs()
            .find(|(k, _)| k == "start")
            .map(|(_, v)| v.into_owned())
            .filter(|v| !v.is_empty())
    }
}

impl ProviderGatewayCollection {
    /// The cursor for the next page, `None` in the last page.
    pub fn next_start(&self) -> std::option::Option<std::string::String> {
        self.next.as_ref().and_then(PaginationNext::start_token)
    }
}

#[doc(hidden)]
impl gax::paginator::internal::PageableResponse for ProviderGatewayCollection {
    type PageItem = crate::model::ProviderGateway;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.gateways
    }

    fn next_page_token(&self) -> std::string::String {
        self.next_start().unwrap_or_default()
    }
}

impl ProviderPortCollection {
    /// The cursor for the next page, `None` in the last page.
    pub fn next_start(&self) -> std::option::Option<std::string::String> {
        self.next.as_ref().and_then(PaginationNext::start_token)
    }
}

#[doc(hidden)]
impl gax::paginator::internal::PageableResponse for ProviderPortCollection {
    type PageItem = crate::model::ProviderPort;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.ports
    }

    fn next_page_token(&self) -> std::string::String {
        self.next_start().unwrap_or_default()
    }
}

/// The request message for [DirectLinkProvider::list_provider_gateways][crate::client::DirectLinkProvider::list_provider_gateways].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListProviderGatewaysRequest {
    /// The API version, as a date in `YYYY-MM-DD` format.
    ///
    /// The client sets this to its configured version.
    pub version: std::string::String,

    /// A server-provided token determining which page of resources to retrieve.
    ///
    /// If empty, the first page is retrieved.
    pub start: std::option::Option<std::string::String>,

    /// The number of resources to return on a page.
    pub limit: std::option::Option<i64>,
}

impl ListProviderGatewaysRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [version][crate::model::ListProviderGatewaysRequest::version].
    ///
    /// This is a **required** field for requests.
    pub fn set_version<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.version = v.into();
        self
    }

    /// Sets the value of [start][crate::model::ListProviderGatewaysRequest::start].
    pub fn set_start<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.start = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [start][crate::model::ListProviderGatewaysRequest::start].
    pub fn set_or_clear_start<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.start = v.map(|x| x.into());
        self
    }

    /// Sets the value of [limit][crate::model::ListProviderGatewaysRequest::limit].
    pub fn set_limit<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][crate::model::ListProviderGatewaysRequest::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.limit = v.map(|x| x.into());
        self
    }
}

/// The request message for [DirectLinkProvider::create_provider_gateway][crate::client::DirectLinkProvider::create_provider_gateway].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct CreateProviderGatewayRequest {
    /// The API version, as a date in `YYYY-MM-DD` format.
    ///
    /// The client sets this to its configured version.
    pub version: std::string::String,

    /// When true, validate the request without creating the gateway.
    pub check_only: std::option::Option<bool>,

    /// The customer BGP ASN.
    pub bgp_asn: std::option::Option<i64>,

    /// The customer IBM Cloud account ID.
    pub customer_account_id: std::option::Option<std::string::String>,

    /// The unique user-defined name for this gateway.
    pub name: std::option::Option<std::string::String>,

    /// The port for the gateway.
    pub port: std::option::Option<crate::model::ProviderGatewayPortIdentity>,

    /// The gateway speed in megabits per second.
    pub speed_mbps: std::option::Option<i64>,

    /// The BGP customer edge router CIDR.
    pub bgp_cer_cidr: std::option::Option<std::string::String>,

    /// The BGP IBM CIDR.
    pub bgp_ibm_cidr: std::option::Option<std::string::String>,

    /// The VLAN requested for this gateway.
    pub vlan: std::option::Option<i64>,
}

impl CreateProviderGatewayRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [version][crate::model::CreateProviderGatewayRequest::version].
    ///
    /// This is a **required** field for requests.
    pub fn set_version<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.version = v.into();
        self
    }

    /// Sets the value of [check_only][crate::model::CreateProviderGatewayRequest::check_only].
    pub fn set_check_only<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.check_only = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [check_only][crate::model::CreateProviderGatewayRequest::check_only].
    pub fn set_or_clear_check_only<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.check_only = v.map(|x| x.into());
        self
    }

    /// Sets the value of [bgp_asn][crate::model::CreateProviderGatewayRequest::bgp_asn].
    ///
    /// This is a **required** field for requests.
    pub fn set_bgp_asn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.bgp_asn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [bgp_asn][crate::model::CreateProviderGatewayRequest::bgp_asn].
    pub fn set_or_clear_bgp_asn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.bgp_asn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [customer_account_id][crate::model::CreateProviderGatewayRequest::customer_account_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_customer_account_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.customer_account_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [customer_account_id][crate::model::CreateProviderGatewayRequest::customer_account_id].
    pub fn set_or_clear_customer_account_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.customer_account_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [name][crate::model::CreateProviderGatewayRequest::name].
    ///
    /// This is a **required** field for requests.
    pub fn set_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [name][crate::model::CreateProviderGatewayRequest::name].
    pub fn set_or_clear_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [port][crate::model::CreateProviderGatewayRequest::port].
    ///
    /// This is a **required** field for requests.
    pub fn set_port<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ProviderGatewayPortIdentity>,
    {
        self.port = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [port][crate::model::CreateProviderGatewayRequest::port].
    pub fn set_or_clear_port<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ProviderGatewayPortIdentity>,
    {
        self.port = v.map(|x| x.into());
        self
    }

    /// Sets the value of [speed_mbps][crate::model::CreateProviderGatewayRequest::speed_mbps].
    ///
    /// This is a **required** field for requests.
    pub fn set_speed_mbps<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.speed_mbps = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [speed_mbps][crate::model::CreateProviderGatewayRequest::speed_mbps].
    pub fn set_or_clear_speed_mbps<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.speed_mbps = v.map(|x| x.into());
        self
    }

    /// Sets the value of [bgp_cer_cidr][crate::model::CreateProviderGatewayRequest::bgp_cer_cidr].
    pub fn set_bgp_cer_cidr<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.bgp_cer_cidr = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [bgp_cer_cidr][crate::model::CreateProviderGatewayRequest::bgp_cer_cidr].
    pub fn set_or_clear_bgp_cer_cidr<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.bgp_cer_cidr = v.map(|x| x.into());
        self
    }

    /// Sets the value of [bgp_ibm_cidr][crate::model::CreateProviderGatewayRequest::bgp_ibm_cidr].
    pub fn set_bgp_ibm_cidr<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.bgp_ibm_cidr = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [bgp_ibm_cidr][crate::model::CreateProviderGatewayRequest::bgp_ibm_cidr].
    pub fn set_or_clear_bgp_ibm_cidr<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.bgp_ibm_cidr = v.map(|x| x.into());
        self
    }

    /// Sets the value of [vlan][crate::model::CreateProviderGatewayRequest::vlan].
    pub fn set_vlan<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.vlan = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [vlan][crate::model::CreateProviderGatewayRequest::vlan].
    pub fn set_or_clear_vlan<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.vlan = v.map(|x| x.into());
        self
    }
}

/// The request message for [DirectLinkProvider::delete_provider_gateway][crate::client::DirectLinkProvider::delete_provider_gateway].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteProviderGatewayRequest {
    /// The API version, as a date in `YYYY-MM-DD` format.
    ///
    /// The client sets this to its configured version.
    pub version: std::string::String,

    /// The Direct Link gateway identifier.
    pub id: std::string::String,
}

impl DeleteProviderGatewayRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [version][crate::model::DeleteProviderGatewayRequest::version].
    ///
    /// This is a **required** field for requests.
    pub fn set_version<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.version = v.into();
        self
    }

    /// Sets the value of [id][crate::model::DeleteProviderGatewayRequest::id].
    ///
    /// This is a **required** field for requests.
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }
}

/// The request message for [DirectLinkProvider::get_provider_gateway][crate::client::DirectLinkProvider::get_provider_gateway].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetProviderGatewayRequest {
    /// The API version, as a date in `YYYY-MM-DD` format.
    ///
    /// The client sets this to its configured version.
    pub version: std::string::String,

    /// The Direct Link gateway identifier.
    pub id: std::string::String,
}

impl GetProviderGatewayRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [version][crate::model::GetProviderGatewayRequest::version].
    ///
    /// This is a **required** field for requests.
    pub fn set_version<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.version = v.into();
        self
    }

    /// Sets the value of [id][crate::model::GetProviderGatewayRequest::id].
    ///
    /// This is a **required** field for requests.
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }
}

/// The request message for [DirectLinkProvider::update_provider_gateway][crate::client::DirectLinkProvider::update_provider_gateway].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct UpdateProviderGatewayRequest {
    /// The API version, as a date in `YYYY-MM-DD` format.
    ///
    /// The client sets this to its configured version.
    pub version: std::string::String,

    /// The Direct Link gateway identifier.
    pub id: std::string::String,

    /// The new name for this gateway.
    pub name: std::option::Option<std::string::String>,

    /// The new gateway speed in megabits per second.
    pub speed_mbps: std::option::Option<i64>,

    /// The new VLAN for this gateway.
    pub vlan: std::option::Option<i64>,
}

impl UpdateProviderGatewayRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [version][crate::model::UpdateProviderGatewayRequest::version].
    ///
    /// This is a **required** field for requests.
    pub fn set_version<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.version = v.into();
        self
    }

    /// Sets the value of [id][crate::model::UpdateProviderGatewayRequest::id].
    ///
    /// This is a **required** field for requests.
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [name][crate::model::UpdateProviderGatewayRequest::name].
    pub fn set_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [name][crate::model::UpdateProviderGatewayRequest::name].
    pub fn set_or_clear_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [speed_mbps][crate::model::UpdateProviderGatewayRequest::speed_mbps].
    pub fn set_speed_mbps<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.speed_mbps = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [speed_mbps][crate::model::UpdateProviderGatewayRequest::speed_mbps].
    pub fn set_or_clear_speed_mbps<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.speed_mbps = v.map(|x| x.into());
        self
    }

    /// Sets the value of [vlan][crate::model::UpdateProviderGatewayRequest::vlan].
    pub fn set_vlan<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.vlan = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [vlan][crate::model::UpdateProviderGatewayRequest::vlan].
    pub fn set_or_clear_vlan<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.vlan = v.map(|x| x.into());
        self
    }
}

/// The request message for [DirectLinkProvider::list_provider_ports][crate::client::DirectLinkProvider::list_provider_ports].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListProviderPortsRequest {
    /// The API version, as a date in `YYYY-MM-DD` format.
    ///
    /// The client sets this to its configured version.
    pub version: std::string::String,

    /// A server-provided token determining which page of resources to retrieve.
    ///
    /// If empty, the first page is retrieved.
    pub start: std::option::Option<std::string::String>,

    /// The number of resources to return on a page.
    pub limit: std::option::Option<i64>,
}

impl ListProviderPortsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [version][crate::model::ListProviderPortsRequest::version].
    ///
    /// This is a **required** field for requests.
    pub fn set_version<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.version = v.into();
        self
    }

    /// Sets the value of [start][crate::model::ListProviderPortsRequest::start].
    pub fn set_start<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.start = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [start][crate::model::ListProviderPortsRequest::start].
    pub fn set_or_clear_start<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.start = v.map(|x| x.into());
        self
    }

    /// Sets the value of [limit][crate::model::ListProviderPortsRequest::limit].
    pub fn set_limit<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][crate::model::ListProviderPortsRequest::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.limit = v.map(|x| x.into());
        self
    }
}

/// The request message for [DirectLinkProvider::get_provider_port][crate::client::DirectLinkProvider::get_provider_port].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetProviderPortRequest {
    /// The API version, as a date in `YYYY-MM-DD` format.
    ///
    /// The client sets this to its configured version.
    pub version: std::string::String,

    /// The port identifier.
    pub id: std::string::String,
}

impl GetProviderPortRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [version][crate::model::GetProviderPortRequest::version].
    ///
    /// This is a **required** field for requests.
    pub fn set_version<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.version = v.into();
        self
    }

    /// Sets the value of [id][crate::model::GetProviderPortRequest::id].
    ///
    /// This is a **required** field for requests.
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }
}
