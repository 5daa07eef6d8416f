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

/// Pagination information for list responses.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ResultInfo {
    /// The page number.
    pub page: i64,

    /// The number of results per page.
    pub per_page: i64,

    /// The number of results in this page.
    pub count: i64,

    /// The total number of results.
    pub total_count: i64,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ResultInfo {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [page][crate::model::ResultInfo::page].
    pub fn set_page<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.page = v.into();
        self
    }

    /// Sets the value of [per_page][crate::model::ResultInfo::per_page].
    pub fn set_per_page<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.per_page = v.into();
        self
    }

    /// Sets the value of [count][crate::model::ResultInfo::count].
    pub fn set_count<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.count = v.into();
        self
    }

    /// Sets the value of [total_count][crate::model::ResultInfo::total_count].
    pub fn set_total_count<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.total_count = v.into();
        self
    }
}

/// A certificate in a certificate pack.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct CertObject {
    /// The certificate identifier.
    pub id: std::string::String,

    /// The hosts covered by the certificate.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub hosts: std::vec::Vec<std::string::String>,

    /// The certificate status.
    pub status: std::string::String,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl CertObject {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::CertObject::id].
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [hosts][crate::model::CertObject::hosts].
    pub fn set_hosts<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.hosts = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [status][crate::model::CertObject::status].
    pub fn set_status<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.status = v.into();
        self
    }
}

/// A certificate pack.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct CertificateObject {
    /// The certificate pack identifier.
    pub id: std::string::String,

    /// The certificate pack type, see [certificate_type][crate::model::certificate_type].
    pub r#type: std::string::String,

    /// The hosts covered by the certificate pack.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub hosts: std::vec::Vec<std::string::String>,

    /// The certificates in this pack.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub certificates: std::vec::Vec<crate::model::CertObject>,

    /// The identifier of the primary certificate.
    ///
    /// The service reports this as a number or a string.
    #[serde(skip_serializing_if = "serde_json::Value::is_null")]
    pub primary_certificate: serde_json::Value,

    /// The certificate pack status.
    pub status: std::string::String,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl CertificateObject {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::CertificateObject::id].
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [r#type][crate::model::CertificateObject::r#type].
    pub fn set_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.r#type = v.into();
        self
    }

    /// Sets the value of [hosts][crate::model::CertificateObject::hosts].
    pub fn set_hosts<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.hosts = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [certificates][crate::model::CertificateObject::certificates].
    pub fn set_certificates<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::CertObject>,
    {
        use std::iter::Iterator;
        self.certificates = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [primary_certificate][crate::model::CertificateObject::primary_certificate].
    pub fn set_primary_certificate<T: std::convert::Into<serde_json::Value>>(
        mut self,
        v: T,
    ) -> Self {
        self.primary_certificate = v.into();
        self
    }

    /// Sets the value of [status][crate::model::CertificateObject::status].
    pub fn set_status<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.status = v.into();
        self
    }
}

/// The certificate packs in a zone.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ListCertificateResp {
    /// The certificate packs.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub result: std::vec::Vec<crate::model::CertificateObject>,

    /// Pagination information.
    pub result_info: std::option::Option<crate::model::ResultInfo>,

    /// Operation success flag.
    pub success: bool,

    /// The errors reported by the service.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub errors: std::vec::Vec<serde_json::Value>,

    /// The informational messages reported by the service.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub messages: std::vec::Vec<serde_json::Value>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ListCertificateResp {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [result][crate::model::ListCertificateResp::result].
    pub fn set_result<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::CertificateObject>,
    {
        use std::iter::Iterator;
        self.result = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [result_info][crate::model::ListCertificateResp::result_info].
    pub fn set_result_info<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ResultInfo>,
    {
        self.result_info = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [result_info][crate::model::ListCertificateResp::result_info].
    pub fn set_or_clear_result_info<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ResultInfo>,
    {
        self.result_info = v.map(|x| x.into());
        self
    }

    /// Sets the value of [success][crate::model::ListCertificateResp::success].
    pub fn set_success<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.success = v.into();
        self
    }

    /// Sets the value of [errors][crate::model::ListCertificateResp::errors].
    pub fn set_errors<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<serde_json::Value>,
    {
        use std::iter::Iterator;
        self.errors = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [messages][crate::model::ListCertificateResp::messages].
    pub fn set_messages<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<serde_json::Value>,
    {
        use std::iter::Iterator;
        self.messages = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A dedicated certificate pack.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct DedicatedCertificatePack {
    /// The certificate pack identifier.
    pub id: std::string::String,

    /// The certificate pack type.
    pub r#type: std::string::String,

    /// The hosts covered by the certificate pack.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub hosts: std::vec::Vec<std::string::String>,

    /// The certificates in this pack.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub certificates: std::vec::Vec<crate::model::CertObject>,

    /// The identifier of the primary certificate.
    #[serde(skip_serializing_if = "serde_json::Value::is_null")]
    pub primary_certificate: serde_json::Value,

    /// The certificate pack status.
    pub status: std::string::String,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl DedicatedCertificatePack {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::DedicatedCertificatePack::id].
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [r#type][crate::model::DedicatedCertificatePack::r#type].
    pub fn set_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.r#type = v.into();
        self
    }

    /// Sets the value of [hosts][crate::model::DedicatedCertificatePack::hosts].
    pub fn set_hosts<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.hosts = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [certificates][crate::model::DedicatedCertificatePack::certificates].
    pub fn set_certificates<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::CertObject>,
    {
        use std::iter::Iterator;
        self.certificates = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [primary_certificate][crate::model::DedicatedCertificatePack::primary_certificate].
    pub fn set_primary_certificate<T: std::convert::Into<serde_json::Value>>(
        mut self,
        v: T,
    ) -> Self {
        self.primary_certificate = v.into();
        self
    }

    /// Sets the value of [status][crate::model::DedicatedCertificatePack::status].
    pub fn set_status<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.status = v.into();
        self
    }
}

/// The response to ordering a dedicated certificate.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct DedicatedCertificateResp {
    /// The certificate pack.
    pub result: std::option::Option<crate::model::DedicatedCertificatePack>,

    /// Pagination information.
    pub result_info: std::option::Option<crate::model::ResultInfo>,

    /// Operation success flag.
    pub success: bool,

    /// The errors reported by the service.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub errors: std::vec::Vec<serde_json::Value>,

    /// The informational messages reported by the service.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub messages: std::vec::Vec<serde_json::Value>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl DedicatedCertificateResp {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [result][crate::model::DedicatedCertificateResp::result].
    pub fn set_result<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::DedicatedCertificatePack>,
    {
        self.result = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [result][crate::model::DedicatedCertificateResp::result].
    pub fn set_or_clear_result<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::DedicatedCertificatePack>,
    {
        self.result = v.map(|x| x.into());
        self
    }

    /// Sets the value of [result_info][crate::model::DedicatedCertificateResp::result_info].
    pub fn set_result_info<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ResultInfo>,
    {
        self.result_info = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [result_info][crate::model::DedicatedCertificateResp::result_info].
    pub fn set_or_clear_result_info<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ResultInfo>,
    {
        self.result_info = v.map(|x| x.into());
        self
    }

    /// Sets the value of [success][crate::model::DedicatedCertificateResp::success].
    pub fn set_success<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.success = v.into();
        self
    }

    /// Sets the value of [errors][crate::model::DedicatedCertificateResp::errors].
    pub fn set_errors<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<serde_json::Value>,
    {
        use std::iter::Iterator;
        self.errors = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [messages][crate::model::DedicatedCertificateResp::messages].
    pub fn set_messages<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<serde_json::Value>,
    {
        use std::iter::Iterator;
        self.messages = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A custom certificate uploaded to a zone.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct CustomCertPack {
    /// The custom certificate identifier.
    pub id: std::string::String,

    /// The hosts covered by the certificate.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub hosts: std::vec::Vec<std::string::String>,

    /// The certificate issuer.
    pub issuer: std::string::String,

    /// The certificate signature algorithm.
    pub signature: std::string::String,

    /// The certificate status.
    pub status: std::string::String,

    /// The bundle method, see [bundle_method][crate::model::bundle_method].
    pub bundle_method: std::string::String,

    /// The zone identifier.
    pub zone_id: std::string::String,

    /// When the certificate was uploaded.
    pub uploaded_on: std::string::String,

    /// When the certificate was last modified.
    pub modified_on: std::string::String,

    /// When the certificate expires.
    pub expires_on: std::string::String,

    /// The priority of the certificate, used when more than one certificate matches a host.
    pub priority: std::option::Option<f64>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl CustomCertPack {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::CustomCertPack::id].
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [hosts][crate::model::CustomCertPack::hosts].
    pub fn set_hosts<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.hosts = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [issuer][crate::model::CustomCertPack::issuer].
    pub fn set_issuer<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.issuer = v.into();
        self
    }

    /// Sets the value of [signature][crate::model::CustomCertPack::signature].
    pub fn set_signature<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.signature = v.into();
        self
    }

    /// Sets the value of [status][crate::model::CustomCertPack::status].
    pub fn set_status<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.status = v.into();
        self
    }

    /// Sets the value of [bundle_method][crate::model::CustomCertPack::bundle_method].
    pub fn set_bundle_method<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.bundle_method = v.into();
        self
    }

    /// Sets the value of [zone_id][crate::model::CustomCertPack::zone_id].
    pub fn set_zone_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.zone_id = v.into();
        self
    }

    /// Sets the value of [uploaded_on][crate::model::CustomCertPack::uploaded_on].
    pub fn set_uploaded_on<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.uploaded_on = v.into();
        self
    }

    /// Sets the value of [modified_on][crate::model::CustomCertPack::modified_on].
    pub fn set_modified_on<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.modified_on = v.into();
        self
    }

    /// Sets the value of [expires_on][crate::model::CustomCertPack::expires_on].
    pub fn set_expires_on<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.expires_on = v.into();
        self
    }

    /// Sets the value of [priority][crate::model::CustomCertPack::priority].
    pub fn set_priority<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<f64>,
    {
        self.priority = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [priority][crate::model::CustomCertPack::priority].
    pub fn set_or_clear_priority<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<f64>,
    {
        self.priority = v.map(|x| x.into());
        self
    }
}

/// The response to operations on a single custom certificate.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct CustomCertResp {
    /// The custom certificate.
    pub result: std::option::Option<crate::model::CustomCertPack>,

    /// Operation success flag.
    pub success: bool,

    /// The errors reported by the service.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub errors: std::vec::Vec<serde_json::Value>,

    /// The informational messages reported by the service.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub messages: std::vec::Vec<serde_json::Value>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl CustomCertResp {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [result][crate::model::CustomCertResp::result].
    pub fn set_result<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::CustomCertPack>,
    {
        self.result = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [result][crate::model::CustomCertResp::result].
    pub fn set_or_clear_result<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::CustomCertPack>,
    {
        self.result = v.map(|x| x.into());
        self
    }

    /// Sets the value of [success][crate::model::CustomCertResp::success].
    pub fn set_success<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.success = v.into();
        self
    }

    /// Sets the value of [errors][crate::model::CustomCertResp::errors].
    pub fn set_errors<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<serde_json::Value>,
    {
        use std::iter::Iterator;
        self.errors = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [messages][crate::model::CustomCertResp::messages].
    pub fn set_messages<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<serde_json::Value>,
    {
        use std::iter::Iterator;
        self.messages = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The custom certificates in a zone.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ListCustomCertsResp {
    /// The custom certificates.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub result: std::vec::Vec<crate::model::CustomCertPack>,

    /// Pagination information.
    pub result_info: std::option::Option<crate::model::ResultInfo>,

    /// Operation success flag.
    pub success: bool,

    /// The errors reported by the service.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub errors: std::vec::Vec<serde_json::Value>,

    /// The informational messages reported by the service.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub messages: std::vec::Vec<serde_json::Value>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ListCustomCertsResp {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [result][crate::model::ListCustomCertsResp::result].
    pub fn set_result<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::CustomCertPack>,
    {
        use std::iter::Iterator;
        self.result = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [result_info][crate::model::ListCustomCertsResp::result_info].
    pub fn set_result_info<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ResultInfo>,
    {
        self.result_info = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [result_info][crate::model::ListCustomCertsResp::result_info].
    pub fn set_or_clear_result_info<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ResultInfo>,
    {
        self.result_info = v.map(|x| x.into());
        self
    }

    /// Sets the value of [success][crate::model::ListCustomCertsResp::success].
    pub fn set_success<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.success = v.into();
        self
    }

    /// Sets the value of [errors][crate::model::ListCustomCertsResp::errors].
    pub fn set_errors<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<serde_json::Value>,
    {
        use std::iter::Iterator;
        self.errors = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [messages][crate::model::ListCustomCertsResp::messages].
    pub fn set_messages<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<serde_json::Value>,
    {
        use std::iter::Iterator;
        self.messages = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// Identifies a deleted certificate.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct DeleteCertificateResult {
    /// The identifier of the deleted certificate.
    pub id: std::string::String,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl DeleteCertificateResult {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::DeleteCertificateResult::id].
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }
}

/// The response to deleting a certificate.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct DeleteCertificateResp {
    /// The deleted certificate.
    pub result: std::option::Option<crate::model::DeleteCertificateResult>,

    /// Operation success flag.
    pub success: bool,

    /// The errors reported by the service.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub errors: std::vec::Vec<serde_json::Value>,

    /// The informational messages reported by the service.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub messages: std::vec::Vec<serde_json::Value>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl DeleteCertificateResp {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [result][crate::model::DeleteCertificateResp::result].
    pub fn set_result<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::DeleteCertificateResult>,
    {
        self.result = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [result][crate::model::DeleteCertificateResp::result].
    pub fn set_or_clear_result<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::DeleteCertificateResult>,
    {
        self.result = v.map(|x| x.into());
        self
    }

    /// Sets the value of [success][crate::model::DeleteCertificateResp::success].
    pub fn set_success<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.success = v.into();
        self
    }

    /// Sets the value of [errors][crate::model::DeleteCertificateResp::errors].
    pub fn set_errors<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<serde_json::Value>,
    {
        use std::iter::Iterator;
        self.errors = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [messages][crate::model::DeleteCertificateResp::messages].
    pub fn set_messages<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<serde_json::Value>,
    {
        use std::iter::Iterator;
        self.messages = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A zone setting.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ZoneSetting {
    /// The setting identifier, for example `ssl` or `tls_1_3`.
    pub id: std::string::String,

    /// The setting value.
    pub value: std::string::String,

    /// Whether the setting can be changed.
    pub editable: bool,

    /// When the setting was last changed.
    pub modified_on: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ZoneSetting {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::ZoneSetting::id].
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [value][crate::model::ZoneSetting::value].
    pub fn set_value<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.value = v.into();
        self
    }

    /// Sets the value of [editable][crate::model::ZoneSetting::editable].
    pub fn set_editable<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.editable = v.into();
        self
    }

    /// Sets the value of [modified_on][crate::model::ZoneSetting::modified_on].
    pub fn set_modified_on<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.modified_on = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [modified_on][crate::model::ZoneSetting::modified_on].
    pub fn set_or_clear_modified_on<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.modified_on = v.map(|x| x.into());
        self
    }
}

/// The response to reading or changing a zone setting.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct SettingResp {
    /// The setting.
    pub result: std::option::Option<crate::model::ZoneSetting>,

    /// Operation success flag.
    pub success: bool,

    /// The errors reported by the service.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub errors: std::vec::Vec<serde_json::Value>,

    /// The informational messages reported by the service.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub messages: std::vec::Vec<serde_json::Value>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl SettingResp {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [result][crate::model::SettingResp::result].
    pub fn set_result<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ZoneSetting>,
    {
        self.result = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [result][crate::model::SettingResp::result].
    pub fn set_or_clear_result<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ZoneSetting>,
    {
        self.result = v.map(|x| x.into());
        self
    }

    /// Sets the value of [success][crate::model::SettingResp::success].
    pub fn set_success<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.success = v.into();
        self
    }

    /// Sets the value of [errors][crate::model::SettingResp::errors].
    pub fn set_errors<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<serde_json::Value>,
    {
        use std::iter::Iterator;
        self.errors = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [messages][crate::model::SettingResp::messages].
    pub fn set_messages<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<serde_json::Value>,
    {
        use std::iter::Iterator;
        self.messages = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The universal certificate setting.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct UniversalSetting {
    /// Whether the universal certificate is enabled.
    pub enabled: bool,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl UniversalSetting {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [enabled][crate::model::UniversalSetting::enabled].
    pub fn set_enabled<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.enabled = v.into();
        self
    }
}

/// The response to reading or changing the universal certificate setting.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct UniversalSettingResp {
    /// The setting.
    pub result: std::option::Option<crate::model::UniversalSetting>,

    /// Operation success flag.
    pub success: bool,

    /// The errors reported by the service.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub errors: std::vec::Vec<serde_json::Value>,

    /// The informational messages reported by the service.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub messages: std::vec::Vec<serde_json::Value>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl UniversalSettingResp {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [result][crate::model::UniversalSettingResp::result].
    pub fn set_result<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::UniversalSetting>,
    {
        self.result = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [result][crate::model::UniversalSettingResp::result].
    pub fn set_or_clear_result<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::UniversalSetting>,
    {
        self.result = v.map(|x| x.into());
        self
    }

    /// Sets the value of [success][crate::model::UniversalSettingResp::success].
    pub fn set_success<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.success = v.into();
        self
    }

    /// Sets the value of [errors][crate::model::UniversalSettingResp::errors].
    pub fn set_errors<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<serde_json::Value>,
    {
        use std::iter::Iterator;
        self.errors = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [messages][crate::model::UniversalSettingResp::messages].
    pub fn set_messages<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<serde_json::Value>,
    {
        use std::iter::Iterator;
        self.messages = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The priority of a custom certificate.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct CertPriorityReqCertificatesItem {
    /// The custom certificate identifier.
    pub id: std::string::String,

    /// The new priority, lower values take precedence.
    pub priority: i64,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl CertPriorityReqCertificatesItem {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::CertPriorityReqCertificatesItem::id].
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [priority][crate::model::CertPriorityReqCertificatesItem::priority].
    pub fn set_priority<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.priority = v.into();
        self
    }
}

/// Restricts where the private key of a custom certificate is stored.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct CustomCertReqGeoRestrictions {
    /// The region label, see [geo_restriction][crate::model::geo_restriction].
    pub label: std::string::String,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl CustomCertReqGeoRestrictions {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [label][crate::model::CustomCertReqGeoRestrictions::label].
    pub fn set_label<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.label = v.into();
        self
    }
}

/// The known values for the SSL mode of a zone.
pub mod ssl_mode {
    pub const OFF: &str = "off";
    pub const FLEXIBLE: &str = "flexible";
    pub const FULL: &str = "full";
    pub const STRICT: &str = "strict";
}

/// The known values for the TLS 1.2 only and TLS 1.3 settings.
pub mod tls_setting {
    pub const ON: &str = "on";
    pub const OFF: &str = "off";
    /// Enables TLS 1.3 with 0-RTT. Only valid for the TLS 1.3 setting.
    pub const ZRT: &str = "zrt";
}

/// The known values for the bundle method of a custom certificate.
pub mod bundle_method {
    pub const UBIQUITOUS: &str = "ubiquitous";
    pub const OPTIMAL: &str = "optimal";
    pub const FORCE: &str = "force";
}

/// The known values for the type of a certificate pack.
pub mod certificate_type {
    pub const DEDICATED: &str = "dedicated";
}

/// The known values for the geo restriction of a custom certificate.
pub mod geo_restriction {
    pub const US: &str = "us";
    pub const EU: &str = "eu";
    pub const HIGHEST_SECURITY: &str = "highest_security";
}

/// The request message for [SslCertificate::list_certificates][crate::client::SslCertificate::list_certificates].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListCertificatesRequest {
    /// The CRN of the CIS instance.
    pub crn: std::string::String,

    /// The zone identifier.
    pub zone_identifier: std::string::String,

    /// Sent as the `X-Correlation-ID` header, used to trace the request.
    pub x_correlation_id: std::option::Option<std::string::String>,
}

impl ListCertificatesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [crn][crate::model::ListCertificatesRequest::crn].
    ///
    /// This is a **required** field for requests.
    pub fn set_crn<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.crn = v.into();
        self
    }

    /// Sets the value of [zone_identifier][crate::model::ListCertificatesRequest::zone_identifier].
    ///
    /// This is a **required** field for requests.
    pub fn set_zone_identifier<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.zone_identifier = v.into();
        self
    }

    /// Sets the value of [x_correlation_id][crate::model::ListCertificatesRequest::x_correlation_id].
    pub fn set_x_correlation_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.x_correlation_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [x_correlation_id][crate::model::ListCertificatesRequest::x_correlation_id].
    pub fn set_or_clear_x_correlation_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.x_correlation_id = v.map(|x| x.into());
        self
    }
}

/// The request message for [SslCertificate::order_certificate][crate::client::SslCertificate::order_certificate].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct OrderCertificateRequest {
    /// The CRN of the CIS instance.
    pub crn: std::string::String,

    /// The zone identifier.
    pub zone_identifier: std::string::String,

    /// Sent as the `X-Correlation-ID` header, used to trace the request.
    pub x_correlation_id: std::option::Option<std::string::String>,

    /// The certificate type, see [certificate_type][crate::model::certificate_type].
    pub r#type: std::option::Option<std::string::String>,

    /// The hosts covered by the certificate.
    pub hosts: std::vec::Vec<std::string::String>,
}

impl OrderCertificateRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [crn][crate::model::OrderCertificateRequest::crn].
    ///
    /// This is a **required** field for requests.
    pub fn set_crn<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.crn = v.into();
        self
    }

    /// Sets the value of [zone_identifier][crate::model::OrderCertificateRequest::zone_identifier].
    ///
    /// This is a **required** field for requests.
    pub fn set_zone_identifier<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.zone_identifier = v.into();
        self
    }

    /// Sets the value of [x_correlation_id][crate::model::OrderCertificateRequest::x_correlation_id].
    pub fn set_x_correlation_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.x_correlation_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [x_correlation_id][crate::model::OrderCertificateRequest::x_correlation_id].
    pub fn set_or_clear_x_correlation_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.x_correlation_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [r#type][crate::model::OrderCertificateRequest::r#type].
    pub fn set_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.r#type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [r#type][crate::model::OrderCertificateRequest::r#type].
    pub fn set_or_clear_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.r#type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [hosts][crate::model::OrderCertificateRequest::hosts].
    ///
    /// This is a **required** field for requests.
    pub fn set_hosts<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.hosts = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The request message for [SslCertificate::delete_certificate][crate::client::SslCertificate::delete_certificate].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteCertificateRequest {
    /// The CRN of the CIS instance.
    pub crn: std::string::String,

    /// The zone identifier.
    pub zone_identifier: std::string::String,

    /// The certificate pack identifier.
    pub cert_identifier: std::string::String,

    /// Sent as the `X-Correlation-ID` header, used to trace the request.
    pub x_correlation_id: std::option::Option<std::string::String>,
}

impl DeleteCertificateRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [crn][crate::model::DeleteCertificateRequest::crn].
    ///
    /// This is a **required** field for requests.
    pub fn set_crn<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.crn = v.into();
        self
    }

    /// Sets the value of [zone_identifier][crate::model::DeleteCertificateRequest::zone_identifier].
    ///
    /// This is a **required** field for requests.
    pub fn set_zone_identifier<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.zone_identifier = v.into();
        self
    }

    /// Sets the value of [cert_identifier][crate::model::DeleteCertificateRequest::cert_identifier].
    ///
    /// This is a **required** field for requests.
    pub fn set_cert_identifier<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.cert_identifier = v.into();
        self
    }

    /// Sets the value of [x_correlation_id][crate::model::DeleteCertificateRequest::x_correlation_id].
    pub fn set_x_correlation_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.x_correlation_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [x_correlation_id][crate::model::DeleteCertificateRequest::x_correlation_id].
    pub fn set_or_clear_x_correlation_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.x_correlation_id = v.map(|x| x.into());
        self
    }
}

/// The request message for [SslCertificate::get_ssl_setting][crate::client::SslCertificate::get_ssl_setting].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetSslSettingRequest {
    /// The CRN of the CIS instance.
    pub crn: std::string::String,

    /// The zone identifier.
    pub zone_identifier: std::string::String,

    /// Sent as the `X-Correlation-ID` header, used to trace the request.
    pub x_correlation_id: std::option::Option<std::string::String>,
}

impl GetSslSettingRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [crn][crate::model::GetSslSettingRequest::crn].
    ///
    /// This is a **required** field for requests.
    pub fn set_crn<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.crn = v.into();
        self
    }

    /// Sets the value of [zone_identifier][crate::model::GetSslSettingRequest::zone_identifier].
    ///
    /// This is a **required** field for requests.
    pub fn set_zone_identifier<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.zone_identifier = v.into();
        self
    }

    /// Sets the value of [x_correlation_id][crate::model::GetSslSettingRequest::x_correlation_id].
    pub fn set_x_correlation_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.x_correlation_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [x_correlation_id][crate::model::GetSslSettingRequest::x_correlation_id].
    pub fn set_or_clear_x_correlation_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.x_correlation_id = v.map(|x| x.into());
        self
    }
}

/// The request message for [SslCertificate::change_ssl_setting][crate::client::SslCertificate::change_ssl_setting].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ChangeSslSettingRequest {
    /// The CRN of the CIS instance.
    pub crn: std::string::String,

    /// The zone identifier.
    pub zone_identifier: std::string::String,

    /// Sent as the `X-Correlation-ID` header, used to trace the request.
    pub x_correlation_id: std::option::Option<std::string::String>,

    /// The new value, see [ssl_mode][crate::model::ssl_mode].
    pub value: std::option::Option<std::string::String>,
}

impl ChangeSslSettingRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [crn][crate::model::ChangeSslSettingRequest::crn].
    ///
    /// This is a **required** field for requests.
    pub fn set_crn<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.crn = v.into();
        self
    }

    /// Sets the value of [zone_identifier][crate::model::ChangeSslSettingRequest::zone_identifier].
    ///
    /// This is a **required** field for requests.
    pub fn set_zone_identifier<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.zone_identifier = v.into();
        self
    }

    /// Sets the value of [x_correlation_id][crate::model::ChangeSslSettingRequest::x_correlation_id].
    pub fn set_x_correlation_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.x_correlation_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [x_correlation_id][crate::model::ChangeSslSettingRequest::x_correlation_id].
    pub fn set_or_clear_x_correlation_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.x_correlation_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [value][crate::model::ChangeSslSettingRequest::value].
    pub fn set_value<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.value = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [value][crate::model::ChangeSslSettingRequest::value].
    pub fn set_or_clear_value<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.value = v.map(|x| x.into());
        self
    }
}

/// The request message for [SslCertificate::list_custom_certificates][crate::client::SslCertificate::list_custom_certificates].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListCustomCertificatesRequest {
    /// The CRN of the CIS instance.
    pub crn: std::string::String,

    /// The zone identifier.
    pub zone_identifier: std::string::String,

    /// Sent as the `X-Correlation-ID` header, used to trace the request.
    pub x_correlation_id: std::option::Option<std::string::String>,
}

impl ListCustomCertificatesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [crn][crate::model::ListCustomCertificatesRequest::crn].
    ///
    /// This is a **required** field for requests.
    pub fn set_crn<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.crn = v.into();
        self
    }

    /// Sets the value of [zone_identifier][crate::model::ListCustomCertificatesRequest::zone_identifier].
    ///
    /// This is a **required** field for requests.
    pub fn set_zone_identifier<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.zone_identifier = v.into();
        self
    }

    /// Sets the value of [x_correlation_id][crate::model::ListCustomCertificatesRequest::x_correlation_id].
    pub fn set_x_correlation_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.x_correlation_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [x_correlation_id][crate::model::ListCustomCertificatesRequest::x_correlation_id].
    pub fn set_or_clear_x_correlation_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.x_correlation_id = v.map(|x| x.into());
        self
    }
}

/// The request message for [SslCertificate::upload_custom_certificate][crate::client::SslCertificate::upload_custom_certificate].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct UploadCustomCertificateRequest {
    /// The CRN of the CIS instance.
    pub crn: std::string::String,

    /// The zone identifier.
    pub zone_identifier: std::string::String,

    /// Sent as the `X-Correlation-ID` header, used to trace the request.
    pub x_correlation_id: std::option::Option<std::string::String>,

    /// The PEM encoded certificate.
    pub certificate: std::option::Option<std::string::String>,

    /// The PEM encoded private key.
    pub private_key: std::option::Option<std::string::String>,

    /// How the certificate chain is built, see [bundle_method][crate::model::bundle_method].
    pub bundle_method: std::option::Option<std::string::String>,

    /// Restricts where the private key is stored.
    pub geo_restrictions: std::option::Option<crate::model::CustomCertReqGeoRestrictions>,
}

impl UploadCustomCertificateRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [crn][crate::model::UploadCustomCertificateRequest::crn].
    ///
    /// This is a **required** field for requests.
    pub fn set_crn<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.crn = v.into();
        self
    }

    /// Sets the value of [zone_identifier][crate::model::UploadCustomCertificateRequest::zone_identifier].
    ///
    /// This is a **required** field for requests.
    pub fn set_zone_identifier<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.zone_identifier = v.into();
        self
    }

    /// Sets the value of [x_correlation_id][crate::model::UploadCustomCertificateRequest::x_correlation_id].
    pub fn set_x_correlation_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.x_correlation_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [x_correlation_id][crate::model::UploadCustomCertificateRequest::x_correlation_id].
    pub fn set_or_clear_x_correlation_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.x_correlation_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [certificate][crate::model::UploadCustomCertificateRequest::certificate].
    ///
    /// This is a **required** field for requests.
    pub fn set_certificate<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.certificate = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [certificate][crate::model::UploadCustomCertificateRequest::certificate].
    pub fn set_or_clear_certificate<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.certificate = v.map(|x| x.into());
        self
    }

    /// Sets the value of [private_key][crate::model::UploadCustomCertificateRequest::private_key].
    ///
    /// This is a **required** field for requests.
    pub fn set_private_key<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.private_key = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [private_key][crate::model::UploadCustomCertificateRequest::private_key].
    pub fn set_or_clear_private_key<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.private_key = v.map(|x| x.into());
        self
    }

    /// Sets the value of [bundle_method][crate::model::UploadCustomCertificateRequest::bundle_method].
    pub fn set_bundle_method<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.bundle_method = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [bundle_method][crate::model::UploadCustomCertificateRequest::bundle_method].
    pub fn set_or_clear_bundle_method<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.bundle_method = v.map(|x| x.into());
        self
    }

    /// Sets the value of [geo_restrictions][crate::model::UploadCustomCertificateRequest::geo_restrictions].
    pub fn set_geo_restrictions<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::CustomCertReqGeoRestrictions>,
    {
        self.geo_restrictions = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [geo_restrictions][crate::model::UploadCustomCertificateRequest::geo_restrictions].
    pub fn set_or_clear_geo_restrictions<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::CustomCertReqGeoRestrictions>,
    {
        self.geo_restrictions = v.map(|x| x.into());
        self
    }
}

/// The request message for [SslCertificate::get_custom_certificate][crate::client::SslCertificate::get_custom_certificate].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetCustomCertificateRequest {
    /// The CRN of the CIS instance.
    pub crn: std::string::String,

    /// The zone identifier.
    pub zone_identifier: std::string::String,

    /// The custom certificate identifier.
    pub custom_cert_id: std::string::String,

    /// Sent as the `X-Correlation-ID` header, used to trace the request.
    pub x_correlation_id: std::option::Option<std::string::String>,
}

impl GetCustomCertificateRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [crn][crate::model::GetCustomCertificateRequest::crn].
    ///
    /// This is a **required** field for requests.
    pub fn set_crn<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.crn = v.into();
        self
    }

    /// Sets the value of [zone_identifier][crate::model::GetCustomCertificateRequest::zone_identifier].
    ///
    /// This is a **required** field for requests.
    pub fn set_zone_identifier<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.zone_identifier = v.into();
        self
    }

    /// Sets the value of [custom_cert_id][crate::model::GetCustomCertificateRequest::custom_cert_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_custom_cert_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.custom_cert_id = v.into();
        self
    }

    /// Sets the value of [x_correlation_id][crate::model::GetCustomCertificateRequest::x_correlation_id].
    pub fn set_x_correlation_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.x_correlation_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [x_correlation_id][crate::model::GetCustomCertificateRequest::x_correlation_id].
    pub fn set_or_clear_x_correlation_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.x_correlation_id = v.map(|x| x.into());
        self
    }
}

/// The request message for [SslCertificate::update_custom_certificate][crate::client::SslCertificate::update_custom_certificate].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct UpdateCustomCertificateRequest {
    /// The CRN of the CIS instance.
    pub crn: std::string::String,

    /// The zone identifier.
    pub zone_identifier: std::string::String,

    /// The custom certificate identifier.
    pub custom_cert_id: std::string::String,

    /// Sent as the `X-Correlation-ID` header, used to trace the request.
    pub x_correlation_id: std::option::Option<std::string::String>,

    /// The PEM encoded certificate.
    pub certificate: std::option::Option<std::string::String>,

    /// The PEM encoded private key.
    pub private_key: std::option::Option<std::string::String>,

    /// How the certificate chain is built, see [bundle_method][crate::model::bundle_method].
    pub bundle_method: std::option::Option<std::string::String>,

    /// Restricts where the private key is stored.
    pub geo_restrictions: std::option::Option<crate::model::CustomCertReqGeoRestrictions>,
}

impl UpdateCustomCertificateRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [crn][crate::model::UpdateCustomCertificateRequest::crn].
    ///
    /// This is a **required** field for requests.
    pub fn set_crn<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.crn = v.into();
        self
    }

    /// Sets the value of [zone_identifier][crate::model::UpdateCustomCertificateRequest::zone_identifier].
    ///
    /// This is a **required** field for requests.
    pub fn set_zone_identifier<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.zone_identifier = v.into();
        self
    }

    /// Sets the value of [custom_cert_id][crate::model::UpdateCustomCertificateRequest::custom_cert_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_custom_cert_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.custom_cert_id = v.into();
        self
    }

    /// Sets the value of [x_correlation_id][crate::model::UpdateCustomCertificateRequest::x_correlation_id].
    pub fn set_x_correlation_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.x_correlation_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [x_correlation_id][crate::model::UpdateCustomCertificateRequest::x_correlation_id].
    pub fn set_or_clear_x_correlation_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.x_correlation_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [certificate][crate::model::UpdateCustomCertificateRequest::certificate].
    pub fn set_certificate<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.certificate = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [certificate][crate::model::UpdateCustomCertificateRequest::certificate].
    pub fn set_or_clear_certificate<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.certificate = v.map(|x| x.into());
        self
    }

    /// Sets the value of [private_key][crate::model::UpdateCustomCertificateRequest::private_key].
    pub fn set_private_key<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.private_key = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [private_key][crate::model::UpdateCustomCertificateRequest::private_key].
    pub fn set_or_clear_private_key<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.private_key = v.map(|x| x.into());
        self
    }

    /// Sets the value of [bundle_method][crate::model::UpdateCustomCertificateRequest::bundle_method].
    pub fn set_bundle_method<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.bundle_method = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [bundle_method][crate::model::UpdateCustomCertificateRequest::bundle_method].
    pub fn set_or_clear_bundle_method<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.bundle_method = v.map(|x| x.into());
        self
    }

    /// Sets the value of [geo_restrictions][crate::model::UpdateCustomCertificateRequest::geo_restrictions].
    pub fn set_geo_restrictions<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::CustomCertReqGeoRestrictions>,
    {
        self.geo_restrictions = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [geo_restrictions][crate::model::UpdateCustomCertificateRequest::geo_restrictions].
    pub fn set_or_clear_geo_restrictions<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::CustomCertReqGeoRestrictions>,
    {
        self.geo_restrictions = v.map(|x| x.into());
        self
    }
}

/// The request message for [SslCertificate::delete_custom_certificate][crate::client::SslCertificate::delete_custom_certificate].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteCustomCertificateRequest {
    /// The CRN of the CIS instance.
    pub crn: std::string::String,

    /// The zone identifier.
    pub zone_identifier: std::string::String,

    /// The custom certificate identifier.
    pub custom_cert_id: std::string::String,

    /// Sent as the `X-Correlation-ID` header, used to trace the request.
    pub x_correlation_id: std::option::Option<std::string::String>,
}

impl DeleteCustomCertificateRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [crn][crate::model::DeleteCustomCertificateRequest::crn].
    ///
    /// This is a **required** field for requests.
    pub fn set_crn<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.crn = v.into();
        self
    }

    /// Sets the value of [zone_identifier][crate::model::DeleteCustomCertificateRequest::zone_identifier].
    ///
    /// This is a **required** field for requests.
    pub fn set_zone_identifier<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.zone_identifier = v.into();
        self
    }

    /// Sets the value of [custom_cert_id][crate::model::DeleteCustomCertificateRequest::custom_cert_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_custom_cert_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.custom_cert_id = v.into();
        self
    }

    /// Sets the value of [x_correlation_id][crate::model::DeleteCustomCertificateRequest::x_correlation_id].
    pub fn set_x_correlation_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.x_correlation_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [x_correlation_id][crate::model::DeleteCustomCertificateRequest::x_correlation_id].
    pub fn set_or_clear_x_correlation_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.x_correlation_id = v.map(|x| x.into());
        self
    }
}

/// The request message for [SslCertificate::change_certificate_priority][crate::client::SslCertificate::change_certificate_priority].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ChangeCertificatePriorityRequest {
    /// The CRN of the CIS instance.
    pub crn: std::string::String,

    /// The zone identifier.
    pub zone_identifier: std::string::String,

    /// Sent as the `X-Correlation-ID` header, used to trace the request.
    pub x_correlation_id: std::option::Option<std::string::String>,

    /// The new priorities.
    pub certificates: std::vec::Vec<crate::model::CertPriorityReqCertificatesItem>,
}

impl ChangeCertificatePriorityRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [crn][crate::model::ChangeCertificatePriorityRequest::crn].
    ///
    /// This is a **required** field for requests.
    pub fn set_crn<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.crn = v.into();
        self
    }

    /// Sets the value of [zone_identifier][crate::model::ChangeCertificatePriorityRequest::zone_identifier].
    ///
    /// This is a **required** field for requests.
    pub fn set_zone_identifier<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.zone_identifier = v.into();
        self
    }

    /// Sets the value of [x_correlation_id][crate::model::ChangeCertificatePriorityRequest::x_correlation_id].
    pub fn set_x_correlation_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.x_correlation_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [x_correlation_id][crate::model::ChangeCertificatePriorityRequest::x_correlation_id].
    pub fn set_or_clear_x_correlation_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.x_correlation_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [certificates][crate::model::ChangeCertificatePriorityRequest::certificates].
    pub fn set_certificates<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::CertPriorityReqCertificatesItem>,
    {
        use std::iter::Iterator;
        self.certificates = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The request message for [SslCertificate::get_universal_certificate_setting][crate::client::SslCertificate::get_universal_certificate_setting].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetUniversalCertificateSettingRequest {
    /// The CRN of the CIS instance.
    pub crn: std::string::String,

    /// The zone identifier.
    pub zone_identifier: std::string::String,

    /// Sent as the `X-Correlation-ID` header, used to trace the request.
    pub x_correlation_id: std::option::Option<std::string::String>,
}

impl GetUniversalCertificateSettingRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [crn][crate::model::GetUniversalCertificateSettingRequest::crn].
    ///
    /// This is a **required** field for requests.
    pub fn set_crn<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.crn = v.into();
        self
    }

    /// Sets the value of [zone_identifier][crate::model::GetUniversalCertificateSettingRequest::zone_identifier].
    ///
    /// This is a **required** field for requests.
    pub fn set_zone_identifier<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.zone_identifier = v.into();
        self
    }

    /// Sets the value of [x_correlation_id][crate::model::GetUniversalCertificateSettingRequest::x_correlation_id].
    pub fn set_x_correlation_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.x_correlation_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [x_correlation_id][crate::model::GetUniversalCertificateSettingRequest::x_correlation_id].
    pub fn set_or_clear_x_correlation_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.x_correlation_id = v.map(|x| x.into());
        self
    }
}

/// The request message for [SslCertificate::change_universal_certificate_setting][crate::client::SslCertificate::change_universal_certificate_setting].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ChangeUniversalCertificateSettingRequest {
    /// The CRN of the CIS instance.
    pub crn: std::string::String,

    /// The zone identifier.
    pub zone_identifier: std::string::String,

    /// Sent as the `X-Correlation-ID` header, used to trace the request.
    pub x_correlation_id: std::option::Option<std::string::String>,

    /// Whether the universal certificate is enabled.
    pub enabled: std::option::Option<bool>,
}

impl ChangeUniversalCertificateSettingRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [crn][crate::model::ChangeUniversalCertificateSettingRequest::crn].
    ///
    /// This is a **required** field for requests.
    pub fn set_crn<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.crn = v.into();
        self
    }

    /// Sets the value of [zone_identifier][crate::model::ChangeUniversalCertificateSettingRequest::zone_identifier].
    ///
    /// This is a **required** field for requests.
    pub fn set_zone_identifier<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.zone_identifier = v.into();
        self
    }

    /// Sets the value of [x_correlation_id][crate::model::ChangeUniversalCertificateSettingRequest::x_correlation_id].
    pub fn set_x_correlation_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.x_correlation_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [x_correlation_id][crate::model::ChangeUniversalCertificateSettingRequest::x_correlation_id].
    pub fn set_or_clear_x_correlation_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.x_correlation_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [enabled][crate::model::ChangeUniversalCertificateSettingRequest::enabled].
    pub fn set_enabled<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [enabled][crate::model::ChangeUniversalCertificateSettingRequest::enabled].
    pub fn set_or_clear_enabled<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.enabled = v.map(|x| x.into());
        self
    }
}

/// The request message for [SslCertificate::get_tls12_setting][crate::client::SslCertificate::get_tls12_setting].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetTls12SettingRequest {
    /// The CRN of the CIS instance.
    pub crn: std::string::String,

    /// The zone identifier.
    pub zone_identifier: std::string::String,

    /// Sent as the `X-Correlation-ID` header, used to trace the request.
    pub x_correlation_id: std::option::Option<std::string::String>,
}

impl GetTls12SettingRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [crn][crate::model::GetTls12SettingRequest::crn].
    ///
    /// This is a **required** field for requests.
    pub fn set_crn<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.crn = v.into();
        self
    }

    /// Sets the value of [zone_identifier][crate::model::GetTls12SettingRequest::zone_identifier].
    ///
    /// This is a **required** field for requests.
    pub fn set_zone_identifier<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.zone_identifier = v.into();
        self
    }

    /// Sets the value of [x_correlation_id][crate::model::GetTls12SettingRequest::x_correlation_id].
    pub fn set_x_correlation_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.x_correlation_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [x_correlation_id][crate::model::GetTls12SettingRequest::x_correlation_id].
    pub fn set_or_clear_x_correlation_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.x_correlation_id = v.map(|x| x.into());
        self
    }
}

/// The request message for [SslCertificate::change_tls12_setting][crate::client::SslCertificate::change_tls12_setting].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ChangeTls12SettingRequest {
    /// The CRN of the CIS instance.
    pub crn: std::string::String,

    /// The zone identifier.
    pub zone_identifier: std::string::String,

    /// Sent as the `X-Correlation-ID` header, used to trace the request.
    pub x_correlation_id: std::option::Option<std::string::String>,

    /// The new value, see [tls_setting][crate::model::tls_setting].
    pub value: std::option::Option<std::string::String>,
}

impl ChangeTls12SettingRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [crn][crate::model::ChangeTls12SettingRequest::crn].
    ///
    /// This is a **required** field for requests.
    pub fn set_crn<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.crn = v.into();
        self
    }

    /// Sets the value of [zone_identifier][crate::model::ChangeTls12SettingRequest::zone_identifier].
    ///
    /// This is a **required** field for requests.
    pub fn set_zone_identifier<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.zone_identifier = v.into();
        self
    }

    /// Sets the value of [x_correlation_id][crate::model::ChangeTls12SettingRequest::x_correlation_id].
    pub fn set_x_correlation_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.x_correlation_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [x_correlation_id][crate::model::ChangeTls12SettingRequest::x_correlation_id].
    pub fn set_or_clear_x_correlation_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.x_correlation_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [value][crate::model::ChangeTls12SettingRequest::value].
    pub fn set_value<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.value = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [value][crate::model::ChangeTls12SettingRequest::value].
    pub fn set_or_clear_value<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.value = v.map(|x| x.into());
        self
    }
}

/// The request message for [SslCertificate::get_tls13_setting][crate::client::SslCertificate::get_tls13_setting].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetTls13SettingRequest {
    /// The CRN of the CIS instance.
    pub crn: std::string::String,

    /// The zone identifier.
    pub zone_identifier: std::string::String,

    /// Sent as the `X-Correlation-ID` header, used to trace the request.
    pub x_correlation_id: std::option::Option<std::string::String>,
}

impl GetTls13SettingRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [crn][crate::model::GetTls13SettingRequest::crn].
    ///
    /// This is a **required** field for requests.
    pub fn set_crn<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.crn = v.into();
        self
    }

    /// Sets the value of [zone_identifier][crate::model::GetTls13SettingRequest::zone_identifier].
    ///
    /// This is a **required** field for requests.
    pub fn set_zone_identifier<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.zone_identifier = v.into();
        self
    }

    /// Sets the value of [x_correlation_id][crate::model::GetTls13SettingRequest::x_correlation_id].
    pub fn set_x_correlation_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.x_correlation_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [x_correlation_id][crate::model::GetTls13SettingRequest::x_correlation_id].
    pub fn set_or_clear_x_correlation_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.x_correlation_id = v.map(|x| x.into());
        self
    }
}

/// The request message for [SslCertificate::change_tls13_setting][crate::client::SslCertificate::change_tls13_setting].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ChangeTls13SettingRequest {
    /// The CRN of the CIS instance.
    pub crn: std::string::String,

    /// The zone identifier.
    pub zone_identifier: std::string::String,

    /// Sent as the `X-Correlation-ID` header, used to trace the request.
    pub x_correlation_id: std::option::Option<std::string::String>,

    /// The new value, see [tls_setting][crate::model::tls_setting].
    pub value: std::option::Option<std::string::String>,
}

impl ChangeTls13SettingRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [crn][crate::model::ChangeTls13SettingRequest::crn].
    ///
    /// This is a **required** field for requests.
    pub fn set_crn<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.crn = v.into();
        self
    }

    /// Sets the value of [zone_identifier][crate::model::ChangeTls13SettingRequest::zone_identifier].
    ///
    /// This is a **required** field for requests.
    pub fn set_zone_identifier<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.zone_identifier = v.into();
        self
    }

    /// Sets the value of [x_correlation_id][crate::model::ChangeTls13SettingRequest::x_correlation_id].
    pub fn set_x_correlation_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.x_correlation_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [x_correlation_id][crate::model::ChangeTls13SettingRequest::x_correlation_id].
    pub fn set_or_clear_x_correlation_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.x_correlation_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [value][crate::model::ChangeTls13SettingRequest::value].
    pub fn set_value<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.value = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [value][crate::model::ChangeTls13SettingRequest::value].
    pub fn set_or_clear_value<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.value = v.map(|x| x.into());
        self
    }
}
