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

//! SDK header helpers.
//!
//! Every request carries a `User-Agent` header identifying this SDK, and an
//! `X-IBMCloud-SDK-Analytics` header identifying the service and the
//! operation.

/// The name of the analytics header.
pub const X_IBMCLOUD_SDK_ANALYTICS: &str = "x-ibmcloud-sdk-analytics";

/// The name of this SDK, as reported in the `User-Agent` header.
pub const SDK_NAME: &str = "ibm-networking-rust-sdk";

mod build_info {
    // The file has been placed there by the build script.
    include!(concat!(env!("OUT_DIR"), "/build_env.rs"));

    pub(crate) const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
}

/// Generated libraries create one static instance of this struct per
/// service.
#[derive(Debug, PartialEq)]
pub struct SdkAnalytics {
    pub service_name: &'static str,
    pub service_version: &'static str,
}

impl SdkAnalytics {
    /// Format the value of the `X-IBMCloud-SDK-Analytics` header.
    pub fn header_value(&self, operation_id: &str) -> String {
        format!(
            "service_name={};service_version={};operation_id={operation_id}",
            self.service_name, self.service_version
        )
    }
}

/// The default value for the `User-Agent` header.
pub fn user_agent() -> String {
    // Strip out the initial "rustc " string from `RUSTC_VERSION`. If not
    // found, leave RUSTC_VERSION unchanged.
    let rustc_version = build_info::RUSTC_VERSION;
    let rustc_version = rustc_version
        .strip_prefix("rustc ")
        .unwrap_or(build_info::RUSTC_VERSION);
    format!(
        "{SDK_NAME}/{} (lang=rust; target={}; rust.version={rustc_version})",
        build_info::PKG_VERSION,
        build_info::TARGET,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analytics() {
        let header = SdkAnalytics {
            service_name: "direct_link_provider",
            service_version: "V2",
        };
        assert_eq!(
            header.header_value("list_provider_gateways"),
            "service_name=direct_link_provider;service_version=V2;operation_id=list_provider_gateways"
        );
    }

    #[test]
    fn user_agent_format() {
        let got = user_agent();
        assert!(
            got.starts_with(&format!("{SDK_NAME}/{}", build_info::PKG_VERSION)),
            "{got}"
        );
        assert!(got.contains("lang=rust"), "{got}");
        assert!(got.contains(build_info::TARGET), "{got}");
        let want = build_info::RUSTC_VERSION;
        assert!(
            got.contains(&format!("rust.version={want}")),
            "mismatched rustc version {want} and {got}"
        );
        // The value must be usable as a header.
        assert!(http::HeaderValue::from_str(&got).is_ok(), "{got}");
    }
}
