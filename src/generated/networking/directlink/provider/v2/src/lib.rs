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

//! IBM Cloud networking client libraries for Rust - Direct Link Provider API
//!
//! This crate contains traits, types, and functions to interact with the
//! Direct Link Provider API. Direct Link Connect providers use this API to
//! manage the gateways they create for IBM Cloud customers, and to list the
//! ports available to them.
//!
//! # Example
//! ```no_run
//! # async fn sample() -> anyhow::Result<()> {
//! use ibm_cloud_networking_directlink_provider_v2::client::DirectLinkProvider;
//! let client = DirectLinkProvider::builder().build().await?;
//! let response = client.get_provider_gateway("0a06fb9b-820f-4c44-8a31-77f1f0806d28").send().await?;
//! println!("{:?}", response.body());
//! # Ok(()) }
//! ```
//!
//! The main types to work with this crate are the clients:
//!
//! * [DirectLinkProvider](client/struct.DirectLinkProvider.html)
//!
//! The client reads its configuration from the `DIRECT_LINK_PROVIDER_*`
//! environment variables, unless the application provides credentials or an
//! [ExternalConfig][gax::external_config::ExternalConfig] in the builder.

pub use gax::Result;
pub use gax::error::Error;

/// Request and client builders.
pub mod builder;

/// The messages and enums that are part of this client library.
pub mod model;

/// Concrete implementations of this client library traits.
pub mod client;

/// Traits to mock the clients in this client library.
pub mod stub;

#[doc(hidden)]
pub(crate) mod tracing;

#[doc(hidden)]
pub(crate) mod transport;

/// The default host used by the service.
const DEFAULT_HOST: &str = "https://directlink.cloud.ibm.com/provider/v2";

/// The name used to find the external configuration of this service.
pub const SERVICE_NAME: &str = "direct_link_provider";

/// The API version used by the clients, unless changed with
/// [with_version()][client::DirectLinkProvider::with_version].
pub const DEFAULT_VERSION: &str = "2020-03-31";

pub(crate) mod info {
    pub(crate) static ANALYTICS: gaxi::api_header::SdkAnalytics = gaxi::api_header::SdkAnalytics {
        service_name: crate::SERVICE_NAME,
        service_version: "V2",
    };
}
