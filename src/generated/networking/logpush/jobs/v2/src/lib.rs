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

//! IBM Cloud networking client libraries for Rust - Logpush Jobs API
//!
//! This crate contains traits, types, and functions to interact with the
//! Logpush Jobs API. Logpush jobs push the request, firewall, and DNS logs of
//! an IBM Cloud Internet Services (CIS) zone to a destination of your choice.
//!
//! # Example
//! ```no_run
//! # async fn sample() -> anyhow::Result<()> {
//! use ibm_cloud_networking_logpush_jobs_v2::client::LogpushJobs;
//! use ibm_cloud_networking_logpush_jobs_v2::model::*;
//! let client = LogpushJobs::builder().build().await?;
//! let job = CreateLogpushJobIbmclV2Request::new()
//!     .set_ibmcl(
//!         LogpushJobIbmclReq::new()
//!             .set_instance_id("90d208cb-fa8c-4a8e-9f2b-38c4c8d1c0f1")
//!             .set_region("us-south")
//!             .set_api_key("my-api-key"),
//!     )
//!     .set_name("my-job")
//!     .set_dataset(dataset::HTTP_REQUESTS);
//! let response = client
//!     .create_logpush_job_v2("crn:v1:bluemix:public:internet-svcs:global:a/abc:123::", "zone-1")
//!     .set_job(job)
//!     .send()
//!     .await?;
//! println!("{:?}", response.body());
//! # Ok(()) }
//! ```
//!
//! The main types to work with this crate are the clients:
//!
//! * [LogpushJobs](client/struct.LogpushJobs.html)
//!
//! The client reads its configuration from the `LOGPUSH_JOBS_API_*`
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
const DEFAULT_HOST: &str = "https://api.cis.cloud.ibm.com";

/// The name used to find the external configuration of this service.
pub const SERVICE_NAME: &str = "logpush_jobs_api";

pub(crate) mod info {
    pub(crate) static ANALYTICS: gaxi::api_header::SdkAnalytics = gaxi::api_header::SdkAnalytics {
        service_name: crate::SERVICE_NAME,
        service_version: "V2",
    };
}
