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

//! IBM Cloud networking API helpers.
//!
//! This crate contains a number of types and functions used in the
//! implementation of the IBM Cloud networking client libraries for Rust.
//! Applications use these types to configure clients, to set per-request
//! options, and to examine errors.

/// An alias of [std::result::Result] where the error is always [crate::error::Error].
///
/// This is the result type used by all functions wrapping IBM Cloud requests.
pub type Result<T> = std::result::Result<T, crate::error::Error>;

pub mod backoff_policy;
pub mod client_builder;

/// The core error types used by generated clients.
pub mod error;

pub mod exponential_backoff;
pub mod external_config;
pub mod one_of;
pub mod options;

/// Defines some types and traits to convert and use list operations as a
/// Stream.
pub mod paginator;

/// Defines helpers to validate required parameters.
///
/// Required parameters may appear in fields that are `Option<T>`. These
/// helpers convert `Option<T>` to `Result<T, Error>`, so the generated code
/// always writes:
///
/// gax::path_parameter::required("field", req.field)?
#[doc(hidden)]
pub mod path_parameter;

pub mod response;
pub mod retry_policy;
pub mod retry_result;

#[doc(hidden)]
pub mod retry_loop_internal;
