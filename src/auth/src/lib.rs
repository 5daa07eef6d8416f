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

//! IBM Cloud networking client libraries for Rust - Authentication Components
//!
//! This crate contains types and functions used to authenticate applications
//! on IBM Cloud. The SDK clients consume an implementation of
//! [credentials::Credentials] and use these credentials to authenticate
//! requests issued by the application.
//!
//! Four authenticators are supported:
//!
//! * [no_auth][credentials::no_auth]: sends no authentication headers.
//! * [basic][credentials::basic]: HTTP basic authentication.
//! * [bearer_token][credentials::bearer_token]: a bearer token managed by the
//!   application.
//! * [iam][credentials::iam]: exchanges an [IAM API key] for access tokens,
//!   and refreshes the tokens before they expire.
//!
//! [IAM API key]: https://cloud.ibm.com/docs/account?topic=account-manapikey

pub mod build_errors;
pub mod credentials;
pub mod errors;

/// Types and functions to work with auth tokens.
pub(crate) mod token;

/// The token cache
pub(crate) mod token_cache;

/// A `Result` alias where the `Err` case is
/// `ibm_cloud_networking_auth::errors::CredentialsError`.
pub(crate) type Result<T> = std::result::Result<T, crate::errors::CredentialsError>;

/// The result of building credentials.
pub(crate) type BuildResult<T> = std::result::Result<T, crate::build_errors::Error>;
