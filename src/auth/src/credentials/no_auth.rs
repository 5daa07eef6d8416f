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

//! Credentials that send no authentication headers.
//!
//! Useful with local emulators, or with services behind a proxy that
//! authenticates the requests.
//!
//! # Example
//! ```
//! # use ibm_cloud_networking_auth::credentials::no_auth::Builder;
//! # tokio_test::block_on(async {
//! let credentials = Builder::new().build();
//! let headers = credentials.headers().await?;
//! assert!(headers.is_empty());
//! # Ok::<(), anyhow::Error>(()) });
//! ```

use crate::Result;
use crate::credentials::{Credentials, CredentialsProvider, auth_type};
use http::HeaderMap;

#[derive(Debug)]
struct NoAuthCredentials;

impl CredentialsProvider for NoAuthCredentials {
    async fn headers(&self) -> Result<HeaderMap> {
        Ok(HeaderMap::new())
    }

    fn authentication_type(&self) -> &'static str {
        auth_type::NO_AUTH
    }
}

/// A builder for credentials that send no authentication headers.
#[derive(Debug, Default)]
pub struct Builder;

impl Builder {
    pub fn new() -> Self {
        Self
    }

    pub fn build(self) -> Credentials {
        Credentials::from(NoAuthCredentials)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn headers() -> anyhow::Result<()> {
        let credentials = Builder::new().build();
        assert!(credentials.headers().await?.is_empty());
        assert_eq!(credentials.authentication_type(), "noauth");
        Ok(())
    }
}
