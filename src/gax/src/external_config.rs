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

//! Client configuration from external sources.
//!
//! IBM Cloud SDKs can be configured using `<SERVICE_PREFIX>_*` properties,
//! where the prefix is the service name in upper case, with `-` replaced by
//! `_`. For example, the `direct_link_provider` service reads the endpoint
//! from `DIRECT_LINK_PROVIDER_URL`.
//!
//! The properties are resolved once, when the client is built. Applications
//! can snapshot the process environment with [ExternalConfig::from_env], or
//! supply the properties explicitly with [ExternalConfig::from_vars].
//!
//! # Example
//! ```
//! # use ibm_cloud_networking_gax::external_config::ExternalConfig;
//! let config = ExternalConfig::from_vars("direct_link_provider", [
//!     ("DIRECT_LINK_PROVIDER_URL", "https://private.directlink.cloud.ibm.com/provider/v2"),
//!     ("DIRECT_LINK_PROVIDER_AUTH_TYPE", "noauth"),
//!     ("UNRELATED_URL", "https://example.com"),
//! ]);
//! assert_eq!(config.url(), Some("https://private.directlink.cloud.ibm.com/provider/v2"));
//! assert_eq!(config.auth_type(), Some("noauth"));
//! assert_eq!(config.len(), 2);
//! ```

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::time::Duration;

/// The names of the supported properties, without the service prefix.
pub mod keys {
    pub const URL: &str = "URL";
    pub const AUTH_TYPE: &str = "AUTH_TYPE";
    pub const APIKEY: &str = "APIKEY";
    pub const AUTH_URL: &str = "AUTH_URL";
    pub const CLIENT_ID: &str = "CLIENT_ID";
    pub const CLIENT_SECRET: &str = "CLIENT_SECRET";
    pub const USERNAME: &str = "USERNAME";
    pub const PASSWORD: &str = "PASSWORD";
    pub const BEARER_TOKEN: &str = "BEARER_TOKEN";
    pub const ENABLE_RETRIES: &str = "ENABLE_RETRIES";
    pub const MAX_RETRIES: &str = "MAX_RETRIES";
    pub const RETRY_INTERVAL: &str = "RETRY_INTERVAL";

    /// Properties whose values are never printed.
    pub const SECRETS: [&str; 4] = [APIKEY, PASSWORD, CLIENT_SECRET, BEARER_TOKEN];
}

/// The number of retries used when retries are enabled without a limit.
pub const DEFAULT_MAX_RETRIES: u32 = 4;

/// The maximum backoff used when retries are enabled without an interval.
pub const DEFAULT_RETRY_INTERVAL: Duration = Duration::from_secs(30);

/// A property has an invalid value.
#[derive(thiserror::Error, Debug, PartialEq)]
#[error("invalid value for {name}: {value:?}")]
pub struct Error {
    name: String,
    value: String,
}

impl Error {
    /// The full name of the property, including the service prefix.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// The `<SERVICE_PREFIX>_*` properties for one service.
#[derive(Clone, Default, PartialEq)]
pub struct ExternalConfig {
    prefix: String,
    properties: BTreeMap<String, String>,
}

impl ExternalConfig {
    /// Snapshots the properties for `service_name` from the process environment.
    ///
    /// Variables whose name or value is not valid UTF-8 are ignored.
    pub fn from_env<S: AsRef<str>>(service_name: S) -> Self {
        Self::from_vars(service_name, utf8_vars(std::env::vars_os()))
    }

    /// Collects the properties for `service_name` from `vars`.
    ///
    /// Variables without the service prefix, and variables with empty values,
    /// are ignored.
    pub fn from_vars<S, I, K, V>(service_name: S, vars: I) -> Self
    where
        S: AsRef<str>,
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let prefix = Self::prefix(service_name.as_ref());
        let properties = vars
            .into_iter()
            .filter_map(|(k, v)| {
                let key = k.as_ref().strip_prefix(&prefix)?.strip_prefix('_')?;
                let value = v.into();
                if key.is_empty() || value.is_empty() {
                    return None;
                }
                Some((key.to_string(), value))
            })
            .collect();
        Self { prefix, properties }
    }

    /// Computes the property prefix for a service name.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_gax::external_config::ExternalConfig;
    /// assert_eq!(ExternalConfig::prefix("ssl-certificate_api"), "SSL_CERTIFICATE_API");
    /// ```
    pub fn prefix(service_name: &str) -> String {
        service_name.to_uppercase().replace('-', "_")
    }

    /// Returns the value of a property, `key` does not include the prefix.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    /// The number of properties found for this service.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Returns true if no properties were found for this service.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// The service endpoint.
    pub fn url(&self) -> Option<&str> {
        self.get(keys::URL)
    }

    /// The authentication type, e.g. `iam`, `basic`, `bearertoken`, or `noauth`.
    pub fn auth_type(&self) -> Option<&str> {
        self.get(keys::AUTH_TYPE)
    }

    /// Returns the retry configuration, as `(max_retries, max_interval)`.
    ///
    /// Returns `None` unless `<PREFIX>_ENABLE_RETRIES` is `true`. The
    /// `<PREFIX>_RETRY_INTERVAL` property is expressed in seconds.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_gax::external_config::*;
    /// use std::time::Duration;
    /// let config = ExternalConfig::from_vars("logpush_jobs_api", [
    ///     ("LOGPUSH_JOBS_API_ENABLE_RETRIES", "true"),
    ///     ("LOGPUSH_JOBS_API_MAX_RETRIES", "3"),
    /// ]);
    /// assert_eq!(config.retries()?, Some((3, DEFAULT_RETRY_INTERVAL)));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn retries(&self) -> Result<Option<(u32, Duration)>, Error> {
        let enabled = match self.get(keys::ENABLE_RETRIES) {
            None => false,
            Some(v) => self.parse::<bool>(keys::ENABLE_RETRIES, &v.to_lowercase())?,
        };
        if !enabled {
            return Ok(None);
        }
        let max_retries = match self.get(keys::MAX_RETRIES) {
            None => DEFAULT_MAX_RETRIES,
            Some(v) => self.parse::<u32>(keys::MAX_RETRIES, v)?,
        };
        let interval = match self.get(keys::RETRY_INTERVAL) {
            None => DEFAULT_RETRY_INTERVAL,
            Some(v) => Duration::from_secs(self.parse::<u64>(keys::RETRY_INTERVAL, v)?),
        };
        Ok(Some((max_retries, interval)))
    }

    fn parse<T: std::str::FromStr>(&self, key: &str, value: &str) -> Result<T, Error> {
        value.trim().parse::<T>().map_err(|_| Error {
            name: format!("{}_{key}", self.prefix),
            value: value.to_string(),
        })
    }
}

impl std::fmt::Debug for ExternalConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let properties = self
            .properties
            .iter()
            .map(|(k, v)| {
                let v = if keys::SECRETS.contains(&k.as_str()) {
                    "[censored]"
                } else {
                    v.as_str()
                };
                (k.as_str(), v)
            })
            .collect::<BTreeMap<_, _>>();
        f.debug_struct("ExternalConfig")
            .field("prefix", &self.prefix)
            .field("properties", &properties)
            .finish()
    }
}

fn utf8_vars<I>(vars: I) -> impl Iterator<Item = (String, String)>
where
    I: IntoIterator<Item = (OsString, OsString)>,
{
    vars.into_iter()
        .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("direct_link_provider", "DIRECT_LINK_PROVIDER")]
    #[test_case("logpush-jobs-api", "LOGPUSH_JOBS_API")]
    #[test_case("SSL_CERTIFICATE_API", "SSL_CERTIFICATE_API")]
    fn prefix(input: &str, want: &str) {
        assert_eq!(ExternalConfig::prefix(input), want);
    }

    #[test]
    fn from_vars() {
        let config = ExternalConfig::from_vars(
            "ssl-certificate-api",
            [
                ("SSL_CERTIFICATE_API_URL", "https://test.example.com"),
                ("SSL_CERTIFICATE_API_AUTH_TYPE", "iam"),
                ("SSL_CERTIFICATE_API_APIKEY", "test-api-key"),
                ("SSL_CERTIFICATE_API_PASSWORD", ""),
                ("SSL_CERTIFICATE_APIKEY", "wrong-prefix"),
                ("SSL_CERTIFICATE_API_", "no-key"),
                ("OTHER_URL", "https://other.example.com"),
            ],
        );
        assert_eq!(config.url(), Some("https://test.example.com"));
        assert_eq!(config.auth_type(), Some("iam"));
        assert_eq!(config.get(keys::APIKEY), Some("test-api-key"));
        assert_eq!(config.get(keys::PASSWORD), None);
        assert_eq!(config.len(), 3, "{config:?}");
        assert!(!config.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_vars_are_ignored() {
        use std::os::unix::ffi::OsStringExt;
        let bad = || OsString::from_vec(vec![b'T', b'E', b'S', b'T', b'_', 0xff]);
        let vars = vec![
            (OsString::from("UNRELATED"), OsString::from_vec(vec![0xff, 0xfe])),
            (bad(), OsString::from("value")),
            (OsString::from("TEST_APIKEY"), OsString::from_vec(vec![0xff])),
            (OsString::from("TEST_URL"), OsString::from("https://test.example.com")),
        ];
        let config = ExternalConfig::from_vars("test", utf8_vars(vars));
        assert_eq!(config.url(), Some("https://test.example.com"));
        assert_eq!(config.get(keys::APIKEY), None);
        assert_eq!(config.len(), 1, "{config:?}");
    }

    #[test]
    fn from_env_snapshot() {
        // Only checks that reading the process environment never panics.
        let _ = ExternalConfig::from_env("external_config_test_service");
    }

    #[test]
    fn debug() {
        let config = ExternalConfig::from_vars(
            "svc",
            [
                ("SVC_URL", "https://test.example.com"),
                ("SVC_APIKEY", "super-secret-key"),
                ("SVC_PASSWORD", "hunter2"),
                ("SVC_CLIENT_SECRET", "client-secret"),
                ("SVC_BEARER_TOKEN", "bearer-token"),
            ],
        );
        let got = format!("{config:?}");
        for secret in ["super-secret-key", "hunter2", "client-secret", "bearer-token"] {
            assert!(!got.contains(secret), "{got}");
        }
        assert!(got.contains("\"APIKEY\": \"[censored]\""), "{got}");
        assert!(got.contains("https://test.example.com"), "{got}");
    }

    #[test]
    fn empty() -> anyhow::Result<()> {
        let config = ExternalConfig::from_vars("test", Vec::<(String, String)>::new());
        assert!(config.is_empty());
        assert_eq!(config.url(), None);
        assert_eq!(config.retries()?, None);
        Ok(())
    }

    #[test_case("true", "5", "10", Some((5, Duration::from_secs(10))))]
    #[test_case("TRUE", "0", "1", Some((0, Duration::from_secs(1))))]
    #[test_case("false", "5", "10", None)]
    fn retries(
        enable: &str,
        max: &str,
        interval: &str,
        want: Option<(u32, Duration)>,
    ) -> anyhow::Result<()> {
        let config = ExternalConfig::from_vars(
            "test",
            [
                ("TEST_ENABLE_RETRIES", enable),
                ("TEST_MAX_RETRIES", max),
                ("TEST_RETRY_INTERVAL", interval),
            ],
        );
        assert_eq!(config.retries()?, want);
        Ok(())
    }

    #[test]
    fn retries_defaults() -> anyhow::Result<()> {
        let config = ExternalConfig::from_vars("test", [("TEST_ENABLE_RETRIES", "true")]);
        assert_eq!(
            config.retries()?,
            Some((DEFAULT_MAX_RETRIES, DEFAULT_RETRY_INTERVAL))
        );
        Ok(())
    }

    #[test_case("TEST_ENABLE_RETRIES", "yes")]
    #[test_case("TEST_MAX_RETRIES", "-1")]
    #[test_case("TEST_RETRY_INTERVAL", "1.5s")]
    fn retries_invalid(name: &str, value: &str) {
        let mut vars = vec![("TEST_ENABLE_RETRIES", "true")];
        vars.retain(|(k, _)| *k != name);
        vars.push((name, value));
        let config = ExternalConfig::from_vars("test", vars);
        let err = config.retries().unwrap_err();
        assert_eq!(err.name(), name, "{err:?}");
        assert!(err.to_string().contains(value), "{err}");
    }
}
