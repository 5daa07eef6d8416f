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

//! Defines traits and helpers to serialize query parameters.
//!
//! Query parameters in the IBM Cloud APIs are strings, integers, booleans,
//! or lists of strings. Lists are sent as a single, comma-separated value.
//! Optional parameters that are not set are not sent at all.
//!
//! The generated request builders hold query parameters as fields of
//! different types. This trait lets them add all of them uniformly, without
//! any conditionally generated code for each type.

/// [QueryParameter] is a trait representing types that can be used as a query
/// parameter.
pub trait QueryParameter {
    fn add(self, builder: reqwest::RequestBuilder, name: &str) -> reqwest::RequestBuilder;
}

impl<T: QueryParameter> QueryParameter for Option<T> {
    fn add(self, builder: reqwest::RequestBuilder, name: &str) -> reqwest::RequestBuilder {
        match self {
            None => builder,
            Some(v) => v.add(builder, name),
        }
    }
}

impl QueryParameter for String {
    fn add(self, builder: reqwest::RequestBuilder, name: &str) -> reqwest::RequestBuilder {
        builder.query(&[(name, self)])
    }
}

impl QueryParameter for &str {
    fn add(self, builder: reqwest::RequestBuilder, name: &str) -> reqwest::RequestBuilder {
        builder.query(&[(name, self)])
    }
}

impl QueryParameter for i64 {
    fn add(self, builder: reqwest::RequestBuilder, name: &str) -> reqwest::RequestBuilder {
        builder.query(&[(name, self)])
    }
}

impl QueryParameter for bool {
    fn add(self, builder: reqwest::RequestBuilder, name: &str) -> reqwest::RequestBuilder {
        builder.query(&[(name, self)])
    }
}

impl QueryParameter for Vec<String> {
    fn add(self, builder: reqwest::RequestBuilder, name: &str) -> reqwest::RequestBuilder {
        if self.is_empty() {
            return builder;
        }
        builder.query(&[(name, self.join(","))])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    type TestResult = anyhow::Result<()>;

    fn split_query(r: &reqwest::Request) -> Vec<&str> {
        r.url()
            .query()
            .unwrap_or_default()
            .split("&")
            .filter(|p| !p.is_empty())
            .collect()
    }

    fn builder() -> anyhow::Result<reqwest::RequestBuilder> {
        Ok(reqwest::Client::builder()
            .build()?
            .get("https://directlink.cloud.ibm.com/provider/v2/gateways"))
    }

    #[test]
    fn mixed() -> TestResult {
        let builder = "2024-01-01".add(builder()?, "version");
        let builder = Some("abc-123".to_string()).add(builder, "start");
        let builder = Some(50_i64).add(builder, "limit");
        let builder = Some(true).add(builder, "check_only");
        let request = builder.build()?;
        assert_eq!(
            split_query(&request),
            vec![
                "version=2024-01-01",
                "start=abc-123",
                "limit=50",
                "check_only=true"
            ]
        );
        Ok(())
    }

    #[test]
    fn unset() -> TestResult {
        let builder = None::<String>.add(builder()?, "start");
        let builder = None::<i64>.add(builder, "limit");
        let builder = None::<bool>.add(builder, "check_only");
        let request = builder.build()?;
        assert_eq!(split_query(&request), Vec::<&str>::new());
        Ok(())
    }

    #[test]
    fn list() -> TestResult {
        let value = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let request = value.add(builder()?, "fields").build()?;
        assert_eq!(split_query(&request), vec!["fields=a%2Cb%2Cc"]);

        let request = Vec::<String>::new().add(builder()?, "fields").build()?;
        assert_eq!(split_query(&request), Vec::<&str>::new());
        Ok(())
    }

    #[test]
    fn escaped() -> TestResult {
        let request = "a b&c".add(builder()?, "start").build()?;
        assert_eq!(split_query(&request), vec!["start=a+b%26c"]);
        Ok(())
    }
}
