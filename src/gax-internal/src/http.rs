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

use auth::credentials::Credentials;
use gax::Result;
use gax::backoff_policy::BackoffPolicy;
use gax::client_builder::Error as BuilderError;
use gax::error::Error;
use gax::exponential_backoff::ExponentialBackoff;
use gax::external_config::ExternalConfig;
use gax::response::{Parts, Response};
use gax::retry_policy::RetryPolicy;
use http::HeaderMap;
use http::header::{ACCEPT, CONTENT_TYPE, HeaderName, HeaderValue, USER_AGENT};
use std::sync::Arc;
use std::time::Duration;

const APPLICATION_JSON: &str = "application/json";

#[derive(thiserror::Error, Debug)]
enum HttpError {
    #[error("the service URL is not configured")]
    MissingEndpoint,
    #[error("expected a JSON payload, got content type {0:?}")]
    NotJson(String),
    #[error("the request did not complete within {0:?}")]
    Deadline(Duration),
    #[error("cannot clone the request in the retry loop")]
    NotCloneable,
}

#[derive(Clone, Debug)]
pub struct ReqwestClient {
    inner: reqwest::Client,
    cred: Credentials,
    endpoint: String,
    user_agent: String,
    retry_policy: Option<Arc<dyn RetryPolicy>>,
    backoff_policy: Option<Arc<dyn BackoffPolicy>>,
}

impl ReqwestClient {
    /// Creates a new client, resolving the configuration once.
    ///
    /// Explicit settings take precedence over the external configuration. If
    /// the application provides neither credentials nor an external
    /// configuration, the external configuration for `service_name` is read
    /// from the environment.
    pub async fn new(
        config: crate::options::ClientConfig,
        default_endpoint: &str,
        service_name: &str,
    ) -> gax::client_builder::Result<Self> {
        let external = Self::external_config(&config, service_name);
        let cred = Self::make_credentials(&config, external.as_ref())?;
        let endpoint = config
            .endpoint
            .clone()
            .or_else(|| external.as_ref().and_then(|e| e.url()).map(str::to_string))
            .unwrap_or_else(|| default_endpoint.to_string());
        let (retry_policy, backoff_policy) = Self::make_retries(&config, external.as_ref())?;
        let inner = reqwest::Client::builder()
            .build()
            .map_err(BuilderError::transport)?;
        tracing::debug!(service_name, endpoint = %endpoint, "creating client");
        Ok(Self {
            inner,
            cred,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            user_agent: crate::api_header::user_agent(),
            retry_policy,
            backoff_policy,
        })
    }

    /// The resolved endpoint.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn builder(&self, method: reqwest::Method, path: String) -> reqwest::RequestBuilder {
        self.inner
            .request(method, format!("{}{path}", &self.endpoint))
    }

    pub async fn execute<I: serde::ser::Serialize, O: serde::de::DeserializeOwned>(
        &self,
        mut builder: reqwest::RequestBuilder,
        body: Option<I>,
        options: gax::options::RequestOptions,
    ) -> Result<Response<O>> {
        if self.endpoint.is_empty() {
            return Err(Error::io(HttpError::MissingEndpoint));
        }
        let user_agent = options
            .user_agent()
            .as_deref()
            .unwrap_or(self.user_agent.as_str());
        builder = builder
            .header(USER_AGENT, HeaderValue::from_str(user_agent).map_err(Error::ser)?)
            .header(ACCEPT, HeaderValue::from_static(APPLICATION_JSON));
        for (name, value) in options.headers() {
            builder = builder.header(
                HeaderName::from_bytes(name.as_bytes()).map_err(Error::ser)?,
                HeaderValue::from_str(value).map_err(Error::ser)?,
            );
        }
        if let Some(body) = body {
            let payload = serde_json::to_vec(&body).map_err(Error::ser)?;
            builder = builder
                .header(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON))
                .body(payload);
        }
        let call = async {
            match self.get_retry_policy(&options) {
                None => self.request_attempt::<O>(builder, &options, None).await,
                Some(policy) => self.retry_loop::<O>(builder, &options, policy).await,
            }
        };
        match options.deadline() {
            None => call.await,
            Some(deadline) => tokio::time::timeout(*deadline, call)
                .await
                .map_err(|_| Error::timeout(HttpError::Deadline(*deadline)))?,
        }
    }

    fn external_config(
        config: &crate::options::ClientConfig,
        service_name: &str,
    ) -> Option<ExternalConfig> {
        match (&config.external_config, &config.cred) {
            (Some(e), _) => Some(e.clone()),
            (None, Some(_)) => None,
            (None, None) => Some(ExternalConfig::from_env(service_name)),
        }
    }

    fn make_credentials(
        config: &crate::options::ClientConfig,
        external: Option<&ExternalConfig>,
    ) -> gax::client_builder::Result<Credentials> {
        if let Some(c) = config.cred.clone() {
            return Ok(c);
        }
        let external = external.ok_or_else(|| BuilderError::cred("no credentials configured"))?;
        auth::credentials::Builder::from_external_config(external).map_err(BuilderError::cred)
    }

    fn make_retries(
        config: &crate::options::ClientConfig,
        external: Option<&ExternalConfig>,
    ) -> gax::client_builder::Result<(Option<Arc<dyn RetryPolicy>>, Option<Arc<dyn BackoffPolicy>>)>
    {
        let from_external = match (&config.retry_policy, external) {
            (None, Some(e)) => e.retries().map_err(BuilderError::configuration)?,
            _ => None,
        };
        let Some((max_retries, max_interval)) = from_external else {
            return Ok((config.retry_policy.clone(), config.backoff_policy.clone()));
        };
        let (retry, backoff) =
            gax::client_builder::internal::retries(max_retries, max_interval);
        Ok((
            Some(retry),
            config.backoff_policy.clone().or(Some(backoff)),
        ))
    }

    async fn retry_loop<O: serde::de::DeserializeOwned>(
        &self,
        builder: reqwest::RequestBuilder,
        options: &gax::options::RequestOptions,
        retry_policy: Arc<dyn RetryPolicy>,
    ) -> Result<Response<O>> {
        let idempotent = options.idempotent().unwrap_or(false);
        let backoff = self.get_backoff_policy(options);
        let this = self.clone();
        let options = options.clone();
        let inner = async move |d| {
            let builder = builder
                .try_clone()
                .ok_or_else(|| Error::io(HttpError::NotCloneable))?;
            this.request_attempt(builder, &options, d).await
        };
        let sleep = async |d| tokio::time::sleep(d).await;
        gax::retry_loop_internal::retry_loop(inner, sleep, idempotent, retry_policy, backoff).await
    }

    async fn request_attempt<O: serde::de::DeserializeOwned>(
        &self,
        mut builder: reqwest::RequestBuilder,
        options: &gax::options::RequestOptions,
        remaining_time: Option<Duration>,
    ) -> Result<Response<O>> {
        builder = gax::retry_loop_internal::effective_timeout(options, remaining_time)
            .into_iter()
            .fold(builder, |b, t| b.timeout(t));
        let auth_headers = self.cred.headers().await.map_err(Error::authentication)?;
        for (key, value) in auth_headers.iter() {
            builder = builder.header(key, value);
        }
        let response = builder.send().await.map_err(Self::map_send_error)?;
        if !response.status().is_success() {
            tracing::debug!(status = %response.status(), url = %response.url(), "request failed");
            return self::to_http_error(response).await;
        }
        self::to_http_response(response).await
    }

    fn map_send_error(err: reqwest::Error) -> Error {
        match err {
            e if e.is_timeout() => Error::timeout(e),
            e => Error::io(e),
        }
    }

    fn get_retry_policy(
        &self,
        options: &gax::options::RequestOptions,
    ) -> Option<Arc<dyn RetryPolicy>> {
        options
            .retry_policy()
            .clone()
            .or_else(|| self.retry_policy.clone())
    }

    pub(crate) fn get_backoff_policy(
        &self,
        options: &gax::options::RequestOptions,
    ) -> Arc<dyn BackoffPolicy> {
        options
            .backoff_policy()
            .clone()
            .or_else(|| self.backoff_policy.clone())
            .unwrap_or_else(|| Arc::new(ExponentialBackoff::default()))
    }
}

#[derive(serde::Serialize)]
pub struct NoBody;

pub async fn to_http_error<O>(response: reqwest::Response) -> Result<O> {
    let status_code = response.status().as_u16();
    let headers = response.headers().clone();
    let payload = response.bytes().await.map_err(Error::io)?;
    Err(Error::http(status_code, headers, payload))
}

async fn to_http_response<O: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<Response<O>> {
    let status_code = response.status().as_u16();
    let headers = response.headers().clone();
    let payload = response.bytes().await.map_err(Error::io)?;
    // An empty payload is valid, e.g. `204 No Content`, and is not decoded.
    if payload.is_empty() {
        let parts = Parts::new()
            .set_status_code(status_code)
            .set_headers(headers);
        return Ok(Response::from_parts(parts, None));
    }
    if let Some(content_type) = not_json(&headers) {
        return Err(Error::response_processing(
            status_code,
            headers,
            payload,
            HttpError::NotJson(content_type),
        ));
    }
    match serde_json::from_slice::<O>(&payload) {
        Ok(body) => {
            let parts = Parts::new()
                .set_status_code(status_code)
                .set_headers(headers);
            Ok(Response::from_parts(parts, Some(body)))
        }
        Err(e) => Err(Error::response_processing(
            status_code,
            headers,
            payload,
            e,
        )),
    }
}

// Returns the content type if present and not JSON. A missing content type
// is decoded as JSON.
fn not_json(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(CONTENT_TYPE)?;
    let content_type = String::from_utf8_lossy(value.as_bytes()).to_string();
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    if essence == APPLICATION_JSON || essence.ends_with("+json") {
        return None;
    }
    Some(content_type)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};
    use test_case::test_case;
    type TestResult = anyhow::Result<()>;

    fn response(
        code: u16,
        content_type: Option<&str>,
        content: &str,
    ) -> anyhow::Result<reqwest::Response> {
        let builder = http::Response::builder().status(code);
        let builder = match content_type {
            Some(ct) => builder.header("Content-Type", ct),
            None => builder,
        };
        Ok(builder.body(content.to_string())?.into())
    }

    #[tokio::test]
    async fn http_error_bytes() -> TestResult {
        let payload = r#"{"errors": [{"code": "not_found", "message": "gateway not found"}], "trace": "t-123"}"#;
        let response = response(404, Some(APPLICATION_JSON), payload)?;
        let err = to_http_error::<()>(response).await.unwrap_err();
        assert!(err.is_api(), "{err:?}");
        assert_eq!(err.http_status_code(), Some(404));
        let mut want = HeaderMap::new();
        want.insert("content-type", HeaderValue::from_static(APPLICATION_JSON));
        assert_eq!(err.http_headers(), Some(&want));
        assert_eq!(
            err.http_payload(),
            Some(bytes::Bytes::from(payload)).as_ref()
        );
        let api = err.api_error().expect("the error should have details");
        assert_eq!(api.message(), "gateway not found");
        assert_eq!(api.code(), Some("not_found"));
        assert_eq!(api.trace(), Some("t-123"));
        Ok(())
    }

    #[tokio::test]
    async fn http_error_not_json() -> TestResult {
        let response = response(502, Some("text/html"), "<html>Bad Gateway</html>")?;
        let err = to_http_error::<()>(response).await.unwrap_err();
        assert!(err.is_api(), "{err:?}");
        assert_eq!(err.http_status_code(), Some(502));
        Ok(())
    }

    #[tokio::test]
    async fn json_body() -> TestResult {
        let response = response(201, Some("application/json; charset=utf-8"), r#"{"id": "abc"}"#)?;
        let response = to_http_response::<Value>(response).await?;
        assert_eq!(response.status_code(), 201);
        assert_eq!(response.body(), Some(&json!({"id": "abc"})));
        Ok(())
    }

    #[tokio::test]
    async fn json_without_content_type() -> TestResult {
        let response = response(200, None, r#"{"id": "abc"}"#)?;
        let response = to_http_response::<Value>(response).await?;
        assert_eq!(response.body(), Some(&json!({"id": "abc"})));
        Ok(())
    }

    #[tokio::test]
    #[test_case(200, Some(APPLICATION_JSON); "200 with JSON content type")]
    #[test_case(202, None; "202 without content type")]
    #[test_case(204, None; "204 without content type")]
    #[test_case(200, Some("text/plain"); "200 with text content type")]
    async fn empty_content(code: u16, content_type: Option<&str>) -> TestResult {
        let response = response(code, content_type, "")?;
        let response = to_http_response::<Value>(response).await?;
        assert_eq!(response.status_code(), code);
        assert!(response.body().is_none(), "{response:?}");
        Ok(())
    }

    #[tokio::test]
    #[test_case("text/plain", "this is not JSON")]
    #[test_case("text/html", "<html></html>")]
    #[test_case(APPLICATION_JSON, "{ malformed")]
    #[test_case(APPLICATION_JSON, r#"{"id": 42}"#)]
    async fn response_processing(content_type: &str, content: &str) -> TestResult {
        #[derive(Debug, serde::Deserialize)]
        struct Typed {
            #[allow(dead_code)]
            id: String,
        }
        let response = response(200, Some(content_type), content)?;
        let err = to_http_response::<Typed>(response).await.unwrap_err();
        assert!(err.is_response_processing(), "{err:?}");
        assert_eq!(err.http_status_code(), Some(200));
        assert_eq!(
            err.http_payload(),
            Some(bytes::Bytes::from(content.to_string())).as_ref()
        );
        assert!(err.http_headers().is_some(), "{err:?}");
        Ok(())
    }

    #[test_case("application/json", None)]
    #[test_case("Application/JSON; charset=utf-8", None)]
    #[test_case("application/problem+json", None)]
    #[test_case("text/plain", Some("text/plain"))]
    fn content_types(value: &str, want: Option<&str>) {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_str(value).unwrap());
        assert_eq!(not_json(&headers).as_deref(), want);
    }
}
