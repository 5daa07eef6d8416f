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

//! Response types.
//!
//! This module contains types related to IBM Cloud service responses.
//! Notably it contains the `Response` type itself. Typically you'll import
//! this type.
//!
//! # Examples
//!
//! Inspecting the result of a request
//!
//! ```no_run
//! # use ibm_cloud_networking_gax::Result;
//! # use ibm_cloud_networking_gax::response::Response;
//! // A type representing an IBM Cloud service resource, for example, a
//! // Direct Link gateway.
//! struct Resource {
//!   // ...
//! }
//!
//! async fn make_ibm_cloud_request(id: &str) -> Result<Response<Resource>> {
//!   // ...
//! # panic!()
//! }
//!
//! # tokio_test::block_on(async {
//! let response = make_ibm_cloud_request("my-gateway").await?;
//! if let Some(date) = response.headers().get("Date") {
//!     // do something with the date
//! }
//! if let Some(resource) = response.body() {
//!     // do something with the resource
//! }
//! # Result::<()>::Ok(()) });
//! ```
//!
//! Creating a response for mocks
//!
//! ```
//! # use ibm_cloud_networking_gax::Result;
//! # use ibm_cloud_networking_gax::response::Response;
//! struct Resource {
//!   // ...
//! }
//!
//! fn make_mock_response(body: Resource) -> Result<Response<Resource>> {
//!     Ok(Response::from(body))
//! }
//! ```

/// Represents an IBM Cloud service response.
///
/// A response consists of a status code, the response headers, and an
/// optional body. The body is `None` when the service returns an empty
/// payload, for example, a `204 No Content` response.
///
/// Typically you get a response as the result of making a request via some
/// client in the IBM Cloud networking libraries for Rust. You may also create
/// responses directly when mocking clients for your own tests.
#[derive(Clone, Debug)]
pub struct Response<T> {
    parts: Parts,
    body: Option<T>,
}

impl<T> Response<T> {
    /// Creates a successful response from the body.
    ///
    /// The status code is `200 OK`, and the headers are empty.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_gax::response::Response;
    /// let response = Response::from("test".to_string());
    /// assert_eq!(response.status_code(), 200);
    /// assert_eq!(response.body().map(String::as_str), Some("test"));
    /// ```
    pub fn from(body: T) -> Self {
        Self {
            parts: Parts::default(),
            body: Some(body),
        }
    }

    /// Creates a response from the given parts.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_gax::response::Response;
    /// # use ibm_cloud_networking_gax::response::Parts;
    /// let mut headers = http::HeaderMap::new();
    /// headers.insert(http::header::CONTENT_TYPE, http::HeaderValue::from_static("application/json"));
    /// let response : Response<String> = Response::from_parts(
    ///     Parts::new().set_status_code(204).set_headers(headers), None);
    /// assert!(response.headers().get(http::header::CONTENT_TYPE).is_some());
    /// assert_eq!(response.status_code(), 204);
    /// assert!(response.body().is_none());
    /// ```
    pub fn from_parts(parts: Parts, body: Option<T>) -> Self {
        Self { parts, body }
    }

    /// Returns the HTTP status code of this response.
    pub fn status_code(&self) -> u16 {
        self.parts.status_code
    }

    /// Returns the headers associated with this response.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_gax::response::Response;
    /// let response = Response::from(());
    /// assert!(response.headers().is_empty());
    /// ```
    pub fn headers(&self) -> &http::HeaderMap<http::HeaderValue> {
        &self.parts.headers
    }

    /// Returns the body associated with this response, if any.
    pub fn body(&self) -> Option<&T> {
        self.body.as_ref()
    }

    /// Consumes the response returning the metadata, and body.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_networking_gax::response::Response;
    /// let response = Response::from("test".to_string());
    /// let (parts, body) = response.into_parts();
    /// assert_eq!(body.as_deref(), Some("test"));
    /// assert!(parts.headers.is_empty());
    /// ```
    pub fn into_parts(self) -> (Parts, Option<T>) {
        (self.parts, self.body)
    }

    /// Consumes the response returning only its body.
    pub fn into_body(self) -> Option<T> {
        self.body
    }
}

/// Component parts of a response.
///
/// The response parts, other than the body, consist of the status code and
/// headers.
///
/// # Example
/// ```
/// # use ibm_cloud_networking_gax::response::Parts;
/// let mut headers = http::HeaderMap::new();
/// headers.insert(http::header::CONTENT_TYPE, http::HeaderValue::from_static("application/json"));
/// let parts = Parts::new().set_headers(headers);
///
/// assert_eq!(
///     parts.headers.get(http::header::CONTENT_TYPE),
///     Some(&http::HeaderValue::from_static("application/json"))
/// );
/// assert_eq!(parts.status_code, 200);
/// ```
#[derive(Clone, Debug)]
#[non_exhaustive]
pub struct Parts {
    /// The HTTP status code.
    pub status_code: u16,
    /// The HTTP headers.
    pub headers: http::HeaderMap<http::HeaderValue>,
}

impl Default for Parts {
    fn default() -> Self {
        Self {
            status_code: http::StatusCode::OK.as_u16(),
            headers: http::HeaderMap::new(),
        }
    }
}

impl Parts {
    /// Create a new instance.
    pub fn new() -> Self {
        Parts::default()
    }

    /// Set the status code.
    pub fn set_status_code(mut self, v: u16) -> Self {
        self.status_code = v;
        self
    }

    /// Set the headers.
    pub fn set_headers<V>(mut self, v: V) -> Self
    where
        V: Into<http::HeaderMap>,
    {
        self.headers = v.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_from() {
        let response = Response::from("abc123".to_string());
        assert!(response.headers().is_empty());
        assert_eq!(response.status_code(), 200);
        assert_eq!(response.body().map(String::as_str), Some("abc123"));

        let body = response.into_body();
        assert_eq!(body.as_deref(), Some("abc123"));
    }

    #[test]
    fn response_from_parts() {
        let mut headers = http::HeaderMap::new();
        headers.insert(
            http::header::CONTENT_TYPE,
            http::HeaderValue::from_static("application/json"),
        );
        let parts = Parts::new()
            .set_status_code(201)
            .set_headers(headers.clone());

        let response = Response::from_parts(parts, Some("abc123".to_string()));
        assert_eq!(response.body().map(String::as_str), Some("abc123"));
        assert_eq!(response.headers(), &headers);
        assert_eq!(response.status_code(), 201);

        let (parts, body) = response.into_parts();
        assert_eq!(body.as_deref(), Some("abc123"));
        assert_eq!(parts.headers, headers);
        assert_eq!(parts.status_code, 201);
    }

    #[test]
    fn empty_body() {
        let response = Response::<String>::from_parts(Parts::new().set_status_code(204), None);
        assert!(response.body().is_none());
        assert_eq!(response.status_code(), 204);
    }
}
