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

use super::{ApiError, CredentialsError};
use http::HeaderMap;
use std::error::Error as StdError;

type BoxError = Box<dyn StdError + Send + Sync>;

/// The core error returned by all client libraries.
///
/// The client libraries report errors from multiple sources. These fall in
/// four broad categories:
///
/// * Validation errors: the request is missing a required parameter, or a
///   parameter has an invalid value. These are detected before any network
///   activity.
/// * Request errors: the request could not be sent, or no response was
///   received. Examples include DNS failures, broken connections, timeouts,
///   problems creating the authentication headers, or an exhausted retry
///   policy.
/// * Response processing errors: the service responded, but the response
///   could not be decoded.
/// * API errors: the service responded with an unsuccessful status code.
///
/// Most applications will just return the error or log it, without any further
/// action. However, some applications may need to interrogate the error
/// details. This type offers a series of predicates to determine the error
/// kind. The type also offers accessors to query the most common error details.
/// Applications can query the error [source][std::error::Error::source] for
/// deeper information.
///
/// # Example
/// ```
/// use ibm_cloud_networking_gax::error::Error;
/// match example_function() {
///     Err(e) if e.is_api() => {
///         println!("service error {e}, status code {:?}", e.http_status_code());
///     },
///     Err(e) if e.is_timeout() => { println!("not enough time {e}"); },
///     Err(e) => { println!("some other error {e}"); },
///     Ok(_) => { println!("success, how boring"); },
/// }
///
/// fn example_function() -> Result<String, Error> {
///     // ... details omitted ...
///     # use ibm_cloud_networking_gax::error::ApiError;
///     # Err(Error::api(ApiError::new(404, "NOT FOUND"), http::HeaderMap::new(), bytes::Bytes::new()))
/// }
/// ```
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: Option<BoxError>,
}

impl Error {
    /// Creates an error representing an invalid or incomplete request.
    ///
    /// # Example
    /// ```
    /// use ibm_cloud_networking_gax::error::Error;
    /// let error = Error::validation("missing required parameter `zone_id`");
    /// assert!(error.is_validation());
    /// assert!(error.to_string().contains("zone_id"));
    /// ```
    pub fn validation<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Validation,
            source: Some(source.into()),
        }
    }

    /// The request is missing required parameters, or some parameters have
    /// invalid values.
    ///
    /// This is always a client-side generated error, detected before any
    /// attempt to contact the service.
    ///
    /// # Troubleshooting
    ///
    /// Typically this indicates a problem in the application. A required
    /// field in the request builder was not initialized, or was initialized
    /// with an empty string. The error message names the field.
    pub fn is_validation(&self) -> bool {
        matches!(self.kind, ErrorKind::Validation)
    }

    /// Creates an error representing a timeout.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use ibm_cloud_networking_gax::error::Error;
    /// let error = Error::timeout("simulated timeout");
    /// assert!(error.is_timeout());
    /// assert!(error.is_request());
    /// assert!(error.to_string().contains("deadline exceeded"));
    /// assert!(error.source().is_some());
    /// ```
    pub fn timeout<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Timeout,
            source: Some(source.into()),
        }
    }

    /// The request could not be completed before its deadline.
    ///
    /// This is always a client-side generated error. Note that the request may
    /// or may not have started, and it may or may not complete in the service.
    /// If the request mutates any state in the service, it may or may not be
    /// safe to attempt the request again.
    ///
    /// # Troubleshooting
    ///
    /// The most common cause of this problem is setting a timeout value that is
    /// based on the observed latency when the service is not under load.
    /// Consider increasing the timeout value to handle temporary latency
    /// increases too.
    pub fn is_timeout(&self) -> bool {
        matches!(self.kind, ErrorKind::Timeout)
    }

    /// Creates an error representing an exhausted policy.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use ibm_cloud_networking_gax::error::Error;
    /// let error = Error::exhausted("too many retry attempts");
    /// assert!(error.is_exhausted());
    /// assert!(error.source().is_some());
    /// ```
    pub fn exhausted<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Exhausted,
            source: Some(source.into()),
        }
    }

    /// The request could not complete before the retry policy expired.
    ///
    /// This is always a client-side generated error, but it may be the result
    /// of multiple errors received from the service. The last error is
    /// available as the [source][std::error::Error::source] of this error.
    ///
    /// # Troubleshooting
    ///
    /// The most common cause of this problem is a transient problem that lasts
    /// longer than your retry policy. If your application can tolerate longer
    /// recovery times then extend the retry policy.
    pub fn is_exhausted(&self) -> bool {
        matches!(self.kind, ErrorKind::Exhausted)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Creates an error representing a problem serializing the request.
    #[doc(hidden)]
    pub fn ser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Serialization,
            source: Some(source.into()),
        }
    }

    /// The request could not be serialized.
    ///
    /// This is always a client-side generated error, generated before the
    /// request is made. This error is never transient: the serialization is
    /// deterministic, and will fail on future attempts with the same input.
    pub fn is_serialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Serialization)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Creates an error representing a response that cannot be decoded.
    ///
    /// The status code, headers, and payload of the response are preserved.
    #[doc(hidden)]
    pub fn response_processing<T: Into<BoxError>>(
        status_code: u16,
        headers: HeaderMap,
        payload: bytes::Bytes,
        source: T,
    ) -> Self {
        let details = HttpDetails {
            status_code,
            headers,
            payload,
        };
        Self {
            kind: ErrorKind::ResponseProcessing(Box::new(details)),
            source: Some(source.into()),
        }
    }

    /// The service responded, but the response could not be processed.
    ///
    /// Examples include a response with a non-JSON content type, or a
    /// malformed JSON payload. The request may have completed in the service.
    /// The status code and headers of the response are available via
    /// [http_status_code()][Error::http_status_code] and
    /// [http_headers()][Error::http_headers].
    ///
    /// # Troubleshooting
    ///
    /// This can be caused by a proxy or load balancer returning an HTML page
    /// in place of the service response. Examine the
    /// [http_payload()][Error::http_payload] to find out.
    pub fn is_response_processing(&self) -> bool {
        matches!(self.kind, ErrorKind::ResponseProcessing(_))
    }

    /// Creates an error with the information returned by an IBM Cloud service.
    ///
    /// # Example
    /// ```
    /// use ibm_cloud_networking_gax::error::{ApiError, Error};
    /// let api = ApiError::new(404, "NOT FOUND");
    /// let error = Error::api(api.clone(), http::HeaderMap::new(), bytes::Bytes::new());
    /// assert_eq!(error.api_error(), Some(&api));
    /// assert_eq!(error.http_status_code(), Some(404));
    /// ```
    pub fn api(api_error: ApiError, headers: HeaderMap, payload: bytes::Bytes) -> Self {
        let details = ApiDetails {
            api_error,
            headers,
            payload,
        };
        Self {
            kind: ErrorKind::Api(Box::new(details)),
            source: None,
        }
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Creates an error from an unsuccessful HTTP response, parsing the
    /// payload as an [ApiError].
    #[doc(hidden)]
    pub fn http(status_code: u16, headers: HeaderMap, payload: bytes::Bytes) -> Self {
        let api_error = ApiError::from_response(status_code, &payload);
        Self::api(api_error, headers, payload)
    }

    /// The service responded with an unsuccessful status code.
    ///
    /// # Troubleshooting
    ///
    /// As this error type is typically created by the service, troubleshooting
    /// this problem typically involves reading the service documentation to
    /// root cause the problem. The [ApiError] includes the message and error
    /// codes returned by the service.
    pub fn is_api(&self) -> bool {
        matches!(self.kind, ErrorKind::Api(_))
    }

    /// The [ApiError] payload associated with this error.
    pub fn api_error(&self) -> Option<&ApiError> {
        match &self.kind {
            ErrorKind::Api(d) => Some(&d.api_error),
            _ => None,
        }
    }

    /// The HTTP status code, if any, associated with this error.
    ///
    /// # Example
    /// ```
    /// use ibm_cloud_networking_gax::error::Error;
    /// let e = search_for_thing("the thing");
    /// if let Some(code) = e.http_status_code() {
    ///     if code == 404 {
    ///         println!("cannot find the thing, more details in {e}");
    ///     }
    /// }
    ///
    /// fn search_for_thing(name: &str) -> Error {
    ///     # Error::http(404, http::HeaderMap::new(), bytes::Bytes::from_static(b"NOT FOUND"))
    /// }
    /// ```
    ///
    /// Both API errors and response processing errors include a status code.
    pub fn http_status_code(&self) -> Option<u16> {
        match &self.kind {
            ErrorKind::Api(d) => Some(d.api_error.status_code()),
            ErrorKind::ResponseProcessing(d) => Some(d.status_code),
            _ => None,
        }
    }

    /// The headers, if any, associated with this error.
    ///
    /// Some services include information useful for troubleshooting in the
    /// response headers, for example the `X-Correlation-ID` header.
    pub fn http_headers(&self) -> Option<&HeaderMap> {
        match &self.kind {
            ErrorKind::Api(d) => Some(&d.headers),
            ErrorKind::ResponseProcessing(d) => Some(&d.headers),
            _ => None,
        }
    }

    /// The payload, if any, associated with this error.
    pub fn http_payload(&self) -> Option<&bytes::Bytes> {
        match &self.kind {
            ErrorKind::Api(d) => Some(&d.payload),
            ErrorKind::ResponseProcessing(d) => Some(&d.payload),
            _ => None,
        }
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Cannot create the authentication headers.
    #[doc(hidden)]
    pub fn authentication(source: CredentialsError) -> Self {
        Self {
            kind: ErrorKind::Authentication,
            source: Some(source.into()),
        }
    }

    /// Could not create the authentication headers before sending the request.
    ///
    /// # Troubleshooting
    ///
    /// Typically this indicates a misconfigured authentication environment for
    /// your application, such as an invalid API key. Less often, this may
    /// indicate a failure to contact the IAM token service.
    pub fn is_authentication(&self) -> bool {
        matches!(self.kind, ErrorKind::Authentication)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// A problem in the transport layer without a full HTTP response.
    ///
    /// Examples include: a connection that cannot be established, or a broken
    /// connection after the request is sent.
    #[doc(hidden)]
    pub fn io<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Io,
            source: Some(source.into()),
        }
    }

    /// A problem sending the request or receiving the response.
    ///
    /// # Troubleshooting
    ///
    /// This indicates a problem completing the request, such as an unreachable
    /// host, a misconfigured service URL, or a connection reset. Most often,
    /// the solution is to configure retries, or to correct the service URL.
    pub fn is_io(&self) -> bool {
        matches!(self.kind, ErrorKind::Io)
    }

    /// The request failed before a response was received.
    ///
    /// This is true for [I/O][Error::is_io], [timeout][Error::is_timeout],
    /// [authentication][Error::is_authentication], and
    /// [exhausted][Error::is_exhausted] errors.
    pub fn is_request(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::Io | ErrorKind::Timeout | ErrorKind::Authentication | ErrorKind::Exhausted
        )
    }

    /// The error was generated before the request started and is transient.
    pub(crate) fn is_transient_and_before_rpc(&self) -> bool {
        if !matches!(&self.kind, ErrorKind::Authentication) {
            return false;
        }
        self.source
            .as_ref()
            .and_then(|e| e.downcast_ref::<CredentialsError>())
            .map(|e| e.is_transient())
            .unwrap_or(false)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.kind, &self.source) {
            (ErrorKind::Validation, Some(e)) => write!(f, "invalid request: {e}"),
            (ErrorKind::Serialization, Some(e)) => write!(f, "cannot serialize the request: {e}"),
            (ErrorKind::ResponseProcessing(d), Some(e)) => write!(
                f,
                "cannot process the response with status code {}: {e}",
                d.status_code
            ),
            (ErrorKind::Authentication, Some(e)) => write!(f, "{e}"),
            (ErrorKind::Timeout, Some(e)) => write!(f, "deadline exceeded: {e}"),
            (ErrorKind::Exhausted, Some(e)) => write!(f, "{e}"),
            (ErrorKind::Io, Some(e)) => write!(f, "the transport reports an error: {e}"),
            (ErrorKind::Api(d), _) => {
                write!(f, "the service reports an error: {}", d.api_error)
            }
            (_, None) => unreachable!("no constructor allows this"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error))
    }
}

/// The type of error held by an [Error] instance.
#[derive(Debug)]
enum ErrorKind {
    Validation,
    Serialization,
    ResponseProcessing(Box<HttpDetails>),
    Authentication,
    Timeout,
    Exhausted,
    Io,
    Api(Box<ApiDetails>),
}

#[derive(Debug)]
struct HttpDetails {
    status_code: u16,
    headers: HeaderMap,
    payload: bytes::Bytes,
}

#[derive(Debug)]
struct ApiDetails {
    api_error: ApiError,
    headers: HeaderMap,
    payload: bytes::Bytes,
}

#[cfg(test)]
mod test {
    use super::*;
    use std::error::Error as StdError;

    fn headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            "content-type",
            http::HeaderValue::from_static("application/json"),
        );
        headers
    }

    fn assert_no_http_details(error: &Error) {
        assert!(error.http_headers().is_none(), "{error:?}");
        assert!(error.http_status_code().is_none(), "{error:?}");
        assert!(error.http_payload().is_none(), "{error:?}");
        assert!(error.api_error().is_none(), "{error:?}");
    }

    #[test]
    fn validation() {
        let error = Error::validation("missing required parameter `crn`");
        assert!(error.is_validation(), "{error:?}");
        assert!(!error.is_request(), "{error:?}");
        assert!(error.source().is_some(), "{error:?}");
        assert!(error.to_string().contains("`crn`"), "{error}");
        assert!(!error.is_transient_and_before_rpc(), "{error:?}");
        assert_no_http_details(&error);
    }

    #[test]
    fn timeout() {
        let source = std::io::Error::new(std::io::ErrorKind::TimedOut, "test-only");
        let error = Error::timeout(source);
        assert!(error.is_timeout(), "{error:?}");
        assert!(error.is_request(), "{error:?}");
        let got = error
            .source()
            .and_then(|e| e.downcast_ref::<std::io::Error>());
        assert!(
            matches!(got, Some(e) if e.kind() == std::io::ErrorKind::TimedOut),
            "{error:?}"
        );
        assert!(error.to_string().contains("deadline exceeded"), "{error}");
        assert!(error.to_string().contains("test-only"), "{error}");
        assert!(!error.is_transient_and_before_rpc(), "{error:?}");
        assert_no_http_details(&error);
    }

    #[test]
    fn exhausted() {
        let error = Error::exhausted(Error::timeout("test-only"));
        assert!(error.is_exhausted(), "{error:?}");
        assert!(error.is_request(), "{error:?}");
        let got = error.source().and_then(|e| e.downcast_ref::<Error>());
        assert!(matches!(got, Some(e) if e.is_timeout()), "{error:?}");
        assert!(error.to_string().contains("deadline exceeded"), "{error}");
        assert!(!error.is_transient_and_before_rpc(), "{error:?}");
        assert_no_http_details(&error);
    }

    #[test]
    fn ser() {
        let source = serde_json::from_str::<u32>("abc").unwrap_err();
        let error = Error::ser(source);
        assert!(error.is_serialization(), "{error:?}");
        assert!(!error.is_request(), "{error:?}");
        let got = error
            .source()
            .and_then(|e| e.downcast_ref::<serde_json::Error>());
        assert!(got.is_some(), "{error:?}");
        assert!(!error.is_transient_and_before_rpc(), "{error:?}");
        assert_no_http_details(&error);
    }

    #[test]
    fn response_processing() {
        let payload = bytes::Bytes::from_static(b"<html>not json</html>");
        let source = serde_json::from_slice::<serde_json::Value>(&payload).unwrap_err();
        let error = Error::response_processing(200, headers(), payload.clone(), source);
        assert!(error.is_response_processing(), "{error:?}");
        assert!(!error.is_request(), "{error:?}");
        assert!(!error.is_api(), "{error:?}");
        assert_eq!(error.http_status_code(), Some(200));
        assert_eq!(error.http_headers(), Some(&headers()));
        assert_eq!(error.http_payload(), Some(&payload));
        assert!(error.api_error().is_none(), "{error:?}");
        let got = error
            .source()
            .and_then(|e| e.downcast_ref::<serde_json::Error>());
        assert!(got.is_some(), "{error:?}");
        assert!(error.to_string().contains("200"), "{error}");
    }

    #[test]
    fn api() {
        let payload = bytes::Bytes::from_static(
            br#"{"errors":[{"code":"not_found","message":"NOT FOUND"}]}"#,
        );
        let error = Error::http(404, headers(), payload.clone());
        assert!(error.is_api(), "{error:?}");
        assert!(!error.is_request(), "{error:?}");
        assert!(error.source().is_none(), "{error:?}");
        assert!(error.to_string().contains("NOT FOUND"), "{error}");
        assert!(error.to_string().contains("404"), "{error}");
        assert_eq!(error.http_status_code(), Some(404));
        assert_eq!(error.http_headers(), Some(&headers()));
        assert_eq!(error.http_payload(), Some(&payload));
        let api = error.api_error().expect("api errors have details");
        assert_eq!(api.code(), Some("not_found"));
        assert!(!error.is_transient_and_before_rpc(), "{error:?}");
    }

    #[test]
    fn auth_transient() {
        let source = CredentialsError::from_msg(true, "test-message");
        let error = Error::authentication(source);
        assert!(error.is_authentication(), "{error:?}");
        assert!(error.is_request(), "{error:?}");
        let got = error
            .source()
            .and_then(|e| e.downcast_ref::<CredentialsError>());
        assert!(matches!(got, Some(c) if c.is_transient()), "{error:?}");
        assert!(error.to_string().contains("test-message"), "{error}");
        assert!(error.is_transient_and_before_rpc(), "{error:?}");
    }

    #[test]
    fn auth_not_transient() {
        let source = CredentialsError::from_msg(false, "test-message");
        let error = Error::authentication(source);
        assert!(error.is_authentication(), "{error:?}");
        let got = error
            .source()
            .and_then(|e| e.downcast_ref::<CredentialsError>());
        assert!(matches!(got, Some(c) if !c.is_transient()), "{error:?}");
        assert!(error.to_string().contains("test-message"), "{error}");
        assert!(!error.is_transient_and_before_rpc(), "{error:?}");
    }

    #[test]
    fn io() {
        let source = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "test-only");
        let error = Error::io(source);
        assert!(error.is_io(), "{error:?}");
        assert!(error.is_request(), "{error:?}");
        assert!(!error.is_timeout(), "{error:?}");
        assert!(error.to_string().contains("test-only"), "{error}");
        assert!(!error.is_transient_and_before_rpc(), "{error:?}");
        assert_no_http_details(&error);
    }
}
