//
//  lakefs-client
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Client Wrapper for the lakeFS API
//!
//! This module provides the request executor every resource client is built
//! on. It resolves credentials, merges headers and sends exactly one request
//! per call.
//!
//! ## Features
//!
//! - Fixed `/api/v1` prefix appended to the configured endpoint
//! - HTTP Basic authentication from explicit or provided credentials
//! - Layered header merging (auth < defaults < caller)
//! - JSON and multipart request bodies
//! - Custom User-Agent header
//!
//! Status codes are not interpreted here; that is left to the resource
//! clients together with [`extract_message`].

use std::fmt;
use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use super::common::{
    decode_json, extract_message, with_query, ApiError, Page, QueryParams, ResourceKind,
};
use super::{Auth, Branches, Commits, Objects, Refs, Repositories};
use crate::auth::{CredentialProvider, Credentials};

/// Path prefix of every API endpoint.
pub const API_PREFIX: &str = "/api/v1";

/// Body of an outgoing request.
pub enum RequestBody {
    /// Pre-serialized JSON bytes, sent with the default JSON content type.
    Json(Vec<u8>),
    /// A multipart form. The transport writes its own `Content-Type` with
    /// the boundary, so callers should suppress the JSON default.
    Multipart(reqwest::multipart::Form),
}

impl fmt::Debug for RequestBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(bytes) => f.debug_tuple("Json").field(&bytes.len()).finish(),
            Self::Multipart(_) => f.write_str("Multipart"),
        }
    }
}

/// Per-request options for [`LakeFsClient::execute`].
///
/// # Example
///
/// ```rust,ignore
/// use reqwest::header::CONTENT_TYPE;
/// use lakefs_client::api::RequestOptions;
///
/// // JSON body with default headers
/// let options = RequestOptions::new().json(&serde_json::json!({"name": "main"}))?;
///
/// // Multipart body with the JSON content type suppressed
/// let options = RequestOptions::new()
///     .multipart(form)
///     .header(CONTENT_TYPE, "");
/// ```
#[derive(Debug, Default)]
pub struct RequestOptions {
    /// Optional request body.
    pub body: Option<RequestBody>,
    /// Caller headers; these win over defaults and auth. An empty value
    /// removes the header entirely.
    pub headers: HeaderMap,
    /// Credentials for this request only, bypassing the client's provider.
    pub credentials: Option<Credentials>,
}

impl RequestOptions {
    /// Creates empty options: no body, no extra headers, provider credentials.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serializes `body` as the JSON request body.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, ApiError> {
        self.body = Some(RequestBody::Json(serde_json::to_vec(body)?));
        Ok(self)
    }

    /// Uses `form` as a multipart request body.
    pub fn multipart(mut self, form: reqwest::multipart::Form) -> Self {
        self.body = Some(RequestBody::Multipart(form));
        self
    }

    /// Adds a caller header. Pass an empty value to suppress a default.
    pub fn header(mut self, name: reqwest::header::HeaderName, value: &'static str) -> Self {
        self.headers.insert(name, HeaderValue::from_static(value));
        self
    }

    /// Authenticates this request with `credentials`.
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }
}

/// Returns the headers sent with every request unless overridden.
pub fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers
}

/// Merges the auth header, the defaults and the caller's headers.
///
/// Later layers replace earlier ones header by header. A caller header with
/// an empty value removes that header from the result.
pub fn merge_headers(authorization: HeaderValue, custom: &HeaderMap) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, authorization);

    for (name, value) in default_headers().iter() {
        headers.insert(name.clone(), value.clone());
    }

    for (name, value) in custom.iter() {
        if value.is_empty() {
            headers.remove(name);
        } else {
            headers.insert(name.clone(), value.clone());
        }
    }

    headers
}

/// The HTTP client for a lakeFS installation.
///
/// The client is cheap to clone and can be shared between tasks. Resource
/// clients are obtained from it:
///
/// ```rust,ignore
/// use lakefs_client::api::LakeFsClient;
/// use lakefs_client::auth::Credentials;
///
/// let client = LakeFsClient::new("http://localhost:8000")?
///     .with_credentials(Credentials::new("AKIAEXAMPLE", "secret"));
///
/// let repo = client.repositories().get("example").await?;
/// let main = client.branches("example").get("main").await?;
/// ```
///
/// # Authentication
///
/// Every request carries an `Authorization: Basic ...` header. Credentials
/// come from [`RequestOptions::credentials`] when set, otherwise from the
/// client's [`CredentialProvider`].
#[derive(Clone)]
pub struct LakeFsClient {
    /// The underlying HTTP client
    http: Client,
    /// Server endpoint without trailing slash, e.g. `http://localhost:8000`
    endpoint: String,
    /// Source of credentials for requests without explicit ones
    provider: Arc<dyn CredentialProvider>,
}

impl fmt::Debug for LakeFsClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LakeFsClient")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl LakeFsClient {
    /// Creates a client for the server at `endpoint`.
    ///
    /// The client starts without credentials; add them with
    /// [`with_credentials`](Self::with_credentials) or
    /// [`with_provider`](Self::with_provider).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidEndpoint`] if `endpoint` is not an absolute
    /// URL, or [`ApiError::Transport`] if the HTTP client cannot be built.
    pub fn new(endpoint: &str) -> Result<Self, ApiError> {
        let http = Client::builder()
            .user_agent(format!("lkfs/{}", crate::VERSION))
            .build()?;
        Self::with_http_client(http, endpoint)
    }

    /// Creates a client around an existing `reqwest` client.
    pub fn with_http_client(http: Client, endpoint: &str) -> Result<Self, ApiError> {
        let endpoint = endpoint.trim().trim_end_matches('/').to_string();
        url::Url::parse(&endpoint).map_err(|source| ApiError::InvalidEndpoint {
            endpoint: endpoint.clone(),
            source,
        })?;

        Ok(Self {
            http,
            endpoint,
            provider: Arc::new(None::<Credentials>),
        })
    }

    /// Uses a fixed credential pair for every request.
    pub fn with_credentials(self, credentials: Credentials) -> Self {
        self.with_provider(Arc::new(credentials))
    }

    /// Uses `provider` to look up credentials before each request.
    pub fn with_provider(mut self, provider: Arc<dyn CredentialProvider>) -> Self {
        self.provider = provider;
        self
    }

    /// Returns the configured server endpoint.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns the credentials the provider would attach right now.
    pub fn current_credentials(&self) -> Option<Credentials> {
        self.provider.credentials()
    }

    /// Returns the base URL of the API, e.g. `http://localhost:8000/api/v1`.
    pub fn base_url(&self) -> String {
        format!("{}{}", self.endpoint, API_PREFIX)
    }

    /// Returns the full URL of an API path.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    /// Sends one authenticated request and returns the raw response.
    ///
    /// # Parameters
    ///
    /// * `method` - HTTP method
    /// * `path` - API path below the `/api/v1` prefix, including any query
    /// * `options` - Body, extra headers and explicit credentials
    ///
    /// # Errors
    ///
    /// - [`ApiError::MissingCredentials`] if no credentials are available
    /// - [`ApiError::Transport`] if the request could not be completed
    ///
    /// Non-success statuses are returned as responses, not errors.
    pub async fn execute(
        &self,
        method: Method,
        path: &str,
        options: RequestOptions,
    ) -> Result<Response, ApiError> {
        let credentials = match options.credentials {
            Some(credentials) => credentials,
            None => self
                .provider
                .credentials()
                .ok_or(ApiError::MissingCredentials)?,
        };

        let authorization = HeaderValue::from_str(&credentials.basic_auth_header())?;
        let headers = merge_headers(authorization, &options.headers);
        let url = self.url(path);

        debug!(%method, %url, "sending request");
        let mut request = self.http.request(method, &url).headers(headers);
        match options.body {
            Some(RequestBody::Json(bytes)) => request = request.body(bytes),
            Some(RequestBody::Multipart(form)) => request = request.multipart(form),
            None => {}
        }

        let response = request.send().await?;
        debug!(status = %response.status(), %url, "received response");
        Ok(response)
    }

    /// Sends a bodiless GET request with default options.
    pub async fn get(&self, path: &str) -> Result<Response, ApiError> {
        self.execute(Method::GET, path, RequestOptions::new()).await
    }

    /// Fetches a single resource.
    ///
    /// - 200 → the decoded item
    /// - 404 → [`ApiError::NotFound`] naming `kind` and `id`
    /// - anything else → [`ApiError::Generic`] `"could not get {kind}: {message}"`
    pub(crate) async fn get_resource<T: DeserializeOwned>(
        &self,
        path: &str,
        kind: ResourceKind,
        id: &str,
    ) -> Result<T, ApiError> {
        let response = self.get(path).await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound {
                kind,
                id: id.to_string(),
            });
        }

        let context = format!("could not get {}", kind);
        let response = ensure_status(response, StatusCode::OK, Some(&context)).await?;
        decode_json(response).await
    }

    /// Lists one page of a collection.
    ///
    /// - 200 → the decoded [`Page`]
    /// - anything else → [`ApiError::Generic`] `"could not list {kinds}: {message}"`
    pub(crate) async fn list_resource<T: DeserializeOwned>(
        &self,
        path: &str,
        kind: ResourceKind,
        params: &impl QueryParams,
    ) -> Result<Page<T>, ApiError> {
        let response = self.get(&with_query(path, params)).await?;
        let context = format!("could not list {}", kind.plural());
        let response = ensure_status(response, StatusCode::OK, Some(&context)).await?;
        decode_json(response).await
    }

    /// Creates a resource from a JSON payload; expects 201.
    pub(crate) async fn create_resource<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        payload: &B,
    ) -> Result<T, ApiError> {
        let options = RequestOptions::new().json(payload)?;
        let response = self.execute(Method::POST, path, options).await?;
        let response = ensure_status(response, StatusCode::CREATED, None).await?;
        decode_json(response).await
    }

    /// Deletes a resource; expects 204.
    pub(crate) async fn delete_resource(&self, path: &str) -> Result<(), ApiError> {
        let response = self
            .execute(Method::DELETE, path, RequestOptions::new())
            .await?;
        ensure_status(response, StatusCode::NO_CONTENT, None).await?;
        Ok(())
    }

    /// Repository operations.
    pub fn repositories(&self) -> Repositories<'_> {
        Repositories::new(self)
    }

    /// Branch operations within `repository`.
    pub fn branches(&self, repository: &str) -> Branches<'_> {
        Branches::new(self, repository)
    }

    /// Object operations within `repository`.
    pub fn objects(&self, repository: &str) -> Objects<'_> {
        Objects::new(self, repository)
    }

    /// Commit operations within `repository`.
    pub fn commits(&self, repository: &str) -> Commits<'_> {
        Commits::new(self, repository)
    }

    /// Ref (diff) operations within `repository`.
    pub fn refs(&self, repository: &str) -> Refs<'_> {
        Refs::new(self, repository)
    }

    /// Login operations.
    pub fn auth(&self) -> Auth<'_> {
        Auth::new(self)
    }
}

/// Passes `response` through if it has the `expected` status.
///
/// Otherwise the body is classified with [`extract_message`] and returned as
/// [`ApiError::Generic`], prefixed with `context` when given
/// (`"{context}: {message}"`).
pub(crate) async fn ensure_status(
    response: Response,
    expected: StatusCode,
    context: Option<&str>,
) -> Result<Response, ApiError> {
    if response.status() == expected {
        return Ok(response);
    }

    let status = response.status();
    let message = extract_message(response).await?;
    debug!(%status, %message, "unexpected response status");

    Err(ApiError::Generic(match context {
        Some(context) => format!("{}: {}", context, message),
        None => message,
    }))
}
