use std::rc::Rc;

use chrono::Utc;
use dioxus_logger::tracing;
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    config::ClientConfig,
    error::{HttpError, TransportError},
    guard::Landing,
    http::transport::{HttpRequest, HttpResponse, Method, Transport},
    model::{
        api::ErrorDto,
        auth::{RefreshRequest, RefreshResponse},
    },
    nav::Redirect,
    session::{KeyValueStore, SessionStore},
};

/// Endpoints that never receive the bearer token.
pub const PUBLIC_ENDPOINTS: [&str; 3] = ["/auth/register", "/auth/login", "/auth/verify-email"];

pub const REFRESH_PATH: &str = "/auth/refresh-token";

/// Name of the cache-busting query parameter added to authenticated reads.
const CACHE_BUST_PARAM: &str = "_t";

pub fn is_public_endpoint(path: &str) -> bool {
    let path = path.split('?').next().unwrap_or(path).trim_end_matches('/');
    PUBLIC_ENDPOINTS
        .iter()
        .any(|endpoint| path.ends_with(endpoint))
}

/// Per-request state carried through the 401 recovery path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RequestContext {
    /// Set once the request was replayed after a token refresh.
    pub retried: bool,
}

/// Client for the backend REST API.
///
/// Clones share the transport, session store and redirect sink.
pub struct ApiClient<T, S, R> {
    config: ClientConfig,
    transport: Rc<T>,
    sessions: SessionStore<S>,
    redirect: Rc<R>,
}

impl<T, S: Clone, R> Clone for ApiClient<T, S, R> {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            transport: self.transport.clone(),
            sessions: self.sessions.clone(),
            redirect: self.redirect.clone(),
        }
    }
}

impl<T, S, R> ApiClient<T, S, R>
where
    T: Transport,
    S: KeyValueStore,
    R: Redirect,
{
    pub fn new(config: &ClientConfig, transport: T, sessions: SessionStore<S>, redirect: R) -> Self {
        Self {
            config: config.clone(),
            transport: Rc::new(transport),
            sessions,
            redirect: Rc::new(redirect),
        }
    }

    pub fn sessions(&self) -> &SessionStore<S> {
        &self.sessions
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub async fn get<D: DeserializeOwned>(&self, path: &str) -> Result<D, HttpError> {
        self.get_with_query(path, &[]).await
    }

    pub async fn get_with_query<D: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<D, HttpError> {
        let response = self.execute(Method::Get, path, query, None).await?;
        self.decode(path, &response)
    }

    pub async fn post<B: Serialize, D: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<D, HttpError> {
        self.send_json(Method::Post, path, body).await
    }

    pub async fn put<B: Serialize, D: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<D, HttpError> {
        self.send_json(Method::Put, path, body).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), HttpError> {
        self.execute(Method::Delete, path, &[], None).await?;
        Ok(())
    }

    /// Sends `body` as JSON and decodes the JSON response.
    ///
    /// An empty response body decodes as JSON `null`, so `()` and `Option<_>` work for endpoints
    /// that return nothing.
    pub async fn send_json<B: Serialize, D: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<D, HttpError> {
        let body = serde_json::to_string(body).map_err(|e| HttpError::Setup(e.to_string()))?;
        let response = self.execute(method, path, &[], Some(body)).await?;
        self.decode(path, &response)
    }

    /// Sends a request, recovering from a single `401` through a token refresh.
    ///
    /// Every endpoint takes the same path, public ones included: a rejected login with no
    /// refresh token stored ends in a cleared session and a redirect to login selection.
    pub async fn execute(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        body: Option<String>,
    ) -> Result<HttpResponse, HttpError> {
        let mut context = RequestContext::default();

        loop {
            let request = self.prepare(method, path, query, body.clone());
            let response = self.dispatch(&request).await?;

            if response.status == 401 && !context.retried {
                context.retried = true;
                tracing::debug!("{} {} returned 401, attempting token refresh", method, path);

                if self.refresh_session().await {
                    continue;
                }
            }

            if !response.is_success() {
                return Err(Self::server_error(&request, &response));
            }

            return Ok(response);
        }
    }

    fn prepare(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        body: Option<String>,
    ) -> HttpRequest {
        let mut headers = vec![
            ("Content-Type".to_string(), "application/json".to_string()),
            ("Accept".to_string(), "application/json".to_string()),
        ];
        let mut query = query.to_vec();

        if !is_public_endpoint(path) {
            if let Some(token) = self.sessions.token() {
                headers.push(("Authorization".to_string(), format!("Bearer {}", token)));

                if method == Method::Get {
                    query.push((
                        CACHE_BUST_PARAM.to_string(),
                        Utc::now().timestamp_millis().to_string(),
                    ));
                }
            }
        }

        HttpRequest {
            method,
            url: self.config.url(path),
            query,
            headers,
            body,
        }
    }

    /// Hands the request to the transport, mapping failures without a response.
    async fn dispatch(&self, request: &HttpRequest) -> Result<HttpResponse, HttpError> {
        tracing::debug!("{} {}", request.method, request.url);

        match self.transport.send(request).await {
            Ok(response) => {
                tracing::debug!(
                    status = response.status,
                    "{} {} completed",
                    request.method,
                    request.url
                );
                Ok(response)
            }
            Err(TransportError::Setup(reason)) => {
                tracing::error!(
                    "Failed to set up {} {}: {}",
                    request.method,
                    request.url,
                    reason
                );
                Err(HttpError::Setup(reason))
            }
            Err(e) => {
                tracing::error!("{} {} failed: {}", request.method, request.url, e);
                Err(HttpError::Network {
                    method: request.method.to_string(),
                    url: request.url.clone(),
                    reason: e.to_string(),
                })
            }
        }
    }

    /// Exchanges the stored refresh token for a new access token.
    ///
    /// Returns `true` when the session was refreshed and the original request may be replayed.
    /// On any failure the session is cleared and a redirect to login selection is issued.
    async fn refresh_session(&self) -> bool {
        let Some(refresh_token) = self.sessions.refresh_token() else {
            tracing::info!("No refresh token stored, ending session");
            self.force_logout();
            return false;
        };

        let refreshed = match self.request_refresh(refresh_token).await {
            Ok(refreshed) => refreshed,
            Err(e) => {
                tracing::warn!("Token refresh failed, ending session: {}", e);
                self.force_logout();
                return false;
            }
        };

        if let Err(e) = self.sessions.refresh(&refreshed.token, &refreshed.user) {
            tracing::error!("Failed to store refreshed session: {}", e);
            self.force_logout();
            return false;
        }

        true
    }

    /// Sent straight through the transport so it never carries the rejected bearer token and
    /// never re-enters the 401 path.
    async fn request_refresh(&self, refresh_token: String) -> Result<RefreshResponse, HttpError> {
        let body = serde_json::to_string(&RefreshRequest { refresh_token })
            .map_err(|e| HttpError::Setup(e.to_string()))?;
        let request = HttpRequest {
            method: Method::Post,
            url: self.config.url(REFRESH_PATH),
            query: Vec::new(),
            headers: vec![
                ("Content-Type".to_string(), "application/json".to_string()),
                ("Accept".to_string(), "application/json".to_string()),
            ],
            body: Some(body),
        };

        let response = self.dispatch(&request).await?;
        if !response.is_success() {
            return Err(Self::server_error(&request, &response));
        }

        self.decode(REFRESH_PATH, &response)
    }

    fn force_logout(&self) {
        if let Err(e) = self.sessions.clear() {
            tracing::error!("Failed to clear session during forced logout: {}", e);
        }

        let select_login = Landing::SelectLogin.path();
        if !self.redirect.current_path().contains(select_login) {
            self.redirect.redirect(select_login);
        }
    }

    fn server_error(request: &HttpRequest, response: &HttpResponse) -> HttpError {
        let message = ErrorDto::message_from_body(&response.body)
            .unwrap_or_else(|| format!("Request failed with status {}", response.status));

        tracing::warn!(
            status = response.status,
            "{} {} rejected: {}",
            request.method,
            request.url,
            message
        );

        HttpError::Server {
            method: request.method.to_string(),
            url: request.url.clone(),
            status: response.status,
            message,
        }
    }

    fn decode<D: DeserializeOwned>(&self, path: &str, response: &HttpResponse) -> Result<D, HttpError> {
        let body = if response.body.trim().is_empty() {
            "null"
        } else {
            response.body.as_str()
        };

        serde_json::from_str(body).map_err(|e| {
            let url = self.config.url(path);
            tracing::error!("Failed to parse response from {}: {}", url, e);
            HttpError::Decode {
                url,
                reason: e.to_string(),
            }
        })
    }
}
