use chrono::Utc;
use reqwest::{Client, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use tracing::{debug, error, info, instrument, warn};

use crate::auth::{Credentials, TokenState};
use crate::config::ClientConfig;
use crate::endpoints::{Tenants, Tournaments};
use crate::error::PlaytomicError;
use crate::models::{LoginRequest, RefreshRequest, TokenResponse};

use super::http::create_http_client_with_timeout;
use super::urls::{build_api_url, build_login_url, build_refresh_url};

/// Client for the Playtomic API.
///
/// Owns the HTTP transport, the user credentials, and the current token
/// state. Tokens are refreshed transparently: before each request when the
/// held token has expired, and once more when the server answers 401 anyway.
///
/// The client holds its token state directly and mutates it through
/// `&mut self`; it is not meant to be shared across threads.
pub struct PlaytomicClient {
    http: Client,
    config: ClientConfig,
    credentials: Credentials,
    tokens: Option<TokenState>,
}

impl PlaytomicClient {
    /// Connects to the Playtomic API: loads configuration, builds the HTTP
    /// transport, and authenticates with the given credentials.
    ///
    /// # Returns
    /// * `Ok(PlaytomicClient)` - Authenticated client ready for requests
    /// * `Err(PlaytomicError)` - Configuration, transport, or login failure
    #[instrument(skip(password))]
    pub async fn connect(email: &str, password: &str) -> Result<Self, PlaytomicError> {
        let config = ClientConfig::load().await?;
        Self::connect_with_config(config, email, password).await
    }

    /// Connects with an explicit configuration instead of the default
    /// config-file/env lookup.
    pub async fn connect_with_config(
        config: ClientConfig,
        email: &str,
        password: &str,
    ) -> Result<Self, PlaytomicError> {
        config.validate()?;
        let http = create_http_client_with_timeout(config.http_timeout_seconds)?;

        let mut client = PlaytomicClient {
            http,
            config,
            credentials: Credentials::new(email, password),
            tokens: None,
        };
        client.login().await?;
        Ok(client)
    }

    /// Tenant operations.
    pub fn tenants(&mut self) -> Tenants<'_> {
        Tenants::new(self)
    }

    /// Tournament operations.
    pub fn tournaments(&mut self) -> Tournaments<'_> {
        Tournaments::new(self)
    }

    /// Get tenant information.
    pub async fn get_tenant(&mut self, tenant_id: &str) -> Result<Value, PlaytomicError> {
        self.tenants().get(tenant_id).await
    }

    /// Create a new tenant.
    pub async fn create_tenant(&mut self, tenant_data: Value) -> Result<Value, PlaytomicError> {
        self.tenants().create(tenant_data).await
    }

    /// Get tournament data.
    pub async fn get_tournament(&mut self, tournament_id: &str) -> Result<Value, PlaytomicError> {
        self.tournaments().get(tournament_id).await
    }

    /// Create a new tournament.
    pub async fn create_tournament(
        &mut self,
        tournament_data: Value,
    ) -> Result<Value, PlaytomicError> {
        self.tournaments().create(tournament_data).await
    }

    /// Sends an authenticated request to the API, refreshing the bearer token
    /// as needed.
    ///
    /// The held token is validated before the call; a 401 response triggers
    /// exactly one refresh-and-retry of the same call. Any further non-2xx
    /// response surfaces as an error carrying the status code and body.
    #[instrument(skip(self, body))]
    pub async fn request<T: DeserializeOwned>(
        &mut self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<T, PlaytomicError> {
        self.ensure_valid().await?;

        let url = build_api_url(&self.config.base_url, path);
        debug!("Sending {} request to {}", method, url);

        let mut response = self
            .send_authorized(method.clone(), &url, body.as_ref())
            .await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            warn!("Access token rejected (401). Refreshing token and retrying once");
            self.refresh().await?;
            response = self.send_authorized(method, &url, body.as_ref()).await?;
        }

        let status = response.status();
        debug!("Response status: {status}");

        let response_text = response.text().await.map_err(PlaytomicError::ApiFetch)?;
        if !status.is_success() {
            return Err(status_error(status, &response_text, &url));
        }

        parse_body(&response_text, &url)
    }

    /// Authenticates the user and stores the retrieved token pair.
    ///
    /// Any non-2xx response means the credentials were rejected and surfaces
    /// as an authentication error; no resource call is attempted.
    #[instrument(skip(self))]
    pub(crate) async fn login(&mut self) -> Result<(), PlaytomicError> {
        debug!("Authenticating user");
        let url = build_login_url(&self.config.base_url);
        let payload = LoginRequest {
            email: &self.credentials.email,
            password: self.credentials.password(),
        };

        let response = self
            .http
            .post(&url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| classify_transport_error(e, &url))?;

        let status = response.status();
        debug!("Login response status: {status}");

        let response_text = response.text().await.map_err(PlaytomicError::ApiFetch)?;
        if !status.is_success() {
            error!("Login rejected with status {}", status.as_u16());
            return Err(PlaytomicError::authentication(format!(
                "login rejected ({}): {}",
                status.as_u16(),
                message_for(status, &response_text)
            )));
        }

        let token_response: TokenResponse = parse_body(&response_text, &url)?;
        self.tokens = Some(TokenState::from_response(token_response, Utc::now()));
        info!("User authenticated successfully");
        Ok(())
    }

    /// Exchanges the held refresh token for a new token pair. Falls back to a
    /// full login when no refresh token is held or the exchange fails.
    #[instrument(skip(self))]
    pub(crate) async fn refresh(&mut self) -> Result<(), PlaytomicError> {
        let refresh_token = self
            .tokens
            .as_ref()
            .and_then(|t| t.refresh_token())
            .map(str::to_owned);

        let Some(refresh_token) = refresh_token else {
            debug!("No refresh token held, performing full login");
            return self.login().await;
        };

        debug!("Refreshing access token");
        match self.exchange_refresh_token(&refresh_token).await {
            Ok(token_response) => {
                self.tokens = Some(TokenState::from_response(token_response, Utc::now()));
                info!("Access token refreshed successfully");
                Ok(())
            }
            Err(e) => {
                warn!("Token refresh failed ({e}), falling back to login");
                self.login().await
            }
        }
    }

    /// Refreshes or re-authenticates when the held token is missing or
    /// expired; no-op while it is still fresh.
    pub(crate) async fn ensure_valid(&mut self) -> Result<(), PlaytomicError> {
        match &self.tokens {
            Some(tokens) if !tokens.is_expired() => Ok(()),
            Some(_) => {
                debug!("Access token expired, refreshing before request");
                self.refresh().await
            }
            None => self.login().await,
        }
    }

    async fn exchange_refresh_token(
        &self,
        refresh_token: &str,
    ) -> Result<TokenResponse, PlaytomicError> {
        let url = build_refresh_url(&self.config.base_url);
        let payload = RefreshRequest { refresh_token };

        let response = self
            .http
            .post(&url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| classify_transport_error(e, &url))?;

        let status = response.status();
        debug!("Refresh response status: {status}");

        let response_text = response.text().await.map_err(PlaytomicError::ApiFetch)?;
        if !status.is_success() {
            return Err(status_error(status, &response_text, &url));
        }

        parse_body(&response_text, &url)
    }

    async fn send_authorized(
        &self,
        method: Method,
        url: &str,
        body: Option<&Value>,
    ) -> Result<Response, PlaytomicError> {
        let tokens = self
            .tokens
            .as_ref()
            .ok_or_else(|| PlaytomicError::authentication("no access token held"))?;

        let mut request = self
            .http
            .request(method, url)
            .bearer_auth(tokens.access_token());
        if let Some(body) = body {
            request = request.json(body);
        }

        request
            .send()
            .await
            .map_err(|e| classify_transport_error(e, url))
    }
}

impl fmt::Debug for PlaytomicClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlaytomicClient")
            .field("config", &self.config)
            .field("credentials", &self.credentials)
            .field("authenticated", &self.tokens.is_some())
            .finish()
    }
}

/// Maps reqwest transport failures onto the network error variants.
fn classify_transport_error(e: reqwest::Error, url: &str) -> PlaytomicError {
    error!("Request failed for URL {}: {}", url, e);
    if e.is_timeout() {
        PlaytomicError::network_timeout(url)
    } else if e.is_connect() {
        PlaytomicError::network_connection(url, e.to_string())
    } else {
        PlaytomicError::ApiFetch(e)
    }
}

fn message_for(status: StatusCode, body: &str) -> String {
    if body.trim().is_empty() {
        status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string()
    } else {
        body.to_string()
    }
}

/// Maps a non-2xx response onto a status-specific error carrying the body.
fn status_error(status: StatusCode, body: &str, url: &str) -> PlaytomicError {
    let status_code = status.as_u16();
    let message = message_for(status, body);

    error!("HTTP {} - {} (URL: {})", status_code, message, url);

    match status_code {
        404 => PlaytomicError::api_not_found(url),
        429 => PlaytomicError::api_rate_limit(message, url),
        400..=499 => PlaytomicError::api_client_error(status_code, message, url),
        502 | 503 => PlaytomicError::api_service_unavailable(status_code, message, url),
        _ => PlaytomicError::api_server_error(status_code, message, url),
    }
}

/// Parses a response body, classifying failures into empty, non-JSON, and
/// JSON-with-unexpected-structure cases.
fn parse_body<T: DeserializeOwned>(response_text: &str, url: &str) -> Result<T, PlaytomicError> {
    debug!("Response length: {} bytes", response_text.len());

    match serde_json::from_str::<T>(response_text) {
        Ok(parsed) => Ok(parsed),
        Err(e) => {
            error!("Failed to parse API response: {} (URL: {})", e, url);

            if response_text.trim().is_empty() {
                Err(PlaytomicError::api_no_data("Response body is empty", url))
            } else if !response_text.trim_start().starts_with('{')
                && !response_text.trim_start().starts_with('[')
            {
                Err(PlaytomicError::api_malformed_json(
                    "Response is not valid JSON",
                    url,
                ))
            } else {
                Err(PlaytomicError::api_unexpected_structure(e.to_string(), url))
            }
        }
    }
}
