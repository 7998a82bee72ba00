//! Artifactory REST API client

use reqwest::{Client, Method};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use url::Url;

use crate::error::{NpmartError, Result};

/// Path of the account-wide npm auth endpoint, relative to the base URL
const GENERAL_AUTH_PATH: &str = "api/npm/auth";

/// Path of the API key endpoint, relative to the base URL
const API_KEY_PATH: &str = "api/security/apiKey";

/// Response payload of the API key endpoints
#[derive(Debug, Deserialize)]
struct ApiKeyResponse {
    #[serde(rename = "apiKey")]
    api_key: Option<String>,
}

/// Client for the Artifactory npm and security endpoints.
///
/// All requests use HTTP basic auth with the account email and either the
/// password or, once resolved, the account's API key.
pub struct ArtifactoryClient {
    client: Client,
    base_url: Url,
    email: String,
    password: SecretString,
}

impl ArtifactoryClient {
    /// Create a client for `https://<hostname>/artifactory/`.
    ///
    /// The hostname must be bare: credential lines in `.npmrc` hardwire
    /// port 443, so a scheme, port or path here would produce entries npm
    /// never matches.
    pub fn new(hostname: &str, email: String, password: SecretString) -> Result<Self> {
        let base_url = Url::parse(&format!("https://{}/artifactory/", hostname))
            .ok()
            .filter(|url| {
                url.port().is_none()
                    && url
                        .host_str()
                        .is_some_and(|host| host.eq_ignore_ascii_case(hostname))
            })
            .ok_or_else(|| NpmartError::InvalidHostname(hostname.to_string()))?;

        Ok(Self {
            client: Client::new(),
            base_url,
            email,
            password,
        })
    }

    /// Swap the password for another secret, typically a resolved API key.
    pub fn with_password(mut self, password: SecretString) -> Self {
        self.password = password;
        self
    }

    /// Fetch the account-wide npm auth block (`_auth`, `always-auth`, ...).
    pub async fn fetch_general_auth(&self) -> Result<String> {
        self.get_text(GENERAL_AUTH_PATH).await
    }

    /// Fetch the scoped `.npmrc` fragment for one repository.
    pub async fn fetch_registry_auth(&self, repository: &str, scope: &str) -> Result<String> {
        self.get_text(&format!("api/npm/{}/auth/{}", repository, scope))
            .await
    }

    /// Fetch the account's API key, creating one if none exists yet.
    ///
    /// Both the lookup and the creation are best-effort: on any failure
    /// the caller keeps authenticating with the plain password.
    pub async fn fetch_or_create_api_key(&self) -> Option<SecretString> {
        match self.api_key_request(Method::GET).await {
            Ok(Some(key)) => return Some(key),
            Ok(None) => tracing::debug!("Account has no API key yet, creating one"),
            Err(e) => tracing::debug!("API key lookup failed: {}", e),
        }

        match self.api_key_request(Method::POST).await {
            Ok(Some(key)) => Some(key),
            Ok(None) => {
                tracing::info!("API key creation returned no key, keeping the password");
                None
            }
            Err(e) => {
                tracing::info!("API key creation failed, keeping the password: {}", e);
                None
            }
        }
    }

    async fn api_key_request(&self, method: Method) -> Result<Option<SecretString>> {
        let url = self.endpoint(API_KEY_PATH)?;
        let response = self
            .client
            .request(method, url.clone())
            .basic_auth(&self.email, Some(self.password.expose_secret()))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(NpmartError::ArtifactoryApi(format!(
                "{} returned {}: {}",
                url, status, error_text
            )));
        }

        let payload: ApiKeyResponse = response.json().await?;
        Ok(payload.api_key.map(SecretString::from))
    }

    async fn get_text(&self, path: &str) -> Result<String> {
        let url = self.endpoint(path)?;
        let response = self
            .client
            .get(url.clone())
            .basic_auth(&self.email, Some(self.password.expose_secret()))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(NpmartError::ArtifactoryApi(format!(
                "{} returned {}: {}",
                url, status, error_text
            )));
        }

        Ok(response.text().await?)
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }
}
