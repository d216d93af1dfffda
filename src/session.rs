// Swift v1 authentication and operator construction
use std::fmt;

use opendal::Operator;
use reqwest::header::HeaderMap;
use snafu::{OptionExt, ResultExt, ensure};

use crate::config::SwiftConfig;
use crate::error::{AuthHeaderMissingSnafu, AuthRejectedSnafu, AuthRequestSnafu, Result};

pub const AUTH_USER_HEADER: &str = "x-auth-user";
pub const AUTH_KEY_HEADER: &str = "x-auth-key";
pub const STORAGE_URL_HEADER: &str = "x-storage-url";
pub const AUTH_TOKEN_HEADER: &str = "x-auth-token";

/// An authenticated Swift account session.
#[derive(Clone)]
pub struct Session {
    storage_url: String,
    token: String,
}

impl Session {
    /// Exchange user and key for a storage URL and token.
    pub async fn authenticate(config: &SwiftConfig) -> Result<Self> {
        log::debug!(
            "authenticate user={} auth_url={}",
            config.user,
            config.auth_url
        );
        let response = reqwest::Client::new()
            .get(config.auth_url.as_str())
            .header(AUTH_USER_HEADER, config.user.as_str())
            .header(AUTH_KEY_HEADER, config.key.as_str())
            .send()
            .await
            .context(AuthRequestSnafu {
                url: config.auth_url.as_str(),
            })?;

        let status = response.status();
        ensure!(
            status.is_success(),
            AuthRejectedSnafu {
                status: status.as_u16()
            }
        );
        Self::from_headers(response.headers())
    }

    /// Build a session from the headers of a successful auth response.
    pub fn from_headers(headers: &HeaderMap) -> Result<Self> {
        let header = |name: &str| {
            headers
                .get(name)
                .and_then(|value| value.to_str().ok())
                .filter(|value| !value.is_empty())
                .map(str::to_string)
                .context(AuthHeaderMissingSnafu { header: name })
        };

        Ok(Self {
            storage_url: header(STORAGE_URL_HEADER)?,
            token: header(AUTH_TOKEN_HEADER)?,
        })
    }

    pub fn storage_url(&self) -> &str {
        &self.storage_url
    }

    /// Operator scoped to one container of this account.
    pub fn operator(&self, container: &str) -> Result<Operator> {
        let builder = opendal::services::Swift::default()
            .endpoint(&self.storage_url)
            .container(container)
            .token(&self.token);
        Ok(Operator::new(builder)?.finish())
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("storage_url", &self.storage_url)
            .field("token", &"<redacted>")
            .finish()
    }
}
