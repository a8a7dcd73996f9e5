//! Credentials and endpoint configuration for the Harvest API

use std::{fmt, path::Path};

use serde::Deserialize;
use url::Url;

use crate::error::{BuilderError, Error};

/// The production entrypoint of the Harvest v2 API
pub const DEFAULT_BASE_URL: &str = "https://api.harvestapp.com/v2/";

/// A value which should never end up in logs or debug output
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose_secret(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

/// The credential pair and base URL used by a [`Client`](crate::Client)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    account_id: String,
    token: Secret,
    base_url: Url,
}

/// Shape of the environment read by [`Config::from_env`]
#[derive(Deserialize)]
struct EnvConfig {
    harvest_account_id: String,
    access_token: String,
    harvest_api_url: Option<String>,
}

impl Config {
    /// Start building a config by hand
    ///
    /// # Example
    ///
    /// ```
    /// # use harvest_api::prelude::*;
    /// let config = Config::builder()
    ///     .account_id("123456")
    ///     .token("Bearer abc")
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(config.account_id(), "123456");
    /// assert_eq!(config.base_url().as_str(), "https://api.harvestapp.com/v2/");
    /// ```
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Read the configuration from the process environment.
    ///
    /// This function expects the following environment variables:
    ///
    /// + HARVEST_ACCOUNT_ID: The Harvest account the token belongs to
    /// + ACCESS_TOKEN: The value sent in the `Authorization` header, e.g. `Bearer <token>`
    /// + HARVEST_API_URL (optional): Overrides the API entrypoint
    pub fn from_env() -> Result<Self, Error> {
        let env = envy::from_env::<EnvConfig>()?;
        Self::from_parts(env)
    }

    /// Same as [`Config::from_env`], but reads the variables from the provided pairs.
    pub fn from_vars<I>(vars: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let env = envy::from_iter::<_, EnvConfig>(vars)?;
        Self::from_parts(env)
    }

    /// Load a dotenv file into the process environment, then read it with [`Config::from_env`].
    ///
    /// Variables already present in the environment take precedence over the file.
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        dotenvy::from_path(path).map_err(|error| {
            tracing::warn!(path = %path.display(), %error, "Failed to load env file");
            BuilderError::InvalidEnvPath(path.display().to_string())
        })?;

        Self::from_env()
    }

    fn from_parts(env: EnvConfig) -> Result<Self, Error> {
        let mut builder = Self::builder()
            .account_id(env.harvest_account_id)
            .token(env.access_token);
        if let Some(url) = env.harvest_api_url {
            builder = builder.base_url(url);
        }
        builder.build()
    }

    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    pub fn token(&self) -> &Secret {
        &self.token
    }

    pub fn expose_token(&self) -> &str {
        self.token.expose_secret()
    }

    /// The URL all request paths are joined onto. Always ends with `/`.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn set_base_url(&mut self, url: Url) {
        self.base_url = with_trailing_slash(url);
    }
}

#[derive(Clone, Debug, Default)]
pub struct ConfigBuilder {
    account_id: Option<String>,
    token: Option<Secret>,
    base_url: Option<String>,
}

impl ConfigBuilder {
    pub fn account_id(mut self, account_id: impl Into<String>) -> Self {
        self.account_id = Some(account_id.into());
        self
    }

    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(Secret::new(token));
        self
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn build(self) -> Result<Config, Error> {
        let account_id = self
            .account_id
            .filter(|id| !id.is_empty())
            .ok_or(BuilderError::MissingAccountId)?;
        let token = self
            .token
            .filter(|token| !token.expose_secret().is_empty())
            .ok_or(BuilderError::MissingToken)?;
        let base_url = Url::parse(self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL))?;

        Ok(Config {
            account_id,
            token,
            base_url: with_trailing_slash(base_url),
        })
    }
}

// `Url::join` replaces the last segment unless the base ends with a slash
fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}
