use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{header::AUTHORIZATION, RequestBuilder, StatusCode};
use url::Url;

use crate::{api::Api, config::Config};

/// The header Harvest uses to select the account a token acts on
pub const ACCOUNT_ID_HEADER: &str = "Harvest-Account-Id";

/// An asynchronous `Client` for interfacing with the Harvest API.
///
/// The client is primarily defined based on its base URL and its credentials (account ID and
/// access token).
#[derive(Clone, Debug)]
pub struct Client {
    pub(crate) config: Config,
    pub(crate) client: reqwest::Client,
    universal_headers: Vec<(String, String)>,
}

impl PartialEq for Client {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config
    }
}

impl Client {
    /// Construct an API client from the provided config
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
    /// let client = Client::from_config(config);
    ///
    /// assert_eq!(client.config().account_id(), "123456");
    /// ```
    pub fn from_config(config: Config) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
            universal_headers: Vec::new(),
        }
    }

    /// A convenience method for constructing a client from environment variables.
    ///
    /// See [`Config::from_env`] for the variables read.
    pub fn from_env() -> Result<Self, crate::error::Error> {
        let config = Config::from_env()?;
        Ok(Self::from_config(config))
    }

    /// Adds a universal header key and value to all requests made with the client
    pub fn with_universal_header(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.universal_headers.push((key.into(), value.into()));
        self
    }

    fn append_headers(&self, mut req: RequestBuilder) -> RequestBuilder {
        for (header, value) in self.universal_headers.iter() {
            req = req.header(header, value);
        }
        req
    }

    fn authenticate(&self, req: RequestBuilder) -> RequestBuilder {
        req.header(ACCOUNT_ID_HEADER, self.config.account_id())
            .header(AUTHORIZATION, self.config.expose_token())
    }
}

#[async_trait]
impl Api for Client {
    async fn get(&self, url: Url) -> Result<(Bytes, StatusCode), crate::error::Error> {
        tracing::trace!("GET to {}", url);

        let req = self.authenticate(self.append_headers(self.client.get(url.clone())));

        let resp = req
            .send()
            .await
            .inspect_err(|error| tracing::warn!(%error, %url, "Failed to GET"))?;

        let status = resp.status();
        let body = resp
            .bytes()
            .await
            .inspect_err(|error| tracing::warn!(%url, %error, %status, "Failed to get response body"))
            .inspect(|body| tracing::debug!(%url, body = %String::from_utf8_lossy(body), %status, "Received response body"))?;

        Ok((body, status))
    }

    fn config(&self) -> &Config {
        &self.config
    }
}
