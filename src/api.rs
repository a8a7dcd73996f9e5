//! # Harvest API
//!
//! This module exists to define the Harvest API trait, which can be implemented for multiple client
//! types.
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    config::Config,
    error::{Error, RuntimeError},
    models::ProjectList,
};

/// A super trait containing all the requirements for Harvest API values
pub trait Value: std::fmt::Debug + DeserializeOwned + Send {}

impl<T> Value for T where T: std::fmt::Debug + DeserializeOwned + Send {}

/// The primary trait for interfacing with Harvest
#[async_trait]
pub trait Api: Send + Sync {
    /// Creates a get request at the provided absolute URI, authenticated with the configured
    /// account ID and token.
    ///
    /// Returns the raw binary body, and the status code.
    async fn get(&self, url: Url) -> Result<(Bytes, StatusCode), Error>;

    fn config(&self) -> &Config;

    /// Creates a get request at the provided absolute URI.
    ///
    /// The JSON response is then deserialized into the required type, erroring if the
    /// deserialization fails, and providing the object if it succeeds. A non-success status is
    /// reported as a response error and the body is not decoded.
    async fn get_json_map<T>(&self, url: Url) -> Result<T, Error>
    where
        T: Value,
    {
        let (body, status) = self.get(url).await?;

        error_on_non_success(&status, &body)?;

        serde_json::from_slice(&body).map_err(From::from)
    }

    /// Fetch the URL from the given path, relative to the configured base URL
    fn path_to_url(&self, path: impl AsRef<str>) -> Result<Url, Error> {
        self.config()
            .base_url()
            .join(path.as_ref())
            .map_err(From::from)
    }

    /// Produces the first page of projects visible to the configured account.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use harvest_api::prelude::*;
    /// # tokio_test::block_on(async {
    /// let client = Client::from_env()?;
    ///
    /// let projects = client.get_projects().await?;
    /// for project in &projects {
    ///     println!("{}: {}", project.id, project.name);
    /// }
    /// # Ok::<_, Box<dyn std::error::Error>>(())
    /// # });
    /// ```
    async fn get_projects(&self) -> Result<ProjectList, Error> {
        let uri = self.path_to_url("projects")?;
        self.get_json_map(uri).await
    }
}

fn error_on_non_success(status: &StatusCode, body: &[u8]) -> Result<(), Error> {
    if !status.is_success() {
        let message = match String::from_utf8_lossy(body).trim() {
            "" => status.to_string(),
            body => format!("{status}: {body}"),
        };
        return Err(Error::Runtime(RuntimeError::Response(message)));
    }

    Ok(())
}
