//! Dataset sources: the loader collaborator behind the grid.

use std::path::PathBuf;

use async_trait::async_trait;
use log::debug;
use url::Url;

use crate::error::LoadError;
use crate::row::Record;

/// A one-shot dataset fetch.
///
/// Resolves to the full row sequence or fails; there is no retry, caching
/// or cancellation. The grid stays inert (empty store, no-op interactions)
/// until a fetch resolves successfully.
#[async_trait]
pub trait RowSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<Record>, LoadError>;
}

/// Fetches a JSON array of row objects over HTTP.
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: Url,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(url: impl AsRef<str>) -> Result<Self, LoadError> {
        let url = Url::parse(url.as_ref()).map_err(|e| LoadError::InvalidUrl(e.to_string()))?;
        Ok(Self {
            url,
            client: reqwest::Client::new(),
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl RowSource for HttpSource {
    async fn fetch(&self) -> Result<Vec<Record>, LoadError> {
        debug!("fetching rows from {}", self.url);
        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }
}

/// Reads a JSON array of row objects from a file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

#[async_trait]
impl RowSource for FileSource {
    async fn fetch(&self) -> Result<Vec<Record>, LoadError> {
        debug!("reading rows from {}", self.path.display());
        let bytes = tokio::fs::read(&self.path).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
