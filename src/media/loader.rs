// SPDX-License-Identifier: MPL-2.0
//! Injected image-loading collaborator.
//!
//! The photo review controller only depends on [`ImageLoader`]; the default
//! [`NetworkImageLoader`] fetches remote URLs with `reqwest` and reads local
//! files from disk. Payloads larger than the loader's byte cap are rejected
//! before decoding. Failures are logged and reported as `None`, which the
//! caller turns into the placeholder.

use super::image::{self, ImageData};
use crate::config::defaults::{MAX_PHOTO_BYTES, MAX_REDIRECTS, USER_AGENT};
use crate::error::{Error, Result};
use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Source of decoded images for a URL or path.
pub trait ImageLoader: Send + Sync + fmt::Debug {
    /// Resolves `source` to decoded image data, or `None` on any failure.
    fn load_image(&self, source: &str) -> BoxFuture<'static, Option<ImageData>>;
}

/// Where a source string points to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    Remote(String),
    Local(PathBuf),
}

impl ImageSource {
    #[must_use]
    pub fn parse(source: &str) -> Self {
        let trimmed = source.trim();
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            ImageSource::Remote(trimmed.to_string())
        } else if lower.starts_with("file://") {
            ImageSource::Local(PathBuf::from(&trimmed["file://".len()..]))
        } else {
            ImageSource::Local(PathBuf::from(trimmed))
        }
    }
}

/// Default loader: HTTP(S) through a shared `reqwest` client, everything
/// else from the local filesystem.
#[derive(Debug, Clone)]
pub struct NetworkImageLoader {
    client: reqwest::Client,
    max_bytes: u64,
}

impl NetworkImageLoader {
    /// Builds the loader with a bounded redirect policy and the app user agent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Network`] if the HTTP client cannot be constructed
    /// (e.g. TLS backend initialization failure).
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            max_bytes: MAX_PHOTO_BYTES,
        })
    }

    async fn fetch(
        client: reqwest::Client,
        source: ImageSource,
        max_bytes: u64,
    ) -> Result<ImageData> {
        let bytes = match source {
            ImageSource::Remote(url) => download(&client, &url, max_bytes).await?,
            ImageSource::Local(path) => {
                tokio::task::spawn_blocking(move || read_capped(&path, max_bytes))
                    .await
                    .map_err(|e| Error::Io(e.to_string()))??
            }
        };

        tokio::task::spawn_blocking(move || image::decode(&bytes))
            .await
            .map_err(|e| Error::Decode(e.to_string()))?
    }
}

/// Streams the body of `url`, failing once it exceeds `max_bytes`.
async fn download(client: &reqwest::Client, url: &str, max_bytes: u64) -> Result<Vec<u8>> {
    let mut response = client.get(url).send().await?;
    if !response.status().is_success() {
        return Err(Error::Network(format!(
            "HTTP status: {}",
            response.status()
        )));
    }
    if let Some(length) = response.content_length() {
        if length > max_bytes {
            return Err(too_large(Error::Network, max_bytes));
        }
    }

    let mut bytes = Vec::new();
    while let Some(chunk) = response.chunk().await? {
        if (bytes.len() + chunk.len()) as u64 > max_bytes {
            return Err(too_large(Error::Network, max_bytes));
        }
        bytes.extend_from_slice(&chunk);
    }
    Ok(bytes)
}

fn read_capped(path: &Path, max_bytes: u64) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    File::open(path)?
        .take(max_bytes.saturating_add(1))
        .read_to_end(&mut bytes)?;
    if bytes.len() as u64 > max_bytes {
        return Err(too_large(Error::Io, max_bytes));
    }
    Ok(bytes)
}

fn too_large(kind: fn(String) -> Error, max_bytes: u64) -> Error {
    kind(format!("photo exceeds the {max_bytes} byte limit"))
}

impl ImageLoader for NetworkImageLoader {
    fn load_image(&self, source: &str) -> BoxFuture<'static, Option<ImageData>> {
        let client = self.client.clone();
        let max_bytes = self.max_bytes;
        let parsed = ImageSource::parse(source);
        let source = source.to_string();

        async move {
            match Self::fetch(client, parsed, max_bytes).await {
                Ok(data) => {
                    tracing::debug!(%source, width = data.width, height = data.height, "photo loaded");
                    Some(data)
                }
                Err(err) => {
                    tracing::warn!(%source, %err, "photo load failed");
                    None
                }
            }
        }
        .boxed()
    }
}
