//! Data source seam.
//!
//! The storefront reads two JSON resources from a deployment base:
//! the catalog document and one dictionary per locale. The base is
//! either a local directory or an `http(s)://` prefix; both sit
//! behind the same async trait so the rest of the app never cares
//! which transport is in play.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::catalog::Catalog;
use crate::i18n::Dictionary;

pub const CATALOG_PATH: &str = "data/catalog.json";

pub fn locale_path(code: &str) -> String {
    format!("locales/{code}.json")
}

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("request for {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("malformed JSON in {resource}: {source}")]
    Json {
        resource: String,
        #[source]
        source: serde_json::Error,
    },
}

#[async_trait]
pub trait DataSource: Send + Sync {
    async fn fetch_catalog(&self) -> Result<Catalog, SourceError>;
    async fn fetch_locale(&self, code: &str) -> Result<Dictionary, SourceError>;
    /// Human-readable origin for logs and the status line.
    fn describe(&self) -> String;
}

/// Picks the transport from the base's shape.
pub fn source_for_base(base: &str) -> Box<dyn DataSource> {
    if is_absolute_url(base) {
        Box::new(HttpSource::new(base))
    } else {
        Box::new(DirSource::new(base))
    }
}

fn is_absolute_url(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}

/// Joins a resource path onto the deployment base. Absolute URLs pass
/// through untouched; otherwise leading/trailing slashes collapse to
/// a single separator.
pub fn join_base(base: &str, path: &str) -> String {
    if is_absolute_url(path) {
        return path.to_string();
    }
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{base}/{path}")
}

/// Reads resources from a directory on disk.
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    async fn read_json<T: DeserializeOwned>(&self, relative: &str) -> Result<T, SourceError> {
        let path = self.root.join(relative);
        let raw = tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| SourceError::Io {
                path: path.display().to_string(),
                source,
            })?;
        serde_json::from_str(&raw).map_err(|source| SourceError::Json {
            resource: path.display().to_string(),
            source,
        })
    }
}

#[async_trait]
impl DataSource for DirSource {
    async fn fetch_catalog(&self) -> Result<Catalog, SourceError> {
        self.read_json(CATALOG_PATH).await
    }

    async fn fetch_locale(&self, code: &str) -> Result<Dictionary, SourceError> {
        self.read_json(&locale_path(code)).await
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}

/// Fetches resources over HTTP(S) from a base URL.
pub struct HttpSource {
    base: String,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(base: &str) -> Self {
        Self {
            base: base.to_string(),
            client: reqwest::Client::new(),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, relative: &str) -> Result<T, SourceError> {
        let url = join_base(&self.base, relative);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|source| SourceError::Http {
                url: url.clone(),
                source,
            })?;
        response.json().await.map_err(|source| SourceError::Http {
            url: url.clone(),
            source,
        })
    }
}

#[async_trait]
impl DataSource for HttpSource {
    async fn fetch_catalog(&self) -> Result<Catalog, SourceError> {
        self.get_json(CATALOG_PATH).await
    }

    async fn fetch_locale(&self, code: &str) -> Result<Dictionary, SourceError> {
        self.get_json(&locale_path(code)).await
    }

    fn describe(&self) -> String {
        self.base.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn join_collapses_slashes() {
        assert_eq!(join_base("https://shop.example/base/", "/data/catalog.json"),
            "https://shop.example/base/data/catalog.json");
        assert_eq!(join_base("https://shop.example/base", "data/catalog.json"),
            "https://shop.example/base/data/catalog.json");
    }

    #[test]
    fn join_passes_absolute_urls_through() {
        assert_eq!(
            join_base("/srv/shop", "https://cdn.example/img.jpg"),
            "https://cdn.example/img.jpg"
        );
    }

    #[test]
    fn base_shape_selects_transport() {
        assert_eq!(source_for_base("https://shop.example").describe(), "https://shop.example");
        assert_eq!(source_for_base("./deploy").describe(), "./deploy");
    }

    fn write_fixture(root: &Path) {
        fs::create_dir_all(root.join("data")).unwrap();
        fs::create_dir_all(root.join("locales")).unwrap();
        fs::write(
            root.join(CATALOG_PATH),
            r#"{ "version": 1, "updatedAt": "2025-01-01",
                 "contact": { "email": "shop@example.com" },
                 "categories": [], "products": [] }"#,
        )
        .unwrap();
        fs::write(
            root.join("locales/en.json"),
            r#"{ "site.title": "Vitrine" }"#,
        )
        .unwrap();
    }

    #[tokio::test]
    async fn dir_source_reads_catalog_and_locale() {
        let dir = tempfile::tempdir().unwrap();
        write_fixture(dir.path());
        let source = DirSource::new(dir.path());

        let catalog = source.fetch_catalog().await.unwrap();
        assert_eq!(catalog.version, 1);

        let dictionary = source.fetch_locale("en").await.unwrap();
        assert_eq!(dictionary.get("site.title").map(String::as_str), Some("Vitrine"));
    }

    #[tokio::test]
    async fn missing_resource_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = DirSource::new(dir.path());
        let err = source.fetch_locale("fr").await.unwrap_err();
        assert!(matches!(err, SourceError::Io { .. }));
    }

    #[tokio::test]
    async fn malformed_json_is_reported_as_such() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("locales")).unwrap();
        fs::write(dir.path().join("locales/en.json"), "{ not json").unwrap();
        let source = DirSource::new(dir.path());
        let err = source.fetch_locale("en").await.unwrap_err();
        assert!(matches!(err, SourceError::Json { .. }));
    }
}
