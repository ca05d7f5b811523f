//! Local filesystem storage implementation.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;

use crate::error::{AppError, Result};
use crate::models::City;
use crate::storage::SessionStore;

/// Write bytes atomically (write to temp, then rename).
async fn write_bytes(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    let tmp = path.with_extension("tmp");
    let mut file = tokio::fs::File::create(&tmp).await?;
    file.write_all(bytes).await?;
    file.flush().await?;
    drop(file);

    tokio::fs::rename(&tmp, path).await?;
    Ok(())
}

/// Read bytes, returning None if the file doesn't exist.
async fn read_bytes(path: &Path) -> Result<Option<Vec<u8>>> {
    match tokio::fs::read(path).await {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(AppError::Io(e)),
    }
}

/// Key/value session state in a single JSON file.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Create a store backed by the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn load_map(&self) -> Result<BTreeMap<String, String>> {
        match read_bytes(&self.path).await? {
            Some(bytes) => Ok(serde_json::from_slice(&bytes)?),
            None => Ok(BTreeMap::new()),
        }
    }

    async fn save_map(&self, map: &BTreeMap<String, String>) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(map)?;
        write_bytes(&self.path, &bytes).await
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.load_map().await?.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut map = self.load_map().await?;
        map.insert(key.to_string(), value.to_string());
        self.save_map(&map).await
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let mut map = self.load_map().await?;
        if map.remove(key).is_some() {
            self.save_map(&map).await?;
        }
        Ok(())
    }
}

/// Latest search results, persisted so later commands can resolve a city
/// by id or name without running another search.
#[derive(Debug, Clone)]
pub struct ResultsCache {
    path: PathBuf,
}

impl ResultsCache {
    /// Create a cache backed by the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Replace the cached results.
    pub async fn save(&self, cities: &[City]) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(cities)?;
        write_bytes(&self.path, &bytes).await
    }

    /// Load the cached results, empty when nothing was cached yet.
    pub async fn load(&self) -> Result<Vec<City>> {
        match read_bytes(&self.path).await? {
            Some(bytes) => Ok(serde_json::from_slice(&bytes)?),
            None => {
                log::debug!("No cached results at {:?}", self.path);
                Ok(Vec::new())
            }
        }
    }

    /// Resolve a city from the cache by id, exact name, or name prefix.
    pub async fn find(&self, needle: &str) -> Result<Option<City>> {
        let cities = self.load().await?;
        let lowered = needle.to_lowercase();
        Ok(cities
            .iter()
            .find(|c| c.id == needle)
            .or_else(|| cities.iter().find(|c| c.name.to_lowercase() == lowered))
            .or_else(|| {
                cities
                    .iter()
                    .find(|c| c.name.to_lowercase().starts_with(&lowered))
            })
            .cloned())
    }
}
