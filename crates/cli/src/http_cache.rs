// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Persistent cache of HTTP responses for checks that consult external
//! reference lists (IANA registries and the like).
//!
//! Responses are keyed by URL and expire one week after they were fetched.
//! The cache lives in a single postcard file under the user cache directory
//! and is shared across runs. Concurrent runs are not coordinated; the last
//! writer wins.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// Application directory name under the user cache directory.
pub const APP_NAME: &str = "stix2-validator";

/// Vendor directory, used on platforms that namespace by vendor.
pub const APP_VENDOR: &str = "OASIS";

/// Cache format version; part of the file name so formats never collide.
pub const CACHE_VERSION: u32 = 1;

/// Days a cached response stays fresh.
pub const EXPIRE_AFTER_DAYS: i64 = 7;

/// Error type for cache operations.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Cache directory could not be created.
    #[error("cannot create cache directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Serialization error.
    #[error("serialization error: {0}")]
    Postcard(#[from] postcard::Error),

    /// Network error.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success response.
    #[error("{url} returned status {status}")]
    Status { url: String, status: u16 },

    /// Platform has no user cache directory.
    #[error("no user cache directory on this platform")]
    NoCacheDir,
}

/// One cached response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedResponse {
    pub status: u16,
    pub body: Vec<u8>,
    pub created_at: DateTime<Utc>,
}

impl CachedResponse {
    pub fn new(status: u16, body: Vec<u8>) -> Self {
        Self {
            status,
            body,
            created_at: Utc::now(),
        }
    }

    fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        now - self.created_at < expire_after()
    }
}

/// On-disk layout.
#[derive(Debug, Serialize, Deserialize)]
struct PersistentCache {
    version: u32,
    entries: HashMap<String, CachedResponse>,
}

fn expire_after() -> TimeDelta {
    TimeDelta::days(EXPIRE_AFTER_DAYS)
}

/// Default cache directory, e.g. `~/.cache/stix2-validator` on Linux.
pub fn default_dir() -> Result<PathBuf, CacheError> {
    let base = dirs::cache_dir().ok_or(CacheError::NoCacheDir)?;
    if cfg!(windows) {
        Ok(base.join(APP_VENDOR).join(APP_NAME))
    } else {
        Ok(base.join(APP_NAME))
    }
}

/// Cache file name within the cache directory.
pub fn cache_file_name() -> String {
    format!("rs{CACHE_VERSION}cache.bin")
}

/// Create `dir` if missing. An existing directory is not an error.
fn ensure_dir(dir: &Path) -> Result<(), CacheError> {
    match std::fs::create_dir_all(dir) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => Ok(()),
        Err(source) => Err(CacheError::CreateDir {
            path: dir.to_path_buf(),
            source,
        }),
    }
}

/// Time-expiring response cache backed by one file.
#[derive(Debug)]
pub struct ResponseCache {
    path: PathBuf,
    entries: HashMap<String, CachedResponse>,
}

impl ResponseCache {
    /// Open the cache in the default directory.
    ///
    /// With `refresh`, every entry is dropped right after loading so the
    /// run downloads fresh copies.
    pub fn init(refresh: bool) -> Result<Self, CacheError> {
        Self::init_in(&default_dir()?, refresh)
    }

    /// Open the cache rooted at `dir`, creating the directory if needed.
    pub fn init_in(dir: &Path, refresh: bool) -> Result<Self, CacheError> {
        ensure_dir(dir)?;
        let path = dir.join(cache_file_name());
        let mut cache = Self {
            entries: Self::load(&path),
            path,
        };
        cache.purge_expired();
        if refresh {
            cache.clear();
        }
        tracing::debug!(
            path = %cache.path.display(),
            entries = cache.entries.len(),
            "external-data cache ready"
        );
        Ok(cache)
    }

    /// Read persisted entries; anything unreadable starts the cache empty.
    fn load(path: &Path) -> HashMap<String, CachedResponse> {
        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::debug!("no cache loaded from {}: {}", path.display(), e);
                return HashMap::new();
            }
        };
        match postcard::from_bytes::<PersistentCache>(&bytes) {
            Ok(cache) if cache.version == CACHE_VERSION => cache.entries,
            Ok(cache) => {
                tracing::debug!("discarding cache version {}", cache.version);
                HashMap::new()
            }
            Err(e) => {
                tracing::debug!("discarding unreadable cache: {}", e);
                HashMap::new()
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fresh response for `url`, if cached.
    pub fn get(&self, url: &str) -> Option<&CachedResponse> {
        let now = Utc::now();
        self.entries.get(url).filter(|r| r.is_fresh(now))
    }

    pub fn insert(&mut self, url: impl Into<String>, response: CachedResponse) {
        self.entries.insert(url.into(), response);
    }

    /// Remove entries created at or before `cutoff`. Returns how many went.
    pub fn remove_older_than(&mut self, cutoff: DateTime<Utc>) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, r| r.created_at > cutoff);
        before - self.entries.len()
    }

    /// Remove every entry created up to now.
    pub fn clear(&mut self) -> usize {
        self.remove_older_than(Utc::now())
    }

    /// Drop entries past their expiry window.
    pub fn purge_expired(&mut self) -> usize {
        self.remove_older_than(Utc::now() - expire_after())
    }

    /// Write the cache to disk atomically via a temp file.
    pub fn persist(&self) -> Result<(), CacheError> {
        let cache = PersistentCache {
            version: CACHE_VERSION,
            entries: self.entries.clone(),
        };
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }
        let temp_path = self.path.with_extension("tmp");
        let bytes = postcard::to_allocvec(&cache)?;
        std::fs::write(&temp_path, &bytes)?;
        std::fs::rename(&temp_path, &self.path)?;
        Ok(())
    }
}

/// Blocking HTTP client that consults the response cache first.
pub struct HttpClient {
    client: reqwest::blocking::Client,
    cache: Option<Mutex<ResponseCache>>,
}

impl HttpClient {
    /// Client that always goes to the network.
    pub fn uncached() -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            cache: None,
        }
    }

    pub fn with_cache(cache: ResponseCache) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            cache: Some(Mutex::new(cache)),
        }
    }

    /// GET `url` as text, serving a fresh cached copy when there is one.
    /// Only successful responses are cached.
    pub fn get_text(&self, url: &str) -> Result<String, CacheError> {
        if let Some(cache) = &self.cache {
            let cache = cache.lock().unwrap_or_else(PoisonError::into_inner);
            if let Some(hit) = cache.get(url) {
                tracing::trace!(url, "cache hit");
                return Ok(String::from_utf8_lossy(&hit.body).into_owned());
            }
        }

        tracing::debug!(url, "fetching");
        let response = self.client.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(CacheError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        let body = response.bytes()?.to_vec();
        let text = String::from_utf8_lossy(&body).into_owned();

        if let Some(cache) = &self.cache {
            cache
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .insert(url, CachedResponse::new(status.as_u16(), body));
        }
        Ok(text)
    }

    /// Give back the cache so the caller can clear or persist it.
    pub fn into_cache(self) -> Option<ResponseCache> {
        self.cache
            .map(|c| c.into_inner().unwrap_or_else(PoisonError::into_inner))
    }
}

#[cfg(test)]
#[path = "http_cache_tests.rs"]
mod tests;
