//! Scaled-bitmap cache for instant redisplay.
//!
//! Keeps decoded bitmaps already stretched to the surface, keyed by path and
//! target size, with an LRU policy. Small directories cycle entirely from
//! memory after the first pass.

use crate::image_loader::{Bitmap, SurfaceSize};
use log::debug;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    path: PathBuf,
    size: SurfaceSize,
}

impl CacheKey {
    fn new(path: &Path, size: SurfaceSize) -> Self {
        Self {
            path: path.to_path_buf(),
            size,
        }
    }
}

/// LRU cache for storing scaled bitmaps.
pub struct ImageCache {
    cache: LruCache<CacheKey, Bitmap>,
}

impl ImageCache {
    /// Creates a new image cache; a zero capacity is treated as one.
    pub fn new(capacity: usize) -> Self {
        Self {
            cache: LruCache::new(NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN)),
        }
    }

    /// Retrieves a bitmap scaled for `size`, if present.
    pub fn get(&mut self, path: &Path, size: SurfaceSize) -> Option<Bitmap> {
        let result = self.cache.get(&CacheKey::new(path, size)).cloned();
        if result.is_some() {
            debug!("Cache HIT: {}", path.display());
        } else {
            debug!("Cache MISS: {}", path.display());
        }
        result
    }

    /// Stores a bitmap under the size it was scaled to.
    pub fn put(&mut self, path: &Path, bitmap: Bitmap) {
        let size = SurfaceSize {
            width: bitmap.width,
            height: bitmap.height,
        };
        self.cache.put(CacheKey::new(path, size), bitmap);
        debug!(
            "Cache PUT: {} ({}x{}, {} cached)",
            path.display(),
            size.width,
            size.height,
            self.len()
        );
    }

    /// Checks presence without touching the LRU order.
    pub fn contains(&self, path: &Path, size: SurfaceSize) -> bool {
        self.cache.contains(&CacheKey::new(path, size))
    }

    fn len(&self) -> usize {
        self.cache.len()
    }
}
