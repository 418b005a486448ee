//! # Geometry Cache
//!
//! Write-once registry of expanded solids. Each solid is expanded the first
//! time it is requested and the same buffer is handed out for the lifetime
//! of the cache. There is no eviction: the catalog never changes.
//!
//! ## Threading
//!
//! Entries are shared through [`Rc`], so the cache is neither `Send` nor
//! `Sync`. Keep it on the thread that owns the rendering context.
//!
//! ## Example
//!
//! ```rust
//! use solid_shapes::cache::GeometryCache;
//! use solid_shapes::catalog::Solid;
//! use std::rc::Rc;
//!
//! let mut cache = GeometryCache::new();
//! let first = cache.get(Solid::Cube).unwrap();
//! let second = cache.get(Solid::Cube).unwrap();
//! assert!(Rc::ptr_eq(&first, &second));
//! ```

use crate::catalog::Solid;
use crate::error::ShapeResult;
use crate::expand::{expand_with, ExpandedGeometry};
use config::constants::GlobalConfig;
use log::debug;
use serde::Serialize;
use std::collections::HashMap;
use std::rc::Rc;

/// Cache statistics for monitoring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Requests answered from the cache
    pub hits: u64,
    /// Requests that had to expand the solid
    pub misses: u64,
}

impl CacheStats {
    /// Computes the hit rate (0.0 to 1.0).
    ///
    /// # Returns
    ///
    /// Hit rate as a fraction, or 0.0 if no accesses.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Lazily filled map from solid to its expanded geometry.
#[derive(Debug, Default)]
pub struct GeometryCache {
    /// Expanded solids
    entries: HashMap<Solid, Rc<ExpandedGeometry>>,
    /// Statistics
    stats: CacheStats,
    /// Limits applied when a solid is expanded
    config: GlobalConfig,
}

impl GeometryCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty cache that expands solids under `config`.
    pub fn with_config(config: GlobalConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Returns the expanded geometry for `solid`, building it on first use.
    ///
    /// # Errors
    ///
    /// Propagates limit and allocation failures from [`expand_with`]. A
    /// failed expansion leaves the cache untouched, so the next request tries
    /// again.
    pub fn get(&mut self, solid: Solid) -> ShapeResult<Rc<ExpandedGeometry>> {
        if let Some(geometry) = self.entries.get(&solid) {
            self.stats.hits += 1;
            return Ok(Rc::clone(geometry));
        }

        self.stats.misses += 1;
        let geometry = Rc::new(expand_with(&self.config, solid.descriptor())?);
        debug!(
            "expanded {solid}: {} vertices, indexed: {}",
            geometry.vertex_count(),
            geometry.indices().is_some()
        );
        self.entries.insert(solid, Rc::clone(&geometry));
        Ok(geometry)
    }

    /// Returns true if `solid` has already been expanded.
    pub fn is_cached(&self, solid: Solid) -> bool {
        self.entries.contains_key(&solid)
    }

    /// Returns the current number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the cache statistics.
    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}
