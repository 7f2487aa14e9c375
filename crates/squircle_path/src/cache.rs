//! Shape memoization
//!
//! Two layers of lookup sit in front of the geometry: a corner-profile cache
//! (one entry per distinct corner shape) and a bounded path cache (one entry
//! per distinct box request). Both are owned by a [`PathEngine`] so tests can
//! build a fresh instance; a process-wide engine backs the free functions for
//! the common case of UI elements re-rendering with unchanged bounds.
//!
//! Caching is transparent: [`svg_path_uncached`] produces byte-identical
//! output without touching either cache.

use std::sync::{LazyLock, Mutex};

use indexmap::IndexMap;
use rustc_hash::{FxBuildHasher, FxHashMap};
use squircle_geometry::{distribute, uniform_budget, CornerProfile, CORNERS};

use crate::error::ParamsError;
use crate::params::SquircleParams;
use crate::svg::path_from_profiles;

/// Path cache entries kept before the oldest insertion is dropped
pub const DEFAULT_PATH_CAPACITY: usize = 160;

/// Cache keys quantize to 4 decimals, mirroring the emitted coordinate
/// precision, so float jitter below output resolution shares an entry.
fn quantize(value: f32) -> i64 {
    (f64::from(value) * 10_000.0).round() as i64
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct ProfileKey {
    radius: i64,
    smoothing: i64,
    budget: i64,
    preserve_smoothing: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct PathKey {
    width: i64,
    height: i64,
    smoothing: i64,
    preserve_smoothing: bool,
    radii: [i64; 4],
}

impl PathKey {
    fn new(params: &SquircleParams) -> Self {
        Self {
            width: quantize(params.width),
            height: quantize(params.height),
            smoothing: quantize(params.corner_smoothing),
            preserve_smoothing: params.preserve_smoothing,
            radii: params.resolved_radii().to_array().map(quantize),
        }
    }
}

/// Clamped `(radius, budget)` pairs for all four corners, taking the cheap
/// single-budget route when the request is symmetric.
fn resolve_corners(params: &SquircleParams) -> [(f32, f32); 4] {
    let radii = params.resolved_radii();
    if radii.is_uniform() {
        let budget = uniform_budget(params.width, params.height);
        let radius = radii.top_left.min(budget);
        return [(radius, budget); 4];
    }
    let normalized = distribute(radii, params.width, params.height);
    normalized.map(|corner| (corner.radius, corner.budget))
}

/// Compute a path with no memoization at all.
///
/// Exists so cache behavior stays observable: for any valid request this
/// returns the same string as [`PathEngine::svg_path`], only slower.
pub fn svg_path_uncached(params: &SquircleParams) -> String {
    let mut profiles = [CornerProfile::ZERO; 4];
    for (corner, (radius, budget)) in CORNERS.iter().zip(resolve_corners(params)) {
        profiles[corner.index()] = CornerProfile::compute(
            radius,
            params.corner_smoothing,
            params.preserve_smoothing,
            budget,
        );
    }
    path_from_profiles(params.width, params.height, &profiles)
}

/// The geometry engine with its two caches
///
/// Construct one per renderer (or rely on the process-wide instance behind
/// [`svg_path`]). The profile cache is unbounded; distinct corner shapes are
/// few in practice. The path cache holds at most `path_capacity` entries and
/// evicts the oldest insertion first.
pub struct PathEngine {
    profiles: FxHashMap<ProfileKey, CornerProfile>,
    paths: IndexMap<PathKey, String, FxBuildHasher>,
    path_capacity: usize,
}

impl PathEngine {
    pub fn new() -> Self {
        Self::with_path_capacity(DEFAULT_PATH_CAPACITY)
    }

    pub fn with_path_capacity(path_capacity: usize) -> Self {
        Self {
            profiles: FxHashMap::default(),
            paths: IndexMap::with_capacity_and_hasher(path_capacity, FxBuildHasher),
            path_capacity,
        }
    }

    /// Outline for the requested shape, memoized.
    pub fn svg_path(&mut self, params: &SquircleParams) -> String {
        let key = PathKey::new(params);
        if let Some(path) = self.paths.get(&key) {
            return path.clone();
        }

        let mut profiles = [CornerProfile::ZERO; 4];
        for (corner, (radius, budget)) in CORNERS.iter().zip(resolve_corners(params)) {
            profiles[corner.index()] = self.profile(
                radius,
                params.corner_smoothing,
                params.preserve_smoothing,
                budget,
            );
        }
        let path = path_from_profiles(params.width, params.height, &profiles);

        if self.path_capacity > 0 {
            if self.paths.len() >= self.path_capacity {
                // FIFO: the oldest-inserted entry goes first, regardless of
                // how recently it was hit.
                self.paths.shift_remove_index(0);
                tracing::trace!(capacity = self.path_capacity, "path cache evicted oldest entry");
            }
            self.paths.insert(key, path.clone());
        }
        path
    }

    fn profile(
        &mut self,
        radius: f32,
        smoothing: f32,
        preserve_smoothing: bool,
        budget: f32,
    ) -> CornerProfile {
        let key = ProfileKey {
            radius: quantize(radius),
            smoothing: quantize(smoothing),
            budget: quantize(budget),
            preserve_smoothing,
        };
        *self
            .profiles
            .entry(key)
            .or_insert_with(|| CornerProfile::compute(radius, smoothing, preserve_smoothing, budget))
    }

    pub fn path_cache_len(&self) -> usize {
        self.paths.len()
    }

    pub fn profile_cache_len(&self) -> usize {
        self.profiles.len()
    }

    pub fn clear(&mut self) {
        self.paths.clear();
        self.profiles.clear();
    }
}

impl Default for PathEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Process-wide engine behind the free functions; lazily constructed.
static ENGINE: LazyLock<Mutex<PathEngine>> = LazyLock::new(|| Mutex::new(PathEngine::new()));

/// Outline for the requested shape, using the process-wide engine.
///
/// Assumes the preconditions documented on [`SquircleParams`] hold; use
/// [`try_svg_path`] when the inputs come from an unvalidated source.
pub fn svg_path(params: &SquircleParams) -> String {
    ENGINE.lock().unwrap().svg_path(params)
}

/// Validating variant of [`svg_path`].
pub fn try_svg_path(params: &SquircleParams) -> Result<String, ParamsError> {
    params.validate()?;
    Ok(svg_path(params))
}
