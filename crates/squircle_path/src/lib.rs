//! Squircle outlines as SVG path data
//!
//! This crate turns a box size plus per-corner rounding parameters into one
//! closed SVG path string, with Figma-style continuous corner smoothing:
//!
//! - **Parameters**: box size, a base radius with optional per-corner
//!   overrides, a shared smoothing factor, and a preserve-smoothing mode
//! - **Assembly**: four corner curves and the straight edges between them,
//!   clockwise, ready for any renderer that understands SVG path data
//! - **Memoization**: a corner-profile cache plus a bounded FIFO path cache,
//!   either injected ([`PathEngine`]) or process-wide ([`svg_path`])
//!
//! The corner math itself lives in `squircle_geometry`; its types are
//! re-exported here so most consumers need a single dependency.
//!
//! # Example
//!
//! ```rust
//! use squircle_path::{svg_path, SquircleParams};
//!
//! let params = SquircleParams::new(200.0, 80.0, 16.0, 0.6);
//! let path = svg_path(&params);
//! assert!(path.starts_with("M ") && path.ends_with(" Z"));
//! ```

pub mod cache;
pub mod error;
pub mod params;
pub mod svg;

pub use cache::{
    svg_path, svg_path_uncached, try_svg_path, PathEngine, DEFAULT_PATH_CAPACITY,
};
pub use error::ParamsError;
pub use params::SquircleParams;
pub use svg::{path_from_profiles, PathCommand};

// Re-export the geometry types consumers touch directly
pub use squircle_geometry::{
    distribute, uniform_budget, CornerId, CornerProfile, CornerRadius, NormalizedCorner,
    NormalizedCorners, CORNERS,
};
