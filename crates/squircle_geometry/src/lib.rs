//! Squircle corner geometry
//!
//! This crate provides the math behind smooth-corner ("squircle") rounded
//! rectangles:
//!
//! - **Corner identities**: the fixed four-corner enumeration and per-corner
//!   radii value type
//! - **Budget normalization**: distributing edge space so adjacent corner
//!   curves can never overlap
//! - **Corner profiles**: the bezier-shoulder + circular-arc composite curve
//!   approximating a continuous-curvature corner
//!
//! Everything here is pure arithmetic: no I/O, no shared state, and every
//! finite non-negative input produces finite output. Path assembly and
//! memoization live in `squircle_path`.
//!
//! # Example
//!
//! ```rust
//! use squircle_geometry::{distribute, CornerId, CornerProfile, CornerRadius};
//!
//! let requested = CornerRadius::new(60.0, 60.0, 0.0, 0.0);
//! let normalized = distribute(requested, 100.0, 100.0);
//!
//! // The two 60s split the 100-wide top edge evenly.
//! let top_left = normalized[CornerId::TopLeft.index()];
//! assert_eq!(top_left.radius, 50.0);
//!
//! let profile = CornerProfile::compute(top_left.radius, 0.6, false, top_left.budget);
//! assert!(profile.p <= top_left.budget);
//! ```

pub mod corner;
pub mod normalize;
pub mod profile;

pub use corner::{CornerId, CornerRadius, CORNERS};
pub use normalize::{distribute, uniform_budget, NormalizedCorner, NormalizedCorners};
pub use profile::CornerProfile;
