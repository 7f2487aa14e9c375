//! Parameter validation errors

use squircle_geometry::CornerId;
use thiserror::Error;

/// Errors reported when a parameter set violates the engine's preconditions
///
/// The geometry itself never fails for valid input; these only surface from
/// the fail-fast entry point ([`try_svg_path`](crate::try_svg_path)).
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ParamsError {
    /// Corner smoothing outside `[0, 1]` or not a finite number
    #[error("corner smoothing must be a finite value in [0, 1], got {0}")]
    InvalidSmoothing(f32),

    /// Box dimension negative or not a finite number
    #[error("{field} must be finite and non-negative, got {value}")]
    InvalidDimension { field: &'static str, value: f32 },

    /// Base or per-corner radius negative or not a finite number
    #[error("{corner} corner radius must be finite and non-negative, got {value}")]
    InvalidRadius { corner: CornerId, value: f32 },

    /// Base radius negative or not a finite number
    #[error("corner radius must be finite and non-negative, got {0}")]
    InvalidBaseRadius(f32),
}
