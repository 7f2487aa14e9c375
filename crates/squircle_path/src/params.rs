//! Shape request parameters

use squircle_geometry::{CornerId, CornerRadius};

use crate::error::ParamsError;

/// A fully described squircle request: box size, corner radii, and smoothing
///
/// Per-corner radii are optional and inherit `corner_radius` when unset. The
/// engine assumes finite, non-negative dimensions and radii and a smoothing
/// factor in `[0, 1]`; the layer producing these values is expected to
/// validate them first (or to go through
/// [`try_svg_path`](crate::try_svg_path), which calls [`validate`]).
///
/// [`validate`]: SquircleParams::validate
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SquircleParams {
    pub width: f32,
    pub height: f32,
    /// Base radius, inherited by corners without an explicit override
    pub corner_radius: f32,
    /// Shared smoothing factor in `[0, 1]`; 0 is a plain circular corner
    pub corner_smoothing: f32,
    /// Keep the smoothing character when a corner outgrows its budget,
    /// instead of dialing the smoothing factor down
    pub preserve_smoothing: bool,
    pub top_left_radius: Option<f32>,
    pub top_right_radius: Option<f32>,
    pub bottom_right_radius: Option<f32>,
    pub bottom_left_radius: Option<f32>,
}

impl Default for SquircleParams {
    fn default() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
            corner_radius: 0.0,
            corner_smoothing: 0.0,
            preserve_smoothing: false,
            top_left_radius: None,
            top_right_radius: None,
            bottom_right_radius: None,
            bottom_left_radius: None,
        }
    }
}

impl SquircleParams {
    pub fn new(width: f32, height: f32, corner_radius: f32, corner_smoothing: f32) -> Self {
        Self {
            width,
            height,
            corner_radius,
            corner_smoothing,
            ..Self::default()
        }
    }

    pub fn with_preserve_smoothing(mut self, preserve: bool) -> Self {
        self.preserve_smoothing = preserve;
        self
    }

    pub fn with_corner_radius(mut self, corner: CornerId, radius: f32) -> Self {
        match corner {
            CornerId::TopLeft => self.top_left_radius = Some(radius),
            CornerId::TopRight => self.top_right_radius = Some(radius),
            CornerId::BottomRight => self.bottom_right_radius = Some(radius),
            CornerId::BottomLeft => self.bottom_left_radius = Some(radius),
        }
        self
    }

    /// Resolve per-corner overrides against the base radius
    pub fn resolved_radii(&self) -> CornerRadius {
        CornerRadius::new(
            self.top_left_radius.unwrap_or(self.corner_radius),
            self.top_right_radius.unwrap_or(self.corner_radius),
            self.bottom_right_radius.unwrap_or(self.corner_radius),
            self.bottom_left_radius.unwrap_or(self.corner_radius),
        )
    }

    /// Fail-fast precondition check, naming the offending field.
    pub fn validate(&self) -> Result<(), ParamsError> {
        if !self.width.is_finite() || self.width < 0.0 {
            return Err(ParamsError::InvalidDimension {
                field: "width",
                value: self.width,
            });
        }
        if !self.height.is_finite() || self.height < 0.0 {
            return Err(ParamsError::InvalidDimension {
                field: "height",
                value: self.height,
            });
        }
        if !self.corner_smoothing.is_finite()
            || !(0.0..=1.0).contains(&self.corner_smoothing)
        {
            return Err(ParamsError::InvalidSmoothing(self.corner_smoothing));
        }
        if !self.corner_radius.is_finite() || self.corner_radius < 0.0 {
            return Err(ParamsError::InvalidBaseRadius(self.corner_radius));
        }
        let overrides = [
            (CornerId::TopLeft, self.top_left_radius),
            (CornerId::TopRight, self.top_right_radius),
            (CornerId::BottomRight, self.bottom_right_radius),
            (CornerId::BottomLeft, self.bottom_left_radius),
        ];
        for (corner, radius) in overrides {
            if let Some(value) = radius {
                if !value.is_finite() || value < 0.0 {
                    return Err(ParamsError::InvalidRadius { corner, value });
                }
            }
        }
        Ok(())
    }
}
