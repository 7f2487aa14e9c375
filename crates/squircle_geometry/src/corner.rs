//! Corner identities and per-corner radii

use std::fmt;

/// Identifies one of the four corners of a rectangle
///
/// The enumeration is fixed; there is no notion of additional corners.
/// Clockwise order starting from the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CornerId {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

/// All four corners in clockwise order starting from the top-left
pub const CORNERS: [CornerId; 4] = [
    CornerId::TopLeft,
    CornerId::TopRight,
    CornerId::BottomRight,
    CornerId::BottomLeft,
];

impl CornerId {
    /// Stable index into four-element per-corner arrays (clockwise from top-left)
    pub const fn index(self) -> usize {
        match self {
            CornerId::TopLeft => 0,
            CornerId::TopRight => 1,
            CornerId::BottomRight => 2,
            CornerId::BottomLeft => 3,
        }
    }

    /// The two corners sharing an edge with this one, paired with the length
    /// of the shared edge for a `width` x `height` box.
    ///
    /// Order is (horizontal-edge neighbor, vertical-edge neighbor).
    pub fn adjacent(self, width: f32, height: f32) -> [(CornerId, f32); 2] {
        match self {
            CornerId::TopLeft => [(CornerId::TopRight, width), (CornerId::BottomLeft, height)],
            CornerId::TopRight => [(CornerId::TopLeft, width), (CornerId::BottomRight, height)],
            CornerId::BottomRight => [(CornerId::BottomLeft, width), (CornerId::TopRight, height)],
            CornerId::BottomLeft => [(CornerId::BottomRight, width), (CornerId::TopLeft, height)],
        }
    }
}

impl fmt::Display for CornerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CornerId::TopLeft => "top-left",
            CornerId::TopRight => "top-right",
            CornerId::BottomRight => "bottom-right",
            CornerId::BottomLeft => "bottom-left",
        };
        f.write_str(name)
    }
}

/// Corner radii for rounded rectangles
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CornerRadius {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CornerRadius {
    pub const ZERO: CornerRadius = CornerRadius {
        top_left: 0.0,
        top_right: 0.0,
        bottom_right: 0.0,
        bottom_left: 0.0,
    };

    /// Create a corner radius with different values for each corner.
    /// Order: top_left, top_right, bottom_right, bottom_left (clockwise from top-left)
    pub fn new(top_left: f32, top_right: f32, bottom_right: f32, bottom_left: f32) -> Self {
        Self {
            top_left,
            top_right,
            bottom_right,
            bottom_left,
        }
    }

    pub fn uniform(radius: f32) -> Self {
        Self {
            top_left: radius,
            top_right: radius,
            bottom_right: radius,
            bottom_left: radius,
        }
    }

    pub fn get(&self, corner: CornerId) -> f32 {
        match corner {
            CornerId::TopLeft => self.top_left,
            CornerId::TopRight => self.top_right,
            CornerId::BottomRight => self.bottom_right,
            CornerId::BottomLeft => self.bottom_left,
        }
    }

    pub fn set(&mut self, corner: CornerId, radius: f32) {
        match corner {
            CornerId::TopLeft => self.top_left = radius,
            CornerId::TopRight => self.top_right = radius,
            CornerId::BottomRight => self.bottom_right = radius,
            CornerId::BottomLeft => self.bottom_left = radius,
        }
    }

    pub fn to_array(&self) -> [f32; 4] {
        [
            self.top_left,
            self.top_right,
            self.bottom_right,
            self.bottom_left,
        ]
    }

    /// Check if all corner radii are the same
    pub fn is_uniform(&self) -> bool {
        self.top_left == self.top_right
            && self.top_right == self.bottom_right
            && self.bottom_right == self.bottom_left
    }
}

impl From<f32> for CornerRadius {
    fn from(radius: f32) -> Self {
        Self::uniform(radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_radius() {
        let r = CornerRadius::uniform(8.0);
        assert!(r.is_uniform());
        assert_eq!(r.to_array(), [8.0, 8.0, 8.0, 8.0]);

        let r = CornerRadius::new(8.0, 8.0, 4.0, 8.0);
        assert!(!r.is_uniform());
    }

    #[test]
    fn test_from_f32() {
        let r: CornerRadius = 12.0.into();
        assert_eq!(r, CornerRadius::uniform(12.0));
    }

    #[test]
    fn test_get_matches_index_order() {
        let r = CornerRadius::new(1.0, 2.0, 3.0, 4.0);
        for corner in CORNERS {
            assert_eq!(r.get(corner), r.to_array()[corner.index()]);
        }
    }

    #[test]
    fn test_adjacency_is_symmetric() {
        for corner in CORNERS {
            for (neighbor, edge) in corner.adjacent(100.0, 50.0) {
                let back = neighbor.adjacent(100.0, 50.0);
                assert!(back.iter().any(|&(c, e)| c == corner && e == edge));
            }
        }
    }
}
