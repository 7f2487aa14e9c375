//! Path assembly
//!
//! Stitches four corner profiles and the straight edges between them into one
//! closed SVG path. The outline runs clockwise, starting on the top edge just
//! left of the top-right corner, so every corner turns inward with the same
//! arc sweep flag.

use std::fmt::Write as _;

use smallvec::SmallVec;
use squircle_geometry::{CornerId, CornerProfile};

/// One drawing command of the assembled outline
///
/// Edges use absolute moves and lines; corner curves are emitted relative so
/// a corner's commands depend only on its profile and orientation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    /// `M x y`
    MoveTo { x: f32, y: f32 },
    /// `L x y`
    LineTo { x: f32, y: f32 },
    /// `c dx1 dy1 dx2 dy2 dx dy`
    CubicToRel {
        dx1: f32,
        dy1: f32,
        dx2: f32,
        dy2: f32,
        dx: f32,
        dy: f32,
    },
    /// `a r r 0 0 1 dx dy` - circular, always the clockwise inward sweep
    ArcToRel { radius: f32, dx: f32, dy: f32 },
    /// `Z`
    Close,
}

// Worst case: move + 4 lines + 4 corners of 3 commands each + close.
type CommandBuf = SmallVec<[PathCommand; 18]>;

/// Assemble the closed outline for a box with the given corner profiles
/// (indexed by [`CornerId::index`]).
pub fn path_from_profiles(width: f32, height: f32, profiles: &[CornerProfile; 4]) -> String {
    let tl = &profiles[CornerId::TopLeft.index()];
    let tr = &profiles[CornerId::TopRight.index()];
    let br = &profiles[CornerId::BottomRight.index()];
    let bl = &profiles[CornerId::BottomLeft.index()];

    let mut commands = CommandBuf::new();
    commands.push(PathCommand::MoveTo {
        x: width - tr.p,
        y: 0.0,
    });
    trace_corner(&mut commands, CornerId::TopRight, tr);
    commands.push(PathCommand::LineTo {
        x: width,
        y: height - br.p,
    });
    trace_corner(&mut commands, CornerId::BottomRight, br);
    commands.push(PathCommand::LineTo { x: bl.p, y: height });
    trace_corner(&mut commands, CornerId::BottomLeft, bl);
    commands.push(PathCommand::LineTo { x: 0.0, y: tl.p });
    trace_corner(&mut commands, CornerId::TopLeft, tl);
    commands.push(PathCommand::Close);

    render(&commands)
}

/// Reflect a vector from the top-right corner's frame into `corner`'s frame.
///
/// The curve formulas are written once for the top-right corner (entering
/// along +x, leaving along +y); the other three corners are rotations of that
/// frame, which keeps one tracing routine for all four.
fn orient(corner: CornerId, x: f32, y: f32) -> (f32, f32) {
    match corner {
        CornerId::TopRight => (x, y),
        CornerId::BottomRight => (-y, x),
        CornerId::BottomLeft => (-x, -y),
        CornerId::TopLeft => (y, -x),
    }
}

/// Emit one corner: bezier shoulder in, circular arc, mirrored shoulder out.
///
/// A degenerate profile (zero radius) consumes no edge space, so the
/// adjoining `L` commands already meet at the vertex and nothing is emitted.
fn trace_corner(commands: &mut CommandBuf, corner: CornerId, profile: &CornerProfile) {
    if profile.corner_radius <= 0.0 {
        return;
    }
    let CornerProfile {
        a,
        b,
        c,
        d,
        arc_section_length,
        corner_radius,
        ..
    } = *profile;

    let (dx1, dy1) = orient(corner, a, 0.0);
    let (dx2, dy2) = orient(corner, a + b, 0.0);
    let (dx, dy) = orient(corner, a + b + c, d);
    commands.push(PathCommand::CubicToRel {
        dx1,
        dy1,
        dx2,
        dy2,
        dx,
        dy,
    });

    let (dx, dy) = orient(corner, arc_section_length, arc_section_length);
    commands.push(PathCommand::ArcToRel {
        radius: corner_radius,
        dx,
        dy,
    });

    let (dx1, dy1) = orient(corner, d, c);
    let (dx2, dy2) = orient(corner, d, b + c);
    let (dx, dy) = orient(corner, d, a + b + c);
    commands.push(PathCommand::CubicToRel {
        dx1,
        dy1,
        dx2,
        dy2,
        dx,
        dy,
    });
}

fn render(commands: &[PathCommand]) -> String {
    let mut out = String::new();
    for (i, command) in commands.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        match *command {
            PathCommand::MoveTo { x, y } => {
                let _ = write!(out, "M {} {}", fmt_coord(x), fmt_coord(y));
            }
            PathCommand::LineTo { x, y } => {
                let _ = write!(out, "L {} {}", fmt_coord(x), fmt_coord(y));
            }
            PathCommand::CubicToRel {
                dx1,
                dy1,
                dx2,
                dy2,
                dx,
                dy,
            } => {
                let _ = write!(
                    out,
                    "c {} {} {} {} {} {}",
                    fmt_coord(dx1),
                    fmt_coord(dy1),
                    fmt_coord(dx2),
                    fmt_coord(dy2),
                    fmt_coord(dx),
                    fmt_coord(dy)
                );
            }
            PathCommand::ArcToRel { radius, dx, dy } => {
                let _ = write!(
                    out,
                    "a {} {} 0 0 1 {} {}",
                    fmt_coord(radius),
                    fmt_coord(radius),
                    fmt_coord(dx),
                    fmt_coord(dy)
                );
            }
            PathCommand::Close => out.push('Z'),
        }
    }
    out
}

/// Format a coordinate with 4-decimal precision, trimming trailing zeros so
/// whole numbers stay compact and repeated renders stay byte-stable.
pub(crate) fn fmt_coord(value: f32) -> String {
    let mut s = format!("{value:.4}");
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    if s == "-0" {
        s.clear();
        s.push('0');
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_coord() {
        assert_eq!(fmt_coord(100.0), "100");
        assert_eq!(fmt_coord(0.0), "0");
        assert_eq!(fmt_coord(-0.00001), "0");
        assert_eq!(fmt_coord(72.35386), "72.3539");
        assert_eq!(fmt_coord(0.5), "0.5");
        assert_eq!(fmt_coord(-12.25), "-12.25");
    }

    #[test]
    fn test_degenerate_rectangle() {
        let profiles = [CornerProfile::ZERO; 4];
        let path = path_from_profiles(100.0, 60.0, &profiles);
        assert_eq!(path, "M 100 0 L 100 60 L 0 60 L 0 0 Z");
    }

    #[test]
    fn test_corner_orientation_covers_all_quadrants() {
        // The same unit vector rotated through the four corner frames must
        // land in four distinct quadrant directions.
        let oriented: Vec<_> = [
            CornerId::TopRight,
            CornerId::BottomRight,
            CornerId::BottomLeft,
            CornerId::TopLeft,
        ]
        .into_iter()
        .map(|corner| orient(corner, 1.0, 2.0))
        .collect();
        assert_eq!(
            oriented,
            vec![(1.0, 2.0), (-2.0, 1.0), (-1.0, -2.0), (2.0, -1.0)]
        );
    }

    #[test]
    fn test_single_curved_corner_path_shape() {
        // Only the bottom-right corner curves; the other three collapse to
        // plain line joins.
        let mut profiles = [CornerProfile::ZERO; 4];
        profiles[CornerId::BottomRight.index()] =
            CornerProfile::compute(40.0, 0.6, false, 100.0);
        let path = path_from_profiles(100.0, 100.0, &profiles);

        assert!(path.starts_with("M 100 0 "));
        assert!(path.ends_with("L 0 100 L 0 0 Z"));
        assert_eq!(path.matches("a 40 40 0 0 1").count(), 1);
        assert_eq!(path.matches('c').count(), 2);
        assert!(!path.contains("NaN"));
    }

    #[test]
    fn test_uniform_corners_are_mirrored() {
        let profile = CornerProfile::compute(10.0, 0.6, false, 50.0);
        let profiles = [profile; 4];
        let path = path_from_profiles(100.0, 100.0, &profiles);

        // Footprint is (1 + 0.6) * 10 = 16 along every edge.
        assert!(path.starts_with("M 84 0 "));
        assert!(path.contains("L 100 84"));
        assert!(path.contains("L 16 100"));
        assert!(path.contains("L 0 16"));
        assert_eq!(path.matches("a 10 10 0 0 1").count(), 4);
        assert_eq!(path.matches('c').count(), 8);
    }
}
