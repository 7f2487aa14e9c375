//! Corner budget distribution
//!
//! Before any corner curve is computed, the requested radii are normalized so
//! that no two corners sharing an edge can consume more than that edge's
//! length between them. Each corner receives a budget (the largest footprint
//! its curve may occupy along an edge) and its radius is clamped to it.

use crate::corner::{CornerRadius, CORNERS};

/// Per-corner result of budget distribution
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NormalizedCorner {
    /// Clamped radius, never larger than the request or the budget
    pub radius: f32,
    /// Largest footprint this corner's curve may consume along an edge
    pub budget: f32,
}

/// Normalized radii and budgets for all four corners, indexed by
/// [`CornerId::index`](crate::corner::CornerId::index)
pub type NormalizedCorners = [NormalizedCorner; 4];

/// The budget shared by every corner when all four radii are equal
///
/// Numerically equivalent to running the full distribution, but cheaper.
pub fn uniform_budget(width: f32, height: f32) -> f32 {
    (width.min(height) / 2.0).max(0.0)
}

/// Distribute edge space between the four corners.
///
/// Corners are resolved greedily in descending order of requested radius, so
/// bigger corners choose first and fix the remaining space for their
/// neighbors. Ties resolve in clockwise encounter order from the top-left.
/// For each corner the budget is the minimum over its two shared edges of:
///
/// - the full edge length, when both corners on that edge request radius 0
///   (the edge imposes no constraint and the split below would divide by
///   zero);
/// - the edge length minus the neighbor's budget, when the neighbor was
///   already resolved;
/// - the edge length split proportionally to the two requested radii
///   otherwise.
///
/// The clamped radius is `min(requested, budget)`, so the footprints of two
/// corners sharing an edge can never sum past the edge length.
pub fn distribute(requested: CornerRadius, width: f32, height: f32) -> NormalizedCorners {
    let mut order = CORNERS;
    // Stable: equal radii keep clockwise encounter order.
    order.sort_by(|a, b| {
        requested
            .get(*b)
            .partial_cmp(&requested.get(*a))
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut resolved: [Option<NormalizedCorner>; 4] = [None; 4];

    for corner in order {
        let radius = requested.get(corner);

        let mut budget = f32::INFINITY;
        for (neighbor, edge_length) in corner.adjacent(width, height) {
            let neighbor_radius = requested.get(neighbor);
            let share = if radius == 0.0 && neighbor_radius == 0.0 {
                edge_length
            } else if let Some(neighbor) = resolved[neighbor.index()] {
                // The neighbor chose first; take what is left of the edge.
                edge_length - neighbor.budget
            } else {
                radius / (radius + neighbor_radius) * edge_length
            };
            budget = budget.min(share);
        }

        let clamped = radius.min(budget);
        if clamped < radius {
            tracing::debug!(
                corner = %corner,
                requested = radius,
                budget,
                "corner radius clamped to its edge budget"
            );
        }
        resolved[corner.index()] = Some(NormalizedCorner {
            radius: clamped,
            budget,
        });
    }

    resolved.map(|corner| corner.unwrap_or_default())
}
