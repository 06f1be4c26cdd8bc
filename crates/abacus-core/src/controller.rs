//! Bead-position controller: the legal range of a dragged bead and the snap
//! decision on release.
//!
//! Everything here is a pure function of the bead's own reference offsets and
//! the current offsets of its rank neighbours. The caller owns the offsets and
//! applies whatever comes back.

use crate::constants::SNAP_SLACK;

/// Closed interval along a rod.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub lo: f32,
    pub hi: f32,
}

impl Bounds {
    /// Interval spanned by two offsets in either order.
    #[inline]
    pub fn between(a: f32, b: f32) -> Self {
        Self {
            lo: a.min(b),
            hi: a.max(b),
        }
    }

    #[inline]
    pub fn clamp(self, t: f32) -> f32 {
        t.clamp(self.lo, self.hi)
    }

    #[inline]
    pub fn contains(self, t: f32) -> bool {
        t >= self.lo && t <= self.hi
    }
}

/// Offsets of the rank neighbours within the same deck.
///
/// `lower` has the next lower rank (sits below), `upper` the next higher rank.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Neighbors {
    pub lower: Option<f32>,
    pub upper: Option<f32>,
}

/// Constrain a candidate offset for a bead being dragged.
///
/// Clamps to the deck range, then keeps at least `min_gap` to the lower
/// neighbour and finally to the upper neighbour. Total over its inputs.
pub fn drag_update(t: f32, bounds: Bounds, neighbors: Neighbors, min_gap: f32) -> f32 {
    let mut t = bounds.clamp(t);
    if let Some(n) = neighbors.lower {
        t = t.max(n + min_gap);
    }
    if let Some(n) = neighbors.upper {
        t = t.min(n - min_gap);
    }
    t
}

/// Whether `offset` is on the active side of the home/active midpoint.
/// The midpoint itself counts as active.
#[inline]
pub fn is_engaged(offset: f32, home: f32, active: f32) -> bool {
    let threshold = 0.5 * (home + active);
    if active < home {
        offset <= threshold
    } else {
        offset >= threshold
    }
}

/// Rest position nearest to `offset`: `active` past the midpoint, else `home`.
#[inline]
pub fn snap_target(offset: f32, home: f32, active: f32) -> f32 {
    if is_engaged(offset, home, active) {
        active
    } else {
        home
    }
}

/// Result of a release decision.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Snap {
    pub target: f32,
    /// The neighbour check refused the tentative rest position.
    pub vetoed: bool,
}

/// Snap decision for a lower-deck bead, including the neighbour veto.
///
/// After picking the tentative rest position, the neighbour in the direction
/// of motion is checked: if the target would leave less than
/// `min_gap - SNAP_SLACK` between them (or cross it), the snap is refused and
/// the other rest position is used instead. This is a heuristic; it can still
/// leave an inconsistent column when several beads are moved at once.
pub fn snap_with_neighbors(
    offset: f32,
    home: f32,
    active: f32,
    neighbors: Neighbors,
    min_gap: f32,
) -> Snap {
    let engage = is_engaged(offset, home, active);
    let target = if engage { active } else { home };
    // +1 when the active end is up the rod.
    let up = if active >= home { 1.0 } else { -1.0 };
    let moving_up = if engage { up > 0.0 } else { up < 0.0 };
    let clearance = if moving_up {
        neighbors.upper.map(|n| n - target)
    } else {
        neighbors.lower.map(|n| target - n)
    };
    match clearance {
        Some(c) if c < min_gap - SNAP_SLACK => {
            let fallback = if engage { home } else { active };
            log::debug!(
                "snap to {:.2} refused (clearance {:.2}); using {:.2}",
                target,
                c,
                fallback
            );
            Snap {
                target: fallback,
                vetoed: true,
            }
        }
        _ => Snap {
            target,
            vetoed: false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_accept_either_order() {
        let b = Bounds::between(5.2, 3.1);
        assert_eq!(b, Bounds { lo: 3.1, hi: 5.2 });
        assert!(b.contains(4.0));
        assert!(!b.contains(5.3));
        assert_eq!(b.clamp(9.0), 5.2);
    }

    #[test]
    fn drag_without_neighbors_only_clamps() {
        let b = Bounds::between(-5.0, 5.0);
        assert_eq!(drag_update(7.0, b, Neighbors::default(), 1.25), 5.0);
        assert_eq!(drag_update(-0.3, b, Neighbors::default(), 1.25), -0.3);
    }

    #[test]
    fn engaged_side_follows_orientation() {
        // heaven: active below home
        assert!(is_engaged(3.5, 5.2, 3.1));
        assert!(!is_engaged(4.5, 5.2, 3.1));
        // earth: active above home
        assert!(is_engaged(-1.0, -5.5, -1.65));
        assert!(!is_engaged(-5.0, -5.5, -1.65));
    }

    #[test]
    fn midpoint_counts_as_engaged() {
        assert!(is_engaged(0.0, -1.0, 1.0));
        assert!(is_engaged(3.0, 4.0, 2.0));
        assert_eq!(snap_target(0.0, -1.0, 1.0), 1.0);
    }
}
