// Host-side tests for the bead-position controller.

use abacus_core::controller::{drag_update, is_engaged, snap_target, snap_with_neighbors};
use abacus_core::{Bounds, Neighbors};

const EARTH_GAP: f32 = 1.05;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

#[test]
fn drag_result_stays_in_group_range() {
    let bounds = Bounds::between(5.2, 3.1);
    for t in [-10.0, 0.0, 3.0, 3.1, 4.0, 5.2, 6.0, 100.0] {
        let r = drag_update(t, bounds, Neighbors::default(), EARTH_GAP);
        assert!(bounds.contains(r), "t={t} -> {r}");
    }
}

#[test]
fn earth_bead_cannot_push_into_upper_neighbor() {
    // rank 0 home -5.5, rank 1 resting at -4.45
    let bounds = Bounds::between(-5.5, -1.65);
    let neighbors = Neighbors {
        lower: None,
        upper: Some(-4.45),
    };
    let r = drag_update(-4.0, bounds, neighbors, EARTH_GAP);
    assert!(r <= -4.45 - EARTH_GAP + 1e-5, "got {r}");
    assert!(approx(r, -5.5));
}

#[test]
fn lower_neighbor_bounds_from_below() {
    let bounds = Bounds::between(-4.45, -0.6);
    let neighbors = Neighbors {
        lower: Some(-3.0),
        upper: None,
    };
    let r = drag_update(-4.45, bounds, neighbors, EARTH_GAP);
    assert!(approx(r, -3.0 + EARTH_GAP));
}

#[test]
fn free_move_between_neighbors_is_untouched() {
    let bounds = Bounds::between(-5.0, 5.0);
    let neighbors = Neighbors {
        lower: Some(-3.0),
        upper: Some(3.0),
    };
    assert_eq!(drag_update(0.4, bounds, neighbors, 1.25), 0.4);
}

#[test]
fn heaven_bead_snaps_by_midpoint() {
    let (home, active) = (5.2, 3.1);
    // threshold 4.15; 4.5 is on the home side, 3.5 on the active side
    assert_eq!(snap_target(4.5, home, active), home);
    assert!(!is_engaged(home, home, active));
    assert_eq!(snap_target(3.5, home, active), active);
    assert!(is_engaged(active, home, active));
}

#[test]
fn snap_is_idempotent() {
    let (home, active) = (-4.45, -0.6);
    for offset in [-4.45, -3.0, -2.6, -2.4, -1.0, -0.6] {
        let once = snap_target(offset, home, active);
        let twice = snap_target(once, home, active);
        assert_eq!(once, twice, "offset {offset}");
    }
}

#[test]
fn snap_is_deterministic() {
    let n = Neighbors {
        lower: Some(-5.5),
        upper: Some(0.45),
    };
    let a = snap_with_neighbors(-1.2, -4.45, -0.6, n, EARTH_GAP);
    let b = snap_with_neighbors(-1.2, -4.45, -0.6, n, EARTH_GAP);
    assert_eq!(a, b);
    assert!(!a.vetoed);
    assert_eq!(a.target, -0.6);
}

// The neighbour veto is a heuristic: it refuses a snap that would land too
// close to a neighbour that has not moved out of the way.
#[test]
fn snap_toward_active_refused_when_upper_neighbor_in_the_way() {
    // rank 1 released past its midpoint while rank 2 is mid-rod at 0.0
    let n = Neighbors {
        lower: Some(-5.5),
        upper: Some(0.0),
    };
    let s = snap_with_neighbors(-2.3, -4.45, -0.6, n, EARTH_GAP);
    assert!(s.vetoed);
    assert_eq!(s.target, -4.45);
}

#[test]
fn snap_toward_home_refused_when_lower_neighbor_in_the_way() {
    // rank 1 released below its midpoint while rank 0 sits at -4.0
    let n = Neighbors {
        lower: Some(-4.0),
        upper: None,
    };
    let s = snap_with_neighbors(-2.9, -4.45, -0.6, n, EARTH_GAP);
    assert!(s.vetoed);
    assert_eq!(s.target, -0.6);
}

#[test]
fn snap_allows_neighbor_within_slack() {
    // clearance 1.0 is short of the gap by less than the 0.1 slack
    let n = Neighbors {
        lower: None,
        upper: Some(-0.6 + 1.0),
    };
    let s = snap_with_neighbors(-1.0, -4.45, -0.6, n, EARTH_GAP);
    assert!(!s.vetoed);
    assert_eq!(s.target, -0.6);
}
