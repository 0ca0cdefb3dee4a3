//! Visibility graph and crossover tests against engine-produced terrain.

use navpoly::contour::rect_contour;
use navpoly::query::{get_land_nodes, pick_deepest_polynode};
use navpoly::{
    sample_border_points, CrossoverPointManager, FloatSegment2, IntPoint2, Punch,
    VisibilityGraph,
};

fn rect(x0: i64, y0: i64, x1: i64, y1: i64) -> navpoly::Contour {
    rect_contour(IntPoint2::new(x0, y0), IntPoint2::new(x1, y1))
}

fn punched_sector() -> (navpoly::PolyTree, navpoly::NodeId) {
    let tree = Punch::new()
        .include([rect(0, 0, 1000, 1000)])
        .exclude([rect(300, 300, 700, 700)])
        .execute(0.0)
        .unwrap();
    let lands = get_land_nodes(&tree);
    assert_eq!(lands.len(), 1);
    let land = lands[0];
    (tree, land)
}

#[test]
fn graph_over_punched_sector() {
    let (tree, land) = punched_sector();
    let g = VisibilityGraph::build(&tree, land);
    // Four land corners plus four hole corners.
    assert_eq!(g.waypoint_count(), 8);
    assert_eq!(g.barriers().len(), 8);

    for i in 0..g.waypoint_count() {
        assert_eq!(g.distance(i, i), 0.0);
        for j in 0..g.waypoint_count() {
            assert_eq!(g.distance(i, j).is_nan(), g.distance(j, i).is_nan());
        }
    }

    // Every waypoint sees something besides itself.
    for i in 0..g.waypoint_count() {
        assert!((0..g.waypoint_count()).any(|j| j != i && g.is_visible(i, j)));
    }
}

#[test]
fn hole_occludes_opposite_corners() {
    let (tree, land) = punched_sector();
    let g = VisibilityGraph::build(&tree, land);

    let corner = |x: i64, y: i64| {
        g.waypoints()
            .iter()
            .position(|&p| p == IntPoint2::new(x, y))
            .unwrap()
    };
    assert!(!g.is_visible(corner(0, 0), corner(1000, 1000)));
    assert!(g.is_visible(corner(0, 0), corner(1000, 0)));
    assert!(g.is_visible(corner(0, 0), corner(300, 300)));
    assert!(!g.is_visible(corner(0, 0), corner(700, 700)));
}

#[test]
fn crossovers_along_sector_border() {
    let (tree, land) = punched_sector();
    let g = VisibilityGraph::build(&tree, land);
    let base = g.waypoint_count();

    let mut mgr = CrossoverPointManager::new(g);
    let border = FloatSegment2::from_coords(0.0, 0.0, 1000.0, 0.0);
    let points = sample_border_points(border, 250.0);
    assert_eq!(points.len(), 5);
    let ids = mgr.add_many(border, &points);
    assert_eq!(ids, vec![0, 1, 2, 3, 4]);

    assert_eq!(mgr.graph().waypoint_count(), base + 5);
    for &id in &ids {
        let links = mgr.links(id);
        assert!(!links.direct.is_empty());
        assert_eq!(links.cost_to_waypoint.len(), base);
        // The sector is connected, so every waypoint is reachable.
        assert!(links.cost_to_waypoint.iter().all(|c| c.is_finite()));
    }

    let stats = mgr.stats();
    assert_eq!(stats.points_added, 5);
    assert_eq!(stats.link_invocations, 5);
    assert_eq!(stats.cost_computations, 5 * base);
    // Each point checks all waypoints present before it.
    let expected_checks: usize = (0..5).map(|i| base + i).sum();
    assert_eq!(stats.candidate_visibility_checks, expected_checks);
    assert_eq!(stats.direct_links + stats.indirect_links, 5 * base);
}

#[test]
fn border_midpoint_cannot_see_past_hole() {
    let (tree, land) = punched_sector();
    let g = VisibilityGraph::build(&tree, land);
    let far_top = g
        .waypoints()
        .iter()
        .position(|&p| p == IntPoint2::new(1000, 1000))
        .unwrap();

    let mut mgr = CrossoverPointManager::new(g);
    let border = FloatSegment2::from_coords(0.0, 0.0, 1000.0, 0.0);
    mgr.add_many(border, &[IntPoint2::new(500, 0)]);

    let links = mgr.links(0);
    // The hole sits between the bottom-border midpoint and the top corners.
    assert!(!links.direct.contains(&far_top));
    // But the cost table still routes around it.
    assert!(links.cost_to_waypoint[far_top].is_finite());
    let straight = IntPoint2::new(500, 0).distance(mgr.graph().waypoints()[far_top]);
    assert!(links.cost_to_waypoint[far_top] > straight);
    assert!(mgr.stats().indirect_links > 0);
}

#[test]
fn crossover_points_resolve_to_land() {
    let (tree, land) = punched_sector();
    let border = FloatSegment2::from_coords(0.0, 0.0, 1000.0, 0.0);
    for p in sample_border_points(border, 100.0) {
        let (node, is_hole) = pick_deepest_polynode(&tree, p);
        assert!(!is_hole, "border point {p:?} must be on land");
        assert_eq!(node, land);
    }
}

#[test]
fn sample_spacing_respects_maximum_gap() {
    let border = FloatSegment2::from_coords(0.0, 0.0, 1000.0, 0.0);
    let points = sample_border_points(border, 300.0);
    assert_eq!(*points.first().unwrap(), IntPoint2::new(0, 0));
    assert_eq!(*points.last().unwrap(), IntPoint2::new(1000, 0));
    for pair in points.windows(2) {
        assert!(pair[0].distance(pair[1]) <= 300.0);
    }
}
