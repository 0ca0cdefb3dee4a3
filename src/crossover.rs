//! Crossover points: waypoints injected on sector borders.
//!
//! The world is carved into rectangular sectors, each with its own navmesh
//! tree and visibility graphs. Crossing between sectors happens at crossover
//! points sampled along the shared border segment; each one is appended to
//! the local visibility graph as a fresh waypoint and linked to everything it
//! can see, plus an indirect cost table for the waypoints it cannot.

use log::{debug, trace};

use crate::primitives::{FloatSegment2, IntPoint2};
use crate::visibility::VisibilityGraph;

/// Work counters for one manager instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CrossoverStats {
    /// Crossover points appended.
    pub points_added: usize,
    /// Link-finding passes run (one per appended point).
    pub link_invocations: usize,
    /// Candidate waypoint visibility checks performed.
    pub candidate_visibility_checks: usize,
    /// Cost-to-waypoint entries computed.
    pub cost_computations: usize,
    /// Cost entries resolved by a direct line of sight.
    pub direct_links: usize,
    /// Cost entries resolved through an intermediate waypoint.
    pub indirect_links: usize,
}

/// One crossover point and where it came from.
#[derive(Debug, Clone)]
pub struct CrossoverPoint {
    /// Index of the waypoint appended for this crossover.
    pub waypoint: usize,
    pub point: IntPoint2,
    /// The sector-border segment this point was sampled from.
    pub border: FloatSegment2<f64>,
}

/// Connectivity computed for one crossover point.
#[derive(Debug, Clone)]
pub struct CrossoverLinks {
    /// Indices of every waypoint directly visible from the crossover.
    pub direct: Vec<usize>,
    /// Best known cost from the crossover to each original graph waypoint:
    /// the direct distance when visible, otherwise the cheapest one-hop
    /// route through a directly visible waypoint. Unreachable is infinity.
    pub cost_to_waypoint: Vec<f64>,
}

/// Appends crossover points to a land region's visibility graph.
///
/// Owns the graph for its lifetime; insertion is append-only, so waypoint
/// indices handed out earlier stay valid. Final connectivity does not depend
/// on insertion order.
#[derive(Debug)]
pub struct CrossoverPointManager {
    graph: VisibilityGraph,
    base_waypoint_count: usize,
    crossovers: Vec<CrossoverPoint>,
    links: Vec<CrossoverLinks>,
    stats: CrossoverStats,
}

impl CrossoverPointManager {
    /// Takes ownership of a built visibility graph.
    pub fn new(graph: VisibilityGraph) -> Self {
        Self {
            base_waypoint_count: graph.waypoint_count(),
            graph,
            crossovers: Vec::new(),
            links: Vec::new(),
            stats: CrossoverStats::default(),
        }
    }

    #[inline]
    pub fn graph(&self) -> &VisibilityGraph {
        &self.graph
    }

    /// The crossover points added so far, in insertion order.
    #[inline]
    pub fn crossovers(&self) -> &[CrossoverPoint] {
        &self.crossovers
    }

    /// The links computed for crossover `i`.
    #[inline]
    pub fn links(&self, i: usize) -> &CrossoverLinks {
        &self.links[i]
    }

    #[inline]
    pub fn stats(&self) -> &CrossoverStats {
        &self.stats
    }

    /// Appends crossover points sampled from one border segment.
    ///
    /// Points are not deduplicated; a point appearing twice becomes two
    /// waypoints. Returns the crossover indices, parallel to `points`.
    pub fn add_many(&mut self, border: FloatSegment2<f64>, points: &[IntPoint2]) -> Vec<usize> {
        debug!("adding {} crossover points", points.len());
        points
            .iter()
            .map(|&p| self.add_one(border, p))
            .collect()
    }

    fn add_one(&mut self, border: FloatSegment2<f64>, point: IntPoint2) -> usize {
        let waypoint = self.graph.add_waypoint(point);
        self.stats.points_added += 1;
        self.stats.link_invocations += 1;
        self.stats.candidate_visibility_checks += waypoint;

        let direct: Vec<usize> = (0..waypoint)
            .filter(|&j| self.graph.is_visible(waypoint, j))
            .collect();
        let cost_to_waypoint = self.compute_costs(waypoint, &direct);
        trace!(
            "crossover {} at {:?}: {} direct links",
            self.crossovers.len(),
            point,
            direct.len()
        );

        let id = self.crossovers.len();
        self.crossovers.push(CrossoverPoint {
            waypoint,
            point,
            border,
        });
        self.links.push(CrossoverLinks {
            direct,
            cost_to_waypoint,
        });
        id
    }

    /// Cost from the new waypoint to each original graph waypoint: direct
    /// distance when visible, else the best one-hop route through a direct
    /// link.
    fn compute_costs(&mut self, waypoint: usize, direct: &[usize]) -> Vec<f64> {
        (0..self.base_waypoint_count)
            .map(|w| {
                self.stats.cost_computations += 1;
                let d = self.graph.distance(waypoint, w);
                if !d.is_nan() {
                    self.stats.direct_links += 1;
                    return d;
                }
                let via = direct
                    .iter()
                    .map(|&j| {
                        let hop = self.graph.distance(j, w);
                        if hop.is_nan() {
                            f64::INFINITY
                        } else {
                            self.graph.distance(waypoint, j) + hop
                        }
                    })
                    .fold(f64::INFINITY, f64::min);
                if via.is_finite() {
                    self.stats.indirect_links += 1;
                }
                via
            })
            .collect()
    }
}

/// Samples evenly spaced integer points along a border segment.
///
/// Both endpoints are always included; interior samples are spaced at most
/// `spacing` apart. A degenerate segment yields its single point.
pub fn sample_border_points(segment: FloatSegment2<f64>, spacing: f64) -> Vec<IntPoint2> {
    let len = segment.length();
    if len == 0.0 || !spacing.is_finite() || spacing <= 0.0 {
        return vec![segment.first.round_to_int()];
    }
    let npoints = (len / spacing).ceil() as usize + 1;
    (0..npoints)
        .map(|i| {
            let t = i as f64 / (npoints - 1) as f64;
            segment.point_at(t).round_to_int()
        })
        .collect()
}
