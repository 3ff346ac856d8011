//! Heuristic waypoint ordering with simulated annealing.

use super::{two_opt, OrderingInstance, WaypointOrder};
use crate::anneal::{AnnealConfig, AnnealProblem, AnnealRunner};
use crate::error::ConfigError;
use crate::planner::{InitialOrder, NeighborMove};
use rand::Rng;

/// Orders waypoints with simulated annealing, then optionally polishes the
/// best permutation found with [`two_opt::refine`].
///
/// Results depend on the random source; with an unseeded source repeated
/// runs may return different, comparably short, orders.
#[derive(Debug, Clone)]
pub struct AnnealingSolver {
    /// Temperature schedule and iteration budget.
    pub anneal: AnnealConfig,
    /// Move used to generate neighbors.
    pub neighbor_move: NeighborMove,
    /// Permutation the search starts from.
    pub initial_order: InitialOrder,
    /// Run 2-opt on the annealing result.
    pub local_search: bool,
}

impl Default for AnnealingSolver {
    fn default() -> Self {
        Self {
            anneal: AnnealConfig::default(),
            neighbor_move: NeighborMove::default(),
            initial_order: InitialOrder::default(),
            local_search: true,
        }
    }
}

impl AnnealingSolver {
    /// Solves `instance`, drawing randomness from `rng`.
    pub fn solve_with_rng<R: Rng>(
        &self,
        instance: &OrderingInstance,
        rng: &mut R,
    ) -> Result<WaypointOrder, ConfigError> {
        let problem = PermutationProblem {
            instance,
            neighbor_move: self.neighbor_move,
            initial_order: self.initial_order,
        };

        let annealed = if instance.waypoint_count() < 2 {
            self.anneal.validate()?;
            WaypointOrder::evaluate(instance, problem.initial_solution(rng))
        } else {
            let result = AnnealRunner::run_with_rng(&problem, &self.anneal, rng)?;
            WaypointOrder {
                order: result.best,
                distance: result.best_cost,
            }
        };

        if !self.local_search {
            return Ok(annealed);
        }

        let mut order = annealed.order.clone();
        two_opt::refine(instance, &mut order);
        let refined = WaypointOrder::evaluate(instance, order);
        if refined.distance <= annealed.distance {
            Ok(refined)
        } else {
            Ok(annealed)
        }
    }
}

struct PermutationProblem<'a> {
    instance: &'a OrderingInstance,
    neighbor_move: NeighborMove,
    initial_order: InitialOrder,
}

impl AnnealProblem for PermutationProblem<'_> {
    type Solution = Vec<usize>;

    fn initial_solution<R: Rng>(&self, _rng: &mut R) -> Vec<usize> {
        match self.initial_order {
            InitialOrder::Input => self.instance.identity_order(),
            InitialOrder::NearestNeighbor => nearest_neighbor(self.instance),
        }
    }

    fn cost(&self, order: &Vec<usize>) -> f64 {
        self.instance.route_distance(order)
    }

    fn neighbor<R: Rng>(&self, order: &Vec<usize>, rng: &mut R) -> Vec<usize> {
        let n = order.len();
        let i = rng.random_range(0..n);
        let mut j = rng.random_range(0..n - 1);
        if j >= i {
            j += 1;
        }

        let mut next = order.clone();
        match self.neighbor_move {
            NeighborMove::Swap => next.swap(i, j),
            NeighborMove::Reverse => {
                let (lo, hi) = if i < j { (i, j) } else { (j, i) };
                next[lo..=hi].reverse();
            }
        }
        next
    }
}

/// Greedy tour from the start: always visit the closest unvisited waypoint.
///
/// Ties go to the lower index.
fn nearest_neighbor(instance: &OrderingInstance) -> Vec<usize> {
    let n = instance.waypoint_count();
    let mut visited = vec![false; n];
    let mut order = Vec::with_capacity(n);
    let mut current = instance.start();

    for _ in 0..n {
        let mut best: Option<(usize, f64)> = None;
        for candidate in 0..n {
            if visited[candidate] {
                continue;
            }
            let d = instance.edge(current, candidate);
            let closer = match best {
                Some((_, best_d)) => d < best_d,
                None => true,
            };
            if closer {
                best = Some((candidate, d));
            }
        }
        // Every iteration has at least one unvisited waypoint.
        let Some((next, _)) = best else { break };
        visited[next] = true;
        order.push(next);
        current = next;
    }
    order
}
