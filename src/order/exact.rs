//! Exhaustive waypoint ordering.

use super::{OrderingInstance, WaypointOrder};

/// Finds the optimal waypoint order by enumerating permutations.
///
/// Permutations are visited depth-first in lexicographic order of waypoint
/// indices, and a candidate replaces the incumbent only when strictly
/// shorter, so ties resolve to the lexicographically first permutation.
/// A prefix is abandoned when its length plus a lower bound on the rest
/// (the cheapest edge into each node still to be entered) already reaches
/// the incumbent. No strictly shorter completion can exist below such a
/// prefix, so pruning changes the running time but never the result.
///
/// The caller keeps the waypoint count small (see
/// [`EXACT_THRESHOLD`](super::EXACT_THRESHOLD)); cost grows factorially.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactSolver;

impl ExactSolver {
    /// Solves `instance` to optimality.
    pub fn solve(instance: &OrderingInstance) -> WaypointOrder {
        let incumbent = WaypointOrder::evaluate(instance, instance.identity_order());
        // A NaN edge poisons every route, and nothing compares below NaN.
        if incumbent.distance.is_nan() {
            return incumbent;
        }
        let n = instance.waypoint_count();

        // Cheapest edge entering each waypoint, and entering the end.
        let cheapest_in: Vec<f64> = (0..n)
            .map(|k| {
                (0..n)
                    .filter(|&src| src != k)
                    .chain(std::iter::once(instance.start()))
                    .map(|src| instance.edge(src, k))
                    .fold(f64::INFINITY, f64::min)
            })
            .collect();
        let cheapest_into_end = (0..n)
            .chain(std::iter::once(instance.start()))
            .map(|src| instance.edge(src, instance.end()))
            .fold(f64::INFINITY, f64::min);
        let remaining = cheapest_in.iter().sum::<f64>() + cheapest_into_end;

        let mut search = Search {
            instance,
            cheapest_in,
            prefix: Vec::with_capacity(n),
            used: vec![false; n],
            best: incumbent,
        };
        search.extend(instance.start(), 0.0, remaining);
        search.best
    }
}

/// Relative slack on the pruning bound so rounding never cuts off a
/// strictly shorter permutation.
const BOUND_SLACK: f64 = 1e-12;

struct Search<'a> {
    instance: &'a OrderingInstance,
    cheapest_in: Vec<f64>,
    prefix: Vec<usize>,
    used: Vec<bool>,
    best: WaypointOrder,
}

impl Search<'_> {
    fn extend(&mut self, last: usize, partial: f64, remaining: f64) {
        let n = self.used.len();
        if self.prefix.len() == n {
            let total = partial + self.instance.edge(last, self.instance.end());
            if total < self.best.distance {
                self.best = WaypointOrder {
                    order: self.prefix.clone(),
                    distance: total,
                };
            }
            return;
        }

        let bound = partial + remaining;
        if bound - bound * BOUND_SLACK >= self.best.distance {
            return;
        }

        for next in 0..n {
            if self.used[next] {
                continue;
            }
            self.used[next] = true;
            self.prefix.push(next);
            self.extend(
                next,
                partial + self.instance.edge(last, next),
                remaining - self.cheapest_in[next],
            );
            self.prefix.pop();
            self.used[next] = false;
        }
    }
}
