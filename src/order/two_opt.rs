//! 2-opt local search over an open route with fixed endpoints.
//!
//! A 2-opt move removes edges `(prev, order[i])` and `(order[j], next)`
//! and reconnects the route by reversing `order[i..=j]`. Distances are
//! symmetric, so the reversed segment's internal length is unchanged and
//! the move is scored from the four boundary edges alone.

use super::OrderingInstance;
use tracing::trace;

/// Minimum gain, in meters, for a reversal to count as an improvement.
///
/// Keeps rounding noise from producing endless zero-gain reversals.
pub const IMPROVEMENT_EPSILON: f64 = 1e-7;

/// Applies improving reversals to `order` until none is left.
///
/// Each pass scans every segment `(i, j)` with `i < j` and reverses it on
/// the spot when that strictly shortens the route. Passes repeat until one
/// completes without a change. Returns the number of reversals applied.
pub fn refine(instance: &OrderingInstance, order: &mut [usize]) -> usize {
    let n = order.len();
    if n < 2 {
        return 0;
    }

    let start = instance.start();
    let end = instance.end();
    let mut reversals = 0;
    let mut passes = 0;

    loop {
        passes += 1;
        let mut improved = false;

        for i in 0..n - 1 {
            for j in (i + 1)..n {
                let prev = if i == 0 { start } else { order[i - 1] };
                let next = if j + 1 == n { end } else { order[j + 1] };

                let before = instance.edge(prev, order[i]) + instance.edge(order[j], next);
                let after = instance.edge(prev, order[j]) + instance.edge(order[i], next);

                if after < before - IMPROVEMENT_EPSILON {
                    order[i..=j].reverse();
                    reversals += 1;
                    improved = true;
                }
            }
        }

        if !improved {
            break;
        }
    }

    trace!(passes, reversals, "2-opt converged");
    reversals
}
