mod scheduler;
mod sim;

pub use self::scheduler::{Clock, Scheduler, SchedulerState, SystemClock, Tick};
pub use self::sim::Simulation;

use crate::grid::Grid;
use crate::neighbors::neighbors_of;
use crate::rules::RuleTable;

/// Computes the next generation of `grid` under `rules`.
///
/// Returns a fresh grid of identical dimension; the input is never
/// mutated, so every neighbor count within one step reads the same
/// generation snapshot.
///
/// The branch order below is a deliberate, documented quirk carried
/// over from the system this engine models: the only branch that
/// produces a live next-generation cell is the birth branch, which
/// requires the cell to currently be dead. A live cell therefore
/// always ends up dead — when `death[n]` matches via the first branch,
/// and when it does not via the final else. There is no survival path.
pub fn step(grid: &Grid, rules: &RuleTable) -> Grid {
    let size = grid.size();
    let mut next = grid.clone();
    for (x, y, cell) in grid.iter() {
        let alive_neighbors = neighbors_of(x, y, size)
            .filter(|&(nx, ny)| grid.at(nx, ny).alive)
            .count();

        next.at_mut(x, y).alive = if cell.alive && rules.death(alive_neighbors) {
            false
        } else if !cell.alive && rules.birth(alive_neighbors) {
            true
        } else {
            false
        };
    }
    next
}
