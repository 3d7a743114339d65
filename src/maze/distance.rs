use super::{Coord, Endpoint, Maze};
use crate::error::Result;

/// Fills in every cell's distance from `origin` by walking the spanning tree outward.
///
/// Each pending entry remembers the cell it was reached from, and that cell is the only one
/// skipped when expanding. In a tree that alone guarantees every cell is reached exactly once,
/// so no visited set is kept. An explicit stack replaces recursion so the walk depth is
/// bounded only by the heap, not by the call stack.
pub(super) fn annotate_from(maze: &mut Maze, origin: Coord, endpoint: Endpoint) -> Result<()> {
    let mut pending: Vec<(Coord, usize, Option<Coord>)> = vec![(origin, 0, None)];
    let mut reached = 0usize;

    while let Some((coord, distance, came_from)) = pending.pop() {
        let tile = maze.tile_mut(coord)?;
        tile.set_distance(endpoint, distance);
        reached += 1;

        pending.extend(
            tile.connections()
                .iter()
                .filter(|&&next| Some(next) != came_from)
                .map(|&next| (next, distance + 1, Some(coord))),
        );
    }

    tracing::debug!(
        "[distance] annotated {} cells from {:?} ({:?})",
        reached,
        origin,
        endpoint
    );
    Ok(())
}
