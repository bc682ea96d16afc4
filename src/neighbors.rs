/// The 8 Moore-neighborhood offsets, in fixed row-major order.
const OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Yields the coordinates of the up-to-8 Moore neighbors of `(x, y)`
/// on a non-wrapping `size × size` grid.
///
/// Offsets that would land outside `[0, size)` on either axis are
/// clipped, so a corner cell yields as few as 3 neighbors. The order
/// is deterministic within and across calls.
pub fn neighbors_of(x: usize, y: usize, size: usize) -> impl Iterator<Item = (usize, usize)> {
    let (x, y, size) = (x as i64, y as i64, size as i64);
    OFFSETS.iter().filter_map(move |&(dx, dy)| {
        let (nx, ny) = (x + dx, y + dy);
        if (0..size).contains(&nx) && (0..size).contains(&ny) {
            Some((nx as usize, ny as usize))
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(x: usize, y: usize, size: usize) -> Vec<(usize, usize)> {
        neighbors_of(x, y, size).collect()
    }

    #[test]
    fn interior_cell_has_eight_neighbors() {
        let neighbors = collect(2, 2, 5);

        assert_eq!(neighbors.len(), 8);
        assert!(neighbors.iter().all(|&(x, y)| x < 5 && y < 5));
        assert!(!neighbors.contains(&(2, 2)));
    }

    #[test]
    fn corner_cell_has_three_neighbors() {
        assert_eq!(collect(0, 0, 5), vec![(0, 1), (1, 0), (1, 1)]);
        assert_eq!(collect(4, 4, 5), vec![(3, 3), (3, 4), (4, 3)]);
    }

    #[test]
    fn edge_cell_has_five_neighbors() {
        assert_eq!(collect(0, 2, 5).len(), 5);
    }

    #[test]
    fn size_one_grid_has_no_neighbors() {
        assert!(collect(0, 0, 1).is_empty());
    }

    #[test]
    fn order_is_stable_across_calls() {
        assert_eq!(collect(1, 3, 5), collect(1, 3, 5));
    }
}
