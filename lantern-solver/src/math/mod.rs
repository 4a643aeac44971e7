//! Small numeric helpers shared by the search agents.

/// The Manhattan distance between two grid positions: the number of axis-aligned unit moves
/// separating them.
///
/// This is an admissible heuristic on a grid which only permits axis-aligned unit moves: it
/// never overestimates the true remaining cost.
pub fn manhattan_distance(a: (i32, i32), b: (i32, i32)) -> i64 {
    let (ax, ay) = a;
    let (bx, by) = b;
    i64::from((bx - ax).abs()) + i64::from((by - ay).abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_is_symmetric_and_zero_on_identical_points() {
        assert_eq!(manhattan_distance((0, 0), (3, 4)), 7);
        assert_eq!(manhattan_distance((3, 4), (0, 0)), 7);
        assert_eq!(manhattan_distance((-2, 5), (-2, 5)), 0);
    }
}
