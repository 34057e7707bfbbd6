/// A position on a 2-D grid, with `x` increasing to the right and `y`
/// increasing going down.
pub type Pos = glam::IVec2;

pub const UP: Pos = Pos::new(0, -1);
pub const RIGHT: Pos = Pos::new(1, 0);
pub const DOWN: Pos = Pos::new(0, 1);
pub const LEFT: Pos = Pos::new(-1, 0);

/// The four orthogonal steps, clockwise from [`UP`].
pub const DIRECTIONS: [Pos; 4] = [UP, RIGHT, DOWN, LEFT];

/// All eight surrounding steps, in reading order.
pub const SURROUNDING: [Pos; 8] = [
    Pos::new(-1, -1),
    Pos::new(0, -1),
    Pos::new(1, -1),
    Pos::new(-1, 0),
    Pos::new(1, 0),
    Pos::new(-1, 1),
    Pos::new(0, 1),
    Pos::new(1, 1),
];

#[inline]
pub fn manhattan(a: Pos, b: Pos) -> i32 {
    let d = (a - b).abs();
    d.x + d.y
}

/// The four orthogonal neighbours of `pos`, clockwise from above.
#[inline]
pub fn neighbours(pos: Pos) -> impl Iterator<Item = Pos> {
    DIRECTIONS.into_iter().map(move |dir| pos + dir)
}

/// Rotates a direction 90° clockwise (as seen on screen).
#[inline]
pub fn turn_right(dir: Pos) -> Pos {
    Pos::new(-dir.y, dir.x)
}

/// Rotates a direction 90° counter-clockwise (as seen on screen).
#[inline]
pub fn turn_left(dir: Pos) -> Pos {
    Pos::new(dir.y, -dir.x)
}

/// Sort key putting positions in reading order: top to bottom, then left to
/// right.
#[inline]
pub fn reading_order(pos: &Pos) -> (i32, i32) {
    (pos.y, pos.x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turning_cycles_through_directions() {
        for (i, &dir) in DIRECTIONS.iter().enumerate() {
            assert_eq!(turn_right(dir), DIRECTIONS[(i + 1) % 4]);
            assert_eq!(turn_left(dir), DIRECTIONS[(i + 3) % 4]);
        }
    }

    #[test]
    fn distances() {
        assert_eq!(manhattan(Pos::new(1, 1), Pos::new(8, -3)), 11);
        assert_eq!(manhattan(Pos::ZERO, Pos::ZERO), 0);
    }

    #[test]
    fn reading_order_sorts_rows_first() {
        let mut points = vec![Pos::new(2, 0), Pos::new(0, 1), Pos::new(1, 0)];
        points.sort_by_key(reading_order);
        assert_eq!(points, [Pos::new(1, 0), Pos::new(2, 0), Pos::new(0, 1)]);
    }
}
