use std::collections::HashMap;

use super::pos::Pos;

/// Tiles keyed by position, where unknown tiles are simply absent.
pub type SparseGrid<T> = HashMap<Pos, T>;

/// The inclusive `(min, max)` corners of the box covering `positions`.
pub fn bounds<'a>(positions: impl IntoIterator<Item = &'a Pos>) -> Option<(Pos, Pos)> {
    positions
        .into_iter()
        .fold(None, |acc, &pos| match acc {
            None => Some((pos, pos)),
            Some((min, max)) => Some((min.min(pos), max.max(pos))),
        })
}

/// Draws every position in the bounding box of `tiles`, one row per line.
///
/// `draw` is given each position and its tile (if any) and returns the
/// character to print there.
pub fn render<T>(tiles: &SparseGrid<T>, mut draw: impl FnMut(Pos, Option<&T>) -> char) -> String {
    let Some((min, max)) = bounds(tiles.keys()) else {
        return String::new();
    };

    let mut out = String::new();
    for y in min.y..=max.y {
        if y != min.y {
            out.push('\n');
        }
        for x in min.x..=max.x {
            let pos = Pos::new(x, y);
            out.push(draw(pos, tiles.get(&pos)));
        }
    }
    out
}

/// One tile per character, with the first line at `y = 0`.
pub fn parse_sparse(s: &str) -> SparseGrid<char> {
    parse_sparse_with(s, Some)
}

/// Like [`parse_sparse`], keeping only the characters `tile` maps to `Some`.
pub fn parse_sparse_with<T>(s: &str, mut tile: impl FnMut(char) -> Option<T>) -> SparseGrid<T> {
    let mut tiles = SparseGrid::new();
    for (y, line) in s.lines().enumerate() {
        for (x, ch) in line.chars().enumerate() {
            if let Some(t) = tile(ch) {
                tiles.insert(Pos::new(x as i32, y as i32), t);
            }
        }
    }
    tiles
}

/// Parses a rectangular block of characters into a dense [`grid::Grid`].
///
/// Returns `None` if the lines have different lengths.
pub fn parse_dense<T: Clone>(s: &str, mut tile: impl FnMut(char) -> T) -> Option<grid::Grid<T>> {
    let rows: Vec<&str> = s.lines().filter(|line| !line.is_empty()).collect();
    let cols = rows.first()?.chars().count();
    if rows.iter().any(|row| row.chars().count() != cols) {
        return None;
    }

    let cells = rows.iter().flat_map(|row| row.chars()).map(&mut tile).collect();
    Some(grid::Grid::from_vec(cells, cols))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_fills_gaps() {
        let mut tiles = SparseGrid::new();
        tiles.insert(Pos::new(-1, 0), '#');
        tiles.insert(Pos::new(1, 1), '#');

        let drawn = render(&tiles, |_, tile| tile.copied().unwrap_or('.'));
        assert_eq!(drawn, "#..\n..#");
    }

    #[test]
    fn render_empty() {
        let tiles: SparseGrid<char> = SparseGrid::new();
        assert_eq!(render(&tiles, |_, _| '#'), "");
    }

    #[test]
    fn parse_then_bounds() {
        let tiles = parse_sparse_with("..#\n#..\n", |ch| (ch == '#').then_some(()));
        assert_eq!(tiles.len(), 2);
        assert_eq!(bounds(tiles.keys()), Some((Pos::new(0, 0), Pos::new(2, 1))));
    }

    #[test]
    fn dense_rejects_ragged_rows() {
        assert!(parse_dense("ab\nc", |ch| ch).is_none());
        let grid = parse_dense("ab\ncd", |ch| ch).unwrap();
        assert_eq!((grid.rows(), grid.cols()), (2, 2));
        assert_eq!(grid.get(1, 0), Some(&'c'));
    }
}
