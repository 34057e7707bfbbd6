//! 2018 Day 13: Mine Cart Madness

use advent_archive::{
    debugln,
    helpers::pos::{reading_order, turn_left, turn_right, Pos, DOWN, LEFT, RIGHT, UP},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cart {
    pos: Pos,
    dir: Pos,
    /// How many intersections this cart has passed.
    crossings: u32,
    crashed: bool,
}

struct Tracks {
    rows: Vec<Vec<u8>>,
}

impl Tracks {
    fn at(&self, pos: Pos) -> u8 {
        usize::try_from(pos.y)
            .ok()
            .and_then(|y| self.rows.get(y))
            .zip(usize::try_from(pos.x).ok())
            .and_then(|(row, x)| row.get(x))
            .copied()
            .unwrap_or(b' ')
    }
}

fn parse(input: &str) -> (Tracks, Vec<Cart>) {
    let mut carts = Vec::new();
    let rows = input
        .lines()
        .enumerate()
        .map(|(y, line)| {
            line.bytes()
                .enumerate()
                .map(|(x, b)| {
                    let (dir, under) = match b {
                        b'^' => (UP, b'|'),
                        b'v' => (DOWN, b'|'),
                        b'<' => (LEFT, b'-'),
                        b'>' => (RIGHT, b'-'),
                        _ => return b,
                    };
                    carts.push(Cart {
                        pos: Pos::new(x as i32, y as i32),
                        dir,
                        crossings: 0,
                        crashed: false,
                    });
                    under
                })
                .collect()
        })
        .collect();
    (Tracks { rows }, carts)
}

impl Cart {
    fn advance(&mut self, tracks: &Tracks) {
        self.pos += self.dir;
        self.dir = match tracks.at(self.pos) {
            b'/' => Pos::new(-self.dir.y, -self.dir.x),
            b'\\' => Pos::new(self.dir.y, self.dir.x),
            b'+' => {
                let dir = match self.crossings % 3 {
                    0 => turn_left(self.dir),
                    1 => self.dir,
                    _ => turn_right(self.dir),
                };
                self.crossings += 1;
                dir
            }
            _ => self.dir,
        };
    }
}

/// Moves every cart once, in reading order. Returns where any crashes
/// happened, in the order they happened.
fn tick(tracks: &Tracks, carts: &mut Vec<Cart>) -> Vec<Pos> {
    carts.sort_by_key(|cart| reading_order(&cart.pos));

    let mut crashes = Vec::new();
    for i in 0..carts.len() {
        if carts[i].crashed {
            continue;
        }
        carts[i].advance(tracks);
        let pos = carts[i].pos;
        let hit = (0..carts.len()).find(|&j| j != i && !carts[j].crashed && carts[j].pos == pos);
        if let Some(j) = hit {
            debugln!("crash at {},{}", pos.x, pos.y);
            carts[i].crashed = true;
            carts[j].crashed = true;
            crashes.push(pos);
        }
    }
    carts.retain(|cart| !cart.crashed);
    crashes
}

pub fn part_one(input: &str) -> Option<String> {
    let (tracks, mut carts) = parse(input);
    while carts.len() > 1 {
        if let Some(crash) = tick(&tracks, &mut carts).first() {
            return Some(format!("{},{}", crash.x, crash.y));
        }
    }
    None
}

pub fn part_two(input: &str) -> Option<String> {
    let (tracks, mut carts) = parse(input);
    while carts.len() > 1 {
        tick(&tracks, &mut carts);
    }
    let last = carts.first()?;
    Some(format!("{},{}", last.pos.x, last.pos.y))
}

fn main() {
    let input = &advent_archive::read_file("inputs", 2018, 13);
    advent_archive::solve!(1, part_one, input);
    advent_archive::solve!(2, part_two, input);
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOOPS: &str = r"/->-\        
|   |  /----\
| /-+--+-\  |
| | |  | v  |
\-+-/  \-+--/
  \------/   ";

    const SQUARES: &str = r"/>-<\  
|   |  
| /<+-\
| | | v
\>+</ |
  |   ^
  \<->/";

    #[test]
    fn test_part_one() {
        assert_eq!(part_one(LOOPS), Some("7,3".to_owned()));
    }

    #[test]
    fn test_part_two() {
        assert_eq!(part_two(SQUARES), Some("6,4".to_owned()));
    }

    #[test]
    fn straight_line_collision() {
        assert_eq!(part_one("->---<-"), Some("3,0".to_owned()));
    }
}
