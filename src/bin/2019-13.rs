//! 2019 Day 13: Care Package

use advent_archive::{
    debugln,
    helpers::{
        grid::{self, SparseGrid},
        pos::Pos,
    },
    intcode::{Machine, Word},
};

/// Address of the coin counter. Two coins means free play.
const COINS: usize = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tile {
    Empty,
    Wall,
    Block,
    Paddle,
    Ball,
}

impl TryFrom<Word> for Tile {
    type Error = Word;

    fn try_from(id: Word) -> Result<Self, Self::Error> {
        Ok(match id {
            0 => Tile::Empty,
            1 => Tile::Wall,
            2 => Tile::Block,
            3 => Tile::Paddle,
            4 => Tile::Ball,
            _ => return Err(id),
        })
    }
}

#[derive(Debug, Default)]
struct Screen {
    tiles: SparseGrid<Tile>,
    score: Word,
    ball: Option<Pos>,
    paddle: Option<Pos>,
}

impl Screen {
    /// Applies `(x, y, tile)` output triples, where `(-1, 0, n)` sets the
    /// score instead.
    fn draw(&mut self, outputs: &[Word]) -> Option<()> {
        for chunk in outputs.chunks(3) {
            match *chunk {
                [-1, 0, score] => self.score = score,
                [x, y, id] => {
                    let pos = Pos::new(x.try_into().ok()?, y.try_into().ok()?);
                    let tile = Tile::try_from(id).ok()?;
                    match tile {
                        Tile::Ball => self.ball = Some(pos),
                        Tile::Paddle => self.paddle = Some(pos),
                        _ => {}
                    }
                    self.tiles.insert(pos, tile);
                }
                _ => return None,
            }
        }
        Some(())
    }

    fn blocks(&self) -> usize {
        self.tiles.values().filter(|&&t| t == Tile::Block).count()
    }

    #[allow(dead_code)]
    fn render(&self) -> String {
        grid::render(&self.tiles, |_, tile| match tile {
            Some(Tile::Wall) => '#',
            Some(Tile::Block) => '=',
            Some(Tile::Paddle) => '_',
            Some(Tile::Ball) => 'o',
            Some(Tile::Empty) | None => ' ',
        })
    }
}

/// Keeps the paddle under the ball until the game ends, returning the final
/// score.
fn play(machine: &mut Machine) -> Option<Word> {
    let mut screen = Screen::default();
    loop {
        screen.draw(&machine.run_until_input().ok()?)?;
        if machine.is_halted() {
            debugln!("{}", screen.render());
            return Some(screen.score);
        }
        let (ball, paddle) = (screen.ball?, screen.paddle?);
        machine.push_input(Word::from((ball.x - paddle.x).signum()));
    }
}

pub fn part_one(input: &str) -> Option<usize> {
    let mut machine: Machine = input.parse().ok()?;
    let mut screen = Screen::default();
    screen.draw(&machine.run_to_halt().ok()?)?;
    Some(screen.blocks())
}

pub fn part_two(input: &str) -> Option<Word> {
    let mut machine: Machine = input.parse().ok()?;
    machine.write(COINS, 2).ok()?;
    play(&mut machine)
}

fn main() {
    let input = &advent_archive::read_file("inputs", 2019, 13);
    advent_archive::solve!(1, part_one, input);
    advent_archive::solve!(2, part_two, input);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drawing() {
        let mut screen = Screen::default();
        screen.draw(&[1, 2, 3, 6, 5, 4, 2, 2, 2, -1, 0, 12345]).unwrap();
        assert_eq!(screen.paddle, Some(Pos::new(1, 2)));
        assert_eq!(screen.ball, Some(Pos::new(6, 5)));
        assert_eq!(screen.blocks(), 1);
        assert_eq!(screen.score, 12345);
        assert!(screen.draw(&[1, 1, 9]).is_none());
    }

    #[test]
    fn test_part_one() {
        // Two blocks and a wall.
        assert_eq!(
            part_one("104,0,104,0,104,2,104,1,104,0,104,1,104,2,104,0,104,2,99"),
            Some(2)
        );
    }

    #[test]
    fn joystick_follows_the_ball() {
        // Draws the ball right of the paddle, reads the joystick, then
        // reports the joystick position as the score.
        let mut machine: Machine =
            "104,5,104,0,104,4,104,3,104,1,104,3,3,100,104,-1,104,0,4,100,99"
                .parse()
                .unwrap();
        assert_eq!(play(&mut machine), Some(1));
    }
}
