//! 2019 Day 12: The N-Body Problem

use glam::IVec3;

use advent_archive::helpers::{math::lcm, parse};

const STEPS: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Moon {
    pos: IVec3,
    vel: IVec3,
}

impl Moon {
    fn energy(&self) -> i32 {
        let potential = self.pos.abs().to_array().iter().sum::<i32>();
        let kinetic = self.vel.abs().to_array().iter().sum::<i32>();
        potential * kinetic
    }
}

fn step(moons: &mut [Moon]) {
    for i in 0..moons.len() {
        let pull: IVec3 = moons
            .iter()
            .map(|other| (other.pos - moons[i].pos).clamp(IVec3::NEG_ONE, IVec3::ONE))
            .sum();
        moons[i].vel += pull;
    }
    for moon in moons {
        moon.pos += moon.vel;
    }
}

fn energy_after(mut moons: Vec<Moon>, steps: usize) -> i32 {
    for _ in 0..steps {
        step(&mut moons);
    }
    moons.iter().map(Moon::energy).sum()
}

/// Steps until the moons first return to where they started. The axes
/// never interact, so each one cycles on its own.
fn period(moons: &[Moon]) -> i64 {
    (0..3)
        .map(|axis| {
            let axis_state = |moons: &[Moon]| -> Vec<(i32, i32)> {
                moons.iter().map(|m| (m.pos[axis], m.vel[axis])).collect()
            };
            let start = axis_state(moons);
            let mut moons = moons.to_vec();
            let mut steps = 0_i64;
            loop {
                step(&mut moons);
                steps += 1;
                if axis_state(&moons) == start {
                    return steps;
                }
            }
        })
        .fold(1, lcm)
}

fn parse_moons(input: &str) -> Option<Vec<Moon>> {
    parse::lines(input, Moon::parser).ok()
}

pub fn part_one(input: &str) -> Option<i32> {
    Some(energy_after(parse_moons(input)?, STEPS))
}

pub fn part_two(input: &str) -> Option<i64> {
    Some(period(&parse_moons(input)?))
}

fn main() {
    let input = &advent_archive::read_file("inputs", 2019, 12);
    advent_archive::solve!(1, part_one, input);
    advent_archive::solve!(2, part_two, input);
}


mod parsing {
    use super::*;

    mod c {
        pub use combine::{parser::char::string, *};
    }

    use c::{ParseError, Parser, Stream};

    impl Moon {
        pub fn parser<Input>() -> impl Parser<Input, Output = Self>
        where
            Input: Stream<Token = char>,
            Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
        {
            (
                c::string("<x=").with(parse::decimal_integer()),
                c::string(", y=").with(parse::decimal_integer()),
                c::string(", z=").with(parse::decimal_integer()),
                c::token('>'),
            )
                .map(|(x, y, z, _)| Moon {
                    pos: IVec3::new(x, y, z),
                    vel: IVec3::ZERO,
                })
        }
    }
}
