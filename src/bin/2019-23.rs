//! 2019 Day 23: Category Six

use advent_archive::{
    debugln,
    intcode::{Machine, Word},
};

const COMPUTERS: usize = 50;
const NAT: Word = 255;
/// Give up if the network sits idle this long with nothing for the NAT to
/// send.
const MAX_IDLE_ROUNDS: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Packet {
    dest: Word,
    x: Word,
    y: Word,
}

trait Nic {
    fn deliver(&mut self, x: Word, y: Word);

    /// Lets the computer run until it wants input again, returning the
    /// packets it sent. An empty queue reads as `-1`.
    fn poll(&mut self) -> Option<Vec<Packet>>;
}

impl Nic for Machine {
    fn deliver(&mut self, x: Word, y: Word) {
        self.push_input(x);
        self.push_input(y);
    }

    fn poll(&mut self) -> Option<Vec<Packet>> {
        if !self.has_pending_input() {
            self.push_input(-1);
        }
        let outputs = self.run_until_input().ok()?;
        if outputs.len() % 3 != 0 {
            return None;
        }
        let packets = outputs
            .chunks_exact(3)
            .map(|p| Packet {
                dest: p[0],
                x: p[1],
                y: p[2],
            })
            .collect();
        Some(packets)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Watch {
    /// Stop at the first packet sent to the NAT.
    FirstToNat,
    /// Stop when the NAT wakes the network with the same Y twice running.
    RepeatedWake,
}

/// Polls every computer in turn, one round at a time. A round in which
/// nobody sends anything means the network is idle.
fn run_network(nics: &mut [impl Nic], watch: Watch) -> Option<Word> {
    let mut nat: Option<(Word, Word)> = None;
    let mut last_wake = None;
    let mut idle_rounds = 0;

    loop {
        let mut sent = false;
        for i in 0..nics.len() {
            for packet in nics[i].poll()? {
                sent = true;
                if packet.dest == NAT {
                    if watch == Watch::FirstToNat {
                        return Some(packet.y);
                    }
                    nat = Some((packet.x, packet.y));
                    continue;
                }
                match usize::try_from(packet.dest).ok().and_then(|d| nics.get_mut(d)) {
                    Some(nic) => nic.deliver(packet.x, packet.y),
                    None => {
                        debugln!("dropped {packet:?}");
                    }
                }
            }
        }
        if sent {
            idle_rounds = 0;
            continue;
        }

        match nat {
            Some((x, y)) => {
                if last_wake == Some(y) {
                    return Some(y);
                }
                last_wake = Some(y);
                nics.first_mut()?.deliver(x, y);
            }
            None => {
                idle_rounds += 1;
                if idle_rounds > MAX_IDLE_ROUNDS {
                    return None;
                }
            }
        }
    }
}

fn boot(input: &str) -> Option<Vec<Machine>> {
    let program: Machine = input.parse().ok()?;
    let nics = (0..COMPUTERS)
        .map(|address| {
            let mut nic = program.clone();
            nic.push_input(address as Word);
            nic
        })
        .collect();
    Some(nics)
}

pub fn part_one(input: &str) -> Option<Word> {
    run_network(&mut boot(input)?, Watch::FirstToNat)
}

pub fn part_two(input: &str) -> Option<Word> {
    run_network(&mut boot(input)?, Watch::RepeatedWake)
}

fn main() {
    let input = &advent_archive::read_file("inputs", 2019, 23);
    advent_archive::solve!(1, part_one, input);
    advent_archive::solve!(2, part_two, input);
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;

    /// Computer 0 starts by sending `40` to computer 1 and passes on
    /// anything it receives. Computer 1 halves each Y and sends it to the
    /// NAT.
    struct Halver {
        address: usize,
        inbox: VecDeque<(Word, Word)>,
        booted: bool,
    }

    impl Halver {
        fn network() -> Vec<Halver> {
            (0..2)
                .map(|address| Halver {
                    address,
                    inbox: VecDeque::new(),
                    booted: false,
                })
                .collect()
        }
    }

    impl Nic for Halver {
        fn deliver(&mut self, x: Word, y: Word) {
            self.inbox.push_back((x, y));
        }

        fn poll(&mut self) -> Option<Vec<Packet>> {
            let mut sent = Vec::new();
            if !self.booted && self.address == 0 {
                sent.push(Packet { dest: 1, x: 0, y: 40 });
            }
            self.booted = true;
            while let Some((x, y)) = self.inbox.pop_front() {
                let dest = if self.address == 0 { 1 } else { NAT };
                let y = if self.address == 0 { y } else { y / 2 };
                sent.push(Packet { dest, x, y });
            }
            Some(sent)
        }
    }

    #[test]
    fn test_part_one() {
        assert_eq!(run_network(&mut Halver::network(), Watch::FirstToNat), Some(20));
    }

    #[test]
    fn test_part_two() {
        // The NAT sends 20, 10, 5, 2, 1, 0 and then 0 again.
        assert_eq!(run_network(&mut Halver::network(), Watch::RepeatedWake), Some(0));
    }

    #[test]
    fn silent_network() {
        // Reads forever without sending anything.
        let program: Machine = "3,100,1105,1,0".parse().unwrap();
        let mut nics = vec![program; 3];
        assert_eq!(run_network(&mut nics, Watch::FirstToNat), None);
    }
}
