//! 2019 Day 25: Cryostasis

use std::collections::HashSet;

use advent_archive::{
    debugln,
    intcode::{ascii_output, Machine},
};

const CHECKPOINT: &str = "Security Checkpoint";

/// Items that end the game (or hang it) when picked up.
const DANGEROUS: [&str; 5] = [
    "infinite loop",
    "giant electromagnet",
    "molten lava",
    "photons",
    "escape pod",
];

/// The droid's text interface.
trait Terminal {
    /// Sends `command` (nothing, if empty) and returns what is printed
    /// before the next prompt.
    fn exchange(&mut self, command: &str) -> Option<String>;
}

impl Terminal for Machine {
    fn exchange(&mut self, command: &str) -> Option<String> {
        if !command.is_empty() {
            self.push_ascii(&format!("{command}\n"));
        }
        let output = ascii_output(&self.run_until_input().ok()?);
        debugln!("> {command}\n{output}");
        Some(output)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Room {
    name: String,
    doors: Vec<String>,
    items: Vec<String>,
}

impl Room {
    /// Reads the last room description in `text`. Being thrown out of a
    /// room prints the room you land in after it.
    fn parse(text: &str) -> Option<Self> {
        let start = text.rfind("== ")?;
        let mut lines = text[start..].lines();
        let name = lines.next()?.trim_matches(|ch: char| ch == '=' || ch == ' ');

        let mut room = Room {
            name: name.to_owned(),
            doors: Vec::new(),
            items: Vec::new(),
        };
        let mut list = None;
        for line in lines {
            match line {
                "Doors here lead:" => list = Some(&mut room.doors),
                "Items here:" => list = Some(&mut room.items),
                _ => match line.strip_prefix("- ") {
                    Some(entry) => {
                        if let Some(list) = &mut list {
                            list.push(entry.to_owned());
                        }
                    }
                    None => list = None,
                },
            }
        }
        Some(room)
    }
}

fn opposite(dir: &str) -> Option<&'static str> {
    match dir {
        "north" => Some("south"),
        "south" => Some("north"),
        "east" => Some("west"),
        "west" => Some("east"),
        _ => None,
    }
}

/// Walks every room depth first, picking up whatever is safe.
struct Explorer<'t, T> {
    terminal: &'t mut T,
    seen: HashSet<String>,
    path: Vec<String>,
    inventory: Vec<String>,
    /// The way to the checkpoint, and the door out of it onto the floor.
    checkpoint: Option<(Vec<String>, String)>,
}

impl<'t, T: Terminal> Explorer<'t, T> {
    fn new(terminal: &'t mut T) -> Self {
        Self {
            terminal,
            seen: HashSet::new(),
            path: Vec::new(),
            inventory: Vec::new(),
            checkpoint: None,
        }
    }

    fn visit(&mut self, room: &Room) -> Option<()> {
        self.seen.insert(room.name.clone());
        for item in &room.items {
            if !DANGEROUS.contains(&item.as_str()) {
                self.terminal.exchange(&format!("take {item}"))?;
                self.inventory.push(item.clone());
            }
        }

        let came_from = self.path.last().and_then(|dir| opposite(dir));
        for door in &room.doors {
            if Some(door.as_str()) == came_from {
                continue;
            }
            let back = opposite(door)?;
            let next = Room::parse(&self.terminal.exchange(door)?)?;
            if next.name == room.name {
                continue;
            }

            self.path.push(door.clone());
            if next.name == CHECKPOINT {
                self.seen.insert(next.name.clone());
                let floor = next.doors.iter().find(|&d| d != back)?;
                self.checkpoint = Some((self.path.clone(), floor.clone()));
            } else if !self.seen.contains(&next.name) {
                self.visit(&next)?;
            }
            self.path.pop();
            self.terminal.exchange(back)?;
        }
        Some(())
    }
}

fn keypad_code(text: &str) -> Option<u64> {
    let rest = text.split("typing ").nth(1)?;
    rest.split_whitespace().next()?.parse().ok()
}

/// Collects every safe item, then tries each combination of them on the
/// pressure-sensitive floor until the droid is let through.
fn password(terminal: &mut impl Terminal) -> Option<u64> {
    let start = Room::parse(&terminal.exchange("")?)?;
    let mut explorer = Explorer::new(terminal);
    explorer.visit(&start)?;
    let Explorer {
        terminal,
        inventory,
        checkpoint,
        ..
    } = explorer;
    let (path, floor) = checkpoint?;

    for door in &path {
        terminal.exchange(door)?;
    }

    // Gray code order changes one item per attempt.
    let mut carried = vec![true; inventory.len()];
    for attempt in 0..1u32 << inventory.len() {
        let wanted = attempt ^ (attempt >> 1);
        for (i, item) in inventory.iter().enumerate() {
            let want = wanted & 1 << i == 0;
            if want != carried[i] {
                let verb = if want { "take" } else { "drop" };
                terminal.exchange(&format!("{verb} {item}"))?;
                carried[i] = want;
            }
        }
        let reply = terminal.exchange(&floor)?;
        if let Some(code) = keypad_code(&reply) {
            return Some(code);
        }
    }
    None
}

pub fn part_one(input: &str) -> Option<u64> {
    let mut droid: Machine = input.parse().ok()?;
    password(&mut droid)
}

pub fn part_two(_input: &str) -> Option<u64> {
    None
}

fn main() {
    let input = &advent_archive::read_file("inputs", 2019, 25);
    advent_archive::solve!(1, part_one, input);
    advent_archive::solve!(2, part_two, input);
}
