//! 2018 Day 8: Memory Maneuver

#[derive(Debug, Default)]
struct Node {
    children: Vec<Node>,
    metadata: Vec<u32>,
}

impl Node {
    fn parse(input: &str) -> Option<Self> {
        let numbers = input
            .split_whitespace()
            .map(|n| n.parse().ok())
            .collect::<Option<Vec<usize>>>()?;
        let mut numbers = numbers.into_iter();
        let root = Self::read(&mut numbers)?;
        numbers.next().is_none().then_some(root)
    }

    fn read(numbers: &mut impl Iterator<Item = usize>) -> Option<Self> {
        let child_count = numbers.next()?;
        let metadata_count = numbers.next()?;
        let children = (0..child_count)
            .map(|_| Self::read(numbers))
            .collect::<Option<_>>()?;
        let metadata = (0..metadata_count)
            .map(|_| numbers.next().and_then(|m| u32::try_from(m).ok()))
            .collect::<Option<_>>()?;
        Some(Self { children, metadata })
    }

    fn metadata_sum(&self) -> u32 {
        self.metadata.iter().sum::<u32>()
            + self.children.iter().map(Node::metadata_sum).sum::<u32>()
    }

    /// Metadata entries of a node with children are 1-based child indices;
    /// those that point nowhere are worth nothing.
    fn value(&self) -> u32 {
        if self.children.is_empty() {
            return self.metadata.iter().sum();
        }
        self.metadata
            .iter()
            .filter_map(|&m| self.children.get((m as usize).checked_sub(1)?))
            .map(Node::value)
            .sum()
    }
}

pub fn part_one(input: &str) -> Option<u32> {
    Node::parse(input).map(|root| root.metadata_sum())
}

pub fn part_two(input: &str) -> Option<u32> {
    Node::parse(input).map(|root| root.value())
}

fn main() {
    let input = &advent_archive::read_file("inputs", 2018, 8);
    advent_archive::solve!(1, part_one, input);
    advent_archive::solve!(2, part_two, input);
}
