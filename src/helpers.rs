/*
 * Helpers shared between solutions.
 * Example import from this file: `use advent_archive::helpers::parse;`.
 */

pub mod grid;
pub mod math;
pub mod parse;
pub mod pos;
mod split_by;

pub use split_by::{SplitBy, SplitGroup, SplitGroups};

pub trait Itertools: Iterator {
    /// Splits the iterator into groups at every item matching `predicate`.
    ///
    /// Behaves like [`str::split_terminator`]: a trailing separator does not
    /// produce a final empty group, but leading or repeated separators do.
    /// Groups are produced lazily by iterating `&SplitBy`.
    fn split_by<F>(self, predicate: F) -> SplitBy<Self, F>
    where
        F: FnMut(&Self::Item) -> bool,
        Self: Sized,
    {
        SplitBy::new(self, predicate)
    }
}

impl<I: Iterator> Itertools for I {}
