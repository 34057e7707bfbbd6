use itertools::{Group, GroupBy, Groups};

/// Storage for [`Itertools::split_by`], built on [`itertools::GroupBy`].
///
/// Groups borrow from this value, so iterate a reference to it:
/// `for group in &blocks { .. }`. Groups are lazy and yield items straight
/// from the underlying iterator.
///
/// [`Itertools::split_by`]: super::Itertools::split_by
pub struct SplitBy<I, F>
where
    I: Iterator,
{
    runs: GroupBy<bool, I, F>,
}

impl<I, F> SplitBy<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item) -> bool,
{
    pub(super) fn new(iter: I, is_separator: F) -> Self {
        Self {
            runs: itertools::Itertools::group_by(iter, is_separator),
        }
    }
}

impl<'a, I, F> IntoIterator for &'a SplitBy<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item) -> bool,
{
    type Item = SplitGroup<'a, I, F>;
    type IntoIter = SplitGroups<'a, I, F>;

    fn into_iter(self) -> Self::IntoIter {
        SplitGroups {
            runs: (&self.runs).into_iter(),
            separators: None,
            started: false,
        }
    }
}

/// Iterator over the groups of a [`SplitBy`].
pub struct SplitGroups<'a, I, F>
where
    I: Iterator,
    I::Item: 'a,
{
    runs: Groups<'a, bool, I, F>,
    /// The rest of a run of separators; each one left closes an empty group.
    separators: Option<Group<'a, bool, I, F>>,
    started: bool,
}

impl<'a, I, F> Iterator for SplitGroups<'a, I, F>
where
    I: Iterator,
    I::Item: 'a,
    F: FnMut(&I::Item) -> bool,
{
    type Item = SplitGroup<'a, I, F>;

    fn next(&mut self) -> Option<Self::Item> {
        let leading = !self.started;
        self.started = true;

        if let Some(mut run) = self.separators.take() {
            if run.next().is_some() {
                self.separators = Some(run);
                return Some(SplitGroup { items: None });
            }
        }

        let (is_separator, mut run) = self.runs.next()?;
        if !is_separator {
            return Some(SplitGroup { items: Some(run) });
        }

        // The first separator of a run ends the group before it.
        run.next();
        self.separators = Some(run);
        if leading {
            return Some(SplitGroup { items: None });
        }
        self.next()
    }
}

/// One group of a [`SplitBy`]; empty between adjacent separators.
pub struct SplitGroup<'a, I, F>
where
    I: Iterator,
    I::Item: 'a,
{
    items: Option<Group<'a, bool, I, F>>,
}

impl<'a, I, F> Iterator for SplitGroup<'a, I, F>
where
    I: Iterator,
    I::Item: 'a,
    F: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.items.as_mut()?.next()
    }
}
