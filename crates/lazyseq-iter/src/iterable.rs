//! The restartable iterable wrapper.

use lazyseq_core::IndexedContainer;

use crate::{LazyIter, Traverse};

/// Wraps a container so that every traversal starts from a fresh [`LazyIter`].
///
/// The wrapper holds no cursor. Iterating `&iterable` (a `for` loop, `zip`, sorting through
/// [`Traverse::sorted`]) always goes through [`traverse`](Self::traverse), while direct
/// positional access stays available through [`IndexedContainer`].
///
/// # Examples
///
/// ```
/// use lazyseq_core::{IndexedContainer, Seq};
/// use lazyseq_iter::Iterable;
///
/// let cities = Iterable::new(Seq::from(["Paris", "Berlin", "Rome"]));
///
/// let mut first = cities.traverse();
/// let mut second = cities.traverse();
/// first.next();
/// assert_eq!(first.next(), Some("Berlin"));
/// assert_eq!(second.next(), Some("Paris"));
///
/// // Positional access still works.
/// assert_eq!(cities.get(-1)?, "Rome");
///
/// let mut seen = Vec::new();
/// for city in &cities {
///     seen.push(city);
/// }
/// assert_eq!(seen, ["Paris", "Berlin", "Rome"]);
/// # Ok::<(), lazyseq_core::SeqError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Iterable<C> {
    container: C,
}

impl<C> Iterable<C>
where
    C: IndexedContainer,
{
    /// Wraps `container`.
    #[must_use]
    pub const fn new(container: C) -> Self {
        Self { container }
    }

    /// Returns a new iterator positioned at the first element.
    #[must_use]
    pub fn traverse(&self) -> LazyIter<'_, C> {
        LazyIter::new(&self.container)
    }

    /// Returns the wrapped container.
    #[must_use]
    pub const fn container(&self) -> &C {
        &self.container
    }

    /// Returns the wrapped container mutably.
    ///
    /// Borrowing mutably is only possible while no traversal is alive.
    pub fn container_mut(&mut self) -> &mut C {
        &mut self.container
    }

    /// Unwraps the container.
    #[must_use]
    pub fn into_inner(self) -> C {
        self.container
    }
}

impl<C> Traverse for Iterable<C>
where
    C: IndexedContainer,
{
    type Item = C::Item;
    type Iter<'a>
        = LazyIter<'a, C>
    where
        Self: 'a;

    fn traverse(&self) -> Self::Iter<'_> {
        Iterable::traverse(self)
    }
}

impl<C> IndexedContainer for Iterable<C>
where
    C: IndexedContainer,
{
    type Item = C::Item;
    type Slice = C::Slice;

    fn len(&self) -> usize {
        self.container.len()
    }

    fn element(&self, position: usize) -> Option<Self::Item> {
        self.container.element(position)
    }
}

impl<'a, C> IntoIterator for &'a Iterable<C>
where
    C: IndexedContainer,
{
    type Item = C::Item;
    type IntoIter = LazyIter<'a, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.traverse()
    }
}

impl<C> From<C> for Iterable<C>
where
    C: IndexedContainer,
{
    fn from(container: C) -> Self {
        Self::new(container)
    }
}
