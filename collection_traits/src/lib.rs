//! Contract shared by the linear containers.
//!
//! Every container is a [Sequence]. Containers that can be appended to and
//! shrunk at arbitrary positions are [Resizable], and containers with cheap
//! access at both ends are additionally a [Deque].

#![forbid(clippy::unconditional_recursion)]

pub use error::SequenceError;

pub mod error;
pub mod slice;
pub mod vec;

pub trait HasLength {
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool;
}

/// Read access to an ordered sequence of elements.
pub trait Sequence: HasLength {
    type Item;

    /// Returns the element at the given logical position, if present.
    fn get(&self, index: usize) -> Option<&Self::Item>;

    /// Iterates over the elements in positional order.
    fn iter<'a>(&'a self) -> impl Iterator<Item = &'a Self::Item>
    where
        Self::Item: 'a;

    /// Checked positional access.
    ///
    /// Fails with [SequenceError::IndexOutOfRange] unless `index < len`.
    fn element_at(&self, index: usize) -> Result<&Self::Item, SequenceError> {
        self.get(index).ok_or(SequenceError::IndexOutOfRange {
            index,
            len: self.len(),
        })
    }

    /// Position of the first element equal to `value`.
    fn index_of(&self, value: &Self::Item) -> Option<usize>
    where
        Self::Item: PartialEq,
    {
        self.iter().position(|item| item == value)
    }

    fn contains(&self, value: &Self::Item) -> bool
    where
        Self::Item: PartialEq,
    {
        self.index_of(value).is_some()
    }

    /// Visits every element in order. The second argument is `true` for the
    /// last visited element.
    fn for_each(&self, mut visit: impl FnMut(&Self::Item, bool)) {
        let len = self.len();
        for (idx, item) in self.iter().enumerate() {
            visit(item, idx + 1 == len);
        }
    }
}

/// Sequence that grows at the back and shrinks at any position.
pub trait Resizable: Sequence {
    fn push_back(&mut self, item: Self::Item) -> Result<(), SequenceError>;

    /// Removes the element at `index`, shifting everything after it one
    /// position towards the front.
    fn remove_at(&mut self, index: usize) -> Result<Self::Item, SequenceError>;

    /// Removes the first element equal to `value`. Does nothing if there is
    /// no such element.
    fn remove(&mut self, value: &Self::Item) -> Option<Self::Item>
    where
        Self::Item: PartialEq,
    {
        let index = self.index_of(value)?;
        self.remove_at(index).ok()
    }

    fn clear(&mut self);
}

/// Sequence with insertion and removal at both ends.
pub trait Deque: Resizable {
    fn push_front(&mut self, item: Self::Item);

    /// Fails with [SequenceError::EmptyContainer] if there is nothing to pop.
    fn pop_front(&mut self) -> Result<Self::Item, SequenceError>;

    /// Fails with [SequenceError::EmptyContainer] if there is nothing to pop.
    fn pop_back(&mut self) -> Result<Self::Item, SequenceError>;
}
