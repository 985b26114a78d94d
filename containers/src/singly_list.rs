use collection_traits::{Deque, HasLength, Resizable, Sequence, SequenceError};
use std::fmt::{Debug, Formatter};
use tracing::trace;

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    next: Link<T>,
}

/// Singly linked list of owned nodes.
///
/// Front operations are O(1). Back operations and positional access walk
/// the list from the head.
pub struct SinglyLinkedList<T> {
    head: Link<T>,
    len: usize,
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SinglyLinkedList<T> {
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn push_front(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { value, next }));
        self.len += 1;
    }

    pub fn push_back(&mut self, value: T) {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        *cursor = Some(Box::new(Node { value, next: None }));
        self.len += 1;
    }

    pub fn pop_front(&mut self) -> Result<T, SequenceError> {
        let node = self.head.take().ok_or(SequenceError::EmptyContainer)?;
        self.head = node.next;
        self.len -= 1;
        Ok(node.value)
    }

    pub fn pop_back(&mut self) -> Result<T, SequenceError> {
        if self.is_empty() {
            return Err(SequenceError::EmptyContainer);
        }
        self.remove_at(self.len - 1)
    }

    /// Unlinks the node at `index` and returns its value.
    pub fn remove_at(&mut self, index: usize) -> Result<T, SequenceError> {
        let len = self.len;
        SequenceError::check_index(index, len)?;

        let link = self.link_mut(index);
        let mut node = link
            .take()
            .ok_or(SequenceError::IndexOutOfRange { index, len })?;
        *link = node.next.take();
        self.len -= 1;
        trace!(index, len = self.len, "unlinked list node");
        Ok(node.value)
    }

    pub fn remove(&mut self, value: &T) -> Option<T>
    where
        T: PartialEq,
    {
        let index = self.index_of(value)?;
        self.remove_at(index).ok()
    }

    /// Link pointing at the node with the given position.
    fn link_mut(&mut self, index: usize) -> &mut Link<T> {
        let mut link = &mut self.head;
        for _ in 0..index {
            match link {
                Some(node) => link = &mut node.next,
                None => break,
            }
        }
        link
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.iter().nth(index)
    }

    pub fn element_at(&self, index: usize) -> Result<&T, SequenceError> {
        self.get(index).ok_or(SequenceError::IndexOutOfRange {
            index,
            len: self.len,
        })
    }

    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|item| item == value)
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(value).is_some()
    }

    pub fn for_each(&self, mut visit: impl FnMut(&T, bool)) {
        let mut node = self.head.as_deref();
        while let Some(current) = node {
            visit(&current.value, current.next.is_none());
            node = current.next.as_deref();
        }
    }

    /// Reverses the list in place by relinking its nodes.
    pub fn reverse(&mut self) {
        let mut reversed: Link<T> = None;
        let mut rest = self.head.take();
        while let Some(mut node) = rest {
            rest = node.next.take();
            node.next = reversed;
            reversed = Some(node);
        }
        self.head = reversed;
    }

    pub fn clear(&mut self) {
        let mut rest = self.head.take();
        while let Some(mut node) = rest {
            rest = node.next.take();
        }
        self.len = 0;
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
            remaining: self.len,
        }
    }
}

impl<T: Clone> Clone for SinglyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: Debug> Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        // unlink iteratively, the default drop recurses once per node
        self.clear();
    }
}

pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_deref();
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a SinglyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        let mut tail = &mut list.head;
        for value in iter {
            let node = tail.insert(Box::new(Node { value, next: None }));
            tail = &mut node.next;
            list.len += 1;
        }
        list
    }
}

impl<T> HasLength for SinglyLinkedList<T> {
    fn len(&self) -> usize {
        self.len()
    }

    fn is_empty(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Sequence for SinglyLinkedList<T> {
    type Item = T;

    fn get(&self, index: usize) -> Option<&T> {
        self.get(index)
    }

    fn iter<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        self.iter()
    }
}

impl<T> Resizable for SinglyLinkedList<T> {
    fn push_back(&mut self, item: T) -> Result<(), SequenceError> {
        self.push_back(item);
        Ok(())
    }

    fn remove_at(&mut self, index: usize) -> Result<T, SequenceError> {
        self.remove_at(index)
    }

    fn clear(&mut self) {
        self.clear()
    }
}

impl<T> Deque for SinglyLinkedList<T> {
    fn push_front(&mut self, item: T) {
        self.push_front(item)
    }

    fn pop_front(&mut self) -> Result<T, SequenceError> {
        self.pop_front()
    }

    fn pop_back(&mut self) -> Result<T, SequenceError> {
        self.pop_back()
    }
}

#[cfg(test)]
mod tests {
    use crate::singly_list::SinglyLinkedList;
    use collection_traits::SequenceError;
    use itertools::Itertools;
    use rstest::rstest;

    #[test]
    fn prepend_and_append() {
        let mut list = SinglyLinkedList::new();
        assert_eq!(list.len(), 0);
        list.push_back(10);
        assert_eq!(list.element_at(0), Ok(&10));
        list.push_front(100);
        assert_eq!(list.len(), 2);
        assert_eq!(list.pop_front(), Ok(100));
        assert_eq!(list.element_at(0), Ok(&10));
        assert_eq!(list.len(), 1);

        list.push_back(200);
        list.push_front(5);
        assert_eq!(list.len(), 3);
        assert_eq!(list.index_of(&100), None);
        assert_eq!(list.index_of(&200), Some(2));

        assert_eq!(list.remove_at(1), Ok(10));
        assert_eq!(list.element_at(1), Ok(&200));
        assert_eq!(list.iter().copied().collect_vec(), vec![5, 200]);
    }

    #[test]
    fn pops_on_empty_fail() {
        let mut list = SinglyLinkedList::<i64>::new();
        assert_eq!(list.pop_front(), Err(SequenceError::EmptyContainer));
        assert_eq!(list.pop_back(), Err(SequenceError::EmptyContainer));
    }

    #[test]
    fn pop_back_until_empty() {
        let mut list: SinglyLinkedList<_> = [1, 2, 3].into_iter().collect();
        assert_eq!(list.pop_back(), Ok(3));
        assert_eq!(list.pop_back(), Ok(2));
        assert_eq!(list.pop_back(), Ok(1));
        assert!(list.is_empty());
        list.push_back(4);
        assert_eq!(list.iter().copied().collect_vec(), vec![4]);
    }

    #[rstest]
    #[case(0, vec![2, 3, 4])]
    #[case(1, vec![1, 3, 4])]
    #[case(3, vec![1, 2, 3])]
    fn remove_at_relinks(#[case] index: usize, #[case] expected: Vec<i64>) {
        let mut list: SinglyLinkedList<i64> = (1..=4).collect();
        assert!(list.remove_at(index).is_ok());
        assert_eq!(list.iter().copied().collect_vec(), expected);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn remove_at_out_of_range() {
        let mut list: SinglyLinkedList<i64> = (1..=2).collect();
        assert_eq!(
            list.remove_at(2),
            Err(SequenceError::IndexOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn remove_by_value() {
        let mut list: SinglyLinkedList<i64> = [10, 20, 30, 20].into_iter().collect();
        assert_eq!(list.remove(&20), Some(20));
        assert_eq!(list.iter().copied().collect_vec(), vec![10, 30, 20]);
        assert_eq!(list.remove(&99), None);
        assert!(list.contains(&20));
    }

    #[rstest]
    #[case(vec![])]
    #[case(vec![1])]
    #[case(vec![1, 2, 3, 4, 5])]
    fn reverse_relinks(#[case] values: Vec<i64>) {
        let mut list: SinglyLinkedList<i64> = values.iter().copied().collect();
        list.reverse();
        assert_eq!(
            list.iter().copied().collect_vec(),
            values.iter().rev().copied().collect_vec()
        );
        list.push_back(99);
        assert_eq!(list.element_at(values.len()), Ok(&99));
    }

    #[test]
    fn for_each_marks_last() {
        let list: SinglyLinkedList<i64> = [5, 200].into_iter().collect();
        let mut visited = vec![];
        list.for_each(|value, last| visited.push((*value, last)));
        assert_eq!(visited, vec![(5, false), (200, true)]);
    }

    #[test]
    fn clear_and_reuse() {
        let mut list: SinglyLinkedList<i64> = (0..10).collect();
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.iter().count(), 0);
        list.push_front(1);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn long_list_drops_without_overflow() {
        let list: SinglyLinkedList<i64> = (0..200_000).collect();
        assert_eq!(list.len(), 200_000);
        drop(list);
    }
}
