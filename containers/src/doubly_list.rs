use collection_traits::{Deque, HasLength, Resizable, Sequence, SequenceError};
use std::fmt::{Debug, Formatter};
use tracing::trace;

#[derive(Clone)]
struct Node<T> {
    value: T,
    prev: Option<usize>,
    next: Option<usize>,
}

#[derive(Clone)]
enum Slot<T> {
    Occupied(Node<T>),
    Vacant { next_free: Option<usize> },
}

/// Doubly linked list with nodes stored in a slot arena.
///
/// Links are slot indices instead of pointers. Freed slots are chained into
/// a free list and reused by later insertions. Positional access walks from
/// whichever end is closer.
#[derive(Clone)]
pub struct DoublyLinkedList<T> {
    slots: Vec<Slot<T>>,
    head: Option<usize>,
    tail: Option<usize>,
    free: Option<usize>,
    len: usize,
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DoublyLinkedList<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            head: None,
            tail: None,
            free: None,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn node(&self, slot: usize) -> &Node<T> {
        match &self.slots[slot] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("slot {slot} is linked but vacant"),
        }
    }

    fn node_mut(&mut self, slot: usize) -> &mut Node<T> {
        match &mut self.slots[slot] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("slot {slot} is linked but vacant"),
        }
    }

    fn alloc(&mut self, node: Node<T>) -> usize {
        match self.free {
            Some(slot) => {
                let Slot::Vacant { next_free } = self.slots[slot] else {
                    unreachable!("slot {slot} is on the free list but occupied");
                };
                self.free = next_free;
                self.slots[slot] = Slot::Occupied(node);
                slot
            }
            None => {
                self.slots.push(Slot::Occupied(node));
                self.slots.len() - 1
            }
        }
    }

    pub fn push_front(&mut self, value: T) {
        let slot = self.alloc(Node {
            value,
            prev: None,
            next: self.head,
        });
        match self.head {
            Some(head) => self.node_mut(head).prev = Some(slot),
            None => self.tail = Some(slot),
        }
        self.head = Some(slot);
        self.len += 1;
    }

    pub fn push_back(&mut self, value: T) {
        let slot = self.alloc(Node {
            value,
            prev: self.tail,
            next: None,
        });
        match self.tail {
            Some(tail) => self.node_mut(tail).next = Some(slot),
            None => self.head = Some(slot),
        }
        self.tail = Some(slot);
        self.len += 1;
    }

    /// Detaches the node stored in `slot` and frees the slot.
    fn unlink(&mut self, slot: usize) -> T {
        let Node { prev, next, .. } = *self.node(slot);
        match prev {
            Some(prev) => self.node_mut(prev).next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => self.node_mut(next).prev = prev,
            None => self.tail = prev,
        }
        self.len -= 1;

        let freed = std::mem::replace(
            &mut self.slots[slot],
            Slot::Vacant {
                next_free: self.free,
            },
        );
        self.free = Some(slot);

        if self.len == 0 {
            // nothing is linked anymore, so the arena can be dropped entirely
            self.slots.clear();
            self.free = None;
        }

        match freed {
            Slot::Occupied(node) => node.value,
            Slot::Vacant { .. } => unreachable!("slot {slot} is linked but vacant"),
        }
    }

    pub fn pop_front(&mut self) -> Result<T, SequenceError> {
        let head = self.head.ok_or(SequenceError::EmptyContainer)?;
        Ok(self.unlink(head))
    }

    pub fn pop_back(&mut self) -> Result<T, SequenceError> {
        let tail = self.tail.ok_or(SequenceError::EmptyContainer)?;
        Ok(self.unlink(tail))
    }

    /// Slot of the node at the given position.
    fn slot_at(&self, index: usize) -> Option<usize> {
        if index >= self.len {
            return None;
        }

        if index < self.len / 2 {
            let mut slot = self.head?;
            for _ in 0..index {
                slot = self.node(slot).next?;
            }
            Some(slot)
        } else {
            let mut slot = self.tail?;
            for _ in index + 1..self.len {
                slot = self.node(slot).prev?;
            }
            Some(slot)
        }
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.slot_at(index).map(|slot| &self.node(slot).value)
    }

    pub fn element_at(&self, index: usize) -> Result<&T, SequenceError> {
        self.get(index).ok_or(SequenceError::IndexOutOfRange {
            index,
            len: self.len,
        })
    }

    pub fn remove_at(&mut self, index: usize) -> Result<T, SequenceError> {
        let slot = self
            .slot_at(index)
            .ok_or(SequenceError::IndexOutOfRange {
                index,
                len: self.len,
            })?;
        trace!(index, slot, "unlinking list node");
        Ok(self.unlink(slot))
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

    pub fn remove(&mut self, value: &T) -> Option<T>
    where
        T: PartialEq,
    {
        let index = self.index_of(value)?;
        self.remove_at(index).ok()
    }

    pub fn for_each(&self, mut visit: impl FnMut(&T, bool)) {
        let mut cursor = self.head;
        while let Some(slot) = cursor {
            let node = self.node(slot);
            visit(&node.value, node.next.is_none());
            cursor = node.next;
        }
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.head = None;
        self.tail = None;
        self.free = None;
        self.len = 0;
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }
}

impl<T: Debug> Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

pub struct Iter<'a, T> {
    list: &'a DoublyLinkedList<T>,
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.node(self.front?);
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.node(self.back?);
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        for value in iter {
            list.push_back(value);
        }
        list
    }
}

impl<T> HasLength for DoublyLinkedList<T> {
    fn len(&self) -> usize {
        self.len()
    }

    fn is_empty(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Sequence for DoublyLinkedList<T> {
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

impl<T> Resizable for DoublyLinkedList<T> {
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

impl<T> Deque for DoublyLinkedList<T> {
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
