use crate::growth::{GrowthPolicy, PolicyError};
use collection_traits::{HasLength, Resizable, Sequence, SequenceError};
use tracing::{debug, warn};

/// Contiguous growable sequence with an explicit, observable capacity.
///
/// Storage is only allocated by the first insertion. Growth follows the
/// array's [GrowthPolicy]: it is checked after every insertion, so there is
/// always room for the next element.
#[derive(Debug, Clone)]
pub struct DynamicArray<T> {
    storage: Vec<T>,
    capacity: usize,
    policy: GrowthPolicy,
    reallocations: usize,
    allocated: bool,
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new(0)
    }
}

impl<T> DynamicArray<T> {
    /// Creates an empty array using the default growth policy.
    ///
    /// The capacity is clamped to the policy floor of 16 slots.
    pub fn new(requested_capacity: usize) -> Self {
        Self::from_valid_policy(requested_capacity, GrowthPolicy::default())
    }

    /// Creates an empty array with a custom growth policy.
    pub fn with_policy(
        requested_capacity: usize,
        policy: GrowthPolicy,
    ) -> Result<Self, PolicyError> {
        Ok(Self::from_valid_policy(
            requested_capacity,
            policy.validated()?,
        ))
    }

    fn from_valid_policy(requested_capacity: usize, policy: GrowthPolicy) -> Self {
        Self {
            storage: Vec::new(),
            capacity: policy.initial_capacity(requested_capacity),
            policy,
            reallocations: 0,
            allocated: false,
        }
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Number of slots the array holds before it has to grow.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether the backing storage has been allocated yet.
    pub fn is_allocated(&self) -> bool {
        self.allocated
    }

    /// How many times the capacity has grown since creation.
    pub fn reallocations(&self) -> usize {
        self.reallocations
    }

    pub fn policy(&self) -> &GrowthPolicy {
        &self.policy
    }

    /// Appends `value` at the end of the array.
    ///
    /// On [SequenceError::AllocationFailure] neither the length nor the
    /// capacity change and `value` is dropped.
    pub fn insert(&mut self, value: T) -> Result<(), SequenceError> {
        self.reserve_slots(self.capacity)?;

        let len = self.storage.len() + 1;
        if self.policy.needs_growth(len, self.capacity) {
            let grown = self
                .policy
                .grown_capacity(self.capacity)
                .ok_or(SequenceError::AllocationFailure {
                    requested: usize::MAX,
                })?;
            self.reserve_slots(grown)?;
            debug!(from = self.capacity, to = grown, len, "growing dynamic array");
            self.capacity = grown;
            self.reallocations += 1;
        }

        self.storage.push(value);
        Ok(())
    }

    /// Makes sure the storage can hold `capacity` elements without moving.
    fn reserve_slots(&mut self, capacity: usize) -> Result<(), SequenceError> {
        if self.storage.capacity() < capacity {
            let additional = capacity - self.storage.len();
            self.storage.try_reserve_exact(additional).map_err(|err| {
                warn!(requested = capacity, %err, "dynamic array allocation failed");
                SequenceError::AllocationFailure {
                    requested: capacity,
                }
            })?;
        }
        // tracked separately, `Vec` reports unbounded capacity for zero-sized `T`
        self.allocated = true;
        Ok(())
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.storage.get(index)
    }

    pub fn element_at(&self, index: usize) -> Result<&T, SequenceError> {
        SequenceError::check_index(index, self.len())?;
        Ok(&self.storage[index])
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

    /// Removes the element at `index`, moving every later element one slot
    /// towards the front.
    pub fn remove_at(&mut self, index: usize) -> Result<T, SequenceError> {
        SequenceError::check_index(index, self.len())?;
        Ok(self.storage.remove(index))
    }

    /// Removes the first element equal to `value`, if any.
    pub fn remove(&mut self, value: &T) -> Option<T>
    where
        T: PartialEq,
    {
        let index = self.index_of(value)?;
        Some(self.storage.remove(index))
    }

    /// Drops all elements. Capacity and storage are kept.
    pub fn clear(&mut self) {
        self.storage.clear();
    }

    pub fn for_each(&self, mut visit: impl FnMut(&T, bool)) {
        let len = self.len();
        for (idx, item) in self.iter().enumerate() {
            visit(item, idx + 1 == len);
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.storage.as_slice().iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.storage
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> HasLength for DynamicArray<T> {
    fn len(&self) -> usize {
        self.len()
    }

    fn is_empty(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Sequence for DynamicArray<T> {
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

    fn element_at(&self, index: usize) -> Result<&T, SequenceError> {
        self.element_at(index)
    }
}

impl<T> Resizable for DynamicArray<T> {
    fn push_back(&mut self, item: T) -> Result<(), SequenceError> {
        self.insert(item)
    }

    fn remove_at(&mut self, index: usize) -> Result<T, SequenceError> {
        self.remove_at(index)
    }

    fn clear(&mut self) {
        self.clear()
    }
}
