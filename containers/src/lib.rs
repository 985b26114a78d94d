//! In-memory linear containers: a dynamic array with policy-driven growth,
//! a singly linked list and a doubly linked list.
//!
//! All three implement the traits from [collection_traits], so callers can
//! treat them interchangeably for basic sequence operations.

pub mod doubly_list;
pub mod dynamic_array;
pub mod growth;
pub mod singly_list;

pub use collection_traits;
pub use doubly_list::DoublyLinkedList;
pub use dynamic_array::DynamicArray;
pub use growth::{GrowthPolicy, PolicyError};
pub use singly_list::SinglyLinkedList;

pub mod prelude {
    pub use crate::doubly_list::DoublyLinkedList;
    pub use crate::dynamic_array::DynamicArray;
    pub use crate::growth::GrowthPolicy;
    pub use crate::singly_list::SinglyLinkedList;
    pub use collection_traits::{Deque, HasLength, Resizable, Sequence, SequenceError};
}
