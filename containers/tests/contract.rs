use containers::prelude::*;
use itertools::Itertools;
use rstest::rstest;

/// Small deterministic generator so the operation mix is reproducible.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self, bound: u64) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.0 >> 33) % bound
    }
}

fn assert_same<C: Sequence<Item = i64>>(container: &C, model: &[i64]) {
    assert_eq!(container.len(), model.len());
    assert_eq!(container.iter().copied().collect_vec(), model);
    for (idx, value) in model.iter().enumerate() {
        assert_eq!(container.element_at(idx), Ok(value));
    }
    assert_eq!(
        container.element_at(model.len()),
        Err(SequenceError::IndexOutOfRange {
            index: model.len(),
            len: model.len(),
        })
    );
}

fn run_back_ops<C: Resizable<Item = i64>>(container: &mut C, seed: u64) -> Vec<i64> {
    let mut rng = Lcg(seed);
    let mut model: Vec<i64> = vec![];

    for _ in 0..400 {
        match rng.next(10) {
            0..=5 => {
                let value = rng.next(50) as i64;
                container.push_back(value).unwrap();
                model.push_back(value).unwrap();
            }
            6 | 7 => {
                let index = rng.next(model.len() as u64 + 2) as usize;
                assert_eq!(
                    container.remove_at(index),
                    Resizable::remove_at(&mut model, index)
                );
            }
            8 => {
                let value = rng.next(50) as i64;
                assert_eq!(container.contains(&value), model.contains(&value));
                assert_eq!(
                    container.remove(&value),
                    Resizable::remove(&mut model, &value)
                );
            }
            _ => {
                let value = rng.next(50) as i64;
                assert_eq!(
                    container.index_of(&value),
                    Sequence::index_of(&model, &value)
                );
            }
        }
        assert_same(container, &model);
    }

    model
}

fn run_deque_ops<C: Deque<Item = i64>>(container: &mut C, seed: u64) {
    let mut rng = Lcg(seed);
    let mut model: Vec<i64> = vec![];

    for _ in 0..400 {
        match rng.next(6) {
            0 => {
                let value = rng.next(100) as i64;
                container.push_front(value);
                model.insert(0, value);
            }
            1 => {
                let value = rng.next(100) as i64;
                container.push_back(value).unwrap();
                model.push(value);
            }
            2 => {
                let expected = if model.is_empty() {
                    Err(SequenceError::EmptyContainer)
                } else {
                    Ok(model.remove(0))
                };
                assert_eq!(container.pop_front(), expected);
            }
            3 => {
                let expected = model.pop().ok_or(SequenceError::EmptyContainer);
                assert_eq!(container.pop_back(), expected);
            }
            4 => {
                let index = rng.next(model.len() as u64 + 1) as usize;
                assert_eq!(
                    container.remove_at(index),
                    Resizable::remove_at(&mut model, index)
                );
            }
            _ => {
                let value = rng.next(100) as i64;
                assert_eq!(container.contains(&value), model.contains(&value));
            }
        }
        assert_same(container, &model);
    }
}

#[rstest]
#[case(1)]
#[case(7)]
#[case(2024)]
fn dynamic_array_matches_model(#[case] seed: u64) {
    let mut array = DynamicArray::new(16);
    run_back_ops(&mut array, seed);
    assert!(array.len() <= array.capacity());
}

#[rstest]
#[case(1)]
#[case(7)]
#[case(2024)]
fn singly_list_matches_model(#[case] seed: u64) {
    run_back_ops(&mut SinglyLinkedList::new(), seed);
    run_deque_ops(&mut SinglyLinkedList::new(), seed);
}

#[rstest]
#[case(1)]
#[case(7)]
#[case(2024)]
fn doubly_list_matches_model(#[case] seed: u64) {
    run_back_ops(&mut DoublyLinkedList::new(), seed);
    run_deque_ops(&mut DoublyLinkedList::new(), seed);
}

fn scenario<C: Resizable<Item = i64>>(mut container: C) {
    for value in [10, 20, 30, 40, 50] {
        container.push_back(value).unwrap();
    }
    assert_eq!(container.remove(&20), Some(20));
    assert_eq!(container.iter().copied().collect_vec(), vec![10, 30, 40, 50]);
    assert_eq!(container.index_of(&20), None);
    assert_eq!(container.index_of(&50), Some(3));
    assert_eq!(container.len(), 4);

    let mut rendered = String::new();
    container.for_each(|value, last| {
        rendered += &value.to_string();
        if !last {
            rendered += ",";
        }
    });
    assert_eq!(rendered, "10,30,40,50");

    container.clear();
    assert_eq!(container.len(), 0);
    assert!(container.is_empty());
}

#[test]
fn every_container_passes_the_shared_scenario() {
    scenario(DynamicArray::new(16));
    scenario(SinglyLinkedList::new());
    scenario(DoublyLinkedList::new());
    scenario(Vec::new());
}
