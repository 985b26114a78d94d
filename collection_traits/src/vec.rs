use crate::{HasLength, Resizable, Sequence, SequenceError};

impl<T> HasLength for Vec<T> {
    fn len(&self) -> usize {
        self.len()
    }

    fn is_empty(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Sequence for Vec<T> {
    type Item = T;

    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    fn iter<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        self.as_slice().iter()
    }
}

impl<T> Resizable for Vec<T> {
    fn push_back(&mut self, item: T) -> Result<(), SequenceError> {
        self.try_reserve(1)
            .map_err(|_| SequenceError::AllocationFailure {
                requested: self.len() + 1,
            })?;
        self.push(item);
        Ok(())
    }

    fn remove_at(&mut self, index: usize) -> Result<T, SequenceError> {
        SequenceError::check_index(index, self.len())?;
        Ok(self.remove(index))
    }

    fn clear(&mut self) {
        self.clear()
    }
}

#[cfg(test)]
mod tests {
    use crate::{Resizable, Sequence, SequenceError};
    use rstest::rstest;

    #[rstest]
    #[case(0, Some(10))]
    #[case(2, Some(30))]
    #[case(3, None)]
    fn remove_at_shifts_tail(#[case] index: usize, #[case] removed: Option<i64>) {
        let mut items = vec![10, 20, 30];
        let result = Resizable::remove_at(&mut items, index);
        match removed {
            Some(value) => {
                assert_eq!(result, Ok(value));
                assert_eq!(items.len(), 2);
            }
            None => {
                assert_eq!(
                    result,
                    Err(SequenceError::IndexOutOfRange { index, len: 3 })
                );
                assert_eq!(items, vec![10, 20, 30]);
            }
        }
    }

    #[test]
    fn remove_missing_value_is_noop() {
        let mut items = vec![1, 2, 3];
        assert_eq!(Resizable::remove(&mut items, &7), None);
        assert_eq!(Resizable::remove(&mut items, &2), Some(2));
        assert_eq!(items, vec![1, 3]);
        assert_eq!(Sequence::index_of(&items, &2), None);
    }
}
