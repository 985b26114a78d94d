use collection_traits::Sequence;
use std::fmt::Display;

/// Renders a container as `[a] --> [b] --> [c]`.
pub fn render_chain<C: Sequence + ?Sized>(container: &C) -> String
where
    C::Item: Display,
{
    let mut out = String::new();
    container.for_each(|item, last| {
        out.push_str(&format!("[{item}]"));
        if !last {
            out.push_str(" --> ");
        }
    });
    out
}

#[cfg(test)]
mod tests {
    use crate::render::render_chain;
    use containers::prelude::*;

    #[test]
    fn renders_like_a_chain() {
        let list: SinglyLinkedList<i64> = [5, 10, 200].into_iter().collect();
        assert_eq!(render_chain(&list), "[5] --> [10] --> [200]");
    }

    #[test]
    fn renders_empty_and_single() {
        let mut array = DynamicArray::<i64>::new(0);
        assert_eq!(render_chain(&array), "");
        array.insert(1).unwrap();
        assert_eq!(render_chain(&array), "[1]");
        assert_eq!(render_chain(&[1, 2][..]), "[1] --> [2]");
    }

    #[test]
    fn renders_owned_strings() {
        let list: DoublyLinkedList<String> = ["a", "bc"].map(String::from).into_iter().collect();
        assert_eq!(render_chain(&list), "[a] --> [bc]");
    }
}
