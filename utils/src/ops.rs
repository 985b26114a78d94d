use collection_traits::{Deque, Resizable, SequenceError};
use itertools::Itertools;
use miette::Diagnostic;
use std::str::FromStr;
use thiserror::Error;

/// A single mutation of a linear container.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SequenceOperation<T> {
    PushBack(T),
    PushFront(T),
    PopFront,
    PopBack,
    RemoveAt(usize),
    Remove(T),
    Clear,
}

#[derive(Debug, Clone, Eq, PartialEq, Error, Diagnostic)]
pub enum ApplyError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Sequence(#[from] SequenceError),
    #[error("`{0}` is not supported by this container")]
    Unsupported(&'static str),
}

impl<T> SequenceOperation<T> {
    pub fn name(&self) -> &'static str {
        match self {
            SequenceOperation::PushBack(_) => "push",
            SequenceOperation::PushFront(_) => "push-front",
            SequenceOperation::PopFront => "pop-front",
            SequenceOperation::PopBack => "pop-back",
            SequenceOperation::RemoveAt(_) => "remove-at",
            SequenceOperation::Remove(_) => "remove",
            SequenceOperation::Clear => "clear",
        }
    }
}

impl<T: PartialEq> SequenceOperation<T> {
    /// Applies the operation to a container that only grows at the back.
    ///
    /// Returns the removed element, if the operation removed one.
    pub fn apply<C: Resizable<Item = T>>(self, container: &mut C) -> Result<Option<T>, ApplyError> {
        let name = self.name();
        match self {
            SequenceOperation::PushBack(value) => {
                container.push_back(value)?;
                Ok(None)
            }
            SequenceOperation::RemoveAt(index) => Ok(Some(container.remove_at(index)?)),
            SequenceOperation::Remove(value) => Ok(container.remove(&value)),
            SequenceOperation::Clear => {
                container.clear();
                Ok(None)
            }
            SequenceOperation::PushFront(_)
            | SequenceOperation::PopFront
            | SequenceOperation::PopBack => Err(ApplyError::Unsupported(name)),
        }
    }

    /// Applies the operation to a container with access to both ends.
    pub fn apply_deque<C: Deque<Item = T>>(
        self,
        container: &mut C,
    ) -> Result<Option<T>, ApplyError> {
        match self {
            SequenceOperation::PushFront(value) => {
                container.push_front(value);
                Ok(None)
            }
            SequenceOperation::PopFront => Ok(Some(container.pop_front()?)),
            SequenceOperation::PopBack => Ok(Some(container.pop_back()?)),
            other => other.apply(container),
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Error, Diagnostic)]
pub enum ParseOpError {
    #[error("empty operation")]
    Empty,
    #[error("unknown operation `{0}`")]
    #[diagnostic(help(
        "expected one of: push, push-front, pop-front, pop-back, remove-at, remove, clear"
    ))]
    Unknown(String),
    #[error("`{op}` expects {expected} argument(s), got {got}")]
    ArgumentCount {
        op: &'static str,
        expected: usize,
        got: usize,
    },
    #[error("invalid argument `{arg}` for `{op}`")]
    BadArgument { op: &'static str, arg: String },
}

impl<T: FromStr> FromStr for SequenceOperation<T> {
    type Err = ParseOpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let op = words.next().ok_or(ParseOpError::Empty)?;
        let args = words.collect_vec();

        fn arg<V: FromStr>(op: &'static str, args: &[&str]) -> Result<V, ParseOpError> {
            let [arg] = args else {
                return Err(ParseOpError::ArgumentCount {
                    op,
                    expected: 1,
                    got: args.len(),
                });
            };
            arg.parse().map_err(|_| ParseOpError::BadArgument {
                op,
                arg: arg.to_string(),
            })
        }

        fn no_args(op: &'static str, args: &[&str]) -> Result<(), ParseOpError> {
            if args.is_empty() {
                Ok(())
            } else {
                Err(ParseOpError::ArgumentCount {
                    op,
                    expected: 0,
                    got: args.len(),
                })
            }
        }

        Ok(match op {
            "push" | "push-back" => SequenceOperation::PushBack(arg("push", &args)?),
            "push-front" => SequenceOperation::PushFront(arg("push-front", &args)?),
            "pop-front" => {
                no_args("pop-front", &args)?;
                SequenceOperation::PopFront
            }
            "pop-back" => {
                no_args("pop-back", &args)?;
                SequenceOperation::PopBack
            }
            "remove-at" => SequenceOperation::RemoveAt(arg("remove-at", &args)?),
            "remove" => SequenceOperation::Remove(arg("remove", &args)?),
            "clear" => {
                no_args("clear", &args)?;
                SequenceOperation::Clear
            }
            other => return Err(ParseOpError::Unknown(other.to_string())),
        })
    }
}
