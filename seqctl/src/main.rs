use crate::config::SeqctlConfig;
use clap::{Parser, ValueEnum};
use containers::prelude::*;
use miette::{Context, IntoDiagnostic};
use std::path::PathBuf;
use tracing::info;
use tracing_panic::panic_hook;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::EnvFilter;
use utils::{render_chain, ApplyError, SequenceOperation};

mod config;

/// Applies a script of operations to one of the linear containers and
/// prints the result
#[derive(Debug, Parser)]
struct Args {
    /// Container to operate on
    #[arg(short, long, value_enum, default_value_t = ContainerKind::Array)]
    container: ContainerKind,
    /// Initial capacity hint for the dynamic array
    #[arg(long, default_value_t = 16)]
    capacity: usize,
    /// Path to a TOML file with a `[growth]` table
    #[arg(long, env = "SEQCTL_CONFIG")]
    config: Option<PathBuf>,
    /// Print the container after every operation
    #[arg(short, long)]
    verbose: bool,
    /// Operations to apply in order, e.g. "push 10" "remove-at 0"
    ops: Vec<String>,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
enum ContainerKind {
    /// Dynamic array, back insertion only
    Array,
    /// Singly linked list
    List,
    /// Doubly linked list
    Dlist,
}

enum AnyContainer {
    Array(DynamicArray<i64>),
    List(SinglyLinkedList<i64>),
    Dlist(DoublyLinkedList<i64>),
}

impl AnyContainer {
    fn new(kind: ContainerKind, capacity: usize, growth: GrowthPolicy) -> miette::Result<Self> {
        Ok(match kind {
            ContainerKind::Array => AnyContainer::Array(
                DynamicArray::with_policy(capacity, growth).into_diagnostic()?,
            ),
            ContainerKind::List => AnyContainer::List(SinglyLinkedList::new()),
            ContainerKind::Dlist => AnyContainer::Dlist(DoublyLinkedList::new()),
        })
    }

    fn apply(&mut self, op: SequenceOperation<i64>) -> Result<Option<i64>, ApplyError> {
        match self {
            AnyContainer::Array(array) => op.apply(array),
            AnyContainer::List(list) => op.apply_deque(list),
            AnyContainer::Dlist(list) => op.apply_deque(list),
        }
    }

    fn render(&self) -> String {
        match self {
            AnyContainer::Array(array) => render_chain(array),
            AnyContainer::List(list) => render_chain(list),
            AnyContainer::Dlist(list) => render_chain(list),
        }
    }

    fn len(&self) -> usize {
        match self {
            AnyContainer::Array(array) => array.len(),
            AnyContainer::List(list) => list.len(),
            AnyContainer::Dlist(list) => list.len(),
        }
    }
}

pub fn main() -> miette::Result<()> {
    let subscriber = tracing_subscriber::Registry::default()
        .with(tracing_subscriber::fmt::Layer::default().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env());

    tracing::subscriber::set_global_default(subscriber).into_diagnostic()?;

    color_backtrace::install();
    let prev_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        panic_hook(panic_info);
        prev_hook(panic_info);
    }));

    m_try(|| {
        let Args {
            container,
            capacity,
            config,
            verbose,
            ops,
        } = Args::parse();

        let config = match config {
            Some(path) => SeqctlConfig::from_path(path)?,
            None => SeqctlConfig::default(),
        };

        let mut target = AnyContainer::new(container, capacity, config.growth)?;
        info!(?container, ops = ops.len(), "running script");

        for raw in &ops {
            let op: SequenceOperation<i64> = raw
                .parse()
                .with_context(|| format!("failed to parse operation `{raw}`"))?;
            let removed = target
                .apply(op)
                .with_context(|| format!("operation `{raw}` failed"))?;

            if let Some(value) = removed {
                println!("{raw}: removed {value}");
            }
            if verbose {
                println!("{raw}: {}", target.render());
            }
        }

        println!("{}", target.render());
        print!("size: {}", target.len());
        if let AnyContainer::Array(array) = &target {
            print!(", capacity: {}", array.capacity());
        }
        println!();

        Ok(())
    })
    .context("seqctl failed")
}

/// Helper for wrapping a code block to help with contextualizing errors
#[inline(always)]
pub(crate) fn m_try<T>(func: impl FnOnce() -> miette::Result<T>) -> miette::Result<T> {
    func()
}
