//! Basic list usage example
//!
//! Run with `RUST_LOG=debug` to see the structural changes logged.

use chainlist_core::{LinkedList, ListError};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("Chainlist Basic Usage Example\n");

    let mut tasks = LinkedList::from_values(["parse", "check", "emit"]);
    tasks.prepend(["lex"]);
    tasks.insert(3, ["optimize"])?;
    println!("Pipeline: {:?}", tasks);

    tasks.swap(0, 1)?;
    println!("After swap(0, 1): {:?}", tasks);
    let removed = tasks.remove(tasks.index_of(&"check")?)?;
    println!("Removed {:?}, first = {}, last = {}", removed, tasks.first()?, tasks.last()?);

    match tasks.get(10) {
        Err(ListError::IndexOutOfBounds { index, size }) => {
            println!("get({}) rejected: list has {} elements", index, size)
        }
        other => println!("unexpected: {:?}", other),
    }

    println!("Contains lex and emit: {}", tasks.contains(["lex", "emit"]));

    tasks.clear();
    println!("After clear: {:?} (empty = {})", tasks, tasks.is_empty());

    Ok(())
}
