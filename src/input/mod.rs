// src/input/mod.rs
//! Input resolution: a (source, representation) pair becomes a `Value`.

mod resolver;
mod types;

pub use resolver::InputResolver;
pub use types::{InputKind, Source, Value};
