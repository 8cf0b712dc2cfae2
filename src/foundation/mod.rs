//! Shared primitives: frame/time types, canvas, colors and the crate error taxonomy.

pub(crate) mod core;
pub(crate) mod error;
