//! Configuration loader and schema types.
//!
//! Silence-search tunables, the encoder program and the output directory
//! layout all come from here; the loader merges file and environment
//! sources over the calibrated defaults.

mod load;
mod schema;

pub use schema::*;
