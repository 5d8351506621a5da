//! Small, independent, generic helpers: grouped counting, cyclic value
//! sources, deep copies, flattening and a LIFO stack.

pub mod constants;
pub mod error;
pub mod utils;

pub use error::{Result, UtilError};
