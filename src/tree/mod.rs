//! Nested catalog model and the pure operations over it.
//!
//! - `value`: the `Tree` / `Value` data types
//! - `flatten`: dotted key-path extraction (the diffable key-space)
//! - `path`: get/set by dotted key-path
//! - `codec`: JSON load/save of a whole catalog file

pub mod codec;
mod flatten;
mod path;
mod value;

pub use flatten::{flatten, KeyPath};
pub use path::{get_path, set_path};
pub use value::{Tree, Value};
