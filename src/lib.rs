#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::pedantic::large_types_passed_by_value
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_docs_in_private_items,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

mod chain;
mod debugging;
mod names;
mod object_pool;
mod pool;
mod primordials;
mod result;
mod values;

extern crate ahash;
extern crate anyhow;
extern crate colored;
extern crate log;
extern crate stash;

pub use debugging::{DebugRepresentation, DebugWithRealm, Renderer, Representation, Unwrap, WithRealm};
pub use names::Name;
pub use object_pool::ObjectPointer;
pub use primordials::{Constants, Realm};
pub use result::{ChainError, ChainResult, InternalError};
pub use values::function::{NativeFn, NativeFunction};
pub use values::value::Value;
