//! blockfall (workspace facade crate).
//!
//! Re-exports the member crates under short names so the binary, integration
//! tests and benchmarks can write `blockfall::core::Session` and friends.

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;
