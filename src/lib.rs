//! termtris (workspace facade crate).
//!
//! Re-exports the workspace crates as `termtris::{core,input,store,term,types}`;
//! the implementation lives in dedicated crates under `crates/`.

pub use termtris_core as core;
pub use termtris_input as input;
pub use termtris_store as store;
pub use termtris_term as term;
pub use termtris_types as types;
