//! Service layer holding authoritative in-memory state for each resource kind.
//! - One generic map store, instantiated per resource.
//! - CRUD semantics safe under concurrent callers.
//! - Clear error types surfaced unchanged to the HTTP boundary.

pub mod errors;
pub mod storage;
pub mod todo;
pub mod category;

pub use errors::ServiceError;
pub use storage::mem_store::{MemStore, Record};
