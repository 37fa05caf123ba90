//! Storage abstractions for service layer
//!
//! Contains the reusable in-memory map store shared by every resource kind.

pub mod mem_store;
