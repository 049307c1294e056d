//! Tick List - a priority-sorted to-do widget for the browser
//!
//! Core modules:
//! - `store`: Pure to-do data model (items, ordering, mutations)
//! - `storage`: LocalStorage persistence bridge
//!
//! The DOM shell lives in the binary; everything here is platform-free and
//! testable natively.

pub mod storage;
pub mod store;

pub use store::{EditState, Priority, TodoItem, TodoList};
