//! To-do data model
//!
//! All list state and mutation rules live here. This module must stay pure:
//! - No DOM or platform dependencies
//! - Stable ordering (priority buckets, insertion order within a bucket)
//! - Serializable end to end

pub mod item;
pub mod list;

pub use item::{Priority, TodoItem};
pub use list::{EditState, TodoList};
