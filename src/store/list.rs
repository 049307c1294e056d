//! The authoritative to-do list and its mutation rules
//!
//! Every mutation re-sorts the list by priority. The sort is stable, so
//! items of equal priority keep their relative order across mutations.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::item::{Priority, TodoItem};

/// The ordered to-do list
///
/// Serializes transparently as the bare item array, so the stored blob keeps
/// the format the widget has always written. The id counter is rebuilt from
/// the stored ids on load.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoList {
    items: Vec<TodoItem>,
    #[serde(skip)]
    next_id: u32,
}

impl TodoList {
    /// Create an empty list
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new item id
    fn next_item_id(&mut self) -> u32 {
        if self.next_id == 0 {
            self.next_id = 1;
        }
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Append a new item and re-sort
    ///
    /// Text that is blank after trimming is rejected; the list is unchanged
    /// and `None` is returned. Otherwise returns the new item's id.
    pub fn add(&mut self, text: &str, priority: Priority) -> Option<u32> {
        if text.trim().is_empty() {
            return None;
        }
        let id = self.next_item_id();
        self.items.push(TodoItem {
            id,
            text: text.to_string(),
            completed: false,
            priority,
        });
        self.sort();
        Some(id)
    }

    /// Remove the item with the given id
    ///
    /// Unknown ids are a silent no-op returning `false`.
    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        let changed = self.items.len() != before;
        if changed {
            self.sort();
        }
        changed
    }

    /// Replace text and priority on the item with the given id, then re-sort
    ///
    /// Blank-after-trim text or an unknown id is a silent no-op returning
    /// `false`. The completed flag is left untouched.
    pub fn save_edit(&mut self, id: u32, text: &str, priority: Priority) -> bool {
        if text.trim().is_empty() {
            return false;
        }
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.text = text.to_string();
                item.priority = priority;
                self.sort();
                true
            }
            None => false,
        }
    }

    /// Flip the completed flag on the item with the given id, then re-sort
    pub fn toggle_completed(&mut self, id: u32) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.completed = !item.completed;
                self.sort();
                true
            }
            None => false,
        }
    }

    /// Clear the list
    pub fn reset(&mut self) {
        self.items.clear();
    }

    /// Stable sort by priority rank, High first
    pub fn sort(&mut self) {
        self.items.sort_by_key(|item| item.priority.rank());
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Count of items not yet completed
    pub fn remaining(&self) -> usize {
        self.items.iter().filter(|item| !item.completed).count()
    }

    /// Look up an item by id
    pub fn get(&self, id: u32) -> Option<&TodoItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Items in display order
    pub fn iter(&self) -> impl Iterator<Item = &TodoItem> {
        self.items.iter()
    }

    /// Serialize to the stored blob format (a JSON array of items)
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Deserialize from the stored blob format and restore invariants
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let mut list: Self = serde_json::from_str(json)?;
        list.normalize();
        Ok(list)
    }

    /// Restore invariants after deserializing
    ///
    /// Blobs from the pre-id widget carry no ids (they parse as 0), and a
    /// hand-edited blob could carry duplicates or `u32::MAX`. If every id is
    /// nonzero, unique, and leaves headroom for the counter, they are kept
    /// and the counter resumes past the highest; otherwise the whole list is
    /// renumbered from 1. Ids only identify items within the running
    /// process, so a load-time renumber loses nothing. The ordering
    /// invariant is re-established either way.
    fn normalize(&mut self) {
        let mut seen = HashSet::new();
        let healthy = self
            .items
            .iter()
            .all(|item| item.id != 0 && item.id != u32::MAX && seen.insert(item.id));
        if healthy {
            self.next_id = self.items.iter().map(|item| item.id).max().unwrap_or(0) + 1;
        } else {
            for (index, item) in self.items.iter_mut().enumerate() {
                item.id = index as u32 + 1;
            }
            self.next_id = self.items.len() as u32 + 1;
        }
        self.sort();
    }
}

/// Transient edit-mode state
///
/// Tracks which item (by id) is being revised and the draft text/priority
/// captured when the edit began. Beginning and cancelling an edit never
/// mutate the list.
#[derive(Debug, Clone, Default)]
pub struct EditState {
    target: Option<u32>,
    pub text: String,
    pub priority: Priority,
}

impl EditState {
    /// Enter edit mode for an item, capturing its current text and priority
    pub fn begin(&mut self, item: &TodoItem) {
        self.target = Some(item.id);
        self.text = item.text.clone();
        self.priority = item.priority;
    }

    /// Replace the draft values
    ///
    /// The UI mirrors the live field contents here before a re-render, so
    /// mutations elsewhere in the list don't discard in-progress typing.
    pub fn update_draft(&mut self, text: &str, priority: Priority) {
        if self.target.is_some() {
            self.text = text.to_string();
            self.priority = priority;
        }
    }

    /// Exit edit mode, discarding the draft
    pub fn cancel(&mut self) {
        *self = Self::default();
    }

    /// Id of the item being edited, if any
    pub fn target(&self) -> Option<u32> {
        self.target
    }

    pub fn is_editing(&self, id: u32) -> bool {
        self.target == Some(id)
    }
}
