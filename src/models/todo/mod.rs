//! Todo checklist model.
//!
//! Items are created from a fixed literal list when the screen is built and
//! live only as long as the screen does. The only mutation is toggling the
//! completed flag of a single item.

use serde::{Deserialize, Serialize};

/// A single checklist entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Unique, stable identifier within its list
    pub id: u32,
    pub text: String,
    pub completed: bool,
}

impl TodoItem {
    pub fn new(id: u32, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }

    pub fn completed(mut self) -> Self {
        self.completed = true;
        self
    }
}

/// Ordered, in-memory checklist.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoList {
    items: Vec<TodoItem>,
}

impl TodoList {
    /// Build a list from literal items. Items reusing an earlier id are
    /// dropped so ids stay unique.
    pub fn from_items(items: impl IntoIterator<Item = TodoItem>) -> Self {
        let mut unique: Vec<TodoItem> = Vec::new();
        for item in items {
            if unique.iter().any(|existing| existing.id == item.id) {
                log::warn!("Dropping todo item with duplicate id {}", item.id);
                continue;
            }
            unique.push(item);
        }
        Self { items: unique }
    }

    /// The four-item interactive checklist; item 2 starts completed.
    pub fn daily_checklist() -> Self {
        Self::from_items([
            TodoItem::new(1, "동대구시장까지 1시간 산책하기"),
            TodoItem::new(2, "자기 전 30분 명상하기").completed(),
            TodoItem::new(3, "물 8잔 마시기"),
            TodoItem::new(4, "30분 독서하기"),
        ])
    }

    /// The two-item read-only draft list.
    pub fn draft_checklist() -> Self {
        Self::from_items([
            TodoItem::new(1, "동대구시장까지 1시간 산책하기"),
            TodoItem::new(2, "자기 전 30분 명상하기"),
        ])
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&TodoItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Flip the completed flag of the item with `id`.
    ///
    /// Returns `false` when no such item exists; the list is left untouched.
    pub fn toggle(&mut self, id: u32) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.completed = !item.completed;
                log::debug!("Todo {} completed={}", id, item.completed);
                true
            }
            None => false,
        }
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|item| item.completed).count()
    }
}
